use dioxus::prelude::*;

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Table header section, wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

/// Table body section.
#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Column header cell.
#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

/// Table row.
#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

/// Table data cell.
#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Full-width placeholder row for empty tables.
#[component]
pub fn DataTableEmptyRow(colspan: i64, children: Element) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan, {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_renders_header_and_body_structure() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Name" }
                        DataTableColumn { "Status" }
                    }
                    DataTableBody {
                        DataTableRow {
                            DataTableCell { "Alpha" }
                            DataTableCell { "Active" }
                        }
                    }
                }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("<thead>"));
        assert!(html.contains("<th>Name</th>"));
        assert!(html.contains("<tbody>"));
        assert!(html.contains("<td>Alpha</td>"));
    }

    #[test]
    fn empty_row_spans_requested_columns() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                DataTable {
                    DataTableBody {
                        DataTableEmptyRow { colspan: 6, "No projects found." }
                    }
                }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("colspan=\"6\""));
        assert!(html.contains("No projects found."));
    }
}
