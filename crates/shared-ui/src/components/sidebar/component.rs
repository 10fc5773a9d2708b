use dioxus::prelude::*;

/// Fixed-width navigation sidebar. Rendered (or not) by the caller; the
/// component itself carries no visibility logic.
#[component]
pub fn Sidebar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        aside { class: "sidebar", {children} }
    }
}

/// Header section inside the Sidebar, typically the brand name.
#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

/// Scrollable content area of the Sidebar.
#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-content", {children} }
    }
}

/// Footer section inside the Sidebar.
#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

/// Navigation menu list inside the sidebar.
#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

/// A single item in a SidebarMenu.
#[component]
pub fn SidebarMenuItem(children: Element) -> Element {
    rsx! {
        li { class: "sidebar-menu-item", {children} }
    }
}

/// Interactive button within a SidebarMenuItem.
#[component]
pub fn SidebarMenuButton(#[props(default = false)] active: bool, children: Element) -> Element {
    rsx! {
        span {
            class: "sidebar-menu-button",
            "data-active": if active { "true" } else { "false" },
            {children}
        }
    }
}

/// Visual separator line inside the sidebar.
#[component]
pub fn SidebarSeparator() -> Element {
    rsx! {
        hr { class: "sidebar-separator" }
    }
}

/// The main content area that sits alongside the Sidebar. Scrolls
/// independently so the sidebar stays pinned.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_button_marks_active_state() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                SidebarMenu {
                    SidebarMenuItem {
                        SidebarMenuButton { active: true, "Projects" }
                    }
                    SidebarMenuItem {
                        SidebarMenuButton { "Create Project" }
                    }
                }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("data-active=\"true\""));
        assert!(html.contains("data-active=\"false\""));
    }
}
