use dioxus::prelude::*;
use shared_types::{Project, Session};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmptyRow, DataTableHeader, DataTableRow, PageActions, PageHeader,
    PageTitle, Skeleton,
};

use crate::api;
use crate::format_helpers::format_created_at;
use crate::routes::Route;
use crate::session;

pub const LOGIN_REQUIRED_MESSAGE: &str = "You must log in to view projects.";
pub const FETCH_FAILED_MESSAGE: &str = "Error fetching projects.";

/// Project list page.
///
/// Storage is read once at mount, matching the shell's "fetch on entry"
/// behavior; a login in another tab takes effect on the next visit. The
/// fetch is not cancelled if the user navigates away before it resolves.
#[component]
pub fn ProjectListPage() -> Element {
    let stored = use_hook(session::read_session);
    let can_create = stored.is_super_admin();
    let gate = token_for_request(&stored);

    let projects = use_resource(move || {
        let gate = gate.clone();
        async move {
            let token = gate?;
            match api::fetch_projects(&token).await {
                Ok(list) => Ok(list),
                Err(err) => {
                    tracing::error!("error fetching projects: {err}");
                    Err(FETCH_FAILED_MESSAGE.to_string())
                }
            }
        }
    });

    rsx! {
        div { class: "container",
            ProjectsHeader { can_create }

            match &*projects.read() {
                Some(Ok(list)) => rsx! {
                    ProjectTable { projects: list.clone() }
                },
                // Errors are non-fatal: show the message and an empty table
                Some(Err(message)) => rsx! {
                    p { class: "fetch-error", "{message}" }
                    ProjectTable { projects: Vec::new() }
                },
                None => rsx! {
                    div { class: "loading",
                        Skeleton {}
                        Skeleton {}
                        Skeleton {}
                    }
                },
            }
        }
    }
}

/// Gate for the list request. Without a usable token the fetch never
/// happens; the page shows the login-required message instead.
fn token_for_request(session: &Session) -> Result<String, String> {
    match session.token.as_deref() {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(LOGIN_REQUIRED_MESSAGE.to_string()),
    }
}

/// Page header with the role-gated create affordance.
#[component]
fn ProjectsHeader(can_create: bool) -> Element {
    rsx! {
        PageHeader {
            PageTitle { "Projects" }
            if can_create {
                PageActions {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            navigator().push(Route::CreateProject {});
                        },
                        "+ Create Project"
                    }
                }
            }
        }
    }
}

/// Six-column project table. Zero projects render as a single full-width
/// placeholder row.
#[component]
fn ProjectTable(projects: Vec<Project>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Project Name" }
                DataTableColumn { "Description" }
                DataTableColumn { "Status" }
                DataTableColumn { "Created On" }
                DataTableColumn { "Stakeholder" }
                DataTableColumn { "Team Members" }
            }
            DataTableBody {
                if projects.is_empty() {
                    DataTableEmptyRow { colspan: 6, "No projects found." }
                } else {
                    for project in projects {
                        ProjectRow { project }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectRow(project: Project) -> Element {
    let created = format_created_at(&project.created_at);
    let stakeholder = project.stakeholder_name().to_string();
    let role_lines = project.role_lines();

    rsx! {
        DataTableRow {
            DataTableCell { "{project.project_name}" }
            DataTableCell { "{project.project_description}" }
            DataTableCell {
                // Status is not modeled by the API yet
                Badge { variant: BadgeVariant::Success, "Active" }
            }
            DataTableCell { "{created}" }
            DataTableCell { "{stakeholder}" }
            DataTableCell {
                if role_lines.is_empty() {
                    "No roles assigned"
                } else {
                    div { class: "role-list",
                        for (role, names) in role_lines {
                            div { class: "role-line",
                                span { class: "role-name", "{role}: " }
                                span { class: "role-users", "{names}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ProjectUser;
    use std::collections::HashMap;

    fn project(name: &str) -> Project {
        Project {
            project_id: format!("id-{name}"),
            project_name: name.to_string(),
            project_description: format!("{name} description"),
            created_at: "2026-01-20T21:35:00Z".to_string(),
            stakeholder: None,
            role_users: HashMap::new(),
        }
    }

    fn render(element: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(element);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn table_renders_one_row_per_project_plus_header() {
        let html = render(|| {
            rsx! {
                ProjectTable { projects: vec![project("Alpha"), project("Beta")] }
            }
        });

        assert_eq!(html.matches("<tr").count(), 3);
        assert!(html.contains("Alpha"));
        assert!(html.contains("Beta"));
        assert!(!html.contains("No projects found."));
    }

    #[test]
    fn empty_table_renders_placeholder_row() {
        let html = render(|| {
            rsx! {
                ProjectTable { projects: Vec::new() }
            }
        });

        assert_eq!(html.matches("<tr").count(), 2); // header + placeholder
        assert!(html.contains("colspan=\"6\""));
        assert!(html.contains("No projects found."));
    }

    #[test]
    fn row_shows_placeholders_for_missing_stakeholder_and_roles() {
        let html = render(|| {
            rsx! {
                ProjectTable { projects: vec![project("Alpha")] }
            }
        });

        assert!(html.contains("N/A"));
        assert!(html.contains("No roles assigned"));
        assert!(html.contains("Active"));
        assert!(html.contains("Jan 20, 2026, 09:35 PM"));
    }

    #[test]
    fn role_lines_render_in_sorted_order() {
        let html = render(|| {
            let mut p = project("Alpha");
            p.role_users.insert(
                "Tester".to_string(),
                vec![ProjectUser { username: "tara".into() }],
            );
            p.role_users.insert(
                "Analyst".to_string(),
                vec![
                    ProjectUser { username: "ivan".into() },
                    ProjectUser { username: "joy".into() },
                ],
            );
            rsx! {
                ProjectTable { projects: vec![p] }
            }
        });

        let analyst = html.find("Analyst").unwrap();
        let tester = html.find("Tester").unwrap();
        assert!(analyst < tester);
        assert!(html.contains("ivan, joy"));
    }

    #[test]
    fn missing_token_yields_login_message_instead_of_a_request() {
        // The fetch only runs on the Ok path, so an Err here means no
        // request is ever issued.
        let signed_out = Session::new(None, Some("MEMBER".into()));
        assert_eq!(
            token_for_request(&signed_out),
            Err(LOGIN_REQUIRED_MESSAGE.to_string())
        );

        let blank_token = Session::new(Some(String::new()), None);
        assert_eq!(
            token_for_request(&blank_token),
            Err(LOGIN_REQUIRED_MESSAGE.to_string())
        );

        let signed_in = Session::new(Some("jwt".into()), None);
        assert_eq!(token_for_request(&signed_in), Ok("jwt".to_string()));
    }

    #[test]
    fn create_button_only_for_super_admin() {
        let with_button = render(|| rsx! { ProjectsHeader { can_create: true } });
        let without_button = render(|| rsx! { ProjectsHeader { can_create: false } });

        assert!(with_button.contains("+ Create Project"));
        assert!(!without_button.contains("+ Create Project"));
    }
}
