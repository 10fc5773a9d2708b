pub mod login;
pub mod not_found;
pub mod projects;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFolder, LdPlus};
use dioxus_free_icons::Icon;
use shared_ui::{
    Navbar, Sidebar, SidebarContent, SidebarFooter, SidebarHeader, SidebarInset, SidebarMenu,
    SidebarMenuButton, SidebarMenuItem, SidebarSeparator,
};

use crate::session::use_session;
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AppShell)]
    #[route("/")]
    Projects {},
    #[route("/projects/new")]
    CreateProject {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Application shell: sidebar plus a scrollable content region.
///
/// The stored role is re-read after every navigation, so a login or logout
/// in the external portal is picked up on the next route change. The login
/// route lives outside this layout and never shows the sidebar.
#[component]
fn AppShell() -> Element {
    let route: Route = use_route();
    let mut session = use_session();

    use_effect(use_reactive!(|route| {
        let _ = &route;
        session.refresh();
    }));

    // First storage read still pending
    if session.is_loading() {
        return rsx! {
            div { class: "shell-loading",
                p { "Loading..." }
            }
        };
    }

    let snapshot = session.snapshot();
    let show_sidebar = snapshot.has_role() && !matches!(route, Route::Login {});

    let page_title = match &route {
        Route::Projects {} => "Projects",
        Route::CreateProject {} => "Create Project",
        Route::Login {} => "Sign In",
        Route::NotFound { .. } => "Not Found",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "shell",
            if show_sidebar {
                AppSidebar {
                    route: route.clone(),
                    is_super_admin: snapshot.is_super_admin(),
                }
            }

            SidebarInset {
                Navbar {
                    span { class: "navbar-title", "{page_title}" }
                }
                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Navigation sidebar. The create entry is shown only to super admins;
/// everything else is visible to any stored role.
#[component]
fn AppSidebar(route: Route, is_super_admin: bool) -> Element {
    rsx! {
        Sidebar {
            SidebarHeader {
                span { class: "sidebar-brand", "Activus" }
            }

            SidebarSeparator {}

            SidebarContent {
                SidebarMenu {
                    SidebarMenuItem {
                        Link { to: Route::Projects {},
                            SidebarMenuButton { active: matches!(route, Route::Projects {}),
                                Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 }
                                "Projects"
                            }
                        }
                    }
                    if is_super_admin {
                        SidebarMenuItem {
                            Link { to: Route::CreateProject {},
                                SidebarMenuButton { active: matches!(route, Route::CreateProject {}),
                                    Icon::<LdPlus> { icon: LdPlus, width: 18, height: 18 }
                                    "Create Project"
                                }
                            }
                        }
                    }
                }
            }

            SidebarFooter {
                span { "Activus Dashboard" }
            }
        }
    }
}

#[component]
fn Projects() -> Element {
    projects::list::ProjectListPage()
}

#[component]
fn CreateProject() -> Element {
    projects::create::ProjectCreatePage()
}
