use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Separator};

use crate::routes::Route;

/// Sign-in landing page.
///
/// Authentication itself happens in the main Activus portal, which stores
/// `token` and `role` in local storage before sending the browser here.
/// This page only explains that; it never writes the session.
#[component]
pub fn Login() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Use the Activus portal to sign in to your account." }
                }
                CardContent {
                    p { class: "auth-info",
                        "This dashboard reads your session from the browser. "
                        "Once you have signed in through the portal, your projects are ready."
                    }
                    Separator {}
                    Link { to: Route::Projects {}, class: "auth-link", "Go to projects" }
                }
            }
        }
    }
}
