use dioxus::prelude::*;
use shared_types::CreateProjectRequest;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
    Label, Textarea,
};

use super::list::LOGIN_REQUIRED_MESSAGE;
use crate::api;
use crate::routes::Route;
use crate::session;

pub const CREATE_FAILED_MESSAGE: &str = "Error creating project.";

/// Project creation form, reachable only through the role-gated button on
/// the list page. The backend still enforces authorization; this page just
/// submits and goes back to the list on success.
#[component]
pub fn ProjectCreatePage() -> Element {
    let stored = use_hook(session::read_session);
    let has_token = stored.has_token();

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        saving.set(true);
        error_msg.set(None);

        let token = session::read_session().token.unwrap_or_default();
        let request = CreateProjectRequest {
            project_name: name(),
            project_description: description(),
        };

        match api::create_project(&token, &request).await {
            Ok(()) => {
                navigator().push(Route::Projects {});
            }
            Err(err) => {
                tracing::error!("error creating project: {err}");
                error_msg.set(Some(CREATE_FAILED_MESSAGE.to_string()));
            }
        }
        saving.set(false);
    };

    if !has_token {
        return rsx! {
            div { class: "container",
                p { class: "fetch-error", "{LOGIN_REQUIRED_MESSAGE}" }
            }
        };
    }

    rsx! {
        div { class: "container",
            Card { class: "create-card",
                CardHeader {
                    CardTitle { "Create Project" }
                    CardDescription { "Add a new project to the workspace." }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        p { class: "fetch-error", "{err}" }
                    }

                    form { onsubmit: handle_submit,
                        div { class: "form-field",
                            Label { html_for: "project_name", "Project Name" }
                            Input {
                                id: "project_name",
                                placeholder: "Name",
                                value: name(),
                                on_input: move |e: FormEvent| name.set(e.value()),
                            }
                        }
                        div { class: "form-field",
                            Label { html_for: "project_description", "Description" }
                            Textarea {
                                id: "project_description",
                                placeholder: "What is this project about?",
                                value: description(),
                                on_input: move |e: FormEvent| description.set(e.value()),
                            }
                        }
                        div { class: "form-actions",
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| {
                                    navigator().push(Route::Projects {});
                                },
                                "Cancel"
                            }
                            Button {
                                button_type: "submit",
                                variant: ButtonVariant::Primary,
                                disabled: saving(),
                                if saving() { "Creating..." } else { "Create Project" }
                            }
                        }
                    }
                }
            }
        }
    }
}
