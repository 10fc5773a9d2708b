use dioxus::prelude::*;

/// Styled text input.
#[component]
pub fn Input(
    #[props(default = String::from("text"))] input_type: String,
    #[props(default)] id: Option<String>,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] value: String,
    #[props(default)] on_input: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            class: "input",
            r#type: "{input_type}",
            id,
            placeholder,
            value: "{value}",
            oninput: move |evt| {
                if let Some(handler) = &on_input {
                    handler.call(evt);
                }
            },
        }
    }
}

/// Styled multi-line text input.
#[component]
pub fn Textarea(
    #[props(default)] id: Option<String>,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] value: String,
    #[props(default)] on_input: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        textarea {
            class: "input input-textarea",
            id,
            placeholder,
            value: "{value}",
            oninput: move |evt| {
                if let Some(handler) = &on_input {
                    handler.call(evt);
                }
            },
        }
    }
}
