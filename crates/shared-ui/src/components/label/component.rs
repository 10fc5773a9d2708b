use dioxus::prelude::*;

/// Form field label.
#[component]
pub fn Label(#[props(default)] html_for: Option<String>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "label", r#for: html_for, {children} }
    }
}
