use dioxus::prelude::*;

/// Thin horizontal rule between sections.
#[component]
pub fn Separator() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        hr { class: "separator" }
    }
}
