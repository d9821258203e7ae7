use dioxus::prelude::*;

#[component]
pub fn Spinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div { class: "spinner", role: "status",
            div { class: "spinner__ring" }
            span { class: "spinner__label", "{label}" }
        }
    }
}
