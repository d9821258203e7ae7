use dioxus::prelude::*;

/// Labelled text input. The label is omitted when empty.
#[component]
pub fn Input(
    #[props(default = "".to_string())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] label: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] name: String,
    #[props(default)] disabled: bool,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div { class: "field {class}",
            if !label.is_empty() {
                label { class: "field__label", r#for: "{name}", "{label}" }
            }
            input {
                class: "field__input",
                id: "{name}",
                name: "{name}",
                r#type: "{r#type}",
                placeholder: "{placeholder}",
                disabled,
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}
