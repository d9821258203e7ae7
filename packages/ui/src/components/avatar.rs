use dioxus::prelude::*;

/// Round picture, or the name's initials when there is none.
#[component]
pub fn Avatar(
    name: String,
    #[props(default)] image: Option<String>,
    #[props(default = "".to_string())] class: String,
) -> Element {
    match image.filter(|url| !url.is_empty()) {
        Some(url) => rsx! {
            img { class: "avatar {class}", src: "{url}", alt: "{name}" }
        },
        None => {
            let initials = store::models::initials(&name);
            rsx! {
                span { class: "avatar avatar--initials {class}", title: "{name}", "{initials}" }
            }
        }
    }
}
