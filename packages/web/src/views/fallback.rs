use dioxus::prelude::*;

#[component]
pub fn ComingSoon() -> Element {
    rsx! {
        div { class: "page-center",
            h1 { "Coming Soon" }
            p { "We're working on something new. Check back shortly." }
            Link { class: "btn btn--primary", to: "/", "Back to Home" }
        }
    }
}

#[component]
pub fn Unauthorized() -> Element {
    rsx! {
        div { class: "page-center",
            h1 { "Access Denied" }
            p { "You don't have permission to access this resource." }
            Link { class: "btn btn--primary", to: "/", "Back to Home" }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!("No route for {}", path);
    rsx! {
        div { class: "page-center",
            h1 { "404" }
            h2 { "Page Not Found" }
            p { "Nothing lives at " code { "{path}" } "." }
            Link { class: "btn btn--primary", to: "/", "Back to Home" }
        }
    }
}
