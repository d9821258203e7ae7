use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeKind {
    Error,
    Success,
    Info,
}

/// Inline banner for validation errors and confirmations.
#[component]
pub fn Notice(kind: NoticeKind, message: String) -> Element {
    let modifier = match kind {
        NoticeKind::Error => "notice--error",
        NoticeKind::Success => "notice--success",
        NoticeKind::Info => "notice--info",
    };
    rsx! {
        div { class: "notice {modifier}", role: "alert", "{message}" }
    }
}
