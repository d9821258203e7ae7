//! Pieces shared by the admin and master dashboards.

use api::models::{EventDraft, EventRecord, EventTime};
use api::ApiError;
use dioxus::prelude::*;
use store::SessionStore;
use ui::components::{Button, ButtonVariant, Input, Notice, NoticeKind, Spinner};
use ui::failure_message;

/// Banner message shown above a dashboard panel.
pub(crate) type Flash = Signal<Option<(NoticeKind, String)>>;

/// What a dashboard resource resolves to. `Err(None)` means the session
/// expired and the page is already on its way to the login screen.
pub(crate) type Loaded<T> = Result<T, Option<String>>;

pub(crate) fn loaded<T>(
    auth: Signal<SessionStore>,
    result: Result<T, ApiError>,
    fallback: &str,
) -> Loaded<T> {
    result.map_err(|err| failure_message(auth, &err, fallback))
}

/// Unwrap a resource snapshot, or produce the placeholder to render instead.
pub(crate) fn ready<T>(state: Option<Loaded<T>>, label: &str) -> Result<T, Element> {
    match state {
        None => Err(rsx! { Spinner { label: label.to_string() } }),
        Some(Err(Some(message))) => Err(rsx! { Notice { kind: NoticeKind::Error, message } }),
        Some(Err(None)) => Err(rsx! {}),
        Some(Ok(value)) => Ok(value),
    }
}

/// Show the outcome of a mutation in `flash` and hand back the value on success.
pub(crate) fn report<T>(
    auth: Signal<SessionStore>,
    mut flash: Flash,
    result: Result<T, ApiError>,
    success: &str,
    fallback: &str,
) -> Option<T> {
    match result {
        Ok(value) => {
            flash.set(Some((NoticeKind::Success, success.to_string())));
            Some(value)
        }
        Err(err) => {
            tracing::warn!("{}: {}", fallback, err);
            if let Some(message) = failure_message(auth, &err, fallback) {
                flash.set(Some((NoticeKind::Error, message)));
            }
            None
        }
    }
}

#[component]
pub(crate) fn FlashBanner(flash: Flash) -> Element {
    let mut flash = flash;
    let Some((kind, message)) = flash() else {
        return rsx! {};
    };
    rsx! {
        div { class: "flash",
            Notice { kind, message }
            button {
                class: "flash__dismiss",
                r#type: "button",
                aria_label: "Dismiss",
                onclick: move |_| flash.set(None),
                "×"
            }
        }
    }
}

/// "a, b , ,c" -> ["a", "b", "c"]
pub(crate) fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Blank means unlimited. Zero and garbage are rejected.
pub(crate) fn parse_capacity(raw: &str) -> Result<Option<u32>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<u32>() {
        Ok(0) | Err(_) => Err("Capacity must be a positive number"),
        Ok(n) => Ok(Some(n)),
    }
}

/// Prefill for editing an existing event.
pub(crate) fn draft_of(event: &EventRecord) -> EventDraft {
    EventDraft {
        title: event.title.clone(),
        description: event.description.clone(),
        cluster: None,
        event_type: event.event_type.clone(),
        date: event
            .date
            .as_deref()
            .map(|d| d.chars().take(10).collect())
            .unwrap_or_default(),
        time: event.time.clone(),
        location: event.location.clone().unwrap_or_default(),
        capacity: event.capacity,
        tags: event.tags.clone(),
    }
}

/// Create/edit form for an event.
#[component]
pub(crate) fn EventForm(
    initial: EventDraft,
    heading: String,
    #[props(default)] busy: bool,
    on_submit: EventHandler<EventDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut title = use_signal(|| initial.title.clone());
    let mut description = use_signal(|| initial.description.clone());
    let mut event_type = use_signal(|| initial.event_type.clone().unwrap_or_default());
    let mut date = use_signal(|| initial.date.clone());
    let mut start = use_signal(|| initial.time.start.clone());
    let mut end = use_signal(|| initial.time.end.clone());
    let mut location = use_signal(|| initial.location.clone());
    let mut capacity = use_signal(|| initial.capacity.map(|c| c.to_string()).unwrap_or_default());
    let mut tags = use_signal(|| initial.tags.join(", "));
    let mut error = use_signal(|| Option::<String>::None);
    let cluster = initial.cluster.clone();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let capacity = match parse_capacity(&capacity()) {
            Ok(capacity) => capacity,
            Err(message) => {
                error.set(Some(message.to_string()));
                return;
            }
        };
        let kind = event_type().trim().to_string();
        let draft = EventDraft {
            title: title().trim().to_string(),
            description: description().trim().to_string(),
            cluster: cluster.clone(),
            event_type: Some(kind).filter(|k| !k.is_empty()),
            date: date().trim().to_string(),
            time: EventTime { start: start(), end: end() },
            location: location().trim().to_string(),
            capacity,
            tags: parse_tags(&tags()),
        };
        if let Some(field) = draft.missing_field() {
            error.set(Some(format!("Please fill in the {field}")));
            return;
        }
        error.set(None);
        on_submit.call(draft);
    };

    rsx! {
        form { class: "card manage-form", onsubmit: submit,
            h3 { "{heading}" }
            if let Some(message) = error() {
                Notice { kind: NoticeKind::Error, message }
            }
            Input { name: "title", label: "Title", value: title(), oninput: move |e: FormEvent| title.set(e.value()) }
            label { class: "field",
                span { class: "field__label", "Description" }
                textarea {
                    class: "field__input",
                    rows: 4,
                    value: "{description}",
                    oninput: move |e: FormEvent| description.set(e.value()),
                }
            }
            div { class: "grid grid--2",
                Input { name: "type", label: "Type", placeholder: "Workshop, Hackathon...", value: event_type(), oninput: move |e: FormEvent| event_type.set(e.value()) }
                Input { name: "date", label: "Date", r#type: "date", value: date(), oninput: move |e: FormEvent| date.set(e.value()) }
                Input { name: "start", label: "Starts", r#type: "time", value: start(), oninput: move |e: FormEvent| start.set(e.value()) }
                Input { name: "end", label: "Ends", r#type: "time", value: end(), oninput: move |e: FormEvent| end.set(e.value()) }
                Input { name: "location", label: "Location", value: location(), oninput: move |e: FormEvent| location.set(e.value()) }
                Input { name: "capacity", label: "Capacity", placeholder: "Unlimited", value: capacity(), oninput: move |e: FormEvent| capacity.set(e.value()) }
            }
            Input { name: "tags", label: "Tags", placeholder: "Comma separated", value: tags(), oninput: move |e: FormEvent| tags.set(e.value()) }
            div { class: "manage-form__actions",
                Button { variant: ButtonVariant::Ghost, onclick: move |_| on_cancel.call(()), "Cancel" }
                Button { r#type: "submit", disabled: busy, if busy { "Saving..." } else { "Save" } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_trims_and_drops_blanks() {
        assert_eq!(parse_tags(" rust, web ,, ai "), vec!["rust", "web", "ai"]);
        assert!(parse_tags("  ").is_empty());
    }

    #[test]
    fn test_draft_of_trims_timestamp_to_date() {
        let event: EventRecord = serde_json::from_value(serde_json::json!({
            "_id": "e1",
            "title": "Rust Night",
            "date": "2025-12-05T18:30:00.000Z",
            "time": { "start": "18:30", "end": "" },
            "tags": ["rust"]
        }))
        .unwrap();
        let draft = draft_of(&event);
        assert_eq!(draft.date, "2025-12-05");
        assert_eq!(draft.time.start, "18:30");
        assert_eq!(draft.location, "");
        assert_eq!(draft.missing_field(), Some("description"));
    }

    #[test]
    fn test_parse_capacity() {
        assert_eq!(parse_capacity(""), Ok(None));
        assert_eq!(parse_capacity(" 40 "), Ok(Some(40)));
        assert!(parse_capacity("0").is_err());
        assert!(parse_capacity("-3").is_err());
        assert!(parse_capacity("many").is_err());
    }
}
