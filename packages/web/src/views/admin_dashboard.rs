//! Club admin console: event management, participants, winners and notices.

use api::models::{EventDraft, EventRecord, NoticeDraft, NoticeRecord, Participant, Winner};
use dioxus::prelude::*;
use store::Role;
use ui::components::{Button, ButtonVariant, Input, NoticeKind};
use ui::format::short_date;
use ui::{use_api, use_auth, ProtectedRoute};

use super::manage::{draft_of, loaded, ready, report, EventForm, Flash, FlashBanner};

/// Podium places an admin can award.
const PLACES: [u32; 3] = [1, 2, 3];

/// Build the winners payload from per-participant placements.
/// Every awarded place must be unique and at least one must be awarded.
pub(crate) fn collect_winners(placements: &[(String, u32)]) -> Result<Vec<Winner>, &'static str> {
    let mut winners: Vec<Winner> = placements
        .iter()
        .filter(|(_, position)| *position > 0)
        .map(|(user_id, position)| Winner {
            user_id: user_id.clone(),
            position: *position,
        })
        .collect();
    if winners.is_empty() {
        return Err("Select at least one winner");
    }
    winners.sort_by_key(|w| w.position);
    if winners.windows(2).any(|pair| pair[0].position == pair[1].position) {
        return Err("Each place can only be awarded once");
    }
    Ok(winners)
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tab {
    Overview,
    Events,
    Notices,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Overview, Tab::Events, Tab::Notices];

    fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Events => "Events",
            Tab::Notices => "Notices",
        }
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        ProtectedRoute { allowed: vec![Role::Admin],
            AdminConsole {}
        }
    }
}

#[component]
fn AdminConsole() -> Element {
    let auth = use_auth();
    let mut tab = use_signal(|| Tab::Overview);
    let flash: Flash = use_signal(|| None);
    let name = auth.read().session().display_name().to_string();

    rsx! {
        div { class: "page dashboard",
            header { class: "page-header",
                h1 { "Admin Dashboard" }
                p { class: "muted", "Signed in as {name}" }
            }
            nav { class: "tabs",
                for t in Tab::ALL {
                    button {
                        key: "{t.label()}",
                        class: if tab() == t { "tab tab--active" } else { "tab" },
                        onclick: move |_| tab.set(t),
                        "{t.label()}"
                    }
                }
            }
            FlashBanner { flash }
            match tab() {
                Tab::Overview => rsx! { Overview {} },
                Tab::Events => rsx! { EventsPanel { flash } },
                Tab::Notices => rsx! { NoticesPanel { flash } },
            }
        }
    }
}

#[component]
fn Overview() -> Element {
    let auth = use_auth();
    let api = use_api();
    let stats = use_resource(move || {
        let api = api.clone();
        async move { loaded(auth, api.admin().stats().await, "Failed to load stats") }
    });
    let stats = match ready(stats.read().clone(), "Loading stats...") {
        Ok(stats) => stats,
        Err(placeholder) => return placeholder,
    };

    rsx! {
        section { class: "grid grid--4",
            div { class: "stat-card", strong { "{stats.total_events}" } p { "Total events" } }
            div { class: "stat-card", strong { "{stats.upcoming_events}" } p { "Upcoming" } }
            div { class: "stat-card", strong { "{stats.total_participants}" } p { "Participants" } }
            div { class: "stat-card", strong { "{stats.total_notices}" } p { "Notices" } }
        }
    }
}

/// Which form, if any, is open in the events panel.
#[derive(Clone, Debug, PartialEq)]
enum EventEditor {
    Closed,
    Create,
    Edit(EventRecord),
}

#[component]
fn EventsPanel(flash: Flash) -> Element {
    let auth = use_auth();
    let api = use_api();
    let mut editor = use_signal(|| EventEditor::Closed);
    let mut selected = use_signal(|| Option::<EventRecord>::None);
    let mut busy = use_signal(|| false);

    let mut events = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { loaded(auth, api.admin().events().await, "Failed to load events") }
        }
    });

    let save = {
        let api = api.clone();
        move |draft: EventDraft| {
            let api = api.clone();
            let target = editor.peek().clone();
            spawn(async move {
                busy.set(true);
                let saved = match &target {
                    EventEditor::Edit(event) => report(
                        auth,
                        flash,
                        api.admin().update_event(&event.id, &draft).await,
                        "Event updated",
                        "Failed to update event",
                    ),
                    _ => report(
                        auth,
                        flash,
                        api.admin().create_event(&draft).await,
                        "Event created",
                        "Failed to create event",
                    ),
                };
                busy.set(false);
                if saved.is_some() {
                    editor.set(EventEditor::Closed);
                    events.restart();
                }
            });
        }
    };

    let delete = {
        let api = api.clone();
        move |event_id: String| {
            let api = api.clone();
            spawn(async move {
                let result = api.admin().delete_event(&event_id).await;
                if report(auth, flash, result, "Event deleted", "Failed to delete event").is_some() {
                    if selected.peek().as_ref().is_some_and(|e| e.id == event_id) {
                        selected.set(None);
                    }
                    events.restart();
                }
            });
        }
    };

    let list = match ready(events.read().clone(), "Loading events...") {
        Ok(list) => list,
        Err(placeholder) => return placeholder,
    };

    rsx! {
        section { class: "manage",
            div { class: "toolbar",
                h2 { "Events ({list.len()})" }
                Button { onclick: move |_| editor.set(EventEditor::Create), "New event" }
            }
            match editor() {
                EventEditor::Closed => rsx! {},
                EventEditor::Create => rsx! {
                    EventForm {
                        initial: EventDraft::default(),
                        heading: "Create event",
                        busy: busy(),
                        on_submit: save.clone(),
                        on_cancel: move |_| editor.set(EventEditor::Closed),
                    }
                },
                EventEditor::Edit(event) => rsx! {
                    EventForm {
                        key: "{event.id}",
                        initial: draft_of(&event),
                        heading: "Edit {event.title}",
                        busy: busy(),
                        on_submit: save.clone(),
                        on_cancel: move |_| editor.set(EventEditor::Closed),
                    }
                },
            }
            if list.is_empty() {
                p { class: "empty-state", "No events yet. Create the first one." }
            }
            table { class: "manage-table",
                thead {
                    tr {
                        th { "Title" }
                        th { "Date" }
                        th { "Status" }
                        th { "Registered" }
                        th {}
                    }
                }
                tbody {
                    for event in list.into_iter() {
                        tr { key: "{event.id}",
                            td { "{event.title}" }
                            td { "{short_date(event.date.as_deref().unwrap_or_default())}" }
                            td { "{event.status().label()}" }
                            td { "{event.participants.len()}" }
                            td { class: "manage-table__actions",
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    onclick: {
                                        let event = event.clone();
                                        move |_| selected.set(Some(event.clone()))
                                    },
                                    "Participants"
                                }
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    onclick: {
                                        let event = event.clone();
                                        move |_| editor.set(EventEditor::Edit(event.clone()))
                                    },
                                    "Edit"
                                }
                                Button {
                                    variant: ButtonVariant::Danger,
                                    onclick: {
                                        let delete = delete.clone();
                                        let id = event.id.clone();
                                        move |_| delete(id.clone())
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
            if let Some(event) = selected() {
                ParticipantsPanel { key: "{event.id}", event: event.clone(), flash }
            }
        }
    }
}

#[component]
fn ParticipantsPanel(event: EventRecord, flash: Flash) -> Element {
    let auth = use_auth();
    let api = use_api();
    let mut new_participant = use_signal(String::new);
    let mut placements = use_signal(Vec::<(String, u32)>::new);
    let event_id = event.id.clone();

    let mut participants = use_resource({
        let api = api.clone();
        let event_id = event_id.clone();
        move || {
            let api = api.clone();
            let event_id = event_id.clone();
            async move {
                loaded(
                    auth,
                    api.admin().participants(&event_id).await,
                    "Failed to load participants",
                )
            }
        }
    });

    let add = {
        let api = api.clone();
        let event_id = event_id.clone();
        move |_: MouseEvent| {
            let participant_id = new_participant().trim().to_string();
            if participant_id.is_empty() {
                return;
            }
            let api = api.clone();
            let event_id = event_id.clone();
            spawn(async move {
                let result = api.admin().add_participant(&event_id, &participant_id).await;
                if report(auth, flash, result, "Participant added", "Failed to add participant").is_some() {
                    new_participant.set(String::new());
                    participants.restart();
                }
            });
        }
    };

    let remove = {
        let api = api.clone();
        let event_id = event_id.clone();
        move |participant_id: String| {
            let api = api.clone();
            let event_id = event_id.clone();
            spawn(async move {
                let result = api.admin().remove_participant(&event_id, &participant_id).await;
                if report(auth, flash, result, "Participant removed", "Failed to remove participant").is_some() {
                    placements.write().retain(|(id, _)| id != &participant_id);
                    participants.restart();
                }
            });
        }
    };

    let declare = {
        let api = api.clone();
        let event_id = event_id.clone();
        move |_: MouseEvent| {
            let mut flash = flash;
            let winners = match collect_winners(&placements.read()) {
                Ok(winners) => winners,
                Err(message) => {
                    flash.set(Some((NoticeKind::Error, message.to_string())));
                    return;
                }
            };
            let api = api.clone();
            let event_id = event_id.clone();
            spawn(async move {
                let result = api.admin().declare_winners(&event_id, &winners).await;
                report(auth, flash, result, "Winners declared", "Failed to declare winners");
            });
        }
    };

    let list: Vec<Participant> = match ready(participants.read().clone(), "Loading participants...") {
        Ok(list) => list,
        Err(placeholder) => return placeholder,
    };

    rsx! {
        section { class: "card manage-participants",
            h3 { "Participants: {event.title}" }
            div { class: "toolbar",
                Input {
                    name: "participantId",
                    placeholder: "Student id",
                    value: new_participant(),
                    oninput: move |e: FormEvent| new_participant.set(e.value()),
                }
                Button { onclick: add, "Add" }
            }
            if list.is_empty() {
                p { class: "empty-state", "Nobody has registered yet." }
            }
            ul { class: "event-list",
                for participant in list.into_iter() {
                    li { key: "{participant.id}",
                        div {
                            strong { "{participant.full_name}" }
                            if let Some(srn) = &participant.srn {
                                span { class: "muted", " {srn}" }
                            }
                        }
                        select {
                            class: "filter",
                            aria_label: "Place",
                            onchange: {
                                let id = participant.id.clone();
                                move |e: FormEvent| {
                                    let position = e.value().parse::<u32>().unwrap_or(0);
                                    let mut placements = placements.write();
                                    placements.retain(|(pid, _)| pid != &id);
                                    placements.push((id.clone(), position));
                                }
                            },
                            option { value: "0", "No place" }
                            for place in PLACES {
                                option { value: "{place}", "Place {place}" }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: {
                                let remove = remove.clone();
                                let id = participant.id.clone();
                                move |_| remove(id.clone())
                            },
                            "Remove"
                        }
                    }
                }
            }
            Button { variant: ButtonVariant::Secondary, onclick: declare, "Declare winners" }
        }
    }
}

#[component]
fn NoticesPanel(flash: Flash) -> Element {
    let auth = use_auth();
    let api = use_api();
    let mut editing = use_signal(|| Option::<String>::None);
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut priority = use_signal(|| "normal".to_string());

    let mut notices = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { loaded(auth, api.admin().notices().await, "Failed to load notices") }
        }
    });

    let mut reset = move || {
        editing.set(None);
        title.set(String::new());
        content.set(String::new());
        priority.set("normal".to_string());
    };

    let submit = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let mut flash = flash;
            let draft = NoticeDraft {
                title: title().trim().to_string(),
                content: content().trim().to_string(),
                priority: Some(priority()),
            };
            if draft.title.is_empty() || draft.content.is_empty() {
                flash.set(Some((NoticeKind::Error, "Title and content are required".to_string())));
                return;
            }
            let api = api.clone();
            let target = editing();
            spawn(async move {
                let saved = match target {
                    Some(id) => report(
                        auth,
                        flash,
                        api.admin().update_notice(&id, &draft).await,
                        "Notice updated",
                        "Failed to update notice",
                    ),
                    None => report(
                        auth,
                        flash,
                        api.admin().create_notice(&draft).await,
                        "Notice published",
                        "Failed to publish notice",
                    ),
                };
                if saved.is_some() {
                    reset();
                    notices.restart();
                }
            });
        }
    };

    let delete = {
        let api = api.clone();
        move |notice_id: String| {
            let api = api.clone();
            spawn(async move {
                let result = api.admin().delete_notice(&notice_id).await;
                if report(auth, flash, result, "Notice deleted", "Failed to delete notice").is_some() {
                    notices.restart();
                }
            });
        }
    };

    let list: Vec<NoticeRecord> = match ready(notices.read().clone(), "Loading notices...") {
        Ok(list) => list,
        Err(placeholder) => return placeholder,
    };

    rsx! {
        section { class: "manage",
            form { class: "card manage-form", onsubmit: submit,
                h3 { if editing().is_some() { "Edit notice" } else { "New notice" } }
                Input { name: "title", label: "Title", value: title(), oninput: move |e: FormEvent| title.set(e.value()) }
                label { class: "field",
                    span { class: "field__label", "Content" }
                    textarea {
                        class: "field__input",
                        rows: 3,
                        value: "{content}",
                        oninput: move |e: FormEvent| content.set(e.value()),
                    }
                }
                label { class: "field",
                    span { class: "field__label", "Priority" }
                    select {
                        class: "field__input",
                        value: "{priority}",
                        onchange: move |e: FormEvent| priority.set(e.value()),
                        for level in ["low", "normal", "high"] {
                            option { value: level, selected: priority() == level, "{level}" }
                        }
                    }
                }
                div { class: "manage-form__actions",
                    if editing().is_some() {
                        Button { variant: ButtonVariant::Ghost, onclick: move |_| reset(), "Cancel" }
                    }
                    Button { r#type: "submit", "Publish" }
                }
            }
            if list.is_empty() {
                p { class: "empty-state", "No notices published." }
            }
            for notice in list.into_iter() {
                article { key: "{notice.id}", class: "card notice-card",
                    header {
                        h4 { "{notice.title}" }
                        if let Some(level) = &notice.priority {
                            span { class: "pill pill--{level}", "{level}" }
                        }
                    }
                    p { "{notice.content}" }
                    if let Some(created) = &notice.created_at {
                        p { class: "muted", "{short_date(created)}" }
                    }
                    div { class: "manage-form__actions",
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: {
                                let notice = notice.clone();
                                move |_| {
                                    editing.set(Some(notice.id.clone()));
                                    title.set(notice.title.clone());
                                    content.set(notice.content.clone());
                                    priority.set(notice.priority.clone().unwrap_or_else(|| "normal".to_string()));
                                }
                            },
                            "Edit"
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            onclick: {
                                let delete = delete.clone();
                                let id = notice.id.clone();
                                move |_| delete(id.clone())
                            },
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(rows: &[(&str, u32)]) -> Vec<(String, u32)> {
        rows.iter().map(|(id, p)| (id.to_string(), *p)).collect()
    }

    #[test]
    fn test_collect_winners_orders_by_place() {
        let winners = collect_winners(&placed(&[("b", 2), ("x", 0), ("a", 1)])).unwrap();
        assert_eq!(
            winners,
            vec![
                Winner { user_id: "a".to_string(), position: 1 },
                Winner { user_id: "b".to_string(), position: 2 },
            ]
        );
    }

    #[test]
    fn test_collect_winners_rejects_empty_and_duplicates() {
        assert!(collect_winners(&placed(&[("a", 0)])).is_err());
        assert!(collect_winners(&[]).is_err());
        assert_eq!(
            collect_winners(&placed(&[("a", 1), ("b", 1)])),
            Err("Each place can only be awarded once")
        );
    }
}
