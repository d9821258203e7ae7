//! Master console: admins, users, past events and system exports.

use api::models::{AdminDraft, AdminRecord, EventDraft, EventRecord, ExportFormat, RemovalStep, UserRecord};
use api::services::{RemovalReply, UserQuery};
use dioxus::prelude::*;
use store::Role;
use ui::components::{Button, ButtonVariant, Input, NoticeKind};
use ui::format::short_date;
use ui::{use_api, use_auth, ProtectedRoute};

use super::manage::{draft_of, loaded, ready, report, EventForm, Flash, FlashBanner};

const PAGE_SIZE: u32 = 20;

/// Where a user removal stands between server round trips.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum RemovalStage {
    /// Nothing sent yet.
    Start,
    /// Token issued; the master password is needed.
    Password { token: String },
    /// Password verified; one more confirmation deletes the account.
    Final { password: String },
}

impl RemovalStage {
    pub(crate) fn request(&self, password: &str) -> RemovalStep {
        match self {
            RemovalStage::Start => RemovalStep::Request,
            RemovalStage::Password { token } => RemovalStep::Confirm {
                password: password.to_string(),
                token: token.clone(),
            },
            RemovalStage::Final { password } => RemovalStep::Commit {
                password: password.clone(),
            },
        }
    }

    /// The stage after a successful reply, or `None` once the user is gone.
    pub(crate) fn advance(
        &self,
        reply: &RemovalReply,
        password: &str,
    ) -> Result<Option<RemovalStage>, &'static str> {
        match self {
            RemovalStage::Start => reply
                .confirmation_token
                .clone()
                .map(|token| Some(RemovalStage::Password { token }))
                .ok_or("No confirmation token was issued"),
            RemovalStage::Password { .. } if reply.verified => Ok(Some(RemovalStage::Final {
                password: password.to_string(),
            })),
            RemovalStage::Password { .. } => Err("Master password could not be verified"),
            RemovalStage::Final { .. } => Ok(None),
        }
    }
}

/// `data:` URL so an export can be saved with a plain link.
pub(crate) fn data_url(mime: &str, body: &str) -> String {
    format!("data:{mime};charset=utf-8,{}", urlencoding::encode(body))
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tab {
    Overview,
    Admins,
    Users,
    PastEvents,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Overview, Tab::Admins, Tab::Users, Tab::PastEvents];

    fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Admins => "Admins",
            Tab::Users => "Users",
            Tab::PastEvents => "Past Events",
        }
    }
}

#[component]
pub fn MasterDashboard() -> Element {
    rsx! {
        ProtectedRoute { allowed: vec![Role::Master],
            MasterConsole {}
        }
    }
}

#[component]
fn MasterConsole() -> Element {
    let mut tab = use_signal(|| Tab::Overview);
    let flash: Flash = use_signal(|| None);

    rsx! {
        div { class: "page dashboard",
            header { class: "page-header",
                h1 { "Master Dashboard" }
                p { class: "muted", "System administration" }
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
                Tab::Overview => rsx! { Overview { flash } },
                Tab::Admins => rsx! { AdminsPanel { flash } },
                Tab::Users => rsx! { UsersPanel { flash } },
                Tab::PastEvents => rsx! { PastEventsPanel { flash } },
            }
        }
    }
}

#[component]
fn Overview(flash: Flash) -> Element {
    let auth = use_auth();
    let api = use_api();
    let mut export = use_signal(|| Option::<(ExportFormat, String)>::None);

    let stats = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { loaded(auth, api.master().stats().await, "Failed to load stats") }
        }
    });

    let run_export = move |format: ExportFormat| {
        let api = api.clone();
        spawn(async move {
            let result = api.master().export(format).await;
            if let Some(body) = report(auth, flash, result, "Export ready", "Export failed") {
                export.set(Some((format, body)));
            }
        });
    };

    let stats = match ready(stats.read().clone(), "Loading stats...") {
        Ok(stats) => stats,
        Err(placeholder) => return placeholder,
    };

    rsx! {
        section { class: "grid grid--4",
            div { class: "stat-card", strong { "{stats.total_users}" } p { "Users" } }
            div { class: "stat-card", strong { "{stats.active_users}" } p { "Active users" } }
            div { class: "stat-card", strong { "{stats.total_admins}" } p { "Admins" } }
            div { class: "stat-card", strong { "{stats.total_events}" } p { "Events" } }
        }
        section { class: "card",
            h2 { "Export system data" }
            div { class: "toolbar",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: {
                        let run_export = run_export.clone();
                        move |_| run_export(ExportFormat::Json)
                    },
                    "Export JSON"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| run_export(ExportFormat::Csv),
                    "Export CSV"
                }
            }
            if let Some((format, body)) = export() {
                {
                    let (mime, file) = match format {
                        ExportFormat::Json => ("application/json", "club-export.json"),
                        ExportFormat::Csv => ("text/csv", "club-export.csv"),
                    };
                    let href = data_url(mime, &body);
                    rsx! {
                        a { class: "btn btn--primary", href: "{href}", download: "{file}", "Download {file}" }
                        textarea { class: "export-preview", readonly: true, rows: 10, value: "{body}" }
                    }
                }
            }
        }
    }
}

#[component]
fn AdminsPanel(flash: Flash) -> Element {
    let auth = use_auth();
    let api = use_api();
    let mut show_form = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut cluster = use_signal(String::new);

    let mut admins = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { loaded(auth, api.master().admins().await, "Failed to load admins") }
        }
    });

    let create = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let mut flash = flash;
            let draft = AdminDraft {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
                cluster: Some(cluster().trim().to_string()).filter(|c| !c.is_empty()),
            };
            if draft.name.is_empty() || draft.email.is_empty() || draft.password.is_empty() {
                flash.set(Some((NoticeKind::Error, "Name, email and password are required".to_string())));
                return;
            }
            let api = api.clone();
            spawn(async move {
                let result = api.master().create_admin(&draft).await;
                if report(auth, flash, result, "Admin created", "Failed to create admin").is_some() {
                    show_form.set(false);
                    name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    cluster.set(String::new());
                    admins.restart();
                }
            });
        }
    };

    let toggle = {
        let api = api.clone();
        move |(admin_id, active): (String, bool)| {
            let api = api.clone();
            spawn(async move {
                let result = if active {
                    let outcome = api.master().remove_admin(&admin_id).await;
                    report(auth, flash, outcome, "Admin deactivated", "Failed to remove admin")
                } else {
                    let outcome = api.master().reactivate_admin(&admin_id).await;
                    report(auth, flash, outcome, "Admin reactivated", "Failed to reactivate admin")
                };
                if result.is_some() {
                    admins.restart();
                }
            });
        }
    };

    let list: Vec<AdminRecord> = match ready(admins.read().clone(), "Loading admins...") {
        Ok(list) => list,
        Err(placeholder) => return placeholder,
    };

    rsx! {
        section { class: "manage",
            div { class: "toolbar",
                h2 { "Admins ({list.len()})" }
                Button {
                    onclick: move |_| show_form.set(!show_form()),
                    if show_form() { "Close" } else { "New admin" }
                }
            }
            if show_form() {
                form { class: "card manage-form", onsubmit: create,
                    div { class: "grid grid--2",
                        Input { name: "name", label: "Name", value: name(), oninput: move |e: FormEvent| name.set(e.value()) }
                        Input { name: "email", label: "Email", r#type: "email", value: email(), oninput: move |e: FormEvent| email.set(e.value()) }
                        Input { name: "password", label: "Password", r#type: "password", value: password(), oninput: move |e: FormEvent| password.set(e.value()) }
                        Input { name: "cluster", label: "Cluster", placeholder: "Optional", value: cluster(), oninput: move |e: FormEvent| cluster.set(e.value()) }
                    }
                    div { class: "manage-form__actions",
                        Button { r#type: "submit", "Create admin" }
                    }
                }
            }
            if list.is_empty() {
                p { class: "empty-state", "No admins yet." }
            }
            table { class: "manage-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Status" }
                        th {}
                    }
                }
                tbody {
                    for admin in list.into_iter() {
                        {
                            let active = admin.is_active.unwrap_or(true);
                            let variant = if active { ButtonVariant::Danger } else { ButtonVariant::Secondary };
                            rsx! {
                                tr { key: "{admin.id}",
                                    td { "{admin.display_name()}" }
                                    td { "{admin.email.clone().unwrap_or_default()}" }
                                    td { if active { "Active" } else { "Inactive" } }
                                    td { class: "manage-table__actions",
                                        Button {
                                            variant,
                                            onclick: {
                                                let toggle = toggle.clone();
                                                let id = admin.id.clone();
                                                move |_| toggle((id.clone(), active))
                                            },
                                            if active { "Deactivate" } else { "Reactivate" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UsersPanel(flash: Flash) -> Element {
    let auth = use_auth();
    let api = use_api();
    let mut search = use_signal(String::new);
    let mut query = use_signal(|| UserQuery {
        page: Some(1),
        limit: Some(PAGE_SIZE),
        search: None,
    });
    let mut removing = use_signal(|| Option::<(UserRecord, RemovalStage)>::None);

    let mut users = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            let query = query();
            async move { loaded(auth, api.master().users(&query).await, "Failed to load users") }
        }
    });

    let run_search = move |evt: FormEvent| {
        evt.prevent_default();
        let term = search().trim().to_string();
        query.set(UserQuery {
            page: Some(1),
            limit: Some(PAGE_SIZE),
            search: Some(term).filter(|t| !t.is_empty()),
        });
    };

    let page = match ready(users.read().clone(), "Loading users...") {
        Ok(page) => page,
        Err(placeholder) => return placeholder,
    };
    let current = query().page.unwrap_or(1);
    let last = page.total.div_ceil(PAGE_SIZE).max(1);

    rsx! {
        section { class: "manage",
            form { class: "toolbar", onsubmit: run_search,
                Input {
                    class: "search",
                    name: "search",
                    placeholder: "Search by name, email or SRN",
                    value: search(),
                    oninput: move |e: FormEvent| search.set(e.value()),
                }
                Button { r#type: "submit", "Search" }
                span { class: "muted", "{page.total} users" }
            }
            if let Some((user, stage)) = removing() {
                RemovalDialog {
                    key: "{user.id}",
                    user: user.clone(),
                    stage,
                    flash,
                    on_done: move |removed: bool| {
                        removing.set(None);
                        if removed {
                            users.restart();
                        }
                    },
                }
            }
            if page.users.is_empty() {
                p { class: "empty-state", "No users match your search." }
            }
            table { class: "manage-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "SRN" }
                        th { "Class" }
                        th { "Email" }
                        th {}
                    }
                }
                tbody {
                    for user in page.users.into_iter() {
                        tr { key: "{user.id}",
                            td { "{user.full_name}" }
                            td { "{user.srn.clone().unwrap_or_default()}" }
                            td { "{user.class.as_ref().map(|c| c.label()).unwrap_or_default()}" }
                            td { "{user.email.clone().unwrap_or_default()}" }
                            td { class: "manage-table__actions",
                                Button {
                                    variant: ButtonVariant::Danger,
                                    onclick: {
                                        let user = user.clone();
                                        move |_| removing.set(Some((user.clone(), RemovalStage::Start)))
                                    },
                                    "Remove"
                                }
                            }
                        }
                    }
                }
            }
            div { class: "pager",
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: current <= 1,
                    onclick: move |_| query.write().page = Some(current.saturating_sub(1).max(1)),
                    "Previous"
                }
                span { "Page {current} of {last}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: current >= last,
                    onclick: move |_| query.write().page = Some(current + 1),
                    "Next"
                }
            }
        }
    }
}

/// Walks one user through the three confirmation round trips.
#[component]
fn RemovalDialog(user: UserRecord, stage: RemovalStage, flash: Flash, on_done: EventHandler<bool>) -> Element {
    let auth = use_auth();
    let api = use_api();
    let mut stage = use_signal(|| stage);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let user_id = user.id.clone();

    let proceed = move |_: MouseEvent| {
        let api = api.clone();
        let user_id = user_id.clone();
        let current = stage();
        let secret = password();
        if matches!(current, RemovalStage::Password { .. }) && secret.is_empty() {
            let mut flash = flash;
            flash.set(Some((NoticeKind::Error, "Enter the master password".to_string())));
            return;
        }
        spawn(async move {
            busy.set(true);
            let step = current.request(&secret);
            let result = api.master().remove_user(&user_id, &step).await;
            busy.set(false);
            let Some(reply) = report(auth, flash, result, "Confirmation accepted", "Failed to remove user") else {
                on_done.call(false);
                return;
            };
            match current.advance(&reply, &secret) {
                Ok(Some(next)) => stage.set(next),
                Ok(None) => {
                    let mut flash = flash;
                    flash.set(Some((NoticeKind::Success, "User permanently removed".to_string())));
                    on_done.call(true);
                }
                Err(message) => {
                    let mut flash = flash;
                    flash.set(Some((NoticeKind::Error, message.to_string())));
                    on_done.call(false);
                }
            }
        });
    };

    let (step_number, prompt, action) = match stage() {
        RemovalStage::Start => (1, "Request a confirmation token to remove this user.", "Continue"),
        RemovalStage::Password { .. } => (2, "Enter the master password to verify the removal.", "Verify"),
        RemovalStage::Final { .. } => (3, "This permanently deletes the account and cannot be undone.", "Delete permanently"),
    };

    rsx! {
        div { class: "modal",
            div { class: "modal__body",
                h3 { "Remove {user.full_name}" }
                p { class: "muted", "Step {step_number} of 3" }
                p { "{prompt}" }
                if matches!(stage(), RemovalStage::Password { .. }) {
                    Input {
                        name: "masterPassword",
                        label: "Master password",
                        r#type: "password",
                        value: password(),
                        oninput: move |e: FormEvent| password.set(e.value()),
                    }
                }
                div { class: "modal__actions",
                    Button { variant: ButtonVariant::Ghost, onclick: move |_| on_done.call(false), "Cancel" }
                    Button {
                        variant: ButtonVariant::Danger,
                        disabled: busy(),
                        onclick: proceed,
                        "{action}"
                    }
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum PastEditor {
    Closed,
    Create,
    Edit(EventRecord),
}

#[component]
fn PastEventsPanel(flash: Flash) -> Element {
    let auth = use_auth();
    let api = use_api();
    let mut editor = use_signal(|| PastEditor::Closed);
    let mut deleting = use_signal(|| Option::<EventRecord>::None);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let mut events = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { loaded(auth, api.events().past().await, "Failed to load past events") }
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
                    PastEditor::Edit(event) => report(
                        auth,
                        flash,
                        api.master().edit_past_event(&event.id, &draft).await,
                        "Past event updated",
                        "Failed to update past event",
                    ),
                    _ => report(
                        auth,
                        flash,
                        api.master().add_past_event(&draft).await,
                        "Past event added",
                        "Failed to add past event",
                    ),
                };
                busy.set(false);
                if saved.is_some() {
                    editor.set(PastEditor::Closed);
                    events.restart();
                }
            });
        }
    };

    let confirm_delete = {
        let api = api.clone();
        move |_: MouseEvent| {
            let Some(event) = deleting() else {
                return;
            };
            let secret = password();
            if secret.is_empty() {
                let mut flash = flash;
                flash.set(Some((NoticeKind::Error, "Enter the master password".to_string())));
                return;
            }
            let api = api.clone();
            spawn(async move {
                let result = api.master().delete_past_event(&event.id, &secret).await;
                if report(auth, flash, result, "Past event deleted", "Failed to delete past event").is_some() {
                    events.restart();
                }
                deleting.set(None);
                password.set(String::new());
            });
        }
    };

    let list: Vec<EventRecord> = match ready(events.read().clone(), "Loading past events...") {
        Ok(list) => list,
        Err(placeholder) => return placeholder,
    };

    rsx! {
        section { class: "manage",
            div { class: "toolbar",
                h2 { "Past Events ({list.len()})" }
                Button { onclick: move |_| editor.set(PastEditor::Create), "Add past event" }
            }
            match editor() {
                PastEditor::Closed => rsx! {},
                PastEditor::Create => rsx! {
                    EventForm {
                        initial: EventDraft { event_type: Some("past".to_string()), ..Default::default() },
                        heading: "Add past event",
                        busy: busy(),
                        on_submit: save.clone(),
                        on_cancel: move |_| editor.set(PastEditor::Closed),
                    }
                },
                PastEditor::Edit(event) => rsx! {
                    EventForm {
                        key: "{event.id}",
                        initial: draft_of(&event),
                        heading: "Edit {event.title}",
                        busy: busy(),
                        on_submit: save.clone(),
                        on_cancel: move |_| editor.set(PastEditor::Closed),
                    }
                },
            }
            if let Some(event) = deleting() {
                div { class: "modal",
                    div { class: "modal__body",
                        h3 { "Delete {event.title}?" }
                        Input {
                            name: "masterPassword",
                            label: "Master password",
                            r#type: "password",
                            value: password(),
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                        div { class: "modal__actions",
                            Button { variant: ButtonVariant::Ghost, onclick: move |_| deleting.set(None), "Cancel" }
                            Button { variant: ButtonVariant::Danger, onclick: confirm_delete, "Delete" }
                        }
                    }
                }
            }
            if list.is_empty() {
                p { class: "empty-state", "No past events recorded." }
            }
            table { class: "manage-table",
                thead {
                    tr {
                        th { "Title" }
                        th { "Date" }
                        th { "Participants" }
                        th {}
                    }
                }
                tbody {
                    for event in list.into_iter() {
                        tr { key: "{event.id}",
                            td { "{event.title}" }
                            td { "{short_date(event.date.as_deref().unwrap_or_default())}" }
                            td { "{event.participants.len()}" }
                            td { class: "manage-table__actions",
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    onclick: {
                                        let event = event.clone();
                                        move |_| editor.set(PastEditor::Edit(event.clone()))
                                    },
                                    "Edit"
                                }
                                Button {
                                    variant: ButtonVariant::Danger,
                                    onclick: {
                                        let event = event.clone();
                                        move |_| deleting.set(Some(event.clone()))
                                    },
                                    "Delete"
                                }
                            }
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

    fn reply(token: Option<&str>, verified: bool) -> RemovalReply {
        RemovalReply {
            confirmation_token: token.map(str::to_string),
            verified,
        }
    }

    #[test]
    fn test_removal_walks_three_steps() {
        let start = RemovalStage::Start;
        assert_eq!(start.request(""), RemovalStep::Request);

        let second = start.advance(&reply(Some("tok"), false), "").unwrap().unwrap();
        assert_eq!(second, RemovalStage::Password { token: "tok".to_string() });
        assert_eq!(
            second.request("pw"),
            RemovalStep::Confirm { password: "pw".to_string(), token: "tok".to_string() }
        );

        let third = second.advance(&reply(None, true), "pw").unwrap().unwrap();
        assert_eq!(third.request("ignored"), RemovalStep::Commit { password: "pw".to_string() });
        assert_eq!(third.advance(&reply(None, false), "pw"), Ok(None));
    }

    #[test]
    fn test_removal_stops_without_token_or_verification() {
        assert!(RemovalStage::Start.advance(&reply(None, false), "").is_err());
        let second = RemovalStage::Password { token: "tok".to_string() };
        assert!(second.advance(&reply(None, false), "pw").is_err());
    }

    #[test]
    fn test_data_url_escapes_reserved_bytes() {
        assert_eq!(data_url("text/csv", "a,b\n1"), "data:text/csv;charset=utf-8,a%2Cb%0A1");
    }
}
