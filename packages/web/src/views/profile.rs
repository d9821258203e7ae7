//! The student dashboard: profile, stats, badges and event registrations.

use api::models::{Badges, EventRecord, ProfileUpdate, UserProfile as UserProfileModel, UserStatsReport};
use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use store::Role;
use ui::components::{Avatar, Button, ButtonVariant, Input, Notice, NoticeKind, Spinner};
use ui::format::short_date;
use ui::{failure_message, use_api, use_auth, ProtectedRoute};

#[derive(Clone, Debug, PartialEq)]
struct ProfileData {
    profile: UserProfileModel,
    report: UserStatsReport,
    badges: Badges,
    registered: Vec<EventRecord>,
    upcoming: Vec<EventRecord>,
    ongoing: Vec<EventRecord>,
}

async fn load(api: &ApiClient) -> Result<ProfileData, ApiError> {
    let users = api.users();
    Ok(ProfileData {
        profile: users.profile().await?,
        report: users.stats().await?,
        badges: users.badges().await?,
        registered: users.events().await?,
        upcoming: api.events().upcoming().await?,
        ongoing: api.events().ongoing().await?,
    })
}

#[component]
pub fn UserProfile() -> Element {
    rsx! {
        ProtectedRoute { allowed: vec![Role::User],
            ProfileContent {}
        }
    }
}

#[component]
fn ProfileContent() -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let mut notice = use_signal(|| Option::<(NoticeKind, String)>::None);
    let mut editing = use_signal(|| false);

    let mut data = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                let loaded = load(&api)
                    .await
                    .map_err(|e| failure_message(auth, &e, "Failed to load profile"))?;
                auth.write()
                    .set_user_data(Some(loaded.profile.to_profile()));
                Ok::<_, Option<String>>(loaded)
            }
        }
    });

    let toggle_registration = {
        let api = api.clone();
        move |(event_id, register): (String, bool)| {
            let api = api.clone();
            spawn(async move {
                let result = if register {
                    api.users().register_event(&event_id).await.map(|_| ())
                } else {
                    api.users().unregister_event(&event_id).await
                };
                match result {
                    Ok(()) => {
                        let message = if register {
                            "Registered for the event"
                        } else {
                            "Registration cancelled"
                        };
                        notice.set(Some((NoticeKind::Success, message.to_string())));
                        data.restart();
                    }
                    Err(err) => {
                        if let Some(message) =
                            failure_message(auth, &err, "Could not update registration")
                        {
                            notice.set(Some((NoticeKind::Error, message)));
                        }
                    }
                }
            });
        }
    };

    let snapshot = data.read().clone();
    let loaded = match snapshot {
        None => return rsx! { div { class: "page-center", Spinner { label: "Loading profile..." } } },
        Some(Err(Some(message))) => {
            return rsx! {
                div { class: "page-center",
                    Notice { kind: NoticeKind::Error, message }
                    Button { onclick: move |_| data.restart(), "Try again" }
                }
            }
        }
        Some(Err(None)) => return rsx! {},
        Some(Ok(loaded)) => loaded,
    };

    let ProfileData { profile, report, badges, registered, upcoming, ongoing } = loaded;
    let registered_ids: Vec<String> = registered.iter().map(|e| e.id.clone()).collect();
    let class_label = profile.class.as_ref().map(|c| c.label()).unwrap_or_default();

    rsx! {
        if let Some((kind, message)) = notice() {
            Notice { kind, message }
        }

        section { class: "profile-header card",
            Avatar { name: profile.full_name.clone(), image: profile.profile_pic.clone(), class: "avatar--xl" }
            div { class: "profile-header__info",
                h1 { "{profile.full_name}" }
                if let Some(srn) = &profile.srn {
                    p { class: "muted", "{srn}" }
                }
                p { "{class_label}" }
                if let Some(bio) = &profile.bio {
                    p { class: "profile-header__bio", "{bio}" }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| editing.set(true),
                    "Edit profile"
                }
            }
            if let Some(qr) = &profile.qr_code {
                figure { class: "profile-header__qr",
                    img { src: "{qr}", alt: "Attendance QR code" }
                    figcaption { "Show this at events" }
                }
            }
        }

        if editing() {
            EditProfile {
                profile: profile.clone(),
                on_close: move |saved: bool| {
                    editing.set(false);
                    if saved {
                        notice.set(Some((NoticeKind::Success, "Profile updated successfully!".to_string())));
                        data.restart();
                    }
                },
            }
        }

        section { class: "grid grid--4",
            div { class: "stat-card", strong { "{report.stats.cluster_points}" } p { "Cluster points" } }
            div { class: "stat-card", strong { "{report.stats.participation}" } p { "Events attended" } }
            div { class: "stat-card", strong { "{report.stats.wins}" } p { "Wins" } }
            div { class: "stat-card", strong { "{report.summary.win_rate}%" } p { "Win rate" } }
        }

        section { class: "card",
            h2 { "Progress" }
            for (label, item) in [("Badges", profile.progress.badges), ("Participation", profile.progress.participation), ("Wins", profile.progress.wins)] {
                div { key: "{label}", class: "progress",
                    span { "{label}" }
                    div { class: "progress__bar",
                        div { class: "progress__fill", style: "width: {item.percentage.min(100)}%" }
                    }
                    span { "{item.count} / {item.target}" }
                }
            }
        }

        section { class: "card",
            h2 { "Badges ({badges.summary.total_earned} / {badges.summary.total_available})" }
            if badges.badges.earned.is_empty() && badges.badges.available.is_empty() {
                p { class: "empty-state", "No badges yet. Take part in events to earn some." }
            }
            div { class: "badges",
                for badge in badges.badges.earned.iter().chain(badges.badges.available.iter()) {
                    div {
                        key: "{badge.name}",
                        class: if badge.earned { "badge-tile badge-tile--earned" } else { "badge-tile" },
                        title: "{badge.description}",
                        span { class: "badge-tile__emoji", "{badge.emoji}" }
                        span { "{badge.name}" }
                    }
                }
            }
        }

        if !ongoing.is_empty() {
            section { class: "card",
                h2 { "Happening Now" }
                ul { class: "event-list",
                    for event in ongoing.iter() {
                        li { key: "{event.id}",
                            strong { "{event.title}" }
                            span { class: "muted", "{event.location.clone().unwrap_or_default()}" }
                        }
                    }
                }
            }
        }

        section { class: "card",
            h2 { "My Events" }
            if registered.is_empty() {
                p { class: "empty-state", "You haven't registered for any events yet." }
            }
            ul { class: "event-list",
                for event in registered.iter() {
                    li { key: "{event.id}",
                        div {
                            strong { "{event.title}" }
                            span { class: "muted", " {short_date(event.date.as_deref().unwrap_or_default())} · {event.time.label()}" }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: {
                                let toggle = toggle_registration.clone();
                                let id = event.id.clone();
                                move |_| toggle((id.clone(), false))
                            },
                            "Cancel"
                        }
                    }
                }
            }
        }

        section { class: "card",
            h2 { "Upcoming Events" }
            ul { class: "event-list",
                for event in upcoming.iter().filter(|e| !registered_ids.contains(&e.id)) {
                    li { key: "{event.id}",
                        div {
                            strong { "{event.title}" }
                            span { class: "muted", " {short_date(event.date.as_deref().unwrap_or_default())} · {event.location.clone().unwrap_or_default()}" }
                        }
                        Button {
                            onclick: {
                                let toggle = toggle_registration.clone();
                                let id = event.id.clone();
                                move |_| toggle((id.clone(), true))
                            },
                            "Register"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EditProfile(profile: UserProfileModel, on_close: EventHandler<bool>) -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut name = use_signal(|| profile.full_name.clone());
    let mut bio = use_signal(|| profile.bio.clone().unwrap_or_default());
    let mut picture = use_signal(|| profile.profile_pic.clone().unwrap_or_default());
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            let full_name = name().trim().to_string();
            if full_name.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            let update = ProfileUpdate {
                full_name: Some(full_name),
                bio: Some(bio().trim().to_string()),
                profile_pic: Some(picture().trim().to_string()).filter(|p| !p.is_empty()),
            };
            saving.set(true);
            match api.auth().update_profile(&update).await {
                Ok(_) => on_close.call(true),
                Err(err) => {
                    saving.set(false);
                    error.set(failure_message(auth, &err, "Failed to update profile"));
                }
            }
        });
    };

    rsx! {
        div { class: "modal",
            form { class: "modal__body auth-form", onsubmit: save,
                h2 { "Edit Profile" }
                if let Some(message) = error() {
                    Notice { kind: NoticeKind::Error, message }
                }
                Input {
                    name: "fullName",
                    label: "Full Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                label { class: "field",
                    span { class: "field__label", "Bio" }
                    textarea {
                        class: "field__input",
                        rows: 3,
                        value: "{bio}",
                        oninput: move |evt: FormEvent| bio.set(evt.value()),
                    }
                }
                Input {
                    name: "profilePic",
                    label: "Picture URL",
                    placeholder: "https://...",
                    value: picture(),
                    oninput: move |evt: FormEvent| picture.set(evt.value()),
                }
                div { class: "modal__actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_close.call(false),
                        "Cancel"
                    }
                    Button { r#type: "submit", disabled: saving(), if saving() { "Saving..." } else { "Save" } }
                }
            }
        }
    }
}
