//! Admin and master sign-in. Both take a username and password and differ
//! only in endpoint and landing page.

use dioxus::prelude::*;
use store::Role;
use ui::components::{Button, Input, Notice, NoticeKind};
use ui::{dashboard_path, failure_message, sign_in, use_api, use_auth};

use super::login::{signed_in_target, LOGIN_FAILED};

#[component]
pub fn AdminLogin() -> Element {
    rsx! { StaffLogin { role: Role::Admin } }
}

#[component]
pub fn MasterLogin() -> Element {
    rsx! { StaffLogin { role: Role::Master } }
}

#[component]
fn StaffLogin(role: Role) -> Element {
    let auth = use_auth();
    let api = use_api();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        if let Some(target) = signed_in_target(auth.read().session()) {
            navigator.replace(target);
        }
    });

    let title = match role {
        Role::Master => "Master Login",
        _ => "Admin Login",
    };

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);
            let u = username().trim().to_string();
            let p = password();
            if u.is_empty() || p.is_empty() {
                error.set(Some("Please enter your username and password".to_string()));
                return;
            }

            loading.set(true);
            let result = match role {
                Role::Master => api.auth().login_master(&u, &p).await,
                _ => api.auth().login_admin(&u, &p).await,
            };
            match result.map(|grant| sign_in(auth, grant)) {
                Ok(Ok(())) => {
                    navigator.replace(dashboard_path(role).unwrap_or("/"));
                }
                Ok(Err(message)) => {
                    loading.set(false);
                    error.set(Some(message));
                }
                Err(err) => {
                    loading.set(false);
                    error.set(failure_message(auth, &err, LOGIN_FAILED));
                }
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card auth-card--staff",
                h1 { "{title}" }
                p { class: "auth-card__subtitle", "Restricted area. Authorised accounts only." }

                if let Some(message) = error() {
                    Notice { kind: NoticeKind::Error, message }
                }

                form { class: "auth-form", onsubmit: handle_login,
                    Input {
                        name: "username",
                        label: "Username",
                        placeholder: "Enter your username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                    Input {
                        r#type: "password",
                        name: "password",
                        label: "Password",
                        placeholder: "Enter your password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    Button {
                        r#type: "submit",
                        class: "w-full",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                p { class: "auth-card__footer",
                    Link { to: "/login", "Back to student login" }
                }
            }
        }
    }
}
