//! Student sign-in.

use dioxus::prelude::*;
use store::Role;
use ui::components::{Button, Input, Notice, NoticeKind};
use ui::{dashboard_path, failure_message, sign_in, use_api, use_auth};

pub(crate) const LOGIN_FAILED: &str = "Login failed. Please try again.";

/// Where a signed-in session should land instead of a login form.
pub(crate) fn signed_in_target(auth: &store::Session) -> Option<&'static str> {
    if auth.loading || !auth.is_authenticated {
        None
    } else {
        dashboard_path(auth.role)
    }
}

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let api = use_api();
    let navigator = use_navigator();

    let mut email = use_signal(|| auth.peek().remembered_email().unwrap_or_default());
    let mut password = use_signal(String::new);
    let mut remember = use_signal(|| auth.peek().remembered_email().is_some());
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        if let Some(target) = signed_in_target(auth.read().session()) {
            navigator.replace(target);
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);
            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Please enter your email and password".to_string()));
                return;
            }

            loading.set(true);
            match api.auth().login_user(&e, &p).await {
                Ok(grant) => {
                    auth.peek().remember_email(remember().then_some(e.as_str()));
                    match sign_in(auth, grant) {
                        Ok(()) => {
                            navigator.replace(dashboard_path(Role::User).unwrap_or("/"));
                        }
                        Err(message) => {
                            loading.set(false);
                            error.set(Some(message));
                        }
                    }
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
            div { class: "auth-card",
                h1 { "Welcome Back" }
                p { class: "auth-card__subtitle", "Sign in to continue your journey" }

                if let Some(message) = error() {
                    Notice { kind: NoticeKind::Error, message }
                }

                form { class: "auth-form", onsubmit: handle_login,
                    Input {
                        r#type: "email",
                        name: "email",
                        label: "Email",
                        placeholder: "Enter your email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    Input {
                        r#type: "password",
                        name: "password",
                        label: "Password",
                        placeholder: "Enter your password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    div { class: "auth-form__row",
                        label { class: "checkbox",
                            input {
                                r#type: "checkbox",
                                checked: remember(),
                                onchange: move |_| remember.toggle(),
                            }
                            " Remember me"
                        }
                        Link { to: "/forgot-password", "Forgot password?" }
                    }
                    Button {
                        r#type: "submit",
                        class: "w-full",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                p { class: "auth-card__footer",
                    "Don't have an account? "
                    Link { to: "/signup", "Sign up" }
                }
                p { class: "auth-card__footer",
                    Link { to: "/admin", "Admin login" }
                    " · "
                    Link { to: "/master", "Master login" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_in_target_waits_for_hydration() {
        assert_eq!(signed_in_target(&store::Session::default()), None);
        assert_eq!(signed_in_target(&store::Session::signed_out()), None);

        let session = store::Session {
            is_authenticated: true,
            role: Role::Admin,
            user_id: Some("a-1".to_string()),
            user_data: None,
            loading: false,
        };
        assert_eq!(signed_in_target(&session), dashboard_path(Role::Admin));
    }
}
