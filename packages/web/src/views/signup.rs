use api::models::RegisterRequest;
use dioxus::prelude::*;
use store::Role;
use ui::components::{Button, Input, Notice, NoticeKind};
use ui::recovery::MIN_PASSWORD_LEN;
use ui::{dashboard_path, failure_message, sign_in, use_api, use_auth};

const YEARS: [&str; 4] = ["1st Year", "2nd Year", "3rd Year", "4th Year"];
const BRANCHES: [&str; 6] = ["CSE", "AI & DS", "ECE", "EEE", "ME", "Civil"];

/// First problem with a registration form, if any.
fn validate(request: &RegisterRequest, confirm: &str) -> Result<(), &'static str> {
    let required = [
        &request.full_name,
        &request.email,
        &request.srn,
        &request.year,
        &request.branch,
        &request.password,
    ];
    if required.iter().any(|v| v.trim().is_empty()) || confirm.is_empty() {
        return Err("Please fill in all required fields");
    }
    if !request.email.contains('@') {
        return Err("Please enter a valid email");
    }
    if request.password != confirm {
        return Err("Passwords do not match");
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters long");
    }
    Ok(())
}

#[component]
pub fn Signup() -> Element {
    let auth = use_auth();
    let api = use_api();
    let navigator = use_navigator();

    let mut form = use_signal(RegisterRequest::default);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);
            let mut request = form();
            request.full_name = request.full_name.trim().to_string();
            request.email = request.email.trim().to_string();
            request.srn = request.srn.trim().to_uppercase();
            if let Err(message) = validate(&request, &confirm()) {
                error.set(Some(message.to_string()));
                return;
            }

            loading.set(true);
            match api.auth().register_user(&request).await {
                Ok(grant) => match sign_in(auth, grant) {
                    Ok(()) => {
                        navigator.replace(dashboard_path(Role::User).unwrap_or("/"));
                    }
                    Err(message) => {
                        loading.set(false);
                        error.set(Some(message));
                    }
                },
                Err(err) => {
                    loading.set(false);
                    error.set(failure_message(auth, &err, "Registration failed. Please try again."));
                }
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card auth-card--wide",
                h1 { "Create Account" }
                p { class: "auth-card__subtitle", "Join the community of innovators" }

                if let Some(message) = error() {
                    Notice { kind: NoticeKind::Error, message }
                }

                form { class: "auth-form auth-form--grid", onsubmit: handle_signup,
                    Input {
                        name: "fullName",
                        label: "Full Name",
                        placeholder: "John Doe",
                        value: form.read().full_name.clone(),
                        oninput: move |evt: FormEvent| form.write().full_name = evt.value(),
                    }
                    Input {
                        r#type: "email",
                        name: "email",
                        label: "Email",
                        placeholder: "john@example.com",
                        value: form.read().email.clone(),
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                    Input {
                        name: "srn",
                        label: "SRN",
                        placeholder: "01FE22BCS001",
                        value: form.read().srn.clone(),
                        oninput: move |evt: FormEvent| form.write().srn = evt.value(),
                    }
                    label { class: "field",
                        span { class: "field__label", "Year" }
                        select {
                            class: "field__input",
                            value: "{form.read().year}",
                            onchange: move |evt: FormEvent| form.write().year = evt.value(),
                            option { value: "", "Select year" }
                            for year in YEARS {
                                option { key: "{year}", value: "{year}", "{year}" }
                            }
                        }
                    }
                    label { class: "field",
                        span { class: "field__label", "Branch" }
                        select {
                            class: "field__input",
                            value: "{form.read().branch}",
                            onchange: move |evt: FormEvent| form.write().branch = evt.value(),
                            option { value: "", "Select branch" }
                            for branch in BRANCHES {
                                option { key: "{branch}", value: "{branch}", "{branch}" }
                            }
                        }
                    }
                    Input {
                        name: "division",
                        label: "Division",
                        placeholder: "A",
                        value: form.read().division.clone(),
                        oninput: move |evt: FormEvent| form.write().division = evt.value(),
                    }
                    Input {
                        r#type: "password",
                        name: "password",
                        label: "Password",
                        placeholder: "At least 6 characters",
                        value: form.read().password.clone(),
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                    Input {
                        r#type: "password",
                        name: "confirmPassword",
                        label: "Confirm Password",
                        value: confirm(),
                        oninput: move |evt: FormEvent| confirm.set(evt.value()),
                    }
                    Button {
                        r#type: "submit",
                        class: "w-full auth-form__submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Sign up" }
                    }
                }

                p { class: "auth-card__footer",
                    "Already have an account? "
                    Link { to: "/login", "Sign in" }
                }
            }
        }
    }
}
