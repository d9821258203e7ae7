use chrono::{Duration, Utc};
use dioxus::prelude::*;

use crate::auth::{sleep, use_config};
use crate::components::{Button, ButtonVariant, Input, Notice, NoticeKind};
use crate::guard::LOGIN_PATH;
use crate::icons::FaArrowLeft;
use crate::recovery::{
    format_countdown, sanitize_code, DemoOtpIssuer, PasswordRecovery, RecoveryStep,
};
use crate::Icon;

/// Email → code → new password. Redirects to `/login` once complete.
#[component]
pub fn ForgotPassword() -> Element {
    let config = use_config();
    let navigator = use_navigator();
    let ttl = Duration::seconds(config.recovery.otp_ttl_secs as i64);
    let redirect_delay = config.recovery.redirect_delay();

    let mut recovery = use_signal(move || PasswordRecovery::new(DemoOtpIssuer, ttl));
    let mut email = use_signal(String::new);
    let mut code = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut now = use_signal(Utc::now);

    // Drives the countdown; dropped with the component.
    use_future(move || async move {
        loop {
            sleep(std::time::Duration::from_secs(1)).await;
            now.set(Utc::now());
        }
    });

    let step = recovery.read().step();
    let seconds_left = recovery.read().seconds_left(now());
    let can_resend = recovery.read().can_resend(now());
    let demo_code = recovery.read().challenge().map(|c| c.code.clone());

    let send_code = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        success.set(None);
        let at = Utc::now();
        let address = email();
        match recovery.write().request_code(&address, at) {
            Ok(_) => {
                now.set(at);
                success.set(Some(format!("OTP sent to {}. Check your email!", address.trim())));
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let resend = move |_| {
        error.set(None);
        let at = Utc::now();
        match recovery.write().resend_code(at) {
            Ok(_) => {
                now.set(at);
                code.set(String::new());
                success.set(Some("New OTP sent to your email!".to_string()));
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let verify = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        success.set(None);
        let result = recovery.write().verify_code(&code(), Utc::now());
        match result {
            Ok(()) => success.set(Some("OTP verified successfully!".to_string())),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let reset = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        success.set(None);
        let result = recovery.write().reset_password(&password(), &confirm());
        match result {
            Ok(()) => {
                success.set(Some(
                    "Password reset successfully! Redirecting to login...".to_string(),
                ));
                spawn(async move {
                    sleep(redirect_delay).await;
                    navigator.replace(LOGIN_PATH);
                });
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let back_to_login = move |_| {
        recovery.write().cancel();
        navigator.replace(LOGIN_PATH);
    };

    let (title, subtitle) = match step {
        RecoveryStep::EmailEntry => ("Reset Password", "Enter your email to receive an OTP"),
        RecoveryStep::OtpVerification => {
            ("Verify OTP", "Enter the 6-digit code sent to your email")
        }
        RecoveryStep::PasswordReset | RecoveryStep::Complete => {
            ("New Password", "Create a strong new password")
        }
    };
    let password_type = if show_password() { "text" } else { "password" };
    let countdown_class = if seconds_left < 60 { "countdown countdown--low" } else { "countdown" };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                button { class: "auth-card__back", onclick: back_to_login,
                    Icon { icon: FaArrowLeft, width: 14, height: 14 }
                    " Back to Login"
                }
                h1 { "{title}" }
                p { class: "auth-card__subtitle", "{subtitle}" }

                if let Some(message) = error() {
                    Notice { kind: NoticeKind::Error, message }
                }
                if let Some(message) = success() {
                    Notice { kind: NoticeKind::Success, message }
                }

                match step {
                    RecoveryStep::EmailEntry => rsx! {
                        form { class: "auth-form", onsubmit: send_code,
                            Input {
                                r#type: "email",
                                name: "email",
                                label: "Email Address",
                                placeholder: "your.email@example.com",
                                value: email(),
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }
                            Button { r#type: "submit", class: "w-full", "Send OTP" }
                        }
                    },
                    RecoveryStep::OtpVerification => rsx! {
                        form { class: "auth-form", onsubmit: verify,
                            Input {
                                name: "otp",
                                label: "6-Digit OTP",
                                placeholder: "••••••",
                                class: "otp-input",
                                value: code(),
                                oninput: move |evt: FormEvent| code.set(sanitize_code(&evt.value())),
                            }
                            if seconds_left > 0 {
                                div { class: "{countdown_class}",
                                    span { "OTP expires in:" }
                                    strong { "{format_countdown(seconds_left)}" }
                                }
                            }
                            if let Some(demo) = demo_code.filter(|_| seconds_left > 0) {
                                p { class: "auth-card__hint", "Demo mode, no email is sent. Your code is {demo}." }
                            }
                            Button { r#type: "submit", class: "w-full", "Verify OTP" }
                            if can_resend {
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    class: "w-full",
                                    onclick: resend,
                                    "Resend OTP"
                                }
                            }
                        }
                    },
                    RecoveryStep::PasswordReset | RecoveryStep::Complete => rsx! {
                        form { class: "auth-form", onsubmit: reset,
                            Input {
                                r#type: "{password_type}",
                                name: "new-password",
                                label: "New Password",
                                placeholder: "At least 6 characters",
                                disabled: step == RecoveryStep::Complete,
                                value: password(),
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                            Input {
                                r#type: "{password_type}",
                                name: "confirm-password",
                                label: "Confirm Password",
                                disabled: step == RecoveryStep::Complete,
                                value: confirm(),
                                oninput: move |evt: FormEvent| confirm.set(evt.value()),
                            }
                            label { class: "checkbox",
                                input {
                                    r#type: "checkbox",
                                    checked: show_password(),
                                    onchange: move |_| show_password.toggle(),
                                }
                                " Show passwords"
                            }
                            Button {
                                r#type: "submit",
                                class: "w-full",
                                disabled: step == RecoveryStep::Complete,
                                "Reset Password"
                            }
                        }
                    },
                }

                p { class: "auth-card__footer",
                    "Remember your password? "
                    Link { to: LOGIN_PATH, "Sign in" }
                }
            }
        }
    }
}
