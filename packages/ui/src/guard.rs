//! Role-gated routes.

use dioxus::prelude::*;
use store::{Role, Session};

use crate::auth::use_auth;
use crate::components::Spinner;

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// What a guarded route does for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Storage has not been read yet.
    Loading,
    Allowed,
    RedirectLogin,
    RedirectUnauthorized,
}

impl GuardOutcome {
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            GuardOutcome::RedirectLogin => Some(LOGIN_PATH),
            GuardOutcome::RedirectUnauthorized => Some(UNAUTHORIZED_PATH),
            _ => None,
        }
    }
}

/// Decide whether `session` may see a route open to `allowed`.
///
/// An empty `allowed` list admits any authenticated session.
pub fn evaluate(session: &Session, allowed: &[Role]) -> GuardOutcome {
    if session.loading {
        GuardOutcome::Loading
    } else if !session.is_authenticated {
        GuardOutcome::RedirectLogin
    } else if !allowed.is_empty() && !allowed.contains(&session.role) {
        GuardOutcome::RedirectUnauthorized
    } else {
        GuardOutcome::Allowed
    }
}

/// Render `children` only for sessions holding one of `allowed`.
#[component]
pub fn ProtectedRoute(allowed: Vec<Role>, children: Element) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let effect_allowed = allowed.clone();
    use_effect(move || {
        if let Some(path) = evaluate(auth.read().session(), &effect_allowed).redirect_path() {
            tracing::debug!("Guard redirecting to {}", path);
            navigator.replace(path);
        }
    });

    let outcome = evaluate(auth.read().session(), &allowed);

    match outcome {
        GuardOutcome::Loading => rsx! {
            div { class: "page-center", Spinner {} }
        },
        GuardOutcome::Allowed => rsx! { {children} },
        _ => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session {
            is_authenticated: true,
            role,
            user_id: Some("id".into()),
            user_data: None,
            loading: false,
        }
    }

    #[test]
    fn test_loading_waits() {
        assert_eq!(evaluate(&Session::default(), &[Role::User]), GuardOutcome::Loading);
    }

    #[test]
    fn test_signed_out_goes_to_login() {
        for allowed in [&[Role::User][..], &[Role::Admin], &[Role::Master], &[]] {
            assert_eq!(
                evaluate(&Session::signed_out(), allowed),
                GuardOutcome::RedirectLogin
            );
        }
    }

    #[test]
    fn test_role_matrix() {
        let roles = [Role::User, Role::Admin, Role::Master];
        for held in roles {
            for required in roles {
                let expected = if held == required {
                    GuardOutcome::Allowed
                } else {
                    GuardOutcome::RedirectUnauthorized
                };
                assert_eq!(evaluate(&session(held), &[required]), expected);
            }
        }
    }

    #[test]
    fn test_multiple_allowed_roles() {
        let allowed = [Role::Admin, Role::Master];
        assert_eq!(evaluate(&session(Role::Master), &allowed), GuardOutcome::Allowed);
        assert_eq!(
            evaluate(&session(Role::User), &allowed),
            GuardOutcome::RedirectUnauthorized
        );
        assert_eq!(evaluate(&session(Role::User), &[]), GuardOutcome::Allowed);
    }

    #[test]
    fn test_redirect_paths() {
        assert_eq!(GuardOutcome::RedirectLogin.redirect_path(), Some("/login"));
        assert_eq!(
            GuardOutcome::RedirectUnauthorized.redirect_path(),
            Some("/unauthorized")
        );
        assert_eq!(GuardOutcome::Allowed.redirect_path(), None);
    }

    #[test]
    fn test_no_redirect_until_hydrated() {
        let outcome = evaluate(&Session::default(), &[Role::Admin]);
        assert_eq!(outcome.redirect_path(), None);

        let outcome = evaluate(&Session::signed_out(), &[Role::Admin]);
        assert_eq!(outcome.redirect_path(), Some(LOGIN_PATH));
    }
}
