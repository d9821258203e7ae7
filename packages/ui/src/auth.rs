//! Session and API contexts for the UI.
//!
//! [`AuthProvider`] owns the app's single [`SessionStore`] and [`ApiClient`]
//! and shares them through context. Children read them with [`use_auth`] and
//! [`use_api`].

use api::{ApiClient, ApiError, AuthGrant};
use dioxus::prelude::*;
use store::{ClientConfig, SessionStore};

use crate::guard::LOGIN_PATH;

/// The session store shared with every component.
pub fn use_auth() -> Signal<SessionStore> {
    use_context::<Signal<SessionStore>>()
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Full-page navigation to `path`.
///
/// Used where the session changes underneath the router, so the next page
/// hydrates from storage again.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("Redirect to {} requested outside the browser", path);
    }
}

/// Sleep on whichever timer the target has.
pub async fn sleep(duration: std::time::Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Apply a successful login to the shared store.
pub fn sign_in(mut auth: Signal<SessionStore>, grant: AuthGrant) -> Result<(), String> {
    auth.write()
        .login(&grant.token, grant.role, &grant.user_id, Some(grant.profile))
        .map_err(|e| {
            tracing::warn!("Could not persist session: {}", e);
            e.to_string()
        })
}

/// Turn a failed request into the message a view should show.
///
/// A rejected session also resets the in-memory store; the client has
/// already cleared storage and triggered the redirect, so `None` is returned
/// and nothing should be displayed.
pub fn failure_message(
    mut auth: Signal<SessionStore>,
    err: &ApiError,
    fallback: &str,
) -> Option<String> {
    if err.is_session_expired() {
        auth.write().logout();
        return None;
    }
    Some(err.message_or(fallback))
}

/// Provider component that builds the session store and API client.
/// Wrap the router with this component.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_hook(ClientConfig::from_build_env);
    let storage = use_hook(store::platform_storage);

    let mut session = use_signal({
        let storage = storage.clone();
        move || SessionStore::new(storage)
    });

    let client = use_hook(|| {
        ApiClient::new_or_default(&config.api, storage.clone())
            .with_session_expired(|| redirect(LOGIN_PATH))
    });

    // Read persisted credentials once mounted; until then guards see `loading`.
    use_effect(move || {
        let mut store = session.write();
        let snapshot = store.hydrate();
        tracing::debug!(
            "Session hydrated: authenticated={} role={}",
            snapshot.is_authenticated,
            snapshot.role
        );
    });

    use_context_provider(|| session);
    use_context_provider(|| client);
    use_context_provider(|| config);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth = use_auth();
    let navigator = use_navigator();

    let onclick = move |_| {
        auth.write().logout();
        navigator.replace(LOGIN_PATH);
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
