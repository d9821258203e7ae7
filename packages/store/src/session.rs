//! # Client session
//!
//! [`Session`] is the snapshot the UI renders from; [`SessionStore`] owns it
//! together with the durable storage it is hydrated from. The web app builds
//! exactly one store at startup and hands it down through context, so every
//! read and write goes through an explicit handle.
//!
//! ## Persisted keys
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] | bearer token issued by the server |
//! | [`ROLE_KEY`] | `"user"`, `"admin"` or `"master"` |
//! | [`USER_ID_KEY`] | server-side id of the signed-in account |
//! | [`REMEMBERED_EMAIL_KEY`] | login-form convenience, survives logout |
//!
//! A session is authenticated only when both a token and a recognised,
//! non-`none` role are stored. Anything else hydrates as signed out and the
//! stale keys are cleared.

use std::fmt;
use std::str::FromStr;

use crate::models::Profile;
use crate::storage::{KeyValueStore, SharedStorage, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const USER_ID_KEY: &str = "userId";
pub const REMEMBERED_EMAIL_KEY: &str = "rememberedEmail";

/// Keys owned by the session. Cleared on logout and on a 401.
pub const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, ROLE_KEY, USER_ID_KEY];

/// Account role carried by the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Admin,
    Master,
    #[default]
    None,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::User, Role::Admin, Role::Master, Role::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Master => "master",
            Role::None => "none",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a persisted role string is not one we know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role `{0}`")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            "master" => Ok(Role::Master),
            "none" => Ok(Role::None),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Snapshot of the client's authentication state.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub is_authenticated: bool,
    pub role: Role,
    pub user_id: Option<String>,
    pub user_data: Option<Profile>,
    /// True until the store has been hydrated from storage.
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            role: Role::None,
            user_id: None,
            user_data: None,
            loading: true,
        }
    }
}

impl Session {
    /// The unauthenticated, fully-loaded snapshot.
    pub fn signed_out() -> Self {
        Self {
            loading: false,
            ..Self::default()
        }
    }

    /// Whether the session is authenticated with one of `roles`.
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.is_authenticated && roles.contains(&self.role)
    }

    /// Name to show in the navbar, falling back to the role.
    pub fn display_name(&self) -> &str {
        match &self.user_data {
            Some(profile) => profile.display_name.as_str(),
            None => self.role.as_str(),
        }
    }
}

/// Remove every session key from `storage`.
///
/// Shared by [`SessionStore::logout`] and the HTTP client's 401 path.
pub fn clear_persisted(storage: &dyn KeyValueStore) {
    for key in SESSION_KEYS {
        storage.remove(key);
    }
}

/// Owner of the session snapshot and its durable storage.
#[derive(Clone)]
pub struct SessionStore {
    storage: SharedStorage,
    session: Session,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session
    }
}

impl SessionStore {
    /// Create a store in the loading state. Call [`hydrate`](Self::hydrate) next.
    pub fn new(storage: SharedStorage) -> Self {
        Self {
            storage,
            session: Session::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn storage(&self) -> SharedStorage {
        self.storage.clone()
    }

    /// Bearer token currently persisted, if any.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// Rebuild the snapshot from durable storage.
    pub fn hydrate(&mut self) -> &Session {
        let token = self.storage.get(TOKEN_KEY);
        let role = self.storage.get(ROLE_KEY);

        self.session = match (token, role) {
            (Some(_), Some(role)) => match role.parse::<Role>() {
                Ok(Role::None) | Err(_) => {
                    tracing::warn!("Discarding stored session with role `{}`", role);
                    clear_persisted(self.storage.as_ref());
                    Session::signed_out()
                }
                Ok(role) => Session {
                    is_authenticated: true,
                    role,
                    user_id: self.storage.get(USER_ID_KEY),
                    user_data: None,
                    loading: false,
                },
            },
            _ => Session::signed_out(),
        };
        &self.session
    }

    /// Persist credentials and replace the snapshot with an authenticated one.
    ///
    /// [`Role::None`] is refused before anything is written. On a storage
    /// failure every session key is cleared and the snapshot falls back to
    /// signed out, so it always agrees with what [`hydrate`](Self::hydrate)
    /// would read back.
    pub fn login(
        &mut self,
        token: &str,
        role: Role,
        user_id: &str,
        user_data: Option<Profile>,
    ) -> Result<(), StorageError> {
        if role == Role::None {
            return Err(StorageError::Role(role.to_string()));
        }

        let writes = [
            (TOKEN_KEY, token),
            (ROLE_KEY, role.as_str()),
            (USER_ID_KEY, user_id),
        ];
        for (key, value) in writes {
            if let Err(e) = self.storage.set(key, value) {
                clear_persisted(self.storage.as_ref());
                self.session = Session::signed_out();
                return Err(e);
            }
        }

        tracing::info!("Signed in as {} ({})", user_id, role);
        self.session = Session {
            is_authenticated: true,
            role,
            user_id: Some(user_id.to_string()),
            user_data,
            loading: false,
        };
        Ok(())
    }

    /// Clear durable storage and reset to the signed-out snapshot.
    pub fn logout(&mut self) {
        clear_persisted(self.storage.as_ref());
        if self.session.is_authenticated {
            tracing::info!("Signed out");
        }
        self.session = Session::signed_out();
    }

    pub fn set_user_data(&mut self, user_data: Option<Profile>) {
        self.session.user_data = user_data;
    }

    pub fn remembered_email(&self) -> Option<String> {
        self.storage.get(REMEMBERED_EMAIL_KEY)
    }

    /// Store or forget the login form's email.
    pub fn remember_email(&self, email: Option<&str>) {
        match email {
            Some(email) => {
                if let Err(e) = self.storage.set(REMEMBERED_EMAIL_KEY, email) {
                    tracing::warn!("Failed to remember email: {}", e);
                }
            }
            None => self.storage.remove(REMEMBERED_EMAIL_KEY),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::MemoryStorage;

    fn store() -> (MemoryStorage, SessionStore) {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(Arc::new(storage.clone()));
        (storage, store)
    }

    fn profile() -> Profile {
        Profile {
            id: "u-1".to_string(),
            display_name: "Asha Rao".to_string(),
            email: Some("asha@example.com".to_string()),
            avatar_url: None,
            srn: Some("01FE21BCS001".to_string()),
        }
    }

    /// Failing store for rollback checks.
    struct ReadOnly(MemoryStorage);

    impl KeyValueStore for ReadOnly {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }
        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == ROLE_KEY {
                return Err(StorageError::Write {
                    key: key.to_string(),
                    reason: "quota".to_string(),
                });
            }
            self.0.set(key, value)
        }
        fn remove(&self, key: &str) {
            self.0.remove(key)
        }
    }

    #[test]
    fn test_new_store_is_loading() {
        let (_, store) = store();
        assert!(store.session().loading);
        assert!(!store.session().is_authenticated);
    }

    #[test]
    fn test_hydrate_empty_storage() {
        let (_, mut store) = store();
        let session = store.hydrate().clone();
        assert_eq!(session, Session::signed_out());
    }

    #[test]
    fn test_hydrate_persisted_session() {
        let (storage, mut store) = store();
        storage.set(TOKEN_KEY, "t").unwrap();
        storage.set(ROLE_KEY, "admin").unwrap();
        storage.set(USER_ID_KEY, "a-9").unwrap();

        let session = store.hydrate();
        assert!(session.is_authenticated);
        assert!(!session.loading);
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.user_id.as_deref(), Some("a-9"));
    }

    #[test]
    fn test_hydrate_token_without_role() {
        let (storage, mut store) = store();
        storage.set(TOKEN_KEY, "t").unwrap();
        assert!(!store.hydrate().is_authenticated);
    }

    #[test]
    fn test_hydrate_unknown_role_clears_storage() {
        let (storage, mut store) = store();
        storage.set(TOKEN_KEY, "t").unwrap();
        storage.set(ROLE_KEY, "superuser").unwrap();
        storage.set(USER_ID_KEY, "x").unwrap();

        assert_eq!(store.hydrate(), &Session::signed_out());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_login_persists_exact_values() {
        let (storage, mut store) = store();
        store
            .login("tok-123", Role::User, "u-1", Some(profile()))
            .unwrap();

        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok-123"));
        assert_eq!(storage.get(ROLE_KEY).as_deref(), Some("user"));
        assert_eq!(storage.get(USER_ID_KEY).as_deref(), Some("u-1"));
        assert_eq!(storage.len(), 3);

        let session = store.session();
        assert!(session.is_authenticated);
        assert_eq!(session.role, Role::User);
        assert_eq!(session.user_id.as_deref(), Some("u-1"));
        assert_eq!(session.display_name(), "Asha Rao");
    }

    #[test]
    fn test_login_then_hydrate_roundtrip() {
        let (storage, mut store) = store();
        store.login("tok", Role::Master, "master", None).unwrap();

        let mut fresh = SessionStore::new(Arc::new(storage));
        let session = fresh.hydrate();
        assert!(session.is_authenticated);
        assert_eq!(session.role, Role::Master);
    }

    #[test]
    fn test_login_rolls_back_on_write_failure() {
        let inner = MemoryStorage::new();
        let mut store = SessionStore::new(Arc::new(ReadOnly(inner.clone())));
        store.hydrate();

        let result = store.login("tok", Role::Admin, "a-1", None);
        assert!(result.is_err());
        assert!(inner.get(TOKEN_KEY).is_none());
        assert_eq!(store.session(), &Session::signed_out());
    }

    #[test]
    fn test_failed_relogin_signs_out() {
        let inner = MemoryStorage::new();
        inner.set(TOKEN_KEY, "old").unwrap();
        inner.set(ROLE_KEY, "user").unwrap();
        inner.set(USER_ID_KEY, "u-1").unwrap();
        let mut store = SessionStore::new(Arc::new(ReadOnly(inner.clone())));
        assert!(store.hydrate().is_authenticated);

        let result = store.login("new", Role::Admin, "a-1", None);
        assert!(result.is_err());
        assert_eq!(store.session(), &Session::signed_out());

        let mut fresh = SessionStore::new(Arc::new(inner));
        assert_eq!(fresh.hydrate(), store.session());
    }

    #[test]
    fn test_login_refuses_role_none() {
        let (storage, mut store) = store();
        store.hydrate();

        let result = store.login("tok", Role::None, "u-1", None);
        assert_eq!(result, Err(StorageError::Role("none".to_string())));
        assert!(storage.is_empty());
        assert!(!store.session().is_authenticated);
    }

    #[test]
    fn test_logout_clears_everything_but_remembered_email() {
        let (storage, mut store) = store();
        store.remember_email(Some("asha@example.com"));
        store.login("tok", Role::Admin, "a-1", None).unwrap();

        store.logout();

        for key in SESSION_KEYS {
            assert!(storage.get(key).is_none(), "{key} should be cleared");
        }
        assert_eq!(store.session(), &Session::signed_out());
        assert_eq!(store.remembered_email().as_deref(), Some("asha@example.com"));
    }

    #[test]
    fn test_set_user_data_keeps_identity() {
        let (_, mut store) = store();
        store.login("tok", Role::User, "u-1", None).unwrap();
        store.set_user_data(Some(profile()));

        let session = store.session();
        assert_eq!(session.role, Role::User);
        assert_eq!(session.user_data, Some(profile()));
    }

    #[test]
    fn test_role_parse_and_display() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
            assert_eq!(role.to_string(), role.as_str());
        }
        assert_eq!(
            "root".parse::<Role>(),
            Err(UnknownRole("root".to_string()))
        );
    }

    #[test]
    fn test_has_any_role_requires_authentication() {
        let session = Session {
            role: Role::Admin,
            ..Session::signed_out()
        };
        assert!(!session.has_any_role(&[Role::Admin]));
    }
}
