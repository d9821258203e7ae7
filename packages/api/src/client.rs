//! # HTTP client wrapper
//!
//! [`ApiClient`] is the single place requests leave the app. It
//!
//! 1. prefixes every path with the configured base URL,
//! 2. attaches `Authorization: Bearer <token>` whenever durable storage holds
//!    a token,
//! 3. treats a 401 from *any* endpoint as an expired session: the session keys
//!    are removed from storage, the injected [`SessionExpiredHook`] runs, and
//!    the call resolves to [`ApiError::SessionExpired`],
//! 4. unwraps the server's `{success, message, data}` envelope, mapping other
//!    failures to [`ApiError::Status`] with the body's `message`.
//!
//! Navigation is not this module's concern: the web app passes a hook that
//! sends the browser to `/login`.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::config::ApiConfig;
use store::session::{clear_persisted, TOKEN_KEY};
use store::{KeyValueStore, SharedStorage};

use crate::error::{message_from_body, ApiError};
use crate::models::Envelope;

/// Callback fired after a 401 has cleared the stored session.
pub type SessionExpiredHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    storage: SharedStorage,
    on_session_expired: Option<SessionExpiredHook>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Arc::ptr_eq(&self.storage, &other.storage)
    }
}

impl ApiClient {
    pub fn new(config: &ApiConfig, storage: SharedStorage) -> Result<Self, ApiError> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout(),
            storage,
            on_session_expired: None,
        })
    }

    /// Like [`new`](Self::new), but falls back to reqwest's default client
    /// when the configured one cannot be built.
    pub fn new_or_default(config: &ApiConfig, storage: SharedStorage) -> Self {
        match Self::new(config, storage.clone()) {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!("Using default HTTP client: {}", e);
                Self {
                    http: reqwest::Client::new(),
                    base_url: config.base_url.trim_end_matches('/').to_string(),
                    timeout: config.timeout(),
                    storage,
                    on_session_expired: None,
                }
            }
        }
    }

    /// Install the callback run when the server rejects the session.
    pub fn with_session_expired(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_session_expired = Some(Arc::new(hook));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Start a request with the bearer token attached when one is stored.
    ///
    /// The timeout is set per request so it also applies in the browser,
    /// where reqwest aborts the fetch instead of dropping a socket.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, self.url(path))
            .timeout(self.timeout);
        match self.storage.get(TOKEN_KEY) {
            Some(token) if !token.is_empty() => builder.bearer_auth(token),
            _ => builder,
        }
    }

    fn expire_session(&self) {
        tracing::info!("Server rejected the session; clearing stored credentials");
        clear_persisted(self.storage.as_ref());
        if let Some(hook) = &self.on_session_expired {
            hook();
        }
    }

    /// Send `builder` and return the raw success body.
    ///
    /// This is where the status policy lives: 401 expires the session, any
    /// other non-2xx becomes [`ApiError::Status`].
    pub async fn dispatch(&self, builder: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.expire_session();
            return Err(ApiError::SessionExpired);
        }

        let body = response.bytes().await?;
        if !status.is_success() {
            let message = message_from_body(&body);
            tracing::error!(
                "Request to {} failed with {}: {}",
                self.base_url,
                status,
                message.as_deref().unwrap_or("<no message>")
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(body.to_vec())
    }

    /// Send `builder` and decode the envelope.
    pub async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Envelope<T>, ApiError> {
        let body = self.dispatch(builder).await?;
        if body.is_empty() {
            return Ok(Envelope::empty());
        }
        Ok(serde_json::from_slice(&body)?)
    }

    /// Send `builder` and return the body as text.
    pub async fn text(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        let body = self.dispatch(builder).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Send `builder` and return the envelope's `data`.
    pub async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        self.send(builder).await?.into_data()
    }

    /// Send `builder`, ignoring any payload.
    pub async fn execute(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.send::<serde_json::Value>(builder).await.map(|_| ())
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.fetch(self.request(Method::GET, path)).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.fetch(self.request(Method::POST, path).json(body)).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.fetch(self.request(Method::PUT, path).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, path)).await
    }
}

#[cfg(test)]
mod tests {
    use store::{KeyValueStore, MemoryStorage};

    use super::*;

    fn client(base: &str) -> ApiClient {
        let config = ApiConfig {
            base_url: base.to_string(),
            ..ApiConfig::default()
        };
        ApiClient::new(&config, Arc::new(MemoryStorage::new())).unwrap()
    }

    #[test]
    fn test_url_joins_single_slash() {
        let api = client("http://localhost:5000/api/");
        assert_eq!(api.base_url(), "http://localhost:5000/api");
        assert_eq!(api.url("/events"), "http://localhost:5000/api/events");
        assert_eq!(api.url("events/7"), "http://localhost:5000/api/events/7");
    }

    #[test]
    fn test_bearer_only_when_token_stored() {
        let storage = MemoryStorage::new();
        let api = ApiClient::new(&ApiConfig::default(), Arc::new(storage.clone())).unwrap();

        let request = api.request(Method::GET, "/users/profile").build().unwrap();
        assert!(request.headers().get("authorization").is_none());

        storage.set(TOKEN_KEY, "tok-1").unwrap();
        let request = api.request(Method::GET, "/users/profile").build().unwrap();
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer tok-1"
        );
    }
}
