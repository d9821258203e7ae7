use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::segment;
use crate::models::{AdminDraft, AdminRecord, EventDraft, EventRecord, ExportFormat, RemovalStep, SystemStats, UserPage};
use crate::{ApiClient, ApiError};

/// Query for `GET /master/users`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Reply to one step of the user-removal handshake.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalReply {
    /// Issued by step 1, required by step 2.
    #[serde(default)]
    pub confirmation_token: Option<String>,
    /// Set by step 2 once the master password checks out.
    #[serde(default)]
    pub verified: bool,
}

/// System-wide administration for the master account.
pub struct MasterService<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn master(&self) -> MasterService<'_> {
        MasterService { client: self }
    }
}

impl MasterService<'_> {
    pub async fn admins(&self) -> Result<Vec<AdminRecord>, ApiError> {
        self.client.get("/master/admins").await
    }

    pub async fn create_admin(&self, draft: &AdminDraft) -> Result<AdminRecord, ApiError> {
        self.client.post("/master/create-admin", draft).await
    }

    pub async fn remove_admin(&self, admin_id: &str) -> Result<(), ApiError> {
        let path = format!("/master/remove-admin/{}", segment(admin_id));
        self.client.delete(&path).await
    }

    pub async fn reactivate_admin(&self, admin_id: &str) -> Result<(), ApiError> {
        let path = format!("/master/reactivate-admin/{}", segment(admin_id));
        self.client
            .execute(self.client.request(Method::PUT, &path))
            .await
    }

    pub async fn users(&self, query: &UserQuery) -> Result<UserPage, ApiError> {
        let request = self.client.request(Method::GET, "/master/users").query(query);
        self.client.fetch(request).await
    }

    pub async fn remove_user(&self, user_id: &str, step: &RemovalStep) -> Result<RemovalReply, ApiError> {
        let path = format!("/master/remove-user/{}", segment(user_id));
        let request = self.client.request(Method::DELETE, &path).json(&step.body());
        let envelope = self.client.send::<RemovalReply>(request).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    pub async fn add_past_event(&self, draft: &EventDraft) -> Result<EventRecord, ApiError> {
        self.client.post("/master/event/past/add", draft).await
    }

    pub async fn edit_past_event(&self, event_id: &str, draft: &EventDraft) -> Result<EventRecord, ApiError> {
        let path = format!("/master/event/past/edit/{}", segment(event_id));
        self.client.put(&path, draft).await
    }

    pub async fn delete_past_event(&self, event_id: &str, password: &str) -> Result<(), ApiError> {
        let path = format!("/master/event/past/delete/{}", segment(event_id));
        let request = self
            .client
            .request(Method::DELETE, &path)
            .json(&json!({ "password": password }));
        self.client.execute(request).await
    }

    pub async fn stats(&self) -> Result<SystemStats, ApiError> {
        self.client.get("/master/stats").await
    }

    /// Raw export body in the requested format.
    pub async fn export(&self, format: ExportFormat) -> Result<String, ApiError> {
        let request = self
            .client
            .request(Method::GET, "/master/stats/export")
            .query(&[("format", format.as_str())]);
        self.client.text(request).await
    }
}
