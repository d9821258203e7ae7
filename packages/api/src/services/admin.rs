use serde_json::json;

use super::segment;
use crate::models::{AdminStats, EventDraft, EventRecord, NoticeDraft, NoticeRecord, Participant, Winner};
use crate::{ApiClient, ApiError};

/// Event, participant, winner and notice management for admins.
pub struct AdminService<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn admin(&self) -> AdminService<'_> {
        AdminService { client: self }
    }
}

impl AdminService<'_> {
    pub async fn events(&self) -> Result<Vec<EventRecord>, ApiError> {
        self.client.get("/admin/events").await
    }

    pub async fn create_event(&self, draft: &EventDraft) -> Result<EventRecord, ApiError> {
        self.client.post("/admin/event/create", draft).await
    }

    pub async fn update_event(&self, event_id: &str, draft: &EventDraft) -> Result<EventRecord, ApiError> {
        let path = format!("/admin/event/{}/edit", segment(event_id));
        self.client.put(&path, draft).await
    }

    pub async fn delete_event(&self, event_id: &str) -> Result<(), ApiError> {
        let path = format!("/admin/event/{}/delete", segment(event_id));
        self.client.delete(&path).await
    }

    pub async fn participants(&self, event_id: &str) -> Result<Vec<Participant>, ApiError> {
        let path = format!("/admin/event/{}/participants", segment(event_id));
        self.client.get(&path).await
    }

    pub async fn add_participant(&self, event_id: &str, participant_id: &str) -> Result<(), ApiError> {
        let path = format!("/admin/event/{}/participant/add", segment(event_id));
        let body = json!({ "participantId": participant_id });
        let request = self.client.request(reqwest::Method::POST, &path).json(&body);
        self.client.execute(request).await
    }

    pub async fn remove_participant(&self, event_id: &str, participant_id: &str) -> Result<(), ApiError> {
        let path = format!(
            "/admin/event/{}/participant/{}/remove",
            segment(event_id),
            segment(participant_id)
        );
        self.client.delete(&path).await
    }

    pub async fn declare_winners(&self, event_id: &str, winners: &[Winner]) -> Result<(), ApiError> {
        let path = format!("/admin/event/{}/winners", segment(event_id));
        let body = json!({ "winners": winners });
        let request = self.client.request(reqwest::Method::POST, &path).json(&body);
        self.client.execute(request).await
    }

    pub async fn notices(&self) -> Result<Vec<NoticeRecord>, ApiError> {
        self.client.get("/admin/notices").await
    }

    pub async fn create_notice(&self, draft: &NoticeDraft) -> Result<NoticeRecord, ApiError> {
        self.client.post("/admin/notice/add", draft).await
    }

    pub async fn update_notice(&self, notice_id: &str, draft: &NoticeDraft) -> Result<NoticeRecord, ApiError> {
        let path = format!("/admin/notice/{}/edit", segment(notice_id));
        self.client.put(&path, draft).await
    }

    pub async fn delete_notice(&self, notice_id: &str) -> Result<(), ApiError> {
        let path = format!("/admin/notice/{}/delete", segment(notice_id));
        self.client.delete(&path).await
    }

    pub async fn stats(&self) -> Result<AdminStats, ApiError> {
        self.client.get("/admin/stats").await
    }
}
