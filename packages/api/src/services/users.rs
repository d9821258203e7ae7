use reqwest::Method;

use super::segment;
use crate::models::{Badges, EventRecord, Registration, UserProfile, UserStatsReport};
use crate::{ApiClient, ApiError};

/// Endpoints for the signed-in student.
pub struct UserService<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn users(&self) -> UserService<'_> {
        UserService { client: self }
    }
}

impl UserService<'_> {
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.client.get("/users/profile").await
    }

    pub async fn stats(&self) -> Result<UserStatsReport, ApiError> {
        self.client.get("/users/stats").await
    }

    pub async fn badges(&self) -> Result<Badges, ApiError> {
        self.client.get("/users/badges").await
    }

    pub async fn events(&self) -> Result<Vec<EventRecord>, ApiError> {
        self.client.get("/users/events").await
    }

    pub async fn register_event(&self, event_id: &str) -> Result<Registration, ApiError> {
        let path = format!("/events/{}/register", segment(event_id));
        self.client
            .fetch(self.client.request(Method::POST, &path))
            .await
    }

    pub async fn unregister_event(&self, event_id: &str) -> Result<(), ApiError> {
        let path = format!("/events/{}/unregister", segment(event_id));
        self.client.delete(&path).await
    }
}
