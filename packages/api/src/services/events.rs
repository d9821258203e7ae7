use super::segment;
use crate::models::EventRecord;
use crate::{ApiClient, ApiError};

/// Public event listings.
pub struct EventService<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn events(&self) -> EventService<'_> {
        EventService { client: self }
    }
}

impl EventService<'_> {
    pub async fn all(&self) -> Result<Vec<EventRecord>, ApiError> {
        self.client.get("/events").await
    }

    pub async fn details(&self, event_id: &str) -> Result<EventRecord, ApiError> {
        self.client
            .get(&format!("/events/{}", segment(event_id)))
            .await
    }

    pub async fn upcoming(&self) -> Result<Vec<EventRecord>, ApiError> {
        self.client.get("/events/upcoming").await
    }

    pub async fn past(&self) -> Result<Vec<EventRecord>, ApiError> {
        self.client.get("/events/past").await
    }

    pub async fn ongoing(&self) -> Result<Vec<EventRecord>, ApiError> {
        self.client.get("/events/ongoing").await
    }
}
