use super::segment;
use crate::models::LeaderboardPage;
use crate::{ApiClient, ApiError};

pub struct LeaderboardService<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn leaderboard(&self) -> LeaderboardService<'_> {
        LeaderboardService { client: self }
    }
}

impl LeaderboardService<'_> {
    pub async fn global(&self) -> Result<LeaderboardPage, ApiError> {
        self.client.get("/leaderboard").await
    }

    pub async fn class(&self, class_name: &str) -> Result<LeaderboardPage, ApiError> {
        self.client
            .get(&format!("/leaderboard/class/{}", segment(class_name)))
            .await
    }
}
