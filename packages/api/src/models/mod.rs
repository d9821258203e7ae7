//! Wire models for the club REST API.
//!
//! Field names follow the server's camelCase JSON. Everything the UI might not
//! get (older records, partial projections) is `#[serde(default)]`.

mod auth;
mod event;
mod manage;
mod user;

pub use auth::{
    AdminLogin, AdminRecord, AuthGrant, MasterLogin, MasterRecord, RegisterRequest, UserLogin,
};
pub use event::{EventRecord, EventTime, Registration};
pub use manage::{
    AdminDraft, AdminStats, EventDraft, ExportFormat, NoticeDraft, NoticeRecord, Participant,
    RemovalStep, SystemStats, UserPage, Winner,
};
pub use user::{
    BadgeInfo, BadgeLists, BadgeSummary, Badges, ClassInfo, LeaderboardPage, LeaderboardRow,
    ProfileUpdate, Progress, ProgressItem, StatsSummary, UserProfile, UserRecord, UserStats,
    UserStatsReport,
};

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Standard response body: `{success, message, data}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub(crate) fn empty() -> Self {
        Self {
            success: true,
            message: None,
            data: None,
        }
    }

    pub fn into_data(self) -> Result<T, ApiError> {
        self.data.ok_or(ApiError::MissingData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_data() {
        let json = r#"{"success":true,"message":"ok","data":[1,2,3],"timestamp":"2025-01-01T00:00:00Z"}"#;
        let env: Envelope<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert!(env.success);
        assert_eq!(env.message.as_deref(), Some("ok"));
        assert_eq!(env.into_data().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_envelope_without_data() {
        let env: Envelope<Vec<u32>> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(matches!(env.into_data(), Err(ApiError::MissingData)));

        let env: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"data":null}"#).unwrap();
        assert!(env.data.is_none());
    }
}
