//! Admin and master management payloads.

use serde::{Deserialize, Serialize};

use super::event::EventTime;

/// Body for creating or editing an event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    /// Cluster id the event belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// "YYYY-MM-DD"
    pub date: String,
    pub time: EventTime,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl EventDraft {
    /// First missing required field, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            Some("title")
        } else if self.description.trim().is_empty() {
            Some("description")
        } else if self.date.trim().is_empty() {
            Some("date")
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub srn: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// One placement in `POST /admin/event/{id}/winners`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Winner {
    pub user_id: String,
    pub position: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NoticeDraft {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `GET /admin/stats`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_events: u32,
    #[serde(default)]
    pub upcoming_events: u32,
    #[serde(default)]
    pub total_participants: u32,
    #[serde(default)]
    pub total_notices: u32,
}

/// Body for `POST /master/create-admin`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
}

/// One page of `GET /master/users`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPage {
    #[serde(default)]
    pub users: Vec<super::UserRecord>,
    #[serde(default)]
    pub total: u32,
}

/// `GET /master/stats`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStats {
    #[serde(default)]
    pub total_users: u32,
    #[serde(default)]
    pub total_admins: u32,
    #[serde(default)]
    pub total_events: u32,
    #[serde(default)]
    pub active_users: u32,
}

/// The three confirmations of `DELETE /master/remove-user/{id}`.
///
/// Step 1 asks the server for a confirmation token, step 2 presents it with
/// the master password, step 3 repeats the password to commit the removal.
#[derive(Clone, Debug, PartialEq)]
pub enum RemovalStep {
    Request,
    Confirm { password: String, token: String },
    Commit { password: String },
}

impl RemovalStep {
    pub(crate) fn body(&self) -> serde_json::Value {
        match self {
            RemovalStep::Request => serde_json::json!({ "step": "1" }),
            RemovalStep::Confirm { password, token } => serde_json::json!({
                "step": "2",
                "password": password,
                "confirmationToken": token,
            }),
            RemovalStep::Commit { password } => serde_json::json!({
                "step": "3",
                "password": password,
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_step_bodies() {
        assert_eq!(RemovalStep::Request.body(), serde_json::json!({"step": "1"}));
        let confirm = RemovalStep::Confirm {
            password: "pw".to_string(),
            token: "ct".to_string(),
        };
        assert_eq!(confirm.body()["confirmationToken"], "ct");
        let commit = RemovalStep::Commit {
            password: "pw".to_string(),
        };
        assert_eq!(commit.body()["step"], "3");
    }

    #[test]
    fn test_event_draft_missing_field() {
        let mut draft = EventDraft::default();
        assert_eq!(draft.missing_field(), Some("title"));
        draft.title = "Rust Night".to_string();
        draft.description = "Ownership without tears".to_string();
        assert_eq!(draft.missing_field(), Some("date"));
        draft.date = "2026-01-10".to_string();
        assert_eq!(draft.missing_field(), None);
    }
}
