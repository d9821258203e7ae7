use serde::{Deserialize, Serialize};
use store::Profile;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassInfo {
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub division: String,
}

impl ClassInfo {
    /// "3rd Year CSE-A"
    pub fn label(&self) -> String {
        match (self.branch.is_empty(), self.division.is_empty()) {
            (true, _) => self.year.clone(),
            (false, true) => format!("{} {}", self.year, self.branch),
            (false, false) => format!("{} {}-{}", self.year, self.branch, self.division),
        }
    }
}

/// A user document as returned by auth and management endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub srn: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub class: Option<ClassInfo>,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UserRecord {
    pub fn to_profile(&self) -> Profile {
        Profile {
            id: self.id.clone(),
            display_name: self.full_name.clone(),
            email: self.email.clone(),
            avatar_url: self.profile_pic.clone(),
            srn: self.srn.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub participation: u32,
    #[serde(default)]
    pub cluster_points: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressItem {
    #[serde(default, alias = "earned")]
    pub count: u32,
    #[serde(default, alias = "total")]
    pub target: u32,
    #[serde(default)]
    pub percentage: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default)]
    pub badges: ProgressItem,
    #[serde(default)]
    pub participation: ProgressItem,
    #[serde(default)]
    pub wins: ProgressItem,
}

/// `GET /users/profile`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub srn: Option<String>,
    #[serde(default)]
    pub class: Option<ClassInfo>,
    #[serde(default)]
    pub bio: Option<String>,
    /// Data URL of the attendance QR code.
    #[serde(default)]
    pub qr_code: Option<String>,
    #[serde(default)]
    pub stats: UserStats,
    #[serde(default)]
    pub progress: Progress,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub events_participated: u32,
}

impl UserProfile {
    pub fn to_profile(&self) -> Profile {
        Profile {
            id: self.id.clone(),
            display_name: self.full_name.clone(),
            email: self.email.clone(),
            avatar_url: self.profile_pic.clone(),
            srn: self.srn.clone(),
        }
    }
}

/// `PUT /auth/profile` body. Only set fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    #[serde(default)]
    pub total_contribution: u32,
    #[serde(default)]
    pub average_points_per_event: u32,
    #[serde(default)]
    pub win_rate: u32,
}

/// `GET /users/stats`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStatsReport {
    #[serde(default)]
    pub stats: UserStats,
    #[serde(default)]
    pub summary: StatsSummary,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeInfo {
    pub emoji: String,
    pub name: String,
    #[serde(default)]
    pub earned: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeSummary {
    #[serde(default)]
    pub total_earned: u32,
    #[serde(default)]
    pub total_available: u32,
    #[serde(default)]
    pub percentage: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BadgeLists {
    #[serde(default)]
    pub earned: Vec<BadgeInfo>,
    #[serde(default)]
    pub available: Vec<BadgeInfo>,
}

/// `GET /users/badges`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Badges {
    #[serde(default)]
    pub summary: BadgeSummary,
    #[serde(default)]
    pub badges: BadgeLists,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    pub rank: u32,
    pub full_name: String,
    #[serde(default)]
    pub srn: Option<String>,
    #[serde(default)]
    pub class: Option<ClassInfo>,
    #[serde(default)]
    pub stats: UserStats,
    #[serde(default)]
    pub is_current_user: bool,
}

/// `GET /leaderboard` and `GET /leaderboard/class/{class}`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardPage {
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardRow>,
    #[serde(default)]
    pub current_user_rank: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_with_partial_fields() {
        let json = r#"{
            "_id": "u1", "fullName": "Asha Rao",
            "stats": {"wins": 2, "participation": 9, "clusterPoints": 640},
            "progress": {"badges": {"earned": 3, "total": 25, "percentage": 12}},
            "badges": ["🔥", "⭐"], "eventsParticipated": 9
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.stats.cluster_points, 640);
        assert_eq!(profile.progress.badges.count, 3);
        assert_eq!(profile.progress.badges.target, 25);
        assert_eq!(profile.progress.wins, ProgressItem::default());
        assert_eq!(profile.to_profile().display_name, "Asha Rao");
    }

    #[test]
    fn test_class_label() {
        let class = ClassInfo {
            year: "3rd Year".to_string(),
            branch: "CSE".to_string(),
            division: "A".to_string(),
        };
        assert_eq!(class.label(), "3rd Year CSE-A");
        let no_div = ClassInfo {
            division: String::new(),
            ..class
        };
        assert_eq!(no_div.label(), "3rd Year CSE");
    }

    #[test]
    fn test_profile_update_skips_unset() {
        let update = ProfileUpdate {
            bio: Some("Rustacean".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, serde_json::json!({"bio": "Rustacean"}));
    }
}
