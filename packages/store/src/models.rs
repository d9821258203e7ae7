//! # Display models
//!
//! Flat records the pages render. They are `Serialize + Deserialize` so the
//! same types can be filled from the static catalog or from a server response.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Profile`] | Client-safe identity attached to a session. |
//! | [`Event`] | A club event (workshop, competition, talk) with schedule and venue. |
//! | [`Member`] | A club member card: name, SRN, role, branch, year, skills. |
//! | [`Cluster`] | A technical cluster (domain team) and its focus areas. |
//! | [`StudentRanking`] | One row of the student leaderboard. |
//! | [`GroupRanking`] | An aggregated branch or year row of the leaderboard. |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity shown for the signed-in account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub display_name: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub srn: Option<String>,
}

impl Profile {
    /// Up to two initials, used when there is no avatar.
    pub fn initials(&self) -> String {
        initials(&self.display_name)
    }
}

/// Up to two uppercase initials of `name`, `"?"` when empty.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Lifecycle of an event as shown in listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl EventStatus {
    pub const ALL: [EventStatus; 3] = [
        EventStatus::Upcoming,
        EventStatus::Ongoing,
        EventStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Ongoing => "Ongoing",
            EventStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// ISO date: "2025-12-05"
    pub date: String,
    /// Free-form: "4:00 PM - 6:00 PM", "All Day"
    pub time: String,
    pub location: String,
    pub category: String,
    pub club: String,
    pub status: EventStatus,
    pub attendees: u32,
    pub capacity: Option<u32>,
    pub instructor: Option<String>,
    pub image: Option<String>,
    pub tags: Vec<String>,
}

impl Event {
    /// Seats left, if the event has a capacity.
    pub fn seats_left(&self) -> Option<u32> {
        self.capacity.map(|c| c.saturating_sub(self.attendees))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: u32,
    pub name: String,
    pub srn: String,
    pub role: String,
    pub branch: String,
    pub year: String,
    pub cluster: Option<String>,
    pub skills: Vec<String>,
    pub image: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Short slug: "dev", "ai"
    pub id: String,
    pub name: String,
    pub description: String,
    pub foundation: String,
    pub focus_areas: Vec<String>,
    pub technologies: Vec<String>,
}

/// Skill tier shown as a badge on the leaderboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Level {
    /// Tier for a points total.
    pub fn for_points(points: u32) -> Self {
        match points {
            0..=499 => Level::Beginner,
            500..=999 => Level::Intermediate,
            1000..=1499 => Level::Advanced,
            _ => Level::Expert,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
            Level::Expert => "Expert",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentRanking {
    pub rank: u32,
    pub name: String,
    pub srn: String,
    pub branch: String,
    pub year: String,
    pub points: u32,
    pub events_attended: u32,
    pub level: Level,
}

/// Leaderboard row aggregated over a branch or a year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupRanking {
    pub rank: u32,
    pub name: String,
    pub total_points: u32,
    pub students: u32,
}

impl GroupRanking {
    pub fn average_points(&self) -> u32 {
        if self.students == 0 {
            0
        } else {
            self.total_points / self.students
        }
    }
}

/// Medal for the top three ranks.
pub fn rank_medal(rank: u32) -> Option<&'static str> {
    match rank {
        1 => Some("🥇"),
        2 => Some("🥈"),
        3 => Some("🥉"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Asha Rao"), "AR");
        assert_eq!(initials("vaibhav deopa kumar"), "VD");
        assert_eq!(initials("Mono"), "M");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(Level::for_points(0), Level::Beginner);
        assert_eq!(Level::for_points(500), Level::Intermediate);
        assert_eq!(Level::for_points(1499), Level::Advanced);
        assert_eq!(Level::for_points(1500), Level::Expert);
    }

    #[test]
    fn test_group_average_handles_empty_group() {
        let group = GroupRanking {
            rank: 1,
            name: "CSE".to_string(),
            total_points: 0,
            students: 0,
        };
        assert_eq!(group.average_points(), 0);
    }
}
