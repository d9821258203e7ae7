use serde::{Deserialize, Serialize};
use store::{Event, EventStatus};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventTime {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

impl EventTime {
    pub fn label(&self) -> String {
        match (self.start.is_empty(), self.end.is_empty()) {
            (true, true) => "All Day".to_string(),
            (false, true) => self.start.clone(),
            (true, false) => format!("until {}", self.end),
            (false, false) => format!("{} - {}", self.start, self.end),
        }
    }
}

/// An event document from the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// "upcoming", "ongoing" or "past"
    #[serde(default)]
    pub event_type: Option<String>,
    /// ISO timestamp.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: EventTime,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub participants: Vec<serde_json::Value>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl EventRecord {
    pub fn status(&self) -> EventStatus {
        match self.event_type.as_deref() {
            Some("ongoing") => EventStatus::Ongoing,
            Some("past") | Some("completed") => EventStatus::Completed,
            _ => EventStatus::Upcoming,
        }
    }

    /// Project onto the display model used by the event components.
    /// `numeric_id` is the position in the list being rendered.
    pub fn to_display(&self, numeric_id: u32) -> Event {
        Event {
            id: numeric_id,
            title: self.title.clone(),
            description: self.description.clone(),
            date: self
                .date
                .as_deref()
                .map(|d| d.chars().take(10).collect())
                .unwrap_or_default(),
            time: self.time.label(),
            location: self.location.clone().unwrap_or_else(|| "TBA".to_string()),
            category: self.category.clone().unwrap_or_else(|| "Event".to_string()),
            club: String::new(),
            status: self.status(),
            attendees: self.participants.len() as u32,
            capacity: self.capacity,
            instructor: self.instructor.clone(),
            image: self.image.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// `POST /events/{id}/register` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub status: String,
    #[serde(default)]
    pub participant_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_display() {
        let json = r#"{
            "_id": "e1", "title": "Rust Night", "eventType": "past",
            "date": "2025-03-01T18:00:00.000Z",
            "time": {"start": "18:00", "end": "20:00"},
            "participants": ["u1", "u2"], "capacity": 40
        }"#;
        let record: EventRecord = serde_json::from_str(json).unwrap();
        let event = record.to_display(3);
        assert_eq!(event.id, 3);
        assert_eq!(event.date, "2025-03-01");
        assert_eq!(event.time, "18:00 - 20:00");
        assert_eq!(event.status, EventStatus::Completed);
        assert_eq!(event.attendees, 2);
        assert_eq!(event.location, "TBA");
    }

    #[test]
    fn test_time_label() {
        assert_eq!(EventTime::default().label(), "All Day");
    }
}
