use std::sync::LazyLock;

use crate::models::{Event, EventStatus};

use super::unique;

static EVENTS: LazyLock<Vec<Event>> = LazyLock::new(|| {
    vec![
        Event {
            id: 1,
            title: "Chai aur Code - 1".to_string(),
            description: "A bi-weekly workshop by the Programming Cluster that teaches what \
                truly matters in programming through hands-on coding. Prepares you for \
                Algo-Rush with peer-to-peer debugging and interview prep."
                .to_string(),
            date: "2025-11-29".to_string(),
            time: "1:00 PM - 5:00 PM".to_string(),
            location: "Step Hall".to_string(),
            category: "Workshop".to_string(),
            club: "Programming".to_string(),
            status: EventStatus::Completed,
            attendees: 0,
            capacity: None,
            instructor: Some("Adarsh Kakatkar".to_string()),
            image: Some("/images/chai-aur-code.jpg".to_string()),
            tags: tags(&["C++", "Java", "STL", "DSA", "LeetCode"]),
        },
        Event {
            id: 2,
            title: "Chai aur Arrays".to_string(),
            description: "An extension of the Chai aur Code series diving into intermediate \
                array patterns, implementation-focused drills and placement-level \
                interview questions."
                .to_string(),
            date: "2025-12-03".to_string(),
            time: "5:00 PM - 7:00 PM".to_string(),
            location: "Language Lab".to_string(),
            category: "Workshop".to_string(),
            club: "Programming".to_string(),
            status: EventStatus::Completed,
            attendees: 60,
            capacity: Some(60),
            instructor: Some("Adarsh Kakatkar".to_string()),
            image: Some("/images/chai-aur-arrays.jpg".to_string()),
            tags: tags(&["Arrays", "C++", "Java", "DSA", "Placement Prep"]),
        },
        Event {
            id: 3,
            title: "Chai aur Code - 2".to_string(),
            description: "The second round of Chai aur Code with separate C++ and Java \
                classes, covering STL, utility libraries and LeetCode-style problems."
                .to_string(),
            date: "2025-12-06".to_string(),
            time: "2:00 PM - 5:00 PM".to_string(),
            location: "Step Hall & MB 208".to_string(),
            category: "Workshop".to_string(),
            club: "Programming".to_string(),
            status: EventStatus::Upcoming,
            attendees: 0,
            capacity: None,
            instructor: Some("Vaibhav Deopa".to_string()),
            image: Some("/images/chai-aur-code-3.jpg".to_string()),
            tags: tags(&["C++", "Java", "STL", "DSA", "LeetCode"]),
        },
        Event {
            id: 4,
            title: "Web Development Bootcamp".to_string(),
            description: "Master modern web development with React, Node.js and MongoDB. \
                Learn full-stack development from scratch with hands-on projects."
                .to_string(),
            date: "2025-12-05".to_string(),
            time: "4:00 PM - 6:00 PM".to_string(),
            location: "Main Hall".to_string(),
            category: "Workshop".to_string(),
            club: "Development".to_string(),
            status: EventStatus::Upcoming,
            attendees: 45,
            capacity: Some(50),
            instructor: Some("John Smith".to_string()),
            image: None,
            tags: tags(&["React", "Node.js", "MongoDB"]),
        },
        Event {
            id: 5,
            title: "Python for Data Science".to_string(),
            description: "NumPy, pandas and visualisation fundamentals for analysing real \
                datasets."
                .to_string(),
            date: "2025-12-08".to_string(),
            time: "3:30 PM - 5:30 PM".to_string(),
            location: "Lab 5".to_string(),
            category: "Course".to_string(),
            club: "AI".to_string(),
            status: EventStatus::Upcoming,
            attendees: 28,
            capacity: Some(35),
            instructor: Some("Dr. Michael Chen".to_string()),
            image: None,
            tags: tags(&["Python", "pandas", "Data Science"]),
        },
        Event {
            id: 6,
            title: "Git & Version Control Basics".to_string(),
            description: "Branching, merging and collaborating on GitHub without fear."
                .to_string(),
            date: "2025-12-10".to_string(),
            time: "3:00 PM - 4:30 PM".to_string(),
            location: "Lab 3".to_string(),
            category: "Workshop".to_string(),
            club: "Development".to_string(),
            status: EventStatus::Ongoing,
            attendees: 55,
            capacity: Some(60),
            instructor: Some("Tom Brady".to_string()),
            image: None,
            tags: tags(&["Git", "GitHub"]),
        },
        Event {
            id: 7,
            title: "Hackathon 2025".to_string(),
            description: "A 24-hour coding marathon with prizes and networking \
                opportunities. Build amazing projects and compete with the best."
                .to_string(),
            date: "2025-12-20".to_string(),
            time: "All Day".to_string(),
            location: "Convention Center".to_string(),
            category: "Competition".to_string(),
            club: "Emerging Tech".to_string(),
            status: EventStatus::Upcoming,
            attendees: 120,
            capacity: Some(150),
            instructor: Some("Event Committee".to_string()),
            image: None,
            tags: tags(&["Hackathon", "Prizes"]),
        },
        Event {
            id: 8,
            title: "Previous Hackathon - Winter 2024".to_string(),
            description: "Last winter's hackathon, where 95 participants shipped projects \
                across web, AI and hardware tracks."
                .to_string(),
            date: "2025-02-15".to_string(),
            time: "All Day".to_string(),
            location: "Convention Center".to_string(),
            category: "Competition".to_string(),
            club: "Emerging Tech".to_string(),
            status: EventStatus::Completed,
            attendees: 95,
            capacity: Some(150),
            instructor: Some("Event Committee".to_string()),
            image: None,
            tags: tags(&["Hackathon"]),
        },
    ]
});

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn all() -> &'static [Event] {
    &EVENTS
}

pub fn by_status(status: EventStatus) -> Vec<&'static Event> {
    EVENTS.iter().filter(|e| e.status == status).collect()
}

pub fn by_category(category: &str) -> Vec<&'static Event> {
    EVENTS.iter().filter(|e| e.category == category).collect()
}

pub fn by_id(id: u32) -> Option<&'static Event> {
    EVENTS.iter().find(|e| e.id == id)
}

pub fn categories() -> Vec<String> {
    unique(EVENTS.iter().map(|e| e.category.as_str()))
}

pub fn clubs() -> Vec<String> {
    unique(EVENTS.iter().map(|e| e.club.as_str()))
}

/// Events in date order for the timeline, oldest first.
pub fn timeline() -> Vec<&'static Event> {
    let mut events: Vec<&Event> = EVENTS.iter().collect();
    events.sort_by(|a, b| a.date.cmp(&b.date));
    events
}

/// Date window for the events page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventWindow {
    #[default]
    All,
    /// Dated today or later.
    Upcoming,
    Past,
}

impl EventWindow {
    pub const ALL: [EventWindow; 3] = [EventWindow::All, EventWindow::Upcoming, EventWindow::Past];

    pub fn label(&self) -> &'static str {
        match self {
            EventWindow::All => "All Events",
            EventWindow::Upcoming => "Upcoming",
            EventWindow::Past => "Past",
        }
    }

    /// `today` is an ISO date; ISO dates order correctly as strings.
    pub fn contains(&self, event: &Event, today: &str) -> bool {
        match self {
            EventWindow::All => true,
            EventWindow::Upcoming => event.date.as_str() >= today,
            EventWindow::Past => event.date.as_str() < today,
        }
    }
}

/// Timeline events inside `window`.
pub fn in_window(window: EventWindow, today: &str) -> Vec<&'static Event> {
    timeline()
        .into_iter()
        .filter(|e| window.contains(e, today))
        .collect()
}

/// Accent classes for a club badge.
pub fn club_accent(club: &str) -> &'static str {
    match club {
        "Development" => "accent-cyan",
        "AI" => "accent-purple",
        "Emerging Tech" => "accent-green",
        "Programming" => "accent-orange",
        _ => "accent-slate",
    }
}
