use dioxus::prelude::*;
use store::catalog::events::club_accent;
use store::Event;

use crate::format::long_date;

/// Vertical timeline, alternating sides, in the order given.
#[component]
pub fn EventTimeline(events: Vec<Event>) -> Element {
    if events.is_empty() {
        return rsx! {
            p { class: "empty-state", "No events to show yet." }
        };
    }

    rsx! {
        ol { class: "timeline",
            for (index, event) in events.iter().enumerate() {
                li {
                    key: "{event.id}",
                    class: if index % 2 == 0 { "timeline__item timeline__item--left" } else { "timeline__item timeline__item--right" },
                    span { class: "timeline__dot {club_accent(&event.club)}" }
                    div { class: "timeline__card",
                        time { class: "timeline__date", datetime: "{event.date}", "{long_date(&event.date)}" }
                        h3 { "{event.title}" }
                        p { class: "timeline__club", "{event.club} · {event.time}" }
                        p { "{event.description}" }
                    }
                }
            }
        }
    }
}
