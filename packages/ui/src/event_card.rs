use dioxus::prelude::*;
use store::catalog::events::club_accent;
use store::Event;

use crate::format::{attendance, short_date};
use crate::icons::{FaCalendar, FaClock, FaLocationDot, FaUsers};
use crate::Icon;

#[component]
pub fn EventCard(event: Event) -> Element {
    let accent = club_accent(&event.club);
    let status_class = format!("status status--{}", event.status.label().to_lowercase());

    rsx! {
        article { class: "event-card {accent}",
            div { class: "event-card__media",
                if let Some(image) = &event.image {
                    img { src: "{image}", alt: "{event.title}" }
                }
                span { class: "badge badge--club", "{event.club}" }
                span { class: "badge badge--category", "# {event.category}" }
            }
            div { class: "event-card__body",
                div { class: "event-card__meta",
                    span { Icon { icon: FaCalendar, width: 12, height: 12 } " {short_date(&event.date)}" }
                    span { Icon { icon: FaClock, width: 12, height: 12 } " {event.time}" }
                    span { class: "{status_class}", "{event.status}" }
                }
                h3 { class: "event-card__title", "{event.title}" }
                p { class: "event-card__description", "{event.description}" }
                if let Some(instructor) = &event.instructor {
                    p { class: "event-card__instructor", "By {instructor}" }
                }
                if !event.tags.is_empty() {
                    ul { class: "tags",
                        for tag in event.tags.iter() {
                            li { key: "{tag}", class: "tag", "{tag}" }
                        }
                    }
                }
                footer { class: "event-card__footer",
                    span { Icon { icon: FaLocationDot, width: 12, height: 12 } " {event.location}" }
                    span { Icon { icon: FaUsers, width: 12, height: 12 } " {attendance(event.attendees, event.capacity)}" }
                }
            }
        }
    }
}
