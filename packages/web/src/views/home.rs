use dioxus::prelude::*;
use store::catalog::events;
use store::EventStatus;
use ui::icons::{FaCalendarDays, FaTrophy, FaUsers};
use ui::{AnimatedCounter, EventCard, Icon};

const FEATURES: [(&str, &str); 6] = [
    (
        "Skill Development",
        "Learn from industry experts through workshops, bootcamps, and mentoring sessions",
    ),
    (
        "Competitions",
        "Participate in coding contests and hackathons to challenge yourself",
    ),
    (
        "Networking",
        "Connect with like-minded developers and build lasting professional relationships",
    ),
    ("Projects", "Collaborate on real-world projects and build your portfolio"),
    ("Mentorship", "Get guidance from experienced members and senior developers"),
    ("Community", "Be part of a supportive community that celebrates your growth"),
];

#[component]
pub fn Home() -> Element {
    let upcoming: Vec<_> = events::by_status(EventStatus::Upcoming)
        .into_iter()
        .take(3)
        .cloned()
        .collect();

    rsx! {
        section { class: "hero",
            h1 { class: "hero__title", "ArcStack Coding Club" }
            p { class: "hero__subtitle",
                "Be a part of KLE Tech's coding community! Learn, build and compete with developers who love to code."
            }
            div { class: "hero__actions",
                Link { class: "btn btn--primary", to: "/signup", "Join Now" }
                Link { class: "btn btn--secondary", to: "/events", "Browse Events" }
            }
        }

        section { class: "stats",
            div { class: "stat-card",
                Icon { icon: FaUsers, width: 28, height: 28 }
                AnimatedCounter { target: 500, suffix: "+" }
                p { "Active Members" }
            }
            div { class: "stat-card",
                Icon { icon: FaCalendarDays, width: 28, height: 28 }
                AnimatedCounter { target: 50, suffix: "+" }
                p { "Events Annually" }
            }
            div { class: "stat-card",
                Icon { icon: FaTrophy, width: 28, height: 28 }
                AnimatedCounter { target: 15, suffix: "+" }
                p { "Years Strong" }
            }
        }

        section { class: "features",
            h2 { "What We Offer" }
            div { class: "grid grid--3",
                for (title, description) in FEATURES {
                    div { key: "{title}", class: "feature-card",
                        h3 { "{title}" }
                        p { "{description}" }
                    }
                }
            }
        }

        if !upcoming.is_empty() {
            section { class: "home-events",
                h2 { "Upcoming Events" }
                div { class: "grid grid--3",
                    for event in upcoming {
                        EventCard { key: "{event.id}", event }
                    }
                }
                Link { class: "btn btn--ghost", to: "/events", "Explore Events" }
            }
        }

        section { class: "cta",
            h2 { "Ready to start your journey?" }
            p { "Be a part of KLE Tech's coding community!" }
            Link { class: "btn btn--primary", to: "/signup", "Join Now" }
        }
    }
}
