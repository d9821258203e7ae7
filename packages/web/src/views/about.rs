use dioxus::prelude::*;
use store::catalog::members;
use ui::MemberCard;

const ACTIVITIES: [(&str, &str, &str); 3] = [
    ("🛠️", "Workshops", "Hands-on sessions on latest tech"),
    ("🏆", "Hackathons", "24-hour coding marathons"),
    ("💻", "Projects", "Real-world application development"),
];

#[component]
pub fn About() -> Element {
    let leads: Vec<_> = members::all()
        .iter()
        .filter(|m| !m.role.starts_with("Member"))
        .cloned()
        .collect();

    rsx! {
        section { class: "page-header",
            h1 { "About Us" }
            p { "KLE Technological University · Belagavi Campus" }
        }
        div { class: "grid grid--2",
            div { class: "card",
                h2 { "Our Mission" }
                p {
                    "To empower students with technical skills, foster a culture of innovation, and build a community of developers who solve real-world problems."
                }
            }
            div { class: "card",
                h2 { "Our Vision" }
                p {
                    "To be the leading student technical community that nurtures future tech leaders and innovators who make a positive impact on society."
                }
            }
        }
        section {
            h2 { "What We Do" }
            div { class: "grid grid--3",
                for (icon, title, description) in ACTIVITIES {
                    div { key: "{title}", class: "feature-card",
                        span { class: "feature-card__icon", "{icon}" }
                        h3 { "{title}" }
                        p { "{description}" }
                    }
                }
            }
        }
        section { id: "members",
            h2 { "Our Team" }
            div { class: "grid grid--4",
                for member in leads {
                    MemberCard { key: "{member.id}", member }
                }
            }
            Link { class: "btn btn--ghost", to: "/members", "Meet everyone" }
        }
    }
}
