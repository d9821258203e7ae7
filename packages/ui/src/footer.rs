use dioxus::prelude::*;

use crate::icons::{FaGithub, FaInstagram, FaLinkedin};
use crate::Icon;

const QUICK_LINKS: [(&str, &str); 6] = [
    ("Home", "/"),
    ("Events", "/events"),
    ("Event Timeline", "/event-timeline"),
    ("About Us", "/about"),
    ("Clusters", "/clusters"),
    ("Leaderboard", "/leaderboard"),
];

#[component]
pub fn Footer() -> Element {
    let year = chrono::Utc::now().format("%Y").to_string();

    rsx! {
        footer { class: "footer",
            div { class: "footer__grid",
                div { class: "footer__brand",
                    h3 { "ArcStack" }
                    p { class: "footer__tagline", "Coding Club" }
                    p {
                        "A community of developers and coding enthusiasts at KLE Technological University, building the future one line of code at a time."
                    }
                    div { class: "footer__social",
                        a {
                            href: "https://www.linkedin.com/company/arcstack-kle-tech/",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            title: "LinkedIn",
                            Icon { icon: FaLinkedin, width: 18, height: 18 }
                        }
                        a {
                            href: "https://www.instagram.com/arcstack_kletech",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            title: "Instagram",
                            Icon { icon: FaInstagram, width: 18, height: 18 }
                        }
                        Link { to: "/coming-soon",
                            Icon { icon: FaGithub, width: 18, height: 18 }
                        }
                    }
                }
                div { class: "footer__links",
                    h4 { "Quick Links" }
                    ul {
                        for (name, path) in QUICK_LINKS {
                            li { key: "{path}", Link { to: path, "{name}" } }
                        }
                    }
                }
            }
            p { class: "footer__copyright", "© {year} ArcStack Coding Club. All rights reserved." }
        }
    }
}
