use dioxus::prelude::*;
use store::Member;

use crate::components::Avatar;
use crate::icons::{FaGithub, FaLinkedin};
use crate::Icon;

#[component]
pub fn MemberCard(member: Member) -> Element {
    let cluster = member
        .cluster
        .as_deref()
        .and_then(store::catalog::clusters::by_id)
        .map(|c| c.name.clone());

    rsx! {
        article { class: "member-card",
            Avatar { name: member.name.clone(), image: member.image.clone(), class: "avatar--lg" }
            h3 { class: "member-card__name", "{member.name}" }
            p { class: "member-card__role", "{member.role}" }
            p { class: "member-card__meta", "{member.branch} · {member.year}" }
            if let Some(cluster) = cluster {
                p { class: "member-card__cluster", "{cluster}" }
            }
            if !member.skills.is_empty() {
                ul { class: "tags",
                    for skill in member.skills.iter() {
                        li { key: "{skill}", class: "tag", "{skill}" }
                    }
                }
            }
            div { class: "member-card__links",
                if let Some(url) = &member.github {
                    a { href: "{url}", target: "_blank", rel: "noopener noreferrer", title: "GitHub",
                        Icon { icon: FaGithub, width: 16, height: 16 }
                    }
                }
                if let Some(url) = &member.linkedin {
                    a { href: "{url}", target: "_blank", rel: "noopener noreferrer", title: "LinkedIn",
                        Icon { icon: FaLinkedin, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}
