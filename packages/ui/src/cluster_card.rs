use dioxus::prelude::*;
use store::Cluster;

#[component]
pub fn ClusterCard(cluster: Cluster) -> Element {
    rsx! {
        article { class: "cluster-card", id: "{cluster.id}",
            h3 { "{cluster.name}" }
            p { class: "cluster-card__foundation", "{cluster.foundation}" }
            p { "{cluster.description}" }
            h4 { "Focus areas" }
            ul { class: "cluster-card__focus",
                for area in cluster.focus_areas.iter() {
                    li { key: "{area}", "{area}" }
                }
            }
            h4 { "Technologies" }
            ul { class: "tags",
                for tech in cluster.technologies.iter() {
                    li { key: "{tech}", class: "tag", "{tech}" }
                }
            }
        }
    }
}
