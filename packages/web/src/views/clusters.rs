use dioxus::prelude::*;
use store::catalog::clusters;
use ui::ClusterCard;

#[component]
pub fn Clusters() -> Element {
    rsx! {
        section { class: "page-header",
            h1 { "Clusters" }
            p { "Focused teams inside the club, each with its own stack." }
        }
        nav { class: "tabs",
            for cluster in clusters::all() {
                a { key: "{cluster.id}", class: "tab", href: "#{cluster.id}", "{cluster.name}" }
            }
        }
        div { class: "grid grid--2",
            for cluster in clusters::all() {
                ClusterCard { key: "{cluster.id}", cluster: cluster.clone() }
            }
        }
    }
}
