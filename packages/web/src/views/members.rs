use dioxus::prelude::*;
use store::catalog::members::{self, MemberFilter};
use ui::icons::FaMagnifyingGlass;
use ui::{Icon, MemberCard};

fn choice(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// A `<select>` over `options` with an "all" entry mapped to `None`.
#[component]
fn FilterSelect(
    label: String,
    options: Vec<String>,
    value: Option<String>,
    onchange: EventHandler<Option<String>>,
) -> Element {
    let selected = value.unwrap_or_default();
    rsx! {
        label { class: "filter",
            span { "{label}" }
            select {
                value: "{selected}",
                onchange: move |evt: FormEvent| onchange.call(choice(evt.value())),
                option { value: "", "All" }
                for option in options {
                    option { key: "{option}", value: "{option}", "{option}" }
                }
            }
        }
    }
}

#[component]
pub fn Members() -> Element {
    let mut filter = use_signal(MemberFilter::default);
    let shown: Vec<_> = members::filter(&filter.read()).into_iter().cloned().collect();
    let total = members::all().len();

    rsx! {
        section { class: "page-header",
            h1 { "Members" }
            p { "The people who run the club." }
        }
        div { class: "toolbar",
            label { class: "search",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                input {
                    r#type: "search",
                    placeholder: "Search by name, SRN or role",
                    value: "{filter.read().search}",
                    oninput: move |evt: FormEvent| filter.write().search = evt.value(),
                }
            }
            FilterSelect {
                label: "Role",
                options: members::roles(),
                value: filter.read().role.clone(),
                onchange: move |role| filter.write().role = role,
            }
            FilterSelect {
                label: "Branch",
                options: members::branches(),
                value: filter.read().branch.clone(),
                onchange: move |branch| filter.write().branch = branch,
            }
            FilterSelect {
                label: "Year",
                options: members::years(),
                value: filter.read().year.clone(),
                onchange: move |year| filter.write().year = year,
            }
            if !filter.read().is_empty() {
                button {
                    class: "btn btn--ghost",
                    onclick: move |_| filter.set(MemberFilter::default()),
                    "Clear filters"
                }
            }
        }
        p { class: "toolbar__count", "Showing {shown.len()} of {total} members" }

        if shown.is_empty() {
            p { class: "empty-state", "No members match your filters." }
        } else {
            div { class: "grid grid--4",
                for member in shown {
                    MemberCard { key: "{member.id}", member }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice() {
        assert_eq!(choice(String::new()), None);
        assert_eq!(choice("CSE".into()), Some("CSE".to_string()));
    }
}
