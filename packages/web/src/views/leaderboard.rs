use api::models::LeaderboardPage;
use dioxus::prelude::*;
use store::catalog::leaderboard;
use store::Role;
use ui::icons::FaMagnifyingGlass;
use ui::{failure_message, use_api, use_auth, GroupLeaderboard, Icon, StudentLeaderboard};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tab {
    Student,
    Branch,
    Year,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Student, Tab::Branch, Tab::Year];

    fn label(&self) -> &'static str {
        match self {
            Tab::Student => "Students",
            Tab::Branch => "Branches",
            Tab::Year => "Years",
        }
    }
}

#[component]
pub fn Leaderboard() -> Element {
    let mut tab = use_signal(|| Tab::Student);
    let mut query = use_signal(String::new);

    let podium: Vec<_> = leaderboard::top_students(3).into_iter().cloned().collect();

    let table = match tab() {
        Tab::Student => {
            let rows: Vec<_> = leaderboard::search_student(&query())
                .into_iter()
                .cloned()
                .collect();
            rsx! { StudentLeaderboard { rows } }
        }
        Tab::Branch => rsx! {
            GroupLeaderboard { label: "Branch", rows: leaderboard::branch_rankings() }
        },
        Tab::Year => rsx! {
            GroupLeaderboard { label: "Year", rows: leaderboard::year_rankings() }
        },
    };

    rsx! {
        section { class: "page-header",
            h1 { "Leaderboard" }
            p { "Points earned across events, contests and projects." }
        }
        div { class: "podium",
            for student in podium {
                div { key: "{student.srn}", class: "podium__place podium__place--{student.rank}",
                    span { class: "podium__medal", "{store::models::rank_medal(student.rank).unwrap_or_default()}" }
                    strong { "{student.name}" }
                    span { "{student.points} pts" }
                }
            }
        }
        MyStanding {}
        div { class: "toolbar",
            div { class: "tabs",
                for option in Tab::ALL {
                    button {
                        key: "{option.label()}",
                        class: if tab() == option { "tab tab--active" } else { "tab" },
                        onclick: move |_| tab.set(option),
                        "{option.label()}"
                    }
                }
            }
            if tab() == Tab::Student {
                label { class: "search",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    input {
                        r#type: "search",
                        placeholder: "Search by name or SRN",
                        value: "{query}",
                        oninput: move |evt: FormEvent| query.set(evt.value()),
                    }
                }
            }
        }
        {table}
    }
}

/// Rank line for the signed-in student: "#4 of 120 · 860 pts".
fn standing_line(page: &LeaderboardPage) -> Option<String> {
    let me = page.leaderboard.iter().find(|row| row.is_current_user);
    match (page.current_user_rank, me) {
        (Some(rank), Some(row)) => Some(format!(
            "#{rank} of {} · {} pts",
            page.leaderboard.len(),
            row.stats.cluster_points
        )),
        (Some(rank), None) => Some(format!("#{rank}")),
        (None, Some(row)) => Some(format!("#{} · {} pts", row.rank, row.stats.cluster_points)),
        (None, None) => None,
    }
}

/// Live rank from the server, shown only to signed-in students.
#[component]
fn MyStanding() -> Element {
    let auth = use_auth();
    let api = use_api();
    let standing = use_resource(move || {
        let api = api.clone();
        let is_student = {
            let store = auth.read();
            let session = store.session();
            session.is_authenticated && session.role == Role::User
        };
        async move {
            if !is_student {
                return None;
            }
            match api.leaderboard().global().await {
                Ok(page) => standing_line(&page),
                Err(err) => {
                    failure_message(auth, &err, "Failed to load your rank");
                    None
                }
            }
        }
    });

    let Some(Some(line)) = standing.read().clone() else {
        return rsx! {};
    };
    rsx! {
        div { class: "card my-standing",
            span { class: "muted", "Your standing" }
            strong { "{line}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> LeaderboardPage {
        serde_json::from_value(serde_json::json!({
            "leaderboard": [
                { "rank": 1, "fullName": "Ada", "stats": { "clusterPoints": 900 } },
                { "rank": 2, "fullName": "Me", "stats": { "clusterPoints": 860 }, "isCurrentUser": true }
            ],
            "currentUserRank": 2
        }))
        .unwrap()
    }

    #[test]
    fn test_standing_line_uses_current_user_row() {
        assert_eq!(standing_line(&page()).as_deref(), Some("#2 of 2 · 860 pts"));
    }

    #[test]
    fn test_standing_line_absent_when_unranked() {
        assert_eq!(standing_line(&LeaderboardPage::default()), None);
    }
}
