use dioxus::prelude::*;
use store::models::rank_medal;
use store::{GroupRanking, Level, StudentRanking};

fn rank_cell(rank: u32) -> String {
    rank_medal(rank)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{rank}"))
}

fn level_class(level: Level) -> &'static str {
    match level {
        Level::Beginner => "level level--beginner",
        Level::Intermediate => "level level--intermediate",
        Level::Advanced => "level level--advanced",
        Level::Expert => "level level--expert",
    }
}

#[component]
pub fn StudentLeaderboard(rows: Vec<StudentRanking>) -> Element {
    if rows.is_empty() {
        return rsx! { p { class: "empty-state", "No students match your search." } };
    }
    rsx! {
        table { class: "leaderboard",
            thead {
                tr {
                    th { "Rank" }
                    th { "Name" }
                    th { "Branch" }
                    th { "Year" }
                    th { "Events" }
                    th { "Points" }
                    th { "Level" }
                }
            }
            tbody {
                for row in rows.iter() {
                    tr { key: "{row.srn}", class: if row.rank <= 3 { "leaderboard__row--top" },
                        td { class: "leaderboard__rank", "{rank_cell(row.rank)}" }
                        td {
                            div { "{row.name}" }
                            small { "{row.srn}" }
                        }
                        td { "{row.branch}" }
                        td { "{row.year}" }
                        td { "{row.events_attended}" }
                        td { class: "leaderboard__points", "{row.points}" }
                        td { span { class: "{level_class(row.level)}", "{row.level.label()}" } }
                    }
                }
            }
        }
    }
}

/// Branch or year totals. `label` heads the name column.
#[component]
pub fn GroupLeaderboard(label: String, rows: Vec<GroupRanking>) -> Element {
    rsx! {
        table { class: "leaderboard",
            thead {
                tr {
                    th { "Rank" }
                    th { "{label}" }
                    th { "Students" }
                    th { "Total points" }
                    th { "Average" }
                }
            }
            tbody {
                for row in rows.iter() {
                    tr { key: "{row.name}",
                        td { class: "leaderboard__rank", "{rank_cell(row.rank)}" }
                        td { "{row.name}" }
                        td { "{row.students}" }
                        td { class: "leaderboard__points", "{row.total_points}" }
                        td { "{row.average_points()}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_cell() {
        assert_eq!(rank_cell(1), "🥇");
        assert_eq!(rank_cell(3), "🥉");
        assert_eq!(rank_cell(4), "#4");
    }
}
