//! # Static catalog
//!
//! The public pages render from fixed collections compiled into the binary:
//! events, members, clusters and the student leaderboard. Each submodule owns
//! one collection and the query helpers the pages use. Ids are unique within
//! a collection.

pub mod clusters;
pub mod events;
pub mod leaderboard;
pub mod members;

/// Unique values in first-seen order.
pub(crate) fn unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}

/// Case-insensitive substring match. An empty needle matches everything.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_keeps_first_seen_order() {
        let values = ["b", "a", "b", "c", "a"];
        assert_eq!(unique(values.into_iter()), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("Chai aur Arrays", "ARRAYS"));
        assert!(contains_ci("anything", ""));
        assert!(!contains_ci("Linux", "windows"));
    }
}
