use std::sync::LazyLock;

use crate::models::Member;

use super::{contains_ci, unique};

static MEMBERS: LazyLock<Vec<Member>> = LazyLock::new(|| {
    let rows: [(&str, &str, &str, &str, &str, Option<&str>, &[&str]); 10] = [
        ("Lomesh Jangde", "01FE22BCS101", "Core Member", "CSE", "3rd Year", Some("programming"), &["C++", "Event Ops"]),
        ("Adarsh Kakatkar", "01FE22BCS044", "Cluster Lead", "CSE", "3rd Year", Some("programming"), &["C++", "Java", "DSA"]),
        ("Vaibhav Deopa", "01FE23BCS212", "Co-Lead", "CSE", "2nd Year", Some("programming"), &["Java", "Spring"]),
        ("Asha Rao", "01FE22BEC017", "Cluster Lead", "ECE", "3rd Year", Some("emerging"), &["Embedded", "IoT"]),
        ("Rohan Patil", "01FE21BCS090", "President", "CSE", "4th Year", None, &["Rust", "Leadership"]),
        ("Sneha Kulkarni", "01FE22BAI031", "Cluster Lead", "AI & DS", "3rd Year", Some("ai"), &["PyTorch", "NLP"]),
        ("Karthik Hegde", "01FE23BCS150", "Member", "CSE", "2nd Year", Some("dev"), &["React", "Tailwind"]),
        ("Priya Shetty", "01FE24BAI008", "Member", "AI & DS", "1st Year", Some("ai"), &["Python"]),
        ("Nikhil Desai", "01FE22BME063", "Design Lead", "ME", "3rd Year", Some("design"), &["Figma", "Blender"]),
        ("Megha Joshi", "01FE21BEC120", "Vice President", "ECE", "4th Year", None, &["Public Speaking", "Go"]),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (name, srn, role, branch, year, cluster, skills))| Member {
            id: i as u32 + 1,
            name: name.to_string(),
            srn: srn.to_string(),
            role: role.to_string(),
            branch: branch.to_string(),
            year: year.to_string(),
            cluster: cluster.map(str::to_string),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            image: None,
            github: None,
            linkedin: None,
        })
        .collect()
});

/// Filters applied on the members page. Empty/`None` fields match all.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemberFilter {
    pub search: String,
    pub role: Option<String>,
    pub branch: Option<String>,
    pub year: Option<String>,
}

impl MemberFilter {
    pub fn matches(&self, member: &Member) -> bool {
        let search = self.search.trim();
        let text_match = contains_ci(&member.name, search)
            || contains_ci(&member.srn, search)
            || contains_ci(&member.role, search);
        text_match
            && self.role.as_ref().is_none_or(|r| &member.role == r)
            && self.branch.as_ref().is_none_or(|b| &member.branch == b)
            && self.year.as_ref().is_none_or(|y| &member.year == y)
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

pub fn all() -> &'static [Member] {
    &MEMBERS
}

pub fn filter(filter: &MemberFilter) -> Vec<&'static Member> {
    MEMBERS.iter().filter(|m| filter.matches(m)).collect()
}

fn sorted(mut values: Vec<String>) -> Vec<String> {
    values.sort();
    values
}

pub fn roles() -> Vec<String> {
    sorted(unique(MEMBERS.iter().map(|m| m.role.as_str())))
}

pub fn branches() -> Vec<String> {
    sorted(unique(MEMBERS.iter().map(|m| m.branch.as_str())))
}

pub fn years() -> Vec<String> {
    sorted(unique(MEMBERS.iter().map(|m| m.year.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_matches_all() {
        let f = MemberFilter::default();
        assert!(f.is_empty());
        assert_eq!(filter(&f).len(), all().len());
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_srn_role() {
        let by_name = MemberFilter {
            search: "asha".to_string(),
            ..Default::default()
        };
        assert_eq!(filter(&by_name).len(), 1);

        let by_srn = MemberFilter {
            search: "01fe22bcs044".to_string(),
            ..Default::default()
        };
        assert_eq!(filter(&by_srn)[0].name, "Adarsh Kakatkar");

        let by_role = MemberFilter {
            search: "cluster lead".to_string(),
            ..Default::default()
        };
        assert_eq!(filter(&by_role).len(), 3);
    }

    #[test]
    fn test_filters_combine() {
        let f = MemberFilter {
            branch: Some("CSE".to_string()),
            year: Some("3rd Year".to_string()),
            ..Default::default()
        };
        let found = filter(&f);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|m| m.branch == "CSE" && m.year == "3rd Year"));
    }

    #[test]
    fn test_facets_sorted_and_unique() {
        assert_eq!(years(), vec!["1st Year", "2nd Year", "3rd Year", "4th Year"]);
        let branches = branches();
        assert!(branches.windows(2).all(|w| w[0] < w[1]));
        assert!(roles().contains(&"President".to_string()));
    }
}
