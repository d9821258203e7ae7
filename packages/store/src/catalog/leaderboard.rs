//! Student leaderboard and its branch/year aggregates.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{GroupRanking, Level, StudentRanking};

use super::contains_ci;

/// Students ordered by points, ranks assigned 1..n.
static STUDENTS: LazyLock<Vec<StudentRanking>> = LazyLock::new(|| {
    let rows: [(&str, &str, &str, &str, u32, u32); 12] = [
        ("Adarsh Kakatkar", "01FE22BCS044", "CSE", "3rd Year", 1820, 14),
        ("Sneha Kulkarni", "01FE22BAI031", "AI & DS", "3rd Year", 1640, 12),
        ("Rohan Patil", "01FE21BCS090", "CSE", "4th Year", 1510, 15),
        ("Asha Rao", "01FE22BEC017", "ECE", "3rd Year", 1275, 10),
        ("Vaibhav Deopa", "01FE23BCS212", "CSE", "2nd Year", 1130, 9),
        ("Megha Joshi", "01FE21BEC120", "ECE", "4th Year", 990, 11),
        ("Karthik Hegde", "01FE23BCS150", "CSE", "2nd Year", 860, 7),
        ("Lomesh Jangde", "01FE22BCS101", "CSE", "3rd Year", 745, 8),
        ("Nikhil Desai", "01FE22BME063", "ME", "3rd Year", 610, 6),
        ("Priya Shetty", "01FE24BAI008", "AI & DS", "1st Year", 480, 4),
        ("Ritika Naik", "01FE24BCS077", "CSE", "1st Year", 350, 3),
        ("Sameer Kulkarni", "01FE23BME019", "ME", "2nd Year", 220, 2),
    ];
    let mut students: Vec<StudentRanking> = rows
        .iter()
        .map(|(name, srn, branch, year, points, events)| StudentRanking {
            rank: 0,
            name: name.to_string(),
            srn: srn.to_string(),
            branch: branch.to_string(),
            year: year.to_string(),
            points: *points,
            events_attended: *events,
            level: Level::for_points(*points),
        })
        .collect();
    students.sort_by(|a, b| b.points.cmp(&a.points));
    for (i, student) in students.iter_mut().enumerate() {
        student.rank = i as u32 + 1;
    }
    students
});

pub fn students() -> &'static [StudentRanking] {
    &STUDENTS
}

pub fn top_students(n: usize) -> Vec<&'static StudentRanking> {
    STUDENTS.iter().take(n).collect()
}

/// Students whose name or SRN contains `query`, keeping their global rank.
pub fn search_student(query: &str) -> Vec<&'static StudentRanking> {
    let query = query.trim();
    STUDENTS
        .iter()
        .filter(|s| contains_ci(&s.name, query) || contains_ci(&s.srn, query))
        .collect()
}

fn aggregate(key: impl Fn(&StudentRanking) -> &str) -> Vec<GroupRanking> {
    let mut totals: HashMap<&str, (u32, u32)> = HashMap::new();
    for student in STUDENTS.iter() {
        let entry = totals.entry(key(student)).or_default();
        entry.0 += student.points;
        entry.1 += 1;
    }

    let mut groups: Vec<GroupRanking> = totals
        .into_iter()
        .map(|(name, (total_points, students))| GroupRanking {
            rank: 0,
            name: name.to_string(),
            total_points,
            students,
        })
        .collect();
    // Ties broken by name so the order is stable.
    groups.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.name.cmp(&b.name))
    });
    for (i, group) in groups.iter_mut().enumerate() {
        group.rank = i as u32 + 1;
    }
    groups
}

pub fn branch_rankings() -> Vec<GroupRanking> {
    aggregate(|s| s.branch.as_str())
}

pub fn year_rankings() -> Vec<GroupRanking> {
    aggregate(|s| s.year.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_students_ranked_by_points() {
        let all = students();
        assert!(all.windows(2).all(|w| w[0].points >= w[1].points));
        assert!(all.iter().enumerate().all(|(i, s)| s.rank == i as u32 + 1));
    }

    #[test]
    fn test_top_students() {
        let top = top_students(3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].name, "Adarsh Kakatkar");
        assert_eq!(top_students(100).len(), students().len());
    }

    #[test]
    fn test_search_keeps_global_rank() {
        let found = search_student("megha");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].rank, 6);

        let by_srn = search_student("01FE24");
        assert_eq!(by_srn.len(), 2);
    }

    #[test]
    fn test_branch_rankings_sum_points() {
        let branches = branch_rankings();
        let cse = branches.iter().find(|b| b.name == "CSE").unwrap();
        assert_eq!(cse.students, 6);
        assert_eq!(cse.total_points, 1820 + 1510 + 1130 + 860 + 745 + 350);
        assert_eq!(branches[0].rank, 1);
        assert_eq!(branches[0].name, "CSE");

        let total: u32 = branches.iter().map(|b| b.total_points).sum();
        let expected: u32 = students().iter().map(|s| s.points).sum();
        assert_eq!(total, expected);
    }

    #[test]
    fn test_year_rankings_cover_every_year() {
        let years = year_rankings();
        assert_eq!(years.len(), 4);
        assert!(years.windows(2).all(|w| w[0].total_points >= w[1].total_points));
    }
}
