use std::sync::LazyLock;

use crate::models::Cluster;

static CLUSTERS: LazyLock<Vec<Cluster>> = LazyLock::new(|| {
    let rows: [(&str, &str, &str, &str, &[&str], &[&str]); 5] = [
        (
            "dev",
            "Development",
            "Full-stack web and mobile engineering, from first commit to production deploy.",
            "Ship it, then make it better.",
            &["Web Apps", "Mobile", "APIs", "DevOps"],
            &["React", "Node.js", "Flutter", "Docker"],
        ),
        (
            "ai",
            "Artificial Intelligence",
            "Machine learning, data science and applied AI research projects.",
            "Data tells the story; models listen.",
            &["Machine Learning", "NLP", "Computer Vision", "Data Science"],
            &["Python", "PyTorch", "scikit-learn", "pandas"],
        ),
        (
            "programming",
            "Programming",
            "Competitive programming, data structures and algorithms, and interview preparation.",
            "Every bug is a lesson.",
            &["DSA", "Competitive Programming", "Interview Prep"],
            &["C++", "Java", "Python"],
        ),
        (
            "emerging",
            "Emerging Tech",
            "Hardware, IoT, blockchain and whatever arrives next.",
            "Build what does not exist yet.",
            &["IoT", "Embedded", "Blockchain", "AR/VR"],
            &["Arduino", "Raspberry Pi", "Solidity", "Unity"],
        ),
        (
            "design",
            "Design",
            "UI/UX, branding and visual identity for every club event.",
            "Design is how it works.",
            &["UI/UX", "Branding", "Motion"],
            &["Figma", "Blender", "After Effects"],
        ),
    ];
    rows.iter()
        .map(|(id, name, description, foundation, focus, tech)| Cluster {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            foundation: foundation.to_string(),
            focus_areas: focus.iter().map(|s| s.to_string()).collect(),
            technologies: tech.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
});

pub fn all() -> &'static [Cluster] {
    &CLUSTERS
}

pub fn by_id(id: &str) -> Option<&'static Cluster> {
    CLUSTERS.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_member_cluster_exists() {
        for member in crate::catalog::members::all() {
            if let Some(cluster) = &member.cluster {
                assert!(by_id(cluster).is_some(), "missing cluster {cluster}");
            }
        }
    }
}
