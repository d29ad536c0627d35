use serde::{Deserialize, Serialize};

/// Number of tech tags shown on a project card before the `+N` badge.
pub const CARD_TECH_LIMIT: usize = 3;

/// A showcased project.
///
/// Projects are static content: defined with the rest of the portfolio and
/// never created or destroyed at runtime. The only runtime operation on them
/// is filtering by [`Project::category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    /// Filter key, e.g. `fullstack`, `frontend`, `backend`.
    pub category: String,
    /// One-line summary shown on the card.
    pub description: String,
    /// Longer write-up shown in the detail view.
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub tech: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    /// Free-form date label, e.g. `2021-Present`.
    pub date: String,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Tech tags shown on the card, plus how many were left out.
    pub fn tech_preview(&self) -> (&[String], usize) {
        let shown = self.tech.len().min(CARD_TECH_LIMIT);
        (&self.tech[..shown], self.tech.len() - shown)
    }
}

/// A project filter tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryTab {
    /// Value matched against [`Project::category`]; `all` matches everything.
    pub id: String,
    pub label: String,
}

impl CategoryTab {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with_tech(tech: &[&str]) -> Project {
        Project {
            id: 1,
            title: "Test".to_string(),
            category: "frontend".to_string(),
            description: String::new(),
            long_description: String::new(),
            image: None,
            tech: tech.iter().map(|t| t.to_string()).collect(),
            live_url: None,
            github_url: None,
            date: "2024".to_string(),
            featured: false,
        }
    }

    #[test]
    fn tech_preview_truncates_to_three() {
        let project = project_with_tech(&["a", "b", "c", "d", "e"]);
        let (shown, hidden) = project.tech_preview();
        assert_eq!(shown, ["a", "b", "c"]);
        assert_eq!(hidden, 2);
    }

    #[test]
    fn tech_preview_keeps_short_lists() {
        let project = project_with_tech(&["a"]);
        let (shown, hidden) = project.tech_preview();
        assert_eq!(shown, ["a"]);
        assert_eq!(hidden, 0);
    }
}
