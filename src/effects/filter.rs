use crate::models::{CategoryTab, Project};

/// Category value that matches every project.
pub const ALL_CATEGORIES: &str = "all";

/// Projects in `category`, in their original order.
///
/// `"all"` returns every project. Any other value keeps only projects whose
/// category is exactly equal to it, so an unknown category yields nothing.
pub fn filter<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    if category == ALL_CATEGORIES {
        return projects.iter().collect();
    }
    projects.iter().filter(|p| p.category == category).collect()
}

/// The selected project filter tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilter {
    selected: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self::new(ALL_CATEGORIES)
    }
}

impl ProjectFilter {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            selected: category.into(),
        }
    }

    /// Build from an optional `?category=` value; absent or blank means all.
    pub fn from_query(category: Option<&str>) -> Self {
        match category.map(str::trim) {
            Some(c) if !c.is_empty() => Self::new(c),
            _ => Self::default(),
        }
    }

    pub fn select(&mut self, category: impl Into<String>) {
        self.selected = category.into();
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn is_selected(&self, tab: &CategoryTab) -> bool {
        tab.id == self.selected
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        filter(projects, &self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, category: &str) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            category: category.to_string(),
            description: String::new(),
            long_description: String::new(),
            image: None,
            tech: vec![],
            live_url: None,
            github_url: None,
            date: "2024".to_string(),
            featured: false,
        }
    }

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn all_returns_everything_in_order() {
        let projects = vec![project(3, "backend"), project(1, "frontend"), project(2, "fullstack")];
        assert_eq!(ids(&filter(&projects, "all")), vec![3, 1, 2]);
    }

    #[test]
    fn category_keeps_relative_order() {
        let projects = vec![
            project(1, "frontend"),
            project(2, "backend"),
            project(3, "frontend"),
            project(4, "frontend"),
        ];
        assert_eq!(ids(&filter(&projects, "frontend")), vec![1, 3, 4]);
    }

    #[test]
    fn unknown_category_is_empty() {
        let projects = vec![project(1, "frontend")];
        assert!(filter(&projects, "mobile").is_empty());
    }

    #[test]
    fn category_match_is_exact() {
        let projects = vec![project(1, "Frontend")];
        assert!(filter(&projects, "frontend").is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let projects = vec![project(1, "frontend"), project(2, "backend")];
        let once: Vec<Project> = filter(&projects, "backend").into_iter().cloned().collect();
        let twice = filter(&once, "backend");
        assert_eq!(ids(&twice), vec![2]);
    }

    #[test]
    fn blank_query_selects_all() {
        assert_eq!(ProjectFilter::from_query(None).selected(), "all");
        assert_eq!(ProjectFilter::from_query(Some("  ")).selected(), "all");
        assert_eq!(ProjectFilter::from_query(Some("backend")).selected(), "backend");
    }

    #[test]
    fn select_changes_active_tab() {
        let mut filter = ProjectFilter::default();
        let tab = CategoryTab::new("frontend", "Frontend");
        assert!(!filter.is_selected(&tab));
        filter.select("frontend");
        assert!(filter.is_selected(&tab));
    }
}
