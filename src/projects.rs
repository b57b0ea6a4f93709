#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Web,
    Ml,
    Automation,
}

impl ProjectCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Ml => "ml",
            Self::Automation => "automation",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    /// Filter buttons in display order.
    pub const ALL: [ProjectFilter; 4] = [
        Self::All,
        Self::Only(ProjectCategory::Web),
        Self::Only(ProjectCategory::Ml),
        Self::Only(ProjectCategory::Automation),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Only(ProjectCategory::Web) => "Web Apps",
            Self::Only(ProjectCategory::Ml) => "Machine Learning",
            Self::Only(ProjectCategory::Automation) => "Automation",
        }
    }

    pub fn matches(self, category: ProjectCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: &'static str,
    pub category: ProjectCategory,
}

/// Projects visible under `filter`, in catalog order.
pub fn filter_projects<'a>(catalog: &'a [Project], filter: ProjectFilter) -> Vec<&'a Project> {
    catalog
        .iter()
        .filter(|project| filter.matches(project.category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|project| project.id).collect()
    }

    fn project(id: u32, category: ProjectCategory) -> Project {
        Project {
            id,
            title: "t",
            description: "d",
            image: "/i.jpg",
            tags: &[],
            github_url: "#",
            live_url: "#",
            category,
        }
    }

    #[test]
    fn all_returns_full_catalog_in_order() {
        let visible = filter_projects(PROJECTS, ProjectFilter::All);
        let expected: Vec<u32> = PROJECTS.iter().map(|project| project.id).collect();
        assert_eq!(ids(&visible), expected);
    }

    #[test]
    fn ml_filter_keeps_only_ml_projects() {
        let visible = filter_projects(PROJECTS, ProjectFilter::Only(ProjectCategory::Ml));
        assert!(!visible.is_empty());
        assert!(visible
            .iter()
            .all(|project| project.category == ProjectCategory::Ml));
    }

    #[test]
    fn filtering_preserves_relative_order() {
        let catalog = vec![
            project(1, ProjectCategory::Ml),
            project(2, ProjectCategory::Web),
            project(3, ProjectCategory::Ml),
            project(4, ProjectCategory::Automation),
            project(5, ProjectCategory::Ml),
        ];

        let visible = filter_projects(&catalog, ProjectFilter::Only(ProjectCategory::Ml));
        assert_eq!(ids(&visible), vec![1, 3, 5]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = vec![
            project(1, ProjectCategory::Web),
            project(2, ProjectCategory::Automation),
            project(3, ProjectCategory::Web),
        ];

        for filter in ProjectFilter::ALL {
            let once: Vec<Project> = filter_projects(&catalog, filter)
                .into_iter()
                .cloned()
                .collect();
            let twice = filter_projects(&once, filter);
            assert_eq!(ids(&twice), once.iter().map(|p| p.id).collect::<Vec<_>>());
        }
    }

    #[test]
    fn unmatched_category_is_empty() {
        let catalog = vec![project(1, ProjectCategory::Web)];
        let visible = filter_projects(&catalog, ProjectFilter::Only(ProjectCategory::Automation));
        assert!(visible.is_empty());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn filter_labels_are_distinct() {
        let labels: Vec<&str> = ProjectFilter::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec!["All Projects", "Web Apps", "Machine Learning", "Automation"]
        );
        assert_eq!(ProjectFilter::default().as_str(), "all");
    }
}
