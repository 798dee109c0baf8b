//! Portfolio category filter.
//!
//! The grid is filtered by a selected [`Category`]. `All` is the
//! distinguished value that returns the full list; any other selection keeps
//! the projects whose category label matches exactly, in table order.

use std::fmt;

use serde::Serialize;

use crate::catalog::{projects, Project};

/// Label of the distinguished "show everything" category.
pub const ALL_LABEL: &str = "All";

/// A portfolio filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    /// Parse a selection as it arrives from a query string.
    ///
    /// Absent, blank, and `"All"` selections all mean [`Category::All`].
    pub fn from_selection(selection: Option<&str>) -> Self {
        match selection.map(str::trim) {
            None | Some("") | Some(ALL_LABEL) => Category::All,
            Some(other) => Category::Named(other.to_string()),
        }
    }

    /// Display label for filter buttons.
    pub fn label(&self) -> &str {
        match self {
            Category::All => ALL_LABEL,
            Category::Named(name) => name,
        }
    }

    /// Whether a project belongs to this selection.
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => project.category == name.as_str(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// `All` followed by each distinct project category, in order of first
/// appearance in the project table.
pub fn categories() -> Vec<Category> {
    let mut out = vec![Category::All];
    for project in projects() {
        if !out.iter().any(|c| c.label() == project.category) {
            out.push(Category::Named(project.category.to_string()));
        }
    }
    out
}

/// Keep the projects matching `category`, preserving their order.
pub fn filter_projects<'a>(projects: &'a [Project], category: &Category) -> Vec<&'a Project> {
    projects.iter().filter(|p| category.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_start_with_all_then_first_appearance_order() {
        let labels: Vec<String> = categories().iter().map(|c| c.label().to_string()).collect();
        assert_eq!(labels, ["All", "Restaurants", "Cafés", "Products", "Creators"]);
    }

    #[test]
    fn all_returns_full_list_unchanged() {
        let filtered = filter_projects(projects(), &Category::All);
        let expected: Vec<&Project> = projects().iter().collect();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn every_category_filters_exactly_and_in_order() {
        for category in categories().into_iter().skip(1) {
            let filtered = filter_projects(projects(), &category);
            assert!(!filtered.is_empty());
            assert!(filtered.iter().all(|p| p.category == category.label()));

            let expected: Vec<&Project> = projects()
                .iter()
                .filter(|p| p.category == category.label())
                .collect();
            assert_eq!(filtered, expected);

            let ids: Vec<_> = filtered.iter().map(|p| p.id).collect();
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            assert_eq!(ids, sorted, "order not preserved for {category}");
        }
    }

    #[test]
    fn restaurants_filter() {
        let filtered = filter_projects(projects(), &Category::Named("Restaurants".into()));
        let ids: Vec<_> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 5]);
    }

    #[test]
    fn unknown_category_is_empty() {
        let filtered = filter_projects(projects(), &Category::Named("Weddings".into()));
        assert!(filtered.is_empty());
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let filtered = filter_projects(projects(), &Category::Named("cafés".into()));
        assert!(filtered.is_empty());
    }

    #[test]
    fn from_selection() {
        assert_eq!(Category::from_selection(None), Category::All);
        assert_eq!(Category::from_selection(Some("")), Category::All);
        assert_eq!(Category::from_selection(Some("All")), Category::All);
        assert_eq!(
            Category::from_selection(Some(" Products ")),
            Category::Named("Products".into())
        );
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_value(categories()).unwrap();
        assert_eq!(json[0], "All");
        assert_eq!(json[2], "Cafés");
    }
}
