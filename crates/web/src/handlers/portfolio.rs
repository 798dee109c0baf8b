use axum::extract::Query;
use axum::response::Html;
use fomo_core::catalog;
use fomo_core::portfolio::{categories, filter_projects, Category};

use crate::error::PageResult;
use crate::handlers::render;
use crate::query::PortfolioParams;
use crate::views::{FilterButton, PortfolioTemplate, Shell};

/// GET /portfolio?category=
///
/// Renders one filter button per category and the projects matching the
/// selection. An unknown category renders an empty grid.
pub async fn index(Query(params): Query<PortfolioParams>) -> PageResult<Html<String>> {
    let selected = Category::from_selection(params.category.as_deref());
    let projects = filter_projects(catalog::projects(), &selected);
    tracing::debug!(category = %selected, count = projects.len(), "Filtered portfolio");

    let filters = categories()
        .iter()
        .map(|category| FilterButton::new(category, &selected))
        .collect();

    render(&PortfolioTemplate {
        shell: Shell::new("/portfolio"),
        filters,
        projects,
    })
}
