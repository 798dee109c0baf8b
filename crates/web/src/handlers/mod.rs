pub mod case_study;
pub mod catalog_api;
pub mod contact;
pub mod pages;
pub mod portfolio;

use askama::Template;
use axum::response::Html;

use crate::error::PageResult;

/// Render an askama view into an HTML response body.
pub(crate) fn render<T: Template>(template: &T) -> PageResult<Html<String>> {
    Ok(Html(template.render()?))
}
