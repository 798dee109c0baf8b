use axum::extract::Path;
use axum::response::Html;
use fomo_core::navigation::{find_case_study, next_case_study};

use crate::error::PageResult;
use crate::handlers::render;
use crate::views::CaseStudyTemplate;

/// GET /case-studies/{id}
///
/// Unknown or malformed ids render the "Case Study Not Found" page with 404.
pub async fn show(Path(id): Path<String>) -> PageResult<Html<String>> {
    let case_study = find_case_study(&id)?;
    let next = next_case_study(case_study.id);
    render(&CaseStudyTemplate::new(case_study, next))
}
