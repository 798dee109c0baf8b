//! JSON handlers over the studio catalog.
//!
//! Same data and filtering as the HTML pages, wrapped in [`DataResponse`].

use axum::extract::{Path, Query};
use axum::response::IntoResponse;
use axum::Json;
use fomo_core::catalog::{self, CaseStudy};
use fomo_core::navigation::{find_case_study, next_case_study};
use fomo_core::portfolio::{categories, filter_projects, Category};
use serde::Serialize;

use crate::error::AppResult;
use crate::query::PortfolioParams;
use crate::response::DataResponse;

/// A case study together with the one its page links to next.
#[derive(Debug, Serialize)]
pub struct CaseStudyDetail {
    pub case_study: &'static CaseStudy,
    pub next: &'static CaseStudy,
}

/// GET /api/v1/projects?category=
pub async fn list_projects(Query(params): Query<PortfolioParams>) -> impl IntoResponse {
    let selected = Category::from_selection(params.category.as_deref());
    let projects = filter_projects(catalog::projects(), &selected);

    Json(DataResponse { data: projects })
}

/// GET /api/v1/categories
pub async fn list_categories() -> impl IntoResponse {
    Json(DataResponse { data: categories() })
}

/// GET /api/v1/case-studies
pub async fn list_case_studies() -> impl IntoResponse {
    Json(DataResponse {
        data: catalog::case_studies(),
    })
}

/// GET /api/v1/case-studies/{id}
pub async fn get_case_study(Path(id): Path<String>) -> AppResult<impl IntoResponse> {
    let case_study = find_case_study(&id)?;
    let next = next_case_study(case_study.id);

    Ok(Json(DataResponse {
        data: CaseStudyDetail { case_study, next },
    }))
}
