pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{case_study, catalog_api, contact, pages, portfolio};
use crate::state::AppState;

/// Server-rendered HTML pages.
///
/// ```text
/// GET  /                    home
/// GET  /about               about
/// GET  /services            services
/// GET  /portfolio           filtered project grid (?category=)
/// GET  /case-studies/{id}   case study detail, 404 page when unknown
/// GET  /contact             empty contact form
/// POST /contact             submit the form, re-render with status
/// GET  /creator-collab      creator landing page
/// GET  /product-shoot       product landing page
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/services", get(pages::services))
        .route("/portfolio", get(portfolio::index))
        .route("/case-studies/{id}", get(case_study::show))
        .route("/contact", get(contact::show).post(contact::submit))
        .route("/creator-collab", get(pages::creator_collab))
        .route("/product-shoot", get(pages::product_shoot))
}

/// Build the `/api/v1` route tree.
///
/// ```text
/// GET  /projects              list projects (?category=)
/// GET  /categories            filter labels, "All" first
/// GET  /case-studies          list case studies
/// GET  /case-studies/{id}     case study plus the next one
/// POST /contact               relay a contact submission (JSON)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(catalog_api::list_projects))
        .route("/categories", get(catalog_api::list_categories))
        .route("/case-studies", get(catalog_api::list_case_studies))
        .route("/case-studies/{id}", get(catalog_api::get_case_study))
        .route("/contact", post(contact::submit_json))
}
