//! Handlers for the static marketing pages.
//!
//! These pages only read the compiled-in site copy; none of them can fail
//! except through template rendering.

use axum::response::{Html, Response};
use fomo_core::catalog::{self, FEATURED_PROJECT_COUNT};
use fomo_core::site;

use crate::error::{not_found_page, not_found_heading, PageResult};
use crate::handlers::render;
use crate::views::{
    AboutTemplate, CreatorCollabTemplate, HomeTemplate, ProductShootTemplate, ServicesTemplate,
    Shell,
};

/// GET /
pub async fn home() -> PageResult<Html<String>> {
    render(&HomeTemplate {
        shell: Shell::new("/"),
        problems: site::HOME_PROBLEMS,
        services: site::HOME_SERVICES,
        featured: catalog::featured_projects(FEATURED_PROJECT_COUNT),
        testimonials: site::CLIENT_TESTIMONIALS,
    })
}

/// GET /about
pub async fn about() -> PageResult<Html<String>> {
    render(&AboutTemplate {
        shell: Shell::new("/about"),
        philosophy: site::PHILOSOPHY,
        steps: site::PROCESS_STEPS,
        bts_images: site::seeded_images("bts", 4, 500, 500),
    })
}

/// GET /services
pub async fn services() -> PageResult<Html<String>> {
    render(&ServicesTemplate {
        shell: Shell::new("/services"),
        showreel_url: site::SHOWREEL_URL,
        offerings: site::OFFERINGS,
        featured: catalog::featured_projects(FEATURED_PROJECT_COUNT),
    })
}

/// GET /creator-collab
pub async fn creator_collab() -> PageResult<Html<String>> {
    render(&CreatorCollabTemplate {
        shell: Shell::new(""),
        services: site::CREATOR_SERVICES,
        showcase: site::seeded_images("creator", 6, 600, 400),
        testimonials: site::CREATOR_TESTIMONIALS,
    })
}

/// GET /product-shoot
pub async fn product_shoot() -> PageResult<Html<String>> {
    render(&ProductShootTemplate {
        shell: Shell::new(""),
        gallery: site::PRODUCT_GALLERY,
        use_cases: site::PRODUCT_USE_CASES,
    })
}

/// Fallback for every unmatched path.
pub async fn not_found() -> Response {
    not_found_page(not_found_heading("Page"))
}
