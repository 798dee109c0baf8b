//! Shared query parameter types for page and API handlers.

use serde::Deserialize;

/// Portfolio filter selection (`?category=`).
///
/// Shared by the portfolio page and `GET /api/v1/projects`. Parsed into a
/// [`fomo_core::portfolio::Category`] by the handler; absent, blank and
/// `All` all select every project.
#[derive(Debug, Default, Deserialize)]
pub struct PortfolioParams {
    pub category: Option<String>,
}
