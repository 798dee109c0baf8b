//! Askama view models for every HTML page.
//!
//! Each page struct carries a [`Shell`] that `base.html` reads for the
//! header, footer and intro loader. Everything a template compares or
//! branches on is precomputed here.

use askama::Template;
use chrono::Datelike;
use fomo_core::catalog::{CaseStudy, Project, Stat};
use fomo_core::contact::{ContactForm, FormState, ServiceKind};
use fomo_core::portfolio::Category;
use fomo_core::site::{self, Blurb, NavLink, Offering, Shot, Testimonial};

// ---------------------------------------------------------------------------
// Shell
// ---------------------------------------------------------------------------

/// Header/footer context shared by all pages.
pub struct Shell {
    /// Path of the nav entry to highlight; empty for none.
    pub active: &'static str,
    pub nav: &'static [NavLink],
    pub studio: &'static str,
    pub tagline: &'static str,
    pub instagram_url: &'static str,
    pub youtube_url: &'static str,
    pub email: &'static str,
    pub year: i32,
}

impl Shell {
    pub fn new(active: &'static str) -> Self {
        Self {
            active,
            nav: site::NAV_LINKS,
            studio: site::STUDIO_NAME,
            tagline: site::TAGLINE,
            instagram_url: site::INSTAGRAM_URL,
            youtube_url: site::YOUTUBE_URL,
            email: site::CONTACT_EMAIL,
            year: chrono::Utc::now().year(),
        }
    }
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub shell: Shell,
    pub problems: &'static [Blurb],
    pub services: &'static [Blurb],
    pub featured: &'static [Project],
    pub testimonials: &'static [Testimonial],
}

#[derive(Template)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub shell: Shell,
    pub philosophy: &'static [Blurb],
    pub steps: &'static [Blurb],
    pub bts_images: Vec<String>,
}

#[derive(Template)]
#[template(path = "pages/services.html")]
pub struct ServicesTemplate {
    pub shell: Shell,
    pub showreel_url: &'static str,
    pub offerings: &'static [Offering],
    pub featured: &'static [Project],
}

/// One button in the portfolio filter bar.
pub struct FilterButton {
    pub label: String,
    pub href: String,
    pub active: bool,
}

impl FilterButton {
    pub fn new(category: &Category, selected: &Category) -> Self {
        let href = match category {
            Category::All => "/portfolio".to_string(),
            Category::Named(name) => {
                format!("/portfolio?category={}", urlencoding::encode(name))
            }
        };
        Self {
            label: category.label().to_string(),
            href,
            active: category == selected,
        }
    }
}

#[derive(Template)]
#[template(path = "pages/portfolio.html")]
pub struct PortfolioTemplate {
    pub shell: Shell,
    pub filters: Vec<FilterButton>,
    pub projects: Vec<&'static Project>,
}

#[derive(Template)]
#[template(path = "pages/case_study.html")]
pub struct CaseStudyTemplate {
    pub shell: Shell,
    pub cs: &'static CaseStudy,
    pub stats: &'static [Stat],
    pub next: &'static CaseStudy,
}

impl CaseStudyTemplate {
    pub fn new(cs: &'static CaseStudy, next: &'static CaseStudy) -> Self {
        Self {
            shell: Shell::new("/portfolio"),
            cs,
            stats: cs.stats_or_empty(),
            next,
        }
    }
}

/// One `<option>` of the service select.
pub struct ServiceOption {
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate {
    pub shell: Shell,
    pub form: ContactForm,
    pub services: Vec<ServiceOption>,
    pub status_message: Option<String>,
    pub status_success: bool,
    pub booking_url: &'static str,
    pub email: &'static str,
    pub whatsapp_url: &'static str,
    pub location: &'static str,
}

impl ContactTemplate {
    pub fn new(state: FormState) -> Self {
        let services = ServiceKind::ALL
            .iter()
            .map(|kind| ServiceOption {
                label: kind.label(),
                selected: *kind == state.form.service,
            })
            .collect();
        Self {
            shell: Shell::new("/contact"),
            status_message: state.status.message().map(str::to_string),
            status_success: state.status.is_success(),
            form: state.form,
            services,
            booking_url: site::BOOKING_URL,
            email: site::CONTACT_EMAIL,
            whatsapp_url: site::WHATSAPP_URL,
            location: site::LOCATION,
        }
    }
}

#[derive(Template)]
#[template(path = "pages/creator_collab.html")]
pub struct CreatorCollabTemplate {
    pub shell: Shell,
    pub services: &'static [Blurb],
    pub showcase: Vec<String>,
    pub testimonials: &'static [Testimonial],
}

#[derive(Template)]
#[template(path = "pages/product_shoot.html")]
pub struct ProductShootTemplate {
    pub shell: Shell,
    pub gallery: &'static [Shot],
    pub use_cases: &'static [&'static str],
}

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub shell: Shell,
    pub heading: &'static str,
}
