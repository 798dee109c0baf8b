//! Read-only studio catalog: portfolio projects and the case studies they
//! link to.
//!
//! Both tables are compiled into the binary and never mutated. Callers get
//! `'static` slices and borrow from them freely.

mod data;

use serde::Serialize;

use crate::types::RecordId;

/// Number of projects shown in the "featured work" strips on the home and
/// services pages.
pub const FEATURED_PROJECT_COUNT: usize = 4;

/// A portfolio grid entry linking to a case study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: RecordId,
    pub case_study_id: RecordId,
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

impl Project {
    /// Site path of the case study this project links to.
    pub fn case_study_path(&self) -> String {
        format!("/case-studies/{}", self.case_study_id)
    }
}

/// A headline number shown in a case study's results section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

/// Full narrative record of one client engagement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseStudy {
    pub id: RecordId,
    pub title: &'static str,
    pub client: &'static str,
    pub subtitle: &'static str,
    pub problem: &'static str,
    pub approach: &'static str,
    pub outcome: &'static str,
    pub hero_video_url: Option<&'static str>,
    pub image_url: &'static str,
    pub services: &'static [&'static str],
    pub stats: Option<&'static [Stat]>,
    pub gallery: &'static [&'static str],
}

impl CaseStudy {
    /// Site path of this case study.
    pub fn path(&self) -> String {
        format!("/case-studies/{}", self.id)
    }

    /// Stats to render, empty when the case study has none.
    pub fn stats_or_empty(&self) -> &'static [Stat] {
        self.stats.unwrap_or(&[])
    }
}

/// All portfolio projects in display order.
pub fn projects() -> &'static [Project] {
    data::PROJECTS
}

/// All case studies in table order.
pub fn case_studies() -> &'static [CaseStudy] {
    data::CASE_STUDIES
}

/// The first `n` projects (or all of them when there are fewer).
pub fn featured_projects(n: usize) -> &'static [Project] {
    let all = projects();
    &all[..n.min(all.len())]
}
