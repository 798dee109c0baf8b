//! Domain layer for the FOMO Films studio site.
//!
//! Holds the static catalog tables, the portfolio filter, case-study
//! navigation, the contact form model and the site copy. Nothing in here
//! performs I/O.

pub mod catalog;
pub mod contact;
pub mod error;
pub mod navigation;
pub mod portfolio;
pub mod site;
pub mod types;
