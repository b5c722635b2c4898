//! Browser-based viewer for public GitHub user profiles.
//!
//! Given a username, the app queries the GitHub REST API for the user's
//! profile and repository list and renders them. The target-independent
//! pieces (models, lookup sequencing, formatting, language colors) live in
//! this library and are tested natively; everything that touches the DOM is
//! behind the `frontend` feature and built for the browser with Trunk.

pub mod error;
pub mod format;
pub mod languages;
pub mod models;
pub mod query;

#[cfg(feature = "frontend")]
pub mod api;
#[cfg(feature = "frontend")]
pub mod app;
#[cfg(feature = "frontend")]
pub mod components;

#[cfg(test)]
mod format_test;
#[cfg(test)]
mod languages_test;
#[cfg(test)]
mod models_test;
