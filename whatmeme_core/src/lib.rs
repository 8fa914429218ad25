#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Catalog data model for the meme lookup engine.
//!
//! The catalog is an ordered list of [`MemeRecord`]s. Order is part of the
//! contract: every lookup stage returns the first record that satisfies it.

pub mod catalog;
mod error;
pub mod seed;
mod store;
mod types;

pub use catalog::{Catalog, TrendOrder};
pub use error::{CatalogError, Result};
pub use store::CatalogStore;
pub use types::MemeRecord;

/// Today's date in the catalog's `updatedAt` format (`YYYY-MM-DD`, UTC).
#[must_use]
pub fn today_string() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}
