//! Ludex Kernel Library
//!
//! Video game catalog core: rating aggregation, tag/search filtering, paging,
//! and review acceptance over an in-memory snapshot.
//! The `ludex` binary exposes these through a small CLI.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod rating;
pub mod review;

pub use catalog::{CatalogError, CatalogPage, CatalogQuery, CatalogService};
pub use config::Config;
pub use error::{AppError, AppResult};
