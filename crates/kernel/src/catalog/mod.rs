//! Catalog listing: tag/search filtering and paging.
//!
//! This module provides:
//! - filter: validates a query against the tag universe and selects games
//! - paginate: slices results into fixed-size pages
//! - CatalogService: in-memory catalog tying filtering, paging, and reviews together
//! - Types: CatalogQuery, CatalogPage

mod error;
mod filter;
mod pager;
mod service;
pub mod types;

pub use error::CatalogError;
pub use filter::{filter, matches, validate_query};
pub use pager::{paginate, total_pages};
pub use service::CatalogService;
pub use types::{CATALOG_PAGE_SIZE, CatalogPage, CatalogQuery};
