//! Pipeline for composing product detail page content.
//!
//! This crate provides:
//! - Filter trait and implementations for similar-product eligibility
//! - FilterPipeline for composing filters and ordering the result
//! - Sort keys mapped to comparators
//! - ImageSelector for first-match-wins image fallback
//! - ProductPage, the entry object wrapping one product record
//!
//! ## Architecture
//! Similar products are processed in stages:
//! 1. Null entries are dropped
//! 2. Filters remove invalid, out-of-range and ineligible records
//! 3. The survivors are stable-sorted by the requested key
//!
//! Image selection is independent of the filter pipeline.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{MediaHostRenderer, PriceBand, PrimeEligibility, ProductPage, SortBy};
//! use std::sync::Arc;
//!
//! let page = ProductPage::new(product, Arc::new(MediaHostRenderer::default()));
//!
//! let similar = page.similar_products(
//!     SortBy::parse("PRICE_LOW_TO_HIGH"),
//!     &PriceBand::new(Some(1000), Some(5000)),
//!     &PrimeEligibility::PrimeOnly,
//! )?;
//! let hero = page.main_image_url(500)?;
//! ```

pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod images;
pub mod product_page;
pub mod render;
pub mod sort;
pub mod traits;

// Re-export main types
pub use criteria::{PriceBand, PrimeEligibility, SimilarityCriteria};
pub use filter_pipeline::FilterPipeline;
pub use images::{ImageSelector, LOOK_VARIANT};
pub use product_page::ProductPage;
pub use render::MediaHostRenderer;
pub use sort::{Comparator, SortBy, comparator_for};
pub use traits::{Filter, PriceRangeFilter, PrimeOption, StyleRenderer};
