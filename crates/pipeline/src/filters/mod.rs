//! Filter implementations for the similar-products pipeline.
//!
//! This module contains the eligibility rules that are composed into a
//! FilterPipeline.

pub mod price_range;
pub mod shipping_program;
pub mod validity;

// Re-export for convenience
pub use price_range::PriceRangeMatchFilter;
pub use shipping_program::ShippingProgramFilter;
pub use validity::ValidityFilter;
