//! Core traits for the product page pipeline.
//!
//! `Filter` is the seam the similar-products chain is built from. The other
//! traits describe collaborators this crate only ever calls: shopper
//! predicates and the image style renderer.

use anyhow::Result;
use catalog::{Cents, ImageStyle, ProductRecord, ShippingProgram};

use crate::criteria::SimilarityCriteria;

/// Core trait for filtering similar products.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec of borrowed records and return a
///   filtered Vec, so records are never cloned or mutated
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidate records.
    ///
    /// # Arguments
    /// * `candidates` - The records to filter (takes ownership of the Vec)
    /// * `criteria` - Shopper-chosen criteria for this request
    fn apply<'a>(
        &self,
        candidates: Vec<&'a ProductRecord>,
        criteria: &SimilarityCriteria<'_>,
    ) -> Result<Vec<&'a ProductRecord>>;
}

/// Answers "is this price within the shopper's price range".
pub trait PriceRangeFilter: Send + Sync {
    fn price_is_within(&self, price: Cents) -> bool;
}

impl<F> PriceRangeFilter for F
where
    F: Fn(Cents) -> bool + Send + Sync,
{
    fn price_is_within(&self, price: Cents) -> bool {
        self(price)
    }
}

/// Answers "does this shipping program satisfy the shopper's prime option".
pub trait PrimeOption: Send + Sync {
    fn matches(&self, program: ShippingProgram) -> bool;
}

impl<F> PrimeOption for F
where
    F: Fn(ShippingProgram) -> bool + Send + Sync,
{
    fn matches(&self, program: ShippingProgram) -> bool {
        self(program)
    }
}

/// Turns a finalized image style into a URL.
///
/// `Ok(None)` means the style could not be rendered (e.g. the image has no
/// physical id); `Err` is a failure of the rendering service itself.
pub trait StyleRenderer: Send + Sync {
    fn url(&self, style: &ImageStyle<'_>) -> Result<Option<String>>;
}
