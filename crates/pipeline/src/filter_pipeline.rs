//! The FilterPipeline orchestrates the similar-products filters.
//!
//! This module provides the FilterPipeline struct that chains filters
//! together using the builder pattern, and `select` which runs the whole
//! similar-products selection: drop null entries, filter, then sort.

use crate::criteria::SimilarityCriteria;
use crate::filters::{PriceRangeMatchFilter, ShippingProgramFilter, ValidityFilter};
use crate::sort::comparator_for;
use crate::traits::Filter;
use anyhow::Result;
use catalog::ProductRecord;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ValidityFilter)
///     .add_filter(PriceRangeMatchFilter);
///
/// let filtered = pipeline.apply(candidates, &criteria)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The standard similar-products chain: validity, then price range,
    /// then shipping-program eligibility.
    pub fn similar_products() -> Self {
        Self::new()
            .add_filter(ValidityFilter)
            .add_filter(PriceRangeMatchFilter)
            .add_filter(ShippingProgramFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Run the candidates through every filter, in the order they were added.
    ///
    /// Each filter sees only what the previous one kept, so the first `Err`
    /// stops the chain and nothing partial is returned. Relative order of
    /// the survivors is unchanged.
    pub fn apply<'a>(
        &self,
        candidates: Vec<&'a ProductRecord>,
        criteria: &SimilarityCriteria<'_>,
    ) -> Result<Vec<&'a ProductRecord>> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, criteria)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }

    /// Select and order similar products from an upstream list.
    ///
    /// ## Algorithm
    /// 1. Drop null entries
    /// 2. Apply every filter in order
    /// 3. Stable-sort with the comparator for `criteria.sort_by`
    ///
    /// The source slice is never modified; the result borrows from it.
    pub fn select<'a>(
        &self,
        source: &'a [Option<ProductRecord>],
        criteria: &SimilarityCriteria<'_>,
    ) -> Result<Vec<&'a ProductRecord>> {
        let present: Vec<&ProductRecord> = source.iter().flatten().collect();
        tracing::debug!(
            "Dropped {} null similar products",
            source.len() - present.len()
        );

        let mut selected = self.apply(present, criteria)?;

        let comparator = comparator_for(criteria.sort_by);
        tracing::debug!(
            "Sorting {} similar products by {}",
            selected.len(),
            criteria
                .sort_by
                .map(|sort_by| sort_by.as_str())
                .unwrap_or("PASSTHROUGH")
        );
        // sort_by is stable, which the passthrough comparator relies on
        selected.sort_by(|a, b| comparator(a, b));

        Ok(selected)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
