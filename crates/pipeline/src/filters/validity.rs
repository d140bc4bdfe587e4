//! Filter to drop records upstream has marked invalid.

use crate::criteria::SimilarityCriteria;
use crate::traits::Filter;
use anyhow::Result;
use catalog::ProductRecord;

/// Removes records whose validity flag is unset.
pub struct ValidityFilter;

impl Filter for ValidityFilter {
    fn name(&self) -> &str {
        "ValidityFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a ProductRecord>,
        _criteria: &SimilarityCriteria<'_>,
    ) -> Result<Vec<&'a ProductRecord>> {
        let filtered: Vec<&ProductRecord> = candidates
            .into_iter()
            .filter(|product| product.is_valid())
            .collect();
        Ok(filtered)
    }
}
