//! Filter to keep records priced inside the shopper's range.

use crate::criteria::SimilarityCriteria;
use crate::traits::Filter;
use anyhow::Result;
use catalog::ProductRecord;

/// Removes records whose price falls outside `criteria.price_range`.
pub struct PriceRangeMatchFilter;

impl Filter for PriceRangeMatchFilter {
    fn name(&self) -> &str {
        "PriceRangeMatchFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a ProductRecord>,
        criteria: &SimilarityCriteria<'_>,
    ) -> Result<Vec<&'a ProductRecord>> {
        let filtered: Vec<&ProductRecord> = candidates
            .into_iter()
            .filter(|product| criteria.price_range.price_is_within(product.price))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{PriceBand, PrimeEligibility};

    #[test]
    fn test_price_range_filter() {
        let records = vec![
            ProductRecord::new("cheap", 499),
            ProductRecord::new("low-edge", 500),
            ProductRecord::new("high-edge", 1500),
            ProductRecord::new("pricey", 1501),
        ];
        let band = PriceBand::new(Some(500), Some(1500));
        let criteria = SimilarityCriteria::new(None, &band, &PrimeEligibility::All);

        let filtered = PriceRangeMatchFilter
            .apply(records.iter().collect(), &criteria)
            .unwrap();

        let asins: Vec<&str> = filtered.iter().map(|p| p.asin.as_str()).collect();
        assert_eq!(asins, vec!["low-edge", "high-edge"]);
    }
}
