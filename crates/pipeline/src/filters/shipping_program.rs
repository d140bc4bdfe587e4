//! Filter on shipping-program eligibility.
//!
//! A record passes if any one of its programs satisfies the shopper's prime
//! option. Records with no programs never pass, even for options that would
//! accept anything.

use crate::criteria::SimilarityCriteria;
use crate::traits::Filter;
use anyhow::Result;
use catalog::ProductRecord;

/// Removes records with no shipping program matching `criteria.prime_option`.
pub struct ShippingProgramFilter;

impl Filter for ShippingProgramFilter {
    fn name(&self) -> &str {
        "ShippingProgramFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a ProductRecord>,
        criteria: &SimilarityCriteria<'_>,
    ) -> Result<Vec<&'a ProductRecord>> {
        let filtered: Vec<&ProductRecord> = candidates
            .into_iter()
            .filter(|product| {
                product
                    .shipping_programs
                    .iter()
                    .any(|program| criteria.prime_option.matches(*program))
            })
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{PriceBand, PrimeEligibility};
    use catalog::ShippingProgram;

    fn records() -> Vec<ProductRecord> {
        vec![
            ProductRecord::new("prime", 100)
                .with_shipping_programs([ShippingProgram::Standard, ShippingProgram::Prime]),
            ProductRecord::new("standard", 100).with_shipping_programs([ShippingProgram::Standard]),
            ProductRecord::new("none", 100),
        ]
    }

    #[test]
    fn test_any_program_matches() {
        let records = records();
        let criteria =
            SimilarityCriteria::new(None, &PriceBand::ANY, &PrimeEligibility::PrimeOnly);

        let filtered = ShippingProgramFilter
            .apply(records.iter().collect(), &criteria)
            .unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].asin, "prime");
    }

    #[test]
    fn test_no_programs_never_passes() {
        let records = records();
        let criteria = SimilarityCriteria::new(None, &PriceBand::ANY, &PrimeEligibility::All);

        let filtered = ShippingProgramFilter
            .apply(records.iter().collect(), &criteria)
            .unwrap();

        let asins: Vec<&str> = filtered.iter().map(|p| p.asin.as_str()).collect();
        assert_eq!(asins, vec!["prime", "standard"]);
    }
}
