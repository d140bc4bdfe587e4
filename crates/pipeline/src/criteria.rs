//! Shopper-chosen criteria for similar products.
//!
//! `SimilarityCriteria` bundles one request's sort key and predicates. The
//! predicates are normally supplied by the caller; `PriceBand` and
//! `PrimeEligibility` are the stock implementations.

use catalog::{Cents, ShippingProgram};

use crate::sort::SortBy;
use crate::traits::{PriceRangeFilter, PrimeOption};

/// Criteria for one similar-products request.
pub struct SimilarityCriteria<'c> {
    /// `None` keeps the filtered order untouched
    pub sort_by: Option<SortBy>,
    pub price_range: &'c dyn PriceRangeFilter,
    pub prime_option: &'c dyn PrimeOption,
}

impl<'c> SimilarityCriteria<'c> {
    pub fn new(
        sort_by: Option<SortBy>,
        price_range: &'c dyn PriceRangeFilter,
        prime_option: &'c dyn PrimeOption,
    ) -> Self {
        Self {
            sort_by,
            price_range,
            prime_option,
        }
    }
}

/// Inclusive price bounds. A missing bound is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceBand {
    pub min: Option<Cents>,
    pub max: Option<Cents>,
}

impl PriceBand {
    /// Matches every price.
    pub const ANY: PriceBand = PriceBand {
        min: None,
        max: None,
    };

    pub fn new(min: Option<Cents>, max: Option<Cents>) -> Self {
        Self { min, max }
    }

    pub fn any() -> Self {
        Self::ANY
    }
}

impl PriceRangeFilter for PriceBand {
    fn price_is_within(&self, price: Cents) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }
}

/// Prime filter choices offered to shoppers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PrimeEligibility {
    /// Any shipping program qualifies
    #[default]
    All,
    PrimeOnly,
    /// Prime shipping is free too
    FreeShipping,
    SameDay,
}

impl PrimeEligibility {
    /// Parse a CLI/query token such as `prime-only`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "all" => Some(Self::All),
            "prime-only" => Some(Self::PrimeOnly),
            "free-shipping" => Some(Self::FreeShipping),
            "same-day" => Some(Self::SameDay),
            _ => None,
        }
    }
}

impl PrimeOption for PrimeEligibility {
    fn matches(&self, program: ShippingProgram) -> bool {
        match self {
            Self::All => true,
            Self::PrimeOnly => program == ShippingProgram::Prime,
            Self::FreeShipping => matches!(
                program,
                ShippingProgram::Prime | ShippingProgram::FreeShipping
            ),
            Self::SameDay => program == ShippingProgram::SameDay,
        }
    }
}
