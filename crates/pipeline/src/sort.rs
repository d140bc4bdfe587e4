//! Sort keys and the comparators they resolve to.
//!
//! Every key maps to a plain `fn` comparator. Descending orders are the
//! exact reverse of their ascending counterpart. There are no secondary
//! tie-breakers: equal elements keep their relative order because callers
//! sort with the stable `slice::sort_by`.

use catalog::ProductRecord;
use std::cmp::Ordering;
use std::fmt;

/// Ordering function over product records.
pub type Comparator = fn(&ProductRecord, &ProductRecord) -> Ordering;

/// Shopper-selectable orderings for similar products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortBy {
    RewardLowToHigh,
    RewardHighToLow,
    PriceLowToHigh,
    PriceHighToLow,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [
        SortBy::RewardLowToHigh,
        SortBy::RewardHighToLow,
        SortBy::PriceLowToHigh,
        SortBy::PriceHighToLow,
    ];

    /// Parse an upstream sort token. Unknown tokens yield `None`, which
    /// requests no reordering.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "REWARD_LOW_TO_HIGH" => Some(Self::RewardLowToHigh),
            "REWARD_HIGH_TO_LOW" => Some(Self::RewardHighToLow),
            "PRICE_LOW_TO_HIGH" => Some(Self::PriceLowToHigh),
            "PRICE_HIGH_TO_LOW" => Some(Self::PriceHighToLow),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RewardLowToHigh => "REWARD_LOW_TO_HIGH",
            Self::RewardHighToLow => "REWARD_HIGH_TO_LOW",
            Self::PriceLowToHigh => "PRICE_LOW_TO_HIGH",
            Self::PriceHighToLow => "PRICE_HIGH_TO_LOW",
        }
    }

    pub fn comparator(&self) -> Comparator {
        match self {
            Self::RewardLowToHigh => by_benefit,
            Self::RewardHighToLow => |a, b| by_benefit(a, b).reverse(),
            Self::PriceLowToHigh => by_price,
            Self::PriceHighToLow => |a, b| by_price(a, b).reverse(),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the comparator for an optional sort key.
///
/// `None` resolves to [`passthrough`].
pub fn comparator_for(sort_by: Option<SortBy>) -> Comparator {
    match sort_by {
        Some(sort_by) => sort_by.comparator(),
        None => passthrough,
    }
}

/// Reports every pair as equal. Only order-preserving under a stable sort.
pub fn passthrough(_: &ProductRecord, _: &ProductRecord) -> Ordering {
    Ordering::Equal
}

fn by_benefit(a: &ProductRecord, b: &ProductRecord) -> Ordering {
    a.total_benefit_amount.cmp(&b.total_benefit_amount)
}

fn by_price(a: &ProductRecord, b: &ProductRecord) -> Ordering {
    a.price.cmp(&b.price)
}
