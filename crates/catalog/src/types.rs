//! Core domain types for upstream product records.
//!
//! A `ProductRecord` is owned by the upstream catalog and is read-only to
//! everything in this workspace. Optional upstream fields stay `Option` at
//! the serde boundary; the getters below collapse them to empty slices so
//! callers never have to reason about absence.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::style::LowResImage;

// =============================================================================
// Type Aliases
// =============================================================================

/// Amazon standard identification number of a product
pub type Asin = String;

/// Money amount in the smallest currency unit (e.g. cents)
pub type Cents = u64;

// =============================================================================
// Shipping Programs
// =============================================================================

/// Shipping or membership programs a product can be eligible for.
///
/// Upstream sends these as SCREAMING_SNAKE_CASE tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingProgram {
    Prime,
    FreeShipping,
    SameDay,
    Standard,
    International,
}

// =============================================================================
// Images
// =============================================================================

/// Ordered image descriptors attached to a product.
///
/// Upstream may send the container without a list, or with `"images": null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductImages {
    #[serde(default)]
    pub images: Option<Vec<ProductImage>>,
}

/// A single image descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    /// Role of the image ("MAIN", "LOOK", "PT01", ...). Unreliable upstream
    /// and frequently missing.
    #[serde(default)]
    pub variant: Option<String>,
    pub low_res: LowResImage,
}

impl ProductImage {
    pub fn new(variant: Option<&str>, low_res: LowResImage) -> Self {
        Self {
            variant: variant.map(str::to_string),
            low_res,
        }
    }
}

// =============================================================================
// Buying Options
// =============================================================================

/// An offer to buy the product. Upstream orders these with the winning
/// offer first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyingOption {
    pub offer_id: String,
    pub merchant: String,
    pub price: Cents,
}

// =============================================================================
// ProductRecord
// =============================================================================

/// An upstream product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub asin: Asin,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "isValid", default)]
    pub valid: bool,
    pub price: Cents,
    #[serde(default)]
    pub total_benefit_amount: Cents,
    #[serde(default)]
    pub shipping_programs: HashSet<ShippingProgram>,
    /// Related products. Both the list and its entries may be null upstream.
    #[serde(default)]
    pub similar_products: Option<Vec<Option<ProductRecord>>>,
    #[serde(default)]
    pub product_images: Option<ProductImages>,
    #[serde(default)]
    pub buying_options: Vec<BuyingOption>,
}

impl ProductRecord {
    /// Creates a valid record with no benefit, programs, relations or images.
    pub fn new(asin: impl Into<Asin>, price: Cents) -> Self {
        Self {
            asin: asin.into(),
            title: String::new(),
            valid: true,
            price,
            total_benefit_amount: 0,
            shipping_programs: HashSet::new(),
            similar_products: None,
            product_images: None,
            buying_options: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_validity(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }

    pub fn with_total_benefit_amount(mut self, amount: Cents) -> Self {
        self.total_benefit_amount = amount;
        self
    }

    pub fn with_shipping_programs(
        mut self,
        programs: impl IntoIterator<Item = ShippingProgram>,
    ) -> Self {
        self.shipping_programs = programs.into_iter().collect();
        self
    }

    pub fn with_similar_products(mut self, products: Vec<Option<ProductRecord>>) -> Self {
        self.similar_products = Some(products);
        self
    }

    pub fn with_images(mut self, images: Vec<ProductImage>) -> Self {
        self.product_images = Some(ProductImages {
            images: Some(images),
        });
        self
    }

    pub fn with_buying_options(mut self, options: Vec<BuyingOption>) -> Self {
        self.buying_options = options;
        self
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Similar products as sent upstream, null entries included.
    ///
    /// Returns an empty slice if upstream sent no list at all.
    pub fn similar_products(&self) -> &[Option<ProductRecord>] {
        self.similar_products
            .as_deref()
            .unwrap_or(&[])
    }

    /// Image descriptors in upstream order.
    ///
    /// Returns an empty slice if the record has no image container or the
    /// container has no list.
    pub fn images(&self) -> &[ProductImage] {
        self.product_images
            .as_ref()
            .and_then(|images| images.images.as_deref())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_similar_products_is_empty() {
        let record = ProductRecord::new("B000000001", 1999);
        assert!(record.similar_products.is_none());
        assert!(record.similar_products().is_empty());
    }

    #[test]
    fn test_absent_images_is_empty() {
        let record = ProductRecord::new("B000000001", 1999);
        assert!(record.images().is_empty());

        let record = record.with_images(vec![]);
        assert!(record.product_images.is_some());
        assert!(record.images().is_empty());
    }

    #[test]
    fn test_image_container_without_list_is_empty() {
        let mut record = ProductRecord::new("B000000001", 1999);
        record.product_images = Some(ProductImages::default());
        assert!(record.images().is_empty());
    }

    #[test]
    fn test_builder_keeps_null_entries() {
        let record = ProductRecord::new("B000000001", 1999).with_similar_products(vec![
            None,
            Some(ProductRecord::new("B000000002", 500)),
        ]);

        let similar = record.similar_products();
        assert_eq!(similar.len(), 2);
        assert!(similar[0].is_none());
        assert_eq!(similar[1].as_ref().unwrap().asin, "B000000002");
    }

    #[test]
    fn test_shipping_programs_are_a_set() {
        let record = ProductRecord::new("B000000001", 1999).with_shipping_programs([
            ShippingProgram::Prime,
            ShippingProgram::Prime,
            ShippingProgram::SameDay,
        ]);
        assert_eq!(record.shipping_programs.len(), 2);
    }
}
