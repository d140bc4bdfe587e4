//! Loading product records from JSON documents.
//!
//! Upstream product documents use camelCase keys, e.g.
//!
//! ```json
//! {
//!   "asin": "B07XJ8C8F5",
//!   "isValid": true,
//!   "price": 2499,
//!   "totalBenefitAmount": 150,
//!   "shippingPrograms": ["PRIME"],
//!   "similarProducts": [null, { "asin": "B07XJ8C8F6", "price": 1999 }],
//!   "productImages": { "images": [{ "variant": "LOOK", "lowRes": { "physicalId": "41x" } }] }
//! }
//! ```

use crate::error::{CatalogError, Result};
use crate::types::ProductRecord;
use std::fs;
use std::path::Path;

/// Parse a product record from a JSON string.
pub fn parse_product(json: &str) -> Result<ProductRecord> {
    let product: ProductRecord = serde_json::from_str(json)?;
    tracing::debug!(
        asin = %product.asin,
        similar = product.similar_products().len(),
        images = product.images().len(),
        "Parsed product record"
    );
    Ok(product)
}

/// Load a product record from a JSON file.
pub fn load_product(path: &Path) -> Result<ProductRecord> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let json = fs::read_to_string(path)?;
    parse_product(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShippingProgram;

    const DOCUMENT: &str = r#"{
        "asin": "B07XJ8C8F5",
        "title": "Trail Runner",
        "isValid": true,
        "price": 2499,
        "totalBenefitAmount": 150,
        "shippingPrograms": ["PRIME", "SAME_DAY"],
        "similarProducts": [
            null,
            { "asin": "B07XJ8C8F6", "isValid": true, "price": 1999 },
            { "asin": "B07XJ8C8F7", "price": 999, "shippingPrograms": ["FREE_SHIPPING"] }
        ],
        "productImages": {
            "images": [
                { "variant": null, "lowRes": { "physicalId": "41main" } },
                { "variant": "LOOK", "lowRes": { "physicalId": "41look", "extension": "png" } },
                { "lowRes": {} }
            ]
        },
        "buyingOptions": [
            { "offerId": "offer-1", "merchant": "Amazon", "price": 2499 }
        ]
    }"#;

    #[test]
    fn test_parse_full_document() {
        let product = parse_product(DOCUMENT).unwrap();

        assert_eq!(product.asin, "B07XJ8C8F5");
        assert!(product.is_valid());
        assert_eq!(product.total_benefit_amount, 150);
        assert!(product.shipping_programs.contains(&ShippingProgram::SameDay));
        assert_eq!(product.buying_options.len(), 1);
    }

    #[test]
    fn test_parse_keeps_null_similar_entries() {
        let product = parse_product(DOCUMENT).unwrap();
        let similar = product.similar_products();

        assert_eq!(similar.len(), 3);
        assert!(similar[0].is_none());

        // isValid defaults to false when upstream omits it
        let third = similar[2].as_ref().unwrap();
        assert!(!third.is_valid());
        assert_eq!(third.total_benefit_amount, 0);
    }

    #[test]
    fn test_parse_images() {
        let product = parse_product(DOCUMENT).unwrap();
        let images = product.images();

        assert_eq!(images.len(), 3);
        assert_eq!(images[0].variant, None);
        assert_eq!(images[1].variant.as_deref(), Some("LOOK"));
        assert_eq!(images[1].low_res.extension, "png");
        assert_eq!(images[2].low_res.physical_id, None);
        assert_eq!(images[2].low_res.extension, "jpg");
    }

    #[test]
    fn test_parse_minimal_document() {
        let product = parse_product(r#"{ "asin": "B0", "price": 1 }"#).unwrap();
        assert!(product.similar_products().is_empty());
        assert!(product.images().is_empty());
        assert!(product.buying_options.is_empty());
    }

    #[test]
    fn test_parse_null_image_list() {
        let product = parse_product(
            r#"{ "asin": "B0", "price": 1, "productImages": { "images": null } }"#,
        )
        .unwrap();
        assert!(product.product_images.is_some());
        assert!(product.images().is_empty());

        let product = parse_product(
            r#"{ "asin": "B0", "price": 1, "similarProducts": null, "productImages": null }"#,
        )
        .unwrap();
        assert!(product.similar_products().is_empty());
        assert!(product.images().is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_program() {
        let result = parse_product(r#"{ "asin": "B0", "price": 1, "shippingPrograms": ["TELEPORT"] }"#);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_product(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(CatalogError::FileNotFound { .. })));
    }
}
