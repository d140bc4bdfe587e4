//! # Catalog Crate
//!
//! Read-only model of upstream product records.
//!
//! ## Main Components
//!
//! - **types**: `ProductRecord`, images, buying options, shipping programs
//! - **style**: builder for image style requests
//! - **loader**: parse JSON product documents
//! - **error**: error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::load_product;
//! use std::path::Path;
//!
//! let product = load_product(Path::new("fixtures/product.json"))?;
//! for image in product.images() {
//!     let style = image.low_res.style_builder().scale_to_longest(500).build();
//!     println!("{:?}", style);
//! }
//! ```

pub mod error;
pub mod loader;
pub mod style;
pub mod types;

pub use error::{CatalogError, Result};
pub use loader::{load_product, parse_product};
pub use style::{ImageStyle, LowResImage, StyleBuilder};
pub use types::{
    // Type aliases
    Asin,
    Cents,
    // Core types
    BuyingOption,
    ProductImage,
    ProductImages,
    ProductRecord,
    // Enums
    ShippingProgram,
};
