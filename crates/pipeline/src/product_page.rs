//! Entry point for composing a product detail page.
//!
//! `ProductPage` wraps one upstream record and answers the page's content
//! questions: which buying option wins, which similar products to show and
//! in what order, and which images represent the product.

use crate::criteria::SimilarityCriteria;
use crate::filter_pipeline::FilterPipeline;
use crate::images::ImageSelector;
use crate::sort::SortBy;
use crate::traits::{PriceRangeFilter, PrimeOption, StyleRenderer};
use anyhow::Result;
use catalog::{BuyingOption, ProductRecord};
use std::sync::Arc;

/// Content selection for a single product page.
///
/// Holds no per-request state, so one page can serve concurrent requests.
pub struct ProductPage {
    product: ProductRecord,
    renderer: Arc<dyn StyleRenderer>,
    pipeline: FilterPipeline,
}

impl ProductPage {
    pub fn new(product: ProductRecord, renderer: Arc<dyn StyleRenderer>) -> Self {
        Self {
            product,
            renderer,
            pipeline: FilterPipeline::similar_products(),
        }
    }

    /// Replace the similar-products filter chain.
    pub fn with_pipeline(mut self, pipeline: FilterPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn product(&self) -> &ProductRecord {
        &self.product
    }

    /// The winning buying option, if the product has any.
    pub fn first_buying_option(&self) -> Option<&BuyingOption> {
        self.product.buying_options.first()
    }

    /// Similar products to display, filtered and ordered.
    ///
    /// A product without a similar-products list yields an empty Vec.
    pub fn similar_products(
        &self,
        sort_by: Option<SortBy>,
        price_range: &dyn PriceRangeFilter,
        prime_option: &dyn PrimeOption,
    ) -> Result<Vec<&ProductRecord>> {
        let criteria = SimilarityCriteria::new(sort_by, price_range, prime_option);
        let selected = self
            .pipeline
            .select(self.product.similar_products(), &criteria)?;
        tracing::info!(
            asin = %self.product.asin,
            count = selected.len(),
            "Selected similar products"
        );
        Ok(selected)
    }

    /// URL of the product's main image, scaled to `longest_dimension`.
    pub fn main_image_url(&self, longest_dimension: u32) -> Result<Option<String>> {
        self.image_selector().primary_image_url(longest_dimension)
    }

    /// URL of the product's first "LOOK" image, scaled to `longest_dimension`.
    pub fn look_image_url(&self, longest_dimension: u32) -> Result<Option<String>> {
        self.image_selector().look_image_url(longest_dimension)
    }

    fn image_selector(&self) -> ImageSelector<'_> {
        ImageSelector::new(self.product.images(), self.renderer.as_ref())
    }
}
