//! Representative image selection.
//!
//! Both selections are first-match-wins searches over the product's image
//! descriptors in upstream order. A descriptor that renders to nothing is
//! skipped; a renderer error aborts the search and is returned as is.

use crate::traits::StyleRenderer;
use anyhow::Result;
use catalog::ProductImage;

/// Variant tag of styled/lifestyle images.
pub const LOOK_VARIANT: &str = "LOOK";

/// Picks image URLs for one product.
pub struct ImageSelector<'a> {
    images: &'a [ProductImage],
    renderer: &'a dyn StyleRenderer,
}

impl<'a> ImageSelector<'a> {
    pub fn new(images: &'a [ProductImage], renderer: &'a dyn StyleRenderer) -> Self {
        Self { images, renderer }
    }

    /// URL of the first image that renders.
    ///
    /// The "MAIN" variant is deliberately ignored: upstream does not reliably
    /// tag the main image, while the first image always is.
    pub fn primary_image_url(&self, longest_dimension: u32) -> Result<Option<String>> {
        let url = self.first_rendered(self.images.iter(), longest_dimension)?;
        tracing::debug!(found = url.is_some(), "Selected primary image");
        Ok(url)
    }

    /// URL of the first "LOOK" image that renders.
    pub fn look_image_url(&self, longest_dimension: u32) -> Result<Option<String>> {
        let looks = self
            .images
            .iter()
            .filter(|image| image.variant.as_deref() == Some(LOOK_VARIANT));
        let url = self.first_rendered(looks, longest_dimension)?;
        tracing::debug!(found = url.is_some(), "Selected LOOK image");
        Ok(url)
    }

    fn first_rendered<'i>(
        &self,
        candidates: impl Iterator<Item = &'i ProductImage>,
        longest_dimension: u32,
    ) -> Result<Option<String>> {
        candidates
            .map(|image| self.render(image, longest_dimension))
            .find_map(Result::transpose)
            .transpose()
    }

    fn render(&self, image: &ProductImage, longest_dimension: u32) -> Result<Option<String>> {
        let style = image
            .low_res
            .style_builder()
            .scale_to_longest(longest_dimension)
            .build();
        let url = self.renderer.url(&style)?;
        Ok(url.filter(|url| !url.is_empty()))
    }
}
