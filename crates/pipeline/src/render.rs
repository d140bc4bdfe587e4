//! Media-host style renderer.
//!
//! Renders styles into media-host URLs of the form
//! `{base_url}/{physical_id}._SL{longest}_.{extension}`, where `_SL500_`
//! asks the host to scale the longest side to 500 pixels.

use crate::traits::StyleRenderer;
use anyhow::{Result, bail};
use catalog::ImageStyle;

/// Default public media host.
pub const DEFAULT_MEDIA_HOST: &str = "https://m.media-amazon.com/images/I";

/// Renders image styles against a media host base URL.
#[derive(Debug, Clone)]
pub struct MediaHostRenderer {
    base_url: String,
}

impl MediaHostRenderer {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for MediaHostRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_MEDIA_HOST)
    }
}

impl StyleRenderer for MediaHostRenderer {
    fn url(&self, style: &ImageStyle<'_>) -> Result<Option<String>> {
        let Some(physical_id) = style.physical_id.filter(|id| !id.is_empty()) else {
            return Ok(None);
        };

        let url = match style.longest {
            Some(0) => bail!("cannot scale image {} to a longest side of 0 pixels", physical_id),
            Some(longest) => format!(
                "{}/{}._SL{}_.{}",
                self.base_url, physical_id, longest, style.extension
            ),
            None => format!("{}/{}.{}", self.base_url, physical_id, style.extension),
        };
        Ok(Some(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::LowResImage;

    #[test]
    fn test_render_scaled_url() {
        let renderer = MediaHostRenderer::new("https://images.example.com/I/");
        let image = LowResImage::new("41abcDEF");
        let style = image.style_builder().scale_to_longest(500).build();

        let url = renderer.url(&style).unwrap();
        assert_eq!(
            url.as_deref(),
            Some("https://images.example.com/I/41abcDEF._SL500_.jpg")
        );
    }

    #[test]
    fn test_render_unscaled_url() {
        let renderer = MediaHostRenderer::default();
        let image = LowResImage::new("41abcDEF");

        let url = renderer.url(&image.style_builder().build()).unwrap();
        assert_eq!(
            url.as_deref(),
            Some("https://m.media-amazon.com/images/I/41abcDEF.jpg")
        );
    }

    #[test]
    fn test_render_missing_physical_id() {
        let renderer = MediaHostRenderer::default();

        let missing = LowResImage::missing();
        let style = missing.style_builder().scale_to_longest(500).build();
        assert_eq!(renderer.url(&style).unwrap(), None);

        let empty = LowResImage::new("");
        let style = empty.style_builder().scale_to_longest(500).build();
        assert_eq!(renderer.url(&style).unwrap(), None);
    }

    #[test]
    fn test_render_zero_dimension_fails() {
        let renderer = MediaHostRenderer::default();
        let image = LowResImage::new("41abcDEF");
        let style = image.style_builder().scale_to_longest(0).build();

        assert!(renderer.url(&style).is_err());
    }
}
