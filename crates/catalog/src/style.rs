//! Style requests for product images.
//!
//! Building a style is purely local: it records which physical image to use
//! and how it should be scaled. Turning an `ImageStyle` into a URL is the job
//! of an external rendering service.

use serde::{Deserialize, Serialize};

fn default_extension() -> String {
    "jpg".to_string()
}

/// Handle to the low-resolution rendition of an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowResImage {
    /// Media-host identifier. Missing for images that were never uploaded.
    #[serde(default)]
    pub physical_id: Option<String>,
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl LowResImage {
    pub fn new(physical_id: impl Into<String>) -> Self {
        Self {
            physical_id: Some(physical_id.into()),
            extension: default_extension(),
        }
    }

    /// An image with no physical id. Renders to nothing.
    pub fn missing() -> Self {
        Self {
            physical_id: None,
            extension: default_extension(),
        }
    }

    pub fn style_builder(&self) -> StyleBuilder<'_> {
        StyleBuilder {
            image: self,
            longest: None,
        }
    }
}

/// Builder for an [`ImageStyle`].
#[derive(Debug, Clone, Copy)]
pub struct StyleBuilder<'a> {
    image: &'a LowResImage,
    longest: Option<u32>,
}

impl<'a> StyleBuilder<'a> {
    /// Scale the image so its longest side is `longest` pixels.
    pub fn scale_to_longest(mut self, longest: u32) -> Self {
        self.longest = Some(longest);
        self
    }

    pub fn build(self) -> ImageStyle<'a> {
        ImageStyle {
            physical_id: self.image.physical_id.as_deref(),
            extension: &self.image.extension,
            longest: self.longest,
        }
    }
}

/// A finalized style request, ready to be rendered into a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageStyle<'a> {
    pub physical_id: Option<&'a str>,
    pub extension: &'a str,
    pub longest: Option<u32>,
}
