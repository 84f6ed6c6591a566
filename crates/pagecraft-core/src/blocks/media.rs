//! Media block payloads.
//!
//! Media assets arrive from the external picker as `{url, width, height}`;
//! the payloads store those fields verbatim.

use serde::{Deserialize, Serialize};

use super::content::TextAlign;

/// A picked media asset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaRef {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl MediaRef {
    /// True when no asset has been picked yet.
    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }
}

/// Single image.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageData {
    pub asset: MediaRef,
    pub alt: String,
    pub caption: String,
    pub link_url: String,
    pub rounded: bool,
}

/// Image with overlaid heading/text and an optional link.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageCardData {
    pub asset: MediaRef,
    pub heading: String,
    pub text: String,
    pub link_url: String,
    pub align: TextAlign,
}

/// Grid of images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryData {
    pub assets: Vec<MediaRef>,
    pub columns: u8,
    pub gap_px: u32,
}

impl Default for GalleryData {
    fn default() -> Self {
        Self {
            assets: Vec::new(),
            columns: 3,
            gap_px: 16,
        }
    }
}

/// One carousel slide.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselSlide {
    pub asset: MediaRef,
    pub heading: String,
    pub text: String,
    pub link_url: String,
}

/// Auto-advancing slide carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselData {
    pub slides: Vec<CarouselSlide>,
    pub autoplay: bool,
    pub interval_ms: u32,
    pub show_dots: bool,
}

impl Default for CarouselData {
    fn default() -> Self {
        Self {
            slides: Vec::new(),
            autoplay: true,
            interval_ms: 5000,
            show_dots: true,
        }
    }
}

/// Embedded or self-hosted video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoData {
    pub url: String,
    pub poster: MediaRef,
    pub autoplay: bool,
    pub muted: bool,
    pub looped: bool,
    pub controls: bool,
}

impl Default for VideoData {
    fn default() -> Self {
        Self {
            url: String::new(),
            poster: MediaRef::default(),
            autoplay: false,
            muted: true,
            looped: false,
            controls: true,
        }
    }
}
