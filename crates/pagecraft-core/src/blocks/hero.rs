//! Hero block payloads and their background model.
//!
//! A hero background has exactly one active kind at a time; the `effect`
//! kind may additionally show an image beneath the generated pattern, which
//! is why the image field lives outside the kind discriminant.

use serde::{Deserialize, Serialize};

use super::media::MediaRef;

/// The mutually exclusive background kinds of a hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BackgroundKind {
    #[default]
    Color,
    Gradient,
    Image,
    Video,
    /// Generated pattern, optionally layered over the image.
    Effect,
    SplitImages,
}

/// Darkening overlay over a non-solid background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverlayData {
    pub enabled: bool,
    /// 0.0-1.0 darkening strength.
    pub opacity: f64,
}

impl Default for OverlayData {
    fn default() -> Self {
        Self {
            enabled: true,
            opacity: 0.4,
        }
    }
}

/// Vertical third of the 3x3 content-position grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalPos {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// Horizontal third of the 3x3 content-position grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalPos {
    Left,
    #[default]
    Center,
    Right,
}

/// Parsed `"<vertical>-<horizontal>"` content-position keyword. The two
/// axes are decoded independently; an unrecognized axis falls back to its
/// default rather than failing the whole keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentPosition {
    pub vertical: VerticalPos,
    pub horizontal: HorizontalPos,
}

impl ContentPosition {
    /// Decode a keyword such as `"top-left"` or `"middle-center"`.
    pub fn parse(keyword: &str) -> Self {
        let mut parts = keyword.splitn(2, '-');
        let vertical = match parts.next().unwrap_or("") {
            "top" => VerticalPos::Top,
            "bottom" => VerticalPos::Bottom,
            _ => VerticalPos::Middle,
        };
        let horizontal = match parts.next().unwrap_or("") {
            "left" => HorizontalPos::Left,
            "right" => HorizontalPos::Right,
            _ => HorizontalPos::Center,
        };
        Self {
            vertical,
            horizontal,
        }
    }
}

/// Two-stop linear gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GradientData {
    pub from: String,
    pub to: String,
    pub angle_deg: i32,
}

impl Default for GradientData {
    fn default() -> Self {
        Self {
            from: "#1a1a2e".to_string(),
            to: "#16213e".to_string(),
            angle_deg: 135,
        }
    }
}

/// Full hero banner: heading, call to action and the layered background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroBannerData {
    pub heading: String,
    pub subheading: String,
    pub button_label: String,
    pub button_url: String,
    pub background: BackgroundKind,
    pub color: String,
    pub gradient: GradientData,
    /// Image shown for the `image` kind and beneath the `effect` kind.
    pub image: MediaRef,
    pub video_url: String,
    /// Pattern name for the `effect` kind ("waves", "dots"...).
    pub effect_pattern: String,
    /// Images for the `splitImages` kind, shown side by side.
    pub split_images: Vec<MediaRef>,
    pub overlay: OverlayData,
    /// `"<vertical>-<horizontal>"` keyword, e.g. `"middle-center"`.
    pub content_position: String,
    pub min_height_px: u32,
}

impl Default for HeroBannerData {
    fn default() -> Self {
        Self {
            heading: String::new(),
            subheading: String::new(),
            button_label: String::new(),
            button_url: String::new(),
            background: BackgroundKind::Color,
            color: "#1a1a2e".to_string(),
            gradient: GradientData::default(),
            image: MediaRef::default(),
            video_url: String::new(),
            effect_pattern: String::new(),
            split_images: Vec::new(),
            overlay: OverlayData::default(),
            content_position: "middle-center".to_string(),
            min_height_px: 480,
        }
    }
}

/// Compact hero: same background model, smaller content surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroData {
    pub heading: String,
    pub subheading: String,
    pub background: BackgroundKind,
    pub color: String,
    pub gradient: GradientData,
    pub image: MediaRef,
    pub video_url: String,
    pub effect_pattern: String,
    pub split_images: Vec<MediaRef>,
    pub overlay: OverlayData,
    pub content_position: String,
}

impl Default for HeroData {
    fn default() -> Self {
        Self {
            heading: String::new(),
            subheading: String::new(),
            background: BackgroundKind::Color,
            color: "#1a1a2e".to_string(),
            gradient: GradientData::default(),
            image: MediaRef::default(),
            video_url: String::new(),
            effect_pattern: String::new(),
            split_images: Vec::new(),
            overlay: OverlayData::default(),
            content_position: "middle-center".to_string(),
        }
    }
}
