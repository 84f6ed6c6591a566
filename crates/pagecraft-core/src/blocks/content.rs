//! Text-oriented and structural block payloads.

use serde::{Deserialize, Serialize};

/// Plain rich-text block. The HTML is pre-sanitized by the editing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextData {
    /// Pre-sanitized HTML emitted by the rich-text editor.
    pub html: String,
}

impl Default for TextData {
    fn default() -> Self {
        Self {
            html: String::new(),
        }
    }
}

/// Text alignment keywords shared by several payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Rich text with a heading, an eyebrow line and alignment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyledTextData {
    pub eyebrow: String,
    pub heading: String,
    pub html: String,
    pub align: TextAlign,
}

/// Call-to-action button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonData {
    pub label: String,
    pub url: String,
    /// Visual variant name understood by the theme ("primary", "outline"...).
    pub variant: String,
    pub open_in_new_tab: bool,
}

impl Default for ButtonData {
    fn default() -> Self {
        Self {
            label: "Learn more".to_string(),
            url: String::new(),
            variant: "primary".to_string(),
            open_in_new_tab: false,
        }
    }
}

/// Vertical spacing block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpacerData {
    pub height_px: u32,
}

impl Default for SpacerData {
    fn default() -> Self {
        Self { height_px: 40 }
    }
}

/// Horizontal rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DividerData {
    pub color: String,
    pub thickness_px: u32,
    /// Width as a percentage of the container.
    pub width_pct: u32,
}

impl Default for DividerData {
    fn default() -> Self {
        Self {
            color: "#e0e0e0".to_string(),
            thickness_px: 1,
            width_pct: 100,
        }
    }
}

/// Raw HTML embed. Treated as pre-sanitized trusted content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HtmlData {
    pub html: String,
}

/// One expandable accordion entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccordionItem {
    pub title: String,
    pub html: String,
    pub open_by_default: bool,
}

/// Expandable accordion list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccordionData {
    pub items: Vec<AccordionItem>,
    /// When set, opening one entry closes the others.
    pub exclusive: bool,
}

impl Default for AccordionData {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            exclusive: true,
        }
    }
}

/// Icon with heading and caption.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconBoxData {
    /// Icon name from the theme's icon set.
    pub icon: String,
    pub heading: String,
    pub text: String,
    pub align: TextAlign,
}

/// Customer quote with attribution and optional portrait.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestimonialData {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub avatar_url: String,
    /// 0-5 star rating; 0 hides the rating row.
    pub rating: u8,
}

/// Standalone pull quote.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteData {
    pub text: String,
    pub attribution: String,
}
