//! Card collection payloads.

use serde::{Deserialize, Serialize};

use super::content::TextAlign;
use super::media::MediaRef;
use crate::effects::EffectFlags;

/// One card in a card grid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardItem {
    pub asset: MediaRef,
    pub heading: String,
    pub text: String,
    pub link_url: String,
    /// Item-level effects; override the collection-level default.
    pub effects: Option<EffectFlags>,
}

/// Grid of uniform cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardsData {
    pub items: Vec<CardItem>,
    pub columns: u8,
    pub align: TextAlign,
}

impl Default for CardsData {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            columns: 3,
            align: TextAlign::Center,
        }
    }
}

/// Trigger model for flip cards. Hover is CSS-only and state-free; click
/// toggles explicit per-card state. Touch input in hover mode maps a tap to
/// the same toggle as click mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlipTrigger {
    #[default]
    Hover,
    Click,
}

/// One two-sided flip card.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlipCardItem {
    pub front_heading: String,
    pub front_asset: MediaRef,
    pub back_heading: String,
    pub back_text: String,
    pub back_link_url: String,
    pub effects: Option<EffectFlags>,
}

/// Grid of flip cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlipCardsData {
    pub items: Vec<FlipCardItem>,
    pub columns: u8,
    pub trigger: FlipTrigger,
}

impl Default for FlipCardsData {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            columns: 3,
            trigger: FlipTrigger::Hover,
        }
    }
}

/// Text-only card item (no media slot).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextCardItem {
    pub heading: String,
    pub text: String,
    pub effects: Option<EffectFlags>,
}

/// Grid of text-only cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextCardsData {
    pub items: Vec<TextCardItem>,
    pub columns: u8,
    pub align: TextAlign,
}

impl Default for TextCardsData {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            columns: 3,
            align: TextAlign::Left,
        }
    }
}
