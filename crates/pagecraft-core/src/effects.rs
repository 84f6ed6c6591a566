//! Declarative visual-effect flags and their composition.
//!
//! Effects are independent, additive flags attached to a block or to a
//! single item inside a collection block. Composition turns a set of flags
//! into a final presentation descriptor (class list + inline style
//! variables) and is idempotent: composing the output's source flags twice
//! yields the same descriptor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hover transition family applied to a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HoverEffect {
    #[default]
    None,
    Lift,
    Grow,
    Shrink,
    Glow,
}

impl HoverEffect {
    fn class_name(self) -> Option<&'static str> {
        match self {
            HoverEffect::None => None,
            HoverEffect::Lift => Some("fx-hover-lift"),
            HoverEffect::Grow => Some("fx-hover-grow"),
            HoverEffect::Shrink => Some("fx-hover-shrink"),
            HoverEffect::Glow => Some("fx-hover-glow"),
        }
    }
}

/// Load-in animation applied when the block first becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoadAnimation {
    #[default]
    None,
    FadeIn,
    SlideUp,
    SlideLeft,
    ZoomIn,
}

impl LoadAnimation {
    fn class_name(self) -> Option<&'static str> {
        match self {
            LoadAnimation::None => None,
            LoadAnimation::FadeIn => Some("fx-load-fade"),
            LoadAnimation::SlideUp => Some("fx-load-slide-up"),
            LoadAnimation::SlideLeft => Some("fx-load-slide-left"),
            LoadAnimation::ZoomIn => Some("fx-load-zoom"),
        }
    }
}

/// Independent effect flags for a block or a collection item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EffectFlags {
    /// Hover transition family.
    pub hover: HoverEffect,
    /// Load-in animation.
    pub load: LoadAnimation,
    /// Darkening overlay shown on hover.
    pub hover_overlay: bool,
    /// 3D flip behavior (flip-card collections).
    pub flip_3d: bool,
    /// Stagger load animations across siblings, in milliseconds per index.
    pub stagger_ms: Option<u32>,
}

impl EffectFlags {
    /// True when no effect is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge item-level flags over collection-level defaults. Any flag set
    /// on `self` wins; unset flags fall through to `base`.
    pub fn merged_over(&self, base: &EffectFlags) -> EffectFlags {
        EffectFlags {
            hover: if self.hover == HoverEffect::None {
                base.hover
            } else {
                self.hover
            },
            load: if self.load == LoadAnimation::None {
                base.load
            } else {
                self.load
            },
            hover_overlay: self.hover_overlay || base.hover_overlay,
            flip_3d: self.flip_3d || base.flip_3d,
            stagger_ms: self.stagger_ms.or(base.stagger_ms),
        }
    }
}

/// Final presentation descriptor produced by composition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Presentation {
    /// CSS class names, in a stable order.
    pub class_names: Vec<String>,
    /// Inline custom-property assignments (`--name` -> value).
    pub style_vars: BTreeMap<String, String>,
}

/// Compose effect flags into a presentation descriptor.
///
/// `sibling_index` keys the staggered delay for items inside a collection;
/// standalone blocks pass 0.
pub fn compose(effects: &EffectFlags, sibling_index: usize) -> Presentation {
    let mut class_names = Vec::new();
    let mut style_vars = BTreeMap::new();

    if let Some(class) = effects.hover.class_name() {
        class_names.push(class.to_string());
    }
    if let Some(class) = effects.load.class_name() {
        class_names.push(class.to_string());
    }
    if effects.hover_overlay {
        class_names.push("fx-hover-overlay".to_string());
    }
    if effects.flip_3d {
        class_names.push("fx-flip-3d".to_string());
    }
    if let Some(step) = effects.stagger_ms {
        let delay = step as usize * sibling_index;
        style_vars.insert("--fx-delay".to_string(), format!("{delay}ms"));
    }

    Presentation {
        class_names,
        style_vars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_flags_compose_to_nothing() {
        let out = compose(&EffectFlags::default(), 0);
        assert!(out.class_names.is_empty());
        assert!(out.style_vars.is_empty());
    }

    #[test]
    fn test_compose_is_idempotent() {
        let flags = EffectFlags {
            hover: HoverEffect::Lift,
            load: LoadAnimation::FadeIn,
            hover_overlay: true,
            flip_3d: false,
            stagger_ms: Some(80),
        };
        assert_eq!(compose(&flags, 3), compose(&flags, 3));
    }

    #[test]
    fn test_stagger_keyed_by_sibling_index() {
        let flags = EffectFlags {
            stagger_ms: Some(100),
            ..EffectFlags::default()
        };
        let out = compose(&flags, 2);
        assert_eq!(out.style_vars.get("--fx-delay").map(String::as_str), Some("200ms"));
    }

    #[test]
    fn test_item_flags_override_collection_defaults() {
        let collection = EffectFlags {
            hover: HoverEffect::Grow,
            load: LoadAnimation::SlideUp,
            stagger_ms: Some(50),
            ..EffectFlags::default()
        };
        let item = EffectFlags {
            hover: HoverEffect::Glow,
            ..EffectFlags::default()
        };
        let merged = item.merged_over(&collection);
        assert_eq!(merged.hover, HoverEffect::Glow);
        assert_eq!(merged.load, LoadAnimation::SlideUp);
        assert_eq!(merged.stagger_ms, Some(50));
    }

    #[test]
    fn test_merge_is_associative_in_output() {
        let a = EffectFlags {
            hover: HoverEffect::Lift,
            ..EffectFlags::default()
        };
        let b = EffectFlags {
            load: LoadAnimation::ZoomIn,
            ..EffectFlags::default()
        };
        let c = EffectFlags {
            stagger_ms: Some(40),
            ..EffectFlags::default()
        };
        let left = a.merged_over(&b).merged_over(&c);
        let right = a.merged_over(&b.merged_over(&c));
        assert_eq!(compose(&left, 1), compose(&right, 1));
    }
}
