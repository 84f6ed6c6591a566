//! Hero background resolution and content placement.
//!
//! The hero payload keeps every background field populated so editors can
//! switch kinds without losing work; rendering picks the layers that the
//! active kind actually uses, falling back to the solid color when the
//! chosen kind has no usable media.

use pagecraft_core::blocks::{
    BackgroundKind, ContentPosition, GradientData, HeroBannerData, HeroData, HorizontalPos,
    MediaRef, OverlayData, VerticalPos,
};

use crate::tree::RenderNode;

/// Background fields shared by the full and compact hero payloads.
pub struct BackgroundInputs<'a> {
    pub kind: BackgroundKind,
    pub color: &'a str,
    pub gradient: &'a GradientData,
    pub image: &'a MediaRef,
    pub video_url: &'a str,
    pub effect_pattern: &'a str,
    pub split_images: &'a [MediaRef],
    pub overlay: &'a OverlayData,
}

impl<'a> From<&'a HeroBannerData> for BackgroundInputs<'a> {
    fn from(data: &'a HeroBannerData) -> Self {
        Self {
            kind: data.background,
            color: &data.color,
            gradient: &data.gradient,
            image: &data.image,
            video_url: &data.video_url,
            effect_pattern: &data.effect_pattern,
            split_images: &data.split_images,
            overlay: &data.overlay,
        }
    }
}

impl<'a> From<&'a HeroData> for BackgroundInputs<'a> {
    fn from(data: &'a HeroData) -> Self {
        Self {
            kind: data.background,
            color: &data.color,
            gradient: &data.gradient,
            image: &data.image,
            video_url: &data.video_url,
            effect_pattern: &data.effect_pattern,
            split_images: &data.split_images,
            overlay: &data.overlay,
        }
    }
}

/// One paint layer of a resolved background, bottom to top.
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundLayer {
    Color(String),
    Gradient { from: String, to: String, angle_deg: i32 },
    Image(String),
    Video(String),
    Pattern(String),
    SplitImages(Vec<String>),
}

/// The layers to paint plus the overlay strength, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBackground {
    pub layers: Vec<BackgroundLayer>,
    /// Darkening overlay opacity. Never present over a plain solid color.
    pub overlay: Option<f64>,
}

/// Resolves the active background kind into paint layers.
///
/// Kinds whose media is missing fall back to the solid color so a hero
/// never renders blank. The `effect` kind layers its pattern over the
/// image when one is set.
pub fn resolve_background(inputs: &BackgroundInputs<'_>) -> ResolvedBackground {
    let color_layer = |color: &str| BackgroundLayer::Color(color.to_string());

    let layers = match inputs.kind {
        BackgroundKind::Color => vec![color_layer(inputs.color)],
        BackgroundKind::Gradient => vec![BackgroundLayer::Gradient {
            from: inputs.gradient.from.clone(),
            to: inputs.gradient.to.clone(),
            angle_deg: inputs.gradient.angle_deg,
        }],
        BackgroundKind::Image => {
            if inputs.image.is_empty() {
                vec![color_layer(inputs.color)]
            } else {
                vec![BackgroundLayer::Image(inputs.image.url.clone())]
            }
        }
        BackgroundKind::Video => {
            if inputs.video_url.is_empty() {
                vec![color_layer(inputs.color)]
            } else {
                vec![BackgroundLayer::Video(inputs.video_url.to_string())]
            }
        }
        BackgroundKind::Effect => {
            let mut layers = Vec::new();
            if !inputs.image.is_empty() {
                layers.push(BackgroundLayer::Image(inputs.image.url.clone()));
            }
            if inputs.effect_pattern.is_empty() {
                if layers.is_empty() {
                    layers.push(color_layer(inputs.color));
                }
            } else {
                layers.push(BackgroundLayer::Pattern(inputs.effect_pattern.to_string()));
            }
            layers
        }
        BackgroundKind::SplitImages => {
            let urls: Vec<String> = inputs
                .split_images
                .iter()
                .filter(|m| !m.is_empty())
                .map(|m| m.url.clone())
                .collect();
            if urls.is_empty() {
                vec![color_layer(inputs.color)]
            } else {
                vec![BackgroundLayer::SplitImages(urls)]
            }
        }
    };

    let solid_only = matches!(layers.as_slice(), [BackgroundLayer::Color(_)]);
    let overlay = if inputs.overlay.enabled && !solid_only {
        Some(inputs.overlay.opacity.clamp(0.0, 1.0))
    } else {
        None
    };

    ResolvedBackground { layers, overlay }
}

/// Flex placement derived from a content-position keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentAlignment {
    /// `justify-content` of the column flex container (vertical axis).
    pub justify_content: &'static str,
    /// `align-items` of the column flex container (horizontal axis).
    pub align_items: &'static str,
    pub text_align: &'static str,
}

/// Maps the two position axes independently onto flex properties.
pub fn content_alignment(position: ContentPosition) -> ContentAlignment {
    let justify_content = match position.vertical {
        VerticalPos::Top => "flex-start",
        VerticalPos::Middle => "center",
        VerticalPos::Bottom => "flex-end",
    };
    let (align_items, text_align) = match position.horizontal {
        HorizontalPos::Left => ("flex-start", "left"),
        HorizontalPos::Center => ("center", "center"),
        HorizontalPos::Right => ("flex-end", "right"),
    };
    ContentAlignment {
        justify_content,
        align_items,
        text_align,
    }
}

fn layer_node(layer: &BackgroundLayer) -> RenderNode {
    match layer {
        BackgroundLayer::Color(color) => RenderNode::element("div")
            .class("hero-bg")
            .class("hero-bg-color")
            .style("background-color", color)
            .build(),
        BackgroundLayer::Gradient {
            from,
            to,
            angle_deg,
        } => RenderNode::element("div")
            .class("hero-bg")
            .class("hero-bg-gradient")
            .style(
                "background",
                format!("linear-gradient({angle_deg}deg, {from}, {to})"),
            )
            .build(),
        BackgroundLayer::Image(url) => RenderNode::element("div")
            .class("hero-bg")
            .class("hero-bg-image")
            .style("background-image", format!("url({url})"))
            .build(),
        BackgroundLayer::Video(url) => RenderNode::element("video")
            .class("hero-bg")
            .class("hero-bg-video")
            .attr("src", url.clone())
            .build(),
        BackgroundLayer::Pattern(name) => RenderNode::element("div")
            .class("hero-bg")
            .class(format!("hero-bg-pattern-{name}"))
            .build(),
        BackgroundLayer::SplitImages(urls) => {
            let mut split = RenderNode::element("div")
                .class("hero-bg")
                .class("hero-bg-split");
            for url in urls {
                split = split.child(
                    RenderNode::element("div")
                        .class("hero-bg-split-pane")
                        .style("background-image", format!("url({url})"))
                        .build(),
                );
            }
            split.build()
        }
    }
}

/// Assembles the hero shell: background layers, optional overlay, then a
/// positioned content container.
pub fn hero_shell(
    inputs: &BackgroundInputs<'_>,
    position: ContentPosition,
    min_height_px: Option<u32>,
    content: RenderNode,
) -> RenderNode {
    let resolved = resolve_background(inputs);
    let alignment = content_alignment(position);

    let mut section = RenderNode::element("section").class("hero");
    if let Some(height) = min_height_px {
        section = section.style("min-height", format!("{height}px"));
    }
    for layer in &resolved.layers {
        section = section.child(layer_node(layer));
    }
    if let Some(opacity) = resolved.overlay {
        section = section.child(
            RenderNode::element("div")
                .class("hero-overlay")
                .style("background-color", format!("rgba(0, 0, 0, {opacity})"))
                .build(),
        );
    }
    section
        .child(
            RenderNode::element("div")
                .class("hero-content")
                .style("justify-content", alignment.justify_content)
                .style("align-items", alignment.align_items)
                .style("text-align", alignment.text_align)
                .child(content)
                .build(),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(data: &HeroBannerData) -> BackgroundInputs<'_> {
        BackgroundInputs::from(data)
    }

    #[test]
    fn test_solid_color_suppresses_overlay() {
        let data = HeroBannerData::default();
        let resolved = resolve_background(&inputs(&data));
        assert_eq!(resolved.layers, vec![BackgroundLayer::Color("#1a1a2e".into())]);
        assert_eq!(resolved.overlay, None);
    }

    #[test]
    fn test_image_kind_keeps_overlay() {
        let data = HeroBannerData {
            background: BackgroundKind::Image,
            image: MediaRef {
                url: "https://cdn.test/a.jpg".into(),
                ..MediaRef::default()
            },
            ..HeroBannerData::default()
        };
        let resolved = resolve_background(&inputs(&data));
        assert_eq!(
            resolved.layers,
            vec![BackgroundLayer::Image("https://cdn.test/a.jpg".into())]
        );
        assert_eq!(resolved.overlay, Some(0.4));
    }

    #[test]
    fn test_missing_image_falls_back_to_color() {
        let data = HeroBannerData {
            background: BackgroundKind::Image,
            ..HeroBannerData::default()
        };
        let resolved = resolve_background(&inputs(&data));
        assert_eq!(resolved.layers, vec![BackgroundLayer::Color("#1a1a2e".into())]);
        // Fallback is a plain solid color, so no overlay either.
        assert_eq!(resolved.overlay, None);
    }

    #[test]
    fn test_effect_pattern_layers_over_image() {
        let data = HeroBannerData {
            background: BackgroundKind::Effect,
            effect_pattern: "waves".into(),
            image: MediaRef {
                url: "https://cdn.test/b.jpg".into(),
                ..MediaRef::default()
            },
            ..HeroBannerData::default()
        };
        let resolved = resolve_background(&inputs(&data));
        assert_eq!(
            resolved.layers,
            vec![
                BackgroundLayer::Image("https://cdn.test/b.jpg".into()),
                BackgroundLayer::Pattern("waves".into()),
            ]
        );
    }

    #[test]
    fn test_alignment_axes_map_independently() {
        let alignment = content_alignment(ContentPosition::parse("bottom-left"));
        assert_eq!(alignment.justify_content, "flex-end");
        assert_eq!(alignment.align_items, "flex-start");
        assert_eq!(alignment.text_align, "left");

        let alignment = content_alignment(ContentPosition::parse("top-right"));
        assert_eq!(alignment.justify_content, "flex-start");
        assert_eq!(alignment.align_items, "flex-end");
        assert_eq!(alignment.text_align, "right");
    }

    #[test]
    fn test_shell_orders_layers_overlay_content() {
        let data = HeroBannerData {
            background: BackgroundKind::Gradient,
            ..HeroBannerData::default()
        };
        let node = hero_shell(
            &inputs(&data),
            ContentPosition::default(),
            Some(480),
            RenderNode::text("hi"),
        );
        let RenderNode::Element(section) = &node else {
            panic!("expected element");
        };
        assert_eq!(section.children.len(), 3);
        assert!(node.find_class("hero-bg-gradient").is_some());
        assert!(node.find_class("hero-overlay").is_some());
        assert!(node.find_class("hero-content").is_some());
    }
}
