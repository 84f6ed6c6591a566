//! Lightweight render tree.
//!
//! Block renderers produce [`RenderNode`] values instead of writing markup
//! directly. The tree is cheap to build, easy to assert on in tests, and a
//! host can flatten it to whatever output it needs.

use std::collections::BTreeMap;
use std::fmt::Write as _;

/// A node in the rendered output tree.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderNode {
    /// A styled container with children.
    Element(ElementNode),

    /// Plain text content, escaped on output.
    Text(String),

    /// Pre-authored markup emitted verbatim. Used by the raw HTML block and
    /// the classic-mode page body; callers own sanitization.
    Raw(String),

    /// Renders nothing. Unknown block types collapse to this.
    Empty,
}

/// An element with a tag, classes, inline styles and children.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementNode {
    pub tag: String,
    pub classes: Vec<String>,
    /// Inline style properties. BTreeMap keeps output deterministic.
    pub styles: BTreeMap<String, String>,
    /// Plain attributes (`src`, `href`, `data-*`...).
    pub attrs: BTreeMap<String, String>,
    pub children: Vec<RenderNode>,
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.classes.push(name.into());
        self
    }

    pub fn classes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn style(mut self, prop: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(prop.into(), value.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, node: RenderNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(RenderNode::Text(content.into()))
    }

    pub fn build(self) -> RenderNode {
        RenderNode::Element(self)
    }
}

impl RenderNode {
    /// Shorthand for starting an element builder.
    pub fn element(tag: impl Into<String>) -> ElementNode {
        ElementNode::new(tag)
    }

    pub fn text(content: impl Into<String>) -> Self {
        RenderNode::Text(content.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RenderNode::Empty)
    }

    /// Serializes the tree to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            RenderNode::Empty => {}
            RenderNode::Text(text) => out.push_str(&escape(text)),
            RenderNode::Raw(html) => out.push_str(html),
            RenderNode::Element(el) => {
                let _ = write!(out, "<{}", el.tag);
                if !el.classes.is_empty() {
                    let _ = write!(out, " class=\"{}\"", escape(&el.classes.join(" ")));
                }
                if !el.styles.is_empty() {
                    out.push_str(" style=\"");
                    for (prop, value) in &el.styles {
                        let _ = write!(out, "{}: {};", prop, escape(value));
                    }
                    out.push('"');
                }
                for (name, value) in &el.attrs {
                    let _ = write!(out, " {}=\"{}\"", name, escape(value));
                }
                out.push('>');
                for child in &el.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", el.tag);
            }
        }
    }

    /// Finds the first element matching the class, depth-first. Test helper
    /// for asserting on nested output.
    pub fn find_class(&self, class: &str) -> Option<&ElementNode> {
        match self {
            RenderNode::Element(el) => {
                if el.classes.iter().any(|c| c == class) {
                    return Some(el);
                }
                el.children.iter().find_map(|c| c.find_class(class))
            }
            _ => None,
        }
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_builder_produces_nested_tree() {
        let node = RenderNode::element("div")
            .class("card")
            .style("color", "#333")
            .child(RenderNode::element("span").text("hello").build())
            .build();

        let card = node.find_class("card").unwrap();
        assert_eq!(card.tag, "div");
        assert_eq!(card.children.len(), 1);
    }

    #[test]
    fn test_to_html_escapes_text() {
        let node = RenderNode::element("p").text("a < b & c").build();
        assert_eq!(node.to_html(), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn test_raw_passes_through_unescaped() {
        let node = RenderNode::Raw("<b>bold</b>".into());
        assert_eq!(node.to_html(), "<b>bold</b>");
    }

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(RenderNode::Empty.to_html(), "");
    }

    #[test]
    fn test_styles_render_deterministically() {
        let node = RenderNode::element("div")
            .style("width", "10px")
            .style("height", "20px")
            .build();
        assert_eq!(
            node.to_html(),
            "<div style=\"height: 20px;width: 10px;\"></div>"
        );
    }
}
