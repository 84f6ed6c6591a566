//! The structured page document: rows, columns, blocks.
//!
//! The persisted JSON shape is the only durable contract:
//!
//! ```text
//! PageContent := { mode: "builder", rows: Row[] } | { mode: "classic", html }
//! Row    := { id, settings?, columns: Column[] }
//! Column := { id, width?, blocks: Block[] }
//! Block  := { id, type, data, settings?, effects? }
//! ```
//!
//! Loading is lenient about payload contents (missing fields default,
//! unknown types are preserved raw) but strict about identity: a document
//! with duplicate ids is rejected.

use crate::blocks::{BlockData, BlockType};
use crate::effects::EffectFlags;
use crate::grid::MobileOrder;
use crate::id::{self, BlockId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Document errors.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid document JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate id in document: {0}")]
    DuplicateId(BlockId),
}

/// Per-side spacing in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Spacing {
    /// Equal spacing on all sides.
    pub fn uniform(px: u32) -> Self {
        Self {
            top: px,
            right: px,
            bottom: px,
            left: px,
        }
    }
}

/// Generic per-block presentation settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockSettings {
    pub padding: Spacing,
    pub margin: Spacing,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
}

/// Per-row section settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RowSettings {
    pub padding: Spacing,
    pub margin: Spacing,
    pub background_color: Option<String>,
    /// Pulls the row over its neighbors; also its stacking context order.
    pub overlap: i32,
    /// Stack columns vertically on narrow viewports.
    pub stack_on_mobile: bool,
    /// Column display order on narrow viewports.
    pub mobile_order: MobileOrder,
}

impl Default for RowSettings {
    fn default() -> Self {
        Self {
            padding: Spacing::uniform(24),
            margin: Spacing::default(),
            background_color: None,
            overlap: 0,
            stack_on_mobile: true,
            mobile_order: MobileOrder::Default,
        }
    }
}

/// The atomic content unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: BlockId,
    pub data: BlockData,
    pub settings: Option<BlockSettings>,
    pub effects: Option<EffectFlags>,
}

impl Block {
    /// Create a block of the given type with its default payload.
    pub fn new(block_type: BlockType) -> Self {
        Self {
            id: id::generate(),
            data: BlockData::default_for(block_type),
            settings: None,
            effects: None,
        }
    }
}

/// Persisted shape of a block. The payload is interpreted against the
/// `type` tag on the way in and flattened back on the way out.
#[derive(Serialize, Deserialize)]
struct WireBlock {
    id: BlockId,
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    data: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    settings: Option<BlockSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    effects: Option<EffectFlags>,
}

impl Serialize for Block {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireBlock {
            id: self.id,
            ty: self.data.type_name().to_string(),
            data: self.data.to_wire(),
            settings: self.settings.clone(),
            effects: self.effects.clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireBlock::deserialize(deserializer)?;
        Ok(Block {
            id: wire.id,
            data: BlockData::from_wire(&wire.ty, wire.data),
            settings: wire.settings,
            effects: wire.effects,
        })
    }
}

/// A vertical slot inside a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: BlockId,
    /// Relative weight out of 12. Advisory: the fixed responsive templates
    /// override it for 1-4 column rows.
    #[serde(default = "default_column_width")]
    pub width: u32,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

fn default_column_width() -> u32 {
    12
}

impl Column {
    /// Create an empty column with the given weight.
    pub fn new(width: u32) -> Self {
        Self {
            id: id::generate(),
            width,
            blocks: Vec::new(),
        }
    }

    /// True when any block in this column is a media type.
    pub fn has_media(&self) -> bool {
        self.blocks.iter().any(|block| block.data.is_media())
    }

    /// True when any block in this column is a non-media type.
    pub fn has_text(&self) -> bool {
        self.blocks.iter().any(|block| !block.data.is_media())
    }
}

/// A horizontal section of the structured document. `columns` is never
/// empty; order is left-to-right and the stacking order on narrow
/// viewports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub id: BlockId,
    #[serde(default)]
    pub settings: RowSettings,
    pub columns: Vec<Column>,
}

impl Row {
    /// Create a row with one empty column per width (`createRow`). An empty
    /// width list yields a single full-width column, preserving the
    /// non-empty invariant.
    pub fn with_layout(widths: &[u32]) -> Self {
        let columns = if widths.is_empty() {
            vec![Column::new(12)]
        } else {
            widths.iter().map(|&width| Column::new(width)).collect()
        };
        Self {
            id: id::generate(),
            settings: RowSettings::default(),
            columns,
        }
    }
}

/// Top-level page content: either the structured builder document or a
/// classic free-form HTML page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum PageContent {
    Builder { rows: Vec<Row> },
    Classic { html: String },
}

impl Default for PageContent {
    fn default() -> Self {
        PageContent::Builder { rows: Vec::new() }
    }
}

impl PageContent {
    /// Parse and validate a persisted document. Strict variant: malformed
    /// JSON and duplicate ids are both errors.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let content: PageContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Parse a persisted document, degrading to an empty classic page on
    /// malformed JSON instead of failing. Duplicate ids still reject.
    pub fn load_or_fallback(json: &str) -> Result<Self, DocumentError> {
        match serde_json::from_str::<PageContent>(json) {
            Ok(content) => {
                content.validate()?;
                Ok(content)
            }
            Err(err) => {
                log::warn!("page content did not parse, falling back to classic: {err}");
                Ok(PageContent::Classic {
                    html: String::new(),
                })
            }
        }
    }

    /// Serialize to the persisted JSON shape.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the id-uniqueness invariant across the whole tree.
    pub fn validate(&self) -> Result<(), DocumentError> {
        let PageContent::Builder { rows } = self else {
            return Ok(());
        };
        let mut seen = HashSet::new();
        for row in rows {
            if !seen.insert(row.id) {
                return Err(DocumentError::DuplicateId(row.id));
            }
            for column in &row.columns {
                if !seen.insert(column.id) {
                    return Err(DocumentError::DuplicateId(column.id));
                }
                for block in &column.blocks {
                    if !seen.insert(block.id) {
                        return Err(DocumentError::DuplicateId(block.id));
                    }
                }
            }
        }
        Ok(())
    }

    /// Rows of a builder document; empty for classic pages.
    pub fn rows(&self) -> &[Row] {
        match self {
            PageContent::Builder { rows } => rows,
            PageContent::Classic { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::CounterData;

    #[test]
    fn test_create_row_layout() {
        let row = Row::with_layout(&[6, 6]);
        assert_eq!(row.columns.len(), 2);
        for column in &row.columns {
            assert_eq!(column.width, 6);
            assert!(column.blocks.is_empty());
        }
    }

    #[test]
    fn test_empty_layout_keeps_one_column() {
        let row = Row::with_layout(&[]);
        assert_eq!(row.columns.len(), 1);
        assert_eq!(row.columns[0].width, 12);
    }

    #[test]
    fn test_block_defaults_populated() {
        let block = Block::new(BlockType::Counter);
        match &block.data {
            BlockData::Counter(counter) => {
                assert_eq!(counter, &CounterData::default());
            }
            other => panic!("expected counter payload, got {other:?}"),
        }
    }

    #[test]
    fn test_round_trip_identity() {
        let mut row = Row::with_layout(&[4, 4, 4]);
        row.columns[0].blocks.push(Block::new(BlockType::Text));
        row.columns[1].blocks.push(Block::new(BlockType::Hero));
        row.columns[2].blocks.push(Block::new(BlockType::Countdown));
        let content = PageContent::Builder { rows: vec![row] };

        let json = content.to_json().unwrap();
        let restored = PageContent::from_json(&json).unwrap();
        assert_eq!(content, restored);
    }

    #[test]
    fn test_unknown_block_type_round_trips() {
        let json = r#"{
            "mode": "builder",
            "rows": [{
                "id": "6f9619ff-8b86-d011-b42d-00cf4fc964ff",
                "columns": [{
                    "id": "7f9619ff-8b86-d011-b42d-00cf4fc964ff",
                    "width": 12,
                    "blocks": [{
                        "id": "8f9619ff-8b86-d011-b42d-00cf4fc964ff",
                        "type": "unknown-foo",
                        "data": { "custom": true }
                    }]
                }]
            }]
        }"#;
        let content = PageContent::from_json(json).unwrap();
        let block = &content.rows()[0].columns[0].blocks[0];
        assert_eq!(block.data.type_name(), "unknown-foo");

        let restored = PageContent::from_json(&content.to_json().unwrap()).unwrap();
        assert_eq!(content, restored);
    }

    #[test]
    fn test_malformed_json_falls_back_to_classic() {
        let content = PageContent::load_or_fallback("{not json").unwrap();
        assert_eq!(
            content,
            PageContent::Classic {
                html: String::new()
            }
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let row = Row::with_layout(&[12]);
        let dup = row.columns[0].id;
        let mut block = Block::new(BlockType::Text);
        block.id = dup;
        let mut row = row;
        row.columns[0].blocks.push(block);
        let content = PageContent::Builder { rows: vec![row] };

        let json = content.to_json().unwrap();
        assert!(matches!(
            PageContent::from_json(&json),
            Err(DocumentError::DuplicateId(id)) if id == dup
        ));
    }

    #[test]
    fn test_classic_mode_round_trip() {
        let content = PageContent::Classic {
            html: "<p>hello</p>".to_string(),
        };
        let json = content.to_json().unwrap();
        assert_eq!(PageContent::from_json(&json).unwrap(), content);
    }
}
