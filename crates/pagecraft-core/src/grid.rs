//! Grid composition: reordering, column layout selection and the
//! responsive rules the public renderer must reproduce for visual parity.

use crate::document::{Column, Row};
use serde::{Deserialize, Serialize};

/// Move one element of a list from `from` to `to`, leaving every other
/// element in its original relative order. Out-of-range indices leave the
/// list untouched. Used identically for rows, columns within a row, blocks
/// within a column and sibling sections.
pub fn reorder<T>(mut list: Vec<T>, from: usize, to: usize) -> Vec<T> {
    if from >= list.len() || to >= list.len() || from == to {
        return list;
    }
    let moved = list.remove(from);
    list.insert(to, moved);
    list
}

/// Column display order policy for narrow viewports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MobileOrder {
    /// Keep the authored order.
    #[default]
    Default,
    /// Media-bearing columns stack first.
    ImageFirst,
    /// Text-only columns stack first.
    TextFirst,
}

/// Produce the column display order (as indices into `columns`) for narrow
/// viewports. The sort is stable: ties keep the authored order.
pub fn mobile_order(columns: &[Column], policy: MobileOrder) -> Vec<usize> {
    let mut order: Vec<usize> = (0..columns.len()).collect();
    match policy {
        MobileOrder::Default => {}
        MobileOrder::ImageFirst => {
            order.sort_by_key(|&idx| !columns[idx].has_media());
        }
        MobileOrder::TextFirst => {
            order.sort_by_key(|&idx| columns[idx].has_media());
        }
    }
    order
}

/// Upper bound on grid tracks for rows beyond the fixed presets.
pub const MAX_GRID_TRACKS: usize = 6;

/// Resolved responsive grid template for a row. Counts are equal-width
/// tracks per breakpoint; declared column weights are advisory and only
/// honored where `uses_weights` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub desktop_tracks: usize,
    pub tablet_tracks: usize,
    pub mobile_tracks: usize,
    /// Whether declared column weights pass through to the desktop grid.
    /// Only the generic >4-column template carries them; the 1-4 presets
    /// always use equal tracks.
    pub uses_weights: bool,
}

impl ColumnLayout {
    /// Resolve a column count to its template. Counts 1-4 map to fixed
    /// presets; anything larger falls back to a generic template capped at
    /// [`MAX_GRID_TRACKS`].
    pub fn resolve(column_count: usize) -> Self {
        match column_count {
            0 | 1 => Self {
                desktop_tracks: 1,
                tablet_tracks: 1,
                mobile_tracks: 1,
                uses_weights: false,
            },
            2 => Self {
                desktop_tracks: 2,
                tablet_tracks: 2,
                mobile_tracks: 1,
                uses_weights: false,
            },
            3 => Self {
                desktop_tracks: 3,
                tablet_tracks: 3,
                mobile_tracks: 1,
                uses_weights: false,
            },
            4 => Self {
                desktop_tracks: 4,
                tablet_tracks: 2,
                mobile_tracks: 1,
                uses_weights: false,
            },
            n => Self {
                desktop_tracks: n.min(MAX_GRID_TRACKS),
                tablet_tracks: 2,
                mobile_tracks: 1,
                uses_weights: true,
            },
        }
    }
}

impl Row {
    /// Replace this row's column layout. Columns that survive positionally
    /// keep their id and blocks (only the width changes); extra widths add
    /// empty columns; a shrinking layout discards the tail. An empty width
    /// list is treated as a single full-width column.
    pub fn set_column_layout(&mut self, widths: &[u32]) {
        let widths = if widths.is_empty() { &[12][..] } else { widths };
        self.columns.truncate(widths.len());
        for (column, &width) in self.columns.iter_mut().zip(widths) {
            column.width = width;
        }
        for &width in &widths[self.columns.len()..] {
            self.columns.push(Column::new(width));
        }
    }

    /// Structural full-bleed rule: a row spans the full viewport width
    /// exactly when it has a single column containing a full-bleed block
    /// type. There is no explicit flag for this.
    pub fn is_full_bleed(&self) -> bool {
        self.columns.len() == 1
            && self.columns[0]
                .blocks
                .iter()
                .any(|block| block.data.is_full_bleed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlockType;
    use crate::document::Block;
    use std::rc::Rc;

    #[test]
    fn test_reorder_is_a_permutation() {
        let list = vec!["a", "b", "c", "d"];
        let moved = reorder(list, 0, 2);
        assert_eq!(moved, vec!["b", "c", "a", "d"]);
        assert_eq!(moved.len(), 4);
    }

    #[test]
    fn test_reorder_backwards() {
        let list = vec![1, 2, 3, 4, 5];
        assert_eq!(reorder(list, 3, 1), vec![1, 4, 2, 3, 5]);
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let list = vec![1, 2, 3];
        assert_eq!(reorder(list.clone(), 5, 1), list);
        assert_eq!(reorder(list.clone(), 1, 5), list);
        assert_eq!(reorder(list.clone(), 2, 2), list);
    }

    #[test]
    fn test_reorder_preserves_identity_of_untouched_elements() {
        let list: Vec<Rc<u32>> = (0..4).map(Rc::new).collect();
        let originals = list.clone();
        let moved = reorder(list, 0, 2);
        // The moved element and every bystander are the same allocations.
        assert!(Rc::ptr_eq(&moved[2], &originals[0]));
        assert!(Rc::ptr_eq(&moved[0], &originals[1]));
        assert!(Rc::ptr_eq(&moved[1], &originals[2]));
        assert!(Rc::ptr_eq(&moved[3], &originals[3]));
    }

    #[test]
    fn test_column_drag_scenario() {
        // Dragging a column from index 0 to index 2 in a 3-column row.
        let row = Row::with_layout(&[4, 4, 4]);
        let ids: Vec<_> = row.columns.iter().map(|c| c.id).collect();
        let moved = reorder(row.columns, 0, 2);
        let new_ids: Vec<_> = moved.iter().map(|c| c.id).collect();
        assert_eq!(new_ids, vec![ids[1], ids[2], ids[0]]);
    }

    #[test]
    fn test_set_column_layout_preserves_surviving_blocks() {
        let mut row = Row::with_layout(&[6, 6]);
        row.columns[0].blocks.push(Block::new(BlockType::Text));
        row.columns[1].blocks.push(Block::new(BlockType::Image));
        let first_id = row.columns[0].id;

        row.set_column_layout(&[4, 4, 4]);
        assert_eq!(row.columns.len(), 3);
        assert_eq!(row.columns[0].id, first_id);
        assert_eq!(row.columns[0].blocks.len(), 1);
        assert_eq!(row.columns[0].width, 4);
        assert!(row.columns[2].blocks.is_empty());

        row.set_column_layout(&[12]);
        assert_eq!(row.columns.len(), 1);
        assert_eq!(row.columns[0].id, first_id);
    }

    #[test]
    fn test_layout_templates() {
        assert_eq!(ColumnLayout::resolve(1).desktop_tracks, 1);
        assert_eq!(ColumnLayout::resolve(3).desktop_tracks, 3);
        assert_eq!(ColumnLayout::resolve(4).tablet_tracks, 2);
        assert!(!ColumnLayout::resolve(4).uses_weights);

        let wide = ColumnLayout::resolve(8);
        assert_eq!(wide.desktop_tracks, MAX_GRID_TRACKS);
        assert!(wide.uses_weights);
    }

    #[test]
    fn test_mobile_order_is_stable() {
        let mut columns = vec![
            Column::new(4),
            Column::new(4),
            Column::new(4),
        ];
        columns[1].blocks.push(Block::new(BlockType::Image));
        columns[0].blocks.push(Block::new(BlockType::Text));
        columns[2].blocks.push(Block::new(BlockType::Text));

        assert_eq!(mobile_order(&columns, MobileOrder::Default), vec![0, 1, 2]);
        assert_eq!(
            mobile_order(&columns, MobileOrder::ImageFirst),
            vec![1, 0, 2]
        );
        // Ties (the two text columns) keep their authored order.
        assert_eq!(
            mobile_order(&columns, MobileOrder::TextFirst),
            vec![0, 2, 1]
        );
    }

    #[test]
    fn test_full_bleed_rule_is_structural() {
        let mut row = Row::with_layout(&[12]);
        assert!(!row.is_full_bleed());

        row.columns[0].blocks.push(Block::new(BlockType::Hero));
        assert!(row.is_full_bleed());

        // Two columns never full-bleed, even with a hero present.
        let mut two = Row::with_layout(&[6, 6]);
        two.columns[0].blocks.push(Block::new(BlockType::Hero));
        assert!(!two.is_full_bleed());
    }
}
