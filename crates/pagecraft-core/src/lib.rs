//! Pagecraft Core Library
//!
//! Platform-agnostic document model and editor logic for the pagecraft
//! page builder: the structured grid document (rows, columns, blocks), the
//! free-form canvas document, the gesture state machines both editors share,
//! and the effect composition rules the renderer applies per block.

pub mod blocks;
pub mod canvas;
pub mod dnd;
pub mod document;
pub mod effects;
pub mod gesture;
pub mod grid;
pub mod id;
pub mod storage;

pub use blocks::{BlockData, BlockType};
pub use canvas::{
    CanvasDocument, CanvasEditor, CanvasElement, CanvasSettings, ELEMENT_MIN_SIZE, ElementData,
    ElementType, NudgeDirection,
};
pub use dnd::{DragSession, DropOutcome};
pub use document::{Block, BlockSettings, Column, DocumentError, PageContent, Row, RowSettings};
pub use effects::{EffectFlags, Presentation, compose};
pub use gesture::{Frame, GestureState, HandlePos, ListenerGuard, PointerSession};
pub use grid::{ColumnLayout, MobileOrder, mobile_order, reorder};
pub use id::BlockId;
pub use storage::{ContentStore, FileStore, MemoryStore, StorageError};
