//! Free-form canvas document: absolutely positioned, resizable, z-ordered
//! elements.
//!
//! `CanvasDocument` is the persisted shape; `CanvasEditor` holds the
//! runtime editing state (selection, zoom) around it. Geometry errors are
//! prevented structurally by clamping, never by exceptions.

use crate::blocks::MediaRef;
use crate::id::{self, BlockId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Minimum element width/height in canvas pixels.
pub const ELEMENT_MIN_SIZE: f64 = 20.0;

/// Zoom factor bounds.
pub const MIN_SCALE: f64 = 0.25;
pub const MAX_SCALE: f64 = 2.0;

/// Offset applied when duplicating an element.
const DUPLICATE_OFFSET: f64 = 20.0;

/// The set of known canvas element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementType {
    Text,
    Heading,
    Image,
    Button,
    Shape,
    Icon,
    Video,
    Divider,
    Container,
}

impl ElementType {
    /// Wire name in the persisted `type` field.
    pub fn name(self) -> &'static str {
        match self {
            ElementType::Text => "text",
            ElementType::Heading => "heading",
            ElementType::Image => "image",
            ElementType::Button => "button",
            ElementType::Shape => "shape",
            ElementType::Icon => "icon",
            ElementType::Video => "video",
            ElementType::Divider => "divider",
            ElementType::Container => "container",
        }
    }

    /// Default size for a freshly added element of this type.
    pub fn default_size(self) -> (f64, f64) {
        match self {
            ElementType::Text => (200.0, 50.0),
            ElementType::Heading => (300.0, 60.0),
            ElementType::Image => (300.0, 200.0),
            ElementType::Button => (150.0, 50.0),
            ElementType::Shape => (150.0, 150.0),
            ElementType::Icon => (60.0, 60.0),
            ElementType::Video => (400.0, 225.0),
            ElementType::Divider => (200.0, 20.0),
            ElementType::Container => (300.0, 200.0),
        }
    }
}

/// Text element payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasTextData {
    pub html: String,
    pub font_size: u32,
    pub color: String,
}

impl Default for CanvasTextData {
    fn default() -> Self {
        Self {
            html: String::new(),
            font_size: 16,
            color: "#222222".to_string(),
        }
    }
}

/// Heading element payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasHeadingData {
    pub text: String,
    /// Heading level 1-6.
    pub level: u8,
    pub color: String,
}

impl Default for CanvasHeadingData {
    fn default() -> Self {
        Self {
            text: "Heading".to_string(),
            level: 2,
            color: "#111111".to_string(),
        }
    }
}

/// Image element payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasImageData {
    pub asset: MediaRef,
    pub alt: String,
}

/// Button element payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasButtonData {
    pub label: String,
    pub url: String,
    pub variant: String,
}

impl Default for CanvasButtonData {
    fn default() -> Self {
        Self {
            label: "Button".to_string(),
            url: String::new(),
            variant: "primary".to_string(),
        }
    }
}

/// Geometric primitive kinds for the shape element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Ellipse,
    Triangle,
}

/// Shape element payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasShapeData {
    pub kind: ShapeKind,
    pub fill: String,
    pub stroke: String,
    pub corner_radius: u32,
}

impl Default for CanvasShapeData {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Rectangle,
            fill: "#4a90d9".to_string(),
            stroke: String::new(),
            corner_radius: 0,
        }
    }
}

/// Icon element payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasIconData {
    pub icon: String,
    pub color: String,
}

impl Default for CanvasIconData {
    fn default() -> Self {
        Self {
            icon: "star".to_string(),
            color: "#222222".to_string(),
        }
    }
}

/// Video element payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasVideoData {
    pub url: String,
    pub autoplay: bool,
    pub muted: bool,
}

impl Default for CanvasVideoData {
    fn default() -> Self {
        Self {
            url: String::new(),
            autoplay: false,
            muted: true,
        }
    }
}

/// Divider element payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasDividerData {
    pub color: String,
    pub thickness_px: u32,
}

impl Default for CanvasDividerData {
    fn default() -> Self {
        Self {
            color: "#e0e0e0".to_string(),
            thickness_px: 2,
        }
    }
}

/// Container element payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasContainerData {
    pub background_color: String,
    pub corner_radius: u32,
}

impl Default for CanvasContainerData {
    fn default() -> Self {
        Self {
            background_color: "#f5f5f5".to_string(),
            corner_radius: 8,
        }
    }
}

/// Type-specific payload of a canvas element; same discriminated-union
/// discipline as block payloads, including lossless unknown types.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementData {
    Text(CanvasTextData),
    Heading(CanvasHeadingData),
    Image(CanvasImageData),
    Button(CanvasButtonData),
    Shape(CanvasShapeData),
    Icon(CanvasIconData),
    Video(CanvasVideoData),
    Divider(CanvasDividerData),
    Container(CanvasContainerData),
    Unknown { type_name: String, raw: Value },
}

impl ElementData {
    /// Default payload for a known element type.
    pub fn default_for(element_type: ElementType) -> Self {
        match element_type {
            ElementType::Text => ElementData::Text(CanvasTextData::default()),
            ElementType::Heading => ElementData::Heading(CanvasHeadingData::default()),
            ElementType::Image => ElementData::Image(CanvasImageData::default()),
            ElementType::Button => ElementData::Button(CanvasButtonData::default()),
            ElementType::Shape => ElementData::Shape(CanvasShapeData::default()),
            ElementType::Icon => ElementData::Icon(CanvasIconData::default()),
            ElementType::Video => ElementData::Video(CanvasVideoData::default()),
            ElementType::Divider => ElementData::Divider(CanvasDividerData::default()),
            ElementType::Container => ElementData::Container(CanvasContainerData::default()),
        }
    }

    /// The wire name this payload serializes under.
    pub fn type_name(&self) -> &str {
        match self {
            ElementData::Text(_) => "text",
            ElementData::Heading(_) => "heading",
            ElementData::Image(_) => "image",
            ElementData::Button(_) => "button",
            ElementData::Shape(_) => "shape",
            ElementData::Icon(_) => "icon",
            ElementData::Video(_) => "video",
            ElementData::Divider(_) => "divider",
            ElementData::Container(_) => "container",
            ElementData::Unknown { type_name, .. } => type_name,
        }
    }

    /// Interpret a wire `type`/`data` pair, defaulting unparsable payloads
    /// and preserving unknown types raw.
    pub fn from_wire(type_name: &str, data: Value) -> Self {
        fn parse<T: Default + for<'de> Deserialize<'de>>(value: Value) -> T {
            serde_json::from_value(value).unwrap_or_else(|err| {
                log::warn!("canvas element payload did not parse, using defaults: {err}");
                T::default()
            })
        }

        match type_name {
            "text" => ElementData::Text(parse(data)),
            "heading" => ElementData::Heading(parse(data)),
            "image" => ElementData::Image(parse(data)),
            "button" => ElementData::Button(parse(data)),
            "shape" => ElementData::Shape(parse(data)),
            "icon" => ElementData::Icon(parse(data)),
            "video" => ElementData::Video(parse(data)),
            "divider" => ElementData::Divider(parse(data)),
            "container" => ElementData::Container(parse(data)),
            other => ElementData::Unknown {
                type_name: other.to_string(),
                raw: data,
            },
        }
    }

    /// Serialize to the wire `data` value.
    pub fn to_wire(&self) -> Value {
        fn emit<T: Serialize>(payload: &T) -> Value {
            serde_json::to_value(payload).unwrap_or(Value::Null)
        }

        match self {
            ElementData::Text(d) => emit(d),
            ElementData::Heading(d) => emit(d),
            ElementData::Image(d) => emit(d),
            ElementData::Button(d) => emit(d),
            ElementData::Shape(d) => emit(d),
            ElementData::Icon(d) => emit(d),
            ElementData::Video(d) => emit(d),
            ElementData::Divider(d) => emit(d),
            ElementData::Container(d) => emit(d),
            ElementData::Unknown { raw, .. } => raw.clone(),
        }
    }
}

/// An absolutely positioned unit in free-form mode. Coordinates are canvas
/// pixels; `z_index` is stacking order only, ties broken by position in the
/// element list (creation order).
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasElement {
    pub id: BlockId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    pub z_index: i32,
    /// A locked element ignores drag, resize and delete; it stays
    /// selectable and can be unlocked explicitly.
    pub locked: bool,
    pub visible: bool,
    pub data: ElementData,
}

/// Persisted shape of a canvas element.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireElement {
    id: BlockId,
    #[serde(rename = "type")]
    ty: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    #[serde(default)]
    rotation: f64,
    #[serde(default)]
    z_index: i32,
    #[serde(default)]
    locked: bool,
    #[serde(default = "default_true")]
    visible: bool,
    #[serde(default)]
    data: Value,
}

fn default_true() -> bool {
    true
}

impl Serialize for CanvasElement {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireElement {
            id: self.id,
            ty: self.data.type_name().to_string(),
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            rotation: self.rotation,
            z_index: self.z_index,
            locked: self.locked,
            visible: self.visible,
            data: self.data.to_wire(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CanvasElement {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireElement::deserialize(deserializer)?;
        Ok(CanvasElement {
            id: wire.id,
            x: wire.x,
            y: wire.y,
            width: wire.width.max(ELEMENT_MIN_SIZE),
            height: wire.height.max(ELEMENT_MIN_SIZE),
            rotation: wire.rotation,
            z_index: wire.z_index.max(0),
            locked: wire.locked,
            visible: wire.visible,
            data: ElementData::from_wire(&wire.ty, wire.data),
        })
    }
}

/// Canvas dimensions and background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasSettings {
    pub width: f64,
    pub height: f64,
    pub bg_color: String,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            bg_color: "#ffffff".to_string(),
        }
    }
}

/// The persisted free-form document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasDocument {
    pub elements: Vec<CanvasElement>,
    pub canvas_settings: CanvasSettings,
}

impl CanvasDocument {
    /// Create an empty document with default canvas settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new element of the given type, centered in the canvas, with
    /// its per-type default size, on top of everything (`z = max + 1`).
    /// Returns the new element's id.
    pub fn add_element(&mut self, element_type: ElementType) -> BlockId {
        let (width, height) = element_type.default_size();
        let settings = &self.canvas_settings;
        let element = CanvasElement {
            id: id::generate(),
            x: ((settings.width - width) / 2.0).max(0.0),
            y: ((settings.height - height) / 2.0).max(0.0),
            width,
            height,
            rotation: 0.0,
            z_index: self.top_z_index() + 1,
            locked: false,
            visible: true,
            data: ElementData::default_for(element_type),
        };
        let id = element.id;
        self.elements.push(element);
        id
    }

    /// Highest z-index in the document (0 when empty).
    pub fn top_z_index(&self) -> i32 {
        self.elements.iter().map(|e| e.z_index).max().unwrap_or(0)
    }

    /// Get an element by id.
    pub fn get(&self, id: BlockId) -> Option<&CanvasElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Get a mutable element by id.
    pub fn get_mut(&mut self, id: BlockId) -> Option<&mut CanvasElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Remove an element. A locked element is not removed. Returns whether
    /// a removal happened.
    pub fn remove(&mut self, id: BlockId) -> bool {
        if self.get(id).is_some_and(|e| e.locked) {
            return false;
        }
        let before = self.elements.len();
        self.elements.retain(|e| e.id != id);
        self.elements.len() != before
    }

    /// Clone an element with a fresh id, offset by (20, 20) and placed on
    /// top. Returns the clone's id.
    pub fn duplicate(&mut self, id: BlockId) -> Option<BlockId> {
        let top = self.top_z_index();
        let settings = self.canvas_settings.clone();
        let source = self.get(id)?;
        let mut clone = source.clone();
        clone.id = crate::id::generate();
        clone.x = clamp_position(clone.x + DUPLICATE_OFFSET, clone.width, settings.width);
        clone.y = clamp_position(clone.y + DUPLICATE_OFFSET, clone.height, settings.height);
        clone.z_index = top + 1;
        clone.locked = false;
        let clone_id = clone.id;
        self.elements.push(clone);
        Some(clone_id)
    }

    /// Move an element by a canvas-space delta, clamped into bounds.
    /// Locked elements ignore the move.
    pub fn nudge(&mut self, id: BlockId, dx: f64, dy: f64) {
        let settings = self.canvas_settings.clone();
        let Some(element) = self.get_mut(id) else {
            return;
        };
        if element.locked {
            return;
        }
        element.x = clamp_position(element.x + dx, element.width, settings.width);
        element.y = clamp_position(element.y + dy, element.height, settings.height);
    }

    /// Raise an element one stacking step.
    pub fn bring_forward(&mut self, id: BlockId) {
        if let Some(element) = self.get_mut(id) {
            element.z_index += 1;
        }
    }

    /// Lower an element one stacking step, clamped at 0.
    pub fn send_backward(&mut self, id: BlockId) {
        if let Some(element) = self.get_mut(id) {
            element.z_index = (element.z_index - 1).max(0);
        }
    }

    /// Elements in paint order: ascending z-index, ties by creation order.
    pub fn paint_order(&self) -> Vec<&CanvasElement> {
        let mut ordered: Vec<&CanvasElement> = self.elements.iter().collect();
        ordered.sort_by_key(|e| e.z_index);
        ordered
    }

    /// Serialize to the persisted JSON shape.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a persisted document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Clamp an element origin so the element stays fully inside the canvas.
pub(crate) fn clamp_position(value: f64, extent: f64, canvas_extent: f64) -> f64 {
    value.clamp(0.0, (canvas_extent - extent).max(0.0))
}

/// Keyboard nudge step in canvas pixels.
pub const NUDGE_STEP: f64 = 1.0;
/// Keyboard nudge step with the modifier key held.
pub const NUDGE_STEP_LARGE: f64 = 10.0;

/// Runtime editor state around a canvas document.
#[derive(Debug, Clone)]
pub struct CanvasEditor {
    pub document: CanvasDocument,
    pub selected_id: Option<BlockId>,
    scale: f64,
}

impl Default for CanvasEditor {
    fn default() -> Self {
        Self {
            document: CanvasDocument::default(),
            selected_id: None,
            scale: 1.0,
        }
    }
}

/// Arrow-key direction for keyboard nudging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl NudgeDirection {
    fn delta(self, step: f64) -> (f64, f64) {
        match self {
            NudgeDirection::Left => (-step, 0.0),
            NudgeDirection::Right => (step, 0.0),
            NudgeDirection::Up => (0.0, -step),
            NudgeDirection::Down => (0.0, step),
        }
    }
}

impl CanvasEditor {
    /// Create an editor over an existing document.
    pub fn with_document(document: CanvasDocument) -> Self {
        Self {
            document,
            selected_id: None,
            scale: 1.0,
        }
    }

    /// Current zoom factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Set the zoom factor, clamped to the supported range.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Select an element (locked elements remain selectable).
    pub fn select(&mut self, id: BlockId) {
        if self.document.get(id).is_some() {
            self.selected_id = Some(id);
        }
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Nudge the selected, unlocked element by one step.
    pub fn nudge_selected(&mut self, direction: NudgeDirection, large: bool) {
        let Some(id) = self.selected_id else { return };
        let step = if large { NUDGE_STEP_LARGE } else { NUDGE_STEP };
        let (dx, dy) = direction.delta(step);
        self.document.nudge(id, dx, dy);
    }

    /// Delete the selected element. Ignored for locked elements and when
    /// focus is inside a text input (the embedding shell reports that).
    pub fn delete_selected(&mut self, focus_in_text_input: bool) {
        if focus_in_text_input {
            return;
        }
        if let Some(id) = self.selected_id
            && self.document.remove(id)
        {
            self.selected_id = None;
        }
    }

    /// Duplicate the selected element and select the clone.
    pub fn duplicate_selected(&mut self) {
        if let Some(id) = self.selected_id
            && let Some(clone_id) = self.document.duplicate(id)
        {
            self.selected_id = Some(clone_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_element_centered_and_topmost() {
        let mut doc = CanvasDocument::new();
        let first = doc.add_element(ElementType::Button);
        let second = doc.add_element(ElementType::Image);

        let button = doc.get(first).unwrap();
        assert_eq!(button.x, (1200.0 - 150.0) / 2.0);
        assert_eq!(button.y, (800.0 - 50.0) / 2.0);
        assert_eq!(button.z_index, 1);
        assert_eq!(doc.get(second).unwrap().z_index, 2);
    }

    #[test]
    fn test_duplicate_offsets_and_tops() {
        let mut doc = CanvasDocument::new();
        let id = doc.add_element(ElementType::Shape);
        let clone_id = doc.duplicate(id).unwrap();

        let source = doc.get(id).unwrap().clone();
        let clone = doc.get(clone_id).unwrap();
        assert_ne!(clone.id, source.id);
        assert_eq!(clone.x, source.x + 20.0);
        assert_eq!(clone.y, source.y + 20.0);
        assert_eq!(clone.z_index, source.z_index + 1);
    }

    #[test]
    fn test_locked_ignores_delete_and_nudge() {
        let mut doc = CanvasDocument::new();
        let id = doc.add_element(ElementType::Text);
        doc.get_mut(id).unwrap().locked = true;
        let x = doc.get(id).unwrap().x;

        doc.nudge(id, 10.0, 0.0);
        assert_eq!(doc.get(id).unwrap().x, x);

        assert!(!doc.remove(id));
        assert!(doc.get(id).is_some());

        doc.get_mut(id).unwrap().locked = false;
        assert!(doc.remove(id));
    }

    #[test]
    fn test_nudge_clamps_to_canvas() {
        let mut doc = CanvasDocument::new();
        let id = doc.add_element(ElementType::Icon);
        doc.nudge(id, -10_000.0, -10_000.0);
        let element = doc.get(id).unwrap();
        assert_eq!((element.x, element.y), (0.0, 0.0));

        doc.nudge(id, 10_000.0, 10_000.0);
        let element = doc.get(id).unwrap();
        assert_eq!(element.x + element.width, doc.canvas_settings.width);
        assert_eq!(element.y + element.height, doc.canvas_settings.height);
    }

    #[test]
    fn test_z_order_ops_clamp_at_zero() {
        let mut doc = CanvasDocument::new();
        let id = doc.add_element(ElementType::Divider);
        doc.send_backward(id);
        doc.send_backward(id);
        assert_eq!(doc.get(id).unwrap().z_index, 0);
        doc.bring_forward(id);
        assert_eq!(doc.get(id).unwrap().z_index, 1);
    }

    #[test]
    fn test_paint_order_breaks_ties_by_creation() {
        let mut doc = CanvasDocument::new();
        let a = doc.add_element(ElementType::Shape);
        let b = doc.add_element(ElementType::Shape);
        doc.get_mut(a).unwrap().z_index = 5;
        doc.get_mut(b).unwrap().z_index = 5;
        let order: Vec<_> = doc.paint_order().iter().map(|e| e.id).collect();
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn test_editor_keyboard_commands() {
        let mut editor = CanvasEditor::default();
        let id = editor.document.add_element(ElementType::Button);
        editor.select(id);
        let x = editor.document.get(id).unwrap().x;

        editor.nudge_selected(NudgeDirection::Right, false);
        assert_eq!(editor.document.get(id).unwrap().x, x + 1.0);
        editor.nudge_selected(NudgeDirection::Right, true);
        assert_eq!(editor.document.get(id).unwrap().x, x + 11.0);

        // Delete is suppressed while typing.
        editor.delete_selected(true);
        assert!(editor.document.get(id).is_some());
        editor.delete_selected(false);
        assert!(editor.document.get(id).is_none());
        assert!(editor.selected_id.is_none());
    }

    #[test]
    fn test_editor_scale_clamped() {
        let mut editor = CanvasEditor::default();
        editor.set_scale(0.05);
        assert_eq!(editor.scale(), MIN_SCALE);
        editor.set_scale(7.0);
        assert_eq!(editor.scale(), MAX_SCALE);
    }

    #[test]
    fn test_document_round_trip() {
        let mut doc = CanvasDocument::new();
        doc.add_element(ElementType::Heading);
        doc.add_element(ElementType::Video);
        let json = doc.to_json().unwrap();
        assert_eq!(CanvasDocument::from_json(&json).unwrap(), doc);
    }

    #[test]
    fn test_unknown_element_type_round_trips() {
        let json = r##"{
            "elements": [{
                "id": "6f9619ff-8b86-d011-b42d-00cf4fc964ff",
                "type": "sticker",
                "x": 10.0, "y": 10.0, "width": 50.0, "height": 50.0,
                "data": { "pack": "summer" }
            }],
            "canvasSettings": { "width": 1200.0, "height": 800.0, "bgColor": "#fff" }
        }"##;
        let doc = CanvasDocument::from_json(json).unwrap();
        assert_eq!(doc.elements[0].data.type_name(), "sticker");
        let round = CanvasDocument::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(round, doc);
    }
}
