//! Pointer gesture state machines for the canvas editor.
//!
//! Geometry is kept independent of any rendering surface: a gesture is
//! begun with the element's starting frame and the pointer's starting
//! screen position, converts subsequent screen deltas into canvas space by
//! dividing by the zoom factor, and yields the new frame. The embedding
//! shell registers its global pointer-move/up listeners when a gesture
//! begins and hands the session a [`ListenerGuard`]; the guard releases
//! them unconditionally when the gesture ends, including abnormal
//! termination. A leaked listener corrupts subsequent gestures, so the
//! release lives in `Drop`.

use crate::canvas::{CanvasDocument, CanvasElement, CanvasSettings, ELEMENT_MIN_SIZE, clamp_position};
use crate::id::BlockId;
use kurbo::Point;
use thiserror::Error;

/// Gesture errors.
#[derive(Debug, Error)]
pub enum GestureError {
    #[error("element is locked")]
    Locked,
    #[error("another gesture is already active")]
    AlreadyActive,
}

/// RAII guard for the global pointer listeners a gesture owns.
pub struct ListenerGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    /// Wrap a release callback; it runs exactly once, when the guard drops.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Guard with nothing to release (tests, headless use).
    pub fn noop() -> Self {
        Self { release: None }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

/// An element's position and size in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    /// Capture an element's current frame.
    pub fn of(element: &CanvasElement) -> Self {
        Self {
            x: element.x,
            y: element.y,
            width: element.width,
            height: element.height,
        }
    }
}

/// The eight resize handles: four corners and four edge midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlePos {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl HandlePos {
    fn moves_left_edge(self) -> bool {
        matches!(self, HandlePos::TopLeft | HandlePos::Left | HandlePos::BottomLeft)
    }

    fn moves_right_edge(self) -> bool {
        matches!(self, HandlePos::TopRight | HandlePos::Right | HandlePos::BottomRight)
    }

    fn moves_top_edge(self) -> bool {
        matches!(self, HandlePos::TopLeft | HandlePos::Top | HandlePos::TopRight)
    }

    fn moves_bottom_edge(self) -> bool {
        matches!(self, HandlePos::BottomLeft | HandlePos::Bottom | HandlePos::BottomRight)
    }
}

/// An active move gesture.
#[derive(Debug)]
pub struct DragGesture {
    element_id: BlockId,
    start_frame: Frame,
    start_pointer: Point,
    scale: f64,
    canvas: (f64, f64),
    _guard: ListenerGuard,
}

impl DragGesture {
    fn begin(
        element: &CanvasElement,
        pointer: Point,
        scale: f64,
        settings: &CanvasSettings,
        guard: ListenerGuard,
    ) -> Result<Self, GestureError> {
        if element.locked {
            return Err(GestureError::Locked);
        }
        Ok(Self {
            element_id: element.id,
            start_frame: Frame::of(element),
            start_pointer: pointer,
            scale,
            canvas: (settings.width, settings.height),
            _guard: guard,
        })
    }

    /// New frame for the current pointer position. Screen deltas are
    /// divided by the zoom factor and the origin is clamped into bounds.
    pub fn frame_at(&self, pointer: Point) -> Frame {
        let dx = (pointer.x - self.start_pointer.x) / self.scale;
        let dy = (pointer.y - self.start_pointer.y) / self.scale;
        let frame = self.start_frame;
        Frame {
            x: clamp_position(frame.x + dx, frame.width, self.canvas.0),
            y: clamp_position(frame.y + dy, frame.height, self.canvas.1),
            ..frame
        }
    }
}

/// An active resize gesture on one of the eight handles.
#[derive(Debug)]
pub struct ResizeGesture {
    element_id: BlockId,
    handle: HandlePos,
    start_frame: Frame,
    start_pointer: Point,
    scale: f64,
    _guard: ListenerGuard,
}

impl ResizeGesture {
    fn begin(
        element: &CanvasElement,
        handle: HandlePos,
        pointer: Point,
        scale: f64,
        guard: ListenerGuard,
    ) -> Result<Self, GestureError> {
        if element.locked {
            return Err(GestureError::Locked);
        }
        Ok(Self {
            element_id: element.id,
            handle,
            start_frame: Frame::of(element),
            start_pointer: pointer,
            scale,
            _guard: guard,
        })
    }

    /// New frame for the current pointer position.
    ///
    /// Each handle decides which of `{x, y, width, height}` change: a right
    /// edge grows width with positive dx, a left edge moves x and shrinks
    /// width by dx, top/bottom are the vertical analogues and corners
    /// combine two edges. Width and height never go below
    /// [`ELEMENT_MIN_SIZE`], even when the pointer crosses the element's
    /// origin: the opposite edge stays fixed and the moving edge stops at
    /// the floor.
    pub fn frame_at(&self, pointer: Point) -> Frame {
        let dx = (pointer.x - self.start_pointer.x) / self.scale;
        let dy = (pointer.y - self.start_pointer.y) / self.scale;
        let start = self.start_frame;
        let mut frame = start;

        if self.handle.moves_right_edge() {
            frame.width = (start.width + dx).max(ELEMENT_MIN_SIZE);
        } else if self.handle.moves_left_edge() {
            frame.width = (start.width - dx).max(ELEMENT_MIN_SIZE);
            frame.x = start.x + (start.width - frame.width);
        }

        if self.handle.moves_bottom_edge() {
            frame.height = (start.height + dy).max(ELEMENT_MIN_SIZE);
        } else if self.handle.moves_top_edge() {
            frame.height = (start.height - dy).max(ELEMENT_MIN_SIZE);
            frame.y = start.y + (start.height - frame.height);
        }

        frame
    }
}

/// Gesture state of one canvas editor instance: `Idle -> Dragging -> Idle`
/// and `Idle -> Resizing -> Idle`. At most one gesture is active at a time;
/// ending a gesture drops it and thereby releases its listener guard.
#[derive(Debug, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragGesture),
    Resizing(ResizeGesture),
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    /// Begin a move gesture from a pointer-down on an element.
    pub fn begin_drag(
        &mut self,
        element: &CanvasElement,
        pointer: Point,
        scale: f64,
        settings: &CanvasSettings,
        guard: ListenerGuard,
    ) -> Result<(), GestureError> {
        if !self.is_idle() {
            return Err(GestureError::AlreadyActive);
        }
        *self = GestureState::Dragging(DragGesture::begin(
            element, pointer, scale, settings, guard,
        )?);
        Ok(())
    }

    /// Begin a resize gesture from a pointer-down on a handle.
    pub fn begin_resize(
        &mut self,
        element: &CanvasElement,
        handle: HandlePos,
        pointer: Point,
        scale: f64,
        guard: ListenerGuard,
    ) -> Result<(), GestureError> {
        if !self.is_idle() {
            return Err(GestureError::AlreadyActive);
        }
        *self = GestureState::Resizing(ResizeGesture::begin(
            element, handle, pointer, scale, guard,
        )?);
        Ok(())
    }

    /// Process a pointer move, applying the resulting frame to the
    /// document. Idle state ignores moves.
    pub fn pointer_move(&self, document: &mut CanvasDocument, pointer: Point) {
        let (id, frame) = match self {
            GestureState::Idle => return,
            GestureState::Dragging(drag) => (drag.element_id, drag.frame_at(pointer)),
            GestureState::Resizing(resize) => (resize.element_id, resize.frame_at(pointer)),
        };
        apply_frame(document, id, frame);
    }

    /// End the gesture (pointer-up or abnormal termination). Dropping the
    /// active gesture releases its listener guard.
    pub fn end(&mut self) {
        *self = GestureState::Idle;
    }
}

/// Write a frame back onto an element.
pub fn apply_frame(document: &mut CanvasDocument, id: BlockId, frame: Frame) {
    if let Some(element) = document.get_mut(id) {
        element.x = frame.x;
        element.y = frame.y;
        element.width = frame.width;
        element.height = frame.height;
    }
}

/// Convenience facade matching the pointer-session shape
/// `on_start -> on_move -> on_end`, for shells that prefer a trait object
/// over matching on [`GestureState`].
pub trait PointerSession {
    /// Feed a pointer move in screen coordinates.
    fn on_move(&mut self, pointer: Point);
    /// Finish the session, releasing its resources.
    fn on_end(&mut self);
}

/// A gesture bound to a document, usable through [`PointerSession`].
#[derive(Debug)]
pub struct BoundSession<'a> {
    pub document: &'a mut CanvasDocument,
    pub state: GestureState,
}

impl PointerSession for BoundSession<'_> {
    fn on_move(&mut self, pointer: Point) {
        self.state.pointer_move(self.document, pointer);
    }

    fn on_end(&mut self) {
        self.state.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::ElementType;
    use std::cell::Cell;
    use std::rc::Rc;

    fn doc_with_button_at(x: f64, y: f64, width: f64, height: f64) -> (CanvasDocument, BlockId) {
        let mut doc = CanvasDocument::new();
        let id = doc.add_element(ElementType::Button);
        {
            let element = doc.get_mut(id).unwrap();
            element.x = x;
            element.y = y;
            element.width = width;
            element.height = height;
        }
        (doc, id)
    }

    #[test]
    fn test_drag_applies_scaled_delta() {
        let (mut doc, id) = doc_with_button_at(100.0, 100.0, 150.0, 50.0);
        let settings = doc.canvas_settings.clone();
        let mut state = GestureState::default();
        state
            .begin_drag(
                doc.get(id).unwrap(),
                Point::new(500.0, 500.0),
                0.5,
                &settings,
                ListenerGuard::noop(),
            )
            .unwrap();

        // 30 screen pixels at 50% zoom is 60 canvas pixels.
        state.pointer_move(&mut doc, Point::new(530.0, 500.0));
        assert_eq!(doc.get(id).unwrap().x, 160.0);
        assert_eq!(doc.get(id).unwrap().y, 100.0);
    }

    #[test]
    fn test_drag_clamps_into_canvas() {
        let (mut doc, id) = doc_with_button_at(100.0, 100.0, 150.0, 50.0);
        let settings = doc.canvas_settings.clone();
        let mut state = GestureState::default();
        state
            .begin_drag(
                doc.get(id).unwrap(),
                Point::new(0.0, 0.0),
                1.0,
                &settings,
                ListenerGuard::noop(),
            )
            .unwrap();

        state.pointer_move(&mut doc, Point::new(99_999.0, -99_999.0));
        let element = doc.get(id).unwrap();
        assert!(element.x >= 0.0 && element.y >= 0.0);
        assert!(element.x + element.width <= settings.width);
        assert!(element.y + element.height <= settings.height);
    }

    #[test]
    fn test_bottom_right_resize_scenario() {
        let (mut doc, id) = doc_with_button_at(100.0, 100.0, 150.0, 50.0);
        let mut state = GestureState::default();
        state
            .begin_resize(
                doc.get(id).unwrap(),
                HandlePos::BottomRight,
                Point::new(250.0, 150.0),
                1.0,
                ListenerGuard::noop(),
            )
            .unwrap();

        state.pointer_move(&mut doc, Point::new(290.0, 170.0));
        let element = doc.get(id).unwrap();
        assert_eq!(
            (element.x, element.y, element.width, element.height),
            (100.0, 100.0, 190.0, 70.0)
        );
    }

    #[test]
    fn test_left_handle_moves_x_and_shrinks_width() {
        let (mut doc, id) = doc_with_button_at(100.0, 100.0, 150.0, 50.0);
        let mut state = GestureState::default();
        state
            .begin_resize(
                doc.get(id).unwrap(),
                HandlePos::Left,
                Point::new(100.0, 125.0),
                1.0,
                ListenerGuard::noop(),
            )
            .unwrap();

        state.pointer_move(&mut doc, Point::new(130.0, 125.0));
        let element = doc.get(id).unwrap();
        assert_eq!((element.x, element.width), (130.0, 120.0));
        // Height untouched by a horizontal edge handle.
        assert_eq!(element.height, 50.0);
    }

    #[test]
    fn test_min_size_floor_survives_crossing_origin() {
        let (mut doc, id) = doc_with_button_at(100.0, 100.0, 150.0, 50.0);
        let mut state = GestureState::default();
        state
            .begin_resize(
                doc.get(id).unwrap(),
                HandlePos::TopLeft,
                Point::new(100.0, 100.0),
                1.0,
                ListenerGuard::noop(),
            )
            .unwrap();

        // Pointer flies far past the bottom-right corner.
        state.pointer_move(&mut doc, Point::new(5_000.0, 5_000.0));
        let element = doc.get(id).unwrap();
        assert_eq!(element.width, ELEMENT_MIN_SIZE);
        assert_eq!(element.height, ELEMENT_MIN_SIZE);
        // Opposite edges stayed fixed.
        assert_eq!(element.x + element.width, 250.0);
        assert_eq!(element.y + element.height, 150.0);
    }

    #[test]
    fn test_locked_element_rejects_gestures() {
        let (mut doc, id) = doc_with_button_at(0.0, 0.0, 100.0, 100.0);
        doc.get_mut(id).unwrap().locked = true;
        let settings = doc.canvas_settings.clone();
        let mut state = GestureState::default();
        assert!(matches!(
            state.begin_drag(
                doc.get(id).unwrap(),
                Point::ZERO,
                1.0,
                &settings,
                ListenerGuard::noop()
            ),
            Err(GestureError::Locked)
        ));
        assert!(state.is_idle());
    }

    #[test]
    fn test_only_one_gesture_at_a_time() {
        let (doc, id) = doc_with_button_at(0.0, 0.0, 100.0, 100.0);
        let settings = doc.canvas_settings.clone();
        let mut state = GestureState::default();
        state
            .begin_drag(
                doc.get(id).unwrap(),
                Point::ZERO,
                1.0,
                &settings,
                ListenerGuard::noop(),
            )
            .unwrap();
        assert!(matches!(
            state.begin_resize(
                doc.get(id).unwrap(),
                HandlePos::Right,
                Point::ZERO,
                1.0,
                ListenerGuard::noop()
            ),
            Err(GestureError::AlreadyActive)
        ));
    }

    #[test]
    fn test_guard_released_exactly_on_end() {
        let released = Rc::new(Cell::new(false));
        let flag = Rc::clone(&released);
        let guard = ListenerGuard::new(move || flag.set(true));

        let (doc, id) = doc_with_button_at(0.0, 0.0, 100.0, 100.0);
        let settings = doc.canvas_settings.clone();
        let mut state = GestureState::default();
        state
            .begin_drag(doc.get(id).unwrap(), Point::ZERO, 1.0, &settings, guard)
            .unwrap();
        assert!(!released.get());

        state.end();
        assert!(released.get());
        assert!(state.is_idle());
    }
}
