//! Drag-reorder sessions for the structured editor.
//!
//! A session begins on pointer-down over a grip affordance, tracks the
//! candidate drop position by nearest-center collision against the sibling
//! bounding boxes captured at session start, and ends on drop by applying
//! [`reorder`](crate::grid::reorder) optimistically. Persistence runs at
//! gesture end only; a failed submit restores the prior order. The same
//! session drives rows, columns, blocks and sections.

use crate::grid::reorder;
use kurbo::{Point, Rect};
use thiserror::Error;

/// Errors starting a drag session.
#[derive(Debug, Error)]
pub enum DragError {
    #[error("grip index {index} out of range for {len} siblings")]
    GripOutOfRange { index: usize, len: usize },
}

/// Outcome of dropping a drag session, with the submit error surfaced on
/// rollback.
#[derive(Debug)]
pub enum DropOutcome<E> {
    /// Pointer never left the grip position's slot; nothing changed and
    /// nothing was submitted.
    Unmoved,
    /// The move was applied locally and persisted.
    Committed { from: usize, to: usize },
    /// Persistence failed; the prior order was restored.
    RolledBack { from: usize, to: usize, error: E },
}

/// An active drag-reorder gesture over a list of siblings.
#[derive(Debug, Clone)]
pub struct DragSession {
    /// Index of the sibling being dragged.
    from: usize,
    /// Sibling bounding boxes at session start, in the same coordinate
    /// space as the pointer positions.
    sibling_bounds: Vec<Rect>,
    /// Current pointer position.
    current: Point,
}

impl DragSession {
    /// Begin a session from a grip pointer-down.
    pub fn begin(
        grip_index: usize,
        start: Point,
        sibling_bounds: Vec<Rect>,
    ) -> Result<Self, DragError> {
        if grip_index >= sibling_bounds.len() {
            return Err(DragError::GripOutOfRange {
                index: grip_index,
                len: sibling_bounds.len(),
            });
        }
        Ok(Self {
            from: grip_index,
            sibling_bounds,
            current: start,
        })
    }

    /// Track a pointer move.
    pub fn update(&mut self, position: Point) {
        self.current = position;
    }

    /// Index of the sibling being dragged.
    pub fn from_index(&self) -> usize {
        self.from
    }

    /// Candidate drop index: the sibling whose center is nearest the
    /// current pointer position.
    pub fn candidate_index(&self) -> usize {
        self.sibling_bounds
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                let da = self.current.distance_squared(a.center());
                let db = self.current.distance_squared(b.center());
                da.total_cmp(&db)
            })
            .map(|(idx, _)| idx)
            .unwrap_or(self.from)
    }

    /// Finish the gesture: apply the move optimistically, submit the new
    /// order, and roll back on failure. The gesture itself ends regardless
    /// of the submit result.
    pub fn finish<T, E>(
        self,
        list: Vec<T>,
        submit: impl FnOnce(&[T]) -> Result<(), E>,
    ) -> (Vec<T>, DropOutcome<E>)
    where
        T: Clone,
        E: std::fmt::Display,
    {
        let to = self.candidate_index();
        if to == self.from {
            return (list, DropOutcome::Unmoved);
        }

        let prior = list.clone();
        let moved = reorder(list, self.from, to);
        match submit(&moved) {
            Ok(()) => (
                moved,
                DropOutcome::Committed {
                    from: self.from,
                    to,
                },
            ),
            Err(error) => {
                log::warn!("reorder submit failed, restoring prior order: {error}");
                (
                    prior,
                    DropOutcome::RolledBack {
                        from: self.from,
                        to,
                        error,
                    },
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(count: usize) -> Vec<Rect> {
        // Horizontal strip of 100px-wide slots.
        (0..count)
            .map(|i| Rect::new(i as f64 * 100.0, 0.0, (i + 1) as f64 * 100.0, 80.0))
            .collect()
    }

    #[test]
    fn test_begin_rejects_bad_grip() {
        assert!(DragSession::begin(3, Point::new(0.0, 0.0), slots(3)).is_err());
    }

    #[test]
    fn test_candidate_follows_nearest_center() {
        let mut session = DragSession::begin(0, Point::new(50.0, 40.0), slots(3)).unwrap();
        assert_eq!(session.candidate_index(), 0);

        session.update(Point::new(260.0, 40.0));
        assert_eq!(session.candidate_index(), 2);

        session.update(Point::new(140.0, 40.0));
        assert_eq!(session.candidate_index(), 1);
    }

    #[test]
    fn test_drop_commits_on_successful_submit() {
        let mut session = DragSession::begin(0, Point::new(50.0, 40.0), slots(3)).unwrap();
        session.update(Point::new(250.0, 40.0));

        let (list, outcome) =
            session.finish(vec!["a", "b", "c"], |_new| Ok::<(), std::io::Error>(()));
        assert_eq!(list, vec!["b", "c", "a"]);
        assert!(matches!(outcome, DropOutcome::Committed { from: 0, to: 2 }));
    }

    #[test]
    fn test_drop_rolls_back_on_submit_failure() {
        let mut session = DragSession::begin(0, Point::new(50.0, 40.0), slots(3)).unwrap();
        session.update(Point::new(250.0, 40.0));

        let (list, outcome) = session.finish(vec!["a", "b", "c"], |_new| {
            Err(std::io::Error::other("persistence down"))
        });
        // Prior order restored, error surfaced.
        assert_eq!(list, vec!["a", "b", "c"]);
        assert!(matches!(outcome, DropOutcome::RolledBack { from: 0, to: 2, .. }));
    }

    #[test]
    fn test_unmoved_drop_skips_submit() {
        let session = DragSession::begin(1, Point::new(150.0, 40.0), slots(3)).unwrap();
        let (list, outcome) =
            session.finish(vec!["a", "b", "c"], |_new| -> Result<(), std::io::Error> {
                panic!("submit must not run for an unmoved drop");
            });
        assert_eq!(list, vec!["a", "b", "c"]);
        assert!(matches!(outcome, DropOutcome::Unmoved));
    }
}
