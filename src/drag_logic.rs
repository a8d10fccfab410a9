use crate::error::EditorResult;
use crate::scene::{Document, ElementId};
use crate::types::{Bounds, Point};

/// An in-progress pointer drag of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub element: ElementId,
    /// Pointer position relative to the element's top-left at drag start
    pub grab_offset: Point,
}

/// `Idle -> Dragging` on pointer-down over an element, back to `Idle` on
/// pointer-up anywhere. At most one session exists at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Start dragging `id` grabbed at `pointer` (playground-local).
    /// Returns false without starting when the element does not exist.
    pub fn begin(&mut self, doc: &Document, id: ElementId, pointer: Point) -> bool {
        let Some(element) = doc.get(id) else {
            return false;
        };
        self.session = Some(DragSession {
            element: id,
            grab_offset: pointer.offset_from(element.position),
        });
        true
    }

    /// Move the dragged element under the pointer, clamped into `bounds`.
    ///
    /// Returns the applied position, or `None` when idle.
    pub fn update(
        &mut self,
        doc: &mut Document,
        pointer: Point,
        bounds: Bounds,
    ) -> EditorResult<Option<Point>> {
        let Some(session) = self.session else {
            return Ok(None);
        };
        let Some(element) = doc.get(session.element) else {
            // dragged element vanished mid-drag
            self.session = None;
            return Ok(None);
        };

        let candidate = pointer.offset_from(session.grab_offset);
        let position = bounds.clamp(candidate, element.size);
        doc.set_position(session.element, position)?;
        Ok(Some(position))
    }

    /// Terminate any active session, regardless of where the pointer is.
    pub fn end(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ElementKind;
    use crate::types::Dimensions;

    fn setup() -> (Document, ElementId) {
        let mut doc = Document::default();
        let id = doc.create(ElementKind::Shape, Point::new(50.0, 50.0)).id();
        (doc, id)
    }

    #[test]
    fn test_drag_keeps_grab_offset() {
        let (mut doc, id) = setup();
        let mut drag = DragController::new();
        assert!(drag.begin(&doc, id, Point::new(60.0, 70.0)));

        let pos = drag
            .update(&mut doc, Point::new(110.0, 120.0), Bounds::new(800.0, 600.0))
            .unwrap();
        assert_eq!(pos, Some(Point::new(100.0, 100.0)));
        assert_eq!(doc.get(id).unwrap().position, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_every_move_stays_in_bounds() {
        let (mut doc, id) = setup();
        doc.set_size(id, Dimensions::new(120.0, 80.0)).unwrap();
        let bounds = Bounds::new(400.0, 300.0);
        let mut drag = DragController::new();
        drag.begin(&doc, id, Point::new(55.0, 55.0));

        let path = [
            (-500.0, -500.0),
            (10.0, 900.0),
            (399.0, 1.0),
            (1000.0, 1000.0),
            (200.0, 150.0),
            (-3.0, 290.0),
        ];
        for (x, y) in path {
            drag.update(&mut doc, Point::new(x, y), bounds).unwrap();
            let el = doc.get(id).unwrap();
            assert!(bounds.contains(el.position, el.size), "escaped at {:?}", el.position);
        }
    }

    #[test]
    fn test_no_drag_for_missing_target() {
        let (doc, _) = setup();
        let mut drag = DragController::new();
        assert!(!drag.begin(&doc, ElementId(77), Point::zero()));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_end_returns_to_idle() {
        let (mut doc, id) = setup();
        let mut drag = DragController::new();
        drag.begin(&doc, id, Point::new(50.0, 50.0));
        assert!(drag.end().is_some());
        assert!(!drag.is_dragging());

        let before = doc.get(id).unwrap().position;
        let moved = drag
            .update(&mut doc, Point::new(300.0, 300.0), Bounds::new(800.0, 600.0))
            .unwrap();
        assert_eq!(moved, None);
        assert_eq!(doc.get(id).unwrap().position, before);
    }

    #[test]
    fn test_session_dropped_when_element_removed() {
        let (mut doc, id) = setup();
        let mut drag = DragController::new();
        drag.begin(&doc, id, Point::new(50.0, 50.0));
        doc.remove(id).unwrap();

        let moved = drag
            .update(&mut doc, Point::new(10.0, 10.0), Bounds::new(800.0, 600.0))
            .unwrap();
        assert_eq!(moved, None);
        assert!(!drag.is_dragging());
    }
}
