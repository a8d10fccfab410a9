use super::document::Document;
use super::element::{ElementId, PlacedElement};

/// Single-element selection. Holds at most one id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<ElementId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an element, replacing any previous selection.
    /// Ids not present in `doc` are declined and leave the selection as is.
    pub fn select(&mut self, doc: &Document, id: ElementId) -> bool {
        if !doc.contains(id) {
            return false;
        }
        self.current = Some(id);
        true
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn id(&self) -> Option<ElementId> {
        self.current
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.current == Some(id)
    }

    pub fn current<'a>(&self, doc: &'a Document) -> Option<&'a PlacedElement> {
        self.current.and_then(|id| doc.get(id))
    }

    /// Drop the selection if it points at `id`.
    pub fn forget(&mut self, id: ElementId) {
        if self.current == Some(id) {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ElementKind;
    use crate::types::Point;

    #[test]
    fn test_select_replaces_previous() {
        let mut doc = Document::default();
        let a = doc.create(ElementKind::Text, Point::zero()).id();
        let b = doc.create(ElementKind::Shape, Point::zero()).id();

        let mut selection = Selection::new();
        assert!(selection.select(&doc, a));
        assert!(selection.select(&doc, b));

        assert!(selection.is_selected(b));
        assert!(!selection.is_selected(a));
        assert_eq!(selection.current(&doc).map(|e| e.id()), Some(b));
    }

    #[test]
    fn test_select_unknown_is_declined() {
        let doc = Document::default();
        let mut selection = Selection::new();
        assert!(!selection.select(&doc, ElementId(9)));
        assert_eq!(selection.id(), None);
    }

    #[test]
    fn test_forget_only_matching() {
        let mut doc = Document::default();
        let a = doc.create(ElementKind::Text, Point::zero()).id();
        let mut selection = Selection::new();
        selection.select(&doc, a);

        selection.forget(ElementId(999));
        assert!(selection.is_selected(a));

        selection.forget(a);
        assert_eq!(selection.id(), None);
    }
}
