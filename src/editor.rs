use crate::config::EditorConfig;
use crate::drag_logic::DragController;
use crate::error::{EditorError, EditorResult};
use crate::persistence::{self, StateStore, StoredState};
use crate::scene::{Document, ElementId, ElementKind, PlacedElement, PropertyKey, PropertyValue, Selection};
use crate::types::{Bounds, Point};

/// Owns the document, the selection and the drag state. Every UI event
/// maps onto exactly one method here.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    config: EditorConfig,
    document: Document,
    selection: Selection,
    drag: DragController,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorState {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            document: Document::new(&config),
            selection: Selection::new(),
            drag: DragController::new(),
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected(&self) -> Option<&PlacedElement> {
        self.selection.current(&self.document)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn bounds(&self) -> Bounds {
        self.config.bounds()
    }

    /// A tool icon tagged `tag` was dropped at `at` (playground-local).
    pub fn drop_tool(&mut self, tag: &str, at: Point) -> EditorResult<ElementId> {
        let kind: ElementKind = tag.parse()?;
        let position = self.bounds().clamp(at, self.config.default_size());
        let id = self.document.create(kind, position).id();
        log::debug!("created {} element {} at {:?}", kind, id, position);
        Ok(id)
    }

    /// Pointer pressed on an element: select it and start dragging.
    pub fn pointer_down(&mut self, id: ElementId, pointer: Point) -> EditorResult<()> {
        if !self.drag.begin(&self.document, id, pointer) {
            return Err(EditorError::ElementNotFound(id));
        }
        self.selection.select(&self.document, id);
        log::debug!("drag start {}", id);
        Ok(())
    }

    /// Returns true when an element moved.
    pub fn pointer_move(&mut self, pointer: Point) -> EditorResult<bool> {
        let before = self.document.revision();
        let bounds = self.bounds();
        self.drag.update(&mut self.document, pointer, bounds)?;
        Ok(self.document.revision() != before)
    }

    pub fn pointer_up(&mut self) {
        if let Some(session) = self.drag.end() {
            log::debug!("drag end {}", session.element);
        }
    }

    /// Clicking an element selects it; an active drag keeps going.
    pub fn click_element(&mut self, id: ElementId) -> EditorResult<()> {
        if self.selection.select(&self.document, id) {
            Ok(())
        } else {
            Err(EditorError::ElementNotFound(id))
        }
    }

    /// Click outside any element and outside the property panel.
    pub fn click_background(&mut self) {
        self.selection.clear();
    }

    /// Apply one panel edit to the selected element.
    pub fn edit_property(&mut self, key: PropertyKey, value: &PropertyValue) -> EditorResult<()> {
        let Some(id) = self.selection.id() else {
            return Ok(());
        };

        if key.is_geometry() {
            let min = self.config.min_element_size;
            let requested = value.as_positive_number(key)?;
            if requested < min {
                return Err(EditorError::MalformedValue {
                    key,
                    reason: format!("{} is below the minimum of {}", requested, min),
                });
            }
        }

        self.document.set_property(id, key, value)?;

        if key.is_geometry() {
            self.reclamp(id)?;
        }
        Ok(())
    }

    /// Delete the selected element, if any.
    pub fn delete_selected(&mut self) -> Option<PlacedElement> {
        let id = self.selection.id()?;
        self.remove_element(id).ok()
    }

    pub fn remove_element(&mut self, id: ElementId) -> EditorResult<PlacedElement> {
        let removed = self.document.remove(id)?;
        self.selection.forget(id);
        if self.drag.session().is_some_and(|s| s.element == id) {
            self.drag.end();
        }
        Ok(removed)
    }

    pub fn save(&self, store: &dyn StateStore) -> EditorResult<()> {
        let json = persistence::serialize(&self.document).to_json()?;
        store.write_raw(&json)?;
        log::debug!("saved {} elements", self.document.len());
        Ok(())
    }

    /// Replace the document with the stored one. With nothing stored the
    /// document is left untouched and `NoStoredState` is returned.
    pub fn load(&mut self, store: &dyn StateStore) -> EditorResult<()> {
        let raw = store.read_raw()?.ok_or(EditorError::NoStoredState)?;
        let state = StoredState::from_json(&raw)?;
        let bounds = self.bounds();
        persistence::deserialize(&mut self.document, &state, bounds)?;
        self.selection.clear();
        self.drag.end();
        log::debug!("loaded {} elements", self.document.len());
        Ok(())
    }

    fn reclamp(&mut self, id: ElementId) -> EditorResult<()> {
        let Some(element) = self.document.get(id) else {
            return Err(EditorError::ElementNotFound(id));
        };
        let clamped = self.bounds().clamp(element.position, element.size);
        self.document.set_position(id, clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::scene::ElementProps;
    use crate::types::Dimensions;

    fn editor() -> EditorState {
        EditorState::default()
    }

    #[test]
    fn test_drop_clamps_into_playground() {
        let mut ed = editor();
        let drops = [(-20.0, -20.0), (799.0, 599.0), (400.0, 300.0), (750.0, 10.0)];
        for (x, y) in drops {
            let id = ed.drop_tool("shape", Point::new(x, y)).unwrap();
            let el = ed.document().get(id).unwrap();
            assert!(el.position.x >= 0.0 && el.position.x <= 700.0);
            assert!(el.position.y >= 0.0 && el.position.y <= 500.0);
        }
    }

    #[test]
    fn test_drop_unknown_tool_is_rejected() {
        let mut ed = editor();
        assert!(matches!(
            ed.drop_tool("video", Point::zero()),
            Err(EditorError::UnknownKind(_))
        ));
        assert!(ed.document().is_empty());
    }

    #[test]
    fn test_select_a_then_b() {
        let mut ed = editor();
        let a = ed.drop_tool("text", Point::zero()).unwrap();
        let b = ed.drop_tool("image", Point::new(200.0, 0.0)).unwrap();

        ed.click_element(a).unwrap();
        ed.click_element(b).unwrap();
        assert!(ed.selection().is_selected(b));
        assert!(!ed.selection().is_selected(a));

        ed.click_background();
        assert_eq!(ed.selection().id(), None);
    }

    #[test]
    fn test_pointer_down_selects_and_drags() {
        let mut ed = editor();
        let id = ed.drop_tool("text", Point::new(10.0, 10.0)).unwrap();

        ed.pointer_down(id, Point::new(20.0, 30.0)).unwrap();
        assert!(ed.is_dragging());
        assert!(ed.selection().is_selected(id));

        assert!(ed.pointer_move(Point::new(120.0, 130.0)).unwrap());
        assert_eq!(ed.document().get(id).unwrap().position, Point::new(110.0, 110.0));

        ed.click_element(id).unwrap();
        assert!(ed.is_dragging(), "click must not cancel the drag");

        ed.pointer_up();
        assert!(!ed.is_dragging());
        assert!(!ed.pointer_move(Point::new(0.0, 0.0)).unwrap());
    }

    #[test]
    fn test_pointer_down_on_missing_element() {
        let mut ed = editor();
        let err = ed.pointer_down(ElementId(5), Point::zero()).unwrap_err();
        assert!(err.is_missing_target());
        assert!(!ed.is_dragging());
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut ed = editor();
        let id = ed.drop_tool("image", Point::zero()).unwrap();
        ed.click_element(id).unwrap();

        let removed = ed.delete_selected().unwrap();
        assert_eq!(removed.id(), id);
        assert!(ed.document().is_empty());
        assert_eq!(ed.selected(), None);
        assert!(ed.delete_selected().is_none());
    }

    #[test]
    fn test_edit_without_selection_is_noop() {
        let mut ed = editor();
        ed.drop_tool("text", Point::zero()).unwrap();
        let before = ed.document().clone();
        ed.edit_property(PropertyKey::Text, &PropertyValue::text("x"))
            .unwrap();
        assert_eq!(ed.document(), &before);
    }

    #[test]
    fn test_resize_reclamps_position() {
        let mut ed = editor();
        let id = ed.drop_tool("shape", Point::new(700.0, 500.0)).unwrap();
        ed.click_element(id).unwrap();

        ed.edit_property(PropertyKey::Width, &PropertyValue::text("200"))
            .unwrap();
        let el = ed.document().get(id).unwrap();
        assert_eq!(el.size, Dimensions::new(200.0, 100.0));
        assert_eq!(el.position, Point::new(600.0, 500.0));
    }

    #[test]
    fn test_resize_below_minimum_rejected() {
        let mut ed = editor();
        let id = ed.drop_tool("shape", Point::zero()).unwrap();
        ed.click_element(id).unwrap();
        assert!(ed
            .edit_property(PropertyKey::Height, &PropertyValue::text("0.5"))
            .is_err());
        assert_eq!(ed.document().get(id).unwrap().size, Dimensions::square(100.0));
    }

    #[test]
    fn test_shape_resize_keeps_path() {
        let mut ed = editor();
        let id = ed.drop_tool("shape", Point::zero()).unwrap();
        ed.click_element(id).unwrap();
        ed.edit_property(PropertyKey::Width, &PropertyValue::text("200"))
            .unwrap();

        let el = ed.document().get(id).unwrap();
        assert_eq!(el.size.width, 200.0);
        match el.props() {
            ElementProps::Shape(s) => assert_eq!(s.path_data, "M10 10 H90 V90 H10 Z"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_load_without_blob_keeps_document() {
        let mut ed = editor();
        ed.drop_tool("text", Point::zero()).unwrap();
        ed.drop_tool("shape", Point::zero()).unwrap();

        let err = ed.load(&MemoryStore::new()).unwrap_err();
        assert!(matches!(err, EditorError::NoStoredState));
        assert_eq!(ed.document().len(), 2);
    }

    #[test]
    fn test_load_corrupt_blob_keeps_document() {
        let mut ed = editor();
        ed.drop_tool("text", Point::zero()).unwrap();
        let store = MemoryStore::with_raw("{\"elements\": 7}");

        assert!(matches!(ed.load(&store), Err(EditorError::Decode(_))));
        assert_eq!(ed.document().len(), 1);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = MemoryStore::new();
        let mut ed = editor();
        let id = ed.drop_tool("text", Point::new(10.0, 10.0)).unwrap();
        ed.click_element(id).unwrap();
        ed.edit_property(PropertyKey::FontSize, &PropertyValue::text("24"))
            .unwrap();
        ed.save(&store).unwrap();

        let mut fresh = editor();
        fresh.load(&store).unwrap();
        assert_eq!(fresh.document().len(), 1);
        assert_eq!(fresh.selected(), None);
        assert_eq!(
            fresh.document().elements()[0].props(),
            ed.document().elements()[0].props()
        );
    }

    #[test]
    fn test_load_fits_layout_from_larger_playground() {
        let store = MemoryStore::new();
        let mut wide = EditorState::new(EditorConfig {
            playground_width: 1600.0,
            playground_height: 1200.0,
            ..EditorConfig::default()
        });
        wide.drop_tool("shape", Point::new(1400.0, 1000.0)).unwrap();
        wide.save(&store).unwrap();

        let mut ed = editor();
        ed.load(&store).unwrap();
        let el = &ed.document().elements()[0];
        assert_eq!(el.position, Point::new(700.0, 500.0));
        assert!(ed.bounds().contains(el.position, el.size));
    }

    #[test]
    fn test_removing_dragged_element_ends_drag() {
        let mut ed = editor();
        let id = ed.drop_tool("text", Point::zero()).unwrap();
        ed.pointer_down(id, Point::new(5.0, 5.0)).unwrap();
        ed.delete_selected().unwrap();
        assert!(!ed.is_dragging());
    }
}
