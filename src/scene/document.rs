use super::element::{
    ElementId, ElementKind, ElementProps, ImageProps, PlacedElement, PropertyKey, PropertyValue,
    ShapeProps, TextProps,
};
use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};
use crate::types::{Dimensions, Point};
use crate::utils::random_token;

/// Ordered list of placed elements. Creation order is stacking order.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    elements: Vec<PlacedElement>,
    /// Number of elements created since the last reset; drives ids and text labels
    created: u64,
    /// Bumped on every mutation so views can tell when to re-render
    revision: u64,
    default_size: Dimensions,
    placeholder_image_base: String,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl Document {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            elements: Vec::new(),
            created: 0,
            revision: 0,
            default_size: config.default_size(),
            placeholder_image_base: config.placeholder_image_base.clone(),
        }
    }

    /// Append a new element with default size and kind-specific defaults.
    pub fn create(&mut self, kind: ElementKind, position: Point) -> &PlacedElement {
        self.created += 1;
        let id = ElementId(self.created);
        let props = match kind {
            ElementKind::Text => ElementProps::Text(TextProps::new(format!("Text {}", self.created))),
            ElementKind::Image => ElementProps::Image(ImageProps {
                source_url: format!("{}?random={}", self.placeholder_image_base, random_token()),
            }),
            ElementKind::Shape => ElementProps::Shape(ShapeProps::default()),
        };

        self.touch();
        let index = self.elements.len();
        self.elements
            .push(PlacedElement::new(id, position, self.default_size, props));
        &self.elements[index]
    }

    /// Remove an element by ID
    pub fn remove(&mut self, id: ElementId) -> EditorResult<PlacedElement> {
        let pos = self
            .elements
            .iter()
            .position(|e| e.id() == id)
            .ok_or(EditorError::ElementNotFound(id))?;
        self.touch();
        Ok(self.elements.remove(pos))
    }

    /// Drop every element and restart the creation counter.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.created = 0;
        self.touch();
    }

    pub fn get(&self, id: ElementId) -> Option<&PlacedElement> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    pub fn elements(&self) -> &[PlacedElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn created_count(&self) -> u64 {
        self.created
    }

    /// Set the creation counter, e.g. after restoring `n` elements.
    pub fn reset_counter(&mut self, created: u64) {
        self.created = created;
    }

    pub fn set_position(&mut self, id: ElementId, position: Point) -> EditorResult<()> {
        let element = self.get_mut(id)?;
        if element.position != position {
            element.position = position;
            self.touch();
        }
        Ok(())
    }

    pub fn set_size(&mut self, id: ElementId, size: Dimensions) -> EditorResult<()> {
        let element = self.get_mut(id)?;
        if element.size != size {
            element.size = size;
            self.touch();
        }
        Ok(())
    }

    /// Write one property, validating that `key` exists for the element's kind.
    ///
    /// Width and height are accepted here too and routed to [`Self::set_size`].
    pub fn set_property(
        &mut self,
        id: ElementId,
        key: PropertyKey,
        value: &PropertyValue,
    ) -> EditorResult<()> {
        let element = self.get_mut(id)?;
        match key {
            PropertyKey::Width | PropertyKey::Height => {
                let v = value.as_positive_number(key)?;
                let mut size = element.size;
                if key == PropertyKey::Width {
                    size.width = v;
                } else {
                    size.height = v;
                }
                self.set_size(id, size)
            }
            _ => {
                element.apply_property(key, value)?;
                self.touch();
                Ok(())
            }
        }
    }

    /// Overwrite an element's payload wholesale, used when restoring records.
    pub(crate) fn replace_props(&mut self, id: ElementId, props: ElementProps) -> EditorResult<()> {
        self.get_mut(id)?.replace_props(props)?;
        self.touch();
        Ok(())
    }

    fn get_mut(&mut self, id: ElementId) -> EditorResult<&mut PlacedElement> {
        self.elements
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(EditorError::ElementNotFound(id))
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}
