//! Save/restore of the whole playground.
//!
//! The persisted layout is
//! `{ "elements": [ { "type", "x", "y", "width", "height", "props" } ] }`
//! with text styling stored as CSS strings.

use std::cell::RefCell;

use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{EditorError, EditorResult};
use crate::scene::{
    Document, ElementKind, ElementProps, FontFamily, ImageProps, PlacedElement, ShapeProps,
    TextProps, DEFAULT_FONT_SIZE_PX,
};
use crate::types::{Bounds, Dimensions, Point};
use crate::utils::{is_bold_weight, parse_css_px};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredState {
    pub elements: Vec<StoredElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredElement {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(serialize_with = "whole_number")]
    pub x: f64,
    #[serde(serialize_with = "whole_number")]
    pub y: f64,
    #[serde(serialize_with = "whole_number")]
    pub width: f64,
    #[serde(serialize_with = "whole_number")]
    pub height: f64,
    pub props: StoredProps,
}

/// Integral pixel values are written as JSON integers, anything else as a float.
fn whole_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() < EXACT_INT_LIMIT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Per-kind payload. Each variant has a distinct required key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredProps {
    Text(TextRecord),
    Shape(ShapeRecord),
    Image(ImageRecord),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRecord {
    pub text: String,
    #[serde(default)]
    pub font_size: String,
    #[serde(default)]
    pub font_family: String,
    #[serde(default)]
    pub font_weight: String,
    #[serde(default)]
    pub font_style: String,
    #[serde(default)]
    pub text_decoration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub path: String,
    pub fill: String,
}

impl StoredProps {
    fn kind(&self) -> ElementKind {
        match self {
            StoredProps::Text(_) => ElementKind::Text,
            StoredProps::Image(_) => ElementKind::Image,
            StoredProps::Shape(_) => ElementKind::Shape,
        }
    }

    fn from_props(props: &ElementProps) -> Self {
        match props {
            ElementProps::Text(text) => StoredProps::Text(TextRecord {
                text: text.content.clone(),
                font_size: text.font_size_css(),
                font_family: text.font_family.name().to_string(),
                font_weight: text.font_weight_css().to_string(),
                font_style: text.font_style_css().to_string(),
                text_decoration: text.text_decoration_css().to_string(),
            }),
            ElementProps::Image(image) => StoredProps::Image(ImageRecord {
                src: image.source_url.clone(),
            }),
            ElementProps::Shape(shape) => StoredProps::Shape(ShapeRecord {
                path: shape.path_data.clone(),
                fill: shape.fill_color.clone(),
            }),
        }
    }

    fn to_props(&self) -> ElementProps {
        match self {
            StoredProps::Text(record) => {
                let mut text = TextProps::new(record.text.clone());
                text.font_size_px = parse_css_px(&record.font_size)
                    .filter(|v| *v > 0.0)
                    .unwrap_or(DEFAULT_FONT_SIZE_PX);
                text.font_family = FontFamily::from_css(&record.font_family).unwrap_or_default();
                text.bold = is_bold_weight(&record.font_weight);
                text.italic = matches!(record.font_style.trim(), "italic" | "oblique");
                text.underline = record.text_decoration.contains("underline");
                ElementProps::Text(text)
            }
            StoredProps::Image(record) => ElementProps::Image(ImageProps {
                source_url: record.src.clone(),
            }),
            StoredProps::Shape(record) => ElementProps::Shape(ShapeProps {
                path_data: record.path.clone(),
                fill_color: record.fill.clone(),
            }),
        }
    }
}

impl StoredElement {
    fn from_element(element: &PlacedElement) -> Self {
        Self {
            kind: element.kind(),
            x: element.position.x,
            y: element.position.y,
            width: element.size.width,
            height: element.size.height,
            props: StoredProps::from_props(element.props()),
        }
    }

    fn validate(&self, index: usize) -> EditorResult<()> {
        let invalid = |reason: String| EditorError::InvalidRecord { index, reason };

        if self.props.kind() != self.kind {
            return Err(invalid(format!(
                "type is {} but props describe {}",
                self.kind,
                self.props.kind()
            )));
        }
        if ![self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(invalid("non-finite geometry".to_string()));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(invalid(format!(
                "size {}x{} is not positive",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl StoredState {
    pub fn to_json(&self) -> EditorResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> EditorResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Snapshot every element of `doc` in stacking order.
pub fn serialize(doc: &Document) -> StoredState {
    StoredState {
        elements: doc.elements().iter().map(StoredElement::from_element).collect(),
    }
}

/// Replace the contents of `doc` with `state`.
///
/// All records are validated before anything is cleared, so a rejected
/// state leaves the current document intact. Positions are clamped into
/// `bounds`, since a layout saved on a larger playground may not fit.
pub fn deserialize(doc: &mut Document, state: &StoredState, bounds: Bounds) -> EditorResult<()> {
    for (index, record) in state.elements.iter().enumerate() {
        record.validate(index)?;
    }

    doc.clear();
    for record in &state.elements {
        let size = Dimensions::new(record.width, record.height);
        let position = bounds.clamp(Point::new(record.x, record.y), size);
        if position != Point::new(record.x, record.y) {
            log::debug!(
                "record at ({}, {}) moved to {:?} to fit the playground",
                record.x,
                record.y,
                position
            );
        }
        let id = doc.create(record.kind, position).id();
        doc.set_size(id, size)?;
        doc.replace_props(id, record.props.to_props())?;
    }
    doc.reset_counter(state.elements.len() as u64);
    log::debug!("restored {} elements", state.elements.len());
    Ok(())
}

/// Where the JSON text of a saved playground lives between sessions.
/// Decoding is left to the caller.
pub trait StateStore {
    /// Whether a blob exists, without reading it.
    fn has_state(&self) -> bool;

    fn read_raw(&self) -> EditorResult<Option<String>>;

    fn write_raw(&self, raw: &str) -> EditorResult<()>;
}

/// `window.localStorage` under a fixed key.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalStore {
    key: String,
}

impl LocalStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl StateStore for LocalStore {
    fn has_state(&self) -> bool {
        matches!(self.read_raw(), Ok(Some(_)))
    }

    // Raw access keeps the stored text untouched; `LocalStorage::get` would
    // decode it as JSON first.
    fn read_raw(&self) -> EditorResult<Option<String>> {
        LocalStorage::raw()
            .get_item(&self.key)
            .map_err(|e| EditorError::Storage(format!("{:?}", e)))
    }

    fn write_raw(&self, raw: &str) -> EditorResult<()> {
        LocalStorage::raw()
            .set_item(&self.key, raw)
            .map_err(|e| EditorError::Storage(format!("{:?}", e)))
    }
}

/// In-memory store holding the JSON text, for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    raw: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl StateStore for MemoryStore {
    fn has_state(&self) -> bool {
        self.raw.borrow().is_some()
    }

    fn read_raw(&self) -> EditorResult<Option<String>> {
        Ok(self.raw())
    }

    fn write_raw(&self, raw: &str) -> EditorResult<()> {
        *self.raw.borrow_mut() = Some(raw.to_string());
        Ok(())
    }
}
