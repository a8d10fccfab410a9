use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EditorError;
use crate::types::{Dimensions, Point};

/// Default outline drawn by a freshly created shape
pub const DEFAULT_SHAPE_PATH: &str = "M10 10 H90 V90 H10 Z";
pub const DEFAULT_SHAPE_FILL: &str = "#000000";
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;

/// Identity of a placed element, unique for the lifetime of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Shape,
}

impl ElementKind {
    pub const ALL: [ElementKind; 3] = [ElementKind::Text, ElementKind::Image, ElementKind::Shape];

    /// Tag carried by tool icons and persisted records
    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Image => "image",
            ElementKind::Shape => "shape",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Text => "Text",
            ElementKind::Image => "Image",
            ElementKind::Shape => "Shape",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ElementKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| EditorError::UnknownKind(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    Arial,
    TimesNewRoman,
    CourierNew,
}

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [
        FontFamily::Arial,
        FontFamily::TimesNewRoman,
        FontFamily::CourierNew,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::CourierNew => "Courier New",
        }
    }

    /// Match a CSS `font-family` value, which may be quoted or carry fallbacks.
    pub fn from_css(value: &str) -> Option<Self> {
        let cleaned = value.replace(['"', '\''], "");
        FontFamily::ALL
            .into_iter()
            .find(|family| cleaned.contains(family.name()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextProps {
    pub content: String,
    pub font_size_px: f64,
    pub font_family: FontFamily,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextProps {
    pub fn new(content: String) -> Self {
        Self {
            content,
            font_size_px: DEFAULT_FONT_SIZE_PX,
            font_family: FontFamily::default(),
            bold: false,
            italic: false,
            underline: false,
        }
    }

    pub fn font_weight_css(&self) -> &'static str {
        if self.bold { "bold" } else { "normal" }
    }

    pub fn font_style_css(&self) -> &'static str {
        if self.italic { "italic" } else { "normal" }
    }

    pub fn text_decoration_css(&self) -> &'static str {
        if self.underline { "underline" } else { "none" }
    }

    pub fn font_size_css(&self) -> String {
        format!("{}px", self.font_size_px)
    }

    pub fn css(&self) -> String {
        format!(
            "font-size: {}; font-family: {}; font-weight: {}; font-style: {}; text-decoration: {};",
            self.font_size_css(),
            self.font_family.name(),
            self.font_weight_css(),
            self.font_style_css(),
            self.text_decoration_css(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageProps {
    pub source_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeProps {
    /// SVG path syntax, passed through unvalidated
    pub path_data: String,
    pub fill_color: String,
}

impl Default for ShapeProps {
    fn default() -> Self {
        Self {
            path_data: DEFAULT_SHAPE_PATH.to_string(),
            fill_color: DEFAULT_SHAPE_FILL.to_string(),
        }
    }
}

/// Kind-specific payload. The variant fixes the element's kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementProps {
    Text(TextProps),
    Image(ImageProps),
    Shape(ShapeProps),
}

impl ElementProps {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementProps::Text(_) => ElementKind::Text,
            ElementProps::Image(_) => ElementKind::Image,
            ElementProps::Shape(_) => ElementKind::Shape,
        }
    }
}

/// Property tags used by the panel inputs and by persisted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Width,
    Height,
    Text,
    FontSize,
    FontFamily,
    Bold,
    Italic,
    Underline,
    Src,
    Path,
    Fill,
}

impl PropertyKey {
    pub const ALL: [PropertyKey; 11] = [
        PropertyKey::Width,
        PropertyKey::Height,
        PropertyKey::Text,
        PropertyKey::FontSize,
        PropertyKey::FontFamily,
        PropertyKey::Bold,
        PropertyKey::Italic,
        PropertyKey::Underline,
        PropertyKey::Src,
        PropertyKey::Path,
        PropertyKey::Fill,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKey::Width => "width",
            PropertyKey::Height => "height",
            PropertyKey::Text => "text",
            PropertyKey::FontSize => "fontSize",
            PropertyKey::FontFamily => "fontFamily",
            PropertyKey::Bold => "bold",
            PropertyKey::Italic => "italic",
            PropertyKey::Underline => "underline",
            PropertyKey::Src => "src",
            PropertyKey::Path => "path",
            PropertyKey::Fill => "fill",
        }
    }

    pub fn applies_to(&self, kind: ElementKind) -> bool {
        match self {
            PropertyKey::Width | PropertyKey::Height => true,
            PropertyKey::Text
            | PropertyKey::FontSize
            | PropertyKey::FontFamily
            | PropertyKey::Bold
            | PropertyKey::Italic
            | PropertyKey::Underline => kind == ElementKind::Text,
            PropertyKey::Src => kind == ElementKind::Image,
            PropertyKey::Path | PropertyKey::Fill => kind == ElementKind::Shape,
        }
    }

    pub fn is_geometry(&self) -> bool {
        matches!(self, PropertyKey::Width | PropertyKey::Height)
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyKey {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| EditorError::UnknownProperty(s.to_string()))
    }
}

/// Raw value coming out of a form control.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Flag(bool),
}

impl PropertyValue {
    pub fn text(value: impl Into<String>) -> Self {
        PropertyValue::Text(value.into())
    }

    fn as_text(&self, key: PropertyKey) -> Result<&str, EditorError> {
        match self {
            PropertyValue::Text(s) => Ok(s),
            PropertyValue::Flag(_) => Err(EditorError::MalformedValue {
                key,
                reason: "expected text, got a checkbox state".to_string(),
            }),
        }
    }

    fn as_flag(&self, key: PropertyKey) -> Result<bool, EditorError> {
        match self {
            PropertyValue::Flag(b) => Ok(*b),
            PropertyValue::Text(s) => Err(EditorError::MalformedValue {
                key,
                reason: format!("expected a checkbox state, got {:?}", s),
            }),
        }
    }

    /// Parse a positive, finite pixel count. A trailing `px` is tolerated.
    pub fn as_positive_number(&self, key: PropertyKey) -> Result<f64, EditorError> {
        let raw = self.as_text(key)?;
        let trimmed = raw.trim();
        let trimmed = trimmed.strip_suffix("px").unwrap_or(trimmed);
        let value: f64 = trimmed.trim().parse().map_err(|_| EditorError::MalformedValue {
            key,
            reason: format!("{:?} is not a number", raw),
        })?;
        if !value.is_finite() || value <= 0.0 {
            return Err(EditorError::MalformedValue {
                key,
                reason: format!("{} must be positive", value),
            });
        }
        Ok(value)
    }
}

/// One user-created item on the playground.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedElement {
    id: ElementId,
    pub position: Point,
    pub size: Dimensions,
    props: ElementProps,
}

impl PlacedElement {
    pub(crate) fn new(id: ElementId, position: Point, size: Dimensions, props: ElementProps) -> Self {
        Self {
            id,
            position,
            size,
            props,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.props.kind()
    }

    pub fn props(&self) -> &ElementProps {
        &self.props
    }

    /// Replace the payload, keeping the kind fixed.
    pub(crate) fn replace_props(&mut self, props: ElementProps) -> Result<(), EditorError> {
        if props.kind() != self.kind() {
            return Err(EditorError::UnknownKind(props.kind().tag().to_string()));
        }
        self.props = props;
        Ok(())
    }

    /// Write a single non-geometry property. Width and height go through
    /// [`crate::scene::Document::set_size`] instead.
    pub(crate) fn apply_property(
        &mut self,
        key: PropertyKey,
        value: &PropertyValue,
    ) -> Result<(), EditorError> {
        let kind = self.kind();
        match (&mut self.props, key) {
            (ElementProps::Text(text), PropertyKey::Text) => {
                text.content = value.as_text(key)?.to_string();
            }
            (ElementProps::Text(text), PropertyKey::FontSize) => {
                text.font_size_px = value.as_positive_number(key)?;
            }
            (ElementProps::Text(text), PropertyKey::FontFamily) => {
                let raw = value.as_text(key)?;
                text.font_family =
                    FontFamily::from_css(raw).ok_or_else(|| EditorError::MalformedValue {
                        key,
                        reason: format!("unsupported font family {:?}", raw),
                    })?;
            }
            (ElementProps::Text(text), PropertyKey::Bold) => text.bold = value.as_flag(key)?,
            (ElementProps::Text(text), PropertyKey::Italic) => text.italic = value.as_flag(key)?,
            (ElementProps::Text(text), PropertyKey::Underline) => {
                text.underline = value.as_flag(key)?;
            }
            (ElementProps::Image(image), PropertyKey::Src) => {
                image.source_url = value.as_text(key)?.to_string();
            }
            (ElementProps::Shape(shape), PropertyKey::Path) => {
                shape.path_data = value.as_text(key)?.to_string();
            }
            (ElementProps::Shape(shape), PropertyKey::Fill) => {
                shape.fill_color = value.as_text(key)?.to_string();
            }
            _ => return Err(EditorError::PropertyNotApplicable { kind, key }),
        }
        Ok(())
    }
}
