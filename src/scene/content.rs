use super::element::{ElementProps, PlacedElement};
use crate::types::Dimensions;

/// Coordinate system of the embedded shape graphic. Fixed at creation.
pub const SHAPE_VIEW_BOX: &str = "0 0 100 100";

/// Sizing for an element's inner content after reflow.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentLayout {
    /// Text block and image fill the frame
    Fill(Dimensions),
    /// Embedded SVG: width/height attributes track the frame, the view box and
    /// the path data do not, so the outline is not rescaled to the new box.
    Vector {
        width: f64,
        height: f64,
        view_box: &'static str,
        path_data: String,
        fill_color: String,
    },
}

/// Make the element's content fit its current frame.
pub fn reflow(element: &PlacedElement) -> ContentLayout {
    match element.props() {
        ElementProps::Text(_) | ElementProps::Image(_) => ContentLayout::Fill(element.size),
        ElementProps::Shape(shape) => ContentLayout::Vector {
            width: element.size.width,
            height: element.size.height,
            view_box: SHAPE_VIEW_BOX,
            path_data: shape.path_data.clone(),
            fill_color: shape.fill_color.clone(),
        },
    }
}

impl ContentLayout {
    pub fn size(&self) -> Dimensions {
        match self {
            ContentLayout::Fill(size) => *size,
            ContentLayout::Vector { width, height, .. } => Dimensions::new(*width, *height),
        }
    }
}
