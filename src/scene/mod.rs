mod content;
mod document;
mod element;
mod selection;

pub use content::*;
pub use document::*;
pub use element::*;
pub use selection::*;
