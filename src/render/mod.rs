//! Layout and PDF rendering modules

pub mod document;
pub mod helpers;
pub mod layout;

// Re-export commonly used items for convenience
pub use document::{generate_pdf, DocumentRenderer};
pub use helpers::{get_helvetica_measurer, BuiltinFontMeasurer, LayerBuilder, TextMeasure};
pub use layout::{
    ensure_space, measure_wrap, render_document, DrawCommand, LaidOutDocument, LayoutEngine,
    PageCanvas, PageGeometry,
};
