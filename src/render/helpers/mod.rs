//! Helper utilities for PDF rendering

pub mod colors;
pub mod layer;
pub mod postprocess;
pub mod text_metrics;

pub use colors::fill_color;
pub use layer::LayerBuilder;
pub use postprocess::{postprocess_pdf, LinkArea, PostProcess};
pub use text_metrics::{
    builtin_font, get_helvetica_bold_measurer, get_helvetica_measurer, measurer_for,
    BuiltinFontMeasurer, TextMeasure,
};
