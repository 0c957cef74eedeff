use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("Section \"{heading}\" opened at line {line} is never closed")]
    UnclosedSection { line: usize, heading: String },

    #[error("Unexpected @end at line {line}: no open section")]
    UnexpectedSectionEnd { line: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid wrap width: {0} (must be greater than zero)")]
    InvalidWidth(f32),

    #[error("Cannot lay out an empty document")]
    EmptyDocument,
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Invalid settings: {0}")]
    Config(#[from] ConfigError),

    #[error("PDF generation error: {0}")]
    PdfGeneration(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid margin {margin} mm for a {width} x {height} mm page")]
    InvalidMargin { margin: f32, width: f32, height: f32 },

    #[error("Invalid font size: {0}")]
    InvalidFontSize(f32),

    #[error("Line height {line_height} mm does not fit the {body_height} mm page body")]
    LineTooTall { line_height: f32, body_height: f32 },

    #[error("Content area is too narrow for two columns")]
    ContentTooNarrow,
}
