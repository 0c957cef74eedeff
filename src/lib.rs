pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

pub use cli::PageSize;
pub use config::Settings;
pub use error::{ConfigError, LayoutError, ParseError, RenderError};
pub use model::{ContentBlock, HeadingLevel, LabeledValue, ListStyle, ResumeMetadata};
pub use parser::{parse_resume, ResumeDocument};
pub use render::{generate_pdf, render_document, DocumentRenderer};

/// High-level API for rendering a parsed resume to PDF.
///
/// Page size, margin, title and author come from the document's own
/// metadata; everything else uses the default settings.
///
/// # Example
///
/// ```no_run
/// use resume_pdf::{parse_resume, render_resume};
///
/// let source = std::fs::read_to_string("resume.txt").unwrap();
/// let document = parse_resume(&source).unwrap();
/// let pdf_bytes = render_resume(&document).unwrap();
///
/// std::fs::write("resume.pdf", pdf_bytes).unwrap();
/// ```
pub fn render_resume(document: &ResumeDocument) -> Result<Vec<u8>, RenderError> {
    let settings = Settings::default().with_metadata(&document.metadata);
    generate_pdf(&document.blocks, &settings)
}
