use crate::cli::PageSize;

/// Document-level settings embedded in a resume source file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeMetadata {
    /// Document title (PDF info dictionary and viewer window title)
    pub title: Option<String>,
    pub author: Option<String>,
    pub page_size: Option<PageSize>,
    /// Uniform page margin in mm
    pub margin: Option<f32>,
}
