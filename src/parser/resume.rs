use crate::error::ParseError;
use crate::model::{ContentBlock, ResumeMetadata};

use super::header::parse_headers;
use super::markup::parse_blocks;

/// Result of parsing a resume file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeDocument {
    pub metadata: ResumeMetadata,
    pub blocks: Vec<ContentBlock>,
}

/// Parse a complete resume file
pub fn parse_resume(content: &str) -> Result<ResumeDocument, ParseError> {
    // Extract header lines (starting with %)
    let header_lines: Vec<&str> = content
        .lines()
        .filter(|line| line.starts_with('%'))
        .collect();

    let metadata = parse_headers(&header_lines);
    let blocks = parse_blocks(content)?;

    Ok(ResumeDocument { metadata, blocks })
}
