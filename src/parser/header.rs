use log::warn;

use crate::cli::PageSize;
use crate::model::ResumeMetadata;

/// A metadata line: `% Key: value`
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderDirective {
    Title(String),
    Author(String),
    PageSize(PageSize),
    Margin(f32),
    Unknown(String),
}

/// Parse a header line starting with %
pub fn parse_header_line(line: &str) -> Option<HeaderDirective> {
    let content = line.trim().strip_prefix('%')?.trim();

    let Some((key, value)) = content.split_once(':') else {
        return Some(HeaderDirective::Unknown(content.to_string()));
    };
    let value = value.trim().trim_matches('"');

    match key.trim().to_ascii_lowercase().as_str() {
        "title" if !value.is_empty() => Some(HeaderDirective::Title(value.to_string())),
        "author" if !value.is_empty() => Some(HeaderDirective::Author(value.to_string())),
        "pagesize" | "papersize" => match PageSize::from_name(value) {
            Some(size) => Some(HeaderDirective::PageSize(size)),
            None => Some(HeaderDirective::Unknown(content.to_string())),
        },
        "margin" => match parse_margin(value) {
            Some(margin) => Some(HeaderDirective::Margin(margin)),
            None => Some(HeaderDirective::Unknown(content.to_string())),
        },
        _ => Some(HeaderDirective::Unknown(content.to_string())),
    }
}

/// Accepts "12", "12mm" and "12 mm"
fn parse_margin(value: &str) -> Option<f32> {
    let number = value.trim().trim_end_matches("mm").trim();
    number.parse::<f32>().ok().filter(|m| m.is_finite() && *m >= 0.0)
}

/// Parse all header lines into metadata
pub fn parse_headers(lines: &[&str]) -> ResumeMetadata {
    let mut metadata = ResumeMetadata::default();

    for line in lines {
        if let Some(directive) = parse_header_line(line) {
            match directive {
                HeaderDirective::Title(t) => metadata.title = Some(t),
                HeaderDirective::Author(a) => metadata.author = Some(a),
                HeaderDirective::PageSize(s) => metadata.page_size = Some(s),
                HeaderDirective::Margin(m) => metadata.margin = Some(m),
                HeaderDirective::Unknown(text) => {
                    warn!("Ignoring unrecognised directive: %{}", text);
                }
            }
        }
    }

    metadata
}
