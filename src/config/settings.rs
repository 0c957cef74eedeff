use crate::cli::{Args, Orientation, PageSize};
use crate::error::ConfigError;
use crate::model::{HeadingLevel, ResumeMetadata};
use crate::render::layout::PageGeometry;

use super::defaults::*;

/// Runtime settings for layout and PDF generation
#[derive(Debug, Clone)]
pub struct Settings {
    // Page dimensions (mm)
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub orientation: Orientation,

    // CLI overrides; file directives only apply where these are unset
    page_size_override: Option<PageSize>,
    margin_override: Option<f32>,
    title_override: Option<String>,

    // Document info
    pub title: Option<String>,
    pub author: Option<String>,
    pub compress: bool,

    // Typography (points)
    pub title_font_size: f32,
    pub section_font_size: f32,
    pub subsection_font_size: f32,
    pub body_font_size: f32,
    pub small_font_size: f32,

    // Line heights (mm)
    pub title_line_height: f32,
    pub section_line_height: f32,
    pub subsection_line_height: f32,
    pub body_line_height: f32,
    pub small_line_height: f32,

    // Spacing (mm)
    pub heading_gap: f32,
    pub paragraph_gap: f32,
    pub list_gap: f32,
    pub row_gap: f32,
    pub section_gap: f32,
    pub list_indent: f32,
    pub column_gutter: f32,

    // Colors (RGB 0-255)
    pub text_color: (u8, u8, u8),
    pub link_color: (u8, u8, u8),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_width: DEFAULT_PAGE_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,
            margin: DEFAULT_PAGE_MARGIN,
            orientation: Orientation::Portrait,

            page_size_override: None,
            margin_override: None,
            title_override: None,

            title: None,
            author: None,
            compress: true,

            title_font_size: DEFAULT_TITLE_FONT_SIZE,
            section_font_size: DEFAULT_SECTION_FONT_SIZE,
            subsection_font_size: DEFAULT_SUBSECTION_FONT_SIZE,
            body_font_size: DEFAULT_BODY_FONT_SIZE,
            small_font_size: DEFAULT_SMALL_FONT_SIZE,

            title_line_height: DEFAULT_TITLE_LINE_HEIGHT,
            section_line_height: DEFAULT_SECTION_LINE_HEIGHT,
            subsection_line_height: DEFAULT_SUBSECTION_LINE_HEIGHT,
            body_line_height: DEFAULT_BODY_LINE_HEIGHT,
            small_line_height: DEFAULT_SMALL_LINE_HEIGHT,

            heading_gap: DEFAULT_HEADING_GAP,
            paragraph_gap: DEFAULT_PARAGRAPH_GAP,
            list_gap: DEFAULT_LIST_GAP,
            row_gap: DEFAULT_ROW_GAP,
            section_gap: DEFAULT_SECTION_GAP,
            list_indent: DEFAULT_LIST_INDENT,
            column_gutter: DEFAULT_COLUMN_GUTTER,

            text_color: TEXT_COLOR,
            link_color: LINK_COLOR,
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        let mut settings = Self {
            orientation: args.orientation,
            page_size_override: args.page_size,
            margin_override: args.margin,
            title_override: args.title.clone(),
            title: args.title.clone(),
            compress: args.compress(),
            ..Default::default()
        };

        let size = args.page_size.unwrap_or(PageSize::A4);
        settings.set_page_size(size);
        if let Some(margin) = args.margin {
            settings.margin = margin;
        }

        settings
    }

    /// Merge with resume file metadata (CLI values take precedence)
    pub fn with_metadata(mut self, metadata: &ResumeMetadata) -> Self {
        if self.page_size_override.is_none() {
            if let Some(size) = metadata.page_size {
                self.set_page_size(size);
            }
        }

        if self.margin_override.is_none() {
            if let Some(margin) = metadata.margin {
                self.margin = margin;
            }
        }

        if self.title_override.is_none() {
            self.title = metadata.title.clone();
        }

        if metadata.author.is_some() {
            self.author = metadata.author.clone();
        }

        self
    }

    fn set_page_size(&mut self, size: PageSize) {
        let (w, h) = self.orientation.apply(size.dimensions_mm());
        self.page_width = w;
        self.page_height = h;
    }

    /// Check that every single line and row can fit on an empty page
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.margin < 0.0
            || self.content_width() <= 0.0
            || self.body_height() <= 0.0
        {
            return Err(ConfigError::InvalidMargin {
                margin: self.margin,
                width: self.page_width,
                height: self.page_height,
            });
        }

        for size in [
            self.title_font_size,
            self.section_font_size,
            self.subsection_font_size,
            self.body_font_size,
            self.small_font_size,
        ] {
            if size <= 0.0 {
                return Err(ConfigError::InvalidFontSize(size));
            }
        }

        let tallest = [
            self.title_line_height,
            self.section_line_height,
            self.subsection_line_height,
            self.body_line_height,
            self.small_line_height,
        ]
        .into_iter()
        .fold(0.0_f32, f32::max);
        if tallest > self.body_height() {
            return Err(ConfigError::LineTooTall {
                line_height: tallest,
                body_height: self.body_height(),
            });
        }

        if self.column_width() <= 0.0 || self.content_width() <= self.list_indent {
            return Err(ConfigError::ContentTooNarrow);
        }

        Ok(())
    }

    /// Page geometry handed to the layout canvas
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry {
            width: self.page_width,
            height: self.page_height,
            margin: self.margin,
        }
    }

    /// Get the usable content area width
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Get the usable content area height
    pub fn body_height(&self) -> f32 {
        self.page_height - 2.0 * self.margin
    }

    /// Width of one column of a two-column table
    pub fn column_width(&self) -> f32 {
        (self.content_width() - self.column_gutter) / 2.0
    }

    pub fn font_size(&self, level: HeadingLevel) -> f32 {
        match level {
            HeadingLevel::Title => self.title_font_size,
            HeadingLevel::Section => self.section_font_size,
            HeadingLevel::Subsection => self.subsection_font_size,
        }
    }

    pub fn line_height(&self, level: HeadingLevel) -> f32 {
        match level {
            HeadingLevel::Title => self.title_line_height,
            HeadingLevel::Section => self.section_line_height,
            HeadingLevel::Subsection => self.subsection_line_height,
        }
    }
}
