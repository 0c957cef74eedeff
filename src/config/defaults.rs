/// Default page width in mm (A4)
pub const DEFAULT_PAGE_WIDTH: f32 = 210.0;

/// Default page height in mm (A4)
pub const DEFAULT_PAGE_HEIGHT: f32 = 297.0;

/// Default page margin in mm
pub const DEFAULT_PAGE_MARGIN: f32 = 15.0;

/// Document title font size in points
pub const DEFAULT_TITLE_FONT_SIZE: f32 = 18.0;

/// Section heading font size in points
pub const DEFAULT_SECTION_FONT_SIZE: f32 = 14.0;

/// Subsection (job, degree) heading font size in points
pub const DEFAULT_SUBSECTION_FONT_SIZE: f32 = 12.0;

/// Body text font size in points
pub const DEFAULT_BODY_FONT_SIZE: f32 = 10.0;

/// Small print font size in points
pub const DEFAULT_SMALL_FONT_SIZE: f32 = 9.0;

// Line heights in mm
pub const DEFAULT_TITLE_LINE_HEIGHT: f32 = 8.0;
pub const DEFAULT_SECTION_LINE_HEIGHT: f32 = 6.0;
pub const DEFAULT_SUBSECTION_LINE_HEIGHT: f32 = 5.0;
pub const DEFAULT_BODY_LINE_HEIGHT: f32 = 5.0;
pub const DEFAULT_SMALL_LINE_HEIGHT: f32 = 4.0;

// Vertical gaps in mm
pub const DEFAULT_HEADING_GAP: f32 = 1.0;
pub const DEFAULT_PARAGRAPH_GAP: f32 = 4.0;
pub const DEFAULT_LIST_GAP: f32 = 3.0;
pub const DEFAULT_ROW_GAP: f32 = 2.0;
pub const DEFAULT_SECTION_GAP: f32 = 4.0;

/// Left indent of list items in mm
pub const DEFAULT_LIST_INDENT: f32 = 5.0;

/// Space between the two columns of a skills table in mm
pub const DEFAULT_COLUMN_GUTTER: f32 = 10.0;

/// RGB color for regular text
pub const TEXT_COLOR: (u8, u8, u8) = (0, 0, 0);

/// RGB color for linked text
pub const LINK_COLOR: (u8, u8, u8) = (0, 0, 255);
