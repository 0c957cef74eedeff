//! Backend-independent output of the layout engine

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// RGB text color, 0-255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TextColor {
    pub const BLACK: TextColor = TextColor { r: 0, g: 0, b: 0 };
}

impl From<(u8, u8, u8)> for TextColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// One line of text placed on a page.
///
/// `x` is the left edge and `y` the top of the line box, both in mm from
/// the top-left corner of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub page: usize,
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub italic: bool,
    pub color: TextColor,
    pub link: Option<String>,
}

/// Result of a layout pass: the commands plus the final page count
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDocument {
    pub commands: Vec<DrawCommand>,
    pub page_count: usize,
}

impl LaidOutDocument {
    /// Commands placed on `page`, in emission order
    pub fn page_commands(&self, page: usize) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |c| c.page == page)
    }
}
