use printpdf::{Color, Rgb};

use crate::render::layout::TextColor;

/// Convert a layout color to a printpdf fill color
pub fn fill_color(color: TextColor) -> Color {
    let scale = |v: u8| v as f32 / 255.0;
    Color::Rgb(Rgb::new(scale(color.r), scale(color.g), scale(color.b), None))
}
