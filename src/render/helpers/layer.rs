//! Collects printpdf operations for one page
//!
//! Layout works top-down in mm; printpdf positions from the bottom-left
//! corner. Callers pass PDF coordinates here.

use printpdf::{BuiltinFont, Color, Mm, Op, PdfFontHandle, Point, Pt, TextItem};

/// A builder that collects PDF operations for a page
#[derive(Default)]
pub struct LayerBuilder {
    ops: Vec<Op>,
}

impl LayerBuilder {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Get the collected operations
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Set the fill color used for text
    pub fn set_fill_color(&mut self, color: Color) {
        self.ops.push(Op::SetFillColor { col: color });
    }

    /// Draw text in a builtin font with its baseline at (x, y)
    pub fn use_text_builtin<S: Into<String>>(
        &mut self,
        text: S,
        font_size: f32,
        x: Mm,
        y: Mm,
        font: BuiltinFont,
    ) {
        let text_str = text.into();
        if text_str.is_empty() {
            return;
        }

        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor {
            pos: Point {
                x: x.into(),
                y: y.into(),
            },
        });
        self.ops.push(Op::SetFont {
            size: Pt(font_size),
            font: PdfFontHandle::Builtin(font),
        });
        self.ops.push(Op::ShowText {
            items: vec![TextItem::Text(text_str)],
        });
        self.ops.push(Op::EndTextSection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_section_ops() {
        let mut layer = LayerBuilder::new();
        layer.use_text_builtin("Skills", 14.0, Mm(15.0), Mm(270.0), BuiltinFont::HelveticaBold);
        let ops = layer.into_ops();
        assert_eq!(ops.len(), 5);
        assert!(matches!(ops[0], Op::StartTextSection));
        assert!(matches!(ops[4], Op::EndTextSection));
    }

    #[test]
    fn test_empty_text_is_skipped() {
        let mut layer = LayerBuilder::new();
        layer.use_text_builtin("", 10.0, Mm(15.0), Mm(270.0), BuiltinFont::Helvetica);
        assert!(layer.into_ops().is_empty());
    }
}
