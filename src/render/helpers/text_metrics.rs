//! Text measurement utilities for PDF builtin fonts
//!
//! The layout engine measures every candidate line before placing it, so
//! widths here must match what the PDF viewer draws. Widths come from
//! Adobe's AFM files for the Helvetica family.

use printpdf::BuiltinFont;

use crate::render::layout::FontWeight;

/// Points to millimetres
const PT_TO_MM: f32 = 0.3528;

/// Trait for text measurement operations
pub trait TextMeasure {
    /// Measure text width in mm at a given font size
    fn measure_text(&self, text: &str, font_size: f32) -> f32;
}

/// Text measurer for the PDF builtin Helvetica faces
///
/// Oblique faces share the upright widths.
pub struct BuiltinFontMeasurer {
    font: BuiltinFont,
}

impl BuiltinFontMeasurer {
    pub fn new(font: BuiltinFont) -> Self {
        Self { font }
    }

    fn is_bold(&self) -> bool {
        matches!(
            self.font,
            BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique
        )
    }

    /// Get character width in 1000 units per em
    fn char_width(&self, c: char) -> u16 {
        let bold = self.is_bold();

        if c.is_ascii() {
            let table = if bold {
                &HELVETICA_BOLD_WIDTHS
            } else {
                &HELVETICA_WIDTHS
            };
            return table[c as usize];
        }

        // WinAnsi punctuation common in resumes
        match c {
            '\u{2022}' => 350,              // bullet
            '\u{2013}' => 556,              // en dash
            '\u{2014}' | '\u{2026}' => 1000, // em dash, ellipsis
            '\u{2018}' | '\u{2019}' => {
                if bold {
                    278
                } else {
                    222
                }
            }
            '\u{201C}' | '\u{201D}' => {
                if bold {
                    500
                } else {
                    333
                }
            }
            '\u{00A9}' | '\u{00AE}' => 737,
            '\u{00B0}' => 400,
            _ => 556, // Average lowercase advance
        }
    }

    /// Measure text width in points
    pub fn measure_width_pt(&self, text: &str, font_size: f32) -> f32 {
        let total_width: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        (total_width as f32 / 1000.0) * font_size
    }

    /// Measure text width in mm
    pub fn measure_width_mm(&self, text: &str, font_size: f32) -> f32 {
        self.measure_width_pt(text, font_size) * PT_TO_MM
    }

    /// Distance from the top of the line box to the baseline, in mm
    pub fn ascender_mm(&self, font_size: f32) -> f32 {
        (718.0 / 1000.0) * font_size * PT_TO_MM
    }

    /// Get descender depth in mm (positive value)
    pub fn descender_mm(&self, font_size: f32) -> f32 {
        (207.0 / 1000.0) * font_size * PT_TO_MM
    }
}

impl TextMeasure for BuiltinFontMeasurer {
    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        self.measure_width_mm(text, font_size)
    }
}

/// Get a builtin font measurer for Helvetica (sans-serif regular)
pub fn get_helvetica_measurer() -> &'static BuiltinFontMeasurer {
    use std::sync::OnceLock;
    static MEASURER: OnceLock<BuiltinFontMeasurer> = OnceLock::new();
    MEASURER.get_or_init(|| BuiltinFontMeasurer::new(BuiltinFont::Helvetica))
}

/// Get a builtin font measurer for Helvetica-Bold
pub fn get_helvetica_bold_measurer() -> &'static BuiltinFontMeasurer {
    use std::sync::OnceLock;
    static MEASURER: OnceLock<BuiltinFontMeasurer> = OnceLock::new();
    MEASURER.get_or_init(|| BuiltinFontMeasurer::new(BuiltinFont::HelveticaBold))
}

/// Builtin face for a weight/slant combination
pub fn builtin_font(weight: FontWeight, italic: bool) -> BuiltinFont {
    match (weight, italic) {
        (FontWeight::Normal, false) => BuiltinFont::Helvetica,
        (FontWeight::Normal, true) => BuiltinFont::HelveticaOblique,
        (FontWeight::Bold, false) => BuiltinFont::HelveticaBold,
        (FontWeight::Bold, true) => BuiltinFont::HelveticaBoldOblique,
    }
}

/// Measurer matching a weight (slant does not change widths)
pub fn measurer_for(weight: FontWeight) -> &'static BuiltinFontMeasurer {
    match weight {
        FontWeight::Normal => get_helvetica_measurer(),
        FontWeight::Bold => get_helvetica_bold_measurer(),
    }
}

// =============================================================================
// Adobe AFM Character Width Tables (ASCII subset, in 1000 units per em)
// =============================================================================

/// Helvetica character widths (indices 0-127, only 32-126 are valid)
#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 128] = [
    // 0-31: Control characters
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 32-47: space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 48-63: 0-9 : ; < = > ?
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    // 64-79: @ A-O
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    // 80-95: P-Z [ \ ] ^ _
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    // 96-111: ` a-o
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    // 112-127: p-z { | } ~ DEL
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
];

/// Helvetica-Bold character widths
#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
];
