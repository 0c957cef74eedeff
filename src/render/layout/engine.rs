use log::{debug, warn};

use crate::config::Settings;
use crate::error::LayoutError;
use crate::model::{ContentBlock, HeadingLevel, LabeledValue, ListStyle};
use crate::render::helpers::text_metrics::{
    get_helvetica_bold_measurer, get_helvetica_measurer, TextMeasure,
};

use super::canvas::{ensure_space, Cursor, PageCanvas};
use super::command::{DrawCommand, FontWeight, LaidOutDocument, TextColor};
use super::wrap::measure_wrap;

/// Font, color, and line height of an emitted line
#[derive(Debug, Clone, Copy)]
struct TextStyle {
    font_size: f32,
    line_height: f32,
    weight: FontWeight,
    italic: bool,
    color: TextColor,
}

/// Wrapped label and value lines of one two-column cell
type Cell = (Vec<String>, Vec<String>);

/// State owned by a single `render_document` call
struct LayoutPass<'c> {
    cursor: Cursor,
    canvas: &'c mut PageCanvas,
    commands: Vec<DrawCommand>,
}

impl LayoutPass<'_> {
    fn reserve(&mut self, height: f32) {
        self.cursor = ensure_space(self.cursor, height, self.canvas);
    }

    fn advance(&mut self, dy: f32) {
        self.cursor.y += dy;
    }

    fn emit(&mut self, x: f32, y: f32, text: String, style: TextStyle, link: Option<&str>) {
        self.commands.push(DrawCommand {
            page: self.cursor.page_index,
            x,
            y,
            text,
            font_size: style.font_size,
            font_weight: style.weight,
            italic: style.italic,
            color: style.color,
            link: link.map(str::to_string),
        });
    }
}

/// Lay out `blocks` on `canvas` with the default typography.
///
/// Page size and margins come from the canvas.
pub fn render_document(
    blocks: &[ContentBlock],
    canvas: &mut PageCanvas,
) -> Result<Vec<DrawCommand>, LayoutError> {
    let settings = Settings::default();
    LayoutEngine::new(&settings).render_document(blocks, canvas)
}

/// Lays out content blocks into draw commands on a paged canvas
pub struct LayoutEngine<'a> {
    settings: &'a Settings,
    regular: &'a dyn TextMeasure,
    bold: &'a dyn TextMeasure,
}

impl<'a> LayoutEngine<'a> {
    /// Engine measuring with the builtin Helvetica metrics
    pub fn new(settings: &'a Settings) -> Self {
        Self::with_measurers(settings, get_helvetica_measurer(), get_helvetica_bold_measurer())
    }

    pub fn with_measurers(
        settings: &'a Settings,
        regular: &'a dyn TextMeasure,
        bold: &'a dyn TextMeasure,
    ) -> Self {
        Self {
            settings,
            regular,
            bold,
        }
    }

    /// Lay out `blocks` on a fresh canvas built from the settings
    pub fn layout(&self, blocks: &[ContentBlock]) -> Result<LaidOutDocument, LayoutError> {
        let mut canvas = PageCanvas::new(self.settings.geometry());
        let commands = self.render_document(blocks, &mut canvas)?;
        Ok(LaidOutDocument {
            commands,
            page_count: canvas.page_count(),
        })
    }

    /// Walk `blocks` in order, emitting draw commands and adding pages to
    /// `canvas` as content overflows.
    ///
    /// Layout starts at the top margin of the canvas's last page.
    pub fn render_document(
        &self,
        blocks: &[ContentBlock],
        canvas: &mut PageCanvas,
    ) -> Result<Vec<DrawCommand>, LayoutError> {
        if blocks.is_empty() {
            return Err(LayoutError::EmptyDocument);
        }

        let start = Cursor::top_of(canvas.page_count() - 1, canvas.geometry());
        let mut pass = LayoutPass {
            cursor: start,
            canvas,
            commands: Vec::new(),
        };

        for block in blocks {
            self.render_block(&mut pass, block)?;
        }

        debug!(
            "Laid out {} blocks into {} commands on {} pages",
            blocks.len(),
            pass.commands.len(),
            pass.canvas.page_count()
        );

        Ok(pass.commands)
    }

    fn render_block(&self, pass: &mut LayoutPass, block: &ContentBlock) -> Result<(), LayoutError> {
        match block {
            ContentBlock::Heading { text, level } => self.render_heading(pass, text, *level),
            ContentBlock::Paragraph { text } => self.render_wrapped(
                pass,
                text,
                self.regular,
                self.body_style(false, None),
                self.settings.paragraph_gap,
            ),
            ContentBlock::Label { text } => self.render_wrapped(
                pass,
                text,
                self.bold,
                TextStyle {
                    weight: FontWeight::Bold,
                    ..self.body_style(false, None)
                },
                0.0,
            ),
            ContentBlock::Note { text } => self.render_wrapped(
                pass,
                text,
                self.regular,
                TextStyle {
                    font_size: self.settings.small_font_size,
                    line_height: self.settings.small_line_height,
                    ..self.body_style(false, None)
                },
                self.settings.paragraph_gap,
            ),
            ContentBlock::List { items, style } => self.render_list(pass, items, *style),
            ContentBlock::TwoColumnEntry { items } => self.render_two_column(pass, items),
            ContentBlock::KeyedSection { heading, children } => {
                self.render_section(pass, heading, children)
            }
            ContentBlock::Centered {
                text,
                link,
                emphasis,
            } => self.render_centered(pass, text, link.as_deref(), *emphasis),
        }
    }

    /// Headings wrap like paragraphs, one reserve per line at the level's
    /// line height, followed by the heading gap.
    fn render_heading(
        &self,
        pass: &mut LayoutPass,
        text: &str,
        level: HeadingLevel,
    ) -> Result<(), LayoutError> {
        let geometry = *pass.canvas.geometry();
        let style = TextStyle {
            font_size: self.settings.font_size(level),
            line_height: self.settings.line_height(level),
            weight: FontWeight::Bold,
            italic: false,
            color: self.settings.text_color.into(),
        };

        let lines = measure_wrap(self.bold, text, geometry.content_width(), style.font_size)?;
        if lines.len() > 1 {
            warn!("Heading {:?} is wider than the page and wraps onto {} lines", text, lines.len());
        }

        for line in lines {
            self.emit_line(pass, geometry.margin, line, style, None);
        }
        pass.advance(self.settings.heading_gap);

        Ok(())
    }

    /// Left-aligned text wrapped at the content width, then `gap`
    fn render_wrapped(
        &self,
        pass: &mut LayoutPass,
        text: &str,
        measurer: &dyn TextMeasure,
        style: TextStyle,
        gap: f32,
    ) -> Result<(), LayoutError> {
        let geometry = *pass.canvas.geometry();
        let lines = measure_wrap(measurer, text, geometry.content_width(), style.font_size)?;

        for line in lines {
            self.emit_line(pass, geometry.margin, line, style, None);
        }
        pass.advance(gap);

        Ok(())
    }

    fn render_list(
        &self,
        pass: &mut LayoutPass,
        items: &[String],
        list_style: ListStyle,
    ) -> Result<(), LayoutError> {
        let geometry = *pass.canvas.geometry();
        let style = self.body_style(false, None);
        let x = geometry.margin + self.settings.list_indent;

        for (index, item) in items.iter().enumerate() {
            let prefix = list_style.prefix(index);
            let prefix_width = self.regular.measure_text(&prefix, style.font_size);
            let wrap_width = geometry.content_width() - self.settings.list_indent - prefix_width;
            let lines = measure_wrap(self.regular, item, wrap_width, style.font_size)?;

            if lines.is_empty() {
                self.emit_line(pass, x, prefix, style, None);
                continue;
            }

            for (n, line) in lines.into_iter().enumerate() {
                if n == 0 {
                    self.emit_line(pass, x, format!("{}{}", prefix, line), style, None);
                } else {
                    self.emit_line(pass, x + prefix_width, line, style, None);
                }
            }
        }
        pass.advance(self.settings.list_gap);

        Ok(())
    }

    fn render_two_column(
        &self,
        pass: &mut LayoutPass,
        items: &[LabeledValue],
    ) -> Result<(), LayoutError> {
        let geometry = *pass.canvas.geometry();
        let column_width = self.column_width(geometry.content_width());
        let line_height = self.settings.body_line_height;
        let label_style = TextStyle {
            weight: FontWeight::Bold,
            ..self.body_style(false, None)
        };
        let value_style = self.body_style(false, None);

        for row in items.chunks(2) {
            let cells = self.row_cells(row, column_width)?;
            let row_height = self.row_height(&cells);

            pass.reserve(row_height);
            let row_top = pass.cursor.y;

            for (col, (labels, values)) in cells.into_iter().enumerate() {
                let x = geometry.margin + col as f32 * (column_width + self.settings.column_gutter);
                let mut y = row_top;
                for line in labels {
                    pass.emit(x, y, line, label_style, None);
                    y += line_height;
                }
                for line in values {
                    pass.emit(x, y, line, value_style, None);
                    y += line_height;
                }
            }

            pass.advance(row_height);
        }
        pass.advance(self.settings.paragraph_gap);

        Ok(())
    }

    /// Keyed sections keep their heading on the same page as the first
    /// line of their first child, unless the two together exceed a page.
    fn render_section(
        &self,
        pass: &mut LayoutPass,
        heading: &str,
        children: &[ContentBlock],
    ) -> Result<(), LayoutError> {
        let content_width = pass.canvas.geometry().content_width();
        let combined = self.section_lead_height(children, content_width)?;
        if combined <= pass.canvas.geometry().body_height() {
            pass.reserve(combined);
        }

        self.render_heading(pass, heading, HeadingLevel::Subsection)?;
        for child in children {
            self.render_block(pass, child)?;
        }
        pass.advance(self.settings.section_gap);

        Ok(())
    }

    fn render_centered(
        &self,
        pass: &mut LayoutPass,
        text: &str,
        link: Option<&str>,
        emphasis: bool,
    ) -> Result<(), LayoutError> {
        let geometry = *pass.canvas.geometry();
        let style = self.body_style(emphasis, link);
        let content_width = geometry.content_width();
        let lines = measure_wrap(self.regular, text, content_width, style.font_size)?;

        for line in lines {
            let width = self.regular.measure_text(&line, style.font_size);
            let x = geometry.margin + (content_width - width).max(0.0) / 2.0;
            self.emit_line(pass, x, line, style, link);
        }

        Ok(())
    }

    /// Reserve one line, emit it at the cursor, and move below it
    fn emit_line(
        &self,
        pass: &mut LayoutPass,
        x: f32,
        text: String,
        style: TextStyle,
        link: Option<&str>,
    ) {
        pass.reserve(style.line_height);
        let y = pass.cursor.y;
        pass.emit(x, y, text, style, link);
        pass.advance(style.line_height);
    }

    fn body_style(&self, italic: bool, link: Option<&str>) -> TextStyle {
        let color = if link.is_some() {
            self.settings.link_color
        } else {
            self.settings.text_color
        };
        TextStyle {
            font_size: self.settings.body_font_size,
            line_height: self.settings.body_line_height,
            weight: FontWeight::Normal,
            italic,
            color: color.into(),
        }
    }

    fn column_width(&self, content_width: f32) -> f32 {
        (content_width - self.settings.column_gutter) / 2.0
    }

    fn row_cells(&self, row: &[LabeledValue], column_width: f32) -> Result<Vec<Cell>, LayoutError> {
        let font_size = self.settings.body_font_size;
        row.iter()
            .map(|pair| -> Result<Cell, LayoutError> {
                Ok((
                    measure_wrap(self.bold, &pair.display_label(), column_width, font_size)?,
                    measure_wrap(self.regular, &pair.value, column_width, font_size)?,
                ))
            })
            .collect()
    }

    /// Tallest cell of the row plus the row gap
    fn row_height(&self, cells: &[Cell]) -> f32 {
        let lines = cells
            .iter()
            .map(|(labels, values)| labels.len() + values.len())
            .max()
            .unwrap_or(0);
        lines as f32 * self.settings.body_line_height + self.settings.row_gap
    }

    /// Height a keyed section needs before its heading can be placed: the
    /// heading, the heading gap, and the first line of its first child.
    fn section_lead_height(
        &self,
        children: &[ContentBlock],
        content_width: f32,
    ) -> Result<f32, LayoutError> {
        let heading = self.settings.subsection_line_height;
        match children.first() {
            Some(child) => Ok(heading
                + self.settings.heading_gap
                + self.first_line_height(child, content_width)?),
            None => Ok(heading),
        }
    }

    /// Height of the first line (or row) `block` would emit. A nested
    /// section counts its own heading plus its first child's first line.
    fn first_line_height(&self, block: &ContentBlock, content_width: f32) -> Result<f32, LayoutError> {
        let body = self.settings.body_line_height;
        let when_text = |text: &str, height: f32| {
            if text.split_whitespace().next().is_some() {
                height
            } else {
                0.0
            }
        };
        let height = match block {
            ContentBlock::Heading { text, level } => when_text(text, self.settings.line_height(*level)),
            ContentBlock::Paragraph { text }
            | ContentBlock::Label { text }
            | ContentBlock::Centered { text, .. } => when_text(text, body),
            ContentBlock::Note { text } => when_text(text, self.settings.small_line_height),
            ContentBlock::List { items, .. } => {
                if items.is_empty() {
                    0.0
                } else {
                    body
                }
            }
            ContentBlock::TwoColumnEntry { items } => match items.chunks(2).next() {
                Some(row) => {
                    let cells = self.row_cells(row, self.column_width(content_width))?;
                    self.row_height(&cells)
                }
                None => 0.0,
            },
            ContentBlock::KeyedSection { children, .. } => {
                self.section_lead_height(children, content_width)?
            }
        };
        Ok(height)
    }
}
