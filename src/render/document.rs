use log::{debug, info, warn};
use printpdf::{Mm, PdfDocument, PdfPage, PdfSaveOptions};

use crate::config::Settings;
use crate::error::RenderError;
use crate::model::ContentBlock;
use crate::render::helpers::layer::LayerBuilder;
use crate::render::helpers::postprocess::{postprocess_pdf, LinkArea, PostProcess};
use crate::render::helpers::{builtin_font, fill_color, measurer_for};
use crate::render::layout::{DrawCommand, LaidOutDocument, LayoutEngine};

/// Fallback document title when neither the file nor the CLI names one
const DEFAULT_TITLE: &str = "Resume";

/// Turns content blocks into a finished PDF
pub struct DocumentRenderer {
    settings: Settings,
}

impl DocumentRenderer {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run the layout engine without producing a PDF
    pub fn layout(&self, blocks: &[ContentBlock]) -> Result<LaidOutDocument, RenderError> {
        self.settings.validate()?;
        let laid_out = LayoutEngine::new(&self.settings).layout(blocks)?;
        info!(
            "Laid out {} draw commands on {} pages",
            laid_out.commands.len(),
            laid_out.page_count
        );
        Ok(laid_out)
    }

    /// Generate a PDF from content blocks
    pub fn render(&self, blocks: &[ContentBlock]) -> Result<Vec<u8>, RenderError> {
        let laid_out = self.layout(blocks)?;

        let title = self.settings.title.as_deref().unwrap_or(DEFAULT_TITLE);
        let mut doc = PdfDocument::new(title);

        let mut layers: Vec<LayerBuilder> =
            (0..laid_out.page_count).map(|_| LayerBuilder::new()).collect();
        let mut links = Vec::new();

        for command in &laid_out.commands {
            let layer = layers.get_mut(command.page).ok_or_else(|| {
                RenderError::PdfGeneration(format!(
                    "Command placed on page {} of a {}-page document",
                    command.page + 1,
                    laid_out.page_count
                ))
            })?;
            self.draw_command(layer, command);

            if let Some(ref url) = command.link {
                links.push(self.link_area(command, url));
            }
        }

        let pages: Vec<PdfPage> = layers
            .into_iter()
            .map(|layer| {
                PdfPage::new(
                    Mm(self.settings.page_width),
                    Mm(self.settings.page_height),
                    layer.into_ops(),
                )
            })
            .collect();
        doc.with_pages(pages);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        debug!("printpdf reported {} warnings", warnings.len());

        let options = PostProcess {
            links,
            author: self.settings.author.clone(),
            compress: self.settings.compress,
        };
        let finished = match postprocess_pdf(bytes.clone(), &options) {
            Ok(processed) => processed,
            Err(e) => {
                warn!("{}; writing unprocessed PDF", e);
                bytes
            }
        };

        Ok(finished)
    }

    fn draw_command(&self, layer: &mut LayerBuilder, command: &DrawCommand) {
        let measurer = measurer_for(command.font_weight);
        let baseline = command.y + measurer.ascender_mm(command.font_size);

        layer.set_fill_color(fill_color(command.color));
        layer.use_text_builtin(
            command.text.as_str(),
            command.font_size,
            Mm(command.x),
            Mm(self.settings.page_height - baseline),
            builtin_font(command.font_weight, command.italic),
        );
    }

    /// Clickable area covering the command's glyphs
    fn link_area(&self, command: &DrawCommand, url: &str) -> LinkArea {
        let measurer = measurer_for(command.font_weight);
        let width = measurer.measure_width_mm(&command.text, command.font_size);
        let height = measurer.ascender_mm(command.font_size) + measurer.descender_mm(command.font_size);
        let top = self.settings.page_height - command.y;

        LinkArea {
            page: command.page,
            left: command.x,
            bottom: top - height,
            right: command.x + width,
            top,
            url: url.to_string(),
        }
    }
}

/// Generate a PDF from content blocks with the given settings
pub fn generate_pdf(blocks: &[ContentBlock], settings: &Settings) -> Result<Vec<u8>, RenderError> {
    DocumentRenderer::new(settings.clone()).render(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;
    use crate::model::HeadingLevel;
    use crate::render::layout::{FontWeight, TextColor};

    fn command(y: f32) -> DrawCommand {
        DrawCommand {
            page: 0,
            x: 15.0,
            y,
            text: "linkedin.com/in/jane".to_string(),
            font_size: 10.0,
            font_weight: FontWeight::Normal,
            italic: false,
            color: TextColor { r: 0, g: 0, b: 255 },
            link: Some("https://linkedin.com/in/jane".to_string()),
        }
    }

    #[test]
    fn test_link_area_flips_to_pdf_coordinates() {
        let renderer = DocumentRenderer::new(Settings::default());
        let area = renderer.link_area(&command(15.0), "https://linkedin.com/in/jane");

        assert_eq!(area.page, 0);
        assert!((area.top - 282.0).abs() < 0.001);
        assert!(area.bottom < area.top);
        assert!(area.right > area.left);
        assert_eq!(area.url, "https://linkedin.com/in/jane");
    }

    #[test]
    fn test_render_rejects_empty_document() {
        let renderer = DocumentRenderer::new(Settings::default());
        assert!(matches!(
            renderer.render(&[]),
            Err(RenderError::Layout(LayoutError::EmptyDocument))
        ));
    }

    #[test]
    fn test_render_rejects_invalid_settings() {
        let mut settings = Settings::default();
        settings.margin = 150.0;
        let renderer = DocumentRenderer::new(settings);
        let blocks = [ContentBlock::heading(HeadingLevel::Title, "JANE DOE")];
        assert!(matches!(renderer.render(&blocks), Err(RenderError::Config(_))));
    }

    #[test]
    fn test_render_produces_pdf() {
        let blocks = vec![
            ContentBlock::heading(HeadingLevel::Title, "JANE DOE"),
            ContentBlock::paragraph("Software engineer building payment systems."),
        ];
        let bytes = generate_pdf(&blocks, &Settings::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
