//! PDF post-processing
//!
//! printpdf writes page content only. We reopen its output with lopdf to
//! attach URI link annotations, fill in the author, and compress streams.

use std::io::Cursor;

use lopdf::{dictionary, Document, Object};

/// Millimetres to PDF points
const MM_TO_PT: f32 = 72.0 / 25.4;

/// A clickable rectangle on a page, in mm from the bottom-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct LinkArea {
    /// 0-based page index
    pub page: usize,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
    pub url: String,
}

/// What to change in the finished document
#[derive(Debug, Clone, Default)]
pub struct PostProcess {
    pub links: Vec<LinkArea>,
    pub author: Option<String>,
    pub compress: bool,
}

impl PostProcess {
    pub fn is_noop(&self) -> bool {
        self.links.is_empty() && self.author.is_none() && !self.compress
    }
}

/// Apply `options` to a serialized PDF.
pub fn postprocess_pdf(pdf: Vec<u8>, options: &PostProcess) -> Result<Vec<u8>, String> {
    if options.is_noop() {
        return Ok(pdf);
    }

    let mut doc = Document::load_mem(&pdf)
        .map_err(|e| format!("Failed to parse PDF for post-processing: {}", e))?;

    for link in &options.links {
        add_link(&mut doc, link)?;
    }

    if let Some(ref author) = options.author {
        set_author(&mut doc, author)?;
    }

    if options.compress {
        doc.compress();
    }

    let mut output = Cursor::new(Vec::new());
    doc.save_to(&mut output)
        .map_err(|e| format!("Failed to save post-processed PDF: {}", e))?;

    Ok(output.into_inner())
}

fn add_link(doc: &mut Document, link: &LinkArea) -> Result<(), String> {
    let page_number = link.page as u32 + 1;
    let page_id = *doc
        .get_pages()
        .get(&page_number)
        .ok_or_else(|| format!("Link target page {} does not exist", page_number))?;

    let rect: Vec<Object> = [link.left, link.bottom, link.right, link.top]
        .iter()
        .map(|v| (v * MM_TO_PT).into())
        .collect();
    let annotation = dictionary! {
        "Type" => "Annot",
        "Subtype" => "Link",
        "Rect" => rect,
        "Border" => vec![Object::Integer(0), Object::Integer(0), Object::Integer(0)],
        "A" => dictionary! {
            "S" => "URI",
            "URI" => Object::string_literal(link.url.as_str()),
        },
    };
    let annotation_id = doc.add_object(annotation);

    let page = doc
        .get_object_mut(page_id)
        .and_then(Object::as_dict_mut)
        .map_err(|e| format!("Page {} is not a dictionary: {}", page_number, e))?;

    let mut annots = match page.get(b"Annots") {
        Ok(Object::Array(existing)) => existing.clone(),
        _ => Vec::new(),
    };
    annots.push(Object::Reference(annotation_id));
    page.set("Annots", annots);

    Ok(())
}

fn set_author(doc: &mut Document, author: &str) -> Result<(), String> {
    let info_id = match doc.trailer.get(b"Info").and_then(Object::as_reference) {
        Ok(id) => id,
        Err(_) => {
            let id = doc.add_object(dictionary! {});
            doc.trailer.set("Info", id);
            id
        }
    };

    let info = doc
        .get_object_mut(info_id)
        .and_then(Object::as_dict_mut)
        .map_err(|e| format!("Document info is not a dictionary: {}", e))?;
    info.set("Author", Object::string_literal(author));

    Ok(())
}
