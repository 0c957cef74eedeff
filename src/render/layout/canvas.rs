//! Page canvas, layout cursor, and the page-break decision

/// Fixed page size and uniform margin, in mm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    pub const A4: PageGeometry = PageGeometry {
        width: 210.0,
        height: 297.0,
        margin: 15.0,
    };

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Height between the top and bottom margins
    pub fn body_height(&self) -> f32 {
        self.height - 2.0 * self.margin
    }

    /// Lowest y (from the top edge) any line box may reach
    pub fn bottom_limit(&self) -> f32 {
        self.height - self.margin
    }
}

/// Current page and vertical write position (mm from the top edge)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub page_index: usize,
    pub y: f32,
}

impl Cursor {
    /// Cursor at the top margin of `page_index`
    pub fn top_of(page_index: usize, geometry: &PageGeometry) -> Self {
        Self {
            page_index,
            y: geometry.margin,
        }
    }
}

/// Drawable surface of fixed-size pages; starts with exactly one page
#[derive(Debug, Clone)]
pub struct PageCanvas {
    geometry: PageGeometry,
    page_count: usize,
}

impl PageCanvas {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            page_count: 1,
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Append a page, returning its index
    pub fn add_page(&mut self) -> usize {
        self.page_count += 1;
        self.page_count - 1
    }
}

/// Start a new page if `required_height` does not fit below the cursor.
///
/// A cursor already at the top margin is returned unchanged: a fresh page
/// would not give the content any more room.
pub fn ensure_space(cursor: Cursor, required_height: f32, canvas: &mut PageCanvas) -> Cursor {
    let geometry = *canvas.geometry();

    if cursor.y + required_height <= geometry.bottom_limit() {
        return cursor;
    }

    if cursor.y <= geometry.margin {
        log::warn!(
            "{:.1} mm of content does not fit an empty page body of {:.1} mm",
            required_height,
            geometry.body_height()
        );
        return cursor;
    }

    canvas.add_page();
    log::debug!(
        "Page break at y={:.1} (needed {:.1} mm): page {} -> {}",
        cursor.y,
        required_height,
        cursor.page_index + 1,
        cursor.page_index + 2
    );

    Cursor::top_of(cursor.page_index + 1, &geometry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> PageCanvas {
        PageCanvas::new(PageGeometry::A4)
    }

    #[test]
    fn test_canvas_starts_with_one_page() {
        let c = canvas();
        assert_eq!(c.page_count(), 1);
        assert!((c.geometry().bottom_limit() - 282.0).abs() < 0.001);
    }

    #[test]
    fn test_exact_fit_keeps_cursor() {
        let mut c = canvas();
        let cursor = Cursor {
            page_index: 0,
            y: 272.0,
        };
        assert_eq!(ensure_space(cursor, 10.0, &mut c), cursor);
        assert_eq!(c.page_count(), 1);
    }

    #[test]
    fn test_overflow_by_one_unit_breaks_once() {
        let mut c = canvas();
        let cursor = Cursor {
            page_index: 0,
            y: 272.0,
        };
        let next = ensure_space(cursor, 11.0, &mut c);
        assert_eq!(
            next,
            Cursor {
                page_index: 1,
                y: 15.0
            }
        );
        assert_eq!(c.page_count(), 2);
    }

    #[test]
    fn test_top_of_page_never_breaks() {
        let mut c = canvas();
        let cursor = Cursor::top_of(0, c.geometry());
        let next = ensure_space(cursor, 400.0, &mut c);
        assert_eq!(next, cursor);
        assert_eq!(c.page_count(), 1);
    }
}
