//! Pagination and layout engine
//!
//! Turns resolved content blocks into positioned draw commands on a
//! sequence of fixed-size pages. Nothing here knows about PDF; the
//! renderer in `render::document` consumes the commands.

pub mod canvas;
pub mod command;
pub mod engine;
pub mod wrap;

pub use canvas::{ensure_space, Cursor, PageCanvas, PageGeometry};
pub use command::{DrawCommand, FontWeight, LaidOutDocument, TextColor};
pub use engine::{render_document, LayoutEngine};
pub use wrap::measure_wrap;
