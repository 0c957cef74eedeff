pub mod header;
pub mod markup;
pub mod resume;

pub use resume::{parse_resume, ResumeDocument};
