pub mod block;
pub mod metadata;

pub use block::{ContentBlock, HeadingLevel, LabeledValue, ListStyle};
pub use metadata::ResumeMetadata;
