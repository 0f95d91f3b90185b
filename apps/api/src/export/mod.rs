// Presentation export: slide mapping onto ppt-rs and the local export directory.

pub mod handlers;
pub mod pptx;
pub mod store;
pub mod text;
