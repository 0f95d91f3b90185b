pub mod slide;

pub use slide::{Section, Slide, SlidesState};
