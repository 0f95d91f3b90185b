//! Pluggable deck generator over entry-sheet sections.
//!
//! Default: `RuleBasedGenerator` (pure-Rust, deterministic, fully testable).
//! A model-backed generator can implement the same trait later.
//!
//! `AppState` holds an `Arc<dyn SlideGenerator>`, chosen at startup.

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::generation::rules::build_deck;
use crate::models::{Section, Slide};

/// The generator trait. Implement this to swap backends without touching
/// the endpoint or handler code.
#[async_trait]
pub trait SlideGenerator: Send + Sync {
    async fn generate(&self, sections: &[Section]) -> Result<Vec<Slide>, AppError>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}

/// Splits sections into slides with fixed delimiter rules. No I/O.
pub struct RuleBasedGenerator;

#[async_trait]
impl SlideGenerator for RuleBasedGenerator {
    async fn generate(&self, sections: &[Section]) -> Result<Vec<Slide>, AppError> {
        let slides = build_deck(sections);
        debug!(
            "Rule-based generation: {} sections -> {} slides",
            sections.len(),
            slides.len()
        );
        Ok(slides)
    }

    fn backend(&self) -> &'static str {
        "rules"
    }
}
