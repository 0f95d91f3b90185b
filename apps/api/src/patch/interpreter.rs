//! Applies a classified chat prompt to the whole slide list.
//!
//! Every prompt maps to some mutation; there is no rejection path. Operations
//! that target the last slide are no-ops on an empty list.

use tracing::debug;

use crate::models::Slide;
use crate::patch::intent::{classify, PatchIntent};

pub const NEW_SLIDE_TITLE: &str = "New Slide";
pub const NEW_SLIDE_BULLET: &str = "Edit this content";

/// Returns the new slide list for `prompt` applied to `slides`.
pub fn apply_patch(mut slides: Vec<Slide>, prompt: &str) -> Vec<Slide> {
    let intent = classify(prompt);
    debug!("Patch intent {:?} on {} slides", intent, slides.len());

    match intent {
        PatchIntent::DeleteLastSlide => {
            slides.pop();
        }
        PatchIntent::AddSlide => {
            slides.push(placeholder_slide());
        }
        PatchIntent::RetitleLastSlide(Some(title)) => {
            if let Some(last) = slides.last_mut() {
                last.title = title;
            }
        }
        PatchIntent::RetitleLastSlide(None) | PatchIntent::AddBullet(None) => {}
        PatchIntent::AddBullet(Some(text)) => push_bullet(&mut slides, text),
        PatchIntent::AppendPrompt => push_bullet(&mut slides, prompt.to_string()),
    }

    slides
}

pub fn placeholder_slide() -> Slide {
    Slide::new(NEW_SLIDE_TITLE, vec![NEW_SLIDE_BULLET.to_string()])
}

fn push_bullet(slides: &mut [Slide], text: String) {
    if let Some(last) = slides.last_mut() {
        last.bullets.push(text);
    }
}
