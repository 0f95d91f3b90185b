//! Keyword classification of chat prompts.
//!
//! Pure substring matching on the lowercased prompt. Checks run in a fixed
//! priority order and the first hit wins; anything unmatched is `AppendPrompt`.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

const DELETE_KEYWORDS: &[&str] = &["削除", "消して", "delete", "remove"];
const ADD_SLIDE_KEYWORDS: &[&str] = &["追加", "add"];
const TITLE_KEYWORDS: &[&str] = &["タイトル", "title"];
const CHANGE_KEYWORDS: &[&str] = &["変更", "change"];
const BULLET_KEYWORDS: &[&str] = &["箇条書き", "内容", "bullet"];

/// Separators between the command and the new title, e.g. `change title → Goals`.
const TITLE_SEPARATORS: &[&str] = &["→", "->"];

static BULLET_KEYWORD_STRIPPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(BULLET_KEYWORDS)
        .expect("Failed to build bullet keyword matcher")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchIntent {
    DeleteLastSlide,
    AddSlide,
    /// `None` when no usable title follows a separator.
    RetitleLastSlide(Option<String>),
    /// `None` when nothing remains once the keywords are stripped.
    AddBullet(Option<String>),
    AppendPrompt,
}

pub fn classify(prompt: &str) -> PatchIntent {
    let lowered = prompt.to_lowercase();

    if contains_any(&lowered, DELETE_KEYWORDS) {
        PatchIntent::DeleteLastSlide
    } else if contains_any(&lowered, ADD_SLIDE_KEYWORDS) {
        PatchIntent::AddSlide
    } else if contains_any(&lowered, TITLE_KEYWORDS) && contains_any(&lowered, CHANGE_KEYWORDS) {
        PatchIntent::RetitleLastSlide(title_after_separator(prompt))
    } else if contains_any(&lowered, BULLET_KEYWORDS) {
        PatchIntent::AddBullet(bullet_text(prompt))
    } else {
        PatchIntent::AppendPrompt
    }
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

/// Text after the earliest separator, trimmed. Case is preserved.
fn title_after_separator(prompt: &str) -> Option<String> {
    let (pos, len) = TITLE_SEPARATORS
        .iter()
        .filter_map(|sep| prompt.find(sep).map(|pos| (pos, sep.len())))
        .min()?;

    let title = prompt[pos + len..].trim();
    (!title.is_empty()).then(|| title.to_string())
}

fn bullet_text(prompt: &str) -> Option<String> {
    let empties = vec![""; BULLET_KEYWORDS.len()];
    let stripped = BULLET_KEYWORD_STRIPPER.replace_all(prompt, &empties[..]);
    let text = stripped.trim().trim_start_matches([':', '：']).trim();
    (!text.is_empty()).then(|| text.to_string())
}
