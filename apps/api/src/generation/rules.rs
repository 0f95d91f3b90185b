//! Rule-based deck construction: one title slide, one content slide per
//! non-empty section, and a fixed closing summary slide.

use crate::models::{Section, Slide};

/// Hard cap on bullets per content slide.
pub const MAX_BULLETS: usize = 5;
/// Bullets longer than this (in chars) are cut and end with `…`.
pub const MAX_BULLET_CHARS: usize = 80;

pub const SUMMARY_TITLE: &str = "Summary";
pub const SUMMARY_BULLETS: &[&str] = &["Key takeaways", "Thank you for listening"];

const DEFAULT_DECK_TITLE: &str = "Self Introduction";

const LIST_MARKERS: &[char] = &['-', '*', '・', '•', '●', '■', '◆'];

/// Builds the full deck for the given sections.
///
/// The first section always yields the title slide. Later sections with blank
/// content are skipped. The summary slide is appended unconditionally, so an
/// empty input yields just that slide.
pub fn build_deck(sections: &[Section]) -> Vec<Slide> {
    let mut slides = Vec::with_capacity(sections.len() + 1);

    if let Some((first, rest)) = sections.split_first() {
        slides.push(title_slide(first));

        for section in rest {
            if section.content.trim().is_empty() {
                continue;
            }
            let position = slides.len() + 1;
            slides.push(content_slide(section, position));
        }
    }

    slides.push(summary_slide());
    slides
}

/// Title slide: the section title plus at most one subtitle line.
pub fn title_slide(section: &Section) -> Slide {
    let title = non_blank(&section.title).unwrap_or(DEFAULT_DECK_TITLE);
    let subtitle = section
        .content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(truncate_bullet);

    Slide::new(title, subtitle.into_iter().collect())
}

/// Content slide for the section at 1-based deck `position`.
pub fn content_slide(section: &Section, position: usize) -> Slide {
    let title = match non_blank(&section.title) {
        Some(title) => title.to_string(),
        None => format!("Slide {position}"),
    };
    Slide::new(title, extract_bullets(&section.content))
}

pub fn summary_slide() -> Slide {
    Slide::new(
        SUMMARY_TITLE,
        SUMMARY_BULLETS.iter().map(|b| b.to_string()).collect(),
    )
}

/// Splits prose into at most `MAX_BULLETS` bullet strings.
///
/// Breaks on line endings and sentence terminators. Periods are dropped from
/// the bullet, `!` and `?` (ASCII and full-width) are kept.
pub fn extract_bullets(text: &str) -> Vec<String> {
    split_fragments(text)
        .into_iter()
        .map(strip_list_marker)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(truncate_bullet)
        .take(MAX_BULLETS)
        .collect()
}

fn split_fragments(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        let end = idx + ch.len_utf8();
        // (fragment end, next fragment start)
        let cut = match ch {
            '\n' | '\r' | '。' | '．' => Some((idx, end)),
            '!' | '?' | '！' | '？' => Some((end, end)),
            '.' => {
                let at_boundary = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
                // "1. First point" is a list marker, not a sentence end
                let is_ordinal = {
                    let pending = text[start..idx].trim();
                    !pending.is_empty() && pending.chars().all(|c| c.is_ascii_digit())
                };
                (at_boundary && !is_ordinal).then_some((idx, end))
            }
            _ => None,
        };

        if let Some((fragment_end, next_start)) = cut {
            fragments.push(&text[start..fragment_end]);
            start = next_start;
        }
    }

    if start < text.len() {
        fragments.push(&text[start..]);
    }
    fragments
}

fn strip_list_marker(fragment: &str) -> &str {
    let trimmed = fragment.trim_start();

    if let Some(rest) = trimmed.strip_prefix(LIST_MARKERS) {
        return rest;
    }

    let after_digits = trimmed.trim_start_matches(|c: char| c.is_ascii_digit());
    if after_digits.len() == trimmed.len() {
        return trimmed;
    }
    if let Some(rest) = after_digits.strip_prefix(')') {
        return rest;
    }
    match after_digits.strip_prefix('.') {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest,
        _ => trimmed,
    }
}

fn truncate_bullet(text: &str) -> String {
    if text.chars().count() <= MAX_BULLET_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(MAX_BULLET_CHARS - 1).collect();
    cut.push('…');
    cut
}

fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
