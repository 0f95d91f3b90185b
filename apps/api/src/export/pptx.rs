//! Slide list to `.pptx`.
//!
//! Package writing is delegated to `ppt-rs` with its default template and the
//! "Title and Content" layout. This module only maps `Slide` onto the
//! library's `SlideContent`; the first bullet (the message line) is bold.

use std::io::{Seek, Write};

use ppt_rs::{create_pptx_with_content_to_writer, BulletPoint, SlideContent, SlideLayout};
use thiserror::Error;

use crate::export::text::sanitize_text;
use crate::models::Slide;

/// MIME type of a finished `.pptx` file.
pub const PPTX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// Deck title used when there is no first slide to take it from.
const UNTITLED_DECK: &str = "Presentation";

#[derive(Debug, Error)]
pub enum PptxError {
    #[error("Presentation library error: {0}")]
    Library(#[from] ppt_rs::PptxError),
}

/// Writes the package for `slides` into `writer` and hands it back.
pub fn write_deck<W: Write + Seek>(slides: &[Slide], writer: W) -> Result<W, PptxError> {
    let contents: Vec<SlideContent> = slides.iter().map(slide_content).collect();
    let title = deck_title(slides);

    Ok(create_pptx_with_content_to_writer(
        writer, &title, &contents, None,
    )?)
}

pub fn slide_content(slide: &Slide) -> SlideContent {
    let mut content =
        SlideContent::new(&sanitize_text(&slide.title)).layout(SlideLayout::TitleAndContent);

    for (index, bullet) in slide.bullets.iter().enumerate() {
        let text = sanitize_text(bullet);
        let point = BulletPoint::new(&text);
        content
            .bullets
            .push(if index == 0 { point.bold() } else { point });
        content.content.push(text.into_owned());
    }

    content
}

fn deck_title(slides: &[Slide]) -> String {
    slides
        .first()
        .map(|s| sanitize_text(s.title.trim()).into_owned())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED_DECK.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    fn deck() -> Vec<Slide> {
        vec![
            Slide::new("自己紹介", vec!["Backend engineer".to_string()]),
            Slide::new(
                "Strengths & <Skills>",
                vec!["Ships fast".to_string(), "Writes tests".to_string()],
            ),
            Slide::new("Summary", vec![]),
        ]
    }

    fn write(slides: &[Slide]) -> ZipArchive<Cursor<Vec<u8>>> {
        let cursor = write_deck(slides, Cursor::new(Vec::new())).unwrap();
        ZipArchive::new(Cursor::new(cursor.into_inner())).unwrap()
    }

    fn read_part(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
        let mut content = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    /// Run properties of the `<a:r>` that carries `text`.
    fn run_props<'a>(xml: &'a str, text: &str) -> &'a str {
        let at = xml.find(text).unwrap();
        let start = xml[..at].rfind("<a:rPr").unwrap();
        &xml[start..at]
    }

    #[test]
    fn test_slide_content_keeps_title_and_bullet_order() {
        let content = slide_content(&deck()[1]);
        assert_eq!(content.title, "Strengths & <Skills>");
        let texts: Vec<_> = content.bullets.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["Ships fast", "Writes tests"]);
        assert_eq!(content.content, vec!["Ships fast", "Writes tests"]);
    }

    #[test]
    fn test_only_first_bullet_is_bold() {
        let content = slide_content(&deck()[1]);
        assert!(content.bullets[0].format.as_ref().is_some_and(|f| f.bold));
        assert!(content.bullets[1].format.is_none());
    }

    #[test]
    fn test_control_characters_are_dropped_before_hand_off() {
        let content = slide_content(&Slide::new("A\u{1}B", vec!["x\u{0}y".to_string()]));
        assert_eq!(content.title, "AB");
        assert_eq!(content.bullets[0].text, "xy");
    }

    #[test]
    fn test_deck_title_falls_back_for_blank_or_empty() {
        assert_eq!(deck_title(&deck()), "自己紹介");
        assert_eq!(deck_title(&[Slide::new("  ", vec![])]), UNTITLED_DECK);
        assert_eq!(deck_title(&[]), UNTITLED_DECK);
    }

    #[test]
    fn test_package_has_one_slide_part_per_slide() {
        let slides = deck();
        let mut archive = write(&slides);

        let slide_parts = archive
            .file_names()
            .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
            .count();
        assert_eq!(slide_parts, slides.len());

        let presentation = read_part(&mut archive, "ppt/presentation.xml");
        assert_eq!(presentation.matches("<p:sldId ").count(), slides.len());
    }

    #[test]
    fn test_written_slide_is_escaped_and_first_bullet_bold() {
        let mut archive = write(&deck());
        let slide = read_part(&mut archive, "ppt/slides/slide2.xml");

        assert!(slide.contains("Strengths &amp; &lt;Skills&gt;"));
        assert!(run_props(&slide, "Ships fast").contains(r#"b="1""#));
        assert!(run_props(&slide, "Writes tests").contains(r#"b="0""#));
    }

    #[test]
    fn test_slide_without_bullets_has_no_body() {
        let mut archive = write(&deck());
        let slide = read_part(&mut archive, "ppt/slides/slide3.xml");
        assert!(slide.contains("Summary"));
        assert!(!slide.contains(r#"name="Content""#));
    }

    #[test]
    fn test_empty_deck_is_still_a_package() {
        let mut archive = write(&[]);
        let presentation = read_part(&mut archive, "ppt/presentation.xml");
        assert_eq!(presentation.matches("<p:sldId ").count(), 0);
        assert!(presentation.contains(r#"cx="9144000" cy="6858000""#));
    }
}
