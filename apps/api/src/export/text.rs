use std::borrow::Cow;

/// Drops control characters that XML 1.0 cannot carry at all. Tab, LF and CR
/// are kept. Escaping of `&`, `<` and friends is left to the presentation
/// library.
pub fn sanitize_text(s: &str) -> Cow<'_, str> {
    if s.chars().any(is_forbidden_char) {
        Cow::Owned(s.chars().filter(|c| !is_forbidden_char(*c)).collect())
    } else {
        Cow::Borrowed(s)
    }
}

fn is_forbidden_char(c: char) -> bool {
    c.is_control() && !matches!(c, '\t' | '\n' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_japanese_text_is_borrowed() {
        assert!(matches!(sanitize_text("自己PR 💡"), Cow::Borrowed("自己PR 💡")));
    }

    #[test]
    fn test_special_characters_are_left_for_the_library() {
        assert_eq!(sanitize_text("a & <b>"), "a & <b>");
    }

    #[test]
    fn test_drops_control_characters() {
        assert_eq!(sanitize_text("bell\u{7}ring"), "bellring");
        assert_eq!(sanitize_text("tab\tok\r\n"), "tab\tok\r\n");
    }
}
