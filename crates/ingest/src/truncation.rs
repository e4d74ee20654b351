/// Character-based truncation.
///
/// Limits are counted in characters, not bytes, so a multibyte document
/// is never cut inside a code point and a document of exactly `max_chars`
/// characters passes through unmarked.
pub fn truncate_chars(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        None => (text.to_string(), false),
        Some((byte_idx, _)) => (text[..byte_idx].to_string(), true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_truncation_when_under_limit() {
        let (result, truncated) = truncate_chars("hello world", 100);
        assert_eq!(result, "hello world");
        assert!(!truncated);
    }

    #[test]
    fn exactly_at_limit_is_not_truncated() {
        let text = "a".repeat(6_000);
        let (result, truncated) = truncate_chars(&text, 6_000);
        assert_eq!(result.len(), 6_000);
        assert!(!truncated);
    }

    #[test]
    fn one_char_over_is_cut_to_exactly_the_limit() {
        let text = "a".repeat(6_001);
        let (result, truncated) = truncate_chars(&text, 6_000);
        assert!(truncated);
        assert_eq!(result.chars().count(), 6_000);
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundaries() {
        let text = "é".repeat(10);
        let (result, truncated) = truncate_chars(&text, 4);
        assert!(truncated);
        assert_eq!(result.chars().count(), 4);
        assert_eq!(result, "éééé");
    }
}
