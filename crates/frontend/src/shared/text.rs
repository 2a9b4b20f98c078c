//! Text helpers for long descriptions and answers

/// Chars shown in a muted style right after the visible prefix
pub const PREVIEW_LEN: usize = 10;

/// How a possibly long text is shown before the reader asks for more
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reveal {
    /// Short enough, shown as is
    Whole(String),
    /// First `max` chars plus a faded preview of what follows
    Truncated { visible: String, preview: String },
}

/// Split `text` for a "Ver más" control. Lengths are counted in chars.
pub fn truncate_for_reveal(text: &str, max: usize) -> Reveal {
    if text.chars().count() <= max {
        return Reveal::Whole(text.to_string());
    }
    let visible: String = text.chars().take(max).collect();
    let preview: String = text.chars().skip(max).take(PREVIEW_LEN).collect();
    Reveal::Truncated { visible, preview }
}

/// Left and right halves of a list; the left one gets the extra element.
pub fn split_columns<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at((items.len() + 1) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_whole() {
        assert_eq!(truncate_for_reveal("hola", 4), Reveal::Whole("hola".into()));
        assert_eq!(truncate_for_reveal("", 0), Reveal::Whole(String::new()));
    }

    #[test]
    fn test_long_text_is_truncated_with_preview() {
        let text = "abcdefghijklmnopqrstuvwxyz";
        assert_eq!(
            truncate_for_reveal(text, 5),
            Reveal::Truncated {
                visible: "abcde".into(),
                preview: "fghijklmno".into(),
            }
        );
    }

    #[test]
    fn test_preview_shorter_than_limit() {
        assert_eq!(
            truncate_for_reveal("abcdefg", 5),
            Reveal::Truncated {
                visible: "abcde".into(),
                preview: "fg".into(),
            }
        );
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // 6 chars, 8 bytes
        let text = "cámará";
        assert_eq!(truncate_for_reveal(text, 6), Reveal::Whole(text.into()));
        assert_eq!(
            truncate_for_reveal(text, 3),
            Reveal::Truncated {
                visible: "cám".into(),
                preview: "ará".into(),
            }
        );
    }

    #[test]
    fn test_split_columns() {
        let items = [1, 2, 3, 4, 5];
        let (left, right) = split_columns(&items);
        assert_eq!(left, &[1, 2, 3]);
        assert_eq!(right, &[4, 5]);

        let even = [1, 2, 3, 4];
        assert_eq!(split_columns(&even), (&even[..2], &even[2..]));

        let empty: [i32; 0] = [];
        let (left, right) = split_columns(&empty);
        assert!(left.is_empty() && right.is_empty());
    }

    #[test]
    fn test_split_preserves_order() {
        let items: Vec<usize> = (0..7).collect();
        let (left, right) = split_columns(&items);
        assert_eq!(left.len(), 4);
        let joined: Vec<usize> = left.iter().chain(right).copied().collect();
        assert_eq!(joined, items);
    }
}
