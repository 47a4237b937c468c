//! Display-width measurement and padding.

use unicode_width::UnicodeWidthStr;

/// Terminal display width of `text`.
///
/// East-Asian wide and fullwidth glyphs count as 2 columns, zero-width
/// and combining characters as 0, everything else as 1. Raw character
/// count would misalign mixed-script tables.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Pad `text` on the left with spaces up to `width` display columns.
///
/// Text already at or beyond `width` is returned unchanged.
pub(crate) fn pad_left(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    format!("{}{text}", " ".repeat(padding))
}

/// Pad `text` on the right with spaces up to `width` display columns.
///
/// Text already at or beyond `width` is returned unchanged.
pub(crate) fn pad_right(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(padding))
}

/// Maximum display width of each column across all rows.
///
/// Sized to the header row's column count. A row too short to reach a
/// column contributes an empty cell, never an error.
#[must_use]
pub fn column_widths(rows: &[Vec<String>]) -> Vec<usize> {
    let columns = rows.first().map_or(0, Vec::len);
    (0..columns)
        .map(|column| {
            rows.iter()
                .map(|row| row.get(column).map_or(0, |cell| display_width(cell)))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_ascii() {
        assert_eq!(display_width("Name"), 4);
    }

    #[test]
    fn test_display_width_fullwidth() {
        assert_eq!(display_width("漢字"), 4);
    }

    #[test]
    fn test_display_width_combining() {
        // 'e' followed by a combining acute accent occupies one column.
        assert_eq!(display_width("e\u{301}"), 1);
    }

    #[test]
    fn test_pad_left() {
        assert_eq!(pad_left("30", 3), " 30");
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("Al", 4), "Al  ");
    }

    #[test]
    fn test_pad_measures_display_width_not_chars() {
        // One fullwidth char is two columns wide, so it gets one fewer
        // space than a one-column ASCII char at the same target width.
        assert_eq!(pad_right("漢", 3), "漢 ");
        assert_eq!(pad_right("a", 3), "a  ");
    }

    #[test]
    fn test_pad_overflowing_text_unchanged() {
        assert_eq!(pad_left("overflow", 3), "overflow");
        assert_eq!(pad_right("overflow", 3), "overflow");
    }

    #[test]
    fn test_column_widths_takes_maximum() {
        let rows = vec![
            vec!["Name".to_owned(), "Age".to_owned()],
            vec!["Al".to_owned(), "30".to_owned()],
            vec!["Bo".to_owned(), "5".to_owned()],
        ];
        assert_eq!(column_widths(&rows), vec![4, 3]);
    }

    #[test]
    fn test_column_widths_short_rows_measure_as_empty() {
        let rows = vec![
            vec!["a".to_owned(), "header".to_owned()],
            vec!["longer".to_owned()],
        ];
        assert_eq!(column_widths(&rows), vec![6, 6]);
    }

    #[test]
    fn test_column_widths_sized_to_header() {
        let rows = vec![
            vec!["a".to_owned()],
            vec!["b".to_owned(), "trailing".to_owned()],
        ];
        assert_eq!(column_widths(&rows), vec![1]);
    }

    #[test]
    fn test_column_widths_empty() {
        assert_eq!(column_widths(&[]), Vec::<usize>::new());
    }
}
