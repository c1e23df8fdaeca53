use super::line_index::line_number_at;

/// The live text content plus cursor state being edited.
///
/// The cursor is a byte offset into `text`. Invariant: `cursor <= text.len()`
/// and the cursor always sits on a char boundary. Every edit that inserts or
/// removes N bytes before the cursor must shift it by exactly N; a violation
/// is a defect in the edit engine, not a recoverable condition, so [`apply`]
/// asserts.
///
/// [`apply`]: Buffer::apply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    pub text: String,
    pub cursor: usize,
    pub selection_end: Option<usize>,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `text` with the cursor at the start.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
            selection_end: None,
        }
    }

    /// Apply the `(new_text, new_offset)` result of an edit operation.
    pub fn apply(&mut self, edit: (String, usize)) {
        let (text, cursor) = edit;
        assert!(
            cursor <= text.len() && text.is_char_boundary(cursor),
            "edit produced an out-of-bounds cursor: {} in {} bytes",
            cursor,
            text.len()
        );
        self.text = text;
        self.cursor = cursor;
        self.selection_end = None;
    }

    /// Replace the whole text, keeping the cursor's apparent position where
    /// possible by clamping it into the new text.
    pub fn replace_text(&mut self, text: String) {
        let mut cursor = self.cursor.min(text.len());
        while cursor > 0 && !text.is_char_boundary(cursor) {
            cursor -= 1;
        }
        self.text = text;
        self.cursor = cursor;
        self.selection_end = None;
    }

    /// 0-based number of the line containing the cursor.
    pub fn line_number(&self) -> usize {
        line_number_at(&self.text, self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_moves_cursor() {
        let mut buffer = Buffer::with_text("hello");
        buffer.apply(("hello world".to_string(), 11));
        assert_eq!(buffer.text, "hello world");
        assert_eq!(buffer.cursor, 11);
    }

    #[test]
    fn test_apply_clears_selection() {
        let mut buffer = Buffer::with_text("hello");
        buffer.selection_end = Some(3);
        buffer.apply(("hello".to_string(), 2));
        assert_eq!(buffer.selection_end, None);
    }

    #[test]
    #[should_panic]
    fn test_apply_rejects_out_of_bounds_cursor() {
        let mut buffer = Buffer::new();
        buffer.apply(("ab".to_string(), 3));
    }

    #[test]
    #[should_panic]
    fn test_apply_rejects_mid_char_cursor() {
        let mut buffer = Buffer::new();
        buffer.apply(("é".to_string(), 1));
    }

    #[test]
    fn test_replace_text_clamps_cursor() {
        let mut buffer = Buffer::with_text("a long line of text");
        buffer.cursor = 15;
        buffer.replace_text("short".to_string());
        assert_eq!(buffer.cursor, 5);
    }

    #[test]
    fn test_replace_text_keeps_cursor_in_range() {
        let mut buffer = Buffer::with_text("hello");
        buffer.cursor = 3;
        buffer.replace_text("hello world".to_string());
        assert_eq!(buffer.cursor, 3);
    }

    #[test]
    fn test_replace_text_respects_char_boundaries() {
        let mut buffer = Buffer::with_text("abcdef");
        buffer.cursor = 5;
        // New text has a 3-byte char spanning bytes 3..6
        buffer.replace_text("abc\u{4e16}".to_string());
        assert_eq!(buffer.cursor, 3);
    }

    #[test]
    fn test_line_number_follows_cursor() {
        let mut buffer = Buffer::with_text("one\ntwo\nthree");
        buffer.cursor = 0;
        assert_eq!(buffer.line_number(), 0);
        buffer.cursor = 5;
        assert_eq!(buffer.line_number(), 1);
        buffer.cursor = buffer.text.len();
        assert_eq!(buffer.line_number(), 2);
    }
}
