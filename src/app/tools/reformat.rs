use serde_json::Value;

use crate::app::buffer::Buffer;
use crate::app::error::Result;

/// Re-serialize the buffer as canonically indented JSON (2-space indent).
///
/// On a parse failure the buffer is left untouched and the parser's message
/// propagates to the dispatch boundary.
pub fn apply(buffer: &mut Buffer) -> Result<()> {
    let value: Value = serde_json::from_str(&buffer.text)?;
    let formatted = serde_json::to_string_pretty(&value)?;
    buffer.replace_text(formatted);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reformats_compact_object() {
        let mut buffer = Buffer::with_text(r#"{"a":1}"#);
        apply(&mut buffer).unwrap();
        assert_eq!(buffer.text, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_round_trip_preserves_value() {
        let input = r#"{"b":[1,2,{"c":null}],"a":"x"}"#;
        let mut buffer = Buffer::with_text(input);
        apply(&mut buffer).unwrap();

        let before: Value = serde_json::from_str(input).unwrap();
        let after: Value = serde_json::from_str(&buffer.text).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_reformat_is_idempotent() {
        let mut buffer = Buffer::with_text(r#"[1, 2,   3]"#);
        apply(&mut buffer).unwrap();
        let once = buffer.text.clone();
        apply(&mut buffer).unwrap();
        assert_eq!(buffer.text, once);
    }

    #[test]
    fn test_malformed_input_leaves_buffer_untouched() {
        let mut buffer = Buffer::with_text("{a:");
        buffer.cursor = 2;
        let err = apply(&mut buffer).unwrap_err();
        assert_eq!(buffer.text, "{a:");
        assert_eq!(buffer.cursor, 2);
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_cursor_clamped_into_new_text() {
        let mut buffer = Buffer::with_text(r#"{"key":"a very long string value"}"#);
        buffer.cursor = buffer.text.len();
        apply(&mut buffer).unwrap();
        assert!(buffer.cursor <= buffer.text.len());
    }
}
