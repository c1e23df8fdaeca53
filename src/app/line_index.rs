/// Count of newline characters strictly before `offset`.
///
/// This is the 0-based number of the line containing the cursor. Pure and
/// O(offset); offsets past the end of the text are clamped.
pub fn line_number_at(text: &str, offset: usize) -> usize {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count()
}

/// The content of line `line_number` (0-based), without its newline.
///
/// Returns the empty string if the line number is out of range, so callers
/// never have to special-case boundary lines.
pub fn line_at(text: &str, line_number: usize) -> &str {
    text.split('\n').nth(line_number).unwrap_or("")
}

/// Byte offset of the first character of line `line_number` (0-based).
///
/// Out-of-range line numbers return the text length.
pub fn line_start(text: &str, line_number: usize) -> usize {
    if line_number == 0 {
        return 0;
    }
    let mut seen = 0;
    for (i, b) in text.bytes().enumerate() {
        if b == b'\n' {
            seen += 1;
            if seen == line_number {
                return i + 1;
            }
        }
    }
    text.len()
}
