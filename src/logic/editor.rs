//! Text area editing
//!
//! The cursor is a char index into the text (0..=char count).

use unicode_width::UnicodeWidthStr;

/// Byte offset of a char-index cursor
pub fn byte_offset(text: &str, cursor: usize) -> usize {
    text.char_indices()
        .nth(cursor)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Insert a char at the cursor, returning the new cursor
pub fn insert_char(text: &mut String, cursor: usize, c: char) -> usize {
    let cursor = cursor.min(text.chars().count());
    text.insert(byte_offset(text, cursor), c);
    cursor + 1
}

/// Insert a whole string at the cursor (paste), returning the new cursor
pub fn insert_str(text: &mut String, cursor: usize, s: &str) -> usize {
    let cursor = cursor.min(text.chars().count());
    text.insert_str(byte_offset(text, cursor), s);
    cursor + s.chars().count()
}

/// Delete the char before the cursor (Backspace), returning the new cursor
pub fn delete_before(text: &mut String, cursor: usize) -> usize {
    let cursor = cursor.min(text.chars().count());
    if cursor == 0 {
        return 0;
    }
    text.remove(byte_offset(text, cursor - 1));
    cursor - 1
}

/// Delete the char under the cursor (Delete)
pub fn delete_at(text: &mut String, cursor: usize) {
    if cursor < text.chars().count() {
        text.remove(byte_offset(text, cursor));
    }
}

pub fn move_left(cursor: usize) -> usize {
    cursor.saturating_sub(1)
}

pub fn move_right(text: &str, cursor: usize) -> usize {
    (cursor + 1).min(text.chars().count())
}

/// Cursor position as (row, display column) for drawing the terminal cursor
pub fn cursor_position(text: &str, cursor: usize) -> (u16, u16) {
    let before = &text[..byte_offset(text, cursor)];
    let row = before.matches('\n').count();
    let line = before.rsplit('\n').next().unwrap_or("");
    (row as u16, line.width() as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_delete() {
        let mut text = String::new();
        let mut cursor = 0;
        for c in "hi!".chars() {
            cursor = insert_char(&mut text, cursor, c);
        }
        assert_eq!(text, "hi!");
        assert_eq!(cursor, 3);

        cursor = delete_before(&mut text, cursor);
        assert_eq!(text, "hi");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_insert_in_middle_with_multibyte() {
        let mut text = "héllo".to_string();
        let cursor = insert_char(&mut text, 2, 'X');
        assert_eq!(text, "héXllo");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut text = "abc".to_string();
        assert_eq!(delete_before(&mut text, 0), 0);
        assert_eq!(text, "abc");
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut text = "abc".to_string();
        delete_at(&mut text, 3);
        assert_eq!(text, "abc");
        delete_at(&mut text, 0);
        assert_eq!(text, "bc");
    }

    #[test]
    fn test_paste() {
        let mut text = "ab".to_string();
        let cursor = insert_str(&mut text, 1, "ZZ");
        assert_eq!(text, "aZZb");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn test_cursor_moves_are_clamped() {
        assert_eq!(move_left(0), 0);
        assert_eq!(move_right("ab", 2), 2);
        assert_eq!(move_right("ab", 1), 2);
    }

    #[test]
    fn test_cursor_position_across_lines() {
        let text = "first\nsecond";
        assert_eq!(cursor_position(text, 0), (0, 0));
        assert_eq!(cursor_position(text, 5), (0, 5));
        assert_eq!(cursor_position(text, 6), (1, 0));
        assert_eq!(cursor_position(text, 12), (1, 6));
    }

    #[test]
    fn test_cursor_position_wide_chars() {
        // CJK characters take two columns
        assert_eq!(cursor_position("日本", 2), (0, 4));
    }
}
