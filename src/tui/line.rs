use crate::util::unicode;

/// A single-line text field with a byte-offset cursor that always sits
/// on a grapheme boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
    cursor: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer holding `text` with the cursor at the end
    pub fn with_text(text: &str) -> Self {
        let text = unicode::sanitize_line(text);
        let cursor = text.len();
        LineBuffer { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Cursor position in terminal cells
    pub fn cursor_col(&self) -> usize {
        unicode::byte_offset_to_display_col(&self.text, self.cursor)
    }

    pub fn insert_char(&mut self, c: char) {
        let c = if c.is_control() { ' ' } else { c };
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text; line breaks and other controls become spaces
    pub fn insert_str(&mut self, s: &str) {
        let clean = unicode::sanitize_line(&s.replace("\r\n", "\n"));
        self.text.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    /// Delete the word before the cursor
    pub fn delete_word_back(&mut self) {
        let start = unicode::word_boundary_left(&self.text, self.cursor);
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Take the contents, leaving the buffer empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> LineBuffer {
        let mut buf = LineBuffer::new();
        for c in s.chars() {
            buf.insert_char(c);
        }
        buf
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut buf = typed("helo");
        buf.move_left();
        buf.insert_char('l');
        assert_eq!(buf.text(), "hello");
        assert_eq!(buf.cursor(), 4);
    }

    #[test]
    fn backspace_and_delete_by_grapheme() {
        let mut buf = LineBuffer::with_text("cafe\u{0301}s");
        buf.move_left();
        buf.backspace();
        assert_eq!(buf.text(), "cafs");
        buf.home();
        buf.delete();
        assert_eq!(buf.text(), "afs");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut buf = typed("ab");
        buf.home();
        buf.backspace();
        assert_eq!(buf.text(), "ab");
    }

    #[test]
    fn paste_flattens_newlines() {
        let mut buf = LineBuffer::new();
        buf.insert_str("one\r\ntwo\nthree");
        assert_eq!(buf.text(), "one two three");
        assert_eq!(buf.cursor(), buf.text().len());
    }

    #[test]
    fn delete_word_back() {
        let mut buf = typed("buy some milk");
        buf.delete_word_back();
        assert_eq!(buf.text(), "buy some ");
    }

    #[test]
    fn take_empties() {
        let mut buf = typed("x");
        assert_eq!(buf.take(), "x");
        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn cursor_col_counts_cells() {
        let buf = LineBuffer::with_text("你好");
        assert_eq!(buf.cursor_col(), 4);
    }
}
