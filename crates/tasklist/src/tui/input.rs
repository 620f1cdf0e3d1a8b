use unicode_segmentation::UnicodeSegmentation;

/// Single-line text buffer with a grapheme-based cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct TextInput {
    value: String,
    /// Cursor position counted in grapheme clusters.
    cursor: usize,
}

impl TextInput {
    pub(super) fn value(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub(super) const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text to the left of the cursor.
    pub(super) fn before_cursor(&self) -> &str {
        &self.value[..self.byte_offset(self.cursor)]
    }

    /// Replace the contents and move the cursor to the end.
    pub(super) fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.len();
    }

    pub(super) fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub(super) fn insert_char(&mut self, ch: char) {
        let offset = self.byte_offset(self.cursor);
        self.value.insert(offset, ch);
        // A combining mark merges into the previous cluster, so recount.
        let before: usize = self.value[..offset + ch.len_utf8()].graphemes(true).count();
        self.cursor = before;
    }

    pub(super) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
    }

    pub(super) fn delete(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.value.replace_range(start..end, "");
    }

    pub(super) const fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(super) fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub(super) const fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(super) fn move_end(&mut self) {
        self.cursor = self.len();
    }

    fn len(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn byte_offset(&self, graphemes: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(graphemes)
            .map_or(self.value.len(), |(offset, _)| offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::default();
        for ch in text.chars() {
            input.insert_char(ch);
        }
        input
    }

    #[test]
    fn typing_appends_at_cursor() {
        let input = typed("milk");
        assert_eq!(input.value(), "milk");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut input = typed("mlk");
        input.move_home();
        input.move_right();
        input.insert_char('i');
        assert_eq!(input.value(), "milk");
        assert_eq!(input.cursor(), 2);
        assert_eq!(input.before_cursor(), "mi");
    }

    #[test]
    fn backspace_and_delete_remove_whole_graphemes() {
        let mut input = TextInput::default();
        input.set("ae\u{0301}b");
        assert_eq!(input.cursor(), 3);

        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor(), 1);

        input.move_home();
        input.delete();
        assert_eq!(input.value(), "b");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn edits_at_bounds_are_noops() {
        let mut input = typed("x");
        input.delete();
        assert_eq!(input.value(), "x");
        input.move_home();
        input.backspace();
        input.move_left();
        assert_eq!(input.value(), "x");
        assert_eq!(input.cursor(), 0);
        input.move_end();
        input.move_right();
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn handles_multibyte_text() {
        let mut input = typed("あいう");
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "あう");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }
}
