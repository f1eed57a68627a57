//! Single-line text input for the interactive prompt.

/// Text the visitor is typing at the prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    buffer: String,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character. Control characters are dropped.
    pub fn push(&mut self, c: char) {
        if !c.is_control() {
            self.buffer.push(c);
        }
    }

    /// Remove the last character, if any.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// The input with surrounding whitespace removed, or `None` when
    /// nothing but whitespace was typed.
    pub fn submission(&self) -> Option<&str> {
        let trimmed = self.buffer.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}
