//! Typewriter effect: reveals a line one character per tick.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }

    /// Reveal one more character. Returns false once everything is shown.
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.shown += 1;
        true
    }

    pub fn restart(&mut self) {
        self.shown = 0;
    }

    pub fn is_complete(&self) -> bool {
        self.shown >= self.text.chars().count()
    }

    /// The revealed prefix, always cut on a char boundary.
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }
}
