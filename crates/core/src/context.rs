//! Group context stack.
//!
//! One frame per open brace. A frame records the control word that opened
//! the group's scope (`fonttbl`, `pict`, `rtf1`, ...), or stays unnamed when
//! the group holds only text.

/// LIFO stack of open groups.
#[derive(Debug, Default, Clone)]
pub struct ContextStack {
    frames: Vec<String>,
}

impl ContextStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a frame.
    pub fn push(&mut self, name: impl Into<String>) {
        self.frames.push(name.into());
    }

    /// Pop the top frame and return its name.
    ///
    /// An empty stack yields the empty string: unbalanced closing braces are
    /// common enough in the wild that they must not be fatal.
    pub fn pop(&mut self) -> String {
        self.frames.pop().unwrap_or_default()
    }

    /// Name of the top frame, if any frame is open.
    pub fn top(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// Record `word` as the scope of the innermost group unless that group
    /// already has one. Returns `true` when the name was recorded.
    pub fn name_scope(&mut self, word: &str) -> bool {
        match self.frames.last_mut() {
            Some(top) if top.is_empty() => {
                top.push_str(word);
                true
            }
            _ => false,
        }
    }

    /// Current nesting depth.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no group is open.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
