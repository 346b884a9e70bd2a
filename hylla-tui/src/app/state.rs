#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Browse,
    Filters,
    SelectCategory,
    SelectAuthor,
}

/// Rows of the filter panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterField {
    Category,
    Author,
    Published,
}

impl FilterField {
    pub fn next(self) -> Self {
        match self {
            FilterField::Category => FilterField::Author,
            FilterField::Author => FilterField::Published,
            FilterField::Published => FilterField::Category,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FilterField::Category => FilterField::Published,
            FilterField::Author => FilterField::Category,
            FilterField::Published => FilterField::Author,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Info,
    Destructive,
}

/// A message for the status line. Destructive notices are render-styled as
/// errors; info notices announce completed actions.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub severity: Severity,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Info,
        }
    }

    pub fn destructive(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Destructive,
        }
    }
}

/// Fuzzy-search state for the category/author pickers. `matches` is the
/// filtered view over `options`; the selectable list shows an extra "All"
/// row at index 0, so `index` ranges over `0..=matches.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetPicker {
    pub target: FilterField,
    pub input: TextInput,
    pub options: Vec<String>,
    pub matches: Vec<String>,
    pub index: usize,
}

impl FacetPicker {
    pub fn new(target: FilterField, options: Vec<String>) -> Self {
        Self {
            target,
            input: TextInput::new(),
            matches: options.clone(),
            options,
            index: 0,
        }
    }
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    /// Move cursor one char to the left.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    /// Move cursor one char to the right.
    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }
    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        debug_assert!(pos > 0, "prev_boundary called with pos == 0");
        let mut p = pos;
        loop {
            p -= 1;
            if self.value.is_char_boundary(p) {
                return p;
            }
        }
    }
    fn next_boundary(&self, pos: usize) -> usize {
        debug_assert!(
            pos < self.value.len(),
            "next_boundary called at end of string"
        );
        let mut p = pos + 1;
        while p <= self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}
