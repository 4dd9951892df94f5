//! Shared selection types for row-oriented widgets.
//!
//! Selection is addressed by derived row keys, not by row identity, and it
//! remembers the order keys were selected in.

/// Selection mode for row-oriented widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No selection allowed; selection affordances are omitted.
    #[default]
    None,
    /// Single row selection (radio-button style).
    Single,
    /// Multiple rows can be selected (checkbox style).
    Multiple,
}

/// Tracks selected rows by key, in selection order.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    keys: Vec<String>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Check if a key is selected.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Selected keys in selection order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// The first selected key, if any.
    pub fn first(&self) -> Option<&str> {
        self.keys.first().map(String::as_str)
    }

    /// Append a key if absent. Returns true if the selection changed.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.contains(&key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    /// Remove a key. Returns true if the selection changed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| k != key);
        self.keys.len() != before
    }

    /// Clear the selection. Returns true if the selection changed.
    pub fn clear(&mut self) -> bool {
        if self.keys.is_empty() {
            return false;
        }
        self.keys.clear();
        true
    }

    /// Replace the selection with a new key sequence.
    pub fn replace(&mut self, keys: Vec<String>) {
        self.keys = keys;
    }

    /// Mark a key checked or unchecked under the given mode.
    ///
    /// Single mode replaces the whole selection when checking and clears it
    /// when unchecking. Multiple mode appends or removes. Returns true if
    /// the selection changed.
    pub fn set_checked(&mut self, mode: SelectionMode, key: &str, checked: bool) -> bool {
        match mode {
            SelectionMode::None => false,
            SelectionMode::Single => {
                if checked {
                    if self.keys.len() == 1 && self.keys[0] == key {
                        return false;
                    }
                    self.keys = vec![key.to_string()];
                    true
                } else {
                    self.remove(key)
                }
            }
            SelectionMode::Multiple => {
                if checked {
                    self.insert(key)
                } else {
                    self.remove(key)
                }
            }
        }
    }

    /// Flip a key's checked state under the given mode. Returns true if the
    /// selection changed.
    pub fn toggle(&mut self, mode: SelectionMode, key: &str) -> bool {
        let checked = !self.contains(key);
        self.set_checked(mode, key, checked)
    }
}
