//! Ordered pantry ingredient list with case-insensitive uniqueness.

/// The ingredients the user has on hand, in the order they were added.
/// No two entries compare equal case-insensitively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientList {
    entries: Vec<String>,
}

impl IngredientList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for name in names {
            list.add(name.as_ref());
        }
        list
    }

    /// Appends a trimmed name unless it is blank or already present
    /// (case-insensitively). Returns whether the list changed, so the UI
    /// knows whether to clear its input buffer.
    pub fn add(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return false;
        }
        let lowered = trimmed.to_lowercase();
        if self.entries.iter().any(|e| e.to_lowercase() == lowered) {
            return false;
        }
        self.entries.push(trimmed.to_string());
        true
    }

    /// Removes the first entry exactly equal to `name`; no-op when absent.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.entries.iter().position(|e| e == name) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
