/// Bounded most-recent-first list of previously searched city names.
///
/// A city already present anywhere in the list is not re-inserted and
/// not moved to the front. Only successful lookups are recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchHistory {
    entries: Vec<String>,
}

impl SearchHistory {
    pub const MAX_ENTRIES: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful search. New entries go to the front and the
    /// oldest entry is dropped past [`Self::MAX_ENTRIES`].
    pub fn record(&mut self, city: &str) {
        if self.entries.iter().any(|c| c == city) {
            return;
        }
        self.entries.insert(0, city.to_string());
        self.entries.truncate(Self::MAX_ENTRIES);
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
