//! Append-only command history.

/// A command and the output lines shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    command: String,
    output: Vec<String>,
}

impl HistoryEntry {
    pub fn new(command: impl Into<String>, output: Vec<String>) -> Self {
        Self {
            command: command.into(),
            output,
        }
    }

    /// The command as typed or scripted.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Output lines in display order.
    pub fn output(&self) -> &[String] {
        &self.output
    }
}

/// Ordered log of everything shown in a session.
///
/// Entries can be appended and read, never edited or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
