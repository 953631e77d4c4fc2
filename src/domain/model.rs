use serde::{Deserialize, Serialize};

/// One literal (old, new) pair of the replacement table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub old: String,
    pub new: String,
}

impl Replacement {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }

    /// First `max_chars` characters of the old text, for console output.
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.old.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.old[..idx],
            None => &self.old,
        }
    }
}

/// Ordered list of replacements, applied once each in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementTable {
    entries: Vec<Replacement>,
}

impl ReplacementTable {
    pub fn new(entries: Vec<Replacement>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Replacement] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Replacement> {
        self.entries.iter()
    }

    /// Pairs `(i, j)` where the new text of entry `i` contains the old text of
    /// entry `j`. With `i != j` the result depends on table order; with `i == j`
    /// a second run matches the entry again.
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in self.entries.iter().enumerate() {
            for (j, b) in self.entries.iter().enumerate() {
                if a.new.contains(b.old.as_str()) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}

impl FromIterator<Replacement> for ReplacementTable {
    fn from_iter<T: IntoIterator<Item = Replacement>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ReplacementTable {
    type Item = &'a Replacement;
    type IntoIter = std::slice::Iter<'a, Replacement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Full text of the target file between load and save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBuffer {
    text: String,
}

impl ContentBuffer {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Replaces every occurrence of `old` with `new` and returns how many were
    /// replaced. The buffer is untouched when nothing matches.
    pub fn replace_all(&mut self, old: &str, new: &str) -> usize {
        if old.is_empty() {
            return 0;
        }
        let occurrences = self.text.matches(old).count();
        if occurrences > 0 {
            self.text = self.text.replace(old, new);
        }
        occurrences
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    Replaced { occurrences: usize },
    NotFound,
}

impl EntryOutcome {
    pub fn is_replaced(&self) -> bool {
        matches!(self, Self::Replaced { .. })
    }
}

/// Per-entry outcomes in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaceReport {
    pub outcomes: Vec<(Replacement, EntryOutcome)>,
}

impl ReplaceReport {
    pub fn push(&mut self, entry: Replacement, outcome: EntryOutcome) {
        self.outcomes.push((entry, outcome));
    }

    pub fn replaced_count(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_replaced()).count()
    }

    pub fn missed_count(&self) -> usize {
        self.outcomes.len() - self.replaced_count()
    }

    pub fn is_changed(&self) -> bool {
        self.replaced_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_is_char_safe() {
        let entry = Replacement::new("P = V × I, E = P × t", "x");
        assert_eq!(entry.preview(7), "P = V ×");
        assert_eq!(entry.preview(100), "P = V × I, E = P × t");
    }

    #[test]
    fn test_replace_all_counts_every_occurrence() {
        let mut buffer = ContentBuffer::new("aXbXc".to_string());
        assert_eq!(buffer.replace_all("X", "--"), 2);
        assert_eq!(buffer.as_str(), "a--b--c");
        assert_eq!(buffer.replace_all("X", "--"), 0);
        assert_eq!(buffer.as_str(), "a--b--c");
    }

    #[test]
    fn test_replace_all_ignores_empty_needle() {
        let mut buffer = ContentBuffer::new("abc".to_string());
        assert_eq!(buffer.replace_all("", "z"), 0);
        assert_eq!(buffer.as_str(), "abc");
    }

    #[test]
    fn test_overlapping_pairs() {
        let table: ReplacementTable = vec![
            Replacement::new("alpha", "beta"),
            Replacement::new("beta", "gamma"),
            Replacement::new("delta", "epsilon"),
            Replacement::new("zeta", "zeta!"),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.overlapping_pairs(), vec![(0, 1), (3, 3)]);
    }

    #[test]
    fn test_report_counts() {
        let mut report = ReplaceReport::default();
        report.push(Replacement::new("a", "b"), EntryOutcome::Replaced { occurrences: 1 });
        report.push(Replacement::new("c", "d"), EntryOutcome::NotFound);
        assert_eq!(report.replaced_count(), 1);
        assert_eq!(report.missed_count(), 1);
        assert!(report.is_changed());
    }
}
