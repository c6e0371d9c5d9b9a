//! The candidate set and the suggestion filter.

use indexmap::IndexSet;

/// Insertion-ordered, de-duplicated collection of candidate strings.
///
/// Candidates are only ever appended. Equality is exact and case-sensitive,
/// so `"Apple"` and `"apple"` are two different candidates.
///
/// # Examples
///
/// ```rust
/// use bubbletea_autocomplete::autocomplete::CandidateSet;
///
/// let mut set = CandidateSet::new();
/// set.append(["apple", "Banana", "apple"]);
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.filter("AN"), vec!["Banana".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    items: IndexSet<String>,
}

impl CandidateSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every item not already present. Returns how many were added.
    pub fn append<I, S>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.items.len();
        self.items.extend(items.into_iter().map(Into::into));
        self.items.len() - before
    }

    /// Returns the candidates containing `query`, ignoring case, sorted
    /// ascending.
    ///
    /// Matching lowercases both sides; sorting compares the original strings
    /// with plain `Ord`, so uppercase sorts before lowercase. An empty query
    /// matches every candidate.
    pub fn filter(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        let mut matches: Vec<String> = self
            .items
            .iter()
            .filter(|candidate| candidate.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        matches.sort();
        matches
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `candidate` is present (exact match).
    pub fn contains(&self, candidate: &str) -> bool {
        self.items.contains(candidate)
    }

    /// Candidates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.append(iter);
        set
    }
}
