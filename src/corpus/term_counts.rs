//! Per-document term occurrence counts.

use ahash::AHashMap;

/// A multiset of terms for one document.
///
/// The sum of all counts always equals [`total`](Self::total): both are
/// derived from the same token sequence in [`from_tokens`](Self::from_tokens).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TermCounts {
    counts: AHashMap<String, usize>,
    total: usize,
}

impl TermCounts {
    /// Count every token of a sequence.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut counts: AHashMap<String, usize> = AHashMap::with_capacity(tokens.len() / 2);
        for token in tokens {
            let token = token.as_ref();
            match counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.to_string(), 1);
                }
            }
        }

        TermCounts {
            counts,
            total: tokens.len(),
        }
    }

    /// Occurrences of a term; zero when absent.
    pub fn count(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Whether the term occurs at least once.
    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    /// Total number of tokens counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct terms.
    pub fn unique_terms(&self) -> usize {
        self.counts.len()
    }

    /// Iterate over `(term, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(term, count)| (term.as_str(), *count))
    }

    /// The `k` most frequent terms, ties broken alphabetically.
    pub fn most_common(&self, k: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(k);
        entries
    }
}
