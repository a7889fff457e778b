//! Citation extraction from LaTeX auxiliary files.
//!
//! LaTeX writes one `\citation{...}` line to the `.aux` file for every
//! `\cite` in the document. A single marker may carry several keys joined
//! by commas (`\citation{a,b}`).

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

// Group 1: the raw key list between the braces (may be empty)
static CITATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\citation\{([^}]*)\}").unwrap());

/// Returns the raw key list of every `\citation{...}` marker, in document order.
///
/// Unterminated markers are skipped.
///
/// # Examples
///
/// ```
/// use bib_usage::citation_key_lists;
///
/// let lists: Vec<&str> = citation_key_lists("\\citation{a, b}\n\\citation{c}").collect();
/// assert_eq!(lists, vec!["a, b", "c"]);
/// ```
pub fn citation_key_lists(aux: &str) -> impl Iterator<Item = &str> + '_ {
    CITATION_RE
        .captures_iter(aux)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Splits a raw key list on commas, trimming each key and dropping empty ones.
pub fn split_keys(key_list: &str) -> impl Iterator<Item = &str> {
    key_list.split(',').map(str::trim).filter(|k| !k.is_empty())
}

/// How many times each citation key occurs across all citation markers.
///
/// Keys are compared exactly (case-sensitive) after trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitationFrequency {
    counts: HashMap<String, usize>,
}

impl CitationFrequency {
    /// Builds the frequency mapping from the full text of an auxiliary file.
    pub fn from_aux(aux: &str) -> Self {
        Self::from_key_lists(citation_key_lists(aux))
    }

    /// Builds the frequency mapping from raw, comma-joined key lists.
    pub fn from_key_lists<'a, I>(key_lists: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for key in key_lists.into_iter().flat_map(split_keys) {
            *counts.entry(key.to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of times `key` was cited, or 0 if it never was.
    pub fn count(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Total number of cited keys, counting repeats.
    pub fn total_citations(&self) -> usize {
        self.counts.values().sum()
    }
}
