//! Usage report generation.
//!
//! Joins bibliography entry keys against citation counts and renders the
//! fixed-format text report.

use std::cmp::Ordering;

use crate::bibtex::entry_keys;
use crate::citations::CitationFrequency;

/// Citation count for one bibliography entry declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageRecord {
    /// Number of times the key was cited (0 if never)
    pub count: usize,
    /// The entry key as declared in the bibliography
    pub key: String,
}

impl UsageRecord {
    pub fn is_used(&self) -> bool {
        self.count > 0
    }
}

/// Orders records by descending count, then ascending key (byte order).
pub fn compare_usage(a: &UsageRecord, b: &UsageRecord) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key))
}

/// Sorted usage records for every entry declaration in a bibliography.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageReport {
    records: Vec<UsageRecord>,
}

impl UsageReport {
    /// Builds a report with one record per entry key.
    ///
    /// Keys are not deduplicated: a key declared twice yields two records
    /// carrying the same count.
    ///
    /// # Examples
    ///
    /// ```
    /// use bib_usage::{CitationFrequency, UsageReport};
    ///
    /// let freq = CitationFrequency::from_aux("\\citation{b,a}\\citation{b}");
    /// let report = UsageReport::build(&freq, ["a", "b", "c"]);
    ///
    /// assert_eq!(report.records()[0].key, "b");
    /// assert_eq!(report.used(), 2);
    /// assert_eq!(report.unused(), 1);
    /// ```
    pub fn build<'a, I>(frequency: &CitationFrequency, keys: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut records: Vec<UsageRecord> = keys
            .into_iter()
            .map(|key| UsageRecord {
                count: frequency.count(key),
                key: key.to_string(),
            })
            .collect();
        records.sort_by(compare_usage);

        Self { records }
    }

    pub fn records(&self) -> &[UsageRecord] {
        &self.records
    }

    /// Number of entry declarations, duplicates included.
    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Number of declarations cited at least once.
    pub fn used(&self) -> usize {
        self.records.iter().filter(|r| r.is_used()).count()
    }

    pub fn unused(&self) -> usize {
        self.total() - self.used()
    }

    /// Renders the usage table followed by the summary block.
    ///
    /// Counts are right-justified to a width of at least 3.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("##### START usage_sorted #####\n");
        for record in &self.records {
            out.push_str(&format!("{:>3}  {}\n", record.count, record.key));
        }
        out.push_str("##### END usage_sorted #####\n");
        out.push('\n');

        out.push_str("##### SUMMARY #####\n");
        out.push_str(&format!("Total entries : {}\n", self.total()));
        out.push_str(&format!("Used entries  : {}\n", self.used()));
        out.push_str(&format!("Unused entries: {}\n", self.unused()));
        out.push_str("##### END SUMMARY #####\n");

        out
    }
}

/// Builds and renders the report for an auxiliary file and a bibliography.
pub fn generate_report(aux: &str, bib: &str) -> String {
    let frequency = CitationFrequency::from_aux(aux);
    UsageReport::build(&frequency, entry_keys(bib)).render()
}
