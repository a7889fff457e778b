//! bib-usage: report how often each BibTeX entry is cited in a LaTeX document.
//!
//! This library provides functionality to:
//! - Extract citation keys from `\citation{...}` lines of a `.aux` file
//! - Extract entry keys from `@type{key,` headers of a `.bib` file
//! - Join the two into a sorted usage report with a summary

pub mod bibtex;
pub mod citations;
pub mod report;
pub mod source;

pub use bibtex::entry_keys;
pub use citations::{citation_key_lists, split_keys, CitationFrequency};
pub use report::{compare_usage, generate_report, UsageRecord, UsageReport};
pub use source::{read_source, SourceError};
