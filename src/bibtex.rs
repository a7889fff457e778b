//! BibTeX entry key extraction.
//!
//! Only the entry header `@type{key,` is recognized; fields are never parsed.

use std::sync::LazyLock;

use regex::Regex;

// Group 1: the entry key, everything between `{` and the first `,`
static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+\{([^,]+),").unwrap());

/// Returns the key of every entry declaration, in file order.
///
/// Duplicate keys are returned once per declaration. Entries without a comma
/// after the key, or with an empty key, are skipped.
///
/// # Examples
///
/// ```
/// use bib_usage::entry_keys;
///
/// let keys: Vec<&str> = entry_keys("@article{foo,\n title={x}}\n@book{bar, title={y}}").collect();
/// assert_eq!(keys, vec!["foo", "bar"]);
/// ```
pub fn entry_keys(bib: &str) -> impl Iterator<Item = &str> + '_ {
    ENTRY_RE
        .captures_iter(bib)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(bib: &str) -> Vec<&str> {
        entry_keys(bib).collect()
    }

    #[test]
    fn test_empty_text() {
        assert!(keys("").is_empty());
    }

    #[test]
    fn test_entry_types() {
        let bib = "@article{a,\n}\n@book{b,\n}\n@InProceedings{c,\n}\n@misc_2{d,\n}";
        assert_eq!(keys(bib), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        // Given: the same key declared twice
        let bib = "@article{dup,\n title={x}}\n@book{other,\n}\n@misc{dup,\n title={y}}";

        // Then: both declarations produce a key, in file order
        assert_eq!(keys(bib), vec!["dup", "other", "dup"]);
    }

    #[test]
    fn test_key_is_not_trimmed() {
        // The key is everything up to the first comma, whitespace included
        assert_eq!(keys("@article{ spaced ,\n}"), vec![" spaced "]);
    }

    #[test]
    fn test_entry_without_comma_is_skipped() {
        assert!(keys("@article{nofields}").is_empty());
    }

    #[test]
    fn test_empty_key_is_skipped() {
        assert!(keys("@article{,\n title={x}}").is_empty());
    }

    #[test]
    fn test_missing_type_is_skipped() {
        assert!(keys("@{key,\n}").is_empty());
    }

    #[test]
    fn test_string_command_runs_into_next_entry() {
        // The @string body has no comma, so the match runs on to the next entry's comma
        let bib = "@string{jgr = \"J. Geophys. Res.\"}\n@article{a,\n}";
        assert_eq!(keys(bib), vec!["jgr = \"J. Geophys. Res.\"}\n@article{a"]);
    }

    #[test]
    fn test_unicode_entry_type() {
        assert_eq!(keys("@artículo{clave,\n}"), vec!["clave"]);
    }
}
