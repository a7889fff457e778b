//! Shared test inputs and helpers for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Auxiliary file from a typical pdflatex run: `foo` cited twice, `bar` once.
pub const SAMPLE_AUX: &str = r"\relax
\citation{foo,bar}
\bibstyle{plain}
\citation{foo}
\bibdata{refs}
\bibcite{bar}{1}
\bibcite{foo}{2}
\@writefile{toc}{\contentsline {section}{\numberline {1}Intro}{1}{}\protected@file@percent }
\gdef \@abspage@last{1}
";

/// Bibliography declaring `foo`, `bar` and the never-cited `baz`.
pub const SAMPLE_BIB: &str = "@article{foo,
  title = {Foo},
  year = {2020}
}

@book{bar,
  title = {Bar}
}

@misc{baz,
  title = {Baz}
}
";

/// Expected report for [`SAMPLE_AUX`] and [`SAMPLE_BIB`].
pub const SAMPLE_REPORT: &str = "\
##### START usage_sorted #####
  2  foo
  1  bar
  0  baz
##### END usage_sorted #####

##### SUMMARY #####
Total entries : 3
Used entries  : 2
Unused entries: 1
##### END SUMMARY #####
";

/// Create a temporary file with the given content and extension.
pub fn create_temp_file(content: &[u8], extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(extension)
        .tempfile()
        .unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

/// Parse the `<count>  <key>` lines of the usage_sorted block.
pub fn usage_lines(report: &str) -> Vec<(usize, String)> {
    report
        .lines()
        .skip_while(|l| *l != "##### START usage_sorted #####")
        .skip(1)
        .take_while(|l| *l != "##### END usage_sorted #####")
        .map(|l| {
            let (count, key) = l.trim_start().split_once("  ").unwrap();
            (count.parse().unwrap(), key.to_string())
        })
        .collect()
}
