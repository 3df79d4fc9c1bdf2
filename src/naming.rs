//! Output file naming.
//!
//! `{dir}/{codes joined by "_"}_{date}_{time}.{ext}`, each part sanitized.

use std::path::{Path, PathBuf};

/// Keeps alphanumerics, space, `_` and `-`, then trims trailing whitespace.
pub fn sanitize(value: &str) -> String {
    let kept: String = value
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect();
    kept.trim_end().to_string()
}

/// File name (without directory) for a session's plan.
pub fn output_file_name<S: AsRef<str>>(
    exam_codes: &[S],
    date: &str,
    time: &str,
    extension: &str,
) -> String {
    let codes: Vec<&str> = exam_codes.iter().map(AsRef::as_ref).collect();
    format!(
        "{}_{}_{}.{}",
        sanitize(&codes.join("_")),
        sanitize(date),
        sanitize(time),
        extension
    )
}

/// Full output path for a session's plan.
pub fn output_path<S: AsRef<str>>(
    dir: &Path,
    exam_codes: &[S],
    date: &str,
    time: &str,
    extension: &str,
) -> PathBuf {
    dir.join(output_file_name(exam_codes, date, time, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paired_file_name() {
        assert_eq!(
            output_file_name(&["CS301", "CS302"], "2024-05-10", "09-00-00", "xlsx"),
            "CS301_CS302_2024-05-10_09-00-00.xlsx"
        );
    }

    #[test]
    fn test_strips_reserved_characters() {
        assert_eq!(sanitize(r#"a/b\c:d*e?f"g<h>i|j"#), "abcdefghij");
        assert_eq!(
            output_file_name(&["CS/401"], "10/05/2024", "09:00:00", "xlsx"),
            "CS401_10052024_090000.xlsx"
        );
    }

    #[test]
    fn test_trims_trailing_whitespace_only() {
        assert_eq!(sanitize("  Data Structures  "), "  Data Structures");
        assert_eq!(sanitize("CS 201."), "CS 201");
    }

    #[test]
    fn test_output_path_joins_directory() {
        let path = output_path(Path::new("out"), &["EE201".to_string()], "d", "t", "xlsx");
        assert_eq!(path, Path::new("out").join("EE201_d_t.xlsx"));
    }
}
