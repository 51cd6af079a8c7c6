//! YAML loader for acceptance cases

use askdesk_domain::{AcceptanceCase, Expected, ExpectedKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors loading a case file
#[derive(Error, Debug)]
pub enum SuiteLoadError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid case file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Raw YAML document
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSuite {
    cases: Vec<FileCase>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileCase {
    name: Option<String>,
    question: Option<String>,
    expected: Option<FileExpected>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileExpected {
    #[serde(rename = "type")]
    kind: Option<String>,
    must_include: Option<Vec<String>>,
    must_not_include: Option<Vec<String>>,
}

impl FileCase {
    fn into_case(self, index: usize) -> AcceptanceCase {
        let name = self.name.unwrap_or_else(|| format!("case-{}", index + 1));
        let raw = self.expected.unwrap_or_default();
        let expected = Expected {
            kind: raw
                .kind
                .as_deref()
                .map(ExpectedKind::parse_lenient)
                .unwrap_or_default(),
            must_include: raw.must_include.unwrap_or_default(),
            must_not_include: raw.must_not_include.unwrap_or_default(),
        };
        AcceptanceCase::new(name, self.question.unwrap_or_default(), expected)
    }
}

/// Loader for acceptance case files
pub struct AcceptanceSuiteLoader;

impl AcceptanceSuiteLoader {
    /// Load all cases from a YAML file.
    ///
    /// An empty document or one without `cases` yields an empty list; the
    /// caller decides whether that is an error.
    pub fn load(path: &Path) -> Result<Vec<AcceptanceCase>, SuiteLoadError> {
        if !path.exists() {
            return Err(SuiteLoadError::NotFound(path.to_path_buf()));
        }

        let text = std::fs::read_to_string(path).map_err(|source| SuiteLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let cases = Self::parse(&text).map_err(|source| SuiteLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded {} cases from {}", cases.len(), path.display());
        Ok(cases)
    }

    /// Parse cases from YAML text
    pub fn parse(text: &str) -> Result<Vec<AcceptanceCase>, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        // A comment-only document deserializes as null
        let suite: Option<FileSuite> = serde_yaml::from_str(text)?;
        Ok(suite
            .unwrap_or_default()
            .cases
            .into_iter()
            .enumerate()
            .map(|(i, case)| case.into_case(i))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SUITE: &str = r#"
cases:
  - name: deadline
    question: "  申請の締切はいつですか？ "
    expected:
      type: answer
      must_include: ["3月31日"]
      must_not_include: ["不明"]
  - name: out-of-scope
    question: 明日の天気は？
    expected:
      type: Fallback
  - question: no name and no expectations
  - name: null-expected
    question: q
    expected:
"#;

    #[test]
    fn test_parse_cases() {
        let cases = AcceptanceSuiteLoader::parse(SUITE).unwrap();
        assert_eq!(cases.len(), 4);

        assert_eq!(cases[0].name, "deadline");
        assert_eq!(cases[0].question, "申請の締切はいつですか？");
        assert_eq!(
            cases[0].expected,
            Expected::answer().including("3月31日").excluding("不明")
        );

        assert_eq!(cases[1].expected.kind, ExpectedKind::Fallback);
        assert!(cases[1].expected.must_include.is_empty());

        assert_eq!(cases[2].name, "case-3");
        assert_eq!(cases[2].expected, Expected::answer());
        assert_eq!(cases[3].expected, Expected::answer());
    }

    #[test]
    fn test_null_lists_are_empty() {
        let cases = AcceptanceSuiteLoader::parse(
            "cases:\n  - name: a\n    question: q\n    expected:\n      must_include:\n",
        )
        .unwrap();
        assert!(cases[0].expected.must_include.is_empty());
    }

    #[test]
    fn test_empty_documents() {
        assert!(AcceptanceSuiteLoader::parse("").unwrap().is_empty());
        assert!(AcceptanceSuiteLoader::parse("other: 1").unwrap().is_empty());
        assert!(AcceptanceSuiteLoader::parse("cases: []").unwrap().is_empty());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SUITE.as_bytes()).unwrap();
        let cases = AcceptanceSuiteLoader::load(file.path()).unwrap();
        assert_eq!(cases.len(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AcceptanceSuiteLoader::load(&dir.path().join("missing.yml")).unwrap_err();
        assert!(matches!(err, SuiteLoadError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"cases: [unclosed").unwrap();
        assert!(matches!(
            AcceptanceSuiteLoader::load(file.path()),
            Err(SuiteLoadError::Parse { .. })
        ));
    }
}
