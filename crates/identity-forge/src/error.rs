//! Error types for the identity-forge crate.
//!
//! Generation itself never fails. The errors here cover building vocabulary
//! tables (a configuration-time concern) and writing generated output to
//! disk, following the project's `thiserror` conventions.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating vocabulary tables.
///
/// Every variant is detected once, when [`crate::VocabularyTables`] is
/// constructed, so later generation calls can pick from the tables without
/// further checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    /// The vocabulary file could not be read.
    #[error("failed to read vocabulary file at '{path}': {message}")]
    IoError {
        /// Path to the vocabulary file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The vocabulary JSON is malformed or missing required tables.
    #[error("invalid vocabulary JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The vocabulary document version is not supported.
    #[error("unsupported vocabulary version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the document.
        actual: u32,
    },

    /// A table that generation draws from has no entries.
    #[error("vocabulary table '{table}' must not be empty")]
    EmptyTable {
        /// Name of the empty table.
        table: &'static str,
    },

    /// A table entry violates the rules for its table.
    #[error("invalid entry in vocabulary table '{table}': {value:?} ({reason})")]
    InvalidEntry {
        /// Name of the table holding the entry.
        table: &'static str,
        /// The offending entry.
        value: String,
        /// Why the entry was rejected.
        reason: &'static str,
    },

    /// A letter appears in both the consonant and the vowel set.
    #[error("letter '{letter}' is listed as both a consonant and a vowel")]
    OverlappingPhonemes {
        /// The shared letter.
        letter: char,
    },
}

/// Errors raised while writing generated identities to a file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputError {
    /// The output file could not be written.
    #[error("failed to write output file at '{path}': {message}")]
    WriteError {
        /// Path to the output file.
        path: Utf8PathBuf,
        /// Description of the write error.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_error_io_formats_correctly() {
        let err = VocabularyError::IoError {
            path: PathBuf::from("/tmp/vocabulary.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read vocabulary file at '/tmp/vocabulary.json': file not found"
        );
    }

    #[test]
    fn vocabulary_error_version_formats_correctly() {
        let err = VocabularyError::UnsupportedVersion {
            expected: 1,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "unsupported vocabulary version: expected 1, found 3"
        );
    }

    #[test]
    fn vocabulary_error_empty_table_formats_correctly() {
        let err = VocabularyError::EmptyTable { table: "vowels" };
        assert_eq!(err.to_string(), "vocabulary table 'vowels' must not be empty");
    }

    #[test]
    fn vocabulary_error_invalid_entry_formats_correctly() {
        let err = VocabularyError::InvalidEntry {
            table: "emailDomains",
            value: "bad@domain".to_owned(),
            reason: "domains must not contain '@' or whitespace",
        };
        assert_eq!(
            err.to_string(),
            "invalid entry in vocabulary table 'emailDomains': \"bad@domain\" \
             (domains must not contain '@' or whitespace)"
        );
    }

    #[test]
    fn vocabulary_error_overlap_formats_correctly() {
        let err = VocabularyError::OverlappingPhonemes { letter: 'y' };
        assert_eq!(
            err.to_string(),
            "letter 'y' is listed as both a consonant and a vowel"
        );
    }

    #[test]
    fn output_error_write_formats_correctly() {
        let err = OutputError::WriteError {
            path: Utf8PathBuf::from("out/identities.json"),
            message: "permission denied".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write output file at 'out/identities.json': permission denied"
        );
    }
}
