//! # Error Types
//!
//! This module defines the error types used throughout the sentence library.
//!
//! Every failure raised by [`parse`](crate::parse) is a parse error. Two of them
//! are refinements of that base kind: an unregistered talker sentence code and a
//! checksum that is missing or wrong under strict checking. [`Error::kind`]
//! exposes that hierarchy.

use thiserror::Error;

use crate::schema::FieldKind;

/// Holds the result of sentence parsing.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The kind of a parse failure.
///
/// [`ErrorKind::SentenceType`] and [`ErrorKind::Checksum`] are both
/// specializations of [`ErrorKind::Parse`]; see [`ErrorKind::is_parse_error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The line could not be classified at all.
    Parse,
    /// A talker sentence carried a sentence code that is not registered.
    SentenceType,
    /// Strict checking found the checksum missing or mismatched.
    Checksum,
}

impl ErrorKind {
    /// Whether the kind is [`ErrorKind::Parse`] or one of its refinements.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse | Self::SentenceType | Self::Checksum)
    }
}

/// Represents all possible errors that can occur while parsing a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The line does not have the shape of a sentence, or its type identifier
    /// does not match any sentence category.
    #[error("{message}: {line:?}")]
    Parse {
        /// Description of the failure
        message: String,
        /// The original line
        line: String,
    },

    /// A talker sentence was recognized but its sentence code is unknown.
    ///
    /// There is no fallback for talker sentences, unlike proprietary ones.
    #[error("{message}: {line:?}")]
    SentenceType {
        /// Description of the failure
        message: String,
        /// The original line
        line: String,
    },

    /// The checksum of the sentence did not match the calculated one.
    #[error("checksum does not match: {found:02X} != {expected:02X}")]
    ChecksumMismatch {
        /// The checksum found in the sentence
        found: u8,
        /// The checksum calculated from the sentence content
        expected: u8,
        /// The raw data fields of the sentence
        data: Vec<String>,
    },

    /// Strict checking was requested but the sentence has no checksum.
    #[error("strict checking requested but checksum missing")]
    ChecksumMissing {
        /// The raw data fields of the sentence
        data: Vec<String>,
    },
}

impl Error {
    pub(crate) fn parse(message: impl Into<String>, line: &str) -> Self {
        Error::Parse {
            message: message.into(),
            line: line.to_owned(),
        }
    }

    pub(crate) fn sentence_type(message: impl Into<String>, line: &str) -> Self {
        Error::SentenceType {
            message: message.into(),
            line: line.to_owned(),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse { .. } => ErrorKind::Parse,
            Error::SentenceType { .. } => ErrorKind::SentenceType,
            Error::ChecksumMismatch { .. } | Error::ChecksumMissing { .. } => ErrorKind::Checksum,
        }
    }

    /// Returns the human readable message, without the offending data.
    pub fn message(&self) -> String {
        match self {
            Error::Parse { message, .. } | Error::SentenceType { message, .. } => message.clone(),
            checksum => checksum.to_string(),
        }
    }

    /// Returns the offending raw input.
    ///
    /// This is the original line for classification failures and the split
    /// data fields for checksum failures.
    pub fn data(&self) -> Vec<&str> {
        match self {
            Error::Parse { line, .. } | Error::SentenceType { line, .. } => vec![line.as_str()],
            Error::ChecksumMismatch { data, .. } | Error::ChecksumMissing { data } => {
                data.iter().map(String::as_str).collect()
            }
        }
    }
}

/// Errors raised by the named field accessors of a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The name is neither a schema field nor an identity field.
    #[error("unknown field {name:?}")]
    Unknown {
        /// The requested field name
        name: String,
    },

    /// The raw value could not be coerced to the field's declared kind.
    #[error("field {name:?} holds {value:?}, which is not a valid {kind}")]
    Invalid {
        /// The field name
        name: String,
        /// The raw field value
        value: String,
        /// The declared kind of the field
        kind: FieldKind,
    },

    /// Identity fields (talker, listener, ...) cannot be reassigned.
    #[error("field {name:?} identifies the sentence and cannot be modified")]
    Immutable {
        /// The requested field name
        name: String,
    },

    /// The schema slot of the field lies past the end of the data.
    #[error("field {name:?} is at index {index} but the sentence has {len} fields")]
    OutOfRange {
        /// The requested field name
        name: String,
        /// The schema slot of the field
        index: usize,
        /// The number of data fields
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = Error::parse("could not parse data", "garbage");
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.data(), vec!["garbage"]);
        assert_eq!(err.to_string(), "could not parse data: \"garbage\"");

        let err = Error::ChecksumMismatch {
            found: 0x00,
            expected: 0x6D,
            data: vec!["1".into(), "2".into()],
        };
        assert_eq!(err.kind(), ErrorKind::Checksum);
        assert!(err.kind().is_parse_error());
        assert!(ErrorKind::SentenceType.is_parse_error());
        assert!(ErrorKind::Parse.is_parse_error());
        assert_eq!(err.message(), "checksum does not match: 00 != 6D");
        assert_eq!(err.data(), vec!["1", "2"]);
    }
}
