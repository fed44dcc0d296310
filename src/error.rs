//! Error types for LDF operations.
//!
//! This module defines the [`Error`] enum which represents every failure that
//! aborts loading or parsing an LDF file. Problems with individual statements
//! are not errors by default; they are collected as
//! [`Diagnostic`](crate::Diagnostic)s on the parsed document instead.
//!
//! # Example
//!
//! ```no_run
//! use ldf_rs::{Error, LdfParser, Result};
//!
//! fn load(path: &str) -> Result<()> {
//!     let mut parser = LdfParser::new();
//!     match parser.set_file(path) {
//!         Ok(()) => Ok(()),
//!         Err(Error::SectionNotFound { section }) => {
//!             eprintln!("{path} has no {section} section");
//!             Err(Error::SectionNotFound { section })
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//! ```

use core::fmt;

/// Errors that can occur while loading or parsing an LDF file.
#[derive(Debug)]
pub enum Error {
    /// The path does not carry an `.ldf` extension.
    ///
    /// Reported before the file is opened.
    InvalidFileType(String),

    /// The path does not exist.
    FileNotFound(String),

    /// An I/O error occurred while reading the file.
    IOError(std::io::Error),

    /// A required section keyword followed by `{` was not found.
    SectionNotFound {
        /// Section keyword that was searched for
        section: String,
    },

    /// A section was opened but its closing brace is missing.
    ///
    /// Only reported when truncated sections are not allowed
    /// (see [`ParseConfig::allow_truncated`](crate::ParseConfig::allow_truncated)).
    UnterminatedSection {
        /// Section keyword
        section: String,
        /// Byte offset where the section body starts
        start: usize,
    },

    /// A section was found but its mandatory content is missing.
    MalformedSection {
        /// Section keyword
        section: String,
        /// What was expected
        reason: String,
    },

    /// A frame block could not be split into header and signal list, or its
    /// header fields could not be parsed.
    MalformedFrame {
        /// The offending frame block
        statement: String,
        /// What went wrong
        reason: String,
    },

    /// A statement in a signal, encoding or attribute section did not have the
    /// expected shape.
    MalformedStatement {
        /// Section the statement belongs to
        section: String,
        /// The offending statement
        statement: String,
        /// What went wrong
        reason: String,
    },

    /// The parsed document could not be serialized.
    SerializationError(String),

    /// A frame, signal or node name was defined twice while duplicates are
    /// rejected.
    DuplicateName {
        /// Section containing the duplicate
        section: String,
        /// The repeated name
        name: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFileType(path) => {
                write!(f, r#"Invalid file type: Expected ".ldf", found {path}"#)
            }
            Error::FileNotFound(path) => write!(f, "File not found: {path}"),
            Error::IOError(e) => write!(f, "I/O error: {e}"),
            Error::SectionNotFound { section } => write!(f, "Section not found: {section}"),
            Error::UnterminatedSection { section, start } => write!(
                f,
                "Unterminated section {section}: no closing brace for body starting at byte {start}"
            ),
            Error::MalformedSection { section, reason } => {
                write!(f, "Malformed section {section}: {reason}")
            }
            Error::MalformedFrame { statement, reason } => {
                write!(f, "Malformed frame {statement:?}: {reason}")
            }
            Error::MalformedStatement {
                section,
                statement,
                reason,
            } => write!(f, "Malformed statement in {section} {statement:?}: {reason}"),
            Error::SerializationError(s) => write!(f, "Serialization error: {s}"),
            Error::DuplicateName { section, name } => {
                write!(f, "Duplicate name in {section}: {name}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IOError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IOError(err)
    }
}

/// A specialized Result type for LDF operations.
///
/// This is defined as `core::result::Result<T, Error>` for convenience.
pub type Result<T> = core::result::Result<T, Error>;
