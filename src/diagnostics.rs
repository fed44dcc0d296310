//! Non-fatal findings collected while parsing.
//!
//! LDF files written by different tools and for different LIN revisions vary
//! in small ways. Rather than failing on every irregular statement, the
//! builders skip what they cannot read and leave a [`Diagnostic`] behind.

use crate::{Error, Result, config::DuplicatePolicy, config::ParseConfig};

/// Category of a non-fatal finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagnosticKind {
    /// A statement did not match its expected shape and was dropped.
    SkippedStatement,
    /// A name was defined again; the later definition replaced the earlier one.
    DuplicateName,
    /// An encoding is defined but no signal is represented by it.
    UnusedEncoding,
    /// A signal name is referenced but never defined in the `Signals` section.
    UnresolvedSignal,
    /// `Signal_representation` names an encoding that is never defined.
    UnresolvedEncoding,
}

/// A single non-fatal finding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// Section keyword the finding belongs to
    pub section: String,
    /// Category of the finding
    pub kind: DiagnosticKind,
    /// Human readable description
    pub message: String,
}

impl core::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}] {:?}: {}", self.section, self.kind, self.message)
    }
}

/// Collects diagnostics during a parse and applies the configured strictness.
#[derive(Debug)]
pub(crate) struct Reporter<'c> {
    config: &'c ParseConfig,
    diagnostics: Vec<Diagnostic>,
}

impl<'c> Reporter<'c> {
    pub(crate) fn new(config: &'c ParseConfig) -> Self {
        Self {
            config,
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn config(&self) -> &'c ParseConfig {
        self.config
    }

    /// Record a dropped statement, or fail in strict mode.
    pub(crate) fn skip(&mut self, section: &str, err: Error) -> Result<()> {
        if self.config.strict {
            return Err(err);
        }
        self.push(section, DiagnosticKind::SkippedStatement, err.to_string());
        Ok(())
    }

    /// Record a repeated name, or fail when duplicates are rejected.
    pub(crate) fn duplicate(&mut self, section: &str, name: &str) -> Result<()> {
        match self.config.duplicate_policy {
            DuplicatePolicy::Reject => Err(Error::DuplicateName {
                section: section.to_string(),
                name: name.to_string(),
            }),
            DuplicatePolicy::Overwrite => {
                self.push(
                    section,
                    DiagnosticKind::DuplicateName,
                    format!("{name} redefined, keeping the last definition"),
                );
                Ok(())
            }
        }
    }

    /// Record a finding that never aborts the parse.
    pub(crate) fn push(&mut self, section: &str, kind: DiagnosticKind, message: String) {
        self.diagnostics.push(Diagnostic {
            section: section.to_string(),
            kind,
            message,
        });
    }

    pub(crate) fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
