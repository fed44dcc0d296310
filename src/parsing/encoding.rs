//! `Signal_representation` and `Signal_encoding_types` sections.
//!
//! ```text
//! Signal_encoding_types {
//!   LockEncoding {
//!     logical_value, 0, "unlocked";
//!     logical_value, 1, "locked";
//!   }
//!   PositionEncoding {
//!     physical_value, 0, 100, 1, 0, "%";
//!   }
//! }
//! Signal_representation {
//!   LockEncoding: DoorLock, LockState;
//!   PositionEncoding: WindowPos;
//! }
//! ```
//!
//! Encodings are resolved after the signal table is complete and attached to
//! the signals named in the representation, and to every frame entry of the
//! same name.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use super::{number::parse_int, section, split};
use crate::{
    Error, Result,
    config::ParseConfig,
    diagnostics::{DiagnosticKind, Reporter},
    types::{Encoding, Frame, Signal},
};

pub(crate) const REPRESENTATION: &str = "Signal_representation";
pub(crate) const ENCODING_TYPES: &str = "Signal_encoding_types";

const LOGICAL_MARKER: &str = "logical_value";

/// Encoding name to the signals it represents.
pub(crate) type Representation = IndexMap<String, Vec<String>>;

/// Parse `Encoding: Signal1, Signal2;` statements.
pub(crate) fn parse_representation(
    body: &str,
    reporter: &mut Reporter<'_>,
) -> Result<Representation> {
    let mut representation = Representation::new();
    for statement in split::statements(body) {
        let Some((encoding, signals)) = statement.split_once(':') else {
            reporter.skip(
                REPRESENTATION,
                Error::MalformedStatement {
                    section: REPRESENTATION.to_string(),
                    statement: statement.clone(),
                    reason: "expected 'encoding: signal, ...'".to_string(),
                },
            )?;
            continue;
        };
        representation
            .entry(encoding.trim().to_string())
            .or_default()
            .extend(
                signals
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from),
            );
    }
    Ok(representation)
}

/// Remove one enclosing pair of matching quotes. Other quote characters in
/// the label are kept.
fn strip_quotes(label: &str) -> String {
    let label = label.trim();
    ['"', '\'']
        .into_iter()
        .find_map(|q| label.strip_prefix(q)?.strip_suffix(q))
        .unwrap_or(label)
        .trim()
        .to_string()
}

/// Parse the body of one named encoding block.
///
/// Statements that do not fit the encoding kind chosen by the first
/// statement are dropped through `reporter`.
pub(crate) fn parse_encoding(
    name: &str,
    body: &str,
    reporter: &mut Reporter<'_>,
) -> Result<Encoding> {
    let malformed = |statement: &str, reason: &str| Error::MalformedStatement {
        section: ENCODING_TYPES.to_string(),
        statement: format!("{name} {{ {statement} }}"),
        reason: reason.to_string(),
    };
    let statements = split::quoted_statements(body);
    let Some(first) = statements.first() else {
        return Err(malformed("", "empty encoding"));
    };

    if first.contains(LOGICAL_MARKER) {
        let mut values = BTreeMap::new();
        for statement in &statements {
            let mut fields = statement.splitn(3, ',');
            if fields.next().map(str::trim) != Some(LOGICAL_MARKER) {
                reporter.skip(
                    ENCODING_TYPES,
                    malformed(statement, "not a logical_value row in a logical encoding"),
                )?;
                continue;
            }
            let raw = fields
                .next()
                .and_then(parse_int)
                .ok_or_else(|| malformed(statement, "invalid logical value"))?;
            values.insert(raw, fields.next().map(strip_quotes).unwrap_or_default());
        }
        Ok(Encoding::Logical { values })
    } else {
        let fields: Vec<&str> = first.split(',').collect();
        let (Some(min), Some(max)) = (
            fields.get(1).and_then(|f| parse_int(f)),
            fields.get(2).and_then(|f| parse_int(f)),
        ) else {
            return Err(malformed(first, "expected 'physical_value, min, max, ...'"));
        };
        for extra in &statements[1..] {
            reporter.skip(
                ENCODING_TYPES,
                malformed(extra, "only the first row of a physical encoding is kept"),
            )?;
        }
        Ok(Encoding::Physical { min, max })
    }
}

/// Parse every named block of the `Signal_encoding_types` body.
pub(crate) fn parse_encoding_types(
    body: &str,
    reporter: &mut Reporter<'_>,
) -> Result<IndexMap<String, Encoding>> {
    let mut encodings = IndexMap::new();
    for block in section::blocks(body) {
        if block.name.is_empty() {
            reporter.skip(
                ENCODING_TYPES,
                Error::MalformedStatement {
                    section: ENCODING_TYPES.to_string(),
                    statement: block.body.trim().to_string(),
                    reason: "encoding block without a name".to_string(),
                },
            )?;
            continue;
        }
        match parse_encoding(block.name, block.body, reporter) {
            Ok(encoding) => {
                if encodings.contains_key(block.name) {
                    reporter.duplicate(ENCODING_TYPES, block.name)?;
                }
                encodings.insert(block.name.to_string(), encoding);
            }
            Err(e) => reporter.skip(ENCODING_TYPES, e)?,
        }
    }
    Ok(encodings)
}

/// Attach resolved encodings to signals and frame entries.
pub(crate) fn attach(
    encodings: &IndexMap<String, Encoding>,
    representation: &Representation,
    signals: &mut IndexMap<String, Signal>,
    frames: &mut IndexMap<String, Frame>,
    reporter: &mut Reporter<'_>,
) {
    for (name, encoding) in encodings {
        let Some(represented) = representation.get(name) else {
            reporter.push(
                ENCODING_TYPES,
                DiagnosticKind::UnusedEncoding,
                format!("encoding {name} is not referenced by {REPRESENTATION}"),
            );
            continue;
        };
        for signal_name in represented {
            match signals.get_mut(signal_name) {
                Some(signal) => signal.encoding = Some(encoding.clone()),
                None => reporter.push(
                    REPRESENTATION,
                    DiagnosticKind::UnresolvedSignal,
                    format!("encoding {name} represents undefined signal {signal_name}"),
                ),
            }
            for frame in frames.values_mut() {
                if let Some(entry) = frame.signals.get_mut(signal_name) {
                    entry.encoding = Some(encoding.clone());
                }
            }
        }
    }
    for name in representation.keys() {
        if !encodings.contains_key(name) {
            reporter.push(
                REPRESENTATION,
                DiagnosticKind::UnresolvedEncoding,
                format!("encoding {name} is not defined in {ENCODING_TYPES}"),
            );
        }
    }
}

/// Run the encoding pass over the full text.
///
/// Both sections are optional; without them no encodings are attached.
pub(crate) fn resolve(
    text: &str,
    config: &ParseConfig,
    signals: &mut IndexMap<String, Signal>,
    frames: &mut IndexMap<String, Frame>,
    reporter: &mut Reporter<'_>,
) -> Result<()> {
    let representation = match section::locate_optional(text, REPRESENTATION, config)? {
        Some(range) => parse_representation(range.body(text), reporter)?,
        None => Representation::new(),
    };
    let encodings = match section::locate_optional(text, ENCODING_TYPES, config)? {
        Some(range) => parse_encoding_types(range.body(text), reporter)?,
        None => IndexMap::new(),
    };
    attach(&encodings, &representation, signals, frames, reporter);
    Ok(())
}
