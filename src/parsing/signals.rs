//! `Signals` section and the frame cross-link.
//!
//! ```text
//! Signals {
//!   DoorLock: 1, 0, ECU, Door1, Door2;
//!   Serial: 16, {0x00, 0xFF}, Door1, ECU;
//! }
//! ```

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{number::parse_int, split};
use crate::{
    Error, Result,
    diagnostics::{DiagnosticKind, Reporter},
    types::{Frame, InitValue, Signal},
};

pub(crate) const SECTION: &str = "Signals";

/// `name: size, init, publisher [, subscriber ...]`
static SIGNAL_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\w+)\s*:\s*([1-9]\d?)\s*,\s*(\{[^{}]*\}|0[xX][0-9a-fA-F]+|-?\d+)\s*,\s*(\w+)((?:\s*,\s*\w+)*)\s*$",
    )
    .expect("signal statement pattern is valid")
});

fn parse_init(init: &str) -> Option<InitValue> {
    match init.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        Some(bytes) => bytes
            .split(',')
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(parse_int)
            .collect::<Option<Vec<_>>>()
            .map(InitValue::Array),
        None => parse_int(init).map(InitValue::Scalar),
    }
}

fn parse_signal(statement: &str) -> Result<Signal> {
    let malformed = |reason: &str| Error::MalformedStatement {
        section: SECTION.to_string(),
        statement: statement.to_string(),
        reason: reason.to_string(),
    };
    let caps = SIGNAL_STATEMENT
        .captures(statement)
        .ok_or_else(|| malformed("expected 'name: size, init, publisher [, subscriber]'"))?;

    let size = caps[2]
        .parse()
        .map_err(|_| malformed("invalid signal size"))?;
    let init_value = parse_init(&caps[3]).ok_or_else(|| malformed("invalid initial value"))?;
    let subscribers = caps
        .get(5)
        .map(|m| {
            m.as_str()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Ok(Signal {
        name: caps[1].to_string(),
        size,
        init_value,
        publisher: caps[4].to_string(),
        subscribers,
        encoding: None,
    })
}

/// Build the signal table from the body of the `Signals` section.
///
/// Statements that do not match the signal grammar are reported and skipped.
pub(crate) fn parse_signals(
    body: &str,
    reporter: &mut Reporter<'_>,
) -> Result<IndexMap<String, Signal>> {
    let mut signals = IndexMap::new();
    for statement in split::statements(body) {
        match parse_signal(&statement) {
            Ok(signal) => {
                if signals.contains_key(&signal.name) {
                    reporter.duplicate(SECTION, &signal.name)?;
                }
                signals.insert(signal.name.clone(), signal);
            }
            Err(e) => reporter.skip(SECTION, e)?,
        }
    }
    Ok(signals)
}

/// Copy size and initial value of every defined signal into the frames that
/// carry it.
///
/// Frame entries naming a signal that was never defined are left as they are
/// and reported.
pub(crate) fn link_frames(
    signals: &IndexMap<String, Signal>,
    frames: &mut IndexMap<String, Frame>,
    reporter: &mut Reporter<'_>,
) {
    for frame in frames.values_mut() {
        for (name, entry) in frame.signals.iter_mut() {
            match signals.get(name) {
                Some(signal) => {
                    entry.size = Some(signal.size);
                    entry.init_value = Some(signal.init_value.clone());
                }
                None => reporter.push(
                    super::frames::SECTION,
                    DiagnosticKind::UnresolvedSignal,
                    format!("frame {} carries undefined signal {name}", frame.name),
                ),
            }
        }
    }
}
