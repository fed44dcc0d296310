//! `Frames` section.
//!
//! ```text
//! Frames {
//!   DoorCmd: 0x10, ECU, 2 {
//!     DoorLock, 0;
//!     WindowPos, 8;
//!   }
//! }
//! ```

use indexmap::IndexMap;

use super::{number::parse_u32, split};
use crate::{
    Error, Result,
    diagnostics::Reporter,
    types::{Frame, FrameSignal},
};

pub(crate) const SECTION: &str = "Frames";

fn malformed(block: &str, reason: impl Into<String>) -> Error {
    Error::MalformedFrame {
        statement: block.to_string(),
        reason: reason.into(),
    }
}

/// Parse one `Name: id, publisher, length { signal, offset; ... ` block.
///
/// The closing brace has already been removed by the caller. Malformed
/// `signal, offset` entries are reported and skipped.
fn parse_frame(block: &str, reporter: &mut Reporter<'_>) -> Result<Frame> {
    let mut parts = block.split('{');
    let (Some(header), Some(entries), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed(block, "expected exactly one '{'"));
    };

    let (name, fields) = header
        .split_once(':')
        .ok_or_else(|| malformed(block, "missing ':' after frame name"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(malformed(block, "empty frame name"));
    }
    let fields: Vec<&str> = fields.split(',').map(str::trim).collect();
    let [id, publisher, length] = fields.as_slice() else {
        return Err(malformed(
            block,
            format!("expected 'id, publisher, length', found {} fields", fields.len()),
        ));
    };
    let id = parse_u32(id).ok_or_else(|| malformed(block, format!("invalid frame id {id:?}")))?;
    let length = parse_u32(length)
        .ok_or_else(|| malformed(block, format!("invalid frame length {length:?}")))?;

    let mut signals = IndexMap::new();
    for entry in split::statements(entries) {
        let parsed = entry
            .split_once(',')
            .and_then(|(sig, offset)| Some((sig.trim(), parse_u32(offset)?)))
            .filter(|(sig, _)| !sig.is_empty());
        match parsed {
            Some((sig, offset)) => {
                signals.insert(
                    sig.to_string(),
                    FrameSignal {
                        offset,
                        ..FrameSignal::default()
                    },
                );
            }
            None => reporter.skip(
                SECTION,
                Error::MalformedStatement {
                    section: SECTION.to_string(),
                    statement: entry.clone(),
                    reason: format!("expected 'signal, offset' in frame {name}"),
                },
            )?,
        }
    }

    Ok(Frame {
        name: name.to_string(),
        id,
        publisher: publisher.to_string(),
        length,
        signals,
    })
}

/// Build the frame table from the body of the `Frames` section.
///
/// Signal entries only carry their bit offset at this point.
pub(crate) fn parse_frames(
    body: &str,
    reporter: &mut Reporter<'_>,
) -> Result<IndexMap<String, Frame>> {
    let mut frames = IndexMap::new();
    for block in split::brace_blocks(body) {
        match parse_frame(&block, reporter) {
            Ok(frame) => {
                if frames.contains_key(&frame.name) {
                    reporter.duplicate(SECTION, &frame.name)?;
                }
                frames.insert(frame.name.clone(), frame);
            }
            Err(e @ Error::MalformedFrame { .. }) => reporter.skip(SECTION, e)?,
            Err(e) => return Err(e),
        }
    }
    Ok(frames)
}
