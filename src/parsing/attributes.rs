//! `Node_attributes` section.
//!
//! ```text
//! Node_attributes {
//!   Door1 {
//!     LIN_protocol = "2.1";
//!     configured_NAD = 0x01;
//!     product_id = 0x1E, 0x1, 0;
//!     configurable_frames {
//!       DoorCmd;
//!       DoorStatus;
//!     }
//!   }
//! }
//! ```
//!
//! LIN 2.0 files give a message id for every configurable frame
//! (`DoorCmd = 0x10;`), later revisions list the frame names only.

use indexmap::IndexMap;

use super::{section, split};
use crate::{
    Error, Result,
    diagnostics::Reporter,
    types::{AttributeValue, NodeAttributes},
};

pub(crate) const SECTION: &str = "Node_attributes";

const CONFIGURABLE_FRAMES: &str = "configurable_frames";

fn parse_configurable_frames(body: &str) -> IndexMap<String, String> {
    split::statements(body)
        .into_iter()
        .map(|entry| match entry.split_once('=') {
            Some((frame, id)) => (frame.trim().to_string(), id.trim().to_string()),
            None => (entry, String::new()),
        })
        .collect()
}

/// Parse the body of a single node's attribute block.
fn parse_node_attributes(
    node: &str,
    body: &str,
    reporter: &mut Reporter<'_>,
) -> Result<NodeAttributes> {
    let (fields_text, configurable_frames) =
        match section::locate_optional(body, CONFIGURABLE_FRAMES, reporter.config())? {
            Some(range) => (
                format!("{}{}", &body[..range.keyword_start], &body[range.after(body)..]),
                parse_configurable_frames(range.body(body)),
            ),
            None => (body.to_string(), IndexMap::new()),
        };

    let mut fields = IndexMap::new();
    for statement in split::statements(&fields_text) {
        let Some((key, value)) = statement.split_once('=') else {
            reporter.skip(
                SECTION,
                Error::MalformedStatement {
                    section: SECTION.to_string(),
                    statement: statement.clone(),
                    reason: format!("expected 'key = value' for node {node}"),
                },
            )?;
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        let value = if key.eq_ignore_ascii_case("product_id") {
            AttributeValue::List(value.split(',').map(|v| v.trim().to_string()).collect())
        } else {
            AttributeValue::Text(value.to_string())
        };
        fields.insert(key.to_string(), value);
    }

    Ok(NodeAttributes {
        fields,
        configurable_frames,
    })
}

/// Build the attribute table from the body of the `Node_attributes` section.
pub(crate) fn parse_attributes(
    body: &str,
    reporter: &mut Reporter<'_>,
) -> Result<IndexMap<String, NodeAttributes>> {
    let mut attributes = IndexMap::new();
    for block in section::blocks(body) {
        if block.name.is_empty() {
            reporter.skip(
                SECTION,
                Error::MalformedStatement {
                    section: SECTION.to_string(),
                    statement: block.body.trim().to_string(),
                    reason: "attribute block without a node name".to_string(),
                },
            )?;
            continue;
        }
        let node = parse_node_attributes(block.name, block.body, reporter)?;
        if attributes.contains_key(block.name) {
            reporter.duplicate(SECTION, block.name)?;
        }
        attributes.insert(block.name.to_string(), node);
    }
    Ok(attributes)
}
