//! Data model of a parsed LDF file.
//!
//! All types are plain owned values. Tables keyed by name use [`IndexMap`] so
//! that iteration follows the order of definition in the file.

use std::collections::BTreeMap;

use indexmap::IndexMap;

/// Master and slave nodes from the `Nodes` section.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeTable {
    /// Master node name.
    pub master: String,
    /// Slave node names in file order.
    pub slaves: Vec<String>,
    /// Master time base in milliseconds, when given.
    pub time_base_ms: Option<f64>,
    /// Master jitter in milliseconds, when given.
    pub jitter_ms: Option<f64>,
}

/// Initial value of a signal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum InitValue {
    /// Scalar signal initial value.
    Scalar(i64),
    /// Byte array initial value (`{0x00, 0xFF, ...}`).
    Array(Vec<i64>),
}

/// Interpretation attached to a signal's raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Encoding {
    /// Discrete raw values with human readable labels.
    Logical {
        /// Raw value to label.
        values: BTreeMap<i64, String>,
    },
    /// Raw value range.
    Physical {
        /// Lowest raw value.
        min: i64,
        /// Highest raw value.
        max: i64,
    },
}

impl Encoding {
    /// Label for `raw` in a logical encoding.
    pub fn label(&self, raw: i64) -> Option<&str> {
        match self {
            Encoding::Logical { values } => values.get(&raw).map(String::as_str),
            Encoding::Physical { .. } => None,
        }
    }
}

/// A signal as placed inside a frame.
///
/// Created with only the bit offset while frames are parsed; the size, initial
/// value and encoding are filled in once the `Signals` and encoding sections
/// have been read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameSignal {
    /// Bit offset inside the frame.
    pub offset: u32,
    /// Bit size, copied from the signal definition.
    pub size: Option<u32>,
    /// Initial value, copied from the signal definition.
    pub init_value: Option<InitValue>,
    /// Encoding, copied from the signal definition.
    pub encoding: Option<Encoding>,
}

/// A frame from the `Frames` section.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Frame name.
    pub name: String,
    /// Frame identifier.
    pub id: u32,
    /// Publishing node.
    pub publisher: String,
    /// Length in bytes.
    pub length: u32,
    /// Contained signals in file order.
    pub signals: IndexMap<String, FrameSignal>,
}

/// A signal from the `Signals` section.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signal {
    /// Signal name.
    pub name: String,
    /// Size in bits.
    pub size: u32,
    /// Initial value.
    pub init_value: InitValue,
    /// Publishing node.
    pub publisher: String,
    /// Subscribing nodes, possibly none.
    pub subscribers: Vec<String>,
    /// Resolved encoding, if the signal is listed in `Signal_representation`.
    pub encoding: Option<Encoding>,
}

impl Signal {
    /// First subscriber, or `""` when the signal has none.
    pub fn subscriber(&self) -> &str {
        self.subscribers.first().map(String::as_str).unwrap_or("")
    }
}

/// Value of a node attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttributeValue {
    /// Verbatim value text.
    Text(String),
    /// Comma separated value (only `product_id`).
    List(Vec<String>),
}

impl AttributeValue {
    /// The value as text, if it is not a list.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            AttributeValue::List(_) => None,
        }
    }

    /// The value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttributeValue::Text(_) => None,
            AttributeValue::List(items) => Some(items),
        }
    }
}

/// Attributes of a single node from the `Node_attributes` section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeAttributes {
    /// `key = value` statements in file order.
    pub fields: IndexMap<String, AttributeValue>,
    /// Frames the node may reconfigure, with the message id given by LIN 2.0
    /// files or `""` for LIN 2.1 and later.
    pub configurable_frames: IndexMap<String, String>,
}

impl NodeAttributes {
    /// Look up a field by key.
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.fields.get(key)
    }
}
