use indexmap::IndexMap;

use crate::{
    Result,
    config::ParseConfig,
    diagnostics::{Diagnostic, Reporter},
    parsing::{attributes, encoding, frames, nodes, section, signals, split},
    types::{Frame, NodeAttributes, NodeTable, Signal},
};

/// A parsed LIN Description File.
///
/// Holds the node, frame, signal and node attribute tables of one file. The
/// document is built in a single pass and never changes afterwards; parsing
/// another file produces a new [`Ldf`].
///
/// # Example
///
/// ```
/// use ldf_rs::Ldf;
///
/// let text = r#"
/// Nodes { Master: ECU, 5 ms, 0.1 ms; Slaves: Door1; }
/// Signals { DoorLock: 1, 0, ECU, Door1; }
/// Frames { DoorCmd: 0x10, ECU, 1 { DoorLock, 0; } }
/// Node_attributes { Door1 { configured_NAD = 0x01; } }
/// "#;
/// let ldf = Ldf::parse(text).unwrap();
/// assert_eq!(ldf.nodes().master, "ECU");
/// assert_eq!(ldf.frames()["DoorCmd"].signals["DoorLock"].size, Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ldf {
    nodes: NodeTable,
    frames: IndexMap<String, Frame>,
    signals: IndexMap<String, Signal>,
    attributes: IndexMap<String, NodeAttributes>,
    diagnostics: Vec<Diagnostic>,
}

/// Borrowed view of all four tables, as returned by [`Ldf::all`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LdfSnapshot<'a> {
    /// Node attributes by node name.
    pub attributes: &'a IndexMap<String, NodeAttributes>,
    /// Master and slave nodes.
    pub nodes: &'a NodeTable,
    /// Frames by name.
    pub frames: &'a IndexMap<String, Frame>,
    /// Signals by name.
    pub signals: &'a IndexMap<String, Signal>,
}

impl Ldf {
    /// Parse LDF text with the default configuration.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with_config(text, &ParseConfig::default())
    }

    /// Parse LDF text.
    ///
    /// Sections are read in a fixed order: nodes, frames, signals (followed by
    /// the encoding pass), node attributes. Signals and encodings enrich the
    /// frame entries built before them.
    ///
    /// # Errors
    /// Fails if one of the `Nodes`, `Frames`, `Signals` or `Node_attributes`
    /// sections is missing or unterminated, if the `Nodes` section lacks its
    /// master or slaves, or if `config` turns a statement-level problem into
    /// an error.
    pub fn parse_with_config(text: &str, config: &ParseConfig) -> Result<Self> {
        let text = split::strip_comments(text);
        let mut reporter = Reporter::new(config);

        let range = section::locate(&text, nodes::SECTION, config)?;
        let nodes = nodes::parse_nodes(range.body(&text))?;

        let range = section::locate(&text, frames::SECTION, config)?;
        let mut frames = frames::parse_frames(range.body(&text), &mut reporter)?;

        let range = section::locate(&text, signals::SECTION, config)?;
        let mut signals = signals::parse_signals(range.body(&text), &mut reporter)?;
        signals::link_frames(&signals, &mut frames, &mut reporter);
        encoding::resolve(&text, config, &mut signals, &mut frames, &mut reporter)?;

        let range = section::locate(&text, attributes::SECTION, config)?;
        let attributes = attributes::parse_attributes(range.body(&text), &mut reporter)?;

        Ok(Self {
            nodes,
            frames,
            signals,
            attributes,
            diagnostics: reporter.into_diagnostics(),
        })
    }

    /// Read and parse an `.ldf` file with the default configuration.
    ///
    /// # Errors
    /// [`Error::InvalidFileType`](crate::Error::InvalidFileType) unless the
    /// extension is `ldf` (any case), [`Error::FileNotFound`](crate::Error::FileNotFound)
    /// if the path does not exist, plus everything [`Ldf::parse`] reports.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = crate::parser::read_ldf_file(path.as_ref())?;
        Self::parse(&text)
    }

    /// Master and slave nodes.
    pub fn nodes(&self) -> &NodeTable {
        &self.nodes
    }

    /// All signals by name, in file order.
    pub fn signals(&self) -> &IndexMap<String, Signal> {
        &self.signals
    }

    /// A single signal.
    pub fn signal(&self, name: &str) -> Option<&Signal> {
        self.signals.get(name)
    }

    /// Signals published by `node`.
    pub fn signals_by_publisher(&self, node: &str) -> IndexMap<&str, &Signal> {
        self.signals
            .iter()
            .filter(|(_, s)| s.publisher == node)
            .map(|(name, s)| (name.as_str(), s))
            .collect()
    }

    /// All frames by name, in file order.
    pub fn frames(&self) -> &IndexMap<String, Frame> {
        &self.frames
    }

    /// A single frame.
    pub fn frame(&self, name: &str) -> Option<&Frame> {
        self.frames.get(name)
    }

    /// The first frame with identifier `id`.
    pub fn frame_by_id(&self, id: u32) -> Option<&Frame> {
        self.frames.values().find(|f| f.id == id)
    }

    /// Frames published by `node`.
    pub fn frames_by_publisher(&self, node: &str) -> IndexMap<&str, &Frame> {
        self.frames
            .iter()
            .filter(|(_, f)| f.publisher == node)
            .map(|(name, f)| (name.as_str(), f))
            .collect()
    }

    /// Attributes of every node that has an attribute block.
    pub fn node_attributes(&self) -> &IndexMap<String, NodeAttributes> {
        &self.attributes
    }

    /// Attributes of `node`, if it has an attribute block.
    pub fn attributes_for(&self, node: &str) -> Option<&NodeAttributes> {
        self.attributes.get(node)
    }

    /// All four tables at once.
    pub fn all(&self) -> LdfSnapshot<'_> {
        LdfSnapshot {
            attributes: &self.attributes,
            nodes: &self.nodes,
            frames: &self.frames,
            signals: &self.signals,
        }
    }

    /// Statements skipped and references left unresolved while parsing.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Serialize the [`all`](Ldf::all) bundle as pretty printed JSON.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.all())
            .map_err(|e| crate::Error::SerializationError(e.to_string()))
    }
}
