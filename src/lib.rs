#![forbid(unsafe_code)]

//! # ldf-rs
//!
//! A Rust library for reading LIN Description Files (LDF).
//!
//! An LDF describes a LIN (Local Interconnect Network) cluster: the master and
//! slave nodes, the frames exchanged on the bus, the signals packed into those
//! frames, the encodings giving raw signal values a meaning, and per-node
//! attributes such as the frames a slave may have reconfigured.
//!
//! ## Supported sections
//!
//! - `Nodes`
//! - `Frames`
//! - `Signals`
//! - `Signal_representation` and `Signal_encoding_types`
//! - `Node_attributes` (LIN 2.0 and LIN 2.1+ `configurable_frames` forms)
//!
//! Schedule tables, diagnostic frames and the remaining LIN sections are not
//! interpreted, and no LIN protocol rules (bit overlap, id ranges) are checked.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ldf_rs::{Ldf, Result};
//!
//! fn main() -> Result<()> {
//!     let ldf = Ldf::from_file("body.ldf")?;
//!
//!     println!("Master: {}", ldf.nodes().master);
//!     for (name, frame) in ldf.frames() {
//!         println!("{name} ({:#04x}) from {}", frame.id, frame.publisher);
//!         for (signal, entry) in &frame.signals {
//!             println!("  {signal} @ bit {}", entry.offset);
//!         }
//!     }
//!
//!     for diagnostic in ldf.diagnostics() {
//!         eprintln!("skipped: {diagnostic}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`parsing`] | Section locator, statement splitter and the per-section builders |
//! | [`types`] | Nodes, frames, signals, encodings and node attributes |
//! | [`config`] | Parse configuration and [`LdfParserBuilder`] |
//! | [`diagnostics`] | Non-fatal findings collected while parsing |
//! | [`error`] | Error types and [`Result`] alias |
//!
//! ## Error Handling
//!
//! Missing required sections, unreadable files and wrong file types are
//! reported as [`Error`]. Individual statements that cannot be read are
//! skipped and listed in [`Ldf::diagnostics`] unless
//! [`LdfParserBuilder::strict`] is enabled.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod parsing;
pub mod types;

mod ldf;
mod parser;

// Re-export commonly used types at the crate root
pub use config::{DuplicatePolicy, LdfParserBuilder, ParseConfig};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::{Error, Result};
pub use ldf::{Ldf, LdfSnapshot};
pub use parser::{LdfParser, State};
pub use types::{
    AttributeValue, Encoding, Frame, FrameSignal, InitValue, NodeAttributes, NodeTable, Signal,
};
