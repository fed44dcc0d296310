//! Section scanning and the per-section table builders.
//!
//! [`section`], [`split`] and [`number`] are the shared building blocks; the
//! remaining modules each turn one LDF section into a table and are driven by
//! [`Ldf::parse_with_config`](crate::Ldf::parse_with_config).

pub mod number;
pub mod section;
pub mod split;

pub(crate) mod attributes;
pub(crate) mod encoding;
pub(crate) mod frames;
pub(crate) mod nodes;
pub(crate) mod signals;

pub use section::{Block, SectionRange, blocks, find_close, locate, locate_optional};
