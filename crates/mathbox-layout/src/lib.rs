//! Math formula layout engine.
//!
//! Turns a semantic formula tree into a tree of nested boxes with exact
//! vertical metrics (height above and depth below a shared baseline),
//! following TeX's rules: the eight-style algebra, inter-atom spacing,
//! script and fraction placement, and delimiter sizing from a ladder of
//! small, large and stacked glyphs. Font data is injected as a read-only
//! [`FontData`](mathbox_metrics::FontData).

pub mod build;
pub mod build_common;
pub mod config;
pub mod context;
pub mod delimiter;
pub mod dom;
pub mod node;
pub mod spacing;
pub mod style;

#[cfg(test)]
pub(crate) mod test_utils;

pub use build::{LayoutBuilder, build_tree};
pub use config::LayoutConfig;
pub use context::{RenderingContext, SizeLevel};
pub use delimiter::{Candidate, custom_sized_delim, left_right_delim, sized_delim};
pub use dom::{BoxNode, Container, Fragment, InlineStyle, SymbolLeaf};
pub use node::SemanticNode;
pub use spacing::{AtomClass, Spacing};
pub use style::Style;
