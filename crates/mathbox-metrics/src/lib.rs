//! Font data for the math layout engine.
//!
//! Everything here is static input: glyph metrics per font variant, TeX font
//! constants, the symbol table and the delimiter tables. [`FontData`]
//! bundles them and is passed by shared reference into the layout code.

pub mod builtin;
pub mod constants;
pub mod data;
pub mod delimiters;
pub mod font;
pub mod metrics;
pub mod symbols;

pub use constants::FontConstants;
pub use data::FontData;
pub use delimiters::{DelimiterAssembly, DelimiterKind, DelimiterTable};
pub use font::{CharacterMetrics, FontVariant};
pub use metrics::FontMetrics;
pub use symbols::{FontFamily, Mode, Symbol, SymbolGroup, SymbolTable};
