//! Foundation types for mathbox.
//!
//! This crate holds the pieces shared by every mathbox crate: the error
//! taxonomy of the layout engine and the fixed named-color table.

pub mod color;
pub mod error;

pub use error::{MathboxError, Result};
