//! Rendering context threaded through the builders.
//!
//! A context is immutable. Each derivation records the style and size it
//! was derived from as the "parent", so a builder can tell whether a group
//! crossed a size boundary and needs rescaling.

use std::fmt;

use mathbox_types::color::resolve_named_color;
use mathbox_types::error::{MathboxError, Result};

use crate::style::Style;

const SIZE_MULTIPLIERS: [f64; 10] = [0.5, 0.7, 0.8, 0.9, 1.0, 1.2, 1.44, 1.73, 2.07, 2.49];

/// Absolute size axis `size1`..`size10`, independent of the style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeLevel(u8);

impl SizeLevel {
    /// `size5`, the normal size.
    pub const DEFAULT: SizeLevel = SizeLevel(5);

    pub fn new(level: u8) -> Result<Self> {
        if (1..=10).contains(&level) {
            Ok(SizeLevel(level))
        } else {
            Err(MathboxError::MalformedInput(format!(
                "size level {level} outside 1..=10"
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Font scale relative to `size5`.
    pub fn multiplier(self) -> f64 {
        SIZE_MULTIPLIERS[usize::from(self.0 - 1)]
    }

    pub fn class_name(self) -> String {
        format!("size{}", self.0)
    }
}

impl Default for SizeLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SizeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "size{}", self.0)
    }
}

/// Current style, size and color, plus the style and size of the parent.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderingContext {
    pub style: Style,
    pub size: SizeLevel,
    pub color: Option<String>,
    pub parent_style: Style,
    pub parent_size: SizeLevel,
}

impl RenderingContext {
    /// A root context; its parent equals itself.
    pub fn new(style: Style, size: SizeLevel) -> Self {
        Self {
            style,
            size,
            color: None,
            parent_style: style,
            parent_size: size,
        }
    }

    pub fn with_style(&self, style: Style) -> Self {
        Self {
            style,
            ..self.derived()
        }
    }

    pub fn with_size(&self, size: SizeLevel) -> Self {
        Self {
            size,
            ..self.derived()
        }
    }

    pub fn with_color(&self, color: &str) -> Self {
        Self {
            color: Some(color.to_string()),
            ..self.derived()
        }
    }

    /// Same style, size and color with no pending size change.
    pub fn reset(&self) -> Self {
        self.derived()
    }

    /// The current color with named colors resolved.
    pub fn resolved_color(&self) -> Option<String> {
        self.color
            .as_deref()
            .map(|c| resolve_named_color(c).to_string())
    }

    pub fn style_changed(&self) -> bool {
        self.style != self.parent_style
    }

    pub fn size_changed(&self) -> bool {
        self.size != self.parent_size
    }

    /// Whether a backend must insert a size-compensation wrapper.
    pub fn needs_size_compensation(&self) -> bool {
        self.style_changed() || self.size_changed()
    }

    fn derived(&self) -> Self {
        Self {
            style: self.style,
            size: self.size,
            color: self.color.clone(),
            parent_style: self.style,
            parent_size: self.size,
        }
    }
}

impl Default for RenderingContext {
    fn default() -> Self {
        Self::new(Style::Text, SizeLevel::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_levels_validate() {
        assert!(SizeLevel::new(0).is_err());
        assert!(SizeLevel::new(11).is_err());
        assert_eq!(SizeLevel::new(1).unwrap().multiplier(), 0.5);
        assert_eq!(SizeLevel::new(10).unwrap().multiplier(), 2.49);
        assert_eq!(SizeLevel::DEFAULT.multiplier(), 1.0);
        assert_eq!(SizeLevel::new(7).unwrap().class_name(), "size7");
    }

    #[test]
    fn root_has_no_pending_change() {
        let ctx = RenderingContext::default();
        assert!(!ctx.needs_size_compensation());
        assert_eq!(ctx.parent_style, Style::Text);
    }

    #[test]
    fn with_style_records_parent() {
        let ctx = RenderingContext::new(Style::Display, SizeLevel::DEFAULT);
        let sup = ctx.with_style(Style::Script);
        assert_eq!(sup.style, Style::Script);
        assert_eq!(sup.parent_style, Style::Display);
        assert!(sup.style_changed());
        assert!(!sup.size_changed());
    }

    #[test]
    fn with_size_records_parent() {
        let ctx = RenderingContext::default();
        let big = ctx.with_size(SizeLevel::new(8).unwrap());
        assert_eq!(big.parent_size, SizeLevel::DEFAULT);
        assert!(big.size_changed());
        assert!(big.needs_size_compensation());
    }

    #[test]
    fn color_change_is_not_a_size_change() {
        let ctx = RenderingContext::default().with_style(Style::Script);
        let colored = ctx.with_color("red");
        assert!(!colored.needs_size_compensation());
        assert_eq!(colored.color.as_deref(), Some("red"));
    }

    #[test]
    fn reset_clears_pending_change() {
        let ctx = RenderingContext::default()
            .with_color("blue")
            .with_style(Style::ScriptScript);
        assert!(ctx.style_changed());
        let reset = ctx.reset();
        assert!(!reset.needs_size_compensation());
        assert_eq!(reset.style, Style::ScriptScript);
        assert_eq!(reset.color.as_deref(), Some("blue"));
    }

    #[test]
    fn named_colors_resolve() {
        let ctx = RenderingContext::default();
        assert_eq!(ctx.resolved_color(), None);
        assert_eq!(
            ctx.with_color("mathbox-blue").resolved_color().as_deref(),
            Some("#6495ed")
        );
        assert_eq!(
            ctx.with_color("#123456").resolved_color().as_deref(),
            Some("#123456")
        );
    }
}
