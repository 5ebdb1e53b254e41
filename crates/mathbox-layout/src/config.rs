//! Layout configuration (`mathbox.toml`).

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use mathbox_metrics::FontData;
use mathbox_types::error::{MathboxError, Result};
use serde::{Deserialize, Serialize};

use crate::build::build_tree;
use crate::context::{RenderingContext, SizeLevel};
use crate::dom::BoxNode;
use crate::node::SemanticNode;
use crate::style::Style;

/// How a formula is laid out by default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Start in display style instead of text style.
    pub display_mode: bool,
    /// Starting size level, 1..=10.
    pub default_size: u8,
    /// Color applied to the whole formula.
    pub default_color: Option<String>,
    /// Metrics JSON merged over the built-in tables.
    pub metrics_path: Option<PathBuf>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            display_mode: false,
            default_size: SizeLevel::DEFAULT.get(),
            default_color: None,
            metrics_path: None,
        }
    }
}

impl LayoutConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.size_level()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        log::info!("loaded layout config from {}", path.display());
        Ok(config)
    }

    fn size_level(&self) -> Result<SizeLevel> {
        SizeLevel::new(self.default_size).map_err(|_| {
            MathboxError::Config(format!(
                "default_size must be in 1..=10, got {}",
                self.default_size
            ))
        })
    }

    /// The root rendering context.
    pub fn initial_context(&self) -> Result<RenderingContext> {
        let style = if self.display_mode {
            Style::Display
        } else {
            Style::Text
        };
        let mut ctx = RenderingContext::new(style, self.size_level()?);
        ctx.color = self.default_color.clone();
        Ok(ctx)
    }

    /// Font data for this configuration: the shared built-in tables, or
    /// the built-in tables merged with `metrics_path`.
    pub fn font_data(&self) -> Result<Cow<'static, FontData>> {
        match &self.metrics_path {
            Some(path) => Ok(Cow::Owned(FontData::with_metrics_file(path)?)),
            None => Ok(Cow::Borrowed(FontData::shared())),
        }
    }

    /// Lay out `nodes` under this configuration.
    pub fn layout(&self, nodes: &[SemanticNode]) -> Result<BoxNode> {
        let data = self.font_data()?;
        build_tree(nodes, &self.initial_context()?, &data)
    }
}
