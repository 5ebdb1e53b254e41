//! The read-only font data bundle handed to every builder.

use std::path::Path;

use mathbox_types::error::Result;
use once_cell::sync::Lazy;

use crate::builtin::builtin_metrics;
use crate::constants::FontConstants;
use crate::delimiters::DelimiterTable;
use crate::font::{CharacterMetrics, FontVariant};
use crate::metrics::FontMetrics;
use crate::symbols::{Mode, SymbolTable};

static SHARED: Lazy<FontData> = Lazy::new(|| {
    let data = FontData::builtin();
    log::debug!(
        "initialised built-in font data ({} Main-Regular glyphs)",
        data.metrics.glyph_count(FontVariant::MainRegular)
    );
    data
});

/// Metrics, constants, symbols and delimiter tables.
#[derive(Debug, Clone)]
pub struct FontData {
    pub metrics: FontMetrics,
    pub constants: FontConstants,
    pub symbols: SymbolTable,
    pub delimiters: DelimiterTable,
}

impl FontData {
    /// The built-in tables.
    pub fn builtin() -> Self {
        Self {
            metrics: builtin_metrics(),
            constants: FontConstants::default(),
            symbols: SymbolTable::builtin(),
            delimiters: DelimiterTable::builtin(),
        }
    }

    /// Process-wide built-in tables, initialised on first use.
    pub fn shared() -> &'static FontData {
        &SHARED
    }

    /// Built-in symbol and delimiter tables with metrics parsed from `json`.
    pub fn with_metrics_json(json: &str) -> Result<Self> {
        Ok(Self {
            metrics: FontMetrics::from_json(json)?,
            ..Self::builtin()
        })
    }

    /// Built-in tables with the glyphs of the metrics file at `path` merged
    /// over the built-in metrics.
    pub fn with_metrics_file(path: &Path) -> Result<Self> {
        let loaded = FontMetrics::load(path)?;
        let mut data = Self::builtin();
        data.metrics.merge(loaded);
        log::info!("merged font metrics from {}", path.display());
        Ok(data)
    }

    /// Metrics of `symbol` in `variant` after replacement-glyph resolution.
    pub fn glyph_metrics(
        &self,
        symbol: &str,
        variant: FontVariant,
        mode: Mode,
    ) -> Option<CharacterMetrics> {
        let glyph = self.symbols.resolve(mode, symbol);
        self.metrics.get(&glyph, variant).copied()
    }
}

impl Default for FontData {
    fn default() -> Self {
        Self::builtin()
    }
}
