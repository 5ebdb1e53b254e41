//! Font variants and per-glyph metrics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the fixed math font faces the metrics tables are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FontVariant {
    #[serde(rename = "Main-Regular")]
    MainRegular,
    #[serde(rename = "Main-Bold")]
    MainBold,
    #[serde(rename = "Math-Italic")]
    MathItalic,
    #[serde(rename = "AMS-Regular")]
    AmsRegular,
    #[serde(rename = "Size1-Regular")]
    Size1Regular,
    #[serde(rename = "Size2-Regular")]
    Size2Regular,
    #[serde(rename = "Size3-Regular")]
    Size3Regular,
    #[serde(rename = "Size4-Regular")]
    Size4Regular,
}

impl FontVariant {
    /// Every variant, in table order.
    pub const ALL: [FontVariant; 8] = [
        FontVariant::MainRegular,
        FontVariant::MainBold,
        FontVariant::MathItalic,
        FontVariant::AmsRegular,
        FontVariant::Size1Regular,
        FontVariant::Size2Regular,
        FontVariant::Size3Regular,
        FontVariant::Size4Regular,
    ];

    /// The face name used by metric data files and backends.
    pub fn name(self) -> &'static str {
        match self {
            FontVariant::MainRegular => "Main-Regular",
            FontVariant::MainBold => "Main-Bold",
            FontVariant::MathItalic => "Math-Italic",
            FontVariant::AmsRegular => "AMS-Regular",
            FontVariant::Size1Regular => "Size1-Regular",
            FontVariant::Size2Regular => "Size2-Regular",
            FontVariant::Size3Regular => "Size3-Regular",
            FontVariant::Size4Regular => "Size4-Regular",
        }
    }

    /// Look a variant up by its face name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }

    /// The large-delimiter face for `size` (1..=4).
    pub fn large(size: u8) -> Option<Self> {
        match size {
            1 => Some(FontVariant::Size1Regular),
            2 => Some(FontVariant::Size2Regular),
            3 => Some(FontVariant::Size3Regular),
            4 => Some(FontVariant::Size4Regular),
            _ => None,
        }
    }
}

impl fmt::Display for FontVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Vertical and horizontal metrics of one glyph, in em.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CharacterMetrics {
    pub height: f64,
    pub depth: f64,
    /// Italic correction.
    pub italic: f64,
    /// Kern towards the skew character, used to center accents.
    pub skew: Option<f64>,
    pub width: Option<f64>,
}

impl CharacterMetrics {
    /// Metrics with only height and depth set.
    pub fn new(height: f64, depth: f64) -> Self {
        Self {
            height,
            depth,
            ..Self::default()
        }
    }

    /// Total vertical extent.
    pub fn height_total(&self) -> f64 {
        self.height + self.depth
    }

    /// Build from the data-file tuple order `[depth, height, italic, skew, width]`.
    ///
    /// Returns `None` for tuples shorter than two entries.
    pub fn from_tuple(values: &[f64]) -> Option<Self> {
        let (depth, height) = (*values.first()?, *values.get(1)?);
        Some(Self {
            height,
            depth,
            italic: values.get(2).copied().unwrap_or(0.0),
            skew: values.get(3).copied(),
            width: values.get(4).copied(),
        })
    }
}
