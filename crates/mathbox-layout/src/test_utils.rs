//! Shared fixtures for layout tests.

use mathbox_metrics::{CharacterMetrics, FontData, FontVariant};

/// Built-in font data with a few glyphs pinned to round values.
///
/// `x` in `Main-Regular` and `Math-Italic` is 0.45 high with no depth and no
/// italic correction.
pub fn fixture_data() -> FontData {
    let mut data = FontData::builtin();
    let x = CharacterMetrics {
        width: Some(0.5),
        ..CharacterMetrics::new(0.45, 0.0)
    };
    data.metrics.insert(FontVariant::MainRegular, 'x', x);
    data.metrics.insert(FontVariant::MathItalic, 'x', x);
    data
}

/// Assert two lengths agree to within 1e-9 em.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
