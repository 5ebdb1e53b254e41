//! Built-in glyph metrics.
//!
//! A compact subset of the Computer Modern metrics, enough to lay out Latin
//! letters, digits, common operators and every built-in delimiter at every
//! size. Full tables can be loaded from JSON with
//! [`FontMetrics::from_json`](crate::metrics::FontMetrics::from_json).

use crate::font::{CharacterMetrics, FontVariant};
use crate::metrics::FontMetrics;

/// `(char, [depth, height, italic, skew, width])`
type Row = (char, [f64; 5]);

#[rustfmt::skip]
const MAIN_REGULAR: &[Row] = &[
    (' ',        [0.0, 0.0, 0.0, 0.0, 0.25]),
    ('\u{a0}',   [0.0, 0.0, 0.0, 0.0, 0.25]),
    ('!',        [0.0, 0.69444, 0.0, 0.0, 0.27778]),
    ('(',        [0.25, 0.75, 0.0, 0.0, 0.38889]),
    (')',        [0.25, 0.75, 0.0, 0.0, 0.38889]),
    ('+',        [0.08333, 0.58333, 0.0, 0.0, 0.77778]),
    (',',        [0.19444, 0.10556, 0.0, 0.0, 0.27778]),
    ('/',        [0.25, 0.75, 0.0, 0.0, 0.5]),
    (':',        [0.0, 0.43056, 0.0, 0.0, 0.27778]),
    (';',        [0.19444, 0.43056, 0.0, 0.0, 0.27778]),
    ('<',        [0.0391, 0.5391, 0.0, 0.0, 0.77778]),
    ('=',        [-0.13313, 0.36687, 0.0, 0.0, 0.77778]),
    ('>',        [0.0391, 0.5391, 0.0, 0.0, 0.77778]),
    ('?',        [0.0, 0.69444, 0.0, 0.0, 0.47222]),
    ('[',        [0.25, 0.75, 0.0, 0.0, 0.27778]),
    ('\\',       [0.25, 0.75, 0.0, 0.0, 0.5]),
    (']',        [0.25, 0.75, 0.0, 0.0, 0.27778]),
    ('^',        [0.0, 0.69444, 0.0, 0.0, 0.5]),
    ('{',        [0.25, 0.75, 0.0, 0.0, 0.5]),
    ('|',        [0.25, 0.75, 0.0, 0.0, 0.27778]),
    ('}',        [0.25, 0.75, 0.0, 0.0, 0.5]),
    ('\u{af}',   [0.0, 0.56778, 0.0, 0.0, 0.5]),
    ('\u{b1}',   [0.08333, 0.58333, 0.0, 0.0, 0.77778]),
    ('\u{d7}',   [0.08333, 0.58333, 0.0, 0.0, 0.77778]),
    ('\u{2d9}',  [0.0, 0.66786, 0.0, 0.0, 0.27778]),
    ('\u{393}',  [0.0, 0.68333, 0.0, 0.0, 0.625]),
    ('\u{394}',  [0.0, 0.68333, 0.0, 0.0, 0.83334]),
    ('\u{2016}', [0.25, 0.75, 0.0, 0.0, 0.5]),
    ('\u{2032}', [0.0, 0.55556, 0.0, 0.0, 0.275]),
    ('\u{20d7}', [0.0, 0.71444, 0.15382, 0.0, 0.5]),
    ('\u{2191}', [0.19444, 0.69444, 0.0, 0.0, 0.5]),
    ('\u{2192}', [-0.13313, 0.36687, 0.0, 0.0, 1.0]),
    ('\u{2193}', [0.19444, 0.69444, 0.0, 0.0, 0.5]),
    ('\u{2195}', [0.25, 0.75, 0.0, 0.0, 0.5]),
    ('\u{21d1}', [0.19444, 0.69444, 0.0, 0.0, 0.61111]),
    ('\u{21d3}', [0.19444, 0.69444, 0.0, 0.0, 0.61111]),
    ('\u{21d5}', [0.25, 0.75, 0.0, 0.0, 0.61111]),
    ('\u{2212}', [0.08333, 0.58333, 0.0, 0.0, 0.77778]),
    ('\u{221a}', [0.2, 0.8, 0.0, 0.0, 0.83334]),
    ('\u{221e}', [0.0, 0.43056, 0.0, 0.0, 1.0]),
    ('\u{2223}', [0.25, 0.75, 0.0, 0.0, 0.27778]),
    ('\u{2225}', [0.25, 0.75, 0.0, 0.0, 0.5]),
    ('\u{2264}', [0.13597, 0.63597, 0.0, 0.0, 0.77778]),
    ('\u{2265}', [0.13597, 0.63597, 0.0, 0.0, 0.77778]),
    ('\u{22c5}', [-0.05555, 0.44445, 0.0, 0.0, 0.27778]),
    ('\u{2308}', [0.25, 0.75, 0.0, 0.0, 0.44445]),
    ('\u{2309}', [0.25, 0.75, 0.0, 0.0, 0.44445]),
    ('\u{230a}', [0.25, 0.75, 0.0, 0.0, 0.44445]),
    ('\u{230b}', [0.25, 0.75, 0.0, 0.0, 0.44445]),
    ('\u{23b0}', [0.25, 0.75, 0.0, 0.0, 0.5]),
    ('\u{23b1}', [0.25, 0.75, 0.0, 0.0, 0.5]),
    ('\u{27e8}', [0.25, 0.75, 0.0, 0.0, 0.38889]),
    ('\u{27e9}', [0.25, 0.75, 0.0, 0.0, 0.38889]),
    ('\u{27ee}', [0.25, 0.75, 0.0, 0.0, 0.38889]),
    ('\u{27ef}', [0.25, 0.75, 0.0, 0.0, 0.38889]),
];

#[rustfmt::skip]
const MATH_ITALIC: &[Row] = &[
    ('f',       [0.19444, 0.69444, 0.10764, 0.16667, 0.48958]),
    ('x',       [0.0, 0.43056, 0.0, 0.02778, 0.57153]),
    ('y',       [0.19444, 0.43056, 0.03588, 0.05556, 0.49028]),
    ('A',       [0.0, 0.68333, 0.0, 0.13889, 0.75]),
    ('\u{3b1}', [0.0, 0.43056, 0.0037, 0.02778, 0.6397]),
    ('\u{3b2}', [0.19444, 0.69444, 0.05278, 0.08334, 0.56563]),
    ('\u{3b3}', [0.19444, 0.43056, 0.05556, 0.0, 0.51773]),
    ('\u{3b8}', [0.0, 0.69444, 0.02778, 0.08334, 0.46944]),
    ('\u{3c0}', [0.0, 0.43056, 0.03588, 0.0, 0.57014]),
];

#[rustfmt::skip]
const AMS_REGULAR: &[Row] = &[
    ('\u{2127}', [0.0, 0.68889, 0.0, 0.0, 0.72222]),
    ('\u{25a0}', [0.0, 0.675, 0.0, 0.0, 0.77778]),
    ('\u{25ca}', [0.11111, 0.69224, 0.0, 0.0, 0.66667]),
];

#[rustfmt::skip]
const SIZE1_PIECES: &[Row] = &[
    ('\u{2016}', [-0.00099, 0.601, 0.0, 0.0, 0.77778]),
    ('\u{2191}', [1e-05, 0.6, 0.0, 0.0, 0.66667]),
    ('\u{2193}', [1e-05, 0.6, 0.0, 0.0, 0.66667]),
    ('\u{21d1}', [1e-05, 0.6, 0.0, 0.0, 0.77778]),
    ('\u{21d3}', [1e-05, 0.6, 0.0, 0.0, 0.77778]),
    ('\u{2223}', [-0.00099, 0.601, 0.0, 0.0, 0.33334]),
    ('\u{2225}', [-0.00099, 0.601, 0.0, 0.0, 0.55556]),
    ('\u{23d0}', [-0.00099, 0.601, 0.0, 0.0, 0.66667]),
];

#[rustfmt::skip]
const SIZE4_PIECES: &[Row] = &[
    ('\u{239b}', [0.00025, 1.80025, 0.0, 0.0, 0.875]),
    ('\u{239c}', [0.01, 0.6, 0.0, 0.0, 0.875]),
    ('\u{239d}', [0.64502, 1.155, 0.0, 0.0, 0.875]),
    ('\u{239e}', [0.00025, 1.80025, 0.0, 0.0, 0.875]),
    ('\u{239f}', [0.01, 0.6, 0.0, 0.0, 0.875]),
    ('\u{23a0}', [0.64502, 1.155, 0.0, 0.0, 0.875]),
    ('\u{23a1}', [0.00121, 1.80121, 0.0, 0.0, 0.66667]),
    ('\u{23a2}', [0.0, 0.6, 0.0, 0.0, 0.66667]),
    ('\u{23a3}', [0.64502, 1.155, 0.0, 0.0, 0.66667]),
    ('\u{23a4}', [0.00121, 1.80121, 0.0, 0.0, 0.66667]),
    ('\u{23a5}', [0.0, 0.6, 0.0, 0.0, 0.66667]),
    ('\u{23a6}', [0.64502, 1.155, 0.0, 0.0, 0.66667]),
    ('\u{23a7}', [1e-05, 0.9, 0.0, 0.0, 0.88889]),
    ('\u{23a8}', [0.65002, 1.15003, 0.0, 0.0, 0.88889]),
    ('\u{23a9}', [0.90001, 0.0, 0.0, 0.0, 0.88889]),
    ('\u{23aa}', [0.0, 0.3, 0.0, 0.0, 0.88889]),
    ('\u{23ab}', [1e-05, 0.9, 0.0, 0.0, 0.88889]),
    ('\u{23ac}', [0.65002, 1.15003, 0.0, 0.0, 0.88889]),
    ('\u{23ad}', [0.90001, 0.0, 0.0, 0.0, 0.88889]),
    ('\u{23b7}', [0.88502, 0.915, 0.0, 0.0, 1.05556]),
    ('\u{e000}', [-0.00499, 0.605, 0.0, 0.0, 1.05556]),
    ('\u{e001}', [-0.00499, 0.605, 0.0, 0.0, 1.05556]),
];

/// Glyphs that have pre-drawn larger variants in every `SizeN` face.
const LARGE_GLYPHS: &[char] = &[
    '(', ')', '/', '[', '\\', ']', '{', '}', '\u{2308}', '\u{2309}', '\u{230a}', '\u{230b}',
    '\u{221a}', '\u{27e8}', '\u{27e9}',
];

/// `(depth, height, widening)` of the large glyphs in `Size1`..`Size4`.
const LARGE_EXTENTS: [(f64, f64, f64); 4] = [
    (0.35001, 0.85003, 0.0),
    (0.65002, 1.15003, 0.125),
    (0.95003, 1.45004, 0.25),
    (1.25003, 1.75001, 0.375),
];

fn insert_rows(table: &mut FontMetrics, variant: FontVariant, rows: &[Row]) {
    for &(ch, values) in rows {
        if let Some(metrics) = CharacterMetrics::from_tuple(&values) {
            table.insert(variant, ch, metrics);
        }
    }
}

/// Approximate metrics for a Latin letter by its shape: ascenders,
/// descenders and x-height letters.
fn letter_metrics(ch: char, width: f64) -> CharacterMetrics {
    let (depth, height) = match ch {
        'g' | 'j' | 'p' | 'q' | 'y' => (0.19444, 0.43056),
        'b' | 'd' | 'f' | 'h' | 'k' | 'l' => (0.0, 0.69444),
        'i' => (0.0, 0.66786),
        't' => (0.0, 0.61508),
        'Q' => (0.19444, 0.68333),
        c if c.is_ascii_uppercase() => (0.0, 0.68333),
        _ => (0.0, 0.43056),
    };
    CharacterMetrics {
        height,
        depth,
        width: Some(width),
        ..CharacterMetrics::default()
    }
}

/// Build the built-in metrics table.
pub fn builtin_metrics() -> FontMetrics {
    let mut table = FontMetrics::new();

    for ch in ('a'..='z').chain('A'..='Z') {
        let width = if ch.is_ascii_uppercase() { 0.75 } else { 0.5 };
        table.insert(FontVariant::MainRegular, ch, letter_metrics(ch, width));
        table.insert(FontVariant::MainBold, ch, letter_metrics(ch, width * 1.15));
        let mut italic = letter_metrics(ch, width);
        italic.skew = Some(0.0);
        table.insert(FontVariant::MathItalic, ch, italic);
    }
    for ch in '0'..='9' {
        let digit = CharacterMetrics {
            width: Some(0.5),
            ..CharacterMetrics::new(0.64444, 0.0)
        };
        table.insert(FontVariant::MainRegular, ch, digit);
        table.insert(
            FontVariant::MainBold,
            ch,
            CharacterMetrics {
                width: Some(0.575),
                ..digit
            },
        );
    }

    insert_rows(&mut table, FontVariant::MainRegular, MAIN_REGULAR);
    insert_rows(&mut table, FontVariant::MathItalic, MATH_ITALIC);
    insert_rows(&mut table, FontVariant::AmsRegular, AMS_REGULAR);
    insert_rows(&mut table, FontVariant::Size1Regular, SIZE1_PIECES);
    insert_rows(&mut table, FontVariant::Size4Regular, SIZE4_PIECES);

    for (size, &(depth, height, widening)) in (1u8..=4).zip(LARGE_EXTENTS.iter()) {
        let Some(variant) = FontVariant::large(size) else {
            continue;
        };
        for &ch in LARGE_GLYPHS {
            let base = table
                .get(&ch.to_string(), FontVariant::MainRegular)
                .and_then(|m| m.width)
                .unwrap_or(0.5);
            let metrics = CharacterMetrics {
                width: Some(base + 0.06 + widening),
                ..CharacterMetrics::new(height, depth)
            };
            table.insert(variant, ch, metrics);
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_variants_grow_with_size() {
        let t = builtin_metrics();
        let mut last = 0.0;
        for size in 1..=4 {
            let variant = FontVariant::large(size).unwrap();
            let m = t.get("(", variant).unwrap();
            assert!(m.height_total() > last);
            last = m.height_total();
        }
        assert!((last - 3.00004).abs() < 1e-9);
    }

    #[test]
    fn every_large_glyph_exists_in_every_size() {
        let t = builtin_metrics();
        for size in 1..=4 {
            let variant = FontVariant::large(size).unwrap();
            for &ch in LARGE_GLYPHS {
                assert!(t.get(&ch.to_string(), variant).is_some(), "{ch} in {variant}");
            }
        }
    }

    #[test]
    fn stack_pieces_present() {
        let t = builtin_metrics();
        let ext = t.get("\u{239c}", FontVariant::Size4Regular).unwrap();
        assert_eq!(ext.height, 0.6);
        assert_eq!(ext.depth, 0.01);
        assert!(t.get("\u{23d0}", FontVariant::Size1Regular).is_some());
    }

    #[test]
    fn surd_has_large_variants_and_pieces() {
        let t = builtin_metrics();
        assert_eq!(t.get("\u{221a}", FontVariant::MainRegular).unwrap().height, 0.8);
        assert!(t.get("\u{221a}", FontVariant::Size4Regular).is_some());
        for piece in ["\u{23b7}", "\u{e000}", "\u{e001}"] {
            assert!(t.get(piece, FontVariant::Size4Regular).is_some(), "{piece}");
        }
    }

    #[test]
    fn math_italic_carries_corrections() {
        let t = builtin_metrics();
        let f = t.get("f", FontVariant::MathItalic).unwrap();
        assert_eq!(f.italic, 0.10764);
        let b = t.get("b", FontVariant::MathItalic).unwrap();
        assert_eq!(b.italic, 0.0);
        assert_eq!(b.height, 0.69444);
    }

    #[test]
    fn letters_have_shapes() {
        let t = builtin_metrics();
        assert_eq!(t.get("g", FontVariant::MainRegular).unwrap().depth, 0.19444);
        assert_eq!(t.get("x", FontVariant::MainRegular).unwrap().height, 0.43056);
        assert_eq!(t.get("M", FontVariant::MainRegular).unwrap().height, 0.68333);
    }
}
