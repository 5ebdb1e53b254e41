//! Glyph builders shared by the expression builder and delimiter engine.

use mathbox_metrics::{FontData, FontFamily, FontVariant, Mode};

use crate::dom::{BoxNode, SymbolLeaf, make_container, make_symbol_leaf};

/// Build the glyph for `value` in `variant`.
///
/// The symbol table's replacement glyph, if any, is drawn instead of
/// `value`. Missing metrics are not fatal: a warning is logged and a
/// zero-height leaf is returned.
pub fn make_text(data: &FontData, value: &str, variant: FontVariant, mode: Mode) -> BoxNode {
    let text = data.symbols.resolve(mode, value);
    match data.metrics.get(&text, variant) {
        Some(metrics) => make_symbol_leaf(SymbolLeaf {
            height: metrics.height,
            depth: metrics.depth,
            italic: metrics.italic,
            skew: metrics.skew.unwrap_or(0.0),
            width: metrics.width.unwrap_or(0.0),
            ..SymbolLeaf::new(&text, 0.0, 0.0)
        }),
        None => {
            log::warn!("no character metrics for '{text}' in {variant}");
            BoxNode::SymbolLeaf(SymbolLeaf::new(&text, 0.0, 0.0))
        },
    }
}

/// `value` in math italic, wrapped in `mathit`.
pub fn math_italic(data: &FontData, value: &str, mode: Mode) -> BoxNode {
    make_container(
        &["mathit"],
        vec![make_text(data, value, FontVariant::MathItalic, mode)],
        None,
    )
}

/// `value` upright, in the font family the symbol table declares for it.
/// AMS symbols are wrapped in `amsrm`.
pub fn roman(data: &FontData, value: &str, mode: Mode) -> BoxNode {
    match data.symbols.family(mode, value) {
        FontFamily::Main => make_text(data, value, FontVariant::MainRegular, mode),
        FontFamily::Ams => make_container(
            &["amsrm"],
            vec![make_text(data, value, FontVariant::AmsRegular, mode)],
            None,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixture_data;

    #[test]
    fn plain_glyph_is_bare_leaf() {
        let data = fixture_data();
        match make_text(&data, "x", FontVariant::MainRegular, Mode::Math) {
            BoxNode::SymbolLeaf(l) => {
                assert_eq!(l.text, "x");
                assert_eq!(l.height, 0.45);
                assert_eq!(l.depth, 0.0);
            },
            other => panic!("expected leaf, got {other:?}"),
        }
    }

    #[test]
    fn replacement_glyph_is_measured() {
        let data = fixture_data();
        let node = make_text(&data, "\\langle", FontVariant::Size2Regular, Mode::Math);
        match node {
            BoxNode::SymbolLeaf(l) => {
                assert_eq!(l.text, "\u{27e8}");
                assert_eq!(l.height, 1.15003);
                assert!(l.width > 0.0);
            },
            other => panic!("expected leaf, got {other:?}"),
        }
    }

    #[test]
    fn missing_metrics_degrade_to_zero_leaf() {
        let data = fixture_data();
        let node = make_text(&data, "\u{2603}", FontVariant::MainRegular, Mode::Math);
        assert_eq!(node.height(), 0.0);
        assert_eq!(node.depth(), 0.0);
        assert!(matches!(node, BoxNode::SymbolLeaf(_)));
    }

    #[test]
    fn italic_glyph_gets_margin() {
        let data = fixture_data();
        let node = math_italic(&data, "f", Mode::Math);
        assert!(node.has_class("mathit"));
        let inner = &node.children()[0];
        assert_eq!(inner.style().unwrap().margin_right, Some(0.10764));
    }

    #[test]
    fn roman_picks_family() {
        let data = fixture_data();
        assert!(matches!(
            roman(&data, "+", Mode::Math),
            BoxNode::SymbolLeaf(_)
        ));
        let ams = roman(&data, "\\mho", Mode::Math);
        assert!(ams.has_class("amsrm"));
        assert_eq!(ams.height(), 0.68889);
    }

    #[test]
    fn unknown_symbols_are_main_family() {
        let data = fixture_data();
        assert!(matches!(
            roman(&data, "7", Mode::Text),
            BoxNode::SymbolLeaf(_)
        ));
    }
}
