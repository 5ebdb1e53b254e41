//! Box tree produced by the layout engine.
//!
//! Three node kinds: a [`SymbolLeaf`] carrying one text run and its glyph
//! metrics, a [`Container`] carrying class tags and inline overrides, and a
//! [`Fragment`] that groups children without a box of its own.
//!
//! Containers and fragments take their height, depth and max font size as
//! the maximum over their direct children when built. Builders adjust those
//! values afterwards for shifts and style rescaling.

use serde::Serialize;

use crate::context::{RenderingContext, SizeLevel};
use crate::style::Style;

// -----------------------------------------------------------------------
// InlineStyle
// -----------------------------------------------------------------------

/// Inline overrides, in em of the node's local font size.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InlineStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_right_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl InlineStyle {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The set overrides as CSS-like `(property, value)` pairs.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let lengths = [
            ("top", self.top),
            ("margin-left", self.margin_left),
            ("margin-right", self.margin_right),
            ("font-size", self.font_size),
            ("height", self.height),
            ("vertical-align", self.vertical_align),
            ("border-right-width", self.border_right_width),
            ("border-top-width", self.border_top_width),
        ];
        let mut out: Vec<(&'static str, String)> = lengths
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, format!("{v}em"))))
            .collect();
        if let Some(color) = &self.color {
            out.push(("color", color.clone()));
        }
        out
    }
}

// -----------------------------------------------------------------------
// Nodes
// -----------------------------------------------------------------------

/// One text run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SymbolLeaf {
    pub text: String,
    pub height: f64,
    pub depth: f64,
    pub italic: f64,
    pub skew: f64,
    pub width: f64,
    pub max_font_size: f64,
    #[serde(skip_serializing_if = "InlineStyle::is_empty")]
    pub style: InlineStyle,
}

impl SymbolLeaf {
    /// A leaf with only text and vertical metrics.
    pub fn new(text: &str, height: f64, depth: f64) -> Self {
        Self {
            text: text.to_string(),
            height,
            depth,
            ..Self::default()
        }
    }

    /// Lower into a node. A leaf carrying overrides is hoisted into an
    /// unclassed container that carries them instead.
    pub fn into_node(mut self) -> BoxNode {
        if self.style.is_empty() {
            return BoxNode::SymbolLeaf(self);
        }
        let style = std::mem::take(&mut self.style);
        let mut container = make_container(&[], vec![BoxNode::SymbolLeaf(self)], None);
        if let BoxNode::Container(c) = &mut container {
            c.style = style;
        }
        container
    }
}

/// A classed box around children.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Container {
    pub classes: Vec<String>,
    pub children: Vec<BoxNode>,
    #[serde(skip_serializing_if = "InlineStyle::is_empty")]
    pub style: InlineStyle,
    pub height: f64,
    pub depth: f64,
    pub max_font_size: f64,
}

/// Children without a box of their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Fragment {
    pub children: Vec<BoxNode>,
    pub height: f64,
    pub depth: f64,
    pub max_font_size: f64,
}

/// A node of the box tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoxNode {
    SymbolLeaf(SymbolLeaf),
    Container(Container),
    Fragment(Fragment),
}

impl BoxNode {
    pub fn height(&self) -> f64 {
        match self {
            BoxNode::SymbolLeaf(l) => l.height,
            BoxNode::Container(c) => c.height,
            BoxNode::Fragment(f) => f.height,
        }
    }

    pub fn depth(&self) -> f64 {
        match self {
            BoxNode::SymbolLeaf(l) => l.depth,
            BoxNode::Container(c) => c.depth,
            BoxNode::Fragment(f) => f.depth,
        }
    }

    pub fn max_font_size(&self) -> f64 {
        match self {
            BoxNode::SymbolLeaf(l) => l.max_font_size,
            BoxNode::Container(c) => c.max_font_size,
            BoxNode::Fragment(f) => f.max_font_size,
        }
    }

    pub fn set_height(&mut self, height: f64) {
        match self {
            BoxNode::SymbolLeaf(l) => l.height = height,
            BoxNode::Container(c) => c.height = height,
            BoxNode::Fragment(f) => f.height = height,
        }
    }

    pub fn set_depth(&mut self, depth: f64) {
        match self {
            BoxNode::SymbolLeaf(l) => l.depth = depth,
            BoxNode::Container(c) => c.depth = depth,
            BoxNode::Fragment(f) => f.depth = depth,
        }
    }

    pub fn set_max_font_size(&mut self, size: f64) {
        match self {
            BoxNode::SymbolLeaf(l) => l.max_font_size = size,
            BoxNode::Container(c) => c.max_font_size = size,
            BoxNode::Fragment(f) => f.max_font_size = size,
        }
    }

    /// Multiply height and depth by `factor`.
    pub fn scale(&mut self, factor: f64) {
        self.set_height(self.height() * factor);
        self.set_depth(self.depth() * factor);
    }

    pub fn classes(&self) -> &[String] {
        match self {
            BoxNode::Container(c) => &c.classes,
            _ => &[],
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }

    pub fn children(&self) -> &[BoxNode] {
        match self {
            BoxNode::SymbolLeaf(_) => &[],
            BoxNode::Container(c) => &c.children,
            BoxNode::Fragment(f) => &f.children,
        }
    }

    /// Inline overrides of a container; `None` for leaves and fragments.
    pub fn style(&self) -> Option<&InlineStyle> {
        match self {
            BoxNode::Container(c) => Some(&c.style),
            _ => None,
        }
    }

    /// Mutable overrides of a container; `None` for leaves and fragments.
    pub fn style_mut(&mut self) -> Option<&mut InlineStyle> {
        match self {
            BoxNode::Container(c) => Some(&mut c.style),
            _ => None,
        }
    }

    /// Wrap the node in an unclassed container unless it already is one,
    /// so overrides can be attached to it.
    pub fn into_container(self) -> Container {
        match self {
            BoxNode::Container(c) => c,
            other => Container::from_children(&[], vec![other]),
        }
    }

    /// Total number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(BoxNode::node_count).sum::<usize>()
    }
}

// -----------------------------------------------------------------------
// Construction helpers
// -----------------------------------------------------------------------

/// `(height, depth, max_font_size)` as the maximum over `children`, 0 when
/// empty.
fn size_from_children(children: &[BoxNode]) -> (f64, f64, f64) {
    children.iter().fold((0.0, 0.0, 0.0), |(h, d, m), child| {
        (
            h.max(child.height()),
            d.max(child.depth()),
            m.max(child.max_font_size()),
        )
    })
}

impl Container {
    fn from_children(classes: &[&str], children: Vec<BoxNode>) -> Self {
        let (height, depth, max_font_size) = size_from_children(&children);
        Self {
            classes: classes
                .iter()
                .filter(|c| !c.is_empty())
                .map(|c| c.to_string())
                .collect(),
            children,
            style: InlineStyle::default(),
            height,
            depth,
            max_font_size,
        }
    }
}

/// Build a container with aggregated metrics. Empty class names are
/// dropped.
pub fn make_container(classes: &[&str], children: Vec<BoxNode>, color: Option<&str>) -> BoxNode {
    let mut container = Container::from_children(classes, children);
    container.style.color = color.map(str::to_string);
    BoxNode::Container(container)
}

/// Build a fragment with aggregated metrics.
pub fn make_fragment(children: Vec<BoxNode>) -> BoxNode {
    let (height, depth, max_font_size) = size_from_children(&children);
    BoxNode::Fragment(Fragment {
        children,
        height,
        depth,
        max_font_size,
    })
}

/// Lower a glyph with its italic correction. A positive correction becomes
/// a right margin on a wrapping container; otherwise the leaf is returned
/// bare.
pub fn make_symbol_leaf(leaf: SymbolLeaf) -> BoxNode {
    let mut leaf = leaf;
    if leaf.italic > 0.0 {
        leaf.style.margin_right = Some(leaf.italic);
    }
    leaf.into_node()
}

/// Move `node` down by `offset` em (up when negative).
pub fn shift(node: BoxNode, offset: f64) -> BoxNode {
    let mut container = node.into_container();
    container.style.top = Some(offset);
    container.height -= offset;
    container.depth += offset;
    BoxNode::Container(container)
}

/// Re-express `node`, built in `from`, in style `to`.
pub fn style_wrap(node: BoxNode, from: Style, to: Style) -> BoxNode {
    let to_cls = to.cls();
    let mut wrapped = make_container(&["style-wrap", from.reset(), &to_cls], vec![node], None);
    wrapped.scale(to.size_multiplier() / from.size_multiplier());
    wrapped.set_max_font_size(to.size_multiplier());
    wrapped
}

/// A zero-width placeholder that forces the line to the font size
/// `font_size` (relative to text style) inside `ctx`.
pub fn make_font_sizer(ctx: &RenderingContext, font_size: f64) -> BoxNode {
    let mut leaf = SymbolLeaf::new("\u{200b}", 0.0, 0.0);
    leaf.style.font_size = Some(font_size / ctx.style.size_multiplier());
    let reset = format!("reset-{}", ctx.size);
    let normal = SizeLevel::DEFAULT.class_name();
    make_container(
        &["fontsize-ensurer", &reset, &normal],
        vec![leaf.into_node()],
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(h: f64, d: f64) -> BoxNode {
        BoxNode::SymbolLeaf(SymbolLeaf::new("x", h, d))
    }

    #[test]
    fn empty_container_has_zero_metrics() {
        let c = make_container(&["mord"], vec![], None);
        assert_eq!(c.height(), 0.0);
        assert_eq!(c.depth(), 0.0);
        assert_eq!(c.max_font_size(), 0.0);
    }

    #[test]
    fn container_takes_max_of_children() {
        let c = make_container(&["mord"], vec![leaf(0.7, 0.1), leaf(0.4, 0.3)], None);
        assert_eq!(c.height(), 0.7);
        assert_eq!(c.depth(), 0.3);
    }

    #[test]
    fn fragment_depth_is_max_child_depth() {
        let f = make_fragment(vec![leaf(0.1, 0.2), leaf(0.1, 0.5)]);
        assert_eq!(f.depth(), 0.5);
        assert!(matches!(f, BoxNode::Fragment(_)));
    }

    #[test]
    fn empty_class_names_are_dropped() {
        let c = make_container(&["", "mord", ""], vec![], None);
        assert_eq!(c.classes(), ["mord".to_string()]);
    }

    #[test]
    fn color_is_an_override() {
        let c = make_container(&[], vec![], Some("#ff0000"));
        assert_eq!(c.style().unwrap().color.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn bare_leaf_without_italic() {
        let node = make_symbol_leaf(SymbolLeaf::new("x", 0.45, 0.0));
        match node {
            BoxNode::SymbolLeaf(l) => {
                assert_eq!(l.height, 0.45);
                assert_eq!(l.depth, 0.0);
            },
            other => panic!("expected leaf, got {other:?}"),
        }
    }

    #[test]
    fn italic_correction_hoists_into_margin() {
        let mut l = SymbolLeaf::new("f", 0.69444, 0.19444);
        l.italic = 0.10764;
        let node = make_symbol_leaf(l);
        let style = node.style().unwrap();
        assert_eq!(style.margin_right, Some(0.10764));
        assert_eq!(node.height(), 0.69444);
        match &node.children()[0] {
            BoxNode::SymbolLeaf(inner) => assert!(inner.style.is_empty()),
            other => panic!("expected leaf, got {other:?}"),
        }
    }

    #[test]
    fn shift_moves_metrics() {
        let node = shift(leaf(0.75, 0.25), 0.1);
        assert!((node.height() - 0.65).abs() < 1e-12);
        assert!((node.depth() - 0.35).abs() < 1e-12);
        assert_eq!(node.style().unwrap().top, Some(0.1));
    }

    #[test]
    fn shift_keeps_container_classes() {
        let c = make_container(&["mord"], vec![leaf(0.5, 0.0)], None);
        let node = shift(c, -0.2);
        assert!(node.has_class("mord"));
        assert!((node.height() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn style_wrap_scales_and_tags() {
        let node = style_wrap(leaf(1.0, 0.5), Style::Text, Style::Script);
        assert_eq!(
            node.classes(),
            ["style-wrap", "reset-textstyle", "scriptstyle uncramped"]
        );
        assert!((node.height() - 0.7).abs() < 1e-12);
        assert!((node.depth() - 0.35).abs() < 1e-12);
        assert_eq!(node.max_font_size(), 0.7);
    }

    #[test]
    fn font_sizer_compensates_style() {
        let ctx = RenderingContext::default().with_style(Style::Script);
        let sizer = make_font_sizer(&ctx, 1.0);
        assert_eq!(sizer.classes(), ["fontsize-ensurer", "reset-size5", "size5"]);
        let inner = &sizer.children()[0];
        let font_size = inner.style().unwrap().font_size.unwrap();
        assert!((font_size - 1.0 / 0.7).abs() < 1e-12);
        match &inner.children()[0] {
            BoxNode::SymbolLeaf(l) => assert_eq!(l.text, "\u{200b}"),
            other => panic!("expected leaf, got {other:?}"),
        }
    }

    #[test]
    fn style_entries_read_like_css() {
        let style = InlineStyle {
            top: Some(0.25),
            margin_right: Some(0.1),
            color: Some("red".into()),
            ..InlineStyle::default()
        };
        assert_eq!(
            style.entries(),
            vec![
                ("top", "0.25em".to_string()),
                ("margin-right", "0.1em".to_string()),
                ("color", "red".to_string()),
            ]
        );
        assert!(InlineStyle::default().entries().is_empty());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let node = make_container(&["mord"], vec![leaf(0.5, 0.0)], None);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["kind"], "container");
        assert_eq!(json["children"][0]["kind"], "symbol_leaf");
        assert!(json.get("style").is_none());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn arb_leaf() -> impl Strategy<Value = BoxNode> {
            (-1.0f64..3.0, -1.0f64..3.0, 0.0f64..2.5).prop_map(|(h, d, m)| {
                let mut l = SymbolLeaf::new("x", h, d);
                l.max_font_size = m;
                BoxNode::SymbolLeaf(l)
            })
        }

        proptest! {
            #[test]
            fn aggregation_is_max_of_children(
                children in proptest::collection::vec(arb_leaf(), 0..8)
            ) {
                let expect_h = children.iter().map(BoxNode::height).fold(0.0, f64::max);
                let expect_d = children.iter().map(BoxNode::depth).fold(0.0, f64::max);
                let expect_m = children.iter().map(BoxNode::max_font_size).fold(0.0, f64::max);

                let c = make_container(&["mord"], children.clone(), None);
                prop_assert_eq!(c.height(), expect_h);
                prop_assert_eq!(c.depth(), expect_d);
                prop_assert_eq!(c.max_font_size(), expect_m);

                let f = make_fragment(children);
                prop_assert_eq!(f.height(), expect_h);
                prop_assert_eq!(f.depth(), expect_d);
                prop_assert_eq!(f.max_font_size(), expect_m);
            }

            #[test]
            fn shift_preserves_total_extent(h in 0.0f64..3.0, d in 0.0f64..3.0, off in -2.0f64..2.0) {
                let node = shift(BoxNode::SymbolLeaf(SymbolLeaf::new("x", h, d)), off);
                prop_assert!((node.height() + node.depth() - (h + d)).abs() < 1e-9);
            }
        }
    }
}
