//! Lowering of the semantic tree into the box tree.
//!
//! Each group is built against a [`RenderingContext`]. After a group is
//! built, a change of style or size between the context and its parent is
//! folded into the group's height and depth, so every box reports its
//! extent in the units of the list it sits in.

use mathbox_metrics::{FontData, Mode};
use mathbox_types::error::{MathboxError, Result};

use crate::build_common::{math_italic, roman};
use crate::context::{RenderingContext, SizeLevel};
use crate::delimiter::{custom_sized_delim, left_right_delim, sized_delim};
use crate::dom::{BoxNode, InlineStyle, SymbolLeaf, make_container, make_font_sizer, make_fragment, shift};
use crate::node::{FracSize, LengthUnit, Measurement, SemanticNode};
use crate::spacing::{AtomClass, Spacing, spacing};
use crate::style::Style;

/// Set overrides on a container node.
fn styled(mut node: BoxNode, apply: impl FnOnce(&mut InlineStyle)) -> BoxNode {
    if let Some(style) = node.style_mut() {
        apply(style);
    }
    node
}

fn is_space(node: &BoxNode) -> bool {
    node.has_class("mspace")
}

fn own_class(node: &BoxNode) -> Option<AtomClass> {
    node.classes().iter().find_map(|c| AtomClass::from_class_name(c))
}

/// Atom class at the left edge of a built box. Boxes without an atom class
/// of their own (fragments, style and size wrappers) report their first
/// non-space child's.
fn leading_class(node: &BoxNode) -> Option<AtomClass> {
    match node {
        BoxNode::SymbolLeaf(_) => None,
        _ => own_class(node).or_else(|| {
            node.children()
                .iter()
                .find(|c| !is_space(c))
                .and_then(leading_class)
        }),
    }
}

/// Atom class at the right edge of a built box.
fn trailing_class(node: &BoxNode) -> Option<AtomClass> {
    match node {
        BoxNode::SymbolLeaf(_) => None,
        _ => own_class(node).or_else(|| {
            node.children()
                .iter()
                .rev()
                .find(|c| !is_space(c))
                .and_then(trailing_class)
        }),
    }
}

fn first_leaf(node: &BoxNode) -> Option<&SymbolLeaf> {
    match node {
        BoxNode::SymbolLeaf(leaf) => Some(leaf),
        _ => node.children().iter().find_map(first_leaf),
    }
}

fn make_space(space: Spacing) -> BoxNode {
    styled(make_container(&["mspace"], vec![], None), |s| {
        s.margin_right = Some(space.em());
    })
}

/// Builds box trees against one set of font data.
pub struct LayoutBuilder<'a> {
    data: &'a FontData,
}

impl<'a> LayoutBuilder<'a> {
    pub fn new(data: &'a FontData) -> Self {
        Self { data }
    }

    /// Lay out a whole formula, wrapped in the root `mathbox` container
    /// with struts that reserve its vertical extent.
    pub fn build_tree(&self, nodes: &[SemanticNode], ctx: &RenderingContext) -> Result<BoxNode> {
        let expression = self.build_expression(nodes, ctx, None, None)?;
        let base = make_container(&["base", &ctx.style.cls()], expression, None);
        let (height, depth) = (base.height(), base.depth());

        let top_strut = styled(make_container(&["strut"], vec![], None), |s| {
            s.height = Some(height);
        });
        let bottom_strut = styled(make_container(&["strut", "bottom"], vec![], None), |s| {
            s.height = Some(height + depth);
            s.vertical_align = Some(-depth);
        });

        let root = make_container(
            &["mathbox"],
            vec![make_container(
                &["mathbox-inner"],
                vec![top_strut, bottom_strut, base],
                None,
            )],
            None,
        );
        log::debug!(
            "laid out {} semantic nodes into {} boxes ({:.4}em + {:.4}em)",
            nodes.len(),
            root.node_count(),
            height,
            depth
        );
        Ok(root)
    }

    /// Build a list of groups, inserting inter-atom spaces.
    ///
    /// `prev` and `next` are the atom classes just outside the list; they
    /// only influence binary-operator demotion at the list's edges.
    pub fn build_expression(
        &self,
        nodes: &[SemanticNode],
        ctx: &RenderingContext,
        prev: Option<AtomClass>,
        next: Option<AtomClass>,
    ) -> Result<Vec<BoxNode>> {
        let tight = ctx.style.is_tight();
        let mut out = Vec::with_capacity(nodes.len() * 2);
        let mut left: Option<AtomClass> = None;
        let mut left_is_space = true;
        let mut demotion_prev = prev;

        for (i, node) in nodes.iter().enumerate() {
            let next_class = match nodes.get(i + 1) {
                Some(following) => following.atom_class(),
                None => next,
            };
            let built = self.build_group(node, ctx, demotion_prev, next_class)?;
            let built_is_space = is_space(&built);

            if !left_is_space && !built_is_space {
                if let (Some(l), Some(r)) = (left, leading_class(&built)) {
                    if let Some(space) = spacing(l, r, tight) {
                        out.push(make_space(space));
                    }
                }
            }

            left = trailing_class(&built);
            left_is_space = built_is_space;
            demotion_prev = trailing_class(&built);
            out.push(built);
        }
        Ok(out)
    }

    /// Build one group and fold any style or size change of `ctx` into
    /// its extent.
    pub fn build_group(
        &self,
        node: &SemanticNode,
        ctx: &RenderingContext,
        prev: Option<AtomClass>,
        next: Option<AtomClass>,
    ) -> Result<BoxNode> {
        let mut built = self.build_node(node, ctx, prev, next)?;
        if ctx.style_changed() {
            built.scale(ctx.style.size_multiplier() / ctx.parent_style.size_multiplier());
        }
        if ctx.size_changed() {
            built.scale(ctx.size.multiplier() / ctx.parent_size.multiplier());
        }
        Ok(built)
    }

    fn build_node(
        &self,
        node: &SemanticNode,
        ctx: &RenderingContext,
        prev: Option<AtomClass>,
        next: Option<AtomClass>,
    ) -> Result<BoxNode> {
        match node {
            SemanticNode::MathOrd { value, mode } => {
                Ok(self.atom(AtomClass::Ord, math_italic(self.data, value, *mode), ctx))
            },
            SemanticNode::TextOrd { value, mode } => {
                Ok(self.atom(AtomClass::Ord, roman(self.data, value, *mode), ctx))
            },
            SemanticNode::Bin { value, mode } => {
                let class = if demote_bin(prev, next) {
                    AtomClass::Ord
                } else {
                    AtomClass::Bin
                };
                Ok(self.atom(class, roman(self.data, value, *mode), ctx))
            },
            SemanticNode::Rel { value, mode } => {
                Ok(self.atom(AtomClass::Rel, roman(self.data, value, *mode), ctx))
            },
            SemanticNode::Open { value, mode } => {
                Ok(self.atom(AtomClass::Open, roman(self.data, value, *mode), ctx))
            },
            SemanticNode::Close { value, mode } => {
                Ok(self.atom(AtomClass::Close, roman(self.data, value, *mode), ctx))
            },
            SemanticNode::Punct { value, mode } => {
                Ok(self.atom(AtomClass::Punct, roman(self.data, value, *mode), ctx))
            },
            SemanticNode::OrdGroup { body } => {
                let inner = self.build_expression(body, &ctx.reset(), None, None)?;
                Ok(make_container(&["mord", &ctx.style.cls()], inner, None))
            },
            SemanticNode::SupSub { base, sup, sub } => {
                self.build_supsub(base.as_deref(), sup.as_deref(), sub.as_deref(), ctx)
            },
            SemanticNode::Frac { numer, denom, size } => self.build_frac(numer, denom, *size, ctx),
            SemanticNode::Color { color, body } => {
                let inner = self.build_expression(body, &ctx.with_color(color), prev, next)?;
                Ok(make_fragment(inner))
            },
            SemanticNode::Sizing { size, body } => self.build_sizing(*size, body, ctx, prev, next),
            SemanticNode::Styling { style, body } => {
                let parsed = style.parse::<Style>();
                debug_assert!(parsed.is_ok(), "unknown style '{style}'");
                let style = parsed?;
                let inner = self.build_expression(body, &ctx.with_style(style), prev, next)?;
                Ok(make_container(&[ctx.style.reset(), &style.cls()], inner, None))
            },
            SemanticNode::DelimSizing {
                delim,
                size,
                class,
                mode,
            } => {
                let class = class.class_name();
                if delim == "." {
                    return Ok(make_container(&[class], vec![], None));
                }
                let inner = sized_delim(self.data, delim, *size, ctx, *mode)?;
                Ok(make_container(&[class], vec![inner], None))
            },
            SemanticNode::LeftRight {
                left,
                right,
                body,
                mode,
            } => self.build_left_right(left, right, body, *mode, ctx),
            SemanticNode::Accent { accent, base, mode } => {
                self.build_accent(accent, base, *mode, ctx)
            },
            SemanticNode::Rule { width, height } => Ok(self.build_rule(width, height, ctx)),
            SemanticNode::Spacing { value, mode } => self.build_spacing(value, *mode),
            SemanticNode::Phantom { body } => {
                let inner =
                    self.build_expression(body, &ctx.with_color("transparent"), prev, next)?;
                Ok(make_fragment(inner))
            },
            SemanticNode::Sqrt { body } => self.build_sqrt(body, ctx),
            SemanticNode::Overline { body } => self.build_overline(body, ctx),
            SemanticNode::NamedFn { value, mode } => {
                let name = value.strip_prefix('\\').unwrap_or(value);
                let letters = name
                    .chars()
                    .map(|ch| roman(self.data, &ch.to_string(), *mode))
                    .collect();
                let color = ctx.resolved_color();
                Ok(make_container(&["mop"], letters, color.as_deref()))
            },
        }
    }

    fn atom(&self, class: AtomClass, glyph: BoxNode, ctx: &RenderingContext) -> BoxNode {
        let color = ctx.resolved_color();
        make_container(&[class.class_name()], vec![glyph], color.as_deref())
    }

    // -------------------------------------------------------------------
    // Scripts (TeXbook appendix G, rule 18)
    // -------------------------------------------------------------------

    fn build_supsub(
        &self,
        base: Option<&SemanticNode>,
        sup: Option<&SemanticNode>,
        sub: Option<&SemanticNode>,
        ctx: &RenderingContext,
    ) -> Result<BoxNode> {
        let c = &self.data.constants;
        let base_class = base
            .and_then(SemanticNode::atom_class)
            .unwrap_or(AtomClass::Ord)
            .class_name();

        let base_box = match base {
            Some(base) => self.build_group(base, &ctx.reset(), None, None)?,
            None => make_container(&[], vec![], None),
        };

        let style = ctx.style;
        let sup_style = style.sup();
        let sub_style = style.sub();
        let sup = sup
            .map(|s| self.build_group(s, &ctx.with_style(sup_style), None, None))
            .transpose()?;
        let sub = sub
            .map(|s| self.build_group(s, &ctx.with_style(sub_style), None, None))
            .transpose()?;

        let (mut u, mut v) = if base.is_some_and(SemanticNode::is_character_box) {
            (0.0, 0.0)
        } else {
            (base_box.height() - c.sup_drop, base_box.depth() + c.sub_drop)
        };

        let p = if style == Style::Display {
            c.sup1
        } else if style.is_cramped() {
            c.sup3
        } else {
            c.sup2
        };
        let script_space = c.script_space() / style.size_multiplier();

        let sup_extent = sup.as_ref().map(|s| (s.height(), s.depth()));
        let sub_extent = sub.as_ref().map(|s| (s.height(), s.depth()));
        let supmid = sup.map(|s| make_container(&[style.reset(), &sup_style.cls()], vec![s], None));
        let submid = sub.map(|s| make_container(&[style.reset(), &sub_style.cls()], vec![s], None));

        let scripts = match (supmid, submid, sup_extent, sub_extent) {
            (Some(supmid), None, Some((_, sup_depth)), _) => {
                let sizer = make_font_sizer(ctx, supmid.max_font_size());
                u = u.max(p).max(sup_depth + 0.25 * c.x_height);
                let mut supwrap = styled(make_container(&["msup"], vec![sizer, supmid], None), |s| {
                    s.top = Some(-u);
                    s.margin_right = Some(script_space);
                });
                supwrap.set_height(supwrap.height() + u);
                supwrap.set_depth(0.0);
                make_container(&["msupsub"], vec![supwrap], None)
            },
            (None, Some(submid), _, Some((sub_height, _))) => {
                let sizer = make_font_sizer(ctx, submid.max_font_size());
                v = v.max(c.sub1).max(sub_height - 0.8 * c.x_height);
                let mut subwrap = styled(make_container(&["msub"], vec![sizer, submid], None), |s| {
                    s.top = Some(v);
                    s.margin_right = Some(script_space);
                });
                subwrap.set_depth(subwrap.depth() + v);
                subwrap.set_height(0.0);
                make_container(&["msupsub"], vec![subwrap], None)
            },
            (Some(supmid), Some(submid), Some((_, sup_depth)), Some((sub_height, _))) => {
                let font_size = supmid.max_font_size().max(submid.max_font_size());
                u = u.max(p).max(sup_depth + 0.25 * c.x_height);
                v = v.max(c.sub2);

                let theta = c.default_rule_thickness;
                if (u - sup_depth) - (sub_height - v) < 4.0 * theta {
                    v = 4.0 * theta - (u - sup_depth) + sub_height;
                    let psi = 0.8 * c.x_height - (u - sup_depth);
                    if psi > 0.0 {
                        u += psi;
                        v -= psi;
                    }
                }

                let mut supwrap = styled(
                    make_container(&["msup"], vec![make_font_sizer(ctx, font_size), supmid], None),
                    |s| {
                        s.top = Some(-u);
                        s.margin_right = Some(script_space);
                    },
                );
                let mut subwrap = styled(
                    make_container(&["msub"], vec![make_font_sizer(ctx, font_size), submid], None),
                    |s| {
                        s.top = Some(v);
                        s.margin_right = Some(script_space);
                    },
                );
                supwrap.set_height(supwrap.height() + u);
                supwrap.set_depth(0.0);
                subwrap.set_height(0.0);
                subwrap.set_depth(subwrap.depth() + v);
                make_container(&["msupsub"], vec![supwrap, subwrap], None)
            },
            _ => return Ok(make_container(&[base_class], vec![base_box], None)),
        };

        Ok(make_container(&[base_class], vec![base_box, scripts], None))
    }

    // -------------------------------------------------------------------
    // Fractions (TeXbook appendix G, rule 15)
    // -------------------------------------------------------------------

    fn build_frac(
        &self,
        numer: &SemanticNode,
        denom: &SemanticNode,
        size: FracSize,
        ctx: &RenderingContext,
    ) -> Result<BoxNode> {
        let c = &self.data.constants;
        let fstyle = match size {
            FracSize::Auto => ctx.style,
            FracSize::Dfrac => Style::Display,
            FracSize::Tfrac => Style::Text,
        };
        let nstyle = fstyle.frac_num();
        let dstyle = fstyle.frac_den();

        let numer = self.build_group(numer, &ctx.with_style(nstyle), None, None)?;
        let denom = self.build_group(denom, &ctx.with_style(dstyle), None, None)?;
        let numer_depth = numer.depth();
        let denom_height = denom.height();

        let numernumer = make_container(&[fstyle.reset(), &nstyle.cls()], vec![numer], None);
        let denomdenom = make_container(&[fstyle.reset(), &dstyle.cls()], vec![denom], None);
        let font_size = numernumer.max_font_size().max(denomdenom.max_font_size());

        let text_cls = Style::Text.cls();
        let line = make_container(&[ctx.style.reset(), &text_cls, "line"], vec![], None);

        let theta = c.default_rule_thickness / ctx.style.size_multiplier();
        let (mut u, mut v, phi) = if fstyle.size() == Style::Display.size() {
            (c.num1, c.denom1, 3.0 * theta)
        } else {
            (c.num2, c.denom2, theta)
        };
        let a = c.axis_height;

        let numer_clearance = (u - numer_depth) - (a + 0.5 * theta);
        if numer_clearance < phi {
            u += phi - numer_clearance;
        }
        let denom_clearance = (a - 0.5 * theta) - (denom_height - v);
        if denom_clearance < phi {
            v += phi - denom_clearance;
        }

        let mut numerrow = styled(
            make_container(&["mfracnum"], vec![make_font_sizer(ctx, font_size), numernumer], None),
            |s| s.top = Some(-u),
        );
        let mid = styled(
            make_container(&["mfracmid"], vec![make_font_sizer(ctx, font_size), line], None),
            |s| s.top = Some(-(a - 0.5 * theta)),
        );
        let mut denomrow = styled(
            make_container(&["mfracden"], vec![make_font_sizer(ctx, font_size), denomdenom], None),
            |s| s.top = Some(v),
        );

        numerrow.set_height(numerrow.height() + u);
        numerrow.set_depth(0.0);
        denomrow.set_height(0.0);
        denomrow.set_depth(denomrow.depth() + v);

        let mut frac = make_container(&[], vec![numerrow, mid, denomrow], None);
        frac.scale(fstyle.size_multiplier() / ctx.style.size_multiplier());

        let wrap = make_container(&[ctx.style.reset(), &fstyle.cls()], vec![frac], None);
        let color = ctx.resolved_color();
        Ok(make_container(
            &["minner"],
            vec![make_container(&["mfrac"], vec![wrap], None)],
            color.as_deref(),
        ))
    }

    fn build_sizing(
        &self,
        size: u8,
        body: &[SemanticNode],
        ctx: &RenderingContext,
        prev: Option<AtomClass>,
        next: Option<AtomClass>,
    ) -> Result<BoxNode> {
        debug_assert!((1..=10).contains(&size), "sizing level {size} outside 1..=10");
        let level = SizeLevel::new(size)?;
        let inner = self.build_expression(body, &ctx.with_size(level), prev, next)?;

        let reset = format!("reset-{}", ctx.size);
        let size_class = level.class_name();
        let style_class = ctx.style.cls();
        let mut span = make_container(&["sizing", &reset, &size_class, &style_class], inner, None);
        span.set_max_font_size(level.multiplier() * ctx.style.size_multiplier());
        Ok(span)
    }

    fn left_right_side(
        &self,
        delim: &str,
        height: f64,
        depth: f64,
        mode: Mode,
        ctx: &RenderingContext,
    ) -> Result<BoxNode> {
        if delim == "." {
            return Ok(make_container(&["nulldelimiter"], vec![], None));
        }
        left_right_delim(self.data, delim, height, depth, ctx, mode)
    }

    fn build_left_right(
        &self,
        left: &str,
        right: &str,
        body: &[SemanticNode],
        mode: Mode,
        ctx: &RenderingContext,
    ) -> Result<BoxNode> {
        let mut inner = self.build_expression(body, &ctx.reset(), None, None)?;

        let (height, depth) = inner
            .iter()
            .fold((0.0f64, 0.0f64), |(h, d), n| (h.max(n.height()), d.max(n.depth())));
        let height = height * ctx.style.size_multiplier();
        let depth = depth * ctx.style.size_multiplier();

        let left = self.left_right_side(left, height, depth, mode, ctx)?;
        let right = self.left_right_side(right, height, depth, mode, ctx)?;
        inner.insert(0, left);
        inner.push(right);

        let color = ctx.resolved_color();
        Ok(make_container(&["minner"], inner, color.as_deref()))
    }

    // -------------------------------------------------------------------
    // Radicals and overlines (TeXbook appendix G, rules 9 and 11)
    // -------------------------------------------------------------------

    /// A rule line in text style, sized by `font_size`.
    fn rule_line(&self, class: &str, font_size: f64, ctx: &RenderingContext) -> BoxNode {
        let text_cls = Style::Text.cls();
        let mut line = make_container(&[ctx.style.reset(), &text_cls, "line"], vec![], None);
        line.set_max_font_size(1.0);
        make_container(&[class], vec![make_font_sizer(ctx, font_size), line], None)
    }

    fn build_sqrt(&self, body: &SemanticNode, ctx: &RenderingContext) -> Result<BoxNode> {
        let c = &self.data.constants;
        let body = self.build_group(body, &ctx.with_style(ctx.style.cramp()), None, None)?;
        let font_size = body.max_font_size().max(1.0);
        let inner = make_container(&["sqrt-inner"], vec![make_font_sizer(ctx, font_size), body], None);
        let (inner_height, inner_depth) = (inner.height(), inner.depth());
        let inner_total = inner_height + inner_depth;

        let theta = c.default_rule_thickness / ctx.style.size_multiplier();
        let phi = if ctx.style.size() == Style::Display.size() {
            c.x_height
        } else {
            theta
        };
        let mut psi = theta + phi / 4.0;

        let min_height = inner_total * ctx.style.size_multiplier() + psi + theta;
        let delim = custom_sized_delim(self.data, "\\surd", min_height, false, ctx, Mode::Math)?;
        let delim_total = delim.height() + delim.depth();
        if delim_total > inner_total + psi {
            psi = (psi + delim_total - inner_total) / 2.0;
        }

        let sign_top = -inner_height - psi + delim.height() - theta;
        let sign = shift(make_container(&["sqrt-sign"], vec![delim], None), sign_top);

        // an empty radicand keeps only the sign
        let body = if inner_height == 0.0 && inner_depth == 0.0 {
            make_container(&[], vec![], None)
        } else {
            let mut line = styled(self.rule_line("sqrt-line", font_size, ctx), |s| {
                s.top = Some(-inner_height - psi);
            });
            line.set_height(inner_height + psi + 2.0 * theta);
            line.set_depth(0.0);
            make_container(&["sqrt-body"], vec![line, inner], None)
        };

        let color = ctx.resolved_color();
        Ok(make_container(&["sqrt", "mord"], vec![sign, body], color.as_deref()))
    }

    fn build_overline(&self, body: &SemanticNode, ctx: &RenderingContext) -> Result<BoxNode> {
        let body = self.build_group(body, &ctx.with_style(ctx.style.cramp()), None, None)?;
        let font_size = body.max_font_size();
        let inner =
            make_container(&["overline-inner"], vec![make_font_sizer(ctx, font_size), body], None);

        let theta = self.data.constants.default_rule_thickness / ctx.style.size_multiplier();
        let mut line = styled(self.rule_line("overline-line", font_size, ctx), |s| {
            s.top = Some(-inner.height() - 3.0 * theta);
        });
        // one rule thickness of clearance above the line
        line.set_height(inner.height() + 5.0 * theta);
        line.set_depth(0.0);

        let color = ctx.resolved_color();
        Ok(make_container(&["overline", "mord"], vec![line, inner], color.as_deref()))
    }

    // -------------------------------------------------------------------
    // Accents, rules and spaces
    // -------------------------------------------------------------------

    /// TeXbook appendix G, rule 12.
    fn build_accent(
        &self,
        accent: &str,
        base: &SemanticNode,
        mode: Mode,
        ctx: &RenderingContext,
    ) -> Result<BoxNode> {
        let base_box = self.build_group(base, &ctx.with_style(ctx.style.cramp()), None, None)?;

        let skew = if base.is_character_box() {
            first_leaf(&base_box).map_or(0.0, |leaf| leaf.skew)
        } else {
            0.0
        };
        let clearance = base_box.height().min(self.data.constants.x_height);

        let glyph = roman(self.data, accent, mode);
        let body = shift(
            make_container(&["accent-body"], vec![glyph], None),
            -(base_box.height() - clearance),
        );
        let body = styled(body, |s| s.margin_left = Some(2.0 * skew));

        let color = ctx.resolved_color();
        Ok(make_container(
            &["accent", "mord"],
            vec![base_box, body],
            color.as_deref(),
        ))
    }

    fn build_rule(&self, width: &Measurement, height: &Measurement, ctx: &RenderingContext) -> BoxNode {
        let x_height = self.data.constants.x_height;
        let to_em = |m: &Measurement| {
            let em = match m.unit {
                LengthUnit::Em => m.number,
                LengthUnit::Ex => m.number * x_height,
            };
            em / ctx.style.size_multiplier()
        };
        let (width, height) = (to_em(width), to_em(height));

        let color = ctx.resolved_color();
        let mut rule = styled(make_container(&["mord", "rule"], vec![], color.as_deref()), |s| {
            s.border_right_width = Some(width);
            s.border_top_width = Some(height);
        });
        rule.set_height(height);
        rule
    }

    fn build_spacing(&self, value: &str, mode: Mode) -> Result<BoxNode> {
        if matches!(value, " " | "~" | "\\ " | "\\space") {
            return Ok(make_container(
                &["mord", "mspace"],
                vec![roman(self.data, value, mode)],
                None,
            ));
        }
        let space = explicit_space(value);
        debug_assert!(space.is_some(), "unknown spacing command '{value}'");
        let (class, width) = space.ok_or_else(|| {
            MathboxError::MalformedInput(format!("unknown spacing command '{value}'"))
        })?;
        Ok(styled(make_container(&["mord", "mspace", class], vec![], None), |s| {
            s.margin_right = Some(width);
        }))
    }
}

/// Class and width in em of an explicit spacing command.
fn explicit_space(value: &str) -> Option<(&'static str, f64)> {
    match value {
        "\\qquad" => Some(("qquad", 2.0)),
        "\\quad" => Some(("quad", 1.0)),
        "\\enspace" => Some(("enspace", 0.5)),
        "\\;" => Some(("thickspace", 5.0 / 18.0)),
        "\\:" => Some(("mediumspace", 4.0 / 18.0)),
        "\\," => Some(("thinspace", 3.0 / 18.0)),
        "\\!" => Some(("negativethinspace", -3.0 / 18.0)),
        _ => None,
    }
}

/// A binary operator becomes an ordinary atom when nothing it could
/// operate on sits to its left or right. `None` means the list ends there.
fn demote_bin(prev: Option<AtomClass>, next: Option<AtomClass>) -> bool {
    let after_operator = matches!(
        prev,
        None | Some(AtomClass::Bin | AtomClass::Open | AtomClass::Rel | AtomClass::Op | AtomClass::Punct)
    );
    let before_closer = matches!(
        next,
        None | Some(AtomClass::Rel | AtomClass::Close | AtomClass::Punct)
    );
    after_operator || before_closer
}

/// Lay out `nodes` with `data`, starting from `ctx`.
pub fn build_tree(nodes: &[SemanticNode], ctx: &RenderingContext, data: &FontData) -> Result<BoxNode> {
    LayoutBuilder::new(data).build_tree(nodes, ctx)
}
