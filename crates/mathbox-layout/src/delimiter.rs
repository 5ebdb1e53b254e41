//! Delimiter sizing and assembly.
//!
//! A delimiter is drawn in one of three ways:
//!
//! - *small*: the normal glyph, re-expressed in text, script or
//!   scriptscript style;
//! - *large*: a pre-drawn glyph from one of the `Size1`..`Size4` faces;
//! - *stacked*: top, optional middle, repeated extender and bottom pieces
//!   assembled to an arbitrary height.
//!
//! Automatic sizing walks an ordered ladder of these and returns the first
//! one that is tall enough.

use mathbox_metrics::{CharacterMetrics, DelimiterKind, FontData, FontVariant, Mode};
use mathbox_types::error::{MathboxError, Result};

use crate::build_common::make_text;
use crate::context::RenderingContext;
use crate::dom::{BoxNode, make_container, shift, style_wrap};
use crate::style::Style;

/// Heights of the stacked delimiters drawn for explicit sizes 1-4, as TeX
/// sets `\bigl|` through `\Biggl|`.
const SIZE_TO_MAX_HEIGHT: [f64; 5] = [0.0, 1.2, 1.8, 2.4, 3.0];

/// TeX's `\delimiterfactor`.
const DELIMITER_FACTOR: f64 = 901.0;

/// One rung of the sizing ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    Small(Style),
    Large(u8),
    Stack,
}

impl Candidate {
    fn font(self) -> FontVariant {
        match self {
            Candidate::Small(_) => FontVariant::MainRegular,
            Candidate::Large(size) => {
                FontVariant::large(size).unwrap_or(FontVariant::Size4Regular)
            },
            Candidate::Stack => FontVariant::Size4Regular,
        }
    }
}

const NORMAL_SEQUENCE: [Candidate; 7] = [
    Candidate::Small(Style::ScriptScript),
    Candidate::Small(Style::Script),
    Candidate::Small(Style::Text),
    Candidate::Large(1),
    Candidate::Large(2),
    Candidate::Large(3),
    Candidate::Large(4),
];

const STACK_LARGE_SEQUENCE: [Candidate; 8] = [
    Candidate::Small(Style::ScriptScript),
    Candidate::Small(Style::Script),
    Candidate::Small(Style::Text),
    Candidate::Large(1),
    Candidate::Large(2),
    Candidate::Large(3),
    Candidate::Large(4),
    Candidate::Stack,
];

const STACK_ALWAYS_SEQUENCE: [Candidate; 4] = [
    Candidate::Small(Style::ScriptScript),
    Candidate::Small(Style::Script),
    Candidate::Small(Style::Text),
    Candidate::Stack,
];

fn sequence(kind: DelimiterKind) -> &'static [Candidate] {
    match kind {
        DelimiterKind::NormalOnly => &NORMAL_SEQUENCE,
        DelimiterKind::NormalAndStack => &STACK_LARGE_SEQUENCE,
        DelimiterKind::StackOnly => &STACK_ALWAYS_SEQUENCE,
    }
}

/// First candidate of `sequence` at least `height` tall, starting where the
/// ambient style allows: scriptscript starts at the scriptscript glyph,
/// script at the script glyph, text and display at the text glyph.
fn traverse_sequence(
    data: &FontData,
    delim: &str,
    height: f64,
    sequence: &[Candidate],
    style: Style,
) -> Candidate {
    let start = 2.min(3 - style.size());
    for &candidate in sequence.iter().skip(start) {
        if candidate == Candidate::Stack {
            break;
        }
        let Some(metrics) = data.glyph_metrics(delim, candidate.font(), Mode::Math) else {
            log::warn!("no metrics for delimiter '{delim}' in {}", candidate.font());
            continue;
        };
        let mut height_depth = metrics.height_total();
        if let Candidate::Small(small) = candidate {
            height_depth *= small.size_multiplier();
        }
        if height_depth >= height {
            return candidate;
        }
    }
    sequence.last().copied().unwrap_or(Candidate::Stack)
}

/// The ladder rung automatic sizing picks for `delim` at `height`.
pub fn select_delimiter(
    data: &FontData,
    delim: &str,
    height: f64,
    style: Style,
) -> Result<Candidate> {
    let name = data.delimiters.canonical(delim);
    let kind = data
        .delimiters
        .kind(name)
        .ok_or_else(|| MathboxError::IllegalDelimiter(delim.to_string()))?;
    Ok(traverse_sequence(data, name, height, sequence(kind), style))
}

// -----------------------------------------------------------------------
// Small and large glyphs
// -----------------------------------------------------------------------

fn make_small_delim(
    data: &FontData,
    delim: &str,
    style: Style,
    center: bool,
    ctx: &RenderingContext,
    mode: Mode,
) -> BoxNode {
    let text = make_text(data, delim, FontVariant::MainRegular, mode);
    let node = style_wrap(text, ctx.style, style);
    if center {
        let offset = (1.0 - ctx.style.size_multiplier() / style.size_multiplier())
            * data.constants.axis_height;
        shift(node, offset)
    } else {
        node
    }
}

fn make_large_delim(
    data: &FontData,
    delim: &str,
    size: u8,
    center: bool,
    ctx: &RenderingContext,
    mode: Mode,
) -> BoxNode {
    let variant = FontVariant::large(size).unwrap_or(FontVariant::Size4Regular);
    let inner = make_text(data, delim, variant, mode);
    let size_class = format!("size{size}");
    let color = ctx.resolved_color();
    let sized = make_container(&["delimsizing", &size_class], vec![inner], color.as_deref());
    let node = style_wrap(sized, ctx.style, Style::Text);
    if center {
        let offset = (1.0 - ctx.style.size_multiplier()) * data.constants.axis_height;
        shift(node, offset)
    } else {
        node
    }
}

// -----------------------------------------------------------------------
// Stacked assembly
// -----------------------------------------------------------------------

/// Repeat count, overlap and total extent of a stacked delimiter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackLayout {
    /// Extender copies in each region (two regions when there is a middle
    /// piece).
    pub repeat_count: usize,
    /// How far each seam overlaps the piece below it.
    pub overlap: f64,
    /// Total height plus depth of the assembly.
    pub total: f64,
}

impl StackLayout {
    /// Solve for the smallest assembly at least `target` tall.
    ///
    /// Arguments are the height+depth of each piece.
    pub fn solve(
        top: f64,
        repeat: f64,
        bottom: f64,
        middle: Option<f64>,
        overlap_allowed: bool,
        target: f64,
    ) -> Self {
        let fixed = top + bottom + middle.unwrap_or(0.0);
        let regions = if middle.is_some() { 2.0 } else { 1.0 };
        let needed = ((target - fixed) / regions).max(0.0);
        let repeat_count = if repeat > 0.0 {
            (needed / repeat).ceil() as usize
        } else {
            0
        };
        let copies = repeat_count as f64;

        if overlap_allowed && repeat_count > 0 {
            // n copies plus the fixed pieces span n+1 seams per region.
            Self {
                repeat_count,
                overlap: (copies * repeat - needed) / (copies + 1.0),
                total: target,
            }
        } else {
            Self {
                repeat_count,
                overlap: 0.0,
                total: fixed + regions * copies * repeat,
            }
        }
    }
}

fn piece_metrics(data: &FontData, piece: &str, font: FontVariant) -> CharacterMetrics {
    data.glyph_metrics(piece, font, Mode::Math).unwrap_or_else(|| {
        log::warn!("no metrics for delimiter piece '{piece}' in {font}");
        CharacterMetrics::default()
    })
}

/// One piece of a stack, moved down by `offset`.
fn make_inner(data: &FontData, piece: &str, offset: f64, font: FontVariant, mode: Mode) -> BoxNode {
    let size_class = match font {
        FontVariant::Size1Regular => "delim-size1",
        FontVariant::Size4Regular => "delim-size4",
        _ => "",
    };
    let glyph = make_container(&[], vec![make_text(data, piece, font, mode)], None);
    shift(
        make_container(&["delimsizinginner", size_class], vec![glyph], None),
        offset,
    )
}

fn make_stacked_delim(
    data: &FontData,
    delim: &str,
    height_total: f64,
    center: bool,
    ctx: &RenderingContext,
    mode: Mode,
) -> Result<BoxNode> {
    let assembly = data
        .delimiters
        .assembly(delim)
        .ok_or_else(|| MathboxError::IllegalDelimiter(delim.to_string()))?;
    let font = assembly.variant;

    let top = piece_metrics(data, &assembly.top, font);
    let repeat = piece_metrics(data, &assembly.repeat, font);
    let bottom = piece_metrics(data, &assembly.bottom, font);
    let middle = assembly
        .middle
        .as_deref()
        .map(|piece| (piece, piece_metrics(data, piece, font)));

    let layout = StackLayout::solve(
        top.height_total(),
        repeat.height_total(),
        bottom.height_total(),
        middle.map(|(_, m)| m.height_total()),
        assembly.overlap,
        height_total,
    );
    log::trace!(
        "stacking '{delim}' to {height_total:.3}: {} extenders per region, overlap {:.4}",
        layout.repeat_count,
        layout.overlap
    );

    let mut axis_height = data.constants.axis_height;
    if center {
        axis_height *= ctx.style.size_multiplier();
    }
    let height = layout.total / 2.0 + axis_height;
    let depth = layout.total / 2.0 - axis_height;
    let step = repeat.height_total() - layout.overlap;

    let mut inners = Vec::with_capacity(3 + 2 * layout.repeat_count);
    inners.push(make_inner(data, &assembly.top, top.height - height, font, mode));

    let mut current = height - top.height_total() + layout.overlap;
    for _ in 0..layout.repeat_count {
        inners.push(make_inner(data, &assembly.repeat, repeat.height - current, font, mode));
        current -= step;
    }

    if let Some((piece, metrics)) = middle {
        let mid_point = layout.total / 2.0 - depth;
        let offset = metrics.height - mid_point - metrics.height_total() / 2.0;
        inners.push(make_inner(data, piece, offset, font, mode));

        current = mid_point - metrics.height_total() / 2.0 + layout.overlap;
        for _ in 0..layout.repeat_count {
            inners.push(make_inner(data, &assembly.repeat, repeat.height - current, font, mode));
            current -= step;
        }
    }

    inners.push(make_inner(data, &assembly.bottom, depth - bottom.depth, font, mode));

    let color = ctx.resolved_color();
    let stack = make_container(&["delimsizing", "mult"], inners, color.as_deref());
    Ok(style_wrap(stack, ctx.style, Style::Text))
}

// -----------------------------------------------------------------------
// Entry points
// -----------------------------------------------------------------------

/// A delimiter at one of the explicit sizes 1-4 (`\big` through `\Bigg`).
pub fn sized_delim(
    data: &FontData,
    delim: &str,
    size: u8,
    ctx: &RenderingContext,
    mode: Mode,
) -> Result<BoxNode> {
    debug_assert!((1..=4).contains(&size), "sized delimiter size {size} outside 1..=4");
    if !(1..=4).contains(&size) {
        return Err(MathboxError::MalformedInput(format!(
            "sized delimiter size {size} outside 1..=4"
        )));
    }

    let name = data.delimiters.canonical(delim);
    match data.delimiters.kind(name) {
        Some(kind) if kind.has_large_variants() => {
            Ok(make_large_delim(data, name, size, false, ctx, mode))
        },
        Some(_) => make_stacked_delim(
            data,
            name,
            SIZE_TO_MAX_HEIGHT[usize::from(size)],
            false,
            ctx,
            mode,
        ),
        None => Err(MathboxError::IllegalDelimiter(delim.to_string())),
    }
}

/// A delimiter at least `height` em tall (height plus depth).
pub fn custom_sized_delim(
    data: &FontData,
    delim: &str,
    height: f64,
    center: bool,
    ctx: &RenderingContext,
    mode: Mode,
) -> Result<BoxNode> {
    let candidate = select_delimiter(data, delim, height, ctx.style)?;
    log::debug!("delimiter '{delim}' for height {height:.4}: {candidate:?}");

    let name = data.delimiters.canonical(delim);
    match candidate {
        Candidate::Small(style) => Ok(make_small_delim(data, name, style, center, ctx, mode)),
        Candidate::Large(size) => Ok(make_large_delim(data, name, size, center, ctx, mode)),
        Candidate::Stack => make_stacked_delim(data, name, height, center, ctx, mode),
    }
}

/// Total height a `\left`/`\right` delimiter needs around content of the
/// given height and depth (TeX's `make_left_right`).
pub fn left_right_height(data: &FontData, height: f64, depth: f64, style: Style) -> f64 {
    let axis_height = data.constants.axis_height * style.size_multiplier();
    let max_dist_from_axis = (height - axis_height).max(depth + axis_height);
    (max_dist_from_axis / 500.0 * DELIMITER_FACTOR)
        .max(2.0 * max_dist_from_axis - data.constants.delimiter_extend())
}

/// A `\left`/`\right` delimiter sized to enclose `height` and `depth`,
/// centered on the math axis.
pub fn left_right_delim(
    data: &FontData,
    delim: &str,
    height: f64,
    depth: f64,
    ctx: &RenderingContext,
    mode: Mode,
) -> Result<BoxNode> {
    let total = left_right_height(data, height, depth, ctx.style);
    custom_sized_delim(data, delim, total, true, ctx, mode)
}
