//! Semantic input tree.
//!
//! Produced upstream by a parser; deserialized here from JSON with an
//! internal `type` tag, e.g. `{"type": "mathord", "value": "x"}`.

use mathbox_metrics::Mode;
use serde::{Deserialize, Serialize};

use crate::spacing::AtomClass;

/// Which style a fraction is set in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FracSize {
    /// The surrounding style.
    #[default]
    Auto,
    /// `\dfrac`
    Dfrac,
    /// `\tfrac`
    Tfrac,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Em,
    Ex,
}

/// A length as written in the source, e.g. `0.5ex`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub number: f64,
    pub unit: LengthUnit,
}

/// One node of the semantic tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SemanticNode {
    MathOrd {
        value: String,
        #[serde(default)]
        mode: Mode,
    },
    TextOrd {
        value: String,
        #[serde(default)]
        mode: Mode,
    },
    Bin {
        value: String,
        #[serde(default)]
        mode: Mode,
    },
    Rel {
        value: String,
        #[serde(default)]
        mode: Mode,
    },
    Open {
        value: String,
        #[serde(default)]
        mode: Mode,
    },
    Close {
        value: String,
        #[serde(default)]
        mode: Mode,
    },
    Punct {
        value: String,
        #[serde(default)]
        mode: Mode,
    },
    OrdGroup {
        body: Vec<SemanticNode>,
    },
    /// Scripts on a base. A missing base (`^3`) is an empty box.
    SupSub {
        #[serde(default)]
        base: Option<Box<SemanticNode>>,
        #[serde(default)]
        sup: Option<Box<SemanticNode>>,
        #[serde(default)]
        sub: Option<Box<SemanticNode>>,
    },
    Frac {
        numer: Box<SemanticNode>,
        denom: Box<SemanticNode>,
        #[serde(default)]
        size: FracSize,
    },
    Color {
        color: String,
        body: Vec<SemanticNode>,
    },
    /// Absolute size change, `size` in 1..=10.
    Sizing {
        size: u8,
        body: Vec<SemanticNode>,
    },
    /// Style change to one of `display`, `text`, `script`, `scriptscript`.
    Styling {
        style: String,
        body: Vec<SemanticNode>,
    },
    /// `\big(` and friends; `size` in 1..=4. A `.` delimiter is blank.
    DelimSizing {
        delim: String,
        size: u8,
        class: AtomClass,
        #[serde(default)]
        mode: Mode,
    },
    LeftRight {
        left: String,
        right: String,
        body: Vec<SemanticNode>,
        #[serde(default)]
        mode: Mode,
    },
    Accent {
        accent: String,
        base: Box<SemanticNode>,
        #[serde(default)]
        mode: Mode,
    },
    Rule {
        width: Measurement,
        height: Measurement,
    },
    Spacing {
        value: String,
        #[serde(default)]
        mode: Mode,
    },
    Phantom {
        body: Vec<SemanticNode>,
    },
    /// `\sqrt{body}`.
    Sqrt {
        body: Box<SemanticNode>,
    },
    Overline {
        body: Box<SemanticNode>,
    },
    /// An upright operator name such as `\sin` or `\log`.
    NamedFn {
        value: String,
        #[serde(default)]
        mode: Mode,
    },
}

impl SemanticNode {
    /// Atom class of the box this node lowers to, as seen by its left
    /// neighbour. Groups that only restyle their body report the class of
    /// the body's first atom.
    pub fn atom_class(&self) -> Option<AtomClass> {
        match self {
            SemanticNode::MathOrd { .. }
            | SemanticNode::TextOrd { .. }
            | SemanticNode::OrdGroup { .. }
            | SemanticNode::Accent { .. }
            | SemanticNode::Rule { .. }
            | SemanticNode::Spacing { .. }
            | SemanticNode::Sqrt { .. }
            | SemanticNode::Overline { .. } => Some(AtomClass::Ord),
            SemanticNode::NamedFn { .. } => Some(AtomClass::Op),
            SemanticNode::Bin { .. } => Some(AtomClass::Bin),
            SemanticNode::Rel { .. } => Some(AtomClass::Rel),
            SemanticNode::Open { .. } => Some(AtomClass::Open),
            SemanticNode::Close { .. } => Some(AtomClass::Close),
            SemanticNode::Punct { .. } => Some(AtomClass::Punct),
            SemanticNode::Frac { .. } | SemanticNode::LeftRight { .. } => Some(AtomClass::Inner),
            SemanticNode::SupSub { base, .. } => match base {
                Some(base) => base.atom_class(),
                None => Some(AtomClass::Ord),
            },
            SemanticNode::DelimSizing { class, .. } => Some(*class),
            SemanticNode::Color { body, .. }
            | SemanticNode::Sizing { body, .. }
            | SemanticNode::Styling { body, .. }
            | SemanticNode::Phantom { body } => body.first().and_then(SemanticNode::atom_class),
        }
    }

    /// A single symbol, possibly inside a one-element group. Scripts on a
    /// character box are placed without regard to the base's extent.
    pub fn is_character_box(&self) -> bool {
        match self {
            SemanticNode::MathOrd { .. }
            | SemanticNode::TextOrd { .. }
            | SemanticNode::Bin { .. }
            | SemanticNode::Rel { .. }
            | SemanticNode::Open { .. }
            | SemanticNode::Close { .. }
            | SemanticNode::Punct { .. } => true,
            SemanticNode::OrdGroup { body } => {
                body.len() == 1 && body[0].is_character_box()
            },
            _ => false,
        }
    }
}
