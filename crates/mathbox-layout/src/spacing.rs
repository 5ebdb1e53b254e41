//! Inter-atom spacing (TeXbook chapter 18).

use serde::{Deserialize, Serialize};

/// TeX atom class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AtomClass {
    Ord,
    Op,
    Bin,
    Rel,
    Open,
    Close,
    Punct,
    Inner,
}

impl AtomClass {
    pub const ALL: [AtomClass; 8] = [
        AtomClass::Ord,
        AtomClass::Op,
        AtomClass::Bin,
        AtomClass::Rel,
        AtomClass::Open,
        AtomClass::Close,
        AtomClass::Punct,
        AtomClass::Inner,
    ];

    /// Box class tag, e.g. `mord`.
    pub fn class_name(self) -> &'static str {
        match self {
            AtomClass::Ord => "mord",
            AtomClass::Op => "mop",
            AtomClass::Bin => "mbin",
            AtomClass::Rel => "mrel",
            AtomClass::Open => "mopen",
            AtomClass::Close => "mclose",
            AtomClass::Punct => "mpunct",
            AtomClass::Inner => "minner",
        }
    }

    pub fn from_class_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.class_name() == name)
    }
}

/// One of TeX's three math spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    Thin,
    Medium,
    Thick,
}

impl Spacing {
    /// Width in math units.
    pub fn mu(self) -> f64 {
        match self {
            Spacing::Thin => 3.0,
            Spacing::Medium => 4.0,
            Spacing::Thick => 5.0,
        }
    }

    /// Width in em of the current font.
    pub fn em(self) -> f64 {
        self.mu() / 18.0
    }
}

/// Space between a `left` atom and a following `right` atom. `tight`
/// selects the script-style table.
pub fn spacing(left: AtomClass, right: AtomClass, tight: bool) -> Option<Spacing> {
    use AtomClass::*;
    use Spacing::*;

    if tight {
        return match (left, right) {
            (Ord, Op) | (Op, Ord) | (Op, Op) | (Close, Op) | (Inner, Op) => Some(Thin),
            _ => None,
        };
    }

    match (left, right) {
        (Ord, Op) | (Ord, Inner) => Some(Thin),
        (Ord, Bin) => Some(Medium),
        (Ord, Rel) => Some(Thick),

        (Op, Ord) | (Op, Op) | (Op, Inner) => Some(Thin),
        (Op, Rel) => Some(Thick),

        (Bin, Ord) | (Bin, Op) | (Bin, Open) | (Bin, Inner) => Some(Medium),

        (Rel, Ord) | (Rel, Op) | (Rel, Open) | (Rel, Inner) => Some(Thick),

        (Close, Op) | (Close, Inner) => Some(Thin),
        (Close, Bin) => Some(Medium),
        (Close, Rel) => Some(Thick),

        (Punct, Rel) => Some(Thick),
        (Punct, Ord | Op | Open | Close | Punct | Inner) => Some(Thin),

        (Inner, Bin) => Some(Medium),
        (Inner, Rel) => Some(Thick),
        (Inner, Ord | Op | Open | Punct | Inner) => Some(Thin),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AtomClass::*;

    #[test]
    fn ord_rel_is_thick() {
        assert_eq!(spacing(Ord, Rel, false), Some(Spacing::Thick));
        assert_eq!(spacing(Rel, Ord, false), Some(Spacing::Thick));
    }

    #[test]
    fn table_is_asymmetric() {
        assert_eq!(spacing(Ord, Inner, false), Some(Spacing::Thin));
        assert_eq!(spacing(Inner, Ord, false), Some(Spacing::Thin));
        assert_eq!(spacing(Open, Bin, false), None);
        assert_eq!(spacing(Bin, Open, false), Some(Spacing::Medium));
        assert_eq!(spacing(Punct, Close, false), Some(Spacing::Thin));
        assert_eq!(spacing(Close, Punct, false), None);
    }

    #[test]
    fn open_never_spaces_right() {
        for right in AtomClass::ALL {
            assert_eq!(spacing(Open, right, false), None);
            assert_eq!(spacing(Open, right, true), None);
        }
    }

    #[test]
    fn tight_table_only_keeps_op_spaces() {
        assert_eq!(spacing(Ord, Rel, true), None);
        assert_eq!(spacing(Ord, Bin, true), None);
        assert_eq!(spacing(Ord, Op, true), Some(Spacing::Thin));
        assert_eq!(spacing(Op, Op, true), Some(Spacing::Thin));
        assert_eq!(spacing(Inner, Op, true), Some(Spacing::Thin));
        for left in AtomClass::ALL {
            for right in AtomClass::ALL {
                if let Some(s) = spacing(left, right, true) {
                    assert_eq!(s, Spacing::Thin);
                    assert_eq!(spacing(left, right, false), Some(Spacing::Thin));
                }
            }
        }
    }

    #[test]
    fn spaces_in_em() {
        assert!((Spacing::Thin.em() - 1.0 / 6.0).abs() < 1e-12);
        assert!((Spacing::Medium.em() - 4.0 / 18.0).abs() < 1e-12);
        assert!((Spacing::Thick.em() - 5.0 / 18.0).abs() < 1e-12);
    }

    #[test]
    fn class_names_round_trip() {
        for class in AtomClass::ALL {
            assert_eq!(AtomClass::from_class_name(class.class_name()), Some(class));
        }
        assert_eq!(AtomClass::from_class_name("mspace"), None);
    }
}
