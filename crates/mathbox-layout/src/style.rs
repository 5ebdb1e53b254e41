//! The eight TeX styles and their transitions.
//!
//! Styles are {display, text, script, scriptscript} x {uncramped, cramped}.
//! Every transition is a fixed table lookup keyed by the style id, so all
//! of them are total.

use std::fmt;
use std::str::FromStr;

use mathbox_types::error::MathboxError;

/// One of the eight TeX styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Display,
    DisplayCramped,
    Text,
    TextCramped,
    Script,
    ScriptCramped,
    ScriptScript,
    ScriptScriptCramped,
}

use Style::{
    Display as D, DisplayCramped as Dc, Script as S, ScriptCramped as Sc, ScriptScript as SS,
    ScriptScriptCramped as SSc, Text as T, TextCramped as Tc,
};

const SUP: [Style; 8] = [S, Sc, S, Sc, SS, SSc, SS, SSc];
const SUB: [Style; 8] = [Sc, Sc, Sc, Sc, SSc, SSc, SSc, SSc];
const FRAC_NUM: [Style; 8] = [T, Tc, S, Sc, SS, SSc, SS, SSc];
const FRAC_DEN: [Style; 8] = [Tc, Tc, Sc, Sc, SSc, SSc, SSc, SSc];
const CRAMP: [Style; 8] = [Dc, Dc, Tc, Tc, Sc, Sc, SSc, SSc];

const SIZE_MULTIPLIERS: [f64; 4] = [1.0, 1.0, 0.7, 0.5];

const SIZE_NAMES: [&str; 4] = [
    "displaystyle textstyle",
    "textstyle",
    "scriptstyle",
    "scriptscriptstyle",
];

const RESET_NAMES: [&str; 4] = [
    "reset-textstyle",
    "reset-textstyle",
    "reset-scriptstyle",
    "reset-scriptscriptstyle",
];

impl Style {
    /// All styles in id order.
    pub const ALL: [Style; 8] = [D, Dc, T, Tc, S, Sc, SS, SSc];

    /// Table index, 0 (display) through 7 (scriptscript cramped).
    pub fn id(self) -> usize {
        self as usize
    }

    /// Size level: 0 display, 1 text, 2 script, 3 scriptscript.
    pub fn size(self) -> usize {
        self.id() / 2
    }

    pub fn is_cramped(self) -> bool {
        self.id() % 2 == 1
    }

    /// Font scale relative to text style.
    pub fn size_multiplier(self) -> f64 {
        SIZE_MULTIPLIERS[self.size()]
    }

    /// Script and scriptscript styles use the tight spacing table.
    pub fn is_tight(self) -> bool {
        self.size() >= 2
    }

    pub fn sup(self) -> Style {
        SUP[self.id()]
    }

    pub fn sub(self) -> Style {
        SUB[self.id()]
    }

    pub fn frac_num(self) -> Style {
        FRAC_NUM[self.id()]
    }

    pub fn frac_den(self) -> Style {
        FRAC_DEN[self.id()]
    }

    pub fn cramp(self) -> Style {
        CRAMP[self.id()]
    }

    /// Class names for backends, e.g. `"textstyle uncramped"`.
    pub fn cls(self) -> String {
        let cramped = if self.is_cramped() { "cramped" } else { "uncramped" };
        format!("{} {cramped}", SIZE_NAMES[self.size()])
    }

    /// Class name that undoes this style's scaling.
    pub fn reset(self) -> &'static str {
        RESET_NAMES[self.size()]
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.size() {
            0 => "display",
            1 => "text",
            2 => "script",
            _ => "scriptscript",
        };
        if self.is_cramped() {
            write!(f, "{name}'")
        } else {
            f.write_str(name)
        }
    }
}

impl FromStr for Style {
    type Err = MathboxError;

    /// Parse one of the uncramped style names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "display" => Ok(D),
            "text" => Ok(T),
            "script" => Ok(S),
            "scriptscript" => Ok(SS),
            other => Err(MathboxError::MalformedInput(format!(
                "unknown style '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_and_multipliers() {
        assert_eq!(Style::Display.size(), 0);
        assert_eq!(Style::TextCramped.size(), 1);
        assert_eq!(Style::ScriptCramped.size(), 2);
        assert_eq!(Style::ScriptScript.size(), 3);
        assert_eq!(Style::Display.size_multiplier(), 1.0);
        assert_eq!(Style::Text.size_multiplier(), 1.0);
        assert_eq!(Style::Script.size_multiplier(), 0.7);
        assert_eq!(Style::ScriptScriptCramped.size_multiplier(), 0.5);
    }

    #[test]
    fn transition_tables() {
        assert_eq!(Style::Display.sup(), Style::Script);
        assert_eq!(Style::TextCramped.sup(), Style::ScriptCramped);
        assert_eq!(Style::Text.sub(), Style::ScriptCramped);
        assert_eq!(Style::Script.sub(), Style::ScriptScriptCramped);
        assert_eq!(Style::Display.frac_num(), Style::Text);
        assert_eq!(Style::Text.frac_num(), Style::Script);
        assert_eq!(Style::Display.frac_den(), Style::TextCramped);
        assert_eq!(Style::ScriptScript.frac_den(), Style::ScriptScriptCramped);
        assert_eq!(Style::Display.cramp(), Style::DisplayCramped);
    }

    #[test]
    fn class_names() {
        assert_eq!(Style::Text.cls(), "textstyle uncramped");
        assert_eq!(Style::DisplayCramped.cls(), "displaystyle textstyle cramped");
        assert_eq!(Style::ScriptScript.cls(), "scriptscriptstyle uncramped");
        assert_eq!(Style::Display.reset(), "reset-textstyle");
        assert_eq!(Style::ScriptCramped.reset(), "reset-scriptstyle");
        assert_eq!(Style::ScriptScript.reset(), "reset-scriptscriptstyle");
    }

    #[test]
    fn tightness() {
        assert!(!Style::Display.is_tight());
        assert!(!Style::TextCramped.is_tight());
        assert!(Style::Script.is_tight());
        assert!(Style::ScriptScriptCramped.is_tight());
    }

    #[test]
    fn parse_names() {
        assert_eq!("display".parse::<Style>().unwrap(), Style::Display);
        assert_eq!("scriptscript".parse::<Style>().unwrap(), Style::ScriptScript);
        assert!(matches!(
            "huge".parse::<Style>(),
            Err(MathboxError::MalformedInput(_))
        ));
    }

    #[test]
    fn display_marks_cramped() {
        assert_eq!(Style::Text.to_string(), "text");
        assert_eq!(Style::ScriptCramped.to_string(), "script'");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn arb_style() -> impl Strategy<Value = Style> {
            (0usize..8).prop_map(|i| Style::ALL[i])
        }

        proptest! {
            #[test]
            fn cramp_is_idempotent(s in arb_style()) {
                prop_assert_eq!(s.cramp().cramp(), s.cramp());
                prop_assert!(s.cramp().is_cramped());
            }

            #[test]
            fn transitions_never_grow(s in arb_style()) {
                for next in [s.sup(), s.sub(), s.frac_num(), s.frac_den(), s.cramp()] {
                    prop_assert!(Style::ALL.contains(&next));
                    prop_assert!(next.size() >= s.size());
                }
            }

            #[test]
            fn cramped_styles_stay_cramped(s in arb_style()) {
                if s.is_cramped() {
                    prop_assert!(s.sup().is_cramped());
                    prop_assert!(s.frac_num().is_cramped());
                }
                prop_assert!(s.sub().is_cramped());
                prop_assert!(s.frac_den().is_cramped());
            }

            #[test]
            fn id_round_trips(s in arb_style()) {
                prop_assert_eq!(Style::ALL[s.id()], s);
            }
        }
    }
}
