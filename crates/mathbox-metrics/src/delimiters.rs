//! Delimiter tables.
//!
//! A delimiter can grow in two ways: through the pre-drawn larger glyphs of
//! the `Size1`..`Size4` faces ("normal" delimiters), or by stacking a top,
//! an optional middle, a repeated extender and a bottom piece ("stackable"
//! delimiters, described by a [`DelimiterAssembly`]). Some delimiters do
//! both: they use large glyphs first and stack once those run out.

use std::collections::{HashMap, HashSet};

use crate::font::FontVariant;

/// How a delimiter can be scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterKind {
    /// Only pre-drawn large variants exist.
    NormalOnly,
    /// Only a stacked assembly exists.
    StackOnly,
    /// Large variants first, then a stacked assembly.
    NormalAndStack,
}

impl DelimiterKind {
    pub fn has_large_variants(self) -> bool {
        matches!(self, DelimiterKind::NormalOnly | DelimiterKind::NormalAndStack)
    }

    pub fn is_stackable(self) -> bool {
        matches!(self, DelimiterKind::StackOnly | DelimiterKind::NormalAndStack)
    }
}

/// Pieces of a stacked delimiter. Piece names are symbol names and go
/// through the symbol table's replacement before measuring.
#[derive(Debug, Clone, PartialEq)]
pub struct DelimiterAssembly {
    pub top: String,
    pub middle: Option<String>,
    pub repeat: String,
    pub bottom: String,
    pub variant: FontVariant,
    /// Whether consecutive pieces may overlap so the stack hits the target
    /// height exactly instead of overshooting by up to one extender.
    pub overlap: bool,
}

impl DelimiterAssembly {
    fn new(top: &str, repeat: &str, bottom: &str, variant: FontVariant, overlap: bool) -> Self {
        Self {
            top: top.to_string(),
            middle: None,
            repeat: repeat.to_string(),
            bottom: bottom.to_string(),
            variant,
            overlap,
        }
    }

    fn with_middle(mut self, middle: &str) -> Self {
        self.middle = Some(middle.to_string());
        self
    }
}

/// Delimiter classification and assembly descriptors.
#[derive(Debug, Clone, Default)]
pub struct DelimiterTable {
    large: HashSet<String>,
    assemblies: HashMap<String, DelimiterAssembly>,
    aliases: HashMap<String, String>,
}

impl DelimiterTable {
    /// An empty table: every delimiter is illegal.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in delimiter set.
    pub fn builtin() -> Self {
        use FontVariant::{Size1Regular as S1, Size4Regular as S4};

        let mut table = Self::new();

        for name in [
            "(", ")", "[", "]", "\\{", "\\}", "\\lfloor", "\\rfloor", "\\lceil", "\\rceil",
            "\\langle", "\\rangle", "/", "\\backslash", "\\surd",
        ] {
            table.add_large(name);
        }

        let entries = [
            ("\\uparrow", DelimiterAssembly::new("\\uparrow", "\u{23d0}", "\u{23d0}", S1, false)),
            ("\\Uparrow", DelimiterAssembly::new("\\Uparrow", "\u{2016}", "\u{2016}", S1, false)),
            ("\\downarrow", DelimiterAssembly::new("\u{23d0}", "\u{23d0}", "\\downarrow", S1, false)),
            ("\\Downarrow", DelimiterAssembly::new("\u{2016}", "\u{2016}", "\\Downarrow", S1, false)),
            ("\\updownarrow", DelimiterAssembly::new("\\uparrow", "\u{23d0}", "\\downarrow", S1, false)),
            ("\\Updownarrow", DelimiterAssembly::new("\\Uparrow", "\u{2016}", "\\Downarrow", S1, false)),
            ("|", DelimiterAssembly::new("|", "|", "|", S1, true)),
            ("\\|", DelimiterAssembly::new("\\|", "\\|", "\\|", S1, true)),
            ("[", DelimiterAssembly::new("\u{23a1}", "\u{23a2}", "\u{23a3}", S4, true)),
            ("]", DelimiterAssembly::new("\u{23a4}", "\u{23a5}", "\u{23a6}", S4, true)),
            ("\\lfloor", DelimiterAssembly::new("\u{23a2}", "\u{23a2}", "\u{23a3}", S4, true)),
            ("\\lceil", DelimiterAssembly::new("\u{23a1}", "\u{23a2}", "\u{23a2}", S4, true)),
            ("\\rfloor", DelimiterAssembly::new("\u{23a5}", "\u{23a5}", "\u{23a6}", S4, true)),
            ("\\rceil", DelimiterAssembly::new("\u{23a4}", "\u{23a5}", "\u{23a5}", S4, true)),
            ("(", DelimiterAssembly::new("\u{239b}", "\u{239c}", "\u{239d}", S4, true)),
            (")", DelimiterAssembly::new("\u{239e}", "\u{239f}", "\u{23a0}", S4, true)),
            (
                "\\{",
                DelimiterAssembly::new("\u{23a7}", "\u{23aa}", "\u{23a9}", S4, false)
                    .with_middle("\u{23a8}"),
            ),
            (
                "\\}",
                DelimiterAssembly::new("\u{23ab}", "\u{23aa}", "\u{23ad}", S4, false)
                    .with_middle("\u{23ac}"),
            ),
            ("\\lgroup", DelimiterAssembly::new("\u{23a7}", "\u{23aa}", "\u{23a9}", S4, false)),
            ("\\rgroup", DelimiterAssembly::new("\u{23ab}", "\u{23aa}", "\u{23ad}", S4, false)),
            ("\\lmoustache", DelimiterAssembly::new("\u{23a7}", "\u{23aa}", "\u{23ad}", S4, false)),
            ("\\rmoustache", DelimiterAssembly::new("\u{23ab}", "\u{23aa}", "\u{23a9}", S4, false)),
            ("\\surd", DelimiterAssembly::new("\u{e001}", "\u{e000}", "\u{23b7}", S4, false)),
        ];
        for (name, assembly) in entries {
            table.add_assembly(name, assembly);
        }

        for (alias, target) in [
            ("<", "\\langle"),
            ("\\lt", "\\langle"),
            (">", "\\rangle"),
            ("\\gt", "\\rangle"),
            ("\\lbrack", "["),
            ("\\rbrack", "]"),
            ("\\lbrace", "\\{"),
            ("\\rbrace", "\\}"),
            ("\\vert", "|"),
            ("\\lvert", "|"),
            ("\\rvert", "|"),
            ("\\Vert", "\\|"),
            ("\\lVert", "\\|"),
            ("\\rVert", "\\|"),
        ] {
            table.add_alias(alias, target);
        }

        table
    }

    /// Declare that `name` has `Size1`..`Size4` glyph variants.
    pub fn add_large(&mut self, name: &str) {
        self.large.insert(name.to_string());
    }

    /// Declare a stacked assembly for `name`.
    pub fn add_assembly(&mut self, name: &str, assembly: DelimiterAssembly) {
        self.assemblies.insert(name.to_string(), assembly);
    }

    /// Make `alias` behave exactly like `target`.
    pub fn add_alias(&mut self, alias: &str, target: &str) {
        self.aliases.insert(alias.to_string(), target.to_string());
    }

    /// The canonical name of `delim` after alias resolution.
    pub fn canonical<'a>(&'a self, delim: &'a str) -> &'a str {
        self.aliases.get(delim).map_or(delim, String::as_str)
    }

    /// Classify `delim`; `None` means the delimiter is illegal.
    pub fn kind(&self, delim: &str) -> Option<DelimiterKind> {
        let name = self.canonical(delim);
        match (self.large.contains(name), self.assemblies.contains_key(name)) {
            (true, true) => Some(DelimiterKind::NormalAndStack),
            (true, false) => Some(DelimiterKind::NormalOnly),
            (false, true) => Some(DelimiterKind::StackOnly),
            (false, false) => None,
        }
    }

    /// The stacked assembly of `delim`, if it has one.
    pub fn assembly(&self, delim: &str) -> Option<&DelimiterAssembly> {
        self.assemblies.get(self.canonical(delim))
    }
}
