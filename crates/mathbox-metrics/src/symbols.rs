//! Symbol table: font family, atom group and glyph replacement per symbol.
//!
//! Symbols are keyed by their source name (`"x"`, `"+"`, `"\\langle"`).
//! A symbol may declare a replacement glyph: `\langle` is drawn as U+27E8,
//! `-` as U+2212. Builders resolve the replacement before measuring.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Input mode a symbol is looked up in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Math,
    Text,
}

/// Font family a symbol is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    Main,
    Ams,
}

/// Semantic group a symbol belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolGroup {
    MathOrd,
    TextOrd,
    Bin,
    Rel,
    Open,
    Close,
    Punct,
    Spacing,
    Accent,
}

/// One symbol table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub font: FontFamily,
    pub group: SymbolGroup,
    pub replace: Option<char>,
}

/// Symbols per mode.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    math: HashMap<String, Symbol>,
    text: HashMap<String, Symbol>,
}

use FontFamily::{Ams, Main};
use SymbolGroup::{Accent, Bin, Close, MathOrd, Open, Punct, Rel, Spacing, TextOrd};

#[rustfmt::skip]
const MATH_SYMBOLS: &[(&str, FontFamily, SymbolGroup, Option<char>)] = &[
    // Greek
    ("\\alpha", Main, MathOrd, Some('\u{3b1}')),
    ("\\beta", Main, MathOrd, Some('\u{3b2}')),
    ("\\gamma", Main, MathOrd, Some('\u{3b3}')),
    ("\\theta", Main, MathOrd, Some('\u{3b8}')),
    ("\\pi", Main, MathOrd, Some('\u{3c0}')),
    ("\\Gamma", Main, TextOrd, Some('\u{393}')),
    ("\\Delta", Main, TextOrd, Some('\u{394}')),
    ("\\infty", Main, TextOrd, Some('\u{221e}')),
    ("\\prime", Main, TextOrd, Some('\u{2032}')),
    ("\\mho", Ams, TextOrd, Some('\u{2127}')),
    ("\\lozenge", Ams, TextOrd, Some('\u{25ca}')),
    ("\\blacksquare", Ams, TextOrd, Some('\u{25a0}')),
    // Binary operators
    ("+", Main, Bin, None),
    ("-", Main, Bin, Some('\u{2212}')),
    ("\\cdot", Main, Bin, Some('\u{22c5}')),
    ("\\times", Main, Bin, Some('\u{d7}')),
    ("\\pm", Main, Bin, Some('\u{b1}')),
    // Relations
    ("=", Main, Rel, None),
    ("<", Main, Rel, None),
    (">", Main, Rel, None),
    ("\\lt", Main, Rel, Some('<')),
    ("\\gt", Main, Rel, Some('>')),
    ("\\le", Main, Rel, Some('\u{2264}')),
    ("\\ge", Main, Rel, Some('\u{2265}')),
    ("\\to", Main, Rel, Some('\u{2192}')),
    (":", Main, Rel, None),
    ("\\uparrow", Main, Rel, Some('\u{2191}')),
    ("\\downarrow", Main, Rel, Some('\u{2193}')),
    ("\\updownarrow", Main, Rel, Some('\u{2195}')),
    ("\\Uparrow", Main, Rel, Some('\u{21d1}')),
    ("\\Downarrow", Main, Rel, Some('\u{21d3}')),
    ("\\Updownarrow", Main, Rel, Some('\u{21d5}')),
    // Delimiters
    ("(", Main, Open, None),
    (")", Main, Close, None),
    ("[", Main, Open, None),
    ("]", Main, Close, None),
    ("\\lbrack", Main, Open, Some('[')),
    ("\\rbrack", Main, Close, Some(']')),
    ("\\{", Main, Open, Some('{')),
    ("\\}", Main, Close, Some('}')),
    ("\\lbrace", Main, Open, Some('{')),
    ("\\rbrace", Main, Close, Some('}')),
    ("\\langle", Main, Open, Some('\u{27e8}')),
    ("\\rangle", Main, Close, Some('\u{27e9}')),
    ("\\lfloor", Main, Open, Some('\u{230a}')),
    ("\\rfloor", Main, Close, Some('\u{230b}')),
    ("\\lceil", Main, Open, Some('\u{2308}')),
    ("\\rceil", Main, Close, Some('\u{2309}')),
    ("\\lgroup", Main, Open, Some('\u{27ee}')),
    ("\\rgroup", Main, Close, Some('\u{27ef}')),
    ("\\lmoustache", Main, Open, Some('\u{23b0}')),
    ("\\rmoustache", Main, Close, Some('\u{23b1}')),
    ("|", Main, TextOrd, Some('\u{2223}')),
    ("\\vert", Main, TextOrd, Some('\u{2223}')),
    ("\\|", Main, TextOrd, Some('\u{2225}')),
    ("\\Vert", Main, TextOrd, Some('\u{2225}')),
    ("/", Main, TextOrd, None),
    ("\\backslash", Main, TextOrd, Some('\\')),
    ("\\surd", Main, TextOrd, Some('\u{221a}')),
    // Punctuation and closers
    (",", Main, Punct, None),
    (";", Main, Punct, None),
    ("!", Main, Close, None),
    ("?", Main, Close, None),
    // Spacing
    (" ", Main, Spacing, Some('\u{a0}')),
    ("~", Main, Spacing, Some('\u{a0}')),
    ("\\ ", Main, Spacing, Some('\u{a0}')),
    ("\\space", Main, Spacing, Some('\u{a0}')),
    // Accents
    ("\\hat", Main, Accent, Some('^')),
    ("\\bar", Main, Accent, Some('\u{af}')),
    ("\\dot", Main, Accent, Some('\u{2d9}')),
    ("\\vec", Main, Accent, Some('\u{20d7}')),
];

impl SymbolTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in symbol set: Latin letters, digits, a Greek subset,
    /// common operators, relations, delimiters, spacing and accents.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for &(name, font, group, replace) in MATH_SYMBOLS {
            table.insert(Mode::Math, name, Symbol { font, group, replace });
        }
        for ch in ('a'..='z').chain('A'..='Z') {
            let name = ch.to_string();
            table.insert(Mode::Math, &name, Symbol { font: Main, group: MathOrd, replace: None });
            table.insert(Mode::Text, &name, Symbol { font: Main, group: TextOrd, replace: None });
        }
        for ch in '0'..='9' {
            let name = ch.to_string();
            table.insert(Mode::Math, &name, Symbol { font: Main, group: TextOrd, replace: None });
            table.insert(Mode::Text, &name, Symbol { font: Main, group: TextOrd, replace: None });
        }
        table.insert(Mode::Text, " ", Symbol { font: Main, group: Spacing, replace: Some('\u{a0}') });
        table
    }

    /// Add or replace a symbol.
    pub fn insert(&mut self, mode: Mode, name: &str, symbol: Symbol) {
        self.table_mut(mode).insert(name.to_string(), symbol);
    }

    /// Look a symbol up.
    pub fn get(&self, mode: Mode, name: &str) -> Option<&Symbol> {
        match mode {
            Mode::Math => self.math.get(name),
            Mode::Text => self.text.get(name),
        }
    }

    /// The glyph text drawn for `name`: its replacement if declared,
    /// otherwise the name itself.
    pub fn resolve(&self, mode: Mode, name: &str) -> String {
        match self.get(mode, name).and_then(|s| s.replace) {
            Some(ch) => ch.to_string(),
            None => name.to_string(),
        }
    }

    /// Font family of `name`, defaulting to [`FontFamily::Main`] for
    /// symbols the table does not know.
    pub fn family(&self, mode: Mode, name: &str) -> FontFamily {
        self.get(mode, name).map_or(FontFamily::Main, |s| s.font)
    }

    fn table_mut(&mut self, mode: Mode) -> &mut HashMap<String, Symbol> {
        match mode {
            Mode::Math => &mut self.math,
            Mode::Text => &mut self.text,
        }
    }
}
