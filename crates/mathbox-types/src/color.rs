//! Named color table.
//!
//! Color groups in the input tree carry either a literal color value
//! (`#ff0000`, `red`, ...) or one of a handful of house color names. The
//! house names resolve to fixed literals; everything else passes through
//! untouched.

/// House color names and their literal values.
pub const NAMED_COLORS: [(&str, &str); 7] = [
    ("mathbox-blue", "#6495ed"),
    ("mathbox-orange", "#ffa500"),
    ("mathbox-pink", "#ff00af"),
    ("mathbox-red", "#df0030"),
    ("mathbox-green", "#28ae7b"),
    ("mathbox-gray", "gray"),
    ("mathbox-purple", "#9d38bd"),
];

/// Resolve a color name against [`NAMED_COLORS`], falling through to the
/// literal value.
pub fn resolve_named_color(name: &str) -> &str {
    NAMED_COLORS
        .iter()
        .find(|(key, _)| *key == name)
        .map_or(name, |(_, value)| *value)
}
