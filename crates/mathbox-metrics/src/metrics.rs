//! The glyph metrics table.
//!
//! Maps `(character, font variant)` to [`CharacterMetrics`]. Tables are
//! built once (from the built-in fixture set or an external JSON document)
//! and only read afterwards.

use std::collections::HashMap;
use std::path::Path;

use mathbox_types::error::{MathboxError, Result};

use crate::font::{CharacterMetrics, FontVariant};

/// Accented Latin-1 and Cyrillic letters with no glyph of their own are
/// measured as the listed base letter.
#[rustfmt::skip]
const FALLBACK_CHARACTERS: &[(char, char)] = &[
    // Latin-1
    ('À', 'A'), ('Á', 'A'), ('Â', 'A'), ('Ã', 'A'), ('Ä', 'A'), ('Å', 'A'),
    ('Æ', 'A'), ('Ç', 'C'), ('È', 'E'), ('É', 'E'), ('Ê', 'E'), ('Ë', 'E'),
    ('Ì', 'I'), ('Í', 'I'), ('Î', 'I'), ('Ï', 'I'), ('Ð', 'D'), ('Ñ', 'N'),
    ('Ò', 'O'), ('Ó', 'O'), ('Ô', 'O'), ('Õ', 'O'), ('Ö', 'O'), ('Ø', 'O'),
    ('Ù', 'U'), ('Ú', 'U'), ('Û', 'U'), ('Ü', 'U'), ('Ý', 'Y'), ('Þ', 'o'),
    ('ß', 'B'), ('à', 'a'), ('á', 'a'), ('â', 'a'), ('ã', 'a'), ('ä', 'a'),
    ('å', 'a'), ('æ', 'a'), ('ç', 'c'), ('è', 'e'), ('é', 'e'), ('ê', 'e'),
    ('ë', 'e'), ('ì', 'i'), ('í', 'i'), ('î', 'i'), ('ï', 'i'), ('ð', 'd'),
    ('ñ', 'n'), ('ò', 'o'), ('ó', 'o'), ('ô', 'o'), ('õ', 'o'), ('ö', 'o'),
    ('ø', 'o'), ('ù', 'u'), ('ú', 'u'), ('û', 'u'), ('ü', 'u'), ('ý', 'y'),
    ('þ', 'o'), ('ÿ', 'y'),
    // Cyrillic
    ('А', 'A'), ('Б', 'B'), ('В', 'B'), ('Г', 'F'), ('Д', 'A'), ('Е', 'E'),
    ('Ж', 'K'), ('З', '3'), ('И', 'N'), ('Й', 'N'), ('К', 'K'), ('Л', 'N'),
    ('М', 'M'), ('Н', 'H'), ('О', 'O'), ('П', 'N'), ('Р', 'P'), ('С', 'C'),
    ('Т', 'T'), ('У', 'y'), ('Ф', 'O'), ('Х', 'X'), ('Ц', 'U'), ('Ч', 'h'),
    ('Ш', 'W'), ('Щ', 'W'), ('Ъ', 'B'), ('Ы', 'X'), ('Ь', 'B'), ('Э', '3'),
    ('Ю', 'X'), ('Я', 'R'), ('а', 'a'), ('б', 'b'), ('в', 'a'), ('г', 'r'),
    ('д', 'y'), ('е', 'e'), ('ж', 'm'), ('з', 'e'), ('и', 'n'), ('й', 'n'),
    ('к', 'n'), ('л', 'n'), ('м', 'm'), ('н', 'n'), ('о', 'o'), ('п', 'n'),
    ('р', 'p'), ('с', 'c'), ('т', 'o'), ('у', 'y'), ('ф', 'b'), ('х', 'x'),
    ('ц', 'n'), ('ч', 'n'), ('ш', 'w'), ('щ', 'w'), ('ъ', 'a'), ('ы', 'm'),
    ('ь', 'a'), ('э', 'e'), ('ю', 'm'), ('я', 'r'),
];

/// CJK symbols, kana, ideographs, Hangul syllables and fullwidth forms.
fn is_cjk(ch: char) -> bool {
    matches!(ch,
        '\u{3000}'..='\u{30FF}'
        | '\u{4E00}'..='\u{9FAF}'
        | '\u{AC00}'..='\u{D7AF}'
        | '\u{FF00}'..='\u{FF60}')
}

/// The character whose metrics stand in for `ch`.
pub fn metric_character(ch: char) -> char {
    if let Some((_, base)) = FALLBACK_CHARACTERS.iter().find(|(c, _)| *c == ch) {
        *base
    } else if is_cjk(ch) {
        'M'
    } else {
        ch
    }
}

/// Glyph metrics keyed by font variant and code point.
#[derive(Debug, Clone, Default)]
pub struct FontMetrics {
    fonts: HashMap<FontVariant, HashMap<u32, CharacterMetrics>>,
}

impl FontMetrics {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the metrics of one glyph.
    pub fn insert(&mut self, variant: FontVariant, ch: char, metrics: CharacterMetrics) {
        self.fonts
            .entry(variant)
            .or_default()
            .insert(ch as u32, metrics);
    }

    /// Metrics of the first character of `text` in `variant`.
    ///
    /// Applies the Latin-1/Cyrillic/CJK stand-in mapping before lookup.
    pub fn get(&self, text: &str, variant: FontVariant) -> Option<&CharacterMetrics> {
        let ch = metric_character(text.chars().next()?);
        self.fonts.get(&variant)?.get(&(ch as u32))
    }

    /// Number of glyphs in `variant`.
    pub fn glyph_count(&self, variant: FontVariant) -> usize {
        self.fonts.get(&variant).map_or(0, HashMap::len)
    }

    /// Parse a metrics document of the form
    /// `{"Main-Regular": {"40": [depth, height, italic, skew, width]}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, HashMap<String, Vec<f64>>> = serde_json::from_str(json)?;
        let mut table = Self::new();
        for (font_name, glyphs) in raw {
            let variant = FontVariant::from_name(&font_name)
                .ok_or_else(|| MathboxError::Metrics(format!("unknown font '{font_name}'")))?;
            for (code, values) in glyphs {
                let ch = code
                    .parse::<u32>()
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| {
                        MathboxError::Metrics(format!("bad code point '{code}' in {font_name}"))
                    })?;
                let metrics = CharacterMetrics::from_tuple(&values).ok_or_else(|| {
                    MathboxError::Metrics(format!(
                        "metrics for {code} in {font_name} need at least depth and height"
                    ))
                })?;
                table.insert(variant, ch, metrics);
            }
        }
        log::debug!(
            "loaded metrics for {} font variants",
            table.fonts.len()
        );
        Ok(table)
    }

    /// Read and parse a metrics document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Copy every glyph of `other` into this table, replacing duplicates.
    pub fn merge(&mut self, other: FontMetrics) {
        for (variant, glyphs) in other.fonts {
            self.fonts.entry(variant).or_default().extend(glyphs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn paren_table() -> FontMetrics {
        let mut t = FontMetrics::new();
        t.insert(FontVariant::MainRegular, '(', CharacterMetrics::new(0.75, 0.25));
        t.insert(FontVariant::MainRegular, 'A', CharacterMetrics::new(0.68333, 0.0));
        t.insert(FontVariant::MainRegular, 'M', CharacterMetrics::new(0.68333, 0.0));
        t
    }

    #[test]
    fn lookup_uses_first_character() {
        let t = paren_table();
        assert_eq!(t.get("(", FontVariant::MainRegular).unwrap().height, 0.75);
        assert_eq!(t.get("(abc", FontVariant::MainRegular).unwrap().depth, 0.25);
    }

    #[test]
    fn lookup_misses_other_variants() {
        let t = paren_table();
        assert!(t.get("(", FontVariant::Size1Regular).is_none());
        assert!(t.get("", FontVariant::MainRegular).is_none());
    }

    #[test]
    fn accented_letters_measure_as_base() {
        let t = paren_table();
        assert_eq!(metric_character('Å'), 'A');
        assert_eq!(metric_character('Д'), 'A');
        assert!(t.get("Á", FontVariant::MainRegular).is_some());
    }

    #[test]
    fn cjk_measures_as_m() {
        assert_eq!(metric_character('漢'), 'M');
        assert_eq!(metric_character('한'), 'M');
        assert_eq!(metric_character('x'), 'x');
    }

    #[test]
    fn json_document_parses() {
        let json = r#"{
            "Main-Regular": {"40": [0.25, 0.75, 0, 0, 0.38889]},
            "Size4-Regular": {"9116": [0.01, 0.6]}
        }"#;
        let t = FontMetrics::from_json(json).unwrap();
        let paren = t.get("(", FontVariant::MainRegular).unwrap();
        assert_eq!(paren.height, 0.75);
        assert_eq!(paren.width, Some(0.38889));
        let ext = t.get("\u{239c}", FontVariant::Size4Regular).unwrap();
        assert_eq!(ext.depth, 0.01);
        assert_eq!(t.glyph_count(FontVariant::Size4Regular), 1);
    }

    #[test]
    fn json_unknown_font_is_rejected() {
        let err = FontMetrics::from_json(r#"{"Fraktur-Bold": {"65": [0, 0.7]}}"#).unwrap_err();
        assert!(matches!(err, MathboxError::Metrics(_)));
    }

    #[test]
    fn json_bad_code_point_is_rejected() {
        let err = FontMetrics::from_json(r#"{"Main-Regular": {"paren": [0, 0.7]}}"#).unwrap_err();
        assert!(format!("{err}").contains("bad code point"));
    }

    #[test]
    fn json_short_tuple_is_rejected() {
        let err = FontMetrics::from_json(r#"{"Main-Regular": {"40": [0.25]}}"#).unwrap_err();
        assert!(matches!(err, MathboxError::Metrics(_)));
    }

    #[test]
    fn json_syntax_error_maps_to_json_variant() {
        let err = FontMetrics::from_json("{not json").unwrap_err();
        assert!(matches!(err, MathboxError::Json(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Math-Italic": {{"120": [0, 0.43056, 0, 0.02778, 0.57153]}}}}"#).unwrap();
        let t = FontMetrics::load(file.path()).unwrap();
        let x = t.get("x", FontVariant::MathItalic).unwrap();
        assert_eq!(x.skew, Some(0.02778));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = FontMetrics::load(Path::new("/nonexistent/metrics.json")).unwrap_err();
        assert!(matches!(err, MathboxError::Io(_)));
    }

    #[test]
    fn merge_overrides_duplicates() {
        let mut base = paren_table();
        let mut patch = FontMetrics::new();
        patch.insert(FontVariant::MainRegular, '(', CharacterMetrics::new(0.8, 0.3));
        base.merge(patch);
        assert_eq!(base.get("(", FontVariant::MainRegular).unwrap().height, 0.8);
        assert_eq!(base.glyph_count(FontVariant::MainRegular), 3);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ascii_measures_as_itself(ch in proptest::char::range(' ', '~')) {
                prop_assert_eq!(metric_character(ch), ch);
            }

            #[test]
            fn stand_in_is_never_cjk(ch in any::<char>()) {
                prop_assert!(!is_cjk(metric_character(ch)));
            }

            #[test]
            fn inserted_metrics_are_found(
                code in 0x21u32..0x7e,
                height in 0.0f64..3.0,
                depth in -0.5f64..3.0,
            ) {
                let ch = char::from_u32(code).unwrap();
                let mut t = FontMetrics::new();
                t.insert(FontVariant::Size2Regular, ch, CharacterMetrics::new(height, depth));
                let m = t.get(&ch.to_string(), FontVariant::Size2Regular).unwrap();
                prop_assert_eq!(m.height, height);
                prop_assert_eq!(m.depth, depth);
            }
        }
    }
}
