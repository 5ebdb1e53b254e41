//! TeX font parameters.
//!
//! Text-style values of the math symbol font (`cmsy10`) and extension font
//! (`cmex10`) parameters, in em. See the TeXbook, appendix G.

/// Global font parameters used by script, fraction and delimiter placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontConstants {
    pub slant: f64,
    pub x_height: f64,
    pub quad: f64,
    pub num1: f64,
    pub num2: f64,
    pub num3: f64,
    pub denom1: f64,
    pub denom2: f64,
    pub sup1: f64,
    pub sup2: f64,
    pub sup3: f64,
    pub sub1: f64,
    pub sub2: f64,
    pub sup_drop: f64,
    pub sub_drop: f64,
    pub delim1: f64,
    pub delim2: f64,
    /// Height of the math axis above the baseline.
    pub axis_height: f64,
    pub default_rule_thickness: f64,
    pub big_op_spacing: [f64; 5],
    /// Points per em; converts pt-denominated TeX constants.
    pub pt_per_em: f64,
}

impl Default for FontConstants {
    fn default() -> Self {
        Self {
            slant: 0.250,
            x_height: 0.431,
            quad: 1.000,
            num1: 0.677,
            num2: 0.394,
            num3: 0.444,
            denom1: 0.686,
            denom2: 0.345,
            sup1: 0.413,
            sup2: 0.363,
            sup3: 0.289,
            sub1: 0.150,
            sub2: 0.247,
            sup_drop: 0.386,
            sub_drop: 0.050,
            delim1: 2.390,
            delim2: 1.010,
            axis_height: 0.250,
            default_rule_thickness: 0.04,
            big_op_spacing: [0.111, 0.166, 0.2, 0.6, 0.1],
            pt_per_em: 10.0,
        }
    }
}

impl FontConstants {
    /// `\delimitershortfall`-style slack used by left/right sizing (5pt).
    pub fn delimiter_extend(&self) -> f64 {
        5.0 / self.pt_per_em
    }

    /// `\scriptspace` (0.5pt) in em.
    pub fn script_space(&self) -> f64 {
        0.5 / self.pt_per_em
    }
}
