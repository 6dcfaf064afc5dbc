use core::fmt;

use serde::Serialize;

/// A fraction as stored by the TIFF RATIONAL and SRATIONAL field types.
/// Equality is structural: `1/2` and `2/4` are different values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rational {
    pub numerator: i64,
    pub denominator: i64,
}

impl Rational {
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self { numerator, denominator }
    }

    /// returns `NaN` when the denominator is zero.
    pub fn to_f64(self) -> f64 {
        if self.denominator == 0 {
            return f64::NAN;
        }
        self.numerator as f64 / self.denominator as f64
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl From<(i64, i64)> for Rational {
    fn from((numerator, denominator): (i64, i64)) -> Self {
        Self::new(numerator, denominator)
    }
}
