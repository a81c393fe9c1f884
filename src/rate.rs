use std::fmt;

use crate::account::InvalidArgument;

/// Non-negative annual interest rate as a fraction (`0.05` is 5%),
/// held with 8 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Rate(i64);

impl Rate {
    pub(crate) const SCALE: i64 = 100_000_000;

    pub const ZERO: Rate = Rate(0);

    /// Rejects negative and non-finite values, and positive values that
    /// would round to zero or do not fit the scale.
    pub fn from_float(value: f64) -> Result<Self, InvalidArgument> {
        if !value.is_finite() {
            return Err(InvalidArgument::NonFiniteRate);
        }
        if value < 0.0 {
            return Err(InvalidArgument::NegativeRate(value));
        }
        let scaled = (value * Self::SCALE as f64).round();
        if scaled >= i64::MAX as f64 || (value > 0.0 && scaled == 0.0) {
            return Err(InvalidArgument::RateOutOfRange(value));
        }
        Ok(Rate(scaled as i64))
    }

    pub fn scaled(self) -> i64 {
        self.0
    }

    pub fn to_float(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }
}

/// Renders as a percentage with two decimals, e.g. `5.00 %`.
impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} %", self.to_float() * 100.0)
    }
}
