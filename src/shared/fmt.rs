//! Fixed-precision number formatting for display.
//!
//! Rates keep full precision everywhere in the SDK; only these helpers round, and only
//! for presentation.

/// Decimal places used for fiat rates on charts, tooltips and converter summaries.
pub const RATE_DECIMALS: usize = 4;

/// Decimal places used for crypto rate cards.
pub const CRYPTO_DECIMALS: usize = 8;

/// Format with exactly `decimals` fractional digits (`18.5` → `"18.5000"`).
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.1$}", value, decimals)
}

/// Round to `decimals` fractional digits, keeping the value numeric.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_pads_and_rounds() {
        assert_eq!(fixed(18.5, 4), "18.5000");
        assert_eq!(fixed(18.123456, 4), "18.1235");
        assert_eq!(fixed(1.0, 0), "1");
        assert_eq!(fixed(0.000012345678, CRYPTO_DECIMALS), "0.00001235");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(18.123456, 4), 18.1235);
        assert_eq!(round_to(18.5, 4), 18.5);
        assert_eq!(round_to(-1.23456, 2), -1.23);
    }
}
