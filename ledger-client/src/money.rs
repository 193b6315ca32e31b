//! Money calculation utilities using rust_decimal for precision
//!
//! Prices cross the wire as `f64`; every sum is carried out in
//! `Decimal`. Rounding to 2 decimal places happens only when an
//! amount is formatted for display, never in a stored total.

use rust_decimal::prelude::*;

/// Rounding for display amounts (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert an f64 price into Decimal for calculation.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Format an exact amount for display, rounded to 2 decimal places.
pub fn format_amount(value: Decimal) -> String {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_sum_avoids_float_drift() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let sum = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(sum, Decimal::new(3, 1));
    }

    #[test]
    fn accumulation_precision() {
        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total += to_decimal(0.01);
        }
        assert_eq!(total, Decimal::new(10, 0));
    }

    #[test]
    fn display_rounds_half_up() {
        assert_eq!(format_amount(Decimal::new(12345, 3)), "12.35"); // 12.345
        assert_eq!(format_amount(Decimal::new(10, 0)), "10");
    }

    #[test]
    fn non_finite_defaults_to_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }
}
