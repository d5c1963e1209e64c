use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Nano-units per whole unit of a fixed-point quotation
pub const NANO_PER_UNIT: i64 = 1_000_000_000;

/// Convert a fixed-point quotation into a float.
///
/// `units + nano / 1e9`, rounded to 9 decimal places so the binary float
/// noise of the division never leaks into prices.
pub fn price_from_fixed_point(units: i64, nano: i32) -> f64 {
    let raw = units as f64 + nano as f64 / NANO_PER_UNIT as f64;
    (raw * NANO_PER_UNIT as f64).round() / NANO_PER_UNIT as f64
}

/// Fixed-point price as delivered by the invest API.
///
/// `units` is the whole part, `nano` the fractional part in 1e-9 units.
/// Both parts carry the sign of the value (-1.5 is `(-1, -500_000_000)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PricePoint {
    pub units: i64,
    pub nano: i32,
}

impl PricePoint {
    pub fn new(units: i64, nano: i32) -> Self {
        Self { units, nano }
    }

    /// Float value rounded to 9 decimal places
    pub fn to_f64(&self) -> f64 {
        price_from_fixed_point(self.units, self.nano)
    }

    /// Exact decimal value (scale 9)
    pub fn to_decimal(&self) -> Decimal {
        let mantissa = self.units as i128 * NANO_PER_UNIT as i128 + self.nano as i128;
        Decimal::from_i128_with_scale(mantissa, 9).normalize()
    }

    pub fn is_zero(&self) -> bool {
        self.units == 0 && self.nano == 0
    }
}

impl From<PricePoint> for f64 {
    fn from(p: PricePoint) -> Self {
        p.to_f64()
    }
}

impl std::fmt::Display for PricePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fixed_point_half() {
        assert_eq!(price_from_fixed_point(10, 500_000_000), 10.5);
    }

    #[test]
    fn test_fixed_point_nine_places() {
        assert_eq!(price_from_fixed_point(0, 123_456_789), 0.123456789);
        assert_eq!(price_from_fixed_point(0, 1), 0.000000001);
        assert_eq!(price_from_fixed_point(114, 250_000_000), 114.25);
    }

    #[test]
    fn test_fixed_point_removes_float_noise() {
        // 0.1 + 0.2 style noise must not survive the conversion
        assert_eq!(price_from_fixed_point(0, 300_000_000), 0.3);
        assert_eq!(price_from_fixed_point(2, 700_000_000), 2.7);
    }

    #[test]
    fn test_negative_quotation() {
        let p = PricePoint::new(-1, -250_000_000);
        assert_eq!(p.to_f64(), -1.25);
        assert_eq!(p.to_decimal(), dec!(-1.25));
    }

    #[test]
    fn test_to_decimal_is_exact() {
        let p = PricePoint::new(271, 380_000_001);
        assert_eq!(p.to_decimal(), dec!(271.380000001));
        assert_eq!(p.to_string(), "271.380000001");
    }

    #[test]
    fn test_zero() {
        assert!(PricePoint::default().is_zero());
        assert!(!PricePoint::new(0, 1).is_zero());
    }
}
