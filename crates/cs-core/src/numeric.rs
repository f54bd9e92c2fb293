use crate::{CsError, CsResult};

pub type Real = f64;

/// Absolute and relative closeness bounds for `f64` comparisons.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    /// Absorbs the round-off of a mm² -> m² -> mm² (or °C -> K -> °C) trip,
    /// and nothing wider.
    pub const CONVERSION: Tolerances = Tolerances {
        abs: 1e-12,
        rel: 1e-9,
    };

    pub fn close(self, a: Real, b: Real) -> bool {
        let diff = (a - b).abs();
        diff <= self.abs || diff <= self.rel * a.abs().max(b.abs())
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::CONVERSION
    }
}

pub fn ensure_finite(v: Real, what: &'static str) -> CsResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CsError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> CsResult<Real> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CsError::NonPositive { what, value: v })
    }
}

/// `part` as a percentage of `whole`.
#[inline]
pub fn percent_of(part: Real, whole: Real) -> Real {
    part / whole * 100.0
}

/// Clamp into `[0, 1]`, mapping NaN to 0.
pub fn unit_clamp(v: Real) -> Real {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_tolerance() {
        let tol = Tolerances::CONVERSION;
        assert!(tol.close(2.5, 2.5 * (1.0 + 1e-12)));
        assert!(tol.close(0.0, 1e-13));
        assert!(!tol.close(2.5, 2.5001));
        assert!(!tol.close(0.75, 1.0));
        assert_eq!(Tolerances::default(), tol);
    }

    #[test]
    fn positivity_checks() {
        assert_eq!(ensure_positive(12.0, "voltage"), Ok(12.0));
        assert_eq!(
            ensure_positive(0.0, "voltage"),
            Err(CsError::NonPositive {
                what: "voltage",
                value: 0.0
            })
        );
        assert!(matches!(
            ensure_positive(Real::NAN, "voltage"),
            Err(CsError::NonFinite { .. })
        ));
        assert!(ensure_finite(Real::NEG_INFINITY, "ambient").is_err());
        assert_eq!(ensure_finite(-40.0, "ambient"), Ok(-40.0));
    }

    #[test]
    fn percentages() {
        assert!((percent_of(3.36, 12.0) - 28.0).abs() < 1e-12);
        assert_eq!(percent_of(0.0, 230.0), 0.0);
    }

    #[test]
    fn unit_clamp_bounds() {
        assert_eq!(unit_clamp(-0.5), 0.0);
        assert_eq!(unit_clamp(0.25), 0.25);
        assert_eq!(unit_clamp(7.0), 1.0);
        assert_eq!(unit_clamp(Real::NAN), 0.0);
    }
}
