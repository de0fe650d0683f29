use crate::GfError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, GfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GfError::NonFinite { what, value: v })
    }
}

/// Closed interval a dimensionless parameter is clamped into.
///
/// Efficiencies use the full unit interval; loss and pressure-drop fractions
/// use tighter sub-ranges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractionRange {
    pub lo: Real,
    pub hi: Real,
}

impl FractionRange {
    /// The unit interval [0, 1].
    pub const UNIT: Self = Self { lo: 0.0, hi: 1.0 };

    /// Interval [0, hi].
    pub const fn up_to(hi: Real) -> Self {
        Self { lo: 0.0, hi }
    }

    /// Clamp `v` into the range. NaN maps to the lower bound.
    pub fn clamp(&self, v: Real) -> Real {
        if v.is_nan() || v < self.lo {
            self.lo
        } else if v > self.hi {
            self.hi
        } else {
            v
        }
    }

    pub fn contains(&self, v: Real) -> bool {
        v >= self.lo && v <= self.hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn fraction_range_clamps_both_sides() {
        assert_eq!(FractionRange::UNIT.clamp(-0.5), 0.0);
        assert_eq!(FractionRange::UNIT.clamp(1.5), 1.0);
        assert_eq!(FractionRange::UNIT.clamp(0.42), 0.42);
        assert_eq!(FractionRange::up_to(0.2).clamp(0.35), 0.2);
        assert_eq!(FractionRange::up_to(0.01).clamp(0.01), 0.01);
    }

    #[test]
    fn fraction_range_nan_maps_to_lower_bound() {
        assert_eq!(FractionRange::up_to(0.05).clamp(Real::NAN), 0.0);
        assert_eq!(FractionRange::UNIT.clamp(Real::INFINITY), 1.0);
        assert_eq!(FractionRange::UNIT.clamp(Real::NEG_INFINITY), 0.0);
    }
}
