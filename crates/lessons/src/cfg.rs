//! Limits and defaults shared by the drills.
//!
//! Policy
//! - Defaults are fixed constants; callers that need another range build an
//!   `AgeCfg` explicitly instead of threading literals through call sites.

/// Youngest accepted age (inclusive).
pub const AGE_MIN: i64 = 0;
/// Oldest accepted age (inclusive).
pub const AGE_MAX: i64 = 120;
/// Text reported when a lookup misses and the caller supplied no default.
pub const MISSING_KEY_DEFAULT: &str = "key not found (default)";
/// Tolerance used when comparing computed floats in tests.
pub const FLOAT_EPS: f64 = 1e-9;

/// Accepted age range for `validate_age`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgeCfg {
    pub min: i64,
    pub max: i64,
}

impl Default for AgeCfg {
    fn default() -> Self {
        Self {
            min: AGE_MIN,
            max: AGE_MAX,
        }
    }
}

impl AgeCfg {
    #[inline]
    pub fn contains(&self, age: i64) -> bool {
        (self.min..=self.max).contains(&age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_is_inclusive() {
        let cfg = AgeCfg::default();
        assert!(cfg.contains(0));
        assert!(cfg.contains(120));
        assert!(!cfg.contains(-1));
        assert!(!cfg.contains(121));
    }
}
