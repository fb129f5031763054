//! Error types for hydraulic computations.
//!
//! Every failure in this crate is an invalid-argument condition: a value
//! violating a documented constraint, or an unusable combination of
//! arguments. There are no I/O, timeout, or not-found categories because
//! none apply — each operation is a single closed-form evaluation that
//! either returns a valid number or rejects its inputs up front.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HydraulicsError>;

/// Errors produced by invalid inputs to hydraulic computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HydraulicsError {
    /// A quantity that must be strictly positive was zero, negative, or NaN.
    #[error("{name} must be > 0, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    /// A quantity that must be non-negative was negative or NaN.
    #[error("{name} must be >= 0, got {value}")]
    Negative { name: &'static str, value: f64 },

    /// A depth was supplied but the channel has no cross-section to
    /// evaluate it against.
    #[error(
        "channel has no section: either construct the channel with a \
         section and pass a flow depth, or pass area and hydraulic radius \
         directly"
    )]
    NoSection,
}

/// Reject `value` unless it is strictly positive.
///
/// Written as `value > 0.0` so NaN fails the check rather than slipping
/// through a `<=` comparison.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(HydraulicsError::NotPositive { name, value })
    }
}

/// Reject `value` unless it is zero or positive. NaN is rejected.
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(HydraulicsError::Negative { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_guard() {
        assert!(require_positive("n", 0.013).is_ok());
        assert_eq!(
            require_positive("n", 0.0),
            Err(HydraulicsError::NotPositive {
                name: "n",
                value: 0.0
            })
        );
        assert!(require_positive("n", -1.0).is_err());
        assert!(require_positive("n", f64::NAN).is_err());
    }

    #[test]
    fn test_non_negative_guard() {
        assert!(require_non_negative("S", 0.0).is_ok());
        assert!(require_non_negative("S", 0.002).is_ok());
        assert!(require_non_negative("S", -0.002).is_err());
        assert!(require_non_negative("S", f64::NAN).is_err());
    }

    #[test]
    fn test_error_messages_name_the_constraint() {
        let e = HydraulicsError::NotPositive {
            name: "Rh",
            value: -1.5,
        };
        assert_eq!(e.to_string(), "Rh must be > 0, got -1.5");

        let e = HydraulicsError::Negative {
            name: "S",
            value: -0.1,
        };
        assert_eq!(e.to_string(), "S must be >= 0, got -0.1");
    }
}
