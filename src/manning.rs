//! Unified Manning equation solver.
//!
//! Manning's equation relates discharge to channel geometry, slope, and
//! roughness for steady uniform open-channel flow:
//!
//! ```text
//! Q = (k/n) · A · Rh^(2/3) · S^(1/2)
//! ```
//!
//! where:
//! - `Q` - discharge (volume/time)
//! - `A` - cross-sectional flow area
//! - `Rh` - hydraulic radius (area / wetted perimeter)
//! - `S` - channel bed slope (dimensionless)
//! - `n` - Manning roughness coefficient
//! - `k` - dimensional constant selecting the unit system
//!
//! The equation is closed-form in any one of `Q`, `S`, or `n` given the
//! others, so [`manning`] takes a [`SolveFor`] selector whose payload
//! carries exactly the knowns of that mode. Missing inputs and
//! unrecognized modes are thereby unrepresentable; only the numeric
//! constraints remain to check at runtime.
//!
//! # Example
//!
//! ```
//! use open_channel::{manning, manning_q, SolveFor, K_SI};
//!
//! // Discharge of a channel with A = 8 m², Rh = 1.1 m, S = 0.002, n = 0.013
//! let q = manning_q(8.0, 1.1, 0.002, 0.013).unwrap();
//!
//! // Back-solve the slope from that discharge
//! let s = manning(
//!     SolveFor::Slope {
//!         discharge: q,
//!         area: 8.0,
//!         hydraulic_radius: 1.1,
//!         roughness: 0.013,
//!     },
//!     K_SI,
//! )
//! .unwrap();
//! assert!((s - 0.002).abs() / 0.002 < 1e-12);
//! ```

use crate::error::{require_non_negative, require_positive, Result};

/// Dimensional constant for SI units (m, m³/s).
pub const K_SI: f64 = 1.0;

/// Dimensional constant for imperial-derived units (ft, ft³/s).
pub const K_IMPERIAL: f64 = 1.49;

/// The unknown to solve for, carrying the knowns of that mode.
///
/// Each variant holds exactly the quantities its formula needs; the
/// remaining two of `{Q, S, n}` never appear, so a call site cannot pass
/// an inconsistent combination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SolveFor {
    /// Solve `Q = k/n · A · Rh^(2/3) · √S`.
    ///
    /// Requires `A > 0`, `Rh > 0`, `n > 0`, `S >= 0`. A flat channel
    /// (`S = 0`) is valid and yields `Q = 0`.
    Discharge {
        area: f64,
        hydraulic_radius: f64,
        slope: f64,
        roughness: f64,
    },

    /// Solve `S = (Q·n / (k·A·Rh^(2/3)))²`.
    ///
    /// Requires `Q > 0`, `A > 0`, `Rh > 0`, `n > 0`. Zero discharge is
    /// rejected here rather than left to divide by zero downstream.
    Slope {
        discharge: f64,
        area: f64,
        hydraulic_radius: f64,
        roughness: f64,
    },

    /// Solve `n = k·A·Rh^(2/3)·√S / Q`.
    ///
    /// Requires `Q > 0`, `A > 0`, `Rh > 0`, `S >= 0`.
    Roughness {
        discharge: f64,
        area: f64,
        hydraulic_radius: f64,
        slope: f64,
    },
}

/// Evaluate Manning's equation for the unknown selected by `solve_for`.
///
/// `k` is the dimensional constant ([`K_SI`] or [`K_IMPERIAL`], or any
/// strictly positive value) and is validated before the per-mode
/// constraints.
///
/// # Errors
///
/// Returns [`HydraulicsError::NotPositive`] or
/// [`HydraulicsError::Negative`] naming the first violated constraint.
///
/// [`HydraulicsError::NotPositive`]: crate::HydraulicsError::NotPositive
/// [`HydraulicsError::Negative`]: crate::HydraulicsError::Negative
pub fn manning(solve_for: SolveFor, k: f64) -> Result<f64> {
    require_positive("k", k)?;

    match solve_for {
        SolveFor::Discharge {
            area,
            hydraulic_radius,
            slope,
            roughness,
        } => {
            require_positive("A", area)?;
            require_positive("Rh", hydraulic_radius)?;
            require_positive("n", roughness)?;
            require_non_negative("S", slope)?;
            Ok(k / roughness * area * hydraulic_radius.powf(2.0 / 3.0) * slope.sqrt())
        }

        SolveFor::Slope {
            discharge,
            area,
            hydraulic_radius,
            roughness,
        } => {
            require_positive("Q", discharge)?;
            require_positive("A", area)?;
            require_positive("Rh", hydraulic_radius)?;
            require_positive("n", roughness)?;
            let conveyance = k * area * hydraulic_radius.powf(2.0 / 3.0);
            Ok((discharge * roughness / conveyance).powi(2))
        }

        SolveFor::Roughness {
            discharge,
            area,
            hydraulic_radius,
            slope,
        } => {
            require_positive("Q", discharge)?;
            require_positive("A", area)?;
            require_positive("Rh", hydraulic_radius)?;
            require_non_negative("S", slope)?;
            Ok(k * area * hydraulic_radius.powf(2.0 / 3.0) * slope.sqrt() / discharge)
        }
    }
}

/// Discharge from geometry, slope, and roughness, in SI units (`k` = [`K_SI`]).
#[inline]
pub fn manning_q(area: f64, hydraulic_radius: f64, slope: f64, roughness: f64) -> Result<f64> {
    manning(
        SolveFor::Discharge {
            area,
            hydraulic_radius,
            slope,
            roughness,
        },
        K_SI,
    )
}

/// Roughness from discharge, geometry, and slope, in SI units (`k` = [`K_SI`]).
#[inline]
pub fn manning_n(discharge: f64, area: f64, hydraulic_radius: f64, slope: f64) -> Result<f64> {
    manning(
        SolveFor::Roughness {
            discharge,
            area,
            hydraulic_radius,
            slope,
        },
        K_SI,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HydraulicsError;

    #[test]
    fn test_discharge_matches_literal_formula() {
        let q = manning_q(8.0, 1.1, 0.002, 0.013).unwrap();
        let expected = 1.0 / 0.013 * 8.0 * 1.1_f64.powf(2.0 / 3.0) * 0.002_f64.sqrt();
        assert!((q - expected).abs() / expected < 1e-15);
        assert!((q - 29.33).abs() < 0.01);
    }

    #[test]
    fn test_flat_channel_carries_no_flow() {
        let q = manning_q(8.0, 1.1, 0.0, 0.013).unwrap();
        assert_eq!(q, 0.0);
    }

    #[test]
    fn test_imperial_constant_scales_discharge() {
        let si = manning_q(8.0, 1.1, 0.002, 0.013).unwrap();
        let imperial = manning(
            SolveFor::Discharge {
                area: 8.0,
                hydraulic_radius: 1.1,
                slope: 0.002,
                roughness: 0.013,
            },
            K_IMPERIAL,
        )
        .unwrap();
        assert!((imperial / si - 1.49).abs() < 1e-12);
    }

    #[test]
    fn test_slope_mode_rejects_zero_discharge() {
        let err = manning(
            SolveFor::Slope {
                discharge: 0.0,
                area: 8.0,
                hydraulic_radius: 1.1,
                roughness: 0.013,
            },
            K_SI,
        )
        .unwrap_err();
        assert_eq!(
            err,
            HydraulicsError::NotPositive {
                name: "Q",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_roughness_mode_rejects_zero_discharge() {
        let err = manning_n(0.0, 8.0, 1.1, 0.002).unwrap_err();
        assert_eq!(
            err,
            HydraulicsError::NotPositive {
                name: "Q",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_non_positive_k_rejected_in_every_mode() {
        let modes = [
            SolveFor::Discharge {
                area: 8.0,
                hydraulic_radius: 1.1,
                slope: 0.002,
                roughness: 0.013,
            },
            SolveFor::Slope {
                discharge: 1.5,
                area: 8.0,
                hydraulic_radius: 1.1,
                roughness: 0.013,
            },
            SolveFor::Roughness {
                discharge: 1.5,
                area: 8.0,
                hydraulic_radius: 1.1,
                slope: 0.002,
            },
        ];
        for mode in modes {
            assert_eq!(
                manning(mode, 0.0),
                Err(HydraulicsError::NotPositive {
                    name: "k",
                    value: 0.0
                })
            );
            assert!(manning(mode, -1.0).is_err());
        }
    }

    #[test]
    fn test_nan_inputs_rejected() {
        assert!(manning_q(f64::NAN, 1.1, 0.002, 0.013).is_err());
        assert!(manning_q(8.0, 1.1, f64::NAN, 0.013).is_err());
    }
}
