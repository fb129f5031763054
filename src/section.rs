//! Channel cross-section geometry.
//!
//! A [`Section`] answers three pure geometric queries at a given flow
//! depth: flow area, wetted perimeter, and free-surface top width. Each
//! shape is a value type holding only its fixed geometric parameters;
//! depth is always a call argument, never stored.
//!
//! Sections do not guard against non-positive depth — the degenerate
//! values they return at `y <= 0` (e.g. a rectangular wetted perimeter of
//! `b` at `y = 0`) are physically meaningless, and callers performing
//! hydraulics reject `y <= 0` before querying. [`Channel`] does exactly
//! that.
//!
//! [`Channel`]: crate::Channel

use crate::error::{require_non_negative, require_positive, Result};

/// Capability interface for a channel cross-section.
///
/// Implementations must be pure functions of their fixed parameters and
/// the depth argument, with no interior state. Additional shapes can be
/// supplied by downstream crates; nothing in this crate assumes a closed
/// set.
pub trait Section {
    /// Flow area at depth `y`.
    fn area(&self, y: f64) -> f64;

    /// Length of channel boundary in contact with the water at depth `y`.
    fn wetted_perimeter(&self, y: f64) -> f64;

    /// Free-surface width at depth `y`.
    fn top_width(&self, y: f64) -> f64;
}

// =============================================================================
// Rectangular
// =============================================================================

/// Rectangular section with bottom width `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangular {
    b: f64,
}

impl Rectangular {
    /// Create a rectangular section.
    ///
    /// # Errors
    ///
    /// Fails unless `b > 0`.
    pub fn new(b: f64) -> Result<Self> {
        require_positive("b", b)?;
        Ok(Self { b })
    }

    /// Bottom width.
    #[inline]
    pub fn bottom_width(&self) -> f64 {
        self.b
    }
}

impl Section for Rectangular {
    #[inline]
    fn area(&self, y: f64) -> f64 {
        self.b * y
    }

    /// Returns `b` at `y = 0`, a degenerate value; see the module docs.
    #[inline]
    fn wetted_perimeter(&self, y: f64) -> f64 {
        self.b + 2.0 * y
    }

    #[inline]
    fn top_width(&self, _y: f64) -> f64 {
        self.b
    }
}

// =============================================================================
// Trapezoidal
// =============================================================================

/// Trapezoidal section with bottom width `b` and side slope `z`
/// (z horizontal per 1 vertical).
///
/// `z = 0` degenerates to a rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trapezoidal {
    b: f64,
    z: f64,
}

impl Trapezoidal {
    /// Create a trapezoidal section.
    ///
    /// # Errors
    ///
    /// Fails unless `b > 0` and `z >= 0`.
    pub fn new(b: f64, z: f64) -> Result<Self> {
        require_positive("b", b)?;
        require_non_negative("z", z)?;
        Ok(Self { b, z })
    }

    /// Bottom width.
    #[inline]
    pub fn bottom_width(&self) -> f64 {
        self.b
    }

    /// Side slope (horizontal run per unit rise).
    #[inline]
    pub fn side_slope(&self) -> f64 {
        self.z
    }
}

impl Section for Trapezoidal {
    #[inline]
    fn area(&self, y: f64) -> f64 {
        (self.b + self.z * y) * y
    }

    #[inline]
    fn wetted_perimeter(&self, y: f64) -> f64 {
        self.b + 2.0 * y * (1.0 + self.z * self.z).sqrt()
    }

    #[inline]
    fn top_width(&self, y: f64) -> f64 {
        self.b + 2.0 * self.z * y
    }
}

// =============================================================================
// Triangular
// =============================================================================

/// Symmetric triangular (V-shaped) section with side slope `z`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangular {
    z: f64,
}

impl Triangular {
    /// Create a triangular section.
    ///
    /// # Errors
    ///
    /// Fails unless `z > 0`.
    pub fn new(z: f64) -> Result<Self> {
        require_positive("z", z)?;
        Ok(Self { z })
    }

    /// Side slope (horizontal run per unit rise).
    #[inline]
    pub fn side_slope(&self) -> f64 {
        self.z
    }
}

impl Section for Triangular {
    #[inline]
    fn area(&self, y: f64) -> f64 {
        self.z * y * y
    }

    #[inline]
    fn wetted_perimeter(&self, y: f64) -> f64 {
        2.0 * y * (1.0 + self.z * self.z).sqrt()
    }

    #[inline]
    fn top_width(&self, y: f64) -> f64 {
        2.0 * self.z * y
    }
}

// =============================================================================
// Circular
// =============================================================================

/// Circular section (partially full pipe) with inner diameter `d`.
///
/// Geometry follows the wetted angle `θ = 2·acos(1 − 2y/d)`:
///
/// ```text
/// A = d²/8 · (θ − sin θ)
/// P = d · θ / 2
/// T = d · sin(θ/2)
/// ```
///
/// Depths above the crown are clamped to the full-pipe limit `y = d`
/// (`θ = 2π`, zero top width), the well-defined degenerate case.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circular {
    d: f64,
}

impl Circular {
    /// Create a circular section.
    ///
    /// # Errors
    ///
    /// Fails unless `d > 0`.
    pub fn new(d: f64) -> Result<Self> {
        require_positive("D", d)?;
        Ok(Self { d })
    }

    /// Inner diameter.
    #[inline]
    pub fn diameter(&self) -> f64 {
        self.d
    }

    /// Wetted angle at depth `y`, clamped to `[0, 2π]`.
    #[inline]
    fn wetted_angle(&self, y: f64) -> f64 {
        let ratio = (1.0 - 2.0 * y / self.d).clamp(-1.0, 1.0);
        2.0 * ratio.acos()
    }
}

impl Section for Circular {
    #[inline]
    fn area(&self, y: f64) -> f64 {
        let theta = self.wetted_angle(y);
        self.d * self.d / 8.0 * (theta - theta.sin())
    }

    #[inline]
    fn wetted_perimeter(&self, y: f64) -> f64 {
        self.d * self.wetted_angle(y) / 2.0
    }

    #[inline]
    fn top_width(&self, y: f64) -> f64 {
        self.d * (self.wetted_angle(y) / 2.0).sin()
    }
}
