//! Channel aggregate binding roughness and slope to an optional section.
//!
//! A [`Channel`] is an immutable value: Manning roughness `n`, bed slope
//! `So`, and zero-or-one borrowed [`Section`]. With a section attached it
//! answers hydraulics queries from a flow depth; without one it computes
//! discharge from explicitly supplied area and hydraulic radius. Every
//! operation is a pure function of the channel's fixed fields and the
//! call arguments, so shared read-only use across threads needs no
//! synchronization.

use std::fmt;

use crate::error::{require_non_negative, require_positive, HydraulicsError, Result};
use crate::manning::manning_q;
use crate::section::Section;

/// Input to [`Channel::compute_discharge`], one variant per call shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DischargeInput {
    /// Section mode: derive area and hydraulic radius from the channel's
    /// section at this flow depth. Requires a section to be attached.
    Depth(f64),

    /// Direct mode: area and hydraulic radius supplied by the caller;
    /// works with or without a section.
    Geometry { area: f64, hydraulic_radius: f64 },
}

/// Hydraulic state of a channel section at a given depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hydraulics {
    /// Flow area `A`.
    pub area: f64,
    /// Wetted perimeter `P`.
    pub wetted_perimeter: f64,
    /// Hydraulic radius `Rh = A / P`.
    pub hydraulic_radius: f64,
    /// Discharge `Q` via Manning's equation.
    pub discharge: f64,
}

/// Open channel with Manning roughness `n` and bed slope `So`.
///
/// The section, when present, is borrowed: the channel uses it read-only
/// and the same section value can back any number of channels.
///
/// # Example
///
/// ```
/// use open_channel::{Channel, Rectangular};
///
/// let rect = Rectangular::new(3.0)?;
/// let channel = Channel::with_section(0.013, 0.002, &rect)?;
/// let state = channel.hydraulics_at(1.2)?;
/// assert!((state.area - 3.6).abs() < 1e-12);
/// # Ok::<(), open_channel::HydraulicsError>(())
/// ```
#[derive(Clone, Copy)]
pub struct Channel<'a> {
    roughness: f64,
    slope: f64,
    section: Option<&'a dyn Section>,
}

impl fmt::Debug for Channel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("roughness", &self.roughness)
            .field("slope", &self.slope)
            .field("has_section", &self.has_section())
            .finish()
    }
}

impl<'a> Channel<'a> {
    /// Create a section-free channel; discharge is then computed only in
    /// direct mode ([`DischargeInput::Geometry`]).
    ///
    /// # Errors
    ///
    /// Fails unless `roughness > 0` and `slope >= 0`.
    pub fn new(roughness: f64, slope: f64) -> Result<Self> {
        require_positive("n", roughness)?;
        require_non_negative("So", slope)?;
        Ok(Self {
            roughness,
            slope,
            section: None,
        })
    }

    /// Create a channel backed by a cross-section.
    ///
    /// # Errors
    ///
    /// Fails unless `roughness > 0` and `slope >= 0`.
    pub fn with_section(roughness: f64, slope: f64, section: &'a dyn Section) -> Result<Self> {
        let mut channel = Self::new(roughness, slope)?;
        channel.section = Some(section);
        Ok(channel)
    }

    /// Manning roughness `n`.
    #[inline]
    pub fn roughness(&self) -> f64 {
        self.roughness
    }

    /// Bed slope `So`.
    #[inline]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Whether a section is attached.
    #[inline]
    pub fn has_section(&self) -> bool {
        self.section.is_some()
    }

    /// Compute discharge via Manning's equation.
    ///
    /// In section mode ([`DischargeInput::Depth`]) the area and hydraulic
    /// radius are derived from the attached section; in direct mode
    /// ([`DischargeInput::Geometry`]) they are taken as given. Both modes
    /// use the channel's stored `n` and `So` with the SI dimensional
    /// constant.
    ///
    /// # Errors
    ///
    /// - [`HydraulicsError::NoSection`] for `Depth` input on a
    ///   section-free channel.
    /// - [`HydraulicsError::NotPositive`] for `y <= 0`, a degenerate
    ///   wetted perimeter, or non-positive area / hydraulic radius.
    pub fn compute_discharge(&self, input: DischargeInput) -> Result<f64> {
        match input {
            DischargeInput::Depth(y) => {
                let section = self.section.ok_or(HydraulicsError::NoSection)?;
                require_positive("y", y)?;
                let area = section.area(y);
                let perimeter = section.wetted_perimeter(y);
                require_positive("wetted perimeter", perimeter)?;
                manning_q(area, area / perimeter, self.slope, self.roughness)
            }
            DischargeInput::Geometry {
                area,
                hydraulic_radius,
            } => {
                require_positive("A", area)?;
                require_positive("Rh", hydraulic_radius)?;
                manning_q(area, hydraulic_radius, self.slope, self.roughness)
            }
        }
    }

    /// Full hydraulic state at depth `y`: area, wetted perimeter,
    /// hydraulic radius, and discharge.
    ///
    /// # Errors
    ///
    /// Fails if no section is attached, `y <= 0`, or the wetted perimeter
    /// is degenerate.
    pub fn hydraulics_at(&self, y: f64) -> Result<Hydraulics> {
        let section = self.section.ok_or(HydraulicsError::NoSection)?;
        require_positive("y", y)?;

        let area = section.area(y);
        let wetted_perimeter = section.wetted_perimeter(y);
        require_positive("wetted perimeter", wetted_perimeter)?;

        let hydraulic_radius = area / wetted_perimeter;
        let discharge = manning_q(area, hydraulic_radius, self.slope, self.roughness)?;

        Ok(Hydraulics {
            area,
            wetted_perimeter,
            hydraulic_radius,
            discharge,
        })
    }
}
