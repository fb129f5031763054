//! # open-channel
//!
//! Open-channel flow hydraulics using Manning's equation.
//!
//! This crate provides the building blocks for steady uniform flow
//! calculations in canals and pipes:
//! - The unified Manning solver ([`manning`]) — solve for discharge,
//!   slope, or roughness from the other quantities
//! - Cross-section geometry ([`Section`]) — rectangular, trapezoidal,
//!   triangular, and circular shapes, open to downstream extension
//! - The [`Channel`] aggregate — roughness and slope bound to an optional
//!   section, answering discharge and full-hydraulics queries
//!
//! All operations are pure, immutable-after-construction, and reject
//! invalid inputs with [`HydraulicsError`] rather than producing
//! non-physical numbers.
//!
//! # Example
//!
//! ```
//! use open_channel::{manning_q, Channel, DischargeInput, Rectangular};
//!
//! // Pure solver: A = 8 m², Rh = 1.1 m, S = 0.002, n = 0.013
//! let q = manning_q(8.0, 1.1, 0.002, 0.013)?;
//! assert!((q - 29.33).abs() < 0.01);
//!
//! // Channel with a rectangular section, queried by depth
//! let rect = Rectangular::new(3.0)?;
//! let channel = Channel::with_section(0.013, 0.002, &rect)?;
//! let state = channel.hydraulics_at(1.2)?;
//! assert!((state.hydraulic_radius - 3.6 / 5.4).abs() < 1e-12);
//!
//! // Same channel, direct-parameter mode
//! let q2 = channel.compute_discharge(DischargeInput::Geometry {
//!     area: 8.0,
//!     hydraulic_radius: 1.1,
//! })?;
//! assert!((q2 - q).abs() < 1e-12);
//! # Ok::<(), open_channel::HydraulicsError>(())
//! ```

pub mod channel;
pub mod error;
pub mod manning;
pub mod section;

// Re-export main types for convenience
pub use channel::{Channel, DischargeInput, Hydraulics};
pub use error::{HydraulicsError, Result};
pub use manning::{manning, manning_n, manning_q, SolveFor, K_IMPERIAL, K_SI};
pub use section::{Circular, Rectangular, Section, Trapezoidal, Triangular};
