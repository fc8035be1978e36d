//! Stateless 2D grid generators for optical wavefront simulation.
//!
//! Every function builds a fresh [`Grid`] from a grid shape, a center and a
//! small parameter struct: binary masks (disk, ellipse), smooth profiles
//! (Gaussian, Jinc), linear phase ramps (tilt), parabolas and plane-wave
//! cosine ripples. Invalid geometry is not rejected; it propagates through
//! IEEE arithmetic as infinities and NaN. [`PatternGenerator`] and the
//! `validate` methods are the opt-in strict path.

pub mod centering;
pub mod error;
mod jinc;
mod pattern_generation;
mod phase_mask;
mod ripple;

#[cfg(feature = "python")]
mod python;

pub use centering::*;
pub use error::{GridError, Result};
pub use jinc::*;
pub use pattern_generation::*;
pub use phase_mask::*;
pub use ripple::*;

/// A real-valued sample grid, indexed `[row, col]`.
pub type Grid = ndarray::Array2<f64>;
