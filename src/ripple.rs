//! Plane-wave cosine ripples.
//!
//! A ripple is `cos(2π (k̂·(p - c)) / λ - φ)` sampled at every pixel `p`,
//! with `p = (x, y) = (row, col)` in raw index space. Ridges run
//! perpendicular to `khat`. An offset of 0 gives a cosine through the
//! center, `π/2` a sine.
//!
//! `khat` is taken as given. A vector of length `L` shortens the period
//! along its direction to `λ / L`, which is occasionally what callers want.

use log::debug;
use ndarray::Array2;
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::centering::Center;
use crate::error::{ensure_positive, Result};
use crate::grid_err;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RippleParams {
    /// Period in pixels along `khat`. Expected `> 0`.
    pub spatial_wavelen: f64,
    /// Phase origin in raw index space, usually [`crate::centerpoint`].
    pub center: Center,
    /// Phase offset in radians, subtracted from the argument.
    pub offset: f64,
    /// Propagation direction, supposed to be a unit vector.
    pub khat: (f64, f64),
}

impl Default for RippleParams {
    fn default() -> Self {
        Self {
            spatial_wavelen: 1.0,
            center: Center::default(),
            offset: 0.0,
            khat: (1.0, 0.0),
        }
    }
}

impl RippleParams {
    pub fn new(spatial_wavelen: f64, center: Center) -> Self {
        Self {
            spatial_wavelen,
            center,
            ..Self::default()
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_khat(mut self, khat: (f64, f64)) -> Self {
        self.khat = khat;
        self
    }

    /// Direction from an angle in degrees, `khat = (sin, cos)`. At 0 degrees
    /// the phase varies with the column index only.
    pub fn with_angle_deg(self, angle_deg: f64) -> Self {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        self.with_khat((sin, cos))
    }

    /// Opt-in check for a usable wavelength, finite center and direction.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("Spatial wavelength", self.spatial_wavelen)?;
        if !self.center.is_finite() || !self.offset.is_finite() {
            return grid_err!(InvalidInput, "Ripple center and offset must be finite");
        }
        if !(self.khat.0.is_finite() && self.khat.1.is_finite()) {
            return grid_err!(InvalidInput, "Ripple direction must be finite");
        }
        Ok(())
    }

    /// Ripple value at a single pixel position.
    #[inline]
    pub fn value_at(&self, x: f64, y: f64) -> f64 {
        let argu = 2.0 * PI * (self.khat.0 * (x - self.center.x) + self.khat.1 * (y - self.center.y))
            / self.spatial_wavelen
            - self.offset;
        argu.cos()
    }
}

/// Cosine ripple of amplitude 1 over a `(rows, cols)` grid.
pub fn kwave2d(shape: (usize, usize), params: &RippleParams) -> Array2<f64> {
    debug!("kwave2d: shape={:?} params={:?}", shape, params);
    Array2::from_shape_fn(shape, |(row, col)| params.value_at(row as f64, col as f64))
}
