use log::{debug, trace};
use ndarray::Array2;
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::centering::Center;
use crate::error::{ensure_positive, Result};
use crate::grid_err;

/// Parameters of the Jinc generator. The center has no default.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JincParams {
    /// Origin in raw index space, `x` on rows and `y` on columns.
    pub center: Center,
    /// Radial scale, `> 0`. The first zero sits at `3.8317 * scale / π`
    /// pixels, so `scale = 0.1` puts it near 0.122 pixels and `scale = 10`
    /// near 12.2 pixels.
    pub scale: f64,
}

impl JincParams {
    pub const fn new(center: Center) -> Self {
        Self { center, scale: 1.0 }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("Jinc scale", self.scale)?;
        if !self.center.is_finite() {
            return grid_err!(InvalidInput, "Jinc center must be finite");
        }
        Ok(())
    }

    /// Scaled radial argument `π * |p - c| / scale`.
    #[inline]
    fn rho(&self, x: f64, y: f64) -> f64 {
        let dx = (x - self.center.x) / self.scale;
        let dy = (y - self.center.y) / self.scale;
        PI * (dx * dx + dy * dy).sqrt()
    }
}

/// `2 J1(rho) / rho` without any patching; NaN at `rho == 0`.
#[inline]
fn raw_jinc(rho: f64) -> f64 {
    2.0 * libm::j1(rho) / rho
}

/// Jinc at `(x, y) = (row, col)`, with the removable singularity filled in.
pub fn jinc_at(x: f64, y: f64, params: &JincParams) -> f64 {
    let j = raw_jinc(params.rho(x, y));
    if j.is_nan() {
        1.0
    } else {
        j
    }
}

/// `2 J1(ρ)/ρ` over a `(rows, cols)` grid in raw pixel coordinates.
///
/// This is the mathematical function, not an optical PSF: `ρ` is
/// `π * sqrt(((x-cx)/scale)^2 + ((y-cy)/scale)^2)` with `x` the row and
/// `y` the column index. `J1` is finite for every finite argument, so the
/// only NaN is the `0/0` where `ρ` is exactly zero; it is set to the limit
/// 1.0. Nothing else is touched.
pub fn jinc(shape: (usize, usize), params: &JincParams) -> Array2<f64> {
    debug!("jinc: shape={:?} params={:?}", shape, params);

    let mut out = Array2::from_shape_fn(shape, |(row, col)| {
        raw_jinc(params.rho(row as f64, col as f64))
    });

    let mut patched = 0usize;
    out.mapv_inplace(|v| {
        if v.is_nan() {
            patched += 1;
            1.0
        } else {
            v
        }
    });
    if patched > 0 {
        trace!("jinc: replaced {} singular sample(s) with 1.0", patched);
    }

    out
}
