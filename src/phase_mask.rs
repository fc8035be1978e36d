use log::debug;
use ndarray::{Array2, ArrayView2, Zip};
use num_complex::Complex64;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::centering::Center;
use crate::error::Result;
use crate::grid_err;

/// Linear phase ramp coefficients: `a` per column, `b` per row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tilt {
    pub a: f64,
    pub b: f64,
}

impl Tilt {
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}

impl From<(f64, f64)> for Tilt {
    fn from((a, b): (f64, f64)) -> Self {
        Self { a, b }
    }
}

/// Tilted phase array `a*x + b*y` over a `(rows, cols)` grid.
///
/// Unlike the mask generators this works on raw 0-based indices: `x` is the
/// column index and `y` the row index, with no centering. The ramp is
/// therefore not zero-mean; subtract the piston outside if needed, it has no
/// effect on the physics of a phase.
pub fn tilt_array(shape: (usize, usize), tilt: Tilt) -> Array2<f64> {
    debug!("tilt_array: shape={:?} tilt={:?}", shape, tilt);
    Array2::from_shape_fn(shape, |(row, col)| tilt.a * col as f64 + tilt.b * row as f64)
}

/// One square `npup x npup` tilt ramp per entry of `tilts`, in input order.
#[cfg(not(feature = "parallel"))]
pub fn phase_arrays(npup: usize, tilts: &[Tilt]) -> Vec<Array2<f64>> {
    tilts
        .iter()
        .map(|&t| tilt_array((npup, npup), t))
        .collect()
}

/// One square `npup x npup` tilt ramp per entry of `tilts`, in input order.
#[cfg(feature = "parallel")]
pub fn phase_arrays(npup: usize, tilts: &[Tilt]) -> Vec<Array2<f64>> {
    tilts
        .par_iter()
        .map(|&t| tilt_array((npup, npup), t))
        .collect()
}

/// Radial parabola `(x-cx)^2 + (y-cy)^2` at `(x, y) = (row, col)`.
pub fn parabola(shape: (usize, usize), center: Center) -> Array2<f64> {
    debug!("parabola: shape={:?} center={:?}", shape, center);
    Array2::from_shape_fn(shape, |(row, col)| {
        let dx = row as f64 - center.x;
        let dy = col as f64 - center.y;
        dx * dx + dy * dy
    })
}

/// Complex field `amplitude * exp(i * phase)`.
pub fn phasor(amplitude: &ArrayView2<f64>, phase: &ArrayView2<f64>) -> Result<Array2<Complex64>> {
    if amplitude.dim() != phase.dim() {
        return grid_err!(
            ShapeMismatch,
            "amplitude {:?} and phase {:?} must have the same shape",
            amplitude.dim(),
            phase.dim()
        );
    }

    let mut field = Array2::<Complex64>::zeros(amplitude.dim());
    Zip::from(&mut field)
        .and(amplitude)
        .and(phase)
        .for_each(|out, &amp, &phi| {
            *out = Complex64::from_polar(amp, phi);
        });
    Ok(field)
}
