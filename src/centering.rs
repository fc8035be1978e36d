//! Center conventions shared by every generator.
//!
//! Two flavours of center are in use:
//!
//! * the *index* center returned by [`centerpoint`], measured in raw pixel
//!   indices, consumed by the ripple, Jinc and parabola generators. These
//!   evaluate at `(x, y) = (row, col)`, so `x` pairs with axis 0;
//! * the *mask* center returned by [`mask_center`], half a pixel larger,
//!   consumed by the ellipse, disk and Gaussian generators whose axes are
//!   built with [`offset_axis`]. Masks are mesh grids: `x` runs along
//!   columns there.
//!
//! Both put the origin on the middle pixel of an odd grid and on the corner
//! shared by the four central pixels of an even grid.

use ndarray::Array1;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in pixel space. Which axis `x` names depends on the generator,
/// see the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Center {
    pub x: f64,
    pub y: f64,
}

impl Center {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Center {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Index-space center of a square grid of side `s`.
pub fn centerpoint(s: usize) -> Center {
    let c = 0.5 * s as f64 - 0.5;
    Center::new(c, c)
}

/// Index-space center of a `(rows, cols)` grid, computed per axis: `x` for
/// rows, `y` for columns.
pub fn centerpoint_rect(shape: (usize, usize)) -> Center {
    let (rows, cols) = shape;
    Center::new(0.5 * rows as f64 - 0.5, 0.5 * cols as f64 - 0.5)
}

/// Default center for mask-style generators, `(s/2, s/2)`.
pub fn mask_center(s: usize) -> Center {
    let c = s as f64 / 2.0;
    Center::new(c, c)
}

/// Coordinates `i - c + 0.5` for `i` in `0..len`.
///
/// Pixel 0 maps to `-c + 0.5` and the last pixel to `len - c - 0.5`.
pub fn offset_axis(len: usize, c: f64) -> Array1<f64> {
    Array1::from_shape_fn(len, |i| i as f64 - c + 0.5)
}
