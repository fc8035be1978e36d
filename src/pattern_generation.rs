use log::debug;
use ndarray::Array2;
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::centering::{mask_center, offset_axis, Center};
use crate::error::{ensure_positive, Result};
use crate::grid_err;

/// Ellipse geometry for [`make_ellipse`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EllipseParams {
    /// Semi-axis along columns before rotation, in pixels. Expected `> 0`.
    pub semimajor: f64,
    /// Semi-axis along rows before rotation, in pixels. Expected `> 0`.
    pub semiminor: f64,
    /// Rotation in degrees, see [`make_ellipse`] for how it is applied.
    pub theta_deg: f64,
}

impl EllipseParams {
    pub const fn new(semimajor: f64, semiminor: f64, theta_deg: f64) -> Self {
        Self {
            semimajor,
            semiminor,
            theta_deg,
        }
    }

    pub const fn circle(radius: f64) -> Self {
        Self::new(radius, radius, 0.0)
    }
}

/// Binary elliptical mask on an `s x s` grid.
///
/// Pixel `(row, col)` sits at `x = col - ctr.x + 0.5`, `y = row - ctr.y + 0.5`;
/// `ctr` defaults to `(s/2, s/2)` so the ellipse is centered on the middle
/// pixel of odd grids and on the central pixel corner of even grids.
///
/// The angle handed to `cos`/`sin` is `theta_deg / deg` with
/// `deg = -PI/180`. This is not a plain degrees-to-radians conversion:
/// its sign is inverted and the factor is divided rather than multiplied.
/// Existing masks depend on these numbers, so the quirk is kept as is.
///
/// A pixel is set to 1.0 when
/// `((x cos - y sin)/a)^2 + ((y cos + x sin)/b)^2 < 1`, boundary excluded.
/// Zero axes are not guarded and simply fail the comparison.
pub fn make_ellipse(s: usize, ctr: Option<Center>, params: &EllipseParams) -> Array2<f64> {
    let ctr = ctr.unwrap_or_else(|| mask_center(s));
    debug!(
        "make_ellipse: s={} ctr=({}, {}) params={:?}",
        s, ctr.x, ctr.y, params
    );

    let xx = offset_axis(s, ctr.x);
    let yy = offset_axis(s, ctr.y);

    let deg = -PI / 180.0;
    let angle = params.theta_deg / deg;
    let (sin, cos) = angle.sin_cos();
    let a2 = params.semimajor * params.semimajor;
    let b2 = params.semiminor * params.semiminor;

    Array2::from_shape_fn((s, s), |(row, col)| {
        let x = xx[col];
        let y = yy[row];
        let u = x * cos - y * sin;
        let v = y * cos + x * sin;
        let esq = u * u / a2 + v * v / b2;
        if esq < 1.0 {
            1.0
        } else {
            0.0
        }
    })
}

/// Binary disk mask; exactly [`make_ellipse`] with equal axes and no rotation.
pub fn make_disk(s: usize, ctr: Option<Center>, radius: f64) -> Array2<f64> {
    make_ellipse(s, ctr, &EllipseParams::circle(radius))
}

/// Isotropic Gaussian `exp(-0.5 x^2/sigma - 0.5 y^2/sigma)` on an `s x s` grid.
///
/// Uses the same coordinates as [`make_ellipse`]. The peak is 1.0 where the
/// coordinates vanish. `sigma` plays the part of a variance and is not
/// guarded against zero.
pub fn make_gauss(s: usize, ctr: Option<Center>, sigma: f64) -> Array2<f64> {
    let ctr = ctr.unwrap_or_else(|| mask_center(s));
    debug!("make_gauss: s={} ctr=({}, {}) sigma={}", s, ctr.x, ctr.y, sigma);

    let xx = offset_axis(s, ctr.x);
    let yy = offset_axis(s, ctr.y);

    Array2::from_shape_fn((s, s), |(row, col)| {
        let x = xx[col];
        let y = yy[row];
        (-0.5 * x * x / sigma - 0.5 * y * y / sigma).exp()
    })
}

/// Validating front end for the mask and profile generators.
///
/// The free functions accept anything and let IEEE arithmetic decide; this
/// type rejects empty grids and non-positive geometry up front and otherwise
/// produces identical arrays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternGenerator {
    size: usize,
    center: Option<Center>,
}

impl PatternGenerator {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return grid_err!(InvalidInput, "Grid size must be non-zero");
        }
        Ok(Self { size, center: None })
    }

    /// Overrides the default `(s/2, s/2)` mask center.
    pub fn with_center(mut self, center: Center) -> Result<Self> {
        if !center.is_finite() {
            return grid_err!(
                InvalidInput,
                "Center must be finite, got ({}, {})",
                center.x,
                center.y
            );
        }
        self.center = Some(center);
        Ok(self)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn center(&self) -> Center {
        self.center.unwrap_or_else(|| mask_center(self.size))
    }

    pub fn ellipse(&self, params: &EllipseParams) -> Result<Array2<f64>> {
        ensure_positive("Semimajor axis", params.semimajor)?;
        ensure_positive("Semiminor axis", params.semiminor)?;
        if !params.theta_deg.is_finite() {
            return grid_err!(InvalidInput, "Rotation angle must be finite");
        }
        Ok(make_ellipse(self.size, self.center, params))
    }

    pub fn disk(&self, radius: f64) -> Result<Array2<f64>> {
        ensure_positive("Radius", radius)?;
        Ok(make_disk(self.size, self.center, radius))
    }

    pub fn gauss(&self, sigma: f64) -> Result<Array2<f64>> {
        ensure_positive("Sigma", sigma)?;
        Ok(make_gauss(self.size, self.center, sigma))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;
    use approx::assert_relative_eq;

    fn ones(a: &Array2<f64>) -> usize {
        a.iter().filter(|&&v| v == 1.0).count()
    }

    #[test]
    fn disk_matches_euclidean_distance() {
        let disk = make_disk(21, None, 5.0);
        for ((row, col), &v) in disk.indexed_iter() {
            let dx = col as f64 - 10.0;
            let dy = row as f64 - 10.0;
            let inside = dx * dx + dy * dy < 25.0;
            assert_eq!(v, if inside { 1.0 } else { 0.0 }, "pixel ({}, {})", row, col);
        }
        assert_eq!(ones(&disk), 69);
    }

    #[test]
    fn masks_are_binary() {
        let mask = make_ellipse(32, None, &EllipseParams::new(9.0, 4.0, 30.0));
        assert!(mask.iter().all(|&v| v == 0.0 || v == 1.0));
        assert!(ones(&mask) > 0);
    }

    #[test]
    fn even_disk_is_symmetric_about_pixel_corner() {
        let disk = make_disk(20, None, 4.0);
        for row in 0..20 {
            for col in 0..20 {
                assert_eq!(disk[[row, col]], disk[[19 - row, col]]);
                assert_eq!(disk[[row, col]], disk[[row, 19 - col]]);
            }
        }
        assert_eq!(disk[[9, 9]], 1.0);
        assert_eq!(disk[[10, 10]], 1.0);
    }

    #[test]
    fn circular_ellipse_is_bit_identical_to_disk() {
        let ellipse = make_ellipse(21, None, &EllipseParams::new(5.0, 5.0, 0.0));
        let disk = make_disk(21, None, 5.0);
        assert_eq!(ellipse, disk);
    }

    #[test]
    fn unrotated_semimajor_runs_along_columns() {
        let mask = make_ellipse(41, None, &EllipseParams::new(12.0, 4.0, 0.0));
        // center pixel is 20
        assert_eq!(mask[[20, 31]], 1.0);
        assert_eq!(mask[[20, 33]], 0.0);
        assert_eq!(mask[[23, 20]], 1.0);
        assert_eq!(mask[[25, 20]], 0.0);
    }

    #[test]
    fn rotation_uses_divided_negative_degree_factor() {
        let params = EllipseParams::new(10.0, 3.0, 30.0);
        let mask = make_ellipse(31, None, &params);
        let angle = 30.0 / (-PI / 180.0);
        let (sin, cos) = angle.sin_cos();
        for ((row, col), &v) in mask.indexed_iter() {
            let x = col as f64 - 15.0;
            let y = row as f64 - 15.0;
            let u = x * cos - y * sin;
            let w = y * cos + x * sin;
            let expected = if u * u / 100.0 + w * w / 9.0 < 1.0 { 1.0 } else { 0.0 };
            assert_eq!(v, expected);
        }
    }

    #[test]
    fn explicit_center_moves_mask() {
        let mask = make_disk(21, Some(Center::new(5.5, 15.5)), 2.0);
        assert_eq!(mask[[15, 5]], 1.0);
        assert_eq!(mask[[10, 10]], 0.0);
    }

    #[test]
    fn zero_axis_yields_empty_mask() {
        let mask = make_ellipse(21, None, &EllipseParams::new(0.0, 5.0, 0.0));
        assert_eq!(ones(&mask), 0);
    }

    #[test]
    fn gauss_peak_is_one_on_odd_grid() {
        for sigma in [0.5, 2.0, 17.0] {
            let g = make_gauss(21, None, sigma);
            assert_eq!(g[[10, 10]], 1.0);
            let max = g.iter().cloned().fold(f64::MIN, f64::max);
            assert_eq!(max, 1.0);
        }
    }

    #[test]
    fn gauss_decreases_with_radius() {
        let g = make_gauss(21, None, 50.0);
        let mut samples: Vec<(f64, f64)> = g
            .indexed_iter()
            .map(|((row, col), &v)| {
                let dx = col as f64 - 10.0;
                let dy = row as f64 - 10.0;
                (dx * dx + dy * dy, v)
            })
            .collect();
        samples.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
        for pair in samples.windows(2) {
            if pair[1].0 > pair[0].0 {
                assert!(pair[1].1 < pair[0].1);
            }
        }
    }

    #[test]
    fn gauss_values_follow_formula() {
        let g = make_gauss(20, None, 3.0);
        // pixel 10 sits at +0.5, pixel 12 at +2.5
        assert_relative_eq!(g[[10, 12]], (-0.5 * 0.25 / 3.0 - 0.5 * 6.25 / 3.0f64).exp());
    }

    #[test]
    fn zero_sigma_propagates_ieee_values() {
        let g = make_gauss(21, None, 0.0);
        assert!(g[[10, 10]].is_nan());
        assert_eq!(g[[0, 0]], 0.0);
    }

    #[test]
    fn generator_rejects_bad_input() {
        assert!(matches!(PatternGenerator::new(0), Err(GridError::InvalidInput(_))));
        let gen = PatternGenerator::new(21).unwrap();
        assert!(gen.disk(0.0).is_err());
        assert!(gen.gauss(-1.0).is_err());
        assert!(gen.ellipse(&EllipseParams::new(3.0, f64::NAN, 0.0)).is_err());
        assert!(gen.ellipse(&EllipseParams::new(3.0, 2.0, f64::INFINITY)).is_err());
        assert!(gen.with_center(Center::new(f64::NAN, 1.0)).is_err());
    }

    #[test]
    fn generator_matches_free_functions() {
        let gen = PatternGenerator::new(21).unwrap();
        assert_eq!(gen.center(), Center::new(10.5, 10.5));
        assert_eq!(gen.disk(5.0).unwrap(), make_disk(21, None, 5.0));
        assert_eq!(gen.gauss(4.0).unwrap(), make_gauss(21, None, 4.0));

        let shifted = gen.with_center(Center::new(8.0, 12.0)).unwrap();
        let params = EllipseParams::new(6.0, 2.0, 15.0);
        assert_eq!(
            shifted.ellipse(&params).unwrap(),
            make_ellipse(21, Some(Center::new(8.0, 12.0)), &params)
        );
    }
}
