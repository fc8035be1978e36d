use num_complex::Complex64;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::prelude::*;

use crate::centering::{centerpoint, centerpoint_rect, Center};
use crate::jinc::{jinc, JincParams};
use crate::pattern_generation::{make_disk, make_ellipse, make_gauss, EllipseParams};
use crate::phase_mask::{parabola, phase_arrays, phasor, tilt_array, Tilt};
use crate::ripple::{kwave2d, RippleParams};

fn to_center(ctr: Option<(f64, f64)>) -> Option<Center> {
    ctr.map(Center::from)
}

#[pyfunction]
#[pyo3(name = "centerpoint")]
fn py_centerpoint(s: usize) -> (f64, f64) {
    let c = centerpoint(s);
    (c.x, c.y)
}

#[pyfunction]
#[pyo3(name = "centerpoint_rect")]
fn py_centerpoint_rect(shape: (usize, usize)) -> (f64, f64) {
    let c = centerpoint_rect(shape);
    (c.x, c.y)
}

#[pyfunction]
#[pyo3(name = "makedisk", signature = (s, radius, ctr=None))]
fn py_makedisk<'py>(py: Python<'py>, s: usize, radius: f64, ctr: Option<(f64, f64)>) -> &'py PyArray2<f64> {
    make_disk(s, to_center(ctr), radius).into_pyarray(py)
}

#[pyfunction]
#[pyo3(name = "make_ellipse", signature = (s, ellpars, ctr=None))]
fn py_make_ellipse<'py>(
    py: Python<'py>,
    s: usize,
    ellpars: (f64, f64, f64),
    ctr: Option<(f64, f64)>,
) -> &'py PyArray2<f64> {
    let (semimajor, semiminor, theta) = ellpars;
    let params = EllipseParams::new(semimajor, semiminor, theta);
    make_ellipse(s, to_center(ctr), &params).into_pyarray(py)
}

#[pyfunction]
#[pyo3(name = "makegauss", signature = (s, sigma, ctr=None))]
fn py_makegauss<'py>(py: Python<'py>, s: usize, sigma: f64, ctr: Option<(f64, f64)>) -> &'py PyArray2<f64> {
    make_gauss(s, to_center(ctr), sigma).into_pyarray(py)
}

#[pyfunction]
#[pyo3(name = "tiltarray")]
fn py_tiltarray<'py>(py: Python<'py>, arrayshape: (usize, usize), tilt: (f64, f64)) -> &'py PyArray2<f64> {
    tilt_array(arrayshape, Tilt::from(tilt)).into_pyarray(py)
}

#[pyfunction]
#[pyo3(name = "phasearrays")]
fn py_phasearrays<'py>(py: Python<'py>, npup: usize, tiltlist: Vec<(f64, f64)>) -> Vec<&'py PyArray2<f64>> {
    let tilts: Vec<Tilt> = tiltlist.into_iter().map(Tilt::from).collect();
    phase_arrays(npup, &tilts)
        .into_iter()
        .map(|a| a.into_pyarray(py))
        .collect()
}

#[pyfunction]
#[pyo3(name = "kwave2d", signature = (shape, spatialwavelen, center, offset=0.0, khat=(1.0, 0.0)))]
fn py_kwave2d<'py>(
    py: Python<'py>,
    shape: (usize, usize),
    spatialwavelen: f64,
    center: (f64, f64),
    offset: f64,
    khat: (f64, f64),
) -> &'py PyArray2<f64> {
    let params = RippleParams::new(spatialwavelen, Center::from(center))
        .with_offset(offset)
        .with_khat(khat);
    kwave2d(shape, &params).into_pyarray(py)
}

#[pyfunction]
#[pyo3(name = "jinc", signature = (shape, c, scale=1.0))]
fn py_jinc<'py>(py: Python<'py>, shape: (usize, usize), c: (f64, f64), scale: f64) -> &'py PyArray2<f64> {
    let params = JincParams::new(Center::from(c)).with_scale(scale);
    jinc(shape, &params).into_pyarray(py)
}

#[pyfunction]
#[pyo3(name = "parabola2d")]
fn py_parabola2d<'py>(py: Python<'py>, shape: (usize, usize), center: (f64, f64)) -> &'py PyArray2<f64> {
    parabola(shape, Center::from(center)).into_pyarray(py)
}

#[pyfunction]
#[pyo3(name = "phasor")]
fn py_phasor<'py>(
    py: Python<'py>,
    amplitude: PyReadonlyArray2<'py, f64>,
    phase: PyReadonlyArray2<'py, f64>,
) -> PyResult<&'py PyArray2<Complex64>> {
    let field = phasor(&amplitude.as_array(), &phase.as_array())?;
    Ok(field.into_pyarray(py))
}

/// Python bindings
#[pymodule]
fn fourierlab_grids(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_centerpoint, m)?)?;
    m.add_function(wrap_pyfunction!(py_centerpoint_rect, m)?)?;
    m.add_function(wrap_pyfunction!(py_makedisk, m)?)?;
    m.add_function(wrap_pyfunction!(py_make_ellipse, m)?)?;
    m.add_function(wrap_pyfunction!(py_makegauss, m)?)?;
    m.add_function(wrap_pyfunction!(py_tiltarray, m)?)?;
    m.add_function(wrap_pyfunction!(py_phasearrays, m)?)?;
    m.add_function(wrap_pyfunction!(py_kwave2d, m)?)?;
    m.add_function(wrap_pyfunction!(py_jinc, m)?)?;
    m.add_function(wrap_pyfunction!(py_parabola2d, m)?)?;
    m.add_function(wrap_pyfunction!(py_phasor, m)?)?;
    Ok(())
}
