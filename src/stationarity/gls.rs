//! GLS detrending of Elliott, Rothenberg & Stock (1996).
//!
//! $$
//! \bar\alpha=1+\bar c/T,\quad y^\*_1=y_1,\quad y^\*_t=y_t-\bar\alpha y_{t-1},\quad
//! y^d_t=y_t-z_t^\top\hat\beta
//! $$
//!
use nalgebra::DMatrix;
use nalgebra::DVector;
use tracing::debug;

use super::common::DeterministicTerm;
use super::ols::LinearSolver;
use crate::error::DfglsError;
use crate::error::Result;

/// Size, relative to the range of the input, below which a detrended series counts as
/// identically zero.
const DEGENERATE_TOL: f64 = 1e-9;

/// Output of [`gls_detrend`].
#[derive(Debug, Clone, PartialEq)]
pub struct GlsDetrended {
  /// `y - Zβ̂`, same length as the input.
  pub series: Vec<f64>,
  /// Deterministic coefficients (constant, then trend).
  pub beta: Vec<f64>,
  /// Quasi-differencing coefficient `1 + c̄/T`.
  pub alpha: f64,
}

/// Applies `(1 - αL)` to every observation after the first; the first is kept as is.
///
/// With `α = 1` this is ordinary first differencing preceded by `y[0]`.
pub fn quasi_difference(y: &[f64], alpha: f64) -> Vec<f64> {
  let mut out = Vec::with_capacity(y.len());
  if let Some(&first) = y.first() {
    out.push(first);
  }
  out.extend(y.windows(2).map(|w| w[1] - alpha * w[0]));
  out
}

/// Deterministic regressors `Z`: a column of ones, plus `1..=n` for a trend.
pub fn deterministic_regressors(n: usize, trend: DeterministicTerm) -> DMatrix<f64> {
  DMatrix::from_fn(n, trend.n_regressors(), |r, c| match c {
    0 => 1.0,
    _ => (r + 1) as f64,
  })
}

/// Removes the deterministic component estimated on quasi-differenced data.
pub fn gls_detrend<S>(solver: &S, y: &[f64], trend: DeterministicTerm) -> Result<GlsDetrended>
where
  S: LinearSolver + ?Sized,
{
  let n = y.len();
  let alpha = 1.0 + trend.cbar() / n as f64;

  let z = deterministic_regressors(n, trend);
  let z_star = DMatrix::from_fn(n, z.ncols(), |r, c| match r {
    0 => z[(0, c)],
    _ => z[(r, c)] - alpha * z[(r - 1, c)],
  });
  let y_star = DVector::from_vec(quasi_difference(y, alpha));

  let fit = solver.fit(&z_star, &y_star)?;
  let beta = DVector::from_column_slice(&fit.beta);
  let fitted = &z * &beta;

  let series: Vec<f64> = y.iter().zip(fitted.iter()).map(|(v, f)| v - f).collect();

  // measured against the variation of y so that adding a constant leaves it unchanged
  let variation = y.iter().fold(0.0f64, |m, v| m.max((v - y[0]).abs()));
  let spread = series.iter().fold(0.0f64, |m, v| m.max(v.abs()));
  if variation == 0.0 || spread <= variation * DEGENERATE_TOL {
    return Err(DfglsError::SingularRegression(format!(
      "series is fully explained by its {} deterministic component",
      trend.code()
    )));
  }

  debug!(trend = trend.code(), alpha, beta = ?fit.beta, "gls detrending");

  Ok(GlsDetrended {
    series,
    beta: fit.beta,
    alpha,
  })
}
