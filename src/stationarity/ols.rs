//! Ordinary least squares behind a narrow fitting interface.
//!
//! $$
//! \hat\beta=(X^\top X)^{-1}X^\top y,\qquad \hat\sigma^2=\frac{e^\top e}{n-k}
//! $$
//!
use std::f64::consts::PI;

use nalgebra::DMatrix;
use nalgebra::DVector;
use tracing::trace;

use crate::error::DfglsError;
use crate::error::Result;

/// Capability: fit a linear model `y = Xβ + ε`.
pub trait LinearSolver {
  /// Fails with [`DfglsError::SingularRegression`] when `x` is rank deficient.
  fn fit(&self, x: &DMatrix<f64>, y: &DVector<f64>) -> Result<OlsFit>;
}

/// Fitted linear regression.
#[derive(Debug, Clone)]
pub struct OlsFit {
  pub beta: Vec<f64>,
  pub std_err: Vec<f64>,
  pub nobs: usize,
  pub k: usize,
  /// Gaussian log-likelihood at the ML variance `sse / nobs`.
  pub loglik: f64,
}

impl OlsFit {
  pub fn t_values(&self) -> Vec<f64> {
    self
      .beta
      .iter()
      .zip(&self.std_err)
      .map(|(b, se)| if *se > 0.0 { b / se } else { f64::NAN })
      .collect()
  }

  /// `-2·logL/n + 2·k/n`
  pub fn aic(&self) -> f64 {
    let n = self.nobs as f64;
    -2.0 * self.loglik / n + 2.0 * self.k as f64 / n
  }

  /// `-2·logL/n + k·ln(n)/n`
  pub fn bic(&self) -> f64 {
    let n = self.nobs as f64;
    -2.0 * self.loglik / n + self.k as f64 * n.ln() / n
  }
}

/// Normal-equation OLS on nalgebra dense matrices.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ols;

impl LinearSolver for Ols {
  fn fit(&self, x: &DMatrix<f64>, y: &DVector<f64>) -> Result<OlsFit> {
    let (n, k) = x.shape();
    if n != y.len() {
      return Err(DfglsError::SingularRegression(format!(
        "design has {n} rows but response has {}",
        y.len()
      )));
    }
    if k == 0 || n < k {
      return Err(DfglsError::SingularRegression(format!(
        "{n} observations cannot identify {k} coefficients"
      )));
    }
    trace!(nobs = n, k, "ols fit");

    let svd = x.clone().svd(false, false);
    // numerical-rank cutoff max(n, k) · σ_max · ε
    let tol = n.max(k) as f64 * svd.singular_values.max() * f64::EPSILON;
    let rank = svd.rank(tol);
    if rank < k {
      return Err(DfglsError::SingularRegression(format!(
        "design matrix has rank {rank} < {k} columns"
      )));
    }

    let xt = x.transpose();
    let xtx_inv = (&xt * x).try_inverse().ok_or_else(|| {
      DfglsError::SingularRegression("X'X is not invertible".to_string())
    })?;

    let beta = &xtx_inv * (&xt * y);
    let residuals = y - x * &beta;
    let sse = residuals.norm_squared();

    let sigma2 = if n > k {
      (sse / (n - k) as f64).max(0.0)
    } else {
      f64::NAN
    };
    let std_err = (0..k)
      .map(|i| (xtx_inv[(i, i)] * sigma2).max(0.0).sqrt())
      .collect();

    let n_f = n as f64;
    let loglik = -0.5 * n_f * ((2.0 * PI).ln() + (sse / n_f).ln() + 1.0);

    Ok(OlsFit {
      beta: beta.iter().copied().collect(),
      std_err,
      nobs: n,
      k,
      loglik,
    })
  }
}
