use super::common::CriticalValues;
use super::common::zero_mean_adf_design;
use super::mackinnon::mackinnon_critical_values;
use super::mackinnon::mackinnon_p_value;
use super::ols::LinearSolver;
use super::ols::Ols;
use crate::error::DfglsError;
use crate::error::Result;

/// Output of a zero-mean ADF tau test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdfEvaluation {
  /// t-statistic of the lagged level coefficient.
  pub statistic: f64,
  pub p_value: f64,
  pub critical_values: CriticalValues,
  /// Observations in the test regression.
  pub nobs: usize,
}

/// Capability: evaluate a Dickey-Fuller tau test without constant or trend.
pub trait ZeroMeanAdf {
  fn evaluate(&self, y: &[f64], lag: usize) -> Result<AdfEvaluation>;
}

/// Zero-mean ADF regression scored against the MacKinnon `nc` response surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacKinnonAdf<S = Ols> {
  solver: S,
}

impl<S: LinearSolver> MacKinnonAdf<S> {
  pub fn new(solver: S) -> Self {
    Self { solver }
  }
}

impl<S: LinearSolver> ZeroMeanAdf for MacKinnonAdf<S> {
  fn evaluate(&self, y: &[f64], lag: usize) -> Result<AdfEvaluation> {
    let (lhs, rhs) = zero_mean_adf_design(y, lag)?;
    let fit = self.solver.fit(&rhs, &lhs)?;

    let gamma = fit.beta[0];
    let se = fit.std_err[0];
    let statistic = if se > 0.0 { gamma / se } else { f64::NAN };
    if !statistic.is_finite() {
      return Err(DfglsError::SingularRegression(format!(
        "level coefficient {gamma} has standard error {se}"
      )));
    }

    Ok(AdfEvaluation {
      statistic,
      p_value: mackinnon_p_value(statistic),
      critical_values: mackinnon_critical_values(fit.nobs),
      nobs: fit.nobs,
    })
  }
}

/// Runs the engine at the selected lag, tagging any failure with that lag.
pub fn evaluate_at_lag<E>(engine: &E, detrended: &[f64], lag: usize) -> Result<AdfEvaluation>
where
  E: ZeroMeanAdf + ?Sized,
{
  engine
    .evaluate(detrended, lag)
    .map_err(|err| DfglsError::Evaluation {
      lag,
      reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;
  use rand::SeedableRng;
  use rand::rngs::StdRng;
  use rand_distr::Distribution;
  use rand_distr::Normal;

  use super::*;

  fn ar1(phi: f64, n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let mut x = vec![0.0; n];
    for t in 1..n {
      x[t] = phi * x[t - 1] + normal.sample(&mut rng);
    }
    x
  }

  #[test]
  fn lag_zero_matches_closed_form() {
    // Δy_t = γ y_{t-1} + e_t with a single regressor
    let y = ar1(0.9, 200, 4);
    let dy: Vec<f64> = y.windows(2).map(|w| w[1] - w[0]).collect();
    let lag = &y[..y.len() - 1];
    let sxx = lag.iter().map(|v| v * v).sum::<f64>();
    let gamma = lag.iter().zip(&dy).map(|(a, b)| a * b).sum::<f64>() / sxx;
    let sse = lag
      .iter()
      .zip(&dy)
      .map(|(a, b)| (b - gamma * a).powi(2))
      .sum::<f64>();
    let se = (sse / (dy.len() - 1) as f64 / sxx).sqrt();

    let res = MacKinnonAdf::new(Ols).evaluate(&y, 0).unwrap();
    assert_eq!(res.nobs, 199);
    assert_abs_diff_eq!(res.statistic, gamma / se, epsilon = 1e-8);
    assert_abs_diff_eq!(res.p_value, mackinnon_p_value(res.statistic), epsilon = 1e-15);
  }

  #[test]
  fn regression_sample_shrinks_with_lag() {
    let y = ar1(0.5, 120, 8);
    let engine = MacKinnonAdf::new(Ols);
    let res = engine.evaluate(&y, 5).unwrap();
    assert_eq!(res.nobs, 120 - 1 - 5);
    assert_eq!(res.critical_values, mackinnon_critical_values(114));
  }

  #[test]
  fn failures_carry_the_lag() {
    let y = vec![0.0; 40];
    let err = evaluate_at_lag(&MacKinnonAdf::new(Ols), &y, 3).unwrap_err();
    match err {
      DfglsError::Evaluation { lag, reason } => {
        assert_eq!(lag, 3);
        assert!(reason.contains("singular"), "{reason}");
      }
      other => panic!("unexpected error {other:?}"),
    }
  }
}
