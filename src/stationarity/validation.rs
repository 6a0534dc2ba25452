use super::common::DeterministicTerm;
use super::common::schwert_max_lags;
use crate::error::DfglsError;
use crate::error::Result;

/// Validated request for one DF-GLS run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedInput {
  pub nobs: usize,
  pub trend: DeterministicTerm,
  pub max_lags: usize,
}

/// Largest `maxlag` leaving the zero-mean ADF regression on `n` points with positive
/// residual degrees of freedom: `n - 1 - p` rows against `p + 1` coefficients.
pub fn max_lag_limit(n: usize) -> Option<usize> {
  n.checked_sub(3).map(|m| m / 2)
}

/// Checks the series and resolves `maxlag`.
///
/// Without an explicit `max_lags` the Schwert (1989) rule is used, capped at
/// [`max_lag_limit`].
pub fn validate_series(
  y: &[f64],
  trend: DeterministicTerm,
  max_lags: Option<usize>,
) -> Result<ValidatedInput> {
  let nobs = y.len();

  if let Some((index, &value)) = y.iter().enumerate().find(|(_, v)| !v.is_finite()) {
    return Err(DfglsError::NonFiniteValue { index, value });
  }

  let Some(limit) = max_lag_limit(nobs) else {
    return Err(DfglsError::InsufficientData {
      needed: 3,
      got: nobs,
    });
  };

  let max_lags = match max_lags {
    Some(p) if p > limit => return Err(DfglsError::MaxLagTooLarge { maxlag: p, limit }),
    Some(p) => p,
    None => schwert_max_lags(nobs).min(limit),
  };

  Ok(ValidatedInput {
    nobs,
    trend,
    max_lags,
  })
}
