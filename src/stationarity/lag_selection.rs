//! Lag-length selection for the zero-mean ADF regression.
//!
//! All candidates share the sample imposed by `maxlag` so their information criteria
//! are comparable.
//!
use std::f64::consts::SQRT_2;

use rayon::prelude::*;
use statrs::function::erf::erfc;
use tracing::debug;

use super::common::LagSelection;
use super::common::zero_mean_adf_design;
use super::ols::LinearSolver;
use crate::error::Result;

/// Two-sided level at which the top lag must be significant in the t-stat search.
pub const TSTAT_LEVEL: f64 = 0.10;

/// Summary of one candidate regression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagCandidate {
  pub lag: usize,
  pub nobs: usize,
  pub aic: f64,
  pub bic: f64,
  /// t-statistic of the last regressor (the level term when `lag == 0`).
  pub top_t: f64,
}

/// Selected lag order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagChoice {
  pub lag: usize,
  /// Criterion value at the selected lag; `None` when no search ran.
  pub icbest: Option<f64>,
}

/// Fits every lag `0..=max_lags` on the common sample.
pub fn fit_candidates<S>(solver: &S, y: &[f64], max_lags: usize) -> Result<Vec<LagCandidate>>
where
  S: LinearSolver + Sync + ?Sized,
{
  let (lhs, rhs) = zero_mean_adf_design(y, max_lags)?;

  (0..=max_lags)
    .into_par_iter()
    .map(|lag| -> Result<LagCandidate> {
      let x = rhs.columns(0, lag + 1).into_owned();
      let fit = solver.fit(&x, &lhs)?;
      let top_t = fit.t_values().last().copied().unwrap_or(f64::NAN);
      let candidate = LagCandidate {
        lag,
        nobs: fit.nobs,
        aic: fit.aic(),
        bic: fit.bic(),
        top_t,
      };
      debug!(
        lag,
        aic = candidate.aic,
        bic = candidate.bic,
        top_t,
        "lag candidate"
      );
      Ok(candidate)
    })
    .collect()
}

/// Picks a lag from fitted candidates, ordered by lag.
///
/// Information criteria are minimised with ties going to the smaller lag. The t-stat
/// rule walks down from the largest lag and stops at the first whose top term is
/// significant at [`TSTAT_LEVEL`], falling back to lag 0.
pub fn choose_lag(candidates: &[LagCandidate], selection: LagSelection) -> LagChoice {
  match selection {
    LagSelection::Aic => minimise(candidates, |c| c.aic),
    LagSelection::Bic => minimise(candidates, |c| c.bic),
    LagSelection::TStat => {
      let chosen = candidates
        .iter()
        .rev()
        .find(|c| c.lag == 0 || two_sided_p_value(c.top_t) <= TSTAT_LEVEL);
      match chosen {
        Some(c) => LagChoice {
          lag: c.lag,
          icbest: Some(c.top_t.abs()),
        },
        None => LagChoice {
          lag: 0,
          icbest: None,
        },
      }
    }
    LagSelection::Fixed => LagChoice {
      lag: candidates.last().map_or(0, |c| c.lag),
      icbest: None,
    },
  }
}

/// Chooses the ADF lag for the detrended series `y`.
pub fn select_lag<S>(
  solver: &S,
  y: &[f64],
  max_lags: usize,
  selection: LagSelection,
) -> Result<LagChoice>
where
  S: LinearSolver + Sync + ?Sized,
{
  if selection == LagSelection::Fixed || max_lags == 0 {
    return Ok(LagChoice {
      lag: max_lags,
      icbest: None,
    });
  }

  let candidates = fit_candidates(solver, y, max_lags)?;
  let choice = choose_lag(&candidates, selection);
  debug!(?selection, max_lags, lag = choice.lag, icbest = ?choice.icbest, "selected lag");
  Ok(choice)
}

fn minimise(candidates: &[LagCandidate], ic: impl Fn(&LagCandidate) -> f64) -> LagChoice {
  let mut best: Option<(usize, f64)> = None;
  for c in candidates {
    let value = ic(c);
    if value.is_nan() {
      continue;
    }
    if best.map_or(true, |(_, b)| value < b) {
      best = Some((c.lag, value));
    }
  }
  match best {
    Some((lag, value)) => LagChoice {
      lag,
      icbest: Some(value),
    },
    None => LagChoice {
      lag: 0,
      icbest: None,
    },
  }
}

fn two_sided_p_value(t: f64) -> f64 {
  if t.is_nan() {
    return 1.0;
  }
  erfc(t.abs() / SQRT_2)
}
