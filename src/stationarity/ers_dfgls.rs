use std::fmt;

use tracing::debug;

use super::adf::AdfEvaluation;
use super::adf::MacKinnonAdf;
use super::adf::ZeroMeanAdf;
use super::adf::evaluate_at_lag;
use super::common::CriticalValues;
use super::common::DeterministicTerm;
use super::common::LagSelection;
use super::gls::gls_detrend;
use super::lag_selection::LagChoice;
use super::lag_selection::select_lag;
use super::ols::LinearSolver;
use super::ols::Ols;
use super::validation::validate_series;
use crate::error::Result;

/// Configuration for the Elliott-Rothenberg-Stock DF-GLS test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DfglsConfig {
  /// Deterministic component removed by GLS.
  pub trend: DeterministicTerm,
  /// Lag-order selection strategy for the ADF-on-detrended stage.
  pub lag_selection: LagSelection,
  /// Maximum lag. If `None`, the Schwert (1989) rule is used.
  pub max_lags: Option<usize>,
}

/// Result of the Elliott-Rothenberg-Stock DF-GLS test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DfglsResult {
  /// DF-GLS tau statistic.
  pub statistic: f64,
  /// MacKinnon approximate p-value.
  pub p_value: f64,
  /// Selected lag order.
  pub used_lags: usize,
  /// Number of observations used in the final regression.
  pub nobs: usize,
  /// Critical values at 1%, 5%, 10% levels.
  pub critical_values: CriticalValues,
  /// Best information criterion (or top-lag |t| for the t-stat search).
  pub icbest: Option<f64>,
}

impl DfglsResult {
  /// Whether the unit-root null is rejected at `alpha`.
  pub fn rejects_unit_root(&self, alpha: f64) -> bool {
    self.statistic < self.critical_values.value_at(alpha)
  }
}

impl fmt::Display for DfglsResult {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(
      f,
      "dfgls-stat = {:.5}  pval = {:.5}  arlags = {}  nobs = {}",
      self.statistic, self.p_value, self.used_lags, self.nobs
    )?;
    write!(f, "  cvdict =")?;
    for (level, value) in self.critical_values.iter() {
      write!(f, " '{level}': {value:.5}")?;
    }
    if let Some(ic) = self.icbest {
      write!(f, "\n  icbest = {ic:.5}")?;
    }
    Ok(())
  }
}

/// Merges the selected lag and the tau evaluation into the final record.
pub fn assemble(choice: LagChoice, evaluation: AdfEvaluation) -> DfglsResult {
  DfglsResult {
    statistic: evaluation.statistic,
    p_value: evaluation.p_value,
    used_lags: choice.lag,
    nobs: evaluation.nobs,
    critical_values: evaluation.critical_values,
    icbest: choice.icbest,
  }
}

/// DF-GLS pipeline over pluggable regression and tau-test collaborators.
#[derive(Debug, Clone, Copy)]
pub struct DfglsTest<S = Ols, E = MacKinnonAdf<Ols>> {
  solver: S,
  engine: E,
}

impl DfglsTest {
  pub fn new() -> Self {
    Self {
      solver: Ols,
      engine: MacKinnonAdf::new(Ols),
    }
  }
}

impl Default for DfglsTest {
  fn default() -> Self {
    Self::new()
  }
}

impl<S, E> DfglsTest<S, E>
where
  S: LinearSolver + Sync,
  E: ZeroMeanAdf,
{
  pub fn with_collaborators(solver: S, engine: E) -> Self {
    Self { solver, engine }
  }

  pub fn run(&self, y: &[f64], cfg: DfglsConfig) -> Result<DfglsResult> {
    let input = validate_series(y, cfg.trend, cfg.max_lags)?;
    let detrended = gls_detrend(&self.solver, y, input.trend)?;
    let choice = select_lag(
      &self.solver,
      &detrended.series,
      input.max_lags,
      cfg.lag_selection,
    )?;
    let evaluation = evaluate_at_lag(&self.engine, &detrended.series, choice.lag)?;
    let result = assemble(choice, evaluation);

    debug!(
      trend = input.trend.code(),
      statistic = result.statistic,
      p_value = result.p_value,
      used_lags = result.used_lags,
      "dfgls test"
    );
    Ok(result)
  }
}

/// Elliott-Rothenberg-Stock DF-GLS test with the default OLS and MacKinnon collaborators.
pub fn ers_dfgls_test(y: &[f64], cfg: DfglsConfig) -> Result<DfglsResult> {
  DfglsTest::new().run(y, cfg)
}

/// String-keyed entry point: `regression` in `{"c", "ct"}`, `autolag` in
/// `{"AIC", "BIC", "t-stat"}` or `None` to use `maxlag` directly.
pub fn dfgls(
  y: &[f64],
  regression: &str,
  maxlag: Option<usize>,
  autolag: Option<&str>,
) -> Result<DfglsResult> {
  let trend = regression.parse::<DeterministicTerm>()?;
  let lag_selection = match autolag {
    Some(s) => s.parse::<LagSelection>()?,
    None => LagSelection::Fixed,
  };
  ers_dfgls_test(
    y,
    DfglsConfig {
      trend,
      lag_selection,
      max_lags: maxlag,
    },
  )
}
