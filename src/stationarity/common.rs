use std::fmt;
use std::str::FromStr;

use nalgebra::DMatrix;
use nalgebra::DVector;

use crate::error::DfglsError;
use crate::error::Result;

/// Deterministic component removed by GLS before the unit-root regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeterministicTerm {
  /// Constant only (`c`).
  #[default]
  Constant,
  /// Constant and linear trend (`ct`).
  ConstantTrend,
}

impl DeterministicTerm {
  /// Near-unit-root local alternative `c̄` of Elliott, Rothenberg & Stock (1996).
  pub const fn cbar(self) -> f64 {
    match self {
      DeterministicTerm::Constant => -7.0,
      DeterministicTerm::ConstantTrend => -13.5,
    }
  }

  /// Number of deterministic regressors (columns of `Z`).
  pub const fn n_regressors(self) -> usize {
    match self {
      DeterministicTerm::Constant => 1,
      DeterministicTerm::ConstantTrend => 2,
    }
  }

  pub const fn code(self) -> &'static str {
    match self {
      DeterministicTerm::Constant => "c",
      DeterministicTerm::ConstantTrend => "ct",
    }
  }
}

impl FromStr for DeterministicTerm {
  type Err = DfglsError;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "c" => Ok(DeterministicTerm::Constant),
      "ct" => Ok(DeterministicTerm::ConstantTrend),
      other => Err(DfglsError::InvalidRegression(other.to_string())),
    }
  }
}

impl fmt::Display for DeterministicTerm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

/// Lag-order policy for the ADF regression on the detrended series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LagSelection {
  /// Minimise the Akaike information criterion.
  #[default]
  Aic,
  /// Minimise the Bayesian information criterion.
  Bic,
  /// Ng & Perron (2001) general-to-specific search on the top lag's t-statistic.
  TStat,
  /// Use `maxlag` as is.
  Fixed,
}

impl FromStr for LagSelection {
  type Err = DfglsError;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_ascii_lowercase().as_str() {
      "aic" => Ok(LagSelection::Aic),
      "bic" => Ok(LagSelection::Bic),
      "t-stat" => Ok(LagSelection::TStat),
      "none" | "fixed" => Ok(LagSelection::Fixed),
      _ => Err(DfglsError::InvalidLagSelection(s.to_string())),
    }
  }
}

/// Critical values of a left-tailed test at 1%, 5% and 10%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalValues {
  pub one_percent: f64,
  pub five_percent: f64,
  pub ten_percent: f64,
}

impl CriticalValues {
  pub fn value_at(self, alpha: f64) -> f64 {
    if alpha <= 0.01 {
      self.one_percent
    } else if alpha <= 0.05 {
      self.five_percent
    } else {
      self.ten_percent
    }
  }

  /// Lookup by the conventional `"1%"`, `"5%"`, `"10%"` keys.
  pub fn get(&self, level: &str) -> Option<f64> {
    match level {
      "1%" => Some(self.one_percent),
      "5%" => Some(self.five_percent),
      "10%" => Some(self.ten_percent),
      _ => None,
    }
  }

  pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
    [
      ("1%", self.one_percent),
      ("5%", self.five_percent),
      ("10%", self.ten_percent),
    ]
    .into_iter()
  }
}

pub fn difference(y: &[f64]) -> Vec<f64> {
  y.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Schwert (1989) rule `floor(12 · (n/100)^¼)`.
pub fn schwert_max_lags(n: usize) -> usize {
  if n <= 1 {
    return 0;
  }
  (12.0 * (n as f64 / 100.0).powf(0.25)).floor() as usize
}

/// Zero-mean ADF design at `lags`: `Δy_t` on `y_{t-1}, Δy_{t-1}, …, Δy_{t-lags}`.
///
/// Rows start at `t = lags + 1`, so the sample has `y.len() - 1 - lags` observations.
/// Column 0 is the lagged level.
pub fn zero_mean_adf_design(y: &[f64], lags: usize) -> Result<(DVector<f64>, DMatrix<f64>)> {
  let needed = lags + 3;
  if y.len() < needed {
    return Err(DfglsError::InsufficientData {
      needed,
      got: y.len(),
    });
  }

  let dy = difference(y);
  let n_dy = dy.len();
  let nobs = n_dy - lags;

  let lhs = DVector::from_iterator(nobs, dy[lags..].iter().copied());
  // y_{t-1} in the ADF regression, with dy-index t corresponding to time t+1.
  let rhs = DMatrix::from_fn(nobs, lags + 1, |r, c| {
    let t = r + lags;
    if c == 0 { y[t] } else { dy[t - c] }
  });

  Ok((lhs, rhs))
}
