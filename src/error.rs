//! # Errors
//!
//! Failure modes of the DF-GLS pipeline.
//!
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, DfglsError>;

/// Errors raised while validating, detrending or evaluating a series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DfglsError {
  /// Regression option other than `c` / `ct`.
  #[error("regression option '{0}' not understood")]
  InvalidRegression(String),

  /// Lag selection option other than `AIC`, `BIC`, `t-stat` or `none`.
  #[error("autolag option '{0}' not understood")]
  InvalidLagSelection(String),

  /// Series too short for the requested regression.
  #[error("insufficient data: need at least {needed} observations, got {got}")]
  InsufficientData { needed: usize, got: usize },

  /// NaN or infinite observation.
  #[error("non-finite value {value} at index {index}")]
  NonFiniteValue { index: usize, value: f64 },

  /// Explicit `maxlag` exceeds what the sample supports.
  #[error("maxlag {maxlag} must not exceed {limit} for this sample size")]
  MaxLagTooLarge { maxlag: usize, limit: usize },

  /// Rank-deficient design matrix.
  #[error("singular regression: {0}")]
  SingularRegression(String),

  /// The zero-mean ADF engine failed at the selected lag.
  #[error("ADF evaluation failed at lag {lag}: {reason}")]
  Evaluation { lag: usize, reason: String },
}

impl DfglsError {
  /// `true` for errors caused by the caller's arguments rather than the data's numerics.
  pub fn is_invalid_input(&self) -> bool {
    matches!(
      self,
      DfglsError::InvalidRegression(_)
        | DfglsError::InvalidLagSelection(_)
        | DfglsError::InsufficientData { .. }
        | DfglsError::NonFiniteValue { .. }
        | DfglsError::MaxLagTooLarge { .. }
    )
  }
}
