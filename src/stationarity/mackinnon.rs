//! MacKinnon (1994, 2010) response surfaces for the zero-mean (`nc`) Dickey-Fuller
//! tau statistic with a single integrated variable.
//!
//! $$
//! p(\tau)=\Phi\Big(\sum_i \gamma_i\tau^i\Big),\qquad
//! c_\alpha(T)=\beta_0+\beta_1/T+\beta_2/T^2+\beta_3/T^3
//! $$
//!
use std::f64::consts::SQRT_2;

use statrs::function::erf::erfc;

use super::common::CriticalValues;

/// Below this statistic the p-value is 0.
const TAU_MIN_NC: f64 = -19.04;
/// Switch point between the small-p and large-p polynomials.
const TAU_STAR_NC: f64 = -1.04;

/// Ascending powers of τ.
const TAU_NC_SMALLP: [f64; 3] = [0.6344, 1.2378, 3.2496e-2];
const TAU_NC_LARGEP: [f64; 4] = [0.4797, 9.3557e-1, -6.999e-2, 3.3066e-2];

/// 1%, 5%, 10% rows; ascending powers of `1/T`.
const TAU_NC_2010: [[f64; 4]; 3] = [
  [-2.56574, -2.2358, -3.627, 0.0],
  [-1.94100, -0.2686, -3.365, 31.223],
  [-1.61682, 0.2656, -2.714, 25.364],
];

fn polyval(coeffs: &[f64], x: f64) -> f64 {
  coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Approximate p-value of a zero-mean Dickey-Fuller tau statistic.
pub fn mackinnon_p_value(tau: f64) -> f64 {
  if tau.is_nan() {
    return f64::NAN;
  }
  if tau < TAU_MIN_NC {
    return 0.0;
  }
  let coeffs: &[f64] = if tau <= TAU_STAR_NC {
    &TAU_NC_SMALLP
  } else {
    &TAU_NC_LARGEP
  };
  // Φ(x) = erfc(-x/√2) / 2
  0.5 * erfc(-polyval(coeffs, tau) / SQRT_2)
}

/// Finite-sample critical values for a regression with `nobs` observations.
pub fn mackinnon_critical_values(nobs: usize) -> CriticalValues {
  let inv_t = 1.0 / nobs as f64;
  let at = |row: &[f64; 4]| polyval(row, inv_t);
  CriticalValues {
    one_percent: at(&TAU_NC_2010[0]),
    five_percent: at(&TAU_NC_2010[1]),
    ten_percent: at(&TAU_NC_2010[2]),
  }
}
