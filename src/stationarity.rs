//! Unit-root testing on GLS-detrended series.

pub mod adf;
pub mod common;
pub mod ers_dfgls;
pub mod gls;
pub mod lag_selection;
pub mod mackinnon;
pub mod ols;
pub mod validation;
