//! # dfgls-rs
//!
//! $$
//! \Delta y^d_t=\gamma\,y^d_{t-1}+\sum_{i=1}^{p}\delta_i\,\Delta y^d_{t-i}+e_t,\qquad
//! H_0:\gamma=0
//! $$
//!
//! Dickey-Fuller GLS unit-root test of Elliott, Rothenberg & Stock (1996): the series is
//! detrended by GLS under a local-to-unity alternative, then a zero-mean ADF regression
//! is run on the result with its lag order chosen by AIC, BIC or a sequential t-test.
//!
//! ```no_run
//! use dfgls::dfgls;
//!
//! let series: Vec<f64> = (0..200).map(|t| (t as f64 * 0.1).sin()).collect();
//! let res = dfgls(&series, "c", None, Some("AIC")).unwrap();
//! println!("{res}");
//! ```
//!
pub mod error;
pub mod stationarity;

pub use error::DfglsError;
pub use error::Result;
pub use stationarity::common::CriticalValues;
pub use stationarity::common::DeterministicTerm;
pub use stationarity::common::LagSelection;
pub use stationarity::ers_dfgls::DfglsConfig;
pub use stationarity::ers_dfgls::DfglsResult;
pub use stationarity::ers_dfgls::DfglsTest;
pub use stationarity::ers_dfgls::dfgls;
pub use stationarity::ers_dfgls::ers_dfgls_test;
