//! # densead
//!
//! Forward-mode automatic differentiation with dense derivative storage.
//!
//! - [`Evaluation`]: a value plus its partial derivatives with respect to a
//!   fixed number of independent variables
//! - [`math`]: chain rule implementations of the elementary functions
//! - [`MathToolbox`]: one interface over `f32`, `f64` and evaluations, so
//!   numerical code is written once and run with or without derivatives

pub mod error;
pub mod evaluation;
pub mod math;
pub mod toolbox;

pub use error::{Error, Result};
pub use evaluation::Evaluation;
pub use toolbox::{decay, Decay, MathToolbox};
