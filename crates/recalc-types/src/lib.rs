//! Shared types for the recalc engine.
//!
//! This crate defines the operator tags, the [`Scalar`] capability
//! contract for terminal value types, and the construction-time error
//! types used by the engine crate.

mod error;
mod scalar;
pub mod operator;

pub use error::{BuildError, BuildResult};
pub use operator::Operator;
pub use scalar::Scalar;
