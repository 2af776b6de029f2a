//! The capability contract for terminal value types.

use std::ops::{Add, Div, Mul, Sub};

/// Contract for values that can live at the leaves of a recalc tree.
///
/// A terminal's staleness is derived by comparing its cached copy against
/// the live source (`PartialEq`), caching requires `Clone`, and an
/// expression node's result slot is default-initialized before its first
/// evaluation (`Default`). The binary arithmetic bounds are what the
/// operator tags dispatch through; unary negation is derived from the
/// same contract as `T::default() - x`, so unsigned types can be bound
/// too (negating one underflows exactly as plain unsigned subtraction
/// would).
///
/// Binding a type that does not satisfy this contract is rejected by the
/// compiler at the construction boundary; there is no runtime check.
pub trait Scalar:
    Clone
    + PartialEq
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
}

impl<T> Scalar for T where
    T: Clone
        + PartialEq
        + Default
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
{
}
