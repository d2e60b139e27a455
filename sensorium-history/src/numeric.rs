//! Reading value types

use std::fmt::{Debug, Display};

mod private {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for f32 {}
}

/// A numeric reading that can be stored in a [`ReadingSequence`](crate::ReadingSequence)
///
/// Implemented for exactly two types: `i32` for integral readings (pressure)
/// and `f32` for floating-point readings (temperature). The zero value is
/// `Default::default()`.
pub trait Numeric:
    private::Sealed + Copy + PartialEq + PartialOrd + Default + Debug + Display
{
    /// Short name of the underlying type, as shown to users
    const TYPE_NAME: &'static str;

    /// Mean of `count` values using this type's own division semantics
    ///
    /// Returns the zero value when `count` is zero.
    fn mean<I>(values: I, count: usize) -> Self
    where
        I: IntoIterator<Item = Self>;
}

impl Numeric for i32 {
    const TYPE_NAME: &'static str = "int";

    fn mean<I>(values: I, count: usize) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        if count == 0 {
            return 0;
        }

        // Widened so long histories cannot overflow; the quotient always fits back.
        let sum: i64 = values.into_iter().map(i64::from).sum();
        (sum / count as i64) as i32
    }
}

impl Numeric for f32 {
    const TYPE_NAME: &'static str = "float";

    fn mean<I>(values: I, count: usize) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        if count == 0 {
            return 0.0;
        }

        let sum: f32 = values.into_iter().sum();
        sum / count as f32
    }
}
