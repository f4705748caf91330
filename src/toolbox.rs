//! [`MathToolbox`]: one set of math operations for plain floats and for
//! [`Evaluation`]s, so numerical code can be written once and run either as
//! a plain evaluation or with derivatives attached.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{Float, FloatConst, One, Zero};

use crate::error::{Error, Result};
use crate::evaluation::Evaluation;
use crate::math;

/// A type which behaves like a differentiable real number.
///
/// Implemented for `f32`, `f64` and for `Evaluation<V, N>` over any
/// implementing `V`, so evaluations nest.
pub trait MathToolbox:
    Copy
    + Debug
    + PartialOrd
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The type one AD layer down. Plain floats are their own value type.
    type Value: MathToolbox<Scalar = Self::Scalar>;

    /// The innermost floating point type, whatever the nesting depth.
    type Scalar: Float + FloatConst + Debug;

    /// The value without derivatives, unwrapping a single layer.
    fn value(self) -> Self::Value;

    /// The value with every AD layer unwrapped.
    fn scalar_value(self) -> Self::Scalar;

    /// A constant holding `value`, with zero derivatives at every level.
    fn from_scalar(value: Self::Scalar) -> Self;

    fn create_constant(value: Self::Value) -> Self;

    /// Fails for plain floats, which cannot carry a derivative.
    fn create_variable(value: Self::Value, var_idx: usize) -> Result<Self>;

    /// Whether `a` and `b` agree within `tolerance` in the value and in every
    /// derivative.
    fn is_same(a: Self, b: Self, tolerance: Self::Scalar) -> bool;

    fn is_finite(self) -> bool {
        self.scalar_value().is_finite()
    }

    fn is_nan(self) -> bool {
        self.scalar_value().is_nan()
    }

    fn max(self, other: Self) -> Self;
    fn min(self, other: Self) -> Self;

    /// Maximum against a constant; the derivatives vanish when the constant wins.
    fn max_value(self, other: Self::Value) -> Self;

    /// Minimum against a constant; the derivatives vanish when the constant wins.
    fn min_value(self, other: Self::Value) -> Self;

    fn abs(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn exp(self) -> Self;
    /// Natural logarithm.
    fn log(self) -> Self;
    fn log10(self) -> Self;
    fn sqrt(self) -> Self;

    /// Power where both base and exponent may carry derivatives.
    fn pow(self, exp: Self) -> Self;

    /// Power with a constant exponent.
    fn pow_const_exp(self, exp: Self::Value) -> Self;

    /// Power of a constant base.
    fn pow_const_base(base: Self::Value, exp: Self) -> Self;
}

/// Conversion of a toolbox type into a target type, selected at compile time.
///
/// An evaluation decays into itself unchanged or, when its values are plain
/// floats, into that float by dropping the derivatives. There is no impl for
/// any other target.
pub trait Decay<Target> {
    fn decay(self) -> Target;
}

impl<V: MathToolbox, const N: usize> Decay<Evaluation<V, N>> for Evaluation<V, N> {
    #[inline]
    fn decay(self) -> Self {
        self
    }
}

pub fn decay<Target, T: Decay<Target>>(x: T) -> Target {
    x.decay()
}

macro_rules! impl_float_toolbox {
    ($($t:ty),*) => {$(
        impl MathToolbox for $t {
            type Value = $t;
            type Scalar = $t;

            #[inline]
            fn value(self) -> $t {
                self
            }

            #[inline]
            fn scalar_value(self) -> $t {
                self
            }

            #[inline]
            fn from_scalar(value: $t) -> $t {
                value
            }

            #[inline]
            fn create_constant(value: $t) -> $t {
                value
            }

            fn create_variable(_value: $t, _var_idx: usize) -> Result<$t> {
                Err(Error::NotAnEvaluation)
            }

            fn is_same(a: $t, b: $t, tolerance: $t) -> bool {
                // infinities of the same sign differ by NaN
                if a == b {
                    return true;
                }
                let diff = a - b;
                -tolerance <= diff && diff <= tolerance
            }

            #[inline]
            fn max(self, other: $t) -> $t {
                <$t>::max(self, other)
            }

            #[inline]
            fn min(self, other: $t) -> $t {
                <$t>::min(self, other)
            }

            #[inline]
            fn max_value(self, other: $t) -> $t {
                <$t>::max(self, other)
            }

            #[inline]
            fn min_value(self, other: $t) -> $t {
                <$t>::min(self, other)
            }

            #[inline]
            fn abs(self) -> $t {
                <$t>::abs(self)
            }

            #[inline]
            fn sin(self) -> $t {
                <$t>::sin(self)
            }

            #[inline]
            fn cos(self) -> $t {
                <$t>::cos(self)
            }

            #[inline]
            fn tan(self) -> $t {
                <$t>::tan(self)
            }

            #[inline]
            fn asin(self) -> $t {
                <$t>::asin(self)
            }

            #[inline]
            fn acos(self) -> $t {
                <$t>::acos(self)
            }

            #[inline]
            fn atan(self) -> $t {
                <$t>::atan(self)
            }

            #[inline]
            fn atan2(self, other: $t) -> $t {
                <$t>::atan2(self, other)
            }

            #[inline]
            fn exp(self) -> $t {
                <$t>::exp(self)
            }

            #[inline]
            fn log(self) -> $t {
                <$t>::ln(self)
            }

            #[inline]
            fn log10(self) -> $t {
                <$t>::log10(self)
            }

            #[inline]
            fn sqrt(self) -> $t {
                <$t>::sqrt(self)
            }

            #[inline]
            fn pow(self, exp: $t) -> $t {
                <$t>::powf(self, exp)
            }

            #[inline]
            fn pow_const_exp(self, exp: $t) -> $t {
                <$t>::powf(self, exp)
            }

            #[inline]
            fn pow_const_base(base: $t, exp: $t) -> $t {
                <$t>::powf(base, exp)
            }
        }

        impl Decay<$t> for $t {
            #[inline]
            fn decay(self) -> $t {
                self
            }
        }

        impl<const N: usize> Decay<$t> for Evaluation<$t, N> {
            #[inline]
            fn decay(self) -> $t {
                self.value
            }
        }
    )*};
}

impl_float_toolbox!(f32, f64);

impl<V: MathToolbox, const N: usize> MathToolbox for Evaluation<V, N> {
    type Value = V;
    type Scalar = V::Scalar;

    #[inline]
    fn value(self) -> V {
        self.value
    }

    #[inline]
    fn scalar_value(self) -> V::Scalar {
        self.value.scalar_value()
    }

    fn from_scalar(value: V::Scalar) -> Self {
        Evaluation::create_constant(V::from_scalar(value))
    }

    fn create_constant(value: V) -> Self {
        Evaluation::create_constant(value)
    }

    fn create_variable(value: V, var_idx: usize) -> Result<Self> {
        Evaluation::create_variable(value, var_idx)
    }

    fn is_same(a: Self, b: Self, tolerance: V::Scalar) -> bool {
        V::is_same(a.value, b.value, tolerance)
            && a.derivatives
                .iter()
                .zip(b.derivatives.iter())
                .all(|(&da, &db)| V::is_same(da, db, tolerance))
    }

    fn max(self, other: Self) -> Self {
        math::max(self, other)
    }

    fn min(self, other: Self) -> Self {
        math::min(self, other)
    }

    fn max_value(self, other: V) -> Self {
        math::max_with_scalar(self, other)
    }

    fn min_value(self, other: V) -> Self {
        math::min_with_scalar(self, other)
    }

    fn abs(self) -> Self {
        math::abs(self)
    }

    fn sin(self) -> Self {
        math::sin(self)
    }

    fn cos(self) -> Self {
        math::cos(self)
    }

    fn tan(self) -> Self {
        math::tan(self)
    }

    fn asin(self) -> Self {
        math::asin(self)
    }

    fn acos(self) -> Self {
        math::acos(self)
    }

    fn atan(self) -> Self {
        math::atan(self)
    }

    fn atan2(self, other: Self) -> Self {
        math::atan2(self, other)
    }

    fn exp(self) -> Self {
        math::exp(self)
    }

    fn log(self) -> Self {
        math::log(self)
    }

    fn log10(self) -> Self {
        math::log10(self)
    }

    fn sqrt(self) -> Self {
        math::sqrt(self)
    }

    fn pow(self, exp: Self) -> Self {
        math::pow(self, exp)
    }

    fn pow_const_exp(self, exp: V) -> Self {
        math::pow_const_exp(self, exp)
    }

    fn pow_const_base(base: V, exp: Self) -> Self {
        math::pow_const_base(base, exp)
    }
}
