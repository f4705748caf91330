use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::toolbox::MathToolbox;

/// A value together with its partial derivatives with respect to `N`
/// independent variables.
///
/// `derivatives[i]` holds the derivative with respect to variable `i`. The
/// inner type `V` is either a plain float or another `Evaluation`, which
/// gives higher order derivatives.
#[derive(Debug, Clone, Copy)]
pub struct Evaluation<V, const N: usize> {
    pub value: V, // The function value
    pub derivatives: [V; N],
}

impl<V: MathToolbox, const N: usize> Evaluation<V, N> {
    pub fn new(value: V, derivatives: [V; N]) -> Self {
        Evaluation { value, derivatives }
    }

    /// Builds an evaluation from a derivative slice whose length must be `N`.
    pub fn from_derivatives(value: V, derivatives: &[V]) -> Result<Self> {
        let derivatives =
            <[V; N]>::try_from(derivatives).map_err(|_| Error::DerivativeCount {
                expected: N,
                actual: derivatives.len(),
            })?;
        Ok(Evaluation { value, derivatives })
    }

    /// A value which does not depend on any variable.
    pub fn create_constant(value: V) -> Self {
        Evaluation {
            value,
            derivatives: [V::zero(); N],
        }
    }

    /// The independent variable `var_idx`: unit derivative in that slot,
    /// zero elsewhere.
    pub fn create_variable(value: V, var_idx: usize) -> Result<Self> {
        if var_idx >= N {
            return Err(Error::VariableIndexOutOfRange {
                index: var_idx,
                num_vars: N,
            });
        }
        Ok(Evaluation {
            value,
            derivatives: std::array::from_fn(|i| if i == var_idx { V::one() } else { V::zero() }),
        })
    }

    /// Value and all derivatives zero.
    pub fn create_blank() -> Self {
        Self::create_constant(V::zero())
    }

    pub fn num_vars(&self) -> usize {
        N
    }

    pub fn derivative(&self, var_idx: usize) -> Option<V> {
        self.derivatives.get(var_idx).copied()
    }

    pub fn is_constant(&self) -> bool {
        self.derivatives.iter().all(|d| d.is_zero())
    }

    /// Drops all sensitivities, keeping the value.
    pub fn clear_derivatives(self) -> Self {
        Self::create_constant(self.value)
    }
}

impl<V: MathToolbox, const N: usize> Zero for Evaluation<V, N> {
    fn zero() -> Self {
        Self::create_blank()
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero() && self.is_constant()
    }
}

impl<V: MathToolbox, const N: usize> One for Evaluation<V, N> {
    fn one() -> Self {
        Self::create_constant(V::one())
    }
}

impl<V: MathToolbox + Display, const N: usize> Display for Evaluation<V, N> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} [", self.value)?;
        for (i, d) in self.derivatives.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, "]")
    }
}

// equality takes the derivatives into account, ordering only the scalar values
impl<V: MathToolbox, const N: usize> PartialEq for Evaluation<V, N> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.derivatives == other.derivatives
    }
}

impl<V: MathToolbox, const N: usize> PartialOrd for Evaluation<V, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.scalar_value().partial_cmp(&other.scalar_value())
    }
}

impl<V: MathToolbox, const N: usize> Neg for Evaluation<V, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Evaluation {
            value: -self.value,
            derivatives: self.derivatives.map(|d| -d),
        }
    }
}

impl<V: MathToolbox, const N: usize> Add for Evaluation<V, N> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Evaluation {
            value: self.value + other.value,
            derivatives: std::array::from_fn(|i| self.derivatives[i] + other.derivatives[i]),
        }
    }
}

impl<V: MathToolbox, const N: usize> Sub for Evaluation<V, N> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Evaluation {
            value: self.value - other.value,
            derivatives: std::array::from_fn(|i| self.derivatives[i] - other.derivatives[i]),
        }
    }
}

impl<V: MathToolbox, const N: usize> Mul for Evaluation<V, N> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Evaluation {
            value: self.value * other.value,
            derivatives: std::array::from_fn(|i| {
                self.derivatives[i] * other.value + self.value * other.derivatives[i]
            }),
        }
    }
}

impl<V: MathToolbox, const N: usize> Div for Evaluation<V, N> {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        let denom = other.value * other.value;
        Evaluation {
            value: self.value / other.value,
            derivatives: std::array::from_fn(|i| {
                (self.derivatives[i] * other.value - self.value * other.derivatives[i]) / denom
            }),
        }
    }
}

impl<V: MathToolbox, const N: usize> AddAssign for Evaluation<V, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<V: MathToolbox, const N: usize> SubAssign for Evaluation<V, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<V: MathToolbox, const N: usize> MulAssign for Evaluation<V, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<V: MathToolbox, const N: usize> DivAssign for Evaluation<V, N> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// plain floats mix in as constants
macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {$(
        impl<V: MathToolbox<Scalar = $t>, const N: usize> PartialEq<$t> for Evaluation<V, N> {
            fn eq(&self, other: &$t) -> bool {
                self.scalar_value() == *other
            }
        }

        impl<V: MathToolbox<Scalar = $t>, const N: usize> PartialOrd<$t> for Evaluation<V, N> {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                self.scalar_value().partial_cmp(other)
            }
        }

        impl<V: MathToolbox<Scalar = $t>, const N: usize> Add<$t> for Evaluation<V, N> {
            type Output = Self;

            fn add(self, rhs: $t) -> Self {
                Evaluation {
                    value: self.value + V::from_scalar(rhs),
                    derivatives: self.derivatives,
                }
            }
        }

        impl<V: MathToolbox<Scalar = $t>, const N: usize> Sub<$t> for Evaluation<V, N> {
            type Output = Self;

            fn sub(self, rhs: $t) -> Self {
                Evaluation {
                    value: self.value - V::from_scalar(rhs),
                    derivatives: self.derivatives,
                }
            }
        }

        impl<V: MathToolbox<Scalar = $t>, const N: usize> Mul<$t> for Evaluation<V, N> {
            type Output = Self;

            fn mul(self, rhs: $t) -> Self {
                let factor = V::from_scalar(rhs);
                Evaluation {
                    value: self.value * factor,
                    derivatives: self.derivatives.map(|d| d * factor),
                }
            }
        }

        impl<V: MathToolbox<Scalar = $t>, const N: usize> Div<$t> for Evaluation<V, N> {
            type Output = Self;

            fn div(self, rhs: $t) -> Self {
                let divisor = V::from_scalar(rhs);
                Evaluation {
                    value: self.value / divisor,
                    derivatives: self.derivatives.map(|d| d / divisor),
                }
            }
        }

        impl<V: MathToolbox<Scalar = $t>, const N: usize> Add<Evaluation<V, N>> for $t {
            type Output = Evaluation<V, N>;

            fn add(self, rhs: Evaluation<V, N>) -> Evaluation<V, N> {
                rhs + self
            }
        }

        impl<V: MathToolbox<Scalar = $t>, const N: usize> Sub<Evaluation<V, N>> for $t {
            type Output = Evaluation<V, N>;

            fn sub(self, rhs: Evaluation<V, N>) -> Evaluation<V, N> {
                -rhs + self
            }
        }

        impl<V: MathToolbox<Scalar = $t>, const N: usize> Mul<Evaluation<V, N>> for $t {
            type Output = Evaluation<V, N>;

            fn mul(self, rhs: Evaluation<V, N>) -> Evaluation<V, N> {
                rhs * self
            }
        }

        impl<V: MathToolbox<Scalar = $t>, const N: usize> Div<Evaluation<V, N>> for $t {
            type Output = Evaluation<V, N>;

            fn div(self, rhs: Evaluation<V, N>) -> Evaluation<V, N> {
                Evaluation::create_constant(V::from_scalar(self)) / rhs
            }
        }
    )*};
}

impl_scalar_ops!(f32, f64);
