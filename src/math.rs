//! Elementary functions on [`Evaluation`]s.
//!
//! Every unary function `f` maps `(v, d)` to `(f(v), f'(v) * d)`. Branches
//! (`abs`, `min`, `max` and the zero base guard of the power functions) look
//! at the innermost scalar value, so nested evaluations take the same branch
//! as a flat one would.
//!
//! Nothing here validates its input: values outside a function's domain
//! produce NaN or infinities, which then propagate. The only special case is
//! a zero base in the power functions.

use num_traits::{FloatConst, Zero};

use crate::evaluation::Evaluation;
use crate::toolbox::MathToolbox;

// apply the chain rule given f(v) and f'(v)
#[inline]
fn chain<V: MathToolbox, const N: usize>(
    x: &Evaluation<V, N>,
    value: V,
    df_dx: V,
) -> Evaluation<V, N> {
    Evaluation::new(value, std::array::from_fn(|i| df_dx * x.derivatives[i]))
}

#[inline]
fn is_zero_base<V: MathToolbox>(base: V) -> bool {
    base.scalar_value().is_zero()
}

pub fn abs<V: MathToolbox, const N: usize>(x: Evaluation<V, N>) -> Evaluation<V, N> {
    if x.scalar_value() < V::Scalar::zero() {
        -x
    } else {
        x
    }
}

/// The smaller operand, derivatives included. Ties go to `x2`.
pub fn min<V: MathToolbox, const N: usize>(
    x1: Evaluation<V, N>,
    x2: Evaluation<V, N>,
) -> Evaluation<V, N> {
    if x1.scalar_value() < x2.scalar_value() {
        x1
    } else {
        x2
    }
}

/// Minimum of a constant and an evaluation. If the constant wins the result
/// has no sensitivity to any variable.
pub fn min_scalar<V: MathToolbox, const N: usize>(
    x1: V,
    x2: Evaluation<V, N>,
) -> Evaluation<V, N> {
    if x1.scalar_value() < x2.scalar_value() {
        Evaluation::create_constant(x1)
    } else {
        x2
    }
}

pub fn min_with_scalar<V: MathToolbox, const N: usize>(
    x1: Evaluation<V, N>,
    x2: V,
) -> Evaluation<V, N> {
    min_scalar(x2, x1)
}

/// The larger operand, derivatives included. Ties go to `x2`.
pub fn max<V: MathToolbox, const N: usize>(
    x1: Evaluation<V, N>,
    x2: Evaluation<V, N>,
) -> Evaluation<V, N> {
    if x1.scalar_value() > x2.scalar_value() {
        x1
    } else {
        x2
    }
}

pub fn max_scalar<V: MathToolbox, const N: usize>(
    x1: V,
    x2: Evaluation<V, N>,
) -> Evaluation<V, N> {
    if x1.scalar_value() > x2.scalar_value() {
        Evaluation::create_constant(x1)
    } else {
        x2
    }
}

pub fn max_with_scalar<V: MathToolbox, const N: usize>(
    x1: Evaluation<V, N>,
    x2: V,
) -> Evaluation<V, N> {
    max_scalar(x2, x1)
}

pub fn sin<V: MathToolbox, const N: usize>(x: Evaluation<V, N>) -> Evaluation<V, N> {
    chain(&x, x.value.sin(), x.value.cos())
}

pub fn cos<V: MathToolbox, const N: usize>(x: Evaluation<V, N>) -> Evaluation<V, N> {
    chain(&x, x.value.cos(), -x.value.sin())
}

pub fn tan<V: MathToolbox, const N: usize>(x: Evaluation<V, N>) -> Evaluation<V, N> {
    let tmp = x.value.tan();
    chain(&x, tmp, V::one() + tmp * tmp)
}

pub fn asin<V: MathToolbox, const N: usize>(x: Evaluation<V, N>) -> Evaluation<V, N> {
    let df_dx = V::one() / (V::one() - x.value * x.value).sqrt();
    chain(&x, x.value.asin(), df_dx)
}

pub fn acos<V: MathToolbox, const N: usize>(x: Evaluation<V, N>) -> Evaluation<V, N> {
    let df_dx = -(V::one() / (V::one() - x.value * x.value).sqrt());
    chain(&x, x.value.acos(), df_dx)
}

pub fn atan<V: MathToolbox, const N: usize>(x: Evaluation<V, N>) -> Evaluation<V, N> {
    let df_dx = V::one() / (V::one() + x.value * x.value);
    chain(&x, x.value.atan(), df_dx)
}

/// Four quadrant arc tangent of `x / y`. `y == 0` is not special-cased.
pub fn atan2<V: MathToolbox, const N: usize>(
    x: Evaluation<V, N>,
    y: Evaluation<V, N>,
) -> Evaluation<V, N> {
    let y_sq = y.value * y.value;
    let alpha = V::one() / (V::one() + (x.value * x.value) / y_sq);
    Evaluation::new(
        x.value.atan2(y.value),
        std::array::from_fn(|i| {
            alpha / y_sq * (x.derivatives[i] * y.value - x.value * y.derivatives[i])
        }),
    )
}

pub fn exp<V: MathToolbox, const N: usize>(x: Evaluation<V, N>) -> Evaluation<V, N> {
    let exp_x = x.value.exp();
    chain(&x, exp_x, exp_x)
}

/// Natural logarithm.
pub fn log<V: MathToolbox, const N: usize>(x: Evaluation<V, N>) -> Evaluation<V, N> {
    chain(&x, x.value.log(), V::one() / x.value)
}

pub fn log10<V: MathToolbox, const N: usize>(x: Evaluation<V, N>) -> Evaluation<V, N> {
    let ln_10 = V::from_scalar(V::Scalar::LN_10());
    chain(&x, x.value.log10(), V::one() / (x.value * ln_10))
}

pub fn sqrt<V: MathToolbox, const N: usize>(x: Evaluation<V, N>) -> Evaluation<V, N> {
    let sqrt_x = x.value.sqrt();
    chain(&x, sqrt_x, V::one() / (sqrt_x + sqrt_x))
}

/// `base^exp` for a constant exponent.
///
/// A zero base yields the all-zero evaluation whatever the exponent; the
/// general formula divides by the base.
pub fn pow_const_exp<V: MathToolbox, const N: usize>(
    base: Evaluation<V, N>,
    exp: V,
) -> Evaluation<V, N> {
    if is_zero_base(base.value) {
        return Evaluation::create_blank();
    }

    let pow_x = base.value.pow(exp);
    chain(&base, pow_x, pow_x / base.value * exp)
}

/// `base^exp` for a constant base, computed as `exp(ln(base) * exp)`.
pub fn pow_const_base<V: MathToolbox, const N: usize>(
    base: V,
    exp: Evaluation<V, N>,
) -> Evaluation<V, N> {
    if is_zero_base(base) {
        return Evaluation::create_blank();
    }

    let ln_base = base.log();
    let value = (ln_base * exp.value).exp();
    chain(&exp, value, ln_base * value)
}

/// `base^exp` where both operands carry derivatives.
///
/// Noticeably more arithmetic per variable than the other two forms; prefer
/// those when either operand is constant.
pub fn pow<V: MathToolbox, const N: usize>(
    base: Evaluation<V, N>,
    exp: Evaluation<V, N>,
) -> Evaluation<V, N> {
    if is_zero_base(base.value) {
        return Evaluation::create_blank();
    }

    let f = base.value;
    let g = exp.value;
    let value_pow = f.pow(g);
    let log_f = f.log();
    Evaluation::new(
        value_pow,
        std::array::from_fn(|i| {
            (g * base.derivatives[i] / f + log_f * exp.derivatives[i]) * value_pow
        }),
    )
}
