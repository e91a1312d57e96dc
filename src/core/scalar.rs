//! Element types and the table of mixed-type results.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use num_complex::Complex64;
use num_traits::{One, Zero};

/// An element type of a matrix.
pub trait Scalar
    : 'static + Clone + PartialEq + Debug + Display + FromStr
    + Zero + One
    + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Check contracts even in release builds.
    ///
    /// Types that set this have `fmv_assert!` failures unwind with a
    /// [`ContractViolation`](crate::ContractViolation) payload in every build profile.
    const ALWAYS_CHECK: bool = false;

    /// Absolute value, as used by norms and tolerance checks.
    fn modulus(&self) -> f64;
}

impl Scalar for f64 { fn modulus(&self) -> f64 { self.abs() } }
impl Scalar for f32 { fn modulus(&self) -> f64 { f64::from(self.abs()) } }
impl Scalar for i32 { fn modulus(&self) -> f64 { f64::from(*self).abs() } }
impl Scalar for i64 { fn modulus(&self) -> f64 { (*self as f64).abs() } }
impl Scalar for Complex64 { fn modulus(&self) -> f64 { self.norm() } }

/// The result type of a binary operation between `Self` and `Rhs` elements.
///
/// A pair without an impl cannot be combined; this is a compile error rather than a
/// runtime one.  Use [`operator_result!`](crate::operator_result) to register pairs.
pub trait Promote<Rhs>: Sized {
    type Output: Scalar;

    fn lhs(self) -> Self::Output;
    fn rhs(rhs: Rhs) -> Self::Output;
}

pub type Promoted<A, B> = <A as Promote<B>>::Output;

/// Register the result type of a pair of element types.
///
/// `operator_result!(T)` registers `T` with itself.  The two-type form,
/// `operator_result!(A, B => R; lift_a, lift_b)`, registers both orders, converting each
/// side into `R` with the given closure.
#[macro_export]
macro_rules! operator_result {
    ($T:ty) => {
        impl $crate::scalar::Promote<$T> for $T {
            type Output = $T;

            #[inline(always)] fn lhs(self) -> $T { self }
            #[inline(always)] fn rhs(rhs: $T) -> $T { rhs }
        }
    };
    ($A:ty, $B:ty => $R:ty; $lift_a:expr, $lift_b:expr) => {
        impl $crate::scalar::Promote<$B> for $A {
            type Output = $R;

            #[inline] fn lhs(self) -> $R { ($lift_a)(self) }
            #[inline] fn rhs(rhs: $B) -> $R { ($lift_b)(rhs) }
        }

        impl $crate::scalar::Promote<$A> for $B {
            type Output = $R;

            #[inline] fn lhs(self) -> $R { ($lift_b)(self) }
            #[inline] fn rhs(rhs: $A) -> $R { ($lift_a)(rhs) }
        }
    };
}

operator_result!(f32);
operator_result!(f64);
operator_result!(i32);
operator_result!(i64);
operator_result!(Complex64);

operator_result!(i32, f64 => f64; |a: i32| f64::from(a), |b: f64| b);
operator_result!(i64, f64 => f64; |a: i64| a as f64, |b: f64| b);
operator_result!(f32, f64 => f64; |a: f32| f64::from(a), |b: f64| b);
operator_result!(i32, i64 => i64; |a: i32| i64::from(a), |b: i64| b);
operator_result!(f64, Complex64 => Complex64; |a: f64| Complex64::new(a, 0.0), |b: Complex64| b);
operator_result!(i32, Complex64 => Complex64; |a: i32| Complex64::new(f64::from(a), 0.0), |b: Complex64| b);

#[cfg(test)]
mod tests {
    use super::*;

    fn promote<A: Promote<B>, B>(a: A, b: B) -> (Promoted<A, B>, Promoted<A, B>) {
        (a.lhs(), A::rhs(b))
    }

    #[test]
    fn mixed_pairs() {
        let (a, b): (f64, f64) = promote(2i32, 0.5f64);
        assert_eq!((a, b), (2.0, 0.5));

        let (a, b): (f64, f64) = promote(0.5f64, 2i32);
        assert_eq!((a, b), (0.5, 2.0));

        let (a, b): (i64, i64) = promote(3i32, 4i64);
        assert_eq!((a, b), (3, 4));

        let (a, b): (Complex64, Complex64) = promote(1.5f64, Complex64::new(0.0, 1.0));
        assert_eq!(a, Complex64::new(1.5, 0.0));
        assert_eq!(b, Complex64::new(0.0, 1.0));
    }

    #[test]
    fn modulus() {
        assert_eq!((-3i32).modulus(), 3.0);
        assert_eq!((-2.5f32).modulus(), 2.5);
        assert_eq!(Complex64::new(3.0, 4.0).modulus(), 5.0);
    }
}
