/* ************************************************************************ **
** This file is part of fmatvec, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Approximate equality of floating point data, reported with the position of the
//! first offending element.

extern crate failure;
extern crate num_complex;

use std::fmt;

use failure::Fail;

use num_complex::Complex64;

pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

/// Assert that two values are close, elementwise.
///
/// ```text
/// assert_close!(a, b);
/// assert_close!(abs=1e-12, a, b);
/// assert_close!(rel=1e-8, abs=1e-12, a, b, "after {} steps", n);
/// ```
///
/// Omitted tolerances are `rel = DEFAULT_NONZERO_TOL` and `abs = 0`.
#[macro_export]
macro_rules! assert_close {
    (rel=$rel:expr, abs=$abs:expr, $($rest:tt)+) => {
        $crate::__assert_close_with!{$crate::CloseTol { rel: $rel, abs: $abs }; $($rest)+}
    };
    (abs=$abs:expr, rel=$rel:expr, $($rest:tt)+) => {
        $crate::__assert_close_with!{$crate::CloseTol { rel: $rel, abs: $abs }; $($rest)+}
    };
    (abs=$abs:expr, $($rest:tt)+) => {
        $crate::__assert_close_with!{$crate::CloseTol { abs: $abs, ..$crate::CloseTol::default() }; $($rest)+}
    };
    (rel=$rel:expr, $($rest:tt)+) => {
        $crate::__assert_close_with!{$crate::CloseTol { rel: $rel, ..$crate::CloseTol::default() }; $($rest)+}
    };
    ($($rest:tt)+) => {
        $crate::__assert_close_with!{$crate::CloseTol::default(); $($rest)+}
    };
}

#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_close_with {
    ($tol:expr; $a:expr, $b:expr $(,)?) => {
        $crate::__assert_close_with!{$tol; $a, $b, "not nearly equal!"}
    };
    ($tol:expr; $a:expr, $b:expr, $($fmt:tt)+) => {{
        let tol: $crate::CloseTol = $tol;
        // match keeps temporaries in the operands alive for the whole comparison
        match ($a, $b) {
            (a, b) => {
                if let Err(e) = $crate::CheckClose::check_close(&a, &b, tol) {
                    panic!(
                        "{} ({})\n left: {:?}\nright: {:?}\n{}",
                        format!($($fmt)+), tol, a, b, e,
                    );
                }
            }
        }
    }};
}

/// Bounds on the difference of two values.
///
/// Two values are close when their difference is below `abs`, or below `rel` times
/// the larger of their magnitudes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CloseTol {
    pub abs: f64,
    pub rel: f64,
}

impl Default for CloseTol {
    fn default() -> Self { CloseTol { abs: 0.0, rel: DEFAULT_NONZERO_TOL } }
}

impl fmt::Display for CloseTol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tolerances: rel={}, abs={}", self.rel, self.abs)
    }
}

impl CloseTol {
    fn admits(&self, diff: f64, a: f64, b: f64) -> bool {
        assert!(self.rel >= 0.0 && self.abs >= 0.0, "negative tolerance: {:?}", self);
        diff < self.abs.max(self.rel * a.max(b))
    }
}

#[doc(hidden)]
#[inline]
pub fn __is_close(a: f64, b: f64, tol: CloseTol) -> bool {
    // same-signed infinities
    if a == b { return true; }
    if a.is_infinite() || b.is_infinite() { return false; }

    // NaN falls through and compares false
    tol.admits((a - b).abs(), a.abs(), b.abs())
}

#[doc(hidden)]
#[inline]
pub fn __is_close_complex(a: Complex64, b: Complex64, tol: CloseTol) -> bool {
    if a == b { return true; }
    if !(a.is_finite() && b.is_finite()) { return false; }
    tol.admits((a - b).norm(), a.norm(), b.norm())
}

/// The first pair of elements found to differ.
///
/// `index` lists the position of that pair from the outermost container inwards;
/// a matrix contributes its `(row, col)` as two entries.
#[derive(Debug)]
pub struct CheckCloseError<T = f64> {
    pub values: (T, T),
    pub tol: CloseTol,
    pub index: Vec<usize>,
}

impl<T: fmt::Debug + Send + Sync + 'static> Fail for CheckCloseError<T> {}

impl<T> CheckCloseError<T> {
    /// Record the position of the failing element within an enclosing container.
    pub fn within(mut self, outer: &[usize]) -> Self {
        self.index.splice(0..0, outer.iter().cloned());
        self
    }
}

impl<T: fmt::Debug> fmt::Display for CheckCloseError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, right) = &self.values;
        write!(f, "failed at {:?}:\n  left: {:?}\n right: {:?}\n   {}", self.index, left, right, self.tol)
    }
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    type Scalar;

    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: CloseTol) -> Result<(), CheckCloseError<Self::Scalar>>;
}

macro_rules! impl_leaf {
    ($($T:ty => $is_close:path,)*) => {$(
        impl CheckClose for $T {
            type Scalar = $T;

            #[inline]
            fn check_close(&self, other: &Self, tol: CloseTol) -> Result<(), CheckCloseError<$T>> {
                if $is_close((*self).into(), (*other).into(), tol) {
                    return Ok(());
                }
                Err(CheckCloseError { values: (*self, *other), tol, index: vec![] })
            }
        }
    )*};
}

impl_leaf! {
    f64 => __is_close,
    f32 => __is_close,
    Complex64 => __is_close_complex,
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: CloseTol) -> Result<(), CheckCloseError<Self::Scalar>>
    { (**self).check_close(*other, tol) }
}

fn check_seq<T: CheckClose>(a: &[T], b: &[T], tol: CloseTol) -> Result<(), CheckCloseError<T::Scalar>> {
    assert_eq!(a.len(), b.len(), "check_close on sequences of different lengths");
    for (k, (a, b)) in a.iter().zip(b).enumerate() {
        a.check_close(b, tol).map_err(|e| e.within(&[k]))?;
    }
    Ok(())
}

macro_rules! impl_seq {
    ($([$($gen:tt)*] $Lhs:ty, $Rhs:ty;)*) => {$(
        impl<T: CheckClose, $($gen)*> CheckClose<$Rhs> for $Lhs {
            type Scalar = T::Scalar;

            fn check_close(&self, other: &$Rhs, tol: CloseTol) -> Result<(), CheckCloseError<T::Scalar>>
            { check_seq(&self[..], &other[..], tol) }
        }
    )*};
}

impl_seq! {
    [] [T], [T];
    [] Vec<T>, Vec<T>;
    [] Vec<T>, [T];
    [] [T], Vec<T>;
    [const N: usize] [T; N], [T; N];
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use num_complex::Complex64;
    use crate::{CheckClose, CloseTol};

    #[test]
    fn macro_forms() {
        assert_close!(1.0, 1.0);
        assert_close!(abs=1e-8, 1.0, 1.0);
        assert_close!(rel=1e-8, 1.0, 1.0);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0);
        assert_close!(abs=1e-8, rel=1e-8, 1.0, 1.0,);
        assert_close!(1.0, 1.0,);
        assert_close!(abs=1e-8, 1.0, 1.0, "step {}", 3);
        debug_assert_close!(abs=1e-8, 1.0, 1.0,);
    }

    #[test]
    fn method_chains_parse_as_operands() {
        #[derive(Debug)] struct S;
        impl S { fn x(self) -> S { self } }
        impl crate::CheckClose for S {
            type Scalar = f64;
            fn check_close(&self, _: &S, _: crate::CloseTol) -> Result<(), crate::CheckCloseError<f64>> { Ok(()) }
        }
        assert_close!(
            abs=1e-10,
            S.x().x(),
            S.x().x(),
            "{}", "hello",
        );
    }

    #[test]
    fn other_leaves() {
        assert_close!(rel=1e-6, 1.0f32, 1.0000001f32);
        assert_close!(abs=1e-12, Complex64::new(1.0, 2.0), Complex64::new(1.0, 2.0 + 1e-13));
        assert_close!([[1.0, 2.0], [3.0, 4.0]], [[1.0, 2.0], [3.0, 4.0 + 1e-12]]);
    }

    #[test]
    fn operands_may_borrow_temporaries() {
        assert_close!(vec![1.0, 2.0].as_slice(), vec![1.0, 2.0 + 1e-12].as_slice());
        assert_close!(abs=1e-8, &vec![3.0][..], &[3.0][..], "{}", String::from("x").len());
    }

    #[test]
    fn error_is_a_failure() {
        let err = 1.0f64.check_close(&2.0, CloseTol::default()).unwrap_err();
        let err: failure::Error = err.into();
        assert!(err.to_string().contains("left: 1.0"));
    }

    #[test]
    fn infinities_and_nan() {
        let tol = CloseTol { abs: 1.0, rel: 1.0 };
        assert!(std::f64::INFINITY.check_close(&std::f64::INFINITY, tol).is_ok());
        assert!(std::f64::INFINITY.check_close(&std::f64::NEG_INFINITY, tol).is_err());
        assert!(std::f64::NAN.check_close(&std::f64::NAN, tol).is_err());
    }

    #[test]
    fn error_reports_position() {
        let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let b = vec![vec![1.0, 2.0], vec![3.5, 4.0]];
        let err = a.check_close(&b, CloseTol::default()).unwrap_err();
        assert_eq!(err.index, vec![1, 0]);
        assert_eq!(err.values, (3.0, 3.5));
        assert!(err.to_string().starts_with("failed at [1, 0]:"));
    }

    #[test]
    #[should_panic(expected = "rel=0, abs=0")]
    fn not_close() {
        assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }

    #[test]
    #[should_panic]
    fn complex_not_close() {
        assert_close!(abs=1e-3, Complex64::new(0.0, 1.0), Complex64::new(0.0, -1.0));
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic)]
    fn debug_not_close() {
        debug_assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }
}
