/* ************************************************************************ **
** This file is part of fmatvec, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::backtrace::Backtrace;

use num_traits::Zero;

use crate::config::DEFAULT_TILDE_TOL;
use crate::dim::DimKind;
use crate::ops::promoted;
use crate::scalar::{Promote, Promoted, Scalar};
use crate::storage::Layout;
use crate::tags::{Fixed, General};
use crate::traits::VectorLike;
use crate::square::SquareMatrix;
use crate::vector::Vector;

/// `x · y` for any two vectors of equal length, row or column.
pub fn scalar_product<A, B>(x: &A, y: &B) -> Promoted<A::Elem, B::Elem>
where
    A: VectorLike,
    B: VectorLike,
    A::Elem: Promote<B::Elem>,
{
    fmv_assert!(
        Promoted<A::Elem, B::Elem>, x.size() == y.size(),
        "cannot take the scalar product of vectors of length {} and {}", x.size(), y.size(),
    );
    let mut acc = Promoted::<A::Elem, B::Elem>::zero();
    for i in 0..x.size() {
        let (a, b) = promoted(x.ev(i), y.ev(i));
        acc = acc + a * b;
    }
    acc
}

/// `x × y`.  Both vectors must have length 3.
pub fn cross_product<A, B>(x: &A, y: &B) -> Vector<Fixed<3>, Promoted<A::Elem, B::Elem>>
where
    A: VectorLike,
    B: VectorLike,
    A::Elem: Promote<B::Elem>,
{
    fmv_assert!(Promoted<A::Elem, B::Elem>, x.size() == 3, "cross product of a length {} vector", x.size());
    fmv_assert!(Promoted<A::Elem, B::Elem>, y.size() == 3, "cross product of a length {} vector", y.size());

    let x = [0, 1, 2].map(|i| <A::Elem as Promote<B::Elem>>::lhs(x.ev(i)));
    let y = [0, 1, 2].map(|i| <A::Elem as Promote<B::Elem>>::rhs(y.ev(i)));
    Vector::from_array(cross3(&x, &y))
}

/// `a · (x × y)`.  All three vectors must have length 3 and share an element type;
/// their kinds and orientations may differ.
pub fn triple_product<A, X, Y>(a: &A, x: &X, y: &Y) -> A::Elem
where
    A: VectorLike,
    X: VectorLike<Elem = A::Elem>,
    Y: VectorLike<Elem = A::Elem>,
{
    for size in [a.size(), x.size(), y.size()] {
        fmv_assert!(A::Elem, size == 3, "triple product of a length {} vector", size);
    }
    let a = [0, 1, 2].map(|i| a.ev(i));
    let x = [0, 1, 2].map(|i| x.ev(i));
    let y = [0, 1, 2].map(|i| y.ev(i));
    let [c0, c1, c2] = cross3(&x, &y);
    a[0].clone() * c0 + a[1].clone() * c1 + a[2].clone() * c2
}

fn cross3<T: Scalar>(x: &[T; 3], y: &[T; 3]) -> [T; 3] {
    let cross = |i: usize, j: usize| x[i].clone() * y[j].clone() - x[j].clone() * y[i].clone();
    [cross(1, 2), cross(2, 0), cross(0, 1)]
}

//---------------------------------

/// The cross-product matrix of a vector, and back.
///
/// `tilde(&x) * &y == cross_product(&x, &y)`, and `tilde(&tilde(&x)) == x`.
pub trait Tilde {
    type Output;

    fn tilde(&self) -> Self::Output;
}

pub fn tilde<M: Tilde + ?Sized>(m: &M) -> M::Output { m.tilde() }

/// The skew-symmetric matrix of a length-3 vector.
impl<R, T> Tilde for Vector<R, T>
where
    General: Layout<R, Fixed<1>, T> + Layout<R, R, T>,
    R: DimKind,
    T: Scalar,
{
    type Output = SquareMatrix<R, T>;

    fn tilde(&self) -> SquareMatrix<R, T> {
        fmv_assert!(T, self.size() == 3, "tilde of a length {} vector", self.size());
        let x = |i: usize| self.e(i);
        let rows = [
            [T::zero(), -x(2), x(1)],
            [x(2), T::zero(), -x(0)],
            [-x(1), x(0), T::zero()],
        ];
        SquareMatrix::from_fn(3, |i, j| rows[i][j].clone())
    }
}

/// Recover the vector from a skew-symmetric 3x3 matrix, with the default tolerance.
impl<R, T> Tilde for SquareMatrix<R, T>
where
    General: Layout<R, R, T> + Layout<R, Fixed<1>, T>,
    R: DimKind,
    T: Scalar,
{
    type Output = Vector<R, T>;

    fn tilde(&self) -> Vector<R, T> { tilde_with_tol(self, DEFAULT_TILDE_TOL) }
}

/// Inverse tilde.
///
/// In debug builds, the input is checked to be skew-symmetric to within `tol`.  A matrix
/// that fails the check is printed along with a backtrace, and the process aborts.  Release
/// builds read `t[(2, 1)]`, `t[(0, 2)]` and `t[(1, 0)]` and nothing else.
pub fn tilde_with_tol<R, T>(t: &SquareMatrix<R, T>, tol: f64) -> Vector<R, T>
where
    General: Layout<R, R, T> + Layout<R, Fixed<1>, T>,
    R: DimKind,
    T: Scalar,
{
    fmv_assert!(T, t.size() == 3, "inverse tilde of a {}x{} matrix", t.rows(), t.cols());

    let x = [t.e(2, 1), t.e(0, 2), t.e(1, 0)];
    if cfg!(debug_assertions) && !is_skew(t, &x, tol) {
        error!("inverse tilde of a matrix that is not skew-symmetric (tol = {:e})", tol);
        eprintln!(
            "fmatvec::tilde called with a matrix that is not skew-symmetric:\n{:#}\n{}",
            t, Backtrace::force_capture(),
        );
        std::process::abort();
    }
    Vector::from_fn(3, |i| x[i].clone())
}

fn is_skew<R, T>(t: &SquareMatrix<R, T>, x: &[T; 3], tol: f64) -> bool
where General: Layout<R, R, T>, R: DimKind, T: Scalar,
{
    let small = |a: T| a.modulus() < tol;
    small(t.e(0, 0)) && small(t.e(1, 1)) && small(t.e(2, 2))
        && small(x[0].clone() + t.e(1, 2))
        && small(x[1].clone() + t.e(2, 0))
        && small(x[2].clone() + t.e(0, 1))
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::{cross_product, scalar_product, tilde, tilde_with_tol, triple_product};

    #[test]
    fn cross_and_triple() {
        let a = ColVec3::<f64>::from_array([1.0, 0.0, 0.0]);
        let b = ColVec3::<f64>::from_array([0.0, 1.0, 0.0]);
        let c = ColVec3::<f64>::from_array([0.0, 0.0, 1.0]);

        assert_eq!(cross_product(&a, &b), c);
        assert_eq!(cross_product(&b, &a).to_vec(), vec![0.0, 0.0, -1.0]);
        assert_eq!(triple_product(&a, &b, &c), 1.0);
        assert_eq!(triple_product(&a, &c, &b), -1.0);

        // mixed kinds and scalars
        let v = ColVec::<i32>::from_vec(vec![1, 2, 3]).unwrap();
        let w: ColVec3<f64> = cross_product(&v, &ColVec3::<f64>::from_array([4.0, 5.0, 6.0]));
        assert_eq!(w.to_vec(), vec![-3.0, 6.0, -3.0]);

        // triple product over a fixed vector, a runtime vector, and a row of a matrix
        let m = Mat::<i32>::from_rows(&[[0, 0, 0], [0, 0, 1]]).unwrap();
        let x = ColVec3::<i32>::from_array([1, 0, 0]);
        let y = RowVec::<i32>::from_vec(vec![0, 1, 0]).unwrap();
        assert_eq!(triple_product(&m.row(1), &x, &y), 1);
        assert_eq!(triple_product(&x, &m.row(1), &y), -1);
    }

    #[test]
    fn scalar_products() {
        let x = ColVec::<i32>::from_vec(vec![1, 2, 3]).unwrap();
        let y = RowVec::<f64>::from_vec(vec![0.5, 0.5, 1.0]).unwrap();
        assert_eq!(scalar_product(&x, &y), 4.5);

        let m = Mat::<i32>::from_rows(&[[1, 2], [3, 4]]).unwrap();
        assert_eq!(scalar_product(&m.col(1), &m.row(1)), 2 * 3 + 4 * 4);
    }

    #[test]
    fn tilde_round_trip() {
        let x = ColVec3::<f64>::from_array([0.3, -1.2, 2.5]);
        let t = tilde(&x);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(t.e(i, j), -t.e(j, i));
            }
        }
        assert_eq!(tilde(&t), x);
        assert_eq!(tilde_with_tol(&t, 1e-12), x);

        let y = ColVec3::<f64>::from_array([1.0, 2.0, -0.5]);
        assert_eq!(&t * &y, cross_product(&x, &y));
    }
}
