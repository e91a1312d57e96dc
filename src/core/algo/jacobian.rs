//! Congruence products that are known to be symmetric.
//!
//! Each of these fills only the stored half of its result.

use crate::dim::DimKind;
use crate::ops::{mult_new, MultKernel};
use crate::scalar::Scalar;
use crate::shape::SymmetricShape;
use crate::storage::Layout;
use crate::tags::{General, Symmetric, Var};
use crate::traits::{MatrixBase, MatrixFill};
use crate::matrix::Matrix;

type Owned<K> = <K as DimKind>::Owned;

/// `Aᵗ·A`.
pub fn jtj<A, T>(a: &A) -> Matrix<Symmetric, Owned<A::Cols>, Owned<A::Cols>, T>
where
    A: MatrixBase<Elem = T>,
    T: Scalar,
    Symmetric: Layout<Owned<A::Cols>, Owned<A::Cols>, T>,
{
    let n = a.cols();
    Matrix::from_fn(n, n, |i, k| column_dot(a, i, a, k))
}

/// `Aᵗ·B·A`, for a symmetric `B` (dense, a view, or sparse).
pub fn jtmj<B, A, T>(b: &B, a: &A) -> Matrix<Symmetric, Owned<A::Cols>, Owned<A::Cols>, T>
where
    B: MultKernel<A, Product = T>,
    B::Shape: SymmetricShape,
    A: MatrixBase<Elem = T>,
    T: Scalar,
    Symmetric: Layout<Owned<A::Cols>, Owned<A::Cols>, T>,
{
    let c: Matrix<General, Var, Var, T> = mult_new(b, a);
    let n = a.cols();
    Matrix::from_fn(n, n, |i, k| column_dot(a, i, &c, k))
}

/// `A·B·Aᵗ`, for a symmetric `B`.
pub fn jmjt<A, B, T>(a: &A, b: &B) -> Matrix<Symmetric, Owned<A::Rows>, Owned<A::Rows>, T>
where
    A: MatrixBase<Elem = T> + MultKernel<B, Product = T>,
    B: MatrixBase<Elem = T>,
    B::Shape: SymmetricShape,
    T: Scalar,
    Symmetric: Layout<Owned<A::Rows>, Owned<A::Rows>, T>,
{
    let c: Matrix<General, Var, Var, T> = mult_new(a, b);
    let n = a.rows();
    let inner = a.cols();
    let mut s = Matrix::noinit(n, n);
    // stored positions are (i, k) with k <= i
    s.fill_stored(|i, k| {
        let mut acc = T::zero();
        for j in 0..inner {
            acc = acc + c.e(i, j) * a.e(k, j);
        }
        acc
    });
    s
}

/// Column `i` of `x` dotted with column `k` of `y`.
fn column_dot<X, Y, T>(x: &X, i: usize, y: &Y, k: usize) -> T
where
    X: MatrixBase<Elem = T>,
    Y: MatrixBase<Elem = T>,
    T: Scalar,
{
    let mut acc = T::zero();
    for j in 0..x.rows() {
        acc = acc + x.e(j, i) * y.e(j, k);
    }
    acc
}
