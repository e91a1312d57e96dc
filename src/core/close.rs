//! `assert_close!` support.
//!
//! Comparison is elementwise over every position, including the positions that a
//! shape synthesizes.  Sizes must match exactly.

use fmatvec_assert_close::{CheckClose, CheckCloseError, CloseTol};

use crate::dim::DimKind;
use crate::scalar::Scalar;
use crate::shape::DenseShape;
use crate::storage::Layout;
use crate::tags::{Fixed, General, Sparse, SymmetricSparse, Var};
use crate::traits::MatrixBase;
use crate::matrix::Matrix;
use crate::square::SquareMatrix;
use crate::vector::{RowVector, Vector};
use crate::view::{MatrixMut, MatrixRef};

fn check_elements<A, B, T>(a: &A, b: &B, tol: CloseTol) -> Result<(), CheckCloseError<T::Scalar>>
where
    A: MatrixBase<Elem = T> + ?Sized,
    B: MatrixBase<Elem = T> + ?Sized,
    T: Scalar + CheckClose,
{
    assert_eq!(
        (a.rows(), a.cols()), (b.rows(), b.cols()),
        "check_close on matrices of different sizes",
    );
    for i in 0..a.rows() {
        for j in 0..a.cols() {
            a.e(i, j).check_close(&b.e(i, j), tol).map_err(|e| e.within(&[i, j]))?;
        }
    }
    Ok(())
}

impl<S1, R1, C1, S2, R2, C2, T> CheckClose<Matrix<S2, R2, C2, T>> for Matrix<S1, R1, C1, T>
where
    S1: Layout<R1, C1, T> + DenseShape, R1: DimKind, C1: DimKind,
    S2: Layout<R2, C2, T> + DenseShape, R2: DimKind, C2: DimKind,
    T: Scalar + CheckClose,
{
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Matrix<S2, R2, C2, T>, tol: CloseTol) -> Result<(), CheckCloseError<T::Scalar>>
    { check_elements(self, other, tol) }
}

impl<T: Scalar + CheckClose> CheckClose for Matrix<Sparse, Var, Var, T> {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: CloseTol) -> Result<(), CheckCloseError<T::Scalar>>
    { check_elements(&self.to_dense(), &other.to_dense(), tol) }
}

impl<T: Scalar + CheckClose> CheckClose for Matrix<SymmetricSparse, Var, Var, T> {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: CloseTol) -> Result<(), CheckCloseError<T::Scalar>>
    { check_elements(&self.to_dense(), &other.to_dense(), tol) }
}

macro_rules! impl_check_close_self {
    ($([$($generics:tt)*] $Type:ty where [$($bound:tt)*];)*) => {$(
        impl<$($generics)*> CheckClose for $Type
        where $($bound)*
        {
            type Scalar = T::Scalar;

            fn check_close(&self, other: &Self, tol: CloseTol) -> Result<(), CheckCloseError<T::Scalar>>
            { check_elements(self, other, tol) }
        }
    )*};
}

impl_check_close_self!{
    ['a, S, T] MatrixRef<'a, S, T> where [S: DenseShape, T: Scalar + CheckClose,];
    ['a, S, T] MatrixMut<'a, S, T> where [S: DenseShape, T: Scalar + CheckClose,];
    [R, T] Vector<R, T> where [General: Layout<R, Fixed<1>, T>, R: DimKind, T: Scalar + CheckClose,];
    [C, T] RowVector<C, T> where [General: Layout<Fixed<1>, C, T>, C: DimKind, T: Scalar + CheckClose,];
    [R, T] SquareMatrix<R, T> where [General: Layout<R, R, T>, R: DimKind, T: Scalar + CheckClose,];
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn shapes_compare_by_value() {
        let s = SymMat::<f64>::from_rows(&[[1.0, 2.0], [2.0, 3.0]]).unwrap();
        let g = Mat::<f64>::from_rows(&[[1.0, 2.0 + 1e-14], [2.0, 3.0]]).unwrap();
        assert_close!(abs=1e-12, s.as_view(), s.as_view());
        assert_close!(abs=1e-12, s, g);

        let v = ColVec3::<f64>::from_array([1.0, 2.0, 3.0]);
        assert_close!(rel=1e-10, v.clone(), v * (1.0 + 1e-12));

        let sp = SparseMat::<f64>::eye(3);
        assert_close!(sp.clone(), sp);
    }

    #[test]
    #[should_panic(expected = "failed at [1, 0]")]
    fn synthesized_elements_count() {
        let s = SymMat::<f64>::from_rows(&[[1.0, 2.0], [2.0, 3.0]]).unwrap();
        let g = Mat::<f64>::from_rows(&[[1.0, 2.0], [2.5, 3.0]]).unwrap();
        assert_close!(abs=1e-3, s, g);
    }

    #[test]
    #[should_panic(expected = "different sizes")]
    fn sizes_must_match() {
        assert_close!(Mat::<f64>::new(2, 2), Mat::<f64>::new(2, 3));
    }
}
