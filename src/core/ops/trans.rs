use crate::dim::DimKind;
use crate::scalar::Scalar;
use crate::shape::DenseShape;
use crate::storage::Layout;
use crate::tags::{Diagonal, Fixed, General, Rotation, Sparse, Symmetric, SymmetricSparse, Var};
use crate::matrix::Matrix;
use crate::square::SquareMatrix;
use crate::vector::{RowVector, Vector};
use crate::view::{MatrixMut, MatrixRef};

/// An owned transpose.
///
/// For a transpose that doesn't copy, see [`Matrix::t`] and [`MatrixRef::t`].
pub trait Transpose {
    type Output;

    fn transposed(&self) -> Self::Output;
}

pub fn trans<M: Transpose + ?Sized>(m: &M) -> M::Output { m.transposed() }

impl<R, C, T> Transpose for Matrix<General, R, C, T>
where
    General: Layout<R, C, T> + Layout<C, R, T>,
    R: DimKind,
    C: DimKind,
    T: Scalar,
{
    type Output = Matrix<General, C, R, T>;

    fn transposed(&self) -> Self::Output {
        Matrix::from_fn(self.cols(), self.rows(), |i, j| self.e(j, i))
    }
}

impl<R, T> Transpose for Matrix<Rotation, R, R, T>
where Rotation: Layout<R, R, T>, R: DimKind, T: Scalar,
{
    type Output = Self;

    fn transposed(&self) -> Self {
        Matrix::from_fn(self.cols(), self.rows(), |i, j| self.e(j, i))
    }
}

// symmetric under transposition
impl<R, C, T> Transpose for Matrix<Symmetric, R, C, T>
where Symmetric: Layout<R, C, T>, R: DimKind, C: DimKind, T: Scalar,
{
    type Output = Self;

    fn transposed(&self) -> Self { self.clone() }
}

impl<R, C, T> Transpose for Matrix<Diagonal, R, C, T>
where Diagonal: Layout<R, C, T>, R: DimKind, C: DimKind, T: Scalar,
{
    type Output = Self;

    fn transposed(&self) -> Self { self.clone() }
}

impl<T: Scalar> Transpose for Matrix<SymmetricSparse, Var, Var, T> {
    type Output = Self;

    fn transposed(&self) -> Self { self.clone() }
}

impl<T: Scalar> Transpose for Matrix<Sparse, Var, Var, T> {
    type Output = Self;

    fn transposed(&self) -> Self { self.transpose() }
}

impl<R, T> Transpose for Vector<R, T>
where
    General: Layout<R, Fixed<1>, T> + Layout<Fixed<1>, R, T>,
    R: DimKind,
    T: Scalar,
{
    type Output = RowVector<R, T>;

    fn transposed(&self) -> Self::Output { self.trans() }
}

impl<C, T> Transpose for RowVector<C, T>
where
    General: Layout<Fixed<1>, C, T> + Layout<C, Fixed<1>, T>,
    C: DimKind,
    T: Scalar,
{
    type Output = Vector<C, T>;

    fn transposed(&self) -> Self::Output { self.trans() }
}

impl<R, T> Transpose for SquareMatrix<R, T>
where General: Layout<R, R, T>, R: DimKind, T: Scalar,
{
    type Output = Self;

    fn transposed(&self) -> Self {
        SquareMatrix::from_fn(self.size(), |i, j| self.e(j, i))
    }
}

impl<'a, S, T> Transpose for MatrixRef<'a, S, T>
where S: Layout<Var, Var, T> + DenseShape, T: Scalar,
{
    type Output = Matrix<S, Var, Var, T>;

    fn transposed(&self) -> Self::Output { self.t().copy() }
}

impl<'a, S, T> Transpose for MatrixMut<'a, S, T>
where S: Layout<Var, Var, T> + DenseShape, T: Scalar,
{
    type Output = Matrix<S, Var, Var, T>;

    fn transposed(&self) -> Self::Output { self.rb().t().copy() }
}
