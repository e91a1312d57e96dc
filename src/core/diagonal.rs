use crate::scalar::Scalar;
use crate::storage::{Layout, Store};
use crate::tags::{Diagonal, Fixed, Var};
use crate::matrix::Matrix;

impl<T: Scalar> Matrix<Diagonal, Var, Var, T> {
    pub fn from_diag(diag: Vec<T>) -> Self {
        let mut m = Self::noinit(diag.len(), diag.len());
        m.as_mut_slice().clone_from_slice(&diag);
        m
    }
}

impl<T: Scalar, const N: usize> Matrix<Diagonal, Fixed<N>, Fixed<N>, T> {
    pub fn from_diag_array(diag: [T; N]) -> Self {
        let mut m = Self::noinit(N, N);
        m.as_mut_slice().clone_from_slice(&diag);
        m
    }
}

impl<R, C, T> Matrix<Diagonal, R, C, T>
where Diagonal: Layout<R, C, T>, R: crate::dim::DimKind, C: crate::dim::DimKind, T: Scalar,
{
    /// The stored diagonal.
    #[inline(always)]
    pub fn diag(&self) -> &[T] { self.store.as_slice() }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn diagonal_synthesizes_zeros() {
        let d = DiagMat::<i32>::from_diag(vec![1, 2, 3]);
        assert_eq!(d.to_rows(), vec![vec![1, 0, 0], vec![0, 2, 0], vec![0, 0, 3]]);
        assert_eq!(d.diag(), &[1, 2, 3]);

        let f = Matrix::<Diagonal, Fixed<3>, Fixed<3>, i32>::from_diag_array([1, 2, 3]);
        assert_eq!(f, d);
    }
}
