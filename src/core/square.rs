use std::ops::{Deref, Index, IndexMut, Range};

use crate::dim::DimKind;
use crate::error::{Error, Result};
use crate::init::{Initial, INIT};
use crate::scalar::Scalar;
use crate::storage::Layout;
use crate::tags::{Fixed, General};
use crate::traits::{Alloc, MatrixBase, MatrixFill, MatrixLike};
use crate::matrix::Matrix;
use crate::view::MatrixMut;

/// A general matrix that is known to be square.
///
/// Both dimensions share the kind `R`.  Square-times-square products stay square.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<R, T = f64>(pub(crate) Matrix<General, R, R, T>)
where General: Layout<R, R, T>, R: DimKind, T: Scalar;

impl<R, T> SquareMatrix<R, T>
where General: Layout<R, R, T>, R: DimKind, T: Scalar,
{
    pub fn noinit(n: usize) -> Self { SquareMatrix(Matrix::noinit(n, n)) }
    pub fn new(n: usize) -> Self { SquareMatrix(Matrix::new(n, n)) }
    pub fn filled(n: usize, a: T) -> Self { SquareMatrix(Matrix::filled(n, n, a)) }
    pub fn eye(n: usize) -> Self { SquareMatrix(Matrix::<General, R, R, T>::eye(n, n)) }

    pub fn with(n: usize, policy: impl Into<Initial<T>>) -> Self {
        SquareMatrix(Matrix::with(n, n, policy))
    }

    pub fn from_fn<F>(n: usize, f: F) -> Self
    where F: FnMut(usize, usize) -> T,
    { SquareMatrix(Matrix::from_fn(n, n, f)) }

    /// Copy any square dense matrix.
    pub fn from_matrix<M>(src: &M) -> Self
    where M: MatrixBase<Elem = T>,
    {
        fmv_assert!(T, src.rows() == src.cols(), "{}x{} is not square", src.rows(), src.cols());
        SquareMatrix(Matrix::from_matrix(src))
    }

    /// Wrap a general matrix, which must be square.
    pub fn from_general(m: Matrix<General, R, R, T>) -> Result<Self> {
        match m.rows() == m.cols() {
            true => Ok(SquareMatrix(m)),
            false => Err(Error::NotSquare { rows: m.rows(), cols: m.cols() }),
        }
    }

    pub fn from_rows<Row: AsRef<[T]>>(rows: &[Row]) -> Result<Self> {
        Self::from_general(Matrix::from_rows(rows)?)
    }

    #[inline(always)]
    pub fn size(&self) -> usize { self.0.rows() }

    pub fn resize(&mut self, n: usize) -> Result<()> { self.0.resize(n, n) }

    pub fn resize_with(&mut self, n: usize, policy: impl Into<Initial<T>>) -> Result<()> {
        self.0.resize_with(n, n, policy)
    }

    pub fn copy(&self) -> Self { self.clone() }

    pub fn assign<M>(&mut self, src: &M) -> &mut Self
    where M: MatrixBase<Elem = T>,
    {
        self.0.assign(src);
        self
    }

    pub fn into_matrix(self) -> Matrix<General, R, R, T> { self.0 }
}

impl<R, T> Deref for SquareMatrix<R, T>
where General: Layout<R, R, T>, R: DimKind, T: Scalar,
{
    type Target = Matrix<General, R, R, T>;
    fn deref(&self) -> &Self::Target { &self.0 }
}

// Mutation is forwarded method by method; a `&mut` to the inner matrix could resize it
// to a non-square shape.
impl<R, T> SquareMatrix<R, T>
where General: Layout<R, R, T>, R: DimKind, T: Scalar,
{
    #[inline] pub fn set(&mut self, i: usize, j: usize, value: T) { self.0.set(i, j, value) }
    #[inline] pub fn as_mut_slice(&mut self) -> &mut [T] { self.0.as_mut_slice() }

    pub fn init(&mut self, a: T) -> &mut Self { self.0.init(a); self }
    pub fn init_eye(&mut self, d: T) -> &mut Self { self.0.init_eye(d); self }

    pub fn swap_rows(&mut self, a: usize, b: usize) { self.0.swap_rows(a, b) }

    pub fn set_block<M>(&mut self, row: usize, col: usize, src: &M)
    where M: MatrixBase<Elem = T>,
    { self.0.set_block(row, col, src) }

    pub fn add_block<M>(&mut self, row: usize, col: usize, src: &M)
    where M: MatrixBase<Elem = T>,
    { self.0.add_block(row, col, src) }

    pub fn as_view_mut(&mut self) -> MatrixMut<'_, General, T> { self.0.as_view_mut() }
    pub fn row_mut(&mut self, i: usize) -> MatrixMut<'_, General, T> { self.0.row_mut(i) }
    pub fn col_mut(&mut self, j: usize) -> MatrixMut<'_, General, T> { self.0.col_mut(j) }
    pub fn t_mut(&mut self) -> MatrixMut<'_, General, T> { self.0.t_mut() }

    pub fn view_mut(&mut self, rows: Range<usize>, cols: Range<usize>) -> MatrixMut<'_, General, T> {
        self.0.view_mut(rows, cols)
    }
}

impl<R, T> Index<(usize, usize)> for SquareMatrix<R, T>
where General: Layout<R, R, T>, R: DimKind, T: Scalar,
{
    type Output = T;

    fn index(&self, ij: (usize, usize)) -> &T { &self.0[ij] }
}

impl<R, T> IndexMut<(usize, usize)> for SquareMatrix<R, T>
where General: Layout<R, R, T>, R: DimKind, T: Scalar,
{
    fn index_mut(&mut self, ij: (usize, usize)) -> &mut T { &mut self.0[ij] }
}

impl<R, T> MatrixLike for SquareMatrix<R, T>
where General: Layout<R, R, T>, R: DimKind, T: Scalar,
{
    type Shape = General;
    type Rows = R;
    type Cols = R;
    type Elem = T;

    #[inline(always)] fn rows(&self) -> usize { self.0.rows() }
    #[inline(always)] fn cols(&self) -> usize { self.0.cols() }
}

impl<R, T> MatrixBase for SquareMatrix<R, T>
where General: Layout<R, R, T>, R: DimKind, T: Scalar,
{
    #[inline(always)] fn e(&self, i: usize, j: usize) -> T { self.0.e(i, j) }
}

impl<R, T> MatrixFill for SquareMatrix<R, T>
where General: Layout<R, R, T>, R: DimKind, T: Scalar,
{
    fn fill_stored<F>(&mut self, f: F)
    where F: FnMut(usize, usize) -> T,
    { self.0.fill_stored(f) }

    fn update_stored<F>(&mut self, f: F)
    where F: FnMut(usize, usize, &mut T),
    { self.0.update_stored(f) }

    fn stored_mut(&mut self, i: usize, j: usize) -> &mut T { self.0.stored_mut(i, j) }
}

impl<R, T> Alloc for SquareMatrix<R, T>
where General: Layout<R, R, T>, R: DimKind, T: Scalar,
{
    fn alloc(rows: usize, cols: usize) -> Self {
        fmv_assert!(T, rows == cols, "a square matrix cannot be {}x{}", rows, cols);
        SquareMatrix::noinit(rows)
    }
}

impl<T: Scalar, const N: usize> SquareMatrix<Fixed<N>, T> {
    pub fn fixed(policy: impl Into<Initial<T>>) -> Self { Self::with(N, policy) }

    pub fn from_array(rows: [[T; N]; N]) -> Self { SquareMatrix(Matrix::from_array(rows)) }
}

impl<T: Scalar, const N: usize> Default for SquareMatrix<Fixed<N>, T> {
    fn default() -> Self { Self::fixed(INIT) }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::Error;

    #[test]
    fn construction() {
        let m = SqrMat::<i32>::from_rows(&[[1, 2], [3, 4]]).unwrap();
        assert_eq!((m.size(), m.e(1, 0)), (2, 3));

        assert_eq!(
            SqrMat::<i32>::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap_err(),
            Error::NotSquare { rows: 2, cols: 3 },
        );
        assert_eq!(SqrMat3::<f64>::fixed(EYE), SqrMat3::<f64>::eye(3));
    }

    #[test]
    fn resize() {
        let mut m = SqrMat::<f64>::eye(2);
        m.resize(4).unwrap();
        assert_eq!((m.rows(), m.cols()), (4, 4));

        let mut f = SqrMat3::<f64>::default();
        assert_eq!(f.resize(2), Err(Error::FixedResize { fixed: 3, requested: 2 }));
    }

    #[test]
    fn stays_square_under_mutation() {
        let mut m = SqrMat::<f64>::eye(3);
        m.resize_with(2, EYE).unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 2));
        assert_eq!(m, SqrMat::<f64>::eye(2));

        m.set(0, 1, 4.0);
        m[(1, 0)] = -4.0;
        m.swap_rows(0, 1);
        m.t_mut().set(0, 0, 9.0);
        m.view_mut(0..2, 1..2).init(7.0);
        m.set_block(0, 0, &Mat::<f64>::filled(1, 1, 5.0));
        assert_eq!(m.to_rows(), vec![vec![5.0, 7.0], vec![1.0, 7.0]]);
        assert_eq!((m.rows(), m.cols(), m.size()), (2, 2, 2));

        let mut f = SqrMat3::<i32>::default();
        assert_eq!(f.resize_with(4, EYE), Err(Error::FixedResize { fixed: 3, requested: 4 }));
        f.init_eye(2);
        assert_eq!((f.e(1, 1), f.e(1, 2), f.size()), (2, 0, 3));
    }
}
