use crate::dim::DimKind;
use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::storage::{Layout, Store};
use crate::tags::General;
use crate::traits::MatrixBase;
use crate::matrix::Matrix;

impl<R, C, T> Matrix<General, R, C, T>
where General: Layout<R, C, T>, R: DimKind, C: DimKind, T: Scalar,
{
    /// Take ownership of a row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        Self::check_dims(rows, cols)?;
        if data.len() != rows * cols {
            return Err(Error::DimensionMismatch { expected: rows * cols, found: data.len() });
        }
        let mut data = data.into_iter();
        let mut m = Self::noinit(rows, cols);
        for x in m.as_mut_slice() {
            if let Some(value) = data.next() {
                *x = value;
            }
        }
        Ok(m)
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        fmv_assert!(T, a < self.rows() && b < self.rows(), "rows ({}, {}) out of range", a, b);
        if a == b {
            return;
        }
        let (ld, cols) = (self.ldim(), self.cols());
        let data = self.store.as_mut_slice();
        for j in 0..cols {
            data.swap(a * ld + j, b * ld + j);
        }
    }

    /// Overwrite the block whose top-left corner is `(row, col)`.
    pub fn set_block<M>(&mut self, row: usize, col: usize, src: &M)
    where M: MatrixBase<Elem = T>,
    {
        self.update_block(row, col, src, |_, new| new)
    }

    /// Add into the block whose top-left corner is `(row, col)`.
    pub fn add_block<M>(&mut self, row: usize, col: usize, src: &M)
    where M: MatrixBase<Elem = T>,
    {
        self.update_block(row, col, src, |old, new| old + new)
    }

    fn update_block<M, F>(&mut self, row: usize, col: usize, src: &M, mut f: F)
    where
        M: MatrixBase<Elem = T>,
        F: FnMut(T, T) -> T,
    {
        fmv_assert!(
            T, row + src.rows() <= self.rows() && col + src.cols() <= self.cols(),
            "a {}x{} block at ({}, {}) does not fit in {}x{}",
            src.rows(), src.cols(), row, col, self.rows(), self.cols(),
        );
        let ld = self.ldim();
        let data = self.store.as_mut_slice();
        for i in 0..src.rows() {
            for j in 0..src.cols() {
                let slot = &mut data[(row + i) * ld + col + j];
                let old = std::mem::replace(slot, T::zero());
                *slot = f(old, src.e(i, j));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::Error;

    #[test]
    fn from_vec() {
        let m = Mat::<i32>::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.e(1, 0), 4);
        assert_eq!(
            Mat::<i32>::from_vec(2, 2, vec![1, 2, 3]).unwrap_err(),
            Error::DimensionMismatch { expected: 4, found: 3 },
        );
    }

    #[test]
    fn blocks() {
        let mut m = Mat::<i32>::new(3, 3);
        let b = SymMat3::<i32>::from_array([[1, 0, 0], [2, 3, 0], [4, 5, 6]]);
        m.set_block(0, 0, &b.view_sym(0..2));
        m.add_block(1, 1, &DiagMat::<i32>::eye(2, 2));
        assert_eq!(m.to_rows(), vec![vec![1, 2, 0], vec![2, 4, 0], vec![0, 0, 1]]);
    }

    #[test]
    fn swap_rows() {
        let mut m = Mat::<i32>::from_rows(&[[1, 2], [3, 4], [5, 6]]).unwrap();
        m.swap_rows(0, 2);
        assert_eq!(m.to_rows(), vec![vec![5, 6], vec![3, 4], vec![1, 2]]);
    }
}
