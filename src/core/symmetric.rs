//! Symmetric matrices keep the lower triangle; element `(i, j)` with `j > i` lives in the
//! slot of `(j, i)`.

use crate::dim::DimKind;
use crate::scalar::Scalar;
use crate::storage::{Layout, Store};
use crate::tags::Symmetric;
use crate::traits::SymmetricBase;
use crate::matrix::Matrix;

impl<R, C, T> Matrix<Symmetric, R, C, T>
where Symmetric: Layout<R, C, T>, R: DimKind, C: DimKind, T: Scalar,
{
    #[inline(always)]
    pub fn ei(&self, i: usize, j: usize) -> T { self.store.as_slice()[i * self.ldim() + j].clone() }

    #[inline(always)]
    pub fn ej(&self, i: usize, j: usize) -> T { self.store.as_slice()[j * self.ldim() + i].clone() }

    /// Unchecked mutable access for `i >= j`.
    #[inline(always)]
    pub fn ei_mut(&mut self, i: usize, j: usize) -> &mut T {
        let ld = self.ldim();
        &mut self.store.as_mut_slice()[i * ld + j]
    }

    /// Unchecked mutable access for `i <= j`.
    #[inline(always)]
    pub fn ej_mut(&mut self, i: usize, j: usize) -> &mut T {
        let ld = self.ldim();
        &mut self.store.as_mut_slice()[j * ld + i]
    }
}

impl<R, C, T> SymmetricBase for Matrix<Symmetric, R, C, T>
where Symmetric: Layout<R, C, T>, R: DimKind, C: DimKind, T: Scalar,
{
    #[inline(always)] fn ei(&self, i: usize, j: usize) -> T { Matrix::ei(self, i, j) }
    #[inline(always)] fn ej(&self, i: usize, j: usize) -> T { Matrix::ej(self, i, j) }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn mirroring_through_ej() {
        let n = 4;
        let mut s = SymMat::<f64>::new(n, n);
        for i in 0..n {
            for j in i..n {
                *s.ej_mut(i, j) = (10 * i + j) as f64;
            }
        }
        for i in 0..n {
            for j in 0..n {
                assert_eq!(s.e(i, j), s.e(j, i));
            }
        }
        assert_eq!(s.e(3, 1), 13.0);
        assert_eq!(s.ei(3, 1), 13.0);
    }

    #[test]
    fn fixed_and_var_agree() {
        let rows = [[4.0, 1.0, 2.0], [1.0, 5.0, 3.0], [2.0, 3.0, 6.0]];
        let fixed = SymMat3::<f64>::from_rows(&rows).unwrap();
        let var = SymMat::<f64>::from_rows(&rows).unwrap();
        assert_eq!(fixed, var);
        assert_eq!(fixed.ej(0, 2), var.ej(0, 2));
    }
}
