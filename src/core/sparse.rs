/* ************************************************************************ **
** This file is part of fmatvec, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Compressed sparse row matrices.
//!
//! `Matrix<Sparse, Var, Var, T>` stores the explicit entries of each row sorted by
//! column.  `Matrix<SymmetricSparse, Var, Var, T>` stores the upper triangle; every row's
//! run begins with its diagonal entry (which is always present, even when zero) and then
//! lists the columns `> i` in increasing order.

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::storage::Csr;
use crate::tags::{General, Sparse, Symmetric, SymmetricSparse, Var};
use crate::traits::MatrixBase;
use crate::matrix::Matrix;

pub(crate) fn is_sorted<T: PartialOrd>(xs: &[T]) -> bool {
    xs.windows(2).all(|w| w[0] <= w[1])
}

pub(crate) fn is_strictly_sorted<T: PartialOrd>(xs: &[T]) -> bool {
    xs.windows(2).all(|w| w[0] < w[1])
}

macro_rules! ensure_csr {
    ($cond:expr, $msg:expr) => {
        if !$cond {
            return Err(Error::InvalidCsr($msg));
        }
    };
}

/// Check the invariants shared by both sparse shapes.
fn validate_csr<T>(csr: &Csr<T>) -> Result<()> {
    let Csr { rows, cols, ref ip, ref jp, ref values } = *csr;

    // ip is a sorted list of "endpoints", of length rows + 1
    ensure_csr!(ip.len() == rows + 1, "ip must have rows + 1 entries");
    ensure_csr!(ip[0] == 0, "ip must begin at 0");
    ensure_csr!(ip[rows] == jp.len(), "ip must end at the number of entries");
    ensure_csr!(is_sorted(ip), "ip must be nondecreasing");

    // jp is a concatenation of strictly sorted runs
    ensure_csr!(jp.len() == values.len(), "jp and values must have the same length");
    ensure_csr!(
        ip.windows(2).all(|w| is_strictly_sorted(&jp[w[0]..w[1]])),
        "columns within a row must be strictly increasing"
    );
    ensure_csr!(jp.iter().all(|&j| j < cols), "column index out of range");
    Ok(())
}

fn validate_symmetric_csr<T>(csr: &Csr<T>) -> Result<()> {
    ensure_csr!(csr.rows == csr.cols, "a symmetric sparse matrix must be square");
    validate_csr(csr)?;
    // with strictly increasing runs, this keeps every entry in the upper triangle
    for i in 0..csr.rows {
        let run = &csr.jp[csr.ip[i]..csr.ip[i + 1]];
        ensure_csr!(run.first() == Some(&i), "each row must begin with its diagonal entry");
    }
    Ok(())
}

/// Build a CSR store from entries that are sorted by row, then column, with no duplicates.
fn from_row_major_iter<T, I>(rows: usize, cols: usize, iter: I) -> Csr<T>
where I: IntoIterator<Item = ((usize, usize), T)>,
{
    let iter = iter.into_iter();
    let cap = iter.size_hint().0;
    let mut values = Vec::with_capacity(cap);
    let mut jp = Vec::with_capacity(cap);
    let mut ip = Vec::with_capacity(rows + 1);
    ip.push(0);

    for ((row, col), x) in iter {
        // terminate the previous row and add any empty rows
        while ip.len() <= row {
            ip.push(jp.len());
        }
        jp.push(col);
        values.push(x);
    }
    while ip.len() <= rows {
        ip.push(jp.len());
    }
    Csr { rows, cols, ip, jp, values }
}

/// Shared accessors.
macro_rules! sparse_common {
    ($Tag:ty) => {
        impl<T: Scalar> Matrix<$Tag, Var, Var, T> {
            /// Row pointers; row `i` is `ip()[i]..ip()[i + 1]`.
            #[inline(always)] pub fn ip(&self) -> &[usize] { &self.store.ip }

            /// Column of each explicit entry.
            #[inline(always)] pub fn jp(&self) -> &[usize] { &self.store.jp }

            #[inline(always)] pub fn values(&self) -> &[T] { &self.store.values }

            /// The values may be modified in place; the pattern may not.
            #[inline(always)] pub fn values_mut(&mut self) -> &mut [T] { &mut self.store.values }

            /// Number of explicit entries.
            #[inline(always)] pub fn nnz(&self) -> usize { self.store.values.len() }

            /// Columns and values of row `i`.
            #[inline]
            pub fn row_run(&self, i: usize) -> (&[usize], &[T]) {
                let range = self.store.ip[i]..self.store.ip[i + 1];
                (&self.store.jp[range.clone()], &self.store.values[range])
            }

            /// The explicit entry at `(i, j)` in the stored pattern, if any.
            fn find(&self, i: usize, j: usize) -> Option<T> {
                let (cols, values) = self.row_run(i);
                cols.binary_search(&j).ok().map(|p| values[p].clone())
            }
        }
    };
}

sparse_common!(Sparse);
sparse_common!(SymmetricSparse);

impl<T: Scalar> Matrix<Sparse, Var, Var, T> {
    /// Build from CSR arrays, validating all invariants in `O(nnz)`.
    pub fn from_parts(
        rows: usize,
        cols: usize,
        ip: Vec<usize>,
        jp: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        let csr = Csr { rows, cols, ip, jp, values };
        validate_csr(&csr)?;
        Ok(Matrix::from_store(csr))
    }

    /// The nonzero entries of a dense matrix.
    pub fn from_dense<M>(src: &M) -> Self
    where M: MatrixBase<Elem = T>,
    {
        let (rows, cols) = (src.rows(), src.cols());
        let entries = (0..rows)
            .cartesian_product(0..cols)
            .map(|(i, j)| ((i, j), src.e(i, j)))
            .filter(|(_, x)| !x.is_zero());
        let csr = from_row_major_iter(rows, cols, entries);
        trace!("sparse from {}x{} dense: {} entries", rows, cols, csr.values.len());
        Matrix::from_store(csr)
    }

    /// Build from `(row, col, value)` triplets in any order.  Entries at the same position
    /// are summed.
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Result<Self>
    where I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut entries = triplets.into_iter().collect_vec();
        if entries.iter().any(|&(i, j, _)| i >= rows || j >= cols) {
            return Err(Error::InvalidCsr("triplet position out of range"));
        }
        entries.sort_by_key(|&(i, j, _)| (i, j));

        let merged = entries.into_iter()
            .map(|(i, j, x)| ((i, j), x))
            .coalesce(|(pa, a), (pb, b)| match pa == pb {
                true => Ok((pa, a + b)),
                false => Err(((pa, a), (pb, b))),
            });
        let csr = from_row_major_iter(rows, cols, merged);
        trace!("sparse from triplets: {}x{}, {} entries", rows, cols, csr.values.len());
        Ok(Matrix::from_store(csr))
    }

    /// The identity; only the diagonal is stored.
    pub fn eye(n: usize) -> Self {
        Matrix::from_store(from_row_major_iter(n, n, (0..n).map(|i| ((i, i), T::one()))))
    }

    /// Checked read.  Positions outside the pattern are zero.
    pub fn get(&self, i: usize, j: usize) -> T {
        fmv_assert!(
            T, i < self.rows() && j < self.cols(),
            "index ({}, {}) out of range for a {}x{} matrix", i, j, self.rows(), self.cols(),
        );
        self.find(i, j).unwrap_or_else(T::zero)
    }

    pub fn to_dense(&self) -> Matrix<General, Var, Var, T> {
        let mut out = Matrix::new(self.rows(), self.cols());
        for i in 0..self.rows() {
            let (cols, values) = self.row_run(i);
            for (&j, x) in cols.iter().zip(values) {
                out.set(i, j, x.clone());
            }
        }
        out
    }

    /// Transposed copy, by a counting sort on the columns.
    pub fn transpose(&self) -> Self {
        let (rows, cols) = (self.rows(), self.cols());
        let mut ip = vec![0; cols + 1];
        for &j in self.jp() {
            ip[j + 1] += 1;
        }
        for j in 0..cols {
            ip[j + 1] += ip[j];
        }

        let mut next = ip[..cols].to_vec();
        let mut jp = vec![0; self.nnz()];
        let mut values = vec![T::zero(); self.nnz()];
        for i in 0..rows {
            let (run_cols, run_values) = self.row_run(i);
            for (&j, x) in run_cols.iter().zip(run_values) {
                jp[next[j]] = i;
                values[next[j]] = x.clone();
                next[j] += 1;
            }
        }
        Matrix::from_store(Csr { rows: cols, cols: rows, ip, jp, values })
    }
}

impl<T: Scalar> Matrix<SymmetricSparse, Var, Var, T> {
    /// Build from CSR arrays of the upper triangle, validating all invariants.
    pub fn from_parts(n: usize, ip: Vec<usize>, jp: Vec<usize>, values: Vec<T>) -> Result<Self> {
        let csr = Csr { rows: n, cols: n, ip, jp, values };
        validate_symmetric_csr(&csr)?;
        Ok(Matrix::from_store(csr))
    }

    /// The diagonal and the nonzero entries of the upper triangle of a dense matrix.
    ///
    /// The lower triangle is not read.
    pub fn from_dense<M>(src: &M) -> Self
    where M: MatrixBase<Elem = T>,
    {
        fmv_assert!(T, src.rows() == src.cols(), "{}x{} is not square", src.rows(), src.cols());
        let n = src.rows();
        let entries = (0..n)
            .flat_map(|i| (i..n).map(move |j| (i, j)))
            .map(|(i, j)| ((i, j), src.e(i, j)))
            .filter(|&((i, j), ref x)| i == j || !x.is_zero());
        let csr = from_row_major_iter(n, n, entries);
        trace!("symmetric sparse from {}x{} dense: {} entries", n, n, csr.values.len());
        Matrix::from_store(csr)
    }

    pub fn eye(n: usize) -> Self {
        Matrix::from_store(from_row_major_iter(n, n, (0..n).map(|i| ((i, i), T::one()))))
    }

    /// Checked read of either triangle.
    pub fn get(&self, i: usize, j: usize) -> T {
        fmv_assert!(
            T, i < self.rows() && j < self.cols(),
            "index ({}, {}) out of range for a {}x{} matrix", i, j, self.rows(), self.cols(),
        );
        let (i, j) = if i <= j { (i, j) } else { (j, i) };
        self.find(i, j).unwrap_or_else(T::zero)
    }

    pub fn to_dense(&self) -> Matrix<Symmetric, Var, Var, T> {
        let mut out = Matrix::new(self.rows(), self.cols());
        for i in 0..self.rows() {
            let (cols, values) = self.row_run(i);
            for (&j, x) in cols.iter().zip(values) {
                // j >= i; the slot is the mirrored one in the lower triangle
                *out.ej_mut(i, j) = x.clone();
            }
        }
        out
    }
}
