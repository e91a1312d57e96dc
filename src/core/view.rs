/* ************************************************************************ **
** This file is part of fmatvec, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Borrowed views into the storage of a dense matrix.
//!
//! A view shares its parent's leading dimension.  Its data slice begins at the slot of
//! its top-left element, so the shape's addressing rules apply unchanged.  A general
//! view may additionally be transposed, which swaps the indices on every access.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Range;

use crate::dim::DimKind;
use crate::scalar::Scalar;
use crate::shape::{DenseShape, Shape};
use crate::storage::{Layout, Store};
use crate::tags::{General, Ref, Symmetric, Var};
use crate::traits::{MatrixBase, MatrixFill, MatrixLike, SymmetricBase, VectorLike};
use crate::matrix::Matrix;

/// A read-only view.
pub struct MatrixRef<'a, S, T = f64> {
    data: &'a [T],
    rows: usize,
    cols: usize,
    ld: usize,
    trans: bool,
    shape: PhantomData<S>,
}

/// A view that can write through to its parent.
pub struct MatrixMut<'a, S, T = f64> {
    data: &'a mut [T],
    rows: usize,
    cols: usize,
    ld: usize,
    trans: bool,
    shape: PhantomData<S>,
}

impl<'a, S, T> Clone for MatrixRef<'a, S, T> {
    fn clone(&self) -> Self { *self }
}

impl<'a, S, T> Copy for MatrixRef<'a, S, T> {}

impl<'a, S: Shape, T: Scalar> fmt::Debug for MatrixRef<'a, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MatrixRef")
            .field("shape", &S::NAME)
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("ld", &self.ld)
            .field("trans", &self.trans)
            .finish()
    }
}

impl<'a, S: Shape, T: Scalar> fmt::Debug for MatrixMut<'a, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MatrixMut")
            .field("shape", &S::NAME)
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("ld", &self.ld)
            .field("trans", &self.trans)
            .finish()
    }
}

/// Offset of `(row, col)` within a general buffer, clamped so that empty views of the
/// far corner still produce a valid (empty) slice.
fn general_origin(len: usize, ld: usize, trans: bool, row: usize, col: usize) -> usize {
    let offset = match trans {
        false => row * ld + col,
        true => col * ld + row,
    };
    offset.min(len)
}

fn check_range<T: Scalar>(range: &Range<usize>, len: usize, what: &str) {
    fmv_assert!(
        T, range.start <= range.end && range.end <= len,
        "{} range {:?} out of bounds for {}", what, range, len,
    );
}

//---------------------------------
// construction

impl<S, R, C, T> Matrix<S, R, C, T>
where S: Layout<R, C, T> + DenseShape, R: DimKind, C: DimKind, T: Scalar,
{
    /// View the whole matrix.
    pub fn as_view(&self) -> MatrixRef<'_, S, T> {
        let (rows, cols, ld) = (self.rows(), self.cols(), self.ldim());
        MatrixRef::from_parts(self.store.as_slice(), rows, cols, ld, false)
    }

    pub fn as_view_mut(&mut self) -> MatrixMut<'_, S, T> {
        let (rows, cols, ld) = (self.rows(), self.cols(), self.ldim());
        MatrixMut::from_parts(self.store.as_mut_slice(), rows, cols, ld, false)
    }
}

impl<R, C, T> Matrix<General, R, C, T>
where General: Layout<R, C, T>, R: DimKind, C: DimKind, T: Scalar,
{
    /// The block covering the given rows and columns.
    pub fn view(&self, rows: Range<usize>, cols: Range<usize>) -> MatrixRef<'_, General, T> {
        self.as_view().into_view(rows, cols)
    }

    pub fn view_mut(&mut self, rows: Range<usize>, cols: Range<usize>) -> MatrixMut<'_, General, T> {
        self.as_view_mut().into_view_mut(rows, cols)
    }

    /// Row `i` as a `1 x cols` view.
    pub fn row(&self, i: usize) -> MatrixRef<'_, General, T> {
        self.view(i..i + 1, 0..self.cols())
    }

    /// Column `j` as a `rows x 1` view.
    pub fn col(&self, j: usize) -> MatrixRef<'_, General, T> {
        self.view(0..self.rows(), j..j + 1)
    }

    pub fn row_mut(&mut self, i: usize) -> MatrixMut<'_, General, T> {
        let cols = self.cols();
        self.view_mut(i..i + 1, 0..cols)
    }

    pub fn col_mut(&mut self, j: usize) -> MatrixMut<'_, General, T> {
        let rows = self.rows();
        self.view_mut(0..rows, j..j + 1)
    }

    /// The transpose, without copying.
    pub fn t(&self) -> MatrixRef<'_, General, T> { self.as_view().t() }

    pub fn t_mut(&mut self) -> MatrixMut<'_, General, T> { self.as_view_mut().into_t() }
}

impl<R, C, T> Matrix<Symmetric, R, C, T>
where Symmetric: Layout<R, C, T>, R: DimKind, C: DimKind, T: Scalar,
{
    /// The diagonal block covering the given rows (and the same columns).
    pub fn view_sym(&self, range: Range<usize>) -> MatrixRef<'_, Symmetric, T> {
        self.as_view().into_view_sym(range)
    }

    pub fn view_sym_mut(&mut self, range: Range<usize>) -> MatrixMut<'_, Symmetric, T> {
        self.as_view_mut().into_view_sym_mut(range)
    }
}

//---------------------------------
// MatrixRef

impl<'a, S: DenseShape, T: Scalar> MatrixRef<'a, S, T> {
    pub(crate) fn from_parts(data: &'a [T], rows: usize, cols: usize, ld: usize, trans: bool) -> Self {
        MatrixRef { data, rows, cols, ld, trans, shape: PhantomData }
    }

    #[inline(always)] pub fn rows(&self) -> usize { self.rows }
    #[inline(always)] pub fn cols(&self) -> usize { self.cols }
    #[inline(always)] pub fn ldim(&self) -> usize { self.ld }
    #[inline(always)] pub fn is_transposed(&self) -> bool { self.trans }

    /// The parent's buffer, starting at this view's first element.
    pub fn as_slice(&self) -> &'a [T] { self.data }

    /// Unchecked read.
    #[inline(always)]
    pub fn e(&self, i: usize, j: usize) -> T {
        match self.trans {
            false => S::read(self.data, self.ld, i, j),
            true => S::read(self.data, self.ld, j, i),
        }
    }

    /// Checked read.
    pub fn get(&self, i: usize, j: usize) -> T {
        fmv_assert!(
            T, i < self.rows && j < self.cols,
            "index ({}, {}) out of range for a {}x{} view", i, j, self.rows, self.cols,
        );
        self.e(i, j)
    }

    /// Deep copy into an owned matrix.
    pub fn copy(&self) -> Matrix<S, Var, Var, T>
    where S: Layout<Var, Var, T>,
    {
        Matrix::from_fn(self.rows, self.cols, |i, j| self.e(i, j))
    }

    /// The transpose of this view.
    pub fn t(&self) -> Self {
        MatrixRef { rows: self.cols, cols: self.rows, trans: !self.trans, ..*self }
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.rows)
            .map(|i| (0..self.cols).map(|j| self.e(i, j)).collect())
            .collect()
    }
}

impl<'a, T: Scalar> MatrixRef<'a, General, T> {
    /// A sub-block of this view.
    pub fn view(&self, rows: Range<usize>, cols: Range<usize>) -> MatrixRef<'a, General, T> {
        self.into_view(rows, cols)
    }

    fn into_view(self, rows: Range<usize>, cols: Range<usize>) -> MatrixRef<'a, General, T> {
        check_range::<T>(&rows, self.rows, "row");
        check_range::<T>(&cols, self.cols, "column");
        let origin = general_origin(self.data.len(), self.ld, self.trans, rows.start, cols.start);
        MatrixRef {
            data: &self.data[origin..],
            rows: rows.len(),
            cols: cols.len(),
            ..self
        }
    }

    pub fn row(&self, i: usize) -> MatrixRef<'a, General, T> { self.view(i..i + 1, 0..self.cols) }
    pub fn col(&self, j: usize) -> MatrixRef<'a, General, T> { self.view(0..self.rows, j..j + 1) }
}

impl<'a, T: Scalar> MatrixRef<'a, Symmetric, T> {
    pub fn view_sym(&self, range: Range<usize>) -> MatrixRef<'a, Symmetric, T> {
        self.into_view_sym(range)
    }

    fn into_view_sym(self, range: Range<usize>) -> MatrixRef<'a, Symmetric, T> {
        check_range::<T>(&range, self.rows, "row");
        let origin = (range.start * self.ld + range.start).min(self.data.len());
        MatrixRef {
            data: &self.data[origin..],
            rows: range.len(),
            cols: range.len(),
            ..self
        }
    }

    #[inline(always)] pub fn ei(&self, i: usize, j: usize) -> T { self.data[i * self.ld + j].clone() }
    #[inline(always)] pub fn ej(&self, i: usize, j: usize) -> T { self.data[j * self.ld + i].clone() }
}

//---------------------------------
// MatrixMut

impl<'a, S: DenseShape, T: Scalar> MatrixMut<'a, S, T> {
    pub(crate) fn from_parts(data: &'a mut [T], rows: usize, cols: usize, ld: usize, trans: bool) -> Self {
        MatrixMut { data, rows, cols, ld, trans, shape: PhantomData }
    }

    #[inline(always)] pub fn rows(&self) -> usize { self.rows }
    #[inline(always)] pub fn cols(&self) -> usize { self.cols }
    #[inline(always)] pub fn ldim(&self) -> usize { self.ld }
    #[inline(always)] pub fn is_transposed(&self) -> bool { self.trans }

    /// Reborrow as a read-only view.
    pub fn rb(&self) -> MatrixRef<'_, S, T> {
        MatrixRef::from_parts(&*self.data, self.rows, self.cols, self.ld, self.trans)
    }

    /// Reborrow mutably, for passing to functions that consume a view.
    pub fn rb_mut(&mut self) -> MatrixMut<'_, S, T> {
        MatrixMut::from_parts(&mut *self.data, self.rows, self.cols, self.ld, self.trans)
    }

    #[inline(always)] pub fn e(&self, i: usize, j: usize) -> T { self.rb().e(i, j) }
    pub fn get(&self, i: usize, j: usize) -> T { self.rb().get(i, j) }

    /// Checked write.  See [`Matrix::set`].
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        fmv_assert!(
            T, i < self.rows && j < self.cols,
            "index ({}, {}) out of range for a {}x{} view", i, j, self.rows, self.cols,
        );
        *self.slot_mut(i, j) = value;
    }

    fn slot_mut(&mut self, i: usize, j: usize) -> &mut T {
        let (i, j) = match self.trans {
            false => (i, j),
            true => (j, i),
        };
        match S::offset(i, j, self.ld) {
            Some(o) => &mut self.data[o],
            None => fmv_fail!(T, "({}, {}) is not stored in a {} view", i, j, S::NAME),
        }
    }

    pub fn copy(&self) -> Matrix<S, Var, Var, T>
    where S: Layout<Var, Var, T>,
    {
        self.rb().copy()
    }

    /// Write the values of `src` into the parent's storage.
    pub fn assign<M>(&mut self, src: &M) -> &mut Self
    where M: MatrixBase<Elem = T>,
    {
        fmv_assert!(
            T, self.rows == src.rows() && self.cols == src.cols(),
            "cannot assign {}x{} to a {}x{} view", src.rows(), src.cols(), self.rows, self.cols,
        );
        self.fill_stored(|i, j| src.e(i, j));
        self
    }

    pub fn init(&mut self, a: T) -> &mut Self {
        self.fill_stored(|_, _| a.clone());
        self
    }

    pub fn into_t(self) -> Self {
        MatrixMut { rows: self.cols, cols: self.rows, trans: !self.trans, ..self }
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> { self.rb().to_rows() }
}

impl<'a, T: Scalar> MatrixMut<'a, General, T> {
    pub fn view_mut(&mut self, rows: Range<usize>, cols: Range<usize>) -> MatrixMut<'_, General, T> {
        self.rb_mut().into_view_mut(rows, cols)
    }

    fn into_view_mut(self, rows: Range<usize>, cols: Range<usize>) -> MatrixMut<'a, General, T> {
        check_range::<T>(&rows, self.rows, "row");
        check_range::<T>(&cols, self.cols, "column");
        let MatrixMut { data, ld, trans, .. } = self;
        let origin = general_origin(data.len(), ld, trans, rows.start, cols.start);
        MatrixMut::from_parts(&mut data[origin..], rows.len(), cols.len(), ld, trans)
    }
}

impl<'a, T: Scalar> MatrixMut<'a, Symmetric, T> {
    pub fn view_sym_mut(&mut self, range: Range<usize>) -> MatrixMut<'_, Symmetric, T> {
        self.rb_mut().into_view_sym_mut(range)
    }

    fn into_view_sym_mut(self, range: Range<usize>) -> MatrixMut<'a, Symmetric, T> {
        check_range::<T>(&range, self.rows, "row");
        let MatrixMut { data, ld, trans, .. } = self;
        let origin = (range.start * ld + range.start).min(data.len());
        MatrixMut::from_parts(&mut data[origin..], range.len(), range.len(), ld, trans)
    }

    #[inline(always)] pub fn ei(&self, i: usize, j: usize) -> T { self.data[i * self.ld + j].clone() }
    #[inline(always)] pub fn ej(&self, i: usize, j: usize) -> T { self.data[j * self.ld + i].clone() }
    #[inline(always)] pub fn ej_mut(&mut self, i: usize, j: usize) -> &mut T { &mut self.data[j * self.ld + i] }
}

//---------------------------------
// generic interfaces

impl<'a, S: DenseShape, T: Scalar> MatrixLike for MatrixRef<'a, S, T> {
    type Shape = S;
    type Rows = Ref;
    type Cols = Ref;
    type Elem = T;

    #[inline(always)] fn rows(&self) -> usize { self.rows }
    #[inline(always)] fn cols(&self) -> usize { self.cols }
}

impl<'a, S: DenseShape, T: Scalar> MatrixBase for MatrixRef<'a, S, T> {
    #[inline(always)] fn e(&self, i: usize, j: usize) -> T { MatrixRef::e(self, i, j) }
}

impl<'a, S: DenseShape, T: Scalar> MatrixLike for MatrixMut<'a, S, T> {
    type Shape = S;
    type Rows = Ref;
    type Cols = Ref;
    type Elem = T;

    #[inline(always)] fn rows(&self) -> usize { self.rows }
    #[inline(always)] fn cols(&self) -> usize { self.cols }
}

impl<'a, S: DenseShape, T: Scalar> MatrixBase for MatrixMut<'a, S, T> {
    #[inline(always)] fn e(&self, i: usize, j: usize) -> T { MatrixMut::e(self, i, j) }
}

impl<'a, S: DenseShape, T: Scalar> MatrixFill for MatrixMut<'a, S, T> {
    fn fill_stored<F>(&mut self, mut f: F)
    where F: FnMut(usize, usize) -> T,
    {
        self.update_stored(|i, j, x| *x = f(i, j));
    }

    fn update_stored<F>(&mut self, mut f: F)
    where F: FnMut(usize, usize, &mut T),
    {
        let (rows, cols, ld, trans) = (self.rows, self.cols, self.ld, self.trans);
        let data = &mut *self.data;
        // visit in the parent's orientation so the shape's stored set is what gets walked
        let (prows, pcols) = match trans {
            false => (rows, cols),
            true => (cols, rows),
        };
        S::for_each_stored(prows, pcols, |pi, pj| {
            if let Some(o) = S::offset(pi, pj, ld) {
                let (i, j) = match trans {
                    false => (pi, pj),
                    true => (pj, pi),
                };
                f(i, j, &mut data[o]);
            }
        });
    }

    #[inline]
    fn stored_mut(&mut self, i: usize, j: usize) -> &mut T { self.slot_mut(i, j) }
}

impl<'a, T: Scalar> SymmetricBase for MatrixRef<'a, Symmetric, T> {
    #[inline(always)] fn ei(&self, i: usize, j: usize) -> T { MatrixRef::ei(self, i, j) }
    #[inline(always)] fn ej(&self, i: usize, j: usize) -> T { MatrixRef::ej(self, i, j) }
}

impl<'a, T: Scalar> SymmetricBase for MatrixMut<'a, Symmetric, T> {
    #[inline(always)] fn ei(&self, i: usize, j: usize) -> T { MatrixMut::ei(self, i, j) }
    #[inline(always)] fn ej(&self, i: usize, j: usize) -> T { MatrixMut::ej(self, i, j) }
}

/// Single-row or single-column general views.
impl<'a, T: Scalar> VectorLike for MatrixRef<'a, General, T> {
    fn size(&self) -> usize {
        fmv_assert!(T, self.rows == 1 || self.cols == 1, "a {}x{} view is not a vector", self.rows, self.cols);
        match self.cols == 1 {
            true => self.rows,
            false => self.cols,
        }
    }

    #[inline(always)]
    fn ev(&self, i: usize) -> T {
        match self.cols == 1 {
            true => self.e(i, 0),
            false => self.e(0, i),
        }
    }
}

impl<'a, S, T> PartialEq<MatrixRef<'a, S, T>> for MatrixRef<'a, S, T>
where S: DenseShape, T: Scalar,
{
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols
            && (0..self.rows).all(|i| (0..self.cols).all(|j| self.e(i, j) == other.e(i, j)))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn counting(rows: usize, cols: usize) -> Mat<i32> {
        Mat::from_fn(rows, cols, |i, j| (10 * i + j) as i32)
    }

    #[test]
    fn general_views() {
        let m = counting(4, 5);
        let v = m.view(1..3, 2..5);
        assert_eq!((v.rows(), v.cols(), v.ldim()), (2, 3, 5));
        assert_eq!(v.to_rows(), vec![vec![12, 13, 14], vec![22, 23, 24]]);

        let t = v.t();
        assert_eq!(t.to_rows(), vec![vec![12, 22], vec![13, 23], vec![14, 24]]);
        assert_eq!(t.view(1..3, 1..2).to_rows(), vec![vec![23], vec![24]]);

        assert_eq!(m.row(3).to_rows(), vec![vec![30, 31, 32, 33, 34]]);
        assert_eq!(m.col(4).size(), 4);
        assert_eq!(m.col(4).ev(2), 24);

        // empty views at the far corner
        assert_eq!(m.view(4..4, 5..5).rows(), 0);
    }

    #[test]
    fn view_writes_reach_parent() {
        let mut m = counting(3, 3);
        {
            let mut v = m.view_mut(1..3, 1..3);
            v.set(0, 1, -1);
            let t = v.rb_mut().into_t();
            assert_eq!(t.e(1, 0), -1);
        }
        assert_eq!(m.e(1, 2), -1);

        m.set(2, 2, 99);
        assert_eq!(m.view(1..3, 1..3).e(1, 1), 99);

        m.t_mut().set(0, 2, 7);
        assert_eq!(m.e(2, 0), 7);

        let src = Mat::<i32>::filled(2, 1, 5);
        m.col_mut(0).view_mut(1..3, 0..1).assign(&src);
        assert_eq!(m.col(0).to_rows(), vec![vec![0], vec![5], vec![5]]);
    }

    #[test]
    fn symmetric_views() {
        let mut s = SymMat::<i32>::from_fn(4, 4, |i, j| (10 * i + j) as i32);
        {
            let mut v = s.view_sym_mut(1..3);
            assert_eq!(v.to_rows(), vec![vec![11, 21], vec![21, 22]]);
            v.set(0, 1, -5);
            *v.ej_mut(0, 0) = -1;
        }
        assert_eq!(s.e(1, 2), -5);
        assert_eq!(s.e(2, 1), -5);
        assert_eq!(s.e(1, 1), -1);

        *s.ei_mut(3, 2) = 100;
        assert_eq!(s.view_sym(2..4).ej(0, 1), 100);

        let copy = s.view_sym(2..4).copy();
        let _: &SymMat<i32> = &copy;
        assert_eq!(copy.to_rows(), vec![vec![22, 100], vec![100, 33]]);
    }

    #[test]
    fn view_copy_is_independent() {
        let mut m = counting(2, 2);
        let c = m.t().copy();
        m.set(0, 1, 1000);
        assert_eq!(c.to_rows(), vec![vec![0, 10], vec![1, 11]]);
    }
}
