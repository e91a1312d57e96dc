/* ************************************************************************ **
** This file is part of fmatvec, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use crate::config::Tolerances;
use crate::dim::DimKind;
use crate::error::{Error, Result};
use crate::init::{Initial, INIT};
use crate::scalar::Scalar;
use crate::shape::DenseShape;
use crate::storage::{Layout, Store};
use crate::tags::Fixed;
use crate::traits::{Alloc, MatrixBase, MatrixFill, MatrixLike};

/// A matrix of shape `S` whose dimensions have kinds `R` and `C`.
///
/// The storage is picked by `S: Layout<R, C, T>`; a `Matrix<General, Fixed<3>, Fixed<3>>`
/// is an inline array, while a `Matrix<Symmetric, Var, Var>` is a heap buffer of which
/// only the lower triangle is used.
///
/// Matrices always own their storage.  Use [`MatrixRef`](crate::MatrixRef) and
/// [`MatrixMut`](crate::MatrixMut) for views.
pub struct Matrix<S, R, C, T = f64>
where
    S: Layout<R, C, T>,
    R: DimKind,
    C: DimKind,
    T: Scalar,
{
    pub(crate) store: S::Store,
    kinds: PhantomData<(S, R, C)>,
}

impl<S, R, C, T> Clone for Matrix<S, R, C, T>
where S: Layout<R, C, T>, R: DimKind, C: DimKind, T: Scalar,
{
    fn clone(&self) -> Self { Matrix::from_store(self.store.clone()) }
}

impl<S, R, C, T> fmt::Debug for Matrix<S, R, C, T>
where S: Layout<R, C, T>, R: DimKind, C: DimKind, T: Scalar,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("shape", &S::NAME)
            .field("rows", &self.store.rows())
            .field("cols", &self.store.cols())
            .field("store", &self.store)
            .finish()
    }
}

/// Storage-level access, for every shape.
impl<S, R, C, T> Matrix<S, R, C, T>
where S: Layout<R, C, T>, R: DimKind, C: DimKind, T: Scalar,
{
    #[inline(always)]
    pub(crate) fn from_store(store: S::Store) -> Self {
        Matrix { store, kinds: PhantomData }
    }

    #[inline(always)] pub fn rows(&self) -> usize { self.store.rows() }
    #[inline(always)] pub fn cols(&self) -> usize { self.store.cols() }

    /// Distance between the starts of successive rows in `as_slice`.
    #[inline(always)] pub fn ldim(&self) -> usize { self.store.ldim() }

    /// The storage buffer, row-major.
    ///
    /// For a symmetric matrix, only the lower triangle of this buffer is meaningful.
    #[inline(always)] pub fn as_slice(&self) -> &[T] { self.store.as_slice() }
    #[inline(always)] pub fn as_mut_slice(&mut self) -> &mut [T] { self.store.as_mut_slice() }

    /// Deep copy.  Equivalent to `clone`.
    pub fn copy(&self) -> Self { self.clone() }

    /// Check that `(rows, cols)` is a legal size for this type.
    pub(crate) fn check_dims(rows: usize, cols: usize) -> Result<()> {
        R::check(rows)?;
        C::check(cols)?;
        if S::SQUARE && rows != cols {
            return Err(Error::NotSquare { rows, cols });
        }
        Ok(())
    }
}

/// Dense matrices.
impl<S, R, C, T> Matrix<S, R, C, T>
where S: Layout<R, C, T> + DenseShape, R: DimKind, C: DimKind, T: Scalar,
{
    /// A matrix with unspecified contents.
    ///
    /// A fixed dimension must be given its compile-time size, and square shapes must be
    /// square.  When contract checks are compiled out (release builds, default scalars) a
    /// wrong size for a fixed dimension is ignored and the compile-time size wins.
    pub fn noinit(rows: usize, cols: usize) -> Self {
        fmv_assert!(T, R::accepts(rows), "{} rows given to a dimension of kind {:?}", rows, R::default());
        fmv_assert!(T, C::accepts(cols), "{} cols given to a dimension of kind {:?}", cols, C::default());
        fmv_assert!(T, !S::SQUARE || rows == cols, "a {} matrix must be square, got {}x{}", S::NAME, rows, cols);
        Matrix::from_store(S::alloc(rows, cols))
    }

    /// A matrix of zeros.
    pub fn new(rows: usize, cols: usize) -> Self { Self::filled(rows, cols, T::zero()) }

    /// Every stored element set to `a`.  (for a symmetric matrix, that's every element)
    pub fn filled(rows: usize, cols: usize, a: T) -> Self {
        let mut m = Self::noinit(rows, cols);
        m.init(a);
        m
    }

    pub fn eye(rows: usize, cols: usize) -> Self { Self::eye_with(rows, cols, T::one()) }

    /// `d` on the diagonal and zero elsewhere.  Need not be square for `General`.
    pub fn eye_with(rows: usize, cols: usize, d: T) -> Self {
        let mut m = Self::noinit(rows, cols);
        m.init_eye(d);
        m
    }

    /// Construct with an initialization policy (`NONINIT`, `INIT`, `EYE`, or an `Initial`).
    ///
    /// Sizes are checked as in [`noinit`](Self::noinit); a fixed dimension keeps its
    /// compile-time size when those checks are compiled out.
    pub fn with(rows: usize, cols: usize, policy: impl Into<Initial<T>>) -> Self {
        let mut m = Self::noinit(rows, cols);
        m.apply(policy.into());
        m
    }

    /// Compute every stored element from its position.
    pub fn from_fn<F>(rows: usize, cols: usize, f: F) -> Self
    where F: FnMut(usize, usize) -> T,
    {
        let mut m = Self::noinit(rows, cols);
        m.fill_stored(f);
        m
    }

    /// Read the stored positions of this type out of any dense matrix.
    ///
    /// Nothing is verified about the positions that aren't read; converting a general
    /// matrix to a symmetric one takes its lower triangle as-is.
    pub fn from_matrix<M>(src: &M) -> Self
    where M: MatrixBase<Elem = T>,
    {
        Self::from_fn(src.rows(), src.cols(), |i, j| src.e(i, j))
    }

    pub fn init(&mut self, a: T) -> &mut Self {
        self.fill_stored(|_, _| a.clone());
        self
    }

    pub fn init_eye(&mut self, d: T) -> &mut Self {
        self.fill_stored(|i, j| match i == j {
            true => d.clone(),
            false => T::zero(),
        });
        self
    }

    fn apply(&mut self, policy: Initial<T>) {
        match policy {
            Initial::Noinit => {},
            Initial::Fill(a) => { self.init(a); },
            Initial::Eye(d) => { self.init_eye(d); },
        }
    }

    /// Unchecked read.  Positions that aren't stored are synthesized.
    #[inline(always)]
    pub fn e(&self, i: usize, j: usize) -> T {
        S::read(self.store.as_slice(), self.store.ldim(), i, j)
    }

    /// Checked read.
    pub fn get(&self, i: usize, j: usize) -> T {
        self.check_index(i, j);
        self.e(i, j)
    }

    /// Checked write.  `(i, j)` must have a storage slot (for a symmetric matrix, writing
    /// either `(i, j)` or `(j, i)` writes the same slot).
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.check_index(i, j);
        *self.slot_mut(i, j) = value;
    }

    #[inline]
    fn check_index(&self, i: usize, j: usize) {
        fmv_assert!(
            T, i < self.rows() && j < self.cols(),
            "index ({}, {}) out of range for a {}x{} matrix", i, j, self.rows(), self.cols(),
        );
    }

    fn slot_mut(&mut self, i: usize, j: usize) -> &mut T {
        let ld = self.ldim();
        match S::offset(i, j, ld) {
            Some(o) => &mut self.store.as_mut_slice()[o],
            None => fmv_fail!(T, "({}, {}) is not stored in a {} matrix", i, j, S::NAME),
        }
    }

    /// Change the size.
    ///
    /// Runtime dimensions are reallocated and the old contents discarded. A fixed
    /// dimension may only be "resized" to its own size, which leaves the contents alone.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        Self::check_dims(rows, cols)?;
        if R::FIXED.is_none() || C::FIXED.is_none() {
            debug!(
                "reallocating {} matrix: {}x{} -> {}x{}",
                S::NAME, self.rows(), self.cols(), rows, cols,
            );
            self.store = S::alloc(rows, cols);
        }
        Ok(())
    }

    /// `resize`, then apply an initialization policy.
    pub fn resize_with(&mut self, rows: usize, cols: usize, policy: impl Into<Initial<T>>) -> Result<()> {
        self.resize(rows, cols)?;
        self.apply(policy.into());
        Ok(())
    }

    /// Copy values from another matrix of the same size.
    ///
    /// Only this matrix's stored positions are read from `src`.
    pub fn assign<M>(&mut self, src: &M) -> &mut Self
    where M: MatrixBase<Elem = T>,
    {
        fmv_assert!(
            T, self.rows() == src.rows() && self.cols() == src.cols(),
            "cannot assign {}x{} to {}x{}", src.rows(), src.cols(), self.rows(), self.cols(),
        );
        self.fill_stored(|i, j| src.e(i, j));
        self
    }

    /// Apply a function to every stored element.
    pub fn map<U, F>(&self, mut f: F) -> Matrix<S, R, C, U>
    where
        U: Scalar,
        S: Layout<R, C, U>,
        F: FnMut(T) -> U,
    {
        Matrix::from_fn(self.rows(), self.cols(), |i, j| f(self.e(i, j)))
    }

    /// Every element, including synthesized ones, as a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.rows())
            .map(|i| (0..self.cols()).map(|j| self.e(i, j)).collect())
            .collect()
    }

    /// Construct from a full list of rows.
    ///
    /// Unlike `from_matrix`, the positions this shape doesn't store are checked against
    /// what it would synthesize, with the default tolerances.
    pub fn from_rows<Row: AsRef<[T]>>(rows: &[Row]) -> Result<Self> {
        Self::from_rows_with_tol(rows, &Tolerances::default())
    }

    pub fn from_rows_with_tol<Row: AsRef<[T]>>(rows: &[Row], tol: &Tolerances) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |row| row.as_ref().len());
        for (row, r) in rows.iter().enumerate() {
            let found = r.as_ref().len();
            if found != ncols {
                return Err(Error::RaggedRows { row, expected: ncols, found });
            }
        }
        Self::check_dims(nrows, ncols)?;

        let m = Self::from_fn(nrows, ncols, |i, j| rows[i].as_ref()[j].clone());
        for i in 0..nrows {
            for j in 0..ncols {
                if S::is_stored(i, j) {
                    continue;
                }
                let given = &rows[i].as_ref()[j];
                let kept = m.e(i, j);
                if !tol.symmetric_close((given.clone() - kept).modulus(), given.modulus()) {
                    return Err(S::shape_error(i, j));
                }
            }
        }
        Ok(m)
    }

    /// Overwrite each stored element with a function of itself and the matching element
    /// of `other`.
    pub(crate) fn zip_assign<M, F>(&mut self, other: &M, mut f: F)
    where
        M: MatrixBase,
        F: FnMut(T, M::Elem) -> T,
    {
        fmv_assert!(
            T, self.rows() == other.rows() && self.cols() == other.cols(),
            "size mismatch: {}x{} vs {}x{}", self.rows(), self.cols(), other.rows(), other.cols(),
        );
        self.update_stored(|i, j, x| {
            let old = std::mem::replace(x, T::zero());
            *x = f(old, other.e(i, j));
        });
    }
}

/// Fixed-size matrices.
impl<S, T, const M: usize, const N: usize> Matrix<S, Fixed<M>, Fixed<N>, T>
where S: Layout<Fixed<M>, Fixed<N>, T> + DenseShape, T: Scalar,
{
    /// Construct without giving sizes.
    pub fn fixed(policy: impl Into<Initial<T>>) -> Self { Self::with(M, N, policy) }

    /// From nested arrays.  Only the stored positions are read.
    pub fn from_array(rows: [[T; N]; M]) -> Self {
        Self::from_fn(M, N, |i, j| rows[i][j].clone())
    }
}

impl<S, T, const M: usize, const N: usize> Default for Matrix<S, Fixed<M>, Fixed<N>, T>
where S: Layout<Fixed<M>, Fixed<N>, T> + DenseShape, T: Scalar,
{
    fn default() -> Self { Self::fixed(INIT) }
}

//---------------------------------

impl<S, R, C, T> MatrixLike for Matrix<S, R, C, T>
where S: Layout<R, C, T>, R: DimKind, C: DimKind, T: Scalar,
{
    type Shape = S;
    type Rows = R;
    type Cols = C;
    type Elem = T;

    #[inline(always)] fn rows(&self) -> usize { self.store.rows() }
    #[inline(always)] fn cols(&self) -> usize { self.store.cols() }
}

impl<S, R, C, T> MatrixBase for Matrix<S, R, C, T>
where S: Layout<R, C, T> + DenseShape, R: DimKind, C: DimKind, T: Scalar,
{
    #[inline(always)]
    fn e(&self, i: usize, j: usize) -> T { Matrix::e(self, i, j) }
}

impl<S, R, C, T> MatrixFill for Matrix<S, R, C, T>
where S: Layout<R, C, T> + DenseShape, R: DimKind, C: DimKind, T: Scalar,
{
    fn fill_stored<F>(&mut self, mut f: F)
    where F: FnMut(usize, usize) -> T,
    {
        let (rows, cols, ld) = (self.rows(), self.cols(), self.ldim());
        let data = self.store.as_mut_slice();
        S::for_each_stored(rows, cols, |i, j| {
            if let Some(o) = S::offset(i, j, ld) {
                data[o] = f(i, j);
            }
        });
    }

    fn update_stored<F>(&mut self, mut f: F)
    where F: FnMut(usize, usize, &mut T),
    {
        let (rows, cols, ld) = (self.rows(), self.cols(), self.ldim());
        let data = self.store.as_mut_slice();
        S::for_each_stored(rows, cols, |i, j| {
            if let Some(o) = S::offset(i, j, ld) {
                f(i, j, &mut data[o]);
            }
        });
    }

    #[inline]
    fn stored_mut(&mut self, i: usize, j: usize) -> &mut T { self.slot_mut(i, j) }
}

impl<S, R, C, T> Alloc for Matrix<S, R, C, T>
where S: Layout<R, C, T> + DenseShape, R: DimKind, C: DimKind, T: Scalar,
{
    fn alloc(rows: usize, cols: usize) -> Self { Matrix::noinit(rows, cols) }
}

/// Elementwise comparison of dense matrices of any shapes, including the synthesized
/// elements.
impl<S1, R1, C1, S2, R2, C2, T> PartialEq<Matrix<S2, R2, C2, T>> for Matrix<S1, R1, C1, T>
where
    S1: Layout<R1, C1, T> + DenseShape, R1: DimKind, C1: DimKind,
    S2: Layout<R2, C2, T> + DenseShape, R2: DimKind, C2: DimKind,
    T: Scalar,
{
    fn eq(&self, other: &Matrix<S2, R2, C2, T>) -> bool {
        self.rows() == other.rows()
            && self.cols() == other.cols()
            && (0..self.rows()).all(|i| (0..self.cols()).all(|j| self.e(i, j) == other.e(i, j)))
    }
}

impl<S, R, C, T> Index<(usize, usize)> for Matrix<S, R, C, T>
where S: Layout<R, C, T> + DenseShape, R: DimKind, C: DimKind, T: Scalar,
{
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        self.check_index(i, j);
        match S::offset(i, j, self.ldim()) {
            Some(o) => &self.store.as_slice()[o],
            None => fmv_fail!(T, "({}, {}) is not stored in a {} matrix", i, j, S::NAME),
        }
    }
}

impl<S, R, C, T> IndexMut<(usize, usize)> for Matrix<S, R, C, T>
where S: Layout<R, C, T> + DenseShape, R: DimKind, C: DimKind, T: Scalar,
{
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        self.check_index(i, j);
        self.slot_mut(i, j)
    }
}
