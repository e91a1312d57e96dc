//! Column and row vectors.
//!
//! These are general matrices with one dimension fixed at 1.  They are distinct types so
//! that e.g. a matrix-vector product can produce a vector.

use std::ops::{Deref, DerefMut, Index, IndexMut, Range};

use crate::dim::DimKind;
use crate::error::Result;
use crate::init::{Initial, INIT};
use crate::scalar::Scalar;
use crate::storage::Layout;
use crate::tags::{Fixed, General};
use crate::traits::{Alloc, MatrixBase, MatrixFill, MatrixLike, VectorLike};
use crate::view::{MatrixMut, MatrixRef};
use crate::matrix::Matrix;

/// A column vector (`n x 1`).
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<R, T = f64>(pub(crate) Matrix<General, R, Fixed<1>, T>)
where General: Layout<R, Fixed<1>, T>, R: DimKind, T: Scalar;

/// A row vector (`1 x n`).
#[derive(Debug, Clone, PartialEq)]
pub struct RowVector<C, T = f64>(pub(crate) Matrix<General, Fixed<1>, C, T>)
where General: Layout<Fixed<1>, C, T>, C: DimKind, T: Scalar;

macro_rules! impl_vector {
    (
        $Vector:ident<$K:ident>,
        matrix: $Mat:ty,
        layout: ($LR:ty, $LC:ty),
        dims: |$n:ident| ($rows:expr, $cols:expr),
        index: |$i:ident| ($ri:expr, $ci:expr),
        view: |$r:ident| ($vr:expr, $vc:expr),
        transposed: $Trans:ident,
    ) => {
        impl<$K, T> $Vector<$K, T>
        where General: Layout<$LR, $LC, T>, $K: DimKind, T: Scalar,
        {
            pub fn noinit($n: usize) -> Self { $Vector(Matrix::noinit($rows, $cols)) }
            pub fn new($n: usize) -> Self { $Vector(Matrix::new($rows, $cols)) }
            pub fn filled($n: usize, a: T) -> Self { $Vector(Matrix::filled($rows, $cols, a)) }

            pub fn with($n: usize, policy: impl Into<Initial<T>>) -> Self {
                $Vector(Matrix::with($rows, $cols, policy))
            }

            pub fn from_fn<F>($n: usize, mut f: F) -> Self
            where F: FnMut(usize) -> T,
            {
                // one of the two indices is always zero
                $Vector(Matrix::from_fn($rows, $cols, |row, col| f(row + col)))
            }

            /// Fails if the length is wrong for a fixed size.
            pub fn from_vec(data: Vec<T>) -> Result<Self> {
                let $n = data.len();
                Ok($Vector(Matrix::from_vec($rows, $cols, data)?))
            }

            #[inline(always)]
            pub fn size(&self) -> usize { self.0.rows() * self.0.cols() }

            /// Unchecked read.
            #[inline(always)]
            pub fn e(&self, $i: usize) -> T { self.0.e($ri, $ci) }

            pub fn get(&self, $i: usize) -> T {
                fmv_assert!(T, $i < self.size(), "index {} out of range for length {}", $i, self.size());
                self.e($i)
            }

            pub fn set(&mut self, $i: usize, value: T) { self.0.set($ri, $ci, value) }

            pub fn resize(&mut self, $n: usize) -> Result<()> { self.0.resize($rows, $cols) }

            pub fn copy(&self) -> Self { self.clone() }

            pub fn assign<M>(&mut self, src: &M) -> &mut Self
            where M: MatrixBase<Elem = T>,
            {
                self.0.assign(src);
                self
            }

            /// The elements in the given range.
            pub fn view(&self, $r: Range<usize>) -> MatrixRef<'_, General, T> {
                self.0.view($vr, $vc)
            }

            pub fn view_mut(&mut self, $r: Range<usize>) -> MatrixMut<'_, General, T> {
                self.0.view_mut($vr, $vc)
            }

            pub fn to_vec(&self) -> Vec<T> { self.0.as_slice().to_vec() }

            /// Copy into the transposed vector type.
            pub fn trans(&self) -> $Trans<$K, T>
            where General: Layout<$LC, $LR, T>,
            {
                $Trans::from_fn(self.size(), |i| self.e(i))
            }

            pub fn into_matrix(self) -> $Mat { self.0 }
        }

        impl<$K, T> Deref for $Vector<$K, T>
        where General: Layout<$LR, $LC, T>, $K: DimKind, T: Scalar,
        {
            type Target = $Mat;
            fn deref(&self) -> &$Mat { &self.0 }
        }

        impl<$K, T> DerefMut for $Vector<$K, T>
        where General: Layout<$LR, $LC, T>, $K: DimKind, T: Scalar,
        {
            fn deref_mut(&mut self) -> &mut $Mat { &mut self.0 }
        }

        impl<$K, T> From<$Mat> for $Vector<$K, T>
        where General: Layout<$LR, $LC, T>, $K: DimKind, T: Scalar,
        {
            fn from(m: $Mat) -> Self { $Vector(m) }
        }

        impl<$K, T> Index<usize> for $Vector<$K, T>
        where General: Layout<$LR, $LC, T>, $K: DimKind, T: Scalar,
        {
            type Output = T;
            fn index(&self, $i: usize) -> &T { &self.0[($ri, $ci)] }
        }

        impl<$K, T> IndexMut<usize> for $Vector<$K, T>
        where General: Layout<$LR, $LC, T>, $K: DimKind, T: Scalar,
        {
            fn index_mut(&mut self, $i: usize) -> &mut T { &mut self.0[($ri, $ci)] }
        }

        impl<$K, T> MatrixLike for $Vector<$K, T>
        where General: Layout<$LR, $LC, T>, $K: DimKind, T: Scalar,
        {
            type Shape = General;
            type Rows = $LR;
            type Cols = $LC;
            type Elem = T;

            #[inline(always)] fn rows(&self) -> usize { self.0.rows() }
            #[inline(always)] fn cols(&self) -> usize { self.0.cols() }
        }

        impl<$K, T> MatrixBase for $Vector<$K, T>
        where General: Layout<$LR, $LC, T>, $K: DimKind, T: Scalar,
        {
            #[inline(always)] fn e(&self, i: usize, j: usize) -> T { self.0.e(i, j) }
        }

        impl<$K, T> MatrixFill for $Vector<$K, T>
        where General: Layout<$LR, $LC, T>, $K: DimKind, T: Scalar,
        {
            fn fill_stored<F>(&mut self, f: F)
            where F: FnMut(usize, usize) -> T,
            { self.0.fill_stored(f) }

            fn update_stored<F>(&mut self, f: F)
            where F: FnMut(usize, usize, &mut T),
            { self.0.update_stored(f) }

            fn stored_mut(&mut self, i: usize, j: usize) -> &mut T { self.0.stored_mut(i, j) }
        }

        impl<$K, T> Alloc for $Vector<$K, T>
        where General: Layout<$LR, $LC, T>, $K: DimKind, T: Scalar,
        {
            fn alloc(rows: usize, cols: usize) -> Self { $Vector(Matrix::noinit(rows, cols)) }
        }

        impl<$K, T> VectorLike for $Vector<$K, T>
        where General: Layout<$LR, $LC, T>, $K: DimKind, T: Scalar,
        {
            #[inline(always)] fn size(&self) -> usize { $Vector::size(self) }
            #[inline(always)] fn ev(&self, i: usize) -> T { $Vector::e(self, i) }
        }

        impl<T: Scalar, const N: usize> $Vector<Fixed<N>, T> {
            pub fn fixed(policy: impl Into<Initial<T>>) -> Self { Self::with(N, policy) }

            pub fn from_array(data: [T; N]) -> Self { Self::from_fn(N, |i| data[i].clone()) }
        }

        impl<T: Scalar, const N: usize> Default for $Vector<Fixed<N>, T> {
            fn default() -> Self { Self::fixed(INIT) }
        }
    };
}

impl_vector! {
    Vector<R>,
    matrix: Matrix<General, R, Fixed<1>, T>,
    layout: (R, Fixed<1>),
    dims: |n| (n, 1),
    index: |i| (i, 0),
    view: |range| (range, 0..1),
    transposed: RowVector,
}

impl_vector! {
    RowVector<C>,
    matrix: Matrix<General, Fixed<1>, C, T>,
    layout: (Fixed<1>, C),
    dims: |n| (1, n),
    index: |i| (0, i),
    view: |range| (0..1, range),
    transposed: Vector,
}
