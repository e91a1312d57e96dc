//! Storage layouts, one per combination of shape and dimension kinds.
//!
//! All dense layouts are row-major.  `ldim` is the distance between the starts of
//! successive rows.

use std::fmt::Debug;

use slice_of_array::prelude::*;

use crate::dim::DimKind;
use crate::scalar::Scalar;
use crate::shape::Shape;
use crate::tags::{Diagonal, Fixed, General, Rotation, Sparse, Symmetric, SymmetricSparse, Var};

/// A buffer that knows its matrix dimensions.
pub trait Store<T>: Clone + Debug {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn ldim(&self) -> usize;
    fn as_slice(&self) -> &[T];
    fn as_mut_slice(&mut self) -> &mut [T];
}

/// Chooses the storage of a matrix of shape `Self` with the given dimension kinds.
///
/// Combinations that have no impl cannot be instantiated.
pub trait Layout<R, C, T>: Shape {
    type Store: Store<T>;

    /// Allocate zeroed storage.  Dimensions are assumed to be valid for the kinds.
    fn alloc(rows: usize, cols: usize) -> Self::Store;
}

//---------------------------------

/// Inline storage for `M x N` fixed matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct Inline<T, const M: usize, const N: usize> {
    data: [[T; N]; M],
}

impl<T: Scalar, const M: usize, const N: usize> Inline<T, M, N> {
    pub fn zeros() -> Self {
        Inline { data: std::array::from_fn(|_| std::array::from_fn(|_| T::zero())) }
    }

    pub fn from_array(data: [[T; N]; M]) -> Self { Inline { data } }
}

impl<T: Scalar, const M: usize, const N: usize> Store<T> for Inline<T, M, N> {
    #[inline(always)] fn rows(&self) -> usize { M }
    #[inline(always)] fn cols(&self) -> usize { N }
    #[inline(always)] fn ldim(&self) -> usize { N }
    #[inline(always)] fn as_slice(&self) -> &[T] { self.data[..].flat() }
    #[inline(always)] fn as_mut_slice(&mut self) -> &mut [T] { self.data[..].flat_mut() }
}

/// Heap storage that remembers only the dimensions that aren't fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct Heap<R: DimKind, C: DimKind, T> {
    data: Vec<T>,
    rows: R::Extent,
    cols: C::Extent,
}

impl<R: DimKind, C: DimKind, T: Scalar> Heap<R, C, T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Heap {
            data: vec![T::zero(); rows * cols],
            rows: R::extent(rows),
            cols: C::extent(cols),
        }
    }
}

impl<R: DimKind, C: DimKind, T: Scalar> Store<T> for Heap<R, C, T> {
    #[inline(always)] fn rows(&self) -> usize { R::get(self.rows) }
    #[inline(always)] fn cols(&self) -> usize { C::get(self.cols) }
    #[inline(always)] fn ldim(&self) -> usize { C::get(self.cols) }
    #[inline(always)] fn as_slice(&self) -> &[T] { &self.data }
    #[inline(always)] fn as_mut_slice(&mut self) -> &mut [T] { &mut self.data }
}

/// Inline storage of the diagonal of an `N x N` matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagInline<T, const N: usize>([T; N]);

/// Heap storage of the diagonal of a square matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagHeap<T>(Vec<T>);

impl<T: Scalar, const N: usize> Store<T> for DiagInline<T, N> {
    #[inline(always)] fn rows(&self) -> usize { N }
    #[inline(always)] fn cols(&self) -> usize { N }
    #[inline(always)] fn ldim(&self) -> usize { 1 }
    #[inline(always)] fn as_slice(&self) -> &[T] { &self.0 }
    #[inline(always)] fn as_mut_slice(&mut self) -> &mut [T] { &mut self.0 }
}

impl<T: Scalar> Store<T> for DiagHeap<T> {
    #[inline(always)] fn rows(&self) -> usize { self.0.len() }
    #[inline(always)] fn cols(&self) -> usize { self.0.len() }
    #[inline(always)] fn ldim(&self) -> usize { 1 }
    #[inline(always)] fn as_slice(&self) -> &[T] { &self.0 }
    #[inline(always)] fn as_mut_slice(&mut self) -> &mut [T] { &mut self.0 }
}

/// Compressed sparse rows.
///
/// Row `i` consists of the entries `ip[i]..ip[i + 1]` of `jp` (columns) and `values`.
#[derive(Debug, Clone, PartialEq)]
pub struct Csr<T> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) ip: Vec<usize>,
    pub(crate) jp: Vec<usize>,
    pub(crate) values: Vec<T>,
}

impl<T> Csr<T> {
    pub(crate) fn empty(rows: usize, cols: usize) -> Self {
        Csr { rows, cols, ip: vec![0; rows + 1], jp: vec![], values: vec![] }
    }
}

// `as_slice` gives the explicit values; there is no leading dimension to speak of.
impl<T: Scalar> Store<T> for Csr<T> {
    #[inline(always)] fn rows(&self) -> usize { self.rows }
    #[inline(always)] fn cols(&self) -> usize { self.cols }
    #[inline(always)] fn ldim(&self) -> usize { self.cols }
    #[inline(always)] fn as_slice(&self) -> &[T] { &self.values }
    #[inline(always)] fn as_mut_slice(&mut self) -> &mut [T] { &mut self.values }
}

//---------------------------------

impl<T: Scalar, const M: usize, const N: usize> Layout<Fixed<M>, Fixed<N>, T> for General {
    type Store = Inline<T, M, N>;
    fn alloc(_: usize, _: usize) -> Self::Store { Inline::zeros() }
}

macro_rules! heap_layouts {
    ($Tag:ty: $( [$($generics:tt)*] ($R:ty, $C:ty) ),* $(,)?) => {$(
        impl<T: Scalar, $($generics)*> Layout<$R, $C, T> for $Tag {
            type Store = Heap<$R, $C, T>;
            fn alloc(rows: usize, cols: usize) -> Self::Store { Heap::zeros(rows, cols) }
        }
    )*};
}

heap_layouts!{General:
    [const M: usize] (Fixed<M>, Var),
    [const N: usize] (Var, Fixed<N>),
    [] (Var, Var),
}
heap_layouts!{Symmetric: [] (Var, Var)}
heap_layouts!{Rotation: [] (Var, Var)}

impl<T: Scalar, const N: usize> Layout<Fixed<N>, Fixed<N>, T> for Symmetric {
    type Store = Inline<T, N, N>;
    fn alloc(_: usize, _: usize) -> Self::Store { Inline::zeros() }
}

impl<T: Scalar, const N: usize> Layout<Fixed<N>, Fixed<N>, T> for Rotation {
    type Store = Inline<T, N, N>;
    fn alloc(_: usize, _: usize) -> Self::Store { Inline::zeros() }
}

impl<T: Scalar, const N: usize> Layout<Fixed<N>, Fixed<N>, T> for Diagonal {
    type Store = DiagInline<T, N>;
    fn alloc(_: usize, _: usize) -> Self::Store {
        DiagInline(std::array::from_fn(|_| T::zero()))
    }
}

impl<T: Scalar> Layout<Var, Var, T> for Diagonal {
    type Store = DiagHeap<T>;
    fn alloc(rows: usize, _: usize) -> Self::Store { DiagHeap(vec![T::zero(); rows]) }
}

impl<T: Scalar> Layout<Var, Var, T> for Sparse {
    type Store = Csr<T>;
    fn alloc(rows: usize, cols: usize) -> Self::Store { Csr::empty(rows, cols) }
}

impl<T: Scalar> Layout<Var, Var, T> for SymmetricSparse {
    type Store = Csr<T>;
    fn alloc(rows: usize, cols: usize) -> Self::Store { Csr::empty(rows, cols) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_dims_are_free() {
        use std::mem::size_of;
        assert_eq!(size_of::<Inline<f64, 2, 3>>(), 6 * size_of::<f64>());
        assert_eq!(size_of::<Heap<Fixed<3>, Var, f64>>(), size_of::<Heap<Var, Fixed<3>, f64>>());
        assert!(size_of::<Heap<Var, Var, f64>>() > size_of::<Heap<Fixed<3>, Var, f64>>());
    }

    #[test]
    fn inline_is_row_major() {
        let store = Inline::from_array([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(store.as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!((store.rows(), store.cols(), store.ldim()), (2, 3, 3));
    }

    #[test]
    fn heap_extents() {
        let store = <General as Layout<Var, Fixed<2>, f64>>::alloc(4, 2);
        assert_eq!((store.rows(), store.cols()), (4, 2));
        assert_eq!(store.as_slice().len(), 8);
    }
}
