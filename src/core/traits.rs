//! Traits for writing code that is generic over matrix types.

use crate::dim::DimKind;
use crate::scalar::Scalar;
use crate::shape::Shape;

/// Anything with a shape, dimensions, and an element type.
pub trait MatrixLike {
    type Shape: Shape;
    type Rows: DimKind;
    type Cols: DimKind;
    type Elem: Scalar;

    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
}

/// A matrix with dense element access.
pub trait MatrixBase: MatrixLike {
    /// Read element `(i, j)`, synthesizing positions that aren't stored.
    ///
    /// Unchecked: indices are assumed to be in range.
    fn e(&self, i: usize, j: usize) -> Self::Elem;
}

/// Writing through the stored positions of a dense matrix.
///
/// Only stored positions may be written; a symmetric matrix exposes its lower triangle,
/// a diagonal matrix its diagonal.
pub trait MatrixFill: MatrixBase {
    fn fill_stored<F>(&mut self, f: F)
    where F: FnMut(usize, usize) -> Self::Elem;

    fn update_stored<F>(&mut self, f: F)
    where F: FnMut(usize, usize, &mut Self::Elem);

    /// Unchecked mutable access to the slot backing `(i, j)`.
    fn stored_mut(&mut self, i: usize, j: usize) -> &mut Self::Elem;
}

/// Owned matrices that can be allocated at a given size.
pub trait Alloc: MatrixFill + Sized {
    fn alloc(rows: usize, cols: usize) -> Self;
}

/// Matrices with a single row or a single column.
pub trait VectorLike: MatrixBase {
    fn size(&self) -> usize;

    /// Unchecked read of element `i`.
    fn ev(&self, i: usize) -> Self::Elem;
}

/// Direct access to either triangle of a symmetric matrix.
pub trait SymmetricBase: MatrixBase {
    /// Unchecked read for `i >= j`.
    fn ei(&self, i: usize, j: usize) -> Self::Elem;

    /// Unchecked read for `i <= j`.
    fn ej(&self, i: usize, j: usize) -> Self::Elem;
}
