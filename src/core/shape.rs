//! Addressing rules of each shape.

use std::fmt::Debug;

use crate::error::Error;
use crate::scalar::Scalar;
use crate::tags::{Diagonal, General, Rotation, Sparse, Symmetric, SymmetricSparse};

pub trait Shape: Copy + Default + Debug + PartialEq + 'static {
    const NAME: &'static str;

    /// Must rows equal columns?
    const SQUARE: bool;
}

/// A shape whose storage is a row-major buffer with a leading dimension.
///
/// The offsets here are relative to the start of the (possibly viewed) buffer, so the
/// same rules serve owned matrices and views.
pub trait DenseShape: Shape {
    /// Is `(i, j)` a position that is physically written?
    fn is_stored(i: usize, j: usize) -> bool;

    /// Offset of the storage slot backing `(i, j)`, if there is one.
    ///
    /// For a symmetric shape this is the slot of the mirrored element when `j > i`.
    fn offset(i: usize, j: usize, ld: usize) -> Option<usize>;

    /// Visit every stored position, in row-major order.
    fn for_each_stored<F: FnMut(usize, usize)>(rows: usize, cols: usize, f: F);

    /// Read `(i, j)`, synthesizing the positions that have no slot.
    #[inline]
    fn read<T: Scalar>(data: &[T], ld: usize, i: usize, j: usize) -> T {
        match Self::offset(i, j, ld) {
            Some(o) => data[o].clone(),
            None => T::zero(),
        }
    }

    /// The error for dense input that disagrees with the shape at a position that
    /// `is_stored` rejects.
    fn shape_error(row: usize, col: usize) -> Error {
        Error::NotSymmetric { row, col }
    }
}

/// Shapes that store a single triangle.
pub trait SymmetricShape: Shape {}

impl SymmetricShape for Symmetric {}
impl SymmetricShape for SymmetricSparse {}

macro_rules! shape_tags {
    ($($Tag:ty => $name:expr, square: $square:expr;)*) => {$(
        impl Shape for $Tag {
            const NAME: &'static str = $name;
            const SQUARE: bool = $square;
        }
    )*};
}

shape_tags! {
    General => "general", square: false;
    Symmetric => "symmetric", square: true;
    Diagonal => "diagonal", square: true;
    Sparse => "sparse", square: false;
    SymmetricSparse => "symmetric sparse", square: true;
    Rotation => "rotation", square: true;
}

macro_rules! full_storage {
    ($Tag:ty) => {
        impl DenseShape for $Tag {
            #[inline(always)]
            fn is_stored(_: usize, _: usize) -> bool { true }

            #[inline(always)]
            fn offset(i: usize, j: usize, ld: usize) -> Option<usize> { Some(i * ld + j) }

            fn for_each_stored<F: FnMut(usize, usize)>(rows: usize, cols: usize, mut f: F) {
                for i in 0..rows {
                    for j in 0..cols {
                        f(i, j);
                    }
                }
            }
        }
    };
}

full_storage!(General);
full_storage!(Rotation);

impl DenseShape for Symmetric {
    #[inline(always)]
    fn is_stored(i: usize, j: usize) -> bool { i >= j }

    #[inline(always)]
    fn offset(i: usize, j: usize, ld: usize) -> Option<usize> {
        match i >= j {
            true => Some(i * ld + j),
            false => Some(j * ld + i),
        }
    }

    fn for_each_stored<F: FnMut(usize, usize)>(rows: usize, _cols: usize, mut f: F) {
        for i in 0..rows {
            for j in 0..=i {
                f(i, j);
            }
        }
    }
}

impl DenseShape for Diagonal {
    #[inline(always)]
    fn is_stored(i: usize, j: usize) -> bool { i == j }

    // the diagonal is stored contiguously regardless of ld
    #[inline(always)]
    fn offset(i: usize, j: usize, _ld: usize) -> Option<usize> {
        match i == j {
            true => Some(i),
            false => None,
        }
    }

    fn for_each_stored<F: FnMut(usize, usize)>(rows: usize, cols: usize, mut f: F) {
        for i in 0..rows.min(cols) {
            f(i, i);
        }
    }

    fn shape_error(row: usize, col: usize) -> Error {
        Error::NotDiagonal { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored<S: DenseShape>(n: usize) -> Vec<(usize, usize)> {
        let mut out = vec![];
        S::for_each_stored(n, n, |i, j| out.push((i, j)));
        out
    }

    #[test]
    fn stored_positions() {
        assert_eq!(stored::<General>(2), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(stored::<Symmetric>(2), vec![(0, 0), (1, 0), (1, 1)]);
        assert_eq!(stored::<Diagonal>(3), vec![(0, 0), (1, 1), (2, 2)]);
        for (i, j) in stored::<Symmetric>(4) {
            assert!(Symmetric::is_stored(i, j));
        }
    }

    #[test]
    fn symmetric_reads_mirror() {
        // lower triangle of [[1, 2], [2, 3]] with ld 2; slot 1 is never used
        let data = [1.0, -99.0, 2.0, 3.0];
        assert_eq!(Symmetric::read(&data, 2, 0, 1), 2.0);
        assert_eq!(Symmetric::read(&data, 2, 1, 0), 2.0);
        assert_eq!(Diagonal::read(&[1.0, 3.0], 2, 0, 1), 0.0);
        assert_eq!(Diagonal::read(&[1.0, 3.0], 2, 1, 1), 3.0);
    }
}
