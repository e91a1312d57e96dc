//! Sorting the rows of a matrix by one of its columns.

use crate::scalar::Scalar;
use crate::tags::{General, Var};
use crate::traits::MatrixBase;
use crate::matrix::Matrix;

/// Rows sorted in ascending order of column `col`, by bubble sort.
///
/// Stable, and `O(rows²)`.
pub fn bubble_sort<M, T>(a: &M, col: usize) -> Matrix<General, Var, Var, T>
where
    M: MatrixBase<Elem = T>,
    T: Scalar + PartialOrd,
{
    let mut a = sortable_copy(a, col);
    let n = a.rows();
    let mut swaps = 0;
    for _ in 1..n {
        for j in 0..n - 1 {
            if a.e(j, col) > a.e(j + 1, col) {
                a.swap_rows(j, j + 1);
                swaps += 1;
            }
        }
    }
    trace!("bubble_sort: {} rows by column {}, {} swaps", n, col, swaps);
    a
}

/// Rows sorted in ascending order of column `col`, by quicksort with a median-of-three
/// pivot.
///
/// Not stable.
pub fn quick_sort_median<M, T>(a: &M, col: usize) -> Matrix<General, Var, Var, T>
where
    M: MatrixBase<Elem = T>,
    T: Scalar + PartialOrd,
{
    let mut a = sortable_copy(a, col);
    let n = a.rows();
    if n > 1 {
        quick_sort_rows(&mut a, col, 0, n - 1);
    }
    trace!("quick_sort_median: {} rows by column {}", n, col);
    a
}

fn sortable_copy<M, T>(a: &M, col: usize) -> Matrix<General, Var, Var, T>
where
    M: MatrixBase<Elem = T>,
    T: Scalar,
{
    fmv_assert!(T, a.rows() > 0 && a.cols() > 0, "cannot sort a {}x{} matrix", a.rows(), a.cols());
    fmv_assert!(T, col < a.cols(), "pivot column {} out of range for {} columns", col, a.cols());
    Matrix::from_matrix(a)
}

// sorts rows l..=r
fn quick_sort_rows<T>(a: &mut Matrix<General, Var, Var, T>, col: usize, l: usize, r: usize)
where T: Scalar + PartialOrd,
{
    if r <= l {
        return;
    }
    let key = |a: &Matrix<General, Var, Var, T>, i: usize| a.e(i, col);

    // median of three; the pivot ends up in row r
    if r - l > 3 {
        let m = l + (r - l) / 2;
        if key(a, l) > key(a, m) {
            a.swap_rows(l, m);
        }
        if key(a, l) > key(a, r) {
            a.swap_rows(l, r);
        } else if key(a, r) > key(a, m) {
            a.swap_rows(r, m);
        }
    }

    let pivot = key(a, r);
    let (mut i, mut j) = (l, r);
    loop {
        // stops at r at the latest
        while key(a, i) < pivot {
            i += 1;
        }
        loop {
            j -= 1;
            if !(key(a, j) > pivot && j > i) {
                break;
            }
        }
        if i >= j {
            break;
        }
        a.swap_rows(i, j);
        i += 1;
    }
    a.swap_rows(i, r);

    if i > l {
        quick_sort_rows(a, col, l, i - 1);
    }
    quick_sort_rows(a, col, i + 1, r);
}
