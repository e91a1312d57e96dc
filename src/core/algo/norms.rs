use crate::dim::DimKind;
use crate::scalar::Scalar;
use crate::shape::DenseShape;
use crate::storage::Layout;
use crate::tags::{Fixed, General};
use crate::traits::{MatrixBase, VectorLike};
use crate::matrix::Matrix;
use crate::square::SquareMatrix;
use crate::vector::{RowVector, Vector};
use crate::view::{MatrixMut, MatrixRef};

/// Norms, computed on element moduli.
///
/// Matrices and views use the induced norms (`nrm1` is the largest column sum, `nrm_inf`
/// the largest row sum).  `Vector` and `RowVector` use the vector norms, which is why
/// this is a trait and not a set of functions over [`MatrixBase`].
pub trait Norm {
    fn nrm1(&self) -> f64;
    fn nrm_inf(&self) -> f64;

    /// Frobenius norm.  (the 2-norm, for vectors)
    fn nrm_fro(&self) -> f64;
}

pub fn nrm1<M: Norm + ?Sized>(m: &M) -> f64 { m.nrm1() }
pub fn nrm_inf<M: Norm + ?Sized>(m: &M) -> f64 { m.nrm_inf() }
pub fn nrm_fro<M: Norm + ?Sized>(m: &M) -> f64 { m.nrm_fro() }

/// Euclidean norm of a vector, row or column.
///
/// There is no matrix version; the spectral norm needs a singular value decomposition.
pub fn nrm2<V: VectorLike + ?Sized>(x: &V) -> f64 {
    (0..x.size()).map(|i| x.ev(i).modulus().powi(2)).sum::<f64>().sqrt()
}

fn matrix_nrm1<M: MatrixBase + ?Sized>(m: &M) -> f64 {
    (0..m.cols())
        .map(|j| (0..m.rows()).map(|i| m.e(i, j).modulus()).sum::<f64>())
        .fold(0.0, f64::max)
}

fn matrix_nrm_inf<M: MatrixBase + ?Sized>(m: &M) -> f64 {
    (0..m.rows())
        .map(|i| (0..m.cols()).map(|j| m.e(i, j).modulus()).sum::<f64>())
        .fold(0.0, f64::max)
}

fn matrix_nrm_fro<M: MatrixBase + ?Sized>(m: &M) -> f64 {
    let mut acc = 0.0;
    for i in 0..m.rows() {
        for j in 0..m.cols() {
            acc += m.e(i, j).modulus().powi(2);
        }
    }
    acc.sqrt()
}

macro_rules! impl_matrix_norm {
    ($([$($generics:tt)*] $Type:ty where [$($bound:tt)*];)*) => {$(
        impl<$($generics)*> Norm for $Type
        where $($bound)*
        {
            fn nrm1(&self) -> f64 { matrix_nrm1(self) }
            fn nrm_inf(&self) -> f64 { matrix_nrm_inf(self) }
            fn nrm_fro(&self) -> f64 { matrix_nrm_fro(self) }
        }
    )*};
}

impl_matrix_norm!{
    [S, R, C, T] Matrix<S, R, C, T> where [S: Layout<R, C, T> + DenseShape, R: DimKind, C: DimKind, T: Scalar,];
    ['a, S, T] MatrixRef<'a, S, T> where [S: DenseShape, T: Scalar,];
    ['a, S, T] MatrixMut<'a, S, T> where [S: DenseShape, T: Scalar,];
    [R, T] SquareMatrix<R, T> where [General: Layout<R, R, T>, R: DimKind, T: Scalar,];
}

macro_rules! impl_vector_norm {
    ($([$K:ident] $Type:ty where [$($bound:tt)*];)*) => {$(
        impl<$K, T> Norm for $Type
        where $($bound)*
        {
            fn nrm1(&self) -> f64 { (0..self.size()).map(|i| self.e(i).modulus()).sum() }

            fn nrm_inf(&self) -> f64 {
                (0..self.size()).map(|i| self.e(i).modulus()).fold(0.0, f64::max)
            }

            fn nrm_fro(&self) -> f64 { nrm2(self) }
        }
    )*};
}

impl_vector_norm!{
    [R] Vector<R, T> where [General: Layout<R, Fixed<1>, T>, R: DimKind, T: Scalar,];
    [C] RowVector<C, T> where [General: Layout<Fixed<1>, C, T>, C: DimKind, T: Scalar,];
}

//---------------------------------

/// The largest element.  The vector must not be empty.
pub fn max<V>(x: &V) -> V::Elem
where V: VectorLike + ?Sized, V::Elem: PartialOrd,
{
    x.ev(max_index(x))
}

pub fn min<V>(x: &V) -> V::Elem
where V: VectorLike + ?Sized, V::Elem: PartialOrd,
{
    x.ev(min_index(x))
}

/// Position of the first occurrence of the largest element.
pub fn max_index<V>(x: &V) -> usize
where V: VectorLike + ?Sized, V::Elem: PartialOrd,
{
    extreme_index(x, |candidate, best| candidate > best)
}

/// Position of the first occurrence of the smallest element.
pub fn min_index<V>(x: &V) -> usize
where V: VectorLike + ?Sized, V::Elem: PartialOrd,
{
    extreme_index(x, |candidate, best| candidate < best)
}

fn extreme_index<V, F>(x: &V, mut better: F) -> usize
where
    V: VectorLike + ?Sized,
    F: FnMut(&V::Elem, &V::Elem) -> bool,
{
    fmv_assert!(V::Elem, x.size() > 0, "extreme value of an empty vector");
    let mut best = x.ev(0);
    let mut index = 0;
    for i in 1..x.size() {
        let candidate = x.ev(i);
        if better(&candidate, &best) {
            best = candidate;
            index = i;
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::{max, max_index, min, min_index, nrm1, nrm2, nrm_fro, nrm_inf};
    use num_complex::Complex64;

    #[test]
    fn matrix_norms() {
        let m = Mat::<f64>::from_rows(&[[1.0, -2.0], [-3.0, 4.0]]).unwrap();
        assert_eq!(nrm1(&m), 6.0);
        assert_eq!(nrm_inf(&m), 7.0);
        assert_eq!(nrm_fro(&m), 30f64.sqrt());

        // the mirrored half counts
        let s = SymMat::<i32>::from_rows(&[[1, -5], [-5, 2]]).unwrap();
        assert_eq!(nrm1(&s), 7.0);
        assert_eq!(nrm_inf(&s.as_view()), 7.0);

        let c = Mat::<Complex64>::filled(1, 1, Complex64::new(3.0, 4.0));
        assert_eq!(nrm1(&c), 5.0);
    }

    #[test]
    fn vector_norms() {
        let v = ColVec::<f64>::from_vec(vec![3.0, -4.0]).unwrap();
        assert_eq!(nrm2(&v), 5.0);
        assert_eq!(nrm1(&v), 7.0);
        assert_eq!(nrm_inf(&v), 4.0);
        assert_eq!(nrm_fro(&v), 5.0);

        // row vectors are vectors, not 1xn matrices
        let r = v.trans();
        assert_eq!((nrm1(&r), nrm_inf(&r)), (7.0, 4.0));

        let m = Mat::<f64>::from_rows(&[[3.0, 4.0]]).unwrap();
        assert_eq!(nrm2(&m.row(0)), 5.0);
    }

    #[test]
    fn extremes() {
        let v = ColVec::<i32>::from_vec(vec![2, 7, -1, 7, -1]).unwrap();
        assert_eq!((max(&v), max_index(&v)), (7, 1));
        assert_eq!((min(&v), min_index(&v)), (-1, 2));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "empty vector")]
    fn extremes_of_nothing() {
        let v = ColVec::<f64>::new(0);
        let _ = max(&v);
    }
}
