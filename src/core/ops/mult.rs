/* ************************************************************************ **
** This file is part of fmatvec, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::Mul;

use num_traits::Zero;

use crate::dim::DimKind;
use crate::scalar::{Promote, Promoted, Scalar};
use crate::shape::Shape;
use crate::storage::Layout;
use crate::tags::{Diagonal, Fixed, General, Rotation, Sparse, Symmetric, SymmetricSparse, Var};
use crate::traits::{Alloc, MatrixBase, MatrixFill, MatrixLike, SymmetricBase};
use crate::matrix::Matrix;
use crate::square::SquareMatrix;
use crate::vector::{RowVector, Vector};
use crate::view::{MatrixMut, MatrixRef};
use super::{promoted, update, ProductOf, ProductShape};

/// The multiplication algorithm of a left operand.
///
/// Each shape has its own kernel; the right operand is always read through
/// [`MatrixBase::e`].
pub trait MultKernel<B: ?Sized>: MatrixLike {
    /// Element type of the product.
    type Product: Scalar;

    /// Write `self * b` into the stored positions of `out`, which must already have the
    /// right size.
    fn mult_into<O>(&self, b: &B, out: &mut O)
    where O: MatrixFill<Elem = Self::Product>;
}

/// Matrix products with a matrix of type `B`.
pub trait ProductWith<B: ?Sized> {
    type Output: Alloc;

    fn product(&self, b: &B) -> Self::Output;
}

impl<A, B> ProductWith<B> for A
where
    A: MultKernel<B>,
    B: MatrixBase,
    A::Shape: ProductShape<B::Shape>,
    ProductOf<A::Shape, B::Shape>: Layout<
        <A::Rows as DimKind>::Owned,
        <B::Cols as DimKind>::Owned,
        A::Product,
    >,
{
    type Output = Matrix<
        ProductOf<A::Shape, B::Shape>,
        <A::Rows as DimKind>::Owned,
        <B::Cols as DimKind>::Owned,
        A::Product,
    >;

    fn product(&self, b: &B) -> Self::Output { mult_new(self, b) }
}

pub fn mult<A, B>(a: &A, b: &B) -> A::Output
where A: ProductWith<B>,
{ a.product(b) }

/// Allocate an output of any type and multiply into it.
pub(crate) fn mult_new<A, B, O>(a: &A, b: &B) -> O
where
    A: MultKernel<B>,
    B: MatrixBase,
    O: Alloc<Elem = A::Product>,
{
    fmv_assert!(
        O::Elem, a.cols() == b.rows(),
        "cannot multiply a {}x{} matrix by a {}x{} matrix", a.rows(), a.cols(), b.rows(), b.cols(),
    );
    let mut out = O::alloc(a.rows(), b.cols());
    a.mult_into(b, &mut out);
    out
}

//---------------------------------
// kernels

fn general_kernel<A, B, O>(a: &A, b: &B, out: &mut O)
where
    A: MatrixBase,
    B: MatrixBase,
    A::Elem: Promote<B::Elem>,
    O: MatrixFill<Elem = Promoted<A::Elem, B::Elem>>,
{
    let n = a.cols();
    out.fill_stored(|i, k| {
        let mut acc = O::Elem::zero();
        for j in 0..n {
            let (x, y) = promoted(a.e(i, j), b.e(j, k));
            acc = acc + x * y;
        }
        acc
    });
}

// the stored half is read directly; ei to the left of the diagonal, ej to the right
fn symmetric_kernel<A, B, O>(a: &A, b: &B, out: &mut O)
where
    A: SymmetricBase,
    B: MatrixBase,
    A::Elem: Promote<B::Elem>,
    O: MatrixFill<Elem = Promoted<A::Elem, B::Elem>>,
{
    let n = a.cols();
    out.fill_stored(|i, k| {
        let mut acc = O::Elem::zero();
        for j in 0..=i {
            let (x, y) = promoted(a.ei(i, j), b.e(j, k));
            acc = acc + x * y;
        }
        for j in i + 1..n {
            let (x, y) = promoted(a.ej(i, j), b.e(j, k));
            acc = acc + x * y;
        }
        acc
    });
}

// row scaling; only the output's stored positions are visited
fn diagonal_kernel<A, B, O>(a: &A, b: &B, out: &mut O)
where
    A: MatrixBase,
    B: MatrixBase,
    A::Elem: Promote<B::Elem>,
    O: MatrixFill<Elem = Promoted<A::Elem, B::Elem>>,
{
    out.fill_stored(|i, k| {
        let (x, y) = promoted(a.e(i, i), b.e(i, k));
        x * y
    });
}

fn sparse_kernel<T, B, O>(a: &Matrix<Sparse, Var, Var, T>, b: &B, out: &mut O)
where
    T: Scalar + Promote<B::Elem>,
    B: MatrixBase,
    O: MatrixFill<Elem = Promoted<T, B::Elem>>,
{
    out.fill_stored(|i, k| {
        let (cols, values) = a.row_run(i);
        let mut acc = O::Elem::zero();
        for (&j, x) in cols.iter().zip(values) {
            let (x, y) = promoted(x.clone(), b.e(j, k));
            acc = acc + x * y;
        }
        acc
    });
}

// each off-diagonal entry of the upper triangle contributes to two rows
fn symmetric_sparse_kernel<T, B, O>(a: &Matrix<SymmetricSparse, Var, Var, T>, b: &B, out: &mut O)
where
    T: Scalar + Promote<B::Elem>,
    B: MatrixBase,
    O: MatrixFill<Elem = Promoted<T, B::Elem>>,
{
    out.fill_stored(|_, _| O::Elem::zero());
    for i in 0..a.rows() {
        let (cols, values) = a.row_run(i);
        for (&j, x) in cols.iter().zip(values) {
            for k in 0..b.cols() {
                let (v, y) = promoted(x.clone(), b.e(j, k));
                update(out.stored_mut(i, k), |acc| acc + v * y);
                if j != i {
                    let (v, y) = promoted(x.clone(), b.e(i, k));
                    update(out.stored_mut(j, k), |acc| acc + v * y);
                }
            }
        }
    }
}

macro_rules! impl_kernel {
    (
        $kernel:ident:
        $( [$($lt:lifetime),*; $($P:ident),*] $Lhs:ty where [$($bound:tt)*]; )*
    ) => {$(
        impl<$($lt,)* $($P,)* B> MultKernel<B> for $Lhs
        where
            $($bound)*
            B: MatrixBase,
            T: Promote<B::Elem>,
        {
            type Product = Promoted<T, B::Elem>;

            #[inline]
            fn mult_into<O>(&self, b: &B, out: &mut O)
            where O: MatrixFill<Elem = Self::Product>,
            { $kernel(self, b, out) }
        }
    )*};
}

impl_kernel!{general_kernel:
    [; R, C, T] Matrix<General, R, C, T> where [General: Layout<R, C, T>, R: DimKind, C: DimKind, T: Scalar,];
    [; R, C, T] Matrix<Rotation, R, C, T> where [Rotation: Layout<R, C, T>, R: DimKind, C: DimKind, T: Scalar,];
    ['a; T] MatrixRef<'a, General, T> where [T: Scalar,];
    ['a; T] MatrixRef<'a, Rotation, T> where [T: Scalar,];
    ['a; T] MatrixMut<'a, General, T> where [T: Scalar,];
    ['a; T] MatrixMut<'a, Rotation, T> where [T: Scalar,];
    [; R, T] Vector<R, T> where [General: Layout<R, Fixed<1>, T>, R: DimKind, T: Scalar,];
    [; C, T] RowVector<C, T> where [General: Layout<Fixed<1>, C, T>, C: DimKind, T: Scalar,];
    [; R, T] SquareMatrix<R, T> where [General: Layout<R, R, T>, R: DimKind, T: Scalar,];
}

impl_kernel!{symmetric_kernel:
    [; R, C, T] Matrix<Symmetric, R, C, T> where [Symmetric: Layout<R, C, T>, R: DimKind, C: DimKind, T: Scalar,];
    ['a; T] MatrixRef<'a, Symmetric, T> where [T: Scalar,];
    ['a; T] MatrixMut<'a, Symmetric, T> where [T: Scalar,];
}

impl_kernel!{diagonal_kernel:
    [; R, C, T] Matrix<Diagonal, R, C, T> where [Diagonal: Layout<R, C, T>, R: DimKind, C: DimKind, T: Scalar,];
    ['a; T] MatrixRef<'a, Diagonal, T> where [T: Scalar,];
    ['a; T] MatrixMut<'a, Diagonal, T> where [T: Scalar,];
}

impl_kernel!{sparse_kernel:
    [; T] Matrix<Sparse, Var, Var, T> where [T: Scalar,];
}

impl_kernel!{symmetric_sparse_kernel:
    [; T] Matrix<SymmetricSparse, Var, Var, T> where [T: Scalar,];
}

//---------------------------------
// operators

// matrix-like times matrix-like
gen_each!{
    @{lhs} @{rhs}
    impl_matrix_mul!(
        {($($lt1:lifetime,)*) ($($P1:ident,)*) ($Lhs:ty) ($($bound1:tt)*)}
        {($($lt2:lifetime,)*) ($($P2:ident,)*) ($Rhs:ty) ($($bound2:tt)*)}
    ) => {
        impl<'a, 'b, $($lt1,)* $($lt2,)* $($P1,)* $($P2,)*> Mul<&'b $Rhs> for &'a $Lhs
        where
            $($bound1)*
            $($bound2)*
            $Lhs: ProductWith<$Rhs>,
        {
            type Output = <$Lhs as ProductWith<$Rhs>>::Output;

            fn mul(self, b: &'b $Rhs) -> Self::Output { self.product(b) }
        }
    }
}

// anything times a square matrix
gen_each!{
    @{lhs}
    impl_mul_square!(
        {($($lt:lifetime,)*) ($($P:ident,)*) ($Lhs:ty) ($($bound:tt)*)}
    ) => {
        impl<'a, 'b, $($lt,)* $($P,)* R2, T2> Mul<&'b SquareMatrix<R2, T2>> for &'a $Lhs
        where
            $($bound)*
            General: Layout<R2, R2, T2>,
            R2: DimKind,
            T2: Scalar,
            $Lhs: ProductWith<SquareMatrix<R2, T2>>,
        {
            type Output = <$Lhs as ProductWith<SquareMatrix<R2, T2>>>::Output;

            fn mul(self, b: &'b SquareMatrix<R2, T2>) -> Self::Output { self.product(b) }
        }
    }
}

// anything times a column vector gives a column vector
gen_each!{
    [
        {() (S1, R1, C1, T1,) (Matrix<S1, R1, C1, T1>)
            (S1: Layout<R1, C1, T1>, R1: DimKind, C1: DimKind, T1: Scalar,)}
        {('v1,) (S1, T1,) (MatrixRef<'v1, S1, T1>) (S1: Shape, T1: Scalar,)}
        {('v1,) (S1, T1,) (MatrixMut<'v1, S1, T1>) (S1: Shape, T1: Scalar,)}
        {() (R1, T1,) (SquareMatrix<R1, T1>) (General: Layout<R1, R1, T1>, R1: DimKind, T1: Scalar,)}
    ]
    impl_mul_vector!(
        {($($lt:lifetime,)*) ($($P:ident,)*) ($Lhs:ty) ($($bound:tt)*)}
    ) => {
        impl<'a, 'b, $($lt,)* $($P,)* R2, T2> Mul<&'b Vector<R2, T2>> for &'a $Lhs
        where
            $($bound)*
            General: Layout<R2, Fixed<1>, T2>,
            R2: DimKind,
            T2: Scalar,
            $Lhs: MultKernel<Vector<R2, T2>>,
            General: Layout<
                <<$Lhs as MatrixLike>::Rows as DimKind>::Owned,
                Fixed<1>,
                <$Lhs as MultKernel<Vector<R2, T2>>>::Product,
            >,
        {
            type Output = Vector<
                <<$Lhs as MatrixLike>::Rows as DimKind>::Owned,
                <$Lhs as MultKernel<Vector<R2, T2>>>::Product,
            >;

            fn mul(self, b: &'b Vector<R2, T2>) -> Self::Output { mult_new(self, b) }
        }
    }
}

// square times square stays square, with the left operand's kind
gen_each!{
    @{rhs}
    impl_square_mul!(
        {($($lt:lifetime,)*) ($($P:ident,)*) ($Rhs:ty) ($($bound:tt)*)}
    ) => {
        impl<'a, 'b, $($lt,)* R1, T1, $($P,)*> Mul<&'b $Rhs> for &'a SquareMatrix<R1, T1>
        where
            $($bound)*
            General: Layout<R1, R1, T1>,
            R1: DimKind,
            T1: Scalar,
            SquareMatrix<R1, T1>: ProductWith<$Rhs>,
        {
            type Output = <SquareMatrix<R1, T1> as ProductWith<$Rhs>>::Output;

            fn mul(self, b: &'b $Rhs) -> Self::Output { self.product(b) }
        }
    }
}

impl<'a, 'b, R1, T1, R2, T2> Mul<&'b SquareMatrix<R2, T2>> for &'a SquareMatrix<R1, T1>
where
    General: Layout<R1, R1, T1> + Layout<R2, R2, T2> + Layout<R1, R1, Promoted<T1, T2>>,
    R1: DimKind,
    R2: DimKind,
    T1: Scalar + Promote<T2>,
    T2: Scalar,
{
    type Output = SquareMatrix<R1, Promoted<T1, T2>>;

    fn mul(self, b: &'b SquareMatrix<R2, T2>) -> Self::Output { mult_new(self, b) }
}

// a row vector times anything gives a row vector
gen_each!{
    [
        {() (S2, R2, C2, T2,) (Matrix<S2, R2, C2, T2>)
            (S2: Layout<R2, C2, T2>, R2: DimKind, C2: DimKind, T2: Scalar,)}
        {('v2,) (S2, T2,) (MatrixRef<'v2, S2, T2>) (S2: Shape, T2: Scalar,)}
        {('v2,) (S2, T2,) (MatrixMut<'v2, S2, T2>) (S2: Shape, T2: Scalar,)}
        {() (R2, T2,) (SquareMatrix<R2, T2>) (General: Layout<R2, R2, T2>, R2: DimKind, T2: Scalar,)}
    ]
    impl_row_vector_mul!(
        {($($lt:lifetime,)*) ($($P:ident,)*) ($Rhs:ty) ($($bound:tt)*)}
    ) => {
        impl<'a, 'b, $($lt,)* C1, T1, $($P,)*> Mul<&'b $Rhs> for &'a RowVector<C1, T1>
        where
            $($bound)*
            General: Layout<Fixed<1>, C1, T1>,
            C1: DimKind,
            T1: Scalar + Promote<<$Rhs as MatrixLike>::Elem>,
            $Rhs: MatrixBase,
            General: Layout<
                Fixed<1>,
                <<$Rhs as MatrixLike>::Cols as DimKind>::Owned,
                Promoted<T1, <$Rhs as MatrixLike>::Elem>,
            >,
        {
            type Output = RowVector<
                <<$Rhs as MatrixLike>::Cols as DimKind>::Owned,
                Promoted<T1, <$Rhs as MatrixLike>::Elem>,
            >;

            fn mul(self, b: &'b $Rhs) -> Self::Output { mult_new(self, b) }
        }
    }
}

/// Inner product.
impl<'a, 'b, C1, T1, R2, T2> Mul<&'b Vector<R2, T2>> for &'a RowVector<C1, T1>
where
    General: Layout<Fixed<1>, C1, T1> + Layout<R2, Fixed<1>, T2>,
    C1: DimKind,
    R2: DimKind,
    T1: Scalar + Promote<T2>,
    T2: Scalar,
{
    type Output = Promoted<T1, T2>;

    fn mul(self, b: &'b Vector<R2, T2>) -> Self::Output {
        fmv_assert!(
            Promoted<T1, T2>, self.size() == b.size(),
            "cannot multiply a row vector of length {} by a column of length {}", self.size(), b.size(),
        );
        let mut acc = Promoted::<T1, T2>::zero();
        for i in 0..self.size() {
            let (x, y) = promoted(self.e(i), b.e(i));
            acc = acc + x * y;
        }
        acc
    }
}

/// Outer product.
impl<'a, 'b, R1, T1, C2, T2> Mul<&'b RowVector<C2, T2>> for &'a Vector<R1, T1>
where
    General: Layout<R1, Fixed<1>, T1> + Layout<Fixed<1>, C2, T2>,
    General: Layout<R1::Owned, C2::Owned, Promoted<T1, T2>>,
    R1: DimKind,
    C2: DimKind,
    T1: Scalar + Promote<T2>,
    T2: Scalar,
{
    type Output = Matrix<General, R1::Owned, C2::Owned, Promoted<T1, T2>>;

    fn mul(self, b: &'b RowVector<C2, T2>) -> Self::Output { mult_new(self, b) }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::mult;
    use rand::Rng;

    fn random_mat(rows: usize, cols: usize) -> Mat<f64> {
        let mut rng = rand::thread_rng();
        Mat::from_fn(rows, cols, |_, _| rng.gen_range(-1.0, 1.0))
    }

    #[test]
    fn result_types() {
        let d = DiagMat::<f64>::from_diag(vec![1.0, 2.0]);
        let s = SymMat::<f64>::filled(2, 2, 1.0);
        let sq = SqrMat::<f64>::eye(2);
        let v = ColVec::<f64>::filled(2, 1.0);
        let r = RowVec::<f64>::filled(2, 1.0);

        let _: DiagMat<f64> = &d * &d;
        let _: Mat<f64> = &d * &s;
        let _: Mat<f64> = &s * &s;
        let _: SqrMat<f64> = &sq * &sq;
        let _: Mat<f64> = &sq * &s;
        let _: Mat<f64> = &s * &sq;
        let _: ColVec<f64> = &s * &v;
        let _: ColVec<f64> = &sq * &v;
        let _: RowVec<f64> = &r * &s;
        let _: RowVec<f64> = &r * &sq;
        let _: f64 = &r * &v;
        let _: Mat<f64> = &v * &r;
        let _: Mat<f64> = &s.as_view() * &d.as_view();

        let f = Mat3x3::<i32>::fixed(EYE);
        let _: Mat3x3<f64> = &f * &Mat3x3::<f64>::fixed(EYE);
        let _: Matrix<General, Fixed<3>, Var, i32> = &f * &Mat::<i32>::new(3, 2);
        let _: ColVec3<i32> = &f * &ColVec3::<i32>::default();
    }

    #[test]
    fn diagonal_product_stays_diagonal() {
        let a = DiagMat::<i32>::from_diag(vec![1, 2, 3]);
        let b = DiagMat::<i32>::from_diag(vec![4, 5, 6]);
        let c = &a * &b;
        assert_eq!(c.diag(), &[4, 10, 18]);

        let g = Mat::<i32>::filled(3, 2, 1);
        assert_eq!((&a * &g).to_rows(), vec![vec![1, 1], vec![2, 2], vec![3, 3]]);
    }

    #[test]
    fn symmetric_matches_general() {
        let a = random_mat(4, 4);
        let a = SymMat::from_matrix(&(&a + &trans(&a)));
        let b = random_mat(4, 3);

        let fast = &a * &b;
        let slow = &Mat::from_matrix(&a) * &b;
        assert_close!(abs=1e-12, fast.as_slice(), slow.as_slice());

        // views of the stored half use the same kernel
        let sub = a.view_sym(1..3);
        let dense_sub = Mat::from_matrix(&sub);
        let b_sub = b.view(1..3, 0..3);
        assert_close!(abs=1e-12, (&sub * &b_sub).as_slice(), (&dense_sub * &b_sub).as_slice());
    }

    #[test]
    fn sparse_matches_dense() {
        let mut rng = rand::thread_rng();
        let dense = Mat::from_fn(5, 5, |_, _| match rng.gen_range(0, 3) {
            0 => rng.gen_range(-1.0, 1.0),
            _ => 0.0,
        });
        let b = random_mat(5, 2);

        let sparse = SparseMat::from_dense(&dense);
        assert_close!(abs=1e-12, (&sparse * &b).as_slice(), (&dense * &b).as_slice());

        let sym_dense = SymMat::from_matrix(&(&dense + &trans(&dense)));
        let sym_sparse = SymSparseMat::from_dense(&sym_dense);
        assert_close!(
            abs=1e-12,
            (&sym_sparse * &b).as_slice(),
            (&sym_dense * &b).as_slice(),
        );

        let v = ColVec::<f64>::from_fn(5, |i| i as f64);
        let expected = &sym_dense * &v;
        assert_close!(abs=1e-12, (&sym_sparse * &v).to_vec(), expected.to_vec());
    }

    #[test]
    fn fixed_and_var_agree() {
        fn check<const M: usize, const N: usize, const K: usize>() {
            let a = random_mat(M, N);
            let b = random_mat(N, K);
            let fa = Matrix::<General, Fixed<M>, Fixed<N>, f64>::from_matrix(&a);
            let fb = Matrix::<General, Fixed<N>, Fixed<K>, f64>::from_matrix(&b);

            let var = &a * &b;
            let fixed = &fa * &fb;
            // same operations in the same order
            assert_eq!(var.as_slice(), fixed.as_slice());
        }

        macro_rules! check_all {
            ($([$m:expr, $n:expr, $k:expr])*) => { $( check::<$m, $n, $k>(); )* };
        }
        check_all!{
            [1, 1, 1] [1, 2, 3] [2, 3, 5] [3, 3, 3] [5, 1, 2] [5, 5, 5] [2, 5, 1] [3, 2, 1]
        }
    }

    #[test]
    fn row_and_column_vectors() {
        let r = RowVec::<i32>::from_vec(vec![1, 2, 3]).unwrap();
        let v = ColVec::<i32>::from_vec(vec![4, 5, 6]).unwrap();
        assert_eq!(&r * &v, 32);
        assert_eq!((&v * &r).to_rows()[1], vec![5, 10, 15]);

        let m = Mat::<i32>::from_rows(&[[1, 0, 0], [0, 0, 1], [0, 1, 0]]).unwrap();
        assert_eq!((&m * &v).to_vec(), vec![4, 6, 5]);
        assert_eq!((&r * &m).to_vec(), vec![1, 3, 2]);
        assert_eq!(mult(&m, &m), Mat::<i32>::eye(3, 3));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cannot multiply")]
    fn nonconformable() {
        let a = Mat::<f64>::new(2, 3);
        let b = Mat::<f64>::new(2, 3);
        let _ = &a * &b;
    }
}
