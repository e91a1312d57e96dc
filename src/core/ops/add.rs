/* ************************************************************************ **
** This file is part of fmatvec, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::dim::{DimKind, Join, JoinOf};
use crate::scalar::{Promote, Promoted, Scalar};
use crate::shape::{DenseShape, Shape};
use crate::storage::Layout;
use crate::tags::{Fixed, General, Var};
use crate::traits::{Alloc, MatrixBase, MatrixLike};
use crate::matrix::Matrix;
use crate::square::SquareMatrix;
use crate::vector::{RowVector, Vector};
use crate::view::{MatrixMut, MatrixRef};
use super::{promoted, update, SumOf, SumShape};

/// Elementwise sums and differences with a matrix of type `B`.
///
/// Implemented for every pair of dense matrices with compatible shapes, kinds and
/// element types.
pub trait SumWith<B: ?Sized>: MatrixBase {
    type Output: Alloc;

    fn sum(&self, b: &B) -> Self::Output;
    fn difference(&self, b: &B) -> Self::Output;
}

impl<A, B> SumWith<B> for A
where
    A: MatrixBase,
    B: MatrixBase,
    A::Shape: SumShape<B::Shape>,
    A::Rows: Join<B::Rows>,
    A::Cols: Join<B::Cols>,
    A::Elem: Promote<B::Elem>,
    SumOf<A::Shape, B::Shape>: Layout<
        JoinOf<A::Rows, B::Rows>,
        JoinOf<A::Cols, B::Cols>,
        Promoted<A::Elem, B::Elem>,
    >,
{
    type Output = Matrix<
        SumOf<A::Shape, B::Shape>,
        JoinOf<A::Rows, B::Rows>,
        JoinOf<A::Cols, B::Cols>,
        Promoted<A::Elem, B::Elem>,
    >;

    fn sum(&self, b: &B) -> Self::Output {
        zip_new(self, b, |x, y| {
            let (x, y) = promoted(x, y);
            x + y
        })
    }

    fn difference(&self, b: &B) -> Self::Output {
        zip_new(self, b, |x, y| {
            let (x, y) = promoted(x, y);
            x - y
        })
    }
}

pub fn add<A, B>(a: &A, b: &B) -> A::Output
where A: SumWith<B>,
{ a.sum(b) }

pub fn sub<A, B>(a: &A, b: &B) -> A::Output
where A: SumWith<B>,
{ a.difference(b) }

/// Allocate the output and compute its stored elements from the matching elements of
/// `a` and `b`.
pub(crate) fn zip_new<A, B, O, F>(a: &A, b: &B, mut f: F) -> O
where
    A: MatrixBase,
    B: MatrixBase,
    O: Alloc,
    F: FnMut(A::Elem, B::Elem) -> O::Elem,
{
    fmv_assert!(
        O::Elem, a.rows() == b.rows() && a.cols() == b.cols(),
        "cannot combine a {}x{} matrix with a {}x{} matrix", a.rows(), a.cols(), b.rows(), b.cols(),
    );
    let mut out = O::alloc(a.rows(), a.cols());
    out.fill_stored(|i, j| f(a.e(i, j), b.e(i, j)));
    out
}

//---------------------------------
// matrices and views

gen_each!{
    @{lhs}
    [{Add add sum +} {Sub sub difference -}]
    impl_matrix_sum_lhs!(
        {($($lt:lifetime,)*) ($($P:ident,)*) ($Lhs:ty) ($($bound:tt)*)}
        {$Op:ident $op:ident $method:ident $sym:tt}
    ) => {
        // &A + &B
        impl<'a, 'b, $($lt,)* $($P,)* B> $Op<&'b B> for &'a $Lhs
        where
            $($bound)*
            $Lhs: SumWith<B>,
        {
            type Output = <$Lhs as SumWith<B>>::Output;

            fn $op(self, b: &'b B) -> Self::Output { self.$method(b) }
        }

        // &A + B, reusing B
        impl<'a, $($lt,)* $($P,)* S2, R2, C2, T2> $Op<Matrix<S2, R2, C2, T2>> for &'a $Lhs
        where
            $($bound)*
            $Lhs: MatrixBase,
            <$Lhs as MatrixLike>::Shape: SumShape<S2, Output = S2>,
            <$Lhs as MatrixLike>::Rows: Join<R2, Output = R2>,
            <$Lhs as MatrixLike>::Cols: Join<C2, Output = C2>,
            <$Lhs as MatrixLike>::Elem: Promote<T2, Output = T2>,
            S2: Layout<R2, C2, T2> + DenseShape,
            R2: DimKind,
            C2: DimKind,
            T2: Scalar,
        {
            type Output = Matrix<S2, R2, C2, T2>;

            fn $op(self, mut b: Matrix<S2, R2, C2, T2>) -> Self::Output {
                b.zip_assign(self, |y, x| x.lhs() $sym y);
                b
            }
        }
    }
}

macro_rules! impl_matrix_sum {
    ($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $sym:tt) => {
        // A += &B
        impl<'b, S1, R1, C1, T1, B> $OpAssign<&'b B> for Matrix<S1, R1, C1, T1>
        where
            S1: Layout<R1, C1, T1> + DenseShape + SumShape<B::Shape, Output = S1>,
            R1: DimKind + Join<B::Rows>,
            C1: DimKind + Join<B::Cols>,
            T1: Scalar + Promote<B::Elem, Output = T1>,
            B: MatrixBase,
        {
            fn $op_assign(&mut self, b: &'b B) {
                self.zip_assign(b, |x, y| x $sym <T1 as Promote<B::Elem>>::rhs(y));
            }
        }

        // A + &B, reusing A
        impl<'b, S1, R1, C1, T1, B> $Op<&'b B> for Matrix<S1, R1, C1, T1>
        where
            S1: Layout<R1, C1, T1> + DenseShape + SumShape<B::Shape, Output = S1>,
            R1: DimKind + Join<B::Rows, Output = R1>,
            C1: DimKind + Join<B::Cols, Output = C1>,
            T1: Scalar + Promote<B::Elem, Output = T1>,
            B: MatrixBase,
        {
            type Output = Self;

            fn $op(mut self, b: &'b B) -> Self {
                self.$op_assign(b);
                self
            }
        }

        // A + B, reusing A
        impl<S1, R1, C1, T1, S2, R2, C2, T2> $Op<Matrix<S2, R2, C2, T2>> for Matrix<S1, R1, C1, T1>
        where
            S1: Layout<R1, C1, T1> + DenseShape + SumShape<S2, Output = S1>,
            R1: DimKind + Join<R2, Output = R1>,
            C1: DimKind + Join<C2, Output = C1>,
            T1: Scalar + Promote<T2, Output = T1>,
            S2: Layout<R2, C2, T2> + DenseShape,
            R2: DimKind,
            C2: DimKind,
            T2: Scalar,
        {
            type Output = Self;

            fn $op(mut self, b: Matrix<S2, R2, C2, T2>) -> Self {
                self.$op_assign(&b);
                self
            }
        }
    };
}

impl_matrix_sum!(Add::add, AddAssign::add_assign, +);
impl_matrix_sum!(Sub::sub, SubAssign::sub_assign, -);

//---------------------------------
// vectors and square matrices keep their type

macro_rules! impl_newtype_sum {
    (
        $Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $sym:tt;
        lhs: $Lhs:ty where [$($lb:tt)*];
        rhs: $Rhs:ty where [$($rb:tt)*];
        out: $Out:ty where [$($ob:tt)*];
    ) => {
        impl<'a, 'b, K1, T1, K2, T2> $Op<&'b $Rhs> for &'a $Lhs
        where
            $($lb)*, $($rb)*, $($ob)*,
            K1: DimKind + Join<K2>,
            K2: DimKind,
            T1: Scalar + Promote<T2>,
            T2: Scalar,
        {
            type Output = $Out;

            fn $op(self, b: &'b $Rhs) -> $Out {
                zip_new(self, b, |x, y| {
                    let (x, y) = promoted(x, y);
                    x $sym y
                })
            }
        }

        impl<'b, K1, T1, K2, T2> $OpAssign<&'b $Rhs> for $Lhs
        where
            $($lb)*, $($rb)*,
            K1: DimKind + Join<K2>,
            K2: DimKind,
            T1: Scalar + Promote<T2, Output = T1>,
            T2: Scalar,
        {
            fn $op_assign(&mut self, b: &'b $Rhs) {
                self.0.zip_assign(b, |x, y| x $sym <T1 as Promote<T2>>::rhs(y));
            }
        }

        impl<'b, K1, T1, K2, T2> $Op<&'b $Rhs> for $Lhs
        where
            $($lb)*, $($rb)*,
            K1: DimKind + Join<K2, Output = K1>,
            K2: DimKind,
            T1: Scalar + Promote<T2, Output = T1>,
            T2: Scalar,
        {
            type Output = Self;

            fn $op(mut self, b: &'b $Rhs) -> Self {
                self.$op_assign(b);
                self
            }
        }

        impl<K1, T1, K2, T2> $Op<$Rhs> for $Lhs
        where
            $($lb)*, $($rb)*,
            K1: DimKind + Join<K2, Output = K1>,
            K2: DimKind,
            T1: Scalar + Promote<T2, Output = T1>,
            T2: Scalar,
        {
            type Output = Self;

            fn $op(mut self, b: $Rhs) -> Self {
                self.$op_assign(&b);
                self
            }
        }

        impl<'a, K1, T1, K2, T2> $Op<$Rhs> for &'a $Lhs
        where
            $($lb)*, $($rb)*,
            K1: DimKind + Join<K2, Output = K2>,
            K2: DimKind,
            T1: Scalar + Promote<T2, Output = T2>,
            T2: Scalar,
        {
            type Output = $Rhs;

            fn $op(self, mut b: $Rhs) -> $Rhs {
                b.0.zip_assign(self, |y, x| x.lhs() $sym y);
                b
            }
        }
    };
}

macro_rules! impl_newtype_sums {
    ($($rest:tt)*) => {
        impl_newtype_sum!{ Add::add, AddAssign::add_assign, +; $($rest)* }
        impl_newtype_sum!{ Sub::sub, SubAssign::sub_assign, -; $($rest)* }
    };
}

impl_newtype_sums!{
    lhs: Vector<K1, T1> where [General: Layout<K1, Fixed<1>, T1>];
    rhs: Vector<K2, T2> where [General: Layout<K2, Fixed<1>, T2>];
    out: Vector<JoinOf<K1, K2>, Promoted<T1, T2>>
        where [General: Layout<JoinOf<K1, K2>, Fixed<1>, Promoted<T1, T2>>];
}

impl_newtype_sums!{
    lhs: RowVector<K1, T1> where [General: Layout<Fixed<1>, K1, T1>];
    rhs: RowVector<K2, T2> where [General: Layout<Fixed<1>, K2, T2>];
    out: RowVector<JoinOf<K1, K2>, Promoted<T1, T2>>
        where [General: Layout<Fixed<1>, JoinOf<K1, K2>, Promoted<T1, T2>>];
}

impl_newtype_sums!{
    lhs: SquareMatrix<K1, T1> where [General: Layout<K1, K1, T1>];
    rhs: SquareMatrix<K2, T2> where [General: Layout<K2, K2, T2>];
    out: SquareMatrix<JoinOf<K1, K2>, Promoted<T1, T2>>
        where [General: Layout<JoinOf<K1, K2>, JoinOf<K1, K2>, Promoted<T1, T2>>];
}

//---------------------------------
// negation

fn negate_in_place<T: Scalar>(data: &mut [T]) {
    for x in data {
        update(x, |x| -x);
    }
}

impl<S, R, C, T> Neg for Matrix<S, R, C, T>
where S: Layout<R, C, T>, R: DimKind, C: DimKind, T: Scalar,
{
    type Output = Self;

    fn neg(mut self) -> Self {
        negate_in_place(self.as_mut_slice());
        self
    }
}

impl<'a, S, R, C, T> Neg for &'a Matrix<S, R, C, T>
where S: Layout<R, C, T>, R: DimKind, C: DimKind, T: Scalar,
{
    type Output = Matrix<S, R, C, T>;

    fn neg(self) -> Self::Output { -self.clone() }
}

impl<'a, 'v, S, T> Neg for &'a MatrixRef<'v, S, T>
where S: Layout<Var, Var, T> + DenseShape, T: Scalar,
{
    type Output = Matrix<S, Var, Var, T>;

    fn neg(self) -> Self::Output { -self.copy() }
}

impl<'a, 'v, S, T> Neg for &'a MatrixMut<'v, S, T>
where S: Layout<Var, Var, T> + DenseShape, T: Scalar,
{
    type Output = Matrix<S, Var, Var, T>;

    fn neg(self) -> Self::Output { -self.copy() }
}

macro_rules! impl_newtype_neg {
    ($($Type:ident<$K:ident> where [$($bound:tt)*];)*) => {$(
        impl<$K, T> Neg for $Type<$K, T>
        where $($bound)*, $K: DimKind, T: Scalar,
        {
            type Output = Self;

            fn neg(mut self) -> Self {
                negate_in_place(self.0.as_mut_slice());
                self
            }
        }

        impl<'a, $K, T> Neg for &'a $Type<$K, T>
        where $($bound)*, $K: DimKind, T: Scalar,
        {
            type Output = $Type<$K, T>;

            fn neg(self) -> Self::Output { -self.clone() }
        }
    )*};
}

impl_newtype_neg!{
    Vector<R> where [General: Layout<R, Fixed<1>, T>];
    RowVector<C> where [General: Layout<Fixed<1>, C, T>];
    SquareMatrix<R> where [General: Layout<R, R, T>];
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::{add, sub};

    fn sym() -> SymMat<f64> {
        SymMat::from_rows(&[[1.0, 2.0], [2.0, 3.0]]).unwrap()
    }

    #[test]
    fn result_shapes() {
        let s = sym();
        let d = DiagMat::<f64>::from_diag(vec![1.0, -1.0]);
        let g = Mat::<f64>::filled(2, 2, 1.0);

        let ss: SymMat<f64> = &s + &s;
        let dd: DiagMat<f64> = &d - &d;
        let sd: Mat<f64> = &s + &d;
        let gs: Mat<f64> = &g - &s;
        assert_eq!(ss.to_rows(), vec![vec![2.0, 4.0], vec![4.0, 6.0]]);
        assert_eq!(dd, DiagMat::<f64>::new(2, 2));
        assert_eq!(sd.to_rows(), vec![vec![2.0, 2.0], vec![2.0, 2.0]]);
        assert_eq!(gs.to_rows(), vec![vec![0.0, -1.0], vec![-1.0, -2.0]]);

        // only the stored half of a symmetric sum is computed
        assert_eq!(ss.as_slice()[1], 0.0);
    }

    #[test]
    fn kinds_and_scalars() {
        let f = Mat3x3::<i32>::fixed(EYE);
        let v = Mat::<f64>::filled(3, 3, 0.5);

        let ff: Mat3x3<i32> = &f + &f;
        let fv: Mat<f64> = &f + &v;
        let vf: Mat<f64> = add(&v, &f);
        assert_eq!(ff.e(1, 1), 2);
        assert_eq!(fv.e(0, 0), 1.5);
        assert_eq!(vf, fv);

        let view: Mat<f64> = &f.as_view() - &v.view(0..3, 0..3);
        assert_eq!(view.e(0, 1), -0.5);
        assert_eq!(view, sub(&f, &v));
    }

    #[test]
    fn moves_match_borrows() {
        let a = Mat::<f64>::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let b = Mat::<f64>::from_rows(&[[0.5, 0.0], [-1.0, 2.0]]).unwrap();
        let expected = &a + &b;

        assert_eq!(a.clone() + &b, expected);
        assert_eq!(&a + b.clone(), expected);
        assert_eq!(a.clone() + b.clone(), expected);
        assert_eq!(&a - b.clone(), &a - &b);

        let mut c = a.clone();
        c += &b;
        c -= &b;
        assert_eq!(c, a);

        assert_eq!(-a.clone(), &Mat::<f64>::new(2, 2) - &a);
        assert_eq!(-&a, -a.clone());

        // a symmetric matrix may absorb another symmetric one in place
        let mut s = sym();
        s += &sym();
        assert_eq!(s, &sym() + &sym());
    }

    #[test]
    fn vectors_stay_vectors() {
        let x = ColVec3::<f64>::from_array([1.0, 2.0, 3.0]);
        let y = ColVec::<i32>::from_vec(vec![1, 1, 1]).unwrap();
        let z: ColVec<f64> = &x + &y;
        assert_eq!(z.to_vec(), vec![2.0, 3.0, 4.0]);

        let w: ColVec3<f64> = x.clone() - &x;
        assert_eq!(w, ColVec3::<f64>::default());

        let r = RowVec::<i32>::from_vec(vec![1, 2]).unwrap();
        assert_eq!((&r + &r).to_vec(), vec![2, 4]);
        assert_eq!((-r).to_vec(), vec![-1, -2]);

        let q = SqrMat::<f64>::eye(2);
        let q2: SqrMat<f64> = &q + q.clone();
        assert_eq!(q2, SqrMat::<f64>::from_fn(2, |i, j| if i == j { 2.0 } else { 0.0 }));
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "cannot combine"))]
    fn size_mismatch() {
        let a = Mat::<f64>::new(2, 2);
        let b = Mat::<f64>::new(2, 3);
        // in release builds this goes unchecked; the output just has a's size
        let _ = &a + &b;
    }
}
