//! Scalar multiples.
//!
//! The scalar must have the matrix's element type.  Every stored value is scaled, which
//! is the whole matrix for every shape (synthesized zeros stay zero, mirrored elements
//! follow their slot).

use std::ops::{Div, DivAssign, Mul, MulAssign};

use crate::dim::DimKind;
use crate::shape::DenseShape;
use crate::storage::Layout;
use crate::tags::{Fixed, General, Var};
use crate::traits::MatrixFill;
use crate::matrix::Matrix;
use crate::square::SquareMatrix;
use crate::vector::{RowVector, Vector};
use crate::view::{MatrixMut, MatrixRef};

macro_rules! impl_newtype_scale {
    ($s:ty; [$K:ident] $Type:ty where [$($bound:tt)*]) => {
        impl<$K> MulAssign<$s> for $Type
        where $($bound)*
        {
            fn mul_assign(&mut self, a: $s) { self.0 *= a; }
        }

        impl<$K> DivAssign<$s> for $Type
        where $($bound)*
        {
            fn div_assign(&mut self, a: $s) { self.0 /= a; }
        }

        impl<$K> Mul<$s> for $Type
        where $($bound)*
        {
            type Output = Self;
            fn mul(mut self, a: $s) -> Self { self *= a; self }
        }

        impl<'a, $K> Mul<$s> for &'a $Type
        where $($bound)*
        {
            type Output = $Type;
            fn mul(self, a: $s) -> $Type { self.clone() * a }
        }

        impl<$K> Mul<$Type> for $s
        where $($bound)*
        {
            type Output = $Type;
            fn mul(self, v: $Type) -> $Type { v * self }
        }

        impl<'a, $K> Mul<&'a $Type> for $s
        where $($bound)*
        {
            type Output = $Type;
            fn mul(self, v: &'a $Type) -> $Type { v * self }
        }

        impl<$K> Div<$s> for $Type
        where $($bound)*
        {
            type Output = Self;
            fn div(mut self, a: $s) -> Self { self /= a; self }
        }

        impl<'a, $K> Div<$s> for &'a $Type
        where $($bound)*
        {
            type Output = $Type;
            fn div(self, a: $s) -> $Type { self.clone() / a }
        }
    };
}

gen_each!{
    @{scalar}
    impl_scale!({$s:ty}) => {
        //------------------------
        // owned matrices, every shape

        impl<S, R, C> MulAssign<$s> for Matrix<S, R, C, $s>
        where S: Layout<R, C, $s>, R: DimKind, C: DimKind,
        {
            fn mul_assign(&mut self, a: $s) {
                for x in self.as_mut_slice() {
                    *x = *x * a;
                }
            }
        }

        impl<S, R, C> DivAssign<$s> for Matrix<S, R, C, $s>
        where S: Layout<R, C, $s>, R: DimKind, C: DimKind,
        {
            fn div_assign(&mut self, a: $s) {
                for x in self.as_mut_slice() {
                    *x = *x / a;
                }
            }
        }

        impl<S, R, C> Mul<$s> for Matrix<S, R, C, $s>
        where S: Layout<R, C, $s>, R: DimKind, C: DimKind,
        {
            type Output = Self;
            fn mul(mut self, a: $s) -> Self { self *= a; self }
        }

        impl<'a, S, R, C> Mul<$s> for &'a Matrix<S, R, C, $s>
        where S: Layout<R, C, $s>, R: DimKind, C: DimKind,
        {
            type Output = Matrix<S, R, C, $s>;
            fn mul(self, a: $s) -> Self::Output { self.clone() * a }
        }

        impl<S, R, C> Mul<Matrix<S, R, C, $s>> for $s
        where S: Layout<R, C, $s>, R: DimKind, C: DimKind,
        {
            type Output = Matrix<S, R, C, $s>;
            fn mul(self, m: Matrix<S, R, C, $s>) -> Self::Output { m * self }
        }

        impl<'a, S, R, C> Mul<&'a Matrix<S, R, C, $s>> for $s
        where S: Layout<R, C, $s>, R: DimKind, C: DimKind,
        {
            type Output = Matrix<S, R, C, $s>;
            fn mul(self, m: &'a Matrix<S, R, C, $s>) -> Self::Output { m * self }
        }

        impl<S, R, C> Div<$s> for Matrix<S, R, C, $s>
        where S: Layout<R, C, $s>, R: DimKind, C: DimKind,
        {
            type Output = Self;
            fn div(mut self, a: $s) -> Self { self /= a; self }
        }

        impl<'a, S, R, C> Div<$s> for &'a Matrix<S, R, C, $s>
        where S: Layout<R, C, $s>, R: DimKind, C: DimKind,
        {
            type Output = Matrix<S, R, C, $s>;
            fn div(self, a: $s) -> Self::Output { self.clone() / a }
        }

        //------------------------
        // views produce owned matrices

        impl<'a, 'v, S> Mul<$s> for &'a MatrixRef<'v, S, $s>
        where S: Layout<Var, Var, $s> + DenseShape,
        {
            type Output = Matrix<S, Var, Var, $s>;
            fn mul(self, a: $s) -> Self::Output { self.copy() * a }
        }

        impl<'a, 'v, S> Mul<&'a MatrixRef<'v, S, $s>> for $s
        where S: Layout<Var, Var, $s> + DenseShape,
        {
            type Output = Matrix<S, Var, Var, $s>;
            fn mul(self, m: &'a MatrixRef<'v, S, $s>) -> Self::Output { m.copy() * self }
        }

        impl<'v, S> MulAssign<$s> for MatrixMut<'v, S, $s>
        where S: DenseShape,
        {
            fn mul_assign(&mut self, a: $s) {
                self.update_stored(|_, _, x| *x = *x * a);
            }
        }

        //------------------------
        // newtypes keep their type

        impl_newtype_scale!($s; [R] Vector<R, $s> where [General: Layout<R, Fixed<1>, $s>, R: DimKind]);
        impl_newtype_scale!($s; [C] RowVector<C, $s> where [General: Layout<Fixed<1>, C, $s>, C: DimKind]);
        impl_newtype_scale!($s; [R] SquareMatrix<R, $s> where [General: Layout<R, R, $s>, R: DimKind]);
    }
}
