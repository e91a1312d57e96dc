//! Arithmetic.
//!
//! The result type of every operation is decided at compile time from the operand types:
//!
//! * the shape by [`SumShape`] or [`ProductShape`],
//! * each dimension kind by [`Join`](crate::Join) (sums) or by the outer operands' kinds
//!   (products, where `Ref` becomes `Var`),
//! * the element type by [`Promote`](crate::Promote).
//!
//! Operators are implemented on references (`&a + &b`, `&a * &b`).  Owned operands whose
//! type is already the result type are reused (`a + &b`, `&a - b`, `-a`, `a * 2.0`).

use crate::scalar::{Promote, Promoted};
use crate::shape::{DenseShape, Shape};
use crate::tags::{Diagonal, General, Rotation, Sparse, Symmetric, SymmetricSparse};

mod add;
mod mult;
mod scale;
mod trans;

pub use self::add::{add, sub, SumWith};
pub use self::mult::{mult, MultKernel, ProductWith};
pub use self::trans::{trans, Transpose};
pub(crate) use self::mult::mult_new;

/// Shape of a sum or difference.
pub trait SumShape<Rhs: Shape>: Shape {
    type Output: DenseShape;
}

pub type SumOf<A, B> = <A as SumShape<B>>::Output;

/// Shape of a product.
pub trait ProductShape<Rhs: Shape>: Shape {
    type Output: DenseShape;
}

pub type ProductOf<A, B> = <A as ProductShape<B>>::Output;

macro_rules! shape_table {
    ($Trait:ident: $($A:ty, $B:ty => $Out:ty;)*) => {$(
        impl $Trait<$B> for $A { type Output = $Out; }
    )*};
}

shape_table!{SumShape:
    General, General => General;
    General, Symmetric => General;
    General, Diagonal => General;
    General, Rotation => General;
    Symmetric, General => General;
    Symmetric, Symmetric => Symmetric;
    Symmetric, Diagonal => General;
    Symmetric, Rotation => General;
    Diagonal, General => General;
    Diagonal, Symmetric => General;
    Diagonal, Diagonal => Diagonal;
    Diagonal, Rotation => General;
    Rotation, General => General;
    Rotation, Symmetric => General;
    Rotation, Diagonal => General;
    Rotation, Rotation => General;
}

shape_table!{ProductShape:
    General, General => General;
    General, Symmetric => General;
    General, Diagonal => General;
    General, Rotation => General;
    Symmetric, General => General;
    Symmetric, Symmetric => General;
    Symmetric, Diagonal => General;
    Symmetric, Rotation => General;
    Diagonal, General => General;
    Diagonal, Symmetric => General;
    Diagonal, Diagonal => Diagonal;
    Diagonal, Rotation => General;
    Rotation, General => General;
    Rotation, Symmetric => General;
    Rotation, Diagonal => General;
    Rotation, Rotation => Rotation;
    Sparse, General => General;
    Sparse, Symmetric => General;
    Sparse, Diagonal => General;
    Sparse, Rotation => General;
    SymmetricSparse, General => General;
    SymmetricSparse, Symmetric => General;
    SymmetricSparse, Diagonal => General;
    SymmetricSparse, Rotation => General;
}

/// Convert both operands to their common type.
#[inline(always)]
pub(crate) fn promoted<A: Promote<B>, B>(a: A, b: B) -> (Promoted<A, B>, Promoted<A, B>) {
    (a.lhs(), A::rhs(b))
}

/// `*slot = f(*slot)`
#[inline(always)]
pub(crate) fn update<T: crate::Scalar>(slot: &mut T, f: impl FnOnce(T) -> T) {
    let old = std::mem::replace(slot, T::zero());
    *slot = f(old);
}
