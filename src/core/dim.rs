//! Dimension kinds.

use std::fmt::Debug;

use crate::error::{Error, Result};
use crate::tags::{Fixed, Ref, Var};

/// Behavior of a dimension kind tag.
pub trait DimKind: Copy + Default + Debug + PartialEq + 'static {
    /// What a matrix must store at runtime to know this dimension.
    type Extent: Copy + Debug + PartialEq + Send + Sync + 'static;

    /// The kind used for an owned result computed from this dimension.
    ///
    /// This is `Var` for `Ref` and the identity otherwise.
    type Owned: DimKind;

    /// `Some(N)` for `Fixed<N>`.
    const FIXED: Option<usize>;

    fn extent(n: usize) -> Self::Extent;
    fn get(extent: Self::Extent) -> usize;

    /// Can a dimension of this kind hold `n`?
    #[inline]
    fn accepts(n: usize) -> bool {
        Self::FIXED.map_or(true, |fixed| fixed == n)
    }

    /// Like `accepts`, but producing the error reported by `resize`.
    fn check(n: usize) -> Result<()> {
        match Self::FIXED {
            Some(fixed) if fixed != n => Err(Error::FixedResize { fixed, requested: n }),
            _ => Ok(()),
        }
    }
}

impl<const N: usize> DimKind for Fixed<N> {
    type Extent = ();
    type Owned = Fixed<N>;
    const FIXED: Option<usize> = Some(N);

    #[inline(always)] fn extent(_: usize) {}
    #[inline(always)] fn get(_: ()) -> usize { N }
}

impl DimKind for Var {
    type Extent = usize;
    type Owned = Var;
    const FIXED: Option<usize> = None;

    #[inline(always)] fn extent(n: usize) -> usize { n }
    #[inline(always)] fn get(n: usize) -> usize { n }
}

impl DimKind for Ref {
    type Extent = usize;
    type Owned = Var;
    const FIXED: Option<usize> = None;

    #[inline(always)] fn extent(n: usize) -> usize { n }
    #[inline(always)] fn get(n: usize) -> usize { n }
}

/// Kind of the dimension produced by an elementwise binary operation.
///
/// Two fixed dimensions must agree (a mismatch simply has no impl); anything involving
/// a runtime dimension produces `Var`.
pub trait Join<Rhs> {
    type Output: DimKind;
}

pub type JoinOf<A, B> = <A as Join<B>>::Output;

impl<const N: usize> Join<Fixed<N>> for Fixed<N> { type Output = Fixed<N>; }
impl<const N: usize> Join<Var> for Fixed<N> { type Output = Var; }
impl<const N: usize> Join<Ref> for Fixed<N> { type Output = Var; }
impl<const N: usize> Join<Fixed<N>> for Var { type Output = Var; }
impl<const N: usize> Join<Fixed<N>> for Ref { type Output = Var; }
impl Join<Var> for Var { type Output = Var; }
impl Join<Ref> for Var { type Output = Var; }
impl Join<Var> for Ref { type Output = Var; }
impl Join<Ref> for Ref { type Output = Var; }
