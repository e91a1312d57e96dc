//! Zero-sized marker types naming a matrix's shape and the kind of each dimension.
//!
//! None of these carry data or have operations of their own; all behavior lives in the
//! traits of [`shape`](crate::shape) and [`dim`](crate::dim).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! marker_tags {
    ($( $(#[$meta:meta])* $Tag:ident; )*) => {$(
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub struct $Tag;
    )*};
}

marker_tags! {
    /// Dense storage of every element.
    General;
    /// Square, with only the lower triangle stored.
    Symmetric;
    /// Square, with only the diagonal stored.
    Diagonal;
    /// Compressed sparse rows.
    Sparse;
    /// Compressed sparse rows holding the diagonal and the upper triangle.
    SymmetricSparse;
    /// A square orthogonal matrix with dense storage.
    Rotation;

    /// A dimension sized at runtime and owned by the matrix.
    Var;
    /// A dimension sized at runtime that belongs to a view of another matrix.
    Ref;
}

/// A dimension of compile-time size `N`.
///
/// Matrices store no runtime integer for a fixed dimension.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fixed<const N: usize>;
