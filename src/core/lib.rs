/* ************************************************************************ **
** This file is part of fmatvec, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Shape- and dimension-specialized matrices.
//!
//! Every matrix type names its storage pattern (`General`, `Symmetric`, `Diagonal`,
//! `Sparse`, `SymmetricSparse`, `Rotation`) and the kind of each dimension (`Fixed<N>`,
//! `Var`, `Ref`) in its type.  Element access, storage, and arithmetic are all chosen
//! at compile time from those tags.

#[macro_use] extern crate log;
#[cfg_attr(test, macro_use)] extern crate fmatvec_assert_close;
extern crate itertools;
extern crate num_complex;
extern crate num_traits;
extern crate slice_of_array;
extern crate thiserror;
#[cfg(feature = "serde")] extern crate serde;

#[cfg(test)] extern crate rand;
#[cfg(test)] #[macro_use] extern crate pretty_assertions;
#[cfg(all(test, feature = "serde"))] extern crate serde_json;

#[macro_use] mod macros;
#[macro_use] pub mod assertion;
#[macro_use] pub mod scalar;

pub mod config;
pub mod dim;
pub mod error;
pub mod init;
pub mod shape;
pub mod storage;
pub mod tags;
pub mod traits;

mod matrix;
mod general;
mod symmetric;
mod diagonal;
mod rotation;
mod vector;
mod square;
mod view;
mod sparse;
mod text;
mod close;
#[cfg(feature = "serde")]
mod serde_impls;

pub mod ops;
pub mod algo;

//---------------------------
// public reexports; API

pub use crate::assertion::ContractViolation;
pub use crate::config::{Tolerances, DEFAULT_TILDE_TOL, DEFAULT_SYMMETRY_TOL};
pub use crate::dim::{DimKind, Join, JoinOf};
pub use crate::error::{Error, Result};
pub use crate::init::{Eye, Init, Initial, Noinit, EYE, INIT, NONINIT};
pub use crate::scalar::{Promote, Promoted, Scalar};
pub use crate::shape::{DenseShape, Shape, SymmetricShape};
pub use crate::storage::Layout;
pub use crate::tags::{Diagonal, Fixed, General, Ref, Rotation, Sparse, Symmetric, SymmetricSparse, Var};
pub use crate::traits::{Alloc, MatrixBase, MatrixFill, MatrixLike, SymmetricBase, VectorLike};

pub use crate::matrix::Matrix;
pub use crate::vector::{RowVector, Vector};
pub use crate::square::SquareMatrix;
pub use crate::view::{MatrixMut, MatrixRef};
pub use crate::rotation::{rot_x, rot_y, rot_z};

pub use crate::ops::{add, mult, sub, trans, MultKernel, ProductShape, ProductWith, SumShape, SumWith, Transpose};
pub use crate::algo::{
    bubble_sort, cross_product, jmjt, jtj, jtmj, max, max_index, min, min_index,
    nrm1, nrm2, nrm_fro, nrm_inf, quick_sort_median, scalar_product, tilde, tilde_with_tol,
    triple_product, Norm, Tilde,
};

/// Common aliases, named after the classic fmatvec typedefs.
pub mod aliases {
    use super::*;

    pub type Mat<T = f64> = Matrix<General, Var, Var, T>;
    pub type SymMat<T = f64> = Matrix<Symmetric, Var, Var, T>;
    pub type DiagMat<T = f64> = Matrix<Diagonal, Var, Var, T>;
    pub type SparseMat<T = f64> = Matrix<Sparse, Var, Var, T>;
    pub type SymSparseMat<T = f64> = Matrix<SymmetricSparse, Var, Var, T>;
    pub type SqrMat<T = f64> = SquareMatrix<Var, T>;
    pub type ColVec<T = f64> = Vector<Var, T>;
    pub type RowVec<T = f64> = RowVector<Var, T>;

    pub type Mat3x3<T = f64> = Matrix<General, Fixed<3>, Fixed<3>, T>;
    pub type SymMat3<T = f64> = Matrix<Symmetric, Fixed<3>, Fixed<3>, T>;
    pub type SqrMat3<T = f64> = SquareMatrix<Fixed<3>, T>;
    pub type RotMat3<T = f64> = Matrix<Rotation, Fixed<3>, Fixed<3>, T>;
    pub type ColVec3<T = f64> = Vector<Fixed<3>, T>;
    pub type RowVec3<T = f64> = RowVector<Fixed<3>, T>;
}

/// Glob-import this for the types, traits, and operators.
pub mod prelude {
    pub use super::aliases::*;
    pub use super::{
        DimKind, DenseShape, Shape, Scalar, MatrixLike, MatrixBase, MatrixFill, SymmetricBase,
        VectorLike, Norm, Transpose, Tilde,
    };
    pub use super::{Diagonal, Fixed, General, Ref, Rotation, Sparse, Symmetric, SymmetricSparse, Var};
    pub use super::{Matrix, MatrixMut, MatrixRef, RowVector, SquareMatrix, Vector};
    pub use super::{EYE, INIT, NONINIT};
    pub use super::trans;
}
