//! The bracket notation, `[a, b; c, d]`.
//!
//! Rows are separated by `;` or newlines, and elements by `,` or whitespace.  `{:#}`
//! prints one row per line.

use std::fmt;
use std::str::FromStr;

use crate::dim::DimKind;
use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::shape::DenseShape;
use crate::storage::Layout;
use crate::tags::{Fixed, General, Sparse, SymmetricSparse, Var};
use crate::matrix::Matrix;
use crate::square::SquareMatrix;
use crate::vector::{RowVector, Vector};
use crate::view::{MatrixMut, MatrixRef};

fn write_rows<T, F>(f: &mut fmt::Formatter<'_>, rows: usize, cols: usize, e: F) -> fmt::Result
where
    T: Scalar,
    F: Fn(usize, usize) -> T,
{
    let row_sep = match f.alternate() {
        true => ";\n ",
        false => "; ",
    };
    write!(f, "[")?;
    for i in 0..rows {
        if i > 0 {
            write!(f, "{}", row_sep)?;
        }
        for j in 0..cols {
            if j > 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(&e(i, j), f)?;
        }
    }
    write!(f, "]")
}

impl<S, R, C, T> fmt::Display for Matrix<S, R, C, T>
where S: Layout<R, C, T> + DenseShape, R: DimKind, C: DimKind, T: Scalar,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.rows(), self.cols(), |i, j| self.e(i, j))
    }
}

impl<T: Scalar> fmt::Display for Matrix<Sparse, Var, Var, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.rows(), self.cols(), |i, j| self.get(i, j))
    }
}

impl<T: Scalar> fmt::Display for Matrix<SymmetricSparse, Var, Var, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.rows(), self.cols(), |i, j| self.get(i, j))
    }
}

impl<'a, S: DenseShape, T: Scalar> fmt::Display for MatrixRef<'a, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.rows(), self.cols(), |i, j| self.e(i, j))
    }
}

impl<'a, S: DenseShape, T: Scalar> fmt::Display for MatrixMut<'a, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.rows(), self.cols(), |i, j| self.e(i, j))
    }
}

//---------------------------------

/// Split the notation into rows of tokens.  Empty rows are dropped.
fn tokenize(s: &str) -> Result<Vec<Vec<&str>>> {
    let s = s.trim();
    let inner = s.strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| Error::Parse(format!("expected brackets around {:?}", s)))?;

    Ok(inner.split(|c| c == ';' || c == '\n')
        .map(|row| {
            row.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|tok| !tok.is_empty())
                .collect::<Vec<_>>()
        })
        .filter(|row| !row.is_empty())
        .collect())
}

fn parse_rows<T: Scalar>(s: &str) -> Result<Vec<Vec<T>>> {
    tokenize(s)?.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|tok| tok.parse().map_err(|_| Error::Parse(format!("bad element {:?}", tok))))
                .collect()
        })
        .collect()
}

impl<S, R, C, T> FromStr for Matrix<S, R, C, T>
where S: Layout<R, C, T> + DenseShape, R: DimKind, C: DimKind, T: Scalar,
{
    type Err = Error;

    /// Shapes that don't store every position verify the rest, as `from_rows` does.
    fn from_str(s: &str) -> Result<Self> {
        let rows = parse_rows::<T>(s)?;
        Matrix::from_rows(&rows[..])
    }
}

impl<T: Scalar> FromStr for Matrix<Sparse, Var, Var, T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let dense: Matrix<General, Var, Var, T> = s.parse()?;
        Ok(Matrix::<Sparse, Var, Var, T>::from_dense(&dense))
    }
}

macro_rules! impl_newtype_text {
    ($([$K:ident] $Type:ident via $Mat:ty where [$($bound:tt)*];)*) => {$(
        impl<$K, T> fmt::Display for $Type<$K, T>
        where $($bound)*
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Display::fmt(&self.0, f) }
        }

        impl<$K, T> FromStr for $Type<$K, T>
        where $($bound)*
        {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                let m: $Mat = s.parse()?;
                Ok(m.into())
            }
        }
    )*};
}

impl_newtype_text!{
    [R] Vector via Matrix<General, R, Fixed<1>, T> where [General: Layout<R, Fixed<1>, T>, R: DimKind, T: Scalar,];
    [C] RowVector via Matrix<General, Fixed<1>, C, T> where [General: Layout<Fixed<1>, C, T>, C: DimKind, T: Scalar,];
}

impl<R, T> fmt::Display for SquareMatrix<R, T>
where General: Layout<R, R, T>, R: DimKind, T: Scalar,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Display::fmt(&self.0, f) }
}

impl<R, T> FromStr for SquareMatrix<R, T>
where General: Layout<R, R, T>, R: DimKind, T: Scalar,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> { SquareMatrix::from_general(s.parse()?) }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::Error;
    use num_complex::Complex64;

    #[test]
    fn display() {
        let m = Mat::<i32>::from_rows(&[[1, 2], [3, 4]]).unwrap();
        assert_eq!(m.to_string(), "[1, 2; 3, 4]");
        assert_eq!(format!("{:#}", m), "[1, 2;\n 3, 4]");
        assert_eq!(format!("{:.1}", m.map(f64::from)), "[1.0, 2.0; 3.0, 4.0]");
        assert_eq!(Mat::<f64>::new(0, 0).to_string(), "[]");

        let v = ColVec::<i32>::from_vec(vec![1, 2]).unwrap();
        assert_eq!(v.to_string(), "[1; 2]");
        assert_eq!(v.trans().to_string(), "[1, 2]");

        let s = SparseMat::<i32>::eye(2);
        assert_eq!(s.to_string(), "[1, 0; 0, 1]");
        assert_eq!(m.t().to_string(), "[1, 3; 2, 4]");
    }

    #[test]
    fn round_trip() {
        let m = Mat::<f64>::from_rows(&[[1.5, -2.0, 0.0], [3.25, 4.0, 1e-3]]).unwrap();
        assert_eq!(m.to_string().parse::<Mat<f64>>().unwrap(), m);
        assert_eq!(format!("{:#}", m).parse::<Mat<f64>>().unwrap(), m);

        let s = SymMat3::<f64>::from_array([[1.0, 0.0, 0.0], [2.0, 3.0, 0.0], [4.0, 5.0, 6.0]]);
        assert_eq!(s.to_string().parse::<SymMat3<f64>>().unwrap(), s);

        let d = DiagMat::<i64>::from_diag(vec![1, -2, 3]);
        assert_eq!(d.to_string().parse::<DiagMat<i64>>().unwrap(), d);

        let c = Mat::<Complex64>::from_fn(2, 2, |i, j| Complex64::new(i as f64 + 0.5, -1.0 - j as f64));
        assert_eq!(c.to_string().parse::<Mat<Complex64>>().unwrap(), c);

        let sq = SqrMat::<i32>::eye(3);
        assert_eq!(sq.to_string().parse::<SqrMat<i32>>().unwrap(), sq);
    }

    #[test]
    fn separators() {
        let m: Mat<i32> = "[1 2\n3 4]".parse().unwrap();
        assert_eq!(m.to_rows(), vec![vec![1, 2], vec![3, 4]]);

        let v: ColVec3<i32> = "[1;2;3]".parse().unwrap();
        assert_eq!(v.to_vec(), vec![1, 2, 3]);

        let r: RowVec<i32> = "[ 1, 2 ,3 ]".parse().unwrap();
        assert_eq!(r.size(), 3);

        let s: SparseMat<i32> = "[0, 5; 0, 0]".parse().unwrap();
        assert_eq!(s.nnz(), 1);
    }

    #[test]
    fn errors() {
        assert!(matches!("1, 2".parse::<Mat<f64>>(), Err(Error::Parse(_))));
        assert!(matches!("[1, x]".parse::<Mat<f64>>(), Err(Error::Parse(_))));
        assert_eq!(
            "[1, 2; 3]".parse::<Mat<f64>>().unwrap_err(),
            Error::RaggedRows { row: 1, expected: 2, found: 1 },
        );
        assert_eq!(
            "[1, 2; 3, 4]".parse::<SymMat<f64>>().unwrap_err(),
            Error::NotSymmetric { row: 0, col: 1 },
        );
        assert_eq!(
            "[1; 2]".parse::<ColVec3<f64>>().unwrap_err(),
            Error::FixedResize { fixed: 3, requested: 2 },
        );
        assert_eq!(
            "[1, 2, 3]".parse::<SqrMat<f64>>().unwrap_err(),
            Error::NotSquare { rows: 1, cols: 3 },
        );
    }
}
