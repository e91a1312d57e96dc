//! Dense matrices serialize as a list of rows, the full rows even for shapes that store
//! less.  Sparse matrices serialize their CSR arrays.

use serde::{Serialize, Deserialize, ser, de};

use crate::dim::DimKind;
use crate::scalar::Scalar;
use crate::shape::DenseShape;
use crate::storage::Layout;
use crate::tags::{Fixed, General, Sparse, SymmetricSparse, Var};
use crate::matrix::Matrix;
use crate::square::SquareMatrix;
use crate::vector::{RowVector, Vector};

impl<S, R, C, T> Serialize for Matrix<S, R, C, T>
where S: Layout<R, C, T> + DenseShape, R: DimKind, C: DimKind, T: Scalar + Serialize,
{
    fn serialize<Ser: ser::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.to_rows().serialize(serializer)
    }
}

impl<'de, S, R, C, T> Deserialize<'de> for Matrix<S, R, C, T>
where S: Layout<R, C, T> + DenseShape, R: DimKind, C: DimKind, T: Scalar + Deserialize<'de>,
{
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows: Vec<Vec<T>> = Deserialize::deserialize(deserializer)?;
        Matrix::from_rows(&rows[..]).map_err(de::Error::custom)
    }
}

#[derive(Serialize, Deserialize)]
struct CsrParts<T> {
    rows: usize,
    cols: usize,
    ip: Vec<usize>,
    jp: Vec<usize>,
    values: Vec<T>,
}

impl<T: Scalar + Serialize> Serialize for Matrix<Sparse, Var, Var, T> {
    fn serialize<Ser: ser::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        CsrParts {
            rows: self.rows(),
            cols: self.cols(),
            ip: self.ip().to_vec(),
            jp: self.jp().to_vec(),
            values: self.values().to_vec(),
        }.serialize(serializer)
    }
}

impl<'de, T: Scalar + Deserialize<'de>> Deserialize<'de> for Matrix<Sparse, Var, Var, T> {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let CsrParts { rows, cols, ip, jp, values } = Deserialize::deserialize(deserializer)?;
        Matrix::<Sparse, Var, Var, T>::from_parts(rows, cols, ip, jp, values).map_err(de::Error::custom)
    }
}

impl<T: Scalar + Serialize> Serialize for Matrix<SymmetricSparse, Var, Var, T> {
    fn serialize<Ser: ser::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        CsrParts {
            rows: self.rows(),
            cols: self.cols(),
            ip: self.ip().to_vec(),
            jp: self.jp().to_vec(),
            values: self.values().to_vec(),
        }.serialize(serializer)
    }
}

impl<'de, T: Scalar + Deserialize<'de>> Deserialize<'de> for Matrix<SymmetricSparse, Var, Var, T> {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let CsrParts { rows, cols, ip, jp, values } = Deserialize::deserialize(deserializer)?;
        if rows != cols {
            return Err(de::Error::custom(format!("symmetric sparse matrix is {}x{}", rows, cols)));
        }
        Matrix::<SymmetricSparse, Var, Var, T>::from_parts(rows, ip, jp, values).map_err(de::Error::custom)
    }
}

// vectors are flat lists
macro_rules! impl_vector_serde {
    ($([$K:ident] $Vector:ident where [$($bound:tt)*];)*) => {$(
        impl<$K, T> Serialize for $Vector<$K, T>
        where $($bound)* T: Scalar + Serialize,
        {
            fn serialize<Ser: ser::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
                self.to_vec().serialize(serializer)
            }
        }

        impl<'de, $K, T> Deserialize<'de> for $Vector<$K, T>
        where $($bound)* T: Scalar + Deserialize<'de>,
        {
            fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let data: Vec<T> = Deserialize::deserialize(deserializer)?;
                $Vector::from_vec(data).map_err(de::Error::custom)
            }
        }
    )*};
}

impl_vector_serde!{
    [R] Vector where [General: Layout<R, Fixed<1>, T>, R: DimKind,];
    [C] RowVector where [General: Layout<Fixed<1>, C, T>, C: DimKind,];
}

impl<R, T> Serialize for SquareMatrix<R, T>
where General: Layout<R, R, T>, R: DimKind, T: Scalar + Serialize,
{
    fn serialize<Ser: ser::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, R, T> Deserialize<'de> for SquareMatrix<R, T>
where General: Layout<R, R, T>, R: DimKind, T: Scalar + Deserialize<'de>,
{
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let m = Matrix::deserialize(deserializer)?;
        SquareMatrix::from_general(m).map_err(de::Error::custom)
    }
}
