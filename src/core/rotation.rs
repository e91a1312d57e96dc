//! Elementary rotations.
//!
//! A rotation matrix is stored densely, like a general one.  The shape only changes what
//! operations produce: the product of two rotations is a rotation, and the transpose of a
//! rotation is its inverse.

use crate::matrix::Matrix;
use crate::tags::{Fixed, Rotation};

pub type Rot3 = Matrix<Rotation, Fixed<3>, Fixed<3>, f64>;

/// Rotation by `phi` radians about the x axis.
pub fn rot_x(phi: f64) -> Rot3 {
    let (s, c) = phi.sin_cos();
    Rot3::from_array([
        [1.0, 0.0, 0.0],
        [0.0, c, -s],
        [0.0, s, c],
    ])
}

/// Rotation by `phi` radians about the y axis.
pub fn rot_y(phi: f64) -> Rot3 {
    let (s, c) = phi.sin_cos();
    Rot3::from_array([
        [c, 0.0, s],
        [0.0, 1.0, 0.0],
        [-s, 0.0, c],
    ])
}

/// Rotation by `phi` radians about the z axis.
pub fn rot_z(phi: f64) -> Rot3 {
    let (s, c) = phi.sin_cos();
    Rot3::from_array([
        [c, -s, 0.0],
        [s, c, 0.0],
        [0.0, 0.0, 1.0],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use crate::trans;

    #[test]
    fn rotations_compose_and_invert() {
        let r = &rot_x(0.3) * &rot_z(-1.1);
        let _: &RotMat3 = &r;

        let eye = &r * &trans(&r);
        assert_close!(abs=1e-14, eye.as_slice(), RotMat3::<f64>::fixed(EYE).as_slice());
    }

    #[test]
    fn quarter_turn() {
        let v = ColVec3::<f64>::from_array([1.0, 0.0, 0.0]);
        let w = &rot_z(std::f64::consts::FRAC_PI_2) * &v;
        assert_close!(abs=1e-15, w.as_slice(), &[0.0, 1.0, 0.0][..]);
    }
}
