//! Result types of mixed operations.  Most of the checking happens at compile time,
//! through the annotated bindings.

use fmatvec::prelude::*;
use fmatvec::{assert_close, jtmj, nrm_fro, scalar_product};
use num_complex::Complex64;

mod shared;

#[test]
fn shapes() {
    let g = Mat::<f64>::filled(3, 3, 1.0);
    let s = SymMat::<f64>::eye(3, 3);
    let d = DiagMat::<f64>::from_diag(vec![1.0, 2.0, 3.0]);

    let _: SymMat<f64> = &s + &s;
    let _: Mat<f64> = &s + &g;
    let _: DiagMat<f64> = &d * &d;
    let _: Mat<f64> = &d * &s;
    let _: Mat<f64> = &s * &s;
    let _: SymMat<f64> = trans(&s);
    let _: SymMat<f64> = jtmj(&s, &g);
}

#[test]
fn kinds() {
    let f = Mat3x3::<f64>::fixed(EYE);
    let v = Mat::<f64>::eye(3, 3);
    let x = ColVec3::<f64>::from_array([1.0, 2.0, 3.0]);

    let _: Mat3x3<f64> = &f * &f;
    // rows come from the left operand, columns from the right
    let _: Matrix<General, Fixed<3>, Var, f64> = &f * &v;
    let _: Matrix<General, Var, Fixed<3>, f64> = &v * &f;
    let _: ColVec3<f64> = &f * &x;
    let _: RowVec3<f64> = &x.trans() * &f;
    let _: Matrix<General, Var, Fixed<3>, f64> = &f.as_view() * &f;
    let _: Mat<f64> = &f.as_view() * &v.as_view();
    let _: Matrix<General, Fixed<3>, Fixed<3>, f64> = &x * &x.trans();
}

#[test]
fn scalars() {
    let i = Mat::<i32>::from_rows(&[[1, 2], [3, 4]]).unwrap();
    let f = Mat::<f64>::from_rows(&[[0.5, 0.0], [0.0, 0.5]]).unwrap();
    let c = Mat::<Complex64>::eye_with(2, 2, Complex64::new(0.0, 1.0));

    let fi: Mat<f64> = &i * &f;
    assert_eq!(fi.to_rows(), vec![vec![0.5, 1.0], vec![1.5, 2.0]]);
    let ic: Mat<Complex64> = &i + &c;
    assert_eq!(ic.e(1, 1), Complex64::new(4.0, 1.0));
    let fc: Mat<Complex64> = &f * &c;
    assert_eq!(fc.e(0, 0), Complex64::new(0.0, 0.5));

    let wide: Mat<i64> = &i + &Mat::<i64>::filled(2, 2, 1 << 40);
    assert_eq!(wide.e(0, 0), (1 << 40) + 1);

    let x = ColVec::<i32>::from_vec(vec![1, 2]).unwrap();
    let y = ColVec::<f64>::from_vec(vec![0.25, 0.25]).unwrap();
    let dot: f64 = scalar_product(&x, &y);
    assert_eq!(dot, 0.75);
}

#[test]
fn moves_agree_with_borrows() {
    let a = shared::random_mat(3, 3);
    let b = shared::random_mat(3, 3);

    assert_eq!(a.clone() + b.clone(), &a + &b);
    assert_eq!(a.clone() - &b, &a - &b);
    assert_eq!(a.clone() * 2.0, &a * 2.0);
    assert_eq!(2.0 * a.clone(), &a * 2.0);

    let mut c = a.clone();
    c *= 2.0;
    c /= 2.0;
    assert_close!(abs=1e-15, &c, &a);
    assert_eq!(nrm_fro(&(&a - &a)), 0.0);
}
