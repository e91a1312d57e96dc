#[macro_use] extern crate pretty_assertions;

use fmatvec::prelude::*;
use fmatvec::{assert_close, Error};
use fmatvec::{bubble_sort, cross_product, jtj, quick_sort_median, rot_z, tilde, triple_product};
use itertools::Itertools;
use rand::Rng;

mod shared;

#[test]
fn jtj_reads_only_stored_elements() {
    shared::init();
    let a = shared::random_mat(6, 4);
    let s = jtj(&a);
    let g = &trans(&a) * &a;
    assert_eq!(s, g);

    // the symmetric result was built from its lower half only
    for i in 0..4 {
        for j in 0..=i {
            assert_eq!(s.ei(i, j), g.e(i, j));
        }
    }
}

#[test]
fn writes_through_ej_mirror() {
    let mut s = SymMat::<f64>::new(3, 3);
    for j in 0..3 {
        for i in j..3 {
            *s.ej_mut(j, i) = (10 * i + j) as f64;
        }
    }
    for (i, j) in (0..3).cartesian_product(0..3) {
        assert_eq!(s.e(i, j), s.e(j, i));
    }
    assert_eq!(s.e(0, 2), 20.0);
}

#[test]
fn views_alias_their_parent() {
    let mut g = Mat::<f64>::new(4, 4);
    g.view_mut(1..3, 1..4).set(0, 2, 7.0);
    assert_eq!(g.e(1, 3), 7.0);
    g.set(2, 1, -1.0);
    assert_eq!(g.view(1..3, 1..4).e(1, 0), -1.0);
    assert_eq!(g.col(1).e(2, 0), -1.0);

    let mut s = SymMat::<f64>::new(4, 4);
    s.view_sym_mut(1..4).set(2, 0, 3.0);
    assert_eq!((s.e(3, 1), s.e(1, 3)), (3.0, 3.0));
    s.set(2, 3, 5.0);
    let v = s.view_sym(2..4);
    assert_eq!((v.e(0, 1), v.e(1, 0)), (5.0, 5.0));
}

#[test]
fn copies_are_independent() {
    fn check<M: Clone + PartialEq + std::fmt::Debug>(original: M, mutate: impl FnOnce(&mut M)) {
        let mut copy = original.clone();
        mutate(&mut copy);
        assert_ne!(copy, original);
    }
    check(Mat::<f64>::new(2, 3), |m| m.set(1, 2, 1.0));
    check(Mat3x3::<f64>::default(), |m| m.set(0, 0, 1.0));
    check(SymMat::<f64>::new(3, 3), |m| m.set(2, 0, 1.0));
    check(DiagMat::<f64>::new(3, 3), |m| m.set(1, 1, 1.0));
    check(RotMat3::<f64>::fixed(EYE), |m| m.set(0, 1, 0.5));
    check(ColVec::<i32>::new(2), |v| v.set(1, 4));
    check(SqrMat::<i32>::new(2), |m| m.set(0, 1, 4));

    let sparse = SparseMat::<f64>::eye(3);
    let mut copy = sparse.clone();
    copy.values_mut()[0] = 2.0;
    assert_eq!(sparse.values(), &[1.0, 1.0, 1.0]);

    let sparse = SymSparseMat::<f64>::eye(3);
    let mut copy = sparse.clone();
    copy.values_mut()[2] = 2.0;
    assert_eq!(sparse.get(2, 2), 1.0);

    let m = Mat::<f64>::filled(2, 2, 1.0);
    let mut copy = m.view(0..2, 0..1).copy();
    copy.set(0, 0, 9.0);
    assert_eq!(m.e(0, 0), 1.0);
}

#[test]
fn fixed_and_var_products_are_identical() {
    fn check<const M: usize, const N: usize, const K: usize>() {
        let mut rng = rand::thread_rng();
        let a = Matrix::<General, Fixed<M>, Fixed<K>, f64>::from_fn(M, K, |_, _| rng.gen_range(-1.0, 1.0));
        let b = Matrix::<General, Fixed<K>, Fixed<N>, f64>::from_fn(K, N, |_, _| rng.gen_range(-1.0, 1.0));
        let fixed: Matrix<General, Fixed<M>, Fixed<N>, f64> = &a * &b;
        let var: Mat<f64> = &Mat::from_matrix(&a) * &Mat::from_matrix(&b);
        assert_eq!(fixed.to_rows(), var.to_rows());
    }
    check::<1, 1, 1>();
    check::<2, 3, 5>();
    check::<3, 3, 3>();
    check::<5, 1, 2>();
    check::<5, 5, 5>();
    check::<1, 5, 3>();
}

#[test]
fn symmetric_product_matches_general() {
    let a = SymMat::from_matrix(&shared::random_mat(4, 4));
    let b = shared::random_mat(4, 3);
    let fast: Mat<f64> = &a * &b;
    let slow: Mat<f64> = &Mat::from_matrix(&a) * &b;
    assert_close!(abs=1e-12, fast, slow);
}

#[test]
fn sparse_products_match_dense() {
    let mut rng = rand::thread_rng();
    let dense = Mat::<f64>::from_fn(5, 5, |i, j| match (i + 2 * j) % 3 {
        0 => rng.gen_range(-1.0, 1.0),
        _ => 0.0,
    });
    let x = shared::random_mat(5, 2);

    let sparse = SparseMat::from_dense(&dense);
    assert!(sparse.nnz() < 25);
    assert_close!(abs=1e-12, &sparse * &x, &dense * &x);

    let sym = SymMat::from_matrix(&dense);
    let sym_sparse = SymSparseMat::from_dense(&sym);
    assert_close!(abs=1e-12, &sym_sparse * &x, &sym * &x);
}

#[test]
fn tilde_is_skew_and_invertible() {
    let x = ColVec3::<f64>::from_array([1.5, -0.25, 4.0]);
    let t = tilde(&x);
    for (i, j) in (0..3).cartesian_product(0..3) {
        assert_eq!(t.e(i, j), -t.e(j, i));
    }
    assert_eq!(tilde(&t), x);
}

#[test]
fn resize_contract() {
    let mut fixed = ColVec3::<f64>::default();
    assert_eq!(fixed.resize(4), Err(Error::FixedResize { fixed: 3, requested: 4 }));
    assert_eq!(fixed.resize(3), Ok(()));

    let mut var = ColVec::<f64>::filled(3, 1.0);
    var.resize(5).unwrap();
    assert_eq!(var.size(), 5);
}

#[test]
fn fixed_identity() {
    let eye = Matrix::<General, Fixed<3>, Fixed<3>, f64>::fixed(EYE);
    assert_eq!(eye.to_string(), "[1, 0, 0; 0, 1, 0; 0, 0, 1]");
}

#[test]
fn sorts_agree_on_rows() {
    let mut rng = rand::thread_rng();
    let a = Mat::<f64>::from_fn(10, 3, |_, j| match j {
        0 => f64::from(rng.gen_range(0, 4)),
        _ => rng.gen_range(-1.0, 1.0),
    });
    let rows = |m: &Mat<f64>| {
        let mut rows = m.to_rows();
        rows.sort_by(|a, b| a.partial_cmp(b).unwrap());
        rows
    };
    let bubble = bubble_sort(&a, 0);
    let quick = quick_sort_median(&a, 0);
    assert_eq!(rows(&bubble), rows(&a));
    assert_eq!(rows(&quick), rows(&a));
    assert_eq!(bubble.col(0).to_rows(), quick.col(0).to_rows());
}

#[test]
fn cross_and_triple_products() {
    let a = ColVec3::<f64>::from_array([1.0, 2.0, 3.0]);
    let b = ColVec3::<f64>::from_array([-2.0, 0.5, 1.0]);
    let c = cross_product(&a, &b);
    assert_eq!(c.to_vec(), vec![0.5, -7.0, 4.5]);
    assert_eq!(triple_product(&c, &a, &b), c.to_vec().iter().map(|x| x * x).sum::<f64>());
    assert_eq!(triple_product(&a, &a, &b), 0.0);
}

#[test]
fn text_round_trip() {
    let g = Mat::<f64>::from_rows(&[[1.0, 2.5], [-3.0, 0.0], [4.0, 5.0]]).unwrap();
    let printed = format!("{:#}", g);
    assert_eq!(printed, "[1, 2.5;\n -3, 0;\n 4, 5]");
    assert_eq!(printed.parse::<Mat<f64>>().unwrap(), g);

    let r = rot_z(0.5);
    assert_close!(abs=1e-15, r.to_string().parse::<Mat3x3<f64>>().unwrap(), r);
}
