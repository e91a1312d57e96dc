#![allow(dead_code)]

use fmatvec::prelude::*;
use rand::Rng;

pub fn init() { fmatvec::logging::init_test_logger() }

pub fn random_mat(rows: usize, cols: usize) -> Mat<f64> {
    let mut rng = rand::thread_rng();
    Mat::from_fn(rows, cols, |_, _| rng.gen_range(-1.0, 1.0))
}
