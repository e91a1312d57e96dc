//! Named algorithms on matrices and vectors.

mod products;
mod jacobian;
mod norms;
mod sort;

pub use self::products::{cross_product, scalar_product, tilde, tilde_with_tol, triple_product, Tilde};
pub use self::jacobian::{jmjt, jtj, jtmj};
pub use self::norms::{max, max_index, min, min_index, nrm1, nrm2, nrm_fro, nrm_inf, Norm};
pub use self::sort::{bubble_sort, quick_sort_median};
