//! Contract checks.
//!
//! Violated preconditions (indices out of range, nonconformable operands, a fixed
//! dimension given the wrong size) are programmer errors.  They are checked with
//! [`fmv_assert!`], which compiles to nothing in release builds unless the element
//! type opts in through [`Scalar::ALWAYS_CHECK`](crate::Scalar::ALWAYS_CHECK).

use crate::scalar::Scalar;

/// Payload of a failed contract check for a scalar type with `ALWAYS_CHECK`.
///
/// Recover it with `std::panic::catch_unwind` and `downcast_ref::<ContractViolation>()`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{file}:{line}: contract violated in {module}: `{expr}`: {message}")]
pub struct ContractViolation {
    pub file: &'static str,
    pub line: u32,
    pub module: &'static str,
    pub expr: &'static str,
    pub message: String,
}

#[doc(hidden)]
#[cold]
#[inline(never)]
pub fn __fail<T: Scalar>(
    file: &'static str,
    line: u32,
    module: &'static str,
    expr: &'static str,
    message: String,
) -> ! {
    let violation = ContractViolation { file, line, module, expr, message };
    if T::ALWAYS_CHECK {
        error!("{}", violation);
        std::panic::panic_any(violation)
    } else {
        panic!("{}", violation)
    }
}

/// Check a contract on behalf of the element type `$T`.
///
/// ```text
/// fmv_assert!(T, i < self.rows(), "row {} out of range", i);
/// ```
#[macro_export]
macro_rules! fmv_assert {
    ($T:ty, $cond:expr $(,)?) => {
        $crate::fmv_assert!($T, $cond, "assertion failed")
    };
    ($T:ty, $cond:expr, $($fmt:tt)+) => {
        if <$T as $crate::scalar::Scalar>::ALWAYS_CHECK || cfg!(debug_assertions) {
            if !$cond {
                $crate::assertion::__fail::<$T>(
                    file!(), line!(), module_path!(), stringify!($cond), format!($($fmt)+),
                );
            }
        }
    };
}

/// Unconditionally fail a contract.  For places that cannot continue, like `Index`.
macro_rules! fmv_fail {
    ($T:ty, $($fmt:tt)+) => {
        $crate::assertion::__fail::<$T>(file!(), line!(), module_path!(), "", format!($($fmt)+))
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn passing_check_is_silent() {
        fmv_assert!(f64, 1 + 1 == 2, "arithmetic is broken");
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "contract violated"))]
    fn failing_check_is_debug_only() {
        fmv_assert!(f64, 1 + 1 == 3, "expected {}", 3);
    }

    #[test]
    #[should_panic(expected = "stop here")]
    fn fail_always_fails() {
        let _: () = fmv_fail!(i32, "stop {}", "here");
    }
}
