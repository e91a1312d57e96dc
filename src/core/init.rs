//! Initialization policies for matrix constructors.

use crate::scalar::Scalar;

/// Leave the contents unspecified.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Noinit;

/// Fill every stored element.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Init;

/// Identity pattern.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Eye;

pub const NONINIT: Noinit = Noinit;
pub const INIT: Init = Init;
pub const EYE: Eye = Eye;

/// A resolved initialization policy.
///
/// Constructors take `impl Into<Initial<T>>`, so the tags can be passed directly:
/// `INIT` fills with zero, `EYE` puts ones on the diagonal, and `INIT.with(a)` /
/// `EYE.with(d)` choose the value.
#[derive(Debug, Clone, PartialEq)]
pub enum Initial<T> {
    /// Contents are unspecified.  (they currently happen to be zero; don't rely on it)
    Noinit,
    Fill(T),
    Eye(T),
}

impl Init {
    pub fn with<T>(self, value: T) -> Initial<T> { Initial::Fill(value) }
}

impl Eye {
    pub fn with<T>(self, diagonal: T) -> Initial<T> { Initial::Eye(diagonal) }
}

impl<T: Scalar> From<Noinit> for Initial<T> {
    fn from(_: Noinit) -> Self { Initial::Noinit }
}

impl<T: Scalar> From<Init> for Initial<T> {
    fn from(_: Init) -> Self { Initial::Fill(T::zero()) }
}

impl<T: Scalar> From<Eye> for Initial<T> {
    fn from(_: Eye) -> Self { Initial::Eye(T::one()) }
}
