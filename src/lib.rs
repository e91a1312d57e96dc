/* ************************************************************************ **
** This file is part of fmatvec, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Matrices with their storage shape and dimension kinds in the type.
//!
//! Everything numeric lives in [`fmatvec_core`] and is reexported here.  This crate adds
//! the pieces an application wants around it: [`Settings`] read from YAML, and a global
//! logger.

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
extern crate fern;
extern crate ansi_term;
extern crate serde;
#[macro_use] extern crate serde_derive;
extern crate fmatvec_config_utils;

pub use fmatvec_core::*;
pub use fmatvec_core::{fmv_assert, operator_result};
pub use fmatvec_assert_close::{assert_close, debug_assert_close, CheckClose};
pub use fmatvec_config_utils::{FailResult, YamlRead};

pub mod logging;
mod settings;

pub use crate::settings::Settings;
