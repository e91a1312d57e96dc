/* ************************************************************************ **
** This file is part of fmatvec, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Reading settings files.

extern crate failure;
extern crate serde;
extern crate serde_ignored;
extern crate serde_yaml;
#[macro_use] extern crate log;

mod yaml;

pub use crate::yaml::YamlRead;

pub type FailResult<T> = Result<T, failure::Error>;
