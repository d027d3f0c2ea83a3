/* ************************************************************************ **
** This file is part of abaqus-tools, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Helpers for writing Abaqus user materials in Rust.
//!
//! * [`layout`]: column-major (solver) to row-major (Rust) array conversion.
//! * [`ntens`]: stress-type vectors, full tensors and Voigt matrices in the
//!   component order of either solver.
//! * [`umat`]: a safe material-point interface built on the two.
//!
//! [`layout`]: layout/index.html
//! [`ntens`]: ntens/index.html
//! [`umat`]: umat/index.html

pub use ::abaqus_layout as layout;
pub use ::abaqus_ntens as ntens;
pub use ::abaqus_umat as umat;
