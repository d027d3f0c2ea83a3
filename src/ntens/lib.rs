/* ************************************************************************ **
** This file is part of abaqus-tools, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Conversions between the stress-type component vectors used by Abaqus
//! material subroutines and full tensors.
//!
//! Three representations are involved:
//!
//! * the **reduced** vector of length `NTENS = NDI + NSHR` that the solver
//!   actually passes, which omits components that are zero by definition;
//! * the **full** vector of length 6: three direct components, then three
//!   shear components in the solver's order;
//! * the **full tensor**, a symmetric 3x3 matrix stored row-major.
//!
//! Conversions between the reduced and full vectors ([`expand_vector`],
//! [`contract_vector`]) are the same for both solvers. Conversions to and from
//! the full tensor depend on the [`Solver`], because Abaqus/Standard and
//! Abaqus/Explicit disagree on the order of the 13 and 23 shear components.
//!
//! Every function validates its input shapes and returns an [`NtensError`]
//! rather than reading out of bounds.
//!
//! [`expand_vector`]: fn.expand_vector.html
//! [`contract_vector`]: fn.contract_vector.html
//! [`Solver`]: enum.Solver.html
//! [`NtensError`]: struct.NtensError.html

#[macro_use] extern crate failure;
#[macro_use] extern crate log;
#[macro_use] extern crate itertools;

// FIXME copied from failure 1.0 prerelease; remove once actually released
macro_rules! throw {
    ($e:expr) => {
        return Err(::std::convert::Into::into($e))
    }
}

pub use crate::errors::{NtensError, ErrorKind, Result};
mod errors;

pub use crate::shape::{Ntens, MAX_DIRECT, MAX_SHEAR, FULL_VECTOR_LEN, FULL_TENSOR_LEN};
mod shape;

pub use crate::order::Solver;
pub use crate::order::{STANDARD_TENSOR_ORDER, EXPLICIT_TENSOR_ORDER};
pub use crate::order::{STANDARD_VOIGT_ORDER, EXPLICIT_VOIGT_ORDER};
mod order;

pub use crate::vector::{expand_vector, contract_vector};
mod vector;

pub use crate::matrix::{contract_matrix, contract_full_matrix, contract_full_matrix_to_reduced};
mod matrix;

pub use crate::tensor::{construct_tensor, construct_tensor_from_reduced};
pub use crate::tensor::{destruct_tensor, destruct_tensor_to_reduced};
pub use crate::tensor::check_symmetric;
mod tensor;
