/* ************************************************************************ **
** This file is part of abaqus-tools, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Component orderings of the two solvers, as gather tables.
//!
//! Abaqus/Standard (UMAT) stores stress-type vectors as
//!
//! ```text
//!     index     0    1    2    3    4    5
//!             { 11,  22,  33,  12,  13,  23 }
//! ```
//!
//! while Abaqus/Explicit (VUMAT) swaps the last two shear components:
//!
//! ```text
//!     index     0    1    2    3    4    5
//!             { 11,  22,  33,  12,  23,  13 }
//! ```
//!
//! Shear strains are engineering shear strains (`gamma_ij = eps_ij + eps_ji`)
//! in both. This crate moves values around and never rescales them.
//!
//! A full 3x3 tensor is stored as a row-major vector of length 9:
//!
//! ```text
//!     index     0    1    2    3    4    5    6    7    8
//!             { 11,  12,  13,  21,  22,  23,  31,  32,  33 }
//! ```

use crate::{Result, ErrorKind};
use crate::shape::{FULL_VECTOR_LEN, FULL_TENSOR_LEN};

use ::std::fmt;

/// For each element of a row-major full tensor, the index of the Abaqus/Standard
/// vector element that supplies it.
pub const STANDARD_TENSOR_ORDER: [usize; FULL_TENSOR_LEN] = [
    0, 3, 4,
    3, 1, 5,
    4, 5, 2,
];

/// For each element of a row-major full tensor, the index of the Abaqus/Explicit
/// vector element that supplies it.
pub const EXPLICIT_TENSOR_ORDER: [usize; FULL_TENSOR_LEN] = [
    0, 3, 5,
    3, 1, 4,
    5, 4, 2,
];

/// For each element of an Abaqus/Standard vector, the row-major full tensor
/// index that it is read from. (upper triangle)
pub const STANDARD_VOIGT_ORDER: [usize; FULL_VECTOR_LEN] = [0, 4, 8, 1, 2, 5];

/// For each element of an Abaqus/Explicit vector, the row-major full tensor
/// index that it is read from. (upper triangle)
pub const EXPLICIT_VOIGT_ORDER: [usize; FULL_VECTOR_LEN] = [0, 4, 8, 1, 5, 2];

/// The solver whose component ordering a vector uses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Solver {
    /// Abaqus/Standard; shear order `(12, 13, 23)`.
    Standard,
    /// Abaqus/Explicit; shear order `(12, 23, 13)`.
    Explicit,
}

impl Default for Solver {
    fn default() -> Self { Solver::Standard }
}

impl Solver {
    /// Convert from the `abaqus_standard` flag used by C++ material code.
    pub fn from_is_standard(abaqus_standard: bool) -> Solver {
        match abaqus_standard {
            true => Solver::Standard,
            false => Solver::Explicit,
        }
    }

    pub fn is_standard(self) -> bool
    { self == Solver::Standard }

    /// Gather table from a full vector to a row-major full tensor.
    pub fn tensor_order(self) -> &'static [usize; FULL_TENSOR_LEN] {
        match self {
            Solver::Standard => &STANDARD_TENSOR_ORDER,
            Solver::Explicit => &EXPLICIT_TENSOR_ORDER,
        }
    }

    /// Gather table from a row-major full tensor to a full vector.
    pub fn voigt_order(self) -> &'static [usize; FULL_VECTOR_LEN] {
        match self {
            Solver::Standard => &STANDARD_VOIGT_ORDER,
            Solver::Explicit => &EXPLICIT_VOIGT_ORDER,
        }
    }

    /// Gather table applied to both axes of a 9x9 matrix to produce a 6x6
    /// Voigt matrix (e.g. the Jacobian `DDSDDE`).
    ///
    /// Only Abaqus/Standard has such a matrix convention. Abaqus/Explicit
    /// never asks a material for a Jacobian, and we refuse to guess one.
    pub fn matrix_order(self) -> Result<&'static [usize; FULL_VECTOR_LEN]> {
        match self {
            Solver::Standard => Ok(&STANDARD_VOIGT_ORDER),
            Solver::Explicit => throw!(ErrorKind::NoMatrixConvention { solver: self }),
        }
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solver::Standard => write!(f, "Abaqus/Standard"),
            Solver::Explicit => write!(f, "Abaqus/Explicit"),
        }
    }
}

/// `out[k] = src[table[k]]`.
///
/// Callers are responsible for checking `src.len()` against the table.
pub(crate) fn gather<T: Clone>(src: &[T], table: &[usize]) -> Vec<T> {
    table.iter().map(|&i| src[i].clone()).collect()
}

/// `out[r][c] = src[rows[r]][cols[c]]`.
pub(crate) fn gather_2d<T: Clone, V: AsRef<[T]>>(src: &[V], rows: &[usize], cols: &[usize]) -> Vec<Vec<T>> {
    rows.iter().map(|&r| gather(src[r].as_ref(), cols)).collect()
}
