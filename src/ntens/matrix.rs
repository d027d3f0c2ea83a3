/* ************************************************************************ **
** This file is part of abaqus-tools, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Voigt matrices, such as the Jacobian `DDSDDE`.
//!
//! A 6x6 Abaqus/Standard Voigt matrix is ordered
//!
//! ```text
//!     ( D1111, D1122, D1133, D1112, D1113, D1123 )
//!     ( D2211, D2222, D2233, D2212, D2213, D2223 )
//!     ( D3311, D3322, D3333, D3312, D3313, D3323 )
//!     ( D1211, D1222, D1233, D1212, D1213, D1223 )
//!     ( D1311, D1322, D1333, D1312, D1313, D1323 )
//!     ( D2311, D2322, D2333, D2312, D2313, D2323 )
//! ```
//!
//! while the full 9x9 matrix has row `3*i + j` and column `3*k + l` for
//! `Dijkl` (all indices zero-based here).
//!
//! Matrices only ever get smaller here. Nothing reconstructs a 9x9 matrix.

use crate::Result;
use crate::errors::check_square;
use crate::order::gather_2d;
use crate::shape::{Ntens, FULL_VECTOR_LEN};
use crate::Solver;

const FULL_MATRIX_DIM: usize = 9;

/// Contract a 6x6 Voigt matrix to `NTENS x NTENS`.
///
/// The same index map as [`contract_vector`] is applied to the rows and
/// to the columns.
///
/// [`contract_vector`]: fn.contract_vector.html
pub fn contract_matrix<T: Clone, V: AsRef<[T]>>(full: &[V], ntens: Ntens) -> Result<Vec<Vec<T>>> {
    check_square::<T, V>("full Voigt matrix", full, FULL_VECTOR_LEN)?;

    let indices = ntens.full_indices();
    Ok(gather_2d(full, &indices, &indices))
}

/// Repack a full 9x9 matrix into a 6x6 Abaqus/Standard Voigt matrix.
///
/// Only the upper-triangle components of each index pair are read.
pub fn contract_full_matrix<T: Clone, V: AsRef<[T]>>(full: &[V]) -> Result<Vec<Vec<T>>> {
    check_square::<T, V>("full 9x9 matrix", full, FULL_MATRIX_DIM)?;

    let order = Solver::Standard.matrix_order()?;
    Ok(gather_2d(full, order, order))
}

/// Repack a full 9x9 matrix into an `NTENS x NTENS` Abaqus/Standard Voigt matrix.
pub fn contract_full_matrix_to_reduced<T: Clone, V: AsRef<[T]>>(full: &[V], ntens: Ntens) -> Result<Vec<Vec<T>>> {
    let voigt = contract_full_matrix::<T, V>(full)?;
    contract_matrix(&voigt, ntens)
}
