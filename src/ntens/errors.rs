/* ************************************************************************ **
** This file is part of abaqus-tools, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::Solver;

pub type Result<T> = ::std::result::Result<T, NtensError>;

/// Error type for every operation in this crate.
#[derive(Debug, Fail)]
#[fail(display = "{}", kind)]
pub struct NtensError {
    backtrace: ::failure::Backtrace,
    kind: ErrorKind,
}

impl NtensError {
    pub fn kind(&self) -> &ErrorKind
    { &self.kind }
}

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum ErrorKind {
    #[fail(display = "bad component counts NDI={}, NSHR={} (each may be at most 3)", ndi, nshr)]
    BadShape { ndi: usize, nshr: usize },

    #[fail(display = "{} has length {}, expected {}", what, actual, expected)]
    WrongLength { what: &'static str, expected: usize, actual: usize },

    #[fail(display = "{} has {} rows, expected {}", what, actual, expected)]
    WrongRowCount { what: &'static str, expected: usize, actual: usize },

    #[fail(display = "row {} of {} has length {}, expected {}", row, what, actual, expected)]
    WrongRowLength { what: &'static str, row: usize, expected: usize, actual: usize },

    #[fail(display = "tensor is not symmetric: element ({}, {}) is {} but ({}, {}) is {}", row, col, upper, col, row, lower)]
    Asymmetric { row: usize, col: usize, upper: f64, lower: f64 },

    #[fail(display = "symmetry tolerance must be a non-negative number (got {})", tol)]
    BadTolerance { tol: f64 },

    #[fail(display = "no Voigt matrix ordering is defined for {}", solver)]
    NoMatrixConvention { solver: Solver },
}

impl From<ErrorKind> for NtensError {
    fn from(kind: ErrorKind) -> Self {
        let backtrace = ::failure::Backtrace::new();
        NtensError { backtrace, kind }
    }
}

pub(crate) fn check_len<T>(what: &'static str, data: &[T], expected: usize) -> Result<()> {
    if data.len() != expected {
        throw!(ErrorKind::WrongLength { what, expected, actual: data.len() });
    }
    Ok(())
}

pub(crate) fn check_square<T, V: AsRef<[T]>>(what: &'static str, rows: &[V], dim: usize) -> Result<()> {
    if rows.len() != dim {
        throw!(ErrorKind::WrongRowCount { what, expected: dim, actual: rows.len() });
    }
    for (row, data) in rows.iter().enumerate() {
        let actual = data.as_ref().len();
        if actual != dim {
            throw!(ErrorKind::WrongRowLength { what, row, expected: dim, actual });
        }
    }
    Ok(())
}
