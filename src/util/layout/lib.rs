/* ************************************************************************ **
** This file is part of abaqus-tools, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! # A note on conventions
//!
//! Arrays handed over by the solver are Fortran arrays, stored **column-major**:
//! the slower (outer) index is ascribed to columns, so element `(row, col)` of a
//! `height x width` array lives at `col * height + row`.
//!
//! Everything on the Rust side is stored **row-major**: the slower index is
//! ascribed to rows, and element `(row, col)` lives at `row * width + col`.
//! This way the textual rows in literal and debug-formatted matrices always
//! correspond to the rows of the mathematical object.
//!
//! Vectors (`height == 1`) look the same in both layouts, but they still go
//! through these functions so that their lengths get checked.

#[macro_use]
extern crate failure;

use ::std::mem;

/// A buffer or nested array did not have the shape it was declared to have.
///
/// Every function in this crate checks shapes before touching its output,
/// so on error the output buffer is left exactly as it was.
#[derive(Debug, Fail, PartialEq, Eq)]
pub enum LayoutError {
    #[fail(display = "column major buffer has length {}, but a {}x{} array has {} elements", actual, height, width, expected)]
    ColumnMajorLength { height: usize, width: usize, expected: usize, actual: usize },

    #[fail(display = "row major data has length {}, but a {}x{} array has {} elements", actual, height, width, expected)]
    RowMajorLength { height: usize, width: usize, expected: usize, actual: usize },

    #[fail(display = "row major data has {} rows, expected {}", actual, expected)]
    RowCount { expected: usize, actual: usize },

    #[fail(display = "row {} of row major data has {} columns, expected {}", row, actual, expected)]
    RowWidth { row: usize, expected: usize, actual: usize },

    #[fail(display = "a {}x{} array is too large to represent", height, width)]
    TooLarge { height: usize, width: usize },
}

pub type Result<T> = ::std::result::Result<T, LayoutError>;

// The shape of a 2D array, independent of its storage order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Dims {
    height: usize,
    width: usize,
}

impl Dims {
    // Each dimension counts as at least 1, because a nested array with zero
    // width still holds one (empty) row per unit of height.
    fn new(height: usize, width: usize) -> Result<Dims> {
        let max_extent = isize::max_value() as usize / mem::size_of::<Vec<u8>>();
        match height.max(1).checked_mul(width.max(1)) {
            Some(extent) if extent <= max_extent => Ok(Dims { height, width }),
            _ => Err(LayoutError::TooLarge { height, width }),
        }
    }

    fn size(self) -> usize
    { self.height * self.width }

    #[inline(always)]
    fn col_major_index(self, (row, col): (usize, usize)) -> usize
    { col * self.height + row }

    #[inline(always)]
    fn row_major_index(self, (row, col): (usize, usize)) -> usize
    { row * self.width + col }

    /// All `(row, col)` pairs, in row-major order.
    fn indices(self) -> impl Iterator<Item=(usize, usize)> {
        // (empty range when width is zero, so no division by zero)
        let width = self.width;
        (0..self.size()).map(move |k| (k / width, k % width))
    }

    fn check_column_major<T>(self, buffer: &[T]) -> Result<()> {
        let Dims { height, width } = self;
        if buffer.len() != self.size() {
            return Err(LayoutError::ColumnMajorLength {
                height, width,
                expected: self.size(),
                actual: buffer.len(),
            });
        }
        Ok(())
    }

    fn check_row_major_flat<T>(self, data: &[T]) -> Result<()> {
        let Dims { height, width } = self;
        if data.len() != self.size() {
            return Err(LayoutError::RowMajorLength {
                height, width,
                expected: self.size(),
                actual: data.len(),
            });
        }
        Ok(())
    }

    fn check_row_major_nested<T, V: AsRef<[T]>>(self, rows: &[V]) -> Result<()> {
        if rows.len() != self.height {
            return Err(LayoutError::RowCount { expected: self.height, actual: rows.len() });
        }
        for (row, data) in rows.iter().enumerate() {
            let actual = data.as_ref().len();
            if actual != self.width {
                return Err(LayoutError::RowWidth { row, expected: self.width, actual });
            }
        }
        Ok(())
    }
}

/// Read a column-major `height x width` array into a row-major vector of rows.
///
/// `column_major.len()` must be exactly `height * width`.
pub fn column_to_row_major<T: Clone>(
    column_major: &[T],
    height: usize,
    width: usize,
) -> Result<Vec<Vec<T>>>
{
    let dims = Dims::new(height, width)?;
    dims.check_column_major(column_major)?;

    Ok({
        (0..height).map(|row| {
            (0..width)
                .map(|col| column_major[dims.col_major_index((row, col))].clone())
                .collect()
        }).collect()
    })
}

/// Read a column-major `height x width` array into a flat row-major vector.
pub fn column_to_row_major_flat<T: Clone>(
    column_major: &[T],
    height: usize,
    width: usize,
) -> Result<Vec<T>>
{
    let dims = Dims::new(height, width)?;
    dims.check_column_major(column_major)?;

    Ok(dims.indices().map(|rc| column_major[dims.col_major_index(rc)].clone()).collect())
}

/// Write row-major rows into a caller-owned column-major buffer.
///
/// `rows` may be anything row-like, e.g. `&[Vec<f64>]` or `&[[f64; 3]]`.
/// There must be exactly `height` rows of exactly `width` elements, and
/// `column_major.len()` must be `height * width`.
pub fn row_to_column_major<T: Clone, V: AsRef<[T]>>(
    column_major: &mut [T],
    rows: &[V],
    height: usize,
    width: usize,
) -> Result<()>
{
    let dims = Dims::new(height, width)?;
    dims.check_row_major_nested::<T, V>(rows)?;
    dims.check_column_major(column_major)?;

    for (row, data) in rows.iter().enumerate() {
        for (col, x) in data.as_ref().iter().enumerate() {
            column_major[dims.col_major_index((row, col))] = x.clone();
        }
    }
    Ok(())
}

/// Write a flat row-major array into a caller-owned column-major buffer.
///
/// Both `row_major.len()` and `column_major.len()` must be `height * width`.
pub fn row_to_column_major_flat<T: Clone>(
    column_major: &mut [T],
    row_major: &[T],
    height: usize,
    width: usize,
) -> Result<()>
{
    let dims = Dims::new(height, width)?;
    dims.check_row_major_flat(row_major)?;
    dims.check_column_major(column_major)?;

    for rc in dims.indices() {
        column_major[dims.col_major_index(rc)] = row_major[dims.row_major_index(rc)].clone();
    }
    Ok(())
}
