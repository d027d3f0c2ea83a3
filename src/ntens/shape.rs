/* ************************************************************************ **
** This file is part of abaqus-tools, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Result, ErrorKind};

use ::std::fmt;
use ::std::ops::Range;

/// Maximum number of direct (normal) components.
pub const MAX_DIRECT: usize = 3;
/// Maximum number of shear components.
pub const MAX_SHEAR: usize = 3;

/// Length of a full stress-type vector.
pub const FULL_VECTOR_LEN: usize = MAX_DIRECT + MAX_SHEAR;
/// Length of a full 3x3 tensor stored as a row-major vector.
pub const FULL_TENSOR_LEN: usize = 9;

/// Which components of a stress-type quantity are actually stored by the solver.
///
/// The solver omits components that are zero by definition (e.g. for plane
/// stress), keeping the first `ndi` direct components and the first `nshr`
/// shear components. A vector with this shape has `ndi + nshr` elements,
/// which the solver calls `NTENS`.
///
/// Both counts are at most 3; this is checked on construction, so every
/// `Ntens` in existence is valid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ntens {
    ndi: usize,
    nshr: usize,
}

impl Ntens {
    /// All six components (3D continuum elements).
    pub const FULL: Ntens = Ntens { ndi: 3, nshr: 3 };
    /// Plane stress, shells and membranes.
    pub const PLANE_STRESS: Ntens = Ntens { ndi: 2, nshr: 1 };
    /// Plane strain and axisymmetric elements.
    pub const PLANE_STRAIN: Ntens = Ntens { ndi: 3, nshr: 1 };

    pub fn new(ndi: usize, nshr: usize) -> Result<Ntens> {
        if ndi > MAX_DIRECT || nshr > MAX_SHEAR {
            throw!(ErrorKind::BadShape { ndi, nshr });
        }
        Ok(Ntens { ndi, nshr })
    }

    /// Every valid shape, from `(0, 0)` up to `(3, 3)`.
    pub fn all() -> impl Iterator<Item=Ntens> {
        iproduct!(0..=MAX_DIRECT, 0..=MAX_SHEAR).map(|(ndi, nshr)| Ntens { ndi, nshr })
    }

    pub fn ndi(self) -> usize { self.ndi }
    pub fn nshr(self) -> usize { self.nshr }

    /// `NTENS`, the length of a reduced vector.
    pub fn len(self) -> usize { self.ndi + self.nshr }

    /// True for `NDI = NSHR = 0`, where every vector is empty.
    pub fn is_empty(self) -> bool { self.len() == 0 }

    pub fn is_full(self) -> bool { self == Ntens::FULL }

    /// For each element of a reduced vector, its index in the full vector.
    pub fn full_indices(self) -> Vec<usize> {
        self.direct_range().chain(self.shear_range()).collect()
    }

    /// Indices of the full vector that a reduced vector does not store.
    pub fn omitted_indices(self) -> Vec<usize> {
        (self.ndi..MAX_DIRECT).chain(MAX_DIRECT + self.nshr..FULL_VECTOR_LEN).collect()
    }

    fn direct_range(self) -> Range<usize>
    { 0..self.ndi }

    fn shear_range(self) -> Range<usize>
    { MAX_DIRECT..MAX_DIRECT + self.nshr }
}

impl fmt::Display for Ntens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NDI={}, NSHR={}", self.ndi, self.nshr)
    }
}
