/* ************************************************************************ **
** This file is part of abaqus-tools, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::Result;
use crate::errors::check_len;
use crate::order::gather;
use crate::shape::{Ntens, FULL_VECTOR_LEN};

use ::num_traits::Zero;

/// Expand a stress-type vector of length `NTENS` to the full vector of length 6.
///
/// Direct components land at the front and shear components at index 3
/// onwards. Components the solver omitted are zero.
///
/// ```text
///     ntens = Ntens::PLANE_STRESS
///     [s11, s22, s12]  ->  [s11, s22, 0, s12, 0, 0]
/// ```
///
/// This does not care about which solver ordering is used for the shear
/// components; whatever order they come in is the order they leave in.
pub fn expand_vector<T: Clone + Zero>(reduced: &[T], ntens: Ntens) -> Result<Vec<T>> {
    check_len("reduced vector", reduced, ntens.len())?;

    let mut full = vec![T::zero(); FULL_VECTOR_LEN];
    for (x, i) in reduced.iter().zip(ntens.full_indices()) {
        full[i] = x.clone();
    }
    Ok(full)
}

/// Contract a full vector of length 6 down to `NTENS` components.
///
/// Inverse of [`expand_vector`]. Components omitted by `ntens` are expected
/// to be zero; they are dropped regardless, with a warning if they weren't.
///
/// [`expand_vector`]: fn.expand_vector.html
pub fn contract_vector<T: Clone + Zero>(full: &[T], ntens: Ntens) -> Result<Vec<T>> {
    check_len("full vector", full, FULL_VECTOR_LEN)?;

    for i in ntens.omitted_indices() {
        if !full[i].is_zero() {
            warn!("contracting to {} discards nonzero element {} of a full vector", ntens, i);
        }
    }
    Ok(gather(full, &ntens.full_indices()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use ::pretty_assertions::assert_eq;

    #[test]
    fn expand() {
        let full = expand_vector(&[11.0, 22.0, 33.0, 12.0, 13.0, 23.0], Ntens::FULL).unwrap();
        assert_eq!(full, vec![11.0, 22.0, 33.0, 12.0, 13.0, 23.0]);

        let plane_stress = expand_vector(&[11.0, 22.0, 12.0], Ntens::PLANE_STRESS).unwrap();
        assert_eq!(plane_stress, vec![11.0, 22.0, 0.0, 12.0, 0.0, 0.0]);

        let plane_strain = expand_vector(&[11, 22, 33, 12], Ntens::PLANE_STRAIN).unwrap();
        assert_eq!(plane_strain, vec![11, 22, 33, 12, 0, 0]);

        // degenerate, but valid
        let shear_only = expand_vector(&[12, 13], Ntens::new(0, 2).unwrap()).unwrap();
        assert_eq!(shear_only, vec![0, 0, 0, 12, 13, 0]);
    }

    #[test]
    fn contract() {
        let full = contract_vector(&[11.0, 22.0, 33.0, 12.0, 13.0, 23.0], Ntens::FULL).unwrap();
        assert_eq!(full, vec![11.0, 22.0, 33.0, 12.0, 13.0, 23.0]);

        let plane_stress = contract_vector(&[11.0, 22.0, 0.0, 12.0, 0.0, 0.0], Ntens::PLANE_STRESS).unwrap();
        assert_eq!(plane_stress, vec![11.0, 22.0, 12.0]);

        let empty = contract_vector(&[1, 2, 3, 4, 5, 6], Ntens::new(0, 0).unwrap()).unwrap();
        assert_eq!(empty, Vec::<i32>::new());
    }

    #[test]
    fn contract_is_lossy() {
        let _ = ::env_logger::try_init();

        // nonzero out-of-plane components are silently(-ish) lost
        let full = [11, 22, 33, 12, 13, 23];
        let reduced = contract_vector(&full, Ntens::PLANE_STRESS).unwrap();
        assert_eq!(reduced, vec![11, 22, 12]);
        assert_eq!(expand_vector(&reduced, Ntens::PLANE_STRESS).unwrap(), vec![11, 22, 0, 12, 0, 0]);
    }

    #[test]
    fn round_trip_every_shape() {
        for ntens in Ntens::all() {
            let reduced: Vec<i32> = (1..).take(ntens.len()).collect();
            let full = expand_vector(&reduced, ntens).unwrap();
            assert_eq!(contract_vector(&full, ntens).unwrap(), reduced, "{}", ntens);

            // and the other way, when the omitted components are zero
            assert_eq!(expand_vector(&contract_vector(&full, ntens).unwrap(), ntens).unwrap(), full);
        }
    }

    #[test]
    fn wrong_lengths() {
        let err = expand_vector(&[1.0, 2.0], Ntens::PLANE_STRESS).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::WrongLength { what: "reduced vector", expected: 3, actual: 2 });

        let err = expand_vector(&[1.0; 7], Ntens::FULL).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::WrongLength { what: "reduced vector", expected: 6, actual: 7 });

        let err = contract_vector(&[1.0; 3], Ntens::PLANE_STRESS).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::WrongLength { what: "full vector", expected: 6, actual: 3 });
        assert_eq!(err.to_string(), "full vector has length 3, expected 6");
    }
}
