/* ************************************************************************ **
** This file is part of abaqus-tools, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Result, ErrorKind};
use crate::errors::check_len;
use crate::order::{gather, Solver};
use crate::shape::{Ntens, FULL_VECTOR_LEN, FULL_TENSOR_LEN};
use crate::vector::{expand_vector, contract_vector};

use ::num_traits::Zero;

/// Build the full 3x3 tensor (as a row-major vector of length 9) from a full
/// stress-type vector of length 6 in the given solver's ordering.
///
/// The result is symmetric by construction.
pub fn construct_tensor<T: Clone>(full: &[T], solver: Solver) -> Result<Vec<T>> {
    check_len("full vector", full, FULL_VECTOR_LEN)?;
    Ok(gather(full, solver.tensor_order()))
}

/// Build the full 3x3 tensor from a stress-type vector of length `NTENS`.
pub fn construct_tensor_from_reduced<T: Clone + Zero>(reduced: &[T], ntens: Ntens, solver: Solver) -> Result<Vec<T>> {
    let full = expand_vector(reduced, ntens)?;
    construct_tensor(&full, solver)
}

/// Read a full stress-type vector of length 6 out of a row-major 3x3 tensor.
///
/// Only the upper triangle is read. If the tensor is not symmetric, the
/// lower triangle is silently discarded; see [`check_symmetric`] for
/// callers who would rather know.
///
/// [`check_symmetric`]: fn.check_symmetric.html
pub fn destruct_tensor<T: Clone>(tensor: &[T], solver: Solver) -> Result<Vec<T>> {
    check_len("full tensor", tensor, FULL_TENSOR_LEN)?;
    Ok(gather(tensor, solver.voigt_order()))
}

/// Read a stress-type vector of length `NTENS` out of a row-major 3x3 tensor.
pub fn destruct_tensor_to_reduced<T: Clone + Zero>(tensor: &[T], ntens: Ntens, solver: Solver) -> Result<Vec<T>> {
    let full = destruct_tensor(tensor, solver)?;
    contract_vector(&full, ntens)
}

/// Verify that a row-major 3x3 tensor is symmetric.
///
/// Off-diagonal pairs must agree to within `tol`, relative to the larger of
/// the two magnitudes (and absolute for magnitudes below 1). Exactly equal
/// pairs always pass, infinities included; an infinity paired with anything
/// else fails. NaN is never symmetric.
///
/// `tol` must be non-negative; anything else is a `BadTolerance` error.
pub fn check_symmetric(tensor: &[f64], tol: f64) -> Result<()> {
    check_len("full tensor", tensor, FULL_TENSOR_LEN)?;
    if !(tol >= 0.0) {
        throw!(ErrorKind::BadTolerance { tol });
    }

    for &(row, col) in &[(0, 1), (0, 2), (1, 2)] {
        let upper = tensor[3 * row + col];
        let lower = tensor[3 * col + row];
        if upper == lower {
            continue;
        }
        // unequal pairs with an infinity or NaN would otherwise get an infinite scale
        let finite = upper.is_finite() && lower.is_finite();
        let scale = upper.abs().max(lower.abs()).max(1.0);
        if !(finite && (upper - lower).abs() <= tol * scale) {
            throw!(ErrorKind::Asymmetric { row, col, upper, lower });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::pretty_assertions::assert_eq;

    const STANDARD: [i32; 6] = [11, 22, 33, 12, 13, 23];
    const EXPLICIT: [i32; 6] = [11, 22, 33, 12, 23, 13];
    const TENSOR: [i32; 9] = [
        11, 12, 13,
        12, 22, 23,
        13, 23, 33,
    ];

    #[test]
    fn construct() {
        assert_eq!(construct_tensor(&STANDARD, Solver::Standard).unwrap(), TENSOR.to_vec());
        assert_eq!(construct_tensor(&EXPLICIT, Solver::Explicit).unwrap(), TENSOR.to_vec());

        // the same data read with the other convention mixes up 13 and 23
        assert_eq!(
            construct_tensor(&STANDARD, Solver::Explicit).unwrap(),
            vec![
                11, 12, 23,
                12, 22, 13,
                23, 13, 33,
            ]
        );
    }

    #[test]
    fn construct_from_reduced() {
        assert_eq!(construct_tensor_from_reduced(&STANDARD, Ntens::FULL, Solver::Standard).unwrap(), TENSOR.to_vec());
        assert_eq!(construct_tensor_from_reduced(&EXPLICIT, Ntens::FULL, Solver::Explicit).unwrap(), TENSOR.to_vec());

        assert_eq!(
            construct_tensor_from_reduced(&[11.0, 22.0, 12.0], Ntens::PLANE_STRESS, Solver::Standard).unwrap(),
            vec![
                11.0, 12.0, 0.0,
                12.0, 22.0, 0.0,
                 0.0,  0.0, 0.0,
            ]
        );
        assert_eq!(
            construct_tensor_from_reduced(&[11.0, 22.0, 33.0, 12.0], Ntens::PLANE_STRAIN, Solver::Explicit).unwrap(),
            vec![
                11.0, 12.0,  0.0,
                12.0, 22.0,  0.0,
                 0.0,  0.0, 33.0,
            ]
        );
    }

    #[test]
    fn destruct() {
        assert_eq!(destruct_tensor(&TENSOR, Solver::Standard).unwrap(), STANDARD.to_vec());
        assert_eq!(destruct_tensor(&TENSOR, Solver::Explicit).unwrap(), EXPLICIT.to_vec());

        assert_eq!(destruct_tensor_to_reduced(&TENSOR, Ntens::FULL, Solver::Standard).unwrap(), STANDARD.to_vec());
        assert_eq!(destruct_tensor_to_reduced(&TENSOR, Ntens::FULL, Solver::Explicit).unwrap(), EXPLICIT.to_vec());
        assert_eq!(destruct_tensor_to_reduced(&TENSOR, Ntens::PLANE_STRESS, Solver::Standard).unwrap(), vec![11, 22, 12]);
        assert_eq!(destruct_tensor_to_reduced(&TENSOR, Ntens::new(3, 2).unwrap(), Solver::Standard).unwrap(), vec![11, 22, 33, 12, 13]);
        assert_eq!(destruct_tensor_to_reduced(&TENSOR, Ntens::new(3, 2).unwrap(), Solver::Explicit).unwrap(), vec![11, 22, 33, 12, 23]);
    }

    #[test]
    fn destruct_reads_upper_triangle() {
        // every element encodes its own position
        let asymmetric: Vec<i32> = (0..9).collect();
        assert_eq!(destruct_tensor(&asymmetric, Solver::Standard).unwrap(), vec![0, 4, 8, 1, 2, 5]);
        assert_eq!(destruct_tensor(&asymmetric, Solver::Explicit).unwrap(), vec![0, 4, 8, 1, 5, 2]);

        // ...which means that the round trip symmetrizes from the upper triangle
        let full = destruct_tensor(&asymmetric, Solver::Standard).unwrap();
        assert_eq!(
            construct_tensor(&full, Solver::Standard).unwrap(),
            vec![
                0, 1, 2,
                1, 4, 5,
                2, 5, 8,
            ]
        );
    }

    #[test]
    fn solvers_differ_only_in_two_shear_slots() {
        // a full vector whose elements encode their own position
        let full: Vec<i32> = (0..6).collect();
        let standard = construct_tensor(&full, Solver::Standard).unwrap();
        let explicit = construct_tensor(&full, Solver::Explicit).unwrap();

        for &k in &[0, 1, 3, 4, 8] {
            assert_eq!(standard[k], explicit[k], "{}", k);
        }
        for &(a, b) in &[(2, 5), (6, 7), (5, 2), (7, 6)] {
            assert_ne!(standard[a], explicit[a]);
            assert_eq!(standard[a], explicit[b]);
        }
    }

    #[test]
    fn random_round_trips() {
        use ::rand::Rng;

        let mut rng = ::rand::thread_rng();
        for _ in 0..100 {
            for &solver in &[Solver::Standard, Solver::Explicit] {
                let full: Vec<f64> = (0..6).map(|_| rng.gen::<f64>() - 0.5).collect();
                let tensor = construct_tensor(&full, solver).unwrap();
                check_symmetric(&tensor, 0.0).unwrap();
                assert_eq!(destruct_tensor(&tensor, solver).unwrap(), full);
                assert_eq!(construct_tensor(&destruct_tensor(&tensor, solver).unwrap(), solver).unwrap(), tensor);

                for ntens in Ntens::all() {
                    let reduced: Vec<f64> = (0..ntens.len()).map(|_| rng.gen::<f64>()).collect();
                    let tensor = construct_tensor_from_reduced(&reduced, ntens, solver).unwrap();
                    assert_eq!(destruct_tensor_to_reduced(&tensor, ntens, solver).unwrap(), reduced);
                }
            }
        }
    }

    #[test]
    fn symmetry() {
        let tensor = [
            1.0, 2.0, 3.0,
            2.0, 4.0, 5.0,
            3.0, 5.0, 6.0,
        ];
        check_symmetric(&tensor, 0.0).unwrap();

        let mut nearly = tensor;
        nearly[7] += 1e-12;
        check_symmetric(&nearly, 1e-10).unwrap();
        let err = check_symmetric(&nearly, 1e-14).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Asymmetric { row: 1, col: 2, upper: 5.0, lower: 5.0 + 1e-12 });

        // relative for large values
        let mut big = tensor;
        big[1] = 1e10;
        big[3] = 1e10 + 1.0;
        check_symmetric(&big, 1e-9).unwrap();

        let mut nan = tensor;
        nan[6] = ::std::f64::NAN;
        let err = check_symmetric(&nan, 1.0).unwrap_err();
        match err.kind() {
            &ErrorKind::Asymmetric { row: 0, col: 2, .. } => {},
            kind => panic!("{:?}", kind),
        }
    }

    #[test]
    fn symmetry_with_infinities() {
        let inf = ::std::f64::INFINITY;
        let tensor = [
            1.0, inf, 0.0,
            inf, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ];
        check_symmetric(&tensor, 1e-8).unwrap();
        check_symmetric(&tensor, 0.0).unwrap();

        let mut mixed = tensor;
        mixed[3] = -inf;
        match check_symmetric(&mixed, 1e-8).unwrap_err().kind() {
            &ErrorKind::Asymmetric { row: 0, col: 1, .. } => {},
            kind => panic!("{:?}", kind),
        }

        let mut finite = tensor;
        finite[3] = 1e300;
        assert!(check_symmetric(&finite, 1e-8).is_err());
    }

    #[test]
    fn bad_tolerance() {
        let tensor = [
            1.0, 2.0, 0.0,
            2.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ];
        let err = check_symmetric(&tensor, -1.0).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::BadTolerance { tol: -1.0 });
        assert_eq!(err.to_string(), "symmetry tolerance must be a non-negative number (got -1)");

        match check_symmetric(&tensor, ::std::f64::NAN).unwrap_err().kind() {
            &ErrorKind::BadTolerance { tol } => assert!(tol.is_nan()),
            kind => panic!("{:?}", kind),
        }

        // the tolerance is judged even when the tensor would pass
        let zeros = [0.0; 9];
        assert!(check_symmetric(&zeros, -0.5).is_err());
    }

    #[test]
    fn wrong_lengths() {
        let err = construct_tensor(&[1, 2, 3], Solver::Standard).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::WrongLength { what: "full vector", expected: 6, actual: 3 });

        let err = construct_tensor_from_reduced(&[1, 2, 3], Ntens::FULL, Solver::Standard).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::WrongLength { what: "reduced vector", expected: 6, actual: 3 });

        let err = destruct_tensor(&STANDARD, Solver::Explicit).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::WrongLength { what: "full tensor", expected: 9, actual: 6 });

        let err = check_symmetric(&[0.0; 8], 0.0).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::WrongLength { what: "full tensor", expected: 9, actual: 8 });
    }
}
