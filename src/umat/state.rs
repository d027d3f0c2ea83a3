/* ************************************************************************ **
** This file is part of abaqus-tools, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::config::Settings;

use ::abaqus_layout::{column_to_row_major, column_to_row_major_flat};
use ::abaqus_layout::{row_to_column_major, row_to_column_major_flat};
use ::abaqus_ntens::{Ntens, Solver};
use ::abaqus_ntens::{construct_tensor_from_reduced, destruct_tensor_to_reduced};
use ::abaqus_ntens::{check_symmetric, contract_full_matrix_to_reduced};
use ::failure::ResultExt;

/// Spatial dimension of `COORDS`, `DROT`, `DFGRD0` and `DFGRD1`.
pub const SPATIAL_DIMS: usize = 3;

/// Scalars that the material may update in place.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct UmatScalars {
    /// Specific elastic strain energy.
    pub sse: f64,
    /// Specific plastic dissipation.
    pub spd: f64,
    /// Specific creep dissipation.
    pub scd: f64,
    /// Volumetric heat generation.
    pub rpl: f64,
    /// Variation of `rpl` with respect to temperature.
    pub drpldt: f64,
    /// Suggested ratio of new time increment to the current one.
    pub pnewdt: f64,
}

/// Read-only information about where and when the material is evaluated.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Increment {
    /// Step time and total time at the start of the increment.
    pub time: [f64; 2],
    pub dtime: f64,
    pub temp: f64,
    pub dtemp: f64,
    /// Characteristic element length.
    pub celent: f64,
    /// Element number.
    pub noel: i32,
    /// Integration point number.
    pub npt: i32,
    pub layer: i32,
    pub kspt: i32,
    /// Step number, procedure type key, large-deformation flag, perturbation flag.
    pub jstep: [i32; 4],
    /// Increment number.
    pub kinc: i32,
}

/// Arguments of a single material point evaluation, exactly as the solver
/// lays them out.
///
/// Two-dimensional arrays are column-major. Vectors are stress-type vectors
/// of length `ntens` in the solver's component order.
pub struct UmatArgs<'a> {
    pub stress: &'a mut [f64],
    pub statev: &'a mut [f64],
    /// `NTENS x NTENS`, column-major.
    pub ddsdde: &'a mut [f64],
    pub ddsddt: &'a mut [f64],
    pub drplde: &'a mut [f64],
    pub scalars: &'a mut UmatScalars,

    pub strain: &'a [f64],
    pub dstrain: &'a [f64],
    pub predef: &'a [f64],
    pub dpred: &'a [f64],
    pub props: &'a [f64],
    pub coords: &'a [f64],
    /// `3 x 3`, column-major.
    pub drot: &'a [f64],
    /// `3 x 3`, column-major.
    pub dfgrd0: &'a [f64],
    /// `3 x 3`, column-major.
    pub dfgrd1: &'a [f64],

    pub cmname: &'a str,
    pub ndi: usize,
    pub nshr: usize,
    /// Must equal `ndi + nshr`.
    pub ntens: usize,
    pub increment: Increment,
}

/// Owned, row-major copy of a material point, as seen by a [`Material`].
///
/// Vectors keep the solver's component order and length (`ntens.len()`);
/// the tensor helpers convert to and from full 3x3 tensors. Materials may
/// change any value, but not the length of any vector or the shape of `ddsdde`.
///
/// [`Material`]: trait.Material.html
#[derive(Debug, Clone, PartialEq)]
pub struct UmatState {
    pub ntens: Ntens,
    pub solver: Solver,
    pub cmname: String,

    pub stress: Vec<f64>,
    pub statev: Vec<f64>,
    /// `NTENS x NTENS`.
    pub ddsdde: Vec<Vec<f64>>,
    pub ddsddt: Vec<f64>,
    pub drplde: Vec<f64>,
    pub scalars: UmatScalars,

    pub strain: Vec<f64>,
    pub dstrain: Vec<f64>,
    pub predef: Vec<f64>,
    pub dpred: Vec<f64>,
    pub props: Vec<f64>,
    pub coords: Vec<f64>,
    pub drot: Vec<Vec<f64>>,
    pub dfgrd0: Vec<Vec<f64>>,
    pub dfgrd1: Vec<Vec<f64>>,
    pub increment: Increment,

    symmetry_tol: Option<f64>,
}

fn read_vector(name: &str, data: &[f64], len: usize) -> FailResult<Vec<f64>> {
    Ok(column_to_row_major_flat(data, 1, len).with_context(|e| format!("{}: {}", name, e))?)
}

fn read_matrix(name: &str, data: &[f64], dim: usize) -> FailResult<Vec<Vec<f64>>> {
    Ok(column_to_row_major(data, dim, dim).with_context(|e| format!("{}: {}", name, e))?)
}

impl UmatState {
    /// Validate the solver's arguments and copy them into row-major form.
    pub fn from_args(args: &UmatArgs<'_>, settings: &Settings) -> FailResult<UmatState> {
        settings.validate()?;

        let ntens = Ntens::new(args.ndi, args.nshr)?;
        ensure!(
            args.ntens == ntens.len(),
            "NTENS = {} does not match NDI + NSHR = {}", args.ntens, ntens.len()
        );
        let n = ntens.len();

        trace!("Reading solver arrays ({})", ntens);
        Ok(UmatState {
            ntens,
            solver: settings.solver,
            cmname: args.cmname.to_string(),

            stress: read_vector("STRESS", &args.stress[..], n)?,
            // these have no shape beyond their length
            statev: args.statev.to_vec(),
            ddsdde: read_matrix("DDSDDE", &args.ddsdde[..], n)?,
            ddsddt: read_vector("DDSDDT", &args.ddsddt[..], n)?,
            drplde: read_vector("DRPLDE", &args.drplde[..], n)?,
            scalars: *args.scalars,

            strain: read_vector("STRAN", args.strain, n)?,
            dstrain: read_vector("DSTRAN", args.dstrain, n)?,
            predef: args.predef.to_vec(),
            dpred: args.dpred.to_vec(),
            props: args.props.to_vec(),
            coords: read_vector("COORDS", args.coords, SPATIAL_DIMS)?,
            drot: read_matrix("DROT", args.drot, SPATIAL_DIMS)?,
            dfgrd0: read_matrix("DFGRD0", args.dfgrd0, SPATIAL_DIMS)?,
            dfgrd1: read_matrix("DFGRD1", args.dfgrd1, SPATIAL_DIMS)?,
            increment: args.increment,

            symmetry_tol: settings.symmetry_tol,
        })
    }

    /// Copy everything the material may update back into the solver's arrays.
    ///
    /// All shapes are checked before anything is written.
    pub fn write_back(&self, args: &mut UmatArgs<'_>) -> FailResult<()> {
        self.check_output_shapes(args)?;

        trace!("Writing solver arrays ({})", self.ntens);
        let n = self.ntens.len();
        row_to_column_major_flat(&mut args.stress[..], &self.stress, 1, n)?;
        row_to_column_major_flat(&mut args.ddsddt[..], &self.ddsddt, 1, n)?;
        row_to_column_major_flat(&mut args.drplde[..], &self.drplde, 1, n)?;
        row_to_column_major_flat(&mut args.statev[..], &self.statev, 1, self.statev.len())?;
        row_to_column_major(&mut args.ddsdde[..], &self.ddsdde, n, n)?;
        *args.scalars = self.scalars;
        Ok(())
    }

    fn check_output_shapes(&self, args: &UmatArgs<'_>) -> FailResult<()> {
        let n = self.ntens.len();
        let vectors = [
            ("STRESS", self.stress.len(), n),
            ("DDSDDT", self.ddsddt.len(), n),
            ("DRPLDE", self.drplde.len(), n),
            ("STATEV", self.statev.len(), args.statev.len()),
        ];
        for &(name, actual, expected) in &vectors {
            ensure!(actual == expected, "{} has length {} after evaluation, expected {}", name, actual, expected);
        }
        ensure!(
            self.ddsdde.len() == n && self.ddsdde.iter().all(|row| row.len() == n),
            "DDSDDE is no longer {}x{} after evaluation", n, n
        );
        Ok(())
    }

    /// The stress as a full row-major 3x3 tensor.
    pub fn stress_tensor(&self) -> FailResult<Vec<f64>>
    { Ok(construct_tensor_from_reduced(&self.stress, self.ntens, self.solver)?) }

    /// The total strain as a full row-major 3x3 tensor.
    ///
    /// Off-diagonal elements are **engineering** shear strains, as the solver
    /// provides them; halve them for the tensorial strain.
    pub fn strain_tensor(&self) -> FailResult<Vec<f64>>
    { Ok(construct_tensor_from_reduced(&self.strain, self.ntens, self.solver)?) }

    /// The strain increment as a full row-major 3x3 tensor (engineering shear).
    pub fn dstrain_tensor(&self) -> FailResult<Vec<f64>>
    { Ok(construct_tensor_from_reduced(&self.dstrain, self.ntens, self.solver)?) }

    /// Replace the stress with a full row-major 3x3 tensor.
    ///
    /// Components the solver does not store are dropped. If `symmetry-tol` is
    /// configured, asymmetric tensors are rejected and the stress is unchanged.
    pub fn set_stress_tensor(&mut self, tensor: &[f64]) -> FailResult<()> {
        if let Some(tol) = self.symmetry_tol {
            check_symmetric(tensor, tol)?;
        }
        self.stress = destruct_tensor_to_reduced(tensor, self.ntens, self.solver)?;
        Ok(())
    }

    /// Replace the Jacobian `DDSDDE` using the full 9x9 matrix
    /// `d(stress_ij) / d(strain_kl)`, with row `3*i + j` and column `3*k + l`.
    pub fn set_jacobian_full<V: AsRef<[f64]>>(&mut self, full: &[V]) -> FailResult<()> {
        // the contraction below assumes the Abaqus/Standard ordering
        self.solver.matrix_order()?;
        self.ddsdde = contract_full_matrix_to_reduced::<f64, V>(full, self.ntens)?;
        Ok(())
    }
}
