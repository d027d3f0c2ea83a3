/* ************************************************************************ **
** This file is part of abaqus-tools, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Safe material-point interface for Abaqus user materials.
//!
//! [`run_umat`] takes the solver's arguments as borrowed, column-major
//! buffers ([`UmatArgs`]), hands an owned, row-major copy of them to a
//! [`Material`], and writes the material's results back. Nothing here
//! touches raw pointers; binding this to the actual `UMAT` symbol is left to
//! the host.
//!
//! [`run_umat`]: fn.run_umat.html
//! [`UmatArgs`]: struct.UmatArgs.html
//! [`Material`]: trait.Material.html

#[macro_use] extern crate failure;
#[macro_use] extern crate log;
#[macro_use] extern crate serde_derive;

pub type FailResult<T> = Result<T, ::failure::Error>;

pub use crate::config::{Settings, YamlRead};
pub mod config;

pub use crate::state::{UmatArgs, UmatState, UmatScalars, Increment, SPATIAL_DIMS};
mod state;

pub use crate::material::{Material, HelloMaterial};
mod material;

/// Evaluate a material at a single material point.
///
/// The arguments are validated and copied before the material runs. If
/// anything fails, whether validation, the material itself, or the shape of
/// what the material left behind, the solver's buffers are not modified.
pub fn run_umat<M: Material + ?Sized>(
    mut args: UmatArgs<'_>,
    settings: &Settings,
    material: &mut M,
) -> FailResult<()>
{
    debug!(
        "UMAT: material '{}', NDI={}, NSHR={}, element {}, point {}, increment {}",
        args.cmname, args.ndi, args.nshr,
        args.increment.noel, args.increment.npt, args.increment.kinc
    );

    let mut state = UmatState::from_args(&args, settings)?;

    trace!("Evaluating material '{}'", state.cmname);
    material.evaluate(&mut state)?;

    state.write_back(&mut args)?;
    trace!("UMAT: done");
    Ok(())
}
