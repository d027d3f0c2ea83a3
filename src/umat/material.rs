/* ************************************************************************ **
** This file is part of abaqus-tools, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::state::UmatState;

/// A constitutive model, evaluated once per material point per increment.
///
/// The material sees row-major data and may update anything in the state,
/// as long as it keeps the lengths of the vectors and the shape of `ddsdde`.
/// An error aborts the call and leaves the solver's arrays untouched.
///
/// Closures of the right signature are materials.
pub trait Material {
    fn evaluate(&mut self, state: &mut UmatState) -> FailResult<()>;
}

impl<F> Material for F
where F: FnMut(&mut UmatState) -> FailResult<()>,
{
    fn evaluate(&mut self, state: &mut UmatState) -> FailResult<()>
    { (self)(state) }
}

/// Material that only says hello.
///
/// Leaves the state exactly as the solver provided it.
#[derive(Debug, Clone, Default)]
pub struct HelloMaterial {
    calls: u64,
}

impl HelloMaterial {
    pub fn new() -> Self { Default::default() }

    /// Number of evaluations so far.
    pub fn calls(&self) -> u64 { self.calls }
}

impl Material for HelloMaterial {
    fn evaluate(&mut self, state: &mut UmatState) -> FailResult<()> {
        self.calls += 1;
        info!(
            "Hello from material '{}' (element {}, point {}, {})",
            state.cmname, state.increment.noel, state.increment.npt, state.solver
        );
        Ok(())
    }
}
