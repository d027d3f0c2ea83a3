/* ************************************************************************ **
** This file is part of abaqus-tools, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Settings for the material-point interface.
//!
//! The functions here make use of serde_ignored to catch typos in the config.

use crate::FailResult;
use ::abaqus_ntens::Solver;
use ::std::io::Read;

/// Provides an alternative to serde_yaml::from_reader that warns about
/// unrecognized keys instead of silently ignoring them.
pub trait YamlRead: for<'de> ::serde::Deserialize<'de> {
    fn from_reader(mut r: impl Read) -> Result<Self, ::serde_yaml::Error>
    { YamlRead::from_dyn_reader(&mut r) }

    fn from_dyn_reader(r: &mut dyn Read) -> Result<Self, ::serde_yaml::Error> {
        // serde_ignored needs a Deserializer, and serde_yaml only gives us one for Value.
        Self::from_value(::serde_yaml::from_reader(r)?)
    }

    fn from_value(value: ::serde_yaml::Value) -> Result<Self, ::serde_yaml::Error>;
}

macro_rules! derive_yaml_read {
    ($Type:ty) => {
        impl YamlRead for $Type {
            fn from_value(value: ::serde_yaml::Value) -> Result<$Type, ::serde_yaml::Error> {
                ::serde_ignored::deserialize(
                    value,
                    |path| warn!("Unused config item (possible typo?): {}", path),
                )
            }
        }
    };
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Component order used when converting between stress-type vectors
    /// and full tensors.
    #[serde(default)]
    pub solver: Solver,

    /// Tolerance for the symmetry check on tensors handed back by the material.
    ///
    /// `None` skips the check; the upper triangle of the tensor is used.
    #[serde(default)]
    pub symmetry_tol: Option<f64>,
}
derive_yaml_read!{Settings}

impl Settings {
    pub fn validate(&self) -> FailResult<()> {
        if let Some(tol) = self.symmetry_tol {
            ensure!(tol >= 0.0, "symmetry-tol must be non-negative (got {})", tol);
        }
        Ok(())
    }
}
