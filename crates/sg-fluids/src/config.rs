//! Parameter-set configuration (YAML).
//!
//! ```yaml
//! gamma: 2.35
//! cv: 1816.0
//! q: -1167000.0
//! p_inf: 1.0e9
//! mu: 0.001
//! k: 0.6
//! solver:
//!   max_iterations: 50
//! ```

use crate::error::FluidError;
use crate::params::StiffenedGasParams;
use crate::solver::RootSolverConfig;
use serde::{Deserialize, Serialize};
use sg_core::Real;
use std::path::Path;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid parameters: {0}")]
    Invalid(#[from] FluidError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Serialized form of the stiffened-gas parameter set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StiffenedGasConfig {
    /// Heat capacity ratio γ
    pub gamma: Real,
    /// Specific heat at constant volume [J/(kg·K)]
    pub cv: Real,
    /// Specific heat at constant pressure; derived as γ·c_v when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cp: Option<Real>,
    /// Reference specific energy [J/kg]
    pub q: Real,
    /// Reference specific entropy [J/(kg·K)]
    #[serde(default)]
    pub q_prime: Real,
    /// Stiffening pressure [Pa]
    pub p_inf: Real,
    /// Dynamic viscosity [Pa·s]
    #[serde(default = "default_mu")]
    pub mu: Real,
    /// Thermal conductivity [W/(m·K)]
    #[serde(default = "default_k")]
    pub k: Real,
    #[serde(default)]
    pub solver: RootSolverConfig,
}

fn default_mu() -> Real {
    1.0e-3
}

fn default_k() -> Real {
    0.6
}

impl StiffenedGasConfig {
    /// Check every constraint the engine relies on.
    pub fn validate(&self) -> Result<(), FluidError> {
        StiffenedGasParams::from_config(self)?;
        self.solver.validate()
    }
}

impl From<&StiffenedGasParams> for StiffenedGasConfig {
    fn from(p: &StiffenedGasParams) -> Self {
        Self {
            gamma: p.gamma(),
            cv: p.cv(),
            cp: None,
            q: p.q(),
            q_prime: p.q_prime(),
            p_inf: p.p_inf(),
            mu: p.mu(),
            k: p.k(),
            solver: RootSolverConfig::default(),
        }
    }
}

pub fn from_yaml_str(content: &str) -> ConfigResult<StiffenedGasConfig> {
    let cfg: StiffenedGasConfig = serde_yaml::from_str(content)?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_yaml(path: &Path) -> ConfigResult<StiffenedGasConfig> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn to_yaml_string(cfg: &StiffenedGasConfig) -> ConfigResult<String> {
    cfg.validate()?;
    Ok(serde_yaml::to_string(cfg)?)
}
