//! sg-fluids: stiffened-gas equation of state with analytic derivatives.
//!
//! Provides:
//! - Validated parameter sets, loadable from YAML
//! - Canonical relations in (specific volume, internal energy)
//! - Adapters to (p, T), (p, ρ), (p, h), (T, v) and (v, h) inputs
//! - Newton/bisection inversions for (h, s) and (p, s) inputs
//! - `SinglePhaseFluid` trait and the `StiffenedGasFluid` backend
//! - A state calculator and parallel sweeps over input pairs
//!
//! Every property comes in two shapes: `x_from_a_b` returns the value and
//! `x_from_a_b_derivs` returns a [`ValueDerivs`] with `∂x/∂a|b` and `∂x/∂b|a`.
//!
//! # Example
//!
//! ```
//! use sg_fluids::{SinglePhaseFluid, StiffenedGasFluid, StiffenedGasParams};
//!
//! let params = StiffenedGasParams::new(2.35, 1816.0, -1.167e6, 0.0, 1.0e9, 1.0e-3, 0.6)?;
//! let water = StiffenedGasFluid::new(params);
//!
//! let rho = water.rho_from_p_t_derivs(101_325.0, 293.15)?;
//! let e = water.e_from_p_rho(101_325.0, rho.value)?;
//! let c = water.c_from_v_e(1.0 / rho.value, e)?;
//! println!("rho = {} kg/m³ (drho/dT = {}), c = {c} m/s", rho.value, rho.d_dx2);
//! # Ok::<(), sg_fluids::FluidError>(())
//! ```

pub mod adapters;
pub mod calculator;
pub mod canonical;
pub mod config;
pub mod derivs;
pub mod error;
pub mod inversion;
pub mod model;
pub mod params;
pub mod solver;
pub mod stiffened_gas;
pub mod sweep;
pub mod transport;

// Re-exports for ergonomics
pub use calculator::{InputPair, compute_state};
pub use config::{
    ConfigError, ConfigResult, StiffenedGasConfig, from_yaml_str, load_yaml, to_yaml_string,
};
pub use derivs::ValueDerivs;
pub use error::{FluidError, FluidResult};
pub use model::{SinglePhaseFluid, ThermoPropertyPack};
pub use params::StiffenedGasParams;
pub use solver::{Root, RootSolverConfig};
pub use stiffened_gas::StiffenedGasFluid;
pub use sweep::{SweepAxis, SweepDefinition, SweepError, SweepResult, SweepType, execute_sweep};
