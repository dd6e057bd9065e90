//! Stiffened-gas fluid model.

use crate::config::StiffenedGasConfig;
use crate::derivs::ValueDerivs;
use crate::error::FluidResult;
use crate::model::SinglePhaseFluid;
use crate::params::StiffenedGasParams;
use crate::solver::RootSolverConfig;
use crate::{adapters, canonical, inversion, transport};
use sg_core::Real;

/// Stiffened-gas equation of state.
///
/// Owns an immutable parameter set and the root-solver settings used by the
/// (h, s) and (p, s) inversions. Holds no caches, so a single instance can be
/// shared across threads by reference.
#[derive(Debug, Clone)]
pub struct StiffenedGasFluid {
    params: StiffenedGasParams,
    solver: RootSolverConfig,
}

impl StiffenedGasFluid {
    /// Create a model with default solver settings.
    pub fn new(params: StiffenedGasParams) -> Self {
        tracing::debug!(
            gamma = params.gamma(),
            cv = params.cv(),
            p_inf = params.p_inf(),
            "stiffened-gas model constructed"
        );
        Self {
            params,
            solver: RootSolverConfig::default(),
        }
    }

    pub fn with_solver(mut self, solver: RootSolverConfig) -> FluidResult<Self> {
        solver.validate()?;
        self.solver = solver;
        Ok(self)
    }

    pub fn from_config(cfg: &StiffenedGasConfig) -> FluidResult<Self> {
        let params = StiffenedGasParams::from_config(cfg)?;
        Self::new(params).with_solver(cfg.solver)
    }

    pub fn params(&self) -> &StiffenedGasParams {
        &self.params
    }

    pub fn solver(&self) -> &RootSolverConfig {
        &self.solver
    }

    /// `p_from_h_s` starting from a caller-supplied pressure guess.
    pub fn p_from_h_s_seeded(&self, h: Real, s: Real, p_guess: Real) -> FluidResult<ValueDerivs> {
        inversion::p_from_h_s(&self.params, h, s, Some(p_guess), &self.solver)
    }

    /// `rho_from_p_s` starting from a caller-supplied density guess.
    pub fn rho_from_p_s_seeded(
        &self,
        p: Real,
        s: Real,
        rho_guess: Real,
    ) -> FluidResult<ValueDerivs> {
        inversion::rho_from_p_s(&self.params, p, s, Some(rho_guess), &self.solver)
    }
}

impl SinglePhaseFluid for StiffenedGasFluid {
    fn name(&self) -> &str {
        "StiffenedGas"
    }

    fn p_from_v_e_derivs(&self, v: Real, e: Real) -> FluidResult<ValueDerivs> {
        canonical::p_from_v_e(&self.params, v, e)
    }

    fn t_from_v_e_derivs(&self, v: Real, e: Real) -> FluidResult<ValueDerivs> {
        canonical::t_from_v_e(&self.params, v, e)
    }

    fn c_from_v_e_derivs(&self, v: Real, e: Real) -> FluidResult<ValueDerivs> {
        canonical::c_from_v_e(&self.params, v, e)
    }

    fn s_from_v_e_derivs(&self, v: Real, e: Real) -> FluidResult<ValueDerivs> {
        canonical::s_from_v_e(&self.params, v, e)
    }

    fn h_from_v_e_derivs(&self, v: Real, e: Real) -> FluidResult<ValueDerivs> {
        canonical::h_from_v_e(&self.params, v, e)
    }

    fn g_from_v_e_derivs(&self, v: Real, e: Real) -> FluidResult<ValueDerivs> {
        canonical::g_from_v_e(&self.params, v, e)
    }

    fn cp_from_v_e_derivs(&self, v: Real, e: Real) -> FluidResult<ValueDerivs> {
        transport::cp_from_v_e(&self.params, v, e)
    }

    fn cv_from_v_e_derivs(&self, v: Real, e: Real) -> FluidResult<ValueDerivs> {
        transport::cv_from_v_e(&self.params, v, e)
    }

    fn mu_from_v_e_derivs(&self, v: Real, e: Real) -> FluidResult<ValueDerivs> {
        transport::mu_from_v_e(&self.params, v, e)
    }

    fn k_from_v_e_derivs(&self, v: Real, e: Real) -> FluidResult<ValueDerivs> {
        transport::k_from_v_e(&self.params, v, e)
    }

    fn rho_from_p_t_derivs(&self, p: Real, t: Real) -> FluidResult<ValueDerivs> {
        adapters::rho_from_p_t(&self.params, p, t)
    }

    fn v_from_p_t_derivs(&self, p: Real, t: Real) -> FluidResult<ValueDerivs> {
        adapters::v_from_p_t(&self.params, p, t)
    }

    fn e_from_p_t_derivs(&self, p: Real, t: Real) -> FluidResult<ValueDerivs> {
        adapters::e_from_p_t(&self.params, p, t)
    }

    fn h_from_p_t_derivs(&self, p: Real, t: Real) -> FluidResult<ValueDerivs> {
        adapters::h_from_p_t(&self.params, p, t)
    }

    fn s_from_p_t_derivs(&self, p: Real, t: Real) -> FluidResult<ValueDerivs> {
        adapters::s_from_p_t(&self.params, p, t)
    }

    fn e_from_p_rho_derivs(&self, p: Real, rho: Real) -> FluidResult<ValueDerivs> {
        adapters::e_from_p_rho(&self.params, p, rho)
    }

    fn t_from_p_h_derivs(&self, p: Real, h: Real) -> FluidResult<ValueDerivs> {
        adapters::t_from_p_h(&self.params, p, h)
    }

    fn p_from_t_v_derivs(&self, t: Real, v: Real) -> FluidResult<ValueDerivs> {
        adapters::p_from_t_v(&self.params, t, v)
    }

    fn e_from_t_v_derivs(&self, t: Real, v: Real) -> FluidResult<ValueDerivs> {
        adapters::e_from_t_v(&self.params, t, v)
    }

    fn e_from_v_h_derivs(&self, v: Real, h: Real) -> FluidResult<ValueDerivs> {
        adapters::e_from_v_h(&self.params, v, h)
    }

    fn p_from_h_s_derivs(&self, h: Real, s: Real) -> FluidResult<ValueDerivs> {
        inversion::p_from_h_s(&self.params, h, s, None, &self.solver)
    }

    fn rho_from_p_s_derivs(&self, p: Real, s: Real) -> FluidResult<ValueDerivs> {
        inversion::rho_from_p_s(&self.params, p, s, None, &self.solver)
    }

    fn s_from_h_p_derivs(&self, h: Real, p: Real) -> FluidResult<ValueDerivs> {
        inversion::s_from_h_p(&self.params, h, p)
    }
}
