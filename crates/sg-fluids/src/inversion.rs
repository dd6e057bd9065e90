//! Inversions that are not closed-form in the requested pair.
//!
//! `p_from_h_s` and `rho_from_p_s` solve the entropy relation for the
//! unknown with [`solve_positive`]; the derivatives of the converged root
//! follow from implicit differentiation of the residual
//! `F(x; a, b) = 0  =>  dx/da = -F_a / F_x`.

use crate::adapters;
use crate::canonical;
use crate::derivs::ValueDerivs;
use crate::error::FluidResult;
use crate::model::validation;
use crate::params::StiffenedGasParams;
use crate::solver::{RootSolverConfig, solve_positive};
use sg_core::Real;
use sg_core::units::constants::{P_ATM_PA, T_STD_K};

/// Gauge pressure above `-p∞` used to seed `p_from_h_s`.
pub const SEED_PRESSURE: Real = P_ATM_PA;

/// Temperature used to seed the density in `rho_from_p_s`.
pub const SEED_TEMPERATURE: Real = T_STD_K;

/// Pressure from enthalpy and entropy.
///
/// The unknown is the stiffened pressure `π = p + p∞`, which keeps the
/// residual free of cancellation when `p ≈ -p∞`. Temperature is fixed by `h`.
pub fn p_from_h_s(
    fp: &StiffenedGasParams,
    h: Real,
    s: Real,
    seed: Option<Real>,
    cfg: &RootSolverConfig,
) -> FluidResult<ValueDerivs> {
    let t = validation::validate_enthalpy(fp, h)?;
    let dt_dh = 1.0 / (fp.gamma() * fp.cv());
    validation::require_finite(s, "entropy must be finite")?;
    let pi0 = match seed {
        Some(p) => validation::validate_pressure(fp, p)?,
        None => fp.p_inf() + SEED_PRESSURE,
    };

    let cv = fp.cv();
    let residual = |pi: Real| {
        let (s_pi, ds_dpi, _) = canonical::entropy_pi_t(fp, pi, t);
        ((s_pi - s) / cv, ds_dpi / cv)
    };
    let root = solve_positive("p_from_h_s", residual, pi0, cfg)?;

    let pi = root.x;
    let (_, ds_dpi, ds_dt) = canonical::entropy_pi_t(fp, pi, t);
    let ds_dh = ds_dt * dt_dh;
    Ok(ValueDerivs::new(pi - fp.p_inf(), -ds_dh / ds_dpi, 1.0 / ds_dpi))
}

/// Density from pressure and entropy.
pub fn rho_from_p_s(
    fp: &StiffenedGasParams,
    p: Real,
    s: Real,
    seed: Option<Real>,
    cfg: &RootSolverConfig,
) -> FluidResult<ValueDerivs> {
    let pi = validation::validate_pressure(fp, p)?;
    validation::require_finite(s, "entropy must be finite")?;
    let rho0 = match seed {
        Some(rho) => validation::require_positive(rho, "density seed must be positive and finite")?,
        None => adapters::rho_from_p_t(fp, p, SEED_TEMPERATURE)?.value,
    };

    let cv = fp.cv();
    let gm1cv = (fp.gamma() - 1.0) * cv;
    // T(p, ρ) = π / ((γ-1) c_v ρ)
    let residual = |rho: Real| {
        let t = pi / (gm1cv * rho);
        let (s_rho, _, ds_dt) = canonical::entropy_pi_t(fp, pi, t);
        ((s_rho - s) / cv, -ds_dt * t / rho / cv)
    };
    let root = solve_positive("rho_from_p_s", residual, rho0, cfg)?;

    let rho = root.x;
    let t = pi / (gm1cv * rho);
    let (_, ds_dpi, ds_dt) = canonical::entropy_pi_t(fp, pi, t);
    let f_p = ds_dpi + ds_dt / (gm1cv * rho);
    let f_rho = -ds_dt * t / rho;
    Ok(ValueDerivs::new(rho, -f_p / f_rho, 1.0 / f_rho))
}

/// Entropy from enthalpy and pressure. Closed-form: T follows from h alone.
pub fn s_from_h_p(fp: &StiffenedGasParams, h: Real, p: Real) -> FluidResult<ValueDerivs> {
    let pi = validation::validate_pressure(fp, p)?;
    let t = adapters::t_from_p_h(fp, p, h)?;
    let (s, ds_dpi, ds_dt) = canonical::entropy_pi_t(fp, pi, t.value);
    Ok(ValueDerivs::new(
        s,
        ds_dt * t.d_dx2,
        ds_dpi + ds_dt * t.d_dx1,
    ))
}
