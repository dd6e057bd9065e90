//! Single-phase fluid property trait and validation helpers.

use crate::derivs::ValueDerivs;
use crate::error::FluidResult;
use sg_core::units::{
    Density, DynVisc, Pressure, SpecEnergy, SpecEntropy, SpecHeatCapacity, Temperature,
    ThermalCond, Velocity, k, kg_per_m3, mps, pa, pa_s,
};
use serde::Serialize;
use sg_core::Real;

/// Every property at one state, evaluated in a single call.
#[derive(Clone, Debug, Serialize)]
pub struct ThermoPropertyPack {
    /// Pressure [Pa]
    pub p: Pressure,
    /// Temperature [K]
    pub t: Temperature,
    /// Density [kg/m³]
    pub rho: Density,
    /// Specific volume [m³/kg]
    pub v: Real,
    /// Specific internal energy [J/kg]
    pub e: SpecEnergy,
    /// Specific enthalpy [J/kg]
    pub h: SpecEnergy,
    /// Specific entropy [J/(kg·K)]
    pub s: SpecEntropy,
    /// Speed of sound [m/s]
    pub c: Velocity,
    /// Isobaric specific heat [J/(kg·K)]
    pub cp: SpecHeatCapacity,
    /// Isochoric specific heat [J/(kg·K)]
    pub cv: SpecHeatCapacity,
    /// Dynamic viscosity [Pa·s]
    pub mu: DynVisc,
    /// Thermal conductivity [W/(m·K)]
    pub k: ThermalCond,
}

impl ThermoPropertyPack {
    /// Return a summary string of all contained properties (for debugging).
    pub fn summary(&self) -> String {
        format!(
            "Pack(P={:.1}Pa,T={:.3}K,ρ={:.4}kg/m³,e={:.2}J/kg,h={:.2}J/kg,s={:.3}J/kg·K,c={:.2}m/s)",
            self.p.value, self.t.value, self.rho.value, self.e, self.h, self.s, self.c.value
        )
    }
}

/// Generates the value-only form of each `*_derivs` method.
macro_rules! value_only {
    ($($name:ident => $derivs:ident ($a:ident, $b:ident);)*) => {
        $(
            fn $name(&self, $a: Real, $b: Real) -> FluidResult<Real> {
                self.$derivs($a, $b).map(|d| d.value)
            }
        )*
    };
}

/// Single-phase equation-of-state interface.
///
/// Each property is offered per input pair in two shapes: `x_from_a_b`
/// (value) and `x_from_a_b_derivs` (value with `∂x/∂a|b`, `∂x/∂b|a`).
/// Implementations hold no mutable state and must be `Send + Sync` so a host
/// can evaluate them concurrently.
pub trait SinglePhaseFluid: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    // (v, e)
    fn p_from_v_e_derivs(&self, v: Real, e: Real) -> FluidResult<ValueDerivs>;
    fn t_from_v_e_derivs(&self, v: Real, e: Real) -> FluidResult<ValueDerivs>;
    fn c_from_v_e_derivs(&self, v: Real, e: Real) -> FluidResult<ValueDerivs>;
    fn s_from_v_e_derivs(&self, v: Real, e: Real) -> FluidResult<ValueDerivs>;
    fn h_from_v_e_derivs(&self, v: Real, e: Real) -> FluidResult<ValueDerivs>;
    fn g_from_v_e_derivs(&self, v: Real, e: Real) -> FluidResult<ValueDerivs>;
    fn cp_from_v_e_derivs(&self, v: Real, e: Real) -> FluidResult<ValueDerivs>;
    fn cv_from_v_e_derivs(&self, v: Real, e: Real) -> FluidResult<ValueDerivs>;
    fn mu_from_v_e_derivs(&self, v: Real, e: Real) -> FluidResult<ValueDerivs>;
    fn k_from_v_e_derivs(&self, v: Real, e: Real) -> FluidResult<ValueDerivs>;

    // (p, T)
    fn rho_from_p_t_derivs(&self, p: Real, t: Real) -> FluidResult<ValueDerivs>;
    fn v_from_p_t_derivs(&self, p: Real, t: Real) -> FluidResult<ValueDerivs>;
    fn e_from_p_t_derivs(&self, p: Real, t: Real) -> FluidResult<ValueDerivs>;
    fn h_from_p_t_derivs(&self, p: Real, t: Real) -> FluidResult<ValueDerivs>;
    fn s_from_p_t_derivs(&self, p: Real, t: Real) -> FluidResult<ValueDerivs>;

    // (p, ρ), (p, h), (T, v), (v, h)
    fn e_from_p_rho_derivs(&self, p: Real, rho: Real) -> FluidResult<ValueDerivs>;
    fn t_from_p_h_derivs(&self, p: Real, h: Real) -> FluidResult<ValueDerivs>;
    fn p_from_t_v_derivs(&self, t: Real, v: Real) -> FluidResult<ValueDerivs>;
    fn e_from_t_v_derivs(&self, t: Real, v: Real) -> FluidResult<ValueDerivs>;
    fn e_from_v_h_derivs(&self, v: Real, h: Real) -> FluidResult<ValueDerivs>;

    // (h, s), (p, s), (h, p)
    fn p_from_h_s_derivs(&self, h: Real, s: Real) -> FluidResult<ValueDerivs>;
    fn rho_from_p_s_derivs(&self, p: Real, s: Real) -> FluidResult<ValueDerivs>;
    fn s_from_h_p_derivs(&self, h: Real, p: Real) -> FluidResult<ValueDerivs>;

    value_only! {
        p_from_v_e => p_from_v_e_derivs(v, e);
        t_from_v_e => t_from_v_e_derivs(v, e);
        c_from_v_e => c_from_v_e_derivs(v, e);
        s_from_v_e => s_from_v_e_derivs(v, e);
        h_from_v_e => h_from_v_e_derivs(v, e);
        g_from_v_e => g_from_v_e_derivs(v, e);
        cp_from_v_e => cp_from_v_e_derivs(v, e);
        cv_from_v_e => cv_from_v_e_derivs(v, e);
        mu_from_v_e => mu_from_v_e_derivs(v, e);
        k_from_v_e => k_from_v_e_derivs(v, e);
        rho_from_p_t => rho_from_p_t_derivs(p, t);
        v_from_p_t => v_from_p_t_derivs(p, t);
        e_from_p_t => e_from_p_t_derivs(p, t);
        h_from_p_t => h_from_p_t_derivs(p, t);
        s_from_p_t => s_from_p_t_derivs(p, t);
        e_from_p_rho => e_from_p_rho_derivs(p, rho);
        t_from_p_h => t_from_p_h_derivs(p, h);
        p_from_t_v => p_from_t_v_derivs(t, v);
        e_from_t_v => e_from_t_v_derivs(t, v);
        e_from_v_h => e_from_v_h_derivs(v, h);
        p_from_h_s => p_from_h_s_derivs(h, s);
        rho_from_p_s => rho_from_p_s_derivs(p, s);
        s_from_h_p => s_from_h_p_derivs(h, p);
    }

    /// Compute the complete property pack at (v, e).
    fn property_pack(&self, v: Real, e: Real) -> FluidResult<ThermoPropertyPack> {
        Ok(ThermoPropertyPack {
            p: pa(self.p_from_v_e(v, e)?),
            t: k(self.t_from_v_e(v, e)?),
            rho: kg_per_m3(1.0 / v),
            v,
            e,
            h: self.h_from_v_e(v, e)?,
            s: self.s_from_v_e(v, e)?,
            c: mps(self.c_from_v_e(v, e)?),
            cp: self.cp_from_v_e(v, e)?,
            cv: self.cv_from_v_e(v, e)?,
            mu: pa_s(self.mu_from_v_e(v, e)?),
            k: self.k_from_v_e(v, e)?,
        })
    }
}

/// Validity-domain checks shared by every relation.
pub(crate) mod validation {
    use crate::canonical;
    use crate::error::{FluidError, FluidResult};
    use crate::params::StiffenedGasParams;
    use sg_core::Real;

    /// Ensure an input is finite.
    pub fn require_finite(x: Real, what: &'static str) -> FluidResult<Real> {
        if !x.is_finite() {
            return Err(FluidError::domain(what, x));
        }
        Ok(x)
    }

    /// Ensure an input is positive and finite.
    pub fn require_positive(x: Real, what: &'static str) -> FluidResult<Real> {
        if !x.is_finite() || x <= 0.0 {
            return Err(FluidError::domain(what, x));
        }
        Ok(x)
    }

    /// Check (v, e) and return the temperature there.
    pub fn validate_ve(fp: &StiffenedGasParams, v: Real, e: Real) -> FluidResult<Real> {
        require_positive(v, "specific volume must be positive and finite")?;
        require_finite(e, "specific internal energy must be finite")?;
        let t = canonical::temperature(fp, v, e);
        require_positive(t, "temperature must be positive")
    }

    /// Check a pressure and return the stiffened pressure `p + p∞`.
    pub fn validate_pressure(fp: &StiffenedGasParams, p: Real) -> FluidResult<Real> {
        require_finite(p, "pressure must be finite")?;
        require_positive(p + fp.p_inf(), "p + p_inf must be positive")
    }

    /// Check (p, T) and return the stiffened pressure.
    pub fn validate_pt(fp: &StiffenedGasParams, p: Real, t: Real) -> FluidResult<Real> {
        require_positive(t, "temperature must be positive and finite")?;
        validate_pressure(fp, p)
    }

    /// Check an enthalpy and return the temperature it implies, `(h - q)/(γ c_v)`.
    pub fn validate_enthalpy(fp: &StiffenedGasParams, h: Real) -> FluidResult<Real> {
        require_finite(h, "enthalpy must be finite")?;
        require_positive(
            (h - fp.q()) / (fp.gamma() * fp.cv()),
            "enthalpy implies non-positive temperature",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use crate::params::StiffenedGasParams;

    fn water() -> StiffenedGasParams {
        StiffenedGasParams::new(2.35, 1816.0, -1.167e6, 0.0, 1.0e9, 1.0e-3, 0.6).unwrap()
    }

    #[test]
    fn stiffened_pressure_allows_negative_pressure() {
        let fp = water();
        // Liquid under tension: p < 0 but p + p∞ > 0
        assert!((validate_pressure(&fp, -1.0e8).unwrap() - 9.0e8).abs() < 1e-6);
        assert!(validate_pressure(&fp, -1.0e9).is_err());
        assert!(validate_pressure(&fp, f64::NAN).is_err());
    }

    #[test]
    fn temperature_must_be_positive() {
        let fp = water();
        assert!(validate_pt(&fp, 1.0e5, 300.0).is_ok());
        assert!(validate_pt(&fp, 1.0e5, 0.0).is_err());
        assert!(validate_pt(&fp, 1.0e5, -5.0).is_err());
    }

    #[test]
    fn enthalpy_below_reference_is_rejected() {
        let fp = water();
        assert!(validate_enthalpy(&fp, fp.q()).is_err());
        let t = validate_enthalpy(&fp, fp.q() + fp.cp() * 300.0).unwrap();
        assert!((t - 300.0).abs() < 1e-9);
    }

    #[test]
    fn ve_domain() {
        let fp = water();
        let v = 1.0e-3;
        let e = fp.q() + fp.p_inf() * v + fp.cv() * 250.0;
        assert!((validate_ve(&fp, v, e).unwrap() - 250.0).abs() < 1e-9);
        assert!(validate_ve(&fp, 0.0, e).is_err());
        assert!(validate_ve(&fp, v, f64::INFINITY).is_err());
    }
}
