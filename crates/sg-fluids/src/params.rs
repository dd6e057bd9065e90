//! Stiffened-gas parameter set.

use crate::config::StiffenedGasConfig;
use crate::error::{FluidError, FluidResult};
use sg_core::{Real, Tolerances, nearly_equal};

/// Immutable parameters of the stiffened-gas closure
/// `p = (γ-1)(e-q)/v - γ p∞`.
///
/// Fields are private: once validated the set cannot be mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StiffenedGasParams {
    gamma: Real,
    cv: Real,
    cp: Real,
    q: Real,
    q_prime: Real,
    p_inf: Real,
    mu: Real,
    k: Real,
}

impl StiffenedGasParams {
    /// Build and validate a parameter set. `c_p` is derived as `γ·c_v`.
    ///
    /// # Arguments
    /// * `gamma` - Heat capacity ratio, must be > 1
    /// * `cv` - Specific heat at constant volume [J/(kg·K)], > 0
    /// * `q` - Reference specific internal energy [J/kg]
    /// * `q_prime` - Reference specific entropy [J/(kg·K)]
    /// * `p_inf` - Stiffening pressure [Pa], >= 0
    /// * `mu` - Dynamic viscosity [Pa·s], > 0
    /// * `k` - Thermal conductivity [W/(m·K)], > 0
    pub fn new(
        gamma: Real,
        cv: Real,
        q: Real,
        q_prime: Real,
        p_inf: Real,
        mu: Real,
        k: Real,
    ) -> FluidResult<Self> {
        let params = Self {
            gamma,
            cv,
            cp: gamma * cv,
            q,
            q_prime,
            p_inf,
            mu,
            k,
        };
        params.validate()?;
        Ok(params)
    }

    /// Build from a deserialized configuration. An explicit `cp` must agree
    /// with `γ·c_v`.
    pub fn from_config(cfg: &StiffenedGasConfig) -> FluidResult<Self> {
        let params = Self::new(
            cfg.gamma, cfg.cv, cfg.q, cfg.q_prime, cfg.p_inf, cfg.mu, cfg.k,
        )?;
        if let Some(cp) = cfg.cp {
            let tol = Tolerances {
                abs: 0.0,
                rel: 1e-9,
            };
            if !cp.is_finite() || !nearly_equal(cp, params.cp, tol) {
                return Err(FluidError::config(format!(
                    "cp = {cp} is inconsistent with gamma * cv = {}",
                    params.cp
                )));
            }
        }
        Ok(params)
    }

    fn validate(&self) -> FluidResult<()> {
        check(self.gamma, "gamma", |g| g > 1.0, "must be > 1")?;
        check(self.cv, "cv", |v| v > 0.0, "must be > 0")?;
        check(self.q, "q", |_| true, "")?;
        check(self.q_prime, "q_prime", |_| true, "")?;
        check(self.p_inf, "p_inf", |p| p >= 0.0, "must be >= 0")?;
        check(self.mu, "mu", |m| m > 0.0, "must be > 0")?;
        check(self.k, "k", |k| k > 0.0, "must be > 0")?;
        Ok(())
    }

    pub fn gamma(&self) -> Real {
        self.gamma
    }

    pub fn cv(&self) -> Real {
        self.cv
    }

    pub fn cp(&self) -> Real {
        self.cp
    }

    pub fn q(&self) -> Real {
        self.q
    }

    pub fn q_prime(&self) -> Real {
        self.q_prime
    }

    pub fn p_inf(&self) -> Real {
        self.p_inf
    }

    pub fn mu(&self) -> Real {
        self.mu
    }

    pub fn k(&self) -> Real {
        self.k
    }
}

fn check(
    value: Real,
    name: &str,
    ok: impl Fn(Real) -> bool,
    rule: &str,
) -> FluidResult<()> {
    if !value.is_finite() {
        return Err(FluidError::config(format!("{name} must be finite (got {value})")));
    }
    if !ok(value) {
        return Err(FluidError::config(format!("{name} {rule} (got {value})")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> FluidResult<StiffenedGasParams> {
        StiffenedGasParams::new(2.35, 1816.0, -1.167e6, 0.0, 1.0e9, 1.0e-3, 0.6)
    }

    #[test]
    fn cp_is_derived() {
        let p = water().unwrap();
        assert!((p.cp() - 4267.6).abs() < 1e-9);
        assert_eq!(p.gamma(), 2.35);
        assert_eq!(p.p_inf(), 1.0e9);
    }

    #[test]
    fn reject_gamma_at_or_below_one() {
        let err = StiffenedGasParams::new(1.0, 1816.0, 0.0, 0.0, 0.0, 1e-3, 0.6).unwrap_err();
        assert!(matches!(err, FluidError::InvalidConfig { ref what } if what.contains("gamma")));
        assert!(StiffenedGasParams::new(0.5, 1816.0, 0.0, 0.0, 0.0, 1e-3, 0.6).is_err());
    }

    #[test]
    fn reject_non_positive_cv() {
        assert!(StiffenedGasParams::new(1.4, 0.0, 0.0, 0.0, 0.0, 1e-3, 0.6).is_err());
        assert!(StiffenedGasParams::new(1.4, -717.0, 0.0, 0.0, 0.0, 1e-3, 0.6).is_err());
    }

    #[test]
    fn reject_negative_p_inf_and_transport() {
        assert!(StiffenedGasParams::new(1.4, 717.0, 0.0, 0.0, -1.0, 1e-3, 0.6).is_err());
        assert!(StiffenedGasParams::new(1.4, 717.0, 0.0, 0.0, 0.0, 0.0, 0.6).is_err());
        assert!(StiffenedGasParams::new(1.4, 717.0, 0.0, 0.0, 0.0, 1e-3, -0.6).is_err());
    }

    #[test]
    fn reject_non_finite() {
        let err =
            StiffenedGasParams::new(1.4, 717.0, Real::NAN, 0.0, 0.0, 1e-3, 0.6).unwrap_err();
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn ideal_gas_limit_is_valid() {
        let air = StiffenedGasParams::new(1.4, 717.5, 0.0, 0.0, 0.0, 1.8e-5, 0.026).unwrap();
        assert_eq!(air.p_inf(), 0.0);
    }
}
