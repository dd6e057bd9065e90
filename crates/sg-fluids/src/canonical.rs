//! Canonical relations in the natural pair (specific volume v, specific
//! internal energy e).
//!
//! ```text
//! p(v, e) = (γ-1)(e-q)/v - γ p∞
//! T(v, e) = (e - q - p∞ v)/c_v
//! s(v, e) = c_v [γ ln T - (γ-1) ln(p + p∞)] + q'
//! ```
//!
//! Every other pair in the crate is derived from these.

use crate::derivs::ValueDerivs;
use crate::error::FluidResult;
use crate::model::validation;
use crate::params::StiffenedGasParams;
use sg_core::Real;

/// Pressure and its first and second partials at (v, e). `p_ee` is zero.
#[derive(Debug, Clone, Copy)]
struct PressureJet {
    p: Real,
    p_v: Real,
    p_e: Real,
    p_vv: Real,
    p_ve: Real,
}

fn pressure_jet(fp: &StiffenedGasParams, v: Real, e: Real) -> PressureJet {
    let gm1 = fp.gamma() - 1.0;
    let de = e - fp.q();
    PressureJet {
        p: gm1 * de / v - fp.gamma() * fp.p_inf(),
        p_v: -gm1 * de / v / v,
        p_e: gm1 / v,
        p_vv: 2.0 * gm1 * de / (v * v * v),
        p_ve: -gm1 / (v * v),
    }
}

/// Temperature without domain checks.
pub(crate) fn temperature(fp: &StiffenedGasParams, v: Real, e: Real) -> Real {
    (1.0 / fp.cv()) * (e - fp.q() - fp.p_inf() * v)
}

/// Entropy as a function of stiffened pressure π = p + p∞ and temperature.
///
/// Returns `(s, ∂s/∂π|T, ∂s/∂T|π)`. Callers guarantee `π > 0`, `T > 0`.
///
/// Evaluated as `γ c_v ln(T / π^((γ-1)/γ))`: one logarithm of a modest
/// ratio instead of the difference of two large ones.
pub(crate) fn entropy_pi_t(fp: &StiffenedGasParams, pi: Real, t: Real) -> (Real, Real, Real) {
    let g = fp.gamma();
    let cv = fp.cv();
    let s = g * cv * (t / pi.powf((g - 1.0) / g)).ln() + fp.q_prime();
    (s, -cv * (g - 1.0) / pi, cv * g / t)
}

pub fn p_from_v_e(fp: &StiffenedGasParams, v: Real, e: Real) -> FluidResult<ValueDerivs> {
    validation::validate_ve(fp, v, e)?;
    let j = pressure_jet(fp, v, e);
    Ok(ValueDerivs::new(j.p, j.p_v, j.p_e))
}

pub fn t_from_v_e(fp: &StiffenedGasParams, v: Real, e: Real) -> FluidResult<ValueDerivs> {
    let t = validation::validate_ve(fp, v, e)?;
    Ok(ValueDerivs::new(t, -fp.p_inf() / fp.cv(), 1.0 / fp.cv()))
}

/// Isentropic speed of sound from `c² = -v² (∂p/∂v)_s = v² (p ∂p/∂e - ∂p/∂v)`.
pub fn c_from_v_e(fp: &StiffenedGasParams, v: Real, e: Real) -> FluidResult<ValueDerivs> {
    validation::validate_ve(fp, v, e)?;
    let j = pressure_jet(fp, v, e);

    let w = j.p * j.p_e - j.p_v;
    let w_v = j.p_v * j.p_e + j.p * j.p_ve - j.p_vv;
    let w_e = j.p_e * j.p_e - j.p_ve;

    let c2 = v * v * w;
    if !(c2 > 0.0) {
        return Err(crate::error::FluidError::domain(
            "squared speed of sound must be positive",
            c2,
        ));
    }
    let c = c2.sqrt();
    let dc2_dv = 2.0 * v * w + v * v * w_v;
    let dc2_de = v * v * w_e;
    Ok(ValueDerivs::new(c, 0.5 * dc2_dv / c, 0.5 * dc2_de / c))
}

/// Entropy with derivatives from the Gibbs relation `T ds = de + p dv`.
pub fn s_from_v_e(fp: &StiffenedGasParams, v: Real, e: Real) -> FluidResult<ValueDerivs> {
    let t = validation::validate_ve(fp, v, e)?;
    let p = pressure_jet(fp, v, e).p;
    let (s, _, _) = entropy_pi_t(fp, p + fp.p_inf(), t);
    Ok(ValueDerivs::new(s, p / t, 1.0 / t))
}

/// Specific enthalpy `h = e + p v`.
pub fn h_from_v_e(fp: &StiffenedGasParams, v: Real, e: Real) -> FluidResult<ValueDerivs> {
    validation::validate_ve(fp, v, e)?;
    let j = pressure_jet(fp, v, e);
    Ok(ValueDerivs::new(
        e + j.p * v,
        j.p + v * j.p_v,
        1.0 + v * j.p_e,
    ))
}

/// Specific Gibbs free energy `g = h - T s`.
pub fn g_from_v_e(fp: &StiffenedGasParams, v: Real, e: Real) -> FluidResult<ValueDerivs> {
    let h = h_from_v_e(fp, v, e)?;
    let t = t_from_v_e(fp, v, e)?;
    let s = s_from_v_e(fp, v, e)?;
    Ok(ValueDerivs::new(
        h.value - t.value * s.value,
        h.d_dx1 - (t.d_dx1 * s.value + t.value * s.d_dx1),
        h.d_dx2 - (t.d_dx2 * s.value + t.value * s.d_dx2),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FluidError;

    fn water() -> StiffenedGasParams {
        StiffenedGasParams::new(2.35, 1816.0, -1.167e6, 0.0, 1.0e9, 1.0e-3, 0.6).unwrap()
    }

    // v = 1e-3 m3/kg with T ~ 300 K
    fn point(fp: &StiffenedGasParams) -> (Real, Real) {
        let v = 1.0e-3;
        let e = fp.q() + fp.cv() * 300.0 + fp.p_inf() * v;
        (v, e)
    }

    #[test]
    fn temperature_recovers_construction() {
        let fp = water();
        let (v, e) = point(&fp);
        let t = t_from_v_e(&fp, v, e).unwrap();
        assert!((t.value - 300.0).abs() < 1e-9);
    }

    #[test]
    fn speed_of_sound_matches_closed_form() {
        let fp = water();
        let (v, e) = point(&fp);
        let c = c_from_v_e(&fp, v, e).unwrap();
        let g = fp.gamma();
        let expected = (g * (g - 1.0) * fp.cv() * 300.0).sqrt();
        assert!((c.value - expected).abs() / expected < 1e-12);

        // c² = γ(γ-1)(e - q - p∞ v): dc/de = γ(γ-1)/(2c), dc/dv = -γ(γ-1)p∞/(2c)
        let k = g * (g - 1.0) / (2.0 * c.value);
        assert!((c.d_dx2 - k).abs() / k < 1e-10);
        assert!((c.d_dx1 + k * fp.p_inf()).abs() / (k * fp.p_inf()) < 1e-10);
    }

    #[test]
    fn gibbs_relation_derivatives() {
        let fp = water();
        let (v, e) = point(&fp);
        let s = s_from_v_e(&fp, v, e).unwrap();
        let p = p_from_v_e(&fp, v, e).unwrap().value;
        let t = t_from_v_e(&fp, v, e).unwrap().value;
        assert_eq!(s.d_dx1, p / t);
        assert_eq!(s.d_dx2, 1.0 / t);
    }

    #[test]
    fn enthalpy_and_gibbs_are_consistent() {
        let fp = water();
        let (v, e) = point(&fp);
        let h = h_from_v_e(&fp, v, e).unwrap();
        let p = p_from_v_e(&fp, v, e).unwrap().value;
        assert!((h.value - (e + p * v)).abs() < 1e-9);

        // dg = -s dT + v dp
        let g = g_from_v_e(&fp, v, e).unwrap();
        let s = s_from_v_e(&fp, v, e).unwrap().value;
        let t = t_from_v_e(&fp, v, e).unwrap();
        let pj = p_from_v_e(&fp, v, e).unwrap();
        let dg_de = -s * t.d_dx2 + v * pj.d_dx2;
        assert!((g.d_dx2 - dg_de).abs() / dg_de.abs() < 1e-9);
    }

    #[test]
    fn entropy_partials_in_pi_t() {
        let fp = water();
        let (s, ds_dpi, ds_dt) = entropy_pi_t(&fp, 1.0e9, 300.0);
        assert!(s.is_finite());
        assert!(ds_dpi < 0.0);
        assert!(ds_dt > 0.0);
    }

    #[test]
    fn entropy_agrees_with_two_log_form_and_stays_finite() {
        let fp = water();
        let (g, cv) = (fp.gamma(), fp.cv());
        for (pi, t) in [(1.0e9, 300.0), (1.0e5, 1.0e4), (1.0e300, 300.0)] {
            let (s, _, _) = entropy_pi_t(&fp, pi, t);
            let two_logs = cv * (g * t.ln() - (g - 1.0) * pi.ln());
            assert!(s.is_finite(), "pi={pi}, T={t}");
            assert!((s - two_logs).abs() <= 1e-12 * two_logs.abs(), "{s} vs {two_logs}");
        }
    }

    #[test]
    fn rejects_non_positive_volume() {
        let fp = water();
        let err = p_from_v_e(&fp, 0.0, 1.0e5).unwrap_err();
        assert!(matches!(err, FluidError::Domain { .. }));
        assert!(s_from_v_e(&fp, -1e-3, 1.0e5).is_err());
    }

    #[test]
    fn rejects_non_positive_temperature() {
        let fp = water();
        let v = 1.0e-3;
        // e below q + p∞ v gives T < 0
        let e = fp.q() + fp.p_inf() * v - 1.0;
        let err = c_from_v_e(&fp, v, e).unwrap_err();
        assert!(matches!(err, FluidError::Domain { .. }));
        assert!(t_from_v_e(&fp, v, Real::NAN).is_err());
    }
}
