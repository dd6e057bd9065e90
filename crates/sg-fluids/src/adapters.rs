//! Variable-pair adapters.
//!
//! Values are closed-form inverses of the canonical affine relations.
//! Derivatives come from implicit differentiation: the Jacobian of the
//! canonical map `(v, e) -> (p, T)` is inverted and chained, so no adapter
//! ever finite-differences.

use crate::canonical;
use crate::derivs::ValueDerivs;
use crate::error::{FluidError, FluidResult};
use crate::model::validation;
use crate::params::StiffenedGasParams;
use nalgebra::Matrix2;
use sg_core::Real;

/// `∂(v, e)/∂(p, T)` at a canonical state: rows `(v, e)`, columns `(p, T)`.
fn inverse_pt_jacobian(fp: &StiffenedGasParams, v: Real, e: Real) -> FluidResult<Matrix2<Real>> {
    let p = canonical::p_from_v_e(fp, v, e)?;
    let t = canonical::t_from_v_e(fp, v, e)?;
    let jac = Matrix2::new(p.d_dx1, p.d_dx2, t.d_dx1, t.d_dx2);
    jac.try_inverse()
        .ok_or_else(|| FluidError::domain("singular (v, e) -> (p, T) Jacobian", jac.determinant()))
}

fn as_rows(m: &Matrix2<Real>) -> [[Real; 2]; 2] {
    [[m[(0, 0)], m[(0, 1)]], [m[(1, 0)], m[(1, 1)]]]
}

/// Closed-form density at (p, T).
fn density(fp: &StiffenedGasParams, p: Real, t: Real) -> Real {
    (p + fp.p_inf()) / ((fp.gamma() - 1.0) * fp.cv() * t)
}

/// Closed-form internal energy at (p, ρ).
fn energy(fp: &StiffenedGasParams, p: Real, rho: Real) -> Real {
    (p + fp.gamma() * fp.p_inf()) / ((fp.gamma() - 1.0) * rho) + fp.q()
}

/// Canonical state (v, e) for a validated (p, T).
fn canonical_state(fp: &StiffenedGasParams, p: Real, t: Real) -> (Real, Real, Real) {
    let rho = density(fp, p, t);
    (rho, 1.0 / rho, energy(fp, p, rho))
}

pub fn rho_from_p_t(fp: &StiffenedGasParams, p: Real, t: Real) -> FluidResult<ValueDerivs> {
    validation::validate_pt(fp, p, t)?;
    let (rho, v, e) = canonical_state(fp, p, t);
    let inv = inverse_pt_jacobian(fp, v, e)?;
    let rho2 = rho * rho;
    Ok(ValueDerivs::new(rho, -rho2 * inv[(0, 0)], -rho2 * inv[(0, 1)]))
}

pub fn v_from_p_t(fp: &StiffenedGasParams, p: Real, t: Real) -> FluidResult<ValueDerivs> {
    validation::validate_pt(fp, p, t)?;
    let (_, v, e) = canonical_state(fp, p, t);
    let inv = inverse_pt_jacobian(fp, v, e)?;
    Ok(ValueDerivs::new(v, inv[(0, 0)], inv[(0, 1)]))
}

pub fn e_from_p_t(fp: &StiffenedGasParams, p: Real, t: Real) -> FluidResult<ValueDerivs> {
    validation::validate_pt(fp, p, t)?;
    let (_, v, e) = canonical_state(fp, p, t);
    let inv = inverse_pt_jacobian(fp, v, e)?;
    Ok(ValueDerivs::new(e, inv[(1, 0)], inv[(1, 1)]))
}

/// Enthalpy `h = e + p v`; derivatives by the product rule on the
/// re-chained `e` and `v`.
pub fn h_from_p_t(fp: &StiffenedGasParams, p: Real, t: Real) -> FluidResult<ValueDerivs> {
    validation::validate_pt(fp, p, t)?;
    let (_, v, e) = canonical_state(fp, p, t);
    let inv = inverse_pt_jacobian(fp, v, e)?;
    let (v_p, v_t) = (inv[(0, 0)], inv[(0, 1)]);
    let (e_p, e_t) = (inv[(1, 0)], inv[(1, 1)]);
    let h = fp.gamma() * fp.cv() * t + fp.q();
    Ok(ValueDerivs::new(h, e_p + v + p * v_p, e_t + p * v_t))
}

pub fn s_from_p_t(fp: &StiffenedGasParams, p: Real, t: Real) -> FluidResult<ValueDerivs> {
    let pi = validation::validate_pt(fp, p, t)?;
    let (_, v, e) = canonical_state(fp, p, t);
    let inv = inverse_pt_jacobian(fp, v, e)?;
    let (s, _, _) = canonical::entropy_pi_t(fp, pi, t);
    let s_ve = canonical::s_from_v_e(fp, v, e)?;
    Ok(ValueDerivs::new(s, s_ve.d_dx1, s_ve.d_dx2).chain(as_rows(&inv)))
}

/// Internal energy at (p, ρ); derivatives from `dp = p_v dv + p_e de`.
pub fn e_from_p_rho(fp: &StiffenedGasParams, p: Real, rho: Real) -> FluidResult<ValueDerivs> {
    validation::validate_pressure(fp, p)?;
    validation::require_positive(rho, "density must be positive and finite")?;
    let e = energy(fp, p, rho);
    let pj = canonical::p_from_v_e(fp, 1.0 / rho, e)?;
    let (p_v, p_e) = pj.grad();
    Ok(ValueDerivs::new(e, 1.0 / p_e, p_v / (p_e * rho * rho)))
}

/// Temperature at (p, h): `T = (h - q)/(γ c_v)`, independent of p.
pub fn t_from_p_h(fp: &StiffenedGasParams, p: Real, h: Real) -> FluidResult<ValueDerivs> {
    validation::validate_pressure(fp, p)?;
    let t = validation::validate_enthalpy(fp, h)?;
    Ok(ValueDerivs::new(t, 0.0, 1.0 / (fp.gamma() * fp.cv())))
}

/// Internal energy at (T, v): `e = q + c_v T + p∞ v`.
pub fn e_from_t_v(fp: &StiffenedGasParams, t: Real, v: Real) -> FluidResult<ValueDerivs> {
    validation::require_positive(t, "temperature must be positive and finite")?;
    validation::require_positive(v, "specific volume must be positive and finite")?;
    Ok(ValueDerivs::new(
        fp.q() + fp.cv() * t + fp.p_inf() * v,
        fp.cv(),
        fp.p_inf(),
    ))
}

pub fn p_from_t_v(fp: &StiffenedGasParams, t: Real, v: Real) -> FluidResult<ValueDerivs> {
    let e = e_from_t_v(fp, t, v)?;
    let p = canonical::p_from_v_e(fp, v, e.value)?;
    // (v, e) in terms of (T, v)
    Ok(p.chain([[0.0, 1.0], [e.d_dx1, e.d_dx2]]))
}

/// Internal energy at (v, h), solving `h = e + p(v, e) v` (affine in e).
pub fn e_from_v_h(fp: &StiffenedGasParams, v: Real, h: Real) -> FluidResult<ValueDerivs> {
    validation::require_positive(v, "specific volume must be positive and finite")?;
    validation::require_finite(h, "enthalpy must be finite")?;
    let g = fp.gamma();
    let e = (h + (g - 1.0) * fp.q() + g * fp.p_inf() * v) / g;
    let hj = canonical::h_from_v_e(fp, v, e)?;
    let (h_v, h_e) = hj.grad();
    Ok(ValueDerivs::new(e, -h_v / h_e, 1.0 / h_e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> StiffenedGasParams {
        StiffenedGasParams::new(2.35, 1816.0, -1.167e6, 0.0, 1.0e9, 1.0e-3, 0.6).unwrap()
    }

    fn rel(a: Real, b: Real) -> Real {
        (a - b).abs() / b.abs()
    }

    #[test]
    fn chained_derivatives_match_closed_forms() {
        let fp = water();
        let (p, t) = (1.0e6, 300.0);
        let gm1cv = (fp.gamma() - 1.0) * fp.cv();

        let rho = rho_from_p_t(&fp, p, t).unwrap();
        assert!(rel(rho.d_dx1, 1.0 / (gm1cv * t)) < 1e-12);
        assert!(rel(rho.d_dx2, -(p + fp.p_inf()) / (gm1cv * t * t)) < 1e-12);

        let e = e_from_p_rho(&fp, p, rho.value).unwrap();
        assert!(rel(e.d_dx1, 1.0 / ((fp.gamma() - 1.0) * rho.value)) < 1e-12);
        let de_drho = -(p + fp.gamma() * fp.p_inf()) / ((fp.gamma() - 1.0) * rho.value.powi(2));
        assert!(rel(e.d_dx2, de_drho) < 1e-12);

        let h = h_from_p_t(&fp, p, t).unwrap();
        assert!(h.d_dx1.abs() < 1e-15);
        assert!(rel(h.d_dx2, fp.cp()) < 1e-12);
    }

    #[test]
    fn e_from_p_t_matches_e_from_t_v() {
        let fp = water();
        let (p, t) = (5.0e6, 350.0);
        let v = v_from_p_t(&fp, p, t).unwrap().value;
        let a = e_from_p_t(&fp, p, t).unwrap().value;
        let b = e_from_t_v(&fp, t, v).unwrap().value;
        assert!(rel(a, b) < 1e-12);
    }

    #[test]
    fn p_from_t_v_inverts_v_from_p_t() {
        let fp = water();
        let (p, t) = (2.0e5, 320.0);
        let v = v_from_p_t(&fp, p, t).unwrap().value;
        let back = p_from_t_v(&fp, t, v).unwrap();
        assert!((back.value - p).abs() / (p + fp.p_inf()) < 1e-13);
        // (∂p/∂T)_v = (γ-1) c_v / v for the stiffened gas
        assert!(rel(back.d_dx1, (fp.gamma() - 1.0) * fp.cv() / v) < 1e-12);
    }

    #[test]
    fn e_from_v_h_inverts_h_from_v_e() {
        let fp = water();
        let v = 1.0e-3;
        let e = fp.q() + fp.p_inf() * v + fp.cv() * 310.0;
        let h = canonical::h_from_v_e(&fp, v, e).unwrap().value;
        let back = e_from_v_h(&fp, v, h).unwrap();
        assert!(rel(back.value, e) < 1e-12);
        assert!(rel(back.d_dx1, fp.p_inf()) < 1e-9);
        assert!(rel(back.d_dx2, 1.0 / fp.gamma()) < 1e-12);
    }

    #[test]
    fn t_from_p_h_inverts_h_from_p_t() {
        let fp = water();
        let h = h_from_p_t(&fp, 1.0e5, 300.0).unwrap().value;
        let t = t_from_p_h(&fp, 1.0e5, h).unwrap();
        assert!(rel(t.value, 300.0) < 1e-12);
        assert_eq!(t.d_dx1, 0.0);
    }

    #[test]
    fn domain_errors() {
        let fp = water();
        assert!(rho_from_p_t(&fp, 1.0e5, 0.0).is_err());
        assert!(rho_from_p_t(&fp, -2.0e9, 300.0).is_err());
        assert!(e_from_p_rho(&fp, 1.0e5, 0.0).is_err());
        assert!(t_from_p_h(&fp, 1.0e5, fp.q() - 1.0).is_err());
        assert!(e_from_t_v(&fp, 300.0, -1.0).is_err());
    }
}
