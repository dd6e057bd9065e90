//! Liquid water reference point: p = 101325 Pa, T = 293.15 K.

use approx::assert_relative_eq;
use sg_fluids::{SinglePhaseFluid, StiffenedGasFluid, load_yaml};
use std::path::PathBuf;

fn water() -> StiffenedGasFluid {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/water.yaml");
    let cfg = load_yaml(&path).expect("water.yaml should load");
    StiffenedGasFluid::from_config(&cfg).expect("water parameters are valid")
}

const P: f64 = 101_325.0;
const T: f64 = 293.15;

#[test]
fn reference_values() {
    let fluid = water();
    let rho = fluid.rho_from_p_t(P, T).unwrap();
    let v = 1.0 / rho;
    let e = fluid.e_from_p_rho(P, rho).unwrap();

    assert_relative_eq!(rho, 1391.568186, max_relative = 3e-10);
    assert_relative_eq!(e, 83974.12646, max_relative = 5e-11);
    assert_relative_eq!(fluid.c_from_v_e(v, e).unwrap(), 1299.581998, max_relative = 2e-10);
    assert_relative_eq!(fluid.s_from_v_e(v, e).unwrap(), -26562.51808, max_relative = 5e-10);
    assert_relative_eq!(fluid.h_from_p_t(P, T).unwrap(), 84046.94, max_relative = 1e-15);

    assert_eq!(fluid.cp_from_v_e(v, e).unwrap(), 4267.6);
    assert_eq!(fluid.cv_from_v_e(v, e).unwrap(), 1816.0);
    assert_eq!(fluid.mu_from_v_e(v, e).unwrap(), 0.001);
    assert_eq!(fluid.k_from_v_e(v, e).unwrap(), 0.6);
}

#[test]
fn pressure_and_temperature_round_trip_through_v_e() {
    let fluid = water();
    let rho = fluid.rho_from_p_t(P, T).unwrap();
    let e = fluid.e_from_p_rho(P, rho).unwrap();

    assert_relative_eq!(fluid.p_from_v_e(1.0 / rho, e).unwrap(), P, max_relative = 1e-11);
    assert_relative_eq!(fluid.t_from_v_e(1.0 / rho, e).unwrap(), T, max_relative = 1e-15);
}

#[test]
fn enthalpy_agrees_between_pairs() {
    let fluid = water();
    let rho = fluid.rho_from_p_t(P, T).unwrap();
    let e = fluid.e_from_p_rho(P, rho).unwrap();
    let h_ve = fluid.h_from_v_e(1.0 / rho, e).unwrap();
    assert_relative_eq!(h_ve, fluid.h_from_p_t(P, T).unwrap(), max_relative = 1e-12);
    assert_relative_eq!(fluid.t_from_p_h(P, h_ve).unwrap(), T, max_relative = 1e-12);
    assert_relative_eq!(fluid.e_from_v_h(1.0 / rho, h_ve).unwrap(), e, max_relative = 1e-10);
}

#[test]
fn closed_form_speed_of_sound() {
    // c² = γ (p + p∞) / ρ
    let fluid = water();
    let fp = fluid.params();
    let rho = fluid.rho_from_p_t(P, T).unwrap();
    let e = fluid.e_from_p_rho(P, rho).unwrap();
    let c = fluid.c_from_v_e(1.0 / rho, e).unwrap();
    let expected = (fp.gamma() * (P + fp.p_inf()) / rho).sqrt();
    assert_relative_eq!(c, expected, max_relative = 1e-12);
}

#[test]
fn property_pack_reports_reference_state() {
    let fluid = water();
    let rho = fluid.rho_from_p_t(P, T).unwrap();
    let e = fluid.e_from_p_rho(P, rho).unwrap();
    let pack = fluid.property_pack(1.0 / rho, e).unwrap();

    assert_relative_eq!(pack.rho.value, 1391.568186, max_relative = 3e-10);
    assert_relative_eq!(pack.c.value, 1299.581998, max_relative = 2e-10);
    assert_relative_eq!(pack.s, -26562.51808, max_relative = 5e-10);
    assert_eq!(pack.k, 0.6);
}
