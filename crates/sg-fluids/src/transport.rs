//! Constant transport and caloric properties.
//!
//! The closure carries state-independent μ, k, c_p and c_v. They share the
//! (v, e) calling contract of the state-dependent relations, including the
//! domain check, and return zero derivatives.

use crate::derivs::ValueDerivs;
use crate::error::FluidResult;
use crate::model::validation;
use crate::params::StiffenedGasParams;
use sg_core::Real;

fn constant(fp: &StiffenedGasParams, v: Real, e: Real, value: Real) -> FluidResult<ValueDerivs> {
    validation::validate_ve(fp, v, e)?;
    Ok(ValueDerivs::constant(value))
}

pub fn mu_from_v_e(fp: &StiffenedGasParams, v: Real, e: Real) -> FluidResult<ValueDerivs> {
    constant(fp, v, e, fp.mu())
}

pub fn k_from_v_e(fp: &StiffenedGasParams, v: Real, e: Real) -> FluidResult<ValueDerivs> {
    constant(fp, v, e, fp.k())
}

pub fn cp_from_v_e(fp: &StiffenedGasParams, v: Real, e: Real) -> FluidResult<ValueDerivs> {
    constant(fp, v, e, fp.cp())
}

pub fn cv_from_v_e(fp: &StiffenedGasParams, v: Real, e: Real) -> FluidResult<ValueDerivs> {
    constant(fp, v, e, fp.cv())
}
