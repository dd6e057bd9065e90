use crate::error::{FluidError, FluidResult};
use crate::model::{SinglePhaseFluid, ThermoPropertyPack};
use serde::{Deserialize, Serialize};
use sg_core::Real;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPair {
    PT,
    VE,
    HS,
    PS,
    HP,
}

impl InputPair {
    pub const ALL: [InputPair; 5] = [Self::PT, Self::VE, Self::HS, Self::PS, Self::HP];

    pub fn label(self) -> &'static str {
        match self {
            Self::PT => "P-T",
            Self::VE => "v-e",
            Self::HS => "h-s",
            Self::PS => "P-s",
            Self::HP => "h-P",
        }
    }

    pub fn first_label(self) -> &'static str {
        match self {
            Self::PT | Self::PS => "Pressure [Pa]",
            Self::VE => "Specific volume [m^3/kg]",
            Self::HS | Self::HP => "Enthalpy [J/kg]",
        }
    }

    pub fn second_label(self) -> &'static str {
        match self {
            Self::PT => "Temperature [K]",
            Self::VE => "Internal energy [J/kg]",
            Self::HS | Self::PS => "Entropy [J/(kg K)]",
            Self::HP => "Pressure [Pa]",
        }
    }

    /// Parse a label such as `"PT"`, `"p-t"` or `"h-s"` (case and dashes ignored).
    pub fn parse(text: &str) -> Option<Self> {
        let key: String = text
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|pair| pair.label().replace('-', "").to_ascii_uppercase() == key)
    }
}

/// Resolve any supported input pair to (v, e) and evaluate the full property pack.
pub fn compute_state(
    model: &dyn SinglePhaseFluid,
    pair: InputPair,
    first: Real,
    second: Real,
) -> FluidResult<ThermoPropertyPack> {
    if !first.is_finite() || !second.is_finite() {
        let bad = if first.is_finite() { second } else { first };
        return Err(FluidError::Domain {
            what: "input values must be finite",
            value: bad,
        });
    }

    let (v, e) = match pair {
        InputPair::VE => (first, second),
        InputPair::PT => {
            let rho = model.rho_from_p_t(first, second)?;
            (1.0 / rho, model.e_from_p_rho(first, rho)?)
        }
        InputPair::HS => {
            let p = model.p_from_h_s(first, second)?;
            let t = model.t_from_p_h(p, first)?;
            let rho = model.rho_from_p_t(p, t)?;
            (1.0 / rho, model.e_from_p_rho(p, rho)?)
        }
        InputPair::PS => {
            let rho = model.rho_from_p_s(first, second)?;
            (1.0 / rho, model.e_from_p_rho(first, rho)?)
        }
        InputPair::HP => {
            let t = model.t_from_p_h(second, first)?;
            let rho = model.rho_from_p_t(second, t)?;
            (1.0 / rho, model.e_from_p_rho(second, rho)?)
        }
    };

    model.property_pack(v, e)
}
