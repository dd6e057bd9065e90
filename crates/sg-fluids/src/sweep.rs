//! Parametric property sweeps.
//!
//! A sweep holds one input of a pair fixed and varies the other over a
//! linear or logarithmic range. Points are independent, so they are
//! evaluated in parallel; a point that fails is recorded and does not abort
//! the sweep.

use crate::calculator::{InputPair, compute_state};
use crate::error::FluidError;
use crate::model::{SinglePhaseFluid, ThermoPropertyPack};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sg_core::Real;
use std::fmt;
use thiserror::Error;

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepType {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Which input of the pair is swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepAxis {
    First,
    Second,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Invalid sweep: {0}")]
    InvalidConfiguration(String),
}

/// Definition of a single parameter sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepDefinition {
    pub axis: SweepAxis,
    pub start: Real,
    pub end: Real,
    pub num_points: usize,
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    pub fn new(
        axis: SweepAxis,
        start: Real,
        end: Real,
        num_points: usize,
        sweep_type: SweepType,
    ) -> Result<Self, SweepError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(SweepError::InvalidConfiguration(
                "bounds must be finite".to_string(),
            ));
        }
        if num_points < 2 {
            return Err(SweepError::InvalidConfiguration(
                "sweep must have at least 2 points".to_string(),
            ));
        }
        if (start - end).abs() < 1e-12 {
            return Err(SweepError::InvalidConfiguration(
                "start and end values must be different".to_string(),
            ));
        }
        if sweep_type == SweepType::Logarithmic && (start <= 0.0 || end <= 0.0) {
            return Err(SweepError::InvalidConfiguration(
                "logarithmic sweep needs positive bounds".to_string(),
            ));
        }
        Ok(Self {
            axis,
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<Real> {
        if self.num_points <= 1 {
            return vec![self.start];
        }
        let n = self.num_points - 1;
        let mut points: Vec<Real> = match self.sweep_type {
            SweepType::Linear => {
                let delta = (self.end - self.start) / n as Real;
                (0..=n).map(|i| self.start + i as Real * delta).collect()
            }
            SweepType::Logarithmic => {
                let (ls, le) = (self.start.ln(), self.end.ln());
                let delta = (le - ls) / n as Real;
                (0..=n).map(|i| (ls + i as Real * delta).exp()).collect()
            }
        };
        // Ensure exact endpoint
        points[n] = self.end;
        points
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {:?} input from {} to {} ({} points, {})",
            self.axis, self.start, self.end, self.num_points, self.sweep_type
        )
    }
}

/// Result of a fluid property sweep.
#[derive(Debug, Clone)]
pub struct SweepResult {
    pub input_pair: InputPair,
    /// Independent variable values (the sweep parameter)
    pub independent_values: Vec<Real>,
    /// Computed states, `Err` for points that failed
    pub states: Vec<Result<ThermoPropertyPack, FluidError>>,
    pub num_successful: usize,
    pub num_failed: usize,
}

impl SweepResult {
    /// States that computed, paired with their sweep value.
    pub fn successful(&self) -> impl Iterator<Item = (Real, &ThermoPropertyPack)> {
        self.independent_values
            .iter()
            .zip(&self.states)
            .filter_map(|(x, s)| s.as_ref().ok().map(|state| (*x, state)))
    }

    /// Get temperature array (excluding failed points)
    pub fn temperature_k(&self) -> Vec<Real> {
        self.successful().map(|(_, s)| s.t.value).collect()
    }

    /// Get density array (excluding failed points)
    pub fn density_kg_m3(&self) -> Vec<Real> {
        self.successful().map(|(_, s)| s.rho.value).collect()
    }

    /// Get speed-of-sound array (excluding failed points)
    pub fn speed_of_sound_m_s(&self) -> Vec<Real> {
        self.successful().map(|(_, s)| s.c.value).collect()
    }
}

/// Evaluate the property pack at every point of `sweep`, holding the other
/// input of `pair` at `fixed`.
pub fn execute_sweep(
    model: &dyn SinglePhaseFluid,
    pair: InputPair,
    fixed: Real,
    sweep: &SweepDefinition,
) -> SweepResult {
    let values = sweep.generate_points();
    let states: Vec<_> = values
        .par_iter()
        .map(|&x| match sweep.axis {
            SweepAxis::First => compute_state(model, pair, x, fixed),
            SweepAxis::Second => compute_state(model, pair, fixed, x),
        })
        .collect();

    let num_failed = states.iter().filter(|s| s.is_err()).count();
    if num_failed > 0 {
        tracing::debug!(
            pair = pair.label(),
            num_failed,
            total = states.len(),
            "sweep points failed"
        );
    }

    SweepResult {
        input_pair: pair,
        independent_values: values,
        num_successful: states.len() - num_failed,
        num_failed,
        states,
    }
}
