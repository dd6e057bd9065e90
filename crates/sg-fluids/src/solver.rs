//! Bounded Newton/bisection root finder for positive scalar unknowns.
//!
//! Used by the inversions that are not closed-form in the requested pair.
//! The residual must be monotonic in the unknown over `(0, ∞)`; it is
//! evaluated together with its analytic derivative.

use crate::error::{FluidError, FluidResult};
use serde::{Deserialize, Serialize};
use sg_core::Real;

/// Root solver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootSolverConfig {
    /// Cap on residual evaluations in each phase (bracketing, refinement)
    pub max_iterations: usize,
    /// Convergence threshold on the normalized residual
    pub tolerance: Real,
    /// Geometric growth factor used while searching for a bracket
    pub bracket_growth: Real,
}

impl Default for RootSolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            tolerance: 1e-10,
            bracket_growth: 10.0,
        }
    }
}

impl RootSolverConfig {
    pub(crate) fn validate(&self) -> FluidResult<()> {
        if self.max_iterations == 0 {
            return Err(FluidError::config("solver.max_iterations must be >= 1"));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(FluidError::config("solver.tolerance must be positive and finite"));
        }
        if !self.bracket_growth.is_finite() || self.bracket_growth <= 1.0 {
            return Err(FluidError::config("solver.bracket_growth must be > 1"));
        }
        Ok(())
    }
}

/// A converged root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    /// Solution
    pub x: Real,
    /// Residual at the last evaluated iterate (before polishing)
    pub residual: Real,
    /// Total residual evaluations
    pub iterations: usize,
}

/// One residual evaluation: `(r, dr/dx)`.
type Eval = (Real, Real);

/// Find `x > 0` with `residual(x) = 0`.
///
/// Phase 1 walks geometrically away from `guess` (in the direction the
/// Newton step points) until the residual changes sign. Phase 2 runs Newton
/// inside the bracket, bisecting geometrically whenever a step would leave it.
/// Non-finite residuals are treated as out-of-domain.
pub fn solve_positive<F>(
    what: &'static str,
    residual: F,
    guess: Real,
    cfg: &RootSolverConfig,
) -> FluidResult<Root>
where
    F: Fn(Real) -> Eval,
{
    if !guess.is_finite() || guess <= 0.0 {
        return Err(FluidError::domain("root solver seed must be positive and finite", guess));
    }

    let mut evals = 0usize;
    let fail = |iterations: usize, residual: Real| {
        tracing::warn!(what, iterations, residual, "root solve failed");
        FluidError::ConvergenceFailed {
            what,
            iterations,
            residual,
        }
    };

    let (r0, d0) = residual(guess);
    evals += 1;
    if !r0.is_finite() || !d0.is_finite() {
        return Err(fail(evals, r0));
    }
    if r0.abs() <= cfg.tolerance {
        return Ok(polish(guess, r0, d0, None, evals));
    }

    // Phase 1: bracket.
    let upward = r0 * d0 < 0.0;
    let (mut a, mut ra) = (guess, r0);
    let (mut b, mut rb, mut db) = (guess, r0, d0);
    let mut bracketed = false;
    for _ in 0..cfg.max_iterations {
        let next = if upward {
            b * cfg.bracket_growth
        } else {
            b / cfg.bracket_growth
        };
        if !next.is_finite() || next <= 0.0 {
            break;
        }
        let (r, d) = residual(next);
        evals += 1;
        tracing::trace!(what, x = next, r, "bracket search");
        if !r.is_finite() || !d.is_finite() {
            break;
        }
        (a, ra) = (b, rb);
        (b, rb, db) = (next, r, d);
        if r.abs() <= cfg.tolerance {
            return Ok(polish(b, rb, db, Some((a.min(b), a.max(b))), evals));
        }
        if r.signum() != ra.signum() {
            bracketed = true;
            break;
        }
    }
    if !bracketed {
        return Err(fail(evals, rb));
    }

    // Phase 2: safeguarded Newton, starting from the newest end point.
    let (mut lo, mut r_lo) = if a < b { (a, ra) } else { (b, rb) };
    let mut hi = a.max(b);
    let (mut x, mut r, mut d) = (b, rb, db);
    for _ in 0..cfg.max_iterations {
        let newton = x - r / d;
        x = if d != 0.0 && newton.is_finite() && newton > lo && newton < hi {
            newton
        } else {
            (lo * hi).sqrt()
        };

        (r, d) = residual(x);
        evals += 1;
        tracing::trace!(what, x, r, "newton iterate");
        if !r.is_finite() || !d.is_finite() {
            return Err(fail(evals, r));
        }
        if r.abs() <= cfg.tolerance {
            return Ok(polish(x, r, d, Some((lo, hi)), evals));
        }

        if r.signum() == r_lo.signum() {
            (lo, r_lo) = (x, r);
        } else {
            hi = x;
        }
        if hi - lo <= Real::EPSILON * hi {
            break;
        }
    }

    Err(fail(evals, r))
}

/// Final Newton correction from a converged iterate. Newton converges
/// quadratically, so this takes the iterate to working precision.
fn polish(x: Real, r: Real, d: Real, bracket: Option<(Real, Real)>, evals: usize) -> Root {
    let step = x - r / d;
    let inside = match bracket {
        Some((lo, hi)) => step >= lo && step <= hi,
        None => true,
    };
    let x = if d != 0.0 && step.is_finite() && step > 0.0 && inside {
        step
    } else {
        x
    };
    tracing::debug!(x, residual = r, iterations = evals, "root converged");
    Root {
        x,
        residual: r,
        iterations: evals,
    }
}
