use crate::error::{ensure_positive, OrbitError};
use crate::{Num, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Convergence controls for [`newton_approx`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverSettings {
    /// Maximum difference between successive estimates that counts as converged
    pub tolerance: Num,
    pub max_iterations: usize,
}

impl SolverSettings {
    pub const DEFAULT_TOLERANCE: Num = 1e-10;
    pub const DEFAULT_MAX_ITERATIONS: usize = 100;

    pub fn new(tolerance: Num, max_iterations: usize) -> Result<Self> {
        let tolerance = ensure_positive("tolerance", tolerance)?;

        if max_iterations == 0 {
            return Err(OrbitError::invalid(
                "max_iterations",
                0.0,
                "must allow at least one iteration",
            ));
        }

        Ok(Self {
            tolerance,
            max_iterations,
        })
    }
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Approximates the root of a function using the Newton-Raphson method.
///
/// # Arguments
/// f - The function to approximate the root of.
/// f_prime - The derivative of the function.
/// x0 - The initial guess.
/// settings - The maximum error allowed and the iteration cap.
///
/// # Returns
/// The approximate root together with the number of iterations it took,
/// or [`OrbitError::ConvergenceFailure`] if the cap is reached or an
/// estimate stops being finite.
pub fn newton_approx(
    f: impl Fn(Num) -> Num,
    f_prime: impl Fn(Num) -> Num,
    x0: Num,
    settings: SolverSettings,
) -> Result<(Num, usize)> {
    let mut x = x0;

    for iteration in 1..=settings.max_iterations {
        let x_next = x - f(x) / f_prime(x);

        if !x_next.is_finite() {
            return Err(OrbitError::ConvergenceFailure {
                iterations: iteration,
                estimate: x_next,
            });
        }

        let error = (x_next - x).abs();

        if error < settings.tolerance {
            return Ok((x_next, iteration));
        }

        x = x_next;
    }

    Err(OrbitError::ConvergenceFailure {
        iterations: settings.max_iterations,
        estimate: x,
    })
}
