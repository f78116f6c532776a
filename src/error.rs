use thiserror::Error;

use crate::Num;

pub type Result<T> = std::result::Result<T, OrbitError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrbitError {
    #[error("invalid {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: Num,
        reason: &'static str,
    },

    #[error("failed to converge after {iterations} iterations (last estimate = {estimate})")]
    ConvergenceFailure { iterations: usize, estimate: Num },

    #[error("no body with index {index} (system has {count})")]
    UnknownBody { index: usize, count: usize },
}

impl OrbitError {
    pub(crate) fn invalid(name: &'static str, value: Num, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Fails unless `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: Num) -> Result<Num> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(OrbitError::invalid(name, value, "must be positive"))
    }
}

/// Only bound ellipses are modeled, so `0 <= e < 1`.
pub(crate) fn ensure_bound_eccentricity(e: Num) -> Result<Num> {
    if (0.0..1.0).contains(&e) {
        Ok(e)
    } else {
        Err(OrbitError::invalid("eccentricity", e, "must lie in [0, 1)"))
    }
}
