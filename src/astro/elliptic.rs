use tracing::trace;

use crate::constants::{PI, TWO_PI};
use crate::error::ensure_bound_eccentricity;
use crate::math::{newton_approx, SolverSettings};
use crate::{Num, Result};

/// Above this eccentricity Newton's method is seeded at pi instead of M,
/// which keeps the first step from overshooting near periapsis.
const HIGH_ECCENTRICITY: Num = 0.8;

/// Eccentric Anomaly (E) is given by the equation:
/// M = E - e * sin(E)
/// where
/// M is the mean anomaly
/// e is the eccentricity
///
/// The mean anomaly is first wrapped into `[0, 2pi)`; the returned anomaly
/// is on the same revolution as the wrapped value, which is all the
/// position and velocity need.
///
/// https://orbital-mechanics.space/time-since-periapsis-and-keplers-equation/elliptical-orbits.html#equation-eq-keplers-equation-ellipse
pub fn estimate_anomaly(
    // Mean anomaly
    M: Num,
    // Eccentricity
    e: Num,
    settings: SolverSettings,
) -> Result<Num> {
    let e = ensure_bound_eccentricity(e)?;
    let M = M.rem_euclid(TWO_PI);

    let E0 = if e < HIGH_ECCENTRICITY { M } else { PI };

    let (E, iterations) = newton_approx(
        // f(E) = E - e*sin(E) - M
        |E| E - (e * E.sin()) - M,
        // f'(E) = 1 - e*cos(E)
        |E| 1.0 - (e * E.cos()),
        E0,
        settings,
    )?;

    trace!(M, e, E, iterations, "solved Kepler's equation");

    Ok(E)
}

/// Rate of change of the eccentric anomaly, `dE/dt = n / (1 - e cos E)`.
#[inline]
pub fn eccentric_anomaly_rate(E: Num, e: Num, mean_motion: Num) -> Num {
    mean_motion / (1.0 - e * E.cos())
}
