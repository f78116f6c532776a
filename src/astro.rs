use crate::constants::{PhysicalConstants, TWO_PI};
use crate::error::ensure_positive;
use crate::{Num, Result};

pub mod elliptic;

/// https://en.wikipedia.org/wiki/Orbital_period
///
/// `P = 2 pi sqrt(a^3 / (G M))` where `M` is the total mass that the orbit
/// is taken around.
pub fn period(constants: &PhysicalConstants, a: Num, mass: Num) -> Result<Num> {
    let a = ensure_positive("semi_major_axis", a)?;
    let mass = ensure_positive("mass", mass)?;

    Ok(TWO_PI * (a.powi(3) / constants.standard_gravitational_parameter(mass)).sqrt())
}

/// https://en.wikipedia.org/wiki/Mean_motion
#[inline]
pub fn mean_motion(period: Num) -> Num {
    TWO_PI / period
}

/// Share of the separation covered by each body of a pair: `(a1, a2)` with
/// `M1 a1 = M2 a2` and `a1 + a2 = a_total`.
pub fn barycentric_split(m1: Num, m2: Num, a_total: Num) -> (Num, Num) {
    let total = m1 + m2;

    ((m2 / total) * a_total, (m1 / total) * a_total)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::{AU, M_SUN};

    #[test]
    fn doubling_mass_shortens_period_by_sqrt_two() {
        let constants = PhysicalConstants::cgs();
        let p1 = period(&constants, AU, M_SUN).unwrap();
        let p2 = period(&constants, AU, 2.0 * M_SUN).unwrap();

        assert_relative_eq!(p1 / p2, 2.0f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn doubling_axis_lengthens_period_by_two_sqrt_two() {
        let constants = PhysicalConstants::cgs();
        let p1 = period(&constants, AU, M_SUN).unwrap();
        let p2 = period(&constants, 2.0 * AU, M_SUN).unwrap();

        assert_relative_eq!(p2 / p1, 2.0 * 2.0f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        let constants = PhysicalConstants::cgs();

        assert!(period(&constants, 0.0, M_SUN).is_err());
        assert!(period(&constants, AU, -M_SUN).is_err());
    }

    #[test]
    fn split_keeps_barycenter() {
        let (a1, a2) = barycentric_split(M_SUN, 0.6 * M_SUN, 1.6 * AU);

        assert_relative_eq!(a1 + a2, 1.6 * AU);
        assert_relative_eq!(M_SUN * a1, 0.6 * M_SUN * a2, max_relative = 1e-12);
    }
}
