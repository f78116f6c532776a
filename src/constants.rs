use crate::Num;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use std::f64::consts::PI;

pub const TWO_PI: Num = 2.0 * PI;

/// Gravitational constant in cm^3 g^-1 s^-2
pub const G: Num = 6.67428e-8;

/// Solar mass in g
pub const M_SUN: Num = 1.98892e33;

/// Astronomical unit in cm
pub const AU: Num = 1.49598e13;

/// Year in s
pub const YEAR: Num = 3.1557e7;

/// The unit system an engine computes in.
///
/// Every engine holds its own copy, so two systems built with different
/// units never influence each other.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhysicalConstants {
    pub g: Num,
    pub solar_mass: Num,
    pub au: Num,
    pub year: Num,
}

impl PhysicalConstants {
    pub const fn cgs() -> Self {
        Self {
            g: G,
            solar_mass: M_SUN,
            au: AU,
            year: YEAR,
        }
    }

    /// AU, years and solar masses, which makes `G = 4 pi^2`.
    pub const fn astronomical() -> Self {
        Self {
            g: 4.0 * PI * PI,
            solar_mass: 1.0,
            au: 1.0,
            year: 1.0,
        }
    }

    /// https://en.wikipedia.org/wiki/Standard_gravitational_parameter
    #[inline]
    pub fn standard_gravitational_parameter(&self, mass: Num) -> Num {
        self.g * mass
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::cgs()
    }
}
