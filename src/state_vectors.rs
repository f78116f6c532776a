use crate::{Num, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateVectors {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl StateVectors {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    pub fn abs_diff(&self, other: &Self) -> Num {
        self.position.distance(other.position) + self.velocity.distance(other.velocity)
    }

    /// Both vectors multiplied by `factor`. A negative factor puts the body
    /// on the opposite side of the barycenter.
    pub fn scaled(&self, factor: Num) -> Self {
        Self {
            position: self.position * factor,
            velocity: self.velocity * factor,
        }
    }

    /// `h = x vy - y vx`, the z component of `r x v`
    pub fn specific_angular_momentum(&self) -> Num {
        self.position.perp_dot(self.velocity)
    }

    /// `v^2 / 2 - mu / r` about a focus with gravitational parameter `μ`
    pub fn specific_orbital_energy(&self, μ: Num) -> Num {
        self.velocity.length_squared() / 2.0 - μ / self.position.length()
    }

    /// Line-of-sight velocity for an observer far out on the +y axis.
    /// Approaching is negative.
    pub fn radial_velocity(&self) -> Num {
        -self.velocity.y
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::vec2;

    #[test]
    fn angular_momentum_of_counterclockwise_motion_is_positive() {
        let sv = StateVectors::new(vec2(2.0, 0.0), vec2(0.0, 3.0));

        assert_relative_eq!(sv.specific_angular_momentum(), 6.0);
        assert_relative_eq!(sv.scaled(-1.0).specific_angular_momentum(), 6.0);
    }

    #[test]
    fn circular_energy_is_half_the_potential() {
        // v^2 = mu / r on a circle
        let μ = 4.0;
        let sv = StateVectors::new(vec2(0.0, 4.0), vec2(-1.0, 0.0));

        assert_relative_eq!(sv.specific_orbital_energy(μ), -0.5);
    }

    #[test]
    fn moving_towards_observer_is_negative() {
        let sv = StateVectors::new(vec2(0.0, -1.0), vec2(0.0, 2.0));

        assert_relative_eq!(sv.radial_velocity(), -2.0);
    }
}
