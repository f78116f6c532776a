use crate::astro::elliptic::{eccentric_anomaly_rate, estimate_anomaly};
use crate::astro::mean_motion;
use crate::error::{ensure_bound_eccentricity, ensure_positive, OrbitError};
use crate::math::SolverSettings;
use crate::{vec2, Mat2, Num, Result, StateVectors, Vec2, PI};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where on its orbit a body sits at `t = 0`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InitialPhase {
    /// Closest approach
    #[default]
    Perihelion,
    /// Farthest point
    Aphelion,
    /// Arbitrary mean anomaly in radians
    MeanAnomaly(Num),
}

impl InitialPhase {
    pub fn mean_anomaly(&self) -> Num {
        match *self {
            InitialPhase::Perihelion => 0.0,
            InitialPhase::Aphelion => PI,
            InitialPhase::MeanAnomaly(M) => M,
        }
    }
}

/// A bound, planar Keplerian orbit seen by an observer looking down on the
/// orbital plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitalElements {
    semi_major_axis: Num,
    eccentricity: Num,
    /// Rotation of the major axis away from the observer's x axis (radians)
    orientation: Num,
    initial_phase: InitialPhase,
}

impl OrbitalElements {
    pub fn new(semi_major_axis: Num, eccentricity: Num, orientation: Num) -> Result<Self> {
        let semi_major_axis = ensure_positive("semi_major_axis", semi_major_axis)?;
        let eccentricity = ensure_bound_eccentricity(eccentricity)?;

        if !orientation.is_finite() {
            return Err(OrbitError::invalid(
                "orientation",
                orientation,
                "must be finite",
            ));
        }

        Ok(Self {
            semi_major_axis,
            eccentricity,
            orientation,
            initial_phase: InitialPhase::default(),
        })
    }

    pub fn with_initial_phase(mut self, initial_phase: InitialPhase) -> Result<Self> {
        if let InitialPhase::MeanAnomaly(M) = initial_phase {
            if !M.is_finite() {
                return Err(OrbitError::invalid(
                    "initial_phase",
                    M,
                    "must be finite",
                ));
            }
        }

        self.initial_phase = initial_phase;
        Ok(self)
    }

    pub fn semi_major_axis(&self) -> Num {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> Num {
        self.eccentricity
    }

    pub fn orientation(&self) -> Num {
        self.orientation
    }

    pub fn initial_phase(&self) -> InitialPhase {
        self.initial_phase
    }

    pub fn periapsis(&self) -> Vec2 {
        self.perifocal_to_observer(vec2(
            self.semi_major_axis * (1.0 - self.eccentricity),
            0.0,
        ))
    }

    pub fn apoapsis(&self) -> Vec2 {
        self.perifocal_to_observer(vec2(
            -self.semi_major_axis * (1.0 + self.eccentricity),
            0.0,
        ))
    }

    /// https://en.wikipedia.org/wiki/Mean_anomaly
    pub fn mean_anomaly(&self, period: Num, time: Num) -> Num {
        self.initial_phase.mean_anomaly() + mean_motion(period) * time
    }

    /// Position and velocity `time` after the epoch of the initial phase.
    ///
    /// Solves Kepler's equation for the eccentric anomaly E, then
    /// ```text
    /// x' = a (cos E - e)
    /// y' = a sqrt(1 - e^2) sin E
    /// ```
    /// in the perifocal frame. The velocity is the time derivative of the
    /// same expressions through `dE/dt = n / (1 - e cos E)`. Both are then
    /// rotated into the observer frame.
    pub fn state_vectors_at_epoch(
        &self,
        period: Num,
        time: Num,
        settings: SolverSettings,
    ) -> Result<StateVectors> {
        let a = self.semi_major_axis;
        let e = self.eccentricity;
        let n = mean_motion(period);

        let E = estimate_anomaly(self.mean_anomaly(period, time), e, settings)?;
        let E_dot = eccentric_anomaly_rate(E, e, n);

        let (sin_E, cos_E) = E.sin_cos();
        let minor = (1.0 - e.powi(2)).sqrt();

        // Perifocal x and y
        let position = vec2(a * (cos_E - e), a * minor * sin_E);

        // Perifocal velocity
        let velocity = vec2(-a * sin_E * E_dot, a * minor * cos_E * E_dot);

        Ok(StateVectors::new(
            self.perifocal_to_observer(position),
            self.perifocal_to_observer(velocity),
        ))
    }

    #[inline(always)]
    pub fn perifocal_to_observer(&self, perifocal: Vec2) -> Vec2 {
        Mat2::from_angle(self.orientation).mul_vec2(perifocal)
    }
}
