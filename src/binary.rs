use tracing::{debug, trace};

use crate::astro::{barycentric_split, period};
use crate::error::{ensure_positive, OrbitError};
use crate::math::SolverSettings;
use crate::{Num, OrbitSample, OrbitalElements, PhysicalConstants, Result};

/// Two massive bodies orbiting their common barycenter, which stays at the
/// origin.
///
/// Internally this is a single relative orbit of size `a_total`; each body
/// follows it scaled by the other body's share of the total mass.
#[derive(Debug, Clone)]
pub struct TwoBodySystem {
    m1: Num,
    m2: Num,
    relative: OrbitalElements,
    period: Num,
    constants: PhysicalConstants,
    settings: SolverSettings,
    orbits: Option<[OrbitSample; 2]>,
}

impl TwoBodySystem {
    /// Builds a binary in CGS units.
    pub fn new(m1: Num, m2: Num, a_total: Num, eccentricity: Num, theta: Num) -> Result<Self> {
        Self::with_constants(
            PhysicalConstants::default(),
            m1,
            m2,
            a_total,
            eccentricity,
            theta,
        )
    }

    pub fn with_constants(
        constants: PhysicalConstants,
        m1: Num,
        m2: Num,
        a_total: Num,
        eccentricity: Num,
        theta: Num,
    ) -> Result<Self> {
        let m1 = ensure_positive("m1", m1)?;
        let m2 = ensure_positive("m2", m2)?;
        let relative = OrbitalElements::new(a_total, eccentricity, theta)?;
        let period = period(&constants, a_total, m1 + m2)?;

        Ok(Self {
            m1,
            m2,
            relative,
            period,
            constants,
            settings: SolverSettings::default(),
            orbits: None,
        })
    }

    pub fn with_solver(mut self, settings: SolverSettings) -> Self {
        self.settings = settings;
        self.orbits = None;
        self
    }

    /// Shared orbital period of both bodies
    pub fn period(&self) -> Num {
        self.period
    }

    pub fn masses(&self) -> (Num, Num) {
        (self.m1, self.m2)
    }

    pub fn total_mass(&self) -> Num {
        self.m1 + self.m2
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// The orbit of body 2 relative to body 1
    pub fn relative_orbit(&self) -> &OrbitalElements {
        &self.relative
    }

    /// `(a1, a2)` with `M1 a1 = M2 a2`
    pub fn reduced_semi_major_axes(&self) -> (Num, Num) {
        barycentric_split(self.m1, self.m2, self.relative.semi_major_axis())
    }

    /// `a1` for body 0, `a2` for body 1
    pub fn semi_major_axis(&self, body: usize) -> Result<Num> {
        let (a1, a2) = self.reduced_semi_major_axes();

        match body {
            0 => Ok(a1),
            1 => Ok(a2),
            index => Err(OrbitError::UnknownBody { index, count: 2 }),
        }
    }

    /// Samples both bodies every `dt` from `0` to `tmax` inclusive,
    /// replacing the results of any earlier call.
    pub fn integrate(&mut self, dt: Num, tmax: Num) -> Result<&[OrbitSample; 2]> {
        let times = OrbitSample::time_axis(dt, tmax)?;

        debug!(
            steps = times.len(),
            dt,
            tmax,
            period = self.period,
            "integrating binary"
        );

        // Body 1 sits opposite body 2 through the barycenter
        let total = self.total_mass();
        let f1 = -self.m2 / total;
        let f2 = self.m1 / total;

        let mut orbit1 = OrbitSample::with_capacity(times.len());
        let mut orbit2 = OrbitSample::with_capacity(times.len());

        for &time in &times {
            let relative = self
                .relative
                .state_vectors_at_epoch(self.period, time, self.settings)?;

            orbit1.push(time, &relative.scaled(f1));
            orbit2.push(time, &relative.scaled(f2));
        }

        trace!(samples = orbit1.len(), "binary integration finished");

        Ok(&*self.orbits.insert([orbit1, orbit2]))
    }

    pub fn orbit1(&self) -> Option<&OrbitSample> {
        self.orbit(0)
    }

    pub fn orbit2(&self) -> Option<&OrbitSample> {
        self.orbit(1)
    }

    /// Result of the last [`integrate`](Self::integrate) for body 0 or 1
    pub fn orbit(&self, body: usize) -> Option<&OrbitSample> {
        self.orbits.as_ref().and_then(|orbits| orbits.get(body))
    }
}
