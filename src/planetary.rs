use tracing::{debug, trace};

use crate::astro::period;
use crate::error::{ensure_positive, OrbitError};
use crate::math::SolverSettings;
use crate::{InitialPhase, Num, OrbitSample, OrbitalElements, PhysicalConstants, Result};

/// A star that stays fixed at the origin with any number of planets, each
/// orbiting it independently.
///
/// Planets don't feel each other and don't move the star.
#[derive(Debug, Clone)]
pub struct CentralBodyPlanetarySystem {
    central_mass: Num,
    constants: PhysicalConstants,
    settings: SolverSettings,
    bodies: Vec<Planet>,
    orbits: Option<Vec<OrbitSample>>,
}

#[derive(Debug, Clone, Copy)]
struct Planet {
    elements: OrbitalElements,
    period: Num,
}

impl CentralBodyPlanetarySystem {
    /// A one solar mass star in CGS units.
    pub fn new() -> Self {
        let constants = PhysicalConstants::default();

        Self {
            central_mass: constants.solar_mass,
            constants,
            settings: SolverSettings::default(),
            bodies: Vec::new(),
            orbits: None,
        }
    }

    /// A star of `central_mass` grams.
    pub fn with_central_mass(central_mass: Num) -> Result<Self> {
        Self::with_constants(PhysicalConstants::default(), central_mass)
    }

    pub fn with_constants(constants: PhysicalConstants, central_mass: Num) -> Result<Self> {
        let central_mass = ensure_positive("central_mass", central_mass)?;

        Ok(Self {
            central_mass,
            constants,
            settings: SolverSettings::default(),
            bodies: Vec::new(),
            orbits: None,
        })
    }

    pub fn with_solver(mut self, settings: SolverSettings) -> Self {
        self.settings = settings;
        self.orbits = None;
        self
    }

    pub fn central_mass(&self) -> Num {
        self.central_mass
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Adds a planet with its major axis along the observer's x axis and
    /// returns its index.
    pub fn add_body(&mut self, a: Num, e: Num, initial_phase: InitialPhase) -> Result<usize> {
        let elements = OrbitalElements::new(a, e, 0.0)?.with_initial_phase(initial_phase)?;

        self.add_body_with_elements(elements)
    }

    /// Adds a planet and returns its index, which is its insertion order.
    ///
    /// Results of an earlier [`integrate`](Self::integrate) are dropped; the
    /// system must be integrated again.
    pub fn add_body_with_elements(&mut self, elements: OrbitalElements) -> Result<usize> {
        let period = period(
            &self.constants,
            elements.semi_major_axis(),
            self.central_mass,
        )?;

        let index = self.bodies.len();
        trace!(index, period, "added body");

        self.bodies.push(Planet { elements, period });
        self.orbits = None;

        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn elements(&self, body: usize) -> Result<&OrbitalElements> {
        self.planet(body).map(|planet| &planet.elements)
    }

    /// Orbital period of planet `body`
    pub fn period(&self, body: usize) -> Result<Num> {
        self.planet(body).map(|planet| planet.period)
    }

    fn planet(&self, index: usize) -> Result<&Planet> {
        self.bodies.get(index).ok_or(OrbitError::UnknownBody {
            index,
            count: self.bodies.len(),
        })
    }

    /// Samples every planet on one shared time axis, `steps_per_year`
    /// samples per year for `num_years` years.
    ///
    /// Returns one [`OrbitSample`] per planet in insertion order.
    pub fn integrate(&mut self, steps_per_year: usize, num_years: Num) -> Result<&[OrbitSample]> {
        if steps_per_year == 0 {
            return Err(OrbitError::invalid(
                "steps_per_year",
                0.0,
                "must be at least one",
            ));
        }
        let num_years = ensure_positive("num_years", num_years)?;

        if num_years * (steps_per_year as Num) < 1.0 {
            return Err(OrbitError::invalid(
                "num_years",
                num_years,
                "shorter than one step",
            ));
        }

        let dt = self.constants.year / steps_per_year as Num;
        let times = OrbitSample::time_axis(dt, num_years * self.constants.year).map_err(|err| {
            match err {
                OrbitError::InvalidParameter {
                    name: "tmax",
                    reason,
                    ..
                } => OrbitError::invalid("num_years", num_years, reason),
                err => err,
            }
        })?;

        debug!(
            bodies = self.bodies.len(),
            steps = times.len(),
            dt,
            "integrating planetary system"
        );

        let orbits = self
            .bodies
            .iter()
            .map(|planet| {
                OrbitSample::propagate(&planet.elements, planet.period, &times, self.settings)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(self.orbits.insert(orbits).as_slice())
    }

    /// Results of the last [`integrate`](Self::integrate), if still current
    pub fn orbits(&self) -> Option<&[OrbitSample]> {
        self.orbits.as_deref()
    }

    pub fn orbit(&self, body: usize) -> Option<&OrbitSample> {
        self.orbits().and_then(|orbits| orbits.get(body))
    }
}

impl Default for CentralBodyPlanetarySystem {
    fn default() -> Self {
        Self::new()
    }
}
