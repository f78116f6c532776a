#![allow(non_snake_case)]

pub mod astro;
pub mod binary;
pub mod constants;
pub mod elements;
pub mod error;
pub mod math;
pub mod planetary;
pub mod sample;
pub mod state_vectors;

pub use binary::TwoBodySystem;
pub use constants::{PhysicalConstants, PI, TWO_PI};
pub use elements::{InitialPhase, OrbitalElements};
pub use error::{OrbitError, Result};
pub use math::SolverSettings;
pub use planetary::CentralBodyPlanetarySystem;
pub use sample::OrbitSample;
pub use state_vectors::StateVectors;

/// CGS magnitudes (AU^3 is ~1e40) do not fit in an `f32`.
pub type Num = f64;

pub type Vec2 = glam::DVec2;
pub type Mat2 = glam::DMat2;

#[inline(always)]
pub fn vec2(x: Num, y: Num) -> Vec2 {
    Vec2::new(x, y)
}
