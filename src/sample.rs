use crate::error::{ensure_positive, OrbitError};
use crate::math::SolverSettings;
use crate::{vec2, Num, OrbitalElements, Result, StateVectors, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Slack on `tmax / dt` so a horizon that is an exact multiple of the step
/// in real arithmetic isn't cut one sample short by rounding.
const STEP_ROUNDING: Num = 1e-9;

/// Upper bound on the samples one time axis may hold.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Time series of one body's trajectory.
///
/// All columns have the same length, one entry per integration step, in
/// increasing time order.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitSample {
    t: Vec<Num>,
    x: Vec<Num>,
    y: Vec<Num>,
    vx: Vec<Num>,
    vy: Vec<Num>,
}

impl OrbitSample {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            t: Vec::with_capacity(capacity),
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            vx: Vec::with_capacity(capacity),
            vy: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, time: Num, sv: &StateVectors) {
        self.t.push(time);
        self.x.push(sv.position.x);
        self.y.push(sv.position.y);
        self.vx.push(sv.velocity.x);
        self.vy.push(sv.velocity.y);
    }

    /// Sample times `0, dt, 2 dt, ...` up to and including `tmax`.
    ///
    /// Fails if that would take more than [`MAX_SAMPLES`] samples.
    pub fn time_axis(dt: Num, tmax: Num) -> Result<Vec<Num>> {
        let dt = ensure_positive("dt", dt)?;

        if !tmax.is_finite() || tmax < dt {
            return Err(OrbitError::invalid(
                "tmax",
                tmax,
                "must be at least one timestep",
            ));
        }

        let steps = (tmax / dt + STEP_ROUNDING).floor();

        if !(steps < MAX_SAMPLES as Num) {
            return Err(OrbitError::invalid(
                "tmax",
                tmax,
                "too many samples for dt",
            ));
        }

        let steps = steps as usize;

        Ok((0..=steps).map(|k| k as Num * dt).collect())
    }

    /// Runs `elements` through every time in `times`.
    pub fn propagate(
        elements: &OrbitalElements,
        period: Num,
        times: &[Num],
        settings: SolverSettings,
    ) -> Result<Self> {
        let mut sample = Self::with_capacity(times.len());

        for &time in times {
            let sv = elements.state_vectors_at_epoch(period, time, settings)?;
            sample.push(time, &sv);
        }

        Ok(sample)
    }

    /// Time in seconds (or whatever time unit the engine was built with)
    pub fn t(&self) -> &[Num] {
        &self.t
    }

    pub fn x(&self) -> &[Num] {
        &self.x
    }

    pub fn y(&self) -> &[Num] {
        &self.y
    }

    pub fn vx(&self) -> &[Num] {
        &self.vx
    }

    pub fn vy(&self) -> &[Num] {
        &self.vy
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// State at step `k`
    pub fn state(&self, k: usize) -> Option<StateVectors> {
        if k >= self.len() {
            return None;
        }

        Some(StateVectors::new(
            vec2(self.x[k], self.y[k]),
            vec2(self.vx[k], self.vy[k]),
        ))
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| vec2(x, y))
    }

    pub fn states(&self) -> impl Iterator<Item = StateVectors> + '_ {
        (0..self.len()).filter_map(|k| self.state(k))
    }

    /// See [`StateVectors::radial_velocity`]
    pub fn radial_velocity(&self) -> Vec<Num> {
        self.vy.iter().map(|vy| -vy).collect()
    }

    /// Time axis in units of `period`, for plots against `t / P`
    pub fn times_in_periods(&self, period: Num) -> Vec<Num> {
        self.t.iter().map(|t| t / period).collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use test_case::test_case;

    use super::*;
    use crate::PI;

    #[test_case(1.0, 10.0, 11 ; "whole steps")]
    #[test_case(1.0, 10.5, 11 ; "partial last step dropped")]
    #[test_case(0.1, 0.3, 4 ; "inexact ratio")]
    #[test_case(2.0, 2.0, 2 ; "single step")]
    #[test_case(1.0, 1_000_000.9995, 1_000_001 ; "long horizon just short of a step")]
    fn time_axis_length(dt: Num, tmax: Num, expected: usize) {
        let times = OrbitSample::time_axis(dt, tmax).unwrap();

        assert_eq!(times.len(), expected);
        assert_eq!(times[0], 0.0);
        assert!(times[times.len() - 1] <= tmax);
    }

    #[test]
    fn period_fraction_steps() {
        let period = 3.1557e7 * 1.37;
        let times = OrbitSample::time_axis(period / 360.0, 2.0 * period).unwrap();

        assert_eq!(times.len(), 721);
        assert_relative_eq!(times[720], 2.0 * period, max_relative = 1e-12);
    }

    #[test_case(0.0, 1.0 ; "zero dt")]
    #[test_case(-1.0, 1.0 ; "negative dt")]
    #[test_case(1.0, 0.5 ; "horizon shorter than a step")]
    #[test_case(1.0, Num::INFINITY ; "endless horizon")]
    #[test_case(1.0, 1e19 ; "more samples than fit in memory")]
    #[test_case(1.0, MAX_SAMPLES as Num ; "one sample past the cap")]
    fn time_axis_rejects(dt: Num, tmax: Num) {
        assert!(matches!(
            OrbitSample::time_axis(dt, tmax),
            Err(OrbitError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn columns_stay_aligned() {
        let orbit = OrbitalElements::new(1.0, 0.3, PI / 4.0).unwrap();
        let times = OrbitSample::time_axis(0.25, 5.0).unwrap();
        let sample =
            OrbitSample::propagate(&orbit, 2.0, &times, SolverSettings::default()).unwrap();

        assert_eq!(sample.len(), 21);
        assert_eq!(sample.t(), times.as_slice());
        for column in [sample.x(), sample.y(), sample.vx(), sample.vy()] {
            assert_eq!(column.len(), sample.len());
        }
        assert_eq!(sample.positions().count(), 21);
        assert_eq!(sample.states().count(), 21);
        assert!(sample.state(21).is_none());
        assert_eq!(sample.times_in_periods(2.0)[20], 2.5);
    }

    #[test]
    fn radial_velocity_flips_vy() {
        let orbit = OrbitalElements::new(1.0, 0.3, PI / 6.0).unwrap();
        let times = OrbitSample::time_axis(0.1, 1.0).unwrap();
        let sample =
            OrbitSample::propagate(&orbit, 1.0, &times, SolverSettings::default()).unwrap();

        for (rv, vy) in sample.radial_velocity().iter().zip(sample.vy()) {
            assert_eq!(*rv, -vy);
        }
    }
}
