use serde::{Deserialize, Serialize};

use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrustSample {
    pub time: f64,
    pub thrust: f64,
}

impl ThrustSample {
    pub fn new(time: f64, thrust: f64) -> Self {
        ThrustSample { time, thrust }
    }
}

/// Tabulated single-motor thrust, linearly interpolated between samples.
///
/// Outside the recorded burn window the motor produces no thrust. A curve is
/// validated once at construction and is immutable afterwards, so it can be
/// shared freely between independent runs.
#[derive(Debug, Clone, PartialEq)]
pub struct ThrustCurve {
    samples: Vec<ThrustSample>,
}

impl ThrustCurve {
    pub fn new(samples: Vec<ThrustSample>) -> Result<Self, SimulationError> {
        if samples.len() < 2 {
            return Err(SimulationError::Configuration(format!(
                "thrust curve needs at least two samples, got {}",
                samples.len()
            )));
        }

        for (index, sample) in samples.iter().enumerate() {
            if !sample.time.is_finite() || !sample.thrust.is_finite() {
                return Err(SimulationError::Configuration(format!(
                    "thrust curve sample {} is not finite: ({}, {})",
                    index, sample.time, sample.thrust
                )));
            }
            if sample.time < 0.0 || sample.thrust < 0.0 {
                return Err(SimulationError::Configuration(format!(
                    "thrust curve sample {} must not be negative: ({}, {})",
                    index, sample.time, sample.thrust
                )));
            }
        }

        if let Some(index) = samples
            .windows(2)
            .position(|pair| pair[1].time <= pair[0].time)
        {
            return Err(SimulationError::Configuration(format!(
                "thrust curve times must be strictly increasing (t[{}] = {}, t[{}] = {})",
                index,
                samples[index].time,
                index + 1,
                samples[index + 1].time
            )));
        }

        Ok(ThrustCurve { samples })
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self, SimulationError> {
        Self::new(
            pairs
                .iter()
                .map(|&(time, thrust)| ThrustSample::new(time, thrust))
                .collect(),
        )
    }

    pub fn samples(&self) -> &[ThrustSample] {
        &self.samples
    }

    pub fn start_time(&self) -> f64 {
        self.samples[0].time
    }

    pub fn end_time(&self) -> f64 {
        self.samples[self.samples.len() - 1].time
    }

    pub fn peak_thrust(&self) -> f64 {
        self.samples
            .iter()
            .map(|sample| sample.thrust)
            .fold(0.0, f64::max)
    }

    /// Area under the curve (N·s), trapezoidal between samples.
    pub fn total_impulse(&self) -> f64 {
        self.samples
            .windows(2)
            .map(|pair| {
                0.5 * (pair[0].thrust + pair[1].thrust) * (pair[1].time - pair[0].time)
            })
            .sum()
    }

    pub fn thrust_at(&self, time: f64) -> f64 {
        // Also rejects NaN.
        if !(time >= self.start_time() && time <= self.end_time()) {
            return 0.0;
        }

        let upper_index = self.samples.partition_point(|sample| sample.time < time);
        let upper = self.samples[upper_index];
        if upper.time == time {
            return upper.thrust;
        }

        let lower = self.samples[upper_index - 1];
        let fraction = (time - lower.time) / (upper.time - lower.time);
        lower.thrust + (upper.thrust - lower.thrust) * fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-12;

    fn create_test_curve() -> ThrustCurve {
        ThrustCurve::from_pairs(&[(0.0, 0.0), (0.2, 10.0), (0.5, 4.0), (1.0, 0.0)])
            .expect("valid curve")
    }

    #[test]
    fn test_exact_at_sample_times() {
        let curve = create_test_curve();
        for sample in curve.samples() {
            assert_eq!(curve.thrust_at(sample.time), sample.thrust);
        }
    }

    #[test]
    fn test_linear_between_samples() {
        let curve = create_test_curve();
        assert_relative_eq!(curve.thrust_at(0.1), 5.0, epsilon = EPSILON);
        assert_relative_eq!(curve.thrust_at(0.35), 7.0, epsilon = EPSILON);
        assert_relative_eq!(curve.thrust_at(0.75), 2.0, epsilon = EPSILON);
    }

    #[test]
    fn test_zero_outside_sampled_range() {
        let curve = ThrustCurve::from_pairs(&[(0.1, 3.0), (0.4, 6.0)]).unwrap();
        assert_eq!(curve.thrust_at(0.0), 0.0);
        assert_eq!(curve.thrust_at(0.0999), 0.0);
        assert_eq!(curve.thrust_at(0.4001), 0.0);
        assert_eq!(curve.thrust_at(100.0), 0.0);
        assert_eq!(curve.thrust_at(-1.0), 0.0);
        assert_eq!(curve.thrust_at(f64::NAN), 0.0);
    }

    #[test]
    fn test_monotonic_within_segment() {
        let curve = create_test_curve();

        let mut previous = curve.thrust_at(0.0);
        for i in 1..=200 {
            let thrust = curve.thrust_at(0.2 * i as f64 / 200.0);
            assert!(thrust >= previous);
            assert!((0.0..=10.0).contains(&thrust));
            previous = thrust;
        }

        let mut previous = curve.thrust_at(0.2);
        for i in 1..=300 {
            let thrust = curve.thrust_at(0.2 + 0.3 * i as f64 / 300.0);
            assert!(thrust <= previous);
            assert!(thrust >= 4.0 - EPSILON && thrust <= 10.0);
            previous = thrust;
        }
    }

    #[test]
    fn test_rejects_single_sample() {
        let result = ThrustCurve::from_pairs(&[(0.0, 1.0)]);
        assert!(matches!(result, Err(SimulationError::Configuration(_))));
    }

    #[test]
    fn test_rejects_non_monotonic_times() {
        let duplicate = ThrustCurve::from_pairs(&[(0.0, 0.0), (0.5, 2.0), (0.5, 3.0)]);
        assert!(matches!(duplicate, Err(SimulationError::Configuration(_))));

        let reversed = ThrustCurve::from_pairs(&[(0.0, 0.0), (0.5, 2.0), (0.3, 3.0)]);
        assert!(matches!(reversed, Err(SimulationError::Configuration(_))));
    }

    #[test]
    fn test_rejects_negative_and_non_finite_samples() {
        assert!(ThrustCurve::from_pairs(&[(-0.1, 0.0), (0.5, 2.0)]).is_err());
        assert!(ThrustCurve::from_pairs(&[(0.0, -1.0), (0.5, 2.0)]).is_err());
        assert!(ThrustCurve::from_pairs(&[(0.0, 0.0), (f64::INFINITY, 2.0)]).is_err());
    }

    #[test]
    fn test_total_impulse_and_peak() {
        let curve = create_test_curve();
        // 0.5*10*0.2 + 0.5*(10+4)*0.3 + 0.5*4*0.5
        assert_relative_eq!(curve.total_impulse(), 1.0 + 2.1 + 1.0, epsilon = EPSILON);
        assert_eq!(curve.peak_thrust(), 10.0);
        assert_eq!(curve.start_time(), 0.0);
        assert_eq!(curve.end_time(), 1.0);
    }
}
