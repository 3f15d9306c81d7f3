use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    errors::SimulationError,
    propulsion::thrust_curve::ThrustCurve,
    telemetry_system::record::RunOutcome,
    trajectory_system::integrator::Simulation,
};

use super::parameters::SimulationParameters;

#[derive(Debug, Clone, PartialEq)]
pub struct DispersionResult {
    pub index: usize,
    pub mass: f64,
    pub drag_coefficient: f64,
    pub apogee: f64,
    pub apogee_time: f64,
    pub outcome: RunOutcome,
}

/// Repeats a nominal flight with mass and drag coefficient drawn uniformly
/// within `±fraction` of their nominal values.
#[derive(Debug, Clone)]
pub struct Dispersion {
    pub nominal: SimulationParameters,
    pub mass_fraction: f64,
    pub drag_fraction: f64,
    pub seed: u64,
}

impl Dispersion {
    pub fn new(
        nominal: SimulationParameters,
        mass_fraction: f64,
        drag_fraction: f64,
        seed: u64,
    ) -> Self {
        Dispersion {
            nominal,
            mass_fraction,
            drag_fraction,
            seed,
        }
    }

    fn validate(&self) -> Result<(), SimulationError> {
        for (name, fraction) in [("mass", self.mass_fraction), ("drag", self.drag_fraction)] {
            if !(fraction.is_finite() && (0.0..1.0).contains(&fraction)) {
                return Err(SimulationError::Configuration(format!(
                    "{} dispersion fraction must be in [0, 1), got {}",
                    name, fraction
                )));
            }
        }
        self.nominal.validate()
    }

    pub fn run(
        &self,
        thrust_curve: &ThrustCurve,
        run_count: usize,
    ) -> Result<Vec<DispersionResult>, SimulationError> {
        self.validate()?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut results = Vec::with_capacity(run_count);

        for index in 0..run_count {
            let parameters = SimulationParameters {
                mass: self.nominal.mass * (1.0 + self.sample(&mut rng, self.mass_fraction)),
                drag_coefficient: self.nominal.drag_coefficient
                    * (1.0 + self.sample(&mut rng, self.drag_fraction)),
                ..self.nominal.clone()
            };

            let record = Simulation::new(thrust_curve, parameters.clone())?.run();
            let (apogee, apogee_time) = record
                .apogee()
                .map_or((0.0, 0.0), |sample| (sample.altitude, sample.time));

            debug!(
                "dispersion run {}: mass {:.4} kg, cd {:.4}, apogee {:.2} m",
                index, parameters.mass, parameters.drag_coefficient, apogee
            );

            results.push(DispersionResult {
                index,
                mass: parameters.mass,
                drag_coefficient: parameters.drag_coefficient,
                apogee,
                apogee_time,
                outcome: record.outcome(),
            });
        }

        Ok(results)
    }

    fn sample(&self, rng: &mut StdRng, fraction: f64) -> f64 {
        if fraction == 0.0 {
            0.0
        } else {
            rng.gen_range(-fraction..=fraction)
        }
    }
}

/// (min, mean, max) apogee across a sweep.
pub fn apogee_statistics(results: &[DispersionResult]) -> Option<(f64, f64, f64)> {
    if results.is_empty() {
        return None;
    }

    let min = results.iter().map(|r| r.apogee).fold(f64::INFINITY, f64::min);
    let max = results.iter().map(|r| r.apogee).fold(f64::NEG_INFINITY, f64::max);
    let mean = results.iter().map(|r| r.apogee).sum::<f64>() / results.len() as f64;

    Some((min, mean, max))
}
