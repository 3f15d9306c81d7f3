use std::{fs, path::Path};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        AIR_DENSITY_REFERENCE, GRAVITY, MAX_SIMULATION_TIME, MAX_STEP_COUNT,
        ROCKET_CROSS_SECTIONAL_AREA, ROCKET_DRAG_COEFFICIENT, ROCKET_MASS, ROCKET_MOTOR_COUNT,
        TIME_STEP,
    },
    errors::SimulationError,
    propulsion::{
        motors::MotorKind,
        thrust_curve::{ThrustCurve, ThrustSample},
    },
    trajectory_system::aerodynamics::Aerodynamics,
};

use super::environment::Environment;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    pub mass: f64,
    pub drag_coefficient: f64,
    pub air_density: f64,
    pub cross_sectional_area: f64,
    pub gravitational_acceleration: f64,
    pub motor_count: u32,
    pub total_duration: f64,
    pub time_step: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            mass: ROCKET_MASS,
            drag_coefficient: ROCKET_DRAG_COEFFICIENT,
            air_density: AIR_DENSITY_REFERENCE,
            cross_sectional_area: ROCKET_CROSS_SECTIONAL_AREA,
            gravitational_acceleration: GRAVITY,
            motor_count: ROCKET_MOTOR_COUNT,
            total_duration: MAX_SIMULATION_TIME,
            time_step: TIME_STEP,
        }
    }
}

impl SimulationParameters {
    pub fn validate(&self) -> Result<(), SimulationError> {
        let strictly_positive = [
            ("mass", self.mass),
            ("cross_sectional_area", self.cross_sectional_area),
            ("gravitational_acceleration", self.gravitational_acceleration),
            ("total_duration", self.total_duration),
            ("time_step", self.time_step),
        ];
        for (name, value) in strictly_positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimulationError::Configuration(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("drag_coefficient", self.drag_coefficient),
            ("air_density", self.air_density),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SimulationError::Configuration(format!(
                    "{} must be non-negative and finite, got {}",
                    name, value
                )));
            }
        }

        if self.motor_count == 0 {
            return Err(SimulationError::Configuration(
                "motor_count must be at least 1".to_string(),
            ));
        }

        if self.time_step > self.total_duration {
            return Err(SimulationError::Configuration(format!(
                "time_step ({}) exceeds total_duration ({})",
                self.time_step, self.total_duration
            )));
        }

        let ratio = self.total_duration / self.time_step;
        if !ratio.is_finite() || ratio >= (MAX_STEP_COUNT + 1) as f64 {
            return Err(SimulationError::Configuration(format!(
                "total_duration / time_step ({} / {}) exceeds {} steps",
                self.total_duration, self.time_step, MAX_STEP_COUNT
            )));
        }

        Ok(())
    }

    /// Number of configured steps: the quotient `total_duration / time_step`
    /// truncated toward zero, so 0.3 / 0.1 (2.999...) runs 2 steps.
    pub fn step_count(&self) -> usize {
        (self.total_duration / self.time_step) as usize
    }

    pub fn aerodynamics(&self) -> Aerodynamics {
        Aerodynamics::new(self.drag_coefficient, self.cross_sectional_area)
    }

    pub fn environment(&self) -> Environment {
        Environment::new(self.air_density, self.gravitational_acceleration)
    }
}

/// A complete flight description as read from a TOML file.
///
/// ```toml
/// motor = "klima_c6"
///
/// [simulation]
/// mass = 0.625
/// time_step = 0.001
///
/// [[thrust_curve]]
/// time = 0.0
/// thrust = 0.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub motor: Option<String>,
    pub simulation: SimulationParameters,
    pub thrust_curve: Option<Vec<ThrustSample>>,
}

impl FlightConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, SimulationError> {
        let config: FlightConfig = toml::from_str(contents)?;
        config.simulation.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn motor_kind(&self) -> Result<MotorKind, SimulationError> {
        match &self.motor {
            Some(name) => name.parse(),
            None => Ok(MotorKind::default()),
        }
    }

    /// A tabulated `[[thrust_curve]]` takes precedence over the named motor.
    pub fn resolve_thrust_curve(&self) -> Result<ThrustCurve, SimulationError> {
        match &self.thrust_curve {
            Some(samples) => {
                if let Some(name) = &self.motor {
                    warn!("custom thrust curve overrides motor '{}'", name);
                }
                ThrustCurve::new(samples.clone())
            }
            None => self.motor_kind()?.thrust_curve(),
        }
    }
}
