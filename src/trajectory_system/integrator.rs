use log::{debug, info};

use crate::{
    constants::PREALLOCATED_SAMPLES,
    control::{environment::Environment, parameters::SimulationParameters},
    errors::SimulationError,
    propulsion::thrust_curve::ThrustCurve,
    telemetry_system::record::{TrajectoryRecord, TrajectorySample},
};

use super::{aerodynamics::Aerodynamics, kinematics::Kinematics};

/// One configured vertical flight.
///
/// The thrust curve is borrowed so that many runs (e.g. a dispersion sweep)
/// can share it. Every call to [`Simulation::run`] starts from rest on the
/// ground with fresh state and returns its own record.
#[derive(Debug, Clone)]
pub struct Simulation<'a> {
    thrust_curve: &'a ThrustCurve,
    parameters: SimulationParameters,
    aerodynamics: Aerodynamics,
    environment: Environment,
}

impl<'a> Simulation<'a> {
    pub fn new(
        thrust_curve: &'a ThrustCurve,
        parameters: SimulationParameters,
    ) -> Result<Self, SimulationError> {
        parameters.validate()?;

        Ok(Simulation {
            thrust_curve,
            aerodynamics: parameters.aerodynamics(),
            environment: parameters.environment(),
            parameters,
        })
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    pub fn thrust_curve(&self) -> &ThrustCurve {
        self.thrust_curve
    }

    pub fn run(&self) -> TrajectoryRecord {
        let step_count = self.parameters.step_count();
        let time_step = self.parameters.time_step;
        let mass = self.parameters.mass;
        let motor_count = f64::from(self.parameters.motor_count);

        debug!(
            "starting run: {} steps of {} s, mass {} kg, {} motor(s)",
            step_count, time_step, mass, self.parameters.motor_count
        );

        let mut kinematics = Kinematics::new();
        let mut record = TrajectoryRecord::with_capacity(step_count.min(PREALLOCATED_SAMPLES));

        for step in 0..step_count {
            let time = step as f64 * time_step;
            let thrust = self.thrust_curve.thrust_at(time) * motor_count;

            let forces = kinematics.calculate_forces(
                time,
                thrust,
                mass,
                &self.aerodynamics,
                &self.environment,
            );
            kinematics.update(forces.acceleration, time_step);

            if kinematics.is_below_ground() {
                record.push(TrajectorySample {
                    time,
                    altitude: 0.0,
                    velocity: kinematics.velocity,
                    thrust,
                });
                record.mark_ground_contact(step, time);
                info!(
                    "ground contact at t = {:.3} s after {} of {} steps",
                    time,
                    step + 1,
                    step_count
                );
                return record;
            }

            record.push(TrajectorySample {
                time,
                altitude: kinematics.altitude,
                velocity: kinematics.velocity,
                thrust,
            });
        }

        info!(
            "run completed after {} steps, final altitude {:.2} m",
            step_count, kinematics.altitude
        );
        record
    }
}
