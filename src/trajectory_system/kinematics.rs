use crate::{constants::EARLY_ASCENT_CLAMP_TIME, control::environment::Environment};

use super::aerodynamics::Aerodynamics;

/// Forces acting on the vehicle during one step, all in newtons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepForces {
    pub thrust: f64,
    pub drag: f64,
    pub weight: f64,
    pub net_force: f64,
    pub acceleration: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kinematics {
    pub velocity: f64,
    pub altitude: f64,
}

impl Kinematics {
    pub fn new() -> Self {
        Kinematics::default()
    }

    /// Evaluates the force balance at `time` for the current velocity.
    ///
    /// A deceleration computed before [`EARLY_ASCENT_CLAMP_TIME`] is replaced
    /// by zero: while the motor is still spooling up the vehicle sits on the
    /// pad instead of sinking into it.
    pub fn calculate_forces(
        &self,
        time: f64,
        thrust: f64,
        mass: f64,
        aerodynamics: &Aerodynamics,
        environment: &Environment,
    ) -> StepForces {
        let weight = environment.weight(mass);
        let drag = aerodynamics.calculate_drag(self.velocity, environment);

        let net_force = thrust - drag - weight;
        let mut acceleration = net_force / mass;

        if acceleration < 0.0 && time < EARLY_ASCENT_CLAMP_TIME {
            acceleration = 0.0;
        }

        StepForces {
            thrust,
            drag,
            weight,
            net_force,
            acceleration,
        }
    }

    /// Fixed-step Euler update. Velocity goes first; altitude then advances
    /// with the velocity already updated this step.
    pub fn update(&mut self, acceleration: f64, delta_time: f64) {
        self.velocity += acceleration * delta_time;
        self.altitude += self.velocity * delta_time;
    }

    pub fn is_below_ground(&self) -> bool {
        self.altitude < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-12;

    fn still_air() -> (Aerodynamics, Environment) {
        (Aerodynamics::new(0.0, 0.01), Environment::new(1.2, 9.81))
    }

    #[test]
    fn test_starts_at_rest_on_ground() {
        let kinematics = Kinematics::new();
        assert_eq!(kinematics.velocity, 0.0);
        assert_eq!(kinematics.altitude, 0.0);
        assert!(!kinematics.is_below_ground());
    }

    #[test]
    fn test_net_force_balance() {
        let aero = Aerodynamics::new(0.5, 2.0);
        let environment = Environment::new(1.2, 10.0);
        let kinematics = Kinematics {
            velocity: 10.0,
            altitude: 50.0,
        };

        let forces = kinematics.calculate_forces(2.0, 100.0, 1.0, &aero, &environment);

        assert_relative_eq!(forces.drag, 60.0, epsilon = EPSILON);
        assert_relative_eq!(forces.weight, 10.0, epsilon = EPSILON);
        assert_relative_eq!(forces.net_force, 30.0, epsilon = EPSILON);
        assert_relative_eq!(forces.acceleration, 30.0, epsilon = EPSILON);
    }

    #[test]
    fn test_early_ascent_clamp() {
        let (aero, environment) = still_air();
        let kinematics = Kinematics::new();

        // 1 N of thrust cannot lift 1 kg
        for time in [0.0, 0.25, 0.5, 0.999] {
            let forces = kinematics.calculate_forces(time, 1.0, 1.0, &aero, &environment);
            assert!(forces.net_force < 0.0);
            assert_eq!(forces.acceleration, 0.0);
        }
    }

    #[test]
    fn test_clamp_releases_after_one_second() {
        let (aero, environment) = still_air();
        let kinematics = Kinematics::new();

        let forces = kinematics.calculate_forces(1.0, 1.0, 1.0, &aero, &environment);

        assert_relative_eq!(forces.acceleration, -8.81, epsilon = EPSILON);
    }

    #[test]
    fn test_clamp_leaves_positive_acceleration() {
        let (aero, environment) = still_air();
        let kinematics = Kinematics::new();

        let forces = kinematics.calculate_forces(0.5, 20.0, 1.0, &aero, &environment);

        assert_relative_eq!(forces.acceleration, 10.19, epsilon = EPSILON);
    }

    #[test]
    fn test_update_uses_new_velocity_for_altitude() {
        let mut kinematics = Kinematics {
            velocity: 2.0,
            altitude: 10.0,
        };

        kinematics.update(5.0, 0.1);

        assert_relative_eq!(kinematics.velocity, 2.5, epsilon = EPSILON);
        assert_relative_eq!(kinematics.altitude, 10.25, epsilon = EPSILON);
    }

    #[test]
    fn test_below_ground() {
        let mut kinematics = Kinematics {
            velocity: -1.0,
            altitude: 0.05,
        };

        kinematics.update(0.0, 0.1);

        assert!(kinematics.is_below_ground());
    }
}
