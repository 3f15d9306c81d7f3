use crate::control::environment::Environment;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub cross_sectional_area: f64,
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64, cross_sectional_area: f64) -> Self {
        Aerodynamics {
            drag_coefficient,
            cross_sectional_area,
        }
    }

    /// Signed quadratic drag along the vertical axis. Positive when moving up,
    /// so it is always subtracted from the net force.
    pub fn calculate_drag(&self, velocity: f64, environment: &Environment) -> f64 {
        let dynamic_pressure = self.calculate_dynamic_pressure(velocity, environment);
        let drag_magnitude = dynamic_pressure * self.cross_sectional_area * self.drag_coefficient;

        drag_magnitude * sign(velocity)
    }

    fn calculate_dynamic_pressure(&self, velocity: f64, environment: &Environment) -> f64 {
        0.5 * environment.air_density * velocity.powi(2)
    }
}

// f64::signum maps 0.0 to 1.0, drag needs 0 at rest.
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
