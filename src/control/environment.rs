use crate::constants::{AIR_DENSITY_REFERENCE, GRAVITY};

/// Uniform atmosphere and gravity field for the whole flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub air_density: f64,
    pub gravity: f64,
}

impl Environment {
    pub fn new(air_density: f64, gravity: f64) -> Self {
        Environment {
            air_density,
            gravity,
        }
    }

    pub fn weight(&self, mass: f64) -> f64 {
        mass * self.gravity
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(AIR_DENSITY_REFERENCE, GRAVITY)
    }
}
