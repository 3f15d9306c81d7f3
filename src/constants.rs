// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const AIR_DENSITY_REFERENCE: f64 = 1.17; // kg/m³

// Rocket Constants
pub const ROCKET_MASS: f64 = 0.625; // kg
pub const ROCKET_DRAG_COEFFICIENT: f64 = 1.5;
pub const ROCKET_BODY_RADIUS: f64 = 0.033; // m
pub const ROCKET_CROSS_SECTIONAL_AREA: f64 =
    ROCKET_BODY_RADIUS * ROCKET_BODY_RADIUS * 3.1415; // m²
pub const ROCKET_MOTOR_COUNT: u32 = 2;

// Simulation Parameters
pub const TIME_STEP: f64 = 0.001; // s
pub const MAX_SIMULATION_TIME: f64 = 7.0; // s
pub const MAX_STEP_COUNT: usize = 10_000_000;
// Records start this large and grow on demand.
pub const PREALLOCATED_SAMPLES: usize = 65_536;

// Negative acceleration is ignored before this time while the motor spools up.
pub const EARLY_ASCENT_CLAMP_TIME: f64 = 1.0; // s
