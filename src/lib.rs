pub mod constants;
pub mod control;
pub mod errors;
pub mod propulsion;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::dispersion::{apogee_statistics, Dispersion, DispersionResult};
pub use control::environment::Environment;
pub use control::parameters::{FlightConfig, SimulationParameters};
pub use errors::SimulationError;

// Re-export commonly used items from propulsion
pub use propulsion::motors::MotorKind;
pub use propulsion::thrust_curve::{ThrustCurve, ThrustSample};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::integrator::Simulation;
pub use trajectory_system::kinematics::{Kinematics, StepForces};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::record::{RunOutcome, TrajectoryRecord, TrajectorySample};
pub use telemetry_system::telemetry::{FlightEvent, Telemetry};
