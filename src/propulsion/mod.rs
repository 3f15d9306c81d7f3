pub mod motors;
pub mod thrust_curve;
