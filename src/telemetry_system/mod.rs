pub mod record;
pub mod telemetry;
