pub mod dispersion;
pub mod environment;
pub mod parameters;
