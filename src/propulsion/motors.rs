use std::fmt;
use std::str::FromStr;

use crate::errors::SimulationError;

use super::thrust_curve::ThrustCurve;

// Measured single-motor curves, (time s, thrust N).
const KLIMA_C6: [(f64, f64); 16] = [
    (0.0, 0.0),
    (0.046, 0.953),
    (0.168, 5.259),
    (0.235, 10.023),
    (0.291, 15.00),
    (0.418, 9.87),
    (0.505, 7.546),
    (0.582, 6.631),
    (0.679, 6.136),
    (0.786, 5.716),
    (1.26, 5.678),
    (1.357, 5.488),
    (1.423, 4.992),
    (1.469, 4.116),
    (1.618, 1.22),
    (1.701, 0.0),
];

const KLIMA_D3: [(f64, f64); 24] = [
    (0.0, 0.0),
    (0.073, 0.229),
    (0.178, 0.686),
    (0.251, 1.287),
    (0.313, 2.203),
    (0.375, 3.633),
    (0.425, 5.006),
    (0.473, 6.465),
    (0.556, 8.181),
    (0.603, 9.01),
    (0.655, 6.922),
    (0.698, 5.463),
    (0.782, 4.291),
    (0.873, 3.576),
    (1.024, 3.146),
    (1.176, 2.946),
    (5.282, 2.918),
    (5.491, 2.832),
    (5.59, 2.517),
    (5.782, 1.859),
    (5.924, 1.287),
    (6.061, 0.715),
    (6.17, 0.286),
    (6.26, 0.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotorKind {
    KlimaC6,
    #[default]
    KlimaD3,
}

impl MotorKind {
    pub const ALL: [MotorKind; 2] = [MotorKind::KlimaC6, MotorKind::KlimaD3];

    pub fn name(&self) -> &'static str {
        match self {
            MotorKind::KlimaC6 => "klima_c6",
            MotorKind::KlimaD3 => "klima_d3",
        }
    }

    pub fn thrust_curve(&self) -> Result<ThrustCurve, SimulationError> {
        match self {
            MotorKind::KlimaC6 => ThrustCurve::from_pairs(&KLIMA_C6),
            MotorKind::KlimaD3 => ThrustCurve::from_pairs(&KLIMA_D3),
        }
    }
}

impl fmt::Display for MotorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MotorKind {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "klimac6" | "c6" => Ok(MotorKind::KlimaC6),
            "klimad3" | "d3" => Ok(MotorKind::KlimaD3),
            _ => Err(SimulationError::UnknownMotor(s.to_string())),
        }
    }
}
