use std::{fs::File, io::Write, path::Path};

use serde::Serialize;

use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectorySample {
    pub time: f64,
    pub altitude: f64,
    pub velocity: f64,
    pub thrust: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunOutcome {
    /// The configured duration ran out while the vehicle was still airborne.
    Completed,
    /// Altitude dropped below zero on `step`; that sample is the last one.
    GroundContact { step: usize, time: f64 },
}

/// Time series produced by one simulation run, one sample per executed step.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryRecord {
    samples: Vec<TrajectorySample>,
    outcome: RunOutcome,
}

impl TrajectoryRecord {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        TrajectoryRecord {
            samples: Vec::with_capacity(capacity),
            outcome: RunOutcome::Completed,
        }
    }

    pub(crate) fn push(&mut self, sample: TrajectorySample) {
        self.samples.push(sample);
    }

    pub(crate) fn mark_ground_contact(&mut self, step: usize, time: f64) {
        self.outcome = RunOutcome::GroundContact { step, time };
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn outcome(&self) -> RunOutcome {
        self.outcome
    }

    pub fn landed(&self) -> bool {
        matches!(self.outcome, RunOutcome::GroundContact { .. })
    }

    pub fn apogee(&self) -> Option<TrajectorySample> {
        self.samples
            .iter()
            .copied()
            .reduce(|best, sample| if sample.altitude > best.altitude { sample } else { best })
    }

    pub fn max_velocity(&self) -> Option<TrajectorySample> {
        self.samples
            .iter()
            .copied()
            .reduce(|best, sample| if sample.velocity > best.velocity { sample } else { best })
    }

    /// Time of the last sample that still had thrust.
    pub fn burnout_time(&self) -> Option<f64> {
        self.samples
            .iter()
            .rev()
            .find(|sample| sample.thrust > 0.0)
            .map(|sample| sample.time)
    }

    pub fn flight_time(&self) -> f64 {
        self.samples.last().map_or(0.0, |sample| sample.time)
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), SimulationError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for sample in &self.samples {
            csv_writer.serialize(sample)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn write_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SimulationError> {
        let file = File::create(path)?;
        self.write_csv(file)
    }
}
