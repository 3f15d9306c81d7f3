use crate::telemetry_system::record::{RunOutcome, TrajectoryRecord};

/// Flight milestones and extremes pulled from a finished run.
pub struct Telemetry {
    max_velocity: f64,
    max_altitude: f64,
    max_thrust: f64,
    events: Vec<(FlightEvent, f64)>,
    simulation_time: f64,
    sample_count: usize,
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum FlightEvent {
    Liftoff,
    Burnout,
    Apogee,
    GroundContact,
}

impl Telemetry {
    pub fn from_record(record: &TrajectoryRecord) -> Self {
        let mut telemetry = Telemetry {
            max_velocity: 0.0,
            max_altitude: 0.0,
            max_thrust: 0.0,
            events: Vec::new(),
            simulation_time: record.flight_time(),
            sample_count: record.len(),
        };

        for sample in record.samples() {
            if sample.velocity > telemetry.max_velocity {
                telemetry.max_velocity = sample.velocity;
            }
            if sample.altitude > telemetry.max_altitude {
                telemetry.max_altitude = sample.altitude;
            }
            if sample.thrust > telemetry.max_thrust {
                telemetry.max_thrust = sample.thrust;
            }
        }

        if let Some(liftoff) = record.samples().iter().find(|sample| sample.altitude > 0.0) {
            telemetry.events.push((FlightEvent::Liftoff, liftoff.time));
        }
        if let Some(burnout) = record.burnout_time() {
            telemetry.events.push((FlightEvent::Burnout, burnout));
        }
        if let Some(apogee) = record.apogee().filter(|sample| sample.altitude > 0.0) {
            telemetry.events.push((FlightEvent::Apogee, apogee.time));
        }
        if let RunOutcome::GroundContact { time, .. } = record.outcome() {
            telemetry.events.push((FlightEvent::GroundContact, time));
        }
        telemetry.events.sort_by(|a, b| a.1.total_cmp(&b.1));

        telemetry
    }

    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn events(&self) -> &[(FlightEvent, f64)] {
        &self.events
    }

    pub fn event_time(&self, event: FlightEvent) -> Option<f64> {
        self.events
            .iter()
            .find(|(recorded, _)| *recorded == event)
            .map(|(_, time)| *time)
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.3}s", minutes, seconds)
        } else {
            format!("{:.3}s", elapsed_time)
        }
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    pub fn report(&self) -> String {
        let mut report = String::new();

        report.push_str("--- Flight Summary ---\n");
        report.push_str(&format!(
            "Samples: {} over {}\n",
            self.sample_count,
            Self::format_time(self.simulation_time)
        ));
        report.push_str(&format!(
            "Max Altitude: {}\n",
            Self::format_altitude(self.max_altitude)
        ));
        report.push_str(&format!("Max Velocity: {:.2} m/s\n", self.max_velocity));
        report.push_str(&format!("Max Thrust: {:.2} N\n", self.max_thrust));

        report.push_str("\n--- Flight Events ---\n");
        for (event, time) in &self.events {
            report.push_str(&format!("{:?} at: {}\n", event, Self::format_time(*time)));
        }

        report
    }

    pub fn display_data(&self) {
        print!("{}", self.report());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::propulsion::thrust_curve::ThrustCurve;
    use crate::{control::parameters::SimulationParameters, trajectory_system::integrator::Simulation};

    fn short_hop() -> TrajectoryRecord {
        let curve = ThrustCurve::from_pairs(&[(0.0, 20.0), (0.5, 20.0), (0.6, 0.0)]).unwrap();
        let params = SimulationParameters {
            mass: 1.0,
            drag_coefficient: 0.0,
            motor_count: 1,
            total_duration: 10.0,
            time_step: 0.01,
            ..Default::default()
        };
        Simulation::new(&curve, params).unwrap().run()
    }

    #[test]
    fn test_events_in_flight_order() {
        let telemetry = Telemetry::from_record(&short_hop());

        let events: Vec<FlightEvent> = telemetry.events().iter().map(|(e, _)| *e).collect();
        assert_eq!(
            events,
            vec![
                FlightEvent::Liftoff,
                FlightEvent::Burnout,
                FlightEvent::Apogee,
                FlightEvent::GroundContact
            ]
        );
        assert!(telemetry.max_altitude() > 0.0);
        assert!(telemetry.max_velocity() > 0.0);
        assert_eq!(telemetry.event_time(FlightEvent::Liftoff), Some(0.0));
    }

    #[test]
    fn test_report_lists_summary() {
        let telemetry = Telemetry::from_record(&short_hop());
        let report = telemetry.report();

        assert!(report.contains("Max Altitude:"));
        assert!(report.contains("Apogee at:"));
        assert!(report.contains("GroundContact at:"));
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(Telemetry::format_time(1.5), "1.500s");
        assert_eq!(Telemetry::format_time(75.0), "1m 15.000s");
        assert_eq!(Telemetry::format_altitude(12.346), "12.35 m");
        assert_eq!(Telemetry::format_altitude(1500.0), "1.50 km");
    }
}
