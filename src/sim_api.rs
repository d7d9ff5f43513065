// Simulator API module - high-level interface over the estimator and arc generator
use std::error::Error;
use std::fmt;

use crate::estimator::{estimate_release_speed, SpeedBreakdown};
use crate::trajectory::{generate_trajectory, time_of_flight, TrajectoryPoint};
use crate::constants::FPS_TO_MPH;

// Error type for simulator operations
#[derive(Debug)]
pub struct SimulatorError {
    message: String,
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for SimulatorError {}

impl From<String> for SimulatorError {
    fn from(msg: String) -> Self {
        SimulatorError { message: msg }
    }
}

impl From<&str> for SimulatorError {
    fn from(msg: &str) -> Self {
        SimulatorError { message: msg.to_string() }
    }
}

/// Conditions of a single throw
///
/// `wind_mph` is signed: positive is a tailwind, negative a headwind.
/// `sidespin_rpm` is signed too; only its magnitude affects the estimate.
/// Angles at or outside (0°, 90°) have no solution and produce the 0 mph
/// sentinel rather than an error.
#[derive(Debug, Clone)]
pub struct ThrowConditions {
    pub distance_ft: f64,
    pub launch_angle_deg: f64,
    pub wind_mph: f64,
    pub backspin_rpm: f64,
    pub sidespin_rpm: f64,
}

impl Default for ThrowConditions {
    fn default() -> Self {
        Self {
            distance_ft: 60.0,
            launch_angle_deg: 45.0,
            wind_mph: 0.0,
            backspin_rpm: 0.0,
            sidespin_rpm: 0.0,
        }
    }
}

/// Full result of one simulator evaluation
#[derive(Debug, Clone)]
pub struct ThrowSolution {
    /// Required release speed, 0 for a non-physical angle
    pub velocity_mph: u32,
    /// Per-stage pipeline record; `None` when there is no solution
    pub breakdown: Option<SpeedBreakdown>,
    pub points: Vec<TrajectoryPoint>,
    pub max_height_ft: f64,
    pub max_distance_ft: f64,
    pub time_of_flight_s: f64,
}

// Throw simulator: estimator feeding the arc generator
pub struct ThrowSimulator {
    conditions: ThrowConditions,
}

impl ThrowSimulator {
    pub fn new(conditions: ThrowConditions) -> Self {
        Self { conditions }
    }

    pub fn conditions(&self) -> &ThrowConditions {
        &self.conditions
    }

    /// Evaluate the throw: estimate the required speed, then re-derive the
    /// rendered arc from that speed and the launch angle
    ///
    /// Recomputes everything from scratch; there is no cached state, so the
    /// host re-invokes this on every input change.
    pub fn solve(&self) -> ThrowSolution {
        let breakdown = estimate_release_speed(&self.conditions);
        let velocity_mph = breakdown.as_ref().map(|b| b.mph).unwrap_or(0);

        let points = generate_trajectory(velocity_mph as f64, self.conditions.launch_angle_deg);

        let mut max_height_ft: f64 = 0.0;
        let mut max_distance_ft: f64 = 0.0;
        for point in &points {
            max_height_ft = max_height_ft.max(point.position.y);
            max_distance_ft = max_distance_ft.max(point.position.x);
        }

        let time_of_flight_s = time_of_flight(
            velocity_mph as f64 / FPS_TO_MPH,
            self.conditions.launch_angle_deg.to_radians(),
        );

        ThrowSolution {
            velocity_mph,
            breakdown,
            points,
            max_height_ft,
            max_distance_ft,
            time_of_flight_s,
        }
    }
}
