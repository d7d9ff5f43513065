//! # Throw Simulator
//!
//! Throw-velocity estimation and trajectory engine for baseball throwing training.
//!
//! Two pure computations form the core: an estimator that derives the minimum
//! release speed needed to cover a target distance under wind and spin, and an
//! arc generator that renders the resulting flight path for display.

// Re-export the main types and functions
pub use estimator::{estimate_release_speed, estimate_velocity_mph, SpeedBreakdown};
pub use sim_api::{SimulatorError, ThrowConditions, ThrowSimulator, ThrowSolution};
pub use trajectory::{generate_trajectory, ArcSampler, TrajectoryPoint};
pub use monte_carlo::{
    run_velocity_spread, summarize_spread, SpreadParams, SpreadResults, SpreadSummary,
};

// Module declarations
pub mod constants;
pub mod estimator;
pub mod monte_carlo;
pub mod sim_api;
pub mod spin;
pub mod trajectory;
pub mod wind;
