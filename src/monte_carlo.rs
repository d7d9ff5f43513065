use rand::thread_rng;
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;

use crate::estimator::estimate_release_speed;
use crate::sim_api::{SimulatorError, ThrowConditions};

/// Standard deviations for the perturbed throw conditions
#[derive(Debug, Clone)]
pub struct SpreadParams {
    pub num_simulations: usize,
    pub distance_std_ft: f64,
    pub angle_std_deg: f64,
    pub wind_std_mph: f64,
    pub backspin_std_rpm: f64,
    pub sidespin_std_rpm: f64,
}

impl Default for SpreadParams {
    fn default() -> Self {
        Self {
            num_simulations: 1000,
            distance_std_ft: 5.0,
            angle_std_deg: 2.0,
            wind_std_mph: 3.0,
            backspin_std_rpm: 200.0,
            sidespin_std_rpm: 150.0,
        }
    }
}

/// Raw spread simulation output
#[derive(Debug, Clone)]
pub struct SpreadResults {
    pub velocities: Vec<u32>,
    /// Perturbed angles that fell outside (0°, 90°) and produced no solution
    pub no_solution_count: usize,
}

/// Summary statistics over a spread run
#[derive(Debug, Clone)]
pub struct SpreadSummary {
    pub num_samples: usize,
    pub mean_mph: f64,
    pub std_mph: f64,
    pub min_mph: u32,
    pub max_mph: u32,
    pub no_solution_count: usize,
}

/// Run the estimator over Normal-perturbed copies of the base conditions
///
/// Shows how sensitive the required release speed is to day-to-day
/// variation in the throw: inconsistent release angle, gusting wind,
/// inconsistent spin. Sampling is sequential (one rng), the estimator
/// batch runs in parallel.
pub fn run_velocity_spread(
    base: &ThrowConditions,
    params: &SpreadParams,
) -> Result<SpreadResults, SimulatorError> {
    if params.num_simulations == 0 {
        return Err("num_simulations must be greater than 0".into());
    }

    let distance_dist = Normal::new(base.distance_ft, params.distance_std_ft)
        .map_err(|e| format!("Invalid distance distribution: {}", e))?;
    let angle_dist = Normal::new(base.launch_angle_deg, params.angle_std_deg)
        .map_err(|e| format!("Invalid angle distribution: {}", e))?;
    let wind_dist = Normal::new(base.wind_mph, params.wind_std_mph)
        .map_err(|e| format!("Invalid wind distribution: {}", e))?;
    let backspin_dist = Normal::new(base.backspin_rpm, params.backspin_std_rpm)
        .map_err(|e| format!("Invalid backspin distribution: {}", e))?;
    let sidespin_dist = Normal::new(base.sidespin_rpm, params.sidespin_std_rpm)
        .map_err(|e| format!("Invalid sidespin distribution: {}", e))?;

    let mut rng = thread_rng();
    let varied: Vec<ThrowConditions> = (0..params.num_simulations)
        .map(|_| ThrowConditions {
            distance_ft: distance_dist.sample(&mut rng).max(1.0),
            launch_angle_deg: angle_dist.sample(&mut rng),
            wind_mph: wind_dist.sample(&mut rng),
            backspin_rpm: backspin_dist.sample(&mut rng).max(0.0),
            sidespin_rpm: sidespin_dist.sample(&mut rng),
        })
        .collect();

    let estimates: Vec<Option<u32>> = varied
        .par_iter()
        .map(|conditions| estimate_release_speed(conditions).map(|b| b.mph))
        .collect();

    let velocities: Vec<u32> = estimates.iter().filter_map(|v| *v).collect();
    let no_solution_count = estimates.len() - velocities.len();

    if velocities.is_empty() {
        return Err("No successful simulations".into());
    }

    Ok(SpreadResults {
        velocities,
        no_solution_count,
    })
}

/// Reduce spread results to summary statistics
pub fn summarize_spread(results: &SpreadResults) -> Result<SpreadSummary, SimulatorError> {
    if results.velocities.is_empty() {
        return Err("No velocities to summarize".into());
    }

    let n = results.velocities.len() as f64;
    let mean_mph = results.velocities.iter().map(|&v| v as f64).sum::<f64>() / n;
    let std_mph = (results
        .velocities
        .iter()
        .map(|&v| (v as f64 - mean_mph).powi(2))
        .sum::<f64>()
        / n)
        .sqrt();

    let min_mph = *results.velocities.iter().min().ok_or("No velocities")?;
    let max_mph = *results.velocities.iter().max().ok_or("No velocities")?;

    Ok(SpreadSummary {
        num_samples: results.velocities.len(),
        mean_mph,
        std_mph,
        min_mph,
        max_mph,
        no_solution_count: results.no_solution_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spread_basic() {
        let base = ThrowConditions {
            distance_ft: 150.0,
            launch_angle_deg: 40.0,
            ..Default::default()
        };
        let params = SpreadParams {
            num_simulations: 200,
            ..Default::default()
        };

        let results = run_velocity_spread(&base, &params).unwrap();
        assert!(!results.velocities.is_empty());
        assert!(results.velocities.len() + results.no_solution_count == 200);

        let summary = summarize_spread(&results).unwrap();
        assert!(summary.mean_mph >= 10.0 && summary.mean_mph <= 150.0);
        assert!(summary.min_mph <= summary.max_mph);
        assert!(summary.std_mph >= 0.0);
    }

    #[test]
    fn test_spread_zero_variation_is_constant() {
        let base = ThrowConditions::default();
        let params = SpreadParams {
            num_simulations: 50,
            distance_std_ft: 0.0,
            angle_std_deg: 0.0,
            wind_std_mph: 0.0,
            backspin_std_rpm: 0.0,
            sidespin_std_rpm: 0.0,
        };

        let results = run_velocity_spread(&base, &params).unwrap();
        assert!(results.velocities.iter().all(|&v| v == 32));

        let summary = summarize_spread(&results).unwrap();
        assert_eq!(summary.mean_mph, 32.0);
        assert_eq!(summary.std_mph, 0.0);
    }

    #[test]
    fn test_spread_rejects_zero_simulations() {
        let params = SpreadParams {
            num_simulations: 0,
            ..Default::default()
        };
        assert!(run_velocity_spread(&ThrowConditions::default(), &params).is_err());
    }
}
