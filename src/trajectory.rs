use nalgebra::Vector2;

use crate::constants::{FPS_TO_MPH, G_FPS2, RELEASE_HEIGHT_FT, TRAJECTORY_INTERVALS};

/// Single sample along the rendered arc
///
/// `position.x` is horizontal distance downrange and `position.y` is height,
/// both in feet.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryPoint {
    pub time_s: f64,
    pub position: Vector2<f64>,
}

/// Vacuum time of flight from release back down to release height
///
/// τ = 2·v₀·sin θ / g
pub fn time_of_flight(speed_fps: f64, angle_rad: f64) -> f64 {
    2.0 * speed_fps * angle_rad.sin() / G_FPS2
}

/// Restartable iterator over uniformly time-spaced arc samples
///
/// Drag-free kinematics from a fixed 6 ft release height. The iterator is
/// a plain value: two samplers built from the same inputs produce identical
/// sequences, and a fresh sampler restarts from the release point.
#[derive(Debug, Clone)]
pub struct ArcSampler {
    speed_fps: f64,
    angle_rad: f64,
    flight_time_s: f64,
    index: usize,
}

impl ArcSampler {
    /// Build a sampler from the estimator's output speed and launch angle
    pub fn new(velocity_mph: f64, launch_angle_deg: f64) -> Self {
        let speed_fps = velocity_mph / FPS_TO_MPH;
        let angle_rad = launch_angle_deg.to_radians();

        ArcSampler {
            speed_fps,
            angle_rad,
            flight_time_s: time_of_flight(speed_fps, angle_rad),
            index: 0,
        }
    }
}

impl Iterator for ArcSampler {
    type Item = TrajectoryPoint;

    fn next(&mut self) -> Option<TrajectoryPoint> {
        if self.index > TRAJECTORY_INTERVALS {
            return None;
        }

        let t = self.flight_time_s * self.index as f64 / TRAJECTORY_INTERVALS as f64;
        let x = self.speed_fps * self.angle_rad.cos() * t;
        let y = RELEASE_HEIGHT_FT + self.speed_fps * self.angle_rad.sin() * t
            - 0.5 * G_FPS2 * t * t;

        // Ball has hit the ground; the below-ground sample is not emitted
        if y < 0.0 {
            self.index = TRAJECTORY_INTERVALS + 1;
            return None;
        }

        self.index += 1;
        Some(TrajectoryPoint {
            time_s: t,
            position: Vector2::new(x, y),
        })
    }
}

/// Collect the full arc for a throw
///
/// The arc intentionally uses plain vacuum kinematics rather than the
/// estimator's drag/Magnus-corrected model: it exists to render a plausible
/// curve for the UI, not to be physically consistent with the corrected
/// speed. Always yields at least the release point (0, 6).
pub fn generate_trajectory(velocity_mph: f64, launch_angle_deg: f64) -> Vec<TrajectoryPoint> {
    ArcSampler::new(velocity_mph, launch_angle_deg).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_point_is_release_point() {
        let points = generate_trajectory(44.0, 45.0);
        assert!(!points.is_empty());
        assert_eq!(points[0].time_s, 0.0);
        assert_eq!(points[0].position, Vector2::new(0.0, RELEASE_HEIGHT_FT));
    }

    #[test]
    fn test_full_sample_count() {
        // Landing is computed at release height, so the arc never dips below
        // ground within the sampled window and all 51 samples survive
        let points = generate_trajectory(60.0, 40.0);
        assert_eq!(points.len(), TRAJECTORY_INTERVALS + 1);
    }

    #[test]
    fn test_heights_non_negative() {
        for &(v, a) in &[(10.0, 10.0), (44.0, 45.0), (150.0, 80.0)] {
            for point in generate_trajectory(v, a) {
                assert!(point.position.y >= 0.0, "negative height at v={v} a={a}");
            }
        }
    }

    #[test]
    fn test_distances_monotonic() {
        let points = generate_trajectory(80.0, 35.0);
        for pair in points.windows(2) {
            assert!(pair[1].position.x > pair[0].position.x);
            assert!(pair[1].time_s > pair[0].time_s);
        }
    }

    #[test]
    fn test_apex_near_midpoint() {
        let points = generate_trajectory(90.0, 45.0);
        let apex = points
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.position.y.total_cmp(&b.1.position.y))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(apex, TRAJECTORY_INTERVALS / 2);
    }

    #[test]
    fn test_zero_velocity_degenerates_to_release_point() {
        let points = generate_trajectory(0.0, 45.0);
        assert_eq!(points.len(), TRAJECTORY_INTERVALS + 1);
        for point in &points {
            assert_eq!(point.position, Vector2::new(0.0, RELEASE_HEIGHT_FT));
        }
    }

    #[test]
    fn test_sampler_restartable_and_deterministic() {
        let a: Vec<_> = ArcSampler::new(72.0, 38.0).collect();
        let b: Vec<_> = ArcSampler::new(72.0, 38.0).collect();
        assert_eq!(a, b);

        let mut sampler = ArcSampler::new(72.0, 38.0);
        sampler.next();
        sampler.next();
        let fresh: Vec<_> = ArcSampler::new(72.0, 38.0).collect();
        assert_eq!(fresh, a);
    }

    #[test]
    fn test_time_of_flight_formula() {
        let tof = time_of_flight(100.0, 30f64.to_radians());
        assert!((tof - 2.0 * 100.0 * 0.5 / G_FPS2).abs() < 1e-9);
    }
}
