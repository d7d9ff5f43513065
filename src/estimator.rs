use crate::constants::{
    ANGLE_PENALTY_EXPONENT, ANGLE_PENALTY_MAX_FRACTION, ANGLE_PENALTY_SCALE_DEG,
    BACKSPIN_LIFT_MAX_REDUCTION, DRAG_PENALTY_AT_REFERENCE, DRAG_REFERENCE_DISTANCE_FT,
    FPS_TO_MPH, G_FPS2, MAX_THROW_SPEED_MPH, MIN_THROW_SPEED_MPH, OPTIMAL_LAUNCH_ANGLE_DEG,
    SIDESPIN_DRAG_MAX_PENALTY,
};
use crate::sim_api::ThrowConditions;
use crate::spin::{lift_coefficient, rpm_to_rad_per_sec, spin_parameter};
use crate::wind::effective_distance;

/// Per-stage record of the correction pipeline
///
/// Each speed field holds the running estimate (ft/s) after the stage that
/// names it. Later stages consume the previous stage's value, so the stage
/// order is part of the model: the spin parameters divide by the
/// drag-corrected speed, not the raw vacuum speed.
#[derive(Debug, Clone)]
pub struct SpeedBreakdown {
    pub effective_distance_ft: f64,
    pub vacuum_fps: f64,
    pub drag_corrected_fps: f64,
    pub backspin_adjusted_fps: f64,
    pub sidespin_adjusted_fps: f64,
    pub angle_adjusted_fps: f64,
    /// Speed in mph before the [10,150] clamp and rounding
    pub unclamped_mph: f64,
    /// Final clamped, rounded release speed
    pub mph: u32,
}

/// Closed-form release speed for a drag-free projectile covering
/// `distance_ft` when launched and landing at the same height
///
/// v₀ = sqrt(d·g / sin 2θ)
pub fn vacuum_release_speed(distance_ft: f64, angle_rad: f64) -> f64 {
    (distance_ft * G_FPS2 / (2.0 * angle_rad).sin()).sqrt()
}

/// Inflate the speed for air resistance
///
/// Linear-in-distance proxy for quadratic drag integrated over the flight:
/// +25% at the 300 ft reference distance.
pub fn apply_drag_correction(speed_fps: f64, distance_ft: f64) -> f64 {
    speed_fps * (1.0 + (distance_ft / DRAG_REFERENCE_DISTANCE_FT) * DRAG_PENALTY_AT_REFERENCE)
}

/// Reduce the speed for Magnus lift from backspin
///
/// More backspin means more lift, so less release speed is needed to carry
/// the same distance. Capped at a 15% reduction.
pub fn apply_backspin_lift(speed_fps: f64, backspin_rpm: f64) -> f64 {
    let omega = rpm_to_rad_per_sec(backspin_rpm);
    let lift = lift_coefficient(spin_parameter(omega, speed_fps));
    speed_fps * (1.0 - lift * BACKSPIN_LIFT_MAX_REDUCTION)
}

/// Inflate the speed for sidespin drag
///
/// Lateral spin deflects the ball and adds drag without useful lift; the
/// sign of the spin does not matter. Capped at an 8% increase.
pub fn apply_sidespin_drag(speed_fps: f64, sidespin_rpm: f64) -> f64 {
    let omega = rpm_to_rad_per_sec(sidespin_rpm.abs());
    let s = spin_parameter(omega, speed_fps);
    speed_fps * (1.0 + s * SIDESPIN_DRAG_MAX_PENALTY)
}

/// Inflate the speed for launch angles away from the range-maximizing 42°
///
/// penalty = (|θ − 42| / 50)^1.5 × 0.2, zero at the optimum.
pub fn apply_angle_efficiency(speed_fps: f64, angle_deg: f64) -> f64 {
    let deviation = (angle_deg - OPTIMAL_LAUNCH_ANGLE_DEG).abs() / ANGLE_PENALTY_SCALE_DEG;
    let penalty = deviation.powf(ANGLE_PENALTY_EXPONENT) * ANGLE_PENALTY_MAX_FRACTION;
    speed_fps * (1.0 + penalty)
}

/// Minimum release speed required to cover the target distance
///
/// Runs the full correction pipeline over the vacuum solution. Returns
/// `None` for a non-physical launch angle (≤ 0°, ≥ 90°, or sin 2θ ≤ 0);
/// callers that want the flat sentinel form use [`estimate_velocity_mph`].
pub fn estimate_release_speed(conditions: &ThrowConditions) -> Option<SpeedBreakdown> {
    let angle_deg = conditions.launch_angle_deg;
    let angle_rad = angle_deg.to_radians();

    if angle_deg <= 0.0 || angle_deg >= 90.0 || (2.0 * angle_rad).sin() <= 0.0 {
        return None;
    }

    let effective_distance_ft = effective_distance(conditions.distance_ft, conditions.wind_mph);

    let vacuum_fps = vacuum_release_speed(effective_distance_ft, angle_rad);
    let drag_corrected_fps = apply_drag_correction(vacuum_fps, effective_distance_ft);
    let backspin_adjusted_fps = apply_backspin_lift(drag_corrected_fps, conditions.backspin_rpm);
    let sidespin_adjusted_fps = apply_sidespin_drag(backspin_adjusted_fps, conditions.sidespin_rpm);
    let angle_adjusted_fps = apply_angle_efficiency(sidespin_adjusted_fps, angle_deg);

    let unclamped_mph = angle_adjusted_fps * FPS_TO_MPH;
    let mph = unclamped_mph
        .max(MIN_THROW_SPEED_MPH)
        .min(MAX_THROW_SPEED_MPH)
        .round() as u32;

    Some(SpeedBreakdown {
        effective_distance_ft,
        vacuum_fps,
        drag_corrected_fps,
        backspin_adjusted_fps,
        sidespin_adjusted_fps,
        angle_adjusted_fps,
        unclamped_mph,
        mph,
    })
}

/// Flat entry point: integer mph in [10,150], or 0 for a non-physical angle
///
/// The 0 return is a defined "no solution" sentinel, not an error; a
/// slider-driven host treats it as a normal output.
pub fn estimate_velocity_mph(
    distance_ft: f64,
    launch_angle_deg: f64,
    wind_mph: f64,
    backspin_rpm: f64,
    sidespin_rpm: f64,
) -> u32 {
    let conditions = ThrowConditions {
        distance_ft,
        launch_angle_deg,
        wind_mph,
        backspin_rpm,
        sidespin_rpm,
    };

    match estimate_release_speed(&conditions) {
        Some(breakdown) => breakdown.mph,
        None => 0,
    }
}
