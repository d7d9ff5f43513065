use std::f64::consts::PI;

use crate::constants::{BALL_RADIUS_FT, SPIN_PARAM_SPEED_EPS_FPS};

/// Convert a spin rate in revolutions per minute to radians per second
pub fn rpm_to_rad_per_sec(rpm: f64) -> f64 {
    rpm * 2.0 * PI / 60.0
}

/// Dimensionless Magnus spin parameter S = r·ω / v
///
/// Ratio of the ball's surface speed to its translational speed. The speed
/// in the denominator is regularized so a near-stationary ball does not
/// blow the parameter up.
pub fn spin_parameter(spin_rad_s: f64, speed_fps: f64) -> f64 {
    (BALL_RADIUS_FT * spin_rad_s) / (speed_fps + SPIN_PARAM_SPEED_EPS_FPS)
}

/// Magnus lift coefficient Cl = S/(1+S)
///
/// Saturating form from Nathan (2008): linear in S for small spin, tending
/// to 1 as the spin parameter grows.
pub fn lift_coefficient(spin_param: f64) -> f64 {
    spin_param / (1.0 + spin_param)
}
