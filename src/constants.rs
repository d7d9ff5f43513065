/// Physical constants and empirical correction factors for throw simulation

/// Gravitational acceleration in ft/s²
pub const G_FPS2: f64 = 32.174;

/// Conversion factor: feet per second to miles per hour
pub const FPS_TO_MPH: f64 = 0.681818;

/// Baseball radius in feet
///
/// Regulation circumference is 9.00-9.25 inches, giving a radius of
/// roughly 1.45 inches (0.121 ft). Used in the Magnus spin parameter
/// S = r·ω / v.
pub const BALL_RADIUS_FT: f64 = 0.121;

/// Horizontal carry gained or lost per mph of wind, in feet
///
/// Empirical: a tailwind adds roughly 2 ft of carry per mph over a long
/// throw, a headwind removes the same. Applied to the target distance
/// before the vacuum solution, so a tailwind shortens the required throw.
pub const WIND_CARRY_FT_PER_MPH: f64 = 2.0;

/// Floor for the wind-adjusted distance (feet)
///
/// A strong tailwind over a short throw can push the adjusted distance to
/// zero or below; the floor keeps the vacuum solution well-defined.
pub const MIN_EFFECTIVE_DISTANCE_FT: f64 = 5.0;

/// Reference distance for the linear drag proxy (feet)
pub const DRAG_REFERENCE_DISTANCE_FT: f64 = 300.0;

/// Drag penalty accrued at the reference distance (fraction of speed)
///
/// Integrating quadratic air resistance over a full flight is overkill for
/// a live-updating estimate; a linear-in-distance penalty calibrated at
/// 300 ft (Cd ≈ 0.4, ρ = 0.074 lb/ft³, ball area ≈ 0.046 ft²) reproduces
/// the required-speed inflation to within a few percent.
///
/// Sources: Adair, "The Physics of Baseball" (2002); Nathan (2008).
pub const DRAG_PENALTY_AT_REFERENCE: f64 = 0.25;

/// Regularization added to speed before dividing in the spin parameter (ft/s)
pub const SPIN_PARAM_SPEED_EPS_FPS: f64 = 0.1;

/// Maximum speed reduction from backspin lift (fraction)
///
/// Backspin generates lift via the Magnus effect, so a spinning ball needs
/// less release speed to cover the same distance. Scaled by the lift
/// coefficient Cl = S/(1+S) from Nathan (2008).
pub const BACKSPIN_LIFT_MAX_REDUCTION: f64 = 0.15;

/// Maximum speed penalty from sidespin (fraction)
///
/// Sidespin deflects the ball laterally and adds drag without producing
/// useful lift, so it only ever increases the required speed. Scaled by
/// the spin parameter of the absolute sidespin rate.
pub const SIDESPIN_DRAG_MAX_PENALTY: f64 = 0.08;

/// Range-maximizing launch angle under light drag (degrees)
///
/// The vacuum optimum is 45°; drag pulls it down to roughly 42° for a
/// thrown baseball.
pub const OPTIMAL_LAUNCH_ANGLE_DEG: f64 = 42.0;

/// Divisor applied to the angle deviation in the efficiency penalty (degrees)
pub const ANGLE_PENALTY_SCALE_DEG: f64 = 50.0;

/// Exponent applied to the normalized angle deviation
pub const ANGLE_PENALTY_EXPONENT: f64 = 1.5;

/// Efficiency penalty at a full-scale angle deviation (fraction of speed)
pub const ANGLE_PENALTY_MAX_FRACTION: f64 = 0.2;

/// Lower clamp on the reported throw speed (mph)
pub const MIN_THROW_SPEED_MPH: f64 = 10.0;

/// Upper clamp on the reported throw speed (mph)
///
/// 150 mph is well beyond any recorded throw; an estimate pinned at the
/// clamp indicates an unreachable distance/angle combination rather than
/// a usable target.
pub const MAX_THROW_SPEED_MPH: f64 = 150.0;

/// Release height above the ground (feet)
pub const RELEASE_HEIGHT_FT: f64 = 6.0;

/// Number of uniform time intervals sampled along the arc
///
/// 50 intervals (up to 51 points) is enough for a smooth rendered polyline.
pub const TRAJECTORY_INTERVALS: usize = 50;
