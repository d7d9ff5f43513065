use crate::constants::{MIN_EFFECTIVE_DISTANCE_FT, WIND_CARRY_FT_PER_MPH};

/// Wind classification for display purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindKind {
    Calm,
    Tailwind,
    Headwind,
}

impl WindKind {
    /// Classify a signed wind speed (positive = tailwind)
    pub fn from_mph(wind_mph: f64) -> Self {
        if wind_mph > 0.0 {
            WindKind::Tailwind
        } else if wind_mph < 0.0 {
            WindKind::Headwind
        } else {
            WindKind::Calm
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WindKind::Calm => "calm",
            WindKind::Tailwind => "tailwind",
            WindKind::Headwind => "headwind",
        }
    }
}

/// Distance the throw effectively has to cover once wind carry is accounted for
///
/// A tailwind carries the ball, shortening the distance the release speed must
/// produce; a headwind lengthens it. The result is floored so that a strong
/// tailwind over a short throw cannot drive it to zero or below.
pub fn effective_distance(distance_ft: f64, wind_mph: f64) -> f64 {
    let carried = distance_ft - wind_mph * WIND_CARRY_FT_PER_MPH;
    carried.max(MIN_EFFECTIVE_DISTANCE_FT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_distance_calm() {
        assert_eq!(effective_distance(100.0, 0.0), 100.0);
    }

    #[test]
    fn test_effective_distance_tailwind_shortens() {
        // 10 mph tailwind carries 20 ft
        assert_eq!(effective_distance(100.0, 10.0), 80.0);
    }

    #[test]
    fn test_effective_distance_headwind_lengthens() {
        assert_eq!(effective_distance(100.0, -10.0), 120.0);
    }

    #[test]
    fn test_effective_distance_floor() {
        // 20 mph tailwind over 30 ft would give -10 ft without the floor
        assert_eq!(effective_distance(30.0, 20.0), 5.0);
    }

    #[test]
    fn test_wind_kind() {
        assert_eq!(WindKind::from_mph(5.0), WindKind::Tailwind);
        assert_eq!(WindKind::from_mph(-5.0), WindKind::Headwind);
        assert_eq!(WindKind::from_mph(0.0), WindKind::Calm);
        assert_eq!(WindKind::from_mph(-5.0).label(), "headwind");
    }
}
