//! Readiness factor and training recommendation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::readiness::{SCORE_MAX, clamp_finite};

pub const FACTOR_MIN: f64 = 0.8;
pub const FACTOR_MAX: f64 = 1.2;

/// Map a readiness score to the daily multiplier in [0.8, 1.2].
///
/// Linear `score / 10 * 1.2`, floored at 0.8: every score at or below
/// ~6.67 lands on the floor, 10 reaches the 1.2 ceiling.
pub fn to_factor(score: f64) -> f64 {
    let score = clamp_finite(score, 0.0, SCORE_MAX);
    clamp_finite(score / SCORE_MAX * FACTOR_MAX, FACTOR_MIN, FACTOR_MAX)
}

/// Training intensity for the day, ordered from least to most intense
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Rest,
    Light,
    Moderate,
    Intense,
}

impl Recommendation {
    pub fn advice(&self) -> &'static str {
        match self {
            Recommendation::Rest => "Recovery day: mobility and a walk only",
            Recommendation::Light => "Light session: technique work, stay well short of failure",
            Recommendation::Moderate => "Normal session: follow the planned volume",
            Recommendation::Intense => "Push day: go for progressions and top sets",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rest => write!(f, "REST"),
            Self::Light => write!(f, "LIGHT"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::Intense => write!(f, "INTENSE"),
        }
    }
}

impl FromStr for Recommendation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REST" => Ok(Self::Rest),
            "LIGHT" => Ok(Self::Light),
            "MODERATE" => Ok(Self::Moderate),
            "INTENSE" => Ok(Self::Intense),
            _ => Err(format!("Unknown recommendation: {}", s)),
        }
    }
}

/// Lower score bounds for each non-rest recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Thresholds {
    pub intense: f64,
    pub moderate: f64,
    pub light: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            intense: 8.0,
            moderate: 6.0,
            light: 4.0,
        }
    }
}

impl Thresholds {
    /// Strictly descending and inside the score range
    pub fn is_valid(&self) -> bool {
        let in_range = |v: f64| v.is_finite() && (0.0..=SCORE_MAX).contains(&v);
        in_range(self.intense)
            && in_range(self.moderate)
            && in_range(self.light)
            && self.intense > self.moderate
            && self.moderate > self.light
    }

    /// Classify a readiness score. Non-finite scores rest.
    pub fn classify(&self, score: f64) -> Recommendation {
        let score = clamp_finite(score, 0.0, SCORE_MAX);
        if score >= self.intense {
            Recommendation::Intense
        } else if score >= self.moderate {
            Recommendation::Moderate
        } else if score >= self.light {
            Recommendation::Light
        } else {
            Recommendation::Rest
        }
    }
}

/// Recommendation for a score using the default thresholds
pub fn to_recommendation(score: f64) -> Recommendation {
    Thresholds::default().classify(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_ceiling() {
        assert_eq!(to_factor(10.0), 1.2);
    }

    #[test]
    fn test_factor_floor() {
        assert_eq!(to_factor(0.0), 0.8);
        assert_eq!(to_factor(5.0), 0.8);
        assert_eq!(to_factor(6.66), 0.8);
        assert!((to_factor(20.0 / 3.0) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_factor_baseline_near_8_33() {
        assert!((to_factor(25.0 / 3.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_factor_monotonic_and_bounded() {
        let mut last = to_factor(0.0);
        for i in 0..=1000 {
            let f = to_factor(i as f64 / 100.0);
            assert!((FACTOR_MIN..=FACTOR_MAX).contains(&f));
            assert!(f >= last, "factor decreased at score {}", i as f64 / 100.0);
            last = f;
        }
    }

    #[test]
    fn test_factor_garbage_input() {
        assert_eq!(to_factor(f64::NAN), 0.8);
        assert_eq!(to_factor(-4.0), 0.8);
        assert_eq!(to_factor(42.0), 1.2);
        assert_eq!(to_factor(f64::INFINITY), 1.2);
    }

    #[test]
    fn test_default_breakpoints() {
        assert_eq!(to_recommendation(10.0), Recommendation::Intense);
        assert_eq!(to_recommendation(8.0), Recommendation::Intense);
        assert_eq!(to_recommendation(7.99), Recommendation::Moderate);
        assert_eq!(to_recommendation(6.0), Recommendation::Moderate);
        assert_eq!(to_recommendation(5.5), Recommendation::Light);
        assert_eq!(to_recommendation(4.0), Recommendation::Light);
        assert_eq!(to_recommendation(3.99), Recommendation::Rest);
        assert_eq!(to_recommendation(0.0), Recommendation::Rest);
        assert_eq!(to_recommendation(f64::NAN), Recommendation::Rest);
    }

    #[test]
    fn test_recommendation_monotonic() {
        let mut last = to_recommendation(0.0);
        for i in 0..=100 {
            let r = to_recommendation(i as f64 / 10.0);
            assert!(r >= last);
            last = r;
        }
    }

    #[test]
    fn test_threshold_validity() {
        assert!(Thresholds::default().is_valid());
        assert!(!Thresholds { intense: 6.0, moderate: 6.0, light: 4.0 }.is_valid());
        assert!(!Thresholds { intense: 11.0, moderate: 6.0, light: 4.0 }.is_valid());
        assert!(!Thresholds { intense: 8.0, moderate: 6.0, light: f64::NAN }.is_valid());
    }

    #[test]
    fn test_recommendation_round_trip_text() {
        for r in [
            Recommendation::Rest,
            Recommendation::Light,
            Recommendation::Moderate,
            Recommendation::Intense,
        ] {
            assert_eq!(r.to_string().parse::<Recommendation>(), Ok(r));
        }
    }
}
