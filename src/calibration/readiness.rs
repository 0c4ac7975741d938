//! Readiness scoring from daily biometric inputs

use serde::{Deserialize, Serialize};

pub const QUALITY_MIN: f64 = 1.0;
pub const QUALITY_MAX: f64 = 10.0;
pub const FATIGUE_MAX: f64 = 100.0;
pub const SCORE_MAX: f64 = 10.0;

/// Clamp into `[lo, hi]`, sending NaN and -inf to `lo` and +inf to `hi`
pub(crate) fn clamp_finite(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        lo
    } else {
        value.clamp(lo, hi)
    }
}

/// Scorer input: three quality ratings (1-10, higher is better) and
/// fatigue as a percentage (0-100, higher is worse)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessInput {
    pub sleep_quality: f64,
    /// 10 = no stress
    pub stress_level: f64,
    /// 10 = no soreness
    pub soreness: f64,
    pub fatigue: f64,
}

/// Raw morning check-in: four 1-5 sliders
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyCheckIn {
    pub sleep: u8,
    /// 5 = no soreness
    pub soreness: u8,
    /// 5 = low stress
    pub stress: u8,
    pub energy: u8,
}

impl DailyCheckIn {
    fn slider(value: u8) -> f64 {
        f64::from(value.clamp(1, 5))
    }

    /// Rescale sliders to scorer ranges.
    ///
    /// Quality sliders map 1..=5 onto 1..=10 linearly. Energy becomes
    /// fatigue: 5 is fully fresh (0%), 1 is exhausted (100%).
    pub fn to_input(&self) -> ReadinessInput {
        let quality = |v: u8| QUALITY_MIN + (Self::slider(v) - 1.0) * (QUALITY_MAX - QUALITY_MIN) / 4.0;
        ReadinessInput {
            sleep_quality: quality(self.sleep),
            stress_level: quality(self.stress),
            soreness: quality(self.soreness),
            fatigue: (5.0 - Self::slider(self.energy)) * 25.0,
        }
    }
}

/// Readiness score in [0, 10].
///
/// Mean of the three quality ratings, damped multiplicatively by fatigue:
/// a learner at 100% fatigue scores 0 however well they slept.
pub fn score(input: &ReadinessInput) -> f64 {
    let sleep = clamp_finite(input.sleep_quality, QUALITY_MIN, QUALITY_MAX);
    let stress = clamp_finite(input.stress_level, QUALITY_MIN, QUALITY_MAX);
    let soreness = clamp_finite(input.soreness, QUALITY_MIN, QUALITY_MAX);
    let fatigue = clamp_finite(input.fatigue, 0.0, FATIGUE_MAX);

    let quality = (sleep + stress + soreness) / 3.0;
    clamp_finite(quality * (1.0 - fatigue / FATIGUE_MAX), 0.0, SCORE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(sleep: f64, stress: f64, soreness: f64, fatigue: f64) -> ReadinessInput {
        ReadinessInput {
            sleep_quality: sleep,
            stress_level: stress,
            soreness,
            fatigue,
        }
    }

    #[test]
    fn test_perfect_day() {
        assert_eq!(score(&input(10.0, 10.0, 10.0, 0.0)), 10.0);
    }

    #[test]
    fn test_worst_day() {
        assert_eq!(score(&input(1.0, 1.0, 1.0, 100.0)), 0.0);
    }

    #[test]
    fn test_half_fatigue_halves_mean() {
        assert_eq!(score(&input(5.0, 5.0, 5.0, 50.0)), 2.5);
    }

    #[test]
    fn test_fatigue_is_multiplicative() {
        // Otherwise perfect but fully fatigued scores 0, not 7
        assert_eq!(score(&input(10.0, 10.0, 10.0, 100.0)), 0.0);
    }

    #[test]
    fn test_inputs_are_symmetric() {
        let a = score(&input(9.0, 3.0, 6.0, 20.0));
        let b = score(&input(3.0, 6.0, 9.0, 20.0));
        let c = score(&input(6.0, 9.0, 3.0, 20.0));
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_out_of_range_inputs_clamped() {
        assert_eq!(score(&input(50.0, 50.0, 50.0, -30.0)), 10.0);
        assert_eq!(score(&input(-5.0, 0.0, -1.0, 500.0)), 0.0);
        let s = score(&input(f64::NAN, f64::INFINITY, 5.0, f64::NAN));
        assert!((0.0..=10.0).contains(&s), "score {} out of range", s);
    }

    #[test]
    fn test_score_bounded_over_grid() {
        for q in 0..=12 {
            for f in (0..=120).step_by(10) {
                let s = score(&input(q as f64, q as f64, q as f64, f as f64));
                assert!((0.0..=10.0).contains(&s), "score {} out of range", s);
            }
        }
    }

    #[test]
    fn test_check_in_rescaling() {
        let best = DailyCheckIn { sleep: 5, soreness: 5, stress: 5, energy: 5 }.to_input();
        assert_eq!(best, input(10.0, 10.0, 10.0, 0.0));

        let worst = DailyCheckIn { sleep: 1, soreness: 1, stress: 1, energy: 1 }.to_input();
        assert_eq!(worst, input(1.0, 1.0, 1.0, 100.0));

        let mid = DailyCheckIn { sleep: 3, soreness: 3, stress: 3, energy: 3 }.to_input();
        assert_eq!(mid, input(5.5, 5.5, 5.5, 50.0));
    }

    #[test]
    fn test_check_in_clamps_sliders() {
        let wild = DailyCheckIn { sleep: 0, soreness: 9, stress: 200, energy: 0 }.to_input();
        assert_eq!(wild, input(1.0, 10.0, 10.0, 100.0));
    }
}
