//! Adaptive calibration - readiness score to daily training and nutrition
//!
//! Pipeline: check-in -> score -> factor -> recommendation + targets.
//! Every step is a pure function; calling twice gives identical output.

pub mod factor;
pub mod macros;
pub mod readiness;

pub use factor::{Recommendation, Thresholds, to_factor, to_recommendation};
pub use macros::{MacroPolicy, NutritionTargets, calibrate};
pub use readiness::{DailyCheckIn, ReadinessInput, score};

use serde::Serialize;

/// Everything derived from one day's readiness input
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct DailyPlan {
    pub score: f64,
    pub factor: f64,
    pub recommendation: Recommendation,
    pub targets: NutritionTargets,
}

impl DailyPlan {
    pub fn compute(
        input: &ReadinessInput,
        thresholds: &Thresholds,
        policy: MacroPolicy,
        base: &NutritionTargets,
    ) -> Self {
        let score = score(input);
        let factor = to_factor(score);
        Self {
            score,
            factor,
            recommendation: thresholds.classify(score),
            targets: calibrate(policy, base, factor),
        }
    }

    /// Multi-line summary for terminal output
    pub fn format(&self) -> String {
        format!(
            "Readiness: {:.1}/10 (factor {:.2})\n\
             Training: {} - {}\n\
             Targets: {} kcal | P {}g | C {}g | F {}g",
            self.score,
            self.factor,
            self.recommendation,
            self.recommendation.advice(),
            self.targets.calories,
            self.targets.protein,
            self.targets.carbs,
            self.targets.fat,
        )
    }
}
