//! Strength metrics from logged workouts
//!
//! Feeds cross-modality gates: aggregates logged sets per exercise into the
//! metric values the unlock resolver compares against thresholds.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Metric;
use crate::tree::MetricsLookup;

/// One logged set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSet {
    pub id: Option<i64>,
    pub date: DateTime<Utc>,
    pub exercise_id: String,
    pub weight_kg: f64,
    pub reps: u32,
    pub distance_km: Option<f64>,
}

/// Estimated one-rep max (Epley): `weight * (1 + reps / 30)`.
///
/// A single rep is the actual max. Zero reps or non-positive weight give 0.
pub fn estimate_1rm(weight_kg: f64, reps: u32) -> f64 {
    if !weight_kg.is_finite() || weight_kg <= 0.0 || reps == 0 {
        return 0.0;
    }
    if reps == 1 {
        return weight_kg;
    }
    weight_kg * (1.0 + f64::from(reps) / 30.0)
}

/// One-rep max divided by bodyweight; 0 when bodyweight is not positive
pub fn relative_strength(one_rm: f64, bodyweight_kg: f64) -> f64 {
    if !one_rm.is_finite() || !bodyweight_kg.is_finite() || bodyweight_kg <= 0.0 || one_rm <= 0.0 {
        return 0.0;
    }
    one_rm / bodyweight_kg
}

#[derive(Debug, Clone, Copy, Default)]
struct ExerciseBests {
    one_rm: f64,
    max_reps: u32,
    max_distance_km: f64,
}

/// Best-ever metrics per exercise, computed from a set history
#[derive(Debug, Clone, Default)]
pub struct WorkoutMetrics {
    bodyweight_kg: f64,
    bests: HashMap<String, ExerciseBests>,
}

impl WorkoutMetrics {
    /// Aggregate a training log
    pub fn from_sets(sets: &[WorkoutSet], bodyweight_kg: f64) -> Self {
        let mut bests: HashMap<String, ExerciseBests> = HashMap::new();

        for set in sets {
            let entry = bests.entry(set.exercise_id.clone()).or_default();
            entry.one_rm = entry.one_rm.max(estimate_1rm(set.weight_kg, set.reps));
            entry.max_reps = entry.max_reps.max(set.reps);
            if let Some(km) = set.distance_km.filter(|d| d.is_finite() && *d > 0.0) {
                entry.max_distance_km = entry.max_distance_km.max(km);
            }
        }

        Self { bodyweight_kg, bests }
    }

    pub fn bodyweight_kg(&self) -> f64 {
        self.bodyweight_kg
    }

    /// Exercises with at least one logged set
    pub fn exercises(&self) -> impl Iterator<Item = &str> {
        self.bests.keys().map(String::as_str)
    }
}

impl MetricsLookup for WorkoutMetrics {
    fn metric(&self, exercise_id: &str, metric: Metric) -> Option<f64> {
        let bests = self.bests.get(exercise_id)?;
        let value = match metric {
            Metric::OneRepMax => bests.one_rm,
            Metric::RelativeStrength => relative_strength(bests.one_rm, self.bodyweight_kg),
            Metric::MaxReps => f64::from(bests.max_reps),
            Metric::MaxDistanceKm => bests.max_distance_km,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(exercise: &str, weight_kg: f64, reps: u32) -> WorkoutSet {
        WorkoutSet {
            id: None,
            date: Utc::now(),
            exercise_id: exercise.to_string(),
            weight_kg,
            reps,
            distance_km: None,
        }
    }

    fn run(exercise: &str, km: f64) -> WorkoutSet {
        WorkoutSet {
            distance_km: Some(km),
            ..set(exercise, 0.0, 0)
        }
    }

    #[test]
    fn test_single_rep_is_actual_max() {
        assert_eq!(estimate_1rm(140.0, 1), 140.0);
    }

    #[test]
    fn test_epley() {
        assert!((estimate_1rm(100.0, 5) - 116.666_666).abs() < 1e-3);
        assert!((estimate_1rm(60.0, 30) - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_guards() {
        assert_eq!(estimate_1rm(100.0, 0), 0.0);
        assert_eq!(estimate_1rm(0.0, 8), 0.0);
        assert_eq!(estimate_1rm(-20.0, 8), 0.0);
        assert_eq!(estimate_1rm(f64::NAN, 8), 0.0);
        assert_eq!(relative_strength(150.0, 0.0), 0.0);
        assert_eq!(relative_strength(150.0, -70.0), 0.0);
        assert_eq!(relative_strength(f64::INFINITY, 80.0), 0.0);
    }

    #[test]
    fn test_relative_strength() {
        assert_eq!(relative_strength(150.0, 100.0), 1.5);
    }

    #[test]
    fn test_metrics_take_best_set() {
        let sets = vec![
            set("back-squat", 100.0, 5),
            set("back-squat", 120.0, 1),
            set("back-squat", 60.0, 12),
            set("pullup", 0.0, 11),
        ];
        let metrics = WorkoutMetrics::from_sets(&sets, 80.0);

        let one_rm = metrics.metric("back-squat", Metric::OneRepMax).unwrap();
        assert!((one_rm - 120.0).abs() < 1e-9);
        let relative = metrics.metric("back-squat", Metric::RelativeStrength).unwrap();
        assert!((relative - 1.5).abs() < 1e-9);
        assert_eq!(metrics.metric("back-squat", Metric::MaxReps), Some(12.0));
        assert_eq!(metrics.metric("pullup", Metric::MaxReps), Some(11.0));
        assert_eq!(metrics.metric("pullup", Metric::OneRepMax), Some(0.0));
    }

    #[test]
    fn test_unlogged_exercise_has_no_metric() {
        let metrics = WorkoutMetrics::from_sets(&[], 80.0);
        assert_eq!(metrics.metric("deadlift", Metric::OneRepMax), None);
    }

    #[test]
    fn test_zero_bodyweight_relative_strength() {
        let metrics = WorkoutMetrics::from_sets(&[set("deadlift", 200.0, 1)], 0.0);
        assert_eq!(metrics.metric("deadlift", Metric::RelativeStrength), Some(0.0));
    }

    #[test]
    fn test_distance_tracking() {
        let sets = vec![run("steady-5k", 5.0), run("steady-5k", 8.4), run("steady-5k", f64::NAN)];
        let metrics = WorkoutMetrics::from_sets(&sets, 70.0);
        assert_eq!(metrics.metric("steady-5k", Metric::MaxDistanceKm), Some(8.4));
        assert_eq!(metrics.exercises().count(), 1);
    }

    #[test]
    fn test_metrics_drive_unlock() {
        use crate::tree::{CompletedSet, TrainingMode, build_tree, is_unlocked};

        let tree = build_tree(TrainingMode::Iron);
        let done: CompletedSet = ["goblet-squat", "back-squat"].iter().map(|s| s.to_string()).collect();

        let weak = WorkoutMetrics::from_sets(&[set("back-squat", 90.0, 1)], 80.0);
        assert!(!is_unlocked("front-squat", &done, &tree, Some(&weak)));

        let strong = WorkoutMetrics::from_sets(&[set("back-squat", 100.0, 1)], 80.0);
        assert!(is_unlocked("front-squat", &done, &tree, Some(&strong)));
    }
}
