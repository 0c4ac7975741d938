//! Node catalogs - static exercise tables per modality
//!
//! Catalogs are plain `const` data. Nothing here has logic beyond lookups;
//! the tree builder assembles them into a working progression graph.

mod calisthenics;
mod cardio;
mod weightlifting;

pub use calisthenics::{BODYWEIGHT_NODES, LegacyNode};
pub use cardio::CARDIO_NODES;
pub use weightlifting::IRON_NODES;

use serde::{Deserialize, Serialize};

/// Modality a node belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExerciseType {
    Calisthenics,
    Weightlifting,
    Cardio,
}

impl ExerciseType {
    pub fn label(&self) -> &'static str {
        match self {
            ExerciseType::Calisthenics => "calisthenics",
            ExerciseType::Weightlifting => "weightlifting",
            ExerciseType::Cardio => "cardio",
        }
    }

    /// All exercise types for iteration
    pub fn all() -> &'static [ExerciseType] {
        &[
            ExerciseType::Calisthenics,
            ExerciseType::Weightlifting,
            ExerciseType::Cardio,
        ]
    }
}

/// Movement bucket. Cardio nodes reuse `Legs`/`Core`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Push,
    Pull,
    Legs,
    Core,
    Iron,
}

impl ExerciseCategory {
    pub fn emoji(&self) -> &'static str {
        match self {
            ExerciseCategory::Push => "💪",
            ExerciseCategory::Pull => "🏋️",
            ExerciseCategory::Legs => "🦵",
            ExerciseCategory::Core => "🎯",
            ExerciseCategory::Iron => "🔩",
        }
    }
}

/// Performance metric computed by the caller from logged workouts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Estimated one-rep max in kg
    OneRepMax,
    /// One-rep max divided by bodyweight
    RelativeStrength,
    /// Best single-set rep count
    MaxReps,
    /// Longest logged distance in km
    MaxDistanceKm,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Metric::OneRepMax => "1RM",
            Metric::RelativeStrength => "1RM/BW",
            Metric::MaxReps => "max reps",
            Metric::MaxDistanceKm => "max km",
        }
    }
}

/// Unlock condition on another exercise's performance, not its completion
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CrossPrerequisite {
    pub exercise_id: &'static str,
    pub metric: Metric,
    pub threshold: f64,
}

/// Prescription metadata. Display only, never read by unlock logic.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Prescription {
    Strength {
        sets: u32,
        reps: &'static str,
    },
    Cardio {
        duration: &'static str,
        distance: Option<&'static str>,
        zone: u8,
    },
}

/// Canonical progression node
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillNode {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Difficulty tier 1-10; level 1 nodes have no prerequisites
    pub level: u8,
    pub prescription: Prescription,
    pub category: ExerciseCategory,
    pub exercise_type: ExerciseType,
    /// AND semantics: every id must be completed
    pub prerequisites: &'static [&'static str],
    pub cross_prerequisites: &'static [CrossPrerequisite],
}

impl SkillNode {
    /// True when the node has no gating of any kind
    pub fn is_root(&self) -> bool {
        self.prerequisites.is_empty() && self.cross_prerequisites.is_empty()
    }
}
