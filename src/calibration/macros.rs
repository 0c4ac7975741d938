//! Nutrition target calibration by readiness factor
//!
//! Two policies exist and give different numbers for the same day; pick one
//! per deployment through configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::factor::{FACTOR_MAX, FACTOR_MIN};
use super::readiness::clamp_finite;

pub const KCAL_PER_GRAM_PROTEIN: u32 = 4;
pub const KCAL_PER_GRAM_CARB: u32 = 4;
pub const KCAL_PER_GRAM_FAT: u32 = 9;

const FAT_FACTOR_MIN: f64 = 0.9;
const FAT_FACTOR_MAX: f64 = 1.1;

/// Daily calories (kcal) and macros (g)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NutritionTargets {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl NutritionTargets {
    pub fn new(calories: u32, protein: u32, carbs: u32, fat: u32) -> Self {
        Self { calories, protein, carbs, fat }
    }

    /// Energy implied by the macros alone. Saturates at `u32::MAX`.
    pub fn macro_calories(&self) -> u32 {
        self.protein
            .saturating_mul(KCAL_PER_GRAM_PROTEIN)
            .saturating_add(self.carbs.saturating_mul(KCAL_PER_GRAM_CARB))
            .saturating_add(self.fat.saturating_mul(KCAL_PER_GRAM_FAT))
    }
}

/// How the readiness factor is applied to a base target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MacroPolicy {
    /// Every value, protein included, scaled by the factor
    #[default]
    Uniform,
    /// Protein held; carbs follow the factor, fat on a narrower band;
    /// calories recomputed from the macros
    ProteinAnchored,
}

impl fmt::Display for MacroPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform => write!(f, "uniform"),
            Self::ProteinAnchored => write!(f, "protein_anchored"),
        }
    }
}

// Float to int casts saturate, so huge bases pin at u32::MAX
fn scale(value: u32, multiplier: f64) -> u32 {
    (f64::from(value) * multiplier).round() as u32
}

/// Scale every field by the factor (clamped to [0.8, 1.2]), rounding to
/// the nearest unit
pub fn calibrate_uniform(base: &NutritionTargets, factor: f64) -> NutritionTargets {
    let factor = clamp_finite(factor, FACTOR_MIN, FACTOR_MAX);
    NutritionTargets {
        calories: scale(base.calories, factor),
        protein: scale(base.protein, factor),
        carbs: scale(base.carbs, factor),
        fat: scale(base.fat, factor),
    }
}

/// Hold protein, scale carbs within [0.8, 1.2] and fat within [0.9, 1.1],
/// then derive calories from the adjusted macros
pub fn calibrate_protein_anchored(base: &NutritionTargets, factor: f64) -> NutritionTargets {
    let carb_multiplier = clamp_finite(factor, FACTOR_MIN, FACTOR_MAX);
    let fat_multiplier = clamp_finite(factor, FAT_FACTOR_MIN, FAT_FACTOR_MAX);

    let mut adjusted = NutritionTargets {
        calories: 0,
        protein: base.protein,
        carbs: scale(base.carbs, carb_multiplier),
        fat: scale(base.fat, fat_multiplier),
    };
    adjusted.calories = adjusted.macro_calories();
    adjusted
}

/// Apply the chosen policy
pub fn calibrate(policy: MacroPolicy, base: &NutritionTargets, factor: f64) -> NutritionTargets {
    match policy {
        MacroPolicy::Uniform => calibrate_uniform(base, factor),
        MacroPolicy::ProteinAnchored => calibrate_protein_anchored(base, factor),
    }
}
