//! Bodyweight progressions
//!
//! Authored before cross-modality gating existed, so nodes use the older
//! flat shape without exercise type or metric thresholds.

use super::ExerciseCategory;

/// Pre-canonical node shape used by the bodyweight table
#[derive(Debug, Clone, Copy)]
pub struct LegacyNode {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub level: u8,
    pub sets: u32,
    pub reps: &'static str,
    pub category: ExerciseCategory,
    pub prerequisites: &'static [&'static str],
}

pub const BODYWEIGHT_NODES: &[LegacyNode] = &[
    // Push
    LegacyNode {
        id: "wall-pu",
        name: "Wall Push-up",
        description: "Hands on a wall at shoulder height, body straight, lower chest to the wall",
        level: 1,
        sets: 3,
        reps: "15-20",
        category: ExerciseCategory::Push,
        prerequisites: &[],
    },
    LegacyNode {
        id: "incline-pu",
        name: "Incline Push-up",
        description: "Hands on a bench or table, body in a straight line from head to heels",
        level: 2,
        sets: 3,
        reps: "12-15",
        category: ExerciseCategory::Push,
        prerequisites: &["wall-pu"],
    },
    LegacyNode {
        id: "knee-pu",
        name: "Knee Push-up",
        description: "Push-up from the knees, hips extended, chest touches the floor",
        level: 3,
        sets: 3,
        reps: "10-15",
        category: ExerciseCategory::Push,
        prerequisites: &["incline-pu"],
    },
    LegacyNode {
        id: "standard-pu",
        name: "Push-up",
        description: "Full push-up, elbows at 45 degrees, full lockout at the top",
        level: 4,
        sets: 3,
        reps: "8-12",
        category: ExerciseCategory::Push,
        prerequisites: &["knee-pu"],
    },
    LegacyNode {
        id: "diamond-pu",
        name: "Diamond Push-up",
        description: "Hands together under the sternum, thumbs and index fingers forming a diamond",
        level: 5,
        sets: 3,
        reps: "8-12",
        category: ExerciseCategory::Push,
        prerequisites: &["standard-pu"],
    },
    LegacyNode {
        id: "bench-dip",
        name: "Bench Dip",
        description: "Hands on a bench behind you, lower until elbows reach 90 degrees",
        level: 4,
        sets: 3,
        reps: "10-15",
        category: ExerciseCategory::Push,
        prerequisites: &["knee-pu"],
    },
    LegacyNode {
        id: "parallel-dip",
        name: "Parallel Bar Dip",
        description: "Full dip on parallel bars, shoulders below elbows at the bottom",
        level: 6,
        sets: 3,
        reps: "6-10",
        category: ExerciseCategory::Push,
        prerequisites: &["bench-dip", "standard-pu"],
    },
    LegacyNode {
        id: "pike-pu",
        name: "Pike Push-up",
        description: "Hips high, head travels toward the floor between the hands",
        level: 5,
        sets: 3,
        reps: "8-10",
        category: ExerciseCategory::Push,
        prerequisites: &["standard-pu"],
    },
    LegacyNode {
        id: "archer-pu",
        name: "Archer Push-up",
        description: "Wide stance, shift the load onto one arm while the other stays straight",
        level: 7,
        sets: 3,
        reps: "5-8 per side",
        category: ExerciseCategory::Push,
        prerequisites: &["diamond-pu"],
    },
    LegacyNode {
        id: "wall-hspu",
        name: "Wall Handstand Push-up",
        description: "Handstand against a wall, lower the head to the floor and press back up",
        level: 8,
        sets: 3,
        reps: "3-6",
        category: ExerciseCategory::Push,
        prerequisites: &["pike-pu", "parallel-dip"],
    },
    LegacyNode {
        id: "one-arm-pu",
        name: "One-Arm Push-up",
        description: "Feet wide, one hand under the chest, full range without rotating the hips",
        level: 9,
        sets: 3,
        reps: "3-5 per side",
        category: ExerciseCategory::Push,
        prerequisites: &["archer-pu"],
    },
    // Pull
    LegacyNode {
        id: "dead-hang",
        name: "Dead Hang",
        description: "Hang from a bar with straight arms and active shoulders",
        level: 1,
        sets: 3,
        reps: "30s",
        category: ExerciseCategory::Pull,
        prerequisites: &[],
    },
    LegacyNode {
        id: "scap-pull",
        name: "Scapular Pull-up",
        description: "From a dead hang, depress and retract the shoulder blades without bending the elbows",
        level: 2,
        sets: 3,
        reps: "10-12",
        category: ExerciseCategory::Pull,
        prerequisites: &["dead-hang"],
    },
    LegacyNode {
        id: "australian-row",
        name: "Australian Row",
        description: "Body under a low bar, heels on the floor, pull the chest to the bar",
        level: 2,
        sets: 3,
        reps: "10-15",
        category: ExerciseCategory::Pull,
        prerequisites: &["dead-hang"],
    },
    LegacyNode {
        id: "negative-pullup",
        name: "Negative Pull-up",
        description: "Jump to the top position and lower in five seconds",
        level: 3,
        sets: 3,
        reps: "5-8",
        category: ExerciseCategory::Pull,
        prerequisites: &["scap-pull", "australian-row"],
    },
    LegacyNode {
        id: "pullup",
        name: "Pull-up",
        description: "Overhand grip, chin over the bar from a dead hang",
        level: 4,
        sets: 3,
        reps: "5-10",
        category: ExerciseCategory::Pull,
        prerequisites: &["negative-pullup"],
    },
    LegacyNode {
        id: "chinup",
        name: "Chin-up",
        description: "Underhand shoulder-width grip, chest toward the bar",
        level: 4,
        sets: 3,
        reps: "6-10",
        category: ExerciseCategory::Pull,
        prerequisites: &["negative-pullup"],
    },
    LegacyNode {
        id: "l-pullup",
        name: "L-sit Pull-up",
        description: "Pull-up with legs held straight at hip height",
        level: 6,
        sets: 3,
        reps: "5-8",
        category: ExerciseCategory::Pull,
        prerequisites: &["pullup", "l-sit"],
    },
    LegacyNode {
        id: "archer-pullup",
        name: "Archer Pull-up",
        description: "Wide grip, pull toward one hand while the other arm straightens",
        level: 7,
        sets: 3,
        reps: "3-5 per side",
        category: ExerciseCategory::Pull,
        prerequisites: &["pullup", "chinup"],
    },
    LegacyNode {
        id: "muscle-up",
        name: "Muscle-up",
        description: "Explosive pull-up transitioning over the bar into a straight-bar dip",
        level: 8,
        sets: 3,
        reps: "3-5",
        category: ExerciseCategory::Pull,
        prerequisites: &["archer-pullup", "parallel-dip"],
    },
    LegacyNode {
        id: "one-arm-chin",
        name: "One-Arm Chin-up",
        description: "Single-arm chin from a dead hang, free hand off the working arm",
        level: 10,
        sets: 3,
        reps: "1-3 per side",
        category: ExerciseCategory::Pull,
        prerequisites: &["archer-pullup"],
    },
    // Legs
    LegacyNode {
        id: "bw-squat",
        name: "Bodyweight Squat",
        description: "Feet shoulder-width, hips below knees, heels down",
        level: 1,
        sets: 3,
        reps: "15-20",
        category: ExerciseCategory::Legs,
        prerequisites: &[],
    },
    LegacyNode {
        id: "reverse-lunge",
        name: "Reverse Lunge",
        description: "Step back and lower the rear knee to just above the floor",
        level: 2,
        sets: 3,
        reps: "10-12 per side",
        category: ExerciseCategory::Legs,
        prerequisites: &["bw-squat"],
    },
    LegacyNode {
        id: "split-squat",
        name: "Split Squat",
        description: "Static staggered stance, lower straight down",
        level: 3,
        sets: 3,
        reps: "10-12 per side",
        category: ExerciseCategory::Legs,
        prerequisites: &["reverse-lunge"],
    },
    LegacyNode {
        id: "bulgarian-split-squat",
        name: "Bulgarian Split Squat",
        description: "Rear foot elevated on a bench, front shin near vertical",
        level: 4,
        sets: 3,
        reps: "8-12 per side",
        category: ExerciseCategory::Legs,
        prerequisites: &["split-squat"],
    },
    LegacyNode {
        id: "assisted-pistol",
        name: "Assisted Pistol Squat",
        description: "Single-leg squat holding a doorframe or band for balance",
        level: 5,
        sets: 3,
        reps: "5-8 per side",
        category: ExerciseCategory::Legs,
        prerequisites: &["bulgarian-split-squat"],
    },
    LegacyNode {
        id: "pistol-squat",
        name: "Pistol Squat",
        description: "Full single-leg squat with the free leg held straight in front",
        level: 7,
        sets: 3,
        reps: "3-6 per side",
        category: ExerciseCategory::Legs,
        prerequisites: &["assisted-pistol"],
    },
    LegacyNode {
        id: "shrimp-squat",
        name: "Shrimp Squat",
        description: "Single-leg squat holding the rear foot, knee touches the floor",
        level: 8,
        sets: 3,
        reps: "3-5 per side",
        category: ExerciseCategory::Legs,
        prerequisites: &["pistol-squat"],
    },
    LegacyNode {
        id: "nordic-curl",
        name: "Nordic Hamstring Curl",
        description: "Kneeling with heels anchored, lower the torso under control",
        level: 6,
        sets: 3,
        reps: "3-6",
        category: ExerciseCategory::Legs,
        prerequisites: &["bulgarian-split-squat"],
    },
    // Core
    LegacyNode {
        id: "plank",
        name: "Plank",
        description: "Forearm plank, glutes squeezed, ribs down",
        level: 1,
        sets: 3,
        reps: "30-60s",
        category: ExerciseCategory::Core,
        prerequisites: &[],
    },
    LegacyNode {
        id: "hollow-hold",
        name: "Hollow Body Hold",
        description: "Lower back pressed into the floor, arms and legs extended",
        level: 2,
        sets: 3,
        reps: "20-40s",
        category: ExerciseCategory::Core,
        prerequisites: &["plank"],
    },
    LegacyNode {
        id: "hanging-knee-raise",
        name: "Hanging Knee Raise",
        description: "From a dead hang, bring the knees to the chest without swinging",
        level: 3,
        sets: 3,
        reps: "10-12",
        category: ExerciseCategory::Core,
        prerequisites: &["hollow-hold", "dead-hang"],
    },
    LegacyNode {
        id: "l-sit",
        name: "L-sit",
        description: "Support on parallettes or the floor with straight legs held at hip height",
        level: 5,
        sets: 3,
        reps: "10-20s",
        category: ExerciseCategory::Core,
        prerequisites: &["hanging-knee-raise"],
    },
    LegacyNode {
        id: "toes-to-bar",
        name: "Toes-to-Bar",
        description: "Strict hanging leg raise until the feet touch the bar",
        level: 6,
        sets: 3,
        reps: "6-10",
        category: ExerciseCategory::Core,
        prerequisites: &["hanging-knee-raise"],
    },
    LegacyNode {
        id: "dragon-flag",
        name: "Dragon Flag",
        description: "Lying on a bench, lower a rigid body from the shoulders",
        level: 8,
        sets: 3,
        reps: "3-6",
        category: ExerciseCategory::Core,
        prerequisites: &["l-sit", "toes-to-bar"],
    },
    LegacyNode {
        id: "front-lever",
        name: "Front Lever",
        description: "Horizontal hang facing up, straight body, straight arms",
        level: 10,
        sets: 5,
        reps: "5-10s",
        category: ExerciseCategory::Core,
        prerequisites: &["dragon-flag", "l-pullup"],
    },
];
