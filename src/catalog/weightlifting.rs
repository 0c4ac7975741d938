//! Free-weight progressions

use super::{CrossPrerequisite, ExerciseCategory, ExerciseType, Metric, Prescription, SkillNode};

const fn lift(sets: u32, reps: &'static str) -> Prescription {
    Prescription::Strength { sets, reps }
}

pub const IRON_NODES: &[SkillNode] = &[
    SkillNode {
        id: "goblet-squat",
        name: "Goblet Squat",
        description: "Dumbbell or kettlebell held at the chest, elbows inside the knees",
        level: 1,
        prescription: lift(3, "10-12"),
        category: ExerciseCategory::Iron,
        exercise_type: ExerciseType::Weightlifting,
        prerequisites: &[],
        cross_prerequisites: &[],
    },
    SkillNode {
        id: "kb-deadlift",
        name: "Kettlebell Deadlift",
        description: "Hinge at the hips, bell between the feet, neutral spine",
        level: 1,
        prescription: lift(3, "10-12"),
        category: ExerciseCategory::Iron,
        exercise_type: ExerciseType::Weightlifting,
        prerequisites: &[],
        cross_prerequisites: &[],
    },
    SkillNode {
        id: "db-bench-press",
        name: "Dumbbell Bench Press",
        description: "Flat bench, dumbbells lowered to chest level with forearms vertical",
        level: 1,
        prescription: lift(3, "8-12"),
        category: ExerciseCategory::Iron,
        exercise_type: ExerciseType::Weightlifting,
        prerequisites: &[],
        cross_prerequisites: &[],
    },
    SkillNode {
        id: "db-row",
        name: "One-Arm Dumbbell Row",
        description: "Hand and knee on a bench, row the dumbbell to the hip",
        level: 1,
        prescription: lift(3, "10-12 per side"),
        category: ExerciseCategory::Iron,
        exercise_type: ExerciseType::Weightlifting,
        prerequisites: &[],
        cross_prerequisites: &[],
    },
    SkillNode {
        id: "db-shoulder-press",
        name: "Dumbbell Shoulder Press",
        description: "Seated or standing, press overhead without arching the lower back",
        level: 2,
        prescription: lift(3, "8-12"),
        category: ExerciseCategory::Iron,
        exercise_type: ExerciseType::Weightlifting,
        prerequisites: &["db-bench-press"],
        cross_prerequisites: &[],
    },
    SkillNode {
        id: "back-squat",
        name: "Back Squat",
        description: "High-bar barbell squat to at least parallel",
        level: 3,
        prescription: lift(5, "5"),
        category: ExerciseCategory::Iron,
        exercise_type: ExerciseType::Weightlifting,
        prerequisites: &["goblet-squat"],
        cross_prerequisites: &[],
    },
    SkillNode {
        id: "romanian-deadlift",
        name: "Romanian Deadlift",
        description: "Barbell hinge from the top, soft knees, bar slides down the thighs",
        level: 3,
        prescription: lift(3, "8-10"),
        category: ExerciseCategory::Iron,
        exercise_type: ExerciseType::Weightlifting,
        prerequisites: &["kb-deadlift"],
        cross_prerequisites: &[],
    },
    SkillNode {
        id: "bench-press",
        name: "Barbell Bench Press",
        description: "Shoulder blades pinned, bar touches the lower chest",
        level: 3,
        prescription: lift(5, "5"),
        category: ExerciseCategory::Iron,
        exercise_type: ExerciseType::Weightlifting,
        prerequisites: &["db-bench-press"],
        cross_prerequisites: &[],
    },
    SkillNode {
        id: "barbell-row",
        name: "Barbell Row",
        description: "Torso near parallel, row the bar to the navel",
        level: 3,
        prescription: lift(4, "6-8"),
        category: ExerciseCategory::Iron,
        exercise_type: ExerciseType::Weightlifting,
        prerequisites: &["db-row"],
        cross_prerequisites: &[],
    },
    SkillNode {
        id: "deadlift",
        name: "Conventional Deadlift",
        description: "Bar over midfoot, pull from the floor to lockout",
        level: 4,
        prescription: lift(3, "5"),
        category: ExerciseCategory::Iron,
        exercise_type: ExerciseType::Weightlifting,
        prerequisites: &["romanian-deadlift"],
        cross_prerequisites: &[],
    },
    SkillNode {
        id: "overhead-press",
        name: "Overhead Press",
        description: "Standing strict press, bar finishes over the midfoot",
        level: 4,
        prescription: lift(5, "5"),
        category: ExerciseCategory::Iron,
        exercise_type: ExerciseType::Weightlifting,
        prerequisites: &["db-shoulder-press"],
        cross_prerequisites: &[],
    },
    SkillNode {
        id: "front-squat",
        name: "Front Squat",
        description: "Bar in the front rack, elbows high, upright torso",
        level: 5,
        prescription: lift(4, "4-6"),
        category: ExerciseCategory::Iron,
        exercise_type: ExerciseType::Weightlifting,
        prerequisites: &["back-squat"],
        cross_prerequisites: &[CrossPrerequisite {
            exercise_id: "back-squat",
            metric: Metric::RelativeStrength,
            threshold: 1.25,
        }],
    },
    SkillNode {
        id: "weighted-pullup",
        name: "Weighted Pull-up",
        description: "Pull-up with a belt or vest adding load",
        level: 6,
        prescription: lift(4, "3-5"),
        category: ExerciseCategory::Iron,
        exercise_type: ExerciseType::Weightlifting,
        prerequisites: &["barbell-row"],
        cross_prerequisites: &[CrossPrerequisite {
            exercise_id: "pullup",
            metric: Metric::MaxReps,
            threshold: 10.0,
        }],
    },
    SkillNode {
        id: "weighted-dip",
        name: "Weighted Dip",
        description: "Parallel bar dip with added load",
        level: 6,
        prescription: lift(4, "5-6"),
        category: ExerciseCategory::Iron,
        exercise_type: ExerciseType::Weightlifting,
        prerequisites: &["bench-press"],
        cross_prerequisites: &[CrossPrerequisite {
            exercise_id: "parallel-dip",
            metric: Metric::MaxReps,
            threshold: 12.0,
        }],
    },
    SkillNode {
        id: "power-clean",
        name: "Power Clean",
        description: "Explosive pull from the floor, catch the bar in a quarter squat",
        level: 6,
        prescription: lift(5, "3"),
        category: ExerciseCategory::Iron,
        exercise_type: ExerciseType::Weightlifting,
        prerequisites: &["deadlift", "front-squat"],
        cross_prerequisites: &[CrossPrerequisite {
            exercise_id: "deadlift",
            metric: Metric::RelativeStrength,
            threshold: 1.5,
        }],
    },
    SkillNode {
        id: "clean-and-jerk",
        name: "Clean and Jerk",
        description: "Full squat clean followed by a split jerk overhead",
        level: 8,
        prescription: lift(6, "1-2"),
        category: ExerciseCategory::Iron,
        exercise_type: ExerciseType::Weightlifting,
        prerequisites: &["power-clean", "overhead-press"],
        cross_prerequisites: &[CrossPrerequisite {
            exercise_id: "back-squat",
            metric: Metric::RelativeStrength,
            threshold: 1.5,
        }],
    },
    SkillNode {
        id: "snatch",
        name: "Snatch",
        description: "Wide-grip pull from the floor to overhead in one motion",
        level: 8,
        prescription: lift(6, "1-2"),
        category: ExerciseCategory::Iron,
        exercise_type: ExerciseType::Weightlifting,
        prerequisites: &["power-clean", "overhead-press"],
        cross_prerequisites: &[CrossPrerequisite {
            exercise_id: "overhead-press",
            metric: Metric::RelativeStrength,
            threshold: 0.75,
        }],
    },
    SkillNode {
        id: "double-bw-deadlift",
        name: "Double Bodyweight Deadlift",
        description: "Deadlift a single at twice bodyweight",
        level: 9,
        prescription: lift(1, "1"),
        category: ExerciseCategory::Iron,
        exercise_type: ExerciseType::Weightlifting,
        prerequisites: &["deadlift"],
        cross_prerequisites: &[CrossPrerequisite {
            exercise_id: "deadlift",
            metric: Metric::RelativeStrength,
            threshold: 2.0,
        }],
    },
];
