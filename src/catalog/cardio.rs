//! Conditioning progressions

use super::{CrossPrerequisite, ExerciseCategory, ExerciseType, Metric, Prescription, SkillNode};

const fn session(duration: &'static str, distance: Option<&'static str>, zone: u8) -> Prescription {
    Prescription::Cardio { duration, distance, zone }
}

pub const CARDIO_NODES: &[SkillNode] = &[
    SkillNode {
        id: "brisk-walk",
        name: "Brisk Walk",
        description: "Walk fast enough that holding a conversation takes some effort",
        level: 1,
        prescription: session("30 min", None, 1),
        category: ExerciseCategory::Legs,
        exercise_type: ExerciseType::Cardio,
        prerequisites: &[],
        cross_prerequisites: &[],
    },
    SkillNode {
        id: "rower-steady",
        name: "Steady Row",
        description: "Rowing machine at an even pace, legs-body-arms sequence",
        level: 1,
        prescription: session("20 min", None, 2),
        category: ExerciseCategory::Core,
        exercise_type: ExerciseType::Cardio,
        prerequisites: &[],
        cross_prerequisites: &[],
    },
    SkillNode {
        id: "jump-rope",
        name: "Jump Rope",
        description: "Continuous single-unders, light on the balls of the feet",
        level: 1,
        prescription: session("10 min", None, 3),
        category: ExerciseCategory::Legs,
        exercise_type: ExerciseType::Cardio,
        prerequisites: &[],
        cross_prerequisites: &[],
    },
    SkillNode {
        id: "easy-jog",
        name: "Easy Jog",
        description: "Relaxed running pace, nose breathing where possible",
        level: 2,
        prescription: session("20 min", None, 2),
        category: ExerciseCategory::Legs,
        exercise_type: ExerciseType::Cardio,
        prerequisites: &["brisk-walk"],
        cross_prerequisites: &[],
    },
    SkillNode {
        id: "steady-5k",
        name: "Steady 5K",
        description: "Continuous 5 km run at a conversational pace",
        level: 3,
        prescription: session("25-35 min", Some("5 km"), 2),
        category: ExerciseCategory::Legs,
        exercise_type: ExerciseType::Cardio,
        prerequisites: &["easy-jog"],
        cross_prerequisites: &[],
    },
    SkillNode {
        id: "tempo-run",
        name: "Tempo Run",
        description: "Comfortably hard sustained effort after a warm-up",
        level: 4,
        prescription: session("25 min", None, 3),
        category: ExerciseCategory::Legs,
        exercise_type: ExerciseType::Cardio,
        prerequisites: &["steady-5k"],
        cross_prerequisites: &[],
    },
    SkillNode {
        id: "rower-intervals",
        name: "Rowing Intervals",
        description: "8 x 500 m hard with 90 s easy between",
        level: 4,
        prescription: session("30 min", Some("4 km"), 4),
        category: ExerciseCategory::Core,
        exercise_type: ExerciseType::Cardio,
        prerequisites: &["rower-steady"],
        cross_prerequisites: &[],
    },
    SkillNode {
        id: "intervals-400",
        name: "400 m Repeats",
        description: "6-8 x 400 m at 5K pace or faster, equal time jog recovery",
        level: 5,
        prescription: session("35 min", Some("3.2 km"), 4),
        category: ExerciseCategory::Legs,
        exercise_type: ExerciseType::Cardio,
        prerequisites: &["tempo-run"],
        cross_prerequisites: &[],
    },
    SkillNode {
        id: "run-10k",
        name: "10K Run",
        description: "Continuous 10 km at an aerobic pace",
        level: 5,
        prescription: session("50-70 min", Some("10 km"), 2),
        category: ExerciseCategory::Legs,
        exercise_type: ExerciseType::Cardio,
        prerequisites: &["steady-5k"],
        cross_prerequisites: &[CrossPrerequisite {
            exercise_id: "steady-5k",
            metric: Metric::MaxDistanceKm,
            threshold: 8.0,
        }],
    },
    SkillNode {
        id: "burpee-intervals",
        name: "Burpee Intervals",
        description: "30 s on, 30 s off, chest to floor on every rep",
        level: 5,
        prescription: session("15 min", None, 5),
        category: ExerciseCategory::Core,
        exercise_type: ExerciseType::Cardio,
        prerequisites: &["jump-rope", "rower-intervals"],
        cross_prerequisites: &[CrossPrerequisite {
            exercise_id: "standard-pu",
            metric: Metric::MaxReps,
            threshold: 15.0,
        }],
    },
    SkillNode {
        id: "hill-sprints",
        name: "Hill Sprints",
        description: "8-10 all-out 10 s sprints up a steep grade, walk back down",
        level: 6,
        prescription: session("20 min", None, 5),
        category: ExerciseCategory::Legs,
        exercise_type: ExerciseType::Cardio,
        prerequisites: &["intervals-400"],
        cross_prerequisites: &[CrossPrerequisite {
            exercise_id: "back-squat",
            metric: Metric::RelativeStrength,
            threshold: 1.25,
        }],
    },
    SkillNode {
        id: "half-marathon",
        name: "Half Marathon",
        description: "21.1 km continuous run",
        level: 7,
        prescription: session("1h45-2h30", Some("21.1 km"), 3),
        category: ExerciseCategory::Legs,
        exercise_type: ExerciseType::Cardio,
        prerequisites: &["run-10k", "tempo-run"],
        cross_prerequisites: &[CrossPrerequisite {
            exercise_id: "run-10k",
            metric: Metric::MaxDistanceKm,
            threshold: 15.0,
        }],
    },
];
