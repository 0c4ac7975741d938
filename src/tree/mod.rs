//! Progression graph - assembly, validation and unlock resolution
//!
//! Features:
//! - Builds a working tree from one or all catalogs
//! - Reports structural problems without failing
//! - Derives locked/unlocked/completed state from a completion set

pub mod builder;
pub mod resolver;
pub mod validator;

pub use builder::{SkillTree, TrainingMode, assemble, build_tree, lift_legacy, tree};
pub use resolver::{
    Blocker, CompletedSet, MetricTable, MetricsLookup, NoMetrics, NodeState, TypeProgress,
    blockers, get_next_progressions, get_progression_percentage, get_unlocked, is_unlocked, node_states,
    progress_by_type,
};
pub use validator::{TreeIssue, ValidationReport, find_issues, validate};
