//! Unlock resolver - derives node state from completed exercises
//!
//! Pure predicates over caller-supplied state. Completion data and
//! performance metrics come from the application; nothing is stored here.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::catalog::{CrossPrerequisite, ExerciseType, Metric, SkillNode};

use super::builder::SkillTree;

/// Ids of nodes the learner has marked done
pub type CompletedSet = HashSet<String>;

/// Source of performance metrics for cross-modality gates
pub trait MetricsLookup {
    /// Current value of `metric` for `exercise_id`, if known
    fn metric(&self, exercise_id: &str, metric: Metric) -> Option<f64>;
}

impl<T: MetricsLookup + ?Sized> MetricsLookup for &T {
    fn metric(&self, exercise_id: &str, metric: Metric) -> Option<f64> {
        (**self).metric(exercise_id, metric)
    }
}

/// Lookup that knows nothing; every cross-prerequisite stays unmet
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMetrics;

impl MetricsLookup for NoMetrics {
    fn metric(&self, _exercise_id: &str, _metric: Metric) -> Option<f64> {
        None
    }
}

/// Explicit metric values keyed by exercise and metric
#[derive(Debug, Clone, Default)]
pub struct MetricTable {
    values: HashMap<(String, Metric), f64>,
}

impl MetricTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, exercise_id: impl Into<String>, metric: Metric, value: f64) {
        self.values.insert((exercise_id.into(), metric), value);
    }

    pub fn with(mut self, exercise_id: impl Into<String>, metric: Metric, value: f64) -> Self {
        self.insert(exercise_id, metric, value);
        self
    }
}

impl MetricsLookup for MetricTable {
    fn metric(&self, exercise_id: &str, metric: Metric) -> Option<f64> {
        self.values.get(&(exercise_id.to_string(), metric)).copied()
    }
}

/// Derived per-node state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeState {
    Locked,
    Unlocked,
    Completed,
}

impl NodeState {
    pub fn symbol(&self) -> &'static str {
        match self {
            NodeState::Locked => "[ ]",
            NodeState::Unlocked => "[>]",
            NodeState::Completed => "[x]",
        }
    }
}

/// Completion counts for one exercise type
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TypeProgress {
    pub exercise_type: ExerciseType,
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
}

/// Why a node is still locked
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Blocker {
    Prerequisite {
        id: &'static str,
    },
    Metric {
        exercise_id: &'static str,
        metric: Metric,
        threshold: f64,
        current: Option<f64>,
    },
}

impl fmt::Display for Blocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Blocker::Prerequisite { id } => write!(f, "complete {}", id),
            Blocker::Metric { exercise_id, metric, threshold, current } => {
                write!(f, "{} {} >= {}", exercise_id, metric.label(), threshold)?;
                match current {
                    Some(value) => write!(f, " (now {:.2})", value),
                    None => write!(f, " (no data)"),
                }
            }
        }
    }
}

fn cross_satisfied(cross: &CrossPrerequisite, metrics: Option<&dyn MetricsLookup>) -> bool {
    match metrics.and_then(|m| m.metric(cross.exercise_id, cross.metric)) {
        Some(value) if value.is_finite() => value >= cross.threshold,
        Some(value) => {
            debug!(exercise = cross.exercise_id, metric = ?cross.metric, value, "non-finite metric treated as unmet");
            false
        }
        None => {
            debug!(exercise = cross.exercise_id, metric = ?cross.metric, "metric missing, gate unmet");
            false
        }
    }
}

fn node_unlocked(node: &SkillNode, completed: &CompletedSet, metrics: Option<&dyn MetricsLookup>) -> bool {
    node.prerequisites.iter().all(|p| completed.contains(*p))
        && node
            .cross_prerequisites
            .iter()
            .all(|c| cross_satisfied(c, metrics))
}

/// Whether every prerequisite of `node_id` is satisfied.
///
/// Unknown ids are never unlocked. Cross-prerequisites need a finite metric
/// at or above the threshold; a missing lookup or value counts as unmet.
pub fn is_unlocked(
    node_id: &str,
    completed: &CompletedSet,
    tree: &SkillTree,
    metrics: Option<&dyn MetricsLookup>,
) -> bool {
    tree.get(node_id)
        .is_some_and(|node| node_unlocked(node, completed, metrics))
}

/// Unmet requirements of a node, prerequisites first. Empty for unlocked
/// nodes and for ids not in the tree.
pub fn blockers(
    node_id: &str,
    completed: &CompletedSet,
    tree: &SkillTree,
    metrics: Option<&dyn MetricsLookup>,
) -> Vec<Blocker> {
    let Some(node) = tree.get(node_id) else {
        return Vec::new();
    };

    let missing = node
        .prerequisites
        .iter()
        .filter(|p| !completed.contains(**p))
        .map(|&id| Blocker::Prerequisite { id });

    let unmet = node
        .cross_prerequisites
        .iter()
        .filter(|c| !cross_satisfied(c, metrics))
        .map(|c| Blocker::Metric {
            exercise_id: c.exercise_id,
            metric: c.metric,
            threshold: c.threshold,
            current: metrics.and_then(|m| m.metric(c.exercise_id, c.metric)),
        });

    missing.chain(unmet).collect()
}

/// Every unlocked node, completed ones included, in tree order
pub fn get_unlocked<'t>(
    completed: &CompletedSet,
    tree: &'t SkillTree,
    metrics: Option<&dyn MetricsLookup>,
) -> Vec<&'t SkillNode> {
    tree.nodes()
        .iter()
        .filter(|n| node_unlocked(n, completed, metrics))
        .collect()
}

/// Unlocked nodes not yet completed - available to start now
pub fn get_next_progressions<'t>(
    completed: &CompletedSet,
    tree: &'t SkillTree,
    metrics: Option<&dyn MetricsLookup>,
) -> Vec<&'t SkillNode> {
    get_unlocked(completed, tree, metrics)
        .into_iter()
        .filter(|n| !completed.contains(n.id))
        .collect()
}

/// `round(completed / total * 100)`. Not capped; zero total gives 0.
pub fn get_progression_percentage(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

/// State of every node in tree order
pub fn node_states<'t>(
    tree: &'t SkillTree,
    completed: &CompletedSet,
    metrics: Option<&dyn MetricsLookup>,
) -> Vec<(&'t SkillNode, NodeState)> {
    tree.nodes()
        .iter()
        .map(|node| {
            let state = if completed.contains(node.id) {
                NodeState::Completed
            } else if node_unlocked(node, completed, metrics) {
                NodeState::Unlocked
            } else {
                NodeState::Locked
            };
            (node, state)
        })
        .collect()
}

/// Completion per exercise type present in the tree.
/// Completed ids that are not in the tree are ignored.
pub fn progress_by_type(tree: &SkillTree, completed: &CompletedSet) -> Vec<TypeProgress> {
    ExerciseType::all()
        .iter()
        .filter_map(|&exercise_type| {
            let total = tree.nodes_of_type(exercise_type).count();
            if total == 0 {
                return None;
            }
            let done = tree
                .nodes_of_type(exercise_type)
                .filter(|n| completed.contains(n.id))
                .count();
            Some(TypeProgress {
                exercise_type,
                completed: done,
                total,
                percentage: get_progression_percentage(done, total),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{TrainingMode, build_tree};

    fn completed(ids: &[&str]) -> CompletedSet {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_root_unlocked_with_nothing_done() {
        let tree = build_tree(TrainingMode::Bodyweight);
        assert!(is_unlocked("wall-pu", &completed(&[]), &tree, None));
    }

    #[test]
    fn test_chain_not_satisfied() {
        let tree = build_tree(TrainingMode::Bodyweight);
        assert!(!is_unlocked("knee-pu", &completed(&["wall-pu"]), &tree, None));
    }

    #[test]
    fn test_chain_satisfied() {
        let tree = build_tree(TrainingMode::Bodyweight);
        let done = completed(&["wall-pu", "incline-pu", "knee-pu", "standard-pu"]);
        assert!(is_unlocked("diamond-pu", &done, &tree, None));
    }

    #[test]
    fn test_unknown_node_is_locked() {
        let tree = build_tree(TrainingMode::Hybrid);
        assert!(!is_unlocked("levitation", &completed(&[]), &tree, None));
    }

    #[test]
    fn test_and_semantics() {
        let tree = build_tree(TrainingMode::Bodyweight);
        // parallel-dip needs both bench-dip and standard-pu
        let partial = completed(&["wall-pu", "incline-pu", "knee-pu", "bench-dip"]);
        assert!(!is_unlocked("parallel-dip", &partial, &tree, None));
        let full = completed(&["wall-pu", "incline-pu", "knee-pu", "bench-dip", "standard-pu"]);
        assert!(is_unlocked("parallel-dip", &full, &tree, None));
    }

    #[test]
    fn test_cross_prerequisite_needs_metric() {
        let tree = build_tree(TrainingMode::Iron);
        let done = completed(&["goblet-squat", "back-squat"]);

        assert!(!is_unlocked("front-squat", &done, &tree, None));
        assert!(!is_unlocked("front-squat", &done, &tree, Some(&NoMetrics)));

        let weak = MetricTable::new().with("back-squat", Metric::RelativeStrength, 1.1);
        assert!(!is_unlocked("front-squat", &done, &tree, Some(&weak)));

        let exact = MetricTable::new().with("back-squat", Metric::RelativeStrength, 1.25);
        assert!(is_unlocked("front-squat", &done, &tree, Some(&exact)));
    }

    #[test]
    fn test_cross_prerequisite_does_not_replace_completion() {
        let tree = build_tree(TrainingMode::Iron);
        let strong = MetricTable::new().with("back-squat", Metric::RelativeStrength, 2.0);
        assert!(!is_unlocked("front-squat", &completed(&["goblet-squat"]), &tree, Some(&strong)));
    }

    #[test]
    fn test_non_finite_metric_is_unmet() {
        let tree = build_tree(TrainingMode::Iron);
        let done = completed(&["goblet-squat", "back-squat"]);
        let broken = MetricTable::new().with("back-squat", Metric::RelativeStrength, f64::INFINITY);
        assert!(!is_unlocked("front-squat", &done, &tree, Some(&broken)));
        let nan = MetricTable::new().with("back-squat", Metric::RelativeStrength, f64::NAN);
        assert!(!is_unlocked("front-squat", &done, &tree, Some(&nan)));
    }

    #[test]
    fn test_cross_modality_gate_in_hybrid() {
        let tree = build_tree(TrainingMode::Hybrid);
        let done = completed(&["db-row", "barbell-row"]);
        let metrics = MetricTable::new().with("pullup", Metric::MaxReps, 12.0);
        assert!(is_unlocked("weighted-pullup", &done, &tree, Some(&metrics)));
    }

    #[test]
    fn test_blockers_list_what_is_missing() {
        let tree = build_tree(TrainingMode::Iron);
        let done = completed(&["goblet-squat"]);
        let metrics = MetricTable::new().with("back-squat", Metric::RelativeStrength, 1.0);
        let found = blockers("front-squat", &done, &tree, Some(&metrics));
        assert_eq!(
            found,
            vec![
                Blocker::Prerequisite { id: "back-squat" },
                Blocker::Metric {
                    exercise_id: "back-squat",
                    metric: Metric::RelativeStrength,
                    threshold: 1.25,
                    current: Some(1.0),
                },
            ]
        );
        assert_eq!(found[0].to_string(), "complete back-squat");
        assert_eq!(found[1].to_string(), "back-squat 1RM/BW >= 1.25 (now 1.00)");
    }

    #[test]
    fn test_blockers_empty_when_unlocked_or_unknown() {
        let tree = build_tree(TrainingMode::Bodyweight);
        assert!(blockers("wall-pu", &completed(&[]), &tree, None).is_empty());
        assert!(blockers("nope", &completed(&[]), &tree, None).is_empty());
        assert_eq!(blockers("knee-pu", &completed(&[]), &tree, None).len(), 1);
    }

    #[test]
    fn test_get_unlocked_includes_completed() {
        let tree = build_tree(TrainingMode::Bodyweight);
        let done = completed(&["wall-pu"]);
        let ids: Vec<_> = get_unlocked(&done, &tree, None).iter().map(|n| n.id).collect();
        assert!(ids.contains(&"wall-pu"));
        assert!(ids.contains(&"incline-pu"));
        assert!(!ids.contains(&"knee-pu"));
    }

    #[test]
    fn test_next_progressions_exclude_completed() {
        let tree = build_tree(TrainingMode::Hybrid);
        let done = completed(&["wall-pu", "incline-pu", "dead-hang", "plank", "brisk-walk"]);
        let next = get_next_progressions(&done, &tree, None);
        assert!(!next.is_empty());
        for node in &next {
            assert!(!done.contains(node.id), "{} already completed", node.id);
        }
        assert!(next.iter().any(|n| n.id == "knee-pu"));
    }

    #[test]
    fn test_next_progressions_from_scratch_are_roots() {
        let tree = build_tree(TrainingMode::Hybrid);
        let next = get_next_progressions(&completed(&[]), &tree, None);
        assert!(next.iter().all(|n| n.is_root()));
        assert_eq!(next.len(), tree.nodes().iter().filter(|n| n.is_root()).count());
    }

    #[test]
    fn test_progression_percentage() {
        assert_eq!(get_progression_percentage(0, 37), 0);
        assert_eq!(get_progression_percentage(37, 37), 100);
        assert_eq!(get_progression_percentage(1, 3), 33);
        assert_eq!(get_progression_percentage(2, 3), 67);
        assert_eq!(get_progression_percentage(5, 4), 125);
        assert_eq!(get_progression_percentage(3, 0), 0);
    }

    #[test]
    fn test_progression_percentage_strictly_increasing() {
        let total = 50;
        let mut last = get_progression_percentage(0, total);
        for done in 1..=total {
            let pct = get_progression_percentage(done, total);
            assert!(pct > last, "{} -> {} not increasing", done, pct);
            last = pct;
        }
    }

    #[test]
    fn test_node_states() {
        let tree = build_tree(TrainingMode::Bodyweight);
        let done = completed(&["wall-pu"]);
        let states: HashMap<_, _> = node_states(&tree, &done, None)
            .into_iter()
            .map(|(n, s)| (n.id, s))
            .collect();
        assert_eq!(states["wall-pu"], NodeState::Completed);
        assert_eq!(states["incline-pu"], NodeState::Unlocked);
        assert_eq!(states["knee-pu"], NodeState::Locked);
        assert_eq!(states.len(), tree.len());
    }

    #[test]
    fn test_progress_by_type() {
        let tree = build_tree(TrainingMode::Hybrid);
        let done = completed(&["wall-pu", "goblet-squat", "not-in-tree"]);
        let progress = progress_by_type(&tree, &done);
        assert_eq!(progress.len(), 3);
        let calisthenics = &progress[0];
        assert_eq!(calisthenics.exercise_type, ExerciseType::Calisthenics);
        assert_eq!(calisthenics.completed, 1);
        let cardio = &progress[2];
        assert_eq!(cardio.completed, 0);
        assert_eq!(cardio.percentage, 0);
    }

    #[test]
    fn test_progress_by_type_single_mode() {
        let tree = build_tree(TrainingMode::Cardio);
        let progress = progress_by_type(&tree, &completed(&[]));
        assert_eq!(progress.len(), 1);
        assert_eq!(progress[0].exercise_type, ExerciseType::Cardio);
    }
}
