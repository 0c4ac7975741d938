//! Tree builder - assembles catalogs into a progression graph

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{
    BODYWEIGHT_NODES, CARDIO_NODES, ExerciseType, IRON_NODES, LegacyNode, Prescription, SkillNode,
};

use super::validator::validate;

/// Which catalogs make up the working tree
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrainingMode {
    Bodyweight,
    Iron,
    Cardio,
    #[default]
    Hybrid,
}

impl TrainingMode {
    pub fn all() -> &'static [TrainingMode] {
        &[
            TrainingMode::Bodyweight,
            TrainingMode::Iron,
            TrainingMode::Cardio,
            TrainingMode::Hybrid,
        ]
    }

    fn slot(self) -> usize {
        match self {
            TrainingMode::Bodyweight => 0,
            TrainingMode::Iron => 1,
            TrainingMode::Cardio => 2,
            TrainingMode::Hybrid => 3,
        }
    }
}

impl fmt::Display for TrainingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bodyweight => write!(f, "bodyweight"),
            Self::Iron => write!(f, "iron"),
            Self::Cardio => write!(f, "cardio"),
            Self::Hybrid => write!(f, "hybrid"),
        }
    }
}

impl FromStr for TrainingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bodyweight" => Ok(Self::Bodyweight),
            "iron" => Ok(Self::Iron),
            "cardio" => Ok(Self::Cardio),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(format!("Unknown training mode: {}", other)),
        }
    }
}

/// Assembled progression graph with an id index
#[derive(Debug, Clone)]
pub struct SkillTree {
    mode: TrainingMode,
    nodes: Vec<SkillNode>,
    index: HashMap<&'static str, usize>,
}

impl SkillTree {
    /// Wrap nodes as-is. On duplicate ids the first occurrence wins lookups.
    pub fn from_nodes(mode: TrainingMode, nodes: Vec<SkillNode>) -> Self {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            index.entry(node.id).or_insert(i);
        }
        Self { mode, nodes, index }
    }

    pub fn mode(&self) -> TrainingMode {
        self.mode
    }

    pub fn nodes(&self) -> &[SkillNode] {
        &self.nodes
    }

    pub fn get(&self, id: &str) -> Option<&SkillNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes of one exercise type, in tree order
    pub fn nodes_of_type(&self, exercise_type: ExerciseType) -> impl Iterator<Item = &SkillNode> {
        self.nodes
            .iter()
            .filter(move |n| n.exercise_type == exercise_type)
    }
}

/// Lift a legacy bodyweight node into the canonical shape
pub fn lift_legacy(node: &LegacyNode) -> SkillNode {
    SkillNode {
        id: node.id,
        name: node.name,
        description: node.description,
        level: node.level,
        prescription: Prescription::Strength {
            sets: node.sets,
            reps: node.reps,
        },
        category: node.category,
        exercise_type: ExerciseType::Calisthenics,
        prerequisites: node.prerequisites,
        cross_prerequisites: &[],
    }
}

fn bodyweight_nodes() -> impl Iterator<Item = SkillNode> {
    BODYWEIGHT_NODES.iter().map(lift_legacy)
}

/// Build a tree for the given mode from the bundled catalogs
pub fn build_tree(mode: TrainingMode) -> SkillTree {
    let nodes: Vec<SkillNode> = match mode {
        TrainingMode::Bodyweight => bodyweight_nodes().collect(),
        TrainingMode::Iron => IRON_NODES.to_vec(),
        TrainingMode::Cardio => CARDIO_NODES.to_vec(),
        TrainingMode::Hybrid => bodyweight_nodes()
            .chain(IRON_NODES.iter().copied())
            .chain(CARDIO_NODES.iter().copied())
            .collect(),
    };

    assemble(mode, nodes)
}

/// Validate `nodes` and wrap them as a tree.
///
/// Always returns a tree holding every node. Validation problems are
/// logged as warnings so inconsistent authored data never takes the
/// caller down.
pub fn assemble(mode: TrainingMode, nodes: Vec<SkillNode>) -> SkillTree {
    let report = validate(&nodes);
    if !report.valid {
        for error in &report.errors {
            warn!(%mode, "skill tree: {}", error);
        }
    }
    debug!(%mode, nodes = nodes.len(), "skill tree assembled");

    SkillTree::from_nodes(mode, nodes)
}

static TREES: [OnceLock<SkillTree>; 4] = [const { OnceLock::new() }; 4];

/// Shared read-only tree for a mode, built on first use
pub fn tree(mode: TrainingMode) -> &'static SkillTree {
    TREES[mode.slot()].get_or_init(|| build_tree(mode))
}
