//! Structural checks over an assembled tree
//!
//! Validation never fails: every problem becomes a `TreeIssue` and the
//! caller decides what to do with the report.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::SkillNode;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 10;

/// A single structural problem in a tree
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeIssue {
    #[error("node {id}: level {level} outside 1-10")]
    LevelOutOfRange { id: &'static str, level: u8 },

    #[error("node {id}: duplicate id")]
    DuplicateId { id: &'static str },

    #[error("node {id}: prerequisite {prerequisite} not found in tree")]
    MissingPrerequisite {
        id: &'static str,
        prerequisite: &'static str,
    },

    #[error("node {id}: level 1 node must not have prerequisites")]
    RootWithPrerequisites { id: &'static str },

    #[error("node {id}: lists itself as a prerequisite")]
    SelfPrerequisite { id: &'static str },

    #[error("node {id} (level {level}): prerequisite {prerequisite} sits at higher level {prerequisite_level}")]
    PrerequisiteAboveLevel {
        id: &'static str,
        level: u8,
        prerequisite: &'static str,
        prerequisite_level: u8,
    },

    #[error("prerequisite cycle: {}", .path.join(" -> "))]
    Cycle { path: Vec<&'static str> },

    #[error("node {id}: cross-prerequisite on {exercise_id} has invalid threshold {threshold}")]
    InvalidThreshold {
        id: &'static str,
        exercise_id: &'static str,
        threshold: f64,
    },
}

/// Validation outcome
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Validate a node list and render issues as messages
pub fn validate(nodes: &[SkillNode]) -> ValidationReport {
    let errors: Vec<String> = find_issues(nodes).iter().map(|i| i.to_string()).collect();
    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}

/// Collect every structural issue, in node order, cycles last
pub fn find_issues(nodes: &[SkillNode]) -> Vec<TreeIssue> {
    let mut issues = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(nodes.len());

    // Lookups resolve to the first occurrence, matching SkillTree
    for (i, node) in nodes.iter().enumerate() {
        if index.contains_key(node.id) {
            issues.push(TreeIssue::DuplicateId { id: node.id });
        } else {
            index.insert(node.id, i);
        }
    }

    for node in nodes {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&node.level) {
            issues.push(TreeIssue::LevelOutOfRange {
                id: node.id,
                level: node.level,
            });
        }

        if node.level == 1 && !node.prerequisites.is_empty() {
            issues.push(TreeIssue::RootWithPrerequisites { id: node.id });
        }

        for &prerequisite in node.prerequisites {
            if prerequisite == node.id {
                issues.push(TreeIssue::SelfPrerequisite { id: node.id });
                continue;
            }
            match index.get(prerequisite) {
                None => issues.push(TreeIssue::MissingPrerequisite {
                    id: node.id,
                    prerequisite,
                }),
                Some(&j) if nodes[j].level > node.level => {
                    issues.push(TreeIssue::PrerequisiteAboveLevel {
                        id: node.id,
                        level: node.level,
                        prerequisite,
                        prerequisite_level: nodes[j].level,
                    });
                }
                Some(_) => {}
            }
        }

        for cross in node.cross_prerequisites {
            if !cross.threshold.is_finite() || cross.threshold <= 0.0 {
                issues.push(TreeIssue::InvalidThreshold {
                    id: node.id,
                    exercise_id: cross.exercise_id,
                    threshold: cross.threshold,
                });
            }
        }
    }

    issues.extend(
        find_cycles(nodes, &index)
            .into_iter()
            .map(|path| TreeIssue::Cycle { path }),
    );

    issues
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    Visiting,
    Done,
}

/// Depth-first search over prerequisite edges. Each back edge yields one
/// cycle, written as `a -> b -> a` (a requires b requires a).
fn find_cycles(nodes: &[SkillNode], index: &HashMap<&str, usize>) -> Vec<Vec<&'static str>> {
    let mut marks = vec![Mark::Unvisited; nodes.len()];
    let mut path = Vec::new();
    let mut cycles = Vec::new();

    for start in 0..nodes.len() {
        if marks[start] == Mark::Unvisited {
            visit(start, nodes, index, &mut marks, &mut path, &mut cycles);
        }
    }

    cycles
}

fn visit(
    i: usize,
    nodes: &[SkillNode],
    index: &HashMap<&str, usize>,
    marks: &mut [Mark],
    path: &mut Vec<usize>,
    cycles: &mut Vec<Vec<&'static str>>,
) {
    marks[i] = Mark::Visiting;
    path.push(i);

    for prerequisite in nodes[i].prerequisites {
        let Some(&j) = index.get(prerequisite) else {
            continue;
        };
        if j == i {
            // Reported as SelfPrerequisite
            continue;
        }
        match marks[j] {
            Mark::Unvisited => visit(j, nodes, index, marks, path, cycles),
            Mark::Visiting => {
                if let Some(pos) = path.iter().position(|&p| p == j) {
                    let mut cycle: Vec<&'static str> =
                        path[pos..].iter().map(|&p| nodes[p].id).collect();
                    cycle.push(nodes[j].id);
                    cycles.push(cycle);
                }
            }
            Mark::Done => {}
        }
    }

    path.pop();
    marks[i] = Mark::Done;
}
