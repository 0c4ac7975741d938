//! calibra - Skill progression graph and adaptive readiness calibration
//!
//! Exercises form a prerequisite graph per modality; a daily check-in is
//! turned into a readiness factor that scales training intensity and
//! nutrition targets.

pub mod calibration;
pub mod catalog;
pub mod config;
pub mod db;
pub mod pantry;
pub mod strength;
pub mod tree;

pub use config::Config;
pub use db::Database;
