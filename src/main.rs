//! calibra - Skill progression graph and adaptive readiness calibration

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use calibra::calibration::{DailyCheckIn, DailyPlan};
use calibra::catalog::{ExerciseType, SkillNode};
use calibra::config::{Config, DEFAULT_CONFIG_PATH};
use calibra::db::Database;
use calibra::pantry::{InventoryItem, Recipe, rank_recipes};
use calibra::strength::{WorkoutMetrics, WorkoutSet};
use calibra::tree::{
    self, NodeState, TrainingMode, blockers, get_next_progressions, get_progression_percentage,
    is_unlocked, node_states, progress_by_type, validate,
};

#[derive(Parser)]
#[command(name = "calibra")]
#[command(author, version, about = "Skill tree progression and readiness-based calibration")]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, env = "CALIBRA_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override the configured training mode (bodyweight, iron, cardio, hybrid)
    #[arg(short, long, global = true)]
    mode: Option<TrainingMode>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every node with its state
    Tree {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show nodes available to start now
    Next,

    /// Mark a node as completed
    Complete {
        /// Node id (e.g., "standard-pu", "back-squat")
        node_id: String,

        /// Complete even if the node is still locked
        #[arg(long)]
        force: bool,
    },

    /// Log a workout set
    Log {
        /// Exercise id
        exercise: String,

        /// Load in kg (0 for bodyweight)
        #[arg(short, long, default_value = "0")]
        weight: f64,

        /// Reps in the set
        #[arg(short, long, default_value = "1")]
        reps: u32,

        /// Distance in km for cardio sessions
        #[arg(short, long)]
        distance: Option<f64>,
    },

    /// Record today's readiness check-in (sliders 1-5)
    Checkin {
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        sleep: u8,
        /// 5 = no soreness
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        soreness: u8,
        /// 5 = low stress
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        stress: u8,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        energy: u8,
    },

    /// Check the skill tree for structural problems
    Validate,

    /// Rank recipes by missing ingredients
    Gaps {
        /// Pantry items, comma separated
        #[arg(short, long, value_delimiter = ',')]
        pantry: Vec<String>,

        /// JSON file with a list of recipes
        #[arg(short, long)]
        recipes: PathBuf,
    },

    /// Show progression and readiness summary
    Stats,
}

#[derive(Serialize)]
struct NodeView<'a> {
    #[serde(flatten)]
    node: &'a SkillNode,
    state: NodeState,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    let mode = cli.mode.unwrap_or(config.training.mode);
    let tree = tree::tree(mode);
    let db = Database::open(&config.storage.db_path)?;

    match cli.command.unwrap_or(Commands::Stats) {
        Commands::Tree { json } => {
            let completed = db.completed_ids()?;
            let metrics = WorkoutMetrics::from_sets(&db.workout_sets()?, config.athlete.bodyweight_kg);
            let states = node_states(tree, &completed, Some(&metrics));

            if json {
                let views: Vec<_> = states
                    .iter()
                    .map(|(node, state)| NodeView { node, state: *state })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&views)?);
                return Ok(());
            }

            println!("Skill tree ({})", mode);
            for exercise_type in ExerciseType::all() {
                let mut rows = states
                    .iter()
                    .filter(|(n, _)| n.exercise_type == *exercise_type)
                    .peekable();
                if rows.peek().is_none() {
                    continue;
                }
                println!("\n{}", exercise_type.label());
                println!("{:-<60}", "");
                for (node, state) in rows {
                    println!(
                        "{} {} L{:<2} {:22} {}",
                        state.symbol(),
                        node.category.emoji(),
                        node.level,
                        node.id,
                        node.name
                    );
                }
            }
        }

        Commands::Next => {
            let completed = db.completed_ids()?;
            let metrics = WorkoutMetrics::from_sets(&db.workout_sets()?, config.athlete.bodyweight_kg);
            let next = get_next_progressions(&completed, tree, Some(&metrics));

            if next.is_empty() {
                println!("Nothing unlocked right now - keep logging to meet the next thresholds.");
            } else {
                println!("Available now:");
                println!("{:-<60}", "");
                for node in next {
                    println!("L{:<2} {:22} {}", node.level, node.id, node.description);
                }
            }
        }

        Commands::Complete { node_id, force } => {
            if !tree.contains(&node_id) {
                bail!("unknown node '{}' in {} tree", node_id, mode);
            }
            let completed = db.completed_ids()?;
            let metrics = WorkoutMetrics::from_sets(&db.workout_sets()?, config.athlete.bodyweight_kg);

            if !is_unlocked(&node_id, &completed, tree, Some(&metrics)) {
                let missing: Vec<String> = blockers(&node_id, &completed, tree, Some(&metrics))
                    .iter()
                    .map(|b| b.to_string())
                    .collect();
                if !force {
                    bail!("{} is locked: {}", node_id, missing.join("; "));
                }
                warn!(node = %node_id, "completing locked node: {}", missing.join("; "));
            }

            if db.mark_completed(&node_id, Utc::now())? {
                info!(node = %node_id, "node completed");
                println!("Completed: {}", node_id);
            } else {
                println!("{} was already completed", node_id);
            }
        }

        Commands::Log { exercise, weight, reps, distance } => {
            if !tree.contains(&exercise) {
                warn!(exercise = %exercise, "exercise not in the {} tree, logging anyway", mode);
            }
            let set = WorkoutSet {
                id: None,
                date: Utc::now(),
                exercise_id: exercise.clone(),
                weight_kg: weight,
                reps,
                distance_km: distance,
            };
            let id = db.add_workout_set(&set)?;
            match distance {
                Some(km) => println!("Logged: {} - {:.2} km (id: {})", exercise, km, id),
                None => println!("Logged: {} - {}kg x {} (id: {})", exercise, weight, reps, id),
            }
        }

        Commands::Checkin { sleep, soreness, stress, energy } => {
            let check_in = DailyCheckIn { sleep, soreness, stress, energy };
            let plan = DailyPlan::compute(
                &check_in.to_input(),
                &config.readiness,
                config.nutrition.policy,
                &config.nutrition.base,
            );
            db.save_check_in(Local::now().date_naive(), &check_in, &plan)?;
            info!(score = plan.score, factor = plan.factor, "check-in saved");
            println!("{}", plan.format());
        }

        Commands::Validate => {
            let report = validate(tree.nodes());
            if report.valid {
                println!("{} tree OK ({} nodes)", mode, tree.len());
            } else {
                for error in &report.errors {
                    println!("- {}", error);
                }
                bail!("{} tree has {} problem(s)", mode, report.errors.len());
            }
        }

        Commands::Gaps { pantry, recipes } => {
            let data = fs::read_to_string(&recipes)
                .with_context(|| format!("failed reading recipes: {}", recipes.display()))?;
            let recipes: Vec<Recipe> = serde_json::from_str(&data)
                .with_context(|| format!("failed parsing recipes: {}", recipes.display()))?;
            let inventory: Vec<InventoryItem> = pantry.into_iter().map(InventoryItem::Name).collect();

            for ranked in rank_recipes(&inventory, &recipes) {
                if ranked.missing.is_empty() {
                    println!("{} - ready to cook", ranked.recipe.title);
                } else {
                    println!(
                        "{} - missing {}: {}",
                        ranked.recipe.title,
                        ranked.missing.len(),
                        ranked.missing.join(", ")
                    );
                }
            }
        }

        Commands::Stats => {
            let completed = db.completed_ids()?;
            let metrics = WorkoutMetrics::from_sets(&db.workout_sets()?, config.athlete.bodyweight_kg);

            println!("Progression ({})", mode);
            println!("{:-<40}", "");
            let mut done_total = 0;
            for progress in progress_by_type(tree, &completed) {
                done_total += progress.completed;
                println!(
                    "{:14} {:>3}/{:<3} {:>3}%",
                    progress.exercise_type.label(),
                    progress.completed,
                    progress.total,
                    progress.percentage
                );
            }
            println!(
                "Overall: {}% | available now: {}",
                get_progression_percentage(done_total, tree.len()),
                get_next_progressions(&completed, tree, Some(&metrics)).len()
            );
            println!(
                "Bodyweight: {:.1} kg | exercises logged: {}",
                metrics.bodyweight_kg(),
                metrics.exercises().count()
            );

            match db.latest_check_in()? {
                Some(record) => println!(
                    "\nLast check-in {}: {} (factor {:.2}), {} kcal",
                    record.date, record.recommendation, record.factor, record.targets.calories
                ),
                None => println!("\nNo check-in yet - run `calibra checkin`"),
            }
        }
    }

    Ok(())
}
