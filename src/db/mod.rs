//! Database module - SQLite storage for completions, workouts and check-ins

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, params};
use serde::{Deserialize, Serialize};

use crate::calibration::{DailyCheckIn, DailyPlan, NutritionTargets, Recommendation};
use crate::strength::WorkoutSet;
use crate::tree::CompletedSet;

/// Stored daily check-in with the plan computed from it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckInRecord {
    pub date: NaiveDate,
    pub check_in: DailyCheckIn,
    pub score: f64,
    pub factor: f64,
    pub recommendation: Recommendation,
    pub targets: NutritionTargets,
}

/// Database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed opening database: {}", path))?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS completed_nodes (
                node_id TEXT PRIMARY KEY,
                completed_at TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS workout_sets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                exercise_id TEXT NOT NULL,
                weight_kg REAL NOT NULL,
                reps INTEGER NOT NULL,
                distance_km REAL
            );
            CREATE TABLE IF NOT EXISTS check_ins (
                date TEXT PRIMARY KEY,
                sleep INTEGER NOT NULL,
                soreness INTEGER NOT NULL,
                stress INTEGER NOT NULL,
                energy INTEGER NOT NULL,
                score REAL NOT NULL,
                factor REAL NOT NULL,
                recommendation TEXT NOT NULL,
                calories INTEGER NOT NULL,
                protein INTEGER NOT NULL,
                carbs INTEGER NOT NULL,
                fat INTEGER NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Mark a node done. Returns false if it was already completed.
    pub fn mark_completed(&self, node_id: &str, at: DateTime<Utc>) -> Result<bool> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO completed_nodes (node_id, completed_at) VALUES (?1, ?2)",
            params![node_id, at.to_rfc3339()],
        )?;
        Ok(inserted > 0)
    }

    /// All completed node ids
    pub fn completed_ids(&self) -> Result<CompletedSet> {
        let mut stmt = self.conn.prepare("SELECT node_id FROM completed_nodes")?;
        let ids = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<CompletedSet, _>>()?;
        Ok(ids)
    }

    /// Add a logged set
    pub fn add_workout_set(&self, set: &WorkoutSet) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO workout_sets (date, exercise_id, weight_kg, reps, distance_km) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                set.date.to_rfc3339(),
                set.exercise_id,
                set.weight_kg,
                set.reps,
                set.distance_km,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All logged sets, newest first
    pub fn workout_sets(&self) -> Result<Vec<WorkoutSet>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, exercise_id, weight_kg, reps, distance_km FROM workout_sets ORDER BY date DESC, id DESC",
        )?;

        let sets = stmt
            .query_map([], |row| {
                let date_str: String = row.get(1)?;
                Ok(WorkoutSet {
                    id: Some(row.get(0)?),
                    date: DateTime::parse_from_rfc3339(&date_str)
                        .map(|d| d.with_timezone(&Utc))
                        .map_err(|e| {
                            rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e))
                        })?,
                    exercise_id: row.get(2)?,
                    weight_kg: row.get(3)?,
                    reps: row.get(4)?,
                    distance_km: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(sets)
    }

    /// Store today's check-in and plan, replacing an earlier one for the date
    pub fn save_check_in(&self, date: NaiveDate, check_in: &DailyCheckIn, plan: &DailyPlan) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO check_ins
                (date, sleep, soreness, stress, energy, score, factor, recommendation, calories, protein, carbs, fat)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                date.to_string(),
                check_in.sleep,
                check_in.soreness,
                check_in.stress,
                check_in.energy,
                plan.score,
                plan.factor,
                plan.recommendation.to_string(),
                plan.targets.calories,
                plan.targets.protein,
                plan.targets.carbs,
                plan.targets.fat,
            ],
        )?;
        Ok(())
    }

    /// Most recent check-in, if any
    pub fn latest_check_in(&self) -> Result<Option<CheckInRecord>> {
        let row = self
            .conn
            .query_row(
                "SELECT date, sleep, soreness, stress, energy, score, factor, recommendation,
                        calories, protein, carbs, fat
                 FROM check_ins ORDER BY date DESC LIMIT 1",
                [],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        DailyCheckIn {
                            sleep: row.get(1)?,
                            soreness: row.get(2)?,
                            stress: row.get(3)?,
                            energy: row.get(4)?,
                        },
                        row.get::<_, f64>(5)?,
                        row.get::<_, f64>(6)?,
                        row.get::<_, String>(7)?,
                        NutritionTargets {
                            calories: row.get(8)?,
                            protein: row.get(9)?,
                            carbs: row.get(10)?,
                            fat: row.get(11)?,
                        },
                    ))
                },
            )
            .optional()?;

        let Some((date, check_in, score, factor, recommendation, targets)) = row else {
            return Ok(None);
        };

        Ok(Some(CheckInRecord {
            date: date
                .parse()
                .with_context(|| format!("bad check-in date: {}", date))?,
            check_in,
            score,
            factor,
            recommendation: recommendation.parse().map_err(|e: String| anyhow!(e))?,
            targets,
        }))
    }
}
