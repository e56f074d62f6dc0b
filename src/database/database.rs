use chrono::NaiveDate;
use log::info;
use rusqlite::{params, OptionalExtension, Row};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tokio_rusqlite::Connection;

use super::record::{DailyGoals, NutritionRecord};
use crate::food::nutrition::NutritionInfo;

const DATE_FORMAT: &str = "%Y-%m-%d";
const IN_MEMORY: &str = ":memory:";

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] tokio_rusqlite::Error),
    #[error("Database connection error: {0}")]
    Connection(String),
    #[error("no record for {user_id} on {date}")]
    RecordMissing { user_id: String, date: NaiveDate },
}

#[derive(Clone)]
pub struct Database {
    conn: Arc<Connection>,
}

impl Database {
    /// Opens (creating if needed) the SQLite file at `path`; `:memory:` gives
    /// a throwaway in-memory database.
    pub async fn new<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        let opened = if path == Path::new(IN_MEMORY) {
            Connection::open_in_memory().await
        } else {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DatabaseError::Connection(format!("{}: {}", parent.display(), e))
                })?;
            }
            Connection::open(path.to_path_buf()).await
        };
        let conn = opened.map_err(|e| DatabaseError::Connection(e.to_string()))?;

        let db = Self {
            conn: Arc::new(conn),
        };
        db.initialize().await?;
        Ok(db)
    }

    pub async fn in_memory() -> Result<Self, DatabaseError> {
        Self::new(IN_MEMORY).await
    }

    async fn initialize(&self) -> Result<(), DatabaseError> {
        self.conn
            .call(|conn| {
                conn.execute_batch(
                    "CREATE TABLE IF NOT EXISTS nutrition_records (
                        id INTEGER PRIMARY KEY,
                        user_id TEXT NOT NULL,
                        date TEXT NOT NULL,
                        calories REAL NOT NULL DEFAULT 0,
                        fat REAL NOT NULL DEFAULT 0,
                        protein REAL NOT NULL DEFAULT 0,
                        carbs REAL NOT NULL DEFAULT 0,
                        daily_calories REAL NOT NULL,
                        daily_fat REAL NOT NULL,
                        daily_protein REAL NOT NULL,
                        daily_carbs REAL NOT NULL,
                        UNIQUE (user_id, date)
                    );",
                )
            })
            .await?;

        info!("Database initialized successfully");
        Ok(())
    }

    pub async fn find_record(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<NutritionRecord>, DatabaseError> {
        let user_id = user_id.to_string();
        let date = date.format(DATE_FORMAT).to_string();
        let record = self
            .conn
            .call(move |conn| {
                conn.query_row(
                    "SELECT user_id, date, calories, fat, protein, carbs,
                            daily_calories, daily_fat, daily_protein, daily_carbs
                     FROM nutrition_records
                     WHERE user_id = ?1 AND date = ?2",
                    params![user_id, date],
                    record_from_row,
                )
                .optional()
            })
            .await?;

        Ok(record)
    }

    pub async fn insert_record(&self, record: &NutritionRecord) -> Result<(), DatabaseError> {
        let record = record.clone();
        self.conn
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO nutrition_records
                        (user_id, date, calories, fat, protein, carbs,
                         daily_calories, daily_fat, daily_protein, daily_carbs)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                    params![
                        record.user_id,
                        record.date.format(DATE_FORMAT).to_string(),
                        record.consumed.calories,
                        record.consumed.fat,
                        record.consumed.protein,
                        record.consumed.carbs,
                        record.goals.calories,
                        record.goals.fat,
                        record.goals.protein,
                        record.goals.carbs,
                    ],
                )
            })
            .await?;

        Ok(())
    }

    /// Overwrites the consumed totals of an existing record. Returns false
    /// when no record matched.
    pub async fn update_consumed(
        &self,
        user_id: &str,
        date: NaiveDate,
        consumed: NutritionInfo,
    ) -> Result<(), DatabaseError> {
        let key = (user_id.to_string(), date.format(DATE_FORMAT).to_string());
        let changed = self
            .conn
            .call(move |conn| {
                conn.execute(
                    "UPDATE nutrition_records
                     SET calories = ?3, fat = ?4, protein = ?5, carbs = ?6
                     WHERE user_id = ?1 AND date = ?2",
                    params![
                        key.0,
                        key.1,
                        consumed.calories,
                        consumed.fat,
                        consumed.protein,
                        consumed.carbs,
                    ],
                )
            })
            .await?;

        if changed == 0 {
            return Err(DatabaseError::RecordMissing {
                user_id: user_id.to_string(),
                date,
            });
        }
        Ok(())
    }

    /// Most recent days first.
    pub async fn records_for_user(
        &self,
        user_id: &str,
        limit: u32,
    ) -> Result<Vec<NutritionRecord>, DatabaseError> {
        let user_id = user_id.to_string();
        let records = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT user_id, date, calories, fat, protein, carbs,
                            daily_calories, daily_fat, daily_protein, daily_carbs
                     FROM nutrition_records
                     WHERE user_id = ?1
                     ORDER BY date DESC
                     LIMIT ?2",
                )?;

                let rows = stmt.query_map(params![user_id, limit], record_from_row)?;

                let mut records = Vec::new();
                for row in rows {
                    records.push(row?);
                }

                Ok(records)
            })
            .await?;

        Ok(records)
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<NutritionRecord> {
    let date: String = row.get(1)?;
    let date = NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(NutritionRecord {
        user_id: row.get(0)?,
        date,
        consumed: NutritionInfo {
            calories: row.get(2)?,
            fat: row.get(3)?,
            protein: row.get(4)?,
            carbs: row.get(5)?,
        },
        goals: DailyGoals {
            calories: row.get(6)?,
            fat: row.get(7)?,
            protein: row.get(8)?,
            carbs: row.get(9)?,
        },
    })
}
