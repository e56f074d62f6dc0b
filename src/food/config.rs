use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::rules::{QuantityRule, QuantityRules};
use super::table::{FoodEntry, FoodNutritionTable};

#[derive(Error, Debug)]
pub enum ReferenceDataError {
    #[error("failed to open food table {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse food table {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("food table {0} contains no foods")]
    Empty(PathBuf),
}

#[derive(Debug, Clone, Default)]
pub struct FoodConfig {
    pub table_path: Option<PathBuf>,
}

impl FoodConfig {
    /// Reads `FOOD_TABLE_PATH`; blank means the built-in table.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            table_path: lookup("FOOD_TABLE_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Loads the food table and quantity rules once at startup, from the
    /// configured JSON file or the built-in defaults.
    pub fn load(&self) -> Result<ReferenceData, ReferenceDataError> {
        match &self.table_path {
            Some(path) => ReferenceData::from_file(path),
            None => Ok(ReferenceData::builtin()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ReferenceFile {
    foods: Vec<FoodEntry>,
    #[serde(default)]
    rules: Vec<QuantityRule>,
}

#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub table: FoodNutritionTable,
    pub rules: QuantityRules,
}

impl ReferenceData {
    pub fn builtin() -> Self {
        Self {
            table: FoodNutritionTable::builtin(),
            rules: QuantityRules::builtin(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ReferenceDataError> {
        let file = File::open(path).map_err(|source| ReferenceDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: ReferenceFile =
            serde_json::from_reader(file).map_err(|source| ReferenceDataError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if parsed.foods.is_empty() {
            return Err(ReferenceDataError::Empty(path.to_path_buf()));
        }

        log::info!(
            "Loaded {} foods and {} quantity rules from {}",
            parsed.foods.len(),
            parsed.rules.len(),
            path.display()
        );

        Ok(Self {
            table: FoodNutritionTable::new(parsed.foods),
            rules: QuantityRules::new(parsed.rules),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "foods": [
                    {{"name": "Mango", "calories": 200, "fat": 1.3, "protein": 2.8, "carbs": 50}}
                ],
                "rules": [
                    {{"phrase": "crate of mangoes", "item": "mango", "count": 12}}
                ]
            }}"#
        )
        .unwrap();

        let config = FoodConfig {
            table_path: Some(file.path().to_path_buf()),
        };
        let data = config.load().unwrap();

        assert_eq!(data.table.len(), 1);
        assert_eq!(data.table.get("mango").map(|n| n.calories), Some(200.0));
        assert_eq!(data.rules.matching("a crate of mangoes").count(), 1);
        assert!(data.table.get("apple").is_none());
    }

    #[test]
    fn test_rules_default_to_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"foods": [{{"name": "kiwi", "calories": 42, "fat": 0.4, "protein": 0.8, "carbs": 10}}]}}"#
        )
        .unwrap();

        let data = ReferenceData::from_file(file.path()).unwrap();
        assert!(data.rules.is_empty());
    }

    #[test]
    fn test_missing_file_and_bad_json() {
        let missing = ReferenceData::from_file(Path::new("/nonexistent/foods.json"));
        assert!(matches!(missing, Err(ReferenceDataError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let bad = ReferenceData::from_file(file.path());
        assert!(matches!(bad, Err(ReferenceDataError::Parse { .. })));
    }

    #[test]
    fn test_empty_foods_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"foods": []}}"#).unwrap();
        let empty = ReferenceData::from_file(file.path());
        assert!(matches!(empty, Err(ReferenceDataError::Empty(_))));
    }

    #[test]
    fn test_table_path_from_lookup() {
        let config = FoodConfig::from_lookup(|name| {
            (name == "FOOD_TABLE_PATH").then(|| "data/foods.json".to_string())
        });
        assert_eq!(config.table_path, Some(PathBuf::from("data/foods.json")));

        let blank = FoodConfig::from_lookup(|_| Some("  ".to_string()));
        assert!(blank.table_path.is_none());
    }

    #[test]
    fn test_builtin_when_unset() {
        let data = FoodConfig::default().load().unwrap();
        assert!(data.table.get("apple").is_some());
        assert_eq!(data.rules.len(), 1);
    }
}
