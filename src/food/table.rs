use serde::{Deserialize, Serialize};

use super::nutrition::NutritionInfo;

/// Per-unit nutrition facts for one named food item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,
    #[serde(flatten)]
    pub nutrition: NutritionInfo,
}

// Rough per-unit values for whole items as a captioning model would name them.
const BUILTIN_FOODS: &[(&str, f64, f64, f64, f64)] = &[
    ("apple", 95.0, 0.3, 0.5, 25.0),
    ("banana", 105.0, 0.4, 1.3, 27.0),
    ("orange", 62.0, 0.2, 1.2, 15.0),
    ("pear", 101.0, 0.2, 0.6, 27.0),
    ("peach", 59.0, 0.4, 1.4, 14.0),
    ("lemon", 17.0, 0.2, 0.6, 5.4),
    ("strawberry", 4.0, 0.0, 0.1, 0.9),
    ("grape", 3.0, 0.0, 0.0, 0.8),
    ("carrot", 25.0, 0.1, 0.6, 6.0),
    ("tomato", 22.0, 0.2, 1.1, 4.8),
    ("broccoli", 50.0, 0.6, 4.2, 10.0),
    ("potato", 163.0, 0.2, 4.3, 37.0),
    ("egg", 78.0, 5.3, 6.3, 0.6),
    ("bread", 79.0, 1.0, 2.7, 15.0),
    ("donut", 195.0, 11.0, 2.1, 22.0),
    ("sandwich", 300.0, 12.0, 15.0, 33.0),
    ("pizza", 285.0, 10.0, 12.0, 36.0),
    ("hot dog", 290.0, 17.0, 10.0, 24.0),
    ("cookie", 78.0, 3.7, 0.9, 10.0),
    ("cake", 235.0, 10.0, 3.0, 34.0),
];

/// Read-only name → nutrition lookup. Names are stored lowercase and keep the
/// order they were added in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodNutritionTable {
    entries: Vec<FoodEntry>,
}

impl FoodNutritionTable {
    pub fn new(entries: Vec<FoodEntry>) -> Self {
        let mut table = Self::default();
        for entry in entries {
            table.insert(entry.name, entry.nutrition);
        }
        table
    }

    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_FOODS
                .iter()
                .map(|&(name, calories, fat, protein, carbs)| FoodEntry {
                    name: name.to_string(),
                    nutrition: NutritionInfo::new(calories, fat, protein, carbs),
                })
                .collect(),
        )
    }

    /// Adds an item, replacing an earlier entry with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, nutrition: NutritionInfo) {
        let name = name.into().trim().to_lowercase();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => existing.nutrition = nutrition,
            None => self.entries.push(FoodEntry { name, nutrition }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&NutritionInfo> {
        let name = name.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.nutrition)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
