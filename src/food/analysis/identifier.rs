use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::food::rules::QuantityRules;
use crate::food::table::FoodNutritionTable;

/// A food mentioned in an image description with a naive count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentifiedItem {
    pub name: String,
    pub count: u32,
}

/// Finds known foods in a description. Each whole-word, case-insensitive
/// mention counts once; matching quantity rules then add their fixed counts on
/// top, even when the item was already mentioned.
pub fn identify_items(
    description: &str,
    table: &FoodNutritionTable,
    rules: &QuantityRules,
) -> Vec<IdentifiedItem> {
    let mut items: Vec<IdentifiedItem> = Vec::new();

    for name in table.names() {
        let count = match word_pattern(name) {
            Some(re) => u32::try_from(re.find_iter(description).count()).unwrap_or(u32::MAX),
            None => continue,
        };
        if count > 0 {
            items.push(IdentifiedItem {
                name: name.to_string(),
                count,
            });
        }
    }

    let lowered = description.to_lowercase();
    for rule in rules.matching(&lowered) {
        if rule.count == 0 {
            continue;
        }
        match items.iter_mut().find(|i| i.name == rule.item) {
            Some(item) => item.count = item.count.saturating_add(rule.count),
            None => items.push(IdentifiedItem {
                name: rule.item.clone(),
                count: rule.count,
            }),
        }
    }

    items
}

fn word_pattern(name: &str) -> Option<Regex> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(name)))
        .case_insensitive(true)
        .build()
        .map_err(|e| log::warn!("Skipping food name {:?}: {}", name, e))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::nutrition::NutritionInfo;
    use crate::food::rules::QuantityRule;

    fn item(name: &str, count: u32) -> IdentifiedItem {
        IdentifiedItem {
            name: name.to_string(),
            count,
        }
    }

    #[test]
    fn test_apple_and_banana() {
        let items = identify_items(
            "a photo of an apple and a banana",
            &FoodNutritionTable::builtin(),
            &QuantityRules::builtin(),
        );
        assert_eq!(items, vec![item("apple", 1), item("banana", 1)]);
    }

    #[test]
    fn test_counts_every_mention() {
        let items = identify_items(
            "An Egg next to an egg and a piece of bread",
            &FoodNutritionTable::builtin(),
            &QuantityRules::new(vec![]),
        );
        assert_eq!(items, vec![item("egg", 2), item("bread", 1)]);
    }

    #[test]
    fn test_whole_words_only() {
        let items = identify_items(
            "a pineapple and some eggplant",
            &FoodNutritionTable::builtin(),
            &QuantityRules::new(vec![]),
        );
        assert!(items.is_empty());
    }

    #[test]
    fn test_group_of_apples_adds_five() {
        let table = FoodNutritionTable::builtin();
        let rules = QuantityRules::builtin();

        let items = identify_items("a group of apples in a bowl", &table, &rules);
        assert_eq!(items, vec![item("apple", 5)]);

        // Stacks with a separate mention rather than replacing it.
        let items = identify_items("an apple beside a Group of Apples", &table, &rules);
        assert_eq!(items, vec![item("apple", 6)]);
    }

    #[test]
    fn test_large_rule_counts_saturate() {
        let rules = QuantityRules::new(vec![QuantityRule::new(
            "group of apples",
            "apple",
            u32::MAX,
        )]);
        let items = identify_items(
            "an apple and a group of apples",
            &FoodNutritionTable::builtin(),
            &rules,
        );
        assert_eq!(items, vec![item("apple", u32::MAX)]);
    }

    #[test]
    fn test_multi_word_names() {
        let mut table = FoodNutritionTable::default();
        table.insert("hot dog", NutritionInfo::new(290.0, 17.0, 10.0, 24.0));
        let items = identify_items(
            "a hot dog with mustard",
            &table,
            &QuantityRules::new(vec![QuantityRule::new("plate of", "hot dog", 0)]),
        );
        assert_eq!(items, vec![item("hot dog", 1)]);
    }

    #[test]
    fn test_nothing_recognised() {
        let items = identify_items(
            "a close up of a sign",
            &FoodNutritionTable::builtin(),
            &QuantityRules::builtin(),
        );
        assert!(items.is_empty());
    }
}
