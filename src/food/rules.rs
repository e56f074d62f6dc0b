use serde::{Deserialize, Serialize};

// Phrases a caption uses for a pile of items instead of naming each one.
const BUILTIN_RULES: &[(&str, &str, u32)] = &[("group of apples", "apple", 5)];

/// Adds a fixed `count` of `item` whenever `phrase` appears in a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityRule {
    pub phrase: String,
    pub item: String,
    pub count: u32,
}

impl QuantityRule {
    pub fn new(phrase: impl Into<String>, item: impl Into<String>, count: u32) -> Self {
        Self {
            phrase: phrase.into().to_lowercase(),
            item: item.into().to_lowercase(),
            count,
        }
    }

    /// Case-insensitive substring match; `description` must already be lowercase.
    pub fn matches(&self, description: &str) -> bool {
        !self.phrase.is_empty() && description.contains(&self.phrase)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuantityRules {
    rules: Vec<QuantityRule>,
}

impl QuantityRules {
    pub fn new(rules: Vec<QuantityRule>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|r| QuantityRule::new(r.phrase, r.item, r.count))
                .collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_RULES
                .iter()
                .map(|&(phrase, item, count)| QuantityRule::new(phrase, item, count))
                .collect(),
        )
    }

    /// Rules whose phrase occurs in the description.
    pub fn matching<'a>(&'a self, description: &'a str) -> impl Iterator<Item = &'a QuantityRule> {
        self.rules.iter().filter(move |r| r.matches(description))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
