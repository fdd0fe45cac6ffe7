//! Theme resolution: a named preset merged slot-by-slot with caller overrides

pub mod theme;

pub use theme::{StyleSlot, ThemeName};

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Final slot -> token mapping handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleTokens(BTreeMap<StyleSlot, String>);

impl StyleTokens {
    pub fn get(&self, slot: StyleSlot) -> &str {
        self.0.get(&slot).map(String::as_str).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleSlot, &str)> {
        self.0.iter().map(|(slot, token)| (*slot, token.as_str()))
    }
}

/// Per-slot overrides keyed by the fixed slot set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleOverrides(HashMap<StyleSlot, String>);

impl StyleOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, slot: StyleSlot, token: impl Into<String>) -> Self {
        self.0.insert(slot, token.into());
        self
    }

    /// Parses a loosely keyed map. Keys that name no slot are returned
    /// alongside the overrides instead of being admitted.
    pub fn from_raw(raw: &HashMap<String, String>) -> (Self, Vec<String>) {
        let mut overrides = HashMap::new();
        let mut ignored = Vec::new();

        for (key, token) in raw {
            match StyleSlot::from_key(key) {
                Some(slot) => {
                    overrides.insert(slot, token.clone());
                }
                None => ignored.push(key.clone()),
            }
        }

        ignored.sort();
        (Self(overrides), ignored)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn resolve(theme_name: &str, overrides: &StyleOverrides) -> StyleTokens {
    let theme = ThemeName::from_name_or_default(theme_name);

    let tokens = theme
        .preset()
        .iter()
        .map(|(slot, token)| {
            let token = overrides.0.get(slot).cloned().unwrap_or_else(|| token.to_string());
            (*slot, token)
        })
        .collect();

    StyleTokens(tokens)
}
