// Heronym - Deterministic hero-name generator
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

//! Naming seeds that arrive as untyped JSON.
//!
//! This is the one place a non-string seed can show up. The whole input is
//! checked before anything is hashed, so a bad entry produces no partial
//! report.

use serde::Serialize;
use serde_json::Value;

use crate::{error::NameError, settings::NameMode, words::WordLists, WORD_LIST_VERSION};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedSeed {
    pub seed: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NameReport {
    pub version: String,
    pub word_list_version: u32,
    pub custom_word_lists: bool,
    pub generated_at: String,
    pub mode: NameMode,
    pub names: Vec<NamedSeed>,
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Borrows every entry as a seed, or reports the first entry that is not a string.
pub fn seeds_from_values(values: &[Value]) -> Result<Vec<&str>, NameError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            value.as_str().ok_or(NameError::InvalidArgument {
                index,
                found: json_type_name(value),
            })
        })
        .collect()
}

impl NameReport {
    pub fn new<S: AsRef<str>>(
        seeds: &[&str],
        lists: &WordLists<'_, S>,
        mode: NameMode,
        custom_word_lists: bool,
    ) -> Self {
        let names = seeds
            .iter()
            .map(|seed| NamedSeed {
                seed: seed.to_string(),
                name: mode.name_for(lists, seed),
            })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            word_list_version: WORD_LIST_VERSION,
            custom_word_lists,
            generated_at: chrono::Utc::now().to_rfc3339(),
            mode,
            names,
        }
    }

    /// Parses `input` as a JSON array of seed strings and names each one.
    pub fn from_json<S: AsRef<str>>(
        input: &str,
        lists: &WordLists<'_, S>,
        mode: NameMode,
        custom_word_lists: bool,
    ) -> anyhow::Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        let Value::Array(values) = &value else {
            anyhow::bail!("expected a JSON array of seeds, found {}", json_type_name(&value));
        };

        let seeds = seeds_from_values(values)?;
        log::debug!("Naming {} seeds ({:?})", seeds.len(), mode);
        Ok(Self::new(&seeds, lists, mode, custom_word_lists))
    }
}
