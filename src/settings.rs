// Heronym - Deterministic hero-name generator
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::words::WordLists;

pub const SETTINGS_FILE_NAME: &str = "heronym_settings.json";

/// Full name or the one-word variant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum NameMode {
    #[default]
    Full,
    Short,
}

impl NameMode {
    pub fn name_for<S: AsRef<str>>(self, lists: &WordLists<'_, S>, seed: &str) -> String {
        match self {
            NameMode::Full => lists.full_name(seed),
            NameMode::Short => lists.short_name(seed),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Replacement lists. Names produced with these are not comparable with
/// names from the canonical lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CustomWordLists {
    pub first_names: Vec<String>,
    pub second_names: Vec<String>,
    pub suffixes: Vec<String>,
}

impl CustomWordLists {
    pub fn word_lists(&self) -> anyhow::Result<WordLists<'_, String>> {
        WordLists::new(&self.first_names, &self.second_names, &self.suffixes)
            .context("custom word lists are unusable")
    }

    fn sanitize(&mut self) {
        for list in [&mut self.first_names, &mut self.second_names, &mut self.suffixes] {
            for word in list.iter_mut() {
                *word = word.trim().to_string();
            }
            list.retain(|word| !word.is_empty());
        }
    }

    fn is_usable(&self) -> bool {
        !(self.first_names.is_empty() || self.second_names.is_empty() || self.suffixes.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    pub mode: NameMode,
    pub format: OutputFormat,
    pub word_lists: Option<CustomWordLists>,
}

impl Settings {
    pub fn default_path() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(SETTINGS_FILE_NAME)
    }

    pub fn load_from_disk(path: &Path) -> anyhow::Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let mut settings: Settings = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse settings in {}", path.display()))?;
        settings.sanitize();
        Ok(settings)
    }

    /// Like [`Settings::load_from_disk`], but a missing file yields defaults.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let settings = Self::load_from_disk(path)?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save_to_disk(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn sanitize(&mut self) {
        if let Some(lists) = self.word_lists.as_mut() {
            lists.sanitize();
            if !lists.is_usable() {
                log::warn!("Ignoring custom word lists: every list needs at least one word");
                self.word_lists = None;
            }
        }
    }
}
