// Heronym - Deterministic hero-name generator
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

//! Word lists the generator indexes into.
//!
//! The canonical lists are part of the output contract: any change to their
//! order or contents changes the name produced for existing seeds, so bump
//! [`WORD_LIST_VERSION`] whenever they are edited.

use crate::error::NameError;

/// Compatibility marker for the canonical lists below.
pub const WORD_LIST_VERSION: u32 = 1;

pub static FIRST_NAMES: [&str; 40] = [
    "Captain", "Doctor", "Silver", "Midnight", "Iron", "Crimson", "Shadow", "Golden",
    "Thunder", "Mighty", "Storm", "Night", "Star", "Atomic", "Cosmic", "Scarlet",
    "Phantom", "Steel", "Quantum", "Blazing", "Emerald", "Frost", "Solar", "Lunar",
    "Electric", "Savage", "Silent", "Radiant", "Obsidian", "Velvet", "Neon", "Titan",
    "Wild", "Ghost", "Sonic", "Mystic", "Rogue", "Ember", "Arctic", "Omega",
];

pub static SECOND_NAMES: [&str; 40] = [
    "Falcon", "Comet", "Sentinel", "Phoenix", "Wolf", "Panther", "Guardian", "Raven",
    "Vortex", "Tempest", "Hawk", "Knight", "Specter", "Viper", "Lancer", "Ranger",
    "Cyclone", "Striker", "Warden", "Nova", "Fury", "Hornet", "Blade", "Spark",
    "Mantis", "Cobra", "Titan", "Arrow", "Wraith", "Lynx", "Dragon", "Hammer",
    "Shield", "Bolt", "Crusader", "Jaguar", "Meteor", "Avenger", "Nomad", "Orbit",
];

pub static SUFFIXES: [&str; 40] = [
    "Prime", "the Bold", "the Brave", "of the North", "Supreme", "Unbound", "the Unyielding", "Rising",
    "Returns", "Forever", "the Fearless", "of the Stars", "Reborn", "Ascendant", "the Swift", "Infinite",
    "Zero", "the Silent", "of the Dawn", "Eternal", "the Wise", "Unleashed", "the Mighty", "of the Deep",
    "Legacy", "the Last", "Beyond", "Origins", "the Vigilant", "X", "the Relentless", "Alpha",
    "of Tomorrow", "Redux", "the Wanderer", "Ultimate", "the Gallant", "Nightfall", "the Untamed", "Triumphant",
];

/// The three ordered lookup tables a name is assembled from.
///
/// Borrowed so the canonical `'static` lists cost nothing to use, while lists
/// loaded from a settings file (`S = String`) go through the same code path.
#[derive(Debug)]
pub struct WordLists<'a, S = &'static str> {
    first_names: &'a [S],
    second_names: &'a [S],
    suffixes: &'a [S],
}

// Manual impls: a derive would demand `S: Copy`.
impl<S> Clone for WordLists<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for WordLists<'_, S> {}

/// The lists every seed maps into unless the caller supplies its own.
pub static CANONICAL: WordLists<'static> = WordLists {
    first_names: &FIRST_NAMES,
    second_names: &SECOND_NAMES,
    suffixes: &SUFFIXES,
};

impl Default for WordLists<'static> {
    fn default() -> Self {
        CANONICAL
    }
}

impl<'a, S: AsRef<str>> WordLists<'a, S> {
    /// Custom lists. Each one must hold at least one word, since indices are
    /// taken modulo the list length.
    pub fn new(first_names: &'a [S], second_names: &'a [S], suffixes: &'a [S]) -> Result<Self, NameError> {
        for (list, words) in [
            ("first_names", first_names),
            ("second_names", second_names),
            ("suffixes", suffixes),
        ] {
            if words.is_empty() {
                return Err(NameError::EmptyWordList(list));
            }
        }
        Ok(Self {
            first_names,
            second_names,
            suffixes,
        })
    }

    pub fn first_names(&self) -> &'a [S] {
        self.first_names
    }

    pub fn second_names(&self) -> &'a [S] {
        self.second_names
    }

    pub fn suffixes(&self) -> &'a [S] {
        self.suffixes
    }

    pub(crate) fn first(&self, index: usize) -> &'a str {
        let words: &'a [S] = self.first_names;
        words[index].as_ref()
    }

    pub(crate) fn second(&self, index: usize) -> &'a str {
        let words: &'a [S] = self.second_names;
        words[index].as_ref()
    }

    pub(crate) fn suffix(&self, index: usize) -> &'a str {
        let words: &'a [S] = self.suffixes;
        words[index].as_ref()
    }
}
