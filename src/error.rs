// Heronym - Deterministic hero-name generator
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// A seed that is not a string reached the dynamically typed boundary.
    #[error("invalid argument at position {index}: expected a string seed, found {found}")]
    InvalidArgument { index: usize, found: &'static str },

    #[error("word list `{0}` is empty")]
    EmptyWordList(&'static str),
}
