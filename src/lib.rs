// Heronym - Deterministic hero-name generator
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

//! Derives a fictional hero name from a stable seed string, such as a movie
//! identifier or title.
//!
//! ```
//! use heronym::{generate_random_name, generate_short_random_name};
//!
//! assert_eq!(generate_random_name("The Dark Knight"), "Thunder Titan of the Stars");
//! assert_eq!(generate_short_random_name("The Dark Knight"), "Thunder");
//! assert_eq!(generate_random_name(""), "Unknown Hero");
//! ```

pub mod batch;
pub mod error;
pub mod naming;
pub mod settings;
pub mod words;

pub use error::NameError;
pub use naming::hero::{generate_random_name, generate_short_random_name, HeroName, NameIndices, NameShape};
pub use naming::seed::{seed_hash, seed_magnitude};
pub use words::{WordLists, CANONICAL, WORD_LIST_VERSION};
