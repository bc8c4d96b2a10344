// Heronym - Deterministic hero-name generator
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

pub mod seed {
    // Seed hashing

    /// Rolling `hash * 31 + unit` over the UTF-16 code units of `seed`.
    ///
    /// Every step wraps to a 32-bit signed integer. Hosts with wider native
    /// integers must not skip the wrap, or every name after the first
    /// overflow diverges.
    pub fn seed_hash(seed: &str) -> i32 {
        seed.encode_utf16().fold(0i32, |hash, unit| {
            // (hash << 5) - hash == hash * 31
            hash.wrapping_shl(5)
                .wrapping_sub(hash)
                .wrapping_add(i32::from(unit))
        })
    }

    /// Absolute value of a seed hash.
    ///
    /// `i32::MIN` has no positive i32 counterpart; it maps to `2^31`, the
    /// value a double-precision `abs` yields for it.
    pub fn seed_magnitude(hash: i32) -> u32 {
        hash.unsigned_abs()
    }
}

pub mod hero {
    use std::fmt;

    use serde::Serialize;

    use super::seed::{seed_hash, seed_magnitude};
    use crate::words::{WordLists, CANONICAL};

    const UNKNOWN_HERO: &str = "Unknown Hero";
    const SHORT_UNKNOWN_HERO: &str = "Hero";

    /// Which words a full name is built from.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
    #[serde(rename_all = "snake_case")]
    pub enum NameShape {
        /// `"{first} {second}"`
        Pair,
        /// `"{first} {second} {suffix}"`
        Titled,
        /// `"{second} {suffix}"`
        Epithet,
    }

    impl NameShape {
        /// Maps `magnitude % 3` to a shape. Anything outside `0..=2` falls
        /// back to [`NameShape::Pair`].
        pub fn from_selector(selector: u32) -> Self {
            match selector {
                1 => NameShape::Titled,
                2 => NameShape::Epithet,
                _ => NameShape::Pair,
            }
        }

        pub fn of_magnitude(magnitude: u32) -> Self {
            Self::from_selector(magnitude % 3)
        }
    }

    /// Positions into the three word lists, each consuming what the previous
    /// one left of the hash.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
    pub struct NameIndices {
        pub first: usize,
        pub second: usize,
        pub suffix: usize,
    }

    impl NameIndices {
        pub fn derive<S: AsRef<str>>(magnitude: u32, lists: &WordLists<'_, S>) -> Self {
            let m = magnitude as usize;
            let first_len = lists.first_names().len();
            let second_len = lists.second_names().len();
            let suffix_len = lists.suffixes().len();

            Self {
                first: m % first_len,
                second: (m / first_len) % second_len,
                // Saturating: custom lists can be long enough that the product
                // overflows on 32-bit targets; the quotient is 0 either way.
                suffix: (m / first_len.saturating_mul(second_len)) % suffix_len,
            }
        }
    }

    /// Full breakdown of the name a seed maps to.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize)]
    pub struct HeroName {
        pub seed_hash: i32,
        pub magnitude: u32,
        pub indices: NameIndices,
        pub shape: NameShape,
        pub first: String,
        pub second: String,
        pub suffix: String,
    }

    impl HeroName {
        /// `None` for the empty seed, which has no hash-derived name.
        pub fn from_seed(seed: &str) -> Option<Self> {
            CANONICAL.hero_name(seed)
        }

        /// The same string [`generate_short_random_name`] produces.
        pub fn short(&self) -> &str {
            if self.magnitude % 2 == 0 {
                &self.first
            } else {
                &self.second
            }
        }
    }

    impl fmt::Display for HeroName {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self.shape {
                NameShape::Pair => write!(f, "{} {}", self.first, self.second),
                NameShape::Titled => write!(f, "{} {} {}", self.first, self.second, self.suffix),
                NameShape::Epithet => write!(f, "{} {}", self.second, self.suffix),
            }
        }
    }

    impl<S: AsRef<str>> WordLists<'_, S> {
        pub fn hero_name(&self, seed: &str) -> Option<HeroName> {
            if seed.is_empty() {
                return None;
            }

            let seed_hash = seed_hash(seed);
            let magnitude = seed_magnitude(seed_hash);
            let indices = NameIndices::derive(magnitude, self);

            Some(HeroName {
                seed_hash,
                magnitude,
                indices,
                shape: NameShape::of_magnitude(magnitude),
                first: self.first(indices.first).to_string(),
                second: self.second(indices.second).to_string(),
                suffix: self.suffix(indices.suffix).to_string(),
            })
        }

        pub fn full_name(&self, seed: &str) -> String {
            match self.hero_name(seed) {
                Some(name) => name.to_string(),
                None => UNKNOWN_HERO.to_string(),
            }
        }

        pub fn short_name(&self, seed: &str) -> String {
            if seed.is_empty() {
                return SHORT_UNKNOWN_HERO.to_string();
            }

            let magnitude = seed_magnitude(seed_hash(seed));
            let m = magnitude as usize;
            let first_len = self.first_names().len();

            if magnitude % 2 == 0 {
                self.first(m % first_len).to_string()
            } else {
                self.second((m / first_len) % self.second_names().len()).to_string()
            }
        }
    }

    /// Display name for `seed` in one of three shapes. Same seed, same name,
    /// on every run and every platform.
    pub fn generate_random_name(seed: &str) -> String {
        CANONICAL.full_name(seed)
    }

    /// One-word variant drawn from the same first/second lists.
    pub fn generate_short_random_name(seed: &str) -> String {
        CANONICAL.short_name(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::hero::*;
    use super::seed::*;
    use crate::words::{WordLists, FIRST_NAMES, SECOND_NAMES, SUFFIXES};

    // Seed whose hash lands exactly on i32::MIN.
    const MIN_HASH_SEED: &str = "polygenelubricants";

    #[test]
    fn seed_hash_matches_known_values() {
        assert_eq!(seed_hash(""), 0);
        assert_eq!(seed_hash("a"), 97);
        assert_eq!(seed_hash("0"), 48);
        assert_eq!(seed_hash("Hello"), 69_609_650);
        assert_eq!(seed_hash("The Dark Knight"), -13_906_648);
        assert_eq!(seed_hash("tt0468569"), -2_012_940_878);
        assert_eq!(seed_hash(MIN_HASH_SEED), i32::MIN);
    }

    #[test]
    fn seed_hash_walks_utf16_code_units() {
        assert_eq!(seed_hash("héros"), 103_100_597);
        // Astral characters contribute both surrogates.
        assert_eq!(seed_hash("🦸"), 0xD83E * 31 + 0xDDB8);
        assert_eq!(seed_hash("🦸"), 1_772_858);
    }

    #[test]
    fn magnitude_of_min_hash_is_two_pow_31() {
        assert_eq!(seed_magnitude(i32::MIN), 2_147_483_648);
        assert_eq!(seed_magnitude(-13_906_648), 13_906_648);
        assert_eq!(seed_magnitude(i32::MAX), i32::MAX as u32);
        assert_eq!(seed_magnitude(0), 0);
    }

    #[test]
    fn empty_seed_literals() {
        assert_eq!(generate_random_name(""), "Unknown Hero");
        assert_eq!(generate_short_random_name(""), "Hero");
        assert!(HeroName::from_seed("").is_none());
    }

    #[test]
    fn golden_full_names() {
        let cases = [
            ("a", "Steel Sentinel Prime"),
            ("The Dark Knight", "Thunder Titan of the Stars"),
            ("Inception", "Crimson Phoenix the Vigilant"),
            ("Interstellar", "Mighty Titan"),
            ("Alien", "Omega Falcon"),
            ("Spirited Away", "Silent Cobra Unleashed"),
            ("Blade Runner 2049", "Arrow of the Deep"),
            ("tt0468569", "Comet Returns"),
            ("tt0111161", "Warden Beyond"),
            ("0", "Thunder Comet"),
            ("héros", "Crusader Nightfall"),
            ("🦸", "Comet the Vigilant"),
        ];
        for (seed, expected) in cases {
            assert_eq!(generate_random_name(seed), expected, "seed {seed:?}");
        }
    }

    #[test]
    fn golden_short_names() {
        let cases = [
            ("a", "Sentinel"),
            ("The Dark Knight", "Thunder"),
            ("Inception", "Phoenix"),
            ("Interstellar", "Titan"),
            ("Alien", "Falcon"),
            ("tt0468569", "Arctic"),
            ("Hello", "Storm"),
            ("🦸", "Quantum"),
        ];
        for (seed, expected) in cases {
            assert_eq!(generate_short_random_name(seed), expected, "seed {seed:?}");
        }
    }

    #[test]
    fn min_hash_seed_uses_unwrapped_magnitude() {
        let name = HeroName::from_seed(MIN_HASH_SEED).unwrap();
        assert_eq!(name.seed_hash, i32::MIN);
        assert_eq!(name.magnitude, 1 << 31);
        assert_eq!(name.indices, NameIndices { first: 8, second: 11, suffix: 17 });
        assert_eq!(name.shape, NameShape::Epithet);
        assert_eq!(generate_random_name(MIN_HASH_SEED), "Knight the Silent");
        assert_eq!(generate_short_random_name(MIN_HASH_SEED), "Thunder");
    }

    #[test]
    fn breakdown_agrees_with_string_api() {
        for seed in ["a", "The Dark Knight", "Alien", "tt0468569", MIN_HASH_SEED] {
            let name = HeroName::from_seed(seed).unwrap();
            assert_eq!(name.to_string(), generate_random_name(seed));
            assert_eq!(name.short(), generate_short_random_name(seed));
            assert_eq!(name.first, FIRST_NAMES[name.indices.first]);
            assert_eq!(name.second, SECOND_NAMES[name.indices.second]);
            assert_eq!(name.suffix, SUFFIXES[name.indices.suffix]);
        }
    }

    #[test]
    fn indices_consume_remaining_hash() {
        let lists = WordLists::default();
        // 1 + 2*40 + 3*1600
        let indices = NameIndices::derive(4_881, &lists);
        assert_eq!(indices, NameIndices { first: 1, second: 2, suffix: 3 });
        // Wraps around the suffix list.
        let indices = NameIndices::derive(40 * 40 * 40 + 5, &lists);
        assert_eq!(indices, NameIndices { first: 5, second: 0, suffix: 0 });
    }

    #[test]
    fn shape_selector_falls_back_to_pair() {
        assert_eq!(NameShape::from_selector(0), NameShape::Pair);
        assert_eq!(NameShape::from_selector(1), NameShape::Titled);
        assert_eq!(NameShape::from_selector(2), NameShape::Epithet);
        assert_eq!(NameShape::from_selector(7), NameShape::Pair);
    }

    #[test]
    fn custom_lists_share_hashing() {
        let first = vec!["Red".to_string(), "Blue".to_string()];
        let second = vec!["Fox".to_string(), "Owl".to_string(), "Elk".to_string()];
        let suffixes = vec!["Jr.".to_string()];
        let lists = WordLists::new(&first, &second, &suffixes).unwrap();

        // "a" hashes to 97: first 97 % 2 = 1, second (97 / 2) % 3 = 0, shape 97 % 3 = 1.
        assert_eq!(lists.full_name("a"), "Blue Fox Jr.");
        assert_eq!(lists.short_name("a"), "Fox");
        assert_eq!(lists.full_name(""), "Unknown Hero");
        assert_eq!(lists.short_name(""), "Hero");
    }

    #[test]
    fn generation_is_identical_across_threads() {
        let seeds = ["a", "The Dark Knight", "Inception", MIN_HASH_SEED, ""];
        let expected: Vec<String> = seeds.iter().map(|s| generate_random_name(s)).collect();

        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(move || seeds.iter().map(|s| generate_random_name(s)).collect::<Vec<_>>()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
