// SPDX-License-Identifier: MPL-2.0
//! Pseudo-random toast identifiers.
//!
//! Generated ids have the shape of a version-4 UUID
//! (`xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`, `y` in `8..=b`) but come from a
//! small non-cryptographic generator. They only need to be distinct from
//! other toast ids, never unpredictable.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const TEMPLATE: &str = "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";

/// Length of every generated id.
pub const ID_LEN: usize = TEMPLATE.len();

#[derive(Debug, Clone)]
pub struct IdGenerator {
    rng: SmallRng,
}

impl IdGenerator {
    /// Creates a generator seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Creates a reproducible generator.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self) -> String {
        TEMPLATE
            .chars()
            .map(|c| match c {
                'x' => hex_digit(self.rng.random_range(0..16)),
                // variant nibble: high bits fixed to 10
                'y' => hex_digit(self.rng.random_range(0..16) & 0x3 | 0x8),
                other => other,
            })
            .collect()
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn hex_digit(value: u32) -> char {
    char::from_digit(value, 16).unwrap_or('0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_well_formed(id: &str) {
        let bytes = id.as_bytes();
        assert_eq!(id.len(), ID_LEN, "unexpected length: {id}");
        for (i, b) in bytes.iter().enumerate() {
            match i {
                8 | 13 | 18 | 23 => assert_eq!(*b, b'-', "hyphen expected at {i} in {id}"),
                14 => assert_eq!(*b, b'4', "version nibble in {id}"),
                19 => assert!(b"89ab".contains(b), "variant nibble in {id}"),
                _ => assert!(b.is_ascii_hexdigit() && !b.is_ascii_uppercase()),
            }
        }
    }

    #[test]
    fn generated_ids_follow_v4_layout() {
        let mut ids = IdGenerator::with_seed(7);
        for _ in 0..500 {
            assert_well_formed(&ids.generate());
        }
    }

    #[test]
    fn variant_nibble_covers_all_four_values() {
        let mut ids = IdGenerator::with_seed(42);
        let seen: HashSet<u8> = (0..500).map(|_| ids.generate().as_bytes()[19]).collect();
        assert_eq!(seen, HashSet::from([b'8', b'9', b'a', b'b']));
    }

    #[test]
    fn ids_do_not_repeat_in_practice() {
        let mut ids = IdGenerator::new();
        let unique: HashSet<String> = (0..1000).map(|_| ids.generate()).collect();
        assert_eq!(unique.len(), 1000);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = IdGenerator::with_seed(1);
        let mut b = IdGenerator::with_seed(1);
        assert_eq!(a.generate(), b.generate());
    }
}
