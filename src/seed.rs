//! Hierarchical seed derivation.
//!
//! Every generated value traces back to a BLAKE3 digest of an ordered key.
//! The part encoding and the part order are part of the output contract:
//! changing either changes every world that was ever generated.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const SEED_BYTES: usize = 32;

/// Largest byte window `extract` will read in one go.
pub const MAX_EXTRACT_BYTES: usize = 8;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seed([u8; SEED_BYTES]);

#[derive(Clone, Copy, Debug)]
pub enum SeedPart<'a> {
    Str(&'a str),
    Int(i64),
    UInt(u64),
    Parent(&'a Seed),
}

impl<'a> From<&'a str> for SeedPart<'a> {
    fn from(value: &'a str) -> Self {
        SeedPart::Str(value)
    }
}

impl From<i64> for SeedPart<'_> {
    fn from(value: i64) -> Self {
        SeedPart::Int(value)
    }
}

impl From<u64> for SeedPart<'_> {
    fn from(value: u64) -> Self {
        SeedPart::UInt(value)
    }
}

impl From<u32> for SeedPart<'_> {
    fn from(value: u32) -> Self {
        SeedPart::UInt(value as u64)
    }
}

impl From<u8> for SeedPart<'_> {
    fn from(value: u8) -> Self {
        SeedPart::UInt(value as u64)
    }
}

impl<'a> From<&'a Seed> for SeedPart<'a> {
    fn from(value: &'a Seed) -> Self {
        SeedPart::Parent(value)
    }
}

impl Seed {
    pub fn derive(parts: &[SeedPart<'_>]) -> Self {
        let mut hasher = blake3::Hasher::new();
        for (index, part) in parts.iter().enumerate() {
            if index > 0 {
                hasher.update(b":");
            }
            match part {
                SeedPart::Str(value) => {
                    hasher.update(value.as_bytes());
                }
                SeedPart::Int(value) => {
                    hasher.update(value.to_string().as_bytes());
                }
                SeedPart::UInt(value) => {
                    hasher.update(value.to_string().as_bytes());
                }
                SeedPart::Parent(seed) => {
                    hasher.update(seed.to_hex().as_bytes());
                }
            }
        }
        Seed(hasher.finalize().into())
    }

    /// Child seed of `self` for the given label and index.
    pub fn child(&self, label: &str, index: u64) -> Self {
        Seed::derive(&[self.into(), label.into(), index.into()])
    }

    pub fn as_bytes(&self) -> &[u8; SEED_BYTES] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(SEED_BYTES * 2);
        for byte in self.0 {
            out.push_str(&format!("{byte:02x}"));
        }
        out
    }

    /// First eight bytes as a big-endian integer, for callers that key
    /// other generators by a plain number.
    pub fn to_u64(&self) -> u64 {
        read_be(&self.0[..8])
    }

    pub fn cursor(&self) -> SeedCursor<'_> {
        SeedCursor::new(self)
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({})", self.to_hex())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Reads `byte_length` bytes at `byte_offset` as a big-endian unsigned
/// integer and reduces it modulo `modulus`.
pub fn extract(seed: &Seed, byte_offset: usize, byte_length: usize, modulus: u64) -> u64 {
    assert!(modulus > 0, "extract modulus must be positive");
    assert!(
        (1..=MAX_EXTRACT_BYTES).contains(&byte_length),
        "extract length {byte_length} outside 1..={MAX_EXTRACT_BYTES}"
    );
    assert!(
        byte_offset + byte_length <= SEED_BYTES,
        "extract range {byte_offset}+{byte_length} runs past the seed"
    );
    read_be(&seed.0[byte_offset..byte_offset + byte_length]) % modulus
}

fn read_be(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0_u64, |acc, byte| (acc << 8) | *byte as u64)
}

/// Hands out non-overlapping byte ranges of one seed.
///
/// Sequential `take` calls advance a pointer; `take_at` pins an explicit
/// offset. Both record which bytes were consumed and debug-assert that no
/// byte feeds two attributes.
pub struct SeedCursor<'a> {
    seed: &'a Seed,
    position: usize,
    claimed: u32,
}

impl<'a> SeedCursor<'a> {
    pub fn new(seed: &'a Seed) -> Self {
        Self {
            seed,
            position: 0,
            claimed: 0,
        }
    }

    pub fn take(&mut self, byte_length: usize, modulus: u64) -> u64 {
        let offset = self.position;
        self.take_at(offset, byte_length, modulus)
    }

    pub fn take_at(&mut self, byte_offset: usize, byte_length: usize, modulus: u64) -> u64 {
        let mask = range_mask(byte_offset, byte_length);
        debug_assert!(
            self.claimed & mask == 0,
            "seed bytes {byte_offset}..{} already consumed",
            byte_offset + byte_length
        );
        self.claimed |= mask;
        self.position = self.position.max(byte_offset + byte_length);
        extract(self.seed, byte_offset, byte_length, modulus)
    }

    /// Uniform pick in `min..=max`.
    pub fn range(&mut self, byte_length: usize, min: u64, max: u64) -> u64 {
        debug_assert!(min <= max);
        min + self.take(byte_length, max - min + 1)
    }

    /// Percent roll in `0..100`.
    pub fn percent(&mut self) -> u64 {
        self.take(2, 100)
    }

    /// Fraction in `0.0..1.0` with 16-bit resolution.
    pub fn unit(&mut self) -> f64 {
        self.take(2, 65_536) as f64 / 65_536.0
    }

    pub fn remaining(&self) -> usize {
        SEED_BYTES.saturating_sub(self.position)
    }
}

fn range_mask(offset: usize, length: usize) -> u32 {
    let mut mask = 0_u32;
    for byte in offset..(offset + length).min(SEED_BYTES) {
        mask |= 1 << byte;
    }
    mask
}

/// Walks a cumulative weight table with a roll in `0..sum(weights)`.
pub fn pick_weighted<T: Copy>(roll: u64, table: &[(T, u32)]) -> Option<T> {
    let mut cumulative = 0_u64;
    for (value, weight) in table {
        cumulative += *weight as u64;
        if roll < cumulative {
            return Some(*value);
        }
    }
    None
}
