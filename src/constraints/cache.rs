//! Caller-owned result caches keyed by lineup content
//!
//! Keys are the full canonical content of the snapshot, so two lineups share
//! an entry only when every field that can affect the result is identical.
//! Player order in the input does not matter.

use super::calculator::BoundsTable;
use super::optimized::OptimizedConstraintCalculator;
use crate::core::types::{PlayerState, Role};
use crate::spatial::tolerance::Tolerance;
use crate::validation::{OverlapResult, OverlapValidator};
use ahash::AHashMap;
use std::collections::VecDeque;
use std::hash::BuildHasher;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct FingerprintEntry {
    slot: u8,
    x_bits: u64,
    y_bits: u64,
    is_server: bool,
    role: Role,
    id: String,
    display_name: String,
}

/// Order-independent content key for a lineup snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineupFingerprint {
    tolerance_bits: u64,
    entries: Vec<FingerprintEntry>,
}

impl LineupFingerprint {
    pub fn new(players: &[PlayerState], tol: Tolerance) -> Self {
        let mut entries: Vec<FingerprintEntry> = players
            .iter()
            .map(|p| FingerprintEntry {
                slot: p.slot,
                x_bits: p.x.to_bits(),
                y_bits: p.y.to_bits(),
                is_server: p.is_server,
                role: p.role,
                id: p.id.clone(),
                display_name: p.display_name.clone(),
            })
            .collect();
        entries.sort();

        Self {
            tolerance_bits: tol.eps().to_bits(),
            entries,
        }
    }

    /// Stable 64-bit digest, for logging
    pub fn digest(&self) -> u64 {
        ahash::RandomState::with_seeds(0x5eed, 0x0ff5, 0x1a7e, 0xc0de).hash_one(self)
    }
}

/// Bounded map with oldest-first eviction and hit counters
#[derive(Debug)]
struct ResultCache<V> {
    capacity: usize,
    entries: AHashMap<LineupFingerprint, V>,
    order: VecDeque<LineupFingerprint>,
    hits: u64,
    misses: u64,
}

impl<V: Clone> ResultCache<V> {
    fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: AHashMap::new(),
            order: VecDeque::new(),
            hits: 0,
            misses: 0,
        }
    }

    fn get_or_insert_with(&mut self, key: LineupFingerprint, compute: impl FnOnce() -> V) -> V {
        if let Some(value) = self.entries.get(&key) {
            self.hits += 1;
            tracing::trace!(digest = key.digest(), "cache hit");
            return value.clone();
        }

        self.misses += 1;
        tracing::trace!(digest = key.digest(), "cache miss");
        let value = compute();

        while self.entries.len() >= self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, value.clone());
        value
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Memoizes `OverlapValidator::validate`
#[derive(Debug)]
pub struct ValidationCache {
    inner: ResultCache<OverlapResult>,
}

impl ValidationCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: ResultCache::new(capacity),
        }
    }

    pub fn validate(
        &mut self,
        validator: &OverlapValidator,
        players: &[PlayerState],
    ) -> OverlapResult {
        let key = LineupFingerprint::new(players, validator.tolerance());
        self.inner.get_or_insert_with(key, || validator.validate(players))
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.stats()
    }
}

/// Memoizes `OptimizedConstraintCalculator::bounds_for_all`
#[derive(Debug)]
pub struct BoundsCache {
    inner: ResultCache<BoundsTable>,
}

impl BoundsCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: ResultCache::new(capacity),
        }
    }

    pub fn bounds_for_all(
        &mut self,
        calculator: &OptimizedConstraintCalculator,
        players: &[PlayerState],
    ) -> BoundsTable {
        let key = LineupFingerprint::new(players, calculator.tolerance());
        self.inner.get_or_insert_with(key, || calculator.bounds_for_all(players))
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.stats()
    }
}
