//! Logical-to-physical table name resolution.
//!
//! Migration and fixture files use stable *logical* names. Each run maps
//! them to *physical* names through one of these strategies:
//!
//! | Resolver | Physical name |
//! |----------|---------------|
//! | [`IdentityTableNameResolver`] | the logical name |
//! | [`RandomTableNameResolver`] | `<logical>_<random letters>` |
//! | [`TimestampTableNameResolver`] | `<logical>_<unix nanos>` |
//!
//! Unseeded random and timestamp names differ on every call. A
//! [`MemoizedTableNameResolver`] pins the first name of each table for the
//! rest of the process; [`DynamoTester`](crate::DynamoTester) wraps every
//! resolver it is given in one.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::{RngExt, SeedableRng};

use crate::clock::{Clock, SystemClock, unix_nanos};
use crate::go_rand::GoRandSource;

/// Maps a logical table name to the physical name used in the store.
pub trait TableNameResolver: Send + Sync + fmt::Debug {
    /// Resolve `logical` to a physical table name.
    fn resolve(&self, logical: &str) -> String;
}

impl<T: TableNameResolver + ?Sized> TableNameResolver for Arc<T> {
    fn resolve(&self, logical: &str) -> String {
        (**self).resolve(logical)
    }
}

impl<T: TableNameResolver + ?Sized> TableNameResolver for Box<T> {
    fn resolve(&self, logical: &str) -> String {
        (**self).resolve(logical)
    }
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Uses the logical name unchanged.
///
/// Tables keep their name across runs, so the cleaner is what keeps runs
/// apart.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTableNameResolver;

impl TableNameResolver for IdentityTableNameResolver {
    fn resolve(&self, logical: &str) -> String {
        logical.to_owned()
    }
}

// ---------------------------------------------------------------------------
// Random suffix
// ---------------------------------------------------------------------------

/// Default number of random letters appended by [`RandomTableNameResolver`].
pub const DEFAULT_SUFFIX_LEN: usize = 5;

const SUFFIX_LETTERS: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug)]
enum SuffixSource {
    /// Reseeded on every call, so every name gets the same suffix.
    Seeded(i64),
    Entropy(Mutex<SmallRng>),
}

/// Appends `_` and a run of random ASCII letters.
///
/// With [`with_seed`](Self::with_seed) every call returns the same suffix, and
/// that suffix is the one Go's `math/rand` draws for the seed
/// (`tableName_FOGwh` for seed 15). Otherwise letters come from a generator
/// seeded from the thread RNG, so resolving the same logical name twice gives
/// two different names.
#[derive(Debug)]
pub struct RandomTableNameResolver {
    suffix_len: usize,
    source: SuffixSource,
}

impl RandomTableNameResolver {
    /// A resolver with a fresh suffix on every call.
    #[must_use]
    pub fn new() -> Self {
        Self {
            suffix_len: DEFAULT_SUFFIX_LEN,
            source: SuffixSource::Entropy(Mutex::new(SmallRng::from_rng(&mut rand::rng()))),
        }
    }

    /// A resolver with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: i64) -> Self {
        Self {
            suffix_len: DEFAULT_SUFFIX_LEN,
            source: SuffixSource::Seeded(seed),
        }
    }

    /// Change the number of letters appended.
    #[must_use]
    pub fn with_suffix_len(mut self, suffix_len: usize) -> Self {
        self.suffix_len = suffix_len;
        self
    }

    fn suffix(&self) -> String {
        let letters = SUFFIX_LETTERS.len();
        let indices: Vec<usize> = match &self.source {
            SuffixSource::Seeded(seed) => {
                let mut source = GoRandSource::new(*seed);
                (0..self.suffix_len).map(|_| source.intn(letters)).collect()
            }
            SuffixSource::Entropy(rng) => {
                let mut rng = rng.lock();
                (0..self.suffix_len)
                    .map(|_| rng.random_range(0..letters))
                    .collect()
            }
        };
        indices
            .into_iter()
            .map(|i| char::from(SUFFIX_LETTERS[i]))
            .collect()
    }
}

impl Default for RandomTableNameResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TableNameResolver for RandomTableNameResolver {
    fn resolve(&self, logical: &str) -> String {
        format!("{logical}_{}", self.suffix())
    }
}

// ---------------------------------------------------------------------------
// Timestamp suffix
// ---------------------------------------------------------------------------

/// Appends `_` and the current Unix time in nanoseconds.
#[derive(Debug, Clone)]
pub struct TimestampTableNameResolver {
    clock: Arc<dyn Clock>,
}

impl TimestampTableNameResolver {
    /// A resolver reading time from `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Default for TimestampTableNameResolver {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl TableNameResolver for TimestampTableNameResolver {
    fn resolve(&self, logical: &str) -> String {
        format!("{logical}_{}", unix_nanos(self.clock.now()))
    }
}

// ---------------------------------------------------------------------------
// Memoization
// ---------------------------------------------------------------------------

/// Caches the first resolution of each logical name.
///
/// Lookup and insert happen under one lock, so concurrent first calls for
/// the same name all observe the same physical name and the inner resolver
/// runs once per name.
#[derive(Debug)]
pub struct MemoizedTableNameResolver<R> {
    inner: R,
    resolved: Mutex<HashMap<String, String>>,
}

impl<R: TableNameResolver> MemoizedTableNameResolver<R> {
    /// Memoize `inner`.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            resolved: Mutex::new(HashMap::new()),
        }
    }

    /// The wrapped resolver.
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: TableNameResolver> TableNameResolver for MemoizedTableNameResolver<R> {
    fn resolve(&self, logical: &str) -> String {
        let mut resolved = self.resolved.lock();
        if let Some(physical) = resolved.get(logical) {
            return physical.clone();
        }
        let physical = self.inner.resolve(logical);
        resolved.insert(logical.to_owned(), physical.clone());
        physical
    }
}
