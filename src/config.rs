//! Table sizing configuration and its validation error.

use crate::bucket::Bucket;
use core::fmt;

/// Bucket count a table starts with unless configured otherwise.
pub const DEFAULT_BUCKETS: usize = 16;

/// Ratio of entries to buckets above which an insertion triggers growth.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

/// Largest bucket array whose byte size still fits in `isize::MAX`.
pub const MAX_BUCKETS: usize = isize::MAX as usize / core::mem::size_of::<Bucket<()>>();

/// Sizing knobs for a [`Table`](crate::table::Table).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub initial_buckets: usize,
    pub max_load_factor: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_buckets: DEFAULT_BUCKETS,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_buckets(mut self, buckets: usize) -> Self {
        self.initial_buckets = buckets;
        self
    }

    pub fn with_max_load_factor(mut self, load_factor: f64) -> Self {
        self.max_load_factor = load_factor;
        self
    }

    /// Config whose bucket count holds `capacity` entries without growing.
    ///
    /// Starts from the default bucket count and doubles, so small
    /// capacities still get the default table. Clamped to [`MAX_BUCKETS`].
    pub fn for_capacity(capacity: usize) -> Self {
        let mut buckets = DEFAULT_BUCKETS;
        while capacity as f64 / buckets as f64 > DEFAULT_MAX_LOAD_FACTOR {
            match buckets.checked_mul(2) {
                Some(b) if b <= MAX_BUCKETS => buckets = b,
                _ => {
                    buckets = MAX_BUCKETS;
                    break;
                }
            }
        }
        Self::default().with_initial_buckets(buckets)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_buckets == 0 {
            return Err(ConfigError::ZeroBuckets);
        }
        if self.initial_buckets > MAX_BUCKETS {
            return Err(ConfigError::TooManyBuckets(self.initial_buckets));
        }
        let lf = self.max_load_factor;
        if !lf.is_finite() || lf <= 0.0 {
            return Err(ConfigError::InvalidLoadFactor(lf));
        }
        // A single entry must fit under the ceiling within MAX_BUCKETS.
        if 1.0 / lf > MAX_BUCKETS as f64 {
            return Err(ConfigError::LoadFactorTooSmall(lf));
        }
        Ok(())
    }
}

/// Rejected [`TableConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A table needs at least one bucket.
    ZeroBuckets,
    /// Bucket array would not fit in memory addressable by a `Vec`.
    TooManyBuckets(usize),
    /// Load factor must be finite and strictly positive.
    InvalidLoadFactor(f64),
    /// Even one entry would need more than [`MAX_BUCKETS`] buckets.
    LoadFactorTooSmall(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroBuckets => write!(f, "initial bucket count must be at least 1"),
            ConfigError::TooManyBuckets(n) => {
                write!(f, "initial bucket count {} exceeds limit {}", n, MAX_BUCKETS)
            }
            ConfigError::InvalidLoadFactor(lf) => {
                write!(f, "max load factor must be finite and > 0, got {}", lf)
            }
            ConfigError::LoadFactorTooSmall(lf) => {
                write!(
                    f,
                    "max load factor {} needs more than {} buckets for one entry",
                    lf, MAX_BUCKETS
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
