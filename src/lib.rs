//! chained-hashmap: a separately chained hash map and hash set over
//! `String` keys, built on one shared bucket engine.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep hashing, chaining and growth in one place so the map and
//!   the set cannot drift apart.
//! - Layers:
//!   - `hash`: polynomial string hash, `acc * 31 + code_point`, reduced
//!     modulo the current bucket count.
//!   - `Bucket<V>`: an ordered chain of entries whose keys collide at one
//!     slot; key-unique, insertion-ordered.
//!   - `Table<V>`: the bucket array plus an entry counter; owns upsert,
//!     lookup, delete, resize and clear.
//!   - `ChainedMap<V>` / `ChainedSet`: thin facades. The set is a
//!     `Table<()>`.
//!
//! Constraints
//! - Single-threaded: every mutation takes `&mut self`; wrap a facade in a
//!   `Mutex` to share it across threads.
//! - Every bucket slot is always an initialized (possibly empty) chain.
//! - Absence is data: lookups and removals of missing keys return `None`.
//!
//! Growth
//! - After an insertion adds a new entry, `len / bucket_count` is checked;
//!   above the ceiling (0.75 by default) the bucket count doubles before
//!   the call returns.
//! - Overwrites and removals never resize. The table never shrinks, and
//!   `clear()` keeps the bucket count it had.
//! - Resize builds a complete new bucket array and moves it into place, so
//!   no half-rehashed state is ever visible.
//!
//! Hashing and rehashing
//! - Bucket indices depend on the bucket count and are never stored; every
//!   operation recomputes the index from the key.
//! - Iteration order is bucket order, then chain order. It is not sorted
//!   and changes when the table grows.
//!
//! Notes and non-goals
//! - Keys are `String` only; there is no generic `K: Hash` parameter.
//! - No persistence, no I/O, no internal locking.
//! - Resizes are logged at `debug` level through `tracing`.

mod bucket;
pub mod config;
pub mod hash;
mod map;
mod set;
pub mod table;
mod table_proptest;

// Public surface
pub use config::{ConfigError, TableConfig, MAX_BUCKETS};
pub use map::{ChainedMap, Keys, Values};
pub use set::{ChainedSet, Iter as SetIter};
pub use table::{Iter as MapIter, IterMut as MapIterMut};
