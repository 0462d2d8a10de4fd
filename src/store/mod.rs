//! Store Module
//!
//! Provides the capacity-bounded, thread-safe key/value store.

mod bounded;
mod stats;


// Re-export public types
pub use bounded::BoundedStore;
pub use stats::StoreStats;

// == Public Constants ==
/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: usize = 100;
