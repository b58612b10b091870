//! Run storage.
//!
//! [`RunStore`] is the contract the session controller saves optimized runs
//! through. [`InMemoryRunStore`] keeps the run for the process lifetime; with
//! the `persistent` feature, [`FileRunStore`] keeps it on disk.

mod memory;
mod traits;

#[cfg(feature = "persistent")]
pub mod persistent;

pub use memory::InMemoryRunStore;
pub use traits::{RunStore, StoredRun};

#[cfg(feature = "persistent")]
pub use persistent::FileRunStore;
