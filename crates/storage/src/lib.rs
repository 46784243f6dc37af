//! # Storage Crate
//!
//! Persistence for saved candidates.
//!
//! ## Components
//!
//! ### Key/value stores
//! `KeyValueStore` is the injectable capability (`get`/`set` of string
//! values). `MemoryStore` keeps values in process; `FileStore` keeps them
//! in a JSON file so they survive between runs.
//!
//! ### Saved-candidates controller
//! `SavedCandidates` owns the read-modify-write of the saved list:
//! - `save` appends unless the id is already present
//! - `remove` drops an id and returns the remaining list
//! - `load_all` never fails on a missing key and reads corrupt data as empty
//!
//! ## Example Usage
//!
//! ```ignore
//! use storage::{FileStore, SaveOutcome, SavedCandidates};
//!
//! let saved = SavedCandidates::new(FileStore::new("saved_candidates.json"));
//! match saved.save(&candidate)? {
//!     SaveOutcome::Saved => println!("saved"),
//!     SaveOutcome::AlreadySaved => println!("already there"),
//! }
//! let remaining = saved.remove(candidate.id)?;
//! ```

// Public modules
pub mod error;
pub mod store;
pub mod saved;

// Re-export commonly used types
pub use error::{Result, StoreError};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use saved::{SAVED_CANDIDATES_KEY, SaveOutcome, SavedCandidates};
