//! Asset records: the physical equipment transfers relocate.
//!
//! General asset CRUD lives with the collaborator side; this module carries
//! only what the core touches — lookup by reference, the relocation update,
//! and the append-only history trail.

pub mod db;
pub mod models;

pub use db::AssetDb;
pub use models::{Asset, AssetHistoryAction, AssetHistoryEntry, RelocationUpdate};
