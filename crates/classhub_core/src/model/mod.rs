//! Typed domain records for every entity family.
//!
//! # Responsibility
//! - Define the canonical record shapes persisted per collection.
//! - Define `New*` input shapes (caller-supplied fields, no identifier) and
//!   `*Patch` shapes (shallow-merge updates).
//!
//! # Invariants
//! - Every record carries a store-assigned numeric `RecordId`; input shapes
//!   never carry one.
//! - Patch application preserves the identifier and every field absent from
//!   the patch.
//! - Serialized field names are the stable persistence contract; renames are
//!   breaking (no blob migration mechanism exists).

pub mod alumni;
pub mod career;
pub mod content;
pub mod message;
pub mod progress;
pub mod skill;

/// Store-assigned identifier, unique within one collection for the process
/// lifetime. Derived from wall-clock milliseconds but strictly monotonic per
/// collection, so same-millisecond allocations cannot collide.
pub type RecordId = i64;

/// Contract every persisted record satisfies.
pub trait Record: Clone + serde::Serialize + serde::de::DeserializeOwned {
    fn id(&self) -> RecordId;
}
