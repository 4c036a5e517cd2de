//! Application layer - command and query handlers.
//!
//! Handlers orchestrate the domain aggregates through the storage
//! ports. Check-then-act sequences (scheduling, evaluation upsert,
//! match decisions) are serialized with `locks::KeyedLocks`.

pub mod handlers;
pub mod locks;
