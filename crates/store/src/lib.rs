//! In-memory storage backend for Tallybook.
//!
//! Implements every storage port from `tallybook-core` on top of a
//! single in-process dataset. Serves tests and demos, and pins down the
//! reference semantics for future backends.

pub mod memory;

pub use memory::MemoryStore;
