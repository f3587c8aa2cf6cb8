//! Batch analyzer for directed, edge-weighted graphs.
//!
//! Given a JSON graph description the analyzer produces the strongly
//! connected components, the condensation DAG, a topological ordering of
//! the condensation, and shortest/longest/critical paths over it.
//!
//! This crate is intentionally split into Clean Architecture layers:
//! - domain: pure, synchronous graph algorithms
//! - usecase: analysis orchestration + progress events
//! - infrastructure: serde + async IO adapters
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
