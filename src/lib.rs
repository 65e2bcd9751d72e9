//! CODEVS client (workspace facade crate).
//!
//! Re-exports the workspace crates as `codevs_client::{adapter,core,types}`
//! so the binary, integration tests and benches share one import path.

pub use codevs_adapter as adapter;
pub use codevs_core as core;
pub use codevs_types as types;
