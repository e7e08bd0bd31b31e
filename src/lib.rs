//! Blockfall (workspace facade crate).
//!
//! Re-exports the crates under `crates/` as `blockfall::{core,engine,input,server,term,types}`
//! so the binaries, integration tests and benches share one import path.

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_server as server;
pub use blockfall_term as term;
pub use blockfall_types as types;
