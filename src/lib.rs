//! Falling puzzle (workspace facade crate).
//!
//! Re-exports the rule engine as `falling_puzzle::{core, types}`. The implementation lives in
//! dedicated crates under `crates/`.

pub use falling_puzzle_core as core;
pub use falling_puzzle_types as types;
