//! TUI Brick (workspace facade crate).
//!
//! This package keeps a stable `tui_brick::{types,core,term}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tui_brick_core as core;
pub use tui_brick_term as term;
pub use tui_brick_types as types;
