//! The image sorting engine.
//!
//! This module handles:
//! - Enumerating and grouping source files by identifier (groups.rs)
//! - The white-background corner heuristic (classify.rs)
//! - OS-level color labels via the Tagging Port (tagging.rs)
//! - The batch pipeline and run report (engine.rs)

pub mod classify;
pub mod engine;
pub mod error;
pub mod groups;
pub mod tagging;

pub use engine::{run_batch, RunReport};
