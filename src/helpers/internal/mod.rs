//! Internal utility modules
//!
//! Shared functionality used by the acquire helpers and the verification run.

pub mod fs_utils;
pub mod hash;
pub mod progress;
