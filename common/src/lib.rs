//! Shared building blocks for `rouse`: the wake target, interface selection
//! and the run configuration handed to the core.

pub mod config;
pub mod network;
