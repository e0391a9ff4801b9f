//! Shared utilities.

pub mod memo;
