//! Command implementations for the `graphlet` binary.

pub mod commands;
