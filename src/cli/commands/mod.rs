//! CLI command implementations.

pub mod cache;
pub mod init;
pub mod tags;
