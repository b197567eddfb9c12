//! Logging initialization shared by the workspace binaries. Everything is
//! written to stderr so that stdout stays free for a binary's actual output.
pub mod config;
pub mod tracing;

pub use config::Config;
