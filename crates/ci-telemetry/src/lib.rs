//! Logging setup shared by the report binary and its tests.
//!
//! Everything goes through the `tracing` ecosystem: call sites use the
//! `tracing` macros, and one of the `logging::init_*` functions installs a
//! `tracing-subscriber` formatter filtered by `RUST_LOG` or a configured
//! default level.

pub mod logging;
