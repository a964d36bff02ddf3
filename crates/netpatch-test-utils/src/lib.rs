//! Shared test utilities for the netpatch workspace.
//!
//! Provides the [`TestTarget`] fixture builder so that engine and CLI test
//! suites materialize the same miniature runner modules. Dev-dependency
//! only, never published.

pub mod target;

pub use target::TestTarget;
