//! Shared test utilities for nextstep integration tests.
//!
//! This module provides `TestHarness` for isolated store execution with temp
//! directories.

pub mod harness;

pub use harness::TestHarness;
