//! Property-based tests for the content integrity toolkit

mod determinism;
