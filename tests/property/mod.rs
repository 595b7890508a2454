//! Property-based tests for envtree
