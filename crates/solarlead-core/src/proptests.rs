//! Property-based tests for consultation validation.
