//! Shared fixtures for the end-to-end scan tests.

pub mod fixtures;
