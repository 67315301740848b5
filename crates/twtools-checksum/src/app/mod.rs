//! Application layer - Use case implementations
//!
//! This module combines the domain checksums with a random source.

pub mod generator;
