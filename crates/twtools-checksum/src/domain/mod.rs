//! Domain layer - Pure checksum logic
//!
//! This module contains validators and check digit searches without I/O or
//! randomness.

pub mod consent;
pub mod twid;
pub mod ubn;
