//! Browser adapters for the `forge-core` ports.

pub mod storage;
pub mod timer;
