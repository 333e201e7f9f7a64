//! Adapter implementations for task ports and the external task contract.

pub mod api;
pub mod memory;
