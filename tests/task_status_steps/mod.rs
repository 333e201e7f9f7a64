//! Step definitions for task status behaviour tests.

pub mod then;
pub mod when;
