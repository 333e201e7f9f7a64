//! Task Manager: task-tracking core with a concurrent in-memory store.
//!
//! This crate provides create, read, update, delete and status-change
//! operations over a collection of tasks shared across concurrent callers.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Task values and validation with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for task storage
//! - **Adapters**: The in-memory repository and the external task contract
//!
//! # Modules
//!
//! - [`task`]: Task domain, storage, business rules and boundary contract
//! - [`logging`]: Structured logging setup

pub mod logging;
pub mod task;
