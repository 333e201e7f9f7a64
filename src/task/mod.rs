//! Task tracking over a shared in-memory store.
//!
//! Tasks can be listed (optionally favourite-first and by name), fetched,
//! added under service-minted identifiers, replaced, deleted and moved between
//! status columns. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Business-rule services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
