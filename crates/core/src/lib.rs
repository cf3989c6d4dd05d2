//! Maison De Valeur Core - Order-status domain library.
//!
//! This crate provides the order-status domain shared across Maison De Valeur
//! components:
//! - `cli` - Command-line tools for inspecting order snapshots
//! - server-side rendering layers that badge and label orders
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP clients. The single side effect in the whole crate is an
//! optional `tracing` event emitted by [`map_order_status`] when decision
//! logging is requested.
//!
//! # Modules
//!
//! - [`types`] - Order snapshots and the closed status enums
//! - [`status_mapping`] - Status classification, transition rules, and display
//!   helpers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod status_mapping;
pub mod types;

pub use status_mapping::*;
pub use types::*;
