//! Core types for Maison De Valeur.
//!
//! This module provides the order snapshot shape and the closed status enums
//! the classification logic maps into.

pub mod order;
pub mod status;

pub use order::{FulfillmentInfo, OrderStatusSnapshot, ShipmentInfo};
pub use status::{
    Confidence, PaymentStatus, StatusParseError, StatusSource, UiOrderStatus, ViewerContext,
};
