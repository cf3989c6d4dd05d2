//! Order status classification.
//!
//! Reconciles the signals carried by an [`OrderStatusSnapshot`] - backend
//! status string, fulfillment sub-status, shipment sub-status, and the
//! tracking timeline - into one canonical [`UiOrderStatus`], with confidence
//! and provenance metadata for observability. Signals frequently disagree
//! (a stale fulfillment status sitting next to a fresh carrier event), so
//! evaluation follows a fixed priority, first match wins:
//!
//! 1. **Delivery evidence** - shipment status `"Delivered"`, then a
//!    `"delivered"` timeline code
//! 2. **Transit evidence** - shipment status `"InTransit"` or
//!    `"Dispatched"`, then a `"shipped"`/`"dispatched"` timeline code
//! 3. **Backend status** - terminal `cancelled`/`refunded`, then `paid`
//!    qualified by the fulfillment status, then `pendingpayment`
//! 4. **Fallback** - pending, at low confidence
//!
//! Classification is total: any snapshot, including one deserialized from
//! `{}`, produces exactly one result and never fails. A malformed record in
//! a list of orders must never take down the rendering pass that asked
//! about it.
//!
//! The module also carries the derived utilities around the same status
//! vocabulary: the allowed-transition table, badge-class lookups for
//! rendering, and the timeline scanner.
//!
//! [`OrderStatusSnapshot`]: crate::types::OrderStatusSnapshot
//! [`UiOrderStatus`]: crate::types::UiOrderStatus

mod classifier;
mod display;
mod timeline;
mod transitions;

pub use classifier::{StatusDebugInfo, StatusMappingResult, map_order_status};
pub use display::{badge_class_for_payment, badge_class_for_status, format_status_label};
pub use timeline::{TimelineSignals, TrackingEvent, parse_timeline, scan_timeline};
pub use transitions::{allowed_next_statuses, is_valid_transition};
