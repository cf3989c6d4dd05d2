//! The order status classifier.

use serde::Serialize;
use tracing::{debug, warn};

use super::timeline::{TimelineSignals, scan_timeline};
use crate::types::{
    Confidence, OrderStatusSnapshot, PaymentStatus, StatusSource, UiOrderStatus, ViewerContext,
};

/// Shipment status meaning the carrier has delivered the parcel.
const SHIPMENT_DELIVERED: &str = "Delivered";
/// Shipment status meaning the parcel is moving through the carrier network.
const SHIPMENT_IN_TRANSIT: &str = "InTransit";
/// Shipment status meaning the carrier has picked the parcel up.
const SHIPMENT_DISPATCHED: &str = "Dispatched";
/// Fulfillment status meaning the warehouse has finished picking.
const FULFILLMENT_READY_TO_SHIP: &str = "ReadyToShip";
/// Fulfillment status meaning the warehouse is still picking.
const FULFILLMENT_PROCESSING: &str = "Processing";

/// The raw signals a classification consulted.
///
/// Populated on every path, fallback included, so diagnostics and tests can
/// always see what the classifier saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDebugInfo {
    /// Backend status lower-cased, empty string if absent.
    pub backend_status: String,
    /// Fulfillment status as received.
    pub fulfillment_status: Option<String>,
    /// Resolved shipment status as received.
    pub shipment_status: Option<String>,
    /// A `delivered` timeline code was seen.
    pub has_delivered: bool,
    /// A shipment-level timeline code was seen.
    pub has_shipped: bool,
    /// Raw timeline entry count, malformed entries included.
    pub timeline_events: usize,
}

/// Outcome of classifying one order snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMappingResult {
    /// Canonical status to show in the UI.
    pub ui_status: UiOrderStatus,
    /// Canonical payment status, derived from the backend status alone.
    pub payment_status: PaymentStatus,
    /// How much the classifier trusts this answer.
    pub confidence: Confidence,
    /// Which signal decided `ui_status`.
    pub source: StatusSource,
    /// Snapshot of the signals consulted.
    pub debug_info: StatusDebugInfo,
}

/// Classify an order snapshot into canonical UI statuses.
///
/// Total over any snapshot: every input, including one deserialized from
/// `{}`, resolves to exactly one result, with `pending` at low confidence
/// from the fallback source as the worst case. `context` never changes the
/// UI status, payment status, or source; it selects logging detail and the
/// confidence reported for paid orders with no recognized fulfillment
/// status.
///
/// When `log_decision` is true the outcome is recorded as a `tracing`
/// event, at `warn` level for low-confidence results and `debug` otherwise.
/// Logging never affects the returned value.
///
/// ## Examples
///
/// ```
/// use maison_de_valeur_core::{
///     OrderStatusSnapshot, StatusSource, UiOrderStatus, ViewerContext, map_order_status,
/// };
///
/// let order: OrderStatusSnapshot = serde_json::from_value(serde_json::json!({
///     "status": "Paid",
///     "fulfillment": { "status": "ReadyToShip" }
/// }))?;
///
/// let result = map_order_status(&order, ViewerContext::Admin, false);
/// assert_eq!(result.ui_status, UiOrderStatus::PendingDispatch);
/// assert_eq!(result.source, StatusSource::Fulfillment);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[must_use]
pub fn map_order_status(
    order: &OrderStatusSnapshot,
    context: ViewerContext,
    log_decision: bool,
) -> StatusMappingResult {
    let backend_status = order.normalized_status();
    let signals = scan_timeline(order.tracking_timeline.as_ref());
    let fulfillment_status = order.fulfillment_status();
    let shipment_status = order.resolved_shipment_status();

    let (ui_status, confidence, source) = decide(
        &backend_status,
        fulfillment_status,
        shipment_status,
        signals,
        context,
    );

    let result = StatusMappingResult {
        ui_status,
        payment_status: derive_payment_status(&backend_status),
        confidence,
        source,
        debug_info: StatusDebugInfo {
            backend_status,
            fulfillment_status: fulfillment_status.map(str::to_owned),
            shipment_status: shipment_status.map(str::to_owned),
            has_delivered: signals.has_delivered,
            has_shipped: signals.has_shipped,
            timeline_events: signals.event_count,
        },
    };

    if log_decision {
        log_result(order.id, context, &result);
    }

    result
}

/// Priority-ordered decision, first match wins.
///
/// Shipment and fulfillment statuses are exact-match; only the backend
/// status and timeline codes are compared case-insensitively.
fn decide(
    backend_status: &str,
    fulfillment_status: Option<&str>,
    shipment_status: Option<&str>,
    signals: TimelineSignals,
    context: ViewerContext,
) -> (UiOrderStatus, Confidence, StatusSource) {
    if shipment_status == Some(SHIPMENT_DELIVERED) {
        return (
            UiOrderStatus::Delivered,
            Confidence::High,
            StatusSource::Shipment,
        );
    }
    if signals.has_delivered {
        return (
            UiOrderStatus::Delivered,
            Confidence::High,
            StatusSource::Timeline,
        );
    }
    if shipment_status == Some(SHIPMENT_IN_TRANSIT) {
        return (
            UiOrderStatus::InTransit,
            Confidence::High,
            StatusSource::Shipment,
        );
    }
    if shipment_status == Some(SHIPMENT_DISPATCHED) {
        return (
            UiOrderStatus::Shipped,
            Confidence::High,
            StatusSource::Shipment,
        );
    }
    if signals.has_shipped {
        return (
            UiOrderStatus::Shipped,
            Confidence::Medium,
            StatusSource::Timeline,
        );
    }

    match backend_status {
        // Refunded orders land in the cancelled bucket for UI purposes;
        // the payment status still records the refund.
        "cancelled" | "refunded" => (
            UiOrderStatus::Cancelled,
            Confidence::High,
            StatusSource::Backend,
        ),
        "paid" => classify_paid(fulfillment_status, context),
        "pendingpayment" => (
            UiOrderStatus::Pending,
            Confidence::High,
            StatusSource::Backend,
        ),
        _ => (
            UiOrderStatus::Pending,
            Confidence::Low,
            StatusSource::Fallback,
        ),
    }
}

/// A paid order's UI status follows how far fulfillment has progressed.
fn classify_paid(
    fulfillment_status: Option<&str>,
    context: ViewerContext,
) -> (UiOrderStatus, Confidence, StatusSource) {
    match fulfillment_status {
        Some(FULFILLMENT_READY_TO_SHIP) => (
            UiOrderStatus::PendingDispatch,
            Confidence::High,
            StatusSource::Fulfillment,
        ),
        Some(FULFILLMENT_PROCESSING) => (
            UiOrderStatus::Processing,
            Confidence::High,
            StatusSource::Fulfillment,
        ),
        _ => {
            // Paid with nothing recognizable from the warehouse. Admins get
            // medium confidence, customers get high.
            let confidence = match context {
                ViewerContext::Admin => Confidence::Medium,
                ViewerContext::Customer => Confidence::High,
            };
            (UiOrderStatus::Processing, confidence, StatusSource::Fallback)
        }
    }
}

/// Payment status is driven by the backend status string alone.
///
/// A cancelled order keeps a pending payment status, and nothing maps to
/// failed today.
fn derive_payment_status(backend_status: &str) -> PaymentStatus {
    match backend_status {
        "paid" => PaymentStatus::Paid,
        "refunded" => PaymentStatus::Refunded,
        _ => PaymentStatus::Pending,
    }
}

/// Record the outcome of one classification.
///
/// Low-confidence results are worth surfacing regardless of context; for
/// the rest, admin callers get the full signal snapshot and customer
/// callers a condensed line.
fn log_result(order_id: Option<i64>, context: ViewerContext, result: &StatusMappingResult) {
    if result.confidence == Confidence::Low {
        warn!(
            order_id,
            context = %context,
            ui_status = %result.ui_status,
            payment_status = %result.payment_status,
            source = %result.source,
            backend_status = %result.debug_info.backend_status,
            "Low-confidence order status classification"
        );
        return;
    }

    match context {
        ViewerContext::Admin => debug!(
            order_id,
            ui_status = %result.ui_status,
            payment_status = %result.payment_status,
            confidence = %result.confidence,
            source = %result.source,
            backend_status = %result.debug_info.backend_status,
            fulfillment_status = ?result.debug_info.fulfillment_status,
            shipment_status = ?result.debug_info.shipment_status,
            has_delivered = result.debug_info.has_delivered,
            has_shipped = result.debug_info.has_shipped,
            timeline_events = result.debug_info.timeline_events,
            "Classified order status"
        ),
        ViewerContext::Customer => debug!(
            order_id,
            ui_status = %result.ui_status,
            confidence = %result.confidence,
            source = %result.source,
            "Classified order status"
        ),
    }
}
