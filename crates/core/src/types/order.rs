//! Order snapshot input shape.

use serde::{Deserialize, Serialize};

/// Carrier-side shipment record attached to an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentInfo {
    /// Carrier transit status, free text (e.g. "Dispatched", "InTransit").
    #[serde(default)]
    pub status: Option<String>,
}

/// Warehouse-side fulfillment record attached to an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FulfillmentInfo {
    /// Pick/pack progress, free text (e.g. "Processing", "ReadyToShip").
    #[serde(default)]
    pub status: Option<String>,
    /// Shipment record nested under fulfillment by some API responses.
    #[serde(default)]
    pub shipment: Option<ShipmentInfo>,
}

/// Loosely-typed order status data as it arrives from the orders API.
///
/// Every field is optional: the API omits or nulls fields freely depending
/// on how far an order has progressed, and classification treats absence as
/// "unknown" rather than an error. The tracking timeline stays untyped
/// because individual entries can be malformed (null, missing code, wrong
/// type) and are tolerated entry by entry, not rejected wholesale.
///
/// ## Examples
///
/// ```
/// use maison_de_valeur_core::OrderStatusSnapshot;
///
/// let order: OrderStatusSnapshot = serde_json::from_value(serde_json::json!({
///     "id": 1042,
///     "status": "Paid",
///     "fulfillment": { "status": "ReadyToShip" }
/// }))?;
///
/// assert_eq!(order.status.as_deref(), Some("Paid"));
/// assert_eq!(order.fulfillment_status(), Some("ReadyToShip"));
/// assert!(order.resolved_shipment().is_none());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusSnapshot {
    /// Order identifier, used only for logging.
    #[serde(default)]
    pub id: Option<i64>,
    /// Backend order status, free text with inconsistent casing
    /// (e.g. "Paid", "paid", "PendingPayment").
    #[serde(default)]
    pub status: Option<String>,
    /// Warehouse-side fulfillment record.
    #[serde(default)]
    pub fulfillment: Option<FulfillmentInfo>,
    /// Carrier-side shipment record. Some responses put this at the top
    /// level, others nest it under `fulfillment`.
    #[serde(default)]
    pub shipment: Option<ShipmentInfo>,
    /// Raw tracking timeline. Expected to be an array of event objects but
    /// kept untyped so malformed entries survive deserialization.
    #[serde(default)]
    pub tracking_timeline: Option<serde_json::Value>,
}

impl OrderStatusSnapshot {
    /// The shipment record to consult, preferring the top-level field over
    /// the one nested under fulfillment.
    ///
    /// Resolution happens at the record level: a present top-level shipment
    /// wins even when its own status is null.
    #[must_use]
    pub fn resolved_shipment(&self) -> Option<&ShipmentInfo> {
        self.shipment
            .as_ref()
            .or_else(|| self.fulfillment.as_ref().and_then(|f| f.shipment.as_ref()))
    }

    /// Status string of the resolved shipment record, if any.
    #[must_use]
    pub fn resolved_shipment_status(&self) -> Option<&str> {
        self.resolved_shipment().and_then(|s| s.status.as_deref())
    }

    /// Status string of the fulfillment record, if any.
    #[must_use]
    pub fn fulfillment_status(&self) -> Option<&str> {
        self.fulfillment.as_ref().and_then(|f| f.status.as_deref())
    }

    /// Backend status lower-cased for comparison, empty string if absent.
    #[must_use]
    pub fn normalized_status(&self) -> String {
        self.status.as_deref().unwrap_or("").to_lowercase()
    }
}
