//! Canonical status enums produced by order classification.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a status string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusParseError {
    /// The input is not one of the canonical UI order statuses.
    #[error("unknown order status: {0}")]
    UnknownOrderStatus(String),
    /// The input is not one of the canonical payment statuses.
    #[error("unknown payment status: {0}")]
    UnknownPaymentStatus(String),
    /// The input is not a recognized viewer context.
    #[error("unknown viewer context: {0}")]
    UnknownViewerContext(String),
}

/// Canonical order status shown in the UI.
///
/// This is the closed set every order snapshot is mapped into, however messy
/// the backend signals are. Serialized in snake_case (`pending_dispatch`,
/// `in_transit`, ...), which is also the canonical string form used by
/// [`Display`](fmt::Display) and [`FromStr`](std::str::FromStr).
///
/// ## Examples
///
/// ```
/// use maison_de_valeur_core::UiOrderStatus;
///
/// assert_eq!(UiOrderStatus::PendingDispatch.as_str(), "pending_dispatch");
/// assert_eq!("in_transit".parse::<UiOrderStatus>(), Ok(UiOrderStatus::InTransit));
///
/// // Parsing is exact: display labels and other casings are rejected.
/// assert!("In Transit".parse::<UiOrderStatus>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UiOrderStatus {
    #[default]
    Pending,
    Processing,
    PendingDispatch,
    InTransit,
    Shipped,
    Delivered,
    Cancelled,
}

impl UiOrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 7] = [
        Self::Pending,
        Self::Processing,
        Self::PendingDispatch,
        Self::InTransit,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Canonical snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::PendingDispatch => "pending_dispatch",
            Self::InTransit => "in_transit",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for UiOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UiOrderStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "pending_dispatch" => Ok(Self::PendingDispatch),
            "in_transit" => Ok(Self::InTransit),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(StatusParseError::UnknownOrderStatus(s.to_owned())),
        }
    }
}

/// Canonical payment status shown in the UI.
///
/// Derived purely from the backend order status string: `paid` maps to
/// [`Paid`](Self::Paid), `refunded` to [`Refunded`](Self::Refunded), and
/// everything else (including `cancelled`) to [`Pending`](Self::Pending).
/// [`Failed`](Self::Failed) exists in the closed set but is never produced
/// by classification today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    /// Every payment status.
    pub const ALL: [Self; 4] = [Self::Pending, Self::Paid, Self::Failed, Self::Refunded];

    /// Canonical snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "failed" => Ok(Self::Failed),
            "refunded" => Ok(Self::Refunded),
            _ => Err(StatusParseError::UnknownPaymentStatus(s.to_owned())),
        }
    }
}

/// How much the classifier trusts its own output given the input signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Canonical snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which signal category determined the UI status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusSource {
    /// The shipment record's own status field.
    Shipment,
    /// The fulfillment record's status field.
    Fulfillment,
    /// The backend order status string.
    Backend,
    /// A code observed in the tracking timeline.
    Timeline,
    /// No signal matched; the default answer.
    Fallback,
}

impl StatusSource {
    /// Canonical snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shipment => "shipment",
            Self::Fulfillment => "fulfillment",
            Self::Backend => "backend",
            Self::Timeline => "timeline",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for StatusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Who is looking at the classification.
///
/// Only affects diagnostic logging detail and the confidence reported for
/// one under-specified branch (paid orders with no recognized fulfillment
/// status). It never changes the UI status, payment status, or source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerContext {
    Admin,
    Customer,
}

impl ViewerContext {
    /// Canonical snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "customer",
        }
    }
}

impl fmt::Display for ViewerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ViewerContext {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "customer" => Ok(Self::Customer),
            _ => Err(StatusParseError::UnknownViewerContext(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_status_serde_snake_case() {
        let json = serde_json::to_string(&UiOrderStatus::PendingDispatch).unwrap();
        assert_eq!(json, "\"pending_dispatch\"");

        let parsed: UiOrderStatus = serde_json::from_str("\"in_transit\"").unwrap();
        assert_eq!(parsed, UiOrderStatus::InTransit);
    }

    #[test]
    fn test_ui_status_display_matches_as_str() {
        for status in UiOrderStatus::ALL {
            assert_eq!(format!("{status}"), status.as_str());
        }
    }

    #[test]
    fn test_ui_status_from_str_roundtrip() {
        for status in UiOrderStatus::ALL {
            assert_eq!(status.as_str().parse::<UiOrderStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_ui_status_from_str_is_exact() {
        assert!(matches!(
            "Delivered".parse::<UiOrderStatus>(),
            Err(StatusParseError::UnknownOrderStatus(_))
        ));
        assert!(matches!(
            "in transit".parse::<UiOrderStatus>(),
            Err(StatusParseError::UnknownOrderStatus(_))
        ));
        assert!("".parse::<UiOrderStatus>().is_err());
    }

    #[test]
    fn test_payment_status_from_str_roundtrip() {
        for status in PaymentStatus::ALL {
            assert_eq!(status.as_str().parse::<PaymentStatus>(), Ok(status));
        }
        assert!(matches!(
            "voided".parse::<PaymentStatus>(),
            Err(StatusParseError::UnknownPaymentStatus(_))
        ));
    }

    #[test]
    fn test_confidence_serde_snake_case() {
        let json = serde_json::to_string(&Confidence::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn test_source_display() {
        assert_eq!(StatusSource::Fallback.to_string(), "fallback");
        assert_eq!(StatusSource::Timeline.to_string(), "timeline");
    }

    #[test]
    fn test_viewer_context_from_str() {
        assert_eq!("admin".parse::<ViewerContext>(), Ok(ViewerContext::Admin));
        assert_eq!(
            "customer".parse::<ViewerContext>(),
            Ok(ViewerContext::Customer)
        );
        assert!(matches!(
            "staff".parse::<ViewerContext>(),
            Err(StatusParseError::UnknownViewerContext(_))
        ));
    }

    #[test]
    fn test_parse_error_display() {
        let err = StatusParseError::UnknownOrderStatus("bogus".to_owned());
        assert_eq!(err.to_string(), "unknown order status: bogus");
    }
}
