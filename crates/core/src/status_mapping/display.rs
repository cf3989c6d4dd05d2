//! Badge classes and display labels for statuses.
//!
//! Rendering layers hand these straight to templates. The string-keyed
//! lookups exist for call sites that hold a raw status string rather than a
//! parsed enum; unrecognized input gets the neutral badge instead of an
//! error.

use crate::types::{PaymentStatus, UiOrderStatus};

/// Badge class used when a status string is not recognized.
const NEUTRAL_BADGE: &str = "badge badge-neutral";

impl UiOrderStatus {
    /// Semantic badge class for this status.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "badge badge-warning",
            Self::Processing | Self::PendingDispatch | Self::InTransit | Self::Shipped => {
                "badge badge-info"
            }
            Self::Delivered => "badge badge-success",
            Self::Cancelled => "badge badge-destructive",
        }
    }

    /// Display label, Title Cased ("pending_dispatch" shows as
    /// "Pending Dispatch").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::PendingDispatch => "Pending Dispatch",
            Self::InTransit => "In Transit",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl PaymentStatus {
    /// Semantic badge class for this payment status.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "badge badge-warning",
            Self::Paid => "badge badge-success",
            Self::Failed => "badge badge-destructive",
            Self::Refunded => "badge badge-neutral",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Failed => "Failed",
            Self::Refunded => "Refunded",
        }
    }
}

/// Badge class for a raw UI status string, neutral when unrecognized.
#[must_use]
pub fn badge_class_for_status(status: &str) -> &'static str {
    status
        .parse::<UiOrderStatus>()
        .map_or(NEUTRAL_BADGE, UiOrderStatus::badge_class)
}

/// Badge class for a raw payment status string, neutral when unrecognized.
#[must_use]
pub fn badge_class_for_payment(status: &str) -> &'static str {
    status
        .parse::<PaymentStatus>()
        .map_or(NEUTRAL_BADGE, PaymentStatus::badge_class)
}

/// Title Case a snake_case status string for display.
///
/// Splits on `_`, upper-cases the first character of each token, and joins
/// with spaces. Characters beyond the first keep their casing.
#[must_use]
pub fn format_status_label(raw: &str) -> String {
    raw.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
