//! Order status transition rules.
//!
//! A fixed adjacency table over [`UiOrderStatus`]. Orders move forward
//! through dispatch and transit, may bounce between `in_transit` and
//! `shipped` as carrier data corrects itself, and can be cancelled any time
//! before handover to the carrier. `delivered` and `cancelled` are terminal.

use crate::types::UiOrderStatus;

/// Statuses an order is allowed to move to next.
///
/// Terminal statuses return an empty slice. Self-transitions are not listed
/// here; [`is_valid_transition`] treats them as always valid.
#[must_use]
pub const fn allowed_next_statuses(from: UiOrderStatus) -> &'static [UiOrderStatus] {
    match from {
        UiOrderStatus::Pending => &[UiOrderStatus::Processing, UiOrderStatus::Cancelled],
        UiOrderStatus::Processing => &[UiOrderStatus::PendingDispatch, UiOrderStatus::Cancelled],
        UiOrderStatus::PendingDispatch => &[
            UiOrderStatus::Shipped,
            UiOrderStatus::InTransit,
            UiOrderStatus::Cancelled,
        ],
        UiOrderStatus::InTransit => &[UiOrderStatus::Delivered, UiOrderStatus::Shipped],
        UiOrderStatus::Shipped => &[UiOrderStatus::Delivered, UiOrderStatus::InTransit],
        UiOrderStatus::Delivered | UiOrderStatus::Cancelled => &[],
    }
}

/// Whether an order may move from one status to another.
///
/// A status can always "transition" to itself; repeated webhook deliveries
/// make idempotent updates common.
#[must_use]
pub fn is_valid_transition(from: UiOrderStatus, to: UiOrderStatus) -> bool {
    from == to || allowed_next_statuses(from).contains(&to)
}

impl UiOrderStatus {
    /// Whether no transition leads out of this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        allowed_next_statuses(self).is_empty()
    }
}
