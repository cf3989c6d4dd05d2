//! Order classification command.
//!
//! # Usage
//!
//! ```bash
//! # Classify an order snapshot from a file
//! mdv-cli classify order.json
//!
//! # Classify from stdin
//! curl -s https://api.example.com/orders/1042 | mdv-cli classify
//!
//! # Customer-facing view, full JSON output
//! mdv-cli classify order.json --context customer --json
//! ```

use std::io::Read;
use std::path::Path;

use maison_de_valeur_core::{
    OrderStatusSnapshot, StatusMappingResult, ViewerContext, map_order_status, parse_timeline,
};
use thiserror::Error;

/// Errors that can occur while classifying an order snapshot.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The input file or stream could not be read.
    #[error("Failed to read order input: {0}")]
    Io(#[from] std::io::Error),

    /// The input was not valid order JSON.
    #[error("Invalid order JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The context flag was not a known viewer context.
    #[error("Invalid context: {0}. Valid contexts: admin, customer")]
    InvalidContext(String),
}

/// Classify one order snapshot and print the result.
///
/// Reads JSON from `file`, or from stdin when no file is given. The snapshot
/// may be arbitrarily sparse; classification always succeeds once the JSON
/// itself parses.
pub fn run(
    file: Option<&Path>,
    context: &str,
    log_decision: bool,
    as_json: bool,
) -> Result<(), ClassifyError> {
    let context: ViewerContext = context
        .parse()
        .map_err(|_| ClassifyError::InvalidContext(context.to_owned()))?;

    let raw = read_input(file)?;
    let order: OrderStatusSnapshot = serde_json::from_str(&raw)?;
    let result = map_order_status(&order, context, log_decision);

    let output = if as_json {
        serde_json::to_string_pretty(&result)?
    } else {
        render_report(&order, &result)
    };

    #[allow(clippy::print_stdout)]
    {
        println!("{output}");
    }

    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String, ClassifyError> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Render the human-readable report.
fn render_report(order: &OrderStatusSnapshot, result: &StatusMappingResult) -> String {
    let debug = &result.debug_info;

    let mut lines = vec![
        match order.id {
            Some(id) => format!("Order #{id}"),
            None => "Order (no id)".to_owned(),
        },
        format!(
            "  Status:     {:<18} [{}]",
            result.ui_status.label(),
            result.ui_status.badge_class()
        ),
        format!(
            "  Payment:    {:<18} [{}]",
            result.payment_status.label(),
            result.payment_status.badge_class()
        ),
        format!("  Confidence: {}", result.confidence),
        format!("  Source:     {}", result.source),
        String::new(),
        "Signals".to_owned(),
        format!("  backend status:     {:?}", debug.backend_status),
        format!(
            "  fulfillment status: {}",
            debug.fulfillment_status.as_deref().unwrap_or("-")
        ),
        format!(
            "  shipment status:    {}",
            debug.shipment_status.as_deref().unwrap_or("-")
        ),
        format!(
            "  timeline:           {} entries (shipped: {}, delivered: {})",
            debug.timeline_events,
            yes_no(debug.has_shipped),
            yes_no(debug.has_delivered)
        ),
    ];

    let events = parse_timeline(order.tracking_timeline.as_ref());
    if !events.is_empty() {
        lines.push(String::new());
        lines.push("Timeline".to_owned());
        for event in events {
            lines.push(format!(
                "  {:<25}  {}",
                event
                    .occurred_at
                    .map_or_else(|| "-".to_owned(), |at| at.to_rfc3339()),
                event.code.as_deref().unwrap_or("-")
            ));
        }
    }

    lines.join("\n")
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report_for(value: serde_json::Value, context: ViewerContext) -> String {
        let order: OrderStatusSnapshot = serde_json::from_value(value).unwrap();
        let result = map_order_status(&order, context, false);
        render_report(&order, &result)
    }

    #[test]
    fn test_report_shows_status_and_badges() {
        let report = report_for(
            json!({
                "id": 1042,
                "status": "Paid",
                "fulfillment": { "status": "ReadyToShip" }
            }),
            ViewerContext::Admin,
        );

        assert!(report.starts_with("Order #1042"));
        assert!(report.contains("Pending Dispatch"));
        assert!(report.contains("[badge badge-info]"));
        assert!(report.contains("Payment:    Paid"));
        assert!(report.contains("[badge badge-success]"));
        assert!(report.contains("Source:     fulfillment"));
    }

    #[test]
    fn test_report_handles_missing_id_and_signals() {
        let report = report_for(json!({}), ViewerContext::Admin);

        assert!(report.starts_with("Order (no id)"));
        assert!(report.contains("backend status:     \"\""));
        assert!(report.contains("fulfillment status: -"));
        assert!(report.contains("shipment status:    -"));
        assert!(report.contains("0 entries (shipped: no, delivered: no)"));
        assert!(!report.contains("Timeline"));
    }

    #[test]
    fn test_report_lists_timeline_events() {
        let report = report_for(
            json!({
                "status": "Paid",
                "tracking_timeline": [
                    { "code": "dispatched", "timestamp": "2026-03-02T10:15:00Z" },
                    { "code": "shipped" }
                ]
            }),
            ViewerContext::Customer,
        );

        assert!(report.contains("Timeline"));
        assert!(report.contains("2026-03-02T10:15:00+00:00"));
        assert!(report.contains("dispatched"));
        assert!(report.contains("2 entries (shipped: yes, delivered: no)"));
    }

    #[test]
    fn test_run_rejects_unknown_context() {
        // The context is validated before any input is read, so this does
        // not touch stdin.
        let err = run(None, "staff", false, false).unwrap_err();
        assert!(matches!(err, ClassifyError::InvalidContext(ref s) if s == "staff"));
        assert_eq!(
            err.to_string(),
            "Invalid context: staff. Valid contexts: admin, customer"
        );
    }
}
