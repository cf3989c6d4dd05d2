//! Status transition table commands.
//!
//! # Usage
//!
//! ```bash
//! # Print the whole transition table
//! mdv-cli transitions
//!
//! # Show where a single status can go
//! mdv-cli transitions --from pending_dispatch
//!
//! # Validate one transition (exits 1 when not allowed)
//! mdv-cli transitions --from shipped --to delivered
//! ```

use maison_de_valeur_core::{
    StatusParseError, UiOrderStatus, allowed_next_statuses, is_valid_transition,
};
use thiserror::Error;

/// Errors that can occur while inspecting transitions.
#[derive(Debug, Error)]
pub enum TransitionsError {
    /// A status argument was not a canonical snake_case status.
    #[error(transparent)]
    Parse(#[from] StatusParseError),

    /// The requested transition is not allowed.
    #[error("Transition not allowed: {from} -> {to}")]
    NotAllowed {
        /// Starting status.
        from: UiOrderStatus,
        /// Requested target status.
        to: UiOrderStatus,
    },
}

/// Inspect the transition table.
///
/// With no arguments, prints every row. With `from` alone, prints that row.
/// With both, validates the transition and fails when it is not allowed.
pub fn run(from: Option<&str>, to: Option<&str>) -> Result<(), TransitionsError> {
    let output = match (from, to) {
        (None, _) => render_table(),
        (Some(from), None) => render_row(from.parse()?),
        (Some(from), Some(to)) => {
            let from: UiOrderStatus = from.parse()?;
            let to: UiOrderStatus = to.parse()?;
            if !is_valid_transition(from, to) {
                return Err(TransitionsError::NotAllowed { from, to });
            }
            format!("ok: {from} -> {to}")
        }
    };

    #[allow(clippy::print_stdout)]
    {
        println!("{output}");
    }

    Ok(())
}

fn render_table() -> String {
    UiOrderStatus::ALL
        .iter()
        .map(|&from| render_row(from))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_row(from: UiOrderStatus) -> String {
    let next = allowed_next_statuses(from);
    if next.is_empty() {
        return format!("{from} -> (terminal)");
    }

    let targets = next
        .iter()
        .map(|status| status.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{from} -> {targets}")
}
