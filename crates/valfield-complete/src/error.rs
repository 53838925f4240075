//! Error types for completion-layer contract checks.

use valfield_valuation::witness::{ContractViolation, law};

/// A rejected apartness claim.
///
/// The only checked contract in this crate: everything else is either
/// total or a documented precondition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError<G: std::fmt::Debug> {
    /// Apartness bounds must be units of Γ₀.
    #[error("apartness bound must be a unit of the value group")]
    ZeroApartnessBound,

    /// The claimed bound already fails at the index it starts from.
    #[error("apartness refuted at index {index}: v = {found:?} below claimed bound {bound:?}")]
    ApartnessRefuted { index: usize, found: G, bound: G },
}

impl<G: std::fmt::Debug> CompletionError<G> {
    /// Fingerprint this precondition failure for stable reporting.
    pub fn violation(&self) -> ContractViolation {
        match self {
            CompletionError::ZeroApartnessBound => ContractViolation::new(
                "zero_apartness_bound",
                law::APARTNESS_UNIT,
                serde_json::json!({}),
            ),
            CompletionError::ApartnessRefuted {
                index,
                found,
                bound,
            } => ContractViolation::new(
                "apartness_refuted",
                law::APARTNESS_HOLDS,
                serde_json::json!({
                    "index": index,
                    "found": format!("{found:?}"),
                    "bound": format!("{bound:?}"),
                }),
            ),
        }
    }
}
