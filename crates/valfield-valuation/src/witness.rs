//! Deterministic fingerprints for contract violations.
//!
//! Every "error" in this engine is an algebraic precondition failure
//! caught at development time. So that two independent runs of the same
//! violated contract report identically, a violation carries a witness
//! ID computed from a canonical JSON key:
//!
//! 1. Build the key object (class, detail, law)
//! 2. Serialize with sorted keys and no whitespace
//! 3. witnessId = "v1_" || hex(SHA256(keyBytes))

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Compute a witness ID from the canonical key fields.
///
/// `serde_json::Map` is backed by a `BTreeMap`, so plain serialization
/// already yields sorted keys and canonical formatting.
pub fn witness_id(class: &str, law: &str, detail: &Value) -> String {
    let mut key = serde_json::Map::new();
    key.insert("class".to_string(), Value::String(class.to_string()));
    key.insert("detail".to_string(), detail.clone());
    key.insert("law".to_string(), Value::String(law.to_string()));

    let bytes = serde_json::to_vec(&Value::Object(key)).unwrap_or_default();
    let hash = Sha256::digest(&bytes);
    format!("v1_{hash:x}")
}

/// A violated contract, fingerprinted for stable reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractViolation {
    /// Deterministic fingerprint of (class, law, detail).
    pub witness_id: String,

    /// Violation classification.
    pub class: String,

    /// Which documented law was broken.
    pub law: String,

    /// Machine-readable specifics of this occurrence.
    pub detail: Value,
}

impl ContractViolation {
    pub fn new(class: impl Into<String>, law: impl Into<String>, detail: Value) -> Self {
        let class = class.into();
        let law = law.into();
        let witness_id = witness_id(&class, &law, &detail);
        Self {
            witness_id,
            class,
            law,
            detail,
        }
    }
}

/// Law reference constants for the engine's checked contracts.
pub mod law {
    /// Estimate tolerances must be units of Γ₀.
    pub const TOLERANCE_UNIT: &str = "EST-1";
    /// The estimate is centered at a point of nonzero value.
    pub const CENTER_NONZERO: &str = "EST-2";
    /// The perturbation must sit below min(γ·v(y)², v(y)).
    pub const PERTURBATION_BOUND: &str = "EST-3";
    /// Apartness bounds must be units of Γ₀.
    pub const APARTNESS_UNIT: &str = "APT-1";
    /// An apartness witness must hold on the tail it claims.
    pub const APARTNESS_HOLDS: &str = "APT-2";
}
