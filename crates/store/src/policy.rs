//! Stock-validation policy for quantity updates.

use serde::{Deserialize, Serialize};

/// How `update_product_amount` validates the requested quantity.
///
/// The storefront this replaces compared the line's *current* amount against
/// stock and then adopted the requested amount verbatim, so a caller could
/// set any target (zero or above stock) as long as the current amount was
/// below stock. `Legacy` reproduces that behavior exactly; `Strict` validates
/// the requested amount instead.
///
/// Under both policies a missing line fails as out-of-stock; that collapse is
/// part of the operation's contract, not of this policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockPolicy {
    /// Compare the current amount against stock; adopt the requested amount
    /// verbatim.
    #[default]
    Legacy,
    /// Require `1 <= requested <= stock`.
    Strict,
}

impl StockPolicy {
    /// Whether a quantity update may proceed.
    pub fn permits_update(&self, current: u32, requested: u32, stock: u32) -> bool {
        match self {
            StockPolicy::Legacy => current < stock,
            StockPolicy::Strict => requested >= 1 && requested <= stock,
        }
    }
}
