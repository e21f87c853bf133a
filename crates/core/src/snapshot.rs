//! Versioned persistence snapshot for the cart.
//!
//! The persisted shape is explicit and carries a schema version tag so the
//! format can evolve without guessing at what an old payload meant. Readers
//! reject versions they do not understand instead of misinterpreting them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::{Cart, CartLine};

/// Current snapshot schema version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Snapshot decoding error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("unsupported snapshot version {found} (supported: {SNAPSHOT_VERSION})")]
    UnsupportedVersion { found: u32 },
}

/// Serialized form of the cart, one snapshot per storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub lines: Vec<CartLine>,
}

impl CartSnapshot {
    /// Capture the given cart at the current schema version.
    pub fn capture(cart: &Cart) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            lines: cart.lines().to_vec(),
        }
    }

    /// Restore the cart, rejecting snapshots written by a newer schema.
    ///
    /// The stored sequence is adopted verbatim; no revalidation against
    /// current stock happens here.
    pub fn restore(self) -> Result<Cart, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
            });
        }
        Ok(Cart::from_lines(self.lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{ProductId, ProductInfo};

    fn test_cart() -> Cart {
        Cart::empty()
            .with_new_line(CartLine::first(
                ProductId::new(1),
                ProductInfo {
                    title: "Tênis de Caminhada Leve".to_string(),
                    price: 17_990,
                    image: "https://cdn.example.com/1.jpg".to_string(),
                },
            ))
            .with_incremented(ProductId::new(1))
    }

    #[test]
    fn capture_then_restore_reproduces_the_sequence() {
        let cart = test_cart();
        let snapshot = CartSnapshot::capture(&cart);
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.restore().unwrap(), cart);
    }

    #[test]
    fn json_round_trip_is_stable() {
        let snapshot = CartSnapshot::capture(&test_cart());
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: CartSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut snapshot = CartSnapshot::capture(&test_cart());
        snapshot.version = 2;
        assert_eq!(
            snapshot.restore().unwrap_err(),
            SnapshotError::UnsupportedVersion { found: 2 }
        );
    }
}
