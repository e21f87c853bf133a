//! Cart lines and the ordered cart sequence.

use serde::{Deserialize, Serialize};

use crate::product::{ProductId, ProductInfo};

/// One product entry in the cart.
///
/// Invariant (maintained by [`Cart`]): at most one line per product id, and
/// `amount >= 1` on every successful mutation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub amount: u32,
    /// Display attributes carried for rendering; the cart never inspects them.
    #[serde(flatten)]
    pub product: ProductInfo,
}

impl CartLine {
    /// First unit of a product entering the cart.
    pub fn first(id: ProductId, product: ProductInfo) -> Self {
        Self {
            id,
            amount: 1,
            product,
        }
    }
}

/// Ordered sequence of cart lines; order is insertion order.
///
/// `Cart` is a pure value type. Mutation helpers never modify `self`; each
/// builds a new sequence so the authoritative instance can be swapped
/// atomically and previous versions stay valid for readers holding them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Look up the line for a product, if present.
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.line(id).is_some()
    }

    /// New cart with a fresh line appended at the end.
    pub fn with_new_line(&self, line: CartLine) -> Self {
        let mut lines = self.lines.clone();
        lines.push(line);
        Self { lines }
    }

    /// New cart with the given product's amount incremented by one.
    ///
    /// Lines for other products are untouched; a missing id yields an
    /// identical cart (callers check existence first).
    pub fn with_incremented(&self, id: ProductId) -> Self {
        let lines = self
            .lines
            .iter()
            .map(|line| {
                if line.id == id {
                    CartLine {
                        amount: line.amount + 1,
                        ..line.clone()
                    }
                } else {
                    line.clone()
                }
            })
            .collect();
        Self { lines }
    }

    /// New cart with the given product's amount replaced verbatim.
    pub fn with_amount(&self, id: ProductId, amount: u32) -> Self {
        let lines = self
            .lines
            .iter()
            .map(|line| {
                if line.id == id {
                    CartLine {
                        amount,
                        ..line.clone()
                    }
                } else {
                    line.clone()
                }
            })
            .collect();
        Self { lines }
    }

    /// New cart excluding the given product; order of the rest is preserved.
    pub fn without(&self, id: ProductId) -> Self {
        let lines = self
            .lines
            .iter()
            .filter(|line| line.id != id)
            .cloned()
            .collect();
        Self { lines }
    }
}
