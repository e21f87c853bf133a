//! Cart operation error model.

use thiserror::Error;

/// Result type used across cart operations.
pub type CartResult<T> = Result<T, CartError>;

/// Terminal outcome of a failed cart operation.
///
/// Every variant is non-fatal and recovered at the operation boundary: the
/// cart is left unchanged, nothing is persisted, and the caller gets exactly
/// one of these plus a user-facing notification. No retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The requested (or implied) quantity is not available in stock.
    #[error("requested amount exceeds available stock")]
    OutOfStock,

    /// A lookup failed while adding a product (stock or product fetch).
    #[error("product add failed: {0}")]
    AddFailed(String),

    /// The product is not in the cart (removal only).
    #[error("product not in cart")]
    NotFound,

    /// A lookup failed while updating a quantity.
    #[error("quantity update failed: {0}")]
    UpdateFailed(String),
}

impl CartError {
    pub fn add_failed(msg: impl Into<String>) -> Self {
        Self::AddFailed(msg.into())
    }

    pub fn update_failed(msg: impl Into<String>) -> Self {
        Self::UpdateFailed(msg.into())
    }

    /// The fixed storefront-facing message for this failure.
    ///
    /// These strings are part of the storefront contract and are displayed
    /// verbatim by the notification sink.
    pub fn user_message(&self) -> &'static str {
        match self {
            CartError::OutOfStock => "Quantidade solicitada fora de estoque",
            CartError::AddFailed(_) => "Erro na adição do produto",
            CartError::NotFound => "Erro na remoção do produto",
            CartError::UpdateFailed(_) => "Erro na alteração de quantidade do produto",
        }
    }
}
