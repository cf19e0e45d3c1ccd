//! Error types for the checkout workflow.
//!
//! The error surface is deliberately thin: the dominant error class of a
//! protocol like this one, calling an operation in the wrong state, is a
//! compile-time type error here and has no runtime representation at all.
//! What remains is input validation, and that happens once, at smart
//! constructor boundaries, before any workflow variant is involved.

use crate::types::{ItemNameError, PaymentMethodError};
use thiserror::Error;

/// Errors that can occur while constructing checkout domain values.
///
/// Transition methods themselves are infallible: they accept already-valid
/// [`ItemName`](crate::ItemName), [`Money`](crate::Money) and
/// [`PaymentMethod`](crate::PaymentMethod) values, so this error can only
/// arise at the validation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Item name validation failed (empty or too long).
    #[error("invalid item name: {0}")]
    InvalidItemName(String),

    /// Payment descriptor validation failed (empty or too long).
    #[error("invalid payment method: {0}")]
    InvalidPaymentMethod(String),

    /// Money validation failed (negative, too precise, or out of range).
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

impl From<ItemNameError> for CheckoutError {
    fn from(err: ItemNameError) -> Self {
        Self::InvalidItemName(err.to_string())
    }
}

impl From<PaymentMethodError> for CheckoutError {
    fn from(err: PaymentMethodError) -> Self {
        Self::InvalidPaymentMethod(err.to_string())
    }
}

/// Result type for checkout value construction.
pub type CheckoutResult<T> = Result<T, CheckoutError>;
