//! Domain types for the checkout workflow.
//!
//! All types use smart constructors to ensure validity at construction time,
//! following the "parse, don't validate" principle. Once a value of one of
//! these types exists, every workflow transition that accepts it is total:
//! there is no per-transition validation left to fail.

use crate::errors::CheckoutError;
use nutype::nutype;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The name of an item placed in the cart.
///
/// `ItemName` values are guaranteed to be non-empty (after trimming) and at
/// most 255 characters. Once constructed, an `ItemName` is always valid.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 255),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        Display,
        Serialize,
        Deserialize,
        TryFrom
    )
)]
pub struct ItemName(String);

/// An opaque payment descriptor, e.g. `"Visa 1234"`.
///
/// The descriptor is treated as free text; it only has to be non-empty after
/// trimming and of reasonable length. It carries no card semantics.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 100),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        Display,
        Serialize,
        Deserialize,
        TryFrom
    )
)]
pub struct PaymentMethod(String);

/// A non-negative money amount with at most two decimal places.
///
/// Constructed only through [`Money::new`] or [`Money::from_cents`], which
/// reject negative amounts, excessive precision, and amounts beyond
/// [`Money::MAX_AMOUNT`]. Addition saturates at the maximum, so a running
/// total built from valid amounts can never leave the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// Maximum money amount (100 million).
    pub const MAX_AMOUNT: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

    /// The zero amount, the total of an empty cart.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Create money from a decimal amount.
    pub fn new(amount: Decimal) -> Result<Self, CheckoutError> {
        if amount.is_sign_negative() {
            return Err(CheckoutError::InvalidAmount(format!(
                "amount cannot be negative: {amount}"
            )));
        }
        if amount.scale() > 2 {
            return Err(CheckoutError::InvalidAmount(format!(
                "amount cannot have more than 2 decimal places: {amount}"
            )));
        }
        if amount > Self::MAX_AMOUNT {
            return Err(CheckoutError::InvalidAmount(format!(
                "amount {amount} exceeds maximum {}",
                Self::MAX_AMOUNT
            )));
        }
        Ok(Self(amount))
    }

    /// Create money from whole cents (avoids floating point issues).
    pub fn from_cents(cents: u64) -> Result<Self, CheckoutError> {
        let cents = i64::try_from(cents)
            .map_err(|_| CheckoutError::InvalidAmount(format!("amount out of range: {cents}¢")))?;
        Self::new(Decimal::new(cents, 2))
    }

    /// Get the underlying decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Add two amounts, saturating at [`Money::MAX_AMOUNT`].
    ///
    /// Total by construction: the sum of two non-negative amounts is
    /// non-negative, and saturation keeps it within range.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0).min(Self::MAX_AMOUNT))
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.0)
    }
}
