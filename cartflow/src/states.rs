//! Marker types for the checkout protocol states.
//!
//! Each marker is an empty enum: it has no inhabitants, so a value of one of
//! these types can never exist at runtime. The markers appear only as the
//! type parameter of [`Checkout`](crate::Checkout),
//! [`AsyncCheckout`](crate::AsyncCheckout) and
//! [`StreamingCheckout`](crate::StreamingCheckout), letting the compiler
//! tell a checkout in one protocol state apart from a checkout in another.
//! Attempting to construct a marker value is a compile error.

/// The cart has been started but holds no items yet.
pub enum Empty {}

/// At least one item has been added to the cart.
pub enum ItemsAdded {}

/// Payment details have been provided; the order can now be placed.
pub enum PaymentProvided {}

/// The order has been placed. Terminal: no transitions exist from here.
pub enum Placed {}
