//! `Cartflow` - a typestate-encoded checkout workflow
//!
//! This library models the linear checkout flow (cart -> items added ->
//! payment provided -> order placed) so that only legal transitions are
//! expressible. The protocol state lives in a phantom type parameter, which
//! moves the dominant error class of such protocols, calling an operation in
//! the wrong state, into a compile-time type error with zero runtime cost.
//!
//! The same state machine is offered under three execution disciplines,
//! sharing one payload ([`OrderDetails`]) and one set of transition rules:
//!
//! - [`Checkout`]: direct synchronous calls.
//! - [`AsyncCheckout`]: suspending calls with simulated latency on tokio.
//! - [`StreamingCheckout`]: cold single-emission streams, chained by
//!   flattening.
//!
//! # Quick start
//!
//! ```rust
//! use cartflow::{Checkout, ItemName, Money, PaymentMethod};
//! use rust_decimal_macros::dec;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let placed = Checkout::start()
//!     .add_item(ItemName::try_new("MacBook Pro")?, Money::new(dec!(2499.99))?)
//!     .enter_payment_details(PaymentMethod::try_new("Visa 1234")?)
//!     .place_order();
//!
//! assert_eq!(placed.order().total(), Money::new(dec!(2499.99))?);
//! # Ok(())
//! # }
//! ```
//!
//! Protocol violations do not compile:
//!
//! ```rust,compile_fail
//! use cartflow::Checkout;
//!
//! // `place_order` does not exist on an empty cart.
//! let order = Checkout::start().place_order();
//! ```
//!
//! Validation happens once, at smart constructor boundaries ("parse, don't
//! validate"): a negative price or empty payment descriptor is a recoverable
//! [`CheckoutError`] raised before any workflow variant is involved, and the
//! transitions themselves are total.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod delay;
pub mod errors;
pub mod order;
pub mod states;
pub mod streaming;
pub mod suspending;
pub mod sync;
pub mod types;

pub use delay::TransitionDelays;
pub use errors::{CheckoutError, CheckoutResult};
pub use order::OrderDetails;
pub use states::{Empty, ItemsAdded, PaymentProvided, Placed};
pub use streaming::StreamingCheckout;
pub use suspending::AsyncCheckout;
pub use sync::Checkout;
pub use types::{ItemName, Money, PaymentMethod};
