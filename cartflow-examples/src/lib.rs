//! Example checkouts driving the `cartflow` typestate workflow
//!
//! Each example walks the same fixed chain (start -> add item -> enter
//! payment details -> place order) under a different execution discipline
//! and prints the resulting receipt. Run them with:
//!
//! ```text
//! cargo run --example sync_checkout
//! cargo run --example async_checkout
//! cargo run --example streaming_checkout
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use anyhow::Result;
use cartflow::{ItemName, Money, PaymentMethod};
use rust_decimal_macros::dec;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install a plain fmt subscriber so the transition notifications show up
/// on the console.
pub fn init_tracing() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// The item every example puts in the cart.
pub fn demo_item() -> Result<(ItemName, Money)> {
    Ok((
        ItemName::try_new("MacBook Pro")?,
        Money::new(dec!(2499.99))?,
    ))
}

/// The payment descriptor every example pays with.
pub fn demo_payment() -> Result<PaymentMethod> {
    Ok(PaymentMethod::try_new("Visa 1234")?)
}
