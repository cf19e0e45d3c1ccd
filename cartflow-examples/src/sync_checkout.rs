//! Direct synchronous checkout: every transition returns immediately.

use anyhow::Result;
use cartflow::Checkout;
use cartflow_examples::{demo_item, demo_payment, init_tracing};
use tracing::info;

fn main() -> Result<()> {
    init_tracing()?;

    let (item, price) = demo_item()?;
    let payment = demo_payment()?;

    info!("starting synchronous checkout");
    let placed = Checkout::start()
        .add_item(item, price)
        .enter_payment_details(payment)
        .place_order();

    println!("receipt: {}", placed.receipt());
    Ok(())
}
