//! Stream-driven checkout: every transition is a cold single-emission
//! stream, and the chain is built by flattening stage into stage.

use anyhow::Result;
use cartflow::StreamingCheckout;
use cartflow_examples::{demo_item, demo_payment, init_tracing};
use futures::StreamExt;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let (item, price) = demo_item()?;
    let payment = demo_payment()?;

    info!("starting stream-driven checkout (watch the delays)");
    let placed = StreamingCheckout::start()
        .add_item(item, price)
        .map(move |c| c.enter_payment_details(payment.clone()))
        .flatten()
        .map(StreamingCheckout::place_order)
        .flatten()
        .next()
        .await
        .expect("the checkout chain emits exactly once");

    println!("receipt: {}", placed.receipt());
    Ok(())
}
