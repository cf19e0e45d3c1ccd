//! Suspending checkout: every transition awaits a simulated latency
//! interval before yielding the next state.

use anyhow::Result;
use cartflow::AsyncCheckout;
use cartflow_examples::{demo_item, demo_payment, init_tracing};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let (item, price) = demo_item()?;
    let payment = demo_payment()?;

    info!("starting suspending checkout (watch the delays)");
    let placed = AsyncCheckout::start()
        .add_item(item, price)
        .await
        .enter_payment_details(payment)
        .await
        .place_order()
        .await;

    println!("receipt: {}", placed.receipt());
    Ok(())
}
