//! The reactive, stream-based checkout workflow.
//!
//! Same protocol and payload as [`Checkout`](crate::Checkout), but every
//! transition returns a cold single-emission stream: nothing runs until
//! the stream is first polled, then it waits out the configured delay, emits
//! the successor-state checkout exactly once, and completes. The stream
//! never emits an error.
//!
//! A Rust stream is consumed by at most one consumer, so independent
//! subscriptions are expressed by invoking the transition once per
//! subscriber. [`StreamingCheckout`] is `Clone` for exactly that reason,
//! and every invocation independently delays and emits.
//!
//! Chaining is done by flattening, which preserves strict stage ordering:
//! the upstream emission is fully delivered before the downstream stage
//! starts its own delay.
//!
//! ```rust,ignore
//! let placed = StreamingCheckout::start()
//!     .add_item(name, price)
//!     .map(move |c| c.enter_payment_details(method.clone()))
//!     .flatten()
//!     .map(StreamingCheckout::place_order)
//!     .flatten()
//!     .next()
//!     .await;
//! ```

use std::marker::PhantomData;

use futures::stream::{self, BoxStream, StreamExt};

use crate::delay::TransitionDelays;
use crate::order::OrderDetails;
use crate::states::{Empty, ItemsAdded, PaymentProvided, Placed};
use crate::types::{ItemName, Money, PaymentMethod};

/// A stream-driven checkout in protocol state `State`.
///
/// Protocol violations do not compile:
///
/// ```rust,compile_fail
/// use cartflow::StreamingCheckout;
///
/// // `place_order` does not exist on an empty cart.
/// let stream = StreamingCheckout::start().place_order();
/// ```
pub struct StreamingCheckout<State> {
    order: OrderDetails,
    delays: TransitionDelays,
    _state: PhantomData<State>,
}

impl StreamingCheckout<Empty> {
    /// Start a new checkout with an empty cart and the default delays.
    #[must_use]
    pub fn start() -> Self {
        Self::start_with_delays(TransitionDelays::default())
    }

    /// Start a new checkout with custom simulated latency.
    #[must_use]
    pub const fn start_with_delays(delays: TransitionDelays) -> Self {
        Self {
            order: OrderDetails::empty(),
            delays,
            _state: PhantomData,
        }
    }

    /// Add an item to the cart.
    ///
    /// Returns a cold stream that delays, emits the
    /// [`ItemsAdded`]-state checkout once, and completes.
    pub fn add_item(
        self,
        name: ItemName,
        price: Money,
    ) -> BoxStream<'static, StreamingCheckout<ItemsAdded>> {
        stream::once(async move {
            tokio::time::sleep(self.delays.add_item).await;
            tracing::info!(item = %name, price = %price, "item added to cart");
            StreamingCheckout {
                order: self.order.with_item(name, price),
                delays: self.delays,
                _state: PhantomData,
            }
        })
        .boxed()
    }
}

impl StreamingCheckout<ItemsAdded> {
    /// Record the payment descriptor.
    ///
    /// Returns a cold stream that delays, emits the
    /// [`PaymentProvided`]-state checkout once, and completes.
    pub fn enter_payment_details(
        self,
        method: PaymentMethod,
    ) -> BoxStream<'static, StreamingCheckout<PaymentProvided>> {
        stream::once(async move {
            tokio::time::sleep(self.delays.enter_payment_details).await;
            tracing::info!(payment = %method, "payment details saved");
            StreamingCheckout {
                order: self.order.with_payment(method),
                delays: self.delays,
                _state: PhantomData,
            }
        })
        .boxed()
    }
}

impl StreamingCheckout<PaymentProvided> {
    /// Place the order. Terminal transition.
    ///
    /// Returns a cold stream that delays, emits the [`Placed`]-state
    /// checkout once, and completes.
    pub fn place_order(self) -> BoxStream<'static, StreamingCheckout<Placed>> {
        stream::once(async move {
            tokio::time::sleep(self.delays.place_order).await;
            tracing::info!(order = %self.order, "order placed");
            StreamingCheckout {
                order: self.order,
                delays: self.delays,
                _state: PhantomData,
            }
        })
        .boxed()
    }
}

impl StreamingCheckout<Placed> {
    /// Extract the final order from the placed checkout.
    #[must_use]
    pub fn into_order(self) -> OrderDetails {
        self.order
    }

    /// The human-readable receipt summary for the placed order.
    #[must_use]
    pub fn receipt(&self) -> String {
        self.order.to_string()
    }
}

impl<State> StreamingCheckout<State> {
    /// The order data accumulated so far.
    #[must_use]
    pub const fn order(&self) -> &OrderDetails {
        &self.order
    }
}

impl<State> Clone for StreamingCheckout<State> {
    fn clone(&self) -> Self {
        Self {
            order: self.order.clone(),
            delays: self.delays,
            _state: PhantomData,
        }
    }
}

impl<State> PartialEq for StreamingCheckout<State> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl<State> Eq for StreamingCheckout<State> {}

impl<State> std::fmt::Debug for StreamingCheckout<State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamingCheckout")
            .field("order", &self.order)
            .field("delays", &self.delays)
            .field("state", &std::any::type_name::<State>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use rust_decimal_macros::dec;

    fn name(s: &str) -> ItemName {
        ItemName::try_new(s).unwrap()
    }

    fn money(d: rust_decimal::Decimal) -> Money {
        Money::new(d).unwrap()
    }

    fn visa() -> PaymentMethod {
        PaymentMethod::try_new("Visa 1234").unwrap()
    }

    #[tokio::test]
    async fn transition_stream_emits_exactly_once_then_completes() {
        let mut stream = StreamingCheckout::start_with_delays(TransitionDelays::none())
            .add_item(name("keyboard"), money(dec!(99.00)));

        let added = stream.next().await.expect("one emission");
        assert_eq!(added.order().items(), [name("keyboard")]);
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn flattened_chain_preserves_the_upstream_payload() {
        let method = visa();
        let placed = StreamingCheckout::start_with_delays(TransitionDelays::none())
            .add_item(name("MacBook Pro"), money(dec!(2499.99)))
            .map(move |c| c.enter_payment_details(method.clone()))
            .flatten()
            .map(StreamingCheckout::place_order)
            .flatten()
            .next()
            .await
            .expect("one emission");

        let order = placed.into_order();
        assert_eq!(order.items(), [name("MacBook Pro")]);
        assert_eq!(order.total(), money(dec!(2499.99)));
        assert_eq!(order.payment(), Some(&visa()));
    }

    #[tokio::test]
    async fn each_invocation_independently_emits() {
        let cart = StreamingCheckout::start_with_delays(TransitionDelays::none());
        let first = cart
            .clone()
            .add_item(name("keyboard"), money(dec!(99.00)))
            .next()
            .await
            .expect("one emission");
        let second = cart
            .add_item(name("keyboard"), money(dec!(99.00)))
            .next()
            .await
            .expect("one emission");
        assert_eq!(first, second);
    }

    #[tokio::test(start_paused = true)]
    async fn stream_is_cold_until_first_poll() {
        let stream = StreamingCheckout::start().add_item(name("keyboard"), money(dec!(99.00)));

        // Building the stream schedules nothing; its delay starts at the
        // first poll, not at construction.
        tokio::time::sleep(std::time::Duration::from_secs(5)).await;
        let before = tokio::time::Instant::now();
        let _added = stream.collect::<Vec<_>>().await;
        assert!(before.elapsed() >= std::time::Duration::from_millis(500));
    }

    // As with the other variants, protocol violations do not compile:
    /*
    fn illegal_transitions_do_not_compile() {
        let cart = StreamingCheckout::start();
        // cart.place_order();                 // COMPILE ERROR: method not found
        // cart.enter_payment_details(visa()); // COMPILE ERROR
    }
    */
}
