//! The suspension-based asynchronous checkout workflow.
//!
//! Same protocol and payload as [`Checkout`](crate::Checkout), but every
//! transition is an `async fn` that waits out a simulated latency interval
//! on the tokio timer before yielding the successor-state value. The wait is
//! cooperative (other tasks keep running) and the transition result does
//! not depend on it. Once invoked, a transition always eventually completes;
//! there is no cancellation surface.

use std::marker::PhantomData;

use crate::delay::TransitionDelays;
use crate::order::OrderDetails;
use crate::states::{Empty, ItemsAdded, PaymentProvided, Placed};
use crate::types::{ItemName, Money, PaymentMethod};

/// An asynchronous checkout in protocol state `State`.
///
/// Transitions suspend for the configured [`TransitionDelays`] interval and
/// then behave exactly like their synchronous counterparts. The delays are
/// carried along the chain, so they are chosen once, at
/// [`AsyncCheckout::start_with_delays`].
///
/// Protocol violations do not compile:
///
/// ```rust,compile_fail
/// use cartflow::AsyncCheckout;
///
/// async fn premature() {
///     // `place_order` does not exist on an empty cart.
///     AsyncCheckout::start().place_order().await;
/// }
/// ```
pub struct AsyncCheckout<State> {
    order: OrderDetails,
    delays: TransitionDelays,
    _state: PhantomData<State>,
}

impl AsyncCheckout<Empty> {
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

    /// Add an item to the cart after the configured delay.
    pub async fn add_item(self, name: ItemName, price: Money) -> AsyncCheckout<ItemsAdded> {
        tokio::time::sleep(self.delays.add_item).await;
        tracing::info!(item = %name, price = %price, "item added to cart");
        AsyncCheckout {
            order: self.order.with_item(name, price),
            delays: self.delays,
            _state: PhantomData,
        }
    }
}

impl AsyncCheckout<ItemsAdded> {
    /// Record the payment descriptor after the configured delay.
    pub async fn enter_payment_details(
        self,
        method: PaymentMethod,
    ) -> AsyncCheckout<PaymentProvided> {
        tokio::time::sleep(self.delays.enter_payment_details).await;
        tracing::info!(payment = %method, "payment details saved");
        AsyncCheckout {
            order: self.order.with_payment(method),
            delays: self.delays,
            _state: PhantomData,
        }
    }
}

impl AsyncCheckout<PaymentProvided> {
    /// Place the order after the configured delay. Terminal transition.
    pub async fn place_order(self) -> AsyncCheckout<Placed> {
        tokio::time::sleep(self.delays.place_order).await;
        tracing::info!(order = %self.order, "order placed");
        AsyncCheckout {
            order: self.order,
            delays: self.delays,
            _state: PhantomData,
        }
    }
}

impl AsyncCheckout<Placed> {
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

impl<State> AsyncCheckout<State> {
    /// The order data accumulated so far.
    #[must_use]
    pub const fn order(&self) -> &OrderDetails {
        &self.order
    }
}

impl<State> Clone for AsyncCheckout<State> {
    fn clone(&self) -> Self {
        Self {
            order: self.order.clone(),
            delays: self.delays,
            _state: PhantomData,
        }
    }
}

impl<State> PartialEq for AsyncCheckout<State> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl<State> Eq for AsyncCheckout<State> {}

impl<State> std::fmt::Debug for AsyncCheckout<State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncCheckout")
            .field("order", &self.order)
            .field("delays", &self.delays)
            .field("state", &std::any::type_name::<State>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    async fn full_chain_matches_the_synchronous_result() {
        let placed = AsyncCheckout::start_with_delays(TransitionDelays::none())
            .add_item(name("MacBook Pro"), money(dec!(2499.99)))
            .await
            .enter_payment_details(visa())
            .await
            .place_order()
            .await;

        let order = placed.into_order();
        assert_eq!(order.items(), [name("MacBook Pro")]);
        assert_eq!(order.total(), money(dec!(2499.99)));
        assert_eq!(order.payment(), Some(&visa()));
    }

    #[tokio::test(start_paused = true)]
    async fn add_item_waits_out_its_nominal_delay() {
        let before = tokio::time::Instant::now();
        let _added = AsyncCheckout::start()
            .add_item(name("keyboard"), money(dec!(99.00)))
            .await;
        assert!(before.elapsed() >= std::time::Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn delays_are_carried_through_the_whole_chain() {
        let before = tokio::time::Instant::now();
        let _placed = AsyncCheckout::start()
            .add_item(name("keyboard"), money(dec!(99.00)))
            .await
            .enter_payment_details(visa())
            .await
            .place_order()
            .await;
        // 500 + 300 + 700
        assert!(before.elapsed() >= std::time::Duration::from_millis(1500));
    }

    // As with the synchronous variant, protocol violations do not compile:
    /*
    async fn illegal_transitions_do_not_compile() {
        let cart = AsyncCheckout::start();
        // cart.place_order().await;          // COMPILE ERROR: method not found
        // cart.enter_payment_details(visa()); // COMPILE ERROR
    }
    */
}
