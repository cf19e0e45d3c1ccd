//! The direct synchronous checkout workflow.
//!
//! [`Checkout`] encodes the protocol state in a phantom type parameter, so
//! each state exposes exactly the transitions that are legal from it and
//! nothing else. Calling `place_order` before payment is not a runtime
//! error: the method does not exist on that type, and the call does not
//! compile.

use std::marker::PhantomData;

use crate::order::OrderDetails;
use crate::states::{Empty, ItemsAdded, PaymentProvided, Placed};
use crate::types::{ItemName, Money, PaymentMethod};

/// A checkout in protocol state `State`.
///
/// The state parameter is one of the marker types in
/// [`states`](crate::states) and is never stored at runtime; two checkouts
/// in different states are simply incompatible types. Every transition
/// consumes `self` by value and returns a new checkout tagged with the
/// successor state.
pub struct Checkout<State> {
    order: OrderDetails,
    _state: PhantomData<State>,
}

impl Checkout<Empty> {
    /// Start a new checkout with an empty cart.
    #[must_use]
    pub const fn start() -> Self {
        Self {
            order: OrderDetails::empty(),
            _state: PhantomData,
        }
    }

    /// Add an item to the cart.
    ///
    /// Consumes the empty checkout and returns one in the
    /// [`ItemsAdded`] state.
    #[must_use]
    pub fn add_item(self, name: ItemName, price: Money) -> Checkout<ItemsAdded> {
        tracing::info!(item = %name, price = %price, "item added to cart");
        Checkout {
            order: self.order.with_item(name, price),
            _state: PhantomData,
        }
    }
}

impl Checkout<ItemsAdded> {
    /// Record the payment descriptor for the order.
    #[must_use]
    pub fn enter_payment_details(self, method: PaymentMethod) -> Checkout<PaymentProvided> {
        tracing::info!(payment = %method, "payment details saved");
        Checkout {
            order: self.order.with_payment(method),
            _state: PhantomData,
        }
    }
}

impl Checkout<PaymentProvided> {
    /// Place the order. Terminal transition: [`Checkout<Placed>`] exposes no
    /// further transitions.
    #[must_use]
    pub fn place_order(self) -> Checkout<Placed> {
        tracing::info!(order = %self.order, "order placed");
        Checkout {
            order: self.order,
            _state: PhantomData,
        }
    }
}

impl Checkout<Placed> {
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

impl<State> Checkout<State> {
    /// The order data accumulated so far.
    #[must_use]
    pub const fn order(&self) -> &OrderDetails {
        &self.order
    }

    pub(crate) const fn from_order(order: OrderDetails) -> Self {
        Self {
            order,
            _state: PhantomData,
        }
    }
}

// Manual impls: deriving would put bounds on `State`, and the uninhabited
// marker types implement nothing.
impl<State> Clone for Checkout<State> {
    fn clone(&self) -> Self {
        Self::from_order(self.order.clone())
    }
}

impl<State> PartialEq for Checkout<State> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl<State> Eq for Checkout<State> {}

impl<State> std::fmt::Debug for Checkout<State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checkout")
            .field("order", &self.order)
            .field("state", &std::any::type_name::<State>())
            .finish()
    }
}
