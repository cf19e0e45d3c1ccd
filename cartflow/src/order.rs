//! The order payload and the shared transition rules.
//!
//! All three workflow variants carry the same [`OrderDetails`] value and
//! advance it with the same rules defined here. The variants differ only in
//! how a transition is delivered (direct return, suspending return, or
//! single-emission stream), never in what it computes.

use crate::types::{ItemName, Money, PaymentMethod};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The accumulated order data threaded through every workflow transition.
///
/// Immutable after construction: transition rules consume the previous value
/// and return a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetails {
    items: Vec<ItemName>,
    total: Money,
    payment: Option<PaymentMethod>,
}

impl OrderDetails {
    /// A fresh order: no items, zero total, no payment.
    pub(crate) const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: Money::zero(),
            payment: None,
        }
    }

    /// Append an item and accumulate its price into the total.
    pub(crate) fn with_item(mut self, name: ItemName, price: Money) -> Self {
        self.items.push(name);
        self.total = self.total.add(price);
        self
    }

    /// Record the payment descriptor. Items and total are untouched.
    pub(crate) fn with_payment(mut self, method: PaymentMethod) -> Self {
        self.payment = Some(method);
        self
    }

    /// The item names in insertion order.
    #[must_use]
    pub fn items(&self) -> &[ItemName] {
        &self.items
    }

    /// The running total of all item prices.
    #[must_use]
    pub const fn total(&self) -> Money {
        self.total
    }

    /// The payment descriptor, absent until payment details are entered.
    #[must_use]
    pub const fn payment(&self) -> Option<&PaymentMethod> {
        self.payment.as_ref()
    }
}

impl Display for OrderDetails {
    /// Renders a human-readable receipt summary.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "items: [")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "], total: {}", self.total)?;
        match &self.payment {
            Some(method) => write!(f, ", paid with: {method}"),
            None => write!(f, ", payment pending"),
        }
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

    #[test]
    fn empty_order_has_no_items_zero_total_no_payment() {
        let order = OrderDetails::empty();
        assert!(order.items().is_empty());
        assert_eq!(order.total(), Money::zero());
        assert!(order.payment().is_none());
    }

    #[test]
    fn with_item_appends_in_insertion_order() {
        let order = OrderDetails::empty()
            .with_item(name("keyboard"), money(dec!(99.00)))
            .with_item(name("mouse"), money(dec!(49.00)));
        assert_eq!(order.items(), [name("keyboard"), name("mouse")]);
    }

    #[test]
    fn total_accumulates_monotonically() {
        let order = OrderDetails::empty().with_item(name("keyboard"), money(dec!(99.00)));
        let prior = order.total();
        let order = order.with_item(name("mouse"), money(dec!(49.00)));
        assert_eq!(order.total(), prior.add(money(dec!(49.00))));
        assert!(order.total() >= prior);
    }

    #[test]
    fn with_payment_leaves_items_and_total_unchanged() {
        let order = OrderDetails::empty().with_item(name("keyboard"), money(dec!(99.00)));
        let before = order.clone();
        let order = order.with_payment(PaymentMethod::try_new("Visa 1234").unwrap());
        assert_eq!(order.items(), before.items());
        assert_eq!(order.total(), before.total());
        assert_eq!(
            order.payment(),
            Some(&PaymentMethod::try_new("Visa 1234").unwrap())
        );
    }

    #[test]
    fn transition_rules_do_not_mutate_the_source_value() {
        let original = OrderDetails::empty();
        let copy = original.clone();
        let _advanced = copy.with_item(name("keyboard"), money(dec!(99.00)));
        assert!(original.items().is_empty());
        assert_eq!(original.total(), Money::zero());
    }

    #[test]
    fn receipt_summary_lists_items_total_and_payment() {
        let order = OrderDetails::empty()
            .with_item(name("MacBook Pro"), money(dec!(2499.99)))
            .with_payment(PaymentMethod::try_new("Visa 1234").unwrap());
        assert_eq!(
            order.to_string(),
            "items: [MacBook Pro], total: $2499.99, paid with: Visa 1234"
        );
    }

    #[test]
    fn receipt_summary_marks_pending_payment() {
        let order = OrderDetails::empty().with_item(name("MacBook Pro"), money(dec!(2499.99)));
        assert!(order.to_string().ends_with("payment pending"));
    }
}
