//! Simulated-latency configuration for the suspending and streaming
//! workflow variants.

use std::time::Duration;

/// How long each suspending transition waits before yielding its successor.
///
/// The delays model external latency (inventory lookup, payment gateway,
/// order submission). They are cosmetic, not correctness-critical: a
/// transition's result is the same whatever the delay, and tests run with
/// [`TransitionDelays::none`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDelays {
    /// Delay before an added item is confirmed.
    pub add_item: Duration,
    /// Delay before payment details are confirmed.
    pub enter_payment_details: Duration,
    /// Delay before order placement is confirmed.
    pub place_order: Duration,
}

impl TransitionDelays {
    /// Zero delay on every transition.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            add_item: Duration::ZERO,
            enter_payment_details: Duration::ZERO,
            place_order: Duration::ZERO,
        }
    }
}

impl Default for TransitionDelays {
    fn default() -> Self {
        Self {
            add_item: Duration::from_millis(500),
            enter_payment_details: Duration::from_millis(300),
            place_order: Duration::from_millis(700),
        }
    }
}
