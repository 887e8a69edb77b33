//! Simulated Async Flows
//!
//! Login, join, checkout and chat replies are driven by fixed-duration
//! timers instead of real I/O, and they always succeed. Each hosting
//! overlay owns a `CancelHandle`; closing the overlay bumps the handle so a
//! timer that fires afterwards finds its token stale and applies nothing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;

pub const LOGIN_DELAY_MS: u32 = 1_500;
pub const JOIN_DELAY_MS: u32 = 1_500;
pub const JOIN_SUCCESS_MS: u32 = 1_000;
pub const CHECKOUT_PROCESSING_MS: u32 = 2_000;
pub const CHECKOUT_SUCCESS_MS: u32 = 2_000;
pub const CHAT_REPLY_MS: u32 = 1_500;
pub const PROFILE_SAVE_MS: u32 = 1_500;

/// Fixed-delay suspension point for the simulated flows
pub async fn sleep(ms: u32) {
    TimeoutFuture::new(ms).await;
}

/// Cancellation epoch shared between an overlay and its pending timers.
/// Tokens minted before a `cancel` call report stale afterwards.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle {
    epoch: Arc<AtomicU64>,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token tied to the current epoch
    pub fn token(&self) -> CancelToken {
        CancelToken {
            epoch: Arc::clone(&self.epoch),
            seen: self.epoch.load(Ordering::Acquire),
        }
    }

    /// Invalidate every outstanding token
    pub fn cancel(&self) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
    }
}

#[derive(Clone, Debug)]
pub struct CancelToken {
    epoch: Arc<AtomicU64>,
    seen: u64,
}

impl CancelToken {
    pub fn is_live(&self) -> bool {
        self.epoch.load(Ordering::Acquire) == self.seen
    }

    pub fn is_cancelled(&self) -> bool {
        !self.is_live()
    }
}

/// Checkout step shown by the checkout modal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckoutStep {
    #[default]
    Form,
    Processing,
    Success,
}

/// Three-step checkout progression: `Form -> Processing -> Success`, then a
/// single success delivery. There is no failure branch once submitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    delivered: bool,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Form submission; no-op unless the form is showing
    pub fn submit(&mut self) -> bool {
        if self.step == CheckoutStep::Form {
            self.step = CheckoutStep::Processing;
            true
        } else {
            false
        }
    }

    /// Payment timer fired; no-op unless processing
    pub fn complete(&mut self) -> bool {
        if self.step == CheckoutStep::Processing {
            self.step = CheckoutStep::Success;
            true
        } else {
            false
        }
    }

    /// Deliver the purchase exactly once. Returns true only on the first
    /// call after reaching `Success`, so repeated timer firings cannot
    /// double-invoke the success callback.
    pub fn finish(&mut self) -> bool {
        if self.step == CheckoutStep::Success && !self.delivered {
            self.delivered = true;
            true
        } else {
            false
        }
    }

    /// Back to a fresh form for the next purchase
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_progression_delivers_once() {
        let mut flow = CheckoutFlow::new();
        assert_eq!(flow.step(), CheckoutStep::Form);

        assert!(flow.submit());
        assert_eq!(flow.step(), CheckoutStep::Processing);

        assert!(flow.complete());
        assert_eq!(flow.step(), CheckoutStep::Success);

        let mut deliveries = 0;
        for _ in 0..3 {
            if flow.finish() {
                deliveries += 1;
            }
        }
        assert_eq!(deliveries, 1);
    }

    #[test]
    fn test_checkout_ignores_out_of_order_events() {
        let mut flow = CheckoutFlow::new();
        assert!(!flow.complete());
        assert!(!flow.finish());
        assert_eq!(flow.step(), CheckoutStep::Form);

        assert!(flow.submit());
        assert!(!flow.submit());
        assert_eq!(flow.step(), CheckoutStep::Processing);
    }

    #[test]
    fn test_checkout_reset_allows_reuse() {
        let mut flow = CheckoutFlow::new();
        flow.submit();
        flow.complete();
        assert!(flow.finish());

        flow.reset();
        assert_eq!(flow.step(), CheckoutStep::Form);
        flow.submit();
        flow.complete();
        assert!(flow.finish());
    }

    #[test]
    fn test_cancel_invalidates_outstanding_tokens() {
        let handle = CancelHandle::new();
        let token = handle.token();
        assert!(token.is_live());

        handle.cancel();
        assert!(token.is_cancelled());

        // tokens minted after the cancel are live again
        let fresh = handle.token();
        assert!(fresh.is_live());
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_cancel_through_clone_reaches_all_tokens() {
        // teardown paths hold a clone of the handle; cancelling the clone
        // must invalidate tokens minted from the original
        let handle = CancelHandle::new();
        let teardown = handle.clone();
        let token = handle.token();

        teardown.cancel();

        assert!(token.is_cancelled());
        assert!(handle.token().is_live());
    }
}
