//! # A single registered subscriber.
//!
//! [`Subscription`] ties a handler to its context and carries the mutable
//! delivery counter plus the immutable [`DeliveryPolicy`] chosen at subscribe
//! time.
//!
//! ## Rules
//! - The context is an `Rc` handle; removal matching compares by allocation
//!   identity (`Rc::ptr_eq`), not by value. Two contexts with equal contents
//!   are distinct subscribers.
//! - The counter increments once per delivery attempt, whether or not the
//!   handler fired. It never decreases.
//! - A handler panic propagates to the emitter's caller; the counter for the
//!   panicking attempt is left un-incremented.

use std::cell::Cell;
use std::rc::Rc;

use crate::policies::DeliveryPolicy;

/// Handler invoked with its subscription's context.
pub(crate) type HandlerFn<C> = Rc<dyn Fn(&C)>;

/// One registered (handler, context, policy) tuple with a delivery counter.
pub struct Subscription<C> {
    handler: HandlerFn<C>,
    context: Rc<C>,
    policy: DeliveryPolicy,
    delivered: Cell<u64>,
}

impl<C> Subscription<C> {
    pub(crate) fn new(context: Rc<C>, handler: HandlerFn<C>, policy: DeliveryPolicy) -> Self {
        Self {
            handler,
            context,
            policy,
            delivered: Cell::new(0),
        }
    }

    /// Number of delivery attempts that have reached this subscription.
    #[cfg(test)]
    pub(crate) fn delivered(&self) -> u64 {
        self.delivered.get()
    }

    /// Whether this subscription was registered with the given context handle.
    pub(crate) fn context_is(&self, context: &Rc<C>) -> bool {
        Rc::ptr_eq(&self.context, context)
    }

    /// Runs one delivery attempt: fires the handler when the policy allows it
    /// for the current counter value, then counts the attempt.
    pub(crate) fn deliver(&self) {
        if self.policy.should_fire(self.delivered.get()) {
            (self.handler)(&self.context);
        }
        self.delivered.set(self.delivered.get() + 1);
    }
}
