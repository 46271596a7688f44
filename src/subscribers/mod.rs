//! Subscriber data model.
//!
//! ## Contents
//! - [`Subscription`] handler + context + delivery counter + policy
//!
//! Subscriptions are created by the emitter's subscribe operations, mutated
//! only by its emit path (counter increment), and removed only by
//! unsubscribe.

mod subscription;

pub use subscription::Subscription;

pub(crate) use subscription::HandlerFn;
