//! # The emitter - registry ownership, subscription lifecycle, dispatch.
//!
//! [`Emitter`] owns a per-instance registry (no process-wide state) and
//! performs three operations: subscribe (plain or throttled), unsubscribe,
//! and emit.
//!
//! ## Dispatch
//! ```text
//! emit("a.b.c")
//!   ├─► key "a.b.c"  (exact match) ──► subscribers, insertion order
//!   ├─► key "a.b"    (ancestor)    ──► subscribers, insertion order
//!   └─► key "a"      (ancestor)    ──► subscribers, insertion order
//! ```
//! Per subscription and visited key:
//! 1. fire the handler when the [`DeliveryPolicy`] allows it for the current
//!    counter value;
//! 2. count the attempt, whether or not the handler fired.
//!
//! ## Rules
//! - Emit matches visited keys by exact string equality only; unsubscribe is
//!   the asymmetric one (it also sweeps descendants, never ancestors).
//! - Each visited key's subscriber list is snapshotted before any handler
//!   runs, so handlers may re-enter the emitter (subscribe, unsubscribe,
//!   emit) without disturbing the pass in progress; their mutations are
//!   visible to later keys of the same walk and to later emits.
//! - Handler panics are not caught; they propagate to the `emit` caller and
//!   abort delivery to subscribers and ancestor keys not yet reached.
//! - Everything is synchronous and single-threaded; the emitter is `!Send`
//!   by construction and multi-threaded hosts must serialize access
//!   externally.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::trace;

use crate::config::EmitterConfig;
use crate::error::ConfigError;
use crate::policies::DeliveryPolicy;
use crate::subscribers::{HandlerFn, Subscription};

use super::namespace;
use super::registry::Registry;

/// In-process publish/subscribe dispatcher with namespaced event names.
///
/// `C` is the context type: every subscription holds an `Rc<C>` handle that
/// is passed to its handler on each firing and identifies the subscription
/// for removal (by `Rc` identity, not by value).
///
/// All operations return `&Self`, so calls chain:
///
/// ```
/// use std::rc::Rc;
/// use nsemit::Emitter;
///
/// let emitter: Emitter<&str> = Emitter::new();
/// let ctx = Rc::new("listener");
/// emitter
///     .subscribe("slide", ctx.clone(), |ctx| println!("{ctx}: slide"))
///     .subscribe("slide.funny", ctx.clone(), |ctx| println!("{ctx}: funny slide"))
///     .emit("slide.funny")
///     .unsubscribe("slide", &ctx);
/// ```
pub struct Emitter<C> {
    registry: RefCell<Registry<C>>,
    delimiter: String,
}

impl<C> Emitter<C> {
    /// Creates an emitter with the default configuration (delimiter `"."`).
    pub fn new() -> Self {
        Self {
            registry: RefCell::new(Registry::new()),
            delimiter: EmitterConfig::default().delimiter,
        }
    }

    /// Creates an emitter from a validated configuration.
    pub fn with_config(config: EmitterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            registry: RefCell::new(Registry::new()),
            delimiter: config.delimiter,
        })
    }

    /// Creates an emitter with a custom namespace delimiter.
    ///
    /// Fails with [`ConfigError::EmptyDelimiter`] when `delimiter` is empty.
    pub fn with_delimiter(delimiter: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_config(EmitterConfig::with_delimiter(delimiter))
    }

    /// The namespace delimiter this emitter was built with.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Registers a handler for `event` with no throttling: it fires on every
    /// delivery attempt.
    ///
    /// Duplicate registrations of the same `(event, context, handler)` are
    /// independent subscriptions and fire independently.
    pub fn subscribe(&self, event: &str, context: Rc<C>, handler: impl Fn(&C) + 'static) -> &Self {
        self.subscribe_with(event, context, handler, DeliveryPolicy::default())
    }

    /// Registers a handler that fires at most `times` times in total.
    ///
    /// `times <= 0` is not an error; it normalizes to "unbounded". Attempts
    /// past the cap still advance the delivery counter, they just never fire.
    pub fn subscribe_limited(
        &self,
        event: &str,
        context: Rc<C>,
        handler: impl Fn(&C) + 'static,
        times: i64,
    ) -> &Self {
        self.subscribe_with(event, context, handler, DeliveryPolicy::limited(times))
    }

    /// Registers a handler that fires on every `frequency`-th delivery
    /// attempt, starting with the first.
    ///
    /// `frequency <= 0` is not an error; it normalizes to 1 (every attempt).
    pub fn subscribe_throttled(
        &self,
        event: &str,
        context: Rc<C>,
        handler: impl Fn(&C) + 'static,
        frequency: i64,
    ) -> &Self {
        self.subscribe_with(event, context, handler, DeliveryPolicy::throttled(frequency))
    }

    /// Registers a handler under an explicit [`DeliveryPolicy`].
    ///
    /// The named subscribe variants delegate here; use this form to combine a
    /// cap with a stride.
    pub fn subscribe_with(
        &self,
        event: &str,
        context: Rc<C>,
        handler: impl Fn(&C) + 'static,
        policy: DeliveryPolicy,
    ) -> &Self {
        let handler: HandlerFn<C> = Rc::new(handler);
        self.registry
            .borrow_mut()
            .push(event, Rc::new(Subscription::new(context, handler, policy)));
        trace!("subscribe: event={} policy={:?}", event, policy);
        self
    }

    /// Removes every subscription registered with this context handle under
    /// `event` or any of its namespace descendants.
    ///
    /// Descendant matching is a prefix test (`event` + delimiter), whatever
    /// the depth: unsubscribing `"a"` also clears `"a.b.c.d"`. Ancestor keys
    /// are deliberately left alone, the mirror image of emit's ancestor-only
    /// walk. Unknown names or contexts are a silent no-op.
    pub fn unsubscribe(&self, event: &str, context: &Rc<C>) -> &Self {
        let removed = self
            .registry
            .borrow_mut()
            .remove_branch(event, context, &self.delimiter);
        trace!("unsubscribe: event={} removed={}", event, removed);
        self
    }

    /// Delivers `event` to its own key, then to each strict namespace
    /// ancestor, nearest first. Visited keys match by exact string equality;
    /// within a key, subscribers run in insertion order. Events with no
    /// subscribers anywhere in the chain are a silent no-op.
    pub fn emit(&self, event: &str) -> &Self {
        for key in namespace::ancestors(event, &self.delimiter) {
            let snapshot = self.registry.borrow().snapshot(key);
            let Some(subscriptions) = snapshot else {
                continue;
            };
            trace!("emit: key={} subscribers={}", key, subscriptions.len());
            for subscription in &subscriptions {
                subscription.deliver();
            }
        }
        self
    }
}

impl<C> Default for Emitter<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for Emitter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("delimiter", &self.delimiter)
            .field("keys", &self.registry.borrow().key_count())
            .finish()
    }
}
