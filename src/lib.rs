//! # nsemit
//!
//! **nsemit** is a minimal in-process publish/subscribe dispatcher with
//! hierarchical (namespaced) event names and per-subscription delivery
//! throttling.
//!
//! There is no I/O, persistence, or concurrency here: everything is
//! synchronous, single-threaded, and runs to completion. The crate is a
//! building block for plugin systems, UI layers, and embedded interpreters
//! that want dotted event names with bubbling semantics.
//!
//! ## Architecture
//! ```text
//!  subscribe("a.b", ctx, h)          emit("a.b.c")
//!  subscribe_limited(..., n)              │
//!  subscribe_throttled(..., f)            ▼
//!        │                     ┌────────────────────┐
//!        ▼                     │  ancestor walk     │
//! ┌──────────────────┐         │  "a.b.c" → "a.b"   │
//! │  Registry        │◄────────│        → "a"       │
//! │  name → [Sub..]  │ snapshot└────────────────────┘
//! └──────────────────┘                   │ per subscription, in order:
//!        ▲                               │  1. policy.should_fire(count)?
//!        │                               │     → handler(&context)
//!  unsubscribe("a", ctx)                 │  2. count += 1 (always)
//!  (sweeps "a" and all                   ▼
//!   descendants "a.*")            handlers run inline
//! ```
//!
//! ## Features
//! | Area            | Description                                               | Key types                             |
//! |-----------------|-----------------------------------------------------------|---------------------------------------|
//! | **Subscribing** | Plain, count-capped, or frequency-throttled registration. | [`Emitter`], [`DeliveryPolicy`]       |
//! | **Bubbling**    | Emit walks the name and its namespace ancestors.          | [`Emitter::emit`]                     |
//! | **Removal**     | Unsubscribe sweeps a name and its descendants.            | [`Emitter::unsubscribe`]              |
//! | **Throttling**  | Bounded count and bounded frequency, fixed per entry.     | [`DeliveryLimit`], [`DeliveryPolicy`] |
//! | **Config**      | Custom namespace delimiter.                               | [`EmitterConfig`], [`ConfigError`]    |
//!
//! ## Example
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use nsemit::emitter;
//!
//! struct Student {
//!     name: &'static str,
//!     notes: RefCell<u32>,
//! }
//!
//! let lectures = emitter::<Student>();
//! let sheldon = Rc::new(Student { name: "sheldon", notes: RefCell::new(0) });
//! let penny = Rc::new(Student { name: "penny", notes: RefCell::new(0) });
//!
//! lectures
//!     // every slide
//!     .subscribe("slide", sheldon.clone(), |s| *s.notes.borrow_mut() += 1)
//!     // only the first two funny ones
//!     .subscribe_limited("slide.funny", penny.clone(), |s| *s.notes.borrow_mut() += 1, 2);
//!
//! lectures.emit("slide.funny").emit("slide.funny").emit("slide.funny");
//!
//! assert_eq!(*sheldon.notes.borrow(), 3); // "slide.funny" bubbles to "slide"
//! assert_eq!(*penny.notes.borrow(), 2);   // capped
//! ```
//!
//! ## What this crate does not do
//! - Cross-thread or cross-process delivery: [`Emitter`] is `!Send` and
//!   hosts serialize access themselves.
//! - Deferred or async dispatch: handlers run inline inside `emit`.
//! - Wildcards: matching is strict namespace-prefix only.
//! - Error isolation: a panicking handler aborts the current emit.

mod config;
mod emitter;
mod error;
mod policies;
mod subscribers;

// ---- Public re-exports ----

pub use config::EmitterConfig;
pub use emitter::Emitter;
pub use error::ConfigError;
pub use policies::{DeliveryLimit, DeliveryPolicy};

/// Returns a fresh emitter with the default configuration.
///
/// The conventional entry point for consumers that never touch
/// [`EmitterConfig`]:
///
/// ```
/// use std::rc::Rc;
/// use nsemit::emitter;
///
/// let bus = emitter::<()>();
/// bus.subscribe("ping", Rc::new(()), |_| {}).emit("ping");
/// ```
pub fn emitter<C>() -> Emitter<C> {
    Emitter::new()
}
