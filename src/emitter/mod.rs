//! Emitter core: registry, namespace arithmetic, dispatch.
//!
//! The only public API from this module is [`Emitter`].
//!
//! Internal modules:
//! - [`namespace`]: parent truncation, branch tests, ancestor chains;
//! - [`registry`]: exact-name map to ordered subscriber lists;
//! - [`core`]: the emitter itself (subscribe variants, unsubscribe, emit).

mod core;
mod namespace;
mod registry;

pub use self::core::Emitter;
