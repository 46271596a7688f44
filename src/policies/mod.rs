//! Throttling policies applied at delivery time.
//!
//! A policy is attached to a subscription when it is created and never
//! changes afterwards. The emit path consults it once per delivery attempt.
//!
//! ## Contents
//! - [`DeliveryLimit`] bounded-count cap with an explicit unbounded variant
//! - [`DeliveryPolicy`] cap + attempt stride, with silent normalization of
//!   non-positive inputs

mod delivery;

pub use delivery::{DeliveryLimit, DeliveryPolicy};
