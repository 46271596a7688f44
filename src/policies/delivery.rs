//! # Delivery throttling policy for subscriptions.
//!
//! [`DeliveryPolicy`] decides, per delivery attempt, whether a subscription's
//! handler actually fires. It is parameterized by:
//! - [`DeliveryPolicy::limit`] the total-firings cap (bounded count);
//! - [`DeliveryPolicy::frequency`] the attempt stride (bounded frequency).
//!
//! A handler fires on attempt `n` (0-indexed) when `n` is below the cap and
//! `n % frequency == 0`. Because the check runs against the counter *before*
//! it is incremented, the first attempt always fires, then every
//! `frequency`-th attempt after it.
//!
//! Non-positive inputs are not errors: a cap `<= 0` normalizes to
//! [`DeliveryLimit::Unbounded`] and a frequency `<= 0` normalizes to 1
//! (fires every time).
//!
//! # Example
//! ```rust
//! use nsemit::DeliveryPolicy;
//!
//! let every_third = DeliveryPolicy::throttled(3);
//! assert!(every_third.should_fire(0));  // 1st attempt
//! assert!(!every_third.should_fire(1));
//! assert!(!every_third.should_fire(2));
//! assert!(every_third.should_fire(3));  // 4th attempt
//!
//! let twice = DeliveryPolicy::limited(2);
//! assert!(twice.should_fire(0));
//! assert!(twice.should_fire(1));
//! assert!(!twice.should_fire(2));
//! ```

/// Cap on the total number of handler firings for one subscription.
///
/// An explicit variant replaces the dynamic "infinity" sentinel so the
/// delivery counter's arithmetic stays well-defined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeliveryLimit {
    /// No cap: the handler may fire on every eligible attempt.
    #[default]
    Unbounded,
    /// No firing once this many delivery attempts have been counted; later
    /// attempts still count, never fire. With the default stride of 1 this
    /// caps the number of firings.
    Capped(u64),
}

impl DeliveryLimit {
    /// Normalizes a raw cap: values `<= 0` mean "no cap".
    pub fn from_times(times: i64) -> Self {
        if times <= 0 {
            DeliveryLimit::Unbounded
        } else {
            DeliveryLimit::Capped(times as u64)
        }
    }

    /// Whether a subscription that already made `delivered` attempts may
    /// still fire.
    pub fn allows(&self, delivered: u64) -> bool {
        match self {
            DeliveryLimit::Unbounded => true,
            DeliveryLimit::Capped(max) => delivered < *max,
        }
    }
}

/// Per-subscription throttling policy, fixed at subscribe time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeliveryPolicy {
    /// Total-firings cap.
    pub limit: DeliveryLimit,
    /// Fire on every `frequency`-th delivery attempt (always `>= 1`).
    pub frequency: u64,
}

impl Default for DeliveryPolicy {
    /// Returns a policy with:
    /// - `limit = Unbounded`;
    /// - `frequency = 1` (fires every time).
    fn default() -> Self {
        Self {
            limit: DeliveryLimit::Unbounded,
            frequency: 1,
        }
    }
}

impl DeliveryPolicy {
    /// Policy capping total firings at `times`; `times <= 0` means unbounded.
    pub fn limited(times: i64) -> Self {
        Self {
            limit: DeliveryLimit::from_times(times),
            frequency: 1,
        }
    }

    /// Policy firing on every `frequency`-th attempt; `frequency <= 0`
    /// normalizes to 1.
    pub fn throttled(frequency: i64) -> Self {
        Self {
            limit: DeliveryLimit::Unbounded,
            frequency: if frequency <= 0 { 1 } else { frequency as u64 },
        }
    }

    /// Whether the handler fires on the attempt with this pre-increment
    /// counter value.
    pub fn should_fire(&self, delivered: u64) -> bool {
        self.limit.allows(delivered) && delivered % self.frequency == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fires_every_attempt() {
        let policy = DeliveryPolicy::default();
        for attempt in 0..10 {
            assert!(
                policy.should_fire(attempt),
                "attempt {} should fire under the default policy",
                attempt
            );
        }
    }

    #[test]
    fn test_limited_stops_at_cap() {
        let policy = DeliveryPolicy::limited(2);
        assert!(policy.should_fire(0));
        assert!(policy.should_fire(1));
        assert!(!policy.should_fire(2));
        assert!(!policy.should_fire(100));
    }

    #[test]
    fn test_limited_zero_is_unbounded() {
        let policy = DeliveryPolicy::limited(0);
        assert_eq!(policy.limit, DeliveryLimit::Unbounded);
        assert!(policy.should_fire(1_000_000));
    }

    #[test]
    fn test_limited_negative_is_unbounded() {
        let policy = DeliveryPolicy::limited(-5);
        assert_eq!(policy.limit, DeliveryLimit::Unbounded);
        assert!(policy.should_fire(42));
    }

    #[test]
    fn test_throttled_first_attempt_always_fires() {
        for freq in [1, 2, 3, 7, 100] {
            let policy = DeliveryPolicy::throttled(freq);
            assert!(
                policy.should_fire(0),
                "frequency {} must fire on the first attempt",
                freq
            );
        }
    }

    #[test]
    fn test_throttled_stride_pattern() {
        let policy = DeliveryPolicy::throttled(3);
        let fired: Vec<bool> = (0..7).map(|n| policy.should_fire(n)).collect();
        assert_eq!(fired, [true, false, false, true, false, false, true]);
    }

    #[test]
    fn test_throttled_zero_and_negative_default_to_one() {
        for freq in [0, -1, -100] {
            let policy = DeliveryPolicy::throttled(freq);
            assert_eq!(policy.frequency, 1, "frequency {} should normalize", freq);
            assert!(policy.should_fire(0));
            assert!(policy.should_fire(1));
        }
    }

    #[test]
    fn test_limit_and_frequency_combine() {
        // cap of 3 attempts with stride 2: attempts 0 and 2 fire, the cap
        // then shuts everything off even where the stride would match
        let policy = DeliveryPolicy {
            limit: DeliveryLimit::Capped(3),
            frequency: 2,
        };
        assert!(policy.should_fire(0));
        assert!(!policy.should_fire(1));
        assert!(policy.should_fire(2));
        assert!(!policy.should_fire(4));
    }
}
