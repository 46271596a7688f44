//! # Subscription registry - exact event name to ordered subscriber list.
//!
//! The registry maps each exact event string used at subscribe time to the
//! sequence of subscriptions registered under it, in insertion order.
//!
//! ## Rules
//! - Entries are created lazily on first subscribe to a name and persist for
//!   the emitter's lifetime, even once emptied by unsubscribe.
//! - A subscription belongs to exactly one entry and is never moved.
//! - Emit reads a snapshot of one entry at a time (exact-key lookup);
//!   unsubscribe rewrites every entry in a branch (prefix match).

use std::collections::HashMap;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::subscribers::Subscription;

use super::namespace;

/// Subscriptions for one key, in insertion order.
///
/// Most keys carry a handful of subscribers; keep small lists inline.
pub(crate) type Entry<C> = SmallVec<[Rc<Subscription<C>>; 4]>;

pub(crate) struct Registry<C> {
    entries: HashMap<String, Entry<C>>,
}

impl<C> Registry<C> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Appends a subscription under the exact key, creating the entry on
    /// first use.
    pub fn push(&mut self, event: &str, subscription: Rc<Subscription<C>>) {
        self.entries
            .entry(event.to_string())
            .or_default()
            .push(subscription);
    }

    /// Clones one key's subscriber list, or `None` when the key was never
    /// subscribed to. The clone is what emit iterates, so handlers that
    /// mutate the registry mid-dispatch cannot disturb the pass in progress.
    pub fn snapshot(&self, event: &str) -> Option<Entry<C>> {
        self.entries.get(event).cloned()
    }

    /// Removes every subscription with this context from the branch rooted
    /// at `event` (the name itself and all namespace descendants). Emptied
    /// entries stay in the map. Returns how many subscriptions were dropped.
    pub fn remove_branch(&mut self, event: &str, context: &Rc<C>, delimiter: &str) -> usize {
        let mut removed = 0;
        for (key, subs) in self.entries.iter_mut() {
            if !namespace::in_branch(key, event, delimiter) {
                continue;
            }
            let before = subs.len();
            subs.retain(|sub| !sub.context_is(context));
            removed += before - subs.len();
        }
        removed
    }

    /// Number of keys ever subscribed to (emptied keys included).
    pub fn key_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::DeliveryPolicy;

    fn sub(context: &Rc<u8>) -> Rc<Subscription<u8>> {
        Rc::new(Subscription::new(
            context.clone(),
            Rc::new(|_| {}),
            DeliveryPolicy::default(),
        ))
    }

    #[test]
    fn test_entries_created_lazily_and_kept_when_emptied() {
        let mut registry: Registry<u8> = Registry::new();
        assert_eq!(registry.key_count(), 0);

        let ctx = Rc::new(1);
        registry.push("a.b", sub(&ctx));
        assert_eq!(registry.key_count(), 1);

        registry.remove_branch("a", &ctx, ".");
        assert_eq!(registry.key_count(), 1, "emptied key persists");
        assert_eq!(registry.snapshot("a.b").unwrap().len(), 0);
    }

    #[test]
    fn test_remove_branch_spares_ancestors() {
        let mut registry: Registry<u8> = Registry::new();
        let ctx = Rc::new(1);
        registry.push("a", sub(&ctx));
        registry.push("a.b", sub(&ctx));
        registry.push("a.b.c.d", sub(&ctx));

        let removed = registry.remove_branch("a.b", &ctx, ".");
        assert_eq!(removed, 2, "the key and its deep descendant");
        assert_eq!(registry.snapshot("a").unwrap().len(), 1, "ancestor kept");
    }

    #[test]
    fn test_remove_branch_matches_context_by_identity() {
        let mut registry: Registry<u8> = Registry::new();
        let ctx_a = Rc::new(7);
        let ctx_b = Rc::new(7);
        registry.push("a", sub(&ctx_a));
        registry.push("a", sub(&ctx_b));

        registry.remove_branch("a", &ctx_a, ".");
        let left = registry.snapshot("a").unwrap();
        assert_eq!(left.len(), 1);
        assert!(left[0].context_is(&ctx_b));
    }

    #[test]
    fn test_remove_branch_unknown_name_is_noop() {
        let mut registry: Registry<u8> = Registry::new();
        let ctx = Rc::new(1);
        registry.push("a", sub(&ctx));

        assert_eq!(registry.remove_branch("zzz", &ctx, "."), 0);
        assert_eq!(registry.snapshot("a").unwrap().len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut registry: Registry<u8> = Registry::new();
        let first = Rc::new(1);
        let second = Rc::new(2);
        registry.push("a", sub(&first));
        registry.push("a", sub(&second));

        let subs = registry.snapshot("a").unwrap();
        assert!(subs[0].context_is(&first));
        assert!(subs[1].context_is(&second));
    }
}
