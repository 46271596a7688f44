//! # Example: throttled
//!
//! Demonstrates the two throttling policies: bounded count
//! ([`Emitter::subscribe_limited`]) and bounded frequency
//! ([`Emitter::subscribe_throttled`]).
//!
//! Shows how to:
//! - Cap a subscription at N total firings.
//! - Sample every K-th delivery attempt (the first always fires).
//! - Observe that skipped attempts still advance the delivery counter.
//!
//! ## Flow
//! ```text
//! subscribe_limited("tick", ..., 3)     → fires on attempts 1..=3
//! subscribe_throttled("tick", ..., 4)   → fires on attempts 1, 5, 9, ...
//! emit("tick") × 10
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example throttled
//! ```

use std::cell::Cell;
use std::rc::Rc;

use nsemit::emitter;

struct Probe {
    name: &'static str,
    firings: Cell<u32>,
}

impl Probe {
    fn new(name: &'static str) -> Rc<Self> {
        Rc::new(Self {
            name,
            firings: Cell::new(0),
        })
    }
}

fn main() {
    let metrics = emitter::<Probe>();

    let burst = Probe::new("burst-alarm");
    let sampler = Probe::new("sampler");

    metrics
        // alert on the first three ticks only
        .subscribe_limited(
            "tick",
            burst.clone(),
            |p| {
                p.firings.set(p.firings.get() + 1);
                println!("[{}] firing #{}", p.name, p.firings.get());
            },
            3,
        )
        // record every fourth tick
        .subscribe_throttled(
            "tick",
            sampler.clone(),
            |p| {
                p.firings.set(p.firings.get() + 1);
                println!("[{}] sample #{}", p.name, p.firings.get());
            },
            4,
        );

    for n in 1..=10 {
        println!("--- tick {} ---", n);
        metrics.emit("tick");
    }

    println!(
        "{}: {} firings, {}: {} firings",
        burst.name,
        burst.firings.get(),
        sampler.name,
        sampler.firings.get()
    );
}
