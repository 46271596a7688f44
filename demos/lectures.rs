//! # Example: lectures
//!
//! Demonstrates namespaced subscriptions and bubbling emission.
//!
//! Shows how to:
//! - Subscribe several contexts to different levels of one namespace.
//! - Observe descendant-before-ancestor delivery order on emit.
//! - Unsubscribe a whole branch (the name and its descendants) at once.
//!
//! ## Flow
//! ```text
//! subscribe("slide", ...)          emit("slide.funny")
//! subscribe("slide.funny", ...)      ├─► "slide.funny" subscribers
//!                                    └─► "slide" subscribers
//! unsubscribe("slide", ctx)          (sweeps "slide" and "slide.*")
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example lectures
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use nsemit::emitter;

struct Student {
    name: &'static str,
    notes: RefCell<Vec<&'static str>>,
}

impl Student {
    fn new(name: &'static str) -> Rc<Self> {
        Rc::new(Self {
            name,
            notes: RefCell::new(Vec::new()),
        })
    }

    fn note(&self, what: &'static str) {
        println!("[{}] noted: {}", self.name, what);
        self.notes.borrow_mut().push(what);
    }
}

fn main() {
    let lectures = emitter::<Student>();

    let sheldon = Student::new("sheldon");
    let penny = Student::new("penny");

    lectures
        // sheldon writes down every slide
        .subscribe("slide", sheldon.clone(), |s| s.note("a slide"))
        // penny only reacts to the funny ones
        .subscribe("slide.funny", penny.clone(), |s| s.note("a funny slide"));

    println!("--- emit slide.funny (bubbles to slide) ---");
    lectures.emit("slide.funny");

    println!("--- emit slide (no descendant delivery) ---");
    lectures.emit("slide");

    println!("--- penny leaves: unsubscribe the whole slide branch ---");
    lectures.unsubscribe("slide", &penny).emit("slide.funny");

    println!(
        "sheldon took {} notes, penny took {}",
        sheldon.notes.borrow().len(),
        penny.notes.borrow().len()
    );
}
