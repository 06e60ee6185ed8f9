//! # Fan-Out Notification Example
//!
//! Shows a notification bus where every hook observes each event,
//! regardless of any hook's verdict.
//!
//! Two observers watch a brew aging tick:
//! - a spoilage watcher counting how often the brew was past its prime
//! - an info line collector building up tooltip text
//!
//! ## Run
//! ```bash
//! cargo run --example fan_out
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use hookvisor::{HookBus, HookFn};

struct BrewTick {
    age_ticks: u64,
    potency: f64,
}

fn main() {
    let spoiled = Rc::new(Cell::new(0u32));
    let info = Rc::new(RefCell::new(Vec::<String>::new()));

    let mut bus: HookBus<BrewTick> = HookBus::fan_out();

    {
        let spoiled = Rc::clone(&spoiled);
        bus.register(HookFn::rc("spoilage-watch", move |tick: &BrewTick| {
            if tick.age_ticks > 100 {
                spoiled.set(spoiled.get() + 1);
            }
            // On a fan-out bus the verdict is ignored; return false to prove it.
            false
        }));
    }

    {
        let info = Rc::clone(&info);
        bus.register_with(
            HookFn::rc("info-text", move |tick: &BrewTick| {
                info.borrow_mut()
                    .push(format!("age={} potency={:.2}", tick.age_ticks, tick.potency));
                true
            }),
            10.0, // append last so other hooks have already reacted
        );
    }

    for age_ticks in [10, 60, 110, 160] {
        let tick = BrewTick {
            age_ticks,
            potency: 1.0 - age_ticks as f64 / 200.0,
        };
        let verdict = bus.dispatch(&tick);
        assert!(verdict, "fan-out dispatch always reports true");
    }

    println!("spoiled ticks observed: {}", spoiled.get());
    println!("info lines:");
    for line in info.borrow().iter() {
        println!("  {line}");
    }
}
