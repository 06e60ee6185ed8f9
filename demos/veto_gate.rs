//! # Veto Gate Example
//!
//! Shows a validation gate where every hook must pass for an action to
//! proceed, and a cheap check at a low priority runs before expensive ones.
//!
//! A fishing cast is gated by:
//! - a line-strength check (priority -10, runs first, cheap)
//! - a depth limit (priority 0)
//! - a "haunted waters" curfew that only applies at night (priority 5)
//!
//! ## Run
//! ```bash
//! cargo run --example veto_gate
//! ```

use hookvisor::{HookBus, HookFn};

struct CastAttempt {
    depth: f64,
    line_strength: f64,
    is_night: bool,
}

fn main() {
    let mut gate: HookBus<CastAttempt> = HookBus::all_must_pass();

    gate.register_with(
        HookFn::rc("line-check", |c: &CastAttempt| c.line_strength > 1.0),
        -10.0,
    );
    gate.register(HookFn::rc("depth-limit", |c: &CastAttempt| c.depth <= 30.0));
    let curfew = gate.register_with(
        HookFn::rc("haunted-curfew", |c: &CastAttempt| !c.is_night),
        5.0,
    );

    let casts = [
        ("shallow day cast", CastAttempt { depth: 10.0, line_strength: 2.0, is_night: false }),
        ("frayed line", CastAttempt { depth: 10.0, line_strength: 0.5, is_night: false }),
        ("too deep", CastAttempt { depth: 45.0, line_strength: 2.0, is_night: false }),
        ("night cast", CastAttempt { depth: 10.0, line_strength: 2.0, is_night: true }),
    ];

    for (label, cast) in &casts {
        let allowed = gate.dispatch(cast);
        println!("{label}: {}", if allowed { "cast!" } else { "vetoed" });
    }

    // Lifting the curfew re-allows night casts.
    gate.unregister(curfew);
    let night = CastAttempt {
        depth: 10.0,
        line_strength: 2.0,
        is_night: true,
    };
    println!("night cast, curfew lifted: {}", if gate.dispatch(&night) { "cast!" } else { "vetoed" });
}
