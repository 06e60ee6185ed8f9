//! # Simple logging hook for debugging and demos.
//!
//! [`LogHook`] prints every dispatched payload to stdout in a human-readable
//! format. This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [hook] payload=CastAttempt { depth: 12.0, line_strength: 2.0 }
//! [hook] payload=BrewStep { reagent: "nightshade" }
//! ```

use std::fmt::Debug;

use crate::hooks::hook::Hook;

/// Simple stdout logging hook.
///
/// Enabled via the `logging` feature. Prints the `Debug` rendering of each
/// payload it observes and always passes, so it never vetoes or stops
/// dispatch regardless of the bus policy.
///
/// Not intended for production use - implement a custom [`Hook`] for
/// structured logging or metrics collection.
pub struct LogHook;

impl<P: Debug + 'static> Hook<P> for LogHook {
    fn on_event(&self, payload: &P) -> bool {
        println!("[hook] payload={payload:?}");
        true
    }

    fn name(&self) -> &str {
        "log"
    }
}
