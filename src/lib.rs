//! # hookvisor
//!
//! **Hookvisor** is a lightweight hook-dispatch and stat-curve library for
//! tick-based game simulations.
//!
//! It provides two small, independent primitives: a priority-ordered,
//! multi-subscriber [`HookBus`] for decoupling gameplay behaviors from their
//! call sites, and a diminishing-returns curve ([`DrCurve`]) for combining
//! stacking stat modifiers without unbounded growth.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  Gameplay systems (register during setup):
//!    spoilage check ──┐
//!    info text append ┼──► HookBus<P> ── owns ──► [(hook, priority), ...]
//!    brew validator ──┘        │                   sorted ascending,
//!                              │                   FIFO on ties
//!  Simulation tick:            ▼
//!    dispatch(&payload) ──► hooks run in sequence order
//!                              │
//!                              ├─ FanOut      ─► run all, verdicts ignored
//!                              ├─ AllMustPass ─► stop at first false (veto)
//!                              └─ StopOnFalse ─► stop at first false
//!
//!  Stat resolution:
//!    base + bonuses ──► ModifierStack::total() ──► DrCurve::apply()
//!                                                  (log falloff above baseline)
//! ```
//!
//! ### Dispatch lifecycle
//! ```text
//! HookBus::register(hook)            ─► HookId (removal token)
//! HookBus::register_with(hook, prio) ─► inserted after equal priorities
//!
//! dispatch(&payload):
//!   for (hook, _) in entries (ascending priority, insertion order on ties) {
//!     verdict = hook.on_event(&payload)
//!     if !verdict && policy.short_circuits() ─► return false
//!   }
//!   ─► return true
//! ```
//!
//! ## Features
//! | Area           | Description                                                  | Key types / traits                |
//! |----------------|--------------------------------------------------------------|-----------------------------------|
//! | **Hook API**   | Plug behaviors into dispatch points (checks, notifications). | [`Hook`], [`HookFn`], [`HookRef`] |
//! | **Bus**        | Priority-ordered dispatch with three policies.               | [`HookBus`], [`HookId`]           |
//! | **Policies**   | Choose fan-out vs short-circuit semantics per bus.           | [`DispatchPolicy`]                |
//! | **Curves**     | Compress values above a baseline with logarithmic falloff.   | [`DrCurve`], [`apply_dr`]         |
//! | **Stacking**   | Accumulate additive bonuses, resolve through a curve.        | [`ModifierStack`]                 |
//! | **Errors**     | Typed errors for curve parameter validation.                 | [`CurveError`]                    |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogHook`] _(demo/reference only)_.
//! - `serde`: (de)serialization for curve parameters; deserialization
//!   re-validates through [`DrCurve::new`].
//!
//! ## Threading
//! Everything here is synchronous and single-threaded by design: dispatch runs
//! to completion inside one simulation tick, registration happens on the same
//! logical thread, and hook handles are [`std::rc::Rc`]. There is no locking
//! and no atomic registration.
//!
//! ## Example
//! ```rust
//! use hookvisor::{CurveError, DrCurve, HookBus, HookFn};
//!
//! struct CastAttempt {
//!     depth: f64,
//!     line_strength: f64,
//! }
//!
//! fn main() -> Result<(), CurveError> {
//!     // A veto gate: every hook must pass for the cast to proceed.
//!     let mut gate: HookBus<CastAttempt> = HookBus::all_must_pass();
//!     gate.register(HookFn::rc("depth-limit", |c: &CastAttempt| c.depth <= 30.0));
//!     let line = gate.register_with(
//!         HookFn::rc("line-check", |c: &CastAttempt| c.line_strength > 1.0),
//!         -10.0, // runs before the depth limit
//!     );
//!
//!     assert!(gate.dispatch(&CastAttempt { depth: 12.0, line_strength: 2.0 }));
//!     assert!(!gate.dispatch(&CastAttempt { depth: 12.0, line_strength: 0.5 }));
//!
//!     gate.unregister(line);
//!     assert!(gate.dispatch(&CastAttempt { depth: 12.0, line_strength: 0.5 }));
//!
//!     // A stat curve: linear up to the baseline, logarithmic above it.
//!     let curve = DrCurve::new(100.0, 1.0)?;
//!     assert_eq!(curve.apply(80.0), 80.0);
//!     assert!(curve.apply(200.0) < 140.0);
//!     Ok(())
//! }
//! ```
mod curves;
mod error;
mod hooks;
mod policies;

// ---- Public re-exports ----

pub use curves::{apply_dr, reverse_dr, DrCurve, ModifierStack};
pub use error::CurveError;
pub use hooks::{Hook, HookBus, HookFn, HookId, HookRef};
pub use policies::DispatchPolicy;

// Optional: expose a simple built-in logging hook (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use hooks::LogHook;
