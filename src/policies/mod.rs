//! Dispatch policies.
//!
//! This module groups the knob that controls **how** a bus walks its hooks
//! when an event is dispatched.
//!
//! ## Contents
//! - [`DispatchPolicy`] fan-out vs short-circuit semantics for a [`HookBus`](crate::HookBus)
//!
//! ## Quick wiring
//! ```text
//! HookBus::new(policy)
//!      └─► hooks::bus::HookBus::dispatch uses:
//!           - policy.short_circuits() to decide whether a false verdict
//!             stops the walk and fails the dispatch
//! ```
//!
//! ## Defaults
//! - `DispatchPolicy::FanOut` (pure notification, no veto semantics).

mod dispatch;

pub use dispatch::DispatchPolicy;
