//! # Hooks: the handler contract and the ordered bus.
//!
//! This module provides the [`Hook`] trait and the [`HookBus`] that dispatches
//! payloads to registered hooks in priority order.
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   call site ── dispatch(&payload) ──► HookBus ──► hooks in sequence order
//!                                          │
//!                                          │   ┌──────────┬──────────┬────────┐
//!                                          │   ▼          ▼          ▼        ▼
//!                                          │ validator  spoilage  LogHook   ...
//!                                          │
//!                                          └──► short-circuit on false
//!                                               (AllMustPass / StopOnFalse)
//! ```
//!
//! ## Hook types
//! - **Check hooks** - return a verdict that can veto or stop dispatch
//! - **Notification hooks** - observe and react; on a fan-out bus the verdict
//!   is ignored (return `true` by convention)
//!
//! ## Implementing custom hooks
//! ```rust
//! use hookvisor::Hook;
//!
//! struct Spoilage {
//!     shelf_ticks: u64,
//! }
//!
//! impl Hook<u64> for Spoilage {
//!     fn on_event(&self, age: &u64) -> bool {
//!         *age < self.shelf_ticks
//!     }
//!
//!     fn name(&self) -> &str {
//!         "spoilage"
//!     }
//! }
//! ```

mod bus;
mod hook;

#[cfg(feature = "logging")]
mod log;

pub use bus::{HookBus, HookId};
pub use hook::{Hook, HookFn, HookRef};

#[cfg(feature = "logging")]
pub use log::LogHook;
