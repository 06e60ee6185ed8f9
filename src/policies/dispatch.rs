//! # Dispatch policy for hook buses.
//!
//! [`DispatchPolicy`] determines what a [`HookBus`](crate::HookBus) does with
//! each hook's boolean verdict while walking the subscriber sequence.
//!
//! - [`DispatchPolicy::FanOut`] every hook runs; verdicts are ignored (default).
//! - [`DispatchPolicy::AllMustPass`] any hook may veto; dispatch stops at the first `false`.
//! - [`DispatchPolicy::StopOnFalse`] a hook may stop propagation; dispatch stops at the first `false`.
//!
//! ## Choosing the right policy
//!
//! **Independent listeners** (all must observe the event):
//! ```text
//! DispatchPolicy::FanOut        → spoilage checks, info text appenders
//! ```
//!
//! **Validation gates** (any listener may veto the action):
//! ```text
//! DispatchPolicy::AllMustPass   → "can this action proceed"
//! ```
//!
//! **Ordered handler chains** (a handler consumes the event):
//! ```text
//! DispatchPolicy::StopOnFalse   → first handler that claims the event
//!                                 stops the rest from seeing it
//! ```
//!
//! `AllMustPass` and `StopOnFalse` share one behavioral contract — stop at
//! the first `false` verdict and report failure, vacuously succeed on an
//! empty bus. Two variants exist so a bus declaration states its call-site
//! intent: a veto conjunction reads differently from a propagation stop.

/// Policy controlling how a bus combines hook verdicts during dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchPolicy {
    /// Fan-out: every hook runs, verdicts are ignored, dispatch reports `true`.
    FanOut,
    /// Conjunction gate: dispatch stops at the first `false` verdict and
    /// reports `false`; remaining hooks never run.
    AllMustPass,
    /// Propagation stop: same short-circuit contract as `AllMustPass`, named
    /// for chains where a `false` verdict means "event consumed, stop here".
    StopOnFalse,
}

impl Default for DispatchPolicy {
    /// Returns [`DispatchPolicy::FanOut`].
    fn default() -> Self {
        DispatchPolicy::FanOut
    }
}

impl DispatchPolicy {
    /// True if a `false` hook verdict stops the walk and fails the dispatch.
    #[inline]
    pub fn short_circuits(&self) -> bool {
        matches!(
            self,
            DispatchPolicy::AllMustPass | DispatchPolicy::StopOnFalse
        )
    }
}
