//! # HookBus: priority-ordered dispatch over multiple hooks.
//!
//! [`HookBus`] owns an ordered sequence of `(hook, priority)` entries for
//! exactly one payload type and walks it on every [`dispatch`](HookBus::dispatch)
//! according to its [`DispatchPolicy`].
//!
//! ## Rules
//! - **Ordering**: the sequence is always sorted by ascending priority;
//!   equal-priority entries keep their relative insertion order (FIFO ties).
//! - **Tokens**: `register` returns a [`HookId`]; removal is by token, so two
//!   registrations wrapping equivalent closures never collide.
//! - **Duplicates**: registering the same [`HookRef`](crate::HookRef) twice
//!   creates two independent entries with distinct tokens.
//! - **No mid-dispatch mutation**: `dispatch` borrows the bus immutably while
//!   `register`/`unregister` need `&mut self`, so the subscriber list cannot
//!   change under a running dispatch.
//!
//! ## Dispatch semantics
//! ```text
//! FanOut:       run every hook, ignore verdicts          ─► true
//! AllMustPass:  stop at first false, skip the rest       ─► false
//! StopOnFalse:  stop at first false, skip the rest       ─► false
//! empty bus:    nothing to run                           ─► true
//! ```
//!
//! ## Example
//! ```rust
//! use hookvisor::{HookBus, HookFn};
//!
//! let mut bus: HookBus<i32> = HookBus::all_must_pass();
//! bus.register(HookFn::rc("positive", |n: &i32| *n > 0));
//! bus.register(HookFn::rc("small", |n: &i32| *n < 100));
//!
//! assert!(bus.dispatch(&5));
//! assert!(!bus.dispatch(&-5));
//! ```

use crate::hooks::hook::HookRef;
use crate::policies::DispatchPolicy;

/// Opaque removal token returned by [`HookBus::register`].
///
/// Each registration gets a fresh token, including repeat registrations of
/// one hook handle. Tokens are only meaningful on the bus that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HookId(u64);

/// One registered subscriber record.
struct Entry<P: 'static> {
    id: u64,
    priority: f64,
    hook: HookRef<P>,
}

/// Priority-ordered multi-subscriber dispatch bus for one payload type.
///
/// The bus references its hooks (`Rc`), it does not own their state beyond
/// the registration. Unregister a hook before tearing down whatever it
/// observes; the bus performs no liveness checks of its own.
///
/// ### Properties
/// - **Deterministic**: ascending priority, FIFO among equal priorities.
/// - **Synchronous**: dispatch runs every due hook to completion, in order.
/// - **Infallible registration**: `register` always succeeds; removing an
///   unknown token is a silent no-op.
pub struct HookBus<P: 'static> {
    policy: DispatchPolicy,
    entries: Vec<Entry<P>>,
    next_id: u64,
}

impl<P: 'static> HookBus<P> {
    /// Creates an empty bus with the given dispatch policy.
    pub fn new(policy: DispatchPolicy) -> Self {
        Self {
            policy,
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Creates a notification bus: every hook runs, verdicts are ignored.
    pub fn fan_out() -> Self {
        Self::new(DispatchPolicy::FanOut)
    }

    /// Creates a validation gate: any hook may veto by returning `false`.
    pub fn all_must_pass() -> Self {
        Self::new(DispatchPolicy::AllMustPass)
    }

    /// Creates a handler chain: a `false` verdict stops propagation.
    pub fn stop_on_false() -> Self {
        Self::new(DispatchPolicy::StopOnFalse)
    }

    /// Registers a hook at the default priority (`0.0`).
    ///
    /// Returns the token to pass to [`unregister`](HookBus::unregister).
    pub fn register(&mut self, hook: HookRef<P>) -> HookId {
        self.register_with(hook, 0.0)
    }

    /// Registers a hook at an explicit priority; lower priorities run first.
    ///
    /// The new entry is placed after all existing entries of equal priority,
    /// so same-priority hooks fire in registration order. Priorities must be
    /// finite.
    pub fn register_with(&mut self, hook: HookRef<P>, priority: f64) -> HookId {
        debug_assert!(priority.is_finite(), "hook priority must be finite");

        let id = self.next_id;
        self.next_id += 1;

        let at = self.entries.partition_point(|e| e.priority <= priority);
        self.entries.insert(at, Entry { id, priority, hook });
        HookId(id)
    }

    /// Removes the registration identified by `id`.
    ///
    /// Returns `true` if an entry was removed. An unknown or already-removed
    /// token is a no-op (not an error) and returns `false`.
    pub fn unregister(&mut self, id: HookId) -> bool {
        match self.entries.iter().position(|e| e.id == id.0) {
            Some(at) => {
                self.entries.remove(at);
                true
            }
            None => false,
        }
    }

    /// Dispatches a payload to the registered hooks in sequence order.
    ///
    /// - [`DispatchPolicy::FanOut`]: every hook runs; always returns `true`.
    /// - [`DispatchPolicy::AllMustPass`] / [`DispatchPolicy::StopOnFalse`]:
    ///   stops at the first `false` verdict and returns `false`; hooks after
    ///   it never run. Returns `true` if every hook passed.
    /// - An empty bus returns `true` under every policy.
    pub fn dispatch(&self, payload: &P) -> bool {
        for entry in &self.entries {
            let pass = entry.hook.on_event(payload);
            if !pass && self.policy.short_circuits() {
                return false;
            }
        }
        true
    }

    /// This bus's dispatch policy.
    #[inline]
    pub fn policy(&self) -> DispatchPolicy {
        self.policy
    }

    /// True if there are no registered hooks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of registered hooks (duplicates counted per entry).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<P: 'static> Default for HookBus<P> {
    /// Returns an empty [fan-out](DispatchPolicy::FanOut) bus.
    fn default() -> Self {
        Self::new(DispatchPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::hook::HookFn;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Trace = Rc<RefCell<Vec<&'static str>>>;

    fn traced(trace: &Trace, name: &'static str, verdict: bool) -> HookRef<u32> {
        let trace = Rc::clone(trace);
        HookFn::rc(name, move |_: &u32| {
            trace.borrow_mut().push(name);
            verdict
        })
    }

    #[test]
    fn test_strict_priority_ordering() {
        let trace: Trace = Rc::default();
        let mut bus = HookBus::fan_out();
        bus.register_with(traced(&trace, "late", true), 5.0);
        bus.register_with(traced(&trace, "early", true), 1.0);
        bus.register_with(traced(&trace, "mid", true), 3.0);

        bus.dispatch(&0);
        assert_eq!(*trace.borrow(), vec!["early", "mid", "late"]);
    }

    #[test]
    fn test_equal_priority_preserves_registration_order() {
        let trace: Trace = Rc::default();
        let mut bus = HookBus::fan_out();
        bus.register(traced(&trace, "a", true));
        bus.register(traced(&trace, "b", true));
        bus.register(traced(&trace, "c", true));

        bus.dispatch(&0);
        assert_eq!(*trace.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_equal_priority_tie_break_with_mixed_priorities() {
        let trace: Trace = Rc::default();
        let mut bus = HookBus::fan_out();
        bus.register_with(traced(&trace, "first-zero", true), 0.0);
        bus.register_with(traced(&trace, "negative", true), -2.0);
        bus.register_with(traced(&trace, "second-zero", true), 0.0);

        bus.dispatch(&0);
        assert_eq!(
            *trace.borrow(),
            vec!["negative", "first-zero", "second-zero"]
        );
    }

    #[test]
    fn test_fan_out_runs_all_hooks_despite_false_verdicts() {
        let trace: Trace = Rc::default();
        let mut bus = HookBus::fan_out();
        bus.register(traced(&trace, "a", false));
        bus.register(traced(&trace, "b", false));
        bus.register(traced(&trace, "c", true));

        assert!(bus.dispatch(&0), "fan-out dispatch always reports true");
        assert_eq!(trace.borrow().len(), 3, "all hooks must run under fan-out");
    }

    #[test]
    fn test_all_must_pass_short_circuits_at_first_false() {
        let trace: Trace = Rc::default();
        let mut bus = HookBus::all_must_pass();
        bus.register(traced(&trace, "pass", true));
        bus.register(traced(&trace, "veto", false));
        bus.register(traced(&trace, "never", true));

        assert!(!bus.dispatch(&0));
        assert_eq!(
            *trace.borrow(),
            vec!["pass", "veto"],
            "hooks after the veto must not run"
        );
    }

    #[test]
    fn test_stop_on_false_short_circuits_at_first_false() {
        let trace: Trace = Rc::default();
        let mut bus = HookBus::stop_on_false();
        bus.register(traced(&trace, "claims-event", false));
        bus.register(traced(&trace, "never", true));

        assert!(!bus.dispatch(&0));
        assert_eq!(*trace.borrow(), vec!["claims-event"]);
    }

    #[test]
    fn test_all_hooks_true_returns_true() {
        let mut bus = HookBus::all_must_pass();
        bus.register(HookFn::rc("a", |_: &u32| true));
        bus.register(HookFn::rc("b", |_: &u32| true));
        assert!(bus.dispatch(&0));
    }

    #[test]
    fn test_empty_bus_returns_true_under_every_policy() {
        for policy in [
            DispatchPolicy::FanOut,
            DispatchPolicy::AllMustPass,
            DispatchPolicy::StopOnFalse,
        ] {
            let bus: HookBus<u32> = HookBus::new(policy);
            assert!(bus.dispatch(&0), "empty bus must pass under {policy:?}");
        }
    }

    #[test]
    fn test_veto_at_lowest_priority_skips_higher_priorities() {
        // A(1), B(0), C(1) registered in order A, B, C; B vetoes.
        // B sorts first, so dispatch attempts B only.
        let trace: Trace = Rc::default();
        let mut bus = HookBus::stop_on_false();
        bus.register_with(traced(&trace, "a", true), 1.0);
        bus.register_with(traced(&trace, "b", false), 0.0);
        bus.register_with(traced(&trace, "c", true), 1.0);

        assert!(!bus.dispatch(&0));
        assert_eq!(*trace.borrow(), vec!["b"]);
    }

    #[test]
    fn test_unregister_removes_exactly_one_entry() {
        let trace: Trace = Rc::default();
        let mut bus = HookBus::fan_out();
        bus.register(traced(&trace, "keep", true));
        let id = bus.register(traced(&trace, "drop", true));

        assert_eq!(bus.len(), 2);
        assert!(bus.unregister(id));
        assert_eq!(bus.len(), 1);

        bus.dispatch(&0);
        assert_eq!(*trace.borrow(), vec!["keep"]);
    }

    #[test]
    fn test_unregister_is_idempotent() {
        let mut bus = HookBus::fan_out();
        let id = bus.register(HookFn::rc("once", |_: &u32| true));

        assert!(bus.unregister(id));
        assert!(!bus.unregister(id), "second removal must be a no-op");
        assert!(bus.is_empty());
    }

    #[test]
    fn test_duplicate_registration_creates_independent_entries() {
        let trace: Trace = Rc::default();
        let hook = traced(&trace, "dup", true);

        let mut bus = HookBus::fan_out();
        let first = bus.register(Rc::clone(&hook));
        let second = bus.register(hook);

        assert_ne!(first, second, "each registration gets its own token");
        assert_eq!(bus.len(), 2);

        bus.dispatch(&0);
        assert_eq!(trace.borrow().len(), 2, "both entries must fire");

        assert!(bus.unregister(first));
        trace.borrow_mut().clear();
        bus.dispatch(&0);
        assert_eq!(trace.borrow().len(), 1, "one entry must survive");
    }

    #[test]
    fn test_registration_between_dispatches_keeps_order() {
        let trace: Trace = Rc::default();
        let mut bus = HookBus::fan_out();
        bus.register_with(traced(&trace, "mid", true), 1.0);

        bus.dispatch(&0);
        bus.register_with(traced(&trace, "early", true), 0.0);
        trace.borrow_mut().clear();

        bus.dispatch(&0);
        assert_eq!(*trace.borrow(), vec!["early", "mid"]);
    }

    #[test]
    fn test_len_and_policy_introspection() {
        let mut bus: HookBus<u32> = HookBus::all_must_pass();
        assert!(bus.is_empty());
        assert_eq!(bus.policy(), DispatchPolicy::AllMustPass);

        bus.register(HookFn::rc("one", |_: &u32| true));
        assert_eq!(bus.len(), 1);
        assert!(!bus.is_empty());
    }
}
