//! # Hook abstraction and function-backed hook implementation.
//!
//! This module defines the [`Hook`] trait (synchronous, verdict-returning) and
//! a convenient function-backed implementation [`HookFn`]. The common handle
//! type is [`HookRef`], an `Rc<dyn Hook<P>>` suitable for registering on one
//! or more buses within a single-threaded simulation.
//!
//! A hook receives a shared reference to the payload and returns a verdict.
//! On a fan-out bus the verdict is ignored; on short-circuiting buses `false`
//! stops dispatch. Hooks that only observe should return `true`.

use std::borrow::Cow;
use std::rc::Rc;

/// Shared handle to a hook, as stored by a [`HookBus`](crate::HookBus).
///
/// `Rc` rather than `Arc`: dispatch is single-threaded cooperative, and the
/// handle type should not suggest otherwise. Registering one handle on
/// several buses (or twice on the same bus) is fine — each registration is an
/// independent entry.
pub type HookRef<P> = Rc<dyn Hook<P>>;

/// # Synchronous payload handler.
///
/// A `Hook` has a stable [`name`](Hook::name) and an [`on_event`](Hook::on_event)
/// method invoked once per dispatch with a shared reference to the payload.
/// Implementations that need mutable state use interior mutability
/// (`Cell`/`RefCell`) — dispatch never hands out `&mut` access.
///
/// # Example
/// ```
/// use std::cell::Cell;
/// use hookvisor::Hook;
///
/// struct CatchCounter {
///     catches: Cell<u32>,
/// }
///
/// impl Hook<f64> for CatchCounter {
///     fn on_event(&self, _weight: &f64) -> bool {
///         self.catches.set(self.catches.get() + 1);
///         true
///     }
///
///     fn name(&self) -> &str {
///         "catch-counter"
///     }
/// }
/// ```
pub trait Hook<P>: 'static {
    /// Handles one dispatched payload and returns a verdict.
    ///
    /// The verdict only matters on short-circuiting buses; see
    /// [`DispatchPolicy`](crate::DispatchPolicy).
    fn on_event(&self, payload: &P) -> bool;

    /// Human-readable name (for logs/diagnostics).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Function-backed hook implementation.
///
/// Wraps a closure `F: Fn(&P) -> bool` together with a stable name.
#[derive(Debug)]
pub struct HookFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> HookFn<F> {
    /// Creates a new function-backed hook.
    ///
    /// Prefer [`HookFn::rc`] when you immediately need a [`HookRef`].
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the hook and returns it as a shared handle.
    ///
    /// ## Example
    /// ```rust
    /// use hookvisor::{HookFn, HookRef};
    ///
    /// let h: HookRef<u32> = HookFn::rc("even-only", |n: &u32| n % 2 == 0);
    /// assert_eq!(h.name(), "even-only");
    /// assert!(h.on_event(&4));
    /// assert!(!h.on_event(&3));
    /// ```
    pub fn rc(name: impl Into<Cow<'static, str>>, f: F) -> Rc<Self> {
        Rc::new(Self::new(name, f))
    }
}

impl<P, F> Hook<P> for HookFn<F>
where
    P: 'static,
    F: Fn(&P) -> bool + 'static, // Fn, not FnMut: state goes through interior mutability
{
    fn on_event(&self, payload: &P) -> bool {
        (self.f)(payload)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
