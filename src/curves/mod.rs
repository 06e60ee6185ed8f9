//! Stat curves: diminishing returns and modifier stacking.
//!
//! This module groups the math that keeps stacking gameplay modifiers from
//! growing without bound.
//!
//! ## Contents
//! - [`DrCurve`] forward/inverse diminishing-returns curve (validated params)
//! - [`apply_dr`] / [`reverse_dr`] one-shot free functions over the same math
//! - [`ModifierStack`] additive accumulation resolved through a curve
//!
//! ## Quick wiring
//! ```text
//! gear + buffs + skills ─► ModifierStack::push(bonus) ...
//!                              └─► total() ─► DrCurve::apply()
//!                                             linear up to baseline,
//!                                             log falloff above it
//! ```

mod dr;
mod stack;

pub use dr::{apply_dr, reverse_dr, DrCurve};
pub use stack::ModifierStack;
