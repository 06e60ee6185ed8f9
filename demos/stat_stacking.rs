//! # Stat Stacking Example
//!
//! Shows a diminishing-returns curve keeping stacked luck bonuses bounded.
//!
//! Each charm adds a flat +50 luck. Raw luck grows linearly; resolved luck
//! is linear up to the baseline (100) and compresses logarithmically above
//! it, so the fifth charm is worth far less than the first.
//!
//! ## Run
//! ```bash
//! cargo run --example stat_stacking
//! ```

use hookvisor::{CurveError, DrCurve, ModifierStack};

fn main() -> Result<(), CurveError> {
    let curve = DrCurve::new(100.0, 1.0)?;
    let mut luck = ModifierStack::new(60.0);

    println!("charms | raw luck | resolved luck");
    println!("-------+----------+--------------");
    println!(
        "{:>6} | {:>8.1} | {:>12.1}",
        0,
        luck.total(),
        luck.resolve(&curve)
    );

    for charms in 1..=5 {
        luck.push(50.0);
        println!(
            "{:>6} | {:>8.1} | {:>12.1}",
            charms,
            luck.total(),
            luck.resolve(&curve)
        );
    }

    // The inverse recovers the raw total from a resolved value.
    let resolved = luck.resolve(&curve);
    let raw = curve.reverse(resolved);
    println!();
    println!("reverse({resolved:.1}) = {raw:.1} (raw total {:.1})", luck.total());

    Ok(())
}
