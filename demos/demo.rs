//! Deterministic walk-through of the range trainer.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `range_trainer` works end to end:
//!
//! 1. **Catalog + tiers** — the 169-class catalog is built and classified
//!    once, then summarized per tier.
//! 2. **Seeded drills** — a handful of drills with fixed seeds, so the
//!    output is reproducible: the question, the matching hands, and the
//!    combo coverage a front end would display.
//! 3. **Grid export** — the tier totals from the 13×13 JSON grid.

use rand::rngs::StdRng;
use rand::SeedableRng;

use range_trainer::{
    combo_total, generate_drill, query, to_grid_json, RangeCatalog, RangeFilter, Tier,
};

/// Generate and pretty-print one drill round.
fn print_round(catalog: &RangeCatalog, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let drill = generate_drill(&mut rng);

    let answer = query(catalog, &drill.answer_filter());
    let pool_combos = combo_total(query(catalog, &drill.pool_filter()));
    let answer_combos = combo_total(answer.iter().copied());

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  seed={seed}", drill.kind);
    println!("  Q: {}", drill.question);
    println!();
    let codes: Vec<String> = answer.iter().map(|h| h.code.clone()).collect();
    println!("  A: {}", if codes.is_empty() { "(none)".to_string() } else { codes.join(", ") });
    if pool_combos > 0 {
        println!(
            "  Combos: {answer_combos} / {pool_combos} = {} %",
            (100 * answer_combos + pool_combos / 2) / pool_combos
        );
    }
    println!();
}

fn main() {
    let catalog = RangeCatalog::standard();

    // ── Tier composition ─────────────────────────────────────────────────
    println!();
    println!("══ Tier composition ══");
    println!();
    for tier in Tier::LADDER {
        let hands = query(
            &catalog,
            &RangeFilter { tiers: Some([tier].into_iter().collect()), ..RangeFilter::default() },
        );
        let combos = combo_total(hands.iter().copied());
        println!("  {:<12} {:>3} classes  {combos:>4} combos", tier.to_string(), hands.len());
    }
    let unranked = catalog.iter().filter(|h| h.tier == Tier::Unranked).count();
    println!("  {:<12} {unranked:>3} classes", "unranked");
    println!();

    // ── Seeded drills ────────────────────────────────────────────────────
    println!("══ Seeded drills ══");
    println!();
    for seed in [1001u64, 2002, 3003, 4004, 5005] {
        print_round(&catalog, seed);
    }

    // ── Grid export ──────────────────────────────────────────────────────
    println!("══ Grid export: per-tier combo totals ══");
    println!();
    let grid = to_grid_json(&catalog);
    println!("{}", serde_json::to_string_pretty(&grid["tier_combos"]).unwrap_or_default());
}
