//! # range_trainer
//!
//! A fully offline, deterministic preflop hand-range trainer.
//!
//! This library models the 169 canonical two-card starting-hand classes of
//! Texas Hold'em, partitions them into a fixed ladder of strategic tiers,
//! and generates randomized recall drills over that partition ("which hands
//! in the blue and green ranges contain a ten?").
//!
//! ## How it works
//!
//! 1. [`RangeCatalog::standard()`] builds the 169-class catalog and applies
//!    the shipped tier tables. After that the catalog never changes.
//! 2. [`generate_drill`] draws one of five drill templates from a fixed
//!    13-bucket distribution: three canonical positional scenarios, a
//!    single random tier, or "everything at or above a random tier".
//! 3. [`query`] resolves the prompt's two filters — the hands the player
//!    must name, and the full drilled pool — so a front end can show the
//!    answer and its combo coverage.
//!
//! [`DrillSession`] bundles steps 2 and 3 into one call per round.
//!
//! ## Key features
//!
//! - **Deterministic**: all randomness comes through an injected RNG; a
//!   seeded `StdRng` reproduces the exact same drill sequence every time.
//! - **Closed vocabulary**: tiers, shapes, and drill templates are plain
//!   enums, so matches over them are exhaustiveness-checked.
//! - **Grid export**: [`to_grid_json`] renders the classified catalog as
//!   the conventional 13×13 matrix for any client UI.
//!
//! ## Quick start
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use range_trainer::{combo_total, generate_drill, query, RangeCatalog};
//!
//! let catalog = RangeCatalog::standard();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let drill = generate_drill(&mut rng);
//! println!("Q: {}", drill.question);
//!
//! let answer = query(&catalog, &drill.answer_filter());
//! let pool = query(&catalog, &drill.pool_filter());
//! assert!(combo_total(answer) <= combo_total(pool));
//! ```

pub mod grid_adapter;
pub mod range_engine;

// Convenience re-exports so callers can use `range_trainer::generate_drill`
// directly without reaching into `range_engine::`.
pub use grid_adapter::to_grid_json;
pub use range_engine::{
    classify, combo_total, generate_drill, query, DrillKind, DrillPrompt,
    DrillRound, DrillSession, HandClass, Rank, RangeCatalog, RangeFilter,
    Shape, Tier, TierTable, DEFAULT_TIERS,
};
