//! Core range engine — catalog construction, tier classification, queries,
//! and drill generation.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: ranks, shapes, tiers, hand classes, filters, prompts |
//! | `catalog`   | The 169-class universe in canonical order |
//! | `tiers`     | Declarative membership tables and the classification pass |
//! | `query`     | AND-combined filtering and combo arithmetic |
//! | `generator` | The 13-bucket drill template scheme |
//! | `session`   | Seeded sessions that run a full round in one call |

pub mod catalog;
pub mod generator;
pub mod models;
pub mod query;
pub mod session;
pub mod tiers;

// Re-export the public API surface so callers can use
// `range_engine::generate_drill` without reaching into sub-modules.
pub use catalog::RangeCatalog;
pub use generator::generate_drill;
pub use models::{DrillKind, DrillPrompt, HandClass, Rank, RangeFilter, Shape, Tier};
pub use query::{combo_total, query};
pub use session::{DrillRound, DrillSession};
pub use tiers::{classify, TierTable, DEFAULT_TIERS};
