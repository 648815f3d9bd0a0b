//! One-call drill rounds over an owned catalog and RNG.
//!
//! The session packages the standard per-round flow: generate a prompt,
//! query the matching hands, query the drilled pool, and hand back both
//! with their combo totals so a front end only has to render.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::range_engine::catalog::RangeCatalog;
use crate::range_engine::generator::generate_drill;
use crate::range_engine::models::{DrillPrompt, HandClass};
use crate::range_engine::query::{combo_total, query};

/// A training session: the classified catalog plus a private RNG.
///
/// `rng_seed: Some(n)` reproduces the exact same round sequence every
/// time; `None` seeds from entropy.
pub struct DrillSession {
    catalog: RangeCatalog,
    rng: StdRng,
}

/// One completed round: the prompt, every matching class, and the combo
/// totals for the match set and the full drilled pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillRound {
    pub prompt: DrillPrompt,
    pub matches: Vec<HandClass>,
    pub match_combos: u32,
    pub pool_combos: u32,
}

impl DrillSession {
    pub fn new(rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        DrillSession { catalog: RangeCatalog::standard(), rng }
    }

    pub fn catalog(&self) -> &RangeCatalog {
        &self.catalog
    }

    /// Generate the next prompt and resolve both of its queries.
    pub fn next_round(&mut self) -> DrillRound {
        let prompt = generate_drill(&mut self.rng);
        let matches: Vec<HandClass> = query(&self.catalog, &prompt.answer_filter())
            .into_iter()
            .cloned()
            .collect();
        let match_combos = combo_total(&matches);
        let pool_combos = combo_total(query(&self.catalog, &prompt.pool_filter()));
        DrillRound { prompt, matches, match_combos, pool_combos }
    }
}

impl DrillRound {
    /// Share of the drilled pool covered by the matching hands, rounded to
    /// whole percent. `None` when the pool holds no combos at all, which a
    /// consumer must special-case instead of dividing by zero.
    pub fn percent(&self) -> Option<u32> {
        if self.pool_combos == 0 {
            None
        } else {
            Some((100 * self.match_combos + self.pool_combos / 2) / self.pool_combos)
        }
    }
}
