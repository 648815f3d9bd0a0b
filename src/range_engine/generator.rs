//! Drill prompt generation.
//!
//! One uniform sample in [0, 1) is resolved against thirteen equal-width
//! buckets. Three buckets are canonical positional scenarios with fixed
//! tier sets, five are a single tier drawn from a mid-ladder pool, and the
//! remaining five are "everything at or above a random floor". The
//! distribution is intentionally non-uniform over tiers.
//!
//! ## RNG ordering
//!
//! Calls happen in a fixed sequence: the bucket sample, then any
//! template-internal draw, then the rank. Determinism tests depend on this
//! order, so do not reorder the draws.

use std::collections::BTreeSet;

use rand::Rng;

use crate::range_engine::models::{DrillKind, DrillPrompt, Rank, Tier};

/// Single-tier pool for the [3, 8) buckets.
const SINGLE_TIER_POOL: [Tier; 5] = [
    Tier::White, Tier::Blue, Tier::Green, Tier::Yellow, Tier::Red,
];

/// Generate one training prompt from an injected RNG.
///
/// Pass a seeded `StdRng` to reproduce the exact same prompt every time.
pub fn generate_drill<R: Rng>(rng: &mut R) -> DrillPrompt {
    let u: f64 = rng.gen();
    drill_at(u, rng)
}

/// Resolve a drill for an already-drawn bucket sample.
///
/// Split out so tests can pin `u` while still exercising the
/// template-internal draws.
pub(crate) fn drill_at<R: Rng>(u: f64, rng: &mut R) -> DrillPrompt {
    let (kind, tiers, phrase): (DrillKind, Vec<Tier>, Option<&str>) = if u < 1.0 / 13.0 {
        (
            DrillKind::LatePositionCall,
            vec![Tier::Blue, Tier::Green],
            Some("late-position call vs. big blind"),
        )
    } else if u < 2.0 / 13.0 {
        (
            DrillKind::CutoffCall,
            vec![Tier::White, Tier::Blue],
            Some("cutoff call vs. big blind"),
        )
    } else if u < 3.0 / 13.0 {
        (
            DrillKind::ButtonCall,
            vec![Tier::Purple, Tier::White],
            Some("button call vs. big blind"),
        )
    } else if u < 8.0 / 13.0 {
        let tier = SINGLE_TIER_POOL[rng.gen_range(0..SINGLE_TIER_POOL.len())];
        (DrillKind::SingleTier, vec![tier], None)
    } else {
        // Contiguous run from a random floor (White..=Red) up through Navy.
        let start = rng.gen_range(1..Tier::LADDER.len() - 1);
        (DrillKind::TierAndAbove, Tier::LADDER[start..].to_vec(), None)
    };

    let rank = Rank::DESCENDING[rng.gen_range(0..Rank::DESCENDING.len())];
    let tiers: BTreeSet<Tier> = tiers.into_iter().collect();

    let question = match phrase {
        Some(phrase) => format!("{phrase}: which hands contain {rank}?"),
        None => {
            let names: Vec<String> = tiers.iter().map(Tier::to_string).collect();
            format!("Which hands in the {} range contain {rank}?", names.join(", "))
        }
    };

    DrillPrompt { kind, tiers, rank, question }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fixed_buckets_carry_their_tier_sets() {
        let mut rng = StdRng::seed_from_u64(0);
        let cases = [
            (0.0, DrillKind::LatePositionCall, vec![Tier::Blue, Tier::Green]),
            (1.5 / 13.0, DrillKind::CutoffCall, vec![Tier::White, Tier::Blue]),
            (2.5 / 13.0, DrillKind::ButtonCall, vec![Tier::Purple, Tier::White]),
        ];
        for (u, kind, tiers) in cases {
            let drill = drill_at(u, &mut rng);
            assert_eq!(drill.kind, kind);
            let expected: std::collections::BTreeSet<Tier> = tiers.into_iter().collect();
            assert_eq!(drill.tiers, expected);
        }
    }

    #[test]
    fn bucket_boundary_at_eight_thirteenths() {
        let mut rng = StdRng::seed_from_u64(7);
        let below = drill_at(8.0 / 13.0 - 1e-9, &mut rng);
        assert_eq!(below.kind, DrillKind::SingleTier);
        assert_eq!(below.tiers.len(), 1);
        assert!(SINGLE_TIER_POOL.contains(below.tiers.iter().next().unwrap()));

        let at = drill_at(8.0 / 13.0, &mut rng);
        assert_eq!(at.kind, DrillKind::TierAndAbove);
        assert!(at.tiers.contains(&Tier::Navy));
    }

    #[test]
    fn tier_and_above_runs_are_contiguous_through_navy() {
        for seed in 0..64u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let drill = drill_at(0.99, &mut rng);
            assert_eq!(drill.kind, DrillKind::TierAndAbove);

            let floor = *drill.tiers.iter().next().unwrap();
            assert!(floor >= Tier::White && floor <= Tier::Red, "bad floor {floor:?}");
            let expected: std::collections::BTreeSet<Tier> =
                Tier::LADDER.iter().copied().filter(|t| *t >= floor).collect();
            assert_eq!(drill.tiers, expected);
        }
    }
}
