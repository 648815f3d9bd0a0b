//! Catalog filtering.
//!
//! [`query`] is a single pass over the catalog in canonical order; every
//! provided filter field must hold for a class to survive. Omitted fields
//! impose no constraint, so the default filter returns all 169 classes.
//! No filter combination can fail; the empty result set is a legitimate
//! outcome, not an error.

use crate::range_engine::catalog::RangeCatalog;
use crate::range_engine::models::{HandClass, RangeFilter, Shape};

/// Select the classes matching `filter`, preserving catalog order.
pub fn query<'a>(catalog: &'a RangeCatalog, filter: &RangeFilter) -> Vec<&'a HandClass> {
    catalog.iter().filter(|hand| matches(hand, filter)).collect()
}

/// Sum of concrete combinations over a result set.
///
/// This is the numerator/denominator arithmetic a consumer needs for
/// coverage percentages; zero is a valid total for an empty result.
pub fn combo_total<'a>(hands: impl IntoIterator<Item = &'a HandClass>) -> u32 {
    hands.into_iter().map(|h| h.combo_count).sum()
}

fn matches(hand: &HandClass, filter: &RangeFilter) -> bool {
    // Substring semantics on purpose: the rank symbol may sit in either
    // card position of the code.
    if let Some(rank) = filter.include_rank {
        if !hand.code.contains(rank.symbol()) {
            return false;
        }
    }
    if let Some(rank) = filter.exclude_rank {
        if hand.code.contains(rank.symbol()) {
            return false;
        }
    }
    if let Some(tiers) = &filter.tiers {
        if !tiers.contains(&hand.tier) {
            return false;
        }
    }
    if filter.suited_only && hand.shape != Shape::Suited {
        return false;
    }
    if filter.offsuit_only && hand.shape != Shape::Offsuit {
        return false;
    }
    if filter.pair_only && hand.shape != Shape::Pair {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range_engine::models::{Rank, Tier};
    use std::collections::BTreeSet;

    #[test]
    fn default_filter_returns_everything() {
        let catalog = RangeCatalog::build();
        let all = query(&catalog, &RangeFilter::default());
        assert_eq!(all.len(), 169);
    }

    #[test]
    fn include_and_exclude_partition_the_catalog() {
        let catalog = RangeCatalog::build();
        let with_ace = query(
            &catalog,
            &RangeFilter { include_rank: Some(Rank(14)), ..RangeFilter::default() },
        );
        let without_ace = query(
            &catalog,
            &RangeFilter { exclude_rank: Some(Rank(14)), ..RangeFilter::default() },
        );
        assert_eq!(with_ace.len() + without_ace.len(), 169);
        // 12 suited + 12 offsuit + AA
        assert_eq!(with_ace.len(), 25);
    }

    #[test]
    fn empty_tier_set_matches_nothing() {
        let catalog = RangeCatalog::standard();
        let filter = RangeFilter {
            tiers: Some(BTreeSet::new()),
            ..RangeFilter::default()
        };
        assert!(query(&catalog, &filter).is_empty());
    }

    #[test]
    fn shape_filters_are_exclusive_cuts() {
        let catalog = RangeCatalog::build();
        let pairs = query(
            &catalog,
            &RangeFilter { pair_only: true, ..RangeFilter::default() },
        );
        assert_eq!(pairs.len(), 13);
        assert!(pairs.iter().all(|h| h.combo_count == 6));

        let suited = query(
            &catalog,
            &RangeFilter { suited_only: true, ..RangeFilter::default() },
        );
        assert_eq!(suited.len(), 78);

        // Contradictory shape cuts compose to nothing rather than erroring.
        let none = query(
            &catalog,
            &RangeFilter { pair_only: true, suited_only: true, ..RangeFilter::default() },
        );
        assert!(none.is_empty());
    }

    #[test]
    fn tier_filter_respects_classification() {
        let catalog = RangeCatalog::standard();
        let navy: BTreeSet<Tier> = [Tier::Navy].into_iter().collect();
        let top = query(
            &catalog,
            &RangeFilter { tiers: Some(navy), ..RangeFilter::default() },
        );
        let codes: Vec<&str> = top.iter().map(|h| h.code.as_str()).collect();
        assert_eq!(codes, ["AA", "AKs", "AKo", "KK", "QQ"]);
        assert_eq!(combo_total(top), 6 + 4 + 12 + 6 + 6);
    }
}
