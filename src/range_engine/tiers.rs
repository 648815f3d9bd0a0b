//! Tier membership tables and the classification pass.
//!
//! Membership is pure configuration: each named tier lists the codes it
//! owns. [`classify`] folds the table over a catalog in table order, so
//! ordering the entries weakest to strongest means that if two entries ever
//! named the same code, the stronger placement would win. The shipped table
//! keeps its entries pairwise disjoint (a test pins this), so last-wins is
//! documented fallback behavior rather than something the data exercises.

use crate::range_engine::catalog::RangeCatalog;
use crate::range_engine::models::Tier;

/// A tier-to-codes membership table. Codes not present in the catalog are
/// ignored; catalog classes named by no entry stay `Unranked`.
pub type TierTable = [(Tier, &'static [&'static str])];

/// The shipped tier assignments, weakest tier first. 83 codes are named;
/// the other 86 classes remain `Unranked`.
pub const DEFAULT_TIERS: &TierTable = &[
    (
        Tier::Purple,
        &[
            "Q5s", "Q4s", "Q3s", "Q2s", "J6s", "T7s", "96s", "86s", "75s",
            "64s", "54s", "98o", "A6o",
        ],
    ),
    (
        Tier::White,
        &[
            "K8s", "K7s", "K6s", "K5s", "K4s", "K3s", "K2s", "Q8s", "Q7s",
            "Q6s", "J8s", "J7s", "97s", "87s", "76s", "65s", "A8o", "A7o",
            "K9o", "Q9o", "J9o", "T9o", "QTo",
        ],
    ),
    (
        Tier::Blue,
        &[
            "Q9s", "J9s", "T8s", "98s", "QJo", "JTo", "KTo", "A9o", "44",
            "33", "22",
        ],
    ),
    (
        Tier::Green,
        &[
            "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s", "KTs",
            "K9s", "QTs", "T9s", "KJo", "ATo", "66", "55",
        ],
    ),
    (
        Tier::Yellow,
        &["KJs", "QJs", "JTs", "88", "77", "AJo", "KQo"],
    ),
    (
        Tier::Red,
        &["AQs", "AJs", "ATs", "KQs", "AQo", "JJ", "TT", "99"],
    ),
    (
        Tier::Navy,
        &["AA", "KK", "AKs", "AKo", "QQ"],
    ),
];

/// Apply a membership table to a catalog, setting each named class's tier.
///
/// Entries are applied in table order. An empty table is a no-op.
pub fn classify(catalog: &mut RangeCatalog, table: &TierTable) {
    for (tier, codes) in table {
        for code in *codes {
            if let Some(hand) = catalog.get_mut(code) {
                hand.tier = *tier;
            }
        }
    }
}
