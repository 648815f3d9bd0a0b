use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Rank primitive
// ---------------------------------------------------------------------------

/// Rank 2..=14 where 14 = Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    /// All thirteen ranks, strongest first. This is the canonical
    /// enumeration order.
    pub const DESCENDING: [Rank; 13] = [
        Rank(14), Rank(13), Rank(12), Rank(11), Rank(10), Rank(9), Rank(8),
        Rank(7), Rank(6), Rank(5), Rank(4), Rank(3), Rank(2),
    ];

    pub fn symbol(self) -> &'static str {
        match self.0 {
            2 => "2", 3 => "3", 4 => "4", 5 => "5", 6 => "6",
            7 => "7", 8 => "8", 9 => "9", 10 => "T",
            11 => "J", 12 => "Q", 13 => "K", 14 => "A",
            _ => "?",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ---------------------------------------------------------------------------
// Hand-class shape
// ---------------------------------------------------------------------------

/// The three mutually exclusive structures a starting-hand class can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Pair,
    Suited,
    Offsuit,
}

impl Shape {
    /// Concrete two-card combinations the shape represents.
    pub const fn combos(self) -> u32 {
        match self {
            Shape::Pair    => 6,
            Shape::Suited  => 4,
            Shape::Offsuit => 12,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Pair    => write!(f, "pair"),
            Shape::Suited  => write!(f, "suited"),
            Shape::Offsuit => write!(f, "offsuit"),
        }
    }
}

// ---------------------------------------------------------------------------
// Strategic tiers
// ---------------------------------------------------------------------------

/// Strategic tier ladder, weakest first.
///
/// `Unranked` is the resting state of every class until classification runs;
/// the seven named tiers are assigned from the membership tables in
/// [`crate::range_engine::tiers`]. The derived `Ord` is the strategic order,
/// so `Tier::Navy` compares greatest.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Tier {
    #[default]
    Unranked,
    Purple,
    White,
    Blue,
    Green,
    Yellow,
    Red,
    Navy,
}

impl Tier {
    /// The seven named tiers, ascending. `Unranked` is deliberately absent:
    /// drills never target it.
    pub const LADDER: [Tier; 7] = [
        Tier::Purple, Tier::White, Tier::Blue, Tier::Green,
        Tier::Yellow, Tier::Red, Tier::Navy,
    ];
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tier::Unranked => "unranked",
            Tier::Purple   => "purple (0)",
            Tier::White    => "white (1)",
            Tier::Blue     => "blue (2)",
            Tier::Green    => "green (3)",
            Tier::Yellow   => "yellow (4)",
            Tier::Red      => "red (5)",
            Tier::Navy     => "navy (6)",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Hand class
// ---------------------------------------------------------------------------

/// One of the 169 strategically distinct starting-hand classes.
///
/// `code` is the conventional spelling: two rank symbols for a pocket pair
/// ("AA"), or two distinct rank symbols (stronger first) plus a shape
/// suffix ("AKs", "AKo").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandClass {
    pub code: String,
    pub shape: Shape,
    pub combo_count: u32,
    pub tier: Tier,
}

impl HandClass {
    pub fn new(code: String, shape: Shape) -> Self {
        HandClass {
            code,
            shape,
            combo_count: shape.combos(),
            tier: Tier::Unranked,
        }
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

// ---------------------------------------------------------------------------
// Query filter
// ---------------------------------------------------------------------------

/// Filter configuration for [`crate::range_engine::query::query`].
///
/// Every field is independently optional and all provided fields combine
/// with logical AND. The default imposes no constraint at all.
///
/// The rank filters are substring tests over the class code: a filter for
/// `T` matches any class where the symbol appears in either card position.
/// Rank symbols never collide with the `s`/`o` shape suffixes, and the
/// loose match is load-bearing for the drill flow, so it stays.
///
/// `tiers: Some(set)` requires membership; an empty set therefore matches
/// nothing, which is a valid (empty) result, not an error. `None` leaves
/// the tier dimension unconstrained.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RangeFilter {
    pub include_rank: Option<Rank>,
    pub exclude_rank: Option<Rank>,
    pub tiers: Option<BTreeSet<Tier>>,
    pub suited_only: bool,
    pub offsuit_only: bool,
    pub pair_only: bool,
}

// ---------------------------------------------------------------------------
// Drill prompt
// ---------------------------------------------------------------------------

/// The five drill templates.
///
/// Stable across seeds — use for per-template progress tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrillKind {
    LatePositionCall,
    CutoffCall,
    ButtonCall,
    SingleTier,
    TierAndAbove,
}

impl fmt::Display for DrillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DrillKind::LatePositionCall => "LatePositionCall",
            DrillKind::CutoffCall       => "CutoffCall",
            DrillKind::ButtonCall       => "ButtonCall",
            DrillKind::SingleTier       => "SingleTier",
            DrillKind::TierAndAbove     => "TierAndAbove",
        };
        write!(f, "{}", s)
    }
}

/// One generated training prompt: the tier range to recall, the rank the
/// answer must contain, and the question to show the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillPrompt {
    pub kind: DrillKind,
    pub tiers: BTreeSet<Tier>,
    pub rank: Rank,
    pub question: String,
}

impl DrillPrompt {
    /// Filter for the hands the player is asked to name (the numerator).
    pub fn answer_filter(&self) -> RangeFilter {
        RangeFilter {
            include_rank: Some(self.rank),
            tiers: Some(self.tiers.clone()),
            ..RangeFilter::default()
        }
    }

    /// Filter for every hand in the drilled range (the denominator).
    pub fn pool_filter(&self) -> RangeFilter {
        RangeFilter {
            tiers: Some(self.tiers.clone()),
            ..RangeFilter::default()
        }
    }
}
