use std::collections::HashMap;

use crate::range_engine::models::{HandClass, Rank, Shape};
use crate::range_engine::tiers::{self, DEFAULT_TIERS};

/// The full universe of 169 starting-hand classes, in canonical order.
///
/// Iteration order is generation order: for each high rank strongest-first,
/// the pocket pair, then for each lower rank the suited class followed by
/// the offsuit class ("AA", "AKs", "AKo", "AQs", ..., "32s", "32o", "22").
/// The order never changes after construction, and after classification the
/// catalog is read-only for the rest of the process.
pub struct RangeCatalog {
    classes: Vec<HandClass>,
    index: HashMap<String, usize>,
}

impl RangeCatalog {
    /// Build all 169 classes, every one still [`crate::Tier::Unranked`].
    ///
    /// Each unordered rank pair is processed exactly once with the stronger
    /// rank first, so "KAs" can never exist alongside "AKs".
    pub fn build() -> Self {
        let mut classes = Vec::with_capacity(169);
        for (i, hi) in Rank::DESCENDING.iter().enumerate() {
            for lo in &Rank::DESCENDING[i..] {
                if hi == lo {
                    classes.push(HandClass::new(format!("{hi}{lo}"), Shape::Pair));
                } else {
                    classes.push(HandClass::new(format!("{hi}{lo}s"), Shape::Suited));
                    classes.push(HandClass::new(format!("{hi}{lo}o"), Shape::Offsuit));
                }
            }
        }

        let index = classes
            .iter()
            .enumerate()
            .map(|(i, hand)| (hand.code.clone(), i))
            .collect();

        RangeCatalog { classes, index }
    }

    /// Build and classify with the shipped membership tables in one step.
    pub fn standard() -> Self {
        let mut catalog = Self::build();
        tiers::classify(&mut catalog, DEFAULT_TIERS);
        catalog
    }

    pub fn get(&self, code: &str) -> Option<&HandClass> {
        self.index.get(code).map(|&i| &self.classes[i])
    }

    pub(crate) fn get_mut(&mut self, code: &str) -> Option<&mut HandClass> {
        let i = *self.index.get(code)?;
        Some(&mut self.classes[i])
    }

    /// All classes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &HandClass> {
        self.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
