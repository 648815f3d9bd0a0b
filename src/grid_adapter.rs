//! JSON export of the classified catalog as the standard 13×13 range grid.
//!
//! Front ends conventionally render starting hands as a matrix: row = first
//! card rank, column = second, both strongest first. The diagonal holds the
//! pocket pairs, the upper-right triangle the suited classes, the
//! lower-left the offsuit classes. This adapter produces that grid, cell by
//! cell, ready for any client to draw.

use serde_json::{json, Value};

use crate::range_engine::catalog::RangeCatalog;
use crate::range_engine::models::{HandClass, Rank, Tier};

/// Spell the cell code for grid coordinates (row, col).
fn cell_code(row: usize, col: usize) -> String {
    let r = Rank::DESCENDING[row];
    let c = Rank::DESCENDING[col];
    if row == col {
        format!("{r}{c}")
    } else if row < col {
        format!("{r}{c}s")
    } else {
        // Lower-left triangle: the column rank is the stronger one.
        format!("{c}{r}o")
    }
}

/// Build one grid cell.
fn cell(hand: &HandClass) -> Value {
    json!({
        "code": hand.code,
        "shape": hand.shape,
        "tier": hand.tier,
        "combos": hand.combo_count,
    })
}

/// Per-tier combo totals across the whole catalog.
fn tier_totals(catalog: &RangeCatalog) -> Value {
    let mut totals = serde_json::Map::new();
    for tier in Tier::LADDER.iter().chain([Tier::Unranked].iter()) {
        let combos: u32 = catalog
            .iter()
            .filter(|h| h.tier == *tier)
            .map(|h| h.combo_count)
            .sum();
        totals.insert(format!("{tier:?}"), json!(combos));
    }
    Value::Object(totals)
}

/// Map a classified catalog to a grid JSON object ready for a client.
pub fn to_grid_json(catalog: &RangeCatalog) -> Value {
    let mut rows = Vec::with_capacity(13);
    for row in 0..13usize {
        let mut cells = Vec::with_capacity(13);
        for col in 0..13usize {
            let code = cell_code(row, col);
            // Every coordinate spells a canonical code, so the lookup
            // cannot miss on a built catalog.
            match catalog.get(&code) {
                Some(hand) => cells.push(cell(hand)),
                None       => cells.push(Value::Null),
            }
        }
        rows.push(Value::Array(cells));
    }

    json!({
        "ranks": Rank::DESCENDING.iter().map(|r| r.symbol()).collect::<Vec<_>>(),
        "grid": rows,
        "tier_combos": tier_totals(catalog),
        "total_combos": 1326,
    })
}
