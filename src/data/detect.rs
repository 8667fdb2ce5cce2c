use std::collections::HashMap;

use super::model::{Laureate, Prize};

// ---------------------------------------------------------------------------
// Multi-winner detection
// ---------------------------------------------------------------------------

/// Return every laureate occurrence whose id appears in more than one place
/// across the full collection, in prize order then laureate order.
///
/// Occurrences are NOT deduplicated: a laureate listed in three prizes shows
/// up three times. The tally counts per occurrence, so a duplicated id
/// inside a single prize's laureate list also pushes that id over the
/// threshold (matches the upstream dataset behavior).
pub fn repeat_laureates(prizes: &[Prize]) -> Vec<Laureate> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for prize in prizes {
        for laureate in &prize.laureates {
            *counts.entry(laureate.id.as_str()).or_insert(0) += 1;
        }
    }

    prizes
        .iter()
        .flat_map(|p| &p.laureates)
        .filter(|l| counts.get(l.id.as_str()).copied().unwrap_or(0) > 1)
        .cloned()
        .collect()
}
