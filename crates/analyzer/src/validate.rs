//! Table-wide ambiguity checks. Both checks scan the entire table and
//! report every finding in one run.

use crate::decision_tree::{discriminant, partition};
use crate::pattern::{Pattern, PatternId};

/// Every pair of patterns with identical (literal-mask, literal-value).
///
/// A plain all-pairs scan. The table sizes this tool sees are tens to low
/// hundreds of patterns, so O(n²) is fine.
pub fn duplicates(patterns: &[Pattern]) -> Vec<(PatternId, PatternId)> {
    let mut pairs = vec![];
    for i in 0..patterns.len() {
        for j in i + 1..patterns.len() {
            if patterns[i].is_duplicate_of(&patterns[j]) {
                pairs.push((PatternId(i as u32), PatternId(j as u32)));
            }
        }
    }
    pairs
}

/// Every group of patterns that cannot be told apart by literal bits.
///
/// The same mask/partition walk as [`crate::decision_tree::DecisionTree::build`],
/// but in diagnostic mode: an undiscriminable group is recorded and sibling
/// subtrees are still explored, so one run surfaces every collision.
pub fn collisions(patterns: &[Pattern]) -> Vec<Vec<PatternId>> {
    let mut found = vec![];
    if !patterns.is_empty() {
        let set = (0..patterns.len() as u32).map(PatternId).collect();
        collect(patterns, set, &mut found);
    }
    found
}

fn collect(patterns: &[Pattern], set: Vec<PatternId>, found: &mut Vec<Vec<PatternId>>) {
    if set.len() < 2 {
        return;
    }

    let mask = discriminant(patterns, &set);
    if mask == 0 {
        found.push(set);
        return;
    }

    let groups = partition(patterns, &set, mask);
    if groups.len() == 1 {
        found.push(set);
        return;
    }
    for (_, group) in groups {
        collect(patterns, group, found);
    }
}
