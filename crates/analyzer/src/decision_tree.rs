//! The recursive bit-mask partitioning that turns a validated table into a
//! decision procedure.

use crate::pattern::{Pattern, PatternId};
use indexmap::IndexMap;

/// The bit positions literal in every pattern of `set`.
///
/// Zero means the set cannot be discriminated by literal bits alone.
/// Never invoked for singletons; a singleton is already a leaf.
pub fn discriminant(patterns: &[Pattern], set: &[PatternId]) -> u64 {
    debug_assert!(!set.is_empty());
    set.iter()
        .fold(!0u64, |mask, id| mask & patterns[id.index()].mask)
}

/// Group `set` by literal value restricted to `mask`.
///
/// Covers every input pattern exactly once; first-seen order of groups and
/// pattern order within a group both follow the input, so diagnostics and
/// generated code are deterministic.
pub fn partition(
    patterns: &[Pattern],
    set: &[PatternId],
    mask: u64,
) -> IndexMap<u64, Vec<PatternId>> {
    let mut groups: IndexMap<u64, Vec<PatternId>> = IndexMap::new();
    for &id in set {
        groups
            .entry(patterns[id.index()].value & mask)
            .or_default()
            .push(id);
    }
    groups
}

/// A group of patterns that share no literal bit position, or that agree on
/// every literal bit they do share; no dispatch can tell them apart.
#[derive(Debug, PartialEq, Eq)]
pub struct Collision {
    pub members: Vec<PatternId>,
}

/// A decision procedure mapping any W-bit value to the one pattern that
/// matches it.
#[derive(Debug, PartialEq, Eq)]
pub enum DecisionTree {
    /// Exactly one pattern remains on this path.
    Leaf(PatternId),
    /// Dispatch on `value & mask`; one arm per distinct literal value.
    Branch {
        mask: u64,
        arms: IndexMap<u64, DecisionTree>,
    },
}

impl DecisionTree {
    /// Build the decision tree for the whole table.
    ///
    /// Once [`crate::validate`] has passed this cannot fail; the `Collision`
    /// arm remains as an invariant guard. Termination: every non-leaf step
    /// yields at least two groups, each strictly smaller than its parent, so
    /// the recursion is bounded by the pattern count.
    pub fn build(patterns: &[Pattern]) -> Result<Self, Collision> {
        debug_assert!(!patterns.is_empty());
        let set = (0..patterns.len() as u32).map(PatternId).collect();
        Self::build_node(patterns, set)
    }

    fn build_node(patterns: &[Pattern], set: Vec<PatternId>) -> Result<Self, Collision> {
        if let [id] = set[..] {
            return Ok(DecisionTree::Leaf(id));
        }

        let mask = discriminant(patterns, &set);
        if mask == 0 {
            return Err(Collision { members: set });
        }

        let groups = partition(patterns, &set, mask);
        if groups.len() == 1 {
            // A non-zero mask that fails to split the set means every member
            // agrees on all the literal bits they share; recursing would
            // never make progress.
            return Err(Collision { members: set });
        }

        let mut arms = IndexMap::with_capacity(groups.len());
        for (value, group) in groups {
            arms.insert(value, Self::build_node(patterns, group)?);
        }
        Ok(DecisionTree::Branch { mask, arms })
    }

    /// Evaluate the decision procedure against a concrete value.
    ///
    /// Mirrors the generated decoder exactly: dispatch on `value & mask` at
    /// every branch, `None` for values whose masked bits match no arm.
    pub fn decode(&self, value: u64) -> Option<PatternId> {
        match self {
            DecisionTree::Leaf(id) => Some(*id),
            DecisionTree::Branch { mask, arms } => arms.get(&(value & mask))?.decode(value),
        }
    }

    /// Number of leaves; equals the pattern count for a well-formed table.
    pub fn leaf_count(&self) -> usize {
        match self {
            DecisionTree::Leaf(_) => 1,
            DecisionTree::Branch { arms, .. } => arms.values().map(Self::leaf_count).sum(),
        }
    }
}
