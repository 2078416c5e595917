//! Per-pass sibling key generation.

use std::collections::HashMap;

use nodetree_common::types::ElementKey;

/// Hands out per-type ordinals in traversal order.
///
/// A counter lives for exactly one render pass. Two nodes of the same type
/// never share an ordinal within a pass, and a fresh counter walking the same
/// tree reproduces the same sequence.
#[derive(Debug, Default)]
pub struct KeyCounter {
    counts: HashMap<String, usize>,
}

impl KeyCounter {
    /// Creates an empty counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the next ordinal for `type_name` and formats its key.
    pub fn next_key(&mut self, type_name: &str, index: Option<usize>) -> ElementKey {
        let ordinal = if let Some(count) = self.counts.get_mut(type_name) {
            let ordinal = *count;
            *count += 1;
            ordinal
        } else {
            let _ = self.counts.insert(type_name.to_owned(), 1);
            0
        };
        ElementKey::new(type_name, ordinal, index)
    }

    /// Number of ordinals drawn so far across all types.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}
