//! Priority interval selection over overlapping occurrences

use std::cmp::Ordering;

use shared_types::Occurrence;
use tracing::debug;

/// Occurrences whose spans are pairwise disjoint, ordered by start.
///
/// Only [`resolve`] builds one, so every value upholds the invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOccurrences(Vec<Occurrence>);

impl ResolvedOccurrences {
    pub fn as_slice(&self) -> &[Occurrence] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Occurrence> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResolvedOccurrences {
    type Item = &'a Occurrence;
    type IntoIter = std::slice::Iter<'a, Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Higher severity first, then longer span, then earlier start.
/// Remaining ties keep scan order.
fn priority(a: &Occurrence, b: &Occurrence) -> Ordering {
    b.severity
        .rank()
        .cmp(&a.severity.rank())
        .then_with(|| b.position.len().cmp(&a.position.len()))
        .then_with(|| a.position.start.cmp(&b.position.start))
}

/// Greedily keep the highest-priority occurrences that do not overlap
/// anything already kept.
pub fn resolve(occurrences: &[Occurrence]) -> ResolvedOccurrences {
    let mut candidates: Vec<&Occurrence> = occurrences.iter().collect();
    candidates.sort_by(|a, b| priority(a, b));

    let mut accepted: Vec<Occurrence> = Vec::with_capacity(candidates.len());
    let mut rejected = 0usize;

    for candidate in candidates {
        let span = candidate.position;
        if span.is_empty() {
            rejected += 1;
            continue;
        }

        // accepted is disjoint and sorted by start, so only the neighbours
        // on either side of the insertion point can clash
        let slot = accepted.partition_point(|kept| kept.position.start < span.start);
        let clashes_left = slot > 0 && accepted[slot - 1].position.overlaps(&span);
        let clashes_right = accepted
            .get(slot)
            .is_some_and(|kept| kept.position.overlaps(&span));

        if clashes_left || clashes_right {
            rejected += 1;
        } else {
            accepted.insert(slot, candidate.clone());
        }
    }

    debug!(accepted = accepted.len(), rejected, "Resolved overlapping occurrences");
    ResolvedOccurrences(accepted)
}
