//! LRU (Least Recently Used) replacement policy.

use crate::common::{FrameId, PageSymbol};
use crate::frame_set::FrameSet;
use crate::policy::{Placement, PolicyKind, ReplacementPolicy};

/// Evicts the page whose last use lies furthest in the past.
///
/// Recency is recovered from the reference string itself: for each resident
/// page, the history before the faulting position is scanned backward for
/// its most recent occurrence. No per-page timestamps are kept.
///
/// # Tie-breaking
/// - A resident page with no earlier occurrence at all is evicted at once
///   (the first such slot in slot order wins).
/// - Otherwise the earliest last use wins, and on equal last uses the lowest
///   slot wins. Two distinct pages can't share a position, so in practice
///   only the first rule ever needs a tie-break.
#[derive(Debug, Default)]
pub struct LruPolicy;

impl LruPolicy {
    /// Create an LRU policy.
    pub fn new() -> Self {
        LruPolicy
    }
}

impl<P: PageSymbol> ReplacementPolicy<P> for LruPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn place(&mut self, frames: &FrameSet<P>, reference_string: &[P], position: usize) -> Placement {
        match frames.first_empty_slot() {
            Some(slot) => Placement::Fill(slot),
            None => Placement::Evict(least_recently_used(frames, &reference_string[..position])),
        }
    }
}

/// Slot holding the least recently used page, judged by `history`.
fn least_recently_used<P: PageSymbol>(frames: &FrameSet<P>, history: &[P]) -> FrameId {
    let mut victim = FrameId::new(0);
    let mut oldest_use = usize::MAX;

    for (slot, page) in frames.iter() {
        let Some(page) = page else { continue };

        match history.iter().rposition(|r| r == page) {
            // Never used before: infinitely stale
            None => return slot,
            Some(last_use) if last_use < oldest_use => {
                oldest_use = last_use;
                victim = slot;
            }
            Some(_) => {}
        }
    }

    victim
}
