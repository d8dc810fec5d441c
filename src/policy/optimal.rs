//! Optimal (Belady) replacement policy.

use crate::common::{FrameId, PageSymbol};
use crate::frame_set::FrameSet;
use crate::policy::{Placement, PolicyKind, ReplacementPolicy};

/// Evicts the page whose next use lies furthest in the future.
///
/// Needs the whole reference string up front, so it is a yardstick rather
/// than a policy a real pager could run. No other demand-paging policy can
/// fault fewer times on the same input.
///
/// # Tie-breaking
/// Slots are examined in order. The first page that is never referenced
/// again is evicted immediately. Otherwise the farthest next use wins, and
/// a later slot only replaces the running choice if its next use is
/// strictly farther.
#[derive(Debug, Default)]
pub struct OptimalPolicy;

impl OptimalPolicy {
    /// Create an Optimal policy.
    pub fn new() -> Self {
        OptimalPolicy
    }
}

impl<P: PageSymbol> ReplacementPolicy<P> for OptimalPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Optimal
    }

    fn place(&mut self, frames: &FrameSet<P>, reference_string: &[P], position: usize) -> Placement {
        match frames.first_empty_slot() {
            Some(slot) => Placement::Fill(slot),
            None => {
                let future = &reference_string[position + 1..];
                Placement::Evict(farthest_next_use(frames, future))
            }
        }
    }
}

/// Slot holding the page used farthest ahead in `future` (or never).
fn farthest_next_use<P: PageSymbol>(frames: &FrameSet<P>, future: &[P]) -> FrameId {
    let mut victim = FrameId::new(0);
    let mut farthest: Option<usize> = None;

    for (slot, page) in frames.iter() {
        let Some(page) = page else { continue };

        match future.iter().position(|r| r == page) {
            None => return slot,
            Some(next_use) if farthest.map_or(true, |f| next_use > f) => {
                farthest = Some(next_use);
                victim = slot;
            }
            Some(_) => {}
        }
    }

    victim
}
