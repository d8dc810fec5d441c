//! FIFO (First-In-First-Out) replacement policy.

use crate::common::{FrameId, PageSymbol};
use crate::frame_set::FrameSet;
use crate::policy::{Placement, PolicyKind, ReplacementPolicy};

/// Evicts pages in the order they were loaded.
///
/// The only state is a cursor naming the next slot to overwrite. It moves
/// one slot forward (wrapping) on every fault, including faults that land in
/// an empty slot, and never moves on a hit. Because slots are only ever
/// filled at the cursor, the cursor always points at the oldest page once
/// the frames are full.
#[derive(Debug, Default)]
pub struct FifoPolicy {
    cursor: FrameId,
}

impl FifoPolicy {
    /// Create a FIFO policy with the cursor at slot 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// The slot the next fault will be written to.
    pub fn cursor(&self) -> FrameId {
        self.cursor
    }
}

impl<P: PageSymbol> ReplacementPolicy<P> for FifoPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn place(&mut self, frames: &FrameSet<P>, _reference_string: &[P], _position: usize) -> Placement {
        let slot = self.cursor;
        self.cursor = slot.next(frames.len());

        if frames.get(slot).is_some() {
            Placement::Evict(slot)
        } else {
            Placement::Fill(slot)
        }
    }
}
