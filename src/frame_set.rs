//! FrameSet - the fixed row of page frames a simulation works on.
//!
//! A [`FrameSet`] holds exactly `frame_count` slots. Each slot is either
//! empty or holds one page symbol. The queries here are the shared protocol
//! every policy uses to classify a reference:
//! - [`FrameSet::contains`] - is the page resident?
//! - [`FrameSet::first_empty_slot`] - lowest-index empty slot, if any
//! - [`FrameSet::has_empty_slot`] - is there room without evicting?

use crate::common::{FrameId, PageSymbol};

/// The frames of one simulation run.
///
/// Created empty at the start of a run and dropped at the end. The number
/// of slots never changes, and a page occupies at most one slot.
///
/// # Example
/// ```
/// use pagesim::{FrameId, FrameSet};
///
/// let mut frames = FrameSet::new(2);
/// assert_eq!(frames.first_empty_slot(), Some(FrameId::new(0)));
///
/// frames.replace(FrameId::new(0), 'A');
/// assert!(frames.contains(&'A'));
/// assert_eq!(frames.snapshot(), vec![Some('A'), None]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet<P> {
    slots: Vec<Option<P>>,
}

impl<P: PageSymbol> FrameSet<P> {
    /// Create a frame set with `frame_count` empty slots.
    pub fn new(frame_count: usize) -> Self {
        Self {
            slots: vec![None; frame_count],
        }
    }

    // ========================================================================
    // Shared queries
    // ========================================================================

    /// Check if `page` occupies any slot.
    #[inline]
    pub fn contains(&self, page: &P) -> bool {
        self.slots.iter().any(|slot| slot.as_ref() == Some(page))
    }

    /// The lowest-index empty slot, or `None` if every slot is occupied.
    #[inline]
    pub fn first_empty_slot(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none).map(FrameId::new)
    }

    /// Check if at least one slot is empty.
    #[inline]
    pub fn has_empty_slot(&self) -> bool {
        self.first_empty_slot().is_some()
    }

    // ========================================================================
    // Slot access
    // ========================================================================

    /// Number of slots (the frame count).
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if there are no slots at all (frame count 0).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// The page held in `frame_id`, or `None` if the slot is empty or out of range.
    #[inline]
    pub fn get(&self, frame_id: FrameId) -> Option<&P> {
        self.slots.get(frame_id.0).and_then(Option::as_ref)
    }

    /// Iterate over `(slot, page)` for every slot, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (FrameId, Option<&P>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (FrameId::new(i), slot.as_ref()))
    }

    /// Put `page` into `frame_id`, returning whatever was there before.
    ///
    /// # Panics
    /// Panics if `frame_id` is out of range. The engine never calls this
    /// when the frame count is 0.
    pub fn replace(&mut self, frame_id: FrameId, page: P) -> Option<P> {
        debug_assert!(
            !self.contains(&page),
            "page {:?} is already resident",
            page
        );
        self.slots[frame_id.0].replace(page)
    }

    /// Copy of the current slot contents, in slot order.
    pub fn snapshot(&self) -> Vec<Option<P>> {
        self.slots.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_set_is_empty() {
        let frames: FrameSet<char> = FrameSet::new(3);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames.occupied(), 0);
        assert!(frames.has_empty_slot());
        assert_eq!(frames.first_empty_slot(), Some(FrameId::new(0)));
        assert_eq!(frames.snapshot(), vec![None, None, None]);
    }

    #[test]
    fn test_contains_and_get() {
        let mut frames = FrameSet::new(3);
        frames.replace(FrameId::new(1), "B");

        assert!(frames.contains(&"B"));
        assert!(!frames.contains(&"A"));
        assert_eq!(frames.get(FrameId::new(1)), Some(&"B"));
        assert_eq!(frames.get(FrameId::new(0)), None);
        assert_eq!(frames.get(FrameId::new(9)), None);
    }

    #[test]
    fn test_first_empty_slot_is_lowest_index() {
        let mut frames = FrameSet::new(3);
        frames.replace(FrameId::new(0), 1u32);
        frames.replace(FrameId::new(2), 3u32);

        assert_eq!(frames.first_empty_slot(), Some(FrameId::new(1)));

        frames.replace(FrameId::new(1), 2u32);
        assert_eq!(frames.first_empty_slot(), None);
        assert!(!frames.has_empty_slot());
        assert_eq!(frames.occupied(), 3);
    }

    #[test]
    fn test_replace_returns_previous_page() {
        let mut frames = FrameSet::new(1);
        assert_eq!(frames.replace(FrameId::new(0), 'A'), None);
        assert_eq!(frames.replace(FrameId::new(0), 'B'), Some('A'));
        assert_eq!(frames.snapshot(), vec![Some('B')]);
    }

    #[test]
    fn test_zero_frames() {
        let frames: FrameSet<char> = FrameSet::new(0);
        assert!(frames.is_empty());
        assert!(!frames.contains(&'A'));
        assert!(!frames.has_empty_slot());
        assert_eq!(frames.first_empty_slot(), None);
        assert!(frames.snapshot().is_empty());
    }

    #[test]
    fn test_iter_includes_empty_slots() {
        let mut frames = FrameSet::new(2);
        frames.replace(FrameId::new(1), 'Z');

        let slots: Vec<_> = frames.iter().collect();
        assert_eq!(
            slots,
            vec![(FrameId::new(0), None), (FrameId::new(1), Some(&'Z'))]
        );
    }
}
