//! Frame slot identifier type.

use std::fmt;

/// Identifies one slot of a [`FrameSet`](crate::FrameSet).
///
/// Slots are numbered `0..frame_count`. Lower numbers win every tie-break
/// in LRU and Optimal, so the ordering of `FrameId` is meaningful.
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let slot = FrameId::new(2);
/// assert_eq!(slot.next(3), FrameId::new(0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }

    /// The slot after this one in a set of `frame_count` slots, wrapping to 0.
    ///
    /// # Panics
    /// Panics if `frame_count` is 0.
    #[inline]
    pub fn next(self, frame_count: usize) -> Self {
        debug_assert!(frame_count > 0, "frame count must be > 0");
        FrameId((self.0 + 1) % frame_count)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_id_ordering() {
        assert!(FrameId::new(0) < FrameId::new(1));
        assert_eq!(FrameId::new(4), FrameId(4));
    }

    #[test]
    fn test_frame_id_next_wraps() {
        assert_eq!(FrameId::new(0).next(3), FrameId::new(1));
        assert_eq!(FrameId::new(1).next(3), FrameId::new(2));
        assert_eq!(FrameId::new(2).next(3), FrameId::new(0));
        assert_eq!(FrameId::new(0).next(1), FrameId::new(0));
    }

    #[test]
    #[should_panic]
    fn test_frame_id_next_zero_frames() {
        FrameId::new(0).next(0);
    }

    #[test]
    fn test_frame_id_display() {
        assert_eq!(format!("{}", FrameId::new(42)), "Frame(42)");
    }
}
