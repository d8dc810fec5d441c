//! Configuration constants for pagesim.

/// Reference string loaded when no other input is given.
///
/// Each character is one page symbol. With [`DEFAULT_FRAME_COUNT`] frames
/// this string produces 11 FIFO faults, 12 LRU faults and 8 Optimal faults.
pub const DEFAULT_REFERENCE_STRING: &str = "ABCBDAFBGBAHAGFA";

/// Frame count used when none is given.
pub const DEFAULT_FRAME_COUNT: usize = 3;

/// How an empty slot is rendered in traces.
pub const EMPTY_SLOT_MARKER: &str = "-";

/// Text shown in place of frame contents when a run has no frames.
pub const NO_FRAMES_MARKER: &str = "(no frames)";

/// Text shown for a step that did not fault.
pub const HIT_MARKER: &str = "No Page Fault";
