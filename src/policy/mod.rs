//! Replacement policy implementations.
//!
//! Currently implements:
//! - [`FifoPolicy`] - First-In-First-Out via a rotating cursor
//! - [`LruPolicy`] - Least Recently Used via a backward scan of the history
//! - [`OptimalPolicy`] - Belady's optimal via a forward scan of the future
//!
//! Every policy plugs into the same step protocol (see [`crate::engine`]):
//! the engine classifies hits itself and only asks the policy where to put
//! a faulting page. [`PolicyKind`] selects a policy at runtime.

mod fifo;
mod lru;
mod optimal;

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, FrameId, PageSymbol};
use crate::engine;
use crate::frame_set::FrameSet;
use crate::trace::SimulationOutcome;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use optimal::OptimalPolicy;

/// Where a faulting page goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// The slot was empty; nothing is evicted.
    Fill(FrameId),
    /// The slot held a victim page, which is evicted.
    Evict(FrameId),
}

impl Placement {
    /// The slot the faulting page is written to.
    #[inline]
    pub fn frame_id(self) -> FrameId {
        match self {
            Placement::Fill(frame_id) | Placement::Evict(frame_id) => frame_id,
        }
    }

    /// Check if this placement evicts a resident page.
    #[inline]
    pub fn is_eviction(self) -> bool {
        matches!(self, Placement::Evict(_))
    }
}

/// A page replacement policy.
///
/// The engine calls [`place`](ReplacementPolicy::place) only on a fault and
/// only when there is at least one slot. Implementations may keep per-run
/// state (the FIFO cursor) but must be constructed fresh for each run.
pub trait ReplacementPolicy<P: PageSymbol> {
    /// Which policy this is.
    fn kind(&self) -> PolicyKind;

    /// Choose the slot for `reference_string[position]`, which is not resident.
    ///
    /// `frames` is the state before the fault. The whole reference string is
    /// passed so that policies can look backward (LRU) or forward (Optimal).
    fn place(&mut self, frames: &FrameSet<P>, reference_string: &[P], position: usize)
        -> Placement;
}

/// The available replacement policies.
///
/// # Example
/// ```
/// use pagesim::PolicyKind;
///
/// let refs: Vec<char> = "ABCABD".chars().collect();
/// let outcome = PolicyKind::Lru.simulate(&refs, 3);
/// assert_eq!(outcome.total_faults(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum PolicyKind {
    /// First-In-First-Out.
    Fifo,
    /// Least Recently Used.
    Lru,
    /// Optimal (farthest next use).
    #[value(alias = "opt")]
    Optimal,
}

impl PolicyKind {
    /// All policies, in menu order.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Optimal];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Optimal => "Optimal",
        }
    }

    /// Run this policy over `reference_string` with `frame_count` frames.
    ///
    /// Each call starts from an empty frame set with a freshly constructed
    /// policy, so repeated calls on the same input return identical traces.
    pub fn simulate<P: PageSymbol>(
        self,
        reference_string: &[P],
        frame_count: usize,
    ) -> SimulationOutcome<P> {
        match self {
            PolicyKind::Fifo => {
                engine::simulate(&mut FifoPolicy::new(), reference_string, frame_count)
            }
            PolicyKind::Lru => engine::simulate(&mut LruPolicy::new(), reference_string, frame_count),
            PolicyKind::Optimal => {
                engine::simulate(&mut OptimalPolicy::new(), reference_string, frame_count)
            }
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "optimal" | "opt" => Ok(PolicyKind::Optimal),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_accessors() {
        assert_eq!(Placement::Fill(FrameId::new(1)).frame_id(), FrameId::new(1));
        assert_eq!(Placement::Evict(FrameId::new(2)).frame_id(), FrameId::new(2));
        assert!(!Placement::Fill(FrameId::new(0)).is_eviction());
        assert!(Placement::Evict(FrameId::new(0)).is_eviction());
    }

    #[test]
    fn test_policy_kind_from_str() {
        assert_eq!("fifo".parse::<PolicyKind>().unwrap(), PolicyKind::Fifo);
        assert_eq!("LRU".parse::<PolicyKind>().unwrap(), PolicyKind::Lru);
        assert_eq!(" Optimal ".parse::<PolicyKind>().unwrap(), PolicyKind::Optimal);
        assert_eq!("opt".parse::<PolicyKind>().unwrap(), PolicyKind::Optimal);

        let err = "clock".parse::<PolicyKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownPolicy(name) if name == "clock"));
    }

    #[test]
    fn test_policy_kind_display() {
        let names: Vec<String> = PolicyKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, vec!["FIFO", "LRU", "Optimal"]);
    }

    #[test]
    fn test_simulate_tags_outcome_with_policy() {
        let refs = [1, 2, 3];
        for kind in PolicyKind::ALL {
            assert_eq!(kind.simulate(&refs, 2).policy(), kind);
        }
    }
}
