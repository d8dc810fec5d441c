//! Fault statistics for a simulation run.

use std::fmt;

use crate::common::PageSymbol;
use crate::policy::Placement;
use crate::trace::SimulationOutcome;

/// Counters summarising one run.
///
/// Derived from the step trace, so it can be computed for any outcome after
/// the fact. `fills + evictions == faults` whenever the run had frames; with
/// zero frames every fault is neither.
///
/// # Example
/// ```
/// use pagesim::PolicyKind;
///
/// let refs: Vec<char> = "ABAB".chars().collect();
/// let stats = PolicyKind::Fifo.simulate(&refs, 2).stats();
/// assert_eq!(stats.faults, 2);
/// assert_eq!(stats.hit_rate(), 0.5);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaultStats {
    /// Number of references processed.
    pub references: u64,

    /// References whose page was already resident.
    pub hits: u64,

    /// References whose page was not resident.
    pub faults: u64,

    /// Faults that loaded into an empty slot.
    pub fills: u64,

    /// Faults that pushed out a resident page.
    pub evictions: u64,
}

impl FaultStats {
    /// Tally the steps of `outcome`.
    pub fn from_outcome<P: PageSymbol>(outcome: &SimulationOutcome<P>) -> Self {
        let mut stats = FaultStats::default();

        for step in outcome.steps() {
            stats.references += 1;
            if !step.is_fault() {
                stats.hits += 1;
                continue;
            }
            stats.faults += 1;
            match step.access.placement() {
                Some(Placement::Fill(_)) => stats.fills += 1,
                Some(Placement::Evict(_)) => stats.evictions += 1,
                None => {}
            }
        }

        stats
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Calculate fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for FaultStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ refs: {}, hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.references,
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
