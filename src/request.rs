//! Simulation requests - validated input for one or more policy runs.

use std::collections::HashSet;

use crate::common::config::{DEFAULT_FRAME_COUNT, DEFAULT_REFERENCE_STRING};
use crate::common::{Error, PageSymbol, Result};
use crate::policy::PolicyKind;
use crate::trace::SimulationOutcome;

/// A reference string and frame count, checked and ready to simulate.
///
/// Holds the "current" input that the interactive shell works on. Each
/// policy call borrows it and runs independently; nothing carries over
/// between calls.
///
/// # Example
/// ```
/// use pagesim::{PolicyKind, SimulationRequest};
///
/// let request = SimulationRequest::new(vec![7, 0, 1, 2, 0, 3, 0, 4], 3).unwrap();
/// assert_eq!(request.run(PolicyKind::Fifo).total_faults(), 7);
///
/// assert!(SimulationRequest::new(vec![1, 2], -1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationRequest<P> {
    reference_string: Vec<P>,
    frame_count: usize,
}

impl<P: PageSymbol> SimulationRequest<P> {
    /// Validate and build a request.
    ///
    /// # Errors
    /// - `Error::InvalidFrameCount` if `frame_count` is negative
    pub fn new(reference_string: Vec<P>, frame_count: i64) -> Result<Self> {
        let frame_count =
            usize::try_from(frame_count).map_err(|_| Error::InvalidFrameCount(frame_count))?;
        Ok(Self::with_frames(reference_string, frame_count))
    }

    /// Build a request from an already non-negative frame count.
    pub fn with_frames(reference_string: Vec<P>, frame_count: usize) -> Self {
        Self {
            reference_string,
            frame_count,
        }
    }

    /// The reference string.
    pub fn reference_string(&self) -> &[P] {
        &self.reference_string
    }

    /// The frame count.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Number of distinct pages in the reference string.
    pub fn distinct_pages(&self) -> usize {
        self.reference_string.iter().collect::<HashSet<_>>().len()
    }

    /// Run one policy.
    pub fn run(&self, kind: PolicyKind) -> SimulationOutcome<P> {
        kind.simulate(&self.reference_string, self.frame_count)
    }

    /// Run every policy, in [`PolicyKind::ALL`] order.
    pub fn run_all(&self) -> Comparison<P> {
        Comparison {
            outcomes: PolicyKind::ALL.iter().map(|&kind| self.run(kind)).collect(),
        }
    }
}

impl Default for SimulationRequest<String> {
    /// The built-in reference string, one symbol per character, with the default frame count.
    fn default() -> Self {
        Self::with_frames(
            DEFAULT_REFERENCE_STRING.chars().map(String::from).collect(),
            DEFAULT_FRAME_COUNT,
        )
    }
}

/// Outcomes of several policies on the same request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison<P> {
    outcomes: Vec<SimulationOutcome<P>>,
}

impl<P: PageSymbol> Comparison<P> {
    /// All outcomes, in the order they were run.
    pub fn outcomes(&self) -> &[SimulationOutcome<P>] {
        &self.outcomes
    }

    /// Fault total for `kind`, if it was run.
    pub fn faults(&self, kind: PolicyKind) -> Option<usize> {
        self.outcomes
            .iter()
            .find(|o| o.policy() == kind)
            .map(SimulationOutcome::total_faults)
    }

    /// The policy with the fewest faults. Earlier policies win ties.
    pub fn best(&self) -> Option<PolicyKind> {
        self.outcomes
            .iter()
            .fold(None::<&SimulationOutcome<P>>, |best, o| match best {
                Some(b) if b.total_faults() <= o.total_faults() => Some(b),
                _ => Some(o),
            })
            .map(SimulationOutcome::policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_frame_count_rejected() {
        let err = SimulationRequest::new(vec!['A'], -3).unwrap_err();
        assert!(matches!(err, Error::InvalidFrameCount(-3)));
    }

    #[test]
    fn test_zero_frame_count_accepted() {
        let request = SimulationRequest::new(vec!['A', 'B'], 0).unwrap();
        assert_eq!(request.frame_count(), 0);
        assert_eq!(request.run(PolicyKind::Lru).total_faults(), 2);
    }

    #[test]
    fn test_default_request() {
        let request = SimulationRequest::default();
        assert_eq!(request.reference_string().len(), 16);
        assert_eq!(request.frame_count(), 3);
        assert_eq!(request.reference_string()[0], "A");
        assert_eq!(request.distinct_pages(), 7);
    }

    #[test]
    fn test_run_all_order_and_faults() {
        let comparison = SimulationRequest::default().run_all();
        let kinds: Vec<PolicyKind> = comparison.outcomes().iter().map(|o| o.policy()).collect();

        assert_eq!(kinds, PolicyKind::ALL.to_vec());
        assert_eq!(comparison.faults(PolicyKind::Fifo), Some(11));
        assert_eq!(comparison.faults(PolicyKind::Lru), Some(12));
        assert_eq!(comparison.faults(PolicyKind::Optimal), Some(8));
        assert_eq!(comparison.best(), Some(PolicyKind::Optimal));
    }

    #[test]
    fn test_best_prefers_earlier_on_tie() {
        // Everything fits: all policies fault once per distinct page
        let comparison = SimulationRequest::with_frames(vec![1, 2, 1, 2], 2).run_all();
        assert_eq!(comparison.best(), Some(PolicyKind::Fifo));
    }

    #[test]
    fn test_runs_are_independent() {
        let request = SimulationRequest::with_frames(vec![3, 1, 4, 1, 5, 9, 2, 6], 2);
        assert_eq!(request.run(PolicyKind::Fifo), request.run(PolicyKind::Fifo));
        assert_eq!(request.run_all(), request.run_all());
    }
}
