//! Per-step results and whole-run outcomes.

use crate::common::PageSymbol;
use crate::policy::{Placement, PolicyKind};
use crate::stats::FaultStats;

/// How one reference was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was already resident.
    Hit,
    /// The page was not resident.
    ///
    /// Carries the placement chosen by the policy, or `None` when the run
    /// has zero frames and the page could not be loaded anywhere.
    Fault(Option<Placement>),
}

impl Access {
    /// Check if this access faulted.
    #[inline]
    pub fn is_fault(self) -> bool {
        matches!(self, Access::Fault(_))
    }

    /// Check if this access hit.
    #[inline]
    pub fn is_hit(self) -> bool {
        matches!(self, Access::Hit)
    }

    /// The placement of a fault, if there was one.
    #[inline]
    pub fn placement(self) -> Option<Placement> {
        match self {
            Access::Hit => None,
            Access::Fault(placement) => placement,
        }
    }
}

/// The result of processing one reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult<P> {
    /// Index of the reference in the reference string.
    pub position: usize,
    /// The referenced page.
    pub reference: P,
    /// Hit or fault.
    pub access: Access,
    /// The page pushed out by this step, if any.
    pub evicted: Option<P>,
    /// Frame contents after the step, in slot order.
    pub frames: Vec<Option<P>>,
}

impl<P> StepResult<P> {
    /// Check if this step faulted.
    #[inline]
    pub fn is_fault(&self) -> bool {
        self.access.is_fault()
    }
}

/// Everything one policy run produced.
///
/// Holds the step trace in reference order. The fault total is kept
/// alongside and always equals the number of faulting steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOutcome<P> {
    policy: PolicyKind,
    frame_count: usize,
    steps: Vec<StepResult<P>>,
    total_faults: usize,
}

impl<P: PageSymbol> SimulationOutcome<P> {
    pub(crate) fn new(policy: PolicyKind, frame_count: usize, capacity: usize) -> Self {
        Self {
            policy,
            frame_count,
            steps: Vec::with_capacity(capacity),
            total_faults: 0,
        }
    }

    pub(crate) fn record(&mut self, step: StepResult<P>) {
        if step.is_fault() {
            self.total_faults += 1;
        }
        self.steps.push(step);
    }

    /// The policy that produced this outcome.
    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    /// Number of frames the run used.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Total number of page faults.
    pub fn total_faults(&self) -> usize {
        self.total_faults
    }

    /// The per-reference trace.
    pub fn steps(&self) -> &[StepResult<P>] {
        &self.steps
    }

    /// Consume the outcome, keeping only the trace.
    pub fn into_steps(self) -> Vec<StepResult<P>> {
        self.steps
    }

    /// Number of references processed.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the reference string was empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Frame contents after the last step (all empty for an empty run).
    pub fn final_frames(&self) -> Vec<Option<P>> {
        self.steps
            .last()
            .map(|step| step.frames.clone())
            .unwrap_or_else(|| vec![None; self.frame_count])
    }

    /// Hit/fault counters for this run.
    pub fn stats(&self) -> FaultStats {
        FaultStats::from_outcome(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::FrameId;

    fn step(position: usize, reference: char, access: Access) -> StepResult<char> {
        StepResult {
            position,
            reference,
            access,
            evicted: None,
            frames: vec![Some(reference)],
        }
    }

    #[test]
    fn test_access_queries() {
        let fill = Access::Fault(Some(Placement::Fill(FrameId::new(0))));
        assert!(fill.is_fault());
        assert!(!fill.is_hit());
        assert_eq!(fill.placement(), Some(Placement::Fill(FrameId::new(0))));

        assert!(Access::Hit.is_hit());
        assert_eq!(Access::Hit.placement(), None);

        assert!(Access::Fault(None).is_fault());
        assert_eq!(Access::Fault(None).placement(), None);
    }

    #[test]
    fn test_record_counts_faults() {
        let mut outcome = SimulationOutcome::new(PolicyKind::Fifo, 1, 3);
        outcome.record(step(0, 'A', Access::Fault(Some(Placement::Fill(FrameId::new(0))))));
        outcome.record(step(1, 'A', Access::Hit));
        outcome.record(step(2, 'B', Access::Fault(Some(Placement::Evict(FrameId::new(0))))));

        assert_eq!(outcome.len(), 3);
        assert_eq!(outcome.total_faults(), 2);
        assert_eq!(outcome.final_frames(), vec![Some('B')]);
    }

    #[test]
    fn test_empty_outcome() {
        let outcome: SimulationOutcome<char> = SimulationOutcome::new(PolicyKind::Lru, 2, 0);
        assert!(outcome.is_empty());
        assert_eq!(outcome.total_faults(), 0);
        assert_eq!(outcome.final_frames(), vec![None, None]);
        assert!(outcome.into_steps().is_empty());
    }
}
