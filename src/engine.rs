//! Replacement engine - the step protocol shared by every policy.
//!
//! For each reference the engine:
//! 1. Reports a hit if the page is resident (no mutation).
//! 2. Otherwise reports a fault. With zero frames nothing else happens.
//! 3. Otherwise asks the policy for a [`Placement`], writes the page into
//!    that slot and records what was evicted.
//!
//! Every step is recorded with a snapshot of the frames after it.

use log::{debug, info, trace};

use crate::common::PageSymbol;
use crate::frame_set::FrameSet;
use crate::policy::{Placement, ReplacementPolicy};
use crate::trace::{Access, SimulationOutcome, StepResult};

/// Run `policy` over `reference_string` with `frame_count` frames.
///
/// The frame set starts empty and is dropped when the run ends. The
/// reference string is only borrowed. `policy` should be freshly constructed;
/// [`PolicyKind::simulate`](crate::PolicyKind::simulate) does that for you.
///
/// # Example
/// ```
/// use pagesim::engine;
/// use pagesim::policy::OptimalPolicy;
///
/// let refs = [1, 2, 3, 1, 4, 1];
/// let outcome = engine::simulate(&mut OptimalPolicy::new(), &refs, 2);
/// assert_eq!(outcome.total_faults(), 4);
/// ```
pub fn simulate<P, R>(
    policy: &mut R,
    reference_string: &[P],
    frame_count: usize,
) -> SimulationOutcome<P>
where
    P: PageSymbol,
    R: ReplacementPolicy<P> + ?Sized,
{
    let kind = policy.kind();
    let mut frames = FrameSet::new(frame_count);
    let mut outcome = SimulationOutcome::new(kind, frame_count, reference_string.len());

    for (position, page) in reference_string.iter().enumerate() {
        let (access, evicted) = step(policy, &mut frames, reference_string, position);

        outcome.record(StepResult {
            position,
            reference: page.clone(),
            access,
            evicted,
            frames: frames.snapshot(),
        });
    }

    info!(
        "{}: {} references, {} frames, {} faults",
        kind,
        reference_string.len(),
        frame_count,
        outcome.total_faults()
    );

    outcome
}

/// Process `reference_string[position]` against `frames`.
fn step<P, R>(
    policy: &mut R,
    frames: &mut FrameSet<P>,
    reference_string: &[P],
    position: usize,
) -> (Access, Option<P>)
where
    P: PageSymbol,
    R: ReplacementPolicy<P> + ?Sized,
{
    let page = &reference_string[position];

    if frames.contains(page) {
        trace!("[{}] {:?} hit", position, page);
        return (Access::Hit, None);
    }

    if frames.is_empty() {
        debug!("[{}] {:?} faulted with no frames to load into", position, page);
        return (Access::Fault(None), None);
    }

    let placement = policy.place(frames, reference_string, position);
    let evicted = frames.replace(placement.frame_id(), page.clone());
    debug_assert_eq!(evicted.is_some(), placement.is_eviction());

    match (&placement, &evicted) {
        (Placement::Evict(slot), Some(victim)) => {
            debug!("[{}] {:?} faulted, evicted {:?} from {}", position, page, victim, slot)
        }
        _ => debug!("[{}] {:?} faulted, loaded into {}", position, page, placement.frame_id()),
    }

    (Access::Fault(Some(placement)), evicted)
}
