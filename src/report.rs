//! Human-readable rendering of simulation results.
//!
//! Pure formatting over [`StepResult`] and [`SimulationOutcome`]. Nothing
//! here runs a simulation or prints; the CLI decides where the text goes.
//!
//! ```text
//! FIFO (3 frames)
//! A -> A - -
//! B -> A B -
//! B -> No Page Fault
//! Total page faults: 2
//! ```

use std::fmt::{Display, Write};

use crate::common::config::{EMPTY_SLOT_MARKER, HIT_MARKER, NO_FRAMES_MARKER};
use crate::common::PageSymbol;
use crate::request::Comparison;
use crate::trace::{SimulationOutcome, StepResult};

/// Render frame contents in slot order, empty slots as `-`.
pub fn format_frames<P: Display>(frames: &[Option<P>]) -> String {
    frames
        .iter()
        .map(|slot| match slot {
            Some(page) => page.to_string(),
            None => EMPTY_SLOT_MARKER.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render one step: the frames after a fault, or a no-fault note on a hit.
///
/// A fault in a run with zero frames shows `(no frames)`.
pub fn format_step<P: Display>(step: &StepResult<P>) -> String {
    if !step.is_fault() {
        format!("{} -> {}", step.reference, HIT_MARKER)
    } else if step.frames.is_empty() {
        format!("{} -> {}", step.reference, NO_FRAMES_MARKER)
    } else {
        format!("{} -> {}", step.reference, format_frames(&step.frames))
    }
}

/// Render a whole run: header, one line per step, then the fault total.
pub fn format_outcome<P: PageSymbol + Display>(outcome: &SimulationOutcome<P>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({} frames)", outcome.policy(), outcome.frame_count());
    for step in outcome.steps() {
        let _ = writeln!(out, "{}", format_step(step));
    }
    let _ = write!(out, "Total page faults: {}", outcome.total_faults());
    out
}

/// Render a side-by-side fault count table for every policy in `comparison`.
pub fn format_comparison<P: PageSymbol>(comparison: &Comparison<P>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<8} {:>6} {:>9}", "Policy", "Faults", "Hit rate");
    for outcome in comparison.outcomes() {
        let stats = outcome.stats();
        let _ = writeln!(
            out,
            "{:<8} {:>6} {:>8.2}%",
            outcome.policy().name(),
            outcome.total_faults(),
            stats.hit_rate() * 100.0
        );
    }
    if let Some(best) = comparison.best() {
        let _ = write!(out, "Fewest faults: {}", best);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyKind;
    use crate::request::SimulationRequest;

    #[test]
    fn test_format_frames() {
        assert_eq!(format_frames(&[Some('A'), None, Some('C')]), "A - C");
        assert_eq!(format_frames::<char>(&[]), "");
        assert_eq!(format_frames(&[Some(10u32), Some(7)]), "10 7");
    }

    #[test]
    fn test_format_steps() {
        let refs: Vec<char> = "ABA".chars().collect();
        let outcome = PolicyKind::Fifo.simulate(&refs, 3);
        let lines: Vec<String> = outcome.steps().iter().map(format_step).collect();

        assert_eq!(lines, vec!["A -> A - -", "B -> A B -", "A -> No Page Fault"]);
    }

    #[test]
    fn test_format_outcome() {
        let refs: Vec<char> = "AB".chars().collect();
        let outcome = PolicyKind::Lru.simulate(&refs, 1);

        assert_eq!(
            format_outcome(&outcome),
            "LRU (1 frames)\nA -> A\nB -> B\nTotal page faults: 2"
        );
    }

    #[test]
    fn test_format_zero_frame_fault() {
        let outcome = PolicyKind::Optimal.simulate(&['A', 'A'], 0);
        let lines: Vec<String> = outcome.steps().iter().map(format_step).collect();
        assert_eq!(lines, vec!["A -> (no frames)", "A -> (no frames)"]);
    }

    #[test]
    fn test_format_comparison() {
        let request = SimulationRequest::default();
        let table = format_comparison(&request.run_all());

        assert!(table.starts_with("Policy"));
        assert!(table.contains("FIFO"));
        assert!(table.contains("LRU"));
        assert!(table.contains("Optimal"));
        assert!(table.ends_with("Fewest faults: Optimal"));
    }
}
