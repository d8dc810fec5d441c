//! pagesim - A page replacement simulator with swappable replacement policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │         Input (input/, request/)  + CLI (main.rs)        │   │
//! │  │   text / file → SimulationRequest (validated input)      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Replacement Engine (engine/)                    │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │   Policies (policy/): FIFO | LRU | Optimal      │   │   │
//! │  │   │          (selected at runtime)                   │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │        FrameSet + step protocol (hit / fill / evict)     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │      Results (trace/, stats/, report/)                   │   │
//! │  │   StepResult trace → FaultStats → formatted text         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (FrameId, PageSymbol, Error, config)
//! - [`frame_set`] - The fixed row of frames and its queries
//! - [`policy`] - FIFO, LRU and Optimal replacement policies
//! - [`engine`] - The step protocol that drives a policy over a reference string
//! - [`trace`] - Step results and run outcomes
//! - [`stats`] - Hit/fault counters
//! - [`report`] - Text rendering of traces and comparisons
//! - [`request`] - Validated simulation input
//! - [`input`] - Parsing reference strings and frame counts
//!
//! # Quick Start
//! ```
//! use pagesim::{PolicyKind, SimulationRequest};
//!
//! let refs: Vec<char> = "ABCBDAFBGBAHAGFA".chars().collect();
//! let request = SimulationRequest::new(refs, 3).unwrap();
//!
//! let outcome = request.run(PolicyKind::Optimal);
//! assert_eq!(outcome.total_faults(), 8);
//! println!("{}", pagesim::report::format_outcome(&outcome));
//! ```

pub mod common;
pub mod engine;
pub mod frame_set;
pub mod input;
pub mod policy;
pub mod report;
pub mod request;
pub mod stats;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameId, PageSymbol, Result};

pub use frame_set::FrameSet;
pub use policy::{Placement, PolicyKind, ReplacementPolicy};
pub use request::{Comparison, SimulationRequest};
pub use stats::FaultStats;
pub use trace::{Access, SimulationOutcome, StepResult};
