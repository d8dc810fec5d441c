//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers (FrameId, PageSymbol)

pub mod config;
pub mod error;
mod frame_id;
mod symbol;

pub use error::{Error, Result};
pub use frame_id::FrameId;
pub use symbol::PageSymbol;
