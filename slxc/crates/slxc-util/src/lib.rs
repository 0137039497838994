//! slxc-util - Shared Foundation Types for the SLX Compiler
//!
//! This crate holds the small set of types that more than one compiler phase
//! needs. Today that is source location tracking; later phases (the parser
//! and the automaton builder) attach the same positions to their own
//! diagnostics, so the types live here rather than inside any single phase.
//!
//! # Module Structure
//!
//! - [`span`] - Source position tracking (line/column)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod span;

// Re-export main types for convenience
pub use span::Position;
