//! Core types for the Triode logic simulator.
//!
//! This is the leaf crate with zero internal Triode dependencies. It defines
//! the fundamental abstractions used throughout the workspace: the tri-state
//! [`Signal`], node identifiers, the [`NodeGraph`] arena holding the
//! undirected wire graph, error types, and the observation sink trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod graph;
pub mod id;
pub mod signal;
pub mod sink;

// Re-export core types at crate root for convenience.
pub use error::{EngineError, SignalConflict};
pub use graph::{Node, NodeGraph, SHARED_GROUND, SHARED_SOURCE};
pub use id::NodeId;
pub use signal::Signal;
pub use sink::{ObservationSink, StdoutSink};
