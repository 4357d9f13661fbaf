//! Composition layer: gates and arithmetic blocks assembled from the five
//! primitive components.
//!
//! Nothing here adds scheduling behavior: each constructor allocates its
//! internal nodes in the caller's graph, wires to the shared supply rails,
//! and returns the output node id(s) plus a single composite component the
//! engine settles like any other.
//!
//! # Constructors
//!
//! - [`not_gate`], [`and_gate`], [`or_gate`], [`nand_gate`], [`xor_gate`]
//! - [`half_adder`], [`full_adder`], [`adder_subtractor`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adder;
pub mod gate;

pub use adder::{adder_subtractor, full_adder, half_adder};
pub use gate::{and_gate, nand_gate, not_gate, or_gate, xor_gate};
