//! Shared fixtures for driving netlists in tests.
//!
//! The truth-table suites all follow the same shape: build a graph, drive
//! inputs, add a gate, simulate once, assert on output signals. The
//! helpers here fold the boilerplate; panicking on error is fine because
//! these fixtures are only for tests that expect success.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use triode_core::{NodeGraph, Signal};
use triode_engine::{Component, EngineConfig, Netlist};

/// The two definite levels, for truth-table loops.
pub const LEVELS: [Signal; 2] = [Signal::Off, Signal::On];

/// Assemble a netlist with the default config, simulate once with a
/// capture sink, and return it for signal assertions.
///
/// # Panics
///
/// Panics on construction or simulation errors.
pub fn run(graph: NodeGraph, components: Vec<Component>) -> Netlist {
    run_with_config(graph, components, EngineConfig::default())
}

/// [`run`] with an explicit config.
///
/// # Panics
///
/// Panics on construction or simulation errors.
pub fn run_with_config(
    graph: NodeGraph,
    components: Vec<Component>,
    config: EngineConfig,
) -> Netlist {
    let mut netlist = Netlist::new(graph, components, config).expect("netlist construction");
    let mut observations: Vec<String> = Vec::new();
    netlist
        .simulate_with(&mut observations)
        .expect("simulation");
    netlist
}

/// [`run`], also returning the captured observation lines.
///
/// # Panics
///
/// Panics on construction or simulation errors.
pub fn run_observing(graph: NodeGraph, components: Vec<Component>) -> (Netlist, Vec<String>) {
    let mut netlist =
        Netlist::new(graph, components, EngineConfig::default()).expect("netlist construction");
    let mut observations: Vec<String> = Vec::new();
    netlist
        .simulate_with(&mut observations)
        .expect("simulation");
    (netlist, observations)
}
