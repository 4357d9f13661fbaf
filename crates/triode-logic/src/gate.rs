//! Gate constructors built from transistors and pull resistors.
//!
//! Every gate is the same recipe: transistors steer a definite value from
//! one of the supply rails towards the output, and a pull resistor fills
//! the output with the opposite rail's value whenever the transistor path
//! stays open. The transistor polarity (On walks source→drain, Off walks
//! drain→source) is what keeps the pull resistor from fighting the
//! transistor network.

use triode_core::{NodeGraph, NodeId, SHARED_GROUND, SHARED_SOURCE};
use triode_engine::{Component, Composite};

/// NOT: a transistor shorts the output to ground while the input is `On`;
/// a pull-up sources the output otherwise.
pub fn not_gate(graph: &mut NodeGraph, input: NodeId) -> (NodeId, Component) {
    let output = graph.add("NotOutput");
    let composite = Composite::new(
        "NotGate",
        vec![
            Component::transistor(output, input, SHARED_GROUND),
            Component::resistor(SHARED_SOURCE, output),
        ],
        [input],
    );
    (output, composite.into())
}

/// AND: two transistors in series pass the source rail to the output only
/// when both inputs conduct; a pull-down grounds the output otherwise.
pub fn and_gate(graph: &mut NodeGraph, a: NodeId, b: NodeId) -> (NodeId, Component) {
    let mid = graph.add("AndIntermediate");
    let output = graph.add("AndOutput");
    let composite = Composite::new(
        "AndGate",
        vec![
            Component::transistor(SHARED_SOURCE, a, mid),
            Component::transistor(mid, b, output),
            Component::resistor(output, SHARED_GROUND),
        ],
        [a, b],
    );
    (output, composite.into())
}

/// OR: two transistors in parallel each pass the source rail to the
/// output; a pull-down grounds the output when neither conducts.
pub fn or_gate(graph: &mut NodeGraph, a: NodeId, b: NodeId) -> (NodeId, Component) {
    let output = graph.add("OrOutput");
    let composite = Composite::new(
        "OrGate",
        vec![
            Component::transistor(SHARED_SOURCE, a, output),
            Component::transistor(SHARED_SOURCE, b, output),
            Component::resistor(output, SHARED_GROUND),
        ],
        [a, b],
    );
    (output, composite.into())
}

/// NAND: two transistors in series short the output to ground only when
/// both inputs conduct; a pull-up sources the output otherwise.
pub fn nand_gate(graph: &mut NodeGraph, a: NodeId, b: NodeId) -> (NodeId, Component) {
    let mid = graph.add("NandIntermediate");
    let output = graph.add("NandOutput");
    let composite = Composite::new(
        "NandGate",
        vec![
            Component::transistor(output, a, mid),
            Component::transistor(mid, b, SHARED_GROUND),
            Component::resistor(SHARED_SOURCE, output),
        ],
        [a, b],
    );
    (output, composite.into())
}

/// XOR as `(a OR b) AND (a NAND b)`.
pub fn xor_gate(graph: &mut NodeGraph, a: NodeId, b: NodeId) -> (NodeId, Component) {
    let (or_out, or) = or_gate(graph, a, b);
    let (nand_out, nand) = nand_gate(graph, a, b);
    let (output, and) = and_gate(graph, or_out, nand_out);
    let composite = Composite::new("XorGate", vec![or, nand, and], [a, b]);
    (output, composite.into())
}
