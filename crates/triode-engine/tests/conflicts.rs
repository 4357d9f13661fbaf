//! Conflict detection: netlists that drive a node towards both definite
//! values must fail with the conflict error, whatever the path.

use triode_core::{EngineError, NodeGraph, Signal, SHARED_GROUND, SHARED_SOURCE};
use triode_engine::{Component, EngineConfig, Netlist};

fn simulate_err(graph: NodeGraph, components: Vec<Component>) -> EngineError {
    let mut netlist = Netlist::new(graph, components, EngineConfig::default()).unwrap();
    let mut sink: Vec<String> = Vec::new();
    netlist.simulate_with(&mut sink).unwrap_err()
}

#[test]
fn source_and_ground_on_the_same_node() {
    let mut graph = NodeGraph::new();
    let n = graph.add("N");
    let err = simulate_err(
        graph,
        vec![Component::source(n), Component::ground(n)],
    );
    match err {
        EngineError::Conflict(e) => assert_eq!(e.node, "N"),
        other => panic!("expected Conflict, got {other:?}"),
    }
}

#[test]
fn opposite_rails_wired_together() {
    let mut graph = NodeGraph::new();
    let n = graph.add("N");
    graph.connect(n, SHARED_SOURCE);
    // The base source floods On across the wire into N; the user ground
    // then drives N towards Off.
    let err = simulate_err(graph, vec![Component::ground(n)]);
    assert!(matches!(err, EngineError::Conflict(_)));
}

#[test]
fn conducting_transistor_shorting_the_rails() {
    let mut graph = NodeGraph::new();
    let gate = graph.add("Gate");
    let err = simulate_err(
        graph,
        vec![
            Component::input(gate, Signal::On),
            Component::transistor(SHARED_SOURCE, gate, SHARED_GROUND),
        ],
    );
    match err {
        EngineError::Conflict(e) => assert_eq!(e.node, "SharedGround"),
        other => panic!("expected Conflict, got {other:?}"),
    }
}

#[test]
fn conflict_through_a_wire_path_behind_the_transistor() {
    // The transistor drives On into its drain, whose wire-graph component
    // already carries Off from a grounded peer: the flood walks into the
    // contradiction mid-path.
    let mut graph = NodeGraph::new();
    let a = graph.add("A");
    let gate = graph.add("Gate");
    let b = graph.add("B");
    let c = graph.add("C");
    graph.connect(b, c);

    let err = simulate_err(
        graph,
        vec![
            Component::input(a, Signal::On),
            Component::input(gate, Signal::On),
            Component::ground(c),
            Component::transistor(a, gate, b),
        ],
    );
    assert!(matches!(err, EngineError::Conflict(_)));
}

#[test]
fn gate_open_prevents_the_short() {
    // Same rail-to-rail transistor, but with the gate held Off the channel
    // never conducts and simulation succeeds.
    let mut graph = NodeGraph::new();
    let gate = graph.add("Gate");
    let mut netlist = Netlist::new(
        graph,
        vec![
            Component::input(gate, Signal::Off),
            Component::transistor(SHARED_SOURCE, gate, SHARED_GROUND),
        ],
        EngineConfig::default(),
    )
    .unwrap();
    let mut sink: Vec<String> = Vec::new();
    netlist.simulate_with(&mut sink).unwrap();
    assert_eq!(netlist.signal(SHARED_SOURCE), Signal::On);
    assert_eq!(netlist.signal(SHARED_GROUND), Signal::Off);
}
