//! Meter output through the observation sink: exact line formats,
//! insertion order, and the undefined-state warning.

use triode_core::{NodeGraph, Signal};
use triode_engine::{Component, EngineConfig, Netlist};

#[test]
fn meters_report_in_insertion_order_after_settlement() {
    let mut graph = NodeGraph::new();
    let input = graph.add("In");
    let output = graph.add("Out");
    let components = vec![
        Component::input(input, Signal::On),
        Component::resistor(input, output),
        Component::meter(output),
        Component::meter(input),
    ];
    let mut netlist = Netlist::new(graph, components, EngineConfig::default()).unwrap();
    let mut sink: Vec<String> = Vec::new();
    netlist.simulate_with(&mut sink).unwrap();

    assert_eq!(
        sink,
        vec![
            "Multimeter<node=Out, state=on>".to_string(),
            "Multimeter<node=In, state=on>".to_string(),
        ]
    );
}

#[test]
fn meter_on_an_unsettled_node_warns_but_reports() {
    let mut graph = NodeGraph::new();
    let floating = graph.add("Floating");
    let components = vec![Component::meter(floating)];
    let mut netlist = Netlist::new(graph, components, EngineConfig::default()).unwrap();
    let mut sink: Vec<String> = Vec::new();
    netlist.simulate_with(&mut sink).unwrap();

    assert_eq!(
        sink,
        vec![
            "WARN: acting on Multimeter<node=Floating, state=undefined> in undefined state"
                .to_string(),
            "Multimeter<node=Floating, state=undefined>".to_string(),
        ]
    );
}

#[test]
fn sink_is_clean_when_the_netlist_has_no_meters() {
    let mut graph = NodeGraph::new();
    let n = graph.add("N");
    let mut netlist = Netlist::new(
        graph,
        vec![Component::input(n, Signal::Off)],
        EngineConfig::default(),
    )
    .unwrap();
    let mut sink: Vec<String> = Vec::new();
    netlist.simulate_with(&mut sink).unwrap();
    assert!(sink.is_empty());
}
