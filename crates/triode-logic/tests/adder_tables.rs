//! Literal truth-table checks for the arithmetic blocks.

use triode_core::NodeGraph;
use triode_core::Signal::{Off, On};
use triode_engine::Component;
use triode_logic::{adder_subtractor, full_adder, half_adder};
use triode_test_utils::run;

#[test]
fn half_adder_truth_table() {
    let table = [
        // (a, b) -> (sum, carry)
        (Off, Off, Off, Off),
        (On, Off, On, Off),
        (Off, On, On, Off),
        (On, On, Off, On),
    ];
    for (a_level, b_level, expected_sum, expected_carry) in table {
        let mut graph = NodeGraph::new();
        let a = graph.add("Input1");
        let b = graph.add("Input2");
        let (sum, carry, adder) = half_adder(&mut graph, a, b);

        let netlist = run(
            graph,
            vec![
                Component::input(a, a_level),
                Component::input(b, b_level),
                adder,
            ],
        );
        assert_eq!(
            (netlist.signal(sum), netlist.signal(carry)),
            (expected_sum, expected_carry),
            "half adder({a_level}, {b_level})"
        );
    }
}

#[test]
fn full_adder_truth_table() {
    let table = [
        // (a, b, cin) -> (sum, carry)
        (Off, Off, Off, Off, Off),
        (On, Off, Off, On, Off),
        (Off, On, Off, On, Off),
        (On, On, Off, Off, On),
        (Off, Off, On, On, Off),
        (On, Off, On, Off, On),
        (Off, On, On, Off, On),
        (On, On, On, On, On),
    ];
    for (a_level, b_level, cin_level, expected_sum, expected_carry) in table {
        let mut graph = NodeGraph::new();
        let a = graph.add("Input1");
        let b = graph.add("Input2");
        let cin = graph.add("CarryIn");
        let (sum, carry, adder) = full_adder(&mut graph, a, b, cin);

        let netlist = run(
            graph,
            vec![
                Component::input(a, a_level),
                Component::input(b, b_level),
                Component::input(cin, cin_level),
                adder,
            ],
        );
        assert_eq!(
            (netlist.signal(sum), netlist.signal(carry)),
            (expected_sum, expected_carry),
            "full adder({a_level}, {b_level}, cin={cin_level})"
        );
    }
}

#[test]
fn adder_subtractor_truth_table() {
    let table = [
        // (a, b, cin, op) -> (sum, carry); op=Off adds, op=On subtracts.
        (Off, Off, Off, Off, Off, Off),
        (On, Off, Off, Off, On, Off),
        (Off, On, Off, Off, On, Off),
        (On, On, Off, Off, Off, On),
        (Off, Off, On, Off, On, Off),
        (On, Off, On, Off, Off, On),
        (Off, On, On, Off, Off, On),
        (On, On, On, Off, On, On),
        (Off, Off, Off, On, On, Off),
        (On, Off, Off, On, Off, On),
        (Off, On, Off, On, Off, Off),
        (On, On, Off, On, On, Off),
        (Off, Off, On, On, Off, On),
        (On, Off, On, On, On, On),
        (Off, On, On, On, On, Off),
        (On, On, On, On, Off, On),
    ];
    for (a_level, b_level, cin_level, op_level, expected_sum, expected_carry) in table {
        let mut graph = NodeGraph::new();
        let a = graph.add("Input1");
        let b = graph.add("Input2");
        let cin = graph.add("CarryIn");
        let op = graph.add("Operation");
        let (sum, carry, component) = adder_subtractor(&mut graph, a, b, cin, op);

        let netlist = run(
            graph,
            vec![
                Component::input(a, a_level),
                Component::input(b, b_level),
                Component::input(cin, cin_level),
                Component::input(op, op_level),
                component,
            ],
        );
        assert_eq!(
            (netlist.signal(sum), netlist.signal(carry)),
            (expected_sum, expected_carry),
            "adder-subtractor({a_level}, {b_level}, cin={cin_level}, op={op_level})"
        );
    }
}

#[test]
fn ripple_carry_chains_two_full_adders() {
    // 2-bit addition 01 + 01 = 10: the low adder's carry feeds the high
    // adder's carry-in through ordinary composition, no special wiring.
    let mut graph = NodeGraph::new();
    let a0 = graph.add("A0");
    let a1 = graph.add("A1");
    let b0 = graph.add("B0");
    let b1 = graph.add("B1");
    let cin = graph.add("CarryIn");

    let (sum0, carry0, low) = full_adder(&mut graph, a0, b0, cin);
    let (sum1, carry1, high) = full_adder(&mut graph, a1, b1, carry0);

    let netlist = run(
        graph,
        vec![
            Component::input(a0, On),
            Component::input(a1, Off),
            Component::input(b0, On),
            Component::input(b1, Off),
            Component::input(cin, Off),
            low,
            high,
        ],
    );
    assert_eq!(netlist.signal(sum0), Off);
    assert_eq!(netlist.signal(sum1), On);
    assert_eq!(netlist.signal(carry1), Off);
}
