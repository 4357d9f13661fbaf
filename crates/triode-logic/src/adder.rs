//! Arithmetic blocks composed from the gate constructors.

use triode_core::{NodeGraph, NodeId};
use triode_engine::{Component, Composite};

use crate::gate::{and_gate, or_gate, xor_gate};

/// Half adder: `sum = a XOR b`, `carry = a AND b`.
pub fn half_adder(graph: &mut NodeGraph, a: NodeId, b: NodeId) -> (NodeId, NodeId, Component) {
    let (sum, sum_xor) = xor_gate(graph, a, b);
    let (carry, carry_and) = and_gate(graph, a, b);
    let composite = Composite::new("HalfAdder", vec![sum_xor, carry_and], [a, b]);
    (sum, carry, composite.into())
}

/// Full adder over `a`, `b`, and a carry-in.
///
/// `sum = a XOR b XOR cin`; the carry-out ORs the three pairwise ANDs.
pub fn full_adder(
    graph: &mut NodeGraph,
    a: NodeId,
    b: NodeId,
    carry_in: NodeId,
) -> (NodeId, NodeId, Component) {
    let (partial_sum, sum_xor1) = xor_gate(graph, a, b);
    let (sum, sum_xor2) = xor_gate(graph, partial_sum, carry_in);

    let (ab_carry, ab_and) = and_gate(graph, a, b);
    let (ac_carry, ac_and) = and_gate(graph, a, carry_in);
    let (bc_carry, bc_and) = and_gate(graph, b, carry_in);

    let (partial_carry, carry_or1) = or_gate(graph, ab_carry, ac_carry);
    let (carry, carry_or2) = or_gate(graph, partial_carry, bc_carry);

    let composite = Composite::new(
        "FullAdder",
        vec![
            sum_xor1, sum_xor2, ab_and, ac_and, bc_and, carry_or1, carry_or2,
        ],
        [a, b, carry_in],
    );
    (sum, carry, composite.into())
}

/// Adder-subtractor: `operation` of `Off` adds, `On` subtracts by
/// complementing `b` on its way into a full adder (two's complement, with
/// the caller-supplied carry-in).
pub fn adder_subtractor(
    graph: &mut NodeGraph,
    a: NodeId,
    b: NodeId,
    carry_in: NodeId,
    operation: NodeId,
) -> (NodeId, NodeId, Component) {
    let (b_conditioned, op_xor) = xor_gate(graph, b, operation);
    let (sum, carry, adder) = full_adder(graph, a, b_conditioned, carry_in);
    let composite = Composite::new(
        "AdderSubtractor",
        vec![op_xor, adder],
        [a, b, carry_in, operation],
    );
    (sum, carry, composite.into())
}
