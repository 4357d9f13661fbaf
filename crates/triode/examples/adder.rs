//! A 4-bit ripple-carry adder-subtractor, observed bit by bit.
//!
//! Run with:
//!   cargo run --example adder

use triode::prelude::*;

const WIDTH: usize = 4;

/// Drive `value`'s bits onto freshly allocated input nodes.
fn drive_operand(
    graph: &mut NodeGraph,
    components: &mut Vec<Component>,
    label: &str,
    value: u8,
) -> Vec<NodeId> {
    (0..WIDTH)
        .map(|bit| {
            let node = graph.add(format!("{label}{bit}"));
            components.push(Component::input(node, Signal::from((value >> bit) & 1 == 1)));
            node
        })
        .collect()
}

fn read_word(netlist: &Netlist, bits: &[NodeId]) -> u8 {
    bits.iter()
        .enumerate()
        .fold(0, |word, (bit, &node)| match netlist.signal(node) {
            Signal::On => word | 1 << bit,
            _ => word,
        })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (a_value, b_value) = (11u8, 6u8);

    for (label, op_level) in [("add", Signal::Off), ("subtract", Signal::On)] {
        let mut graph = NodeGraph::new();
        let mut components = Vec::new();

        let a_bits = drive_operand(&mut graph, &mut components, "A", a_value);
        let b_bits = drive_operand(&mut graph, &mut components, "B", b_value);
        let operation = graph.add("Operation");
        components.push(Component::input(operation, op_level));
        let carry_in = graph.add("CarryIn");
        components.push(Component::input(carry_in, op_level));

        // Chain one adder-subtractor slice per bit; each slice conditions
        // its own copy of the operand, so the operation node fans out.
        let mut carry = carry_in;
        let mut sum_bits = Vec::with_capacity(WIDTH);
        for bit in 0..WIDTH {
            let (sum, stage_carry, stage) =
                adder_subtractor(&mut graph, a_bits[bit], b_bits[bit], carry, operation);
            components.push(stage);
            sum_bits.push(sum);
            carry = stage_carry;
        }
        components.push(Component::meter(carry));

        let mut netlist = Netlist::new(graph, components, EngineConfig::default())?;
        netlist.simulate()?;

        println!(
            "{a_value} {label} {b_value} = {} (carry out: {})",
            read_word(&netlist, &sum_bits),
            netlist.signal(carry),
        );
    }
    Ok(())
}
