//! Triode quickstart — a complete, minimal simulation from scratch.
//!
//! Demonstrates:
//!   1. Allocating nodes in a graph
//!   2. Driving inputs and composing gates
//!   3. Observing outputs through multimeters
//!   4. Re-driving the same netlist with different inputs
//!
//! Run with:
//!   cargo run --example quickstart

use triode::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Triode Quickstart ===\n");

    // 1. A graph with two user inputs. The shared supply rails come
    //    pre-seeded.
    let mut graph = NodeGraph::new();
    let input1 = graph.add("input1");
    let input2 = graph.add("input2");

    // 2. One of each gate over the two inputs, each with a meter on its
    //    output.
    let mut components = vec![
        Component::input(input1, Signal::Off),
        Component::input(input2, Signal::On),
    ];

    let (not_output, not) = not_gate(&mut graph, input1);
    let (and_output, and) = and_gate(&mut graph, input1, input2);
    let (or_output, or) = or_gate(&mut graph, input1, input2);
    let (nand_output, nand) = nand_gate(&mut graph, input1, input2);
    let (xor_output, xor) = xor_gate(&mut graph, input1, input2);

    components.extend([
        not,
        Component::meter(not_output),
        and,
        Component::meter(and_output),
        or,
        Component::meter(or_output),
        nand,
        Component::meter(nand_output),
        xor,
        Component::meter(xor_output),
    ]);

    // 3. Assemble and simulate; meters print to stdout.
    let config = EngineConfig {
        max_defers: 10,
        debug: false,
    };
    let mut netlist = Netlist::new(graph, components, config)?;

    println!("input1=off, input2=on:");
    netlist.simulate()?;
    println!(
        "settled in {} round(s), {} activation(s)\n",
        netlist.metrics().rounds,
        netlist.metrics().acted,
    );

    // 4. A second run with different stimulus: build a fresh graph and
    //    drive both inputs high.
    let mut graph = NodeGraph::new();
    let a = graph.add("input1");
    let b = graph.add("input2");
    let (xor_output, xor) = xor_gate(&mut graph, a, b);
    let mut netlist = Netlist::new(
        graph,
        vec![
            Component::input(a, Signal::On),
            Component::input(b, Signal::On),
            xor,
            Component::meter(xor_output),
        ],
        config,
    )?;
    println!("input1=on, input2=on:");
    netlist.simulate()?;

    println!("\nDone.");
    Ok(())
}
