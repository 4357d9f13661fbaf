//! Benchmark profiles for the Triode workspace.
//!
//! Provides pre-built netlist profiles for the criterion harnesses:
//! N-bit ripple-carry adders with seeded random input patterns, which
//! exercise composite nesting, the transistor sub-fixpoint, and the
//! resistor passes in realistic proportions.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use triode_core::{NodeGraph, NodeId, Signal};
use triode_engine::Component;
use triode_logic::full_adder;

/// A ready-to-assemble ripple-carry adder netlist.
pub struct RippleAdderProfile {
    /// Graph holding all nodes of the adder.
    pub graph: NodeGraph,
    /// Inputs and adder stages, in netlist order.
    pub components: Vec<Component>,
    /// Sum output node per bit, least significant first.
    pub sum_bits: Vec<NodeId>,
    /// Carry out of the most significant stage.
    pub carry_out: NodeId,
}

/// Build an N-bit ripple-carry adder over seed-deterministic random
/// operands.
///
/// Each bit position gets two input terminals and one full adder; the
/// carry chain threads stage to stage, so settlement walks the full chain
/// in insertion order.
pub fn ripple_adder_profile(width: usize, seed: u64) -> RippleAdderProfile {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut graph = NodeGraph::new();
    let mut components = Vec::with_capacity(width * 3 + 1);
    let mut sum_bits = Vec::with_capacity(width);

    let mut carry = graph.add("CarryIn");
    components.push(Component::input(carry, Signal::Off));

    for bit in 0..width {
        let a = graph.add(format!("A{bit}"));
        let b = graph.add(format!("B{bit}"));
        components.push(Component::input(a, Signal::from(rng.gen_bool(0.5))));
        components.push(Component::input(b, Signal::from(rng.gen_bool(0.5))));

        let (sum, stage_carry, stage) = full_adder(&mut graph, a, b, carry);
        components.push(stage);
        sum_bits.push(sum);
        carry = stage_carry;
    }

    RippleAdderProfile {
        graph,
        components,
        sum_bits,
        carry_out: carry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triode_engine::{EngineConfig, Netlist};

    #[test]
    fn profile_is_deterministic_for_a_seed() {
        let first = ripple_adder_profile(4, 42);
        let second = ripple_adder_profile(4, 42);
        assert_eq!(first.sum_bits, second.sum_bits);
        assert_eq!(first.components.len(), second.components.len());
    }

    #[test]
    fn profile_assembles_and_settles() {
        let profile = ripple_adder_profile(8, 42);
        let mut netlist = Netlist::new(
            profile.graph,
            profile.components,
            EngineConfig::default(),
        )
        .unwrap();
        let mut sink: Vec<String> = Vec::new();
        netlist.simulate_with(&mut sink).unwrap();
        assert!(netlist.metrics().is_settled());
        for bit in profile.sum_bits {
            assert!(netlist.signal(bit).is_definite());
        }
        assert!(netlist.signal(profile.carry_out).is_definite());
    }
}
