//! Triode: a tri-state digital logic simulator built from idealized analog
//! primitives.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Triode sub-crates. For most users, adding `triode` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use triode::prelude::*;
//!
//! // An inverter: one transistor to ground, one pull-up resistor.
//! let mut graph = NodeGraph::new();
//! let input = graph.add("Input");
//! let (output, inverter) = not_gate(&mut graph, input);
//!
//! let components = vec![Component::input(input, Signal::Off), inverter];
//! let mut netlist = Netlist::new(graph, components, EngineConfig::default()).unwrap();
//! netlist.simulate().unwrap();
//! assert_eq!(netlist.signal(output), Signal::On);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `triode-core` | Signals, node ids, the node graph, errors, sinks |
//! | [`engine`] | `triode-engine` | Components, netlists, settlement, config, metrics |
//! | [`logic`] | `triode-logic` | Gate and adder constructors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: signals, node ids, the node graph, errors, and observation
/// sinks (`triode-core`).
pub use triode_core as types;

/// Components, netlist assembly, and the settlement engine
/// (`triode-engine`).
pub use triode_engine as engine;

/// The composition layer: gates and arithmetic blocks (`triode-logic`).
pub use triode_logic as logic;

/// Common imports for typical Triode usage.
///
/// ```rust
/// use triode::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use triode_core::{
        NodeGraph, NodeId, ObservationSink, Signal, StdoutSink, SHARED_GROUND, SHARED_SOURCE,
    };

    // Errors
    pub use triode_core::{EngineError, SignalConflict};

    // Engine
    pub use triode_engine::{
        Component, Composite, ConfigError, EngineConfig, Netlist, SettleMetrics, Tier,
    };

    // Composition layer
    pub use triode_logic::{
        adder_subtractor, and_gate, full_adder, half_adder, nand_gate, not_gate, or_gate,
        xor_gate,
    };
}
