//! The closed set of circuit components.
//!
//! A component is a constraint over a small ordered tuple of node ids.
//! The set of kinds is closed, so a tagged enum with inherent
//! `ready`/`act` dispatch replaces a trait object: classification into
//! scheduling tiers is a `match`, and the settlement loop can partition
//! pending components by kind without downcasting.
//!
//! # Contract
//!
//! - `ready()` is a pure predicate over the current node signals.
//! - `act()` applies the constraint once, propagating definite values
//!   through [`NodeGraph::assign`]. The scheduler only calls `act()` on
//!   ready components; resistors and transistors still guard against an
//!   unready call and report it as an engine-invariant violation.
//! - Components never mutate themselves; all simulation state lives in
//!   the node graph.

use smallvec::{smallvec, SmallVec};

use triode_core::{EngineError, NodeGraph, NodeId, ObservationSink, Signal};

use crate::composite::Composite;
use crate::settle::settle;

// ── Tier ───────────────────────────────────────────────────────────

/// Scheduling tier a component belongs to. Fixed at add time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    /// Sources, grounds, and inputs: seed node values in Phase 1.
    Terminal,
    /// Resistors, transistors, and composites: settled in Phase 2.
    Active,
    /// Meters: observe in Phase 3.
    Meter,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Terminal => write!(f, "terminal"),
            Self::Active => write!(f, "active"),
            Self::Meter => write!(f, "meter"),
        }
    }
}

// ── Component ──────────────────────────────────────────────────────

/// A constraint over one or more nodes of a [`NodeGraph`].
///
/// Constructors are the associated functions ([`Component::source`] and
/// friends); composites convert via `From<Composite>`.
#[derive(Clone, Debug)]
pub enum Component {
    /// Drives its node to `On`.
    Source {
        /// The constrained node.
        node: NodeId,
    },
    /// Drives its node to `Off`.
    Ground {
        /// The constrained node.
        node: NodeId,
    },
    /// Drives its node to a caller-specified level.
    Input {
        /// The constrained node.
        node: NodeId,
        /// The level to drive. Definite levels are the contract; an
        /// `Undefined` level imposes no constraint.
        level: Signal,
    },
    /// Bidirectional equality: copies the definite signal of one endpoint
    /// onto the other while that one is still undefined.
    Resistor {
        /// First endpoint.
        a: NodeId,
        /// Second endpoint.
        b: NodeId,
    },
    /// A unidirectional conductor controlled by `gate`.
    ///
    /// While `gate` is `On`, the channel propagates `On` from source to
    /// drain and `Off` from drain to source, and only those two
    /// combinations. The asymmetry is what lets a pull-up resistor share a
    /// drain with the transistor without the transistor's source dragging
    /// the output low, and it is load-bearing for every gate construction.
    Transistor {
        /// Channel end driven towards `On`.
        source: NodeId,
        /// Controlling node; `Off` or `Undefined` leaves the channel open.
        gate: NodeId,
        /// Channel end driven towards `Off`.
        drain: NodeId,
    },
    /// Read-only observer; reports its node's state to the observation
    /// sink and imposes no constraint.
    Meter {
        /// The observed node.
        node: NodeId,
    },
    /// A named subcircuit with its own defer budget. See [`Composite`].
    Composite(Box<Composite>),
}

impl Component {
    /// A source terminal on `node`.
    pub fn source(node: NodeId) -> Self {
        Self::Source { node }
    }

    /// A ground terminal on `node`.
    pub fn ground(node: NodeId) -> Self {
        Self::Ground { node }
    }

    /// An input terminal driving `node` to `level`.
    pub fn input(node: NodeId, level: Signal) -> Self {
        Self::Input { node, level }
    }

    /// A resistor between `a` and `b`.
    pub fn resistor(a: NodeId, b: NodeId) -> Self {
        Self::Resistor { a, b }
    }

    /// A transistor conducting from `source` to `drain` under `gate`.
    pub fn transistor(source: NodeId, gate: NodeId, drain: NodeId) -> Self {
        Self::Transistor {
            source,
            gate,
            drain,
        }
    }

    /// A multimeter observing `node`.
    pub fn meter(node: NodeId) -> Self {
        Self::Meter { node }
    }

    /// The scheduling tier this component settles in.
    pub fn tier(&self) -> Tier {
        match self {
            Self::Source { .. } | Self::Ground { .. } | Self::Input { .. } => Tier::Terminal,
            Self::Resistor { .. } | Self::Transistor { .. } | Self::Composite(_) => Tier::Active,
            Self::Meter { .. } => Tier::Meter,
        }
    }

    /// Kind name for diagnostics; composites report their own name.
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Source { .. } => "Source",
            Self::Ground { .. } => "Ground",
            Self::Input { .. } => "Input",
            Self::Resistor { .. } => "Resistor",
            Self::Transistor { .. } => "Transistor",
            Self::Meter { .. } => "Multimeter",
            Self::Composite(c) => c.name(),
        }
    }

    /// Every node id this component references, recursively for
    /// composites. Used for construction-time validation.
    pub fn nodes(&self) -> SmallVec<[NodeId; 4]> {
        match self {
            Self::Source { node }
            | Self::Ground { node }
            | Self::Input { node, .. }
            | Self::Meter { node } => smallvec![*node],
            Self::Resistor { a, b } => smallvec![*a, *b],
            Self::Transistor {
                source,
                gate,
                drain,
            } => smallvec![*source, *gate, *drain],
            Self::Composite(c) => {
                let mut nodes: SmallVec<[NodeId; 4]> = c.inputs().iter().copied().collect();
                for sub in c.subcomponents() {
                    nodes.extend(sub.nodes());
                }
                nodes
            }
        }
    }

    /// Whether the component has enough definite inputs to act without
    /// spreading `Undefined`.
    pub fn ready(&self, graph: &NodeGraph) -> bool {
        match self {
            Self::Source { .. } | Self::Ground { .. } | Self::Input { .. } | Self::Meter { .. } => {
                true
            }
            Self::Resistor { a, b } => {
                graph.signal(*a).is_definite() || graph.signal(*b).is_definite()
            }
            Self::Transistor {
                source,
                gate,
                drain,
            } => {
                graph.signal(*gate).is_definite()
                    && (graph.signal(*source).is_definite() || graph.signal(*drain).is_definite())
            }
            Self::Composite(c) => c
                .inputs()
                .iter()
                .all(|&input| graph.signal(input).is_definite()),
        }
    }

    /// Apply the component's constraint once.
    ///
    /// Conflicts from [`NodeGraph::assign`] surface unchanged. Resistors
    /// and transistors fail with [`EngineError::NotReady`] if invoked while
    /// unready, which the scheduler never does.
    pub fn act(
        &self,
        graph: &mut NodeGraph,
        sink: &mut dyn ObservationSink,
        debug: bool,
    ) -> Result<(), EngineError> {
        match self {
            Self::Source { node } => Ok(graph.assign(*node, Signal::On)?),
            Self::Ground { node } => Ok(graph.assign(*node, Signal::Off)?),
            Self::Input { node, level } => Ok(graph.assign(*node, *level)?),
            Self::Meter { node } => {
                if !graph.signal(*node).is_definite() {
                    sink.record(&format!(
                        "WARN: acting on {} in undefined state",
                        self.describe(graph)
                    ));
                }
                sink.record(&self.describe(graph));
                Ok(())
            }
            Self::Resistor { a, b } => {
                if !self.ready(graph) {
                    return Err(EngineError::NotReady {
                        component: self.describe(graph),
                    });
                }
                if !graph.signal(*a).is_definite() {
                    let value = graph.signal(*b);
                    Ok(graph.assign(*a, value)?)
                } else if !graph.signal(*b).is_definite() {
                    let value = graph.signal(*a);
                    Ok(graph.assign(*b, value)?)
                } else {
                    // Both endpoints definite: equality was established
                    // elsewhere (or deliberately not, for a pull resistor
                    // bridging driven nodes).
                    Ok(())
                }
            }
            Self::Transistor {
                source,
                gate,
                drain,
            } => {
                if !self.ready(graph) {
                    return Err(EngineError::NotReady {
                        component: self.describe(graph),
                    });
                }
                if graph.signal(*gate) != Signal::On {
                    return Ok(());
                }
                if graph.signal(*source) == Signal::On {
                    graph.assign(*drain, Signal::On)?;
                } else if graph.signal(*drain) == Signal::Off {
                    graph.assign(*source, Signal::Off)?;
                }
                Ok(())
            }
            Self::Composite(c) => {
                settle(graph, c.subcomponents(), c.max_defers(), debug, sink)?;
                Ok(())
            }
        }
    }

    /// Human-readable rendering with current node states, used in error
    /// messages, trace lines, and meter observations.
    pub fn describe(&self, graph: &NodeGraph) -> String {
        match self {
            Self::Source { node } => format!("Source<node: {}>", graph.describe(*node)),
            Self::Ground { node } => format!("Ground<node: {}>", graph.describe(*node)),
            Self::Input { node, .. } => format!("Input<node: {}>", graph.describe(*node)),
            Self::Resistor { a, b } => format!(
                "Resistor<node1: {}, node2: {}>",
                graph.describe(*a),
                graph.describe(*b)
            ),
            Self::Transistor {
                source,
                gate,
                drain,
            } => format!(
                "Transistor<source={}, gate={}, drain={}>",
                graph.describe(*source),
                graph.describe(*gate),
                graph.describe(*drain)
            ),
            Self::Meter { node } => format!(
                "Multimeter<node={}, state={}>",
                graph.name(*node),
                graph.signal(*node)
            ),
            Self::Composite(c) => {
                let inputs: Vec<String> = c
                    .inputs()
                    .iter()
                    .map(|&input| graph.describe(input))
                    .collect();
                format!("{}<inputs: [{}]>", c.name(), inputs.join(", "))
            }
        }
    }
}

impl From<Composite> for Component {
    fn from(c: Composite) -> Self {
        Self::Composite(Box::new(c))
    }
}
