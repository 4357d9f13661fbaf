//! Netlist assembly and the four-phase simulation driver.

use triode_core::{
    EngineError, NodeGraph, NodeId, ObservationSink, Signal, StdoutSink, SHARED_GROUND,
    SHARED_SOURCE,
};

use crate::component::{Component, Tier};
use crate::config::{ConfigError, EngineConfig};
use crate::metrics::SettleMetrics;
use crate::settle::settle;

/// A node graph plus components classified into scheduling tiers.
///
/// Construction silently prepends the two base terminals (a source on
/// `SharedSource` and a ground on `SharedGround`), so every netlist carries
/// live supply rails. Components are validated (node references must exist
/// in the graph) and classified at add time; classification never changes
/// afterwards.
///
/// One [`simulate`](Self::simulate) call performs one complete evaluation
/// from scratch: there is no incremental mode, and calls must be
/// serialized by the caller.
#[derive(Clone, Debug)]
pub struct Netlist {
    graph: NodeGraph,
    terminals: Vec<Component>,
    active: Vec<Component>,
    meters: Vec<Component>,
    config: EngineConfig,
    metrics: SettleMetrics,
}

impl Netlist {
    /// Assemble a netlist from a graph, user components, and a config.
    pub fn new(
        graph: NodeGraph,
        components: Vec<Component>,
        config: EngineConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut netlist = Self {
            graph,
            terminals: Vec::new(),
            active: Vec::new(),
            meters: Vec::new(),
            config,
            metrics: SettleMetrics::default(),
        };
        netlist.push(Component::source(SHARED_SOURCE))?;
        netlist.push(Component::ground(SHARED_GROUND))?;
        netlist.add_components(components)?;
        Ok(netlist)
    }

    /// Append more components, with the same validation and tier
    /// classification as at construction.
    pub fn add_components(
        &mut self,
        components: impl IntoIterator<Item = Component>,
    ) -> Result<(), ConfigError> {
        for component in components {
            self.push(component)?;
        }
        Ok(())
    }

    fn push(&mut self, component: Component) -> Result<(), ConfigError> {
        for node in component.nodes() {
            if !self.graph.contains(node) {
                return Err(ConfigError::UnknownNode {
                    component: component.kind_name().to_string(),
                    node,
                });
            }
        }
        let tier = component.tier();
        if self.config.debug {
            eprintln!("adding {tier} {}", component.describe(&self.graph));
        }
        match tier {
            Tier::Terminal => self.terminals.push(component),
            Tier::Active => self.active.push(component),
            Tier::Meter => self.meters.push(component),
        }
        Ok(())
    }

    /// Run one complete evaluation, writing observations to stdout.
    pub fn simulate(&mut self) -> Result<(), EngineError> {
        self.simulate_with(&mut StdoutSink)
    }

    /// Run one complete evaluation, writing observations to `sink`.
    ///
    /// Phases: reset every node, act terminals in insertion order, settle
    /// active components under the defer budget, act meters in insertion
    /// order. The first error aborts the run; node values written before
    /// the failure stay in place but the next call's reset phase clears
    /// them.
    pub fn simulate_with(&mut self, sink: &mut dyn ObservationSink) -> Result<(), EngineError> {
        // Phase 0: reset. The rails are re-driven in Phase 1.
        self.graph.reset_all();

        // Phase 1: terminals.
        for terminal in &self.terminals {
            terminal.act(&mut self.graph, sink, self.config.debug)?;
        }

        // Phase 2: active settlement.
        self.metrics = settle(
            &mut self.graph,
            &self.active,
            self.config.max_defers,
            self.config.debug,
            sink,
        )?;

        // Phase 3: meters.
        for meter in &self.meters {
            meter.act(&mut self.graph, sink, self.config.debug)?;
        }
        Ok(())
    }

    /// The signal a node settled to.
    ///
    /// # Panics
    ///
    /// Panics if `node` was not allocated by this netlist's graph.
    pub fn signal(&self, node: NodeId) -> Signal {
        self.graph.signal(node)
    }

    /// Borrow the node graph.
    pub fn graph(&self) -> &NodeGraph {
        &self.graph
    }

    /// Mutably borrow the node graph (for rewiring between simulations).
    pub fn graph_mut(&mut self) -> &mut NodeGraph {
        &mut self.graph
    }

    /// Diagnostics from the most recent Phase 2 settlement.
    pub fn metrics(&self) -> &SettleMetrics {
        &self.metrics
    }

    /// The configuration the netlist was assembled with.
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Number of terminal-tier components, base terminals included.
    pub fn terminal_count(&self) -> usize {
        self.terminals.len()
    }

    /// Number of active-tier components.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Number of meter-tier components.
    pub fn meter_count(&self) -> usize {
        self.meters.len()
    }
}
