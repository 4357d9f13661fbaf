//! Engine configuration and construction-time validation.
//!
//! [`EngineConfig`] is the builder input for a [`Netlist`](crate::Netlist).
//! All structural checks happen at construction; the simulation loop itself
//! never validates.

use std::error::Error;
use std::fmt;

use triode_core::NodeId;

/// Default outer-round budget for Phase 2 settlement; also the default
/// budget composites apply to their subcircuits.
///
/// Four rounds settle every gate in the composition layer; deep chains of
/// gates at the top level of a netlist may need more.
pub const DEFAULT_MAX_DEFERS: usize = 4;

/// Tuning knobs for a netlist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Upper bound on outer settlement rounds in Phase 2. Must be at
    /// least 1. Exhausting the budget is not an error: leftover components
    /// stay pending and their nodes stay `Undefined`.
    pub max_defers: usize,
    /// Emit stderr trace lines for component adds and scheduling decisions.
    pub debug: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_defers: DEFAULT_MAX_DEFERS,
            debug: false,
        }
    }
}

impl EngineConfig {
    /// Validate structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_defers == 0 {
            return Err(ConfigError::ZeroDeferBudget);
        }
        Ok(())
    }
}

/// Errors detected while assembling a netlist, before any simulation runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A defer budget of zero would make every simulation skip Phase 2.
    ZeroDeferBudget,
    /// A component references a node id its graph never allocated.
    UnknownNode {
        /// Kind name of the offending component.
        component: String,
        /// The foreign node id.
        node: NodeId,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDeferBudget => write!(f, "max_defers must be at least 1"),
            Self::UnknownNode { component, node } => {
                write!(f, "component {component} references unknown node {node}")
            }
        }
    }
}

impl Error for ConfigError {}
