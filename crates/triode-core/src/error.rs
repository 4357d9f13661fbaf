//! Error types for the simulator.
//!
//! Errors are organized by subsystem: [`SignalConflict`] is raised by the
//! node graph on a contradictory write, and [`EngineError`] is the
//! simulation-level wrapper surfaced to `simulate` callers. There is no
//! local recovery anywhere; the first error abandons the simulation.

use std::error::Error;
use std::fmt;

/// A node was asked to take the definite value opposite to the one it
/// already holds.
///
/// Raised by [`NodeGraph::assign`](crate::NodeGraph::assign) and surfaced
/// verbatim through component execution to the `simulate` caller. A netlist
/// that produces this error is over-constrained (for example, a conducting
/// transistor shorting the supply rails).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignalConflict {
    /// Name of the node that rejected the write.
    pub node: String,
}

impl fmt::Display for SignalConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conflicting values for node {}", self.node)
    }
}

impl Error for SignalConflict {}

/// Errors surfaced from a simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// A node rejected a contradictory definite value.
    Conflict(SignalConflict),
    /// A component's `act` ran while its readiness predicate was false.
    ///
    /// The scheduler only invokes ready components, so this indicates an
    /// engine bug rather than a malformed netlist.
    NotReady {
        /// Rendered description of the offending component.
        component: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict(e) => write!(f, "{e}"),
            Self::NotReady { component } => {
                write!(f, "component {component} was executed before it was ready")
            }
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Conflict(e) => Some(e),
            Self::NotReady { .. } => None,
        }
    }
}

impl From<SignalConflict> for EngineError {
    fn from(e: SignalConflict) -> Self {
        Self::Conflict(e)
    }
}
