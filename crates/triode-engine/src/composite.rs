//! Named bundles of components that behave as one active component.

use smallvec::SmallVec;

use triode_core::NodeId;

use crate::component::Component;
use crate::config::DEFAULT_MAX_DEFERS;

/// A bundle of subcomponents exposed as a single active component.
///
/// The composition layer builds gates and adders as composites: a name for
/// diagnostics, the primitive (or nested composite) parts, and the input
/// nodes whose definiteness gates the whole bundle. A composite is ready
/// once every declared input is definite; acting settles the subcomponents
/// with the composite's own defer budget, so a deeply nested gate gets the
/// same scheduling guarantees as a top-level netlist.
#[derive(Clone, Debug)]
pub struct Composite {
    name: String,
    subcomponents: Vec<Component>,
    inputs: SmallVec<[NodeId; 4]>,
    max_defers: usize,
}

impl Composite {
    /// Create a composite with the default defer budget.
    pub fn new(
        name: impl Into<String>,
        subcomponents: Vec<Component>,
        inputs: impl IntoIterator<Item = NodeId>,
    ) -> Self {
        Self {
            name: name.into(),
            subcomponents,
            inputs: inputs.into_iter().collect(),
            max_defers: DEFAULT_MAX_DEFERS,
        }
    }

    /// Override the defer budget applied to the subcircuit.
    #[must_use]
    pub fn with_max_defers(mut self, max_defers: usize) -> Self {
        self.max_defers = max_defers;
        self
    }

    /// Diagnostic name, e.g. `NotGate`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bundled parts, in scheduling order.
    pub fn subcomponents(&self) -> &[Component] {
        &self.subcomponents
    }

    /// Input nodes whose definiteness makes the composite ready.
    pub fn inputs(&self) -> &[NodeId] {
        &self.inputs
    }

    /// Defer budget applied when the composite settles its subcircuit.
    pub fn max_defers(&self) -> usize {
        self.max_defers
    }
}
