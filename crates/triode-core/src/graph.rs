//! The node arena and the undirected wire graph.
//!
//! Every node of a netlist lives in a [`NodeGraph`]; components and wires
//! refer to nodes by [`NodeId`]. The graph owns the peer lists that make up
//! the wire relation, so cycles (notably the shared supply rails touched by
//! every gate) cost nothing, and resetting for a fresh simulation is a
//! single linear pass.

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::error::SignalConflict;
use crate::id::NodeId;
use crate::signal::Signal;

/// The well-known supply rail held at `On` in every netlist.
///
/// Allocated by [`NodeGraph::new`] before any user node, together with
/// [`SHARED_GROUND`]. Netlists wire an implicit source terminal to it.
pub const SHARED_SOURCE: NodeId = NodeId(0);

/// The well-known supply rail held at `Off` in every netlist.
pub const SHARED_GROUND: NodeId = NodeId(1);

// ── Node ───────────────────────────────────────────────────────────

/// A named junction carrying a [`Signal`] and an undirected peer set.
///
/// Within one simulation a node's signal moves `Undefined → Off` or
/// `Undefined → On` at most once; it never moves between the two definite
/// values. The peer set is the node's side of the wire graph.
#[derive(Clone, Debug)]
pub struct Node {
    name: String,
    signal: Signal,
    peers: SmallVec<[NodeId; 4]>,
}

impl Node {
    /// The node's human-readable name.
    ///
    /// Names are not required to be unique; uniqueness is a concern for
    /// test suites that look nodes up by name, not for the engine.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The node's current signal.
    pub fn signal(&self) -> Signal {
        self.signal
    }

    /// Peers reachable over one wire hop. May contain duplicates.
    pub fn peers(&self) -> &[NodeId] {
        &self.peers
    }
}

// ── NodeGraph ──────────────────────────────────────────────────────

/// Arena owning every node of a netlist, including the wire-graph edges.
///
/// A fresh graph already contains the two supply-rail nodes
/// `SharedSource` and `SharedGround` (see [`SHARED_SOURCE`] and
/// [`SHARED_GROUND`]); user nodes are allocated after them with
/// [`add`](Self::add).
///
/// All mutation during a simulation funnels through [`assign`](Self::assign)
/// and [`reset_all`](Self::reset_all). There is no interior locking; callers
/// that share a graph across netlists must serialize their simulations.
#[derive(Clone, Debug)]
pub struct NodeGraph {
    nodes: Vec<Node>,
    index: IndexMap<String, NodeId>,
}

impl NodeGraph {
    /// Create a graph pre-seeded with the shared supply-rail nodes.
    pub fn new() -> Self {
        let mut graph = Self {
            nodes: Vec::new(),
            index: IndexMap::new(),
        };
        graph.add("SharedSource");
        graph.add("SharedGround");
        graph
    }

    /// Allocate a new node with the given name, initially `Undefined` and
    /// unconnected.
    pub fn add(&mut self, name: impl Into<String>) -> NodeId {
        let name = name.into();
        let id = NodeId(u32::try_from(self.nodes.len()).expect("node count fits in u32"));
        self.index.insert(name.clone(), id);
        self.nodes.push(Node {
            name,
            signal: Signal::Undefined,
            peers: SmallVec::new(),
        });
        id
    }

    /// Number of nodes in the arena, supply rails included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a graph carries at least the two supply rails.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` was allocated by this graph.
    pub fn contains(&self, id: NodeId) -> bool {
        (id.0 as usize) < self.nodes.len()
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this graph.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    /// The node's current signal.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this graph.
    pub fn signal(&self, id: NodeId) -> Signal {
        self.node(id).signal
    }

    /// The node's name.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this graph.
    pub fn name(&self, id: NodeId) -> &str {
        self.node(id).name()
    }

    /// Resolve a name to the most recently added node carrying it.
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Render the node in its diagnostic form, `<name>=<state: <signal>>`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this graph.
    pub fn describe(&self, id: NodeId) -> String {
        let node = self.node(id);
        format!("{}=<state: {}>", node.name, node.signal)
    }

    /// Add the symmetric wire edge `(a, b)`.
    ///
    /// Duplicate edges and self-loops are permitted; they add redundancy
    /// but do not change propagation.
    ///
    /// # Panics
    ///
    /// Panics if either id was not allocated by this graph.
    pub fn connect(&mut self, a: NodeId, b: NodeId) {
        assert!(self.contains(a) && self.contains(b), "foreign node id");
        self.nodes[a.0 as usize].peers.push(b);
        self.nodes[b.0 as usize].peers.push(a);
    }

    /// Remove the symmetric wire edge `(a, b)` if present; no-op otherwise.
    ///
    /// Every duplicate of the edge is removed.
    ///
    /// # Panics
    ///
    /// Panics if either id was not allocated by this graph.
    pub fn disconnect(&mut self, a: NodeId, b: NodeId) {
        assert!(self.contains(a) && self.contains(b), "foreign node id");
        self.nodes[a.0 as usize].peers.retain(|p| *p != b);
        self.nodes[b.0 as usize].peers.retain(|p| *p != a);
    }

    /// Remove every wire edge incident to `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this graph.
    pub fn disconnect_all(&mut self, id: NodeId) {
        let peers = std::mem::take(&mut self.nodes[id.0 as usize].peers);
        for peer in peers {
            if peer == id {
                continue;
            }
            self.nodes[peer.0 as usize].peers.retain(|p| *p != id);
        }
    }

    /// Request that the node take the definite value `value`, flooding it
    /// across the node's wire-graph connected component.
    ///
    /// Contract, per node visited:
    ///
    /// 1. `Undefined` — the node takes `value` and its peers are visited.
    /// 2. Already `value` — no-op; the walk does not continue through it.
    /// 3. The opposite definite value — fails with [`SignalConflict`]
    ///    naming the node; the values written so far are left in place
    ///    (the next simulation's reset phase clears them).
    ///
    /// Assigning `Undefined` is a no-op: the definite levels are the only
    /// values a constraint may impose.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this graph.
    pub fn assign(&mut self, id: NodeId, value: Signal) -> Result<(), SignalConflict> {
        if !value.is_definite() {
            return Ok(());
        }
        let mut work: SmallVec<[NodeId; 8]> = SmallVec::new();
        work.push(id);
        while let Some(current) = work.pop() {
            let node = &mut self.nodes[current.0 as usize];
            if node.signal == value {
                continue;
            }
            if node.signal.is_definite() {
                return Err(SignalConflict {
                    node: node.name.clone(),
                });
            }
            node.signal = value;
            work.extend(node.peers.iter().copied());
        }
        Ok(())
    }

    /// Reset one node to `Undefined`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this graph.
    pub fn reset(&mut self, id: NodeId) {
        self.nodes[id.0 as usize].signal = Signal::Undefined;
    }

    /// Reset every node to `Undefined`. Wire edges are untouched.
    pub fn reset_all(&mut self) {
        for node in &mut self.nodes {
            node.signal = Signal::Undefined;
        }
    }
}

impl Default for NodeGraph {
    fn default() -> Self {
        Self::new()
    }
}
