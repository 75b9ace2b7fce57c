//! Name-indexed wrapper over `petgraph::stable_graph::StableGraph`.
//!
//! Nodes are addressed by unique string names; a side index maps names to
//! `NodeIndex` so callers never juggle petgraph indices directly. The wrapper
//! carries a runtime `GraphKind` tag: petgraph fixes directedness at the type
//! level, but the projector's precondition check needs a graph that can
//! actually *be* undirected. Undirected graphs store one arc per edge and
//! answer adjacency queries symmetrically.

use std::collections::HashMap;
use std::fmt;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::IntoEdgeReferences;
use petgraph::Direction;
use serde::{Deserialize, Serialize};

/// Whether a graph's edges carry direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphKind {
    Directed,
    Undirected,
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Directed => write!(f, "directed"),
            GraphKind::Undirected => write!(f, "undirected"),
        }
    }
}

/// Node weight: a named variable in the causal model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
}

/// Edge weight: free-form attributes (e.g. a numeric weight the viz layer
/// can label edges with).
pub type EdgeAttrs = serde_json::Map<String, serde_json::Value>;

/// A graph of named variables with attribute-carrying edges.
///
/// No parallel edges: re-adding an existing edge overwrites its attributes.
/// Queries about names not in the graph answer "nothing" (degree 0, no
/// successors) rather than erroring.
#[derive(Debug, Clone)]
pub struct CausalGraph {
    kind: GraphKind,
    pub graph: StableGraph<Variable, EdgeAttrs, petgraph::Directed>,
    index: HashMap<String, NodeIndex>,
}

impl Default for CausalGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl CausalGraph {
    /// New empty directed graph.
    pub fn new() -> Self {
        Self::with_kind(GraphKind::Directed)
    }

    /// New empty undirected graph.
    pub fn undirected() -> Self {
        Self::with_kind(GraphKind::Undirected)
    }

    fn with_kind(kind: GraphKind) -> Self {
        Self {
            kind,
            graph: StableGraph::default(),
            index: HashMap::new(),
        }
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Look up a node by name.
    pub fn get_node(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get the node index for `name`, inserting the node if absent.
    pub fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(idx) = self.index.get(name) {
            return *idx;
        }
        let idx = self.graph.add_node(Variable {
            name: name.to_string(),
        });
        self.index.insert(name.to_string(), idx);
        idx
    }

    /// Add an edge with empty attributes. See [`Self::add_edge_with_attrs`].
    pub fn add_edge(&mut self, source: &str, target: &str) {
        self.add_edge_with_attrs(source, target, EdgeAttrs::new());
    }

    /// Add an edge, inserting endpoints as needed. If the edge already exists
    /// (in either orientation for undirected graphs), its attributes are
    /// replaced.
    pub fn add_edge_with_attrs(&mut self, source: &str, target: &str, attrs: EdgeAttrs) {
        let a = self.ensure_node(source);
        let b = self.ensure_node(target);
        if self.kind() == GraphKind::Undirected {
            if let Some(existing) = self.graph.find_edge(b, a) {
                if let Some(weight) = self.graph.edge_weight_mut(existing) {
                    *weight = attrs;
                }
                return;
            }
        }
        self.graph.update_edge(a, b, attrs);
    }

    /// Convenience for bulk construction from name pairs.
    pub fn add_edges_from<'a, I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (source, target) in edges {
            self.add_edge(source, target);
        }
    }

    /// Whether an edge source→target exists. Undirected graphs also match the
    /// stored reverse arc.
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        let (Some(a), Some(b)) = (self.get_node(source), self.get_node(target)) else {
            return false;
        };
        if self.graph.find_edge(a, b).is_some() {
            return true;
        }
        self.kind() == GraphKind::Undirected && self.graph.find_edge(b, a).is_some()
    }

    /// Attributes of the edge source→target, if present.
    pub fn edge_attrs(&self, source: &str, target: &str) -> Option<&EdgeAttrs> {
        let (a, b) = (self.get_node(source)?, self.get_node(target)?);
        let edge = self.graph.find_edge(a, b).or_else(|| {
            if self.kind() == GraphKind::Undirected {
                self.graph.find_edge(b, a)
            } else {
                None
            }
        })?;
        self.graph.edge_weight(edge)
    }

    /// Number of incoming edges. Absent nodes have degree 0.
    pub fn in_degree(&self, name: &str) -> usize {
        self.degree(name, Direction::Incoming)
    }

    /// Number of outgoing edges. Absent nodes have degree 0.
    pub fn out_degree(&self, name: &str) -> usize {
        self.degree(name, Direction::Outgoing)
    }

    fn degree(&self, name: &str, dir: Direction) -> usize {
        match self.get_node(name) {
            Some(idx) => self.graph.edges_directed(idx, dir).count(),
            None => 0,
        }
    }

    /// Names of direct successors (one hop along outgoing edges). For
    /// undirected graphs this is all neighbors. Absent nodes have none.
    pub fn successors(&self, name: &str) -> Vec<&str> {
        let Some(idx) = self.get_node(name) else {
            return Vec::new();
        };
        let neighbors: Vec<NodeIndex> = match self.kind() {
            GraphKind::Directed => self
                .graph
                .neighbors_directed(idx, Direction::Outgoing)
                .collect(),
            GraphKind::Undirected => self.graph.neighbors_undirected(idx).collect(),
        };
        neighbors
            .into_iter()
            .filter_map(|n| self.graph.node_weight(n).map(|v| v.name.as_str()))
            .collect()
    }

    /// All node names, in graph storage order.
    pub fn node_names(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx).map(|v| v.name.as_str()))
            .collect()
    }

    /// All edges as (source, target, attrs) triples, oriented as stored.
    pub fn edge_list(&self) -> Vec<(&str, &str, &EdgeAttrs)> {
        use petgraph::visit::EdgeRef;
        self.graph
            .edge_references()
            .filter_map(|e| {
                let source = self.graph.node_weight(e.source())?;
                let target = self.graph.node_weight(e.target())?;
                Some((source.name.as_str(), target.name.as_str(), e.weight()))
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
