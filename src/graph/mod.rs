//! Knowledge graph module: typed directed multigraph over legislative
//! entities, plus the builder that repopulates it from the relational source.
//!
//! The graph itself is a plain in-memory structure; rebuilds construct a
//! fresh instance and publish it atomically through [`SharedGraph`] so
//! readers never observe a half-built graph.

mod build;
mod store;

pub use build::{build_graph, BuildSummary};
pub use store::GraphStore;

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Kind of entity a node represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Member,
    Bill,
    Committee,
    Lobbyist,
    Donor,
    District,
}

/// Kind of relationship an edge represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    /// member -> bill
    Sponsors,
    /// member -> bill
    Cosponsors,
    /// member -> bill
    VotedOn,
    /// member -> committee
    MemberOf,
    /// member -> committee
    Chairs,
    /// lobbyist -> bill
    LobbiedFor,
    /// donor -> member
    DonatedTo,
    /// member -> district
    Represents,
    /// bill -> committee
    ReferredTo,
    /// bill -> bill
    Amends,
}

/// Type-specific node attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeAttrs {
    Member(MemberAttrs),
    Bill(BillAttrs),
    Committee(CommitteeAttrs),
    Donor(DonorAttrs),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberAttrs {
    pub bioguide_id: String,
    pub party: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub chamber: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillAttrs {
    pub bill_id: String,
    pub bill_type: Option<String>,
    pub bill_number: Option<String>,
    pub congress: Option<i64>,
    pub policy_area: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitteeAttrs {
    pub committee_code: String,
    pub chamber: Option<String>,
    pub committee_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorAttrs {
    pub contributor_type: Option<String>,
}

/// Aggregated contribution data attached to donated_to edges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationAttrs {
    pub total_amount: f64,
    pub count: i64,
}

/// A node in the knowledge graph. IDs are namespaced by type,
/// e.g. `member:A000360`, so natural keys never collide across types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub label: String,
    #[serde(rename = "data", skip_serializing_if = "Option::is_none")]
    pub attrs: Option<NodeAttrs>,
}

/// A directed, typed, weighted edge (source --type--> target).
/// Weight encodes relationship strength; its scale is type-specific.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
    pub weight: f64,
    #[serde(rename = "data", skip_serializing_if = "Option::is_none")]
    pub attrs: Option<DonationAttrs>,
}

impl GraphEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, edge_type: EdgeType, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            edge_type,
            weight,
            attrs: None,
        }
    }
}

/// Shortest path between two nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResult {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub length: usize,
}

/// A node reachable from a query node, with one representative edge path
/// and the depth at which BFS first discovered it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionResult {
    pub node: GraphNode,
    pub edges: Vec<GraphEdge>,
    pub depth: usize,
}

/// Influence score with itemized factors, bounded to [0, 100]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluenceScore {
    pub node_id: String,
    pub score: u32,
    pub factors: Vec<InfluenceFactor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluenceFactor {
    pub factor: String,
    pub value: f64,
}

/// Aggregate graph counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub nodes_by_type: std::collections::BTreeMap<NodeType, usize>,
    pub edges_by_type: std::collections::BTreeMap<EdgeType, usize>,
}

/// Shared handle to the current graph snapshot.
///
/// Readers take a cheap `Arc` clone and run queries against an immutable
/// snapshot; a rebuild publishes a whole new store under the write lock.
/// In-flight readers keep the snapshot they started with.
#[derive(Clone)]
pub struct SharedGraph {
    inner: Arc<RwLock<Arc<GraphStore>>>,
}

impl SharedGraph {
    pub fn new(store: GraphStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(store))),
        }
    }

    /// Current snapshot; never blocks on a rebuild in progress
    pub fn snapshot(&self) -> Arc<GraphStore> {
        self.inner.read().expect("graph lock poisoned").clone()
    }

    /// Atomically replace the published graph
    pub fn publish(&self, store: GraphStore) {
        *self.inner.write().expect("graph lock poisoned") = Arc::new(store);
    }
}

impl Default for SharedGraph {
    fn default() -> Self {
        Self::new(GraphStore::new())
    }
}
