//! Graph ingestion: translates relational batches into graph nodes and edges.
//!
//! Two sequential phases. Phase 1 creates entity nodes (members, bills,
//! committees); Phase 2 creates relationship edges and lazily-created donor
//! nodes, and requires Phase 1 to have completed. Fetches within a phase run
//! concurrently. A dangling record (e.g. a contribution to a member who is
//! not current) is skipped and counted, never fatal; a failed read aborts the
//! whole rebuild.

use std::time::Instant;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::GraphConfig;
use crate::db::records::{
    fetch_committee_memberships, fetch_committees, fetch_cosponsorships, fetch_current_members,
    fetch_recent_bills, fetch_sponsorships, fetch_top_contributions,
};
use crate::db::Db;
use crate::error::Result;
use crate::graph::{
    BillAttrs, CommitteeAttrs, DonationAttrs, DonorAttrs, EdgeType, GraphEdge, GraphNode,
    GraphStore, MemberAttrs, NodeAttrs, NodeType,
};

/// Edge weights per relationship kind
const SPONSOR_WEIGHT: f64 = 3.0;
const ORIGINAL_COSPONSOR_WEIGHT: f64 = 2.0;
const COSPONSOR_WEIGHT: f64 = 1.0;
const CHAIR_WEIGHT: f64 = 5.0;
const RANKING_MEMBER_WEIGHT: f64 = 3.0;
const COMMITTEE_MEMBER_WEIGHT: f64 = 1.0;
/// Donation weight buckets: one point per $10k of total, capped at 5
const DONATION_BUCKET: f64 = 10_000.0;
const DONATION_WEIGHT_CAP: f64 = 5.0;

/// Outcome of a graph rebuild
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSummary {
    pub nodes: usize,
    pub edges: usize,
    pub duration_ms: u64,
    /// Records dropped for dangling references
    pub skipped: usize,
    pub built_at: DateTime<Utc>,
}

/// Build a fresh graph from the relational source.
///
/// Returns the populated store without publishing it; the caller swaps it
/// into the shared handle, so the previously published graph stays readable
/// for the whole rebuild and survives untouched if this fails.
pub async fn build_graph(db: &Db, config: &GraphConfig) -> Result<(GraphStore, BuildSummary)> {
    let start = Instant::now();
    let mut store = GraphStore::new();
    let mut skipped = 0usize;

    log::info!("Building knowledge graph from database...");

    // Phase 1: entity nodes
    let (members, bills, committees) = tokio::try_join!(
        fetch_current_members(db),
        fetch_recent_bills(db, config.bill_limit),
        fetch_committees(db),
    )?;

    for m in &members {
        store.add_node(GraphNode {
            id: format!("member:{}", m.bioguide_id),
            node_type: NodeType::Member,
            label: m.full_name.clone(),
            attrs: Some(NodeAttrs::Member(MemberAttrs {
                bioguide_id: m.bioguide_id.clone(),
                party: m.party.clone(),
                state: m.state.clone(),
                district: m.district.clone(),
                chamber: m.chamber.clone(),
            })),
        });
    }
    log::info!("Ingested {} member nodes", members.len());

    for b in &bills {
        let label = b.title.clone().unwrap_or_else(|| {
            format!(
                "{}{}",
                b.bill_type.as_deref().unwrap_or(""),
                b.bill_number.as_deref().unwrap_or("")
            )
        });
        store.add_node(GraphNode {
            id: format!("bill:{}", b.bill_id),
            node_type: NodeType::Bill,
            label,
            attrs: Some(NodeAttrs::Bill(BillAttrs {
                bill_id: b.bill_id.clone(),
                bill_type: b.bill_type.clone(),
                bill_number: b.bill_number.clone(),
                congress: b.congress,
                policy_area: b.policy_area.clone(),
            })),
        });
    }
    log::info!("Ingested {} bill nodes", bills.len());

    for c in &committees {
        store.add_node(GraphNode {
            id: format!("committee:{}", c.committee_code),
            node_type: NodeType::Committee,
            label: c.name.clone(),
            attrs: Some(NodeAttrs::Committee(CommitteeAttrs {
                committee_code: c.committee_code.clone(),
                chamber: c.chamber.clone(),
                committee_type: c.committee_type.clone(),
            })),
        });
    }
    log::info!("Ingested {} committee nodes", committees.len());

    // Phase 2: relationship edges; all referenced nodes must exist by now
    let (sponsorships, cosponsorships, memberships, contributions) = tokio::try_join!(
        fetch_sponsorships(db, config.bill_limit),
        fetch_cosponsorships(db, config.cosponsor_limit),
        fetch_committee_memberships(db),
        fetch_top_contributions(db, config.contribution_limit),
    )?;

    let mut edge_count = 0usize;
    for s in &sponsorships {
        let source = format!("member:{}", s.sponsor_bioguide_id);
        let target = format!("bill:{}", s.bill_id);
        if store.node(&source).is_none() || store.node(&target).is_none() {
            skipped += 1;
            continue;
        }
        store.add_edge(GraphEdge::new(source, target, EdgeType::Sponsors, SPONSOR_WEIGHT));
        edge_count += 1;
    }
    log::info!("Ingested {} sponsorship edges", edge_count);

    edge_count = 0;
    for c in &cosponsorships {
        let source = format!("member:{}", c.member_bioguide_id);
        let target = format!("bill:{}", c.bill_id);
        if store.node(&source).is_none() || store.node(&target).is_none() {
            skipped += 1;
            continue;
        }
        let weight = if c.is_original_cosponsor {
            ORIGINAL_COSPONSOR_WEIGHT
        } else {
            COSPONSOR_WEIGHT
        };
        store.add_edge(GraphEdge::new(source, target, EdgeType::Cosponsors, weight));
        edge_count += 1;
    }
    log::info!("Ingested {} cosponsorship edges", edge_count);

    edge_count = 0;
    for m in &memberships {
        let source = format!("member:{}", m.member_bioguide_id);
        let target = format!("committee:{}", m.committee_code);
        if store.node(&source).is_none() || store.node(&target).is_none() {
            skipped += 1;
            continue;
        }
        let (edge_type, weight) = if m.is_chair {
            (EdgeType::Chairs, CHAIR_WEIGHT)
        } else if m.is_ranking_member {
            (EdgeType::MemberOf, RANKING_MEMBER_WEIGHT)
        } else {
            (EdgeType::MemberOf, COMMITTEE_MEMBER_WEIGHT)
        };
        store.add_edge(GraphEdge::new(source, target, edge_type, weight));
        edge_count += 1;
    }
    log::info!("Ingested {} committee membership edges", edge_count);

    edge_count = 0;
    let mut donor_count = 0usize;
    let slug_re = Regex::new(r"[^a-zA-Z0-9]").expect("Invalid regex pattern");
    for d in &contributions {
        let member_id = format!("member:{}", d.member_bioguide_id);
        if store.node(&member_id).is_none() {
            skipped += 1;
            continue;
        }

        let donor_id = format!("donor:{}", donor_slug(&slug_re, &d.contributor_name));
        if store.node(&donor_id).is_none() {
            store.add_node(GraphNode {
                id: donor_id.clone(),
                node_type: NodeType::Donor,
                label: d.contributor_name.clone(),
                attrs: Some(NodeAttrs::Donor(DonorAttrs {
                    contributor_type: d.contributor_type.clone(),
                })),
            });
            donor_count += 1;
        }

        let weight = (d.total_amount / DONATION_BUCKET).ceil().min(DONATION_WEIGHT_CAP);
        let mut edge = GraphEdge::new(donor_id, member_id, EdgeType::DonatedTo, weight);
        edge.attrs = Some(DonationAttrs {
            total_amount: d.total_amount,
            count: d.count,
        });
        store.add_edge(edge);
        edge_count += 1;
    }
    log::info!(
        "Ingested {} donor nodes and {} contribution edges",
        donor_count,
        edge_count
    );

    let duration_ms = start.elapsed().as_millis() as u64;
    let summary = BuildSummary {
        nodes: store.node_count(),
        edges: store.edge_count(),
        duration_ms,
        skipped,
        built_at: Utc::now(),
    };

    log::info!(
        "Graph built: {} nodes, {} edges in {}ms ({} records skipped)",
        summary.nodes,
        summary.edges,
        summary.duration_ms,
        summary.skipped
    );

    Ok((store, summary))
}

/// Sanitize a contributor display name into a stable donor ID slug:
/// every non-alphanumeric character becomes `_`, lowercased
fn donor_slug(re: &Regex, name: &str) -> String {
    re.replace_all(name, "_").to_lowercase()
}
