//! Typed read contract against the relational source of truth.
//!
//! Each function fetches one bounded batch of records for the graph builder.
//! Row shapes mirror the sync pipeline's tables; the builder translates them
//! into graph nodes and edges.

use crate::db::Db;
use crate::error::{LegisgraphError, Result};

/// A current member of Congress
#[derive(Debug, Clone)]
pub struct MemberRecord {
    pub bioguide_id: String,
    pub full_name: String,
    pub party: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub chamber: Option<String>,
}

/// A bill, ordered by most recent action
#[derive(Debug, Clone)]
pub struct BillRecord {
    pub bill_id: String,
    pub title: Option<String>,
    pub bill_type: Option<String>,
    pub bill_number: Option<String>,
    pub congress: Option<i64>,
    pub policy_area: Option<String>,
}

/// A congressional committee
#[derive(Debug, Clone)]
pub struct CommitteeRecord {
    pub committee_code: String,
    pub name: String,
    pub chamber: Option<String>,
    pub committee_type: Option<String>,
}

/// A bill's primary sponsor
#[derive(Debug, Clone)]
pub struct SponsorshipRecord {
    pub bill_id: String,
    pub sponsor_bioguide_id: String,
}

/// A cosponsorship row
#[derive(Debug, Clone)]
pub struct CosponsorshipRecord {
    pub bill_id: String,
    pub member_bioguide_id: String,
    pub is_original_cosponsor: bool,
}

/// A committee membership row
#[derive(Debug, Clone)]
pub struct MembershipRecord {
    pub committee_code: String,
    pub member_bioguide_id: String,
    pub is_chair: bool,
    pub is_ranking_member: bool,
}

/// Campaign contributions aggregated by (member, contributor name, type)
#[derive(Debug, Clone)]
pub struct ContributionRecord {
    pub member_bioguide_id: String,
    pub contributor_name: String,
    pub contributor_type: Option<String>,
    pub total_amount: f64,
    pub count: i64,
}

/// Fetch members currently serving
pub async fn fetch_current_members(db: &Db) -> Result<Vec<MemberRecord>> {
    db.with_connection(|conn| {
        let mut stmt = conn.prepare(
            "SELECT bioguide_id, full_name, party, state, district, chamber \
             FROM members WHERE current_member = 1",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(MemberRecord {
                    bioguide_id: row.get(0)?,
                    full_name: row.get(1)?,
                    party: row.get(2)?,
                    state: row.get(3)?,
                    district: row.get(4)?,
                    chamber: row.get(5)?,
                })
            })
            .map_err(LegisgraphError::Database)?;
        collect_rows(rows)
    })
    .await
}

/// Fetch the most recently active bills, bounded by `limit`
pub async fn fetch_recent_bills(db: &Db, limit: usize) -> Result<Vec<BillRecord>> {
    db.with_connection(move |conn| {
        let mut stmt = conn.prepare(
            "SELECT bill_id, title, bill_type, bill_number, congress, policy_area \
             FROM bills ORDER BY latest_action_date DESC LIMIT ?1",
        )?;
        let rows = stmt
            .query_map([limit as i64], |row| {
                Ok(BillRecord {
                    bill_id: row.get(0)?,
                    title: row.get(1)?,
                    bill_type: row.get(2)?,
                    bill_number: row.get(3)?,
                    congress: row.get(4)?,
                    policy_area: row.get(5)?,
                })
            })
            .map_err(LegisgraphError::Database)?;
        collect_rows(rows)
    })
    .await
}

/// Fetch all committees
pub async fn fetch_committees(db: &Db) -> Result<Vec<CommitteeRecord>> {
    db.with_connection(|conn| {
        let mut stmt = conn.prepare(
            "SELECT committee_code, name, chamber, committee_type FROM committees",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(CommitteeRecord {
                    committee_code: row.get(0)?,
                    name: row.get(1)?,
                    chamber: row.get(2)?,
                    committee_type: row.get(3)?,
                })
            })
            .map_err(LegisgraphError::Database)?;
        collect_rows(rows)
    })
    .await
}

/// Fetch sponsorships for recently active bills, bounded by `limit`
pub async fn fetch_sponsorships(db: &Db, limit: usize) -> Result<Vec<SponsorshipRecord>> {
    db.with_connection(move |conn| {
        let mut stmt = conn.prepare(
            "SELECT bill_id, sponsor_bioguide_id FROM bills \
             WHERE sponsor_bioguide_id IS NOT NULL \
             ORDER BY latest_action_date DESC LIMIT ?1",
        )?;
        let rows = stmt
            .query_map([limit as i64], |row| {
                Ok(SponsorshipRecord {
                    bill_id: row.get(0)?,
                    sponsor_bioguide_id: row.get(1)?,
                })
            })
            .map_err(LegisgraphError::Database)?;
        collect_rows(rows)
    })
    .await
}

/// Fetch cosponsorship rows, bounded by `limit`
pub async fn fetch_cosponsorships(db: &Db, limit: usize) -> Result<Vec<CosponsorshipRecord>> {
    db.with_connection(move |conn| {
        let mut stmt = conn.prepare(
            "SELECT bill_id, member_bioguide_id, is_original_cosponsor \
             FROM cosponsors LIMIT ?1",
        )?;
        let rows = stmt
            .query_map([limit as i64], |row| {
                Ok(CosponsorshipRecord {
                    bill_id: row.get(0)?,
                    member_bioguide_id: row.get(1)?,
                    is_original_cosponsor: row.get::<_, i64>(2)? != 0,
                })
            })
            .map_err(LegisgraphError::Database)?;
        collect_rows(rows)
    })
    .await
}

/// Fetch all committee membership rows
pub async fn fetch_committee_memberships(db: &Db) -> Result<Vec<MembershipRecord>> {
    db.with_connection(|conn| {
        let mut stmt = conn.prepare(
            "SELECT committee_code, member_bioguide_id, is_chair, is_ranking_member \
             FROM committee_memberships",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(MembershipRecord {
                    committee_code: row.get(0)?,
                    member_bioguide_id: row.get(1)?,
                    is_chair: row.get::<_, i64>(2)? != 0,
                    is_ranking_member: row.get::<_, i64>(3)? != 0,
                })
            })
            .map_err(LegisgraphError::Database)?;
        collect_rows(rows)
    })
    .await
}

/// Fetch top contributions aggregated per (member, contributor name, type),
/// largest totals first, bounded by `limit`
pub async fn fetch_top_contributions(db: &Db, limit: usize) -> Result<Vec<ContributionRecord>> {
    db.with_connection(move |conn| {
        let mut stmt = conn.prepare(
            "SELECT member_bioguide_id, contributor_name, contributor_type, \
                    SUM(amount) AS total_amount, COUNT(*) AS cnt \
             FROM campaign_contributions \
             GROUP BY member_bioguide_id, contributor_name, contributor_type \
             ORDER BY total_amount DESC LIMIT ?1",
        )?;
        let rows = stmt
            .query_map([limit as i64], |row| {
                Ok(ContributionRecord {
                    member_bioguide_id: row.get(0)?,
                    contributor_name: row.get(1)?,
                    contributor_type: row.get(2)?,
                    total_amount: row.get(3)?,
                    count: row.get(4)?,
                })
            })
            .map_err(LegisgraphError::Database)?;
        collect_rows(rows)
    })
    .await
}

fn collect_rows<T>(
    rows: impl Iterator<Item = std::result::Result<T, rusqlite::Error>>,
) -> Result<Vec<T>> {
    let mut out = Vec::new();
    for row in rows {
        out.push(row.map_err(LegisgraphError::Database)?);
    }
    Ok(out)
}
