use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A buyer-authored product request open for supplier bidding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Requirement {
    pub id: Uuid,
    pub product_name: String,
    /// Harmonized System commodity code.
    pub hs_code: String,
    /// Minimum order quantity.
    pub moq: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Id of the buyer who posted the requirement.
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}

impl Requirement {
    /// Status at `now`. Derived on every read, never stored.
    pub fn status_at(&self, now: DateTime<Utc>) -> RequirementStatus {
        RequirementStatus::at(now, self.start_time, self.end_time)
    }
}

/// A supplier's priced offer against a requirement. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bid {
    pub id: Uuid,
    pub requirement_id: Uuid,
    pub supplier_id: i64,
    pub supplier_name: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle phase of a requirement's bidding window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RequirementStatus {
    Upcoming,
    Open,
    Closed,
}

impl RequirementStatus {
    /// Pure function of wall-clock time versus the stored window.
    /// Both boundaries are inclusive: bidding opens at `start` and the last
    /// instant of the window is `end`.
    pub fn at(now: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        if now < start {
            RequirementStatus::Upcoming
        } else if now > end {
            RequirementStatus::Closed
        } else {
            RequirementStatus::Open
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementStatus::Upcoming => "upcoming",
            RequirementStatus::Open => "open",
            RequirementStatus::Closed => "closed",
        }
    }
}

/// All bids linked to `requirement_id`, in insertion order.
pub fn bids_for_requirement(bids: &[Bid], requirement_id: Uuid) -> Vec<&Bid> {
    bids.iter()
        .filter(|b| b.requirement_id == requirement_id)
        .collect()
}

/// The minimum-amount bid for a requirement, or `None` when no bids exist.
/// Ties resolve to the earliest-placed bid.
pub fn lowest_bid(bids: &[Bid], requirement_id: Uuid) -> Option<&Bid> {
    bids.iter()
        .filter(|b| b.requirement_id == requirement_id)
        .fold(None, |lowest: Option<&Bid>, bid| match lowest {
            Some(current) if current.amount <= bid.amount => Some(current),
            _ => Some(bid),
        })
}

/// Gate for bid placement: only requirements currently inside their
/// bidding window accept bids.
pub fn ensure_bidding_open(
    requirement: &Requirement,
    now: DateTime<Utc>,
) -> Result<(), crate::error::AppError> {
    let status = requirement.status_at(now);
    if status == RequirementStatus::Open {
        Ok(())
    } else {
        Err(crate::error::AppError::bad_request(format!(
            "Bidding is not open for this requirement (status: {})",
            status.as_str()
        )))
    }
}

/// Requirements posted by the given buyer, in insertion order.
pub fn requirements_created_by(requirements: &[Requirement], buyer_id: i64) -> Vec<&Requirement> {
    requirements
        .iter()
        .filter(|r| r.created_by == buyer_id)
        .collect()
}
