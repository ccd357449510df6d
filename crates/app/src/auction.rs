use chrono::{Duration, Utc};
use dioxus::prelude::*;
use shared_types::{
    auction, AppError, AuthUser, Bid, CreateRequirementRequest, PlaceBidRequest, Requirement,
};
use tracing::{info, warn};
use uuid::Uuid;

/// In-memory auction store shared across all routes.
///
/// Requirements and bids live in two flat signals; everything the dashboards
/// show is derived from them at render time. Statuses are never stored.
#[derive(Clone, Copy)]
pub struct AuctionState {
    pub requirements: Signal<Vec<Requirement>>,
    pub bids: Signal<Vec<Bid>>,
}

impl AuctionState {
    /// Store pre-populated with demo data. Windows are placed relative to
    /// startup time so each status bucket is represented on first load.
    pub fn seeded() -> Self {
        let now = Utc::now();

        let fasteners = Requirement {
            id: Uuid::new_v4(),
            product_name: "Stainless steel fasteners M8".into(),
            hs_code: "7318.15".into(),
            moq: 50_000,
            start_time: now - Duration::days(3),
            end_time: now + Duration::days(4),
            created_by: 2,
            created_at: now - Duration::days(5),
        };
        let tiles = Requirement {
            id: Uuid::new_v4(),
            product_name: "Glazed ceramic floor tiles 60x60".into(),
            hs_code: "6907.21".into(),
            moq: 12_000,
            start_time: now + Duration::days(2),
            end_time: now + Duration::days(9),
            created_by: 2,
            created_at: now - Duration::days(1),
        };
        let cable = Requirement {
            id: Uuid::new_v4(),
            product_name: "Copper wiring cable 2.5mm".into(),
            hs_code: "8544.49".into(),
            moq: 8_000,
            start_time: now - Duration::days(14),
            end_time: now - Duration::days(7),
            created_by: 3,
            created_at: now - Duration::days(16),
        };

        let bids = vec![
            Bid {
                id: Uuid::new_v4(),
                requirement_id: fasteners.id,
                supplier_id: 4,
                supplier_name: "Shenzhen Parts Ltd".into(),
                amount: 21_400.0,
                created_at: now - Duration::days(2),
            },
            Bid {
                id: Uuid::new_v4(),
                requirement_id: fasteners.id,
                supplier_id: 5,
                supplier_name: "Mumbai Metals".into(),
                amount: 19_850.0,
                created_at: now - Duration::days(1),
            },
            Bid {
                id: Uuid::new_v4(),
                requirement_id: cable.id,
                supplier_id: 5,
                supplier_name: "Mumbai Metals".into(),
                amount: 33_200.0,
                created_at: now - Duration::days(10),
            },
        ];

        Self {
            requirements: Signal::new(vec![fasteners, tiles, cable]),
            bids: Signal::new(bids),
        }
    }

    pub fn requirement(&self, id: Uuid) -> Option<Requirement> {
        self.requirements.read().iter().find(|r| r.id == id).cloned()
    }

    /// All bids placed against `id`, oldest first.
    pub fn requirement_bids(&self, id: Uuid) -> Vec<Bid> {
        let bids = self.bids.read();
        auction::bids_for_requirement(&bids, id)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Current best (lowest) bid for `id`.
    pub fn lowest_bid(&self, id: Uuid) -> Option<Bid> {
        let bids = self.bids.read();
        auction::lowest_bid(&bids, id).cloned()
    }

    /// Requirements the given buyer posted.
    pub fn requirements_for(&self, buyer_id: i64) -> Vec<Requirement> {
        let requirements = self.requirements.read();
        auction::requirements_created_by(&requirements, buyer_id)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Bids the given supplier has placed, oldest first.
    pub fn bids_by_supplier(&self, supplier_id: i64) -> Vec<Bid> {
        self.bids
            .read()
            .iter()
            .filter(|b| b.supplier_id == supplier_id)
            .cloned()
            .collect()
    }

    /// Validate and append a new requirement owned by `user`.
    pub fn add_requirement(
        &mut self,
        request: CreateRequirementRequest,
        user: &AuthUser,
    ) -> Result<Requirement, AppError> {
        request.validate()?;

        let requirement = Requirement {
            id: Uuid::new_v4(),
            product_name: request.product_name.trim().to_string(),
            hs_code: request.hs_code.trim().to_string(),
            moq: request.moq,
            start_time: request.start_time,
            end_time: request.end_time,
            created_by: user.id,
            created_at: Utc::now(),
        };
        info!(
            requirement_id = %requirement.id,
            buyer_id = user.id,
            "requirement posted"
        );
        self.requirements.write().push(requirement.clone());
        Ok(requirement)
    }

    /// Validate and record a bid from `user` against an open requirement.
    ///
    /// Rejects bids on requirements that are missing or outside their
    /// bidding window.
    pub fn place_bid(&mut self, request: PlaceBidRequest, user: &AuthUser) -> Result<Bid, AppError> {
        request.validate()?;

        let requirement = self
            .requirement(request.requirement_id)
            .ok_or_else(|| AppError::not_found("Requirement not found"))?;

        if let Err(e) = auction::ensure_bidding_open(&requirement, Utc::now()) {
            warn!(
                requirement_id = %requirement.id,
                supplier_id = user.id,
                "bid rejected outside bidding window"
            );
            return Err(e);
        }

        let bid = Bid {
            id: Uuid::new_v4(),
            requirement_id: requirement.id,
            supplier_id: user.id,
            supplier_name: user.display_name.clone(),
            amount: request.amount,
            created_at: Utc::now(),
        };
        info!(
            bid_id = %bid.id,
            requirement_id = %requirement.id,
            supplier_id = user.id,
            amount = bid.amount,
            "bid placed"
        );
        self.bids.write().push(bid.clone());
        Ok(bid)
    }
}

/// Hook to access the auction store.
pub fn use_auction() -> AuctionState {
    use_context::<AuctionState>()
}
