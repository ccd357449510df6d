use chrono::{DateTime, Duration, TimeZone, Utc};
use shared_types::{Bid, Requirement};
use uuid::Uuid;

/// Fixed reference instant used by all fixtures. Offsets are expressed in
/// days relative to this point so tests never depend on the wall clock.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
}

pub fn at_days(offset: i64) -> DateTime<Utc> {
    base_time() + Duration::days(offset)
}

/// A requirement whose window spans `[start_offset, end_offset]` days
/// around [`base_time`].
pub fn requirement(created_by: i64, start_offset: i64, end_offset: i64) -> Requirement {
    Requirement {
        id: Uuid::new_v4(),
        product_name: "Stainless steel fasteners M8".into(),
        hs_code: "7318.15".into(),
        moq: 50_000,
        start_time: at_days(start_offset),
        end_time: at_days(end_offset),
        created_by,
        created_at: at_days(start_offset - 1),
    }
}

pub fn bid(requirement_id: Uuid, supplier_id: i64, amount: f64, offset: i64) -> Bid {
    Bid {
        id: Uuid::new_v4(),
        requirement_id,
        supplier_id,
        supplier_name: format!("Supplier {supplier_id}"),
        amount,
        created_at: at_days(offset),
    }
}
