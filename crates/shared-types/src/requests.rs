use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::error::AppError;

/// Request to post a new product requirement (buyer form payload).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateRequirementRequest {
    pub product_name: String,
    pub hs_code: String,
    pub moq: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl CreateRequirementRequest {
    /// Field-level validation; errors keyed by field name for inline display.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut field_errors = HashMap::new();
        if self.product_name.trim().is_empty() {
            field_errors.insert("product_name".into(), "Product name is required".into());
        }
        if self.hs_code.trim().is_empty() {
            field_errors.insert("hs_code".into(), "HS code is required".into());
        }
        if self.moq < 1 {
            field_errors.insert("moq".into(), "MOQ must be at least 1".into());
        }
        if self.end_time <= self.start_time {
            field_errors.insert("end_time".into(), "End time must be after start time".into());
        }

        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Validation failed", field_errors))
        }
    }
}

/// Request to place a bid against a requirement (supplier form payload).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceBidRequest {
    pub requirement_id: Uuid,
    pub amount: f64,
}

impl PlaceBidRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut field_errors = HashMap::new();
        if !self.amount.is_finite() || self.amount <= 0.0 {
            field_errors.insert("amount".into(), "Bid amount must be positive".into());
        }

        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Validation failed", field_errors))
        }
    }
}
