use pretty_assertions::assert_eq;
use shared_types::{CreateRequirementRequest, PlaceBidRequest};
use uuid::Uuid;

use crate::common::at_days;

fn valid_requirement_request() -> CreateRequirementRequest {
    CreateRequirementRequest {
        product_name: "Glazed ceramic floor tiles 60x60".into(),
        hs_code: "6907.21".into(),
        moq: 12_000,
        start_time: at_days(1),
        end_time: at_days(8),
    }
}

#[test]
fn complete_requirement_request_validates() {
    assert!(valid_requirement_request().validate().is_ok());
}

#[test]
fn every_missing_field_is_reported_at_once() {
    let request = CreateRequirementRequest {
        product_name: "   ".into(),
        hs_code: String::new(),
        moq: 0,
        start_time: at_days(8),
        end_time: at_days(1),
    };

    let err = request.validate().unwrap_err();
    assert_eq!(err.field_errors.len(), 4);
    assert!(err.field_errors.contains_key("product_name"));
    assert!(err.field_errors.contains_key("hs_code"));
    assert!(err.field_errors.contains_key("moq"));
    assert!(err.field_errors.contains_key("end_time"));
}

#[test]
fn window_must_end_after_it_starts() {
    let request = CreateRequirementRequest {
        start_time: at_days(5),
        end_time: at_days(5),
        ..valid_requirement_request()
    };
    let err = request.validate().unwrap_err();
    assert!(err.field_errors.contains_key("end_time"));
}

#[test]
fn bid_amount_must_be_positive_and_finite() {
    for amount in [0.0, -250.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let request = PlaceBidRequest {
            requirement_id: Uuid::new_v4(),
            amount,
        };
        assert!(request.validate().is_err(), "amount {amount} should fail");
    }
}

#[test]
fn ordinary_bid_amount_validates() {
    let request = PlaceBidRequest {
        requirement_id: Uuid::new_v4(),
        amount: 19_850.0,
    };
    assert!(request.validate().is_ok());
}
