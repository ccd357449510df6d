use chrono::Duration;
use pretty_assertions::assert_eq;
use shared_types::auction::ensure_bidding_open;
use shared_types::AppErrorKind;

use crate::common::{at_days, requirement};

#[test]
fn open_requirements_accept_bids() {
    let req = requirement(2, 0, 7);
    assert!(ensure_bidding_open(&req, at_days(3)).is_ok());
}

#[test]
fn bids_are_accepted_at_both_window_boundaries() {
    let req = requirement(2, 0, 7);
    assert!(ensure_bidding_open(&req, req.start_time).is_ok());
    assert!(ensure_bidding_open(&req, req.end_time).is_ok());
}

#[test]
fn upcoming_requirements_reject_bids() {
    let req = requirement(2, 2, 9);
    let err = ensure_bidding_open(&req, at_days(0)).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(err.message.contains("upcoming"), "message: {}", err.message);
}

#[test]
fn closed_requirements_reject_bids() {
    let req = requirement(2, -9, -2);
    let err = ensure_bidding_open(&req, at_days(0)).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(err.message.contains("closed"), "message: {}", err.message);
}

#[test]
fn rejection_starts_the_instant_the_window_ends() {
    let req = requirement(2, 0, 7);
    let just_after = req.end_time + Duration::seconds(1);
    assert!(ensure_bidding_open(&req, just_after).is_err());
}
