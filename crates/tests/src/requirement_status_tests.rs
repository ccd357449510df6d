use chrono::Duration;
use pretty_assertions::assert_eq;
use shared_types::RequirementStatus;

use crate::common::{at_days, requirement};

#[test]
fn status_follows_the_window_over_time() {
    let req = requirement(2, 0, 7);

    assert_eq!(req.status_at(at_days(-1)), RequirementStatus::Upcoming);
    assert_eq!(req.status_at(at_days(3)), RequirementStatus::Open);
    assert_eq!(req.status_at(at_days(8)), RequirementStatus::Closed);
}

#[test]
fn window_boundaries_are_inclusive() {
    let req = requirement(2, 0, 7);

    assert_eq!(req.status_at(req.start_time), RequirementStatus::Open);
    assert_eq!(req.status_at(req.end_time), RequirementStatus::Open);
    assert_eq!(
        req.status_at(req.start_time - Duration::seconds(1)),
        RequirementStatus::Upcoming
    );
    assert_eq!(
        req.status_at(req.end_time + Duration::seconds(1)),
        RequirementStatus::Closed
    );
}

#[test]
fn status_is_derived_not_stored() {
    // The same requirement reports different statuses at different instants.
    let req = requirement(2, 0, 7);
    let before = req.status_at(at_days(-5));
    let during = req.status_at(at_days(1));
    let after = req.status_at(at_days(30));
    assert_eq!(
        (before, during, after),
        (
            RequirementStatus::Upcoming,
            RequirementStatus::Open,
            RequirementStatus::Closed
        )
    );
}
