use pretty_assertions::assert_eq;
use shared_types::auction::{bids_for_requirement, lowest_bid, requirements_created_by};

use crate::common::{bid, requirement};

#[test]
fn lowest_bid_is_the_minimum_amount() {
    let req = requirement(2, 0, 7);
    let bids = vec![
        bid(req.id, 4, 21_400.0, 1),
        bid(req.id, 5, 19_850.0, 2),
        bid(req.id, 4, 20_100.0, 3),
    ];

    let lowest = lowest_bid(&bids, req.id).unwrap();
    assert_eq!(lowest.amount, 19_850.0);
    assert_eq!(lowest.supplier_id, 5);
}

#[test]
fn lowest_bid_tie_resolves_to_the_earliest_placed() {
    let req = requirement(2, 0, 7);
    let bids = vec![
        bid(req.id, 4, 20_000.0, 1),
        bid(req.id, 5, 20_000.0, 2),
    ];

    assert_eq!(lowest_bid(&bids, req.id).unwrap().supplier_id, 4);
}

#[test]
fn lowest_bid_ignores_other_requirements() {
    let mine = requirement(2, 0, 7);
    let other = requirement(3, 0, 7);
    let bids = vec![
        bid(other.id, 4, 1.0, 1),
        bid(mine.id, 5, 19_850.0, 2),
    ];

    assert_eq!(lowest_bid(&bids, mine.id).unwrap().amount, 19_850.0);
    assert!(lowest_bid(&bids, requirement(2, 0, 7).id).is_none());
}

#[test]
fn bids_for_requirement_preserves_placement_order() {
    let req = requirement(2, 0, 7);
    let bids = vec![
        bid(req.id, 4, 21_400.0, 1),
        bid(req.id, 5, 19_850.0, 2),
        bid(req.id, 4, 20_100.0, 3),
    ];

    let linked = bids_for_requirement(&bids, req.id);
    let amounts: Vec<f64> = linked.iter().map(|b| b.amount).collect();
    assert_eq!(amounts, vec![21_400.0, 19_850.0, 20_100.0]);
}

#[test]
fn buyers_only_see_their_own_requirements() {
    let requirements = vec![
        requirement(2, 0, 7),
        requirement(3, 0, 7),
        requirement(2, 1, 9),
    ];

    let acme = requirements_created_by(&requirements, 2);
    assert_eq!(acme.len(), 2);
    assert!(acme.iter().all(|r| r.created_by == 2));

    let north = requirements_created_by(&requirements, 3);
    assert_eq!(north.len(), 1);

    assert!(requirements_created_by(&requirements, 99).is_empty());
}
