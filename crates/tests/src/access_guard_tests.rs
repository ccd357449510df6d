use pretty_assertions::assert_eq;
use shared_types::{guard_decision, GuardDecision, UserRole};

const ALL_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Supplier, UserRole::Buyer];

#[test]
fn signed_out_visitors_are_sent_to_login() {
    for role in ALL_ROLES {
        assert_eq!(
            guard_decision(None, &[*role]),
            GuardDecision::RedirectToLogin
        );
    }
}

#[test]
fn matching_role_renders() {
    for role in ALL_ROLES {
        assert_eq!(guard_decision(Some(*role), &[*role]), GuardDecision::Render);
    }
}

#[test]
fn mismatched_role_is_sent_to_its_own_home() {
    assert_eq!(
        guard_decision(Some(UserRole::Buyer), &[UserRole::Admin]),
        GuardDecision::RedirectToRoleHome(UserRole::Buyer)
    );
    assert_eq!(
        guard_decision(Some(UserRole::Supplier), &[UserRole::Admin]),
        GuardDecision::RedirectToRoleHome(UserRole::Supplier)
    );
    assert_eq!(
        guard_decision(Some(UserRole::Admin), &[UserRole::Buyer]),
        GuardDecision::RedirectToRoleHome(UserRole::Admin)
    );
}

#[test]
fn multiple_allowed_roles_accept_each_of_them() {
    let allowed = &[UserRole::Buyer, UserRole::Supplier];
    assert_eq!(
        guard_decision(Some(UserRole::Buyer), allowed),
        GuardDecision::Render
    );
    assert_eq!(
        guard_decision(Some(UserRole::Supplier), allowed),
        GuardDecision::Render
    );
    assert_eq!(
        guard_decision(Some(UserRole::Admin), allowed),
        GuardDecision::RedirectToRoleHome(UserRole::Admin)
    );
}

#[test]
fn empty_allowed_set_never_renders() {
    assert_eq!(guard_decision(None, &[]), GuardDecision::RedirectToLogin);
    for role in ALL_ROLES {
        assert_eq!(
            guard_decision(Some(*role), &[]),
            GuardDecision::RedirectToRoleHome(*role)
        );
    }
}

#[test]
fn each_role_has_a_distinct_home_path() {
    assert_eq!(UserRole::Admin.home_path(), "/admin");
    assert_eq!(UserRole::Supplier.home_path(), "/supplier");
    assert_eq!(UserRole::Buyer.home_path(), "/buyer");
}
