use crate::models::UserRole;

/// Outcome of the route guard's decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// The user may see the protected content.
    Render,
    /// No authenticated user — send them to the login page, preserving the
    /// originating path for post-login return.
    RedirectToLogin,
    /// Authenticated, but the role is not in the allowed set — send them to
    /// their own role's home.
    RedirectToRoleHome(UserRole),
}

/// Decide whether a user may access a route restricted to `allowed` roles.
///
/// Pure decision table over (authenticated?, role, allowed-set); the guard
/// component and any redirect effect must both go through this function so
/// the mapping cannot drift.
pub fn guard_decision(role: Option<UserRole>, allowed: &[UserRole]) -> GuardDecision {
    match role {
        None => GuardDecision::RedirectToLogin,
        Some(role) if allowed.contains(&role) => GuardDecision::Render,
        Some(role) => GuardDecision::RedirectToRoleHome(role),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROLES: [UserRole; 3] = [UserRole::Admin, UserRole::Supplier, UserRole::Buyer];

    #[test]
    fn unauthenticated_always_redirects_to_login() {
        for role in ALL_ROLES {
            assert_eq!(guard_decision(None, &[role]), GuardDecision::RedirectToLogin);
        }
        assert_eq!(guard_decision(None, &[]), GuardDecision::RedirectToLogin);
        assert_eq!(guard_decision(None, &ALL_ROLES), GuardDecision::RedirectToLogin);
    }

    #[test]
    fn allowed_role_renders_children() {
        for role in ALL_ROLES {
            assert_eq!(guard_decision(Some(role), &[role]), GuardDecision::Render);
            assert_eq!(guard_decision(Some(role), &ALL_ROLES), GuardDecision::Render);
        }
    }

    #[test]
    fn disallowed_role_redirects_to_its_own_home() {
        for role in ALL_ROLES {
            for other in ALL_ROLES {
                if role == other {
                    continue;
                }
                assert_eq!(
                    guard_decision(Some(role), &[other]),
                    GuardDecision::RedirectToRoleHome(role)
                );
            }
        }
    }

    #[test]
    fn empty_allowed_set_redirects_every_role_home() {
        for role in ALL_ROLES {
            assert_eq!(
                guard_decision(Some(role), &[]),
                GuardDecision::RedirectToRoleHome(role)
            );
        }
    }
}
