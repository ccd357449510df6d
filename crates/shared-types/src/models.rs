use serde::{Deserialize, Serialize};

/// Auction user role controlling dashboard and route access.
///
/// - `Admin` — oversees every requirement and bid across the platform.
/// - `Supplier` — browses open requirements and places bids.
/// - `Buyer` — posts product requirements and reviews incoming bids.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Supplier,
    Buyer,
}

impl UserRole {
    /// Lowercase string used in display and serialized payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Supplier => "supplier",
            UserRole::Buyer => "buyer",
        }
    }

    /// Parse a role string. The role set is closed, so unknown values are
    /// `None` rather than defaulting to a catch-all role.
    pub fn parse_role(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(UserRole::Admin),
            "supplier" => Some(UserRole::Supplier),
            "buyer" => Some(UserRole::Buyer),
            _ => None,
        }
    }

    /// The role's home path. This is the one place the role→path mapping
    /// lives; the route guard and every post-login redirect go through it.
    pub fn home_path(&self) -> &'static str {
        match self {
            UserRole::Admin => "/admin",
            UserRole::Supplier => "/supplier",
            UserRole::Buyer => "/buyer",
        }
    }
}

/// Authenticated user held in the auth context for the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
}
