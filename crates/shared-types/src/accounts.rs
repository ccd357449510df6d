use crate::error::AppError;
use crate::models::{AuthUser, UserRole};

/// A demo account in the in-memory directory backing the mocked login flow.
pub struct DemoAccount {
    pub id: i64,
    pub email: &'static str,
    pub password: &'static str,
    pub display_name: &'static str,
    pub role: UserRole,
}

/// The account directory. Compiled in; there is no registration path.
pub const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        id: 1,
        email: "admin@reverseauction.test",
        password: "admin-sesame",
        display_name: "Platform Admin",
        role: UserRole::Admin,
    },
    DemoAccount {
        id: 2,
        email: "buyer@acmeimports.test",
        password: "buyer-sesame",
        display_name: "Acme Imports",
        role: UserRole::Buyer,
    },
    DemoAccount {
        id: 3,
        email: "buyer@northtrade.test",
        password: "buyer-sesame",
        display_name: "North Trade Co",
        role: UserRole::Buyer,
    },
    DemoAccount {
        id: 4,
        email: "supplier@shenzhenparts.test",
        password: "supplier-sesame",
        display_name: "Shenzhen Parts Ltd",
        role: UserRole::Supplier,
    },
    DemoAccount {
        id: 5,
        email: "supplier@mumbaimetals.test",
        password: "supplier-sesame",
        display_name: "Mumbai Metals",
        role: UserRole::Supplier,
    },
];

/// Check credentials against the directory.
///
/// Email matches case-insensitively, password exactly, and the account's role
/// must equal the role the form asked for. Every failure collapses into a
/// single `Unauthorized` so the forms cannot leak which part was wrong.
pub fn authenticate(email: &str, password: &str, role: UserRole) -> Result<AuthUser, AppError> {
    let email = email.trim().to_lowercase();
    DEMO_ACCOUNTS
        .iter()
        .find(|a| a.email == email && a.password == password && a.role == role)
        .map(|a| AuthUser {
            id: a.id,
            email: a.email.to_string(),
            display_name: a.display_name.to_string(),
            role: a.role,
        })
        .ok_or_else(|| AppError::unauthorized("Invalid credentials"))
}
